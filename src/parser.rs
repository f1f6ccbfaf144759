use crate::{Graph, MotifError, Result};
use nom::{
    character::complete::{digit1, space0, space1},
    combinator::map_res,
    sequence::{preceded, separated_pair},
    IResult,
};
use std::path::Path;

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Largest vertex id accepted in an edge list; the graph is stored as a dense matrix.
pub const MAX_INPUT_VERTICES: usize = 10_000;

/// Parse the leading `src dst` pair of an edge line; whatever follows is left unparsed
fn parse_edge(input: &str) -> IResult<&str, (usize, usize)> {
    preceded(space0, separated_pair(parse_usize, space1, parse_usize))(input)
}

/// Parse an edge list: one directed edge `src dst` per line, 1-based vertex ids.
///
/// Blank lines and lines starting with `#` are skipped. Text after the pair on a
/// line (weights, trailing comments) is ignored. The graph has as many vertices as
/// the largest id mentioned, which must not exceed [`MAX_INPUT_VERTICES`].
pub fn parse_edge_list(input: &str) -> Result<Graph> {
    let mut edges = Vec::new();
    let mut max_vertex = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (_, (src, dst)) = parse_edge(line).map_err(|e| MotifError::Parse {
            line: line_no,
            message: format!("expected `src dst`, got {:?} ({})", line, e),
        })?;
        if src == 0 || dst == 0 {
            return Err(MotifError::Parse {
                line: line_no,
                message: "vertex ids start at 1".to_string(),
            });
        }
        if src > MAX_INPUT_VERTICES || dst > MAX_INPUT_VERTICES {
            return Err(MotifError::Parse {
                line: line_no,
                message: format!(
                    "vertex id {} exceeds the supported maximum {}",
                    src.max(dst),
                    MAX_INPUT_VERTICES
                ),
            });
        }

        max_vertex = max_vertex.max(src).max(dst);
        edges.push((src, dst));
    }

    Ok(Graph::from_edges(max_vertex, &edges))
}

/// Read and parse an edge list file
pub fn parse_graph_file(path: &Path) -> Result<Graph> {
    let content = std::fs::read_to_string(path).map_err(|e| MotifError::io(path, e))?;
    parse_edge_list(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_graph() {
        let g = parse_edge_list("1 2\n2 3\n3 1\n").unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let input = "# input graph\n\n1 4\r\n  \n\t2  1 \n# trailing\n";
        let g = parse_edge_list(input).unwrap();
        assert_eq!(g.size(), 4);
        assert!(g.has_edge(1, 4));
        assert!(g.has_edge(2, 1));
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_empty_input() {
        let g = parse_edge_list("# nothing here\n").unwrap();
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let g = parse_edge_list("1 2\n1 2\n").unwrap();
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_rejects_malformed_line() {
        for input in ["1 2\n3\n", "1 2\n3 x\n", "x 1\n", "1-2\n"] {
            assert!(
                matches!(parse_edge_list(input), Err(MotifError::Parse { .. })),
                "{:?} should not parse",
                input
            );
        }
        match parse_edge_list("1 2\n3\n") {
            Err(MotifError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ignores_text_after_pair() {
        let g = parse_edge_list("1 2 # edge a\n2 3\n").unwrap();
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);

        let g = parse_edge_list("1 2 1.0\n2 3 0.5\n").unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_rejects_oversized_vertex_id() {
        match parse_edge_list("1 2\n1 4000000000\n") {
            Err(MotifError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("exceeds"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_vertex_zero() {
        match parse_edge_list("0 1\n") {
            Err(MotifError::Parse { line, message }) => {
                assert_eq!(line, 1);
                assert!(message.contains("start at 1"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_round_trip() {
        let g = Graph::from_edges(5, &[(1, 2), (2, 1), (3, 5), (5, 4), (4, 1)]);
        let parsed = parse_edge_list(&g.to_string()).unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_graph_file(Path::new("/nonexistent/input_graph.txt")).unwrap_err();
        assert!(matches!(err, MotifError::Io { .. }));
    }
}
