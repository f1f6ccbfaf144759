use std::collections::VecDeque;
use std::fmt;

/// Represents a directed graph with a boolean adjacency matrix.
///
/// Vertices are 1-based at the public boundary (`add_edge`, `has_edge`, `edges`)
/// and 0-based internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Graph {
    /// Number of vertices
    n: usize,
    /// Adjacency matrix: adj[i][j] is true iff there is an edge i -> j
    adj: Vec<Vec<bool>>,
}

/// Row-major `0`/`1` flattening of the lexicographically smallest relabeled matrix.
pub type CanonicalForm = String;

/// Largest motif size the catalog generator can enumerate (`n * (n - 1)` mask bits must fit in a `u64`).
pub const MAX_MOTIF_SIZE: usize = 8;

/// Motif size ceiling applied by the command line front end unless raised explicitly.
pub const DEFAULT_MOTIF_CEILING: usize = 5;

impl Graph {
    pub fn new(n: usize) -> Self {
        Graph {
            n,
            adj: vec![vec![false; n]; n],
        }
    }

    /// Build a graph of size `n` from 1-based `(src, dst)` pairs.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Graph::new(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Insert the directed edge `u -> v`. Inserting an existing edge is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not in `1..=n`.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.check_vertex(u);
        self.check_vertex(v);
        self.adj[u - 1][v - 1] = true;
    }

    /// # Panics
    ///
    /// Panics if `u` or `v` is not in `1..=n`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.check_vertex(u);
        self.check_vertex(v);
        self.adj[u - 1][v - 1]
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn num_edges(&self) -> usize {
        self.adj.iter().flatten().filter(|&&e| e).count()
    }

    /// Edges as 1-based `(src, dst)` pairs in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|&(_, &e)| e)
                .map(move |(col, _)| (row + 1, col + 1))
        })
    }

    /// Weak connectivity: edges are treated as undirected for this test only.
    ///
    /// Runs a BFS from vertex 0; the empty graph is connected.
    pub fn is_connected(&self) -> bool {
        if self.n == 0 {
            return true;
        }

        let mut visited = vec![false; self.n];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0);

        while let Some(v) = queue.pop_front() {
            for i in 0..self.n {
                if !visited[i] && (self.adj[v][i] || self.adj[i][v]) {
                    visited[i] = true;
                    queue.push_back(i);
                }
            }
        }

        visited.into_iter().all(|v| v)
    }

    /// See [`canonical::canonical_form`].
    pub fn canonical_form(&self) -> CanonicalForm {
        canonical::canonical_form(self)
    }

    /// Graph obtained by renaming vertex `i` to `perm[i]` (both 0-based).
    pub fn relabel(&self, perm: &[usize]) -> Graph {
        canonical::relabel(self, perm)
    }

    /// Induced subgraph on the given 0-based vertices, which must be strictly ascending.
    ///
    /// The selected vertices are renumbered to `0..k` in their given order and every
    /// edge between two of them is copied with its direction.
    pub fn induced_subgraph(&self, vertices: &[usize]) -> Graph {
        let k = vertices.len();
        let mut sub = Graph::new(k);
        for (i, &u) in vertices.iter().enumerate() {
            for (j, &v) in vertices.iter().enumerate() {
                sub.adj[i][j] = self.adj[u][v];
            }
        }
        sub
    }

    pub(crate) fn edge_at(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    pub(crate) fn set_edge_at(&mut self, u: usize, v: usize) {
        self.adj[u][v] = true;
    }

    fn check_vertex(&self, v: usize) {
        assert!(
            (1..=self.n).contains(&v),
            "vertex {} out of range 1..={}",
            v,
            self.n
        );
    }
}

/// Edge list text: one `src dst` line per edge, 1-based.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, v) in self.edges() {
            writeln!(f, "{} {}", u, v)?;
        }
        Ok(())
    }
}

// Module declarations
pub mod canonical;
pub mod catalog;
pub mod census;
pub mod error;
pub mod parser;
pub mod utils;
pub mod writer;

pub use catalog::{generate_catalog, MotifCatalog};
pub use census::{count_motifs, count_motifs_par, MotifCensus};
pub use error::{MotifError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_creation() {
        let g = Graph::new(3);
        assert_eq!(g.size(), 3);
        assert!(!g.has_edge(1, 1));
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_add_edge_is_directed_and_idempotent() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_add_edge_out_of_range() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_has_edge_out_of_range() {
        let g = Graph::new(2);
        g.has_edge(1, 3);
    }

    #[test]
    fn test_edges_row_major() {
        let g = Graph::from_edges(3, &[(3, 1), (1, 3), (2, 1)]);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 3), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_weak_connectivity() {
        assert!(Graph::new(0).is_connected());
        assert!(Graph::new(1).is_connected());
        assert!(!Graph::new(2).is_connected());

        // All edges leave vertex 1: weakly but not strongly connected.
        let star = Graph::from_edges(4, &[(1, 2), (1, 3), (1, 4)]);
        assert!(star.is_connected());

        // Only reachable from vertex 0 by following an edge backwards.
        let inward = Graph::from_edges(3, &[(2, 1), (3, 2)]);
        assert!(inward.is_connected());

        let split = Graph::from_edges(4, &[(1, 2), (3, 4)]);
        assert!(!split.is_connected());
    }

    #[test]
    fn test_induced_subgraph_keeps_direction_and_order() {
        let g = Graph::from_edges(5, &[(1, 3), (3, 5), (5, 1), (2, 4), (4, 5)]);
        let sub = g.induced_subgraph(&[0, 2, 4]);
        assert_eq!(sub.size(), 3);
        assert_eq!(sub.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 1)]);

        let sub = g.induced_subgraph(&[1, 3]);
        assert_eq!(sub.edges().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_display_edge_list() {
        let g = Graph::from_edges(3, &[(2, 3), (1, 2)]);
        assert_eq!(g.to_string(), "1 2\n2 3\n");
    }

    #[test]
    fn test_combinations() {
        assert_eq!(utils::num_combinations(5, 2), 10);
        assert_eq!(utils::num_combinations(4, 4), 1);
        assert_eq!(utils::num_combinations(3, 0), 1);
        assert_eq!(utils::num_combinations(2, 3), 0);
    }
}
