use crate::{CanonicalForm, Graph};

/// Compute the canonical form of `g`.
///
/// Every ordering `perm` of the vertices is visited in lexicographic order starting
/// from the identity; each yields the row-major string whose cell `(row, col)` is
/// `adj[perm[row]][perm[col]]` as `'1'` or `'0'`. The smallest such string is returned,
/// so two graphs share a canonical form iff they are isomorphic as directed graphs.
pub fn canonical_form(g: &Graph) -> CanonicalForm {
    let n = g.size();
    let mut best: Option<Vec<u8>> = None;
    let mut candidate = Vec::with_capacity(n * n);

    for_each_permutation(n, &mut |perm| {
        candidate.clear();
        for &row in perm {
            for &col in perm {
                candidate.push(if g.edge_at(row, col) { b'1' } else { b'0' });
            }
        }

        if best.as_ref().map_or(true, |current| candidate < *current) {
            best = Some(candidate.clone());
        }
    });

    best.map(|bytes| bytes.into_iter().map(char::from).collect())
        .unwrap_or_default()
}

/// Rename vertex `i` of `g` to `perm[i]` (0-based), keeping every edge's direction.
///
/// # Panics
///
/// Panics if `perm` is not a permutation of `0..g.size()`.
pub fn relabel(g: &Graph, perm: &[usize]) -> Graph {
    let n = g.size();
    assert_eq!(perm.len(), n, "permutation length must match graph size");
    let mut seen = vec![false; n];
    for &p in perm {
        assert!(p < n && !seen[p], "not a permutation of 0..{}", n);
        seen[p] = true;
    }

    let mut relabeled = Graph::new(n);
    for u in 0..n {
        for v in 0..n {
            if g.edge_at(u, v) {
                relabeled.set_edge_at(perm[u], perm[v]);
            }
        }
    }
    relabeled
}

/// Call `visit` with every permutation of `0..n` in lexicographic order.
///
/// For `n == 0` the single empty permutation is visited.
pub fn for_each_permutation<F>(n: usize, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n];
    backtrack(n, &mut current, &mut used, visit);
}

/// Recursive backtracking, trying the unused vertices in ascending order
fn backtrack<F>(n: usize, current: &mut Vec<usize>, used: &mut [bool], visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if current.len() == n {
        visit(current);
        return;
    }

    for v in 0..n {
        if !used[v] {
            used[v] = true;
            current.push(v);
            backtrack(n, current, used, visit);
            current.pop();
            used[v] = false;
        }
    }
}
