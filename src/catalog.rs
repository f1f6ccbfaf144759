use crate::{utils::ordered_edge_pairs, CanonicalForm, Graph, MAX_MOTIF_SIZE};
use log::{debug, info};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One representative per isomorphism class of weakly connected directed graphs
/// on `n` vertices, with a canonical form -> index lookup.
#[derive(Debug, Clone)]
pub struct MotifCatalog {
    n: usize,
    graphs: Vec<Graph>,
    index: HashMap<CanonicalForm, usize>,
}

impl MotifCatalog {
    /// Enumerate the catalog for motif size `n` by exhaustive edge-set search.
    ///
    /// Every self-loop-free edge set over the `n * (n - 1)` ordered vertex pairs is
    /// encoded as a bit mask. Candidates that are not weakly connected are dropped, the
    /// rest are kept the first time their canonical form is seen. Entries are in order
    /// of first discovery, which is deterministic.
    ///
    /// The empty edge set is included so that `n == 1` yields the isolated vertex;
    /// `n == 0` yields an empty catalog.
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_MOTIF_SIZE`.
    pub fn generate(n: usize) -> Self {
        assert!(
            n <= MAX_MOTIF_SIZE,
            "motif size {} exceeds the enumerable maximum {}",
            n,
            MAX_MOTIF_SIZE
        );

        let mut catalog = MotifCatalog {
            n,
            graphs: Vec::new(),
            index: HashMap::new(),
        };
        if n == 0 {
            return catalog;
        }

        let edges = ordered_edge_pairs(n);
        let num_masks = 1u64 << edges.len();
        debug!(
            "Enumerating {} edge subsets over {} ordered pairs for n = {}",
            num_masks,
            edges.len(),
            n
        );

        let mut connected = 0usize;
        for mask in 0..num_masks {
            let mut g = Graph::new(n);
            for (bit, &(row, col)) in edges.iter().enumerate() {
                if mask & (1u64 << bit) != 0 {
                    g.set_edge_at(row, col);
                }
            }

            if !g.is_connected() {
                continue;
            }
            connected += 1;
            catalog.insert(g);
        }

        info!(
            "Generated {} different motifs of size {} ({} connected candidates)",
            catalog.len(),
            n,
            connected
        );
        catalog
    }

    /// Add `g` unless an isomorphic graph is already present.
    /// Returns the index of `g`'s isomorphism class.
    fn insert(&mut self, g: Graph) -> usize {
        match self.index.entry(g.canonical_form()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let idx = self.graphs.len();
                entry.insert(idx);
                self.graphs.push(g);
                idx
            }
        }
    }

    pub fn motif_size(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn get(&self, idx: usize) -> Option<&Graph> {
        self.graphs.get(idx)
    }

    /// Catalog index of the class with this canonical form.
    pub fn index_of(&self, canonical: &str) -> Option<usize> {
        self.index.get(canonical).copied()
    }

    pub fn into_graphs(self) -> Vec<Graph> {
        self.graphs
    }

    /// Drop the lookup entry for `canonical`, keeping the graph list intact.
    #[cfg(test)]
    pub(crate) fn forget(&mut self, canonical: &str) {
        self.index.remove(canonical);
    }
}

/// All pairwise non-isomorphic weakly connected directed graphs on `n` vertices.
///
/// See [`MotifCatalog::generate`].
pub fn generate_catalog(n: usize) -> Vec<Graph> {
    MotifCatalog::generate(n).into_graphs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(generate_catalog(0).len(), 0);
        assert_eq!(generate_catalog(1).len(), 1);
        assert_eq!(generate_catalog(2).len(), 2);
        assert_eq!(generate_catalog(3).len(), 13);
        assert_eq!(generate_catalog(4).len(), 199);
    }

    #[test]
    fn test_single_vertex_catalog() {
        let catalog = generate_catalog(1);
        assert_eq!(catalog[0].size(), 1);
        assert_eq!(catalog[0].num_edges(), 0);
        assert!(catalog[0].is_connected());
    }

    #[test]
    fn test_two_vertex_catalog() {
        let catalog = generate_catalog(2);
        // First discovery: mask 1 is the edge 1 -> 2, mask 3 adds 2 -> 1.
        assert_eq!(catalog[0].edges().collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(
            catalog[1].edges().collect::<Vec<_>>(),
            vec![(1, 2), (2, 1)]
        );
    }

    #[test]
    fn test_catalog_entries_unique_and_connected() {
        for n in 1..=4 {
            let catalog = MotifCatalog::generate(n);
            let mut forms = HashSet::new();
            for (i, g) in catalog.graphs().iter().enumerate() {
                assert_eq!(g.size(), n);
                assert!(g.is_connected());
                assert!((1..=n).all(|v| !g.has_edge(v, v)));
                let form = g.canonical_form();
                assert_eq!(catalog.index_of(&form), Some(i));
                assert!(forms.insert(form));
            }
        }
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let a = generate_catalog(3);
        let b = generate_catalog(3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_catalog_contains_every_connected_triad() {
        let catalog = MotifCatalog::generate(3);
        let cycle = Graph::from_edges(3, &[(2, 3), (3, 1), (1, 2)]);
        let in_star = Graph::from_edges(3, &[(3, 2), (1, 2)]);
        let complete = Graph::from_edges(
            3,
            &[(1, 2), (2, 1), (1, 3), (3, 1), (2, 3), (3, 2)],
        );
        for g in [cycle, in_star, complete] {
            assert!(catalog.index_of(&g.canonical_form()).is_some());
        }

        let disconnected = Graph::from_edges(3, &[(1, 2), (2, 1)]);
        assert!(catalog.index_of(&disconnected.canonical_form()).is_none());
    }

    #[test]
    #[should_panic(expected = "exceeds the enumerable maximum")]
    fn test_catalog_rejects_oversized_motif() {
        MotifCatalog::generate(MAX_MOTIF_SIZE + 1);
    }
}
