use crate::{
    catalog::MotifCatalog, utils::num_combinations, Graph, MotifError, Result, MAX_MOTIF_SIZE,
};
use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;

/// Motif catalog for one size together with the occurrence count of every entry.
#[derive(Debug, Clone)]
pub struct MotifCensus {
    /// Isomorphism class representatives, in catalog order
    pub catalog: MotifCatalog,
    /// counts[i] = number of connected induced subgraphs isomorphic to catalog entry i
    pub counts: Vec<usize>,
    /// Connected induced subgraphs whose canonical form was missing from the catalog
    pub unmatched: usize,
    /// Number of vertex subsets inspected, C(|V|, n)
    pub subsets: usize,
}

impl MotifCensus {
    pub fn motif_size(&self) -> usize {
        self.catalog.motif_size()
    }

    /// Total number of matched occurrences over all motifs.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of weakly connected induced subgraphs, matched or not.
    pub fn connected(&self) -> usize {
        self.total() + self.unmatched
    }

    /// Catalog entries paired with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&Graph, usize)> + '_ {
        self.catalog.graphs().iter().zip(self.counts.iter().copied())
    }
}

/// Outcome of inspecting one vertex subset
enum Occurrence {
    Disconnected,
    Motif(usize),
    Unmatched,
}

/// Per-worker accumulator for the counting loop
#[derive(Debug, Clone)]
struct Tally {
    counts: Vec<usize>,
    unmatched: usize,
}

impl Tally {
    fn new(len: usize) -> Self {
        Tally {
            counts: vec![0; len],
            unmatched: 0,
        }
    }

    fn record(mut self, occurrence: Occurrence) -> Self {
        match occurrence {
            Occurrence::Disconnected => {}
            Occurrence::Motif(idx) => self.counts[idx] += 1,
            Occurrence::Unmatched => self.unmatched += 1,
        }
        self
    }

    fn merge(mut self, other: Tally) -> Self {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
        self.unmatched += other.unmatched;
        self
    }
}

/// Count every motif of size `n` in `graph`.
///
/// Each of the C(|V|, n) vertex subsets is turned into its induced subgraph
/// (vertices renumbered in ascending order, edge directions kept). Subgraphs that
/// are not weakly connected are skipped; the others are matched against the
/// catalog for `n` by canonical form.
pub fn count_motifs(n: usize, graph: &Graph) -> Result<MotifCensus> {
    let catalog = prepare(n, graph)?;
    Ok(census_with(catalog, graph))
}

/// Sequential counting loop against an already built catalog
fn census_with(catalog: MotifCatalog, graph: &Graph) -> MotifCensus {
    let tally = (0..graph.size())
        .combinations(catalog.motif_size())
        .map(|subset| classify(&catalog, graph, &subset))
        .fold(Tally::new(catalog.len()), Tally::record);

    finish(catalog, graph, tally)
}

/// Same result as [`count_motifs`], with the subsets spread over the rayon thread pool.
pub fn count_motifs_par(n: usize, graph: &Graph) -> Result<MotifCensus> {
    let catalog = prepare(n, graph)?;
    let len = catalog.len();

    let tally = (0..graph.size())
        .combinations(n)
        .par_bridge()
        .map(|subset| classify(&catalog, graph, &subset))
        .fold(|| Tally::new(len), Tally::record)
        .reduce(|| Tally::new(len), Tally::merge);

    Ok(finish(catalog, graph, tally))
}

fn prepare(n: usize, graph: &Graph) -> Result<MotifCatalog> {
    if n > graph.size() {
        return Err(MotifError::MotifLargerThanGraph {
            n,
            size: graph.size(),
        });
    }
    MotifError::check_motif_size(n, MAX_MOTIF_SIZE)?;

    let catalog = MotifCatalog::generate(n);
    debug!(
        "Matching vertex subsets of size {} against {} motifs",
        n,
        catalog.len()
    );
    Ok(catalog)
}

fn classify(catalog: &MotifCatalog, graph: &Graph, subset: &[usize]) -> Occurrence {
    let sub = graph.induced_subgraph(subset);
    if !sub.is_connected() {
        return Occurrence::Disconnected;
    }
    match catalog.index_of(&sub.canonical_form()) {
        Some(idx) => Occurrence::Motif(idx),
        None => Occurrence::Unmatched,
    }
}

fn finish(catalog: MotifCatalog, graph: &Graph, tally: Tally) -> MotifCensus {
    if tally.unmatched > 0 {
        warn!(
            "{} connected subgraphs did not match any motif of size {}",
            tally.unmatched,
            catalog.motif_size()
        );
    }

    let subsets = num_combinations(graph.size(), catalog.motif_size());
    let census = MotifCensus {
        catalog,
        counts: tally.counts,
        unmatched: tally.unmatched,
        subsets,
    };
    debug!(
        "{} of {} vertex subsets induce a connected subgraph",
        census.connected(),
        census.subsets
    );
    info!(
        "Found {} different motifs with {} motifs of size {} found in input graph",
        census.catalog.len(),
        census.total(),
        census.motif_size()
    );
    census
}
