use clap::Parser;
use log::{error, info, warn};
use motif_census::{parser::MAX_INPUT_VERTICES, writer::save_graph, Graph};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;

/// Input Generator for motif census runs.
///
/// Writes a random directed graph as an edge list in the format read by
/// `motif_census count`: one `src dst` pair per line, 1-based vertex ids.
/// Self-loops are never generated.
///
/// The graph size is taken from the largest vertex id that appears, so
/// `--vertices` is an upper bound when the highest vertices end up isolated;
/// `--ensure-last` (on by default) pins it.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random edge-list input graphs for motif counting"
)]
struct Args {
    /// Number of vertices
    #[arg(long)]
    vertices: usize,

    /// Probability of each ordered pair (u, v), u != v, being an edge
    #[arg(long, default_value_t = 0.20)]
    density: f64,

    /// Probability that an edge also gets its reverse edge
    #[arg(long, default_value_t = 0.10)]
    reciprocity: f64,

    /// Attach the last vertex to a random other vertex if it came out isolated
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    ensure_last: bool,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path for the edge list (mandatory)
    #[arg(long)]
    output: PathBuf,
}

/// Build a random self-loop-free directed graph
fn generate_graph<R: Rng>(n: usize, density: f64, reciprocity: f64, rng: &mut R) -> Graph {
    let mut g = Graph::new(n);
    for u in 1..=n {
        for v in 1..=n {
            if u == v {
                continue;
            }
            if rng.gen::<f64>() < density {
                g.add_edge(u, v);
                if rng.gen::<f64>() < reciprocity {
                    g.add_edge(v, u);
                }
            }
        }
    }
    g
}

/// Make sure vertex `n` is mentioned in the edge list
fn attach_last_vertex<R: Rng>(g: &mut Graph, rng: &mut R) {
    let n = g.size();
    if n < 2 || (1..n).any(|v| g.has_edge(v, n) || g.has_edge(n, v)) {
        return;
    }
    let other = rng.gen_range(1..n);
    if rng.gen::<bool>() {
        g.add_edge(other, n);
    } else {
        g.add_edge(n, other);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.vertices == 0 || args.vertices > MAX_INPUT_VERTICES {
        error!("vertices must be in 1..={}.", MAX_INPUT_VERTICES);
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&args.density) || !(0.0..=1.0).contains(&args.reciprocity) {
        error!("density and reciprocity must be in [0,1].");
        std::process::exit(1);
    }
    if args.vertices == 1 {
        warn!("A single vertex has no self-loop-free edges; the edge list will be empty.");
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            // Use system entropy
            let seed: u64 = rand::thread_rng().gen();
            StdRng::seed_from_u64(seed)
        }
    };

    let mut g = generate_graph(args.vertices, args.density, args.reciprocity, &mut rng);
    if args.ensure_last {
        attach_last_vertex(&mut g, &mut rng);
    }

    info!("Generated graph:");
    info!("  vertices = {}", args.vertices);
    info!("  density = {:.3}", args.density);
    info!("  reciprocity = {:.3}", args.reciprocity);
    if let Some(seed) = args.seed {
        info!("  seed = {}", seed);
    }
    info!("  edges = {}", g.num_edges());
    info!("  weakly connected = {}", g.is_connected());
    info!("  output file: {:?}", args.output);

    if let Err(e) = save_graph(&args.output, &g) {
        error!("{}", e);
        std::process::exit(1);
    }
}
