use clap::{Parser, Subcommand};
use log::{error, info, warn};
use motif_census::{
    count_motifs, count_motifs_par, generate_catalog,
    parser::parse_graph_file,
    writer::{save_catalog, save_census},
    MotifError, Result, DEFAULT_MOTIF_CEILING, MAX_MOTIF_SIZE,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Network motif census for small directed graphs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Largest motif size accepted (the catalog grows super-exponentially with n)
    #[arg(long, global = true, default_value_t = DEFAULT_MOTIF_CEILING)]
    max_size: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enumerate all connected directed graphs with n vertices, up to isomorphism
    Catalog {
        /// Number of vertices in each motif (n)
        #[arg(short = 'n', long)]
        size: usize,

        /// Output file. Default: out/connected_sub_graphs_n{n}.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Count the occurrences of every motif of size n in an input graph
    Count {
        /// Number of vertices in each motif (n)
        #[arg(short = 'n', long)]
        size: usize,

        /// Edge list of the input graph, one `src dst` pair per line
        #[arg(short, long, default_value = "input_graph.txt")]
        input: PathBuf,

        /// Output file. Default: out/motifs_n{n}.txt
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spread the subset enumeration over all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Prompt for a question (1 = catalog, 2 = count) and a size until end of input
    Interactive {
        /// Edge list used for question 2
        #[arg(short, long, default_value = "input_graph.txt")]
        input: PathBuf,

        /// Directory receiving the result files
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

fn catalog_path(dir: &Path, n: usize) -> PathBuf {
    dir.join(format!("connected_sub_graphs_n{}.txt", n))
}

fn census_path(dir: &Path, n: usize) -> PathBuf {
    dir.join(format!("motifs_n{}.txt", n))
}

fn log_timing(start: Instant) {
    let elapsed = start.elapsed();
    info!(
        "Time taken: {}ms = {:.3}s",
        elapsed.as_millis(),
        elapsed.as_secs_f64()
    );
}

fn run_catalog(n: usize, ceiling: usize, output: &Path) -> Result<()> {
    MotifError::check_motif_size(n, ceiling)?;

    let start = Instant::now();
    let graphs = generate_catalog(n);
    log_timing(start);

    save_catalog(output, n, &graphs)?;
    info!("Generated {} different motifs of size {}", graphs.len(), n);
    Ok(())
}

fn run_count(n: usize, ceiling: usize, input: &Path, output: &Path, parallel: bool) -> Result<()> {
    MotifError::check_motif_size(n, ceiling)?;

    let start = Instant::now();
    info!("Input Graph File: {}", input.display());
    let graph = parse_graph_file(input)?;
    info!(
        "Input graph: {} vertices, {} edges",
        graph.size(),
        graph.num_edges()
    );

    let census = if parallel {
        count_motifs_par(n, &graph)?
    } else {
        count_motifs(n, &graph)?
    };
    log_timing(start);

    save_census(output, &census)?;
    Ok(())
}

/// Read one trimmed, non-empty answer; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, question: &str) -> io::Result<Option<String>> {
    loop {
        print!("{}", question);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(Some(answer.to_string()));
        }
    }
}

fn run_interactive(ceiling: usize, input: &Path, out_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let stdin_err = |e: io::Error| MotifError::io("<stdin>", e);

    loop {
        let Some(question) =
            prompt(&mut lines, "Enter a question to answer (1 or 2): ").map_err(stdin_err)?
        else {
            break;
        };
        let Some(size) =
            prompt(&mut lines, "Enter the number of vertices (n): ").map_err(stdin_err)?
        else {
            break;
        };

        let n = match size.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                warn!("Invalid input, please enter a positive vertex count");
                continue;
            }
        };

        // Failures end the current question only.
        let outcome = match question.as_str() {
            "1" => run_catalog(n, ceiling, &catalog_path(out_dir, n)),
            "2" => run_count(n, ceiling, input, &census_path(out_dir, n), false),
            _ => {
                warn!("Invalid question number. Please enter 1 or 2.");
                continue;
            }
        };
        if let Err(e) = outcome {
            error!("{}", e);
        }
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    if args.max_size > MAX_MOTIF_SIZE {
        return Err(MotifError::InvalidMotifSize {
            n: args.max_size,
            max: MAX_MOTIF_SIZE,
        });
    }
    let default_dir = Path::new("out");

    match args.command {
        Command::Catalog { size, output } => {
            let output = output.unwrap_or_else(|| catalog_path(default_dir, size));
            run_catalog(size, args.max_size, &output)
        }
        Command::Count {
            size,
            input,
            output,
            parallel,
        } => {
            let output = output.unwrap_or_else(|| census_path(default_dir, size));
            run_count(size, args.max_size, &input, &output, parallel)
        }
        Command::Interactive { input, out_dir } => run_interactive(args.max_size, &input, &out_dir),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
