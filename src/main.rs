use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use triangulation::config::Params;
use triangulation::{arithmetic, batch, render};

#[derive(Parser)]
#[command(name = "triangulation", version, about = "Triangulation sequences over k-row grid graphs")]
struct Cli {
    /// Output directory for graphs, CSV files and images
    #[arg(long, default_value = "artifacts", global = true)]
    out_dir: PathBuf,

    /// Tick budget per point before a walk is declared stalled
    #[arg(long, default_value_t = 4, global = true)]
    cap_factor: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one graph and print its sequence
    Sequence {
        n: usize,
        k: usize,

        /// Also print the grid
        #[arg(long)]
        grid: bool,

        /// Save a PNG of the walk into the output directory
        #[arg(long)]
        png: bool,
    },
    /// Build, save and walk every shape up to MAX_N, then export a CSV
    Batch {
        #[arg(long, default_value_t = 100)]
        max_n: usize,

        /// Only shapes with this many rows
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Closed-form sequence lengths for growing column counts
    Lengths {
        rows: usize,
        max_cols: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = Params {
        cap_factor: cli.cap_factor,
        out_dir: cli.out_dir,
        ..Params::default()
    };

    let result = match cli.command {
        Commands::Sequence { n, k, grid, png } => run_sequence(n, k, grid, png, &params),
        Commands::Batch { max_n, rows } => run_batch(max_n, rows, &params),
        Commands::Lengths { rows, max_cols } => {
            println!("{:?}", arithmetic::sequence_lengths(max_cols, rows));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_sequence(
    n: usize,
    k: usize,
    grid: bool,
    png: bool,
    params: &Params,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tri, timings) = triangulation::generate(n, k, params)?;

    if grid {
        print!("{}", render::render_text(&tri.graph));
    }
    println!("{:?}", tri.sequence);

    if png {
        std::fs::create_dir_all(&params.out_dir)?;
        let (rgba, w, h) =
            render::render_path(&tri.graph, &tri.sequence, params.cell_size, params.dot_radius);
        let path = params.out_dir.join(format!("{n:03}_{k:03}.png"));
        image::save_buffer(&path, &rgba, w as u32, h as u32, image::ColorType::Rgba8)?;
        eprintln!("Saved {}", path.display());
    }

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.3} ms", t.name, t.ms);
    }
    Ok(())
}

fn run_batch(
    max_n: usize,
    rows: Option<usize>,
    params: &Params,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = batch::run_batch(max_n, rows, params)?;
    eprintln!("Saved {} sequences to {}", out.records.len(), out.csv_path.display());
    Ok(())
}
