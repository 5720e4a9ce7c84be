//! # lanes CLI
//!
//! Command-line driver for the lanes vector engine. Prints the resolved type
//! table and runs the reference kernels on the generic engine, checking each
//! one against a plain scalar loop.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;

/// Inspect the lanes type table and run reference kernels
#[derive(Parser)]
#[command(name = "lanes")]
#[command(about = "Type table and reference kernels for the lanes vector engine")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every supported vector type and its companions
    Table {
        /// Only list vectors of this element type (e.g. u16)
        #[arg(short, long)]
        element: Option<String>,
    },

    /// Print the resolver row for one vector type
    Describe {
        /// Vector alias, e.g. f32x8
        name: String,
    },

    /// Escape-time Mandelbrot over a character grid
    Mandelbrot {
        /// f32 lanes per vector (1 to 32)
        #[arg(short, long, default_value = "8")]
        lanes: usize,

        /// Grid width in points
        #[arg(long, default_value = "72")]
        width: usize,

        /// Grid height in points
        #[arg(long, default_value = "28")]
        height: usize,

        /// Iteration limit per point (at most 2^24)
        #[arg(
            short,
            long,
            default_value = "256",
            value_parser = clap::value_parser!(u32).range(1..=commands::kernels::MAX_ITER_LIMIT as i64)
        )]
        max_iter: u32,

        /// Draw the grid instead of printing only the summary
        #[arg(long)]
        draw: bool,
    },

    /// y = a * x + y over random data
    Saxpy {
        /// f32 lanes per vector (1 to 32)
        #[arg(short, long, default_value = "8")]
        lanes: usize,

        /// Vector length in elements
        #[arg(long, default_value = "4096")]
        len: usize,

        /// Scale factor
        #[arg(short, long, default_value = "2.0")]
        a: f32,
    },

    /// Dot product of two random vectors
    Dot {
        /// f32 lanes per vector (1 to 32)
        #[arg(short, long, default_value = "8")]
        lanes: usize,

        /// Vector length in elements
        #[arg(long, default_value = "4096")]
        len: usize,
    },

    /// Histogram of random integers through gather and scatter
    Histogram {
        /// u32 lanes per vector (1 to 32)
        #[arg(short, long, default_value = "8")]
        lanes: usize,

        /// Number of samples
        #[arg(long, default_value = "10000")]
        len: usize,

        /// Number of bins
        #[arg(short, long, default_value = "16")]
        bins: usize,
    },

    /// Run every kernel at every lane count against its scalar reference
    Verify {
        /// Problem size for the array kernels
        #[arg(long, default_value = "1027")]
        len: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Table { element } => commands::table::print_table(element.as_deref()),
        Commands::Describe { name } => commands::table::describe(&name),
        Commands::Mandelbrot {
            lanes,
            width,
            height,
            max_iter,
            draw,
        } => commands::kernels::run_mandelbrot(lanes, width, height, max_iter, draw),
        Commands::Saxpy { lanes, len, a } => commands::kernels::run_saxpy(lanes, len, a),
        Commands::Dot { lanes, len } => commands::kernels::run_dot(lanes, len),
        Commands::Histogram { lanes, len, bins } => {
            commands::kernels::run_histogram(lanes, len, bins)
        }
        Commands::Verify { len } => commands::verify::run(len),
    }
}
