//! The `mathchamp` binary: take tests, review results, print worksheets.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "mathchamp",
    version,
    about = "Addition and subtraction practice tests (1-99)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new test and answer it interactively
    Take {
        /// Candidate name
        #[arg(long)]
        name: String,

        /// Number of questions (default: from config, usually 10)
        #[arg(long)]
        count: Option<u32>,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Also export the results as HTML when the test ends
        #[arg(long)]
        html: bool,

        /// Output directory for exported results
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Continue the saved test
    Resume {
        /// Also export the results as HTML when the test ends
        #[arg(long)]
        html: bool,

        /// Output directory for exported results
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show or export the results of the saved test
    Results {
        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// HTML: output directory. JSON: write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a printable worksheet
    Print {
        /// Number of questions (default: from config, usually 10)
        #[arg(long)]
        count: Option<u32>,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Append an answer key
        #[arg(long)]
        answer_key: bool,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Discard the saved test
    Reset {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathchamp=info".parse().unwrap())
                .add_directive("mathchamp_core=info".parse().unwrap())
                .add_directive("mathchamp_report=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            name,
            count,
            seed,
            html,
            output,
            config,
        } => commands::take::execute(name, count, seed, html, output, config),
        Commands::Resume {
            html,
            output,
            config,
        } => commands::take::resume(html, output, config),
        Commands::Results {
            format,
            output,
            config,
        } => commands::results::execute(format, output, config),
        Commands::Print {
            count,
            seed,
            format,
            answer_key,
            output,
            config,
        } => commands::print::execute(count, seed, format, answer_key, output, config),
        Commands::Reset { config } => commands::reset::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
