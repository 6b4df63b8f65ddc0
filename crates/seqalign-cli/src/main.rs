//! seqalign CLI
//!
//! Command-line interface for comparing text files line by line

use clap::{Parser, Subcommand};
use seqalign_core::logging_facility::{self, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "seqalign")]
#[command(about = "seqalign - Line-oriented sequence comparison", long_about = None)]
struct Cli {
    /// Log output format: pretty or json (logs go to stderr)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show changed hunks between two files
    Diff(commands::diff::DiffArgs),
    /// List the full edit script between two files
    Opcodes(commands::opcodes::OpcodesArgs),
    /// Print similarity ratios for two files
    Ratio(commands::ratio::RatioArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Opcodes(args) => commands::opcodes::execute(args),
        Commands::Ratio(args) => commands::ratio::execute(args),
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
