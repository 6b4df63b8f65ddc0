//! Ratio command
//!
//! Usage: seqalign ratio <BASE> <TARGET> [--junk <POLICY>] [--format text|json]

use super::{InputArgs, Outcome, OutputFormat};
use clap::Args;
use seqalign_core::string_as_lines;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct RatioArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct RatioReport {
    ratio: f64,
    quick_ratio: f64,
    real_quick_ratio: f64,
}

/// Execute ratio command
pub fn execute(args: RatioArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    let options = args.input.options()?;
    let (base_text, target_text) = args.input.read()?;

    let sm = options.session(string_as_lines(&base_text), string_as_lines(&target_text));
    let report = RatioReport {
        ratio: sm.ratio(),
        quick_ratio: sm.quick_ratio(),
        real_quick_ratio: sm.real_quick_ratio(),
    };

    match args.format {
        OutputFormat::Text => {
            println!("ratio: {:.6}", report.ratio);
            println!("quick_ratio: {:.6}", report.quick_ratio);
            println!("real_quick_ratio: {:.6}", report.real_quick_ratio);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(Outcome::Same)
}
