//! Diff command
//!
//! Usage: seqalign diff <BASE> <TARGET> [-U <N>] [--junk <POLICY>] [--format text|json]

use super::{InputArgs, Outcome, OutputFormat};
use clap::Args;
use seqalign_core::{log_op_end, log_op_start, render_hunks, string_as_lines, Group};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Unchanged lines shown around each change (overrides the config file)
    #[arg(short = 'U', long)]
    pub context: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct DiffReport<'a> {
    groups: &'a [Group],
    ratio: f64,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!(
        "cli_diff",
        base = %args.input.base.display(),
        target = %args.input.target.display()
    );

    let mut options = args.input.options()?;
    if let Some(context) = args.context {
        options.context = context;
    }

    let (base_text, target_text) = args.input.read()?;
    let base = string_as_lines(&base_text);
    let target = string_as_lines(&target_text);

    let sm = options.session(base.clone(), target.clone());
    let groups = sm.grouped_opcodes(options.context);

    match args.format {
        OutputFormat::Text => {
            if !groups.is_empty() {
                println!("--- {}", args.input.base.display());
                println!("+++ {}", args.input.target.display());
                print!("{}", render_hunks(&base, &target, &groups));
            }
        }
        OutputFormat::Json => {
            let report = DiffReport {
                groups: &groups,
                ratio: sm.ratio(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    log_op_end!(
        "cli_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        group_count = groups.len()
    );

    Ok(if groups.is_empty() {
        Outcome::Same
    } else {
        Outcome::Changed
    })
}
