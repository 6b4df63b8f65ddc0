//! Opcodes command
//!
//! Usage: seqalign opcodes <BASE> <TARGET> [--junk <POLICY>] [--format text|json]

use super::{InputArgs, Outcome, OutputFormat};
use clap::Args;
use seqalign_core::string_as_lines;

#[derive(Debug, Args)]
pub struct OpcodesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute opcodes command
///
/// Text output is one `tag a1 a2 b1 b2` line per opcode.
pub fn execute(args: OpcodesArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    let options = args.input.options()?;
    let (base_text, target_text) = args.input.read()?;

    let sm = options.session(string_as_lines(&base_text), string_as_lines(&target_text));
    let opcodes = sm.opcodes();

    match args.format {
        OutputFormat::Text => {
            for op in opcodes.iter() {
                println!(
                    "{} {} {} {} {}",
                    op.tag, op.base_start, op.base_end, op.target_start, op.target_end
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(opcodes.as_slice())?);
        }
    }

    Ok(Outcome::Same)
}
