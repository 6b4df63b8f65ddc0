//! Subcommands and the arguments they share

pub mod diff;
pub mod opcodes;
pub mod ratio;

use clap::{Args, ValueEnum};
use seqalign_core::{DiffOptions, ExError, ExErrorKind, JunkPolicy};
use std::path::{Path, PathBuf};

/// Files to compare plus the options that shape the comparison
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Base file (the old version)
    pub base: PathBuf,

    /// Target file (the new version)
    pub target: PathBuf,

    /// Junk policy: none, whitespace or blank-lines (overrides the config file)
    #[arg(long)]
    pub junk: Option<JunkPolicy>,

    /// TOML config file with `context` and `junk` keys
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve options: config file first, then command-line overrides.
    pub fn options(&self) -> Result<DiffOptions, ExError> {
        let mut options = crate::config::load_options(self.config.as_deref())?;
        if let Some(junk) = self.junk {
            options.junk = junk;
        }
        Ok(options)
    }

    /// Read both files as UTF-8 text.
    pub fn read(&self) -> Result<(String, String), ExError> {
        Ok((read_text(&self.base)?, read_text(&self.target)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Successful command result, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Inputs compare equal, or the command does not report differences
    Same,
    /// Inputs differ
    Changed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Same => 0,
            Outcome::Changed => 1,
        }
    }
}

fn read_text(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_input")
            .with_message(format!("{}: {}", path.display(), e))
    })
}
