//! Config file loading
//!
//! The config file is an optional TOML document deserialised into
//! [`DiffOptions`]; every key may be omitted.
//!
//! ```toml
//! context = 5
//! junk = "blank-lines"
//! ```

use seqalign_core::{DiffOptions, ExError, ExErrorKind};
use std::path::Path;

/// Load options from `path`, or the defaults when no path is given.
pub fn load_options(path: Option<&Path>) -> Result<DiffOptions, ExError> {
    let Some(path) = path else {
        return Ok(DiffOptions::default());
    };

    let text = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("load_config")
            .with_message(format!("{}: {}", path.display(), e))
    })?;

    let options: DiffOptions = toml::from_str(&text).map_err(|e| {
        ExError::new(ExErrorKind::Config)
            .with_op("load_config")
            .with_message(format!("{}: {}", path.display(), e))
    })?;

    tracing::debug!(
        path = %path.display(),
        context = options.context,
        junk = ?options.junk,
        "config loaded"
    );
    Ok(options)
}
