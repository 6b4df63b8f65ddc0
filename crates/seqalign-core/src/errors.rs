use crate::model::Side;
use thiserror::Error;

/// Result type alias using SeqAlignError
pub type Result<T> = std::result::Result<T, SeqAlignError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input validation
    InvalidInput,
    InvalidRange,

    // Control flow
    Cancelled,

    // Integration/IO
    Io,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidRange => "ERR_INVALID_RANGE",
            ExErrorKind::Cancelled => "ERR_CANCELLED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and enough
/// context (operation, sequence side, offending range) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    side: Option<Side>,
    range: Option<(usize, usize)>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            side: None,
            range: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the sequence side the error refers to
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Add the offending half-open range
    pub fn with_range(mut self, lo: usize, hi: usize) -> Self {
        self.range = Some((lo, hi));
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the sequence side, if any
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Get the offending range, if any
    pub fn range(&self) -> Option<(usize, usize)> {
        self.range
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some((lo, hi)) = self.range {
            write!(f, " (range: {}..{})", lo, hi)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for sequence matching operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeqAlignError {
    /// A comparison session was requested without one of its sequences
    #[error("Missing {side} sequence")]
    MissingSequence { side: Side },

    /// A sub-range query fell outside the sequence
    #[error("Range {lo}..{hi} is out of bounds for {side} sequence of length {len}")]
    RangeOutOfBounds {
        side: Side,
        lo: usize,
        hi: usize,
        len: usize,
    },

    /// The caller aborted a long-running computation
    #[error("Operation cancelled: {op}")]
    Cancelled { op: String },
}

/// Conversion from SeqAlignError to ExError
impl From<SeqAlignError> for ExError {
    fn from(err: SeqAlignError) -> Self {
        match err {
            SeqAlignError::MissingSequence { side } => ExError::new(ExErrorKind::InvalidInput)
                .with_side(side)
                .with_op("build_session")
                .with_message(format!("{} sequence is not defined", side)),

            SeqAlignError::RangeOutOfBounds { side, lo, hi, len } => {
                ExError::new(ExErrorKind::InvalidRange)
                    .with_side(side)
                    .with_range(lo, hi)
                    .with_op("find_longest_match")
                    .with_message(format!("sequence length is {}", len))
            }

            SeqAlignError::Cancelled { op } => ExError::new(ExErrorKind::Cancelled)
                .with_op(op)
                .with_message("aborted by caller"),
        }
    }
}

impl From<std::convert::Infallible> for ExError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
