//! Error types for pain message transformation

use thiserror::Error;

/// Result type for transformation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which wire grammar a value failed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Fixed-point amount, e.g. `100.00`
    Amount,
    /// ISO date, `YYYY-MM-DD`
    Date,
    /// ISO timestamp without offset, `YYYY-MM-DDTHH:MM:SS`
    Timestamp,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Amount => write!(f, "amount"),
            FormatKind::Date => write!(f, "date"),
            FormatKind::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// A textual amount, date or timestamp does not match its wire grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind}: {value:?}")]
pub struct FormatError {
    /// Grammar that was expected
    pub kind: FormatKind,
    /// Raw offending value
    pub value: String,
}

impl FormatError {
    pub(crate) fn new(kind: FormatKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// The OS entropy source could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Entropy source unavailable: {0}")]
pub struct RandomnessError(pub String);

/// Transformation errors
#[derive(Error, Debug)]
pub enum Error {
    /// Codec error outside of a document conversion
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// A field of a parsed document could not be decoded
    #[error("Conversion failed at {field}: {source}")]
    Conversion {
        /// Path of the offending element, e.g. `GrpHdr/CreDtTm`
        field: String,
        /// Underlying codec failure (carries the raw value)
        #[source]
        source: FormatError,
    },

    /// Identifier generation failed while building a document
    #[error("Failed to generate {field}: {source}")]
    Generation {
        /// Identifier that was being generated
        field: &'static str,
        /// Underlying entropy failure
        #[source]
        source: RandomnessError,
    },

    /// Sum of transaction amounts exceeds the decimal range
    #[error("Control sum overflowed after {count} transactions")]
    Overflow {
        /// Transactions summed before the overflow
        count: usize,
    },

    /// A mandatory element is absent from a parsed document
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    /// XML serialization or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Document namespace is not one of the supported pain versions
    #[error("Unsupported namespace: {0}")]
    UnsupportedNamespace(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn conversion(field: impl Into<String>, source: FormatError) -> Self {
        Error::Conversion {
            field: field.into(),
            source,
        }
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Error::Xml(err.to_string())
    }
}
