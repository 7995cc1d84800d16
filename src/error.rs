use core::fmt;

use crate::instance::DocId;

/// Result alias for `polysemy`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the sense-induction pipeline.
///
/// A failed call produces no partial result: either a complete sense map
/// comes back or one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The instance collection was empty.
    EmptyInput,

    /// An instance carried no substitute tokens, so it has no
    /// bag-of-substitutes representation.
    EmptyInstance {
        /// Document id of the offending instance.
        doc_id: DocId,
    },

    /// Aligned sequences disagree in length.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Configuration value rejected before any computation starts.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty instance collection"),
            Error::EmptyInstance { doc_id } => {
                write!(f, "instance {doc_id} has no substitute tokens")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
