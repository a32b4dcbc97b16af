//! Error types for the Drift advection library.
//!
//! Recoverable, expected conditions are communicated through these enums
//! or through `NaN` sentinel values; nothing in the core is fatal.

use std::error::Error;
use std::fmt;

/// Errors from the advection engine's batch operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdvectError {
    /// No seed particles have been supplied.
    SeedsNotSet,
    /// The velocity field does not expose exactly three valid
    /// (non-empty) velocity component names.
    IncompleteVelocity {
        /// Number of valid component names the field reported.
        found: usize,
    },
    /// A field parameter lock or unlock failed. Passed through from the
    /// field collaborator unchanged; the engine does not retry.
    Field(FieldError),
}

impl fmt::Display for AdvectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeedsNotSet => write!(f, "no seed particles supplied"),
            Self::IncompleteVelocity { found } => {
                write!(f, "velocity field has {found} valid components, need 3")
            }
            Self::Field(reason) => write!(f, "field parameter error: {reason}"),
        }
    }
}

impl Error for AdvectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<FieldError> for AdvectError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

/// Errors from a field collaborator's parameter lock/unlock pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The field could not pin its lookup parameters.
    LockFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The field could not release its pinned parameters.
    UnlockFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LockFailed { reason } => write!(f, "lock failed: {reason}"),
            Self::UnlockFailed { reason } => write!(f, "unlock failed: {reason}"),
        }
    }
}

impl Error for FieldError {}
