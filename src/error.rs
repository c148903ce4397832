//! Error taxonomy shared by every entry point.

use thiserror::Error as ThisError;

/// Failure of a route computation.
///
/// Every public operation validates its inputs eagerly and reports
/// problems through this type; nothing panics past the crate boundary.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Structurally invalid input: empty candidate set, start not a
    /// member, repeated identifier, bad configuration, malformed catalog.
    #[error("validation error: {0}")]
    Validation(String),

    /// An identifier has no entry in the catalog.
    #[error("lookup error: {0}")]
    Lookup(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup(message.into())
    }

    /// Shorthand for the missing-identifier case.
    pub fn missing(id: &str) -> Self {
        Self::Lookup(format!("identifier '{id}' is not in the catalog"))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}
