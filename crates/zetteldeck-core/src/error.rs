//! Error types for slide deck assembly.

use thiserror::Error;
use zetteldeck_ast::ZettelId;

/// Result type for presenter operations
pub type Result<T> = std::result::Result<T, PresenterError>;

/// Errors reported by a content store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store has no zettel with this identifier
    #[error("zettel {id} not found")]
    NotFound { id: ZettelId },

    /// The zettel exists but could not be read as metadata plus content
    #[error("zettel {id} is malformed: {reason}")]
    Malformed { id: ZettelId, reason: String },

    /// The store could not be reached
    #[error("content store unavailable: {reason}")]
    Unavailable { reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a malformed-content error
    pub fn malformed(id: ZettelId, reason: impl Into<String>) -> Self {
        Self::Malformed {
            id,
            reason: reason.into(),
        }
    }

    /// Create an unavailable-store error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Check for a missing zettel
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "STORE001",
            Self::Malformed { .. } => "STORE002",
            Self::Unavailable { .. } => "STORE003",
            Self::Io(_) => "STORE004",
        }
    }
}

/// Errors that abort a render request
#[derive(Error, Debug)]
pub enum PresenterError {
    /// The explicitly requested zettel could not be retrieved
    #[error("unable to retrieve zettel {id}: {source}")]
    Retrieve {
        id: ZettelId,
        #[source]
        source: StoreError,
    },

    /// The requested zettel has no metadata and cannot head a slide set
    #[error("zettel {id} has no metadata and cannot be used as a slide set")]
    NotASlideSet { id: ZettelId },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// TOML parsing error (for the presenter configuration)
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PresenterError {
    /// Create a retrieval error for a requested zettel
    pub fn retrieve(id: ZettelId, source: StoreError) -> Self {
        Self::Retrieve { id, source }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Check whether the failure means the zettel does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Retrieve { source, .. } if source.is_not_found())
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Retrieve { .. } => "DECK001",
            Self::NotASlideSet { .. } => "DECK002",
            Self::Config { .. } => "DECK003",
            Self::Toml(_) => "DECK004",
            Self::Io(_) => "DECK005",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zid() -> ZettelId {
        ZettelId::parse("20240101120000").unwrap()
    }

    #[test]
    fn test_error_codes() {
        let err = StoreError::NotFound { id: zid() };
        assert_eq!(err.code(), "STORE001");
        assert!(err.to_string().contains("20240101120000"));

        let err = PresenterError::retrieve(zid(), StoreError::malformed(zid(), "no content"));
        assert_eq!(err.code(), "DECK001");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_propagates() {
        let err = PresenterError::retrieve(zid(), StoreError::NotFound { id: zid() });
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::unavailable("connection refused");
        assert!(err.to_string().contains("connection refused"));

        let err = PresenterError::config("bad role");
        assert!(err.to_string().contains("bad role"));
    }
}
