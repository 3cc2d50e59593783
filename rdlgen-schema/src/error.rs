//! Error types for schema loading and type resolution.

use thiserror::Error;

/// Error type for schema loading and resolution operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown type reference.
    #[error("unknown type '{name}'")]
    UnknownType {
        /// Type name.
        name: String,
    },

    /// Circular type reference.
    #[error("circular type reference through '{name}'")]
    CircularReference {
        /// Type name where the cycle was detected.
        name: String,
    },
}

impl SchemaError {
    /// Creates an unknown type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Creates a circular reference error.
    pub fn circular(name: impl Into<String>) -> Self {
        Self::CircularReference { name: name.into() }
    }
}
