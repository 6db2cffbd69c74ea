//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Hero Types** - records shown by the dashboard
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Hero Types
// =============================================================================

/// A single hero as served by the hero service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identifier
    pub id: u32,
    /// Display name
    pub name: String,
}

impl Hero {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Request never reached the server or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body was not a hero list.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_wire_shape() {
        let json = r#"[{"id": 11, "name": "Mr. Nice"}, {"id": 12, "name": "Narco"}]"#;

        let heroes: Vec<Hero> = serde_json::from_str(json).unwrap();
        assert_eq!(heroes, vec![Hero::new(11, "Mr. Nice"), Hero::new(12, "Narco")]);

        let back = serde_json::to_value(&heroes[1]).unwrap();
        assert_eq!(back, serde_json::json!({"id": 12, "name": "Narco"}));
    }

    #[test]
    fn test_server_error_format() {
        let err = AppError::Server {
            status: 503,
            message: "maintenance".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("maintenance"));
    }
}
