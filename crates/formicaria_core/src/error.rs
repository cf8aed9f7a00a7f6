//! # World Error Types
//!
//! All errors that can occur in the world core.
//!
//! Out-of-range *reads* are not errors anywhere in this crate: they
//! resolve to `Block::Air` so per-tick agent probing stays total.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the world core.
#[derive(Error, Debug)]
pub enum WorldError {
    /// Attempted to write a cell outside the grid. The grid is left
    /// unchanged; the caller decides whether to log, retry, or ignore.
    #[error("coordinates ({x}, {y}, {z}) are outside the world bounds")]
    OutOfBounds {
        /// World X coordinate of the rejected write.
        x: i32,
        /// World Y coordinate of the rejected write.
        y: i32,
        /// World Z coordinate of the rejected write.
        z: i32,
    },

    /// A configuration value makes the grid's shape undefined.
    /// Fatal at startup, before any allocation or generation.
    #[error("invalid configuration: {field} must be positive, got {value}")]
    InvalidConfig {
        /// The offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A generation buffer does not match the configured grid volume.
    #[error("generation buffer holds {actual} cells, grid expects {expected}")]
    GridSizeMismatch {
        /// Cell count the configuration implies.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },

    /// Failed to read a configuration file.
    #[error("failed to read configuration file {path}")]
    ConfigIo {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message_names_coordinates() {
        let err = WorldError::OutOfBounds { x: -1, y: 2, z: 300 };
        assert_eq!(
            err.to_string(),
            "coordinates (-1, 2, 300) are outside the world bounds"
        );
    }

    #[test]
    fn test_invalid_config_message_names_field() {
        let err = WorldError::InvalidConfig {
            field: "chunk_diameter",
            value: 0,
        };
        assert!(err.to_string().contains("chunk_diameter"));
    }
}
