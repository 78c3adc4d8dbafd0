//! Error types and exit codes for rotas
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown origin, invalid network, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rotas operations
#[derive(Error, Debug)]
pub enum RotasError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("unknown origin: {origin}")]
    UnknownOrigin { origin: String },

    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("negative travel time on edge {from} -> {to}: {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("non-finite travel time on edge {from} -> {to}: {weight}")]
    NonFiniteWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid network in {path:?}: {reason}")]
    InvalidNetwork { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RotasError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RotasError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RotasError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    pub fn unknown_origin(origin: impl std::fmt::Display) -> Self {
        RotasError::UnknownOrigin {
            origin: origin.to_string(),
        }
    }

    pub fn unknown_node(node: impl std::fmt::Display) -> Self {
        RotasError::UnknownNode {
            node: node.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RotasError::UnknownFormat(_)
            | RotasError::UsageError(_)
            | RotasError::InvalidValue { .. }
            | RotasError::Unsupported { .. } => ExitCode::Usage,

            RotasError::UnknownOrigin { .. }
            | RotasError::UnknownNode { .. }
            | RotasError::NegativeWeight { .. }
            | RotasError::NonFiniteWeight { .. }
            | RotasError::InvalidNetwork { .. } => ExitCode::Data,

            RotasError::Io(_)
            | RotasError::Yaml(_)
            | RotasError::Json(_)
            | RotasError::Toml(_)
            | RotasError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RotasError::UnknownFormat(_) => "unknown_format",
            RotasError::UsageError(_) => "usage_error",
            RotasError::InvalidValue { .. } => "invalid_value",
            RotasError::Unsupported { .. } => "unsupported",
            RotasError::UnknownOrigin { .. } => "unknown_origin",
            RotasError::UnknownNode { .. } => "unknown_node",
            RotasError::NegativeWeight { .. } => "negative_weight",
            RotasError::NonFiniteWeight { .. } => "non_finite_weight",
            RotasError::InvalidNetwork { .. } => "invalid_network",
            RotasError::Io(_) => "io_error",
            RotasError::Yaml(_) => "yaml_error",
            RotasError::Json(_) => "json_error",
            RotasError::Toml(_) => "toml_error",
            RotasError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rotas operations
pub type Result<T> = std::result::Result<T, RotasError>;
