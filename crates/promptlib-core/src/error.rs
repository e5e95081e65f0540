//! Error types and exit codes for promptlib
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing config, invalid frontmatter, unknown prompt)

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
    /// Data error - missing config, invalid frontmatter (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during promptlib operations
#[derive(Error, Debug)]
pub enum PromptlibError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("config not found (searched from {search_root:?})")]
    ConfigNotFound { search_root: PathBuf },

    #[error("content directory not found: {path:?}")]
    ContentDirNotFound { path: PathBuf },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("prompt not found: {id}")]
    PromptNotFound { id: String },

    #[error("category not found: {path}")]
    CategoryNotFound { path: String },

    #[error("{count} invalid prompt file(s)")]
    ValidationFailed { count: usize },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PromptlibError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PromptlibError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PromptlibError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        PromptlibError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PromptlibError::UnknownFormat(_)
            | PromptlibError::UsageError(_)
            | PromptlibError::InvalidValue { .. } => ExitCode::Usage,

            PromptlibError::ConfigNotFound { .. }
            | PromptlibError::ContentDirNotFound { .. }
            | PromptlibError::InvalidFrontmatter { .. }
            | PromptlibError::PromptNotFound { .. }
            | PromptlibError::CategoryNotFound { .. }
            | PromptlibError::ValidationFailed { .. }
            | PromptlibError::AlreadyExists { .. } => ExitCode::Data,

            PromptlibError::Io(_)
            | PromptlibError::Json(_)
            | PromptlibError::Toml(_)
            | PromptlibError::FailedOperationWithTarget { .. }
            | PromptlibError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PromptlibError::UnknownFormat(_) => "unknown_format",
            PromptlibError::UsageError(_) => "usage_error",
            PromptlibError::InvalidValue { .. } => "invalid_value",
            PromptlibError::ConfigNotFound { .. } => "config_not_found",
            PromptlibError::ContentDirNotFound { .. } => "content_dir_not_found",
            PromptlibError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            PromptlibError::PromptNotFound { .. } => "prompt_not_found",
            PromptlibError::CategoryNotFound { .. } => "category_not_found",
            PromptlibError::ValidationFailed { .. } => "validation_failed",
            PromptlibError::AlreadyExists { .. } => "already_exists",
            PromptlibError::Io(_) => "io_error",
            PromptlibError::Json(_) => "json_error",
            PromptlibError::Toml(_) => "toml_error",
            PromptlibError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PromptlibError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for promptlib operations
pub type Result<T> = std::result::Result<T, PromptlibError>;
