//! # API Error Type
//!
//! Unified error type for screen commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Lunch Tray                             │
//! │                                                                         │
//! │  "entree tofu"                                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command Function ── Result<T, ApiError>                                │
//! │         │                                                               │
//! │         ├── CoreError::CatalogMiss ──────► NOT_FOUND                    │
//! │         ├── CoreError::Validation ───────► VALIDATION_ERROR             │
//! │         ├── unknown command ─────────────► INVALID_COMMAND              │
//! │         └── submit on partial order ─────► ORDER_INCOMPLETE             │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"NOT_FOUND","message":"..."}}              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tray_core::CoreError;
use ts_rs::TS;

use crate::state::ConfigError;

/// Error returned from a screen command.
///
/// ```json
/// { "code": "NOT_FOUND", "message": "Menu item not found: tofu" }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Menu item not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Command not recognised or missing an argument
    InvalidCommand,

    /// Submit requested before every category was chosen
    OrderIncomplete,

    /// Configuration or menu file problem
    ConfigError,

    /// Internal error (a bug)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CatalogMiss(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::Validation(_) => {
                ApiError::new(ErrorCode::ValidationError, err.to_string())
            }
            CoreError::DuplicateItem(_) | CoreError::InvalidCatalog(_) => {
                ApiError::new(ErrorCode::ConfigError, err.to_string())
            }
            CoreError::InconsistentTotals { .. } => {
                tracing::error!("{}", err);
                ApiError::internal("Order totals are inconsistent")
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}
