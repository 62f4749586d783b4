//! # API Error Type
//!
//! Unified error type for kiosk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  input line ──► UiEvent::from_str ── ParseEventError ──┐                │
//! │                       │                                │                │
//! │                       ▼                                ▼                │
//! │                 command function ── CoreError ────► ApiError ──► shown  │
//! │                       │                                   under the page│
//! │                       ▼                                                 │
//! │                 Ok(response) ──► re-render                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never fail, so the only core error a command can hit
//! is an id the catalog does not know.

use serde::Serialize;
use ts_rs::TS;
use weidao_core::{CoreError, MenuItemId};

use crate::event::ParseEventError;

/// What went wrong with one kiosk event.
///
/// The loop prints `message` under the re-rendered page; `code` is there
/// for a front end that wants to branch on it.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu item not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// Where the failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `add <id>` named a dish the menu does not have.
    NotFound,

    /// A menu failed its entry rules while being loaded.
    ValidationError,

    /// The input line did not parse as an event.
    InvalidEvent,

    /// A response could not be encoded for the `json`/`config` dumps.
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn unknown_dish(id: MenuItemId) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("Menu item not found: {}", id))
    }

    pub fn invalid_menu(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn encoding_failed() -> Self {
        ApiError::new(ErrorCode::Internal, "Could not encode response")
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuItemNotFound(id) => ApiError::unknown_dish(id),
            CoreError::DuplicateMenuItem(id) => {
                ApiError::invalid_menu(format!("Menu item {} is listed twice", id))
            }
            CoreError::Validation(e) => ApiError::invalid_menu(e.to_string()),
        }
    }
}

impl From<ParseEventError> for ApiError {
    fn from(err: ParseEventError) -> Self {
        ApiError::new(ErrorCode::InvalidEvent, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!(error = %err, "Response serialization failed");
        ApiError::encoding_failed()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
