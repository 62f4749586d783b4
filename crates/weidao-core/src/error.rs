//! # Error Types
//!
//! Domain-specific error types for weidao-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  weidao-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog / lookup failures                      │
//! │  └── ValidationError  - Menu data that breaks the rules                │
//! │                                                                         │
//! │  kiosk errors (in app)                                                 │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail; every error here comes from
//! building a catalog or resolving an id against it.

use thiserror::Error;

use crate::types::MenuItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No menu entry carries this id.
    ///
    /// ## When This Occurs
    /// - The front end sends an id from a stale menu
    /// - A hand-typed event names a dish that does not exist
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    /// Two catalog entries share an id.
    #[error("Duplicate menu item id: {0}")]
    DuplicateMenuItem(MenuItemId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Amount must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Amount is above the accepted ceiling.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
