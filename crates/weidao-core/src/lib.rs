//! # weidao-core: Pure Ordering Logic for the Weidao Menu
//!
//! This crate holds the menu catalog, the shopping cart and the money math
//! behind the ordering page, as plain data and pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Weidao Ordering                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Rendering surface (kiosk)                      │   │
//! │  │    Category bar ──► Menu grid ──► Cart panel / Cart sheet       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ UI events                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Kiosk commands                               │   │
//! │  │    add_to_cart, decrement_cart_item, select_category, etc.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ weidao-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   cart    │  │   money   │  │   │
//! │  │   │ MenuEntry │  │  filter   │  │ CartLine  │  │   Money   │  │   │
//! │  │   │ Category  │  │  lookup   │  │ CartTotals│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO THREADS • NO ASYNC • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu types (MenuEntry, Category, CategoryFilter)
//! - [`catalog`] - The fixed menu and category filtering
//! - [`cart`] - Cart lines, cart operations and totals
//! - [`money`] - Integer money
//! - [`error`] - Domain error types
//! - [`validation`] - Menu entry rules
//!
//! ## Example Usage
//!
//! ```rust
//! use weidao_core::{Cart, Catalog, CartTotals, DEFAULT_SERVICE_FEE};
//!
//! let catalog = Catalog::reference();
//! let mut cart = Cart::new();
//!
//! for entry in catalog.filter_by_label("小食") {
//!     cart.add(entry);
//! }
//!
//! let totals = CartTotals::compute(&cart, DEFAULT_SERVICE_FEE);
//! assert_eq!(totals.subtotal.units(), 32 + 36);
//! assert_eq!(totals.grand_total.units(), 32 + 36 + 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartChange, CartLine, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category bar label meaning "no category restriction".
pub const ALL_CATEGORIES_LABEL: &str = "全部";

/// Image reference substituted when a dish has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Service fee added to every order unless configured otherwise.
pub const DEFAULT_SERVICE_FEE: Money = Money::from_units(5);
