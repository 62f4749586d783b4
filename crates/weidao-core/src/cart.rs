//! # Cart
//!
//! The per-session shopping cart and its derived totals.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Click "加入购物车" / "+" ──► add(entry)                                  │
//! │       line exists? ── yes ──► quantity + 1 (position kept)              │
//! │                    └─ no ───► push snapshot line, quantity 1            │
//! │                                                                         │
//! │  Click "−" ─────────────────► decrement(id)                             │
//! │       quantity > 1 ─────────► quantity − 1 (position kept)              │
//! │       quantity == 1 ────────► line removed                              │
//! │       no line ──────────────► nothing happens                           │
//! │                                                                         │
//! │  Click "×" ─────────────────► delete(id)   (any quantity)               │
//! │                                                                         │
//! │  Totals are derived on every read, never stored.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `item_id`
//! - Every line has `quantity >= 1`; a line that would reach 0 is removed
//! - Lines keep insertion order
//! - No operation fails, whatever id it is given

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{effective_image, MenuEntry, MenuItemId};

// =============================================================================
// Cart Line
// =============================================================================

/// One dish in the cart.
///
/// ## Snapshot Pattern
/// The display fields and price are copied from the [`MenuEntry`] when the
/// dish is first added. The cart renders and totals from these copies, so it
/// needs no catalog at all, and a later price change would not touch lines
/// already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: MenuItemId,

    /// Display name at time of adding (frozen).
    pub name: String,

    /// Localized name at time of adding (frozen).
    pub name_zh: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Image reference at time of adding (frozen).
    pub image: Option<String>,

    /// Always >= 1.
    pub quantity: u32,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Snapshots `entry` into a fresh line with quantity 1.
    pub fn from_entry(entry: &MenuEntry) -> Self {
        CartLine {
            item_id: entry.id,
            name: entry.name.clone(),
            name_zh: entry.name_zh.clone(),
            unit_price: entry.price,
            image: entry.image.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    pub fn effective_image(&self) -> &str {
        effective_image(self.image.as_deref())
    }
}

// =============================================================================
// Cart Change
// =============================================================================

/// What a cart operation did.
///
/// Callers use it for logging and to skip re-rendering on no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CartChange {
    /// A new line was appended.
    Added { item_id: MenuItemId },
    /// An existing line went up by one.
    Incremented { item_id: MenuItemId, quantity: u32 },
    /// An existing line went down by one and is still present.
    Decremented { item_id: MenuItemId, quantity: u32 },
    /// A line left the cart.
    Removed { item_id: MenuItemId },
    /// Every line left the cart.
    Cleared,
    /// Nothing to do (unknown id, or clearing an empty cart).
    Unchanged,
}

impl CartChange {
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, CartChange::Unchanged)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Example
/// ```rust
/// use weidao_core::{Cart, Catalog, MenuItemId, Money};
///
/// let catalog = Catalog::reference();
/// let kung_pao = catalog.get(MenuItemId::new(1)).unwrap();
/// let mapo = catalog.get(MenuItemId::new(2)).unwrap();
///
/// let mut cart = Cart::new();
/// cart.add(kung_pao);
/// cart.add(kung_pao);
/// cart.add(mapo);
///
/// assert_eq!(cart.total_item_count(), 3);
/// assert_eq!(cart.subtotal().units(), 184);
/// assert_eq!(cart.grand_total(Money::from_units(5)).units(), 189);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one of `entry`.
    ///
    /// The entry is trusted as given; resolving ids against a catalog is the
    /// caller's job.
    pub fn add(&mut self, entry: &MenuEntry) -> CartChange {
        if let Some(line) = self.line_mut(entry.id) {
            line.quantity = line.quantity.saturating_add(1);
            return CartChange::Incremented {
                item_id: entry.id,
                quantity: line.quantity,
            };
        }

        self.lines.push(CartLine::from_entry(entry));
        CartChange::Added { item_id: entry.id }
    }

    /// Takes one of `id` out, dropping the line when it reaches zero.
    pub fn decrement(&mut self, id: MenuItemId) -> CartChange {
        let Some(index) = self.position(id) else {
            return CartChange::Unchanged;
        };

        let line = &mut self.lines[index];
        if line.quantity > 1 {
            line.quantity -= 1;
            return CartChange::Decremented {
                item_id: id,
                quantity: line.quantity,
            };
        }

        self.lines.remove(index);
        CartChange::Removed { item_id: id }
    }

    /// Removes the line for `id` whatever its quantity.
    pub fn delete(&mut self, id: MenuItemId) -> CartChange {
        match self.position(id) {
            Some(index) => {
                self.lines.remove(index);
                CartChange::Removed { item_id: id }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> CartChange {
        if self.lines.is_empty() {
            return CartChange::Unchanged;
        }

        self.lines.clear();
        CartChange::Cleared
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == id)
    }

    /// Quantity of `id` in the cart, 0 when absent.
    pub fn quantity_of(&self, id: MenuItemId) -> u32 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Number of distinct dishes.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of snapshot price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Subtotal plus the service fee.
    pub fn grand_total(&self, service_fee: Money) -> Money {
        self.subtotal() + service_fee
    }

    fn position(&self, id: MenuItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.item_id == id)
    }

    fn line_mut(&mut self, id: MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.item_id == id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub service_fee: Money,
    pub grand_total: Money,
}

impl CartTotals {
    pub fn compute(cart: &Cart, service_fee: Money) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_item_count(),
            subtotal: cart.subtotal(),
            service_fee,
            grand_total: cart.grand_total(service_fee),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
