//! # Cart State
//!
//! Owns the session's cart and tells the renderer when it changed.
//!
//! ## Replace-Wholesale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Updates                                   │
//! │                                                                         │
//! │  UI Event              Command                  Cart State Change       │
//! │  ────────              ───────                  ─────────────────       │
//! │                                                                         │
//! │  "加入购物车" ──────────► add_to_cart() ────────► update(|c| c.add(..))   │
//! │  "−" ──────────────────► decrement_cart_item() ─► update(|c| c.decr..)  │
//! │  "×" ──────────────────► remove_from_cart() ────► update(|c| c.delete)  │
//! │                                                                         │
//! │  update():                                                              │
//! │    1. clone the current cart into a working copy                        │
//! │    2. run the operation on the copy                                     │
//! │    3. changed? swap the copy in and bump `revision`                     │
//! │                                                                         │
//! │  Responses carry the revision so a surface can skip stale redraws.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is single-threaded and owns this value outright, so plain
//! `&mut` access is all the synchronisation it needs.

use weidao_core::{Cart, CartChange};

/// Session-owned cart plus a change counter.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Cart,
    revision: u64,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Cart::new(),
            revision: 0,
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.cart)
    }

    /// Runs `op` on a copy of the cart and installs the copy if it changed.
    ///
    /// ## Usage
    /// ```rust
    /// use weidao_core::Catalog;
    /// use weidao_kiosk_lib::state::CartState;
    ///
    /// let catalog = Catalog::reference();
    /// let mut state = CartState::new();
    /// state.update(|cart| cart.add(&catalog.list_all()[0]));
    /// assert_eq!(state.revision(), 1);
    /// ```
    pub fn update<F>(&mut self, op: F) -> CartChange
    where
        F: FnOnce(&mut Cart) -> CartChange,
    {
        let mut next = self.cart.clone();
        let change = op(&mut next);

        if !change.is_unchanged() {
            self.cart = next;
            self.revision += 1;
        }

        change
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Number of times the cart has been replaced this session.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weidao_core::{Catalog, MenuItemId};

    #[test]
    fn test_update_bumps_revision_on_change() {
        let catalog = Catalog::reference();
        let dumplings = catalog.get(MenuItemId::new(7)).unwrap();
        let mut state = CartState::new();

        state.update(|c| c.add(dumplings));
        state.update(|c| c.add(dumplings));

        assert_eq!(state.revision(), 2);
        assert_eq!(state.with_cart(|c| c.total_item_count()), 2);
    }

    #[test]
    fn test_noop_keeps_revision() {
        let mut state = CartState::new();

        let change = state.update(|c| c.decrement(MenuItemId::new(1)));
        assert!(change.is_unchanged());
        assert_eq!(state.revision(), 0);

        state.update(|c| c.clear());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_cart_starts_empty() {
        let state = CartState::default();
        assert!(state.cart().is_empty());
    }
}
