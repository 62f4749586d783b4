//! # Cart Commands
//!
//! Commands behind the cart buttons.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  checkout   ┌──────────────┐  │
//! │  │  Empty   │───────────────►│ In Cart  │────────────►│ (no-op: the  │  │
//! │  │  Cart    │◄───────────────│          │             │  order is    │  │
//! │  └──────────┘  last line     └──────────┘             │  not sent)   │  │
//! │        ▲       removed /          │                   └──────────────┘  │
//! │        │       clear_cart    decrement_cart_item                        │
//! │        │                     remove_from_cart                           │
//! │        └──────────────── session ends: cart discarded                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;
use weidao_core::{Cart, CartChange, CartLine, CartTotals, Catalog, MenuItemId};

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
    /// Bumped every time the cart is replaced.
    pub revision: u64,
    /// What the command did to the cart.
    pub change: CartChange,
}

impl CartResponse {
    fn build(state: &CartState, config: &ConfigState, change: CartChange) -> Self {
        state.with_cart(|cart: &Cart| CartResponse {
            items: cart.lines().to_vec(),
            totals: CartTotals::compute(cart, config.service_fee),
            revision: state.revision(),
            change,
        })
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::build(cart, config, CartChange::Unchanged)
}

/// Adds one of a dish to the cart.
///
/// ## Behavior
/// - Unknown id: `NOT_FOUND`, cart untouched
/// - Dish already in cart: quantity + 1
/// - Otherwise: new line with the dish's current price frozen in
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &mut CartState,
    config: &ConfigState,
    item_id: MenuItemId,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let entry = catalog.require(item_id)?;
    let change = cart.update(|c| c.add(entry));

    Ok(CartResponse::build(cart, config, change))
}

/// Takes one of a dish out of the cart, removing the line at zero.
///
/// An id that is not in the cart is a no-op, not an error.
pub fn decrement_cart_item(
    cart: &mut CartState,
    config: &ConfigState,
    item_id: MenuItemId,
) -> CartResponse {
    debug!(item_id = %item_id, "decrement_cart_item command");

    let change = cart.update(|c| c.decrement(item_id));
    CartResponse::build(cart, config, change)
}

/// Removes a dish from the cart whatever its quantity.
pub fn remove_from_cart(
    cart: &mut CartState,
    config: &ConfigState,
    item_id: MenuItemId,
) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");

    let change = cart.update(|c| c.delete(item_id));
    CartResponse::build(cart, config, change)
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &mut CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    let change = cart.update(Cart::clear);
    CartResponse::build(cart, config, change)
}

/// The "结算订单" button.
///
/// Order submission does not exist; this records the request and leaves
/// the cart exactly as it was.
pub fn checkout(cart: &CartState, config: &ConfigState) -> CartResponse {
    let response = CartResponse::build(cart, config, CartChange::Unchanged);

    info!(
        lines = response.totals.line_count,
        quantity = response.totals.total_quantity,
        grand_total = %response.totals.grand_total,
        "checkout requested; order submission is not available"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (Catalog, CartState, ConfigState) {
        (Catalog::reference(), CartState::new(), ConfigState::default())
    }

    #[test]
    fn test_add_to_cart_reference_totals() {
        let (catalog, mut cart, config) = setup();

        add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(1)).unwrap();
        add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(1)).unwrap();
        let response = add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(2)).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].name_zh, "宫保鸡丁");
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.totals.subtotal.units(), 184);
        assert_eq!(response.totals.grand_total.units(), 189);
        assert_eq!(response.revision, 3);
    }

    #[test]
    fn test_add_unknown_item_is_not_found() {
        let (catalog, mut cart, config) = setup();

        let err = add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(99)).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.cart().is_empty());
        assert_eq!(cart.revision(), 0);
    }

    #[test]
    fn test_decrement_and_remove() {
        let (catalog, mut cart, config) = setup();
        let fish = MenuItemId::new(8);

        add_to_cart(&catalog, &mut cart, &config, fish).unwrap();
        add_to_cart(&catalog, &mut cart, &config, fish).unwrap();

        let response = decrement_cart_item(&mut cart, &config, fish);
        assert_eq!(response.items[0].quantity, 1);
        assert!(matches!(response.change, CartChange::Decremented { quantity: 1, .. }));

        let response = remove_from_cart(&mut cart, &config, fish);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.subtotal.units(), 0);
    }

    #[test]
    fn test_noops_do_not_bump_revision() {
        let (_, mut cart, config) = setup();

        let response = decrement_cart_item(&mut cart, &config, MenuItemId::new(4));
        assert_eq!(response.change, CartChange::Unchanged);
        let response = remove_from_cart(&mut cart, &config, MenuItemId::new(4));
        assert_eq!(response.revision, 0);
    }

    #[test]
    fn test_clear_cart() {
        let (catalog, mut cart, config) = setup();
        add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(5)).unwrap();

        let response = clear_cart(&mut cart, &config);
        assert_eq!(response.change, CartChange::Cleared);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_checkout_leaves_cart_alone() {
        let (catalog, mut cart, config) = setup();
        add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(6)).unwrap();
        let before = cart.cart().clone();

        let response = checkout(&cart, &config);

        assert_eq!(cart.cart(), &before);
        assert_eq!(response.totals.grand_total.units(), 32 + 5);
    }

    #[test]
    fn test_service_fee_from_config() {
        let (catalog, mut cart, mut config) = setup();
        config.service_fee = weidao_core::Money::from_units(10);

        let response = add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(4)).unwrap();
        assert_eq!(response.totals.grand_total.units(), 48);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let (catalog, mut cart, config) = setup();
        let response = add_to_cart(&catalog, &mut cart, &config, MenuItemId::new(3)).unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["nameZh"], "糖醋里脊");
        assert_eq!(json["items"][0]["unitPrice"], 58);
        assert_eq!(json["totals"]["grandTotal"], 63);
        assert_eq!(json["change"]["kind"], "added");
    }
}
