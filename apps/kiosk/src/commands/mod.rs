//! # Commands Module
//!
//! One function per user action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Category bar, menu grid
//! ├── cart.rs     ◄─── Cart manipulation, checkout
//! ├── view.rs     ◄─── Cart sheet, viewport
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog and the view
//! fn list_menu(catalog: &Catalog, view: &ViewState, config: &ConfigState)
//!
//! // Needs the catalog to resolve the id, and the cart to change
//! fn add_to_cart(catalog: &Catalog, cart: &mut CartState, config: &ConfigState, item_id: MenuItemId)
//! ```
//! Every command returns a serializable response, so the same functions
//! could sit behind any front end.

pub mod cart;
pub mod config;
pub mod menu;
pub mod view;
