//! # View Commands
//!
//! The cart button in the header, the sheet's close button, and resizes.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::state::{ConfigState, LayoutMode, ViewState};

/// Where the cart is drawn after a view change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub layout: LayoutMode,
    pub viewport_width: u32,
    pub cart_panel_open: bool,
    pub cart_visible: bool,
}

impl ViewResponse {
    fn build(view: &ViewState, config: &ConfigState) -> Self {
        ViewResponse {
            layout: view.layout(config.wide_breakpoint),
            viewport_width: view.viewport_width(),
            cart_panel_open: view.cart_panel_open(),
            cart_visible: view.cart_visible(config.wide_breakpoint),
        }
    }
}

pub fn get_view(view: &ViewState, config: &ConfigState) -> ViewResponse {
    ViewResponse::build(view, config)
}

/// Header cart button. Only matters on narrow layouts.
pub fn toggle_cart_panel(view: &mut ViewState, config: &ConfigState) -> ViewResponse {
    let open = view.toggle_cart_panel();
    debug!(open, "toggle_cart_panel command");
    ViewResponse::build(view, config)
}

pub fn close_cart_panel(view: &mut ViewState, config: &ConfigState) -> ViewResponse {
    debug!("close_cart_panel command");
    view.close_cart_panel();
    ViewResponse::build(view, config)
}

pub fn set_viewport_width(view: &mut ViewState, config: &ConfigState, width: u32) -> ViewResponse {
    debug!(width, "set_viewport_width command");
    view.set_viewport_width(width);
    ViewResponse::build(view, config)
}
