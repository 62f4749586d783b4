//! # View State
//!
//! Presentation-only state: the selected category, whether the cart sheet
//! is open, and how wide the surface is. None of it touches the cart or the
//! catalog; every setter is last-write-wins.
//!
//! ## Layout Rules
//! ```text
//! viewport >= breakpoint  ──► Wide    cart panel always shown beside the menu
//! viewport <  breakpoint  ──► Narrow  cart sheet shown only while open
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use weidao_core::CategoryFilter;

/// How the page is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Menu grid plus an inline cart panel.
    Wide,
    /// Menu grid only; cart opens as a modal sheet.
    Narrow,
}

impl LayoutMode {
    pub fn for_width(viewport_width: u32, wide_breakpoint: u32) -> Self {
        if viewport_width >= wide_breakpoint {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected: CategoryFilter,
    cart_panel_open: bool,
    viewport_width: u32,
}

impl ViewState {
    pub fn new(viewport_width: u32) -> Self {
        ViewState {
            selected: CategoryFilter::All,
            cart_panel_open: false,
            viewport_width,
        }
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    pub fn cart_panel_open(&self) -> bool {
        self.cart_panel_open
    }

    /// Flips the cart sheet flag and returns the new value.
    pub fn toggle_cart_panel(&mut self) -> bool {
        self.cart_panel_open = !self.cart_panel_open;
        self.cart_panel_open
    }

    pub fn close_cart_panel(&mut self) {
        self.cart_panel_open = false;
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn layout(&self, wide_breakpoint: u32) -> LayoutMode {
        LayoutMode::for_width(self.viewport_width, wide_breakpoint)
    }

    /// Whether the cart should be drawn at all.
    pub fn cart_visible(&self, wide_breakpoint: u32) -> bool {
        match self.layout(wide_breakpoint) {
            LayoutMode::Wide => true,
            LayoutMode::Narrow => self.cart_panel_open,
        }
    }
}
