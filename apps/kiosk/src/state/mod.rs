//! # State Module
//!
//! Manages the state of one ordering session.
//!
//! ## State Types
//! Instead of one struct with every field, the session is split into
//! focused parts so each command takes only what it touches:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session                                              │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │   Catalog    │  │  CartState   │  │  ViewState   │  │ ConfigState │ │
//! │  │              │  │              │  │              │  │             │ │
//! │  │  fixed menu  │  │  owned Cart  │  │  filter      │  │ fee         │ │
//! │  │  (read only) │  │  revision    │  │  sheet flag  │  │ currency    │ │
//! │  │              │  │              │  │  viewport    │  │ breakpoint  │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘ │
//! │                                                                         │
//! │  OWNERSHIP: one session, one thread. No Arc, no Mutex.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod view;

pub use cart::CartState;
pub use config::{ConfigError, ConfigState, DEFAULT_VIEWPORT_WIDTH, DEFAULT_WIDE_BREAKPOINT};
pub use view::{LayoutMode, ViewState};

use uuid::Uuid;
use weidao_core::Catalog;

/// Everything one customer's visit to the ordering page needs.
///
/// Dropping the session discards the cart; nothing is saved.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub catalog: Catalog,
    pub cart: CartState,
    pub view: ViewState,
    pub config: ConfigState,
}

impl Session {
    /// Starts a session over the reference menu.
    pub fn new(config: ConfigState) -> Self {
        Session {
            id: Uuid::new_v4(),
            catalog: Catalog::reference(),
            cart: CartState::new(),
            view: ViewState::new(config.viewport_width),
            config,
        }
    }

    /// Current layout for the configured breakpoint.
    pub fn layout(&self) -> LayoutMode {
        self.view.layout(self.config.wide_breakpoint)
    }
}
