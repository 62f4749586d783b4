//! # Weidao Kiosk Library
//!
//! The ordering session behind the kiosk binary: state, commands, the
//! event loop and the text renderer.
//!
//! ## Module Organization
//! ```text
//! weidao_kiosk_lib/
//! ├── lib.rs          ◄─── You are here (startup & event loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── Session, state type exports
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── view.rs     ◄─── Filter, cart sheet, layout
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Category bar and menu grid
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── view.rs     ◄─── Cart sheet and viewport commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── event.rs        ◄─── Input line ──► UiEvent
//! ├── render.rs       ◄─── Session ──► page text
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render page                                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  read line ──► UiEvent ──► dispatch ──► command ──► Outcome             │
//! │      ▲                                                 │                │
//! │      │         Render: draw page again                  │                │
//! │      │         Json:   print the response               │                │
//! │      │         Notice: draw page, then the notice       │                │
//! │      └──────── Error:  draw page, then the error ◄──────┘                │
//! │                                                                         │
//! │  Quit or end of input ends the session; the cart is discarded.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod event;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, info_span, warn};
use tracing_subscriber::EnvFilter;

use commands::{cart, config, menu, view};
use error::ApiError;
use event::{ParseEventError, UiEvent};
use state::{ConfigState, Session};

const PROMPT: &str = "> ";

/// What the surface should show after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Json(String),
    Notice(String),
    Quit,
}

/// Runs one event against the session.
pub fn dispatch(session: &mut Session, event: UiEvent) -> Result<Outcome, ApiError> {
    let Session {
        catalog,
        cart: cart_state,
        view: view_state,
        config: config_state,
        ..
    } = session;

    match event {
        UiEvent::Add(id) => {
            cart::add_to_cart(catalog, cart_state, config_state, id)?;
        }
        UiEvent::Decrement(id) => {
            cart::decrement_cart_item(cart_state, config_state, id);
        }
        UiEvent::Delete(id) => {
            cart::remove_from_cart(cart_state, config_state, id);
        }
        UiEvent::Clear => {
            cart::clear_cart(cart_state, config_state);
        }
        UiEvent::SelectCategory(label) => {
            menu::select_category(catalog, view_state, config_state, &label);
        }
        UiEvent::ToggleCart => {
            view::toggle_cart_panel(view_state, config_state);
        }
        UiEvent::CloseCart => {
            view::close_cart_panel(view_state, config_state);
        }
        UiEvent::Resize(width) => {
            view::set_viewport_width(view_state, config_state, width);
        }
        UiEvent::Checkout => {
            let response = cart::checkout(cart_state, config_state);
            let notice = if response.items.is_empty() {
                "购物车是空的".to_string()
            } else {
                format!(
                    "订单合计 {}，在线下单暂未开放",
                    config_state.format_currency(response.totals.grand_total)
                )
            };
            return Ok(Outcome::Notice(notice));
        }
        UiEvent::DumpJson => {
            let response = cart::get_cart(cart_state, config_state);
            return Ok(Outcome::Json(serde_json::to_string_pretty(&response)?));
        }
        UiEvent::ShowConfig => {
            let config = config::get_config(config_state);
            return Ok(Outcome::Json(serde_json::to_string_pretty(&config)?));
        }
        UiEvent::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Render)
}

/// Reads events line by line until `quit` or end of input.
pub fn run_session<R, W>(session: &mut Session, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}{}", render::render_page(session), PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        let result = match line.parse::<UiEvent>() {
            Ok(event) => dispatch(session, event),
            Err(ParseEventError::Empty) => Ok(Outcome::Render),
            Err(e) => Err(ApiError::from(e)),
        };

        match result {
            Ok(Outcome::Render) => write!(output, "{}", render::render_page(session))?,
            Ok(Outcome::Json(json)) => writeln!(output, "{}", json)?,
            Ok(Outcome::Notice(notice)) => {
                write!(output, "{}", render::render_page(session))?;
                writeln!(output, "* {}", notice)?;
            }
            Ok(Outcome::Quit) => break,
            Err(err) => {
                warn!(code = ?err.code, "{}", err.message);
                write!(output, "{}", render::render_page(session))?;
                writeln!(output, "! {}", err.message)?;
            }
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    info!(
        revision = session.cart.revision(),
        lines = session.cart.cart().line_count(),
        "session ended; cart discarded"
    );
    writeln!(output)?;
    Ok(())
}

/// Runs the kiosk on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr)
/// 2. Load configuration from `WEIDAO_*` variables
/// 3. Start a session over the reference menu
/// 4. Loop over input lines until `quit`
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Weidao ordering kiosk");

    let config = ConfigState::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    let mut session = Session::new(config);
    let span = info_span!("session", session_id = %session.id);
    let _guard = span.enter();

    info!(
        store = %session.config.store_name,
        dishes = session.catalog.len(),
        layout = ?session.layout(),
        "Session started"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut session, stdin.lock(), &mut stdout)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=weidao=trace` - Show trace for weidao crates only
/// - Default: INFO, DEBUG for weidao crates
///
/// Logs go to stderr; stdout carries the page.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,weidao=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use weidao_core::MenuItemId;

    fn session() -> Session {
        Session::new(ConfigState::default())
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut output = Vec::new();
        run_session(session, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_dispatch_cart_events() {
        let mut session = session();

        dispatch(&mut session, UiEvent::Add(MenuItemId::new(1))).unwrap();
        dispatch(&mut session, UiEvent::Add(MenuItemId::new(1))).unwrap();
        dispatch(&mut session, UiEvent::Add(MenuItemId::new(2))).unwrap();
        assert_eq!(session.cart.cart().subtotal().units(), 184);

        dispatch(&mut session, UiEvent::Decrement(MenuItemId::new(2))).unwrap();
        assert_eq!(session.cart.cart().line_count(), 1);

        dispatch(&mut session, UiEvent::Delete(MenuItemId::new(1))).unwrap();
        assert!(session.cart.cart().is_empty());
    }

    #[test]
    fn test_dispatch_unknown_dish() {
        let mut session = session();

        let err = dispatch(&mut session, UiEvent::Add(MenuItemId::new(99))).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(session.cart.revision(), 0);
    }

    #[test]
    fn test_dispatch_checkout_keeps_cart() {
        let mut session = session();
        dispatch(&mut session, UiEvent::Add(MenuItemId::new(4))).unwrap();

        let outcome = dispatch(&mut session, UiEvent::Checkout).unwrap();
        assert_eq!(
            outcome,
            Outcome::Notice("订单合计 ¥43，在线下单暂未开放".to_string())
        );
        assert_eq!(session.cart.cart().quantity_of(MenuItemId::new(4)), 1);
    }

    #[test]
    fn test_dispatch_json() {
        let mut session = session();
        dispatch(&mut session, UiEvent::Add(MenuItemId::new(6))).unwrap();

        let Outcome::Json(json) = dispatch(&mut session, UiEvent::DumpJson).unwrap() else {
            panic!("expected JSON outcome");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totals"]["subtotal"], 32);
        assert_eq!(value["totals"]["grandTotal"], 37);
        assert_eq!(value["items"][0]["nameZh"], "春卷");

        let Outcome::Json(json) = dispatch(&mut session, UiEvent::ShowConfig).unwrap() else {
            panic!("expected JSON outcome");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["storeName"], "味道餐厅");
    }

    #[test]
    fn test_dispatch_quit() {
        let mut session = session();
        assert_eq!(dispatch(&mut session, UiEvent::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_run_session_script() {
        let mut session = session();
        let output = run_script(&mut session, "add 1\nadd 1\nadd 2\nquit\nadd 3\n");

        assert!(output.contains("[购物车 (3)]"));
        assert!(output.contains("总计    ¥189"));
        // Input after quit is ignored
        assert_eq!(session.cart.cart().quantity_of(MenuItemId::new(3)), 0);
    }

    #[test]
    fn test_run_session_reports_errors() {
        let mut session = session();
        let output = run_script(&mut session, "order 1\nadd 42\n\n");

        assert!(output.contains("! unknown command: order"));
        assert!(output.contains("! Menu item not found: 42"));
        assert!(session.cart.cart().is_empty());
    }

    #[test]
    fn test_run_session_ends_at_eof() {
        let mut session = session();
        let output = run_script(&mut session, "cat 汤品\n");

        assert!(output.contains("[汤品]"));
        assert!(output.ends_with('\n'));
    }
}
