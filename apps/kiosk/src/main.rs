//! # Weidao Kiosk Entry Point
//!
//! Runs one ordering session on the terminal.
//!
//! ```text
//! stdin  ──► UiEvent lines (add 1, cat 主菜, cart, checkout, quit, ...)
//! stdout ◄── the rendered page after every event
//! stderr ◄── tracing logs
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    match weidao_kiosk_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("weidao-kiosk: {}", err);
            ExitCode::FAILURE
        }
    }
}
