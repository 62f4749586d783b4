//! # UI Events
//!
//! One input line is one user action.
//!
//! ## Grammar
//! ```text
//! add <id>       加入购物车 / "+"
//! dec <id>       "−"
//! del <id>       "×"
//! clear          empty the cart
//! cat <label>    category bar (全部, 主菜, 主食, 汤品, 小食)
//! cart           toggle the cart sheet (narrow layout)
//! close          close the cart sheet
//! width <px>     the surface was resized
//! checkout       结算订单
//! json           dump the cart response as JSON
//! config         dump the kiosk configuration as JSON
//! quit           end the session
//! ```

use std::str::FromStr;

use thiserror::Error;
use weidao_core::MenuItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Add(MenuItemId),
    Decrement(MenuItemId),
    Delete(MenuItemId),
    Clear,
    SelectCategory(String),
    ToggleCart,
    CloseCart,
    Resize(u32),
    Checkout,
    DumpJson,
    ShowConfig,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} needs an argument")]
    MissingArgument { command: &'static str },

    #[error("{command} expects a number, got {value:?}")]
    InvalidNumber { command: &'static str, value: String },

    #[error("{command} takes no argument")]
    UnexpectedArgument { command: &'static str },
}

impl FromStr for UiEvent {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseEventError::Empty);
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };

        match command {
            "add" => Ok(UiEvent::Add(parse_id("add", arg)?)),
            "dec" => Ok(UiEvent::Decrement(parse_id("dec", arg)?)),
            "del" => Ok(UiEvent::Delete(parse_id("del", arg)?)),
            "cat" => arg
                .map(|label| UiEvent::SelectCategory(label.to_string()))
                .ok_or(ParseEventError::MissingArgument { command: "cat" }),
            "width" => Ok(UiEvent::Resize(parse_number("width", arg)?)),
            "clear" => bare("clear", arg, UiEvent::Clear),
            "cart" => bare("cart", arg, UiEvent::ToggleCart),
            "close" => bare("close", arg, UiEvent::CloseCart),
            "checkout" => bare("checkout", arg, UiEvent::Checkout),
            "json" => bare("json", arg, UiEvent::DumpJson),
            "config" => bare("config", arg, UiEvent::ShowConfig),
            "quit" | "exit" => bare("quit", arg, UiEvent::Quit),
            other => Err(ParseEventError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, arg: Option<&str>) -> Result<MenuItemId, ParseEventError> {
    parse_number(command, arg).map(MenuItemId::new)
}

fn parse_number(command: &'static str, arg: Option<&str>) -> Result<u32, ParseEventError> {
    let value = arg.ok_or(ParseEventError::MissingArgument { command })?;
    value.parse().map_err(|_| ParseEventError::InvalidNumber {
        command,
        value: value.to_string(),
    })
}

fn bare(command: &'static str, arg: Option<&str>, event: UiEvent) -> Result<UiEvent, ParseEventError> {
    match arg {
        Some(_) => Err(ParseEventError::UnexpectedArgument { command }),
        None => Ok(event),
    }
}
