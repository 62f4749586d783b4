//! # Configuration State
//!
//! Stores kiosk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`WEIDAO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use weidao_core::validation::validate_service_fee;
use weidao_core::{Money, DEFAULT_SERVICE_FEE, PLACEHOLDER_IMAGE};

/// Viewport width (px) from which the cart is shown inline beside the menu.
pub const DEFAULT_WIDE_BREAKPOINT: u32 = 1024;

/// Viewport width assumed until the surface reports one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Kiosk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Restaurant name shown in the header.
    pub store_name: String,

    /// Line under the store name.
    pub tagline: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Flat fee added to every order.
    pub service_fee: Money,

    /// Image shown for dishes without one.
    pub placeholder_image: String,

    /// Viewport width (px) at which the layout switches to wide.
    pub wide_breakpoint: u32,

    /// Initial viewport width (px).
    pub viewport_width: u32,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "味道餐厅".to_string(),
            tagline: "正宗中餐，现点现做".to_string(),
            currency_symbol: "¥".to_string(),
            service_fee: DEFAULT_SERVICE_FEE,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            wide_breakpoint: DEFAULT_WIDE_BREAKPOINT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `WEIDAO_STORE_NAME`, `WEIDAO_TAGLINE`
    /// - `WEIDAO_CURRENCY_SYMBOL`
    /// - `WEIDAO_SERVICE_FEE`: whole currency units, e.g. "5"
    /// - `WEIDAO_PLACEHOLDER_IMAGE`
    /// - `WEIDAO_WIDE_BREAKPOINT`, `WEIDAO_VIEWPORT_WIDTH`: pixels
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// every key it returns `None` for.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("WEIDAO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(tagline) = lookup("WEIDAO_TAGLINE") {
            config.tagline = tagline;
        }

        if let Some(symbol) = lookup("WEIDAO_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(placeholder) = lookup("WEIDAO_PLACEHOLDER_IMAGE") {
            if placeholder.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "WEIDAO_PLACEHOLDER_IMAGE".to_string(),
                ));
            }
            config.placeholder_image = placeholder;
        }

        if let Some(fee) = lookup("WEIDAO_SERVICE_FEE") {
            let units: i64 = fee
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WEIDAO_SERVICE_FEE".to_string()))?;
            let fee = Money::from_units(units);
            validate_service_fee(fee)
                .map_err(|_| ConfigError::InvalidValue("WEIDAO_SERVICE_FEE".to_string()))?;
            config.service_fee = fee;
        }

        if let Some(px) = lookup("WEIDAO_WIDE_BREAKPOINT") {
            config.wide_breakpoint = parse_pixels("WEIDAO_WIDE_BREAKPOINT", &px)?;
        }

        if let Some(px) = lookup("WEIDAO_VIEWPORT_WIDTH") {
            config.viewport_width = parse_pixels("WEIDAO_VIEWPORT_WIDTH", &px)?;
        }

        Ok(config)
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use weidao_kiosk_lib::state::ConfigState;
    /// use weidao_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_units(189)), "¥189");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.units().unsigned_abs()
        )
    }
}

fn parse_pixels(key: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
