//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current kiosk configuration (read-only).
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
