//! # Config Commands
//!
//! Retrieves the application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - Screen start-up (store name, currency)
/// - Showing the tax rate next to the tax line
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
