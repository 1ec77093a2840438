//! # Commands Module
//!
//! All commands the ordering screen can issue.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing & dispatch)
//! ├── menu.rs     ◄─── Menu listing
//! ├── order.rs    ◄─── Selections, submit, cancel
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin:  "side soup"                                                    │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  Command::parse ──► Command::Select(Side, "soup")                       │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  dispatch ──► order::set_side(session, catalog, config, "soup")         │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  stdout: {"ok":true,"data":{"side":{...},"subtotal":"$3.00",...}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod menu;
pub mod order;

use serde::Serialize;
use tray_core::{Category, CoreError};

use crate::error::ApiError;
use crate::AppContext;

/// A parsed screen command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `menu [category]`
    Menu(Option<Category>),
    /// `entree <id>`, `side <id>`, `accompaniment <id>`
    Select(Category, String),
    /// `order`
    Order,
    /// `submit`
    Submit,
    /// `cancel`
    Cancel,
    /// `config`
    Config,
    /// `quit` or `exit`
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();

        if words.next().is_some() {
            return Err(ApiError::invalid_command(format!(
                "Too many arguments for '{}'",
                verb
            )));
        }

        let command = match (verb.as_str(), arg) {
            ("menu", None) => Command::Menu(None),
            ("menu", Some(category)) => {
                let category = category
                    .parse::<Category>()
                    .map_err(|e| ApiError::from(CoreError::from(e)))?;
                Command::Menu(Some(category))
            }
            ("order", None) => Command::Order,
            ("submit", None) => Command::Submit,
            ("cancel", None) => Command::Cancel,
            ("config", None) => Command::Config,
            ("quit" | "exit", None) => Command::Quit,
            (verb, arg) => match (verb.parse::<Category>(), arg) {
                (Ok(category), Some(id)) => Command::Select(category, id.to_string()),
                (Ok(_), None) => {
                    return Err(ApiError::invalid_command(format!(
                        "'{}' needs an item id",
                        verb
                    )));
                }
                (Err(_), _) => {
                    return Err(ApiError::invalid_command(format!(
                        "Unknown command '{}'",
                        line
                    )));
                }
            },
        };

        Ok(Some(command))
    }
}

/// Runs a command against the application state.
pub fn dispatch(command: &Command, ctx: &AppContext) -> Result<serde_json::Value, ApiError> {
    let (catalog, settings, session) = (&ctx.catalog, &ctx.config, &ctx.session);

    match command {
        Command::Menu(category) => to_json(&menu::get_menu(catalog, settings, *category)),
        Command::Select(category, id) => {
            to_json(&order::set_item(session, catalog, settings, *category, id)?)
        }
        Command::Order => to_json(&order::get_order(session, settings)),
        Command::Submit => to_json(&order::submit_order(session, settings)?),
        Command::Cancel => to_json(&order::cancel_order(session, settings)),
        Command::Config => to_json(&config::get_config(settings)),
        Command::Quit => Ok(serde_json::Value::Null),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_selections() {
        assert_eq!(
            Command::parse("entree chili").unwrap(),
            Some(Command::Select(Category::Entree, "chili".to_string()))
        );
        assert_eq!(
            Command::parse("  SIDE   soup ").unwrap(),
            Some(Command::Select(Category::Side, "soup".to_string()))
        );
        assert_eq!(
            Command::parse("accompaniment bread").unwrap(),
            Some(Command::Select(Category::Accompaniment, "bread".to_string()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("menu").unwrap(), Some(Command::Menu(None)));
        assert_eq!(
            Command::parse("menu side").unwrap(),
            Some(Command::Menu(Some(Category::Side)))
        );
        assert_eq!(Command::parse("order").unwrap(), Some(Command::Order));
        assert_eq!(Command::parse("submit").unwrap(), Some(Command::Submit));
        assert_eq!(Command::parse("cancel").unwrap(), Some(Command::Cancel));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# pick lunch").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        let err = Command::parse("dessert cake").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);

        let err = Command::parse("entree").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
        assert_eq!(err.message, "'entree' needs an item id");

        let err = Command::parse("side soup salad").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);

        let err = Command::parse("menu dessert").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = Command::parse("order now").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
    }
}
