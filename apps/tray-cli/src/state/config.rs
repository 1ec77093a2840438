//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TRAY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed. The
//! tax rate in particular is fixed for the life of the process.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tray_core::validation::validate_tax_rate_bps;
use tray_core::{Catalog, CoreError, CurrencyFormat, TaxRate, DEFAULT_TAX_RATE};

/// Errors raised while loading configuration or the menu it points at.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value we cannot use.
    #[error("{key}={value:?} is invalid: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The configured menu file could not be read.
    #[error("Cannot read menu file {path:?}: {source}")]
    MenuFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The menu file was read but is not a valid menu.
    #[error("Menu file {path:?} rejected: {source}")]
    Menu {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (printed on receipts)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for currency
    pub currency_decimals: u8,

    /// Sales tax in basis points, e.g. 800 = 8%
    pub tax_rate_bps: u32,

    /// JSON menu file; the built-in lunch menu is used when unset
    pub menu_path: Option<PathBuf>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Lunch Tray".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: DEFAULT_TAX_RATE.bps(),
            menu_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TRAY_STORE_NAME`: Override store name
    /// - `TRAY_CURRENCY_CODE`: Override currency code
    /// - `TRAY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TRAY_CURRENCY_DECIMALS`: 0, 1 or 2
    /// - `TRAY_TAX_RATE_BPS`: Override tax rate (e.g. "825")
    /// - `TRAY_MENU_PATH`: Load the menu from a JSON file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("TRAY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("TRAY_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("TRAY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("TRAY_CURRENCY_DECIMALS") {
            config.currency_decimals = match raw.trim().parse::<u8>() {
                Ok(d) if d <= 2 => d,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "TRAY_CURRENCY_DECIMALS",
                        value: raw.clone(),
                        reason: "expected 0, 1 or 2".to_string(),
                    })
                }
            };
        }

        if let Some(raw) = lookup("TRAY_TAX_RATE_BPS") {
            let bps = raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "TRAY_TAX_RATE_BPS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            validate_tax_rate_bps(bps).map_err(|e| ConfigError::InvalidValue {
                key: "TRAY_TAX_RATE_BPS",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.tax_rate_bps = bps;
        }

        if let Some(path) = lookup("TRAY_MENU_PATH") {
            if !path.trim().is_empty() {
                config.menu_path = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            symbol: self.currency_symbol.clone(),
            decimals: self.currency_decimals,
            ..CurrencyFormat::default()
        }
    }

    /// Loads the menu named by `menu_path`, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.menu_path else {
            return Ok(Catalog::lunch_menu());
        };

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::MenuFile {
            path: path.clone(),
            source,
        })?;

        Catalog::from_json(&json).map_err(|source| ConfigError::Menu {
            path: path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config.tax_rate().bps(), 800);
        assert_eq!(config.currency_symbol, "$");
        assert!(config.menu_path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("TRAY_STORE_NAME", "Cafe"),
            ("TRAY_CURRENCY_SYMBOL", "€"),
            ("TRAY_CURRENCY_DECIMALS", "2"),
            ("TRAY_TAX_RATE_BPS", " 1900 "),
        ]))
        .unwrap();
        assert_eq!(config.store_name, "Cafe");
        assert_eq!(config.tax_rate().bps(), 1900);
        assert_eq!(config.currency_format().symbol, "€");
    }

    #[test]
    fn test_invalid_tax_rate() {
        let err = ConfigState::from_lookup(lookup_from(&[("TRAY_TAX_RATE_BPS", "eight")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "TRAY_TAX_RATE_BPS", .. }
        ));

        let err = ConfigState::from_lookup(lookup_from(&[("TRAY_TAX_RATE_BPS", "20000")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_invalid_decimals() {
        let err = ConfigState::from_lookup(lookup_from(&[("TRAY_CURRENCY_DECIMALS", "3")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "TRAY_CURRENCY_DECIMALS", .. }
        ));
    }

    #[test]
    fn test_builtin_menu_without_path() {
        let catalog = ConfigState::default().load_catalog().unwrap();
        assert!(catalog.contains("chili"));
    }

    #[test]
    fn test_missing_menu_file() {
        let config = ConfigState {
            menu_path: Some(PathBuf::from("/nonexistent/lunch-tray/menu.json")),
            ..ConfigState::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::MenuFile { .. })
        ));
    }

    #[test]
    fn test_menu_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("tray-menu-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"id": "burger", "name": "Burger", "price": 500, "category": "entree"}]"#,
        )
        .unwrap();

        let config = ConfigState {
            menu_path: Some(path.clone()),
            ..ConfigState::default()
        };
        let catalog = config.load_catalog().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("burger").unwrap().price.cents(), 500);
    }
}
