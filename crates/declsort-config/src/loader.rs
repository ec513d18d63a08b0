//! TOML settings loader
//!
//! A convenience front-end for hosts that keep declsort settings in a TOML
//! file. Settings live either under a `[declsort]` table or at the document
//! root. Unknown tokens inside a setting degrade silently like everywhere
//! else, but an unrecognized setting *key* is a configuration contract
//! violation and fails the load.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::rules::RuleId;
use crate::settings::OrderingConfig;

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<OrderingConfig> {
    let text = std::fs::read_to_string(path)?;
    from_toml_str(&text)
}

/// Parse settings from TOML text.
pub fn from_toml_str(text: &str) -> Result<OrderingConfig> {
    let document: toml::Table = toml::from_str(text)?;

    // Settings may sit under [declsort] or at the root.
    let table = match document.get("declsort") {
        Some(toml::Value::Table(table)) => table,
        Some(other) => {
            return Err(Error::InvalidSettingValue {
                key: "declsort".to_string(),
                found: other.type_str().to_string(),
            });
        }
        None => &document,
    };

    let mut pairs: HashMap<String, String> = HashMap::new();
    for (key, value) in table {
        if !is_known_key(key) {
            return Err(Error::UnknownSetting(key.clone()));
        }
        let raw = match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Boolean(b) => b.to_string(),
            other => {
                return Err(Error::InvalidSettingValue {
                    key: key.clone(),
                    found: other.type_str().to_string(),
                });
            }
        };
        pairs.insert(key.clone(), raw);
    }

    Ok(OrderingConfig::from_settings(&pairs))
}

fn is_known_key(key: &str) -> bool {
    key == OrderingConfig::ADD_MISSING_KEY
        || OrderingConfig::ORDER_KEYS.contains(&key)
        || RuleId::ALL.iter().any(|rule| rule.severity_key() == key)
}
