//! Runtime Configuration
//!
//! Defaults can be overridden per deployment with a JSON block in the host
//! page: `<script type="application/json" id="axio-config">{...}</script>`.
//! Each field is applied on its own, so one bad value only costs that field.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Id of the optional config element in `index.html`
pub const CONFIG_ELEMENT_ID: &str = "axio-config";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for every REST path; empty = same origin
    pub api_base: String,
    /// Characters added per reveal step
    pub reveal_chunk_chars: usize,
    /// Delay between reveal steps
    pub reveal_step_ms: u32,
    pub clock_tick_ms: u32,
    /// Delay between dataset processing animation steps
    pub progress_step_ms: u32,
    /// Rows shown in the dataset preview table
    pub preview_row_cap: usize,
    /// How long a code copy button shows its confirmation
    pub copy_feedback_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            reveal_chunk_chars: 3,
            reveal_step_ms: 5,
            clock_tick_ms: 1000,
            progress_step_ms: 600,
            preview_row_cap: 50,
            copy_feedback_ms: 2000,
        }
    }
}

impl Config {
    /// Parse an override block. Missing, unknown or unparsable fields keep
    /// their defaults; only a block that is not a JSON object is an error.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config = Self::default();
        if raw.trim().is_empty() {
            return Ok(config);
        }
        let overrides: Map<String, Value> = serde_json::from_str(raw)?;
        for (key, value) in overrides {
            let applied = match key.as_str() {
                "api_base" => apply(&mut config.api_base, value),
                "reveal_chunk_chars" => apply(&mut config.reveal_chunk_chars, value),
                "reveal_step_ms" => apply(&mut config.reveal_step_ms, value),
                "clock_tick_ms" => apply(&mut config.clock_tick_ms, value),
                "progress_step_ms" => apply(&mut config.progress_step_ms, value),
                "preview_row_cap" => apply(&mut config.preview_row_cap, value),
                "copy_feedback_ms" => apply(&mut config.copy_feedback_ms, value),
                _ => {
                    log::warn!("[CONFIG] Unknown key '{}'", key);
                    continue;
                }
            };
            if let Err(e) = applied {
                log::warn!("[CONFIG] Keeping default for '{}': {}", key, e);
            }
        }
        Ok(config)
    }

    /// Read the host page override, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("[CONFIG] Loaded overrides: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

/// Overwrite `slot` only if `value` parses as its type
fn apply<T: DeserializeOwned>(slot: &mut T, value: Value) -> Result<(), serde_json::Error> {
    *slot = serde_json::from_value(value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = Config::from_json(r#"{"api_base": "https://axio.local", "reveal_step_ms": 20}"#).unwrap();
        assert_eq!(config.api_base, "https://axio.local");
        assert_eq!(config.reveal_step_ms, 20);
        assert_eq!(config.reveal_chunk_chars, 3);
        assert_eq!(config.preview_row_cap, 50);
    }

    #[test]
    fn test_empty_block_is_default() {
        assert_eq!(Config::from_json("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_block_errors() {
        assert!(Config::from_json("{not json").is_err());
        assert!(Config::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_bad_field_keeps_other_overrides() {
        let config = Config::from_json(
            r#"{"api_base": "https://x", "clock_tick_ms": "soon", "preview_row_cap": -4, "theme": "dark"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base, "https://x");
        assert_eq!(config.clock_tick_ms, 1000);
        assert_eq!(config.preview_row_cap, 50);
        assert_eq!(
            config,
            Config { api_base: "https://x".to_string(), ..Config::default() }
        );
    }
}
