use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::anchor::AnchorOptions;
use crate::config::{Config, OptionOverrides};
use crate::geometry::{Rect, Viewport};

/// One measured snapshot: anchor and floating rectangles, optionally a
/// viewport, plus per-scenario positioning overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: Option<String>,
    pub anchor: Rect,
    pub floating: Rect,
    pub viewport: Option<Viewport>,
    #[serde(flatten)]
    overrides: OptionOverrides,
}

impl Scenario {
    pub fn new(anchor: Rect, floating: Rect) -> Self {
        Self {
            name: None,
            anchor,
            floating,
            viewport: None,
            overrides: OptionOverrides::default(),
        }
    }

    pub fn options(&self, config: &Config) -> AnchorOptions {
        self.overrides.apply(config.anchor.clone())
    }

    pub fn viewport(&self, config: &Config) -> Viewport {
        self.viewport.unwrap_or(config.viewport)
    }
}

/// Parse a single scenario object or an array of them. Strict JSON is tried
/// first; JSON5 (comments, trailing commas, bare keys) is the fallback.
pub fn parse_scenarios(input: &str) -> Result<Vec<Scenario>> {
    let value: Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(json_err) => json5::from_str(input)
            .map_err(|_| json_err)
            .context("invalid scenario input")?,
    };
    if value.is_array() {
        serde_json::from_value(value).context("invalid scenario list")
    } else {
        let scenario = serde_json::from_value(value).context("invalid scenario")?;
        Ok(vec![scenario])
    }
}
