use crate::anchor::{AnchorOptions, ArrowConfig, OverflowStrategy};
use crate::geometry::{DEFAULT_ARROW_SIZE, Placement, Viewport};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub anchor: AnchorOptions,
    /// Used for scenarios that do not carry their own viewport.
    pub viewport: Viewport,
}

/// `arrow` accepts either a flag or an object with a size.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum ArrowSetting {
    Flag(bool),
    WithSize { size: Option<f32> },
}

impl ArrowSetting {
    pub fn to_config(self) -> ArrowConfig {
        match self {
            ArrowSetting::Flag(false) => ArrowConfig::Disabled,
            ArrowSetting::Flag(true) => ArrowConfig::enabled(),
            ArrowSetting::WithSize { size } => ArrowConfig::Enabled {
                size: size.unwrap_or(DEFAULT_ARROW_SIZE),
            },
        }
    }
}

/// Positioning fields shared by config files and scenarios. Every field is
/// optional and overrides the corresponding default when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionOverrides {
    pub placement: Option<Placement>,
    pub offset: Option<f32>,
    pub fallback_placements: Option<Vec<Placement>>,
    pub auto_flip: Option<bool>,
    pub padding: Option<f32>,
    pub overflow: Option<OverflowStrategy>,
    pub arrow: Option<ArrowSetting>,
    pub z_index: Option<i32>,
}

impl OptionOverrides {
    pub fn apply(&self, mut options: AnchorOptions) -> AnchorOptions {
        if let Some(v) = self.placement {
            options.placement = v;
        }
        if let Some(v) = self.offset {
            options.offset = v;
        }
        if let Some(v) = &self.fallback_placements {
            options.fallback_placements = Some(v.clone());
        }
        if let Some(v) = self.auto_flip {
            options.auto_flip = v;
        }
        if let Some(v) = self.padding {
            options.padding = v;
        }
        if let Some(v) = self.overflow {
            options.overflow = v;
        }
        if let Some(v) = self.arrow {
            options.arrow = v.to_config();
        }
        if let Some(v) = self.z_index {
            options.z_index = Some(v);
        }
        options
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    #[serde(flatten)]
    overrides: OptionOverrides,
    viewport: Option<ViewportFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewportFile {
    width: Option<f32>,
    height: Option<f32>,
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents)
            .map_err(|_| json_err)
            .context("invalid positioning config")?,
    };

    let mut config = Config {
        anchor: parsed.overrides.apply(AnchorOptions::default()),
        ..Config::default()
    };
    if let Some(viewport) = parsed.viewport {
        if let Some(v) = viewport.width {
            config.viewport.width = v;
        }
        if let Some(v) = viewport.height {
            config.viewport.height = v;
        }
    }
    Ok(config)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("in config {}", path.display()))
}
