use crate::anchor::{AnchorOptions, AnchoredPosition};
use crate::geometry::{ArrowPosition, Placement, Shifted};
use crate::styles::{ArrowStyles, FloatingStyles, Visibility};
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializable record of one resolved scenario.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDump {
    pub name: Option<String>,
    pub requested: Placement,
    pub placement: Placement,
    pub flipped: bool,
    pub top: f32,
    pub left: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shifted: Option<Shifted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow: Option<ArrowPosition>,
    pub floating_styles: FloatingStyles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_styles: Option<ArrowStyles>,
}

impl PositionDump {
    pub fn from_resolved(
        name: Option<String>,
        options: &AnchorOptions,
        resolved: &AnchoredPosition,
    ) -> Self {
        let arrow_styles = match (options.arrow.size(), resolved.arrow.as_ref()) {
            (Some(size), Some(arrow)) => Some(ArrowStyles::new(arrow, size)),
            _ => None,
        };
        PositionDump {
            name,
            requested: options.placement,
            placement: resolved.placement,
            flipped: resolved.placement != options.placement,
            top: resolved.top,
            left: resolved.left,
            shifted: resolved.shifted,
            arrow: resolved.arrow,
            floating_styles: FloatingStyles::new(
                resolved.top,
                resolved.left,
                Visibility::Visible,
                options.z_index,
            ),
            arrow_styles,
        }
    }

    /// CSS declarations for the floating element and, when present, its arrow.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if let Some(name) = &self.name {
            out.push_str(&format!("/* {name} */\n"));
        }
        out.push_str(&format!(".floating {{ {} }}\n", self.floating_styles.to_css()));
        if let Some(arrow) = &self.arrow_styles {
            out.push_str(&format!(".floating-arrow {{ {} }}\n", arrow.to_css()));
        }
        out
    }
}

pub fn write_dumps<W: Write>(writer: W, dumps: &[PositionDump]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, dumps)?;
    Ok(())
}

pub fn write_position_dump(path: &Path, dumps: &[PositionDump]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_dumps(&mut writer, dumps)?;
    writer.flush()?;
    Ok(())
}
