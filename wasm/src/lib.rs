use layercraft::{
    AnchorOptions, ArrowConfig, Config, OptionOverrides, PositionDump, parse_scenarios,
    resolve_anchored_position,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Same fields as a config file or scenario, plus `arrowSize` as a shorthand
/// for `arrow: { size }`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FloatingOptions {
    #[serde(flatten)]
    overrides: OptionOverrides,
    arrow_size: Option<f32>,
}

fn build_config(options: &FloatingOptions) -> Config {
    let mut anchor = options.overrides.apply(AnchorOptions::default());
    if let Some(size) = options.arrow_size {
        anchor.arrow = ArrowConfig::Enabled { size };
    }
    Config {
        anchor,
        ..Config::default()
    }
}

fn resolve_json(scenario_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw) => serde_json::from_str::<FloatingOptions>(raw).map_err(|e| e.to_string())?,
        None => FloatingOptions::default(),
    };
    let config = build_config(&options);
    let scenarios = parse_scenarios(scenario_json).map_err(|e| format!("{e:#}"))?;

    let dumps: Vec<PositionDump> = scenarios
        .iter()
        .map(|scenario| {
            let options = scenario.options(&config);
            let resolved = resolve_anchored_position(
                &scenario.anchor,
                &scenario.floating,
                &scenario.viewport(&config),
                &options,
            );
            PositionDump::from_resolved(scenario.name.clone(), &options, &resolved)
        })
        .collect();
    serde_json::to_string(&dumps).map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn compute_floating_position(
    scenario_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    resolve_json(scenario_json, options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use crate::resolve_json;

    #[test]
    fn resolves_measured_snapshot_with_options() {
        let scenario = r#"{
            "anchor": {"x": 100, "y": 560, "width": 80, "height": 30},
            "floating": {"width": 100, "height": 50},
            "viewport": {"width": 800, "height": 600}
        }"#;
        let json = resolve_json(scenario, Some(r#"{"arrowSize": 6, "zIndex": 20}"#))
            .expect("snapshot should resolve");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["placement"], "top");
        assert_eq!(value[0]["flipped"], true);
        assert_eq!(value[0]["floatingStyles"]["zIndex"], 20);
        assert_eq!(value[0]["arrow"]["staticSide"], "bottom");
    }

    #[test]
    fn honors_fallback_placements_option() {
        let scenario = r#"{
            "anchor": {"x": 100, "y": 540, "width": 80, "height": 30,
                       "top": 540, "left": 100, "right": 180, "bottom": 570},
            "floating": {"width": 100, "height": 50},
            "viewport": {"width": 800, "height": 600}
        }"#;
        let json = resolve_json(scenario, Some(r#"{"fallbackPlacements": ["right"]}"#))
            .expect("snapshot should resolve");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["placement"], "right");
        assert_eq!(value[0]["left"], 188.0);
        assert_eq!(value[0]["top"], 530.0);
    }

    #[test]
    fn reports_bad_placement() {
        let err = resolve_json("{}", Some(r#"{"placement": "up"}"#)).unwrap_err();
        assert!(err.contains("up"), "{err}");
    }
}
