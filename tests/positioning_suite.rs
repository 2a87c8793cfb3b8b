use std::path::Path;

use layercraft::{Config, PositionDump, parse_scenarios, resolve_anchored_position};
use serde_json::Value;

fn resolve_fixture(path: &Path) -> (PositionDump, Value) {
    let input = std::fs::read_to_string(path).expect("fixture read failed");
    let scenarios = parse_scenarios(&input).expect("parse failed");
    assert_eq!(scenarios.len(), 1, "one scenario per fixture");
    let scenario = &scenarios[0];

    let config = Config::default();
    let options = scenario.options(&config);
    let resolved = resolve_anchored_position(
        &scenario.anchor,
        &scenario.floating,
        &scenario.viewport(&config),
        &options,
    );
    let dump = PositionDump::from_resolved(scenario.name.clone(), &options, &resolved);

    let raw: Value = json5::from_str(&input).expect("fixture is not json5");
    let expect = raw.get("expect").cloned().expect("fixture has no expect block");
    (dump, expect)
}

fn assert_close(actual: &Value, expected: &Value, what: &str, fixture: &str) {
    let actual = actual.as_f64().unwrap_or_else(|| panic!("{fixture}: {what} is not a number"));
    let expected = expected.as_f64().expect("expected number");
    assert!(
        (actual - expected).abs() < 1e-4,
        "{fixture}: {what} = {actual}, expected {expected}"
    );
}

fn check_expectations(dump: &PositionDump, expect: &Value, fixture: &str) {
    let actual = serde_json::to_value(dump).expect("dump serializes");
    assert_eq!(actual["placement"], expect["placement"], "{fixture}: placement");
    assert_close(&actual["top"], &expect["top"], "top", fixture);
    assert_close(&actual["left"], &expect["left"], "left", fixture);

    if let Some(shifted) = expect.get("shifted") {
        assert_eq!(&actual["shifted"], shifted, "{fixture}: shifted");
    }

    if let Some(arrow) = expect.get("arrow") {
        let actual_arrow = &actual["arrow"];
        assert_eq!(
            actual_arrow["staticSide"], arrow["staticSide"],
            "{fixture}: arrow static side"
        );
        for axis in ["left", "top"] {
            match arrow.get(axis) {
                Some(value) => assert_close(&actual_arrow[axis], value, axis, fixture),
                None => assert!(
                    actual_arrow.get(axis).is_none(),
                    "{fixture}: unexpected arrow {axis}"
                ),
            }
        }
    } else {
        assert!(actual.get("arrow").is_none(), "{fixture}: unexpected arrow");
    }
}

#[test]
fn resolve_all_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    // Keep this list explicit so new fixtures must be added intentionally.
    let fixtures = [
        "placement/bottom.json",
        "placement/top.json",
        "placement/left_end.json5",
        "placement/bounding_client_rect.json",
        "flip/bottom_to_top.json",
        "flip/custom_fallbacks.json",
        "overflow/clamp_wider_than_viewport.json",
        "overflow/shift_corner.json",
        "arrow/right.json",
        "arrow/top_clamped.json",
    ];

    for rel in fixtures {
        let path = root.join(rel);
        assert!(path.exists(), "fixture missing: {}", rel);
        let (dump, expect) = resolve_fixture(&path);
        check_expectations(&dump, &expect, rel);
    }
}

#[test]
fn every_placement_round_trips_through_its_opposite() {
    for placement in layercraft::Placement::ALL {
        let opposite = layercraft::opposite_placement(placement);
        assert_eq!(opposite.alignment, placement.alignment);
        assert_eq!(layercraft::opposite_placement(opposite), placement);
    }
}
