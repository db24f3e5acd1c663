mod support;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

use unitconv::adapter::{ConversionEngine, EngineAdapter};
use unitconv::catalog::{UnitCatalog, UnitCategory};
use unitconv::ConversionError;

#[test]
fn test_alias_idempotence() {
    let catalog = UnitCatalog::builtin().unwrap();
    for (alias, canonical) in catalog.aliases() {
        assert_eq!(catalog.canonicalize(canonical).unwrap(), canonical);
        assert_eq!(catalog.canonicalize(alias).unwrap(), canonical);
    }
}

#[test]
fn test_no_duplicate_listing() {
    let catalog = UnitCatalog::builtin().unwrap();
    for category in UnitCategory::ALL {
        let units = catalog.units_in_category(category);
        let mut sorted = units.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(units, sorted, "{} listing", category);
    }
}

#[test]
fn test_temperature_fixed_points() {
    let engine = EngineAdapter::builtin();
    assert_eq!(engine.convert_one(0.0, "degC", "degF").unwrap(), 32.0);
    assert_eq!(engine.convert_one(100.0, "degC", "degF").unwrap(), 212.0);
    assert_eq!(engine.convert_one(-40.0, "degC", "degF").unwrap(), -40.0);
}

#[test]
fn test_category_rejection() {
    let err = support::conversion_service()
        .convert(1.0, "m", &["degC"])
        .unwrap_err();
    assert_eq!(
        err,
        ConversionError::IncompatibleCategories {
            from: UnitCategory::Length,
            to: UnitCategory::Temperature,
        }
    );
}

#[test]
fn test_unknown_unit_rejection() {
    let err = support::conversion_service()
        .convert(1.0, "not_a_unit", &["m"])
        .unwrap_err();
    assert_eq!(err, ConversionError::unknown_unit("not_a_unit"));
}

#[test]
fn test_default_target_expansion() {
    let service = support::conversion_service();
    let result = service.convert::<&str>(1.0, "m", &[]).unwrap();
    let catalog = UnitCatalog::builtin().unwrap();
    let expected: Vec<&str> = catalog
        .units_in_category(UnitCategory::Length)
        .into_iter()
        .filter(|s| *s != "m")
        .collect();
    assert_eq!(result.conversions.symbols().collect::<Vec<_>>(), expected);
    assert_abs_diff_eq!(result.get("km").unwrap(), 0.001, epsilon = 1e-15);
}

#[test]
fn test_millimeter_scenario() {
    let result = support::conversion_service()
        .convert(205.0, "mm", &["m", "cm", "in", "ft"])
        .unwrap();
    assert_relative_eq!(result.get("m").unwrap(), 0.205);
    assert_relative_eq!(result.get("cm").unwrap(), 20.5);
    assert_abs_diff_eq!(result.get("in").unwrap(), 8.070866, epsilon = 1e-5);
    assert_abs_diff_eq!(result.get("ft").unwrap(), 0.672572, epsilon = 1e-5);
}

#[test]
fn test_velocity_scenario() {
    let result = support::conversion_service()
        .convert(100.0, "km/h", &["m/s", "mph"])
        .unwrap();
    assert_abs_diff_eq!(result.get("m/s").unwrap(), 27.78, epsilon = 1e-2);
    assert_abs_diff_eq!(result.get("mph").unwrap(), 62.14, epsilon = 1e-2);
}

#[test]
fn test_result_never_crosses_categories() {
    let service = support::conversion_service();
    let catalog = UnitCatalog::builtin().unwrap();
    for source in catalog.all_units() {
        let result = service.convert::<&str>(1.0, source, &[]).unwrap();
        let category = catalog.category_of(source).unwrap();
        for symbol in result.conversions.symbols() {
            assert_eq!(catalog.category_of(symbol).unwrap(), category);
        }
    }
}

#[test]
fn test_common_conversions() {
    let service = support::conversion_service();
    let cases: &[(f64, &str, &str, f64)] = &[
        (1.0, "lb", "kg", 0.45359237),
        (1.0, "atm", "kPa", 101.325),
        (1.0, "gal", "L", 3.785411784),
        (1.0, "kWh", "BTU", 3412.14),
        (1.0, "hp", "W", 745.69987),
        (180.0, "deg", "rad", std::f64::consts::PI),
        (1.0, "day", "h", 24.0),
        (1.0, "acre", "m2", 4046.8564224),
        (1.0, "g/cm3", "kg/m3", 1000.0),
        (1.0, "knot", "km/h", 1.852),
        (1.0, "CFM", "L/s", 0.471947),
        (9.80665, "m/s2", "ft/s2", 32.174049),
        (1.0, "lbf", "N", 4.4482216),
        (1.0, "uF", "nF", 1000.0),
        (1.0, "Mohm", "kohm", 1000.0),
        (1.0, "GHz", "MHz", 1000.0),
        (1.0, "V", "mV", 1000.0),
        (1.0, "A", "uA", 1e6),
    ];
    for (value, from, to, expected) in cases {
        let result = service.convert(*value, from, &[*to]).unwrap();
        assert_relative_eq!(result.get(to).unwrap(), *expected, max_relative = 1e-5);
    }
}

#[test]
fn test_kelvin_conversions_are_offset_only() {
    let service = support::conversion_service();
    let result = service.convert(300.0, "K", &["degC", "degR"]).unwrap();
    assert_abs_diff_eq!(result.get("degC").unwrap(), 26.85, epsilon = 1e-9);
    assert_abs_diff_eq!(result.get("degR").unwrap(), 540.0, epsilon = 1e-9);
}

#[test]
fn test_expression_scenarios() {
    let service = support::conversion_service();
    let result = service.convert_expression("5 meters + 3 feet").unwrap();
    assert_abs_diff_eq!(result.value, 5.9144, epsilon = 1e-9);
    assert_eq!(result.unit, "m");

    let result = service.convert_expression("3 ft * 2 ft to m2").unwrap();
    assert_abs_diff_eq!(result.value, 0.55741824, epsilon = 1e-9);

    let err = service.convert_expression("5 m + 3 kg").unwrap_err();
    assert!(matches!(err, ConversionError::ExpressionError { .. }));
}

fn round_trip_pairs() -> Vec<(String, String)> {
    let catalog = UnitCatalog::builtin().unwrap();
    let mut pairs = Vec::new();
    for category in UnitCategory::ALL {
        if category == UnitCategory::Temperature {
            continue;
        }
        let units = catalog.units_in_category(category);
        for a in &units {
            for b in &units {
                if a != b {
                    pairs.push((a.to_string(), b.to_string()));
                }
            }
        }
    }
    pairs
}

proptest! {
    #[test]
    fn prop_round_trip_conversion(
        (from, to) in prop::sample::select(round_trip_pairs()),
        value in 1e-3f64..1e6,
    ) {
        let engine = EngineAdapter::builtin();
        let there = engine.convert_one(value, &from, &to).unwrap();
        let back = engine.convert_one(there, &to, &from).unwrap();
        prop_assert!(
            ((back - value) / value).abs() < 1e-9,
            "{} {} -> {} -> {}", value, from, to, back
        );
    }

    #[test]
    fn prop_temperature_round_trip(value in -500.0f64..5000.0) {
        let engine = EngineAdapter::builtin();
        for unit in ["degF", "K", "degR"] {
            let there = engine.convert_one(value, "degC", unit).unwrap();
            let back = engine.convert_one(there, unit, "degC").unwrap();
            prop_assert!((back - value).abs() < 1e-9);
        }
    }
}
