use serde_json::{json, Value};
use watch_catalog::{extract_display_specs, DisplaySpec, LabelScheme, ProductCatalog, ProductRecord};

fn product(value: Value) -> ProductRecord {
    serde_json::from_value(value).unwrap()
}

fn labels(specs: &[DisplaySpec]) -> Vec<&str> {
    specs.iter().map(|spec| spec.label.as_str()).collect()
}

#[test]
fn empty_record_yields_nothing() {
    assert!(extract_display_specs(&product(json!({})), &LabelScheme::TABLE).is_empty());
}

#[test]
fn unknown_keys_never_appear() {
    let record = product(json!({
        "hardware_specifications": { "unknown_key": "x" },
        "connectivity_features": { "wifi": "yes", "chipset": "X1" },
        "usage_time": { "standby_time": "30 days" }
    }));
    assert!(extract_display_specs(&record, &LabelScheme::TABLE).is_empty());
    assert!(extract_display_specs(&record, &LabelScheme::COMPACT).is_empty());
}

#[test]
fn sentinel_chipsets_are_excluded() {
    for value in [json!("Not available"), json!("N/A"), json!(""), Value::Null] {
        let record = product(json!({ "hardware_specifications": { "chipset": value.clone() } }));
        let specs = extract_display_specs(&record, &LabelScheme::TABLE);
        assert!(!labels(&specs).contains(&"Chipset"), "{value}");
    }
}

#[test]
fn sentinel_match_is_case_sensitive() {
    let record = product(json!({ "hardware_specifications": { "chipset": "n/a" } }));
    assert_eq!(
        extract_display_specs(&record, &LabelScheme::TABLE),
        [DisplaySpec::new("Chipset", "n/a")]
    );
}

#[test]
fn section_rows_follow_document_order() {
    let record: ProductRecord = serde_json::from_str(
        r#"{ "hardware_specifications": { "screen": "AMOLED", "chipset": "X1" } }"#,
    )
    .unwrap();
    assert_eq!(
        extract_display_specs(&record, &LabelScheme::TABLE),
        [
            DisplaySpec::new("Screen", "AMOLED"),
            DisplaySpec::new("Chipset", "X1"),
        ]
    );
}

#[test]
fn sections_come_in_fixed_order() {
    // Document lists usage first; output still starts with hardware.
    let record: ProductRecord = serde_json::from_str(
        r#"{
            "software": { "app": "FitCloudPro" },
            "usage_time": { "charging_time": "2h" },
            "appearance": { "colour": "Black, Silver" },
            "connectivity_features": { "bluetooth_version": "5.3" },
            "hardware_specifications": { "battery_capacity": "300mAh" }
        }"#,
    )
    .unwrap();
    assert_eq!(
        labels(&extract_display_specs(&record, &LabelScheme::TABLE)),
        ["Battery Capacity", "Bluetooth Version", "Charging Time", "Colour", "APP"]
    );
    assert_eq!(
        labels(&extract_display_specs(&record, &LabelScheme::COMPACT)),
        ["Battery", "BT Version", "Charging", "App"]
    );
}

#[test]
fn row_count_matches_valid_fields() {
    let record = product(json!({
        "model": "S1 Pro",
        "hardware_specifications": { "chipset": "X1", "screen": "N/A" },
        "connectivity_features": { "bluetooth_call": "Yes", "bluetooth_version": "Not available" },
        "usage_time": { "charging_time": "2h", "normal_using_time": "" },
        "appearance": { "colour": "Black" },
        "software": { "app": "FitCloudPro" }
    }));
    let specs = extract_display_specs(&record, &LabelScheme::TABLE);
    assert_eq!(specs.len(), 3 + 2);
    assert_eq!(
        specs,
        [
            DisplaySpec::new("Chipset", "X1"),
            DisplaySpec::new("Bluetooth Call", "Yes"),
            DisplaySpec::new("Charging Time", "2h"),
            DisplaySpec::new("Colour", "Black"),
            DisplaySpec::new("APP", "FitCloudPro"),
        ]
    );
}

#[test]
fn sentinel_colour_and_app_are_not_counted() {
    for (colour, app) in [("Not available", "N/A"), ("", "Not available"), ("N/A", "")] {
        let record = product(json!({
            "hardware_specifications": { "chipset": "X1", "screen": "N/A" },
            "connectivity_features": { "bluetooth_call": "Yes", "bluetooth_version": "" },
            "usage_time": { "charging_time": "2h", "normal_using_time": "Not available" },
            "appearance": { "colour": colour },
            "software": { "app": app }
        }));
        assert_eq!(
            labels(&extract_display_specs(&record, &LabelScheme::TABLE)),
            ["Chipset", "Bluetooth Call", "Charging Time"],
            "colour {colour:?}, app {app:?}"
        );
        assert_eq!(extract_display_specs(&record, &LabelScheme::COMPACT).len(), 3);
    }
}

#[test]
fn numeric_values_render_like_text() {
    let record = product(json!({
        "hardware_specifications": { "screen": 1.0, "battery_capacity": 300, "chipset": 0 }
    }));
    assert_eq!(
        extract_display_specs(&record, &LabelScheme::TABLE),
        [
            DisplaySpec::new("Screen", "1"),
            DisplaySpec::new("Battery Capacity", "300"),
        ]
    );
}

#[test]
fn repeated_extraction_is_equal() {
    let record = product(json!({
        "hardware_specifications": { "screen": "AMOLED", "chipset": "X1" },
        "software": { "app": "FitCloudPro" }
    }));
    assert_eq!(
        extract_display_specs(&record, &LabelScheme::TABLE),
        extract_display_specs(&record, &LabelScheme::TABLE)
    );
}

#[test]
fn catalog_document_loads() {
    let catalog: ProductCatalog = serde_json::from_value(json!({
        "products": [
            {
                "model": "S1",
                "white_background_image": "E:\\watches\\white\\s1.png",
                "appearance": { "colour": "Black, Silver ,Gold" },
                "hardware_specifications": { "chipset": "X1" }
            },
            "not a product",
            { "model": "S2" }
        ]
    }))
    .unwrap();

    assert_eq!(catalog.products.len(), 2);
    let first = &catalog.products[0];
    assert_eq!(first.title(), "S1");
    assert_eq!(first.image_url().as_deref(), Some("/s1.png"));
    assert_eq!(first.colours(), ["Black", "Silver", "Gold"]);
    assert_eq!(catalog.products[1].image_url(), None);
}
