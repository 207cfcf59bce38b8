//! Session regression test
//!
//! Drives a full picking session: manual points, area analysis, auto-pick,
//! image replacement, format switching, removal and export.

use colorpick::color::ColorFormat;
use colorpick::record::{AutoPickConfig, AutoPickMode, RECORD_CAPACITY, Record};
use colorpick::region::AnalyzeConfig;
use colorpick::{PickerConfig, Session, SessionError};
use colorpick_test::{RegParams, images};

#[test]
fn session_reg() {
    let mut rp = RegParams::new("session");

    let config = PickerConfig::from_json(
        r#"{"color_format": "hex", "analyze": {"spacing": 2, "max_points": 4}}"#,
    )
    .unwrap();
    let mut session = Session::from_config(&config).unwrap();

    // --- Test 1: a manual base point, then a cross around it ---
    let left_red = images::stripes(40, 40, &[(220, 10, 10), (10, 10, 220)]).unwrap();
    session.set_image(left_red);
    session.add_record(20, 20, None).unwrap();
    rp.compare_strings("#0A0ADC", &session.records().get(0).unwrap().display_color);

    let cross = AutoPickConfig::default()
        .with_mode(AutoPickMode::Cross)
        .with_spacing(5);
    let report = session.auto_pick(&cross).unwrap();
    rp.compare_values(8.0, report.recorded() as f64, 0.0);
    rp.compare_values(9.0, session.records().len() as f64, 0.0);
    // (10, 20) is the first cross point and lies in the red half
    rp.compare_strings("#DC0A0A", &session.records().get(1).unwrap().display_color);

    // --- Test 2: area analysis appends its points ---
    session.update_area(0, 0, 39, 39);
    let report = session.analyze_area(&config.analyze).unwrap();
    rp.compare_values(4.0, report.recorded() as f64, 0.0);
    rp.compare_values(13.0, session.records().len() as f64, 0.0);

    // --- Test 3: replacing the image refetches every record ---
    let green = images::solid(40, 40, (0, 200, 0)).unwrap();
    let refreshed = session.replace_image(green);
    rp.compare_values(13.0, refreshed as f64, 0.0);
    let all_green = session
        .records()
        .iter()
        .all(|r| r.display_color == "#00C800");
    rp.compare_true(all_green);

    // --- Test 4: switching the format re-renders stored records ---
    session.set_color_format(ColorFormat::Rgb);
    rp.compare_strings("rgb(0, 200, 0)", &session.records().get(5).unwrap().display_color);

    // --- Test 5: removal renumbers from zero ---
    let removed = session.remove_record(Some("1"));
    rp.compare_values(1.0, removed as f64, 0.0);
    let keys: Vec<String> = session
        .records()
        .iter()
        .map(|r| r.slot_key.clone())
        .collect();
    let expected: Vec<String> = (0..12).map(|i| i.to_string()).collect();
    rp.compare_true(keys == expected);

    // --- Test 6: capacity bound through the session ---
    for i in 0..20 {
        let _ = session.add_record(i, 0, None);
    }
    rp.compare_values(RECORD_CAPACITY as f64, session.records().len() as f64, 0.0);
    let full = session.add_record(0, 1, None);
    rp.compare_true(matches!(full, Err(SessionError::Record(_))));

    // --- Test 7: JSON export ---
    let json = session.records_json().unwrap();
    let exported: Vec<Record> = serde_json::from_str(&json).unwrap();
    rp.compare_values(RECORD_CAPACITY as f64, exported.len() as f64, 0.0);

    // --- Test 8: clearing, then auto-pick has no base ---
    session.remove_record(None);
    rp.compare_true(session.records().is_empty());
    let err = session.auto_pick(&AutoPickConfig::default());
    rp.compare_true(matches!(err, Err(SessionError::Record(_))));

    // --- Test 9: keyed slots through the session ---
    session.add_record(3, 3, Some("3")).unwrap();
    rp.compare_values(3.0, session.records().len() as f64, 0.0);
    rp.compare_true(session.records().get(0).unwrap().is_placeholder());
    let refreshed = session.refetch_records().unwrap();
    rp.compare_values(1.0, refreshed as f64, 0.0);

    assert!(rp.cleanup());
}
