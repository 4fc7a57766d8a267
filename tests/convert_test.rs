//! Integration tests: read a coordinate table, run it between datums with
//! the builtin parameter store, and check the assembled report.

use gsk2011::{
    apply_helmert, conversion_report, convert, convert_all, read_points_csv, ConvertError, Datum,
    Direction, ParameterStore, Point,
};

/// Survey-scale test points, roughly Earth-surface magnitude.
fn survey_points() -> Vec<Point> {
    vec![
        Point::new(2_850_123.456, 2_195_456.789, 5_245_789.012),
        Point::new(2_850_200.000, 2_195_500.000, 5_245_800.000),
        Point::new(-1_234_567.890, 4_321_000.001, 4_567_890.123),
    ]
}

#[test]
fn csv_to_report_pipeline() {
    // Initialize tracing for debug output
    let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();

    // ── Step 1: parse the input table ──
    let table = "X,Y,Z\n\
                 2850123.456,2195456.789,5245789.012\n\
                 2850200.000,2195500.000,5245800.000\n";
    let input = read_points_csv(table.as_bytes()).expect("Failed to parse coordinate table");
    assert_eq!(input.len(), 2);

    // ── Step 2: convert СК-42 → WGS-84 (routes through the hub) ──
    let store = ParameterStore::builtin();
    let results = convert_all(&input, Datum::Sk42, Datum::Wgs84, &store);
    assert_eq!(results.len(), input.len());
    let output: Vec<Point> = results
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("All rows should convert");

    // СК-42 offsets are on the order of 100 m; the conversion must move
    // every point but keep it the same order of magnitude.
    for (p, q) in input.iter().zip(&output) {
        let shift = (q - p).norm();
        assert!(shift > 1.0 && shift < 500.0, "implausible shift {shift}");
    }

    // ── Step 3: convert back and compare ──
    // Two more first-order legs; residual stays sub-millimeter.
    let back = convert_all(&output, Datum::Wgs84, Datum::Sk42, &store);
    for (p, r) in input.iter().zip(&back) {
        let r = r.as_ref().expect("Back-conversion should succeed");
        assert!((r - p).norm() < 1e-3, "round trip drifted: {} vs {}", r, p);
    }

    // ── Step 4: assemble and sanity-check the report ──
    let report = conversion_report(Datum::Sk42, Datum::Wgs84, &input, &output, &store)
        .expect("Report should render");
    assert!(report.contains("# Coordinate conversion report"));
    assert!(report.contains("### СК-42 → ГСК-2011"));
    assert!(report.contains("### ГСК-2011 → WGS-84"));
    assert!(report.contains("## Source coordinates"));
    assert!(report.contains("## Transformed coordinates"));
    // One markdown row per point and table.
    let data_rows = report.lines().filter(|l| l.starts_with("| 2850")).count();
    assert_eq!(data_rows, 2 * input.len());
}

#[test]
fn every_builtin_datum_round_trips_through_the_hub() {
    let store = ParameterStore::builtin();
    for datum in Datum::ALL.into_iter().filter(|d| !d.is_hub()) {
        for p in survey_points() {
            let hub = convert(p, datum, Datum::Gsk2011, &store).unwrap();
            let back = convert(hub, Datum::Gsk2011, datum, &store).unwrap();
            assert!(
                (back - p).norm() < 1e-3,
                "{datum}: round trip drifted by {} m",
                (back - p).norm()
            );
        }
    }
}

#[test]
fn routing_through_the_hub_matches_two_explicit_legs() {
    let store = ParameterStore::builtin();
    for p in survey_points() {
        let routed = convert(p, Datum::Pz90, Datum::Itrf2008, &store).unwrap();
        let hub = apply_helmert(p, store.lookup(Datum::Pz90).unwrap(), Direction::ToHub);
        let manual = apply_helmert(
            hub,
            store.lookup(Datum::Itrf2008).unwrap(),
            Direction::FromHub,
        );
        assert_eq!(routed, manual);
    }
}

#[test]
fn hub_to_hub_is_a_no_op() {
    let store = ParameterStore::builtin();
    for p in survey_points() {
        assert_eq!(
            convert(p, Datum::Gsk2011, Datum::Gsk2011, &store).unwrap(),
            p
        );
    }
}

#[test]
fn custom_json_store_drives_the_same_pipeline() {
    // A store with a single datum: anything else must fail cleanly.
    let json = r#"{
        "СК-42": {"wx": 0.0, "wy": 0.0, "wz": 0.0,
                  "dX": 25.0, "dY": -141.0, "dZ": -80.0, "m": 0.0}
    }"#;
    let store = ParameterStore::from_json_str(json).expect("Failed to parse parameter JSON");

    // Translation-only set: the origin maps onto the offsets exactly.
    let out = convert(Point::zeros(), Datum::Sk42, Datum::Gsk2011, &store).unwrap();
    assert_eq!(out, Point::new(25.0, -141.0, -80.0));

    let err = convert(Point::zeros(), Datum::Wgs84, Datum::Gsk2011, &store).unwrap_err();
    assert_eq!(err, ConvertError::UnknownDatum(Datum::Wgs84));

    // The report needs parameters for both legs and reports the first gap.
    let err = conversion_report(Datum::Sk42, Datum::Wgs84, &[], &[], &store).unwrap_err();
    assert_eq!(err, ConvertError::UnknownDatum(Datum::Wgs84));
}

#[test]
fn batch_with_bad_rows_keeps_the_good_ones_aligned() {
    let store = ParameterStore::builtin();
    let points = [
        Point::new(2_850_123.456, 2_195_456.789, 5_245_789.012),
        Point::new(f64::INFINITY, 0.0, 0.0),
        Point::new(2_850_200.000, 2_195_500.000, 5_245_800.000),
    ];

    let results = convert_all(&points, Datum::Sk95, Datum::Pz9002, &store);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(ConvertError::NonFiniteInput { .. })
    ));
    assert!(results[2].is_ok());
}
