//! Tests for OData query option building

use super::*;
use chrono::TimeZone;
use pretty_assertions::assert_eq;

#[test]
fn test_format_timestamp_second_precision() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
    assert_eq!(format_timestamp(ts), "2024-05-01T12:30:45Z");
}

#[test]
fn test_format_timestamp_truncates_subseconds() {
    let ts = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 30, 45)
        .unwrap()
        .checked_add_signed(chrono::Duration::milliseconds(987))
        .unwrap();
    // no sub-second component survives formatting
    assert_eq!(format_timestamp(ts), "2024-05-01T12:30:45Z");
}

#[test]
fn test_updated_since_clause() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(
        updated_since("updatedDate", ts),
        "updatedDate gt 2024-01-02T03:04:05Z"
    );
}

#[test]
fn test_query_pairs_full_shape_and_order() {
    let options = QueryOptions::new()
        .select(&["orgId", "orgName", "updatedDate"])
        .count(true)
        .top(10)
        .skip(20)
        .filter("updatedDate gt 2024-01-01T00:00:00Z");

    let pairs = options.to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("$select".to_string(), "orgId,orgName,updatedDate".to_string()),
            ("$count".to_string(), "true".to_string()),
            ("$top".to_string(), "10".to_string()),
            ("$skip".to_string(), "20".to_string()),
            (
                "$filter".to_string(),
                "updatedDate gt 2024-01-01T00:00:00Z".to_string()
            ),
        ]
    );
}

#[test]
fn test_absent_filter_is_omitted() {
    let options = QueryOptions::new().select(&["orgId"]).count(true).top(10).skip(0);
    let pairs = options.to_query_pairs();
    assert!(pairs.iter().all(|(key, _)| key != "$filter"));
    // omitted entirely, not present with an empty value
    assert_eq!(pairs.len(), 4);
}

#[test]
fn test_empty_options_render_nothing() {
    assert!(QueryOptions::new().to_query_pairs().is_empty());
}
