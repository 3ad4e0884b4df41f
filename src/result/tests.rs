//! Tests for result module

use super::*;
use crate::access::{FieldAccessor, FieldValue};
use crate::error::Error;
use crate::field_accessor;
use crate::option::PagingOption;
use crate::pagination::{validate_cursor_column, BoundedScanBuilder, CursorBuilder, OptionCollection};
use crate::types::{Direction, PagingMode, PagingWhere, Symbol};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

#[derive(Debug, Clone)]
struct Model {
    id: String,
    value_column: i32,
    ratio: f32,
    flag: bool,
}

field_accessor!(Model {
    id,
    value_column,
    ratio,
    flag
});

fn model() -> Model {
    Model {
        id: "1.23456789".to_string(),
        value_column: 1234,
        ratio: 1.1,
        flag: true,
    }
}

fn collection_for(column: &str, direction: Direction, current: i64, goto: i64) -> OptionCollection {
    BoundedScanBuilder.build(
        PagingOption::cursor(column, direction, 10)
            .jump(current, goto, 100.0)
            .normalize(),
    )
}

// ============================================================================
// Last Page Tests
// ============================================================================

#[test_case(200, 10, 20 ; "evenly divisible")]
#[test_case(205, 10, 21 ; "remainder")]
#[test_case(1, 10, 1 ; "single row")]
#[test_case(10, 10, 1 ; "exactly one page")]
#[test_case(0, 10, 0 ; "empty")]
#[test_case(-5, 10, 0 ; "negative total")]
#[test_case(50, 0, 0 ; "invalid page size")]
fn test_last_page(total: i64, page_size: i64, expected: i64) {
    assert_eq!(last_page(total, page_size), expected);
}

// ============================================================================
// Reversal Tests
// ============================================================================

#[test]
fn test_reverse_records() {
    let mut records = vec![1, 2, 3, 4, 5, 6];
    reverse_records(&mut records);
    assert_eq!(records, vec![6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_reverse_twice_is_identity() {
    let original = vec!["a", "b", "c", "d"];
    let mut records = original.clone();
    reverse_records(&mut records);
    reverse_records(&mut records);
    assert_eq!(records, original);
}

#[test]
fn test_reverse_short_slices_unchanged() {
    let mut empty: Vec<i32> = vec![];
    reverse_records(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![7];
    reverse_records(&mut single);
    assert_eq!(single, vec![7]);
}

// ============================================================================
// Cursor Token Tests
// ============================================================================

#[test_case(FieldValue::Int(100), 100.0 ; "integer")]
#[test_case(FieldValue::Int(-3), -3.0 ; "negative integer")]
#[test_case(FieldValue::UInt(7), 7.0 ; "unsigned")]
#[test_case(FieldValue::Float64(2.25), 2.25 ; "f64 passthrough")]
#[test_case(FieldValue::Float32(1.1), f64::from(1.1f32) ; "f32 widened exactly")]
#[test_case(FieldValue::Str("1.5".to_string()), 1.5 ; "numeric string")]
#[test_case(FieldValue::Str("42".to_string()), 42.0 ; "integer string")]
fn test_cursor_token(value: FieldValue, expected: f64) {
    assert_eq!(cursor_token("id", &value).unwrap(), expected);
}

#[test]
fn test_f32_cursor_excludes_anchor_row() {
    // The stored column compares at f32 precision; the token must too
    let stored = 1.1f32;
    let token = cursor_token("ratio", &FieldValue::Float32(stored)).unwrap();
    let next = PagingWhere::new("ratio", Symbol::Gt, token);
    assert!(!next.accepts(f64::from(stored)));
}

#[test]
fn test_cursor_token_bad_string() {
    let err = cursor_token("id", &FieldValue::Str("abc".to_string())).unwrap_err();
    assert!(matches!(err, Error::ConversionFailure { ref column, .. } if column == "id"));

    let err = cursor_token("id", &FieldValue::Str(" 1.5".to_string())).unwrap_err();
    assert!(matches!(err, Error::ConversionFailure { .. }));
}

#[test_case(FieldValue::Bool(true) ; "bool")]
#[test_case(FieldValue::Null ; "null")]
#[test_case(FieldValue::Other("array".to_string()) ; "array")]
fn test_cursor_token_non_numeric(value: FieldValue) {
    let err = cursor_token("id", &value).unwrap_err();
    assert!(matches!(err, Error::NonNumericCursor { .. }));
}

// ============================================================================
// Cursor Extraction Tests
// ============================================================================

#[test]
fn test_extract_from_json_record() {
    let collection = collection_for("id", Direction::Desc, 0, 1);
    assert_eq!(
        extract_cursor_value(&collection, &json!({"id": 100})).unwrap(),
        100.0
    );
    assert_eq!(
        extract_cursor_value(&collection, &json!({"id": "1.5"})).unwrap(),
        1.5
    );
}

#[test]
fn test_extract_from_struct_fields() {
    let record = model();

    let collection = collection_for("id", Direction::Desc, 0, 1);
    assert_eq!(extract_cursor_value(&collection, &record).unwrap(), 1.234_567_89);

    let collection = collection_for("value_column", Direction::Desc, 0, 1);
    assert_eq!(extract_cursor_value(&collection, &record).unwrap(), 1234.0);

    let collection = collection_for("ratio", Direction::Desc, 0, 1);
    assert_eq!(
        extract_cursor_value(&collection, &record).unwrap(),
        f64::from(1.1f32)
    );
}

#[test]
fn test_extract_maps_column_name() {
    // Snake naming maps a Pascal-cased column onto the struct field
    let collection = collection_for("ValueColumn", Direction::Desc, 0, 1);
    assert_eq!(extract_cursor_value(&collection, &model()).unwrap(), 1234.0);
}

struct VersionedRow {
    item_v2: i64,
    col2: i64,
}

field_accessor!(VersionedRow { item_v2, col2 });

#[test_case("col2", 7.0 ; "trailing digit")]
#[test_case("item_v2", 3.0 ; "digit in last word")]
fn test_extract_digit_column(column: &str, expected: f64) {
    let row = VersionedRow { item_v2: 3, col2: 7 };
    let collection = collection_for(column, Direction::Asc, 0, 1);

    assert_eq!(row.field_name(column), column);
    assert!(validate_cursor_column(&collection.option, Some(&row)).is_ok());
    assert_eq!(extract_cursor_value(&collection, &row).unwrap(), expected);
}

#[test]
fn test_extract_missing_field() {
    let collection = collection_for("auto_id", Direction::Desc, 0, 1);

    let err = extract_cursor_value(&collection, &json!({"id": 1})).unwrap_err();
    assert!(matches!(err, Error::NonNumericCursor { ref column, .. } if column == "auto_id"));

    let err = extract_cursor_value(&collection, &model()).unwrap_err();
    assert!(matches!(err, Error::NonNumericCursor { .. }));
}

#[test]
fn test_extract_not_a_struct() {
    let collection = collection_for("id", Direction::Desc, 0, 1);
    let err = extract_cursor_value(&collection, &json!([1, 2])).unwrap_err();
    assert!(matches!(err, Error::NonNumericCursor { ref reason, .. } if reason.contains("array")));
}

#[test]
fn test_extract_non_numeric_field() {
    let collection = collection_for("flag", Direction::Desc, 0, 1);
    let err = extract_cursor_value(&collection, &model()).unwrap_err();
    assert!(matches!(err, Error::NonNumericCursor { ref reason, .. } if reason.contains("bool")));
}

// ============================================================================
// Result Slice Tests
// ============================================================================

#[test]
fn test_calc_result_slice_forward() {
    let collection = collection_for("id", Direction::Asc, 10, 11);
    let mut records: Vec<Value> = (101..=110).map(|id| json!({ "id": id })).collect();

    let info = DefaultInterpreter
        .calc_result_slice(&collection, &mut records)
        .unwrap();

    assert_eq!(info.slice_len, 10);
    assert_eq!(info.cursor_value, 110.0);
    assert_eq!(records[0]["id"], 101);
}

#[test]
fn test_calc_result_slice_reversed() {
    let collection = collection_for("id", Direction::Asc, 10, 9);
    assert!(collection.is_reverse);
    let mut records: Vec<Value> = (81..=90).rev().map(|id| json!({ "id": id })).collect();

    let info = DefaultInterpreter
        .calc_result_slice(&collection, &mut records)
        .unwrap();

    let ids: Vec<i64> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (81..=90).collect::<Vec<_>>());
    assert_eq!(info.cursor_value, 90.0);
}

#[test]
fn test_calc_result_slice_empty() {
    let collection = collection_for("id", Direction::Asc, 10, 9);
    let mut records: Vec<Value> = vec![];
    let info = DefaultInterpreter
        .calc_result_slice(&collection, &mut records)
        .unwrap();
    assert_eq!(info, SliceInfo::default());
}

// ============================================================================
// Descriptor Tests
// ============================================================================

#[test]
fn test_result_echoes_option() {
    let option = PagingOption::cursor("auto_id", Direction::Asc, 10)
        .jump(10, 11, 100.0)
        .with_order("name", Direction::Asc);
    let result = PagingResult::from_option(&option, 200);

    assert_eq!(result.paging_mode, PagingMode::Cursor);
    assert_eq!(result.total_size, 200);
    assert_eq!(result.page_size, 10);
    assert_eq!(result.current_page, 11);
    assert_eq!(result.order_by, option.order_by);
    assert_eq!(result.cursor_column, "auto_id");
    assert_eq!(result.cursor_direction, Direction::Asc);
    assert_eq!(result.cursor_value, 0.0);
}

#[test]
fn test_set_range() {
    let option = PagingOption::page_number(3, 10);
    let mut result = PagingResult::from_option(&option, 25);
    result.set_range(5);
    assert_eq!(result.show_from, 21);
    assert_eq!(result.show_to, 25);

    result.set_range(0);
    assert_eq!(result.show_from, 0);
    assert_eq!(result.show_to, 0);
}

#[test]
fn test_next_option_chains_cursor() {
    let option = PagingOption::cursor("id", Direction::Desc, 10).with_goto_page(10);
    let mut result = PagingResult::from_option(&option, 200);
    result.last_page = 20;
    result.cursor_value = 101.0;

    assert!(result.has_next());
    assert!(result.has_previous());

    let next = result.next_option();
    assert_eq!(next.paging_mode, PagingMode::Cursor);
    assert_eq!(next.current_page_number, 10);
    assert_eq!(next.goto_page_number, 11);
    assert_eq!(next.cursor_value, 101.0);
    assert_eq!(next.cursor_direction, Direction::Desc);
}

// ============================================================================
// Executor Output Parsing Tests
// ============================================================================

#[test]
fn test_result_collection_from_object() {
    let value = json!({"total_records": 200, "records": [{"id": 1}, {"id": 2}]});
    let collection = PagingResultCollection::from_json(value).unwrap();
    assert_eq!(collection.total_records, 200);
    assert_eq!(collection.records.len(), 2);
}

#[test]
fn test_result_collection_from_array() {
    let collection = PagingResultCollection::from_json(json!([{"id": 1}])).unwrap();
    assert_eq!(collection.total_records, 1);
}

#[test]
fn test_result_collection_records_not_a_sequence() {
    let value = json!({"total_records": 2, "records": {"id": 1}});
    let err = PagingResultCollection::from_json(value).unwrap_err();
    assert!(matches!(err, Error::NotASequence { ref found } if found == "object"));

    let err = PagingResultCollection::from_json(json!("rows")).unwrap_err();
    assert!(matches!(err, Error::NotASequence { .. }));
}

#[test]
fn test_result_collection_missing_total() {
    let err = PagingResultCollection::from_json(json!({"records": []})).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn test_records_from_json() {
    assert_eq!(records_from_json(json!([1, 2])).unwrap().len(), 2);
    assert!(matches!(
        records_from_json(json!(null)).unwrap_err(),
        Error::NotASequence { .. }
    ));
}
