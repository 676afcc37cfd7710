use chrono::{TimeZone, Utc};
use elapsed_core::{DateRecord, RecordValidationError};
use uuid::Uuid;

#[test]
fn new_record_gets_fresh_ids() {
    let date = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
    let first = DateRecord::new("結婚記念日", date).unwrap();
    let second = DateRecord::new("結婚記念日", date).unwrap();

    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);
    assert_eq!(first.date, date);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let date = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
    let record = DateRecord::with_id(id, "結婚記念日", date).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "11111111-2222-4333-8444-555555555555",
            "title": "結婚記念日",
            "date": "2023-03-01T12:00:00.000Z"
        })
    );

    let decoded: DateRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialize_accepts_offset_timestamps() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "入社日",
        "date": "2023-04-01T09:00:00+09:00"
    });

    let record: DateRecord = serde_json::from_value(value).unwrap();
    assert_eq!(record.date, Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap());
}

#[test]
fn deserialize_rejects_blank_title_and_bad_date() {
    let blank = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "",
        "date": "2023-03-01T12:00:00.000Z"
    });
    let err = serde_json::from_value::<DateRecord>(blank).unwrap_err();
    assert!(err.to_string().contains("title must not be empty"), "{err}");

    let bad_date = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "x",
        "date": "2023-02-30T12:00:00.000Z"
    });
    let err = serde_json::from_value::<DateRecord>(bad_date).unwrap_err();
    assert!(err.to_string().contains("invalid record date"), "{err}");
}

#[test]
fn with_id_rejects_nil_uuid() {
    let date = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
    let err = DateRecord::with_id(Uuid::nil(), "title", date).unwrap_err();
    assert_eq!(err, RecordValidationError::NilId);
}
