use multi_calendar::CalendarDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Bulletin {
    title: String,
    event_date: CalendarDate,
}

#[test]
fn test_serializes_as_iso_string() {
    let bulletin = Bulletin {
        title: "report".to_string(),
        event_date: CalendarDate::from_gregorian(2006, 4, 31),
    };

    let json = serde_json::to_string(&bulletin).unwrap();
    assert_eq!(json, r#"{"title":"report","event_date":"2006-05-01"}"#);

    let back: Bulletin = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bulletin);
}

#[test]
fn test_deserialize_rejects_invalid_date() {
    let result: Result<Bulletin, _> =
        serde_json::from_str(r#"{"title":"x","event_date":"2006-13-01"}"#);
    assert!(result.is_err());

    let result: Result<Bulletin, _> =
        serde_json::from_str(r#"{"title":"x","event_date":"May 1st"}"#);
    assert!(result.is_err());
}
