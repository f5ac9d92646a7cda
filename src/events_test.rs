// Tests for event payloads
// Test cases:
// - Payload serializes with camelCase field names

use super::*;

#[test]
fn test_payload_serializes_camel_case() {
    let payload = WordStoreUpdatedPayload {
        action: "add".to_string(),
        entry_key: "hello".to_string(),
    };

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["action"], "add");
    assert_eq!(json["entryKey"], "hello");
}
