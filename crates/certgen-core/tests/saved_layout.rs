//! Integration tests: persisted layout documents (certgen-core).
//!
//! Exercises the wire format as the backend writes it: pretty-printed JSON,
//! integer and float coordinates, signature slot keys.

use certgen_core::{FieldKey, Layout, Position, SignatureSlot};
use pretty_assertions::assert_eq;

fn saved() -> Layout {
    Layout::from_json(include_str!("fixtures/saved_layout.json")).unwrap()
}

// ─── Parsing ────────────────────────────────────────────────────────────

#[test]
fn parses_backend_document_in_order() {
    let layout = saved();
    let keys: Vec<&str> = layout.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["name", "event", "date", "signature1_pos1", "signature1_pos2"]
    );
    assert_eq!(
        layout.get(FieldKey::intern("name")),
        Some(Position::new(412.5, 301.0))
    );
}

#[test]
fn signature_entries_parse_as_slots() {
    let layout = saved();
    let slots: Vec<SignatureSlot> = layout.keys().filter_map(SignatureSlot::of).collect();
    assert_eq!(
        slots,
        vec![
            SignatureSlot::Multi {
                signature: 1,
                position: 1
            },
            SignatureSlot::Multi {
                signature: 1,
                position: 2
            },
        ]
    );
    assert_eq!(layout.signature_count(), 2);
}

// ─── Re-serialization ───────────────────────────────────────────────────

#[test]
fn reserialized_document_parses_to_same_layout() {
    let layout = saved();
    let json = layout.to_json().unwrap();
    assert_eq!(Layout::from_json(&json).unwrap(), layout);
}

#[test]
fn empty_object_is_empty_layout() {
    let layout = Layout::from_json("{}").unwrap();
    assert!(layout.is_empty());
    assert_eq!(layout.to_json().unwrap(), "{}");
}
