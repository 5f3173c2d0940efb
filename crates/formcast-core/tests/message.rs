// formcast-core/tests/message.rs
// ============================================================================
// Module: Canonical Message Wire-Format Tests
// Description: Tagging and field disambiguation of the canonical model.
// ============================================================================
//! ## Overview
//! Validates the wire representation the rest of the pipeline relies on:
//! layout variants discriminated by their `"type"` tag, array fields
//! distinguished from scalar fields by tag and `items`, and declaration
//! order preserved through deserialization.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    reason = "Tests use unwrap and panic on deterministic fixtures."
)]

use formcast_core::CanonicalFormMessage;
use formcast_core::FieldDefinition;
use formcast_core::LayoutElement;
use serde_json::json;

#[test]
fn layout_variants_deserialize_by_type_tag() {
    let message: CanonicalFormMessage = serde_json::from_value(json!({
        "schemaVersion": "1.0.0",
        "formId": "kyc-sof",
        "layout": [
            {
                "type": "Group",
                "labelKey": "sof.title",
                "elements": [
                    { "type": "Row", "elements": [{ "type": "Field", "key": "total" }] }
                ]
            }
        ],
        "fields": {
            "total": { "type": "number", "widget": "text", "labelKey": "sof.total" }
        }
    }))
    .unwrap();

    let LayoutElement::Group {
        label_key,
        elements,
        ..
    } = &message.layout[0]
    else {
        panic!("expected a group at the layout root");
    };
    assert_eq!(label_key, "sof.title");
    assert!(matches!(elements[0], LayoutElement::Row { .. }));
}

#[test]
fn array_and_simple_fields_disambiguate_on_the_wire() {
    let message: CanonicalFormMessage = serde_json::from_value(json!({
        "schemaVersion": "1.0.0",
        "formId": "kyc-sof",
        "layout": [],
        "fields": {
            "sofCountries": {
                "type": "array",
                "widget": "table",
                "labelKey": "sof.countries",
                "items": {
                    "type": "object",
                    "fields": {
                        "country": { "type": "string", "widget": "select", "labelKey": "sof.country" }
                    }
                }
            },
            "comment": { "type": "string", "widget": "textarea", "labelKey": "sof.comment" }
        }
    }))
    .unwrap();

    assert!(matches!(
        message.fields["sofCountries"],
        FieldDefinition::Array(_)
    ));
    assert!(matches!(
        message.fields["comment"],
        FieldDefinition::Simple(_)
    ));

    let keys: Vec<&str> = message.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, ["sofCountries", "comment"]);
}

#[test]
fn serialization_restores_the_wire_names() {
    let message = CanonicalFormMessage::v1(
        "form-1",
        vec![LayoutElement::field_ref("a")],
        indexmap::IndexMap::from([(
            "a".to_string(),
            formcast_core::SimpleField::new("string", "text", "label.a").into(),
        )]),
    );

    let encoded = serde_json::to_value(&message).unwrap();
    assert_eq!(encoded["schemaVersion"], json!("1.0.0"));
    assert_eq!(encoded["formId"], json!("form-1"));
    assert_eq!(encoded["layout"][0], json!({ "type": "Field", "key": "a" }));
    assert_eq!(
        encoded["fields"]["a"],
        json!({ "type": "string", "widget": "text", "labelKey": "label.a" })
    );

    let decoded: CanonicalFormMessage = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, message);
}
