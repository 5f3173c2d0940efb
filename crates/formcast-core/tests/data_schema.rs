// formcast-core/tests/data_schema.rs
// ============================================================================
// Module: Data-Schema Builder Tests
// Description: Property shape, ordering, and read-only gating of artifact A.
// ============================================================================
//! ## Overview
//! Validates the data-schema builder against the documented property layout:
//! one property per field in declaration order, titles from the label
//! resolver, verbatim bounds, permission-gated `readOnly`, and recursive
//! array items.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]

use formcast_core::ArrayField;
use formcast_core::DATA_SCHEMA_DIALECT;
use formcast_core::DataSchemaBuilder;
use formcast_core::FieldDefinition;
use formcast_core::MapLabelResolver;
use formcast_core::NullLabelResolver;
use formcast_core::ObjectItem;
use formcast_core::Permission;
use formcast_core::RoleToken;
use formcast_core::SimpleField;
use formcast_core::ValidationRules;
use indexmap::IndexMap;
use serde_json::Value;
use serde_json::json;

fn simple(field_type: &str, label_key: &str) -> FieldDefinition {
    SimpleField::new(field_type, "text", label_key).into()
}

fn build(fields: &IndexMap<String, FieldDefinition>, role: &str) -> Value {
    let role = RoleToken::from(role);
    DataSchemaBuilder::new(&role, &NullLabelResolver).build(fields)
}

#[test]
fn schema_envelope_carries_the_dialect() {
    let schema = build(&IndexMap::new(), "USER");

    assert_eq!(schema["$schema"], json!(DATA_SCHEMA_DIALECT));
    assert_eq!(schema["type"], json!("object"));
    assert_eq!(schema["required"], json!([]));
    assert!(schema["properties"].as_object().unwrap().is_empty());
}

#[test]
fn properties_mirror_field_order() {
    let fields = IndexMap::from([
        ("lastName".to_string(), simple("string", "person.last")),
        ("firstName".to_string(), simple("string", "person.first")),
        ("age".to_string(), simple("number", "person.age")),
    ]);
    let schema = build(&fields, "USER");

    let keys: Vec<&str> = schema["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["lastName", "firstName", "age"]);
}

#[test]
fn field_without_permissions_has_no_read_only_key() {
    let fields = IndexMap::from([("a".to_string(), simple("string", "label.a"))]);
    let schema = build(&fields, "USER");

    assert_eq!(schema["properties"]["a"]["type"], json!("string"));
    assert!(schema["properties"]["a"].get("readOnly").is_none());
}

#[test]
fn field_granted_to_another_role_is_read_only() {
    let field: FieldDefinition = SimpleField::new("string", "text", "label.a")
        .with_permissions(vec![Permission::edit("ADMIN")])
        .into();
    let fields = IndexMap::from([("a".to_string(), field)]);
    let schema = build(&fields, "USER");

    assert_eq!(schema["properties"]["a"]["readOnly"], json!(true));
}

#[test]
fn edit_grants_match_case_insensitively() {
    let field: FieldDefinition = SimpleField::new("string", "text", "label.a")
        .with_permissions(vec![Permission::edit("ADMIN")])
        .into();
    let fields = IndexMap::from([("a".to_string(), field)]);
    let schema = build(&fields, "admin");

    assert!(schema["properties"]["a"].get("readOnly").is_none());
}

#[test]
fn unresolved_label_key_falls_back_verbatim() {
    let fields = IndexMap::from([("a".to_string(), simple("string", "x.y.z"))]);
    let schema = build(&fields, "USER");

    assert_eq!(schema["properties"]["a"]["title"], json!("x.y.z"));
}

#[test]
fn resolved_label_key_becomes_the_title() {
    let fields = IndexMap::from([("a".to_string(), simple("string", "person.first"))]);
    let role = RoleToken::from("USER");
    let labels = MapLabelResolver::from_iter([("person.first", "First name")]);
    let schema = DataSchemaBuilder::new(&role, &labels).build(&fields);

    assert_eq!(schema["properties"]["a"]["title"], json!("First name"));
}

#[test]
fn bounds_copy_verbatim_and_required_stays_off_the_property() {
    let field: FieldDefinition = SimpleField::new("number", "slider", "label.a")
        .with_validation(ValidationRules::required().with_bounds(1, 10))
        .into();
    let fields = IndexMap::from([("a".to_string(), field)]);
    let schema = build(&fields, "USER");

    assert_eq!(schema["properties"]["a"]["minimum"], json!(1));
    assert_eq!(schema["properties"]["a"]["maximum"], json!(10));
    assert!(schema["properties"]["a"].get("required").is_none());
    assert_eq!(schema["required"], json!(["a"]));
}

#[test]
fn array_field_embeds_a_nested_sub_schema() {
    let items = ObjectItem::new(IndexMap::from([
        (
            "country".to_string(),
            FieldDefinition::from(
                SimpleField::new("string", "select", "sof.country")
                    .with_validation(ValidationRules::required()),
            ),
        ),
        ("amount".to_string(), simple("number", "sof.amount")),
    ]));
    let field: FieldDefinition = ArrayField::new("table", "sof.countries", items)
        .with_permissions(vec![Permission::edit("ADMIN")])
        .into();
    let fields = IndexMap::from([("sofCountries".to_string(), field)]);
    let schema = build(&fields, "USER");

    let property = &schema["properties"]["sofCountries"];
    assert_eq!(property["type"], json!("array"));
    assert_eq!(property["readOnly"], json!(true));
    assert_eq!(property["items"]["type"], json!("object"));
    assert_eq!(property["items"]["required"], json!(["country"]));

    let nested: Vec<&str> = property["items"]["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(nested, ["country", "amount"]);
}

#[test]
fn unknown_type_strings_pass_through() {
    let fields = IndexMap::from([("a".to_string(), simple("decimal128", "label.a"))]);
    let schema = build(&fields, "USER");

    assert_eq!(schema["properties"]["a"]["type"], json!("decimal128"));
}
