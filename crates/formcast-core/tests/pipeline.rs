// formcast-core/tests/pipeline.rs
// ============================================================================
// Module: Rendering Pipeline Tests
// Description: End-to-end render calls, determinism, and error taxonomy.
// ============================================================================
//! ## Overview
//! Drives the full pipeline over realistic messages and checks the happy
//! path, byte-identical determinism, and one scenario per error code.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]

use formcast_core::CanonicalFormMessage;
use formcast_core::FieldDefinition;
use formcast_core::FormRenderer;
use formcast_core::LayoutElement;
use formcast_core::MapLabelResolver;
use formcast_core::MapperRegistry;
use formcast_core::Permission;
use formcast_core::RenderError;
use formcast_core::RendererConfig;
use formcast_core::RoleToken;
use formcast_core::SchemaLoadError;
use formcast_core::SchemaValidator;
use formcast_core::SimpleField;
use formcast_core::TargetFormat;
use formcast_core::ValidationRules;
use indexmap::IndexMap;
use serde_json::json;

fn personal_details_message() -> CanonicalFormMessage {
    CanonicalFormMessage::v1(
        "kyc-personal",
        vec![LayoutElement::group(
            "kyc.personal.title",
            vec![
                LayoutElement::row(vec![
                    LayoutElement::field_ref("firstName"),
                    LayoutElement::field_ref("lastName"),
                ]),
                LayoutElement::row(vec![LayoutElement::field_ref("riskScore")]),
            ],
        )],
        IndexMap::from([
            (
                "firstName".to_string(),
                FieldDefinition::from(
                    SimpleField::new("string", "text", "kyc.personal.firstName")
                        .with_validation(ValidationRules::required()),
                ),
            ),
            (
                "lastName".to_string(),
                FieldDefinition::from(SimpleField::new(
                    "string",
                    "text",
                    "kyc.personal.lastName",
                )),
            ),
            (
                "riskScore".to_string(),
                FieldDefinition::from(
                    SimpleField::new("number", "slider", "kyc.personal.riskScore")
                        .with_validation(ValidationRules::default().with_bounds(0, 100))
                        .with_permissions(vec![Permission::edit("ADMIN")]),
                ),
            ),
        ]),
    )
}

fn labels() -> MapLabelResolver {
    MapLabelResolver::from_iter([
        ("kyc.personal.title", "Personal details"),
        ("kyc.personal.firstName", "First name"),
        ("kyc.personal.lastName", "Last name"),
    ])
}

#[test]
fn happy_path_returns_all_three_artifacts() {
    let renderer = FormRenderer::new().unwrap();
    let message = personal_details_message();
    let role = RoleToken::from("USER");

    let rendered = renderer
        .render(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap();

    assert_eq!(rendered.canonical, serde_json::to_value(&message).unwrap());

    let schema = &rendered.data_schema;
    assert_eq!(schema["required"], json!(["firstName"]));
    assert_eq!(
        schema["properties"]["firstName"]["title"],
        json!("First name")
    );
    assert_eq!(schema["properties"]["riskScore"]["minimum"], json!(0));
    assert_eq!(schema["properties"]["riskScore"]["maximum"], json!(100));
    assert_eq!(schema["properties"]["riskScore"]["readOnly"], json!(true));
    assert_eq!(
        schema["properties"]["riskScore"]["title"],
        json!("kyc.personal.riskScore")
    );

    let ui = &rendered.ui_layout;
    assert_eq!(ui["type"], json!("Group"));
    assert_eq!(ui["label"], json!("Personal details"));
    assert_eq!(ui["elements"][0]["type"], json!("HorizontalLayout"));
    assert_eq!(
        ui["elements"][1],
        json!({ "type": "Control", "scope": "#/properties/riskScore" })
    );
}

#[test]
fn admin_role_may_edit_the_gated_field() {
    let renderer = FormRenderer::new().unwrap();
    let message = personal_details_message();
    let role = RoleToken::from("admin");

    let rendered = renderer
        .render(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap();

    assert!(
        rendered.data_schema["properties"]["riskScore"]
            .get("readOnly")
            .is_none()
    );
}

#[test]
fn identical_inputs_produce_byte_identical_output() {
    let renderer = FormRenderer::new().unwrap();
    let message = personal_details_message();
    let role = RoleToken::from("USER");

    let first = renderer
        .render_to_string(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap();
    let second = renderer
        .render_to_string(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap();

    assert_eq!(first, second);

    let parsed: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert!(parsed.get("canonical").is_some());
    assert!(parsed.get("dataSchema").is_some());
    assert!(parsed.get("uiLayout").is_some());
}

#[test]
fn structural_failure_carries_the_bean_validation_code() {
    let renderer = FormRenderer::new().unwrap();
    let mut message = personal_details_message();
    message.form_id = " ".into();
    let role = RoleToken::from("USER");

    let error = renderer
        .render(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap_err();

    assert_eq!(error.code(), "ERR_BEAN_VALIDATION");
    assert_eq!(error.details().len(), 1);
    assert_eq!(error.details()[0].path, "formId");
}

#[test]
fn missing_mapper_is_fatal_for_the_call() {
    let renderer = FormRenderer::with_parts(
        MapperRegistry::new(),
        SchemaValidator::with_all_formats().unwrap(),
    );
    let message = personal_details_message();
    let role = RoleToken::from("USER");

    let error = renderer
        .render(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap_err();

    assert_eq!(error.code(), "ERR_NO_MAPPER");
    assert!(error.details().is_empty());
    assert!(matches!(
        error,
        RenderError::NoMapper {
            format: TargetFormat::CanonicalFormV1
        }
    ));
}

#[test]
fn missing_schema_is_fatal_for_the_call() {
    let renderer = FormRenderer::with_config(&RendererConfig {
        formats: Vec::new(),
    })
    .unwrap();
    let message = personal_details_message();
    let role = RoleToken::from("USER");

    let error = renderer
        .render(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap_err();

    assert_eq!(error.code(), "ERR_NO_SCHEMA");
}

#[test]
fn empty_layout_fails_output_validation_at_the_layout_path() {
    let renderer = FormRenderer::new().unwrap();
    let mut message = personal_details_message();
    message.layout = Vec::new();
    let role = RoleToken::from("USER");

    let error = renderer
        .render(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap_err();

    assert_eq!(error.code(), "ERR_SCHEMA_VALIDATION");
    assert_eq!(error.details().len(), 1);
    assert_eq!(error.details()[0].path, "/layout");
    assert_eq!(error.details()[0].code, "minItems");
}

#[test]
fn unparseable_schema_document_fails_at_construction() {
    let error = SchemaValidator::with_documents(&[(TargetFormat::CanonicalFormV1, "{ not json")])
        .unwrap_err();

    assert!(matches!(
        error,
        SchemaLoadError::Invalid {
            format: TargetFormat::CanonicalFormV1,
            ..
        }
    ));
    assert_eq!(RenderError::from(error).code(), "ERR_NO_SCHEMA");
}

#[test]
fn uncompilable_schema_document_fails_at_construction() {
    let source = r#"{ "type": 42 }"#;
    let error =
        SchemaValidator::with_documents(&[(TargetFormat::CanonicalFormV1, source)]).unwrap_err();

    assert!(matches!(
        error,
        SchemaLoadError::Invalid {
            format: TargetFormat::CanonicalFormV1,
            ..
        }
    ));
}

#[test]
fn renderer_accepts_a_caller_supplied_schema_document() {
    let permissive = r#"{ "type": "object" }"#;
    let renderer = FormRenderer::with_parts(
        MapperRegistry::with_builtin_mappers(),
        SchemaValidator::with_documents(&[(TargetFormat::CanonicalFormV1, permissive)]).unwrap(),
    );
    let mut message = personal_details_message();
    message.layout = Vec::new();
    let role = RoleToken::from("USER");

    let rendered = renderer
        .render(&message, &role, &labels(), TargetFormat::CanonicalFormV1)
        .unwrap();
    assert_eq!(rendered.ui_layout["type"], json!("VerticalLayout"));
}

#[test]
fn schema_validator_accepts_the_mapped_happy_path_document() {
    let validator = SchemaValidator::with_all_formats().unwrap();
    let document = serde_json::to_value(personal_details_message()).unwrap();

    let violations = validator
        .validate(&document, TargetFormat::CanonicalFormV1)
        .unwrap();
    assert!(violations.is_empty());
}
