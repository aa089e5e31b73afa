//! Schema Invariant Tests
//!
//! - Validation is deterministic
//! - Required fields must be present and non-null
//! - Undeclared fields pass
//! - Kind matching is exact, no coercion
//! - Sequence shapes apply to every element
//! - Schemas load from a directory and cannot be re-registered

use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use treepath::schema::SchemaErrorCode;
use treepath::{
    check_schema, validate_schema, FieldSchema, ObjectSchema, SchemaLoader, SchemaNode,
    ValidationDetails,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn garage_schema() -> SchemaNode {
    SchemaLoader::parse(&json!({
        "name": {"type": "String", "required": true},
        "age": {"type": "Number"},
        "cars": [{
            "name": {"type": "String", "required": true},
            "models": [{"type": "String"}]
        }]
    }))
    .unwrap()
}

fn garage() -> Value {
    json!({
        "name": "John",
        "age": 30,
        "cars": [
            {"name": "Ford", "models": ["Fiesta", "Focus", "Mustang"]},
            {"name": "BMW", "models": ["320", "X3", "X5"]}
        ]
    })
}

fn user_schema() -> SchemaNode {
    ObjectSchema::new()
        .field("id", FieldSchema::string().required())
        .field("email", FieldSchema::string().with_regex("@").unwrap())
        .field(
            "address",
            FieldSchema::object().with_properties(
                ObjectSchema::new().field("city", FieldSchema::string().required()),
            ),
        )
        .into()
}

// =============================================================================
// Determinism
// =============================================================================

/// Same value validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let schema = garage_schema();
    let good = garage();
    let mut bad = garage();
    bad["cars"][1]["models"][2] = json!(5);

    let expected = ValidationDetails::type_mismatch("cars[1].models[2]", "string", "number");
    for _ in 0..100 {
        assert!(validate_schema(&good, &schema));
        assert_eq!(check_schema(&bad, &schema), Err(expected.clone()));
    }
}

/// Declaration order decides which violation is reported first.
#[test]
fn test_first_violation_in_declaration_order() {
    let schema = user_schema();
    let value = json!({"email": "nope", "address": {}});

    let details = check_schema(&value, &schema).unwrap_err();
    assert_eq!(details, ValidationDetails::missing_field("id"));
}

// =============================================================================
// Required Fields
// =============================================================================

#[test]
fn test_required_field_missing() {
    let mut value = garage();
    value.as_object_mut().unwrap().remove("name");

    let details = check_schema(&value, &garage_schema()).unwrap_err();
    assert_eq!(details.field, "name");
    assert_eq!(details.actual, "missing");
}

#[test]
fn test_required_field_null() {
    let mut value = garage();
    value["cars"][0]["name"] = Value::Null;

    let details = check_schema(&value, &garage_schema()).unwrap_err();
    assert_eq!(details, ValidationDetails::null_value("cars[0].name"));
}

#[test]
fn test_optional_field_absent_passes() {
    let mut value = garage();
    value.as_object_mut().unwrap().remove("age");
    value["cars"][0].as_object_mut().unwrap().remove("models");

    assert!(validate_schema(&value, &garage_schema()));
}

#[test]
fn test_optional_field_null_fails_kind() {
    let mut value = garage();
    value["age"] = Value::Null;

    let details = check_schema(&value, &garage_schema()).unwrap_err();
    assert_eq!(details, ValidationDetails::type_mismatch("age", "number", "null"));
}

// =============================================================================
// Kinds and Patterns
// =============================================================================

#[test]
fn test_no_coercion() {
    let mut value = garage();
    value["age"] = json!("30");
    assert!(!validate_schema(&value, &garage_schema()));
}

#[test]
fn test_undeclared_fields_pass() {
    let mut value = garage();
    value["nickname"] = json!(["Johnny"]);
    value["cars"][0]["year"] = json!(1999);
    assert!(validate_schema(&value, &garage_schema()));
}

#[test]
fn test_pattern_is_unanchored() {
    let schema = user_schema();
    assert!(validate_schema(&json!({"id": "u1", "email": "a@b"}), &schema));

    let details = check_schema(&json!({"id": "u1", "email": "ab"}), &schema).unwrap_err();
    assert_eq!(details.field, "email");
    assert_eq!(details.actual, "'ab'");
}

#[test]
fn test_nested_properties() {
    let schema = user_schema();
    assert!(validate_schema(
        &json!({"id": "u1", "address": {"city": "Paris"}}),
        &schema
    ));

    let details = check_schema(&json!({"id": "u1", "address": {}}), &schema).unwrap_err();
    assert_eq!(details, ValidationDetails::missing_field("address.city"));

    let details = check_schema(&json!({"id": "u1", "address": []}), &schema).unwrap_err();
    assert_eq!(details, ValidationDetails::type_mismatch("address", "object", "array"));
}

/// An Object field without properties places no constraint on the value.
#[test]
fn test_object_kind_alone_is_unchecked() {
    let schema = SchemaLoader::parse(&json!({"o": {"type": "Object"}})).unwrap();

    for value in [json!({"o": 5}), json!({"o": null}), json!({"o": [1]}), json!({"o": "str"})] {
        assert!(validate_schema(&value, &schema), "{} rejected", value);
    }
}

// =============================================================================
// Sequence Shapes
// =============================================================================

#[test]
fn test_every_element_checked() {
    let schema = garage_schema();

    let mut value = garage();
    value["cars"][1]["models"] = json!([{"type": "Number"}]);
    let details = check_schema(&value, &schema).unwrap_err();
    assert_eq!(details.field, "cars[1].models[0]");

    let mut value = garage();
    value["cars"] = json!({"name": "Ford"});
    let details = check_schema(&value, &schema).unwrap_err();
    assert_eq!(details, ValidationDetails::type_mismatch("cars", "array", "object"));
}

#[test]
fn test_empty_sequence_passes() {
    let mut value = garage();
    value["cars"] = json!([]);
    assert!(validate_schema(&value, &garage_schema()));
}

#[test]
fn test_root_label() {
    let details = check_schema(&json!([1]), &garage_schema()).unwrap_err();
    assert_eq!(details, ValidationDetails::type_mismatch("$root", "object", "array"));
}

// =============================================================================
// Loading and Registry
// =============================================================================

#[test]
fn test_load_all_from_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("garage.json"),
        serde_json::to_string(&json!({
            "name": {"type": "String", "required": true},
            "cars": [{"name": {"type": "String"}}]
        }))
        .unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("user.json"),
        r#"{"id": {"type": "string", "required": true}}"#,
    )
    .unwrap();
    fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

    let mut loader = SchemaLoader::new(tmp.path());
    assert_eq!(loader.load_all().unwrap(), 2);
    assert_eq!(loader.names(), vec!["garage", "user"]);

    let garage = loader.get("garage").unwrap();
    assert!(validate_schema(&json!({"name": "J", "cars": [{"name": "Ford"}]}), garage));
    assert!(!validate_schema(&json!({"name": "J", "cars": [{"name": 1}]}), garage));
}

#[test]
fn test_malformed_file_names_schema() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.json"), r#"{"id": {"type": "uuid"}}"#).unwrap();

    let mut loader = SchemaLoader::new(tmp.path());
    let err = loader.load_all().unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::SchemaMalformed);
    assert_eq!(err.schema_name(), Some("broken"));
}

#[test]
fn test_invalid_regex_rejected_at_load() {
    let err = SchemaLoader::parse(&json!({"id": {"type": "string", "regex": "(["}})).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::SchemaInvalidRegex);
}

#[test]
fn test_register_is_immutable() {
    let tmp = TempDir::new().unwrap();
    let mut loader = SchemaLoader::new(tmp.path());

    loader.register("users", user_schema()).unwrap();
    let err = loader.register("users", garage_schema()).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::SchemaDuplicate);

    // The first registration is kept
    let users = loader.get("users").unwrap();
    assert!(validate_schema(&json!({"id": "u1"}), users));
    assert_eq!(loader.len(), 1);
}

#[test]
fn test_missing_directory_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let mut loader = SchemaLoader::new(&tmp.path().join("absent"));
    assert_eq!(loader.load_all().unwrap_err().code(), SchemaErrorCode::SchemaIo);
}
