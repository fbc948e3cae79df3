//! Explicit request-payload validation for the users endpoints.
//!
//! The create and update bodies arrive as raw JSON so that missing and
//! wrong-typed fields produce field-naming validation errors instead of
//! opaque deserialization failures.

use serde_json::{Map, Value, json};

use crate::domain::{DomainError, UserDraft};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidType,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Validate a create/update body into a [`UserDraft`].
///
/// Both `name` and `email` must be present, non-null JSON strings.
pub(crate) fn parse_user_payload(body: &Value) -> Result<UserDraft, DomainError> {
    let Some(object) = body.as_object() else {
        return Err(invalid_body_error());
    };
    let name = require_string_field(object, FieldName::new("name"))?;
    let email = require_string_field(object, FieldName::new("email"))?;
    Ok(UserDraft::new(name, email))
}

fn require_string_field<'a>(
    object: &'a Map<String, Value>,
    field: FieldName,
) -> Result<&'a str, DomainError> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Err(missing_field_error(field)),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(invalid_type_error(field)),
    }
}

fn missing_field_error(field: FieldName) -> DomainError {
    let field = field.as_str();
    DomainError::invalid_request(format!("{field} cannot be blank")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

fn invalid_type_error(field: FieldName) -> DomainError {
    let field = field.as_str();
    DomainError::invalid_request(format!("{field} must be a string")).with_details(json!({
        "field": field,
        "code": ErrorCode::InvalidType.as_str(),
    }))
}

fn invalid_body_error() -> DomainError {
    DomainError::invalid_request("request body must be a JSON object").with_details(json!({
        "code": ErrorCode::InvalidBody.as_str(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn valid_payload_yields_a_draft() {
        let draft = parse_user_payload(&json!({ "name": "alice", "email": "a@x.com" }))
            .expect("valid payload");

        assert_eq!(draft.name(), "alice");
        assert_eq!(draft.email(), "a@x.com");
    }

    #[rstest]
    fn extra_fields_are_ignored() {
        let draft = parse_user_payload(&json!({
            "name": "alice",
            "email": "a@x.com",
            "role": "admin",
        }))
        .expect("valid payload");

        assert_eq!(draft.name(), "alice");
    }

    #[rstest]
    #[case(json!({ "email": "a@x.com" }), "name", "name cannot be blank")]
    #[case(json!({ "name": "alice" }), "email", "email cannot be blank")]
    #[case(json!({ "name": null, "email": "a@x.com" }), "name", "name cannot be blank")]
    fn missing_or_null_fields_name_the_field(
        #[case] body: Value,
        #[case] field: &str,
        #[case] message: &str,
    ) {
        let err = parse_user_payload(&body).expect_err("invalid payload");

        assert_eq!(err.message(), message);
        assert_eq!(
            err.details().and_then(|d| d.get("field")),
            Some(&json!(field))
        );
        assert_eq!(
            err.details().and_then(|d| d.get("code")),
            Some(&json!("missing_field"))
        );
    }

    #[rstest]
    #[case(json!({ "name": 5, "email": "a@x.com" }), "name must be a string")]
    #[case(json!({ "name": "alice", "email": ["a@x.com"] }), "email must be a string")]
    fn wrong_typed_fields_are_rejected(#[case] body: Value, #[case] message: &str) {
        let err = parse_user_payload(&body).expect_err("invalid payload");

        assert_eq!(err.message(), message);
        assert_eq!(
            err.details().and_then(|d| d.get("code")),
            Some(&json!("invalid_type"))
        );
    }

    #[rstest]
    #[case(json!([]))]
    #[case(json!("alice"))]
    #[case(json!(null))]
    fn non_object_bodies_are_rejected(#[case] body: Value) {
        let err = parse_user_payload(&body).expect_err("invalid payload");

        assert_eq!(err.message(), "request body must be a JSON object");
    }
}
