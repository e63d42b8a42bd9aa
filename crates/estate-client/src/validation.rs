//! Conversion of `validator` failures into crate errors.

use estate_core::Error;
use validator::{ValidationError, ValidationErrors};

/// Key under which `validator` stores struct-level (schema) failures.
const SCHEMA_FIELD: &str = "__all__";

fn format_validation_error(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("{field} failed validation: {}", error.code),
    }
}

/// Collects every field failure into one `InvalidQuery` error.
///
/// Messages are ordered by field name so the output is stable.
pub(crate) fn invalid_query(errors: ValidationErrors) -> Error {
    let mut fields: Vec<(String, Vec<ValidationError>)> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| (field.to_string(), errors.to_vec()))
        .collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
        .iter()
        .flat_map(|(field, errors)| {
            errors
                .iter()
                .map(move |error| format_validation_error(field, error))
        })
        .collect();

    let names: Vec<&str> = fields
        .iter()
        .map(|(field, _)| field.as_str())
        .filter(|field| *field != SCHEMA_FIELD)
        .collect();

    tracing::debug!(
        target: crate::TRACING_TARGET,
        fields = ?names,
        "Query validation failed"
    );

    let error = match messages.as_slice() {
        [] => Error::invalid_query().with_message("Validation failed"),
        _ => Error::invalid_query().with_message(messages.join("; ")),
    };

    if names.is_empty() {
        error
    } else {
        error.with_context(format!("invalid fields: {}", names.join(", ")))
    }
}
