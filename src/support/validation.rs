//! Request validation helpers
//!
//! Validators register the JSON pointer of the offending request part as
//! a `pointer` param, so violations can be rendered as problem errors
//! without the mapping knowing about specific request types.

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::problem::ProblemError;

/// Rejects empty and whitespace-only strings.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("non_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Flatten validator violations into problem pointer errors.
pub fn to_problem_errors(errors: &ValidationErrors) -> Vec<ProblemError> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ProblemError>) {
    for (field, kind) in errors.errors() {
        let field: &str = field;
        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    out.push(ProblemError::pointer(
                        detail_of(violation),
                        pointer_of(violation, field, prefix),
                    ));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect(nested, &format!("{prefix}/{field}"), out);
            }
            ValidationErrorsKind::List(nested) => {
                for (index, errors) in nested {
                    collect(errors, &format!("{prefix}/{field}/{index}"), out);
                }
            }
        }
    }
}

fn detail_of(violation: &ValidationError) -> String {
    violation
        .message
        .as_ref()
        .map(|message| message.clone().into_owned())
        .unwrap_or_else(|| violation.code.clone().into_owned())
}

fn pointer_of(violation: &ValidationError, field: &str, prefix: &str) -> String {
    // Struct-level rules carry their own pointer; field rules point at the field.
    if let Some(pointer) = violation.params.get("pointer").and_then(|v| v.as_str()) {
        return format!("{prefix}{pointer}");
    }
    if field == "__all__" {
        if prefix.is_empty() {
            return "/".to_string();
        }
        return prefix.to_string();
    }
    format!("{prefix}/{field}")
}
