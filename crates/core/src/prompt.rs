//! Prompt domain constants and create-payload validation rules.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Entity name used in `NotFound` errors.
pub const ENTITY: &str = "Prompt";

/// Returned when `title` or `content` is missing from a create payload.
pub const MSG_REQUIRED_FIELDS: &str = "Title and content are required";

/// Returned when `title` is present but empty.
pub const MSG_EMPTY_TITLE: &str = "Title must not be empty";

/// Returned by a successful delete.
pub const MSG_DELETED: &str = "Prompt deleted successfully";

/// Collapse `validator` output for a create payload into a [`CoreError`].
///
/// A missing required field wins over any other failure so clients always
/// see the same message for an incomplete body.
pub fn validation_error(errors: &ValidationErrors) -> CoreError {
    let fields = errors.field_errors();

    let missing = fields
        .values()
        .flat_map(|errs| errs.iter())
        .any(|e| e.code == "required");
    if missing {
        return CoreError::Validation(MSG_REQUIRED_FIELDS.to_string());
    }

    if fields.contains_key("title") {
        return CoreError::Validation(MSG_EMPTY_TITLE.to_string());
    }

    let mut names: Vec<_> = fields.keys().map(|k| k.to_string()).collect();
    names.sort();
    CoreError::Validation(format!("Invalid fields: {}", names.join(", ")))
}
