// src/validation/action.rs

use crate::model::Action;
use crate::validation::{ValidationError, require_text};

/// Checks the fields an action must carry before it can be compared.
///
/// Enum fields are already typed, so only the free-text fields can be malformed here.
pub fn validate_action(action: &Action) -> Result<(), ValidationError> {
    require_text("ID", &action.id)?;
    require_text("Name", &action.name)?;
    Ok(())
}
