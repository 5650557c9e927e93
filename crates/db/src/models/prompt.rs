//! Prompt models and DTOs.
//!
//! Defines the database row struct for `prompts` and the create/update
//! payloads accepted by the API layer.

use prompt_vault_core::error::CoreError;
use prompt_vault_core::patch::Patch;
use prompt_vault_core::prompt::{validation_error, MSG_EMPTY_TITLE, MSG_REQUIRED_FIELDS};
use prompt_vault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Prompt {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Raw create body as sent by clients.
///
/// Every field is optional at the wire level so a missing `title` or
/// `content` surfaces as a validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePromptRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required)]
    pub content: Option<String>,
    pub category: Option<String>,
}

impl CreatePromptRequest {
    /// Check field presence and produce the insert DTO.
    pub fn into_create(self) -> Result<CreatePrompt, CoreError> {
        self.validate().map_err(|e| validation_error(&e))?;
        match (self.title, self.content) {
            (Some(title), Some(content)) => Ok(CreatePrompt {
                title,
                content,
                category: self.category,
            }),
            _ => Err(CoreError::Validation(MSG_REQUIRED_FIELDS.to_string())),
        }
    }
}

/// Validated input for inserting a prompt.
#[derive(Debug, Clone)]
pub struct CreatePrompt {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Partial update for a prompt.
///
/// `title` and `content` are non-nullable, so an explicit `null` for either
/// keeps the stored value. `category` honours `null` and is cleared.
/// An empty `title` is rejected, same as on create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePrompt {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub category: Patch<String>,
}

impl UpdatePrompt {
    /// Reject a patch that would leave the prompt with an empty title.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.title.value() {
            Some(title) if title.is_empty() => {
                Err(CoreError::Validation(MSG_EMPTY_TITLE.to_string()))
            }
            _ => Ok(()),
        }
    }
}
