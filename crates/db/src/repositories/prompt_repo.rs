//! Repository for the `prompts` table.

use prompt_vault_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};

/// Column list for prompts queries.
const COLUMNS: &str = "id, title, content, category, created_at, updated_at";

/// Provides CRUD operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt. `id` and both timestamps come from the database.
    pub async fn create(pool: &PgPool, input: &CreatePrompt) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (title, content, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a prompt by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all prompts, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Prompt>(&query).fetch_all(pool).await
    }

    /// Update a prompt. Only fields present in `input` change and
    /// `updated_at` is always refreshed.
    ///
    /// `title` and `content` use `COALESCE`, so `null` keeps the stored value.
    /// `category` is cleared on an explicit `null`.
    /// Returns `None` if the prompt does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                title      = COALESCE($2, title),
                content    = COALESCE($3, content),
                category   = CASE WHEN $4 THEN $5 ELSE category END,
                updated_at = GREATEST(NOW(), created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(input.title.value())
            .bind(input.content.value())
            .bind(input.category.is_present())
            .bind(input.category.value())
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt permanently. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored prompts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prompts")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
