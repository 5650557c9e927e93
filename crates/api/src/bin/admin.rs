//! `prompt-vault-admin` -- offline maintenance commands.
//!
//! ```text
//! prompt-vault-admin init-db    create schema objects that do not exist yet
//! ```
//!
//! Reads `DATABASE_URL` from the environment (or `.env`).

use anyhow::{bail, Context};
use prompt_vault_db::repositories::PromptRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: prompt-vault-admin init-db";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_vault_admin=info,prompt_vault_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = std::env::args().nth(1);
    match command.as_deref() {
        Some("init-db") => init_db().await,
        Some(other) => bail!("unknown command '{other}'\n{USAGE}"),
        None => bail!("{USAGE}"),
    }
}

async fn init_db() -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = prompt_vault_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    prompt_vault_db::init_schema(&pool)
        .await
        .context("Failed to create schema")?;

    let existing = PromptRepo::count(&pool).await?;
    tracing::info!(existing_prompts = existing, "Initialized the database");

    pool.close().await;
    Ok(())
}
