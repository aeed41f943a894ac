//! Database bootstrap: create the database when missing, then the two tables.
//! Idempotent; there is no versioning and no down path.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const EVENTS_TABLE: &str = "dev_events";
pub const SPEAKERS_TABLE: &str = "dev_event_speakers";

/// Create the tables and the speaker lookup index if they do not exist.
/// Speakers reference their event with ON DELETE CASCADE.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let events_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            start_date TIMESTAMPTZ NOT NULL,
            end_date TIMESTAMPTZ NOT NULL
        )
        "#,
        EVENTS_TABLE
    );
    sqlx::query(&events_ddl).execute(pool).await?;

    let speakers_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            talk_title TEXT NOT NULL,
            talk_description TEXT NOT NULL,
            linked_in_profile TEXT NOT NULL,
            dev_event_id UUID NOT NULL REFERENCES {}(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        SPEAKERS_TABLE, EVENTS_TABLE
    );
    sqlx::query(&speakers_ddl).execute(pool).await?;

    let index_ddl = format!(
        "CREATE INDEX IF NOT EXISTS {0}_dev_event_id_idx ON {0} (dev_event_id)",
        SPEAKERS_TABLE
    );
    sqlx::query(&index_ddl).execute(pool).await?;
    tracing::info!("schema ready");
    Ok(())
}

/// Connect to the `postgres` admin database on the same server and create the
/// target database if it is missing. No-op when the URL already points at `postgres`.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Split a connection URL into (admin URL on `postgres`, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    };
    let scheme_end = url.find("://").ok_or_else(invalid)? + 3;
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(invalid)?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres{}", base, query), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
