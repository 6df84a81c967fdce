use crate::error::AppError;
use crate::models::{Message, MessageResponse, User, UserSummary};
use crate::sentiment::AnalysisResult;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

pub async fn init_db(database_url: &str) -> Result<SqlitePool, AppError> {
    info!("Initializing database at: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

// --- Users ---

pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Returns the user named `username`, creating it if needed.
///
/// The flag is `true` when the user was created by this call.
pub async fn find_or_create_user(
    pool: &SqlitePool,
    username: &str,
) -> Result<(User, bool), sqlx::Error> {
    if let Some(user) = find_user_by_username(pool, username).await? {
        return Ok((user, false));
    }

    // A concurrent insert can win between the lookup and the insert
    let created_at = Utc::now().timestamp();
    let inserted = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, created_at)
        VALUES (?, ?)
        ON CONFLICT(username) DO NOTHING
        RETURNING id, username, created_at
        "#,
    )
    .bind(username)
    .bind(created_at)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(user) => Ok((user, true)),
        None => {
            let user = find_user_by_username(pool, username)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            Ok((user, false))
        }
    }
}

pub async fn get_user_summaries(pool: &SqlitePool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT
            u.id,
            u.username,
            u.created_at,
            (SELECT COUNT(*) FROM messages m WHERE m.user_id = u.id) AS message_count,
            (SELECT m.timestamp FROM messages m WHERE m.user_id = u.id
                ORDER BY m.timestamp DESC, m.id DESC LIMIT 1) AS last_message_at,
            (SELECT m.content FROM messages m WHERE m.user_id = u.id
                ORDER BY m.timestamp DESC, m.id DESC LIMIT 1) AS last_message
        FROM users u
        ORDER BY u.username ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

// --- Messages ---

pub async fn add_message(
    pool: &SqlitePool,
    user_id: i64,
    content: &str,
    analysis: &AnalysisResult,
) -> Result<Message, sqlx::Error> {
    let timestamp = Utc::now().timestamp();

    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (user_id, content, sentiment, confidence, timestamp)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, user_id, content, sentiment, confidence, timestamp
        "#,
    )
    .bind(user_id)
    .bind(content)
    .bind(analysis.label.label())
    .bind(analysis.score)
    .bind(timestamp)
    .fetch_one(pool)
    .await
}

pub async fn get_all_messages(pool: &SqlitePool) -> Result<Vec<MessageResponse>, sqlx::Error> {
    sqlx::query_as::<_, MessageResponse>(
        r#"
        SELECT m.id, u.username, m.content, m.sentiment, m.confidence, m.timestamp
        FROM messages m
        JOIN users u ON u.id = m.user_id
        ORDER BY m.timestamp ASC, m.id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_user_messages(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<MessageResponse>, sqlx::Error> {
    sqlx::query_as::<_, MessageResponse>(
        r#"
        SELECT m.id, u.username, m.content, m.sentiment, m.confidence, m.timestamp
        FROM messages m
        JOIN users u ON u.id = m.user_id
        WHERE m.user_id = ?
        ORDER BY m.timestamp ASC, m.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
