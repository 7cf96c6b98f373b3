/// Database models for the todolist service
///
/// This module contains all database models and their queries.
///
/// # Models
///
/// - `user`: User accounts and credential lookup
/// - `todo`: Per-user todo items, always queried with owner scoping
///
/// # Example
///
/// ```no_run
/// use todolist_shared::models::user::{CreateUser, User};
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod todo;
pub mod user;
