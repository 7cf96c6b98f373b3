/// Todo model and owner-scoped database operations
///
/// This module provides the Todo model, the core entity of the service.
/// Every query here takes the authenticated caller's user id and restricts
/// itself to rows whose `owner_id` matches it, so a caller can never
/// observe or affect another user's todos.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id SERIAL PRIMARY KEY,
///     todo TEXT NOT NULL,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use todolist_shared::models::todo::{CreateTodo, Todo};
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let todo = Todo::create(
///     &pool,
///     CreateTodo {
///         owner_id: 1,
///         todo: "Buy milk".to_string(),
///         completed: false,
///     },
/// )
/// .await?;
///
/// let mine = Todo::list_by_owner(&pool, 1).await?;
/// assert!(mine.iter().any(|t| t.id == todo.id));
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Todo model representing a single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID, assigned by the store
    pub id: i32,

    /// Free-text description
    pub todo: String,

    /// Completion flag, false at creation unless the caller says otherwise
    pub completed: bool,

    /// Owning user; no todo exists without one
    pub owner_id: i32,
}

/// Input for creating a new todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Owning user id (resolved from the auth token, never from the body)
    pub owner_id: i32,

    /// Free-text description
    pub todo: String,

    /// Completion flag
    pub completed: bool,
}

/// Input for updating a todo
///
/// All fields are optional. Only supplied fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New description
    pub todo: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

impl Todo {
    /// Creates a new todo owned by `data.owner_id`
    ///
    /// Returns the full stored record, including the assigned id.
    pub async fn create(pool: &PgPool, data: CreateTodo) -> Result<Self, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (todo, completed, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, todo, completed, owner_id
            "#,
        )
        .bind(data.todo)
        .bind(data.completed)
        .bind(data.owner_id)
        .fetch_one(pool)
        .await?;

        Ok(todo)
    }

    /// Lists all todos owned by a user, in insertion order
    ///
    /// Returns an empty vec (never an error) when the user owns none.
    pub async fn list_by_owner(pool: &PgPool, owner_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, todo, completed, owner_id
            FROM todos
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Finds a single todo by id under the given owner
    ///
    /// Returns None when no such row exists under that owner, including the
    /// case where the id exists but belongs to someone else. The caller
    /// cannot distinguish the two, which is the point.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: i32,
        id: i32,
    ) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, todo, completed, owner_id
            FROM todos
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Updates a todo, applying only the supplied fields
    ///
    /// COALESCE keeps the stored value for any field the caller omitted.
    /// Returns the full updated record, or None under the same ownership
    /// condition as [`Todo::find_by_id`].
    pub async fn update(
        pool: &PgPool,
        owner_id: i32,
        id: i32,
        data: UpdateTodo,
    ) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET todo = COALESCE($3, todo),
                completed = COALESCE($4, completed)
            WHERE id = $1 AND owner_id = $2
            RETURNING id, todo, completed, owner_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(data.todo)
        .bind(data.completed)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Deletes a todo permanently
    ///
    /// Returns the removed record, or None under the same ownership
    /// condition as [`Todo::find_by_id`].
    pub async fn delete(
        pool: &PgPool,
        owner_id: i32,
        id: i32,
    ) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            DELETE FROM todos
            WHERE id = $1 AND owner_id = $2
            RETURNING id, todo, completed, owner_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }
}
