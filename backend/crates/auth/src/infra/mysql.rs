//! MySQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::MySqlPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// MySQL-backed user repository
#[derive(Clone)]
pub struct MySqlAuthRepository {
    pool: MySqlPool,
}

impl MySqlAuthRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for MySqlAuthRepository {
    async fn create(
        &self,
        username: &UserName,
        password_hash: &UserPassword,
    ) -> AuthResult<UserId> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES (?, ?)
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash.as_phc_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // Two registrations can race past the exists check; the unique
            // index on username is the authority.
            if is_unique_violation(&e) {
                AuthError::UserNameTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(UserId::from_i64(result.last_insert_id() as i64))
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
                .bind(username.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let username = UserName::new(&self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid username in database: {e}")))?;
        let password_hash = UserPassword::from_phc_string(self.password_hash)?;

        Ok(User {
            id: UserId::from_i64(self.id),
            username,
            password_hash,
            created_at: self.created_at,
        })
    }
}
