use anyhow::Context;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::info;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string; the plaintext never reaches the store.
    pub password: String,
}

/// Handle to the credential table. Constructed once at startup and handed
/// to handlers through the application state, so tests can substitute an
/// in-memory store.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Opens the database (creating the file when the URL carries
    /// `mode=rwc`) and ensures the schema exists.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        info!(%url, "opening credential store");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .with_context(|| format!("open credential store at {url}"))?;
        Self::init_schema(&pool).await?;
        info!("credential store ready");
        Ok(Self { pool })
    }

    /// Private in-memory store for tests.
    #[cfg(test)]
    pub async fn in_memory() -> anyhow::Result<Self> {
        // One connection only: every new sqlite :memory: connection is a
        // separate empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .context("open in-memory store")?;
        Self::init_schema(&pool).await?;
        Ok(Self { pool })
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await
        .context("create users table")?;
        Ok(())
    }

    /// Inserts a new user. A duplicate username or email surfaces as a
    /// database error whose `is_unique_violation` is true; the uniqueness
    /// check is the storage engine's, so concurrent signups serialize there.
    pub async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password)
            VALUES (?, ?, ?)
            RETURNING id, username, email, password
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }
}
