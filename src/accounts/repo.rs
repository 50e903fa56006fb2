use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};
use uuid::Uuid;

/// Account record as stored in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    // Opaque secondary credential, written once at creation and never
    // exposed by any read.
    #[serde(skip_serializing)]
    pub login: String,
    pub is_deleted: bool,
}

impl Account {
    /// Build a fresh record for insertion. Identity is assigned here,
    /// exactly once: callers never supply ids, and the `login` token is
    /// drawn independently of `id`.
    pub fn new(email: String, hashed_password: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            hashed_password,
            login: Uuid::new_v4().to_string(),
            is_deleted: false,
        }
    }

    pub async fn insert(&self, db: &mut PgConnection) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, hashed_password, login, is_deleted)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&self.id)
        .bind(&self.email)
        .bind(&self.hashed_password)
        .bind(&self.login)
        .bind(self.is_deleted)
        .execute(db)
        .await
        .context("insert account")?;
        Ok(())
    }

    /// Every stored row, store-native order. Soft-deleted rows are included;
    /// callers that want active accounts only have no such read today.
    pub async fn list(db: &mut PgConnection) -> anyhow::Result<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, hashed_password, login, is_deleted
            FROM users
            "#,
        )
        .fetch_all(db)
        .await
        .context("list accounts")?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &mut PgConnection, id: &str) -> anyhow::Result<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, hashed_password, login, is_deleted
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("find account by id")?;
        Ok(row)
    }

    /// Flag the record inactive. The row stays in the table; matching zero
    /// rows is not an error, so unknown ids and repeated deletes converge to
    /// the same terminal state. Returns the number of rows touched.
    pub async fn mark_deleted(db: &mut PgConnection, id: &str) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users SET is_deleted = TRUE WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await
        .context("soft-delete account")?;
        Ok(result.rows_affected())
    }
}
