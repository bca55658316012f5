use sqlx::{PgPool, Pool, Postgres, Row};

use fleetgate_core::{
    Administrator, AdministratorStore, AdministratorStoreError, Email, NewAdministrator, PAGE_SIZE,
    Role,
};

use crate::persistence::page_offset;

#[derive(Clone)]
pub struct PostgresAdministratorStore {
    pool: PgPool,
}

impl PostgresAdministratorStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn row_to_administrator(row: sqlx::postgres::PgRow) -> Result<Administrator, AdministratorStoreError> {
    let email: String = row.get("email");
    let role: String = row.get("role");
    Ok(Administrator {
        id: row.get("id"),
        email: Email::parse(email)
            .map_err(|e| AdministratorStoreError::Unexpected(e.to_string()))?,
        secret_hash: row.get("secret_hash"),
        duress_hash: row.get("duress_hash"),
        role: role
            .parse::<Role>()
            .map_err(|e| AdministratorStoreError::Unexpected(e.to_string()))?,
    })
}

fn map_insert_error(e: sqlx::Error) -> AdministratorStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.constraint().is_some() {
            return AdministratorStoreError::AlreadyExists;
        }
    }
    AdministratorStoreError::Unexpected(e.to_string())
}

#[async_trait::async_trait]
impl AdministratorStore for PostgresAdministratorStore {
    #[tracing::instrument(name = "Adding administrator to PostgreSQL", skip_all)]
    async fn insert(
        &self,
        administrator: NewAdministrator,
    ) -> Result<Administrator, AdministratorStoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO administrators (email, secret_hash, duress_hash, role)
                VALUES ($1, $2, $3, $4)
                RETURNING id, email, secret_hash, duress_hash, role
            "#,
        )
        .bind(administrator.email.as_str())
        .bind(&administrator.secret_hash)
        .bind(&administrator.duress_hash)
        .bind(administrator.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        row_to_administrator(row)
    }

    #[tracing::instrument(name = "Updating administrator in PostgreSQL", skip_all)]
    async fn update(&self, administrator: Administrator) -> Result<(), AdministratorStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE administrators
                SET email = $1, secret_hash = $2, duress_hash = $3, role = $4
                WHERE id = $5
            "#,
        )
        .bind(administrator.email.as_str())
        .bind(&administrator.secret_hash)
        .bind(&administrator.duress_hash)
        .bind(administrator.role.as_str())
        .bind(administrator.id)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        if result.rows_affected() == 0 {
            return Err(AdministratorStoreError::NotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Looking up administrator by email in PostgreSQL", skip_all)]
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Administrator>, AdministratorStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, secret_hash, duress_hash, role
                FROM administrators
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdministratorStoreError::Unexpected(e.to_string()))?;

        row.map(row_to_administrator).transpose()
    }

    #[tracing::instrument(name = "Looking up administrator by id in PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: i64) -> Result<Option<Administrator>, AdministratorStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, secret_hash, duress_hash, role
                FROM administrators
                WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdministratorStoreError::Unexpected(e.to_string()))?;

        row.map(row_to_administrator).transpose()
    }

    #[tracing::instrument(name = "Listing administrators from PostgreSQL", skip_all)]
    async fn list(&self, page: Option<u32>) -> Result<Vec<Administrator>, AdministratorStoreError> {
        let query = match page_offset(page) {
            Some(offset) => sqlx::query(
                r#"
                    SELECT id, email, secret_hash, duress_hash, role
                    FROM administrators
                    ORDER BY id
                    LIMIT $1 OFFSET $2
                "#,
            )
            .bind(PAGE_SIZE)
            .bind(offset),
            None => sqlx::query(
                r#"
                    SELECT id, email, secret_hash, duress_hash, role
                    FROM administrators
                    ORDER BY id
                "#,
            ),
        };

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdministratorStoreError::Unexpected(e.to_string()))?;

        rows.into_iter().map(row_to_administrator).collect()
    }

    #[tracing::instrument(name = "Counting administrators in PostgreSQL", skip_all)]
    async fn count(&self) -> Result<i64, AdministratorStoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM administrators")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AdministratorStoreError::Unexpected(e.to_string()))?;

        Ok(row.get("total"))
    }
}
