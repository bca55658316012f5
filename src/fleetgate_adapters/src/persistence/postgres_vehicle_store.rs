use sqlx::{PgPool, Pool, Postgres, QueryBuilder, Row};

use fleetgate_core::{
    PAGE_SIZE, Vehicle, VehicleDraft, VehicleFilter, VehicleStore, VehicleStoreError,
};

use crate::persistence::page_offset;

#[derive(Clone)]
pub struct PostgresVehicleStore {
    pool: PgPool,
}

impl PostgresVehicleStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn row_to_vehicle(row: sqlx::postgres::PgRow) -> Vehicle {
    Vehicle {
        id: row.get("id"),
        name: row.get("name"),
        make: row.get("make"),
        model: row.get("model"),
        year: row.get("year"),
    }
}

#[async_trait::async_trait]
impl VehicleStore for PostgresVehicleStore {
    #[tracing::instrument(name = "Adding vehicle to PostgreSQL", skip_all)]
    async fn insert(&self, draft: VehicleDraft) -> Result<Vehicle, VehicleStoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO vehicles (name, make, model, year)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, make, model, year
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.make)
        .bind(&draft.model)
        .bind(draft.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| VehicleStoreError::Unexpected(e.to_string()))?;

        Ok(row_to_vehicle(row))
    }

    #[tracing::instrument(name = "Updating vehicle in PostgreSQL", skip_all)]
    async fn update(&self, vehicle: Vehicle) -> Result<(), VehicleStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE vehicles
                SET name = $1, make = $2, model = $3, year = $4
                WHERE id = $5
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.id)
        .execute(&self.pool)
        .await
        .map_err(|e| VehicleStoreError::Unexpected(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VehicleStoreError::NotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Looking up vehicle by id in PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, VehicleStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, name, make, model, year
                FROM vehicles
                WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VehicleStoreError::Unexpected(e.to_string()))?;

        Ok(row.map(row_to_vehicle))
    }

    #[tracing::instrument(name = "Listing vehicles from PostgreSQL", skip_all)]
    async fn list(
        &self,
        page: Option<u32>,
        filter: &VehicleFilter,
    ) -> Result<Vec<Vehicle>, VehicleStoreError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, name, make, model, year FROM vehicles WHERE TRUE");

        if let Some(name) = &filter.name {
            builder.push(" AND name ILIKE ");
            builder.push_bind(format!("%{name}%"));
        }
        if let Some(make) = &filter.make {
            builder.push(" AND make ILIKE ");
            builder.push_bind(format!("%{make}%"));
        }
        if let Some(model) = &filter.model {
            builder.push(" AND model ILIKE ");
            builder.push_bind(format!("%{model}%"));
        }
        if let Some(year) = filter.year {
            builder.push(" AND year = ");
            builder.push_bind(year);
        }

        builder.push(" ORDER BY id");

        if let Some(offset) = page_offset(page) {
            builder.push(" LIMIT ");
            builder.push_bind(PAGE_SIZE);
            builder.push(" OFFSET ");
            builder.push_bind(offset);
        }

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| VehicleStoreError::Unexpected(e.to_string()))?;

        Ok(rows.into_iter().map(row_to_vehicle).collect())
    }

    #[tracing::instrument(name = "Deleting vehicle from PostgreSQL", skip_all)]
    async fn delete(&self, id: i64) -> Result<(), VehicleStoreError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| VehicleStoreError::Unexpected(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VehicleStoreError::NotFound);
        }
        Ok(())
    }
}
