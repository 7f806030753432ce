use async_trait::async_trait;
use common::TrackingId;
use domain::{Cargo, CarrierMovement, CarrierMovementId, Location, UnLocode};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    Result, StoreError,
    repository::{CargoRepository, CarrierMovementRepository, LocationRepository},
};

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> std::result::Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

fn row_to_location(row: &PgRow, code_column: &str, name_column: &str) -> Result<Location> {
    let code: String = row.try_get(code_column)?;
    let name: String = row.try_get(name_column)?;
    let unlocode = UnLocode::new(code).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    Ok(Location::new(unlocode, name))
}

/// PostgreSQL-backed cargo repository.
///
/// The aggregate is stored whole as a JSONB document keyed by tracking id;
/// the primary-key constraint is what makes tracking ids unique.
#[derive(Clone)]
pub struct PostgresCargoRepository {
    pool: PgPool,
}

impl PostgresCargoRepository {
    /// Creates a repository on an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CargoRepository for PostgresCargoRepository {
    async fn find(&self, tracking_id: &TrackingId) -> Result<Option<Cargo>> {
        let row = sqlx::query("SELECT state FROM cargo WHERE tracking_id = $1")
            .bind(tracking_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let state: serde_json::Value = row.try_get("state")?;
                Ok(Some(serde_json::from_value(state)?))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, cargo: &Cargo) -> Result<()> {
        let state = serde_json::to_value(cargo)?;

        sqlx::query(
            r#"
            INSERT INTO cargo (tracking_id, state, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (tracking_id) DO UPDATE SET
                state = EXCLUDED.state,
                updated_at = now()
            "#,
        )
        .bind(cargo.tracking_id().as_str())
        .bind(state)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn next_tracking_id(&self) -> Result<TrackingId> {
        // Random allocation; the tracking_id primary key enforces
        // uniqueness when the cargo is saved.
        Ok(TrackingId::random())
    }

    async fn find_all(&self) -> Result<Vec<Cargo>> {
        let rows = sqlx::query("SELECT state FROM cargo ORDER BY tracking_id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let state: serde_json::Value = row.try_get("state")?;
                Ok(serde_json::from_value(state)?)
            })
            .collect()
    }
}

/// PostgreSQL-backed location repository.
#[derive(Clone)]
pub struct PostgresLocationRepository {
    pool: PgPool,
}

impl PostgresLocationRepository {
    /// Creates a repository on an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Provisions a location (insert or update by UN locode).
    pub async fn store(&self, location: &Location) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO locations (unlocode, name)
            VALUES ($1, $2)
            ON CONFLICT (unlocode) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(location.unlocode().as_str())
        .bind(location.name())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
    async fn find(&self, unlocode: &UnLocode) -> Result<Option<Location>> {
        let row = sqlx::query("SELECT unlocode, name FROM locations WHERE unlocode = $1")
            .bind(unlocode.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| row_to_location(&row, "unlocode", "name"))
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Location>> {
        let rows = sqlx::query("SELECT unlocode, name FROM locations ORDER BY unlocode ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row_to_location(row, "unlocode", "name"))
            .collect()
    }
}

/// PostgreSQL-backed carrier movement repository.
///
/// Movements reference their endpoints by UN locode; reads join against the
/// locations table, so both endpoints must be provisioned first.
#[derive(Clone)]
pub struct PostgresCarrierMovementRepository {
    pool: PgPool,
}

impl PostgresCarrierMovementRepository {
    /// Creates a repository on an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Provisions a carrier movement (insert or update by movement id).
    pub async fn store(&self, movement: &CarrierMovement) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO carrier_movements (movement_id, departure_unlocode, arrival_unlocode)
            VALUES ($1, $2, $3)
            ON CONFLICT (movement_id) DO UPDATE SET
                departure_unlocode = EXCLUDED.departure_unlocode,
                arrival_unlocode = EXCLUDED.arrival_unlocode
            "#,
        )
        .bind(movement.id().as_str())
        .bind(movement.departure().unlocode().as_str())
        .bind(movement.arrival().unlocode().as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CarrierMovementRepository for PostgresCarrierMovementRepository {
    async fn find(&self, id: &CarrierMovementId) -> Result<Option<CarrierMovement>> {
        let row = sqlx::query(
            r#"
            SELECT m.movement_id,
                   d.unlocode AS departure_unlocode, d.name AS departure_name,
                   a.unlocode AS arrival_unlocode, a.name AS arrival_name
            FROM carrier_movements m
            JOIN locations d ON d.unlocode = m.departure_unlocode
            JOIN locations a ON a.unlocode = m.arrival_unlocode
            WHERE m.movement_id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let movement_id: String = row.try_get("movement_id")?;
                let departure = row_to_location(&row, "departure_unlocode", "departure_name")?;
                let arrival = row_to_location(&row, "arrival_unlocode", "arrival_name")?;
                Ok(Some(CarrierMovement::new(
                    CarrierMovementId::new(movement_id),
                    departure,
                    arrival,
                )))
            }
            None => Ok(None),
        }
    }
}
