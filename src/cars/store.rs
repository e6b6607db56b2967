use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use super::model::{Car, CarChanges, NewCar};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("db error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Persistence for car records.
///
/// `update_owned` and `delete_owned` are conditional on both id and owner in
/// a single operation, so a record that changed hands or disappeared after
/// the caller fetched it is reported as missing.
#[async_trait]
pub trait CarStore: Send + Sync {
    async fn insert(&self, car: NewCar) -> Result<Car, StoreError>;
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Car>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError>;
    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        changes: CarChanges,
    ) -> Result<Option<Car>, StoreError>;
    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, StoreError>;
}

const CAR_COLUMNS: &str = "id, title, description, tags, images, number_plate, \
     registration_number, color, last_service_date, owner_id";

#[derive(Clone)]
pub struct PgCarStore {
    db: PgPool,
}

impl PgCarStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn insert(&self, car: NewCar) -> Result<Car, StoreError> {
        let row = sqlx::query_as::<_, Car>(&format!(
            r#"
            INSERT INTO cars (title, description, tags, images, number_plate,
                              registration_number, color, last_service_date, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {CAR_COLUMNS}
            "#
        ))
        .bind(car.title)
        .bind(car.description)
        .bind(car.tags)
        .bind(car.images)
        .bind(car.number_plate)
        .bind(car.registration_number)
        .bind(car.color)
        .bind(car.last_service_date)
        .bind(car.owner_id)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Car>, StoreError> {
        let rows = sqlx::query_as::<_, Car>(&format!(
            r#"
            SELECT {CAR_COLUMNS}
            FROM cars
            WHERE owner_id = $1
            "#
        ))
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
        let row = sqlx::query_as::<_, Car>(&format!(
            r#"
            SELECT {CAR_COLUMNS}
            FROM cars
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        changes: CarChanges,
    ) -> Result<Option<Car>, StoreError> {
        let row = sqlx::query_as::<_, Car>(&format!(
            r#"
            UPDATE cars
            SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                tags = COALESCE($5, tags),
                images = COALESCE($6, images),
                number_plate = COALESCE($7, number_plate),
                registration_number = COALESCE($8, registration_number),
                color = COALESCE($9, color),
                last_service_date = COALESCE($10, last_service_date)
            WHERE id = $1 AND owner_id = $2
            RETURNING {CAR_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner_id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.tags)
        .bind(changes.images)
        .bind(changes.number_plate)
        .bind(changes.registration_number)
        .bind(changes.color)
        .bind(changes.last_service_date)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cars
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
