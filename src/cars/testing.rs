//! Store doubles for unit and router tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Car, CarChanges, NewCar};
use super::store::{CarStore, StoreError};

#[derive(Default)]
pub struct MemoryCarStore {
    cars: RwLock<HashMap<Uuid, Car>>,
}

impl MemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.cars.read().await.len()
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn insert(&self, car: NewCar) -> Result<Car, StoreError> {
        let car = car.into_car(Uuid::new_v4());
        self.cars.write().await.insert(car.id, car.clone());
        Ok(car)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Car>, StoreError> {
        Ok(self
            .cars
            .read()
            .await
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
        Ok(self.cars.read().await.get(&id).cloned())
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        changes: CarChanges,
    ) -> Result<Option<Car>, StoreError> {
        let mut cars = self.cars.write().await;
        match cars.get_mut(&id) {
            Some(car) if car.owner_id == owner_id => {
                changes.apply(car);
                Ok(Some(car.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, StoreError> {
        let mut cars = self.cars.write().await;
        match cars.get(&id) {
            Some(car) if car.owner_id == owner_id => Ok(cars.remove(&id).is_some()),
            _ => Ok(false),
        }
    }
}

fn unavailable() -> StoreError {
    StoreError::Db(sqlx::Error::PoolTimedOut)
}

/// Every call fails as if the pool were exhausted.
pub struct DownStore;

#[async_trait]
impl CarStore for DownStore {
    async fn insert(&self, _car: NewCar) -> Result<Car, StoreError> {
        Err(unavailable())
    }
    async fn find_by_owner(&self, _owner_id: Uuid) -> Result<Vec<Car>, StoreError> {
        Err(unavailable())
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Car>, StoreError> {
        Err(unavailable())
    }
    async fn update_owned(
        &self,
        _id: Uuid,
        _owner_id: Uuid,
        _changes: CarChanges,
    ) -> Result<Option<Car>, StoreError> {
        Err(unavailable())
    }
    async fn delete_owned(&self, _id: Uuid, _owner_id: Uuid) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}

/// Reads go to the wrapped store, writes fail.
#[derive(Default)]
pub struct ReadOnlyStore(pub MemoryCarStore);

#[async_trait]
impl CarStore for ReadOnlyStore {
    async fn insert(&self, _car: NewCar) -> Result<Car, StoreError> {
        Err(unavailable())
    }
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Car>, StoreError> {
        self.0.find_by_owner(owner_id).await
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
        self.0.find_by_id(id).await
    }
    async fn update_owned(
        &self,
        _id: Uuid,
        _owner_id: Uuid,
        _changes: CarChanges,
    ) -> Result<Option<Car>, StoreError> {
        Err(unavailable())
    }
    async fn delete_owned(&self, _id: Uuid, _owner_id: Uuid) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}
