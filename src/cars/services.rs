use tracing::{debug, error};
use uuid::Uuid;

use super::{
    model::{Car, CarChanges, NewCar},
    store::CarStore,
};
use crate::{error::AppError, ownership};

/// Malformed ids can never name a record, so they share the not-found outcome.
pub fn parse_car_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFoundOrForbidden)
}

pub async fn create_car(store: &dyn CarStore, car: NewCar) -> Result<Car, AppError> {
    let user_id = car.owner_id;
    let saved = store.insert(car).await.map_err(|e| {
        error!(error = %e, %user_id, "create car failed");
        AppError::from(e)
    })?;
    debug!(%user_id, car_id = %saved.id, "car created");
    Ok(saved)
}

pub async fn list_cars(store: &dyn CarStore, user_id: Uuid) -> Result<Vec<Car>, AppError> {
    store.find_by_owner(user_id).await.map_err(|e| {
        error!(error = %e, %user_id, "list cars failed");
        AppError::from(e)
    })
}

/// Fetches a car and applies the ownership guard.
pub async fn get_car(store: &dyn CarStore, user_id: Uuid, car_id: Uuid) -> Result<Car, AppError> {
    let found = store.find_by_id(car_id).await.map_err(|e| {
        error!(error = %e, %user_id, %car_id, "fetch car failed");
        AppError::from(e)
    })?;
    ownership::owned_by(user_id, found).ok_or(AppError::NotFoundOrForbidden)
}

pub async fn update_car(
    store: &dyn CarStore,
    user_id: Uuid,
    car_id: Uuid,
    changes: CarChanges,
) -> Result<Car, AppError> {
    let current = get_car(store, user_id, car_id).await?;
    if changes.is_empty() {
        return Ok(current);
    }

    store
        .update_owned(car_id, user_id, changes)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, %car_id, "update car failed");
            AppError::from(e)
        })?
        // gone or re-owned since the fetch
        .ok_or(AppError::NotFoundOrForbidden)
}

pub async fn delete_car(store: &dyn CarStore, user_id: Uuid, car_id: Uuid) -> Result<(), AppError> {
    get_car(store, user_id, car_id).await?;

    let deleted = store.delete_owned(car_id, user_id).await.map_err(|e| {
        error!(error = %e, %user_id, %car_id, "delete car failed");
        AppError::from(e)
    })?;
    if !deleted {
        return Err(AppError::NotFoundOrForbidden);
    }
    debug!(%user_id, %car_id, "car deleted");
    Ok(())
}
