use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{CreateCarRequest, DeletedResponse, UpdateCarRequest},
    model::Car,
    services,
};
use crate::{auth::AuthUser, error::AppError, state::AppState};

pub fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", get(get_car).put(update_car).delete(delete_car))
}

#[instrument(skip(state, payload))]
pub async fn create_car(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<CreateCarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let Json(body) = payload?;
    let new_car = body.into_new_car(user_id)?;
    let car = services::create_car(state.cars.as_ref(), new_car).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

#[instrument(skip(state))]
pub async fn list_cars(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars = services::list_cars(state.cars.as_ref(), user_id).await?;
    Ok(Json(cars))
}

#[instrument(skip(state))]
pub async fn get_car(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    let car_id = services::parse_car_id(&id)?;
    let car = services::get_car(state.cars.as_ref(), user_id, car_id).await?;
    Ok(Json(car))
}

#[instrument(skip(state, payload))]
pub async fn update_car(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCarRequest>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let car_id = services::parse_car_id(&id)?;
    let Json(body) = payload?;
    body.validate()?;
    let car = services::update_car(state.cars.as_ref(), user_id, car_id, body.into_changes()).await?;
    Ok(Json(car))
}

#[instrument(skip(state))]
pub async fn delete_car(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let car_id = services::parse_car_id(&id)?;
    services::delete_car(state.cars.as_ref(), user_id, car_id).await?;
    Ok(Json(DeletedResponse {
        message: "Car deleted",
    }))
}
