pub mod dto;
pub mod handlers;
pub mod model;
pub mod services;
pub mod store;
#[cfg(test)]
pub mod testing;

use crate::state::AppState;
use axum::Router;

pub use model::Car;
pub use store::{CarStore, PgCarStore};

pub fn router() -> Router<AppState> {
    handlers::car_routes()
}
