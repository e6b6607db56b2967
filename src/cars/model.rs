use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ownership::Owned;

/// Car record as stored and as returned to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub images: Vec<String>, // base64 payloads
    pub number_plate: String,
    pub registration_number: String,
    pub color: String,
    #[serde(with = "time::serde::rfc3339")]
    pub last_service_date: OffsetDateTime,
    #[serde(rename = "owner")]
    pub owner_id: Uuid,
}

impl Owned for Car {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// Fully validated input for a new record; the id comes from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub number_plate: String,
    pub registration_number: String,
    pub color: String,
    pub last_service_date: OffsetDateTime,
}

impl NewCar {
    pub fn into_car(self, id: Uuid) -> Car {
        Car {
            id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            images: self.images,
            number_plate: self.number_plate,
            registration_number: self.registration_number,
            color: self.color,
            last_service_date: self.last_service_date,
            owner_id: self.owner_id,
        }
    }
}

/// The mutable fields of a car. `None` leaves the stored value untouched.
/// Identifier and owner are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub number_plate: Option<String>,
    pub registration_number: Option<String>,
    pub color: Option<String>,
    pub last_service_date: Option<OffsetDateTime>,
}

impl CarChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, car: &mut Car) {
        if let Some(v) = self.title {
            car.title = v;
        }
        if let Some(v) = self.description {
            car.description = v;
        }
        if let Some(v) = self.tags {
            car.tags = v;
        }
        if let Some(v) = self.images {
            car.images = v;
        }
        if let Some(v) = self.number_plate {
            car.number_plate = v;
        }
        if let Some(v) = self.registration_number {
            car.registration_number = v;
        }
        if let Some(v) = self.color {
            car.color = v;
        }
        if let Some(v) = self.last_service_date {
            car.last_service_date = v;
        }
    }
}
