use serde::{Deserialize, Deserializer, Serialize};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};
use uuid::Uuid;

use super::model::{CarChanges, NewCar};
use crate::error::AppError;

/// POST /api/cars. Everything is optional at the serde level so a missing
/// field becomes a 400 listing the gaps instead of a generic parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub number_plate: Option<String>,
    pub registration_number: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "service_date")]
    pub last_service_date: Option<OffsetDateTime>,
}

impl CreateCarRequest {
    pub fn into_new_car(self, owner_id: Uuid) -> Result<NewCar, AppError> {
        let mut missing = Vec::new();
        let title = require_text(self.title, "title", &mut missing);
        let description = require_text(self.description, "description", &mut missing);
        let tags = require_list(self.tags, "tags", &mut missing);
        let images = require_list(self.images, "images", &mut missing);
        let number_plate = require_text(self.number_plate, "numberPlate", &mut missing);
        let registration_number =
            require_text(self.registration_number, "registrationNumber", &mut missing);
        let color = require_text(self.color, "color", &mut missing);
        if self.last_service_date.is_none() {
            missing.push("lastServiceDate");
        }

        match (
            title,
            description,
            tags,
            images,
            number_plate,
            registration_number,
            color,
            self.last_service_date,
        ) {
            (
                Some(title),
                Some(description),
                Some(tags),
                Some(images),
                Some(number_plate),
                Some(registration_number),
                Some(color),
                Some(last_service_date),
            ) => Ok(NewCar {
                owner_id,
                title,
                description,
                tags,
                images,
                number_plate,
                registration_number,
                color,
                last_service_date,
            }),
            _ => Err(AppError::validation(format!(
                "Please provide all required fields. Missing: {}",
                missing.join(", ")
            ))),
        }
    }
}

fn require_text(v: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match v {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => {
            missing.push(name);
            None
        }
    }
}

fn require_list(
    v: Option<Vec<String>>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<Vec<String>> {
    match v {
        Some(items) if !items.is_empty() => Some(items),
        _ => {
            missing.push(name);
            None
        }
    }
}

/// PUT /api/cars/:id. Only the mutable fields are recognised; `id`, `owner`
/// and anything else in the payload is dropped by serde.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub number_plate: Option<String>,
    pub registration_number: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "service_date")]
    pub last_service_date: Option<OffsetDateTime>,
}

impl UpdateCarRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let texts = [
            ("title", &self.title),
            ("description", &self.description),
            ("numberPlate", &self.number_plate),
            ("registrationNumber", &self.registration_number),
            ("color", &self.color),
        ];
        for (name, value) in texts {
            if let Some(s) = value {
                if s.trim().is_empty() {
                    return Err(AppError::validation(format!("{name} cannot be empty")));
                }
            }
        }
        for (name, value) in [("tags", &self.tags), ("images", &self.images)] {
            if let Some(items) = value {
                if items.is_empty() {
                    return Err(AppError::validation(format!("{name} cannot be empty")));
                }
            }
        }
        Ok(())
    }

    pub fn into_changes(self) -> CarChanges {
        CarChanges {
            title: self.title,
            description: self.description,
            tags: self.tags,
            images: self.images,
            number_plate: self.number_plate,
            registration_number: self.registration_number,
            color: self.color,
            last_service_date: self.last_service_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

/// Accepts RFC 3339 timestamps, offset-less `YYYY-MM-DDTHH:MM[:SS]` (read as
/// UTC) or bare `YYYY-MM-DD` dates (midnight UTC).
fn service_date<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_service_date(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid lastServiceDate: {raw}")))
}

pub(crate) fn parse_service_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    let parsed = OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .or_else(|| {
            PrimitiveDateTime::parse(
                raw,
                format_description!(
                    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
                ),
            )
            .ok()
            .map(PrimitiveDateTime::assume_utc)
        })
        .or_else(|| {
            Date::parse(raw, format_description!("[year]-[month]-[day]"))
                .ok()
                .map(|d| d.midnight().assume_utc())
        })?;
    // RFC 3339 output only covers four-digit years.
    (0..=9999).contains(&parsed.year()).then_some(parsed)
}
