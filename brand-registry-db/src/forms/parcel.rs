use brand_registry_api::error::{ValidationCode, ValidationError, ValidationErrors};
use brand_registry_api::validation;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{bounded, parse_decimal, required, text};
use crate::models::registry::ParcelModel;
use crate::utils::clamp_str;

/// Raw field values of one parcel form submission.
#[derive(Debug, Clone, Default)]
pub struct ParcelForm {
    pub name: Option<String>,
    pub district: Option<String>,
    pub department: Option<String>,
    pub area_hectares: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub notes: Option<String>,
}

/// Normalized values of an accepted parcel submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedParcel {
    pub name: String,
    pub district: String,
    pub department: Option<String>,
    pub area_hectares: Option<Decimal>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub notes: Option<String>,
}

impl ParcelForm {
    pub fn validate(&self) -> Result<ValidatedParcel, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required(&mut errors, "name", &self.name)
            .and_then(|raw| bounded(&mut errors, "name", raw, 200));
        let district = required(&mut errors, "district", &self.district)
            .and_then(|raw| bounded(&mut errors, "district", raw, 100));
        let department =
            text(&self.department).and_then(|raw| bounded(&mut errors, "department", raw, 100));

        let area_hectares = text(&self.area_hectares)
            .and_then(|raw| parse_decimal(&mut errors, "area_hectares", raw))
            .and_then(|value| errors.collect("area_hectares", validation::area_hectares(value)));

        let latitude =
            text(&self.latitude).and_then(|raw| parse_decimal(&mut errors, "latitude", raw));
        let longitude =
            text(&self.longitude).and_then(|raw| parse_decimal(&mut errors, "longitude", raw));
        let location = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => {
                match validation::coordinates(latitude, longitude) {
                    Ok(pair) => Some(pair),
                    Err(error) => {
                        errors.add_form(error);
                        None
                    }
                }
            }
            (None, None) => None,
            // Coordinates are optional on a parcel, but never half-given.
            _ => {
                if text(&self.latitude).is_some() != text(&self.longitude).is_some() {
                    errors.add_form(ValidationError::new(
                        ValidationCode::MissingLocation,
                        "latitude and longitude must be given together",
                    ));
                }
                None
            }
        };

        let notes = text(&self.notes).and_then(|raw| bounded(&mut errors, "notes", raw, 1000));

        if !errors.is_empty() {
            return Err(errors);
        }

        let (latitude, longitude) = match location {
            Some((lat, lon)) => (Some(lat), Some(lon)),
            None => (None, None),
        };
        Ok(ValidatedParcel {
            name: name.expect("name validated"),
            district: district.expect("district validated"),
            department,
            area_hectares,
            latitude,
            longitude,
            notes,
        })
    }
}

impl ValidatedParcel {
    pub fn into_model(self, id: Uuid, producer_id: Uuid) -> ParcelModel {
        ParcelModel {
            id,
            producer_id,
            name: clamp_str(&self.name),
            district: clamp_str(&self.district),
            department: self.department.as_deref().map(clamp_str),
            area_hectares: self.area_hectares,
            latitude: self.latitude,
            longitude: self.longitude,
            notes: self.notes.as_deref().map(clamp_str),
        }
    }
}
