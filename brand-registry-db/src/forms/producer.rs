use brand_registry_api::error::{ValidationCode, ValidationError, ValidationErrors};
use brand_registry_api::validation;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use super::{bounded, parse_decimal, required, text};
use crate::models::registry::{ProducerModel, ProducerState};
use crate::utils::clamp_str;

/// Default province stamped on producers that leave the field blank.
pub const DEFAULT_PROVINCE: &str = "Catamarca";

/// Raw field values of one producer form submission.
#[derive(Debug, Clone, Default)]
pub struct ProducerForm {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub national_id: Option<String>,
    pub tax_id: Option<String>,
    pub street: Option<String>,
    pub legacy_parcel_name: Option<String>,
    pub locality: Option<String>,
    pub municipality: Option<String>,
    pub department: Option<String>,
    pub province: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub area_hectares: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
}

/// Validation context supplied by the handler.
pub struct ProducerFormContext<'a> {
    /// Record being edited, if any; it never counts as its own duplicate.
    pub editing: Option<Uuid>,
    /// Resolves the producer currently holding a normalized national id.
    pub national_id_owner: &'a dyn Fn(&str) -> Option<Uuid>,
}

/// Normalized values of an accepted producer submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProducer {
    pub first_name: String,
    pub surname: String,
    pub national_id: String,
    pub tax_id: Option<String>,
    pub street: Option<String>,
    pub legacy_parcel_name: Option<String>,
    pub locality: String,
    pub municipality: Option<String>,
    pub department: Option<String>,
    pub province: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub area_hectares: Option<Decimal>,
    pub state: ProducerState,
    pub notes: Option<String>,
}

impl ProducerForm {
    /// Apply every field rule independently, then the cross-field checks,
    /// and return either the normalized values or all collected errors.
    pub fn validate(&self, ctx: &ProducerFormContext<'_>) -> Result<ValidatedProducer, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = required(&mut errors, "first_name", &self.first_name)
            .and_then(|raw| errors.collect("first_name", validation::person_name(raw)));
        let surname = required(&mut errors, "surname", &self.surname)
            .and_then(|raw| errors.collect("surname", validation::person_name(raw)));

        let national_id = required(&mut errors, "national_id", &self.national_id)
            .and_then(|raw| errors.collect("national_id", validation::national_id(raw)));
        if let Some(national_id) = &national_id {
            if let Some(owner) = (ctx.national_id_owner)(national_id) {
                if ctx.editing != Some(owner) {
                    errors.add(
                        "national_id",
                        ValidationError::new(
                            ValidationCode::Duplicate,
                            "another producer already uses this national id",
                        ),
                    );
                }
            }
        }

        let tax_id =
            text(&self.tax_id).and_then(|raw| errors.collect("tax_id", validation::tax_id(raw)));

        let street =
            text(&self.street).and_then(|raw| bounded(&mut errors, "street", raw, 200));
        let legacy_parcel_name = text(&self.legacy_parcel_name)
            .and_then(|raw| bounded(&mut errors, "legacy_parcel_name", raw, 200));
        let locality = required(&mut errors, "locality", &self.locality)
            .and_then(|raw| bounded(&mut errors, "locality", raw, 100));
        let municipality =
            text(&self.municipality).and_then(|raw| bounded(&mut errors, "municipality", raw, 100));
        let department =
            text(&self.department).and_then(|raw| bounded(&mut errors, "department", raw, 100));
        let province = match text(&self.province) {
            Some(raw) => bounded(&mut errors, "province", raw, 100),
            None => Some(DEFAULT_PROVINCE.to_string()),
        };

        let phone =
            text(&self.phone).and_then(|raw| errors.collect("phone", validation::phone(raw)));
        let email =
            text(&self.email).and_then(|raw| errors.collect("email", validation::email(raw)));

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
            _ => {
                // Parse failures already carry their own field errors.
                if text(&self.latitude).is_none() || text(&self.longitude).is_none() {
                    errors.add_form(ValidationError::new(
                        ValidationCode::MissingLocation,
                        "both latitude and longitude are required",
                    ));
                }
                None
            }
        };

        let area_hectares = text(&self.area_hectares)
            .and_then(|raw| parse_decimal(&mut errors, "area_hectares", raw))
            .and_then(|value| errors.collect("area_hectares", validation::area_hectares(value)));

        let state = required(&mut errors, "state", &self.state).and_then(|raw| {
            match ProducerState::from_str(raw) {
                Ok(state) => Some(state),
                Err(()) => {
                    errors.add(
                        "state",
                        ValidationError::new(
                            ValidationCode::InvalidFormat,
                            "unknown lifecycle state",
                        ),
                    );
                    None
                }
            }
        });

        let notes = text(&self.notes).and_then(|raw| bounded(&mut errors, "notes", raw, 1000));

        if !errors.is_empty() {
            return Err(errors);
        }

        // All required values are present once the error list is empty.
        let (latitude, longitude) = location.expect("location validated");
        Ok(ValidatedProducer {
            first_name: first_name.expect("first name validated"),
            surname: surname.expect("surname validated"),
            national_id: national_id.expect("national id validated"),
            tax_id,
            street,
            legacy_parcel_name,
            locality: locality.expect("locality validated"),
            municipality,
            department,
            province: province.expect("province validated"),
            phone,
            email,
            latitude,
            longitude,
            area_hectares,
            state: state.expect("state validated"),
            notes,
        })
    }
}

impl ValidatedProducer {
    /// Materialize a new producer record.
    pub fn into_model(self, id: Uuid, registered_at: DateTime<Utc>) -> ProducerModel {
        ProducerModel {
            id,
            first_name: clamp_str(&self.first_name),
            surname: clamp_str(&self.surname),
            national_id: clamp_str(&self.national_id),
            tax_id: self.tax_id.as_deref().map(clamp_str),
            street: self.street.as_deref().map(clamp_str),
            legacy_parcel_name: self.legacy_parcel_name.as_deref().map(clamp_str),
            locality: clamp_str(&self.locality),
            municipality: self.municipality.as_deref().map(clamp_str),
            department: self.department.as_deref().map(clamp_str),
            province: clamp_str(&self.province),
            phone: self.phone.as_deref().map(clamp_str),
            email: self.email.as_deref().map(clamp_str),
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
            area_hectares: self.area_hectares,
            state: self.state,
            registered_at,
            notes: self.notes.as_deref().map(clamp_str),
        }
    }

    /// Overwrite an existing record in place, keeping id and registration date.
    pub fn apply_to(self, model: &mut ProducerModel) {
        let id = model.id;
        let registered_at = model.registered_at;
        *model = self.into_model(id, registered_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProducerForm {
        ProducerForm {
            first_name: Some("juan".into()),
            surname: Some("pérez".into()),
            national_id: Some("12.345.678".into()),
            locality: Some("Belén".into()),
            latitude: Some("-27.5".into()),
            longitude: Some("-67.0".into()),
            state: Some("Pending".into()),
            ..ProducerForm::default()
        }
    }

    fn no_owner(_: &str) -> Option<Uuid> {
        None
    }

    #[test]
    fn accepts_and_normalizes_a_minimal_submission() {
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };
        let validated = form().validate(&ctx).expect("valid form");

        assert_eq!(validated.first_name, "Juan");
        assert_eq!(validated.surname, "Pérez");
        assert_eq!(validated.national_id, "12345678");
        assert_eq!(validated.province, DEFAULT_PROVINCE);
        assert_eq!(validated.state, ProducerState::Pending);
    }

    #[test]
    fn collects_every_missing_required_field() {
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };
        let errors = ProducerForm::default().validate(&ctx).unwrap_err();

        for field in ["first_name", "surname", "national_id", "locality", "state"] {
            assert!(
                errors.has(field, ValidationCode::InvalidFormat),
                "{field} should be required"
            );
        }
        assert!(errors.has_form(ValidationCode::MissingLocation));
    }

    #[test]
    fn rejects_duplicate_national_id_of_another_producer() {
        let other = Uuid::new_v4();
        let owner = move |value: &str| (value == "12345678").then_some(other);
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &owner,
        };

        let errors = form().validate(&ctx).unwrap_err();
        assert!(errors.has("national_id", ValidationCode::Duplicate));
    }

    #[test]
    fn editing_record_keeps_its_own_national_id() {
        let me = Uuid::new_v4();
        let owner = move |value: &str| (value == "12345678").then_some(me);
        let ctx = ProducerFormContext {
            editing: Some(me),
            national_id_owner: &owner,
        };

        assert!(form().validate(&ctx).is_ok());
    }

    #[test]
    fn missing_longitude_is_a_form_level_error() {
        let mut submission = form();
        submission.longitude = None;
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };

        let errors = submission.validate(&ctx).unwrap_err();
        assert!(errors.has_form(ValidationCode::MissingLocation));
    }

    #[test]
    fn coordinates_outside_the_bounding_box_fail() {
        let mut submission = form();
        submission.latitude = Some("10.0".into());
        submission.longitude = Some("-64.0".into());
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };

        let errors = submission.validate(&ctx).unwrap_err();
        assert!(errors.has_form(ValidationCode::OutOfBounds));
    }

    #[test]
    fn coordinates_inside_the_bounding_box_pass() {
        let mut submission = form();
        submission.latitude = Some("-30.0".into());
        submission.longitude = Some("-64.0".into());
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };

        let validated = submission.validate(&ctx).expect("inside Argentina");
        assert_eq!(validated.latitude, Decimal::from(-30));
    }

    #[test]
    fn area_cannot_exceed_the_cap() {
        let mut submission = form();
        submission.area_hectares = Some("1000001".into());
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };

        let errors = submission.validate(&ctx).unwrap_err();
        assert!(errors.has("area_hectares", ValidationCode::OutOfBounds));
    }

    #[test]
    fn invalid_tax_id_checksum_is_field_scoped() {
        let mut submission = form();
        submission.tax_id = Some("20-12345678-9".into());
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };

        let errors = submission.validate(&ctx).unwrap_err();
        assert!(errors.has("tax_id", ValidationCode::ChecksumMismatch));
    }

    #[test]
    fn valid_tax_id_is_kept() {
        let mut submission = form();
        submission.tax_id = Some("20-12345678-6".into());
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };

        let validated = submission.validate(&ctx).expect("valid tax id");
        assert_eq!(validated.tax_id.as_deref(), Some("20-12345678-6"));
    }

    #[test]
    fn into_model_round_trips_the_normalized_values() {
        let ctx = ProducerFormContext {
            editing: None,
            national_id_owner: &no_owner,
        };
        let id = Uuid::new_v4();
        let now = Utc::now();
        let model = form().validate(&ctx).unwrap().into_model(id, now);

        assert_eq!(model.id, id);
        assert_eq!(model.display_name(), "Pérez, Juan");
        assert_eq!(model.national_id.as_str(), "12345678");
        assert!(model.has_location());
    }
}
