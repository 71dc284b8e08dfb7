use brand_registry_api::error::{ValidationCode, ValidationError, ValidationErrors};
use brand_registry_api::validation;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;
use uuid::Uuid;

use super::{bounded, parse_date, parse_decimal, parse_int, parse_uuid, required, text};
use crate::models::registry::{EarSide, LivestockCounts, MarkModel, MarkState, TradeType};
use crate::utils::clamp_str;

/// Minimum length of the brand description after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Raw field values of one mark/brand form submission.
#[derive(Debug, Clone, Default)]
pub struct MarkForm {
    pub producer_id: Option<String>,
    pub parcel_id: Option<String>,
    pub trade_type: Option<String>,
    pub order_number: Option<String>,
    pub issued_on: Option<String>,
    pub expires_on: Option<String>,
    pub brand_description: Option<String>,
    pub ear_mark_description: Option<String>,
    pub ear_side: Option<String>,
    pub predefined_image_id: Option<String>,
    pub cattle: Option<String>,
    pub horses: Option<String>,
    pub mules: Option<String>,
    pub donkeys: Option<String>,
    pub sheep: Option<String>,
    pub goats: Option<String>,
    pub stamp_value: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
}

/// Validation context supplied by the handler.
///
/// `allowed_parcels` is the result of the explicit `allowed_parcels(producer)`
/// lookup; when no producer is selected the handler passes an empty set.
pub struct MarkFormContext<'a> {
    pub editing: Option<Uuid>,
    pub today: NaiveDate,
    /// Whether the selected producer exists.
    pub producer_exists: bool,
    /// Parcels owned by the selected producer.
    pub allowed_parcels: &'a HashSet<Uuid>,
    /// Resolves the mark currently holding an order number.
    pub order_number_owner: &'a dyn Fn(i64) -> Option<Uuid>,
    /// Whether a predefined image id references an active reference image.
    pub predefined_image_active: &'a dyn Fn(Uuid) -> bool,
}

/// Normalized values of an accepted mark submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMark {
    pub producer_id: Uuid,
    pub parcel_id: Uuid,
    pub trade_type: TradeType,
    pub order_number: i64,
    pub issued_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub brand_description: String,
    pub ear_mark_description: Option<String>,
    pub ear_side: Option<EarSide>,
    pub predefined_image_id: Option<Uuid>,
    pub livestock: LivestockCounts,
    pub stamp_value: Option<Decimal>,
    pub state: MarkState,
    pub notes: Option<String>,
}

impl MarkForm {
    pub fn validate(&self, ctx: &MarkFormContext<'_>) -> Result<ValidatedMark, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let producer_id = required(&mut errors, "producer_id", &self.producer_id)
            .and_then(|raw| parse_uuid(&mut errors, "producer_id", raw));
        if producer_id.is_some() && !ctx.producer_exists {
            errors.add(
                "producer_id",
                ValidationError::new(ValidationCode::InvalidFormat, "unknown producer"),
            );
        }

        let parcel_id = required(&mut errors, "parcel_id", &self.parcel_id)
            .and_then(|raw| parse_uuid(&mut errors, "parcel_id", raw));
        if let Some(parcel_id) = parcel_id {
            if !ctx.allowed_parcels.contains(&parcel_id) {
                errors.add(
                    "parcel_id",
                    ValidationError::new(
                        ValidationCode::InvalidFormat,
                        "parcel does not belong to the selected producer",
                    ),
                );
            }
        }

        let trade_type = match text(&self.trade_type) {
            None => Some(TradeType::New),
            Some(raw) => match TradeType::from_str(raw) {
                Ok(value) => Some(value),
                Err(()) => {
                    errors.add(
                        "trade_type",
                        ValidationError::new(ValidationCode::InvalidFormat, "unknown trade type"),
                    );
                    None
                }
            },
        };

        let order_number = required(&mut errors, "order_number", &self.order_number)
            .and_then(|raw| parse_int(&mut errors, "order_number", raw))
            .and_then(|value| {
                errors.collect(
                    "order_number",
                    validation::order_number(value, ctx.order_number_owner, ctx.editing),
                )
            });

        let issued_on = required(&mut errors, "issued_on", &self.issued_on)
            .and_then(|raw| parse_date(&mut errors, "issued_on", raw));
        if let Some(issued) = issued_on {
            if issued > ctx.today {
                errors.add(
                    "issued_on",
                    ValidationError::new(
                        ValidationCode::InvalidDateRange,
                        "issue date cannot be in the future",
                    ),
                );
            }
        }

        let expires_on =
            text(&self.expires_on).and_then(|raw| parse_date(&mut errors, "expires_on", raw));
        if let Some(expires) = expires_on {
            if expires < ctx.today {
                errors.add(
                    "expires_on",
                    ValidationError::new(
                        ValidationCode::InvalidDateRange,
                        "expiry date cannot be in the past",
                    ),
                );
            }
            if let Some(issued) = issued_on {
                if expires <= issued {
                    errors.add_form(ValidationError::new(
                        ValidationCode::InvalidDateRange,
                        "expiry date must be strictly after the issue date",
                    ));
                }
            }
        }

        let brand_description = required(&mut errors, "brand_description", &self.brand_description)
            .and_then(|raw| {
                if raw.chars().count() < MIN_DESCRIPTION_CHARS {
                    errors.add(
                        "brand_description",
                        ValidationError::new(
                            ValidationCode::DescriptionTooShort,
                            "description must have at least 10 characters",
                        ),
                    );
                    None
                } else {
                    bounded(&mut errors, "brand_description", raw, 1000)
                }
            });

        let ear_mark_description = text(&self.ear_mark_description)
            .and_then(|raw| bounded(&mut errors, "ear_mark_description", raw, 1000));
        let ear_side = text(&self.ear_side).and_then(|raw| match EarSide::from_str(raw) {
            Ok(value) => Some(value),
            Err(()) => {
                errors.add(
                    "ear_side",
                    ValidationError::new(ValidationCode::InvalidFormat, "unknown ear side"),
                );
                None
            }
        });

        let predefined_image_id = text(&self.predefined_image_id)
            .and_then(|raw| parse_uuid(&mut errors, "predefined_image_id", raw));
        if let Some(image_id) = predefined_image_id {
            if !(ctx.predefined_image_active)(image_id) {
                errors.add(
                    "predefined_image_id",
                    ValidationError::new(
                        ValidationCode::InvalidFormat,
                        "unknown or inactive predefined image",
                    ),
                );
            }
        }

        let count = |field: &str, raw: &Option<String>, errors: &mut ValidationErrors| {
            match text(raw) {
                None => 0,
                Some(value) => parse_int(errors, field, value)
                    .and_then(|v| errors.collect(field, validation::livestock_count(v)))
                    .unwrap_or(0),
            }
        };
        let errors_before_counts = errors.len();
        let livestock = LivestockCounts {
            cattle: count("cattle", &self.cattle, &mut errors),
            horses: count("horses", &self.horses, &mut errors),
            mules: count("mules", &self.mules, &mut errors),
            donkeys: count("donkeys", &self.donkeys, &mut errors),
            sheep: count("sheep", &self.sheep, &mut errors),
            goats: count("goats", &self.goats, &mut errors),
        };
        // The total is only meaningful when every count parsed cleanly.
        if errors.len() == errors_before_counts && livestock.total() == 0 {
            errors.add_form(ValidationError::new(
                ValidationCode::NoLivestockSpecified,
                "at least one livestock count must be positive",
            ));
        }

        let stamp_value = text(&self.stamp_value)
            .and_then(|raw| parse_decimal(&mut errors, "stamp_value", raw))
            .and_then(|value| {
                if value < Decimal::ZERO {
                    errors.add(
                        "stamp_value",
                        ValidationError::new(
                            ValidationCode::NotPositive,
                            "stamp value cannot be negative",
                        ),
                    );
                    None
                } else {
                    Some(value)
                }
            });

        let state = match text(&self.state) {
            None => Some(MarkState::InProcess),
            Some(raw) => match MarkState::from_str(raw) {
                Ok(value) => Some(value),
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
            },
        };

        let notes = text(&self.notes).and_then(|raw| bounded(&mut errors, "notes", raw, 1000));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedMark {
            producer_id: producer_id.expect("producer validated"),
            parcel_id: parcel_id.expect("parcel validated"),
            trade_type: trade_type.expect("trade type validated"),
            order_number: order_number.expect("order number validated"),
            issued_on: issued_on.expect("issue date validated"),
            expires_on,
            brand_description: brand_description.expect("description validated"),
            ear_mark_description,
            ear_side,
            predefined_image_id,
            livestock,
            stamp_value,
            state: state.expect("state validated"),
            notes,
        })
    }
}

impl ValidatedMark {
    /// Materialize a new mark record. The image slots start empty; the save
    /// flow fills them from the upload or the predefined reference.
    pub fn into_model(self, id: Uuid, now: DateTime<Utc>) -> MarkModel {
        MarkModel {
            id,
            producer_id: self.producer_id,
            parcel_id: self.parcel_id,
            trade_type: self.trade_type,
            order_number: self.order_number,
            issued_on: self.issued_on,
            expires_on: self.expires_on,
            brand_description: clamp_str(&self.brand_description),
            brand_image: None,
            predefined_image_id: self.predefined_image_id,
            ear_mark_description: self.ear_mark_description.as_deref().map(clamp_str),
            ear_side: self.ear_side,
            livestock: self.livestock,
            stamp_value: self.stamp_value,
            state: self.state,
            notes: self.notes.as_deref().map(clamp_str),
            carnet_front_url: None,
            carnet_back_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite an existing record, keeping id, images and creation stamp.
    pub fn apply_to(self, model: &mut MarkModel, now: DateTime<Utc>) {
        model.producer_id = self.producer_id;
        model.parcel_id = self.parcel_id;
        model.trade_type = self.trade_type;
        model.order_number = self.order_number;
        model.issued_on = self.issued_on;
        model.expires_on = self.expires_on;
        model.brand_description = clamp_str(&self.brand_description);
        model.predefined_image_id = self.predefined_image_id;
        model.ear_mark_description = self.ear_mark_description.as_deref().map(clamp_str);
        model.ear_side = self.ear_side;
        model.livestock = self.livestock;
        model.stamp_value = self.stamp_value;
        model.state = self.state;
        model.notes = self.notes.as_deref().map(clamp_str);
        model.updated_at = now;
    }
}
