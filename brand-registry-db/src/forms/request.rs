use brand_registry_api::error::{ValidationCode, ValidationError, ValidationErrors};
use chrono::NaiveDate;
use std::str::FromStr;
use uuid::Uuid;

use super::{bounded, parse_uuid, required, text};
use crate::models::registry::{RequestModel, RequestState, RequestTradeType};
use crate::utils::clamp_str;

/// Raw field values of one administrative-request submission.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub producer_id: Option<String>,
    pub mark_id: Option<String>,
    pub trade_type: Option<String>,
    pub notes: Option<String>,
}

/// Validation context supplied by the handler.
pub struct RequestFormContext<'a> {
    /// Whether the selected producer exists.
    pub producer_exists: bool,
    /// Owner of the referenced mark, when one was selected and found.
    pub mark_owner: &'a dyn Fn(Uuid) -> Option<Uuid>,
}

/// Normalized values of an accepted request submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub producer_id: Uuid,
    pub mark_id: Option<Uuid>,
    pub trade_type: RequestTradeType,
    pub notes: Option<String>,
}

impl RequestForm {
    pub fn validate(&self, ctx: &RequestFormContext<'_>) -> Result<ValidatedRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let producer_id = required(&mut errors, "producer_id", &self.producer_id)
            .and_then(|raw| parse_uuid(&mut errors, "producer_id", raw));
        if producer_id.is_some() && !ctx.producer_exists {
            errors.add(
                "producer_id",
                ValidationError::new(ValidationCode::InvalidFormat, "unknown producer"),
            );
        }

        let trade_type = required(&mut errors, "trade_type", &self.trade_type).and_then(|raw| {
            match RequestTradeType::from_str(raw) {
                Ok(value) => Some(value),
                Err(()) => {
                    errors.add(
                        "trade_type",
                        ValidationError::new(ValidationCode::InvalidFormat, "unknown trade type"),
                    );
                    None
                }
            }
        });

        let mark_id =
            text(&self.mark_id).and_then(|raw| parse_uuid(&mut errors, "mark_id", raw));
        if let (Some(mark_id), Some(producer_id)) = (mark_id, producer_id) {
            match (ctx.mark_owner)(mark_id) {
                Some(owner) if owner == producer_id => {}
                Some(_) => {
                    errors.add(
                        "mark_id",
                        ValidationError::new(
                            ValidationCode::InvalidFormat,
                            "mark does not belong to the selected producer",
                        ),
                    );
                }
                None => {
                    errors.add(
                        "mark_id",
                        ValidationError::new(ValidationCode::InvalidFormat, "unknown mark"),
                    );
                }
            }
        }

        let notes = text(&self.notes).and_then(|raw| bounded(&mut errors, "notes", raw, 1000));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedRequest {
            producer_id: producer_id.expect("producer validated"),
            mark_id,
            trade_type: trade_type.expect("trade type validated"),
            notes,
        })
    }
}

impl ValidatedRequest {
    /// Materialize the request; every request starts out Pending.
    pub fn into_model(self, id: Uuid, submitted_on: NaiveDate) -> RequestModel {
        RequestModel {
            id,
            producer_id: self.producer_id,
            mark_id: self.mark_id,
            trade_type: self.trade_type,
            state: RequestState::Pending,
            submitted_on,
            attachment_url: None,
            notes: self.notes.as_deref().map(clamp_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_starts_pending() {
        let producer = Uuid::new_v4();
        let form = RequestForm {
            producer_id: Some(producer.to_string()),
            trade_type: Some("Renewal".into()),
            ..RequestForm::default()
        };
        let ctx = RequestFormContext {
            producer_exists: true,
            mark_owner: &|_| None,
        };

        let model = form
            .validate(&ctx)
            .unwrap()
            .into_model(Uuid::new_v4(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(model.state, RequestState::Pending);
        assert_eq!(model.trade_type, RequestTradeType::Renewal);
    }

    #[test]
    fn mark_of_another_producer_is_rejected() {
        let producer = Uuid::new_v4();
        let mark = Uuid::new_v4();
        let other_producer = Uuid::new_v4();
        let form = RequestForm {
            producer_id: Some(producer.to_string()),
            mark_id: Some(mark.to_string()),
            trade_type: Some("Transfer".into()),
            ..RequestForm::default()
        };
        let mark_owner = move |id: Uuid| (id == mark).then_some(other_producer);
        let ctx = RequestFormContext {
            producer_exists: true,
            mark_owner: &mark_owner,
        };

        let errors = form.validate(&ctx).unwrap_err();
        assert!(errors.has("mark_id", ValidationCode::InvalidFormat));
    }

    #[test]
    fn unknown_producer_is_rejected() {
        let form = RequestForm {
            producer_id: Some(Uuid::new_v4().to_string()),
            trade_type: Some("New".into()),
            ..RequestForm::default()
        };
        let ctx = RequestFormContext {
            producer_exists: false,
            mark_owner: &|_| None,
        };

        let errors = form.validate(&ctx).unwrap_err();
        assert!(errors.has("producer_id", ValidationCode::InvalidFormat));
    }
}
