use brand_registry_api::error::{ValidationCode, ValidationError, ValidationErrors};
use brand_registry_api::validation;

use super::{required, text};
use crate::models::account::Role;

/// Raw field values of one account-registration submission.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

/// Validation context supplied by the handler.
pub struct UserFormContext {
    pub username_in_use: bool,
    pub email_in_use: bool,
}

/// Normalized values of an accepted registration. The password travels to
/// the authentication collaborator and is never persisted here.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserForm {
    pub fn validate(&self, ctx: &UserFormContext) -> Result<ValidatedUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = required(&mut errors, "username", &self.username)
            .and_then(|raw| errors.collect("username", validation::username(raw)));
        if username.is_some() && ctx.username_in_use {
            errors.add(
                "username",
                ValidationError::new(ValidationCode::Duplicate, "this username already exists"),
            );
        }

        let first_name = required(&mut errors, "first_name", &self.first_name)
            .and_then(|raw| errors.collect("first_name", validation::person_name(raw)));
        let last_name = required(&mut errors, "last_name", &self.last_name)
            .and_then(|raw| errors.collect("last_name", validation::person_name(raw)));

        let email = required(&mut errors, "email", &self.email)
            .and_then(|raw| errors.collect("email", validation::email(raw)));
        if email.is_some() && ctx.email_in_use {
            errors.add(
                "email",
                ValidationError::new(ValidationCode::Duplicate, "this email is already registered"),
            );
        }

        let password = required(&mut errors, "password", &self.password)
            .and_then(|raw| errors.collect("password", validation::password(raw)));
        match (&password, text(&self.password_confirm)) {
            (Some(password), Some(confirm)) if password != confirm => {
                errors.add(
                    "password_confirm",
                    ValidationError::new(ValidationCode::InvalidFormat, "passwords do not match"),
                );
            }
            (Some(_), None) => {
                errors.add(
                    "password_confirm",
                    ValidationError::new(ValidationCode::InvalidFormat, "this field is required"),
                );
            }
            _ => {}
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Self-registered accounts start with the least-privileged role.
        Ok(ValidatedUser {
            username: username.expect("username validated"),
            first_name: first_name.expect("first name validated"),
            last_name: last_name.expect("last name validated"),
            email: email.expect("email validated"),
            password: password.expect("password validated"),
            role: Role::Inspector,
        })
    }
}
