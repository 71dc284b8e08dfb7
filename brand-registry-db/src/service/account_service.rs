use brand_registry_api::error::RegistryResult;
use brand_registry_api::validation;
use chrono::Utc;
use sqlx::Database;
use std::sync::Arc;
use uuid::Uuid;

use super::audit::{record, snapshot_of};
use super::collaborators::AuthGateway;
use crate::forms::{UserForm, UserFormContext};
use crate::models::account::UserProfileModel;
use crate::models::audit::{ChangeAction, EntityKind};
use crate::repository::{ChangeLogRepository, Create, UserProfileRepository};
use crate::utils::{clamp_str, hash_as_i64};

/// Account registration: validates the submission, hands the credential to
/// the authentication collaborator and persists the profile.
pub struct AccountService<DB: Database> {
    profiles: Arc<dyn UserProfileRepository<DB>>,
    auth: Arc<dyn AuthGateway>,
    change_log: Arc<dyn ChangeLogRepository<DB>>,
}

impl<DB: Database> AccountService<DB> {
    pub fn new(
        profiles: Arc<dyn UserProfileRepository<DB>>,
        auth: Arc<dyn AuthGateway>,
        change_log: Arc<dyn ChangeLogRepository<DB>>,
    ) -> Self {
        Self {
            profiles,
            auth,
            change_log,
        }
    }

    /// Self-registration; runs unauthenticated and always yields an
    /// Inspector profile.
    pub async fn register(&self, form: &UserForm) -> RegistryResult<UserProfileModel> {
        let username_in_use = match form
            .username
            .as_deref()
            .and_then(|raw| validation::username(raw).ok())
        {
            Some(username) => !self.lookup_username(&username).await?.is_empty(),
            None => false,
        };
        let email_in_use = match form
            .email
            .as_deref()
            .and_then(|raw| validation::email(raw).ok())
        {
            Some(email) => !self.lookup_email(&email).await?.is_empty(),
            None => false,
        };

        let validated = form.validate(&UserFormContext {
            username_in_use,
            email_in_use,
        })?;

        let auth_user_id = self
            .auth
            .create_identity(&validated.username, &validated.password)
            .await?;

        let profile = UserProfileModel {
            id: Uuid::new_v4(),
            auth_user_id,
            username: clamp_str(&validated.username),
            email: clamp_str(&validated.email),
            first_name: clamp_str(&validated.first_name),
            last_name: clamp_str(&validated.last_name),
            role: validated.role,
            phone: None,
            created_at: Utc::now(),
        };
        self.profiles.create(&profile).await?;
        tracing::info!(profile = %profile.id, username = %profile.username, "account registered");

        record(
            self.change_log.as_ref(),
            EntityKind::UserProfile,
            profile.id,
            ChangeAction::Created,
            None,
            snapshot_of(&profile),
        )
        .await;
        Ok(profile)
    }

    async fn lookup_username(
        &self,
        username: &str,
    ) -> RegistryResult<Vec<crate::models::account::UserProfileIdxModel>> {
        match hash_as_i64(&username) {
            Ok(hash) => self.profiles.find_by_username_hash(hash).await,
            Err(_) => Ok(Vec::new()),
        }
    }

    async fn lookup_email(
        &self,
        email: &str,
    ) -> RegistryResult<Vec<crate::models::account::UserProfileIdxModel>> {
        match hash_as_i64(&email) {
            Ok(hash) => self.profiles.find_by_email_hash(hash).await,
            Err(_) => Ok(Vec::new()),
        }
    }
}

impl<DB: Database> Clone for AccountService<DB> {
    fn clone(&self) -> Self {
        Self {
            profiles: self.profiles.clone(),
            auth: self.auth.clone(),
            change_log: self.change_log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::Role;
    use crate::test_support::{sample_user_form, TestRepos};
    use brand_registry_api::error::{RegistryError, ValidationCode};

    fn service(repos: &TestRepos) -> AccountService<sqlx::Postgres> {
        AccountService::new(
            repos.profiles.clone(),
            repos.auth.clone(),
            repos.change_log.clone(),
        )
    }

    #[tokio::test]
    async fn registration_creates_an_inspector_profile() {
        let repos = TestRepos::new();
        let service = service(&repos);

        let profile = service
            .register(&sample_user_form("ana_gomez"))
            .await
            .expect("valid registration");

        assert_eq!(profile.role, Role::Inspector);
        assert_eq!(profile.username.as_str(), "ana_gomez");
        assert_eq!(repos.auth.created(), vec!["ana_gomez".to_string()]);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_preflight() {
        let repos = TestRepos::new();
        let service = service(&repos);

        service.register(&sample_user_form("ana_gomez")).await.unwrap();

        let mut second = sample_user_form("ana_gomez");
        second.email = Some("otra@ejemplo.com".into());
        let error = service
            .register(&second)
            .await
            .expect_err("username already taken");
        match error {
            RegistryError::Validation(errors) => {
                assert!(errors.has("username", ValidationCode::Duplicate));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_preflight() {
        let repos = TestRepos::new();
        let service = service(&repos);

        service.register(&sample_user_form("ana_gomez")).await.unwrap();

        let mut second = sample_user_form("otro_usuario");
        second.email = Some("ana_gomez@ejemplo.com".into());
        let error = service
            .register(&second)
            .await
            .expect_err("email already registered");
        match error {
            RegistryError::Validation(errors) => {
                assert!(errors.has("email", ValidationCode::Duplicate));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
