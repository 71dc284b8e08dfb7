use brand_registry_api::error::{
    RegistryError, RegistryResult, ValidationCode, ValidationError, ValidationErrors,
};
use chrono::Utc;
use sqlx::Database;
use std::sync::Arc;
use uuid::Uuid;

use super::audit::{record, snapshot_of};
use super::authorization::{ensure, Action, Actor};
use super::collaborators::{FileStore, NamedFile};
use crate::forms::{RequestForm, RequestFormContext};
use crate::models::audit::{ChangeAction, EntityKind};
use crate::models::registry::{RequestModel, RequestState};
use crate::repository::{
    ChangeLogRepository, Create, Load, MarkRepository, Page, PageRequest, ProducerRepository,
    RequestFilter, RequestRepository, Update,
};

/// Administrative-request flows, including the terminal-only resolution.
pub struct RequestService<DB: Database> {
    requests: Arc<dyn RequestRepository<DB>>,
    producers: Arc<dyn ProducerRepository<DB>>,
    marks: Arc<dyn MarkRepository<DB>>,
    change_log: Arc<dyn ChangeLogRepository<DB>>,
    files: Arc<dyn FileStore>,
}

impl<DB: Database> RequestService<DB> {
    pub fn new(
        requests: Arc<dyn RequestRepository<DB>>,
        producers: Arc<dyn ProducerRepository<DB>>,
        marks: Arc<dyn MarkRepository<DB>>,
        change_log: Arc<dyn ChangeLogRepository<DB>>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            requests,
            producers,
            marks,
            change_log,
            files,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        form: &RequestForm,
        attachment: Option<NamedFile>,
    ) -> RegistryResult<RequestModel> {
        ensure(actor, Action::Create)?;

        let producer_exists = match form
            .producer_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        {
            Some(id) => match self.producers.load(id).await {
                Ok(_) => true,
                Err(RegistryError::NotFound(_)) => false,
                Err(other) => return Err(other),
            },
            None => false,
        };

        let mark_owner = match form
            .mark_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        {
            Some(id) => match self.marks.load(id).await {
                Ok(mark) => Some((id, mark.producer_id)),
                Err(RegistryError::NotFound(_)) => None,
                Err(other) => return Err(other),
            },
            None => None,
        };

        let owner_of = move |id: Uuid| match mark_owner {
            Some((mark_id, producer_id)) if mark_id == id => Some(producer_id),
            _ => None,
        };
        let validated = form.validate(&RequestFormContext {
            producer_exists,
            mark_owner: &owner_of,
        })?;

        let mut model = validated.into_model(Uuid::new_v4(), Utc::now().date_naive());
        if let Some(file) = attachment {
            let url = self
                .files
                .store("requests", &file.filename, &file.bytes)
                .await?;
            model.attachment_url = Some(crate::utils::clamp_str(&url));
        }
        self.requests.create(&model).await?;
        tracing::info!(request = %model.id, trade_type = %model.trade_type, "request created");

        record(
            self.change_log.as_ref(),
            EntityKind::Request,
            model.id,
            ChangeAction::Created,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(model)
    }

    pub async fn list(
        &self,
        actor: &Actor,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<RequestModel>> {
        ensure(actor, Action::View)?;
        self.requests.list(filter, page).await
    }

    /// Resolve a pending request. Only the two terminal states are
    /// accepted; resolving an already-resolved request is a conflict.
    pub async fn resolve(
        &self,
        actor: &Actor,
        id: Uuid,
        target: RequestState,
    ) -> RegistryResult<RequestModel> {
        ensure(actor, Action::Resolve)?;

        let mut model = self.requests.load(id).await?;
        if !target.is_terminal() {
            let mut errors = ValidationErrors::new();
            errors.add(
                "state",
                ValidationError::new(
                    ValidationCode::InvalidFormat,
                    "a request can only be approved or rejected",
                ),
            );
            return Err(errors.into());
        }
        if !model.state.can_transition_to(target) {
            return Err(RegistryError::Conflict(format!(
                "request {id} is already resolved as {}",
                model.state
            )));
        }

        model.state = target;
        self.requests.update(&model).await?;
        tracing::info!(request = %id, state = %target, "request resolved");

        record(
            self.change_log.as_ref(),
            EntityKind::Request,
            model.id,
            ChangeAction::StateChanged,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(model)
    }
}

impl<DB: Database> Clone for RequestService<DB> {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
            producers: self.producers.clone(),
            marks: self.marks.clone(),
            change_log: self.change_log.clone(),
            files: self.files.clone(),
        }
    }
}
