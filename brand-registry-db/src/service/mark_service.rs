use brand_registry_api::error::{RegistryError, RegistryResult};
use chrono::Utc;
use sqlx::Database;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use super::audit::{record, snapshot_of};
use super::authorization::{ensure, Action, Actor};
use super::collaborators::{FileStore, NamedFile};
use crate::forms::{MarkForm, MarkFormContext};
use crate::models::audit::{ChangeAction, EntityKind};
use crate::models::registry::{MarkModel, PredefinedImageModel};
use crate::repository::{
    ChangeLogRepository, Create, Delete, Load, MarkFilter, MarkRepository, Page, PageRequest,
    ParcelRepository, PredefinedImageRepository, ProducerRepository, Update,
};

/// Image uploads accompanying a mark submission.
#[derive(Debug, Clone, Default)]
pub struct MarkUploads {
    pub brand_image: Option<Vec<u8>>,
    pub carnet_front: Option<NamedFile>,
    pub carnet_back: Option<NamedFile>,
}

/// Mark/brand registration flows.
pub struct MarkService<DB: Database> {
    marks: Arc<dyn MarkRepository<DB>>,
    parcels: Arc<dyn ParcelRepository<DB>>,
    producers: Arc<dyn ProducerRepository<DB>>,
    predefined_images: Arc<dyn PredefinedImageRepository<DB>>,
    change_log: Arc<dyn ChangeLogRepository<DB>>,
    files: Arc<dyn FileStore>,
}

impl<DB: Database> MarkService<DB> {
    pub fn new(
        marks: Arc<dyn MarkRepository<DB>>,
        parcels: Arc<dyn ParcelRepository<DB>>,
        producers: Arc<dyn ProducerRepository<DB>>,
        predefined_images: Arc<dyn PredefinedImageRepository<DB>>,
        change_log: Arc<dyn ChangeLogRepository<DB>>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            marks,
            parcels,
            producers,
            predefined_images,
            change_log,
            files,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        form: &MarkForm,
        uploads: MarkUploads,
    ) -> RegistryResult<MarkModel> {
        ensure(actor, Action::Create)?;

        let ctx = self.form_context(form).await?;
        let validated = form.validate(&MarkFormContext {
            editing: None,
            today: Utc::now().date_naive(),
            producer_exists: ctx.producer_exists,
            allowed_parcels: &ctx.allowed_parcels,
            order_number_owner: &|value| (value == ctx.order_number_taken.0)
                .then_some(ctx.order_number_taken.1)
                .flatten(),
            predefined_image_active: &|id| ctx.active_predefined == Some(id),
        })?;

        let mut model = validated.into_model(Uuid::new_v4(), Utc::now());
        self.apply_images(&mut model, uploads).await?;
        self.marks.create(&model).await?;
        tracing::info!(mark = %model.id, order_number = model.order_number, "mark created");

        record(
            self.change_log.as_ref(),
            EntityKind::Mark,
            model.id,
            ChangeAction::Created,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(model)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        form: &MarkForm,
        uploads: MarkUploads,
    ) -> RegistryResult<MarkModel> {
        ensure(actor, Action::Edit)?;

        let mut model = self.marks.load(id).await?;
        let ctx = self.form_context(form).await?;
        let validated = form.validate(&MarkFormContext {
            editing: Some(id),
            today: Utc::now().date_naive(),
            producer_exists: ctx.producer_exists,
            allowed_parcels: &ctx.allowed_parcels,
            order_number_owner: &|value| (value == ctx.order_number_taken.0)
                .then_some(ctx.order_number_taken.1)
                .flatten(),
            predefined_image_active: &|image_id| ctx.active_predefined == Some(image_id),
        })?;

        validated.apply_to(&mut model, Utc::now());
        self.apply_images(&mut model, uploads).await?;
        self.marks.update(&model).await?;
        tracing::info!(mark = %model.id, "mark updated");

        record(
            self.change_log.as_ref(),
            EntityKind::Mark,
            model.id,
            ChangeAction::Updated,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(model)
    }

    pub async fn list(
        &self,
        actor: &Actor,
        filter: &MarkFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<MarkModel>> {
        ensure(actor, Action::View)?;
        self.marks.list(filter, page).await
    }

    pub async fn detail(&self, actor: &Actor, id: Uuid) -> RegistryResult<MarkModel> {
        ensure(actor, Action::View)?;
        self.marks.load(id).await
    }

    /// Active predefined reference images offered by the mark form.
    pub async fn predefined_image_options(
        &self,
        actor: &Actor,
    ) -> RegistryResult<Vec<PredefinedImageModel>> {
        ensure(actor, Action::View)?;
        self.predefined_images.list_active().await
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> RegistryResult<()> {
        ensure(actor, Action::Delete)?;

        let model = self.marks.load(id).await?;
        self.marks.delete(id).await?;
        tracing::info!(mark = %id, "mark deleted");

        record(
            self.change_log.as_ref(),
            EntityKind::Mark,
            id,
            ChangeAction::Deleted,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(())
    }

    /// Gather the async context the synchronous form rules need.
    async fn form_context(&self, form: &MarkForm) -> RegistryResult<FormCtx> {
        let producer_id = form
            .producer_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok());

        let producer_exists = match producer_id {
            Some(id) => match self.producers.load(id).await {
                Ok(_) => true,
                Err(RegistryError::NotFound(_)) => false,
                Err(other) => return Err(other),
            },
            None => false,
        };

        // No producer selected means no parcel is selectable.
        let allowed_parcels: HashSet<Uuid> = match (producer_id, producer_exists) {
            (Some(id), true) => self
                .parcels
                .find_by_producer_id(id)
                .await?
                .into_iter()
                .map(|p| p.id)
                .collect(),
            _ => HashSet::new(),
        };

        let submitted_order = form
            .order_number
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        // The validator itself excludes the record being edited.
        let order_number_taken = match submitted_order {
            Some(value) => {
                let matches = self.marks.find_by_order_number(value).await?;
                (value, matches.first().map(|idx| idx.id))
            }
            None => (0, None),
        };

        let active_predefined = match form
            .predefined_image_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        {
            Some(id) => match self.predefined_images.load(id).await {
                Ok(image) if image.active => Some(image.id),
                Ok(_) => None,
                Err(RegistryError::NotFound(_)) => None,
                Err(other) => return Err(other),
            },
            None => None,
        };

        Ok(FormCtx {
            producer_exists,
            allowed_parcels,
            order_number_taken,
            active_predefined,
        })
    }

    /// Fill the image slots: an explicit upload wins; otherwise a selected
    /// predefined reference is copied byte-for-byte into the record. Carnet
    /// images go to the file store and only their URLs are kept.
    async fn apply_images(&self, model: &mut MarkModel, uploads: MarkUploads) -> RegistryResult<()> {
        if let Some(bytes) = uploads.brand_image {
            model.brand_image = Some(bytes);
        } else if model.brand_image.is_none() {
            if let Some(image_id) = model.predefined_image_id {
                let reference = self.predefined_images.load(image_id).await?;
                model.brand_image = Some(reference.image.clone());
            }
        }

        if let Some(front) = uploads.carnet_front {
            let url = self
                .files
                .store("carnets", &front.filename, &front.bytes)
                .await?;
            model.carnet_front_url = Some(crate::utils::clamp_str(&url));
        }
        if let Some(back) = uploads.carnet_back {
            let url = self
                .files
                .store("carnets", &back.filename, &back.bytes)
                .await?;
            model.carnet_back_url = Some(crate::utils::clamp_str(&url));
        }
        Ok(())
    }
}

struct FormCtx {
    producer_exists: bool,
    allowed_parcels: HashSet<Uuid>,
    /// Submitted order number and the id of the mark holding it, if any.
    order_number_taken: (i64, Option<Uuid>),
    active_predefined: Option<Uuid>,
}

impl<DB: Database> Clone for MarkService<DB> {
    fn clone(&self) -> Self {
        Self {
            marks: self.marks.clone(),
            parcels: self.parcels.clone(),
            producers: self.producers.clone(),
            predefined_images: self.predefined_images.clone(),
            change_log: self.change_log.clone(),
            files: self.files.clone(),
        }
    }
}
