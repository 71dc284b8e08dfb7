use brand_registry_api::error::RegistryResult;
use brand_registry_api::validation;
use chrono::Utc;
use serde::Serialize;
use sqlx::Database;
use std::sync::Arc;
use uuid::Uuid;

use super::audit::{record, snapshot_of};
use super::authorization::{ensure, Action, Actor};
use super::{geojson, report};
use crate::forms::{ParcelForm, ProducerForm, ProducerFormContext};
use crate::models::audit::{ChangeAction, EntityKind};
use crate::models::registry::{MarkModel, ParcelModel, ProducerModel, RequestModel};
use crate::repository::{
    ChangeLogRepository, Create, Delete, Load, MarkRepository, Page, PageRequest,
    ParcelRepository, ProducerFilter, ProducerRepository, RequestRepository, Update,
};
use crate::utils::{clamp_str, hash_as_i64};

/// `{id, name, district}` tuple answered by the parcel lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelOption {
    pub id: Uuid,
    pub name: String,
    pub district: String,
}

/// Detail view of one producer with its dependent records.
#[derive(Debug, Clone)]
pub struct ProducerDetail {
    pub producer: ProducerModel,
    pub parcels: Vec<ParcelModel>,
    pub marks: Vec<MarkModel>,
    pub requests: Vec<RequestModel>,
}

/// Producer CRUD flows, the parcel lookup, and the producer read exports.
pub struct ProducerService<DB: Database> {
    producers: Arc<dyn ProducerRepository<DB>>,
    parcels: Arc<dyn ParcelRepository<DB>>,
    marks: Arc<dyn MarkRepository<DB>>,
    requests: Arc<dyn RequestRepository<DB>>,
    change_log: Arc<dyn ChangeLogRepository<DB>>,
}

impl<DB: Database> ProducerService<DB> {
    pub fn new(
        producers: Arc<dyn ProducerRepository<DB>>,
        parcels: Arc<dyn ParcelRepository<DB>>,
        marks: Arc<dyn MarkRepository<DB>>,
        requests: Arc<dyn RequestRepository<DB>>,
        change_log: Arc<dyn ChangeLogRepository<DB>>,
    ) -> Self {
        Self {
            producers,
            parcels,
            marks,
            requests,
            change_log,
        }
    }

    pub async fn create(&self, actor: &Actor, form: &ProducerForm) -> RegistryResult<ProducerModel> {
        ensure(actor, Action::Create)?;

        let owner = self.national_id_owner(&form.national_id).await?;
        let owner_of = move |_: &str| owner;
        let validated = form.validate(&ProducerFormContext {
            editing: None,
            national_id_owner: &owner_of,
        })?;

        let model = validated.into_model(Uuid::new_v4(), Utc::now());
        self.producers.create(&model).await?;
        tracing::info!(producer = %model.id, "producer created");

        record(
            self.change_log.as_ref(),
            EntityKind::Producer,
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
        form: &ProducerForm,
    ) -> RegistryResult<ProducerModel> {
        ensure(actor, Action::Edit)?;

        let mut model = self.producers.load(id).await?;
        let owner = self.national_id_owner(&form.national_id).await?;
        let owner_of = move |_: &str| owner;
        let validated = form.validate(&ProducerFormContext {
            editing: Some(id),
            national_id_owner: &owner_of,
        })?;

        validated.apply_to(&mut model);
        self.producers.update(&model).await?;
        tracing::info!(producer = %model.id, "producer updated");

        record(
            self.change_log.as_ref(),
            EntityKind::Producer,
            model.id,
            ChangeAction::Updated,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(model)
    }

    /// Delete a producer. The schema cascades to parcels, marks and
    /// requests; the mark index cache is evicted explicitly.
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> RegistryResult<()> {
        ensure(actor, Action::Delete)?;

        let model = self.producers.load(id).await?;
        self.producers.delete(id).await?;
        self.marks.evict_for_producer(id).await?;
        tracing::info!(producer = %id, "producer deleted");

        record(
            self.change_log.as_ref(),
            EntityKind::Producer,
            id,
            ChangeAction::Deleted,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(())
    }

    pub async fn list(
        &self,
        actor: &Actor,
        filter: &ProducerFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<ProducerModel>> {
        ensure(actor, Action::View)?;
        self.producers.list(filter, page).await
    }

    pub async fn detail(&self, actor: &Actor, id: Uuid) -> RegistryResult<ProducerDetail> {
        ensure(actor, Action::View)?;

        let producer = self.producers.load(id).await?;
        let parcels = self.parcels.find_by_producer_id(id).await?;
        let marks = self.marks.find_by_producer_id(id).await?;
        let requests = self.requests.find_by_producer_id(id).await?;
        Ok(ProducerDetail {
            producer,
            parcels,
            marks,
            requests,
        })
    }

    /// Create an explicit parcel for a producer.
    pub async fn create_parcel(
        &self,
        actor: &Actor,
        producer_id: Uuid,
        form: &ParcelForm,
    ) -> RegistryResult<ParcelModel> {
        ensure(actor, Action::Create)?;

        self.producers.load(producer_id).await?;
        let validated = form.validate()?;
        let model = validated.into_model(Uuid::new_v4(), producer_id);
        self.parcels.create(&model).await?;

        record(
            self.change_log.as_ref(),
            EntityKind::Parcel,
            model.id,
            ChangeAction::Created,
            Some(actor.user_id),
            snapshot_of(&model),
        )
        .await;
        Ok(model)
    }

    /// The parcels of one producer as `{id, name, district}` tuples. A
    /// producer that still has no parcels gets a default one derived from
    /// its legacy single-parcel fields.
    pub async fn parcels_for_producer(
        &self,
        actor: &Actor,
        producer_id: Uuid,
    ) -> RegistryResult<Vec<ParcelOption>> {
        ensure(actor, Action::View)?;

        let producer = self.producers.load(producer_id).await?;
        let mut parcels = self.parcels.find_by_producer_id(producer_id).await?;
        if parcels.is_empty() {
            let default = self.derive_default_parcel(&producer);
            self.parcels.create(&default).await?;
            tracing::info!(producer = %producer_id, parcel = %default.id, "default parcel derived");
            record(
                self.change_log.as_ref(),
                EntityKind::Parcel,
                default.id,
                ChangeAction::Created,
                Some(actor.user_id),
                snapshot_of(&default),
            )
            .await;
            parcels.push(default);
        }

        Ok(parcels
            .into_iter()
            .map(|p| ParcelOption {
                id: p.id,
                name: p.name.to_string(),
                district: p.district.to_string(),
            })
            .collect())
    }

    /// GeoJSON FeatureCollection of every geolocated producer.
    pub async fn geojson(&self, actor: &Actor) -> RegistryResult<serde_json::Value> {
        ensure(actor, Action::View)?;
        let producers = self.producers.geolocated().await?;
        Ok(geojson::feature_collection(&producers))
    }

    /// Producer report table, ordered by surname then first name.
    pub async fn report(&self, actor: &Actor) -> RegistryResult<report::ProducerReport> {
        ensure(actor, Action::View)?;
        let producers = self.producers.load_all().await?;
        Ok(report::build(&producers, Utc::now()))
    }

    /// Pre-flight lookup of the producer currently holding the submitted
    /// national id; the unique constraint remains authoritative.
    async fn national_id_owner(&self, raw: &Option<String>) -> RegistryResult<Option<Uuid>> {
        let Some(raw) = raw.as_deref() else {
            return Ok(None);
        };
        let Ok(normalized) = validation::national_id(raw) else {
            // A malformed id collects its own field error during validation.
            return Ok(None);
        };
        let Ok(hash) = hash_as_i64(&normalized.as_str()) else {
            return Ok(None);
        };
        let matches = self.producers.find_by_national_id_hash(hash).await?;
        Ok(matches.first().map(|idx| idx.id))
    }

    fn derive_default_parcel(&self, producer: &ProducerModel) -> ParcelModel {
        let name = producer
            .legacy_parcel_name
            .as_ref()
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("Campo de {}", producer.surname));
        let district = producer
            .department
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| producer.locality.to_string());

        ParcelModel {
            id: Uuid::new_v4(),
            producer_id: producer.id,
            name: clamp_str(&name),
            district: clamp_str(&district),
            department: producer.department.clone(),
            area_hectares: producer.area_hectares,
            latitude: producer.latitude,
            longitude: producer.longitude,
            notes: None,
        }
    }
}

impl<DB: Database> Clone for ProducerService<DB> {
    fn clone(&self) -> Self {
        Self {
            producers: self.producers.clone(),
            parcels: self.parcels.clone(),
            marks: self.marks.clone(),
            requests: self.requests.clone(),
            change_log: self.change_log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::Role;
    use crate::models::registry::ProducerState;
    use crate::test_support::{sample_producer_form, TestRepos};
    use brand_registry_api::error::{ValidationCode, RegistryError};

    fn service(repos: &TestRepos) -> ProducerService<sqlx::Postgres> {
        ProducerService::new(
            repos.producers.clone(),
            repos.parcels.clone(),
            repos.marks.clone(),
            repos.requests.clone(),
            repos.change_log.clone(),
        )
    }

    fn staff() -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            role: Role::Staff,
        }
    }

    fn admin() -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            role: Role::Administrator,
        }
    }

    #[tokio::test]
    async fn create_persists_and_logs_the_producer() {
        let repos = TestRepos::new();
        let service = service(&repos);

        let model = service
            .create(&staff(), &sample_producer_form("12345678"))
            .await
            .expect("create succeeds");

        assert_eq!(model.national_id.as_str(), "12345678");
        assert_eq!(model.state, ProducerState::Pending);
        let log = repos.change_log_entries();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].entity_kind, EntityKind::Producer);
        assert_eq!(log[0].action, ChangeAction::Created);
        assert_eq!(log[0].entity_id, model.id);
    }

    #[tokio::test]
    async fn second_producer_with_same_national_id_is_a_duplicate() {
        let repos = TestRepos::new();
        let service = service(&repos);

        service
            .create(&staff(), &sample_producer_form("12345678"))
            .await
            .expect("first create succeeds");
        let error = service
            .create(&staff(), &sample_producer_form("12.345.678"))
            .await
            .expect_err("second create must fail");

        match error {
            RegistryError::Validation(errors) => {
                assert!(errors.has("national_id", ValidationCode::Duplicate));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_excludes_self_from_the_duplicate_check() {
        let repos = TestRepos::new();
        let service = service(&repos);

        let created = service
            .create(&staff(), &sample_producer_form("12345678"))
            .await
            .unwrap();

        let mut edit = sample_producer_form("12345678");
        edit.locality = Some("Tinogasta".into());
        let updated = service
            .update(&staff(), created.id, &edit)
            .await
            .expect("editing keeps its own national id");

        assert_eq!(updated.locality.as_str(), "Tinogasta");
    }

    #[tokio::test]
    async fn inspector_cannot_create() {
        let repos = TestRepos::new();
        let service = service(&repos);
        let inspector = Actor {
            user_id: Uuid::new_v4(),
            role: Role::Inspector,
        };

        let error = service
            .create(&inspector, &sample_producer_form("12345678"))
            .await
            .expect_err("inspectors are read-only");
        assert!(matches!(error, RegistryError::Forbidden(_)));
    }

    #[tokio::test]
    async fn delete_requires_administrator_and_evicts_mark_cache() {
        let repos = TestRepos::new();
        let service = service(&repos);

        let created = service
            .create(&staff(), &sample_producer_form("12345678"))
            .await
            .unwrap();

        let error = service
            .delete(&staff(), created.id)
            .await
            .expect_err("staff may not delete");
        assert!(matches!(error, RegistryError::Forbidden(_)));

        service
            .delete(&admin(), created.id)
            .await
            .expect("administrator may delete");
        assert!(matches!(
            service.detail(&admin(), created.id).await,
            Err(RegistryError::NotFound(_))
        ));
        assert_eq!(repos.marks.evictions(), vec![created.id]);
    }

    #[tokio::test]
    async fn lookup_auto_creates_the_default_parcel_exactly_once() {
        let repos = TestRepos::new();
        let service = service(&repos);

        let mut form = sample_producer_form("12345678");
        form.legacy_parcel_name = Some("La Aguada".into());
        let producer = service.create(&staff(), &form).await.unwrap();

        let first = service
            .parcels_for_producer(&staff(), producer.id)
            .await
            .expect("lookup succeeds");
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name, "La Aguada");
        assert_eq!(first[0].district, "Belén");

        let second = service
            .parcels_for_producer(&staff(), producer.id)
            .await
            .unwrap();
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn geojson_only_covers_geolocated_producers() {
        let repos = TestRepos::new();
        let service = service(&repos);

        service
            .create(&staff(), &sample_producer_form("12345678"))
            .await
            .unwrap();

        let collection = service.geojson(&staff()).await.unwrap();
        assert_eq!(collection["features"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn report_rows_follow_listing_order() {
        let repos = TestRepos::new();
        let service = service(&repos);

        let mut zárate = sample_producer_form("11111111");
        zárate.surname = Some("zárate".into());
        let mut acosta = sample_producer_form("22222222");
        acosta.surname = Some("acosta".into());
        service.create(&staff(), &zárate).await.unwrap();
        service.create(&staff(), &acosta).await.unwrap();

        let report = service.report(&staff()).await.unwrap();
        assert_eq!(report.rows.len(), 2);
        assert!(report.rows[0].name.starts_with("Acosta"));
        assert!(report.rows[1].name.starts_with("Zárate"));
    }
}
