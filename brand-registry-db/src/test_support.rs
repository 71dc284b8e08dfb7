//! In-memory repository fakes and sample builders for the service tests.

use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use chrono::Utc;
use sqlx::Postgres;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::forms::{MarkForm, ProducerForm, RequestForm, UserForm};
use crate::models::account::{UserProfileIdxModel, UserProfileModel};
use crate::models::audit::{ChangeLogModel, EntityKind};
use crate::models::registry::{
    LivestockCounts, MarkIdxModel, MarkModel, MarkState, ParcelModel, PredefinedImageModel,
    ProducerIdxModel, ProducerModel, ProducerState, RequestModel, TradeType,
};
use crate::models::IndexAware;
use crate::repository::{
    ChangeLogRepository, Create, Delete, Load, MarkFilter, MarkRepository, Page, PageRequest,
    ParcelRepository, PredefinedImageRepository, ProducerFilter, ProducerRepository,
    RequestFilter, RequestRepository, Update, UserProfileRepository,
};
use crate::service::{AuthGateway, FileStore};
use crate::utils::clamp_str;

#[derive(Default)]
struct StoreInner {
    producers: HashMap<Uuid, ProducerModel>,
    parcels: HashMap<Uuid, ParcelModel>,
    marks: HashMap<Uuid, MarkModel>,
    requests: HashMap<Uuid, RequestModel>,
    images: HashMap<Uuid, PredefinedImageModel>,
    profiles: HashMap<Uuid, UserProfileModel>,
    log: Vec<ChangeLogModel>,
    mark_evictions: Vec<Uuid>,
    identities: Vec<String>,
}

type SharedStore = Arc<Mutex<StoreInner>>;

fn locked(store: &SharedStore) -> MutexGuard<'_, StoreInner> {
    store.lock().expect("store lock")
}

fn paged<T: Clone>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len();
    let items = items
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect();
    Page::new(items, total, page.limit, page.offset)
}

fn icontains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ---------------------------------------------------------------------------
// Producer fake
// ---------------------------------------------------------------------------

pub struct InMemoryProducerRepository {
    store: SharedStore,
}

#[async_trait]
impl Load<Postgres, ProducerModel> for InMemoryProducerRepository {
    async fn load(&self, id: Uuid) -> RegistryResult<ProducerModel> {
        locked(&self.store)
            .producers
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("producer {id}")))
    }
}

#[async_trait]
impl Create<Postgres, ProducerModel> for InMemoryProducerRepository {
    async fn create(&self, item: &ProducerModel) -> RegistryResult<()> {
        let mut store = locked(&self.store);
        // The storage-level unique constraint on national_id.
        if store
            .producers
            .values()
            .any(|p| p.national_id == item.national_id)
        {
            return Err(RegistryError::Conflict("producer national_id".into()));
        }
        store.producers.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, ProducerModel> for InMemoryProducerRepository {
    async fn update(&self, item: &ProducerModel) -> RegistryResult<()> {
        let mut store = locked(&self.store);
        if !store.producers.contains_key(&item.id) {
            return Err(RegistryError::NotFound(format!("producer {}", item.id)));
        }
        store.producers.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Delete<Postgres, ProducerModel> for InMemoryProducerRepository {
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let mut store = locked(&self.store);
        if store.producers.remove(&id).is_none() {
            return Err(RegistryError::NotFound(format!("producer {id}")));
        }
        // Declared cascade: parcels, marks and requests follow their producer.
        store.parcels.retain(|_, p| p.producer_id != id);
        store.marks.retain(|_, m| m.producer_id != id);
        store.requests.retain(|_, r| r.producer_id != id);
        Ok(())
    }
}

#[async_trait]
impl ProducerRepository<Postgres> for InMemoryProducerRepository {
    async fn list(
        &self,
        filter: &ProducerFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<ProducerModel>> {
        let mut items: Vec<ProducerModel> = locked(&self.store)
            .producers
            .values()
            .filter(|p| {
                filter.query.as_deref().map_or(true, |q| {
                    icontains(p.first_name.as_str(), q)
                        || icontains(p.surname.as_str(), q)
                        || icontains(p.national_id.as_str(), q)
                        || p.legacy_parcel_name
                            .as_ref()
                            .map_or(false, |n| icontains(n.as_str(), q))
                })
            })
            .filter(|p| filter.state.map_or(true, |s| p.state == s))
            .filter(|p| {
                filter
                    .locality
                    .as_deref()
                    .map_or(true, |l| icontains(p.locality.as_str(), l))
            })
            .filter(|p| {
                filter.department.as_deref().map_or(true, |d| {
                    p.department.as_ref().map_or(false, |pd| icontains(pd.as_str(), d))
                })
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            (a.surname.as_str(), a.first_name.as_str())
                .cmp(&(b.surname.as_str(), b.first_name.as_str()))
        });
        Ok(paged(items, page))
    }

    async fn load_all(&self) -> RegistryResult<Vec<ProducerModel>> {
        let mut items: Vec<ProducerModel> =
            locked(&self.store).producers.values().cloned().collect();
        items.sort_by(|a, b| {
            (a.surname.as_str(), a.first_name.as_str())
                .cmp(&(b.surname.as_str(), b.first_name.as_str()))
        });
        Ok(items)
    }

    async fn find_by_national_id_hash(&self, hash: i64) -> RegistryResult<Vec<ProducerIdxModel>> {
        Ok(locked(&self.store)
            .producers
            .values()
            .map(|p| p.to_index())
            .filter(|idx| idx.national_id_hash == Some(hash))
            .collect())
    }

    async fn geolocated(&self) -> RegistryResult<Vec<ProducerModel>> {
        Ok(locked(&self.store)
            .producers
            .values()
            .filter(|p| p.has_location())
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Parcel fake
// ---------------------------------------------------------------------------

pub struct InMemoryParcelRepository {
    store: SharedStore,
}

#[async_trait]
impl Load<Postgres, ParcelModel> for InMemoryParcelRepository {
    async fn load(&self, id: Uuid) -> RegistryResult<ParcelModel> {
        locked(&self.store)
            .parcels
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("parcel {id}")))
    }
}

#[async_trait]
impl Create<Postgres, ParcelModel> for InMemoryParcelRepository {
    async fn create(&self, item: &ParcelModel) -> RegistryResult<()> {
        locked(&self.store).parcels.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, ParcelModel> for InMemoryParcelRepository {
    async fn update(&self, item: &ParcelModel) -> RegistryResult<()> {
        locked(&self.store).parcels.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Delete<Postgres, ParcelModel> for InMemoryParcelRepository {
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        locked(&self.store).parcels.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ParcelRepository<Postgres> for InMemoryParcelRepository {
    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<ParcelModel>> {
        let mut items: Vec<ParcelModel> = locked(&self.store)
            .parcels
            .values()
            .filter(|p| p.producer_id == producer_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(items)
    }

    async fn count(&self) -> RegistryResult<usize> {
        Ok(locked(&self.store).parcels.len())
    }
}

// ---------------------------------------------------------------------------
// Mark fake
// ---------------------------------------------------------------------------

pub struct InMemoryMarkRepository {
    store: SharedStore,
}

impl InMemoryMarkRepository {
    pub fn evictions(&self) -> Vec<Uuid> {
        locked(&self.store).mark_evictions.clone()
    }
}

#[async_trait]
impl Load<Postgres, MarkModel> for InMemoryMarkRepository {
    async fn load(&self, id: Uuid) -> RegistryResult<MarkModel> {
        locked(&self.store)
            .marks
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("mark {id}")))
    }
}

#[async_trait]
impl Create<Postgres, MarkModel> for InMemoryMarkRepository {
    async fn create(&self, item: &MarkModel) -> RegistryResult<()> {
        let mut store = locked(&self.store);
        // The storage-level unique constraint on order_number.
        if store
            .marks
            .values()
            .any(|m| m.order_number == item.order_number)
        {
            return Err(RegistryError::Conflict("mark order_number".into()));
        }
        store.marks.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, MarkModel> for InMemoryMarkRepository {
    async fn update(&self, item: &MarkModel) -> RegistryResult<()> {
        let mut store = locked(&self.store);
        if !store.marks.contains_key(&item.id) {
            return Err(RegistryError::NotFound(format!("mark {}", item.id)));
        }
        store.marks.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Delete<Postgres, MarkModel> for InMemoryMarkRepository {
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        locked(&self.store).marks.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl MarkRepository<Postgres> for InMemoryMarkRepository {
    async fn list(
        &self,
        filter: &MarkFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<MarkModel>> {
        let store = locked(&self.store);
        let mut items: Vec<MarkModel> = store
            .marks
            .values()
            .filter(|m| {
                filter.query.as_deref().map_or(true, |q| {
                    let producer_matches = store.producers.get(&m.producer_id).map_or(false, |p| {
                        icontains(p.first_name.as_str(), q) || icontains(p.surname.as_str(), q)
                    });
                    producer_matches || m.order_number.to_string().contains(q)
                })
            })
            .filter(|m| filter.state.map_or(true, |s| m.state == s))
            .filter(|m| filter.trade_type.map_or(true, |t| m.trade_type == t))
            .cloned()
            .collect();
        items.sort_by_key(|m| std::cmp::Reverse(m.issued_on));
        Ok(paged(items, page))
    }

    async fn load_all(&self) -> RegistryResult<Vec<MarkModel>> {
        let mut items: Vec<MarkModel> = locked(&self.store).marks.values().cloned().collect();
        items.sort_by_key(|m| std::cmp::Reverse(m.issued_on));
        Ok(items)
    }

    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<MarkModel>> {
        let mut items: Vec<MarkModel> = locked(&self.store)
            .marks
            .values()
            .filter(|m| m.producer_id == producer_id)
            .cloned()
            .collect();
        items.sort_by_key(|m| std::cmp::Reverse(m.issued_on));
        Ok(items)
    }

    async fn find_by_order_number(&self, order_number: i64) -> RegistryResult<Vec<MarkIdxModel>> {
        Ok(locked(&self.store)
            .marks
            .values()
            .filter(|m| m.order_number == order_number)
            .map(|m| m.to_index())
            .collect())
    }

    async fn evict_for_producer(&self, producer_id: Uuid) -> RegistryResult<()> {
        locked(&self.store).mark_evictions.push(producer_id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Request fake
// ---------------------------------------------------------------------------

pub struct InMemoryRequestRepository {
    store: SharedStore,
}

#[async_trait]
impl Load<Postgres, RequestModel> for InMemoryRequestRepository {
    async fn load(&self, id: Uuid) -> RegistryResult<RequestModel> {
        locked(&self.store)
            .requests
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("request {id}")))
    }
}

#[async_trait]
impl Create<Postgres, RequestModel> for InMemoryRequestRepository {
    async fn create(&self, item: &RequestModel) -> RegistryResult<()> {
        locked(&self.store).requests.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, RequestModel> for InMemoryRequestRepository {
    async fn update(&self, item: &RequestModel) -> RegistryResult<()> {
        let mut store = locked(&self.store);
        if !store.requests.contains_key(&item.id) {
            return Err(RegistryError::NotFound(format!("request {}", item.id)));
        }
        store.requests.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Delete<Postgres, RequestModel> for InMemoryRequestRepository {
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        locked(&self.store).requests.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl RequestRepository<Postgres> for InMemoryRequestRepository {
    async fn list(
        &self,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<RequestModel>> {
        let mut items: Vec<RequestModel> = locked(&self.store)
            .requests
            .values()
            .filter(|r| filter.state.map_or(true, |s| r.state == s))
            .filter(|r| filter.trade_type.map_or(true, |t| r.trade_type == t))
            .cloned()
            .collect();
        items.sort_by_key(|r| std::cmp::Reverse(r.submitted_on));
        Ok(paged(items, page))
    }

    async fn load_all(&self) -> RegistryResult<Vec<RequestModel>> {
        let mut items: Vec<RequestModel> =
            locked(&self.store).requests.values().cloned().collect();
        items.sort_by_key(|r| std::cmp::Reverse(r.submitted_on));
        Ok(items)
    }

    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<RequestModel>> {
        let mut items: Vec<RequestModel> = locked(&self.store)
            .requests
            .values()
            .filter(|r| r.producer_id == producer_id)
            .cloned()
            .collect();
        items.sort_by_key(|r| std::cmp::Reverse(r.submitted_on));
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// Predefined image fake
// ---------------------------------------------------------------------------

pub struct InMemoryPredefinedImageRepository {
    store: SharedStore,
}

#[async_trait]
impl Load<Postgres, PredefinedImageModel> for InMemoryPredefinedImageRepository {
    async fn load(&self, id: Uuid) -> RegistryResult<PredefinedImageModel> {
        locked(&self.store)
            .images
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("predefined image {id}")))
    }
}

#[async_trait]
impl Create<Postgres, PredefinedImageModel> for InMemoryPredefinedImageRepository {
    async fn create(&self, item: &PredefinedImageModel) -> RegistryResult<()> {
        locked(&self.store).images.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, PredefinedImageModel> for InMemoryPredefinedImageRepository {
    async fn update(&self, item: &PredefinedImageModel) -> RegistryResult<()> {
        locked(&self.store).images.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl PredefinedImageRepository<Postgres> for InMemoryPredefinedImageRepository {
    async fn list_active(&self) -> RegistryResult<Vec<PredefinedImageModel>> {
        let mut items: Vec<PredefinedImageModel> = locked(&self.store)
            .images
            .values()
            .filter(|i| i.active)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// User profile fake
// ---------------------------------------------------------------------------

pub struct InMemoryUserProfileRepository {
    store: SharedStore,
}

#[async_trait]
impl Load<Postgres, UserProfileModel> for InMemoryUserProfileRepository {
    async fn load(&self, id: Uuid) -> RegistryResult<UserProfileModel> {
        locked(&self.store)
            .profiles
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("user profile {id}")))
    }
}

#[async_trait]
impl Create<Postgres, UserProfileModel> for InMemoryUserProfileRepository {
    async fn create(&self, item: &UserProfileModel) -> RegistryResult<()> {
        let mut store = locked(&self.store);
        if store
            .profiles
            .values()
            .any(|p| p.username == item.username || p.email == item.email)
        {
            return Err(RegistryError::Conflict("user profile username/email".into()));
        }
        store.profiles.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, UserProfileModel> for InMemoryUserProfileRepository {
    async fn update(&self, item: &UserProfileModel) -> RegistryResult<()> {
        locked(&self.store).profiles.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl UserProfileRepository<Postgres> for InMemoryUserProfileRepository {
    async fn find_by_username_hash(
        &self,
        hash: i64,
    ) -> RegistryResult<Vec<UserProfileIdxModel>> {
        Ok(locked(&self.store)
            .profiles
            .values()
            .map(|p| p.to_index())
            .filter(|idx| idx.username_hash == Some(hash))
            .collect())
    }

    async fn find_by_email_hash(&self, hash: i64) -> RegistryResult<Vec<UserProfileIdxModel>> {
        Ok(locked(&self.store)
            .profiles
            .values()
            .map(|p| p.to_index())
            .filter(|idx| idx.email_hash == Some(hash))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Change log fake
// ---------------------------------------------------------------------------

pub struct InMemoryChangeLogRepository {
    store: SharedStore,
}

#[async_trait]
impl ChangeLogRepository<Postgres> for InMemoryChangeLogRepository {
    async fn append(&self, entry: &ChangeLogModel) -> RegistryResult<()> {
        locked(&self.store).log.push(entry.clone());
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> RegistryResult<Page<ChangeLogModel>> {
        let mut items = locked(&self.store).log.clone();
        items.sort_by_key(|e| std::cmp::Reverse(e.recorded_at));
        Ok(paged(items, page))
    }

    async fn find_by_entity(
        &self,
        entity_kind: EntityKind,
        entity_id: Uuid,
    ) -> RegistryResult<Vec<ChangeLogModel>> {
        let mut items: Vec<ChangeLogModel> = locked(&self.store)
            .log
            .iter()
            .filter(|e| e.entity_kind == entity_kind && e.entity_id == entity_id)
            .cloned()
            .collect();
        items.sort_by_key(|e| std::cmp::Reverse(e.recorded_at));
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// Collaborator fakes
// ---------------------------------------------------------------------------

pub struct FakeAuthGateway {
    store: SharedStore,
}

impl FakeAuthGateway {
    pub fn created(&self) -> Vec<String> {
        locked(&self.store).identities.clone()
    }
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn create_identity(&self, username: &str, _password: &str) -> RegistryResult<Uuid> {
        locked(&self.store).identities.push(username.to_string());
        Ok(Uuid::new_v4())
    }
}

pub struct FakeFileStore;

#[async_trait]
impl FileStore for FakeFileStore {
    async fn store(&self, folder: &str, filename: &str, _bytes: &[u8]) -> RegistryResult<String> {
        Ok(format!("/media/{folder}/{filename}"))
    }
}

// ---------------------------------------------------------------------------
// Wiring and builders
// ---------------------------------------------------------------------------

pub struct TestRepos {
    store: SharedStore,
    pub producers: Arc<InMemoryProducerRepository>,
    pub parcels: Arc<InMemoryParcelRepository>,
    pub marks: Arc<InMemoryMarkRepository>,
    pub requests: Arc<InMemoryRequestRepository>,
    pub predefined_images: Arc<InMemoryPredefinedImageRepository>,
    pub profiles: Arc<InMemoryUserProfileRepository>,
    pub change_log: Arc<InMemoryChangeLogRepository>,
    pub auth: Arc<FakeAuthGateway>,
    pub files: Arc<FakeFileStore>,
}

impl TestRepos {
    pub fn new() -> Self {
        let store: SharedStore = Arc::default();
        Self {
            producers: Arc::new(InMemoryProducerRepository {
                store: store.clone(),
            }),
            parcels: Arc::new(InMemoryParcelRepository {
                store: store.clone(),
            }),
            marks: Arc::new(InMemoryMarkRepository {
                store: store.clone(),
            }),
            requests: Arc::new(InMemoryRequestRepository {
                store: store.clone(),
            }),
            predefined_images: Arc::new(InMemoryPredefinedImageRepository {
                store: store.clone(),
            }),
            profiles: Arc::new(InMemoryUserProfileRepository {
                store: store.clone(),
            }),
            change_log: Arc::new(InMemoryChangeLogRepository {
                store: store.clone(),
            }),
            auth: Arc::new(FakeAuthGateway {
                store: store.clone(),
            }),
            files: Arc::new(FakeFileStore),
            store,
        }
    }

    pub async fn seed_producer(&self, producer: &ProducerModel) {
        self.producers.create(producer).await.expect("seed producer");
    }

    pub async fn seed_parcel(&self, parcel: &ParcelModel) {
        self.parcels.create(parcel).await.expect("seed parcel");
    }

    pub async fn seed_predefined_image(&self, image: &PredefinedImageModel) {
        self.predefined_images.create(image).await.expect("seed image");
    }

    pub async fn seed_mark_for(&self, producer_id: Uuid, order_number: i64) {
        let mark = MarkModel {
            id: Uuid::new_v4(),
            producer_id,
            parcel_id: Uuid::new_v4(),
            trade_type: TradeType::New,
            order_number,
            issued_on: Utc::now().date_naive(),
            expires_on: None,
            brand_description: clamp_str("Letra P sobre media caña"),
            brand_image: None,
            predefined_image_id: None,
            ear_mark_description: None,
            ear_side: None,
            livestock: LivestockCounts {
                cattle: 5,
                ..LivestockCounts::default()
            },
            stamp_value: None,
            state: MarkState::Active,
            notes: None,
            carnet_front_url: None,
            carnet_back_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.marks.create(&mark).await.expect("seed mark");
    }

    pub fn change_log_entries(&self) -> Vec<ChangeLogModel> {
        locked(&self.store).log.clone()
    }
}

pub fn sample_producer_form(national_id: &str) -> ProducerForm {
    ProducerForm {
        first_name: Some("juan".into()),
        surname: Some("pérez".into()),
        national_id: Some(national_id.into()),
        locality: Some("Belén".into()),
        latitude: Some("-27.5".into()),
        longitude: Some("-67.0".into()),
        state: Some("Pending".into()),
        ..ProducerForm::default()
    }
}

pub fn sample_producer(national_id: &str) -> ProducerModel {
    ProducerModel {
        id: Uuid::new_v4(),
        first_name: clamp_str("Juan"),
        surname: clamp_str("Pérez"),
        national_id: clamp_str(national_id),
        tax_id: None,
        street: None,
        legacy_parcel_name: None,
        locality: clamp_str("Belén"),
        municipality: None,
        department: None,
        province: clamp_str("Catamarca"),
        phone: None,
        email: None,
        latitude: None,
        longitude: None,
        area_hectares: None,
        state: ProducerState::Pending,
        registered_at: Utc::now(),
        notes: None,
    }
}

pub fn sample_parcel(producer_id: Uuid) -> ParcelModel {
    ParcelModel {
        id: Uuid::new_v4(),
        producer_id,
        name: clamp_str("El Algarrobal"),
        district: clamp_str("Londres"),
        department: None,
        area_hectares: None,
        latitude: None,
        longitude: None,
        notes: None,
    }
}

pub fn sample_mark_form(producer_id: Uuid, parcel_id: Uuid, order_number: i64) -> MarkForm {
    MarkForm {
        producer_id: Some(producer_id.to_string()),
        parcel_id: Some(parcel_id.to_string()),
        order_number: Some(order_number.to_string()),
        issued_on: Some(Utc::now().date_naive().to_string()),
        brand_description: Some("Letra P sobre media caña".into()),
        cattle: Some("10".into()),
        ..MarkForm::default()
    }
}

pub fn sample_predefined_image(active: bool) -> PredefinedImageModel {
    PredefinedImageModel {
        id: Uuid::new_v4(),
        name: clamp_str("Media caña izquierda"),
        placement: crate::models::registry::BrandPlacement::Flank,
        description: None,
        image: vec![137, 80, 78, 71],
        active,
    }
}

pub fn sample_request_form(producer_id: Uuid) -> RequestForm {
    RequestForm {
        producer_id: Some(producer_id.to_string()),
        trade_type: Some("New".into()),
        ..RequestForm::default()
    }
}

pub fn sample_user_form(username: &str) -> UserForm {
    UserForm {
        username: Some(username.into()),
        first_name: Some("ana".into()),
        last_name: Some("gómez".into()),
        email: Some(format!("{username}@ejemplo.com")),
        password: Some("Segura#2024".into()),
        password_confirm: Some("Segura#2024".into()),
    }
}
