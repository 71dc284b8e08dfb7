use brand_registry_api::error::RegistryResult;
use brand_registry_db::service::{
    AccountService, AuthGateway, ChangeLogService, DashboardService, FileStore, MarkService,
    ProducerService, RequestService,
};
use sqlx::{PgPool, Postgres};
use std::sync::Arc;

use crate::repository::change_log_repository::ChangeLogRepositoryImpl;
use crate::repository::mark_repository::MarkRepositoryImpl;
use crate::repository::parcel_repository::ParcelRepositoryImpl;
use crate::repository::predefined_image_repository::PredefinedImageRepositoryImpl;
use crate::repository::producer_repository::ProducerRepositoryImpl;
use crate::repository::request_repository::RequestRepositoryImpl;
use crate::repository::user_profile_repository::UserProfileRepositoryImpl;

/// Container for every registry repository, sharing one connection pool.
/// The index-cache-backed repositories seed their caches at build time.
pub struct RegistryRepositories {
    pub producer_repository: Arc<ProducerRepositoryImpl>,
    pub parcel_repository: Arc<ParcelRepositoryImpl>,
    pub mark_repository: Arc<MarkRepositoryImpl>,
    pub request_repository: Arc<RequestRepositoryImpl>,
    pub predefined_image_repository: Arc<PredefinedImageRepositoryImpl>,
    pub user_profile_repository: Arc<UserProfileRepositoryImpl>,
    pub change_log_repository: Arc<ChangeLogRepositoryImpl>,
}

impl RegistryRepositories {
    pub async fn new(pool: PgPool) -> RegistryResult<Self> {
        Ok(Self {
            producer_repository: Arc::new(ProducerRepositoryImpl::new(pool.clone()).await?),
            parcel_repository: Arc::new(ParcelRepositoryImpl::new(pool.clone())),
            mark_repository: Arc::new(MarkRepositoryImpl::new(pool.clone()).await?),
            request_repository: Arc::new(RequestRepositoryImpl::new(pool.clone())),
            predefined_image_repository: Arc::new(PredefinedImageRepositoryImpl::new(pool.clone())),
            user_profile_repository: Arc::new(UserProfileRepositoryImpl::new(pool.clone()).await?),
            change_log_repository: Arc::new(ChangeLogRepositoryImpl::new(pool)),
        })
    }

    /// Wire the service layer over these repositories and the external
    /// collaborators.
    pub fn services(
        &self,
        files: Arc<dyn FileStore>,
        auth: Arc<dyn AuthGateway>,
    ) -> RegistryServices {
        RegistryServices {
            producers: ProducerService::new(
                self.producer_repository.clone(),
                self.parcel_repository.clone(),
                self.mark_repository.clone(),
                self.request_repository.clone(),
                self.change_log_repository.clone(),
            ),
            marks: MarkService::new(
                self.mark_repository.clone(),
                self.parcel_repository.clone(),
                self.producer_repository.clone(),
                self.predefined_image_repository.clone(),
                self.change_log_repository.clone(),
                files.clone(),
            ),
            requests: RequestService::new(
                self.request_repository.clone(),
                self.producer_repository.clone(),
                self.mark_repository.clone(),
                self.change_log_repository.clone(),
                files,
            ),
            accounts: AccountService::new(
                self.user_profile_repository.clone(),
                auth,
                self.change_log_repository.clone(),
            ),
            dashboard: DashboardService::new(
                self.producer_repository.clone(),
                self.parcel_repository.clone(),
                self.mark_repository.clone(),
                self.request_repository.clone(),
            ),
            change_log: ChangeLogService::new(self.change_log_repository.clone()),
        }
    }
}

/// The request-handler flows, bound to PostgreSQL.
pub struct RegistryServices {
    pub producers: ProducerService<Postgres>,
    pub marks: MarkService<Postgres>,
    pub requests: RequestService<Postgres>,
    pub accounts: AccountService<Postgres>,
    pub dashboard: DashboardService<Postgres>,
    pub change_log: ChangeLogService<Postgres>,
}
