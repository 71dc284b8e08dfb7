use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::ProducerIdxModel;

use super::repo_impl::ProducerRepositoryImpl;

impl ProducerRepositoryImpl {
    pub(super) async fn find_by_national_id_hash_impl(
        &self,
        national_id_hash: i64,
    ) -> RegistryResult<Vec<ProducerIdxModel>> {
        let cache = self.idx_cache.read();
        Ok(cache.get_by_i64_index("national_id_hash", &national_id_hash))
    }
}
