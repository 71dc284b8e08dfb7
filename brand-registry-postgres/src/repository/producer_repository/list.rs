use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::{ProducerModel, ProducerState};
use brand_registry_db::repository::{Page, PageRequest, ProducerFilter};
use sqlx::Row;

use super::repo_impl::ProducerRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

const FILTER_WHERE: &str = r#"
    ($1::text IS NULL
        OR first_name ILIKE '%' || $1 || '%'
        OR surname ILIKE '%' || $1 || '%'
        OR national_id ILIKE '%' || $1 || '%'
        OR legacy_parcel_name ILIKE '%' || $1 || '%')
    AND ($2::producer_state IS NULL OR state = $2)
    AND ($3::text IS NULL OR locality ILIKE '%' || $3 || '%')
    AND ($4::text IS NULL OR department ILIKE '%' || $4 || '%')
"#;

impl ProducerRepositoryImpl {
    pub(super) async fn list_impl(
        &self,
        filter: &ProducerFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<ProducerModel>> {
        let query: Option<&str> = filter.query.as_deref();
        let state: Option<ProducerState> = filter.state;
        let locality: Option<&str> = filter.locality.as_deref();
        let department: Option<&str> = filter.department.as_deref();

        let total: i64 = sqlx::query(&format!(
            "SELECT COUNT(*) AS total FROM producer WHERE {FILTER_WHERE}"
        ))
        .bind(query)
        .bind(state)
        .bind(locality)
        .bind(department)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_err("count producers", e))?
        .get("total");

        let rows = sqlx::query(&format!(
            "SELECT * FROM producer WHERE {FILTER_WHERE} ORDER BY surname, first_name LIMIT $5 OFFSET $6"
        ))
        .bind(query)
        .bind(state)
        .bind(locality)
        .bind(department)
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("list producers", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(ProducerModel::try_from_row(&row).map_err(|e| map_row_err("list producers", e))?);
        }
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }

    pub(super) async fn load_all_impl(&self) -> RegistryResult<Vec<ProducerModel>> {
        let rows = sqlx::query("SELECT * FROM producer ORDER BY surname, first_name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("load producers", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(ProducerModel::try_from_row(&row).map_err(|e| map_row_err("load producers", e))?);
        }
        Ok(items)
    }

    pub(super) async fn geolocated_impl(&self) -> RegistryResult<Vec<ProducerModel>> {
        let rows = sqlx::query(
            "SELECT * FROM producer WHERE latitude IS NOT NULL AND longitude IS NOT NULL ORDER BY surname, first_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("load geolocated producers", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(
                ProducerModel::try_from_row(&row)
                    .map_err(|e| map_row_err("load geolocated producers", e))?,
            );
        }
        Ok(items)
    }
}
