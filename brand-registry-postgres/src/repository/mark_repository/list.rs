use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::{MarkModel, MarkState, TradeType};
use brand_registry_db::repository::{MarkFilter, Page, PageRequest};
use sqlx::Row;
use uuid::Uuid;

use super::repo_impl::MarkRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

const FILTER_WHERE: &str = r#"
    ($1::text IS NULL
        OR p.first_name ILIKE '%' || $1 || '%'
        OR p.surname ILIKE '%' || $1 || '%'
        OR CAST(m.order_number AS TEXT) LIKE '%' || $1 || '%')
    AND ($2::mark_state IS NULL OR m.state = $2)
    AND ($3::trade_type IS NULL OR m.trade_type = $3)
"#;

impl MarkRepositoryImpl {
    pub(super) async fn list_impl(
        &self,
        filter: &MarkFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<MarkModel>> {
        let query: Option<&str> = filter.query.as_deref();
        let state: Option<MarkState> = filter.state;
        let trade_type: Option<TradeType> = filter.trade_type;

        let total: i64 = sqlx::query(&format!(
            "SELECT COUNT(*) AS total FROM mark m JOIN producer p ON p.id = m.producer_id WHERE {FILTER_WHERE}"
        ))
        .bind(query)
        .bind(state)
        .bind(trade_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_err("count marks", e))?
        .get("total");

        let rows = sqlx::query(&format!(
            "SELECT m.* FROM mark m JOIN producer p ON p.id = m.producer_id WHERE {FILTER_WHERE} ORDER BY m.issued_on DESC LIMIT $4 OFFSET $5"
        ))
        .bind(query)
        .bind(state)
        .bind(trade_type)
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("list marks", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(MarkModel::try_from_row(&row).map_err(|e| map_row_err("list marks", e))?);
        }
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }

    pub(super) async fn load_all_impl(&self) -> RegistryResult<Vec<MarkModel>> {
        let rows = sqlx::query("SELECT * FROM mark ORDER BY issued_on DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("load marks", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(MarkModel::try_from_row(&row).map_err(|e| map_row_err("load marks", e))?);
        }
        Ok(items)
    }

    pub(super) async fn find_by_producer_id_impl(
        &self,
        producer_id: Uuid,
    ) -> RegistryResult<Vec<MarkModel>> {
        let rows = sqlx::query("SELECT * FROM mark WHERE producer_id = $1 ORDER BY issued_on DESC")
            .bind(producer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("list producer marks", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(
                MarkModel::try_from_row(&row).map_err(|e| map_row_err("list producer marks", e))?,
            );
        }
        Ok(items)
    }

}
