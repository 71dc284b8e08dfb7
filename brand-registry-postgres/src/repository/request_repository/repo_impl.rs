use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::{RequestModel, RequestState, RequestTradeType};
use brand_registry_db::repository::{Page, PageRequest, RequestFilter, RequestRepository};
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{get_optional_heapless_string, map_db_err, map_row_err, TryFromRow};

pub struct RequestRepositoryImpl {
    pub pool: PgPool,
}

impl RequestRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_ordered(&self, sql: &str, bind: Option<Uuid>) -> RegistryResult<Vec<RequestModel>> {
        let mut query = sqlx::query(sql);
        if let Some(id) = bind {
            query = query.bind(id);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("list requests", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(RequestModel::try_from_row(&row).map_err(|e| map_row_err("list requests", e))?);
        }
        Ok(items)
    }
}

impl TryFromRow<PgRow> for RequestModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(RequestModel {
            id: row.get("id"),
            producer_id: row.get("producer_id"),
            mark_id: row.try_get("mark_id").ok(),
            trade_type: row.get("trade_type"),
            state: row.get("state"),
            submitted_on: row.get("submitted_on"),
            attachment_url: get_optional_heapless_string(row, "attachment_url")?,
            notes: get_optional_heapless_string(row, "notes")?,
        })
    }
}

#[async_trait]
impl RequestRepository<Postgres> for RequestRepositoryImpl {
    async fn list(
        &self,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<RequestModel>> {
        let state: Option<RequestState> = filter.state;
        let trade_type: Option<RequestTradeType> = filter.trade_type;
        let filter_where = r#"
            ($1::request_state IS NULL OR state = $1)
            AND ($2::request_trade_type IS NULL OR trade_type = $2)
        "#;

        let total: i64 = sqlx::query(&format!(
            "SELECT COUNT(*) AS total FROM request WHERE {filter_where}"
        ))
        .bind(state)
        .bind(trade_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_err("count requests", e))?
        .get("total");

        let rows = sqlx::query(&format!(
            "SELECT * FROM request WHERE {filter_where} ORDER BY submitted_on DESC LIMIT $3 OFFSET $4"
        ))
        .bind(state)
        .bind(trade_type)
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("list requests", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(RequestModel::try_from_row(&row).map_err(|e| map_row_err("list requests", e))?);
        }
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }

    async fn load_all(&self) -> RegistryResult<Vec<RequestModel>> {
        self.fetch_ordered("SELECT * FROM request ORDER BY submitted_on DESC", None)
            .await
    }

    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<RequestModel>> {
        self.fetch_ordered(
            "SELECT * FROM request WHERE producer_id = $1 ORDER BY submitted_on DESC",
            Some(producer_id),
        )
        .await
    }
}
