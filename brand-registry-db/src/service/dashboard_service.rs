use brand_registry_api::error::RegistryResult;
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use sqlx::Database;
use std::sync::Arc;

use super::authorization::{ensure, Action, Actor};
use crate::dashboard::{
    self, DashboardSummary, MonthlyActivity,
};
use crate::models::registry::{
    MarkModel, ProducerModel, ProducerState, RequestModel, TradeType,
};
use crate::repository::{
    MarkRepository, ParcelRepository, ProducerRepository, RequestRepository,
};
use uuid::Uuid;

/// Months covered by the activity rollup.
const ACTIVITY_MONTHS: usize = 6;
/// Horizon of the expiring-marks panel, in days.
const EXPIRY_HORIZON_DAYS: i64 = 30;
/// Window of the recent-producers panel, in days.
const RECENT_PRODUCER_DAYS: i64 = 7;
/// Panel caps.
const TOP_PRODUCERS: usize = 5;
const RECENT_PRODUCERS_SHOWN: usize = 5;
const EXPIRING_MARKS_SHOWN: usize = 5;
const RECENT_REQUESTS_SHOWN: usize = 10;

/// A ranked producer on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct TopProducer {
    pub producer_id: Uuid,
    pub display_name: String,
    pub mark_count: usize,
}

/// Everything the dashboard view renders.
#[derive(Debug, Clone)]
pub struct DashboardOverview {
    pub summary: DashboardSummary,
    pub producers_by_state: Vec<(ProducerState, usize)>,
    pub marks_by_trade_type: Vec<(TradeType, usize)>,
    pub monthly_activity: Vec<MonthlyActivity>,
    pub top_producers: Vec<TopProducer>,
    pub expiring_marks: Vec<MarkModel>,
    pub recent_producers: Vec<ProducerModel>,
    pub recent_requests: Vec<RequestModel>,
    /// Stamp-value revenue of the current calendar month.
    pub stamp_revenue: Decimal,
}

/// Read-only dashboard assembly over the repositories.
pub struct DashboardService<DB: Database> {
    producers: Arc<dyn ProducerRepository<DB>>,
    parcels: Arc<dyn ParcelRepository<DB>>,
    marks: Arc<dyn MarkRepository<DB>>,
    requests: Arc<dyn RequestRepository<DB>>,
}

impl<DB: Database> DashboardService<DB> {
    pub fn new(
        producers: Arc<dyn ProducerRepository<DB>>,
        parcels: Arc<dyn ParcelRepository<DB>>,
        marks: Arc<dyn MarkRepository<DB>>,
        requests: Arc<dyn RequestRepository<DB>>,
    ) -> Self {
        Self {
            producers,
            parcels,
            marks,
            requests,
        }
    }

    pub async fn overview(&self, actor: &Actor) -> RegistryResult<DashboardOverview> {
        ensure(actor, Action::View)?;

        let now = Utc::now();
        let today = now.date_naive();

        let producers = self.producers.load_all().await?;
        let parcel_count = self.parcels.count().await?;
        let marks = self.marks.load_all().await?;
        let requests = self.requests.load_all().await?;

        let top_producers = dashboard::top_producers_by_mark_count(&marks, TOP_PRODUCERS)
            .into_iter()
            .map(|(producer_id, mark_count)| TopProducer {
                producer_id,
                display_name: producers
                    .iter()
                    .find(|p| p.id == producer_id)
                    .map(|p| p.display_name())
                    .unwrap_or_default(),
                mark_count,
            })
            .collect();

        let mut expiring_marks = dashboard::expiring_within(&marks, today, EXPIRY_HORIZON_DAYS);
        expiring_marks.truncate(EXPIRING_MARKS_SHOWN);

        let mut recent_producers =
            dashboard::recent_producers(&producers, now, RECENT_PRODUCER_DAYS);
        recent_producers.truncate(RECENT_PRODUCERS_SHOWN);

        // Requests arrive ordered by submission date descending.
        let recent_requests = requests.iter().take(RECENT_REQUESTS_SHOWN).cloned().collect();

        Ok(DashboardOverview {
            summary: dashboard::summary(&producers, parcel_count, &marks, &requests, today),
            producers_by_state: dashboard::producers_by_state(&producers),
            marks_by_trade_type: dashboard::marks_by_trade_type(&marks),
            monthly_activity: dashboard::monthly_request_activity(
                &requests,
                today,
                ACTIVITY_MONTHS,
            ),
            top_producers,
            expiring_marks,
            recent_producers,
            recent_requests,
            stamp_revenue: dashboard::stamp_revenue_for_month(
                &marks,
                today.year(),
                today.month(),
            ),
        })
    }
}

impl<DB: Database> Clone for DashboardService<DB> {
    fn clone(&self) -> Self {
        Self {
            producers: self.producers.clone(),
            parcels: self.parcels.clone(),
            marks: self.marks.clone(),
            requests: self.requests.clone(),
        }
    }
}
