//! Read-side dashboard aggregation.
//!
//! Every function here is a total computation over already-loaded
//! collections: empty input yields zero counts or empty lists, never an
//! error. Loading the collections (and their ordering) is repository work.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::registry::{
    MarkModel, MarkState, ProducerModel, ProducerState, RequestModel, RequestState, TradeType,
};

/// Headline counters for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub producers: usize,
    pub parcels: usize,
    pub active_marks: usize,
    pub pending_requests: usize,
    /// Requests submitted in the calendar month of `today`.
    pub requests_this_month: usize,
}

/// One calendar-month bucket of request activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyActivity {
    pub year: i32,
    pub month: u32,
    pub requests: usize,
}

pub fn summary(
    producers: &[ProducerModel],
    parcel_count: usize,
    marks: &[MarkModel],
    requests: &[RequestModel],
    today: NaiveDate,
) -> DashboardSummary {
    DashboardSummary {
        producers: producers.len(),
        parcels: parcel_count,
        active_marks: marks.iter().filter(|m| m.state == MarkState::Active).count(),
        pending_requests: requests
            .iter()
            .filter(|r| r.state == RequestState::Pending)
            .count(),
        requests_this_month: requests
            .iter()
            .filter(|r| {
                r.submitted_on.year() == today.year() && r.submitted_on.month() == today.month()
            })
            .count(),
    }
}

/// Producer counts per lifecycle state, in declaration order.
pub fn producers_by_state(producers: &[ProducerModel]) -> Vec<(ProducerState, usize)> {
    ProducerState::ALL
        .iter()
        .map(|&state| {
            let count = producers.iter().filter(|p| p.state == state).count();
            (state, count)
        })
        .collect()
}

/// Mark counts per trade type, in declaration order.
pub fn marks_by_trade_type(marks: &[MarkModel]) -> Vec<(TradeType, usize)> {
    TradeType::ALL
        .iter()
        .map(|&trade_type| {
            let count = marks.iter().filter(|m| m.trade_type == trade_type).count();
            (trade_type, count)
        })
        .collect()
}

/// Request totals per calendar month for the trailing `months` window ending
/// at the month of `today`, oldest bucket first and zero-filled.
pub fn monthly_request_activity(
    requests: &[RequestModel],
    today: NaiveDate,
    months: usize,
) -> Vec<MonthlyActivity> {
    let mut buckets = Vec::with_capacity(months);
    let (mut year, mut month) = (today.year(), today.month());
    for _ in 0..months {
        buckets.push((year, month));
        (year, month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
    }
    buckets.reverse();

    buckets
        .into_iter()
        .map(|(year, month)| MonthlyActivity {
            year,
            month,
            requests: requests
                .iter()
                .filter(|r| r.submitted_on.year() == year && r.submitted_on.month() == month)
                .count(),
        })
        .collect()
}

/// Producers ranked by mark count, highest first; ties break on the id so
/// the ranking is deterministic. At most `n` entries, producers without
/// marks never appear.
pub fn top_producers_by_mark_count(marks: &[MarkModel], n: usize) -> Vec<(Uuid, usize)> {
    let mut counts: HashMap<Uuid, usize> = HashMap::new();
    for mark in marks {
        *counts.entry(mark.producer_id).or_default() += 1;
    }

    let mut ranked: Vec<(Uuid, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

/// Active marks whose expiry falls within `horizon_days` of `today`,
/// soonest expiry first. Already-expired marks are not included.
pub fn expiring_within(marks: &[MarkModel], today: NaiveDate, horizon_days: i64) -> Vec<MarkModel> {
    let horizon = today + Duration::days(horizon_days);
    let mut expiring: Vec<MarkModel> = marks
        .iter()
        .filter(|m| m.state == MarkState::Active)
        .filter(|m| {
            m.expires_on
                .map(|expires| expires >= today && expires <= horizon)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    expiring.sort_by_key(|m| m.expires_on);
    expiring
}

/// Sum of stamp values over marks issued in the given calendar month.
pub fn stamp_revenue_for_month(marks: &[MarkModel], year: i32, month: u32) -> Decimal {
    marks
        .iter()
        .filter(|m| m.issued_on.year() == year && m.issued_on.month() == month)
        .filter_map(|m| m.stamp_value)
        .sum()
}

/// Producers registered within the trailing `days`, newest first.
pub fn recent_producers(
    producers: &[ProducerModel],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<ProducerModel> {
    let cutoff = now - Duration::days(days);
    let mut recent: Vec<ProducerModel> = producers
        .iter()
        .filter(|p| p.registered_at >= cutoff)
        .cloned()
        .collect();
    recent.sort_by_key(|p| std::cmp::Reverse(p.registered_at));
    recent
}
