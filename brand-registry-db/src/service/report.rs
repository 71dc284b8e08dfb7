use brand_registry_api::error::RegistryResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::registry::ProducerModel;

/// Column headers of the producer report, in order.
pub const REPORT_COLUMNS: [&str; 5] = [
    "Name",
    "National ID",
    "Locality",
    "State",
    "Registration Date",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerReportRow {
    pub name: String,
    pub national_id: String,
    pub locality: String,
    pub state: String,
    pub registered_on: String,
}

/// Tabular producer report, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerReport {
    pub title: String,
    pub generated_at: String,
    pub rows: Vec<ProducerReportRow>,
}

/// Renders a report into a document (PDF in production). Rendering is an
/// external collaborator; the core only assembles the table.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &ProducerReport) -> RegistryResult<Vec<u8>>;
}

/// Assemble the report rows. The input is expected in listing order
/// (surname, then first name).
pub fn build(producers: &[ProducerModel], generated_at: DateTime<Utc>) -> ProducerReport {
    ProducerReport {
        title: "Producer Registry Report".to_string(),
        generated_at: generated_at.format("%d/%m/%Y %H:%M").to_string(),
        rows: producers
            .iter()
            .map(|p| ProducerReportRow {
                name: p.display_name(),
                national_id: p.national_id.to_string(),
                locality: p.locality.to_string(),
                state: p.state.to_string(),
                registered_on: p.registered_at.format("%d/%m/%Y").to_string(),
            })
            .collect(),
    }
}
