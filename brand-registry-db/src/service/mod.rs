pub mod account_service;
mod audit;
pub mod authorization;
pub mod change_log_service;
pub mod collaborators;
pub mod dashboard_service;
pub mod geojson;
pub mod mark_service;
pub mod producer_service;
pub mod report;
pub mod request_service;

// Re-exports
pub use account_service::*;
pub use authorization::*;
pub use change_log_service::*;
pub use collaborators::*;
pub use dashboard_service::*;
pub use mark_service::*;
pub use producer_service::*;
pub use report::{ProducerReport, ProducerReportRow, ReportRenderer, REPORT_COLUMNS};
pub use request_service::*;
