//! # Report Commands
//!
//! Finalizing a verification and saving its report.
//!
//! ```text
//! finalize_verification()
//!      │
//!      ├── ScanNotActive? ───────────────► ApiError
//!      │
//!      ▼
//! VerificationReport ──► popup summary + bar chart
//!      │
//!      ▼
//! export_report(path?) ──► verification_report_{orderId}.json
//!      │
//!      └── FileWriteFailure ──► ApiError (report kept, retry allowed)
//! ```

use std::path::Path;

use packcheck_core::{VerificationMetrics, VerificationReport};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::Station;

/// One bar of the verification summary chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    pub label: &'static str,
    pub value: usize,
    pub color: &'static str,
}

/// Bars for Expected / Detected / Missing / Extra.
pub fn chart_bars(metrics: &VerificationMetrics) -> Vec<ChartBar> {
    vec![
        ChartBar {
            label: "Expected",
            value: metrics.expected_items_count,
            color: "#3498db",
        },
        ChartBar {
            label: "Detected",
            value: metrics.detected_items_count,
            color: "#2ecc71",
        },
        ChartBar {
            label: "Missing",
            value: metrics.missing_items_count,
            color: "#e74c3c",
        },
        ChartBar {
            label: "Extra",
            value: metrics.extra_items_count,
            color: "#f39c12",
        },
    ]
}

/// The report with its render-ready extras.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub report: VerificationReport,
    pub summary: String,
    pub chart: Vec<ChartBar>,
}

impl From<&VerificationReport> for ReportResponse {
    fn from(report: &VerificationReport) -> Self {
        ReportResponse {
            report: report.clone(),
            summary: report.summary(),
            chart: chart_bars(&report.metrics),
        }
    }
}

/// Where a report was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub path: String,
}

/// Ends the scan and builds the verification report.
pub fn finalize_verification(station: &mut Station) -> Result<ReportResponse, ApiError> {
    debug!("finalize_verification command");

    let now = station.now();
    let report = station.session_mut().finalize(now)?;

    info!(
        order_id = %report.order_id,
        status = %report.verification_status,
        missing = report.metrics.missing_items_count,
        extra = report.metrics.extra_items_count,
        "Verification finalized"
    );
    Ok(ReportResponse::from(report))
}

/// Gets the most recent report.
pub fn get_last_report(station: &Station) -> Result<ReportResponse, ApiError> {
    debug!("get_last_report command");

    let report = station.session().last_report()?;
    Ok(ReportResponse::from(report))
}

/// Saves the most recent report to `target` (file or directory), or to the
/// configured output directory.
pub fn export_report(station: &Station, target: Option<&Path>) -> Result<ExportResponse, ApiError> {
    debug!(target = ?target, "export_report command");

    let path = station.export_last_report(target)?;
    Ok(ExportResponse {
        path: path.display().to_string(),
    })
}
