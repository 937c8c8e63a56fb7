//! # Report Export
//!
//! Writes a [`VerificationReport`] to disk as UTF-8 JSON with a four-space
//! indent.
//!
//! ```text
//! target            resolved path
//! ──────            ─────────────
//! None              {output_dir}/verification_report_{orderId}.json
//! existing dir/     {dir}/verification_report_{orderId}.json
//! some/file.json    some/file.json
//! ```

use std::path::{Path, PathBuf};

use packcheck_core::VerificationReport;
use tracing::{error, info};

use crate::error::{StationError, StationResult};

/// Picks where a report should go.
pub fn resolve_report_path(
    report: &VerificationReport,
    target: Option<&Path>,
    output_dir: &Path,
) -> PathBuf {
    match target {
        Some(path) if path.is_dir() => path.join(report.default_filename()),
        Some(path) => path.to_path_buf(),
        None => output_dir.join(report.default_filename()),
    }
}

/// Writes the report, creating missing parent directories.
///
/// On failure nothing in memory changes, so the caller can retry with
/// another path.
pub fn write_report(report: &VerificationReport, path: &Path) -> StationResult<PathBuf> {
    let json = report.to_pretty_json()?;

    let result = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|_| std::fs::write(path, json));

    match result {
        Ok(()) => {
            info!(path = %path.display(), order_id = %report.order_id, "Report saved");
            Ok(path.to_path_buf())
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Report save failed");
            Err(StationError::file_write(path, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use packcheck_core::{VerificationMetrics, VerificationStatus};

    fn report() -> VerificationReport {
        VerificationReport {
            order_id: "ORD-EXPORT".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            verification_status: VerificationStatus::Success,
            scan_duration_seconds: 2.5,
            metrics: VerificationMetrics::default(),
            expected_items: Default::default(),
            detected_items: Default::default(),
            missing_items_detail: Default::default(),
            extra_items_detail: Default::default(),
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("packcheck-export-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_report_path() {
        let report = report();
        let dir = temp_dir("resolve");

        assert_eq!(
            resolve_report_path(&report, None, Path::new("out")),
            Path::new("out").join("verification_report_ORD-EXPORT.json")
        );
        assert_eq!(
            resolve_report_path(&report, Some(dir.as_path()), Path::new("out")),
            dir.join("verification_report_ORD-EXPORT.json")
        );
        assert_eq!(
            resolve_report_path(&report, Some(Path::new("custom.json")), Path::new("out")),
            PathBuf::from("custom.json")
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_report() {
        let dir = temp_dir("write");
        let path = dir.join("nested").join("report.json");

        let written = write_report(&report(), &path).unwrap();
        let contents = std::fs::read_to_string(&written).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert!(contents.starts_with("{\n    \"orderId\": \"ORD-EXPORT\""));
        let parsed: VerificationReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, report());
    }

    #[test]
    fn test_write_failure() {
        let dir = temp_dir("fail");
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_report(&report(), &blocker.join("report.json")).unwrap_err();
        let _ = std::fs::remove_dir_all(&dir);

        assert!(matches!(err, StationError::FileWriteFailure { .. }));
    }
}
