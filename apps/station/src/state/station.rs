//! # Station State
//!
//! The controller that owns the one verification session.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Station                                              │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │  StationConfig   │   │  SessionState    │   │  Clock           │    │
//! │  │  (read-only)     │   │  (by value)      │   │  fn() -> now     │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  Commands borrow the station mutably, one action at a time.             │
//! │  Single-threaded: no locks.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use packcheck_core::SessionState;
use tracing::info;

use super::config::StationConfig;
use crate::error::{StationError, StationResult};
use crate::export::{resolve_report_path, write_report};

/// Source of "now" for scan timing and report timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// The verification station.
#[derive(Debug)]
pub struct Station {
    config: StationConfig,
    session: SessionState,
    clock: Clock,
}

impl Station {
    /// Creates a station using the system clock.
    pub fn new(config: StationConfig) -> StationResult<Self> {
        Self::with_clock(config, Utc::now)
    }

    /// Creates a station with an explicit clock.
    pub fn with_clock(config: StationConfig, clock: Clock) -> StationResult<Self> {
        config.validate()?;
        let catalog = config.build_catalog()?;
        let session = SessionState::new(catalog, config.session_settings())?;

        info!(
            products = session.catalog().len(),
            range = config.scanner.range,
            "Station initialized"
        );
        Ok(Station {
            config,
            session,
            clock,
        })
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Writes the last report to `target`, or to the configured output
    /// directory under its default name.
    pub fn export_last_report(&self, target: Option<&Path>) -> StationResult<PathBuf> {
        let report = self.session.last_report().map_err(StationError::from)?;
        let path = resolve_report_path(report, target, &self.config.report.output_dir);
        write_report(report, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use packcheck_core::{CoreError, Point};

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_station_has_standard_catalog() {
        let station = Station::with_clock(StationConfig::default(), fixed_clock).unwrap();
        assert_eq!(station.session().catalog().len(), 8);
        assert_eq!(station.now(), fixed_clock());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = StationConfig::default();
        config.scanner.range = -1.0;
        assert!(Station::new(config).is_err());
    }

    #[test]
    fn test_export_without_report() {
        let station = Station::new(StationConfig::default()).unwrap();
        let err = station.export_last_report(None).unwrap_err();
        assert!(matches!(
            err,
            StationError::Core(CoreError::NoReportAvailable)
        ));
    }

    #[test]
    fn test_export_to_output_dir() {
        let dir = std::env::temp_dir().join(format!("packcheck-station-{}", std::process::id()));
        let mut config = StationConfig::default();
        config.report.output_dir = dir.clone();
        let mut station = Station::with_clock(config, fixed_clock).unwrap();

        let now = station.now();
        let session = station.session_mut();
        session.add_to_cart("Phone Case", 1).unwrap();
        session.confirm_order().unwrap();
        session.place_item("Phone Case", Point::new(100.0, 100.0)).unwrap();
        session.start_scan(now).unwrap();
        session.move_scanner(Point::new(100.0, 100.0));
        session.finalize(now).unwrap();

        let path = station.export_last_report(None).unwrap();
        let exists = path.exists();
        let _ = std::fs::remove_dir_all(&dir);

        assert!(exists);
        assert_eq!(
            path,
            dir.join("verification_report_Custom_Order_20240301120000.json")
        );
    }
}
