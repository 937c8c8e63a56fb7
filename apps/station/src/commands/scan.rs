//! # Scan Commands
//!
//! Scan mode, scanner movement and detection.
//!
//! ## Scan Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start_scan() ──► drag scanner ──► move_scanner(x, y) per motion event │
//! │                        │                  │                             │
//! │                        │                  ├── events: newly read tags   │
//! │                        │                  └── progress: per product     │
//! │                        │                                                │
//! │                        └──► auto_sweep() walks the whole package        │
//! │                                                                         │
//! │  finalize_verification() (report.rs) ends scan mode                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use packcheck_core::detector::Scanner;
use packcheck_core::validation::parse_scanner_range;
use packcheck_core::{DetectionEvent, LineProgress, Point, SessionState};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::Station;

/// Scanner state plus whatever the last action detected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub scanner: Scanner,
    pub events: Vec<DetectionEvent>,
    pub detected_count: usize,
    pub progress: Vec<LineProgress>,
}

impl ScanResponse {
    fn new(session: &SessionState, events: Vec<DetectionEvent>) -> Self {
        ScanResponse {
            scanner: *session.scanner(),
            events,
            detected_count: session.detected().len(),
            progress: session.progress(),
        }
    }
}

/// Enters scan mode.
pub fn start_scan(station: &mut Station) -> Result<ScanResponse, ApiError> {
    debug!("start_scan command");

    let now = station.now();
    let session = station.session_mut();
    session.start_scan(now)?;

    info!(items = session.placed_items().len(), "Scan started");
    Ok(ScanResponse::new(session, Vec::new()))
}

/// Moves the scanner to `(x, y)`. Detects only while scanning.
pub fn move_scanner(station: &mut Station, x: f64, y: f64) -> ScanResponse {
    debug!(x, y, "move_scanner command");

    let session = station.session_mut();
    let events = session.move_scanner(Point::new(x, y));
    for event in &events {
        info!(tag = %event.tag, product = %event.product_name, "Tag detected");
    }
    ScanResponse::new(session, events)
}

/// Applies the range text box. Unparsable text falls back to the
/// configured default range.
pub fn set_scanner_range(station: &mut Station, range_text: &str) -> Scanner {
    debug!(range_text, "set_scanner_range command");

    if parse_scanner_range(range_text).is_none() {
        warn!(
            range_text,
            fallback = station.config().scanner.range,
            "Invalid scanner range, using default"
        );
    }

    let session = station.session_mut();
    session.set_scanner_range(range_text);
    *session.scanner()
}

/// Sweeps the scanner across the whole package.
pub fn auto_sweep(station: &mut Station) -> Result<ScanResponse, ApiError> {
    debug!("auto_sweep command");

    let step = station.config().scanner.sweep_step;
    let session = station.session_mut();
    let events = session.auto_sweep(step)?;

    info!(detected = events.len(), "Auto sweep finished");
    Ok(ScanResponse::new(session, events))
}

/// Per-product detection progress.
pub fn get_progress(station: &Station) -> Vec<LineProgress> {
    debug!("get_progress command");
    station.session().progress()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order::{add_to_cart, confirm_order};
    use crate::commands::package::place_item;
    use crate::error::ErrorCode;
    use crate::state::StationConfig;
    use packcheck_core::ProgressState;

    fn placed_station() -> Station {
        let mut station = Station::new(StationConfig::default()).unwrap();
        add_to_cart(&mut station, "USB-C Cable", "2").unwrap();
        confirm_order(&mut station).unwrap();
        place_item(&mut station, "USB-C Cable", 100.0, 100.0).unwrap();
        place_item(&mut station, "USB-C Cable", 500.0, 500.0).unwrap();
        station
    }

    #[test]
    fn test_start_scan_with_empty_package() {
        let mut station = Station::new(StationConfig::default()).unwrap();
        add_to_cart(&mut station, "USB-C Cable", "1").unwrap();
        confirm_order(&mut station).unwrap();

        let err = start_scan(&mut station).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyPackage);
    }

    #[test]
    fn test_scanner_detects_while_scanning_only() {
        let mut station = placed_station();

        let idle = move_scanner(&mut station, 100.0, 100.0);
        assert!(idle.events.is_empty());

        let started = start_scan(&mut station).unwrap();
        assert!(started.scanner.active);

        let first = move_scanner(&mut station, 100.0, 100.0);
        assert_eq!(first.events.len(), 1);
        assert_eq!(first.events[0].tag, "RFID_USBC_2A8X-1");
        assert_eq!(first.progress[0].state, ProgressState::Partial);

        let again = move_scanner(&mut station, 100.0, 100.0);
        assert!(again.events.is_empty());
        assert_eq!(again.detected_count, 1);
    }

    #[test]
    fn test_set_scanner_range() {
        let mut station = placed_station();
        assert_eq!(set_scanner_range(&mut station, "150").range, 150.0);
        assert_eq!(set_scanner_range(&mut station, "abc").range, 80.0);
    }

    #[test]
    fn test_auto_sweep() {
        let mut station = placed_station();

        let err = auto_sweep(&mut station).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScanNotActive);

        start_scan(&mut station).unwrap();
        let response = auto_sweep(&mut station).unwrap();

        assert_eq!(response.events.len(), 2);
        assert!(get_progress(&station)
            .iter()
            .all(|p| p.state == ProgressState::Detected));
    }
}
