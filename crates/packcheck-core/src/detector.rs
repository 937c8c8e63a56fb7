//! # Proximity Detector
//!
//! Decides which placed items the scanner can read from where it is.
//!
//! ```text
//!            range
//!         ◄───────►
//!     ┌ ─ ─ ─ ─ ─ ─ ─ ┐
//!       ·   [A]  ·          A: |A - S| ≤ range → detected
//!     │ ·     S     · │     B: |B - S| > range → untouched
//!       ·        ·   [B]
//!     └ ─ ─ ─ ─ ─ ─ ─ ┘
//! ```
//!
//! Detection is monotonic: an item flips to detected once and stays there,
//! so re-running a tick at the same spot produces no new events.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{DetectionEvent, PlacedItem, Point};
use crate::DEFAULT_SCANNER_RANGE;

/// Where the simulated scanner sits and how far it reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scanner {
    pub position: Point,
    pub range: f64,
    pub active: bool,
}

impl Scanner {
    /// Scanner parked at its start position (100, 100).
    pub fn new(range: f64) -> Self {
        Scanner {
            position: Point::new(100.0, 100.0),
            range,
            active: false,
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new(DEFAULT_SCANNER_RANGE)
    }
}

/// Runs one detection pass.
///
/// Every undetected item within `scanner_range` (inclusive) of
/// `scanner_position` is marked detected. Events come back in item order.
pub fn scan_tick(
    items: &mut [PlacedItem],
    scanner_position: Point,
    scanner_range: f64,
) -> Vec<DetectionEvent> {
    items
        .iter_mut()
        .filter(|item| !item.detected)
        .filter(|item| item.position.distance_to(scanner_position) <= scanner_range)
        .map(|item| {
            item.detected = true;
            DetectionEvent::from(&*item)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tag: &str, x: f64, y: f64) -> PlacedItem {
        PlacedItem::new("USB-C Cable", tag, Point::new(x, y))
    }

    #[test]
    fn test_detects_within_range_only() {
        let mut items = vec![
            item("RFID_USBC_2A8X-1", 100.0, 100.0),
            item("RFID_USBC_2A8X-2", 400.0, 400.0),
        ];

        let events = scan_tick(&mut items, Point::new(120.0, 100.0), 80.0);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tag, "RFID_USBC_2A8X-1");
        assert!(items[0].detected);
        assert!(!items[1].detected);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut items = vec![item("RFID_USBC_2A8X-1", 180.0, 100.0)];
        let events = scan_tick(&mut items, Point::new(100.0, 100.0), 80.0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_tick_is_idempotent() {
        let mut items = vec![
            item("RFID_USBC_2A8X-1", 100.0, 100.0),
            item("RFID_USBC_2A8X-2", 110.0, 110.0),
        ];
        let scanner = Point::new(105.0, 105.0);

        let first = scan_tick(&mut items, scanner, 80.0);
        let second = scan_tick(&mut items, scanner, 80.0);

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
        assert!(items.iter().all(|i| i.detected));
    }

    #[test]
    fn test_detected_items_stay_detected_when_scanner_moves_away() {
        let mut items = vec![item("RFID_USBC_2A8X-1", 100.0, 100.0)];
        scan_tick(&mut items, Point::new(100.0, 100.0), 80.0);
        let events = scan_tick(&mut items, Point::new(600.0, 600.0), 80.0);

        assert!(events.is_empty());
        assert!(items[0].detected);
    }

    #[test]
    fn test_events_follow_item_order() {
        let mut items = vec![
            item("RFID_USBC_2A8X-2", 110.0, 100.0),
            item("RFID_USBC_2A8X-1", 100.0, 100.0),
        ];
        let events = scan_tick(&mut items, Point::new(100.0, 100.0), 50.0);
        let tags: Vec<&str> = events.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["RFID_USBC_2A8X-2", "RFID_USBC_2A8X-1"]);
    }

    #[test]
    fn test_default_scanner() {
        let scanner = Scanner::default();
        assert_eq!(scanner.range, DEFAULT_SCANNER_RANGE);
        assert_eq!(scanner.position, Point::new(100.0, 100.0));
        assert!(!scanner.active);
    }
}
