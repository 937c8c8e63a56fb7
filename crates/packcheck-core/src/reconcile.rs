//! # Reconciliation Engine
//!
//! Compares what the order says should be in the package with what the
//! scanner actually read, and produces the [`VerificationReport`].
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  expected = {A-1, A-2, B-1}        detected = {A-1, B-1, C-1}           │
//! │                                                                         │
//! │  1. missing = expected − detected = {A-2}                               │
//! │     extra   = detected − expected = {C-1}                               │
//! │                                                                         │
//! │  2. tag → product name                                                  │
//! │     placed items first, then the expected set's own record              │
//! │                                                                         │
//! │  3. status: missing? MISMATCH : extra? CAUTION : SUCCESS                │
//! │                                                                         │
//! │  4. counts + per-product breakdowns → VerificationReport                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`finalize`] is a pure function of its input: no clock, no session.

use chrono::{DateTime, Utc};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use ts_rs::TS;

use crate::tags::{DetectedTagSet, ExpectedTagSet};
use crate::types::{tally, ItemCounts, PlacedItem, VerificationStatus};

// =============================================================================
// Report
// =============================================================================

/// Headline counts of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMetrics {
    pub expected_items_count: usize,
    pub placed_items_count: usize,
    pub detected_items_count: usize,
    pub missing_items_count: usize,
    pub extra_items_count: usize,
}

/// The outcome of one finalize action. Immutable once built.
///
/// Serializes to the archived report format:
/// ```json
/// {
///     "orderId": "Custom_Order_20240301120000",
///     "timestamp": "2024-03-01T12:00:00Z",
///     "verificationStatus": "MISMATCH",
///     "scanDurationSeconds": 12.5,
///     "metrics": { "expectedItemsCount": 2, ... },
///     "expectedItems": { "USB-C Cable": 2 },
///     "detectedItems": { "USB-C Cable": 1 },
///     "missingItemsDetail": { "USB-C Cable": 1 },
///     "extraItemsDetail": {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub order_id: String,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
    pub verification_status: VerificationStatus,
    pub scan_duration_seconds: f64,
    pub metrics: VerificationMetrics,
    pub expected_items: ItemCounts,
    pub detected_items: ItemCounts,
    pub missing_items_detail: ItemCounts,
    pub extra_items_detail: ItemCounts,
}

impl VerificationReport {
    /// Suggested file name for saving this report.
    pub fn default_filename(&self) -> String {
        format!("verification_report_{}.json", self.order_id)
    }

    /// Renders the report as JSON indented with four spaces.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }

    /// Human-readable summary for the result popup.
    pub fn summary(&self) -> String {
        let mut text = String::new();
        if !self.missing_items_detail.is_empty() {
            text.push_str("Missing Items:\n- ");
            text.push_str(&format_counts(&self.missing_items_detail));
            text.push_str("\n\n");
        }
        if !self.extra_items_detail.is_empty() {
            text.push_str("Extra Items Found:\n- ");
            text.push_str(&format_counts(&self.extra_items_detail));
            text.push_str("\n\n");
        }
        if text.is_empty() {
            return "All items verified successfully.".to_string();
        }
        text.trim_end().to_string()
    }
}

/// Formats counts as `Name (x2), Other (x1)`.
pub fn format_counts(counts: &ItemCounts) -> String {
    counts
        .iter()
        .map(|(name, qty)| format!("{} (x{})", name, qty))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Finalize
// =============================================================================

/// Everything [`finalize`] needs, borrowed from the session.
#[derive(Debug, Clone, Copy)]
pub struct ReconcileInput<'a> {
    pub expected: &'a ExpectedTagSet,
    pub detected: &'a DetectedTagSet,
    pub placed: &'a [PlacedItem],
    pub order_lines: &'a [String],
    pub scan_duration_seconds: f64,
    pub order_id: &'a str,
    pub timestamp: DateTime<Utc>,
}

/// Builds the verification report.
pub fn finalize(input: ReconcileInput<'_>) -> VerificationReport {
    let missing: Vec<&str> = input
        .expected
        .tags()
        .filter(|tag| !input.detected.contains(tag))
        .collect();
    let extra: Vec<&str> = input
        .detected
        .tags()
        .filter(|tag| !input.expected.contains(tag))
        .collect();

    let name_of = |tag: &str| -> Option<String> {
        input
            .placed
            .iter()
            .find(|item| item.unique_tag == tag)
            .map(|item| item.product_name.clone())
            .or_else(|| input.expected.product_for(tag).map(str::to_string))
    };

    let missing_names: Vec<String> = missing.iter().filter_map(|t| name_of(t)).collect();
    let extra_names: Vec<String> = extra.iter().filter_map(|t| name_of(t)).collect();

    VerificationReport {
        order_id: input.order_id.to_string(),
        timestamp: input.timestamp,
        verification_status: VerificationStatus::classify(missing.len(), extra.len()),
        scan_duration_seconds: round_seconds(input.scan_duration_seconds),
        metrics: VerificationMetrics {
            expected_items_count: input.expected.len(),
            placed_items_count: input.placed.len(),
            detected_items_count: input.detected.len(),
            missing_items_count: missing.len(),
            extra_items_count: extra.len(),
        },
        expected_items: tally(input.order_lines.iter().map(String::as_str)),
        detected_items: tally(
            input
                .placed
                .iter()
                .filter(|item| item.detected)
                .map(|item| item.product_name.as_str()),
        ),
        missing_items_detail: tally(missing_names.iter().map(String::as_str)),
        extra_items_detail: tally(extra_names.iter().map(String::as_str)),
    }
}

/// Rounds to two decimals; negative durations become zero.
fn round_seconds(seconds: f64) -> f64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0.0;
    }
    (seconds * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
