//! # Progress View
//!
//! Per-product detection progress for the "Expected Items" panel.
//!
//! ```text
//!   USB-C Cable      x2   [PARTIAL]     1 of 2 read
//!   Phone Case       x1   [DETECTED]
//!   Power Bank       x1   [PENDING]
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{ItemCounts, PlacedItem};

/// Detection state of one ordered product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressState {
    /// The order has not been confirmed yet.
    Unconfirmed,
    Pending,
    Partial,
    Detected,
}

impl ProgressState {
    fn from_counts(confirmed: bool, required: u32, detected: u32) -> Self {
        if !confirmed {
            ProgressState::Unconfirmed
        } else if detected == 0 {
            ProgressState::Pending
        } else if detected < required {
            ProgressState::Partial
        } else {
            ProgressState::Detected
        }
    }
}

/// One row of the progress panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineProgress {
    pub product_name: String,
    pub required: u32,
    pub detected: u32,
    pub state: ProgressState,
}

/// Builds one row per ordered product, sorted by name.
///
/// Detected units of a product are counted from placed items, so a
/// detected extra unit can push `detected` above `required`.
pub fn line_progress(order_counts: &ItemCounts, placed: &[PlacedItem], confirmed: bool) -> Vec<LineProgress> {
    order_counts
        .iter()
        .map(|(name, &required)| {
            let detected = placed
                .iter()
                .filter(|item| item.detected && item.product_name == *name)
                .count() as u32;

            LineProgress {
                product_name: name.clone(),
                required,
                detected,
                state: ProgressState::from_counts(confirmed, required, detected),
            }
        })
        .collect()
}
