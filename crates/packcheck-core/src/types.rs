//! # Domain Types
//!
//! Core domain types shared by the verification components.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Point       │   │ PackageBounds   │   │   PlacedItem    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  x, y (f64)     │   │  x1, y1         │   │  id (UUID)      │       │
//! │  │                 │   │  x2, y2         │   │  unique_tag     │       │
//! │  │                 │   │  (inclusive)    │   │  position       │       │
//! │  └─────────────────┘   └─────────────────┘   │  detected       │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────────┐                         │
//! │  │ DetectionEvent  │   │ VerificationStatus  │                         │
//! │  │  ─────────────  │   │  ─────────────────  │                         │
//! │  │  item_id        │   │  SUCCESS            │                         │
//! │  │  tag            │   │  MISMATCH           │                         │
//! │  │  product_name   │   │  CAUTION            │                         │
//! │  └─────────────────┘   └─────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every placed item has:
//! - `id`: UUID v4 - immutable handle for the rendering surface
//! - `unique_tag`: the RFID tag (`RFID_USBC_2A8X-1`) - what the scanner reads

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Product name → unit count, sorted by name.
pub type ItemCounts = BTreeMap<String, u32>;

/// Counts occurrences of each product name.
pub fn tally<'a, I>(names: I) -> ItemCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = ItemCounts::new();
    for name in names {
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Point
// =============================================================================

/// A position on the package canvas, in distance units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// =============================================================================
// Package Bounds
// =============================================================================

/// The drawn package boundary: an axis-aligned rectangle.
///
/// Edges are part of the package, so a point exactly on `x1`/`x2`/`y1`/`y2`
/// is inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackageBounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PackageBounds {
    /// Creates bounds from two corners, normalising their order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        PackageBounds {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Returns true if the point lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (self.x1..=self.x2).contains(&point.x) && (self.y1..=self.y2).contains(&point.y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

impl Default for PackageBounds {
    /// The standard package drawn on an 800x700 canvas.
    fn default() -> Self {
        PackageBounds::new(50.0, 50.0, 700.0, 650.0)
    }
}

// =============================================================================
// Placed Item
// =============================================================================

/// A physical unit placed inside the package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    /// Rendering handle (UUID v4).
    pub id: String,

    /// Catalog name of the product.
    pub product_name: String,

    /// RFID tag for this unit: `{base_prefix}-{ordinal}`.
    pub unique_tag: String,

    /// Where the item was dropped.
    pub position: Point,

    /// Set once the scanner has come within range. Never resets.
    pub detected: bool,
}

impl PlacedItem {
    /// Creates an undetected item with a fresh UUID.
    pub fn new(product_name: impl Into<String>, unique_tag: impl Into<String>, position: Point) -> Self {
        PlacedItem {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.into(),
            unique_tag: unique_tag.into(),
            position,
            detected: false,
        }
    }
}

// =============================================================================
// Detection Event
// =============================================================================

/// Emitted when a placed item transitions to detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DetectionEvent {
    pub item_id: String,
    pub tag: String,
    pub product_name: String,
}

impl From<&PlacedItem> for DetectionEvent {
    fn from(item: &PlacedItem) -> Self {
        DetectionEvent {
            item_id: item.id.clone(),
            tag: item.unique_tag.clone(),
            product_name: item.product_name.clone(),
        }
    }
}

// =============================================================================
// Verification Status
// =============================================================================

/// Outcome of a verification.
///
/// Missing items take precedence over extra items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Every expected tag was detected and nothing else was.
    Success,
    /// At least one expected tag was not detected.
    Mismatch,
    /// Everything expected was found, plus unexpected tags.
    Caution,
}

impl VerificationStatus {
    /// Classifies a reconciliation outcome.
    pub fn classify(missing: usize, extra: usize) -> Self {
        if missing > 0 {
            VerificationStatus::Mismatch
        } else if extra > 0 {
            VerificationStatus::Caution
        } else {
            VerificationStatus::Success
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Success => "SUCCESS",
            VerificationStatus::Mismatch => "MISMATCH",
            VerificationStatus::Caution => "CAUTION",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
