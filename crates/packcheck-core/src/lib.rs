//! # packcheck-core: Pure Verification Logic for PackCheck
//!
//! This crate is the **heart** of PackCheck, the RFID package verification
//! station. It generates per-unit RFID tags, simulates proximity detection
//! and reconciles what was ordered against what was read.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PackCheck Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Rendering surface / scenario files                │   │
//! │  │    Cart panel ──► Package canvas ──► Scanner ──► Report popup   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ discrete actions                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 packcheck-station (commands)                    │   │
//! │  │    add_to_cart, place_item, move_scanner, finalize, export     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ packcheck-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────┐ ┌────────┐ │   │
//! │  │   │ catalog │ │  order  │ │placement │ │ detector │ │reconcile││   │
//! │  │   │ tagger  │ │  tags   │ │  sweep   │ │ progress │ │ session ││   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └──────────┘ └────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE STATE TRANSITIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product names and their base tag prefixes
//! - [`tagger`] - Per-product sequential tag numbering
//! - [`order`] - The cart and its confirmation
//! - [`tags`] - Expected and detected tag sets
//! - [`placement`] - Items dropped into the package
//! - [`detector`] - Proximity detection
//! - [`sweep`] - Serpentine auto-scan path
//! - [`reconcile`] - Expected vs detected comparison and the report
//! - [`progress`] - Per-product detection progress
//! - [`session`] - The aggregate that ties it all together
//! - [`error`] / [`validation`] - Typed errors and input parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use packcheck_core::{Point, SessionState, VerificationStatus};
//!
//! let mut session = SessionState::default();
//! session.add_to_cart("USB-C Cable", 2).unwrap();
//! session.confirm_order().unwrap();
//!
//! session.place_item("USB-C Cable", Point::new(100.0, 100.0)).unwrap();
//!
//! let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
//! session.start_scan(start).unwrap();
//! session.move_scanner(Point::new(110.0, 100.0));
//!
//! let report = session.finalize(start).unwrap();
//! assert_eq!(report.verification_status, VerificationStatus::Mismatch);
//! assert_eq!(report.missing_items_detail.get("USB-C Cable"), Some(&1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod detector;
pub mod error;
pub mod order;
pub mod placement;
pub mod progress;
pub mod reconcile;
pub mod session;
pub mod sweep;
pub mod tagger;
pub mod tags;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, ProductEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use progress::{LineProgress, ProgressState};
pub use reconcile::{VerificationMetrics, VerificationReport};
pub use session::{SessionSettings, SessionState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Scanner read range in canvas units when nothing else is configured.
pub const DEFAULT_SCANNER_RANGE: f64 = 80.0;

/// Largest quantity a single add-to-cart call accepts.
pub const MAX_CART_QUANTITY: u32 = 10_000;

/// Prefix of order IDs generated at finalize time.
pub const DEFAULT_ORDER_ID_PREFIX: &str = "Custom_Order";
