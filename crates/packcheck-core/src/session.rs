//! # Session State
//!
//! The single aggregate that owns everything a verification session mutates
//! and enforces the mode rules between its parts.
//!
//! ## Mode Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Modes                                     │
//! │                                                                         │
//! │  ┌──────────┐ confirm  ┌──────────┐ start_scan ┌──────────┐             │
//! │  │ Building │─────────►│ Placing  │───────────►│ Scanning │             │
//! │  │  order   │          │  items   │◄───────────│          │             │
//! │  └──────────┘          └──────────┘  finalize  └──────────┘             │
//! │       ▲                     │                       │                   │
//! │       └────────── clear_all ┴───────────────────────┘                   │
//! │                                                                         │
//! │  Building: add_to_cart, clear_cart                                      │
//! │  Placing:  select_for_placement, place_item, place_pending              │
//! │  Scanning: move_scanner / auto_sweep detect, finalize builds report     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Time never comes from a clock in here. Callers pass `now` to
//! [`SessionState::start_scan`] and [`SessionState::finalize`].

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::detector::{scan_tick, Scanner};
use crate::error::{CoreError, CoreResult};
use crate::order::{Order, OrderDetails};
use crate::placement::{PendingPlacement, Placement};
use crate::progress::{line_progress, LineProgress};
use crate::reconcile::{self, ReconcileInput, VerificationReport};
use crate::sweep::SweepPath;
use crate::tags::{DetectedTagSet, ExpectedTagSet};
use crate::types::{DetectionEvent, PackageBounds, PlacedItem, Point};
use crate::validation::{parse_scanner_range, validate_bounds, validate_positive};
use crate::{DEFAULT_ORDER_ID_PREFIX, DEFAULT_SCANNER_RANGE};

/// Tunables a session is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub bounds: PackageBounds,

    /// Initial scanner range, also the fallback for unparsable range text.
    pub scanner_range: f64,

    /// Prefix of generated order IDs: `{prefix}_{YYYYmmddHHMMSS}`.
    pub order_id_prefix: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            bounds: PackageBounds::default(),
            scanner_range: DEFAULT_SCANNER_RANGE,
            order_id_prefix: DEFAULT_ORDER_ID_PREFIX.to_string(),
        }
    }
}

/// One verification session.
#[derive(Debug, Clone)]
pub struct SessionState {
    catalog: Catalog,
    settings: SessionSettings,
    order: Order,
    expected: ExpectedTagSet,
    placement: Placement,
    detected: DetectedTagSet,
    scanner: Scanner,
    scan_started_at: Option<DateTime<Utc>>,
    last_report: Option<VerificationReport>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::from_parts(Catalog::standard(), SessionSettings::default())
    }
}

impl SessionState {
    /// Creates a session after checking the settings.
    pub fn new(catalog: Catalog, settings: SessionSettings) -> CoreResult<Self> {
        validate_bounds(&settings.bounds)?;
        validate_positive("scanner range", settings.scanner_range)?;
        Ok(SessionState::from_parts(catalog, settings))
    }

    fn from_parts(catalog: Catalog, settings: SessionSettings) -> Self {
        let scanner = Scanner::new(settings.scanner_range);
        SessionState {
            catalog,
            settings,
            order: Order::new(),
            expected: ExpectedTagSet::default(),
            placement: Placement::new(),
            detected: DetectedTagSet::new(),
            scanner,
            scan_started_at: None,
            last_report: None,
        }
    }

    // =========================================================================
    // Order
    // =========================================================================

    pub fn add_to_cart(&mut self, product_name: &str, quantity: i64) -> CoreResult<()> {
        self.order.add_to_cart(&self.catalog, product_name, quantity)
    }

    pub fn clear_cart(&mut self) -> CoreResult<()> {
        self.order.clear_cart()
    }

    pub fn set_order_details(&mut self, id: Option<&str>, name: Option<&str>) -> CoreResult<()> {
        self.order.set_details(id, name)
    }

    /// Freezes the cart and records the expected tags.
    pub fn confirm_order(&mut self) -> CoreResult<&ExpectedTagSet> {
        self.expected = self.order.confirm(&self.catalog)?;
        Ok(&self.expected)
    }

    // =========================================================================
    // Placement
    // =========================================================================

    fn ensure_placement_allowed(&self) -> CoreResult<()> {
        if !self.order.is_confirmed() {
            return Err(CoreError::OrderNotConfirmed);
        }
        if self.is_scanning() {
            return Err(CoreError::ScanInProgress);
        }
        Ok(())
    }

    pub fn select_for_placement(&mut self, product_name: &str) -> CoreResult<&PendingPlacement> {
        self.ensure_placement_allowed()?;
        self.placement.select(&self.catalog, product_name)
    }

    pub fn cancel_selection(&mut self) -> Option<PendingPlacement> {
        self.placement.cancel_selection()
    }

    pub fn place_item(&mut self, product_name: &str, position: Point) -> CoreResult<&PlacedItem> {
        self.ensure_placement_allowed()?;
        self.placement
            .place(&self.catalog, &self.settings.bounds, product_name, position)
    }

    pub fn place_pending(&mut self, position: Point) -> CoreResult<&PlacedItem> {
        self.ensure_placement_allowed()?;
        self.placement
            .place_pending(&self.catalog, &self.settings.bounds, position)
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    /// Enters scan mode.
    pub fn start_scan(&mut self, now: DateTime<Utc>) -> CoreResult<()> {
        if !self.order.is_confirmed() {
            return Err(CoreError::OrderNotConfirmed);
        }
        if self.is_scanning() {
            return Err(CoreError::ScanInProgress);
        }
        if self.placement.is_empty() {
            return Err(CoreError::EmptyPackage);
        }

        self.placement.cancel_selection();
        self.scanner.active = true;
        self.scan_started_at = Some(now);
        Ok(())
    }

    /// Moves the scanner and, while scanning, runs a detection tick there.
    ///
    /// Outside scan mode the scanner just moves and nothing is detected.
    pub fn move_scanner(&mut self, position: Point) -> Vec<DetectionEvent> {
        self.scanner.position = position;
        if !self.is_scanning() {
            return Vec::new();
        }
        self.tick()
    }

    fn tick(&mut self) -> Vec<DetectionEvent> {
        let events = scan_tick(
            self.placement.items_mut(),
            self.scanner.position,
            self.scanner.range,
        );
        for event in &events {
            self.detected.insert(event.tag.clone());
        }
        events
    }

    /// Applies range text from the UI and returns the range now in use.
    ///
    /// Text that is not a positive number falls back to the session's
    /// default range.
    pub fn set_scanner_range(&mut self, input: &str) -> f64 {
        self.scanner.range = parse_scanner_range(input).unwrap_or(self.settings.scanner_range);
        self.scanner.range
    }

    /// Walks the serpentine path over the whole package, ticking at each
    /// point. The scanner is left at the last point.
    pub fn auto_sweep(&mut self, step: f64) -> CoreResult<Vec<DetectionEvent>> {
        if !self.is_scanning() {
            return Err(CoreError::ScanNotActive);
        }

        let path = SweepPath::new(self.settings.bounds, step, self.scanner.range)?;
        let mut events = Vec::new();
        for point in path {
            self.scanner.position = point;
            events.extend(self.tick());
        }
        Ok(events)
    }

    /// Leaves scan mode and builds the verification report.
    ///
    /// The report ID is the user's order ID when one was set, otherwise
    /// `{prefix}_{YYYYmmddHHMMSS}` of `now`.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> CoreResult<&VerificationReport> {
        let started = self.scan_started_at.ok_or(CoreError::ScanNotActive)?;

        let order_id = match &self.order.details().id {
            Some(id) => id.clone(),
            None => generated_order_id(&self.settings.order_id_prefix, now),
        };
        let duration = (now - started).num_milliseconds() as f64 / 1000.0;

        let report = reconcile::finalize(ReconcileInput {
            expected: &self.expected,
            detected: &self.detected,
            placed: self.placement.items(),
            order_lines: self.order.lines(),
            scan_duration_seconds: duration,
            order_id: &order_id,
            timestamp: now,
        });

        self.scanner.active = false;
        self.scan_started_at = None;
        Ok(&*self.last_report.insert(report))
    }

    /// The most recent report.
    pub fn last_report(&self) -> CoreResult<&VerificationReport> {
        self.last_report.as_ref().ok_or(CoreError::NoReportAvailable)
    }

    // =========================================================================
    // Reset & Views
    // =========================================================================

    /// Full reset: order, tags, placed items, scanner and report.
    pub fn clear_all(&mut self) {
        self.order.reset();
        self.expected.clear();
        self.placement.clear();
        self.detected.clear();
        self.scanner = Scanner::new(self.settings.scanner_range);
        self.scan_started_at = None;
        self.last_report = None;
    }

    pub fn progress(&self) -> Vec<LineProgress> {
        line_progress(
            &self.order.counts(),
            self.placement.items(),
            self.order.is_confirmed(),
        )
    }

    pub fn is_scanning(&self) -> bool {
        self.scan_started_at.is_some()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bounds(&self) -> PackageBounds {
        self.settings.bounds
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn order_details(&self) -> &OrderDetails {
        self.order.details()
    }

    pub fn expected(&self) -> &ExpectedTagSet {
        &self.expected
    }

    pub fn detected(&self) -> &DetectedTagSet {
        &self.detected
    }

    pub fn placed_items(&self) -> &[PlacedItem] {
        self.placement.items()
    }

    pub fn pending(&self) -> Option<&PendingPlacement> {
        self.placement.pending()
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }
}

/// `{prefix}_{YYYYmmddHHMMSS}`.
pub fn generated_order_id(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}", prefix, at.format("%Y%m%d%H%M%S"))
}

// =============================================================================
// Unit Tests
// =============================================================================
