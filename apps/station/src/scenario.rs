//! # Scenario Runner
//!
//! Replays a scripted verification session from a TOML file through the
//! same commands the rendering surface uses.
//!
//! ## Scenario File Format
//! ```toml
//! [order]
//! id = "ORD-1001"          # optional, else generated at finalize
//! name = "Desk setup"      # optional
//!
//! [[order.items]]
//! product = "USB-C Cable"
//! quantity = 2
//!
//! [[placements]]
//! product = "USB-C Cable"
//! x = 100.0
//! y = 100.0
//!
//! [scan]
//! range = "80"             # range text box, optional
//! moves = [[100.0, 100.0], [300.0, 300.0]]
//! auto_sweep = false
//! ```
//!
//! ## Replay Order
//! ```text
//! order details ─► add items ─► confirm ─► place items ─► start scan
//!       ─► set range ─► moves ─► auto sweep (optional) ─► finalize
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::commands::report::ReportResponse;
use crate::commands::{order, package, report, scan};
use crate::error::{ApiError, StationError, StationResult};
use crate::state::Station;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub order: ScenarioOrder,

    #[serde(default)]
    pub placements: Vec<ScenarioPlacement>,

    #[serde(default)]
    pub scan: ScenarioScan,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioOrder {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub items: Vec<ScenarioItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioItem {
    pub product: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioPlacement {
    pub product: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScenarioScan {
    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub moves: Vec<[f64; 2]>,

    #[serde(default)]
    pub auto_sweep: bool,
}

impl Scenario {
    pub fn from_toml_str(contents: &str) -> StationResult<Self> {
        toml::from_str(contents).map_err(|e| StationError::Scenario(e.to_string()))
    }

    pub fn from_file(path: &Path) -> StationResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| StationError::Scenario(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }
}

fn step_failed(step: &str, err: ApiError) -> StationError {
    StationError::Scenario(format!("{} failed: {}", step, err.message))
}

/// Replays `scenario` on `station` and returns the finalized report.
pub fn run(station: &mut Station, scenario: &Scenario) -> StationResult<ReportResponse> {
    let details = &scenario.order;
    if details.id.is_some() || details.name.is_some() {
        order::set_order_details(station, details.id.as_deref(), details.name.as_deref())
            .map_err(|e| step_failed("set order details", e))?;
    }

    for item in &details.items {
        order::add_to_cart(station, &item.product, &item.quantity.to_string())
            .map_err(|e| step_failed(&format!("add {} x{}", item.product, item.quantity), e))?;
    }
    order::confirm_order(station).map_err(|e| step_failed("confirm order", e))?;

    for placement in &scenario.placements {
        package::place_item(station, &placement.product, placement.x, placement.y).map_err(|e| {
            step_failed(
                &format!("place {} at ({}, {})", placement.product, placement.x, placement.y),
                e,
            )
        })?;
    }

    scan::start_scan(station).map_err(|e| step_failed("start scan", e))?;

    if let Some(range) = &scenario.scan.range {
        scan::set_scanner_range(station, range);
    }
    for [x, y] in &scenario.scan.moves {
        scan::move_scanner(station, *x, *y);
    }
    if scenario.scan.auto_sweep {
        scan::auto_sweep(station).map_err(|e| step_failed("auto sweep", e))?;
    }

    let response = report::finalize_verification(station).map_err(|e| step_failed("finalize", e))?;
    info!(
        order_id = %response.report.order_id,
        status = %response.report.verification_status,
        "Scenario finished"
    );
    Ok(response)
}
