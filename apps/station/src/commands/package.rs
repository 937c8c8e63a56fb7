//! # Package Commands
//!
//! Item selection and placement inside the package boundary.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dropdown: "Phone Case" ──► select_item()                              │
//! │                                 │                                       │
//! │  Canvas click (x, y) ─────► place_selected(x, y)                       │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                 ┌──────────────────────────────┐                        │
//! │                 │  ○ RFID_PC_4Y3Z-1            │  white / gray outline  │
//! │                 │  Phone Case                  │  until detected        │
//! │                 └──────────────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use packcheck_core::placement::PendingPlacement;
use packcheck_core::{PackageBounds, PlacedItem, Point};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::Station;

/// Drawn item size in canvas units.
pub const ITEM_SIZE: f64 = 20.0;

/// A placed item with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    #[serde(flatten)]
    pub item: PlacedItem,
    pub size: f64,
    pub fill: &'static str,
    pub outline: &'static str,
}

impl From<&PlacedItem> for ItemView {
    fn from(item: &PlacedItem) -> Self {
        let (fill, outline) = if item.detected {
            ("#2ecc71", "darkgreen")
        } else {
            ("white", "gray")
        };
        ItemView {
            item: item.clone(),
            size: ITEM_SIZE,
            fill,
            outline,
        }
    }
}

/// Everything on the package canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub bounds: PackageBounds,
    pub items: Vec<ItemView>,
    pub pending: Option<PendingPlacement>,
}

/// Gets the package boundary and every placed item.
pub fn get_package(station: &Station) -> PackageResponse {
    debug!("get_package command");

    let session = station.session();
    PackageResponse {
        bounds: session.bounds(),
        items: session.placed_items().iter().map(ItemView::from).collect(),
        pending: session.pending().cloned(),
    }
}

/// Picks the product to place with the next canvas click.
pub fn select_item(station: &mut Station, product_name: &str) -> Result<PendingPlacement, ApiError> {
    debug!(product_name, "select_item command");

    let pending = station.session_mut().select_for_placement(product_name)?;
    Ok(pending.clone())
}

/// Drops the pending selection.
pub fn cancel_selection(station: &mut Station) -> Option<PendingPlacement> {
    debug!("cancel_selection command");
    station.session_mut().cancel_selection()
}

/// Places one unit of a product at `(x, y)`.
pub fn place_item(station: &mut Station, product_name: &str, x: f64, y: f64) -> Result<ItemView, ApiError> {
    debug!(product_name, x, y, "place_item command");

    let item = station
        .session_mut()
        .place_item(product_name, Point::new(x, y))?;

    info!(tag = %item.unique_tag, x, y, "Item placed");
    Ok(ItemView::from(item))
}

/// Places the pending selection at `(x, y)`.
pub fn place_selected(station: &mut Station, x: f64, y: f64) -> Result<ItemView, ApiError> {
    debug!(x, y, "place_selected command");

    let item = station.session_mut().place_pending(Point::new(x, y))?;

    info!(tag = %item.unique_tag, x, y, "Item placed");
    Ok(ItemView::from(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order::{add_to_cart, confirm_order};
    use crate::error::ErrorCode;
    use crate::state::StationConfig;

    fn confirmed_station() -> Station {
        let mut station = Station::new(StationConfig::default()).unwrap();
        add_to_cart(&mut station, "Phone Case", "2").unwrap();
        confirm_order(&mut station).unwrap();
        station
    }

    #[test]
    fn test_place_requires_confirmation() {
        let mut station = Station::new(StationConfig::default()).unwrap();
        let err = place_item(&mut station, "Phone Case", 100.0, 100.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotConfirmed);
    }

    #[test]
    fn test_place_item_view() {
        let mut station = confirmed_station();

        let view = place_item(&mut station, "Phone Case", 100.0, 100.0).unwrap();

        assert_eq!(view.item.unique_tag, "RFID_PC_4Y3Z-1");
        assert_eq!(view.fill, "white");
        assert_eq!(view.outline, "gray");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["uniqueTag"], "RFID_PC_4Y3Z-1");
        assert_eq!(json["detected"], false);
    }

    #[test]
    fn test_out_of_bounds_click() {
        let mut station = confirmed_station();
        let err = place_item(&mut station, "Phone Case", 20.0, 300.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfBounds);
        assert!(get_package(&station).items.is_empty());
    }

    #[test]
    fn test_select_then_click() {
        let mut station = confirmed_station();

        let err = place_selected(&mut station, 100.0, 100.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoItemSelected);

        select_item(&mut station, "Bonus Item (Keychain)").unwrap();
        assert!(get_package(&station).pending.is_some());

        let view = place_selected(&mut station, 650.0, 600.0).unwrap();
        assert_eq!(view.item.unique_tag, "RFID_BI_F8C9-1");

        let package = get_package(&station);
        assert!(package.pending.is_none());
        assert_eq!(package.items.len(), 1);
        assert_eq!(package.bounds, PackageBounds::default());
    }

    #[test]
    fn test_cancel_selection() {
        let mut station = confirmed_station();
        select_item(&mut station, "Phone Case").unwrap();
        assert!(cancel_selection(&mut station).is_some());
        assert!(cancel_selection(&mut station).is_none());
    }
}
