//! # Placement Model
//!
//! Physical items dropped inside the package, plus the product the user has
//! picked but not yet placed.
//!
//! ## Placement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Add Selected Item"           Canvas click                             │
//! │         │                           │                                   │
//! │         ▼                           ▼                                   │
//! │  select("Phone Case")        place_pending((120, 340))                  │
//! │         │                           │                                   │
//! │         ▼                           ├── nothing pending → NoItemSelected│
//! │  pending = Some(..)                 ├── outside bounds → OutOfBounds    │
//! │                                     │   (selection kept for retry)      │
//! │                                     └── OK → tag RFID_PC_4Y3Z-n,        │
//! │                                              push item, pending = None  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Order-confirmed and scan-mode preconditions are enforced one level up in
//! [`crate::session::SessionState`], which owns this model.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::tagger::InstanceTagger;
use crate::types::{PackageBounds, PlacedItem, Point};

/// A product picked for placement, waiting for a canvas click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PendingPlacement {
    pub product_name: String,
    pub base_prefix: String,
}

/// Items currently in the package.
///
/// ## Invariants
/// - `unique_tag` is unique across `items` (the tagger never reuses an
///   ordinal until [`Placement::clear`])
/// - Items are kept in placement order
#[derive(Debug, Clone, Default)]
pub struct Placement {
    items: Vec<PlacedItem>,
    tagger: InstanceTagger,
    pending: Option<PendingPlacement>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a product to place with the next canvas click.
    pub fn select(&mut self, catalog: &Catalog, product_name: &str) -> CoreResult<&PendingPlacement> {
        let base_prefix = catalog.base_prefix(product_name)?.to_string();
        Ok(&*self.pending.insert(PendingPlacement {
            product_name: product_name.to_string(),
            base_prefix,
        }))
    }

    /// Drops the pending selection, if any.
    pub fn cancel_selection(&mut self) -> Option<PendingPlacement> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&PendingPlacement> {
        self.pending.as_ref()
    }

    /// Places one unit of `product_name` at `position`.
    pub fn place(
        &mut self,
        catalog: &Catalog,
        bounds: &PackageBounds,
        product_name: &str,
        position: Point,
    ) -> CoreResult<&PlacedItem> {
        let index = self.push_item(catalog, bounds, product_name, position)?;
        Ok(&self.items[index])
    }

    /// Places the pending selection and clears it on success.
    pub fn place_pending(
        &mut self,
        catalog: &Catalog,
        bounds: &PackageBounds,
        position: Point,
    ) -> CoreResult<&PlacedItem> {
        let product_name = self
            .pending
            .as_ref()
            .map(|p| p.product_name.clone())
            .ok_or(CoreError::NoItemSelected)?;

        let index = self.push_item(catalog, bounds, &product_name, position)?;
        self.pending = None;
        Ok(&self.items[index])
    }

    fn push_item(
        &mut self,
        catalog: &Catalog,
        bounds: &PackageBounds,
        product_name: &str,
        position: Point,
    ) -> CoreResult<usize> {
        if !bounds.contains(position) {
            return Err(CoreError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }

        let tag = self.tagger.next_tag(catalog, product_name)?;
        self.items.push(PlacedItem::new(product_name, tag, position));
        Ok(self.items.len() - 1)
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [PlacedItem] {
        &mut self.items
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|i| i.unique_tag == tag)
    }

    pub fn detected_count(&self) -> usize {
        self.items.iter().filter(|i| i.detected).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item and restarts tag numbering.
    pub fn clear(&mut self) {
        self.items.clear();
        self.tagger.reset();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_assigns_sequential_tags() {
        let catalog = Catalog::standard();
        let bounds = PackageBounds::default();
        let mut placement = Placement::new();

        let first = placement
            .place(&catalog, &bounds, "USB-C Cable", Point::new(100.0, 100.0))
            .unwrap()
            .unique_tag
            .clone();
        let second = placement
            .place(&catalog, &bounds, "USB-C Cable", Point::new(200.0, 100.0))
            .unwrap()
            .unique_tag
            .clone();

        assert_eq!(first, "RFID_USBC_2A8X-1");
        assert_eq!(second, "RFID_USBC_2A8X-2");
        assert_eq!(placement.len(), 2);
        assert!(placement.items().iter().all(|i| !i.detected));
    }

    #[test]
    fn test_boundary_edge_accepted_one_unit_outside_rejected() {
        let catalog = Catalog::standard();
        let bounds = PackageBounds::default();
        let mut placement = Placement::new();

        for edge in [
            Point::new(50.0, 300.0),
            Point::new(700.0, 300.0),
            Point::new(300.0, 50.0),
            Point::new(300.0, 650.0),
        ] {
            assert!(placement.place(&catalog, &bounds, "Phone Case", edge).is_ok());
        }

        for outside in [
            Point::new(49.0, 300.0),
            Point::new(701.0, 300.0),
            Point::new(300.0, 49.0),
            Point::new(300.0, 651.0),
        ] {
            assert_eq!(
                placement.place(&catalog, &bounds, "Phone Case", outside).unwrap_err(),
                CoreError::OutOfBounds {
                    x: outside.x,
                    y: outside.y
                }
            );
        }

        assert_eq!(placement.len(), 4);
    }

    #[test]
    fn test_out_of_bounds_does_not_consume_ordinal() {
        let catalog = Catalog::standard();
        let bounds = PackageBounds::default();
        let mut placement = Placement::new();

        assert!(placement
            .place(&catalog, &bounds, "Power Bank", Point::new(0.0, 0.0))
            .is_err());
        let item = placement
            .place(&catalog, &bounds, "Power Bank", Point::new(60.0, 60.0))
            .unwrap();
        assert_eq!(item.unique_tag, "RFID_PB_H9J2-1");
    }

    #[test]
    fn test_place_pending_flow() {
        let catalog = Catalog::standard();
        let bounds = PackageBounds::default();
        let mut placement = Placement::new();

        assert_eq!(
            placement
                .place_pending(&catalog, &bounds, Point::new(100.0, 100.0))
                .unwrap_err(),
            CoreError::NoItemSelected
        );

        placement.select(&catalog, "Charging Dock").unwrap();

        // Miss the package: selection survives
        assert!(placement
            .place_pending(&catalog, &bounds, Point::new(10.0, 10.0))
            .is_err());
        assert!(placement.pending().is_some());

        let item = placement
            .place_pending(&catalog, &bounds, Point::new(100.0, 100.0))
            .unwrap();
        assert_eq!(item.unique_tag, "RFID_CD_A7V1-1");
        assert!(placement.pending().is_none());
    }

    #[test]
    fn test_place_pending_returns_new_item() {
        let catalog = Catalog::standard();
        let bounds = PackageBounds::default();
        let mut placement = Placement::new();

        placement
            .place(&catalog, &bounds, "Phone Case", Point::new(100.0, 100.0))
            .unwrap();
        placement.select(&catalog, "Phone Case").unwrap();
        let item = placement
            .place_pending(&catalog, &bounds, Point::new(200.0, 150.0))
            .unwrap();

        assert_eq!(item.unique_tag, "RFID_PC_4Y3Z-2");
        assert_eq!(item.position, Point::new(200.0, 150.0));
        assert_eq!(placement.len(), 2);
    }

    #[test]
    fn test_select_unknown_product() {
        let catalog = Catalog::standard();
        let mut placement = Placement::new();
        assert!(placement.select(&catalog, "Toaster").is_err());
        assert!(placement.pending().is_none());
    }

    #[test]
    fn test_clear_restarts_numbering() {
        let catalog = Catalog::standard();
        let bounds = PackageBounds::default();
        let mut placement = Placement::new();
        placement
            .place(&catalog, &bounds, "Phone Case", Point::new(100.0, 100.0))
            .unwrap();
        placement.select(&catalog, "Power Bank").unwrap();

        placement.clear();

        assert!(placement.is_empty());
        assert!(placement.pending().is_none());
        let item = placement
            .place(&catalog, &bounds, "Phone Case", Point::new(100.0, 100.0))
            .unwrap();
        assert_eq!(item.unique_tag, "RFID_PC_4Y3Z-1");
    }

    #[test]
    fn test_find_by_tag() {
        let catalog = Catalog::standard();
        let bounds = PackageBounds::default();
        let mut placement = Placement::new();
        placement
            .place(&catalog, &bounds, "Wireless Charger", Point::new(300.0, 300.0))
            .unwrap();

        let found = placement.find_by_tag("RFID_WC_G5T6-1").unwrap();
        assert_eq!(found.product_name, "Wireless Charger");
        assert!(placement.find_by_tag("RFID_WC_G5T6-2").is_none());
    }
}
