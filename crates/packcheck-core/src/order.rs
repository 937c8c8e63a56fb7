//! # Order Model (Cart)
//!
//! The customer order: a multiset of product names.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ Building │────►│Confirmed │                         │
//! │  │  Cart    │     │          │     │ (frozen) │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │        ▲               │                 │                              │
//! │        │          add_to_cart       confirm → ExpectedTagSet            │
//! │        │          clear_cart             │                              │
//! │        │                                 ▼                              │
//! │        └─────────────────────────── reset (full clear)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are kept in insertion order. Comparison only cares about counts,
//! but tag ordinals are assigned walking the list, so the order matters for
//! reproducibility.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::tags::ExpectedTagSet;
use crate::types::{tally, ItemCounts};
use crate::validation::{normalize_optional, validate_order_id, validate_quantity};

/// Optional user-supplied order identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    /// Used as the report's `orderId` when set.
    pub id: Option<String>,

    /// Display name shown alongside the expected items.
    pub name: Option<String>,
}

/// The customer order.
///
/// ## Invariants
/// - Every line names a catalog product
/// - No mutation of lines while `confirmed`
/// - Confirmation happens at most once until [`Order::reset`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<String>,
    confirmed: bool,
    details: OrderDetails,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `quantity` units of a product.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity < 1`
    /// - `UnknownProduct` if the name is not in the catalog
    /// - `OrderLocked` once the order is confirmed
    pub fn add_to_cart(&mut self, catalog: &Catalog, product_name: &str, quantity: i64) -> CoreResult<()> {
        if self.confirmed {
            return Err(CoreError::OrderLocked);
        }

        let quantity = validate_quantity(quantity)?;
        if !catalog.contains(product_name) {
            return Err(CoreError::UnknownProduct(product_name.to_string()));
        }

        self.lines
            .extend(std::iter::repeat(product_name.to_string()).take(quantity as usize));
        Ok(())
    }

    /// Empties the cart. The caller is responsible for asking the user first.
    pub fn clear_cart(&mut self) -> CoreResult<()> {
        if self.confirmed {
            return Err(CoreError::OrderLocked);
        }

        self.lines.clear();
        Ok(())
    }

    /// Freezes the order and derives its expected tags.
    pub fn confirm(&mut self, catalog: &Catalog) -> CoreResult<ExpectedTagSet> {
        if self.confirmed {
            return Err(CoreError::OrderAlreadyConfirmed);
        }
        if self.lines.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let expected = ExpectedTagSet::from_order(catalog, &self.lines)?;
        self.confirmed = true;
        Ok(expected)
    }

    /// Sets the optional order ID and name. Blank values clear the field.
    pub fn set_details(&mut self, id: Option<&str>, name: Option<&str>) -> CoreResult<()> {
        let id = normalize_optional(id);
        if let Some(ref id) = id {
            validate_order_id(id)?;
        }

        self.details = OrderDetails {
            id,
            name: normalize_optional(name),
        };
        Ok(())
    }

    /// Returns to an empty, unconfirmed order.
    pub fn reset(&mut self) {
        *self = Order::default();
    }

    /// Order lines in insertion order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Units per product.
    pub fn counts(&self) -> ItemCounts {
        tally(self.lines.iter().map(String::as_str))
    }

    pub fn total_quantity(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn details(&self) -> &OrderDetails {
        &self.details
    }
}
