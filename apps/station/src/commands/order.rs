//! # Order Commands
//!
//! Cart building, order confirmation and the full reset.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│Confirmed │────►│ Verified │       │
//! │  │  Cart    │     │          │     │ (frozen) │     │ (report) │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │        ▲               │                                 │              │
//! │        │          add_to_cart                            │              │
//! │        │          clear_cart                             │              │
//! │        │                                                 │              │
//! │        └──────────────── reset_all ◄─────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use packcheck_core::order::OrderDetails;
use packcheck_core::validation::parse_quantity;
use packcheck_core::{LineProgress, ProductEntry, SessionState};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::Station;

/// One product line of the cart display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_name: String,
    pub quantity: u32,
}

/// Cart response: lines, totals and confirmation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub total_quantity: usize,
    pub confirmed: bool,
    pub details: OrderDetails,
}

impl From<&SessionState> for CartResponse {
    fn from(session: &SessionState) -> Self {
        let order = session.order();
        CartResponse {
            lines: order
                .counts()
                .into_iter()
                .map(|(product_name, quantity)| CartLine {
                    product_name,
                    quantity,
                })
                .collect(),
            total_quantity: order.total_quantity(),
            confirmed: order.is_confirmed(),
            details: order.details().clone(),
        }
    }
}

/// Returned after a successful confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    pub cart: CartResponse,
    pub expected_tags: Vec<String>,
    pub progress: Vec<LineProgress>,
}

/// Lists the products that can be ordered and placed.
pub fn get_catalog(station: &Station) -> Vec<ProductEntry> {
    debug!("get_catalog command");
    station.session().catalog().entries().to_vec()
}

/// Gets the current cart contents.
pub fn get_cart(station: &Station) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(station.session())
}

/// Adds `quantity_text` units of a product, as typed into the quantity box.
pub fn add_to_cart(
    station: &mut Station,
    product_name: &str,
    quantity_text: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_name, quantity_text, "add_to_cart command");

    let quantity = parse_quantity(quantity_text)?;
    let session = station.session_mut();
    session.add_to_cart(product_name, i64::from(quantity))?;
    Ok(CartResponse::from(&*session))
}

/// Empties the cart. The caller has already asked the user.
pub fn clear_cart(station: &mut Station) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    let session = station.session_mut();
    session.clear_cart()?;
    Ok(CartResponse::from(&*session))
}

/// Sets the optional order ID and order name.
pub fn set_order_details(
    station: &mut Station,
    id: Option<&str>,
    name: Option<&str>,
) -> Result<CartResponse, ApiError> {
    debug!(?id, ?name, "set_order_details command");

    let session = station.session_mut();
    session.set_order_details(id, name)?;
    Ok(CartResponse::from(&*session))
}

/// Confirms the order and generates its expected tags.
pub fn confirm_order(station: &mut Station) -> Result<ConfirmResponse, ApiError> {
    debug!("confirm_order command");

    let session = station.session_mut();
    let expected_tags: Vec<String> = session
        .confirm_order()?
        .tags()
        .map(str::to_string)
        .collect();

    info!(expected = expected_tags.len(), "Order confirmed");
    Ok(ConfirmResponse {
        cart: CartResponse::from(&*session),
        expected_tags,
        progress: session.progress(),
    })
}

/// Clears placed items and resets the order. The caller has already asked
/// the user.
pub fn reset_all(station: &mut Station) -> CartResponse {
    debug!("reset_all command");

    let session = station.session_mut();
    session.clear_all();
    info!("Station reset");
    CartResponse::from(&*session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::StationConfig;

    fn station() -> Station {
        Station::new(StationConfig::default()).unwrap()
    }

    #[test]
    fn test_add_to_cart_from_text() {
        let mut station = station();

        add_to_cart(&mut station, "USB-C Cable", "2").unwrap();
        let cart = add_to_cart(&mut station, "Phone Case", " 1 ").unwrap();

        assert_eq!(cart.total_quantity, 3);
        assert_eq!(
            cart.lines,
            vec![
                CartLine {
                    product_name: "Phone Case".into(),
                    quantity: 1
                },
                CartLine {
                    product_name: "USB-C Cable".into(),
                    quantity: 2
                },
            ]
        );
    }

    #[test]
    fn test_bad_quantity_text() {
        let mut station = station();
        for text in ["0", "-1", "two", "", "10001", "4000000000"] {
            let err = add_to_cart(&mut station, "USB-C Cable", text).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidQuantity);
        }
        assert_eq!(get_cart(&station).total_quantity, 0);
    }

    #[test]
    fn test_confirm_empty_cart() {
        let mut station = station();
        let err = confirm_order(&mut station).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyOrder);
    }

    #[test]
    fn test_confirm_lists_expected_tags() {
        let mut station = station();
        add_to_cart(&mut station, "USB-C Cable", "2").unwrap();

        let response = confirm_order(&mut station).unwrap();

        assert!(response.cart.confirmed);
        assert_eq!(
            response.expected_tags,
            vec!["RFID_USBC_2A8X-1", "RFID_USBC_2A8X-2"]
        );
        assert_eq!(response.progress.len(), 1);

        let err = add_to_cart(&mut station, "USB-C Cable", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderLocked);
        let err = confirm_order(&mut station).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderAlreadyConfirmed);
    }

    #[test]
    fn test_reset_all_unlocks_cart() {
        let mut station = station();
        add_to_cart(&mut station, "Power Bank", "1").unwrap();
        confirm_order(&mut station).unwrap();

        let cart = reset_all(&mut station);

        assert!(!cart.confirmed);
        assert!(cart.lines.is_empty());
        assert!(add_to_cart(&mut station, "Power Bank", "1").is_ok());
    }

    #[test]
    fn test_catalog_listing() {
        let names: Vec<String> = get_catalog(&station()).into_iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "Bluetooth Headphones");
    }
}
