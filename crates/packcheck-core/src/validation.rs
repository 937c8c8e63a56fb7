//! # Validation Module
//!
//! Input validation for values that arrive as dialog text or config values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI adapter                                                    │
//! │  ├── Collects raw text (quantity box, scanner range box)               │
//! │  └── Passes it through unchanged                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Parses text into typed values                                     │
//! │  └── Rejects or falls back per field                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Session rules (session.rs)                                   │
//! │  └── Order/scan mode preconditions                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use packcheck_core::validation::{parse_quantity, scanner_range_or_default};
//!
//! assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
//! assert!(parse_quantity("0").is_err());
//!
//! assert_eq!(scanner_range_or_default("120"), 120.0);
//! assert_eq!(scanner_range_or_default("wide"), 80.0);
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::PackageBounds;
use crate::{DEFAULT_SCANNER_RANGE, MAX_CART_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - At most [`MAX_CART_QUANTITY`]
pub fn validate_quantity(qty: i64) -> CoreResult<u32> {
    match u32::try_from(qty) {
        Ok(q) if (1..=MAX_CART_QUANTITY).contains(&q) => Ok(q),
        _ => Err(CoreError::InvalidQuantity {
            input: qty.to_string(),
        }),
    }
}

/// Parses the quantity text box.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                         │
/// │                                                                         │
/// │  User types quantity: "2"                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("2") ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── not an integer? → InvalidQuantity                            │
/// │       ├── qty < 1?        → InvalidQuantity                            │
/// │       │                                                                 │
/// │       └── OK → add_to_cart(name, 2)                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(input: &str) -> CoreResult<u32> {
    let qty = input
        .trim()
        .parse::<i64>()
        .map_err(|_| CoreError::InvalidQuantity {
            input: input.to_string(),
        })?;

    validate_quantity(qty).map_err(|_| CoreError::InvalidQuantity {
        input: input.to_string(),
    })
}

// =============================================================================
// Scanner Range
// =============================================================================

/// Parses a scanner range, returning `None` unless it is a positive, finite number.
pub fn parse_scanner_range(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r > 0.0)
}

/// Parses a scanner range, falling back to [`DEFAULT_SCANNER_RANGE`].
pub fn scanner_range_or_default(input: &str) -> f64 {
    parse_scanner_range(input).unwrap_or(DEFAULT_SCANNER_RANGE)
}

/// Validates a configured scanner range or sweep step.
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Package Bounds
// =============================================================================

/// Validates that the package has a real, finite area.
pub fn validate_bounds(bounds: &PackageBounds) -> ValidationResult<()> {
    let coords = [bounds.x1, bounds.y1, bounds.x2, bounds.y2];
    if coords.iter().any(|c| !c.is_finite()) {
        return Err(ValidationError::InvalidFormat {
            field: "package bounds".to_string(),
            reason: "coordinates must be finite numbers".to_string(),
        });
    }

    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(ValidationError::InvalidFormat {
            field: "package bounds".to_string(),
            reason: "width and height must be greater than zero".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Order Details
// =============================================================================

/// Trims optional free text, mapping blank input to `None`.
pub fn normalize_optional(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Validates a user-supplied order ID.
///
/// The ID ends up in the default report filename, so path separators and
/// control characters are rejected.
pub fn validate_order_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "order id".to_string(),
        });
    }

    if id
        .chars()
        .any(|c| c == '/' || c == '\\' || c.is_control())
    {
        return Err(ValidationError::InvalidFormat {
            field: "order id".to_string(),
            reason: "must not contain path separators or control characters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).unwrap(), 1);
        assert_eq!(validate_quantity(250).unwrap(), 250);

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(i64::MAX).is_err());

        assert_eq!(
            validate_quantity(i64::from(MAX_CART_QUANTITY)).unwrap(),
            MAX_CART_QUANTITY
        );
        assert!(validate_quantity(i64::from(MAX_CART_QUANTITY) + 1).is_err());
        assert!(validate_quantity(4_000_000_000).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2").unwrap(), 2);
        assert_eq!(parse_quantity(" 7\n").unwrap(), 7);

        assert_eq!(
            parse_quantity("two"),
            Err(CoreError::InvalidQuantity {
                input: "two".to_string()
            })
        );
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("-1").is_err());
    }

    #[test]
    fn test_scanner_range_fallback() {
        assert_eq!(parse_scanner_range("45.5"), Some(45.5));
        assert_eq!(parse_scanner_range("0"), None);
        assert_eq!(parse_scanner_range("-10"), None);
        assert_eq!(parse_scanner_range("NaN"), None);
        assert_eq!(parse_scanner_range("inf"), None);
        assert_eq!(scanner_range_or_default("abc"), DEFAULT_SCANNER_RANGE);
        assert_eq!(scanner_range_or_default("100"), 100.0);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(&PackageBounds::default()).is_ok());
        assert!(validate_bounds(&PackageBounds::new(10.0, 10.0, 10.0, 200.0)).is_err());
        assert!(validate_bounds(&PackageBounds::new(0.0, 0.0, f64::INFINITY, 10.0)).is_err());
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  ORD-7 ")), Some("ORD-7".to_string()));
        assert_eq!(normalize_optional(Some("   ")), None);
        assert_eq!(normalize_optional(None), None);
    }

    #[test]
    fn test_validate_order_id() {
        assert!(validate_order_id("ORD-2024-001").is_ok());
        assert!(validate_order_id("").is_err());
        assert!(validate_order_id("../etc/passwd").is_err());
        assert!(validate_order_id("a\\b").is_err());
    }
}
