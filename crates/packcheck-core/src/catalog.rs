//! # Product Catalog
//!
//! Read-only mapping from product name to the base prefix of its RFID tags.
//!
//! Every physical unit's tag is `{base_prefix}-{ordinal}`, so the catalog is
//! the single source of truth for what a tag looks like. It is built once at
//! startup and never mutated.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

/// The standard product set: `(name, base prefix)`.
pub const STANDARD_PRODUCTS: &[(&str, &str)] = &[
    ("Bluetooth Headphones", "RFID_BH_9X01"),
    ("USB-C Cable", "RFID_USBC_2A8X"),
    ("Phone Case", "RFID_PC_4Y3Z"),
    ("Charging Dock", "RFID_CD_A7V1"),
    ("Screen Protector", "RFID_SP_E2W3"),
    ("Wireless Charger", "RFID_WC_G5T6"),
    ("Power Bank", "RFID_PB_H9J2"),
    ("Bonus Item (Keychain)", "RFID_BI_F8C9"),
];

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    /// Display name, unique within the catalog.
    pub name: String,

    /// Tag prefix shared by every unit of this product.
    pub base_prefix: String,
}

impl ProductEntry {
    pub fn new(name: impl Into<String>, base_prefix: impl Into<String>) -> Self {
        ProductEntry {
            name: name.into(),
            base_prefix: base_prefix.into(),
        }
    }
}

/// Immutable product lookup.
///
/// Entries keep their declaration order so product pickers list them the
/// same way every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ProductEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting blank fields, duplicate names and
    /// duplicate prefixes.
    pub fn new(entries: Vec<ProductEntry>) -> CoreResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "product name".to_string(),
                }
                .into());
            }
            if entry.base_prefix.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: format!("base prefix for '{}'", entry.name),
                }
                .into());
            }
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(ValidationError::Duplicate {
                    field: "product name".to_string(),
                    value: entry.name.clone(),
                }
                .into());
            }
            if entries[..i].iter().any(|e| e.base_prefix == entry.base_prefix) {
                return Err(ValidationError::Duplicate {
                    field: "base prefix".to_string(),
                    value: entry.base_prefix.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { entries })
    }

    /// The standard eight-product catalog.
    pub fn standard() -> Self {
        Catalog {
            entries: STANDARD_PRODUCTS
                .iter()
                .map(|(name, prefix)| ProductEntry::new(*name, *prefix))
                .collect(),
        }
    }

    /// The standard catalog followed by `extra` entries.
    pub fn standard_with(extra: Vec<ProductEntry>) -> CoreResult<Self> {
        let mut entries = Catalog::standard().entries;
        entries.extend(extra);
        Catalog::new(entries)
    }

    /// Looks up the tag prefix for a product.
    pub fn base_prefix(&self, product_name: &str) -> CoreResult<&str> {
        self.get(product_name)
            .map(|e| e.base_prefix.as_str())
            .ok_or_else(|| CoreError::UnknownProduct(product_name.to_string()))
    }

    pub fn get(&self, product_name: &str) -> Option<&ProductEntry> {
        self.entries.iter().find(|e| e.name == product_name)
    }

    pub fn contains(&self, product_name: &str) -> bool {
        self.get(product_name).is_some()
    }

    /// Product names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.base_prefix("USB-C Cable").unwrap(), "RFID_USBC_2A8X");
        assert_eq!(
            catalog.base_prefix("Bonus Item (Keychain)").unwrap(),
            "RFID_BI_F8C9"
        );
    }

    #[test]
    fn test_unknown_product() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.base_prefix("Toaster"),
            Err(CoreError::UnknownProduct("Toaster".to_string()))
        );
        assert!(!catalog.contains("usb-c cable"));
    }

    #[test]
    fn test_names_keep_declaration_order() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names.first(), Some(&"Bluetooth Headphones"));
        assert_eq!(names.last(), Some(&"Bonus Item (Keychain)"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::standard_with(vec![ProductEntry::new("Phone Case", "RFID_X")]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_duplicate_prefixes_rejected() {
        let result = Catalog::standard_with(vec![ProductEntry::new("Smart Watch", "RFID_PC_4Y3Z")]);
        match result {
            Err(CoreError::Validation(ValidationError::Duplicate { field, value })) => {
                assert_eq!(field, "base prefix");
                assert_eq!(value, "RFID_PC_4Y3Z");
            }
            other => panic!("expected duplicate prefix error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let result = Catalog::new(vec![ProductEntry::new("Stylus", "  ")]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_standard_with_extra() {
        let catalog =
            Catalog::standard_with(vec![ProductEntry::new("Stylus", "RFID_ST_0001")]).unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.base_prefix("Stylus").unwrap(), "RFID_ST_0001");
    }
}
