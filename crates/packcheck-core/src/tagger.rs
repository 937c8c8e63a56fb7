//! # Instance Tagger
//!
//! Assigns a unique RFID tag to each physical unit of a product.
//!
//! ## Counting Contexts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two taggers, never shared:                                             │
//! │                                                                         │
//! │  Order confirmation            Package placement                        │
//! │  ──────────────────            ─────────────────                        │
//! │  fresh tagger per confirm      one tagger per session                   │
//! │  USB-C ×2 → -1, -2             click, click → -1, -2                    │
//! │                                                                         │
//! │  The expected and placed tags only line up because both restart at 1   │
//! │  for each product and count up in the same per-product order.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::error::CoreResult;

/// Formats a tag from its prefix and 1-based ordinal.
#[inline]
pub fn format_tag(base_prefix: &str, ordinal: u32) -> String {
    format!("{}-{}", base_prefix, ordinal)
}

/// Per-product running counters for one counting context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceTagger {
    counters: HashMap<String, u32>,
}

impl InstanceTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next tag for `product_name`.
    ///
    /// The counter only advances when the product is known, so a failed
    /// lookup leaves the sequence untouched.
    pub fn next_tag(&mut self, catalog: &Catalog, product_name: &str) -> CoreResult<String> {
        let prefix = catalog.base_prefix(product_name)?;
        let counter = self.counters.entry(product_name.to_string()).or_insert(0);
        *counter += 1;
        Ok(format_tag(prefix, *counter))
    }

    /// How many tags have been issued for a product in this context.
    pub fn issued(&self, product_name: &str) -> u32 {
        self.counters.get(product_name).copied().unwrap_or(0)
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_sequential_ordinals() {
        let catalog = Catalog::standard();
        let mut tagger = InstanceTagger::new();

        let tags: Vec<String> = (0..5)
            .map(|_| tagger.next_tag(&catalog, "Power Bank").unwrap())
            .collect();

        assert_eq!(
            tags,
            vec![
                "RFID_PB_H9J2-1",
                "RFID_PB_H9J2-2",
                "RFID_PB_H9J2-3",
                "RFID_PB_H9J2-4",
                "RFID_PB_H9J2-5",
            ]
        );
        assert_eq!(tagger.issued("Power Bank"), 5);
    }

    #[test]
    fn test_counters_are_per_product() {
        let catalog = Catalog::standard();
        let mut tagger = InstanceTagger::new();

        assert_eq!(tagger.next_tag(&catalog, "Phone Case").unwrap(), "RFID_PC_4Y3Z-1");
        assert_eq!(tagger.next_tag(&catalog, "USB-C Cable").unwrap(), "RFID_USBC_2A8X-1");
        assert_eq!(tagger.next_tag(&catalog, "Phone Case").unwrap(), "RFID_PC_4Y3Z-2");
    }

    #[test]
    fn test_reset_restarts_at_one() {
        let catalog = Catalog::standard();
        let mut tagger = InstanceTagger::new();
        tagger.next_tag(&catalog, "Phone Case").unwrap();
        tagger.next_tag(&catalog, "Phone Case").unwrap();

        tagger.reset();

        assert_eq!(tagger.issued("Phone Case"), 0);
        assert_eq!(tagger.next_tag(&catalog, "Phone Case").unwrap(), "RFID_PC_4Y3Z-1");
    }

    #[test]
    fn test_unknown_product_does_not_advance() {
        let catalog = Catalog::standard();
        let mut tagger = InstanceTagger::new();

        let err = tagger.next_tag(&catalog, "Toaster").unwrap_err();
        assert_eq!(err, CoreError::UnknownProduct("Toaster".to_string()));
        assert_eq!(tagger.issued("Toaster"), 0);
    }
}
