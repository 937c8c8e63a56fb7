//! # Tag Sets
//!
//! The two sets the reconciliation engine compares:
//!
//! - [`ExpectedTagSet`]: derived from the confirmed order, immutable until reset.
//! - [`DetectedTagSet`]: grows monotonically while scanning.
//!
//! Both are ordered (`BTreeMap`/`BTreeSet`) so iteration, and therefore
//! every report built from them, is deterministic.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::tagger::InstanceTagger;

// =============================================================================
// Expected Tag Set
// =============================================================================

/// Tags the package should contain, each remembering its product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedTagSet {
    tags: BTreeMap<String, String>,
}

impl ExpectedTagSet {
    /// Derives the expected tags from an order multiset.
    ///
    /// Ordinals are assigned walking `order_lines` in insertion order with a
    /// fresh tagger, so the same cart always yields the same tags:
    ///
    /// ```text
    /// ["USB-C Cable", "Phone Case", "USB-C Cable"]
    ///   → RFID_USBC_2A8X-1, RFID_PC_4Y3Z-1, RFID_USBC_2A8X-2
    /// ```
    pub fn from_order(catalog: &Catalog, order_lines: &[String]) -> CoreResult<Self> {
        let mut tagger = InstanceTagger::new();
        let mut tags = BTreeMap::new();

        for name in order_lines {
            let tag = tagger.next_tag(catalog, name)?;
            tags.insert(tag, name.clone());
        }

        Ok(ExpectedTagSet { tags })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Product the tag was generated for, if it is expected.
    pub fn product_for(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(String::as_str)
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

// =============================================================================
// Detected Tag Set
// =============================================================================

/// Tags read by the scanner during the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedTagSet {
    tags: BTreeSet<String>,
}

impl DetectedTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for DetectedTagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        DetectedTagSet {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
