//! Contour collections (regions of interest)

use super::{lookup, metadata, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single closed planar contour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<[f64; 3]>,
    pub metadata: Metadata,
}

impl Contour {
    pub fn new(points: Vec<[f64; 3]>, metadata: Metadata) -> Self {
        Self { points, metadata }
    }

    /// Create a contour with no vertices carrying only metadata
    pub fn with_metadata<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            points: Vec::new(),
            metadata: metadata(pairs),
        }
    }
}

/// A region of interest made of one or more contours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourCollection {
    pub contours: Vec<Contour>,
}

impl ContourCollection {
    pub fn new(contours: Vec<Contour>) -> Self {
        Self { contours }
    }
}

impl Selectable for ContourCollection {
    const KIND: EntityKind = EntityKind::ContourCollection;

    fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    fn metadata_value(&self, key: &str) -> Option<&str> {
        self.contours.first().and_then(|c| lookup(&c.metadata, key))
    }

    fn distinct_metadata_values(&self, key: &str) -> BTreeSet<&str> {
        self.contours
            .iter()
            .filter_map(|c| lookup(&c.metadata, key))
            .collect()
    }

    fn sub_element_count(&self) -> Option<usize> {
        Some(self.contours.len())
    }
}
