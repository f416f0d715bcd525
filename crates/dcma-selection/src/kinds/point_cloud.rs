//! Point clouds

use super::{lookup, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};

/// A logically cohesive set of points sharing one metadata store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<[f64; 3]>,
    pub metadata: Metadata,
}

impl PointCloud {
    pub fn new(points: Vec<[f64; 3]>, metadata: Metadata) -> Self {
        Self { points, metadata }
    }
}

impl Selectable for PointCloud {
    const KIND: EntityKind = EntityKind::PointCloud;

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn metadata_value(&self, key: &str) -> Option<&str> {
        lookup(&self.metadata, key)
    }

    fn sub_element_count(&self) -> Option<usize> {
        Some(self.points.len())
    }
}
