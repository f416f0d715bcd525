//! Image arrays: ordered collections of planar images

use super::{lookup, metadata, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single planar image
///
/// Pixel data is owned by the imaging layer; selection only needs the
/// geometry summary and the per-image metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarImage {
    pub rows: usize,
    pub columns: usize,
    pub metadata: Metadata,
}

impl PlanarImage {
    /// Create an image with the given dimensions and no metadata
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            metadata: Metadata::new(),
        }
    }

    /// Create an empty image carrying only metadata
    pub fn with_metadata<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rows: 0,
            columns: 0,
            metadata: metadata(pairs),
        }
    }
}

/// A collection of images, typically one 3D volume or a time series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageArray {
    pub images: Vec<PlanarImage>,
}

impl ImageArray {
    pub fn new(images: Vec<PlanarImage>) -> Self {
        Self { images }
    }
}

impl Selectable for ImageArray {
    const KIND: EntityKind = EntityKind::ImageArray;

    fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn metadata_value(&self, key: &str) -> Option<&str> {
        self.images.first().and_then(|img| lookup(&img.metadata, key))
    }

    fn distinct_metadata_values(&self, key: &str) -> BTreeSet<&str> {
        self.images
            .iter()
            .filter_map(|img| lookup(&img.metadata, key))
            .collect()
    }

    fn sub_element_count(&self) -> Option<usize> {
        Some(self.images.len())
    }
}
