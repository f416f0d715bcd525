//! Entity kinds and the capability interface used by the selector engine
//!
//! The engine is written once against [`Selectable`]; each kind supplies its
//! own metadata lookup, emptiness test, and sub-element count.

mod contour;
mod image;
mod line_sample;
mod mesh;
mod plan;
mod point_cloud;
mod table;
mod transform;

pub use contour::*;
pub use image::*;
pub use line_sample::*;
pub use mesh::*;
pub use plan::*;
pub use point_cloud::*;
pub use table::*;
pub use transform::*;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Key/value metadata attached to an entity or one of its sub-elements
pub type Metadata = BTreeMap<String, String>;

/// Build a metadata map from string pairs
pub fn metadata<I, K, V>(pairs: I) -> Metadata
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// The collection kinds a selector can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    ImageArray,
    PointCloud,
    SurfaceMesh,
    ContourCollection,
    TreatmentPlan,
    LineSample,
    Transform,
    SparseTable,
}

impl EntityKind {
    /// All kinds, in the order they are documented
    pub const ALL: [EntityKind; 8] = [
        EntityKind::ContourCollection,
        EntityKind::ImageArray,
        EntityKind::PointCloud,
        EntityKind::SurfaceMesh,
        EntityKind::TreatmentPlan,
        EntityKind::LineSample,
        EntityKind::Transform,
        EntityKind::SparseTable,
    ];

    /// Singular name of one entity of this kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::ImageArray => "image array",
            Self::PointCloud => "point cloud",
            Self::SurfaceMesh => "surface mesh",
            Self::ContourCollection => "contour collection",
            Self::TreatmentPlan => "treatment plan",
            Self::LineSample => "line sample",
            Self::Transform => "transformation",
            Self::SparseTable => "table",
        }
    }

    /// Name of the sub-elements counted by intrinsic selectors
    pub fn sub_element_label(&self) -> &'static str {
        match self {
            Self::ImageArray => "images",
            Self::PointCloud => "vertices",
            Self::SurfaceMesh => "elements (vertices + faces)",
            Self::ContourCollection => "contours",
            Self::TreatmentPlan => "control points",
            Self::LineSample => "samples",
            Self::Transform => "sub-objects",
            Self::SparseTable => "rows",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Capabilities an entity kind provides to the selector engine
pub trait Selectable {
    /// The kind implemented by this type
    const KIND: EntityKind;

    /// Whether the entity holds nothing to operate on
    ///
    /// Metadata selectors always drop empty entities.
    fn is_empty(&self) -> bool;

    /// The value of `key` on a representative sub-element
    fn metadata_value(&self, key: &str) -> Option<&str>;

    /// Every distinct value of `key` across all sub-elements
    ///
    /// Kinds with a single metadata store only ever report the
    /// representative value.
    fn distinct_metadata_values(&self, key: &str) -> BTreeSet<&str> {
        self.metadata_value(key).into_iter().collect()
    }

    /// Number of sub-elements, or `None` if the kind has no meaningful count
    fn sub_element_count(&self) -> Option<usize>;
}

/// Look up `key` in a metadata map
pub(crate) fn lookup<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    metadata.get(key).map(String::as_str)
}
