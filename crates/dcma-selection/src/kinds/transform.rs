//! Spatial transformations

use super::{lookup, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};

/// The transformation held by a [`Transform`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum TransformKind {
    /// No transformation has been assigned
    #[default]
    Empty,
    /// Homogeneous 4x4 affine matrix, row-major
    Affine([[f64; 4]; 4]),
    /// Rotation followed by translation
    Rigid {
        rotation: [[f64; 3]; 3],
        translation: [f64; 3],
    },
    /// Dense displacement vectors
    Deformation { vectors: Vec<[f64; 3]> },
}

/// A spatial transformation with its metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub transform: TransformKind,
    pub metadata: Metadata,
}

impl Transform {
    pub fn new(transform: TransformKind, metadata: Metadata) -> Self {
        Self {
            transform,
            metadata,
        }
    }
}

impl Selectable for Transform {
    const KIND: EntityKind = EntityKind::Transform;

    fn is_empty(&self) -> bool {
        matches!(self.transform, TransformKind::Empty)
    }

    fn metadata_value(&self, key: &str) -> Option<&str> {
        lookup(&self.metadata, key)
    }

    fn sub_element_count(&self) -> Option<usize> {
        None
    }
}
