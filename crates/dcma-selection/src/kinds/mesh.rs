//! Surface meshes

use super::{lookup, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};

/// A polyhedral surface mesh; disconnected components share one metadata store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<[f64; 3]>,
    /// Faces as lists of vertex indices
    pub faces: Vec<Vec<usize>>,
    pub metadata: Metadata,
}

impl SurfaceMesh {
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<Vec<usize>>, metadata: Metadata) -> Self {
        Self {
            vertices,
            faces,
            metadata,
        }
    }
}

impl Selectable for SurfaceMesh {
    const KIND: EntityKind = EntityKind::SurfaceMesh;

    fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    fn metadata_value(&self, key: &str) -> Option<&str> {
        lookup(&self.metadata, key)
    }

    // Total number of elements needed to specify the mesh.
    fn sub_element_count(&self) -> Option<usize> {
        Some(self.vertices.len() + self.faces.len())
    }
}
