//! Owner of every loaded entity, grouped by kind
//!
//! The `all_*` enumerators produce the starting candidate sequence that a
//! selector then narrows down.

use crate::kinds::*;
use serde::{Deserialize, Serialize};

/// All loaded entities, one ordered list per kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub image_arrays: Vec<ImageArray>,
    pub point_clouds: Vec<PointCloud>,
    pub surface_meshes: Vec<SurfaceMesh>,
    pub contour_collections: Vec<ContourCollection>,
    pub treatment_plans: Vec<TreatmentPlan>,
    pub line_samples: Vec<LineSample>,
    pub transforms: Vec<Transform>,
    pub tables: Vec<SparseTable>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_image_arrays(&self) -> Vec<&ImageArray> {
        self.image_arrays.iter().collect()
    }

    pub fn all_point_clouds(&self) -> Vec<&PointCloud> {
        self.point_clouds.iter().collect()
    }

    pub fn all_surface_meshes(&self) -> Vec<&SurfaceMesh> {
        self.surface_meshes.iter().collect()
    }

    /// Contour collections holding at least one contour
    pub fn all_contour_collections(&self) -> Vec<&ContourCollection> {
        self.contour_collections
            .iter()
            .filter(|cc| !cc.contours.is_empty())
            .collect()
    }

    pub fn all_treatment_plans(&self) -> Vec<&TreatmentPlan> {
        self.treatment_plans.iter().collect()
    }

    pub fn all_line_samples(&self) -> Vec<&LineSample> {
        self.line_samples.iter().collect()
    }

    pub fn all_transforms(&self) -> Vec<&Transform> {
        self.transforms.iter().collect()
    }

    pub fn all_tables(&self) -> Vec<&SparseTable> {
        self.tables.iter().collect()
    }

    /// Number of entities of the given kind
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::ImageArray => self.image_arrays.len(),
            EntityKind::PointCloud => self.point_clouds.len(),
            EntityKind::SurfaceMesh => self.surface_meshes.len(),
            EntityKind::ContourCollection => self.contour_collections.len(),
            EntityKind::TreatmentPlan => self.treatment_plans.len(),
            EntityKind::LineSample => self.line_samples.len(),
            EntityKind::Transform => self.transforms.len(),
            EntityKind::SparseTable => self.tables.len(),
        }
    }

    /// Check if nothing at all has been loaded
    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }
}
