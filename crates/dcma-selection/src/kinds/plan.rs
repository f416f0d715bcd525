//! Radiotherapy treatment plans

use super::{lookup, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};

/// One control point (static machine keyframe)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticState {
    pub cumulative_meterset_weight: f64,
    pub gantry_angle: f64,
}

/// One beam: a sequence of control points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicState {
    pub beam_number: i64,
    pub static_states: Vec<StaticState>,
}

/// A treatment plan composed of one or more beams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub dynamic_states: Vec<DynamicState>,
    pub metadata: Metadata,
}

impl TreatmentPlan {
    pub fn new(dynamic_states: Vec<DynamicState>, metadata: Metadata) -> Self {
        Self {
            dynamic_states,
            metadata,
        }
    }

    /// Total number of control points across all beams
    pub fn static_keyframe_count(&self) -> usize {
        self.dynamic_states
            .iter()
            .map(|ds| ds.static_states.len())
            .sum()
    }
}

impl Selectable for TreatmentPlan {
    const KIND: EntityKind = EntityKind::TreatmentPlan;

    fn is_empty(&self) -> bool {
        self.dynamic_states.is_empty()
    }

    // TODO: consult beam and control-point metadata once those carry their own stores.
    fn metadata_value(&self, key: &str) -> Option<&str> {
        lookup(&self.metadata, key)
    }

    fn sub_element_count(&self) -> Option<usize> {
        Some(self.static_keyframe_count())
    }
}
