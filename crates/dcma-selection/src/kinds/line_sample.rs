//! Line samples (1D sampled functions)

use super::{lookup, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};

/// A sampled 1D function; each sample is `[x, sigma_x, f, sigma_f]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSample {
    pub samples: Vec<[f64; 4]>,
    pub metadata: Metadata,
}

impl LineSample {
    pub fn new(samples: Vec<[f64; 4]>, metadata: Metadata) -> Self {
        Self { samples, metadata }
    }
}

impl Selectable for LineSample {
    const KIND: EntityKind = EntityKind::LineSample;

    fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn metadata_value(&self, key: &str) -> Option<&str> {
        lookup(&self.metadata, key)
    }

    fn sub_element_count(&self) -> Option<usize> {
        Some(self.samples.len())
    }
}
