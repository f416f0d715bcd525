//! Contour selection by ROI label and specifier together

use crate::config::SelectorOptions;
use crate::engine::{select, select_by_metadata};
use crate::error::SelectionResult;
use crate::kinds::ContourCollection;
use serde::{Deserialize, Serialize};

/// Metadata key holding the ROI label as it appears in the source data
pub const ROI_LABEL_KEY: &str = "ROIName";

/// Metadata key holding the ROI label after lexicon normalisation
pub const NORMALIZED_ROI_LABEL_KEY: &str = "NormalizedROIName";

/// Optional criteria for choosing contour collections
///
/// When no criterion is set nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiCriteria {
    pub selection: Option<String>,
    pub roi_label_regex: Option<String>,
    pub normalized_roi_label_regex: Option<String>,
}

impl RoiCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, specifier: impl Into<String>) -> Self {
        self.selection = Some(specifier.into());
        self
    }

    pub fn with_roi_label_regex(mut self, regex: impl Into<String>) -> Self {
        self.roi_label_regex = Some(regex.into());
        self
    }

    pub fn with_normalized_roi_label_regex(mut self, regex: impl Into<String>) -> Self {
        self.normalized_roi_label_regex = Some(regex.into());
        self
    }

    /// Check if no criterion has been given
    pub fn is_unconstrained(&self) -> bool {
        self.selection.is_none()
            && self.roi_label_regex.is_none()
            && self.normalized_roi_label_regex.is_none()
    }
}

/// Narrow contour collections with a specifier, then the raw label regex,
/// then the normalized label regex
pub fn select_contours<'a>(
    ccs: Vec<&'a ContourCollection>,
    criteria: &RoiCriteria,
    options: &SelectorOptions,
) -> SelectionResult<Vec<&'a ContourCollection>> {
    if criteria.is_unconstrained() {
        return Ok(Vec::new());
    }

    let mut ccs = ccs;
    if let Some(specifier) = &criteria.selection {
        ccs = select(ccs, specifier, options)?;
    }
    if let Some(regex) = &criteria.roi_label_regex {
        ccs = select_by_metadata(ccs, ROI_LABEL_KEY, regex, options)?;
    }
    if let Some(regex) = &criteria.normalized_roi_label_regex {
        ccs = select_by_metadata(ccs, NORMALIZED_ROI_LABEL_KEY, regex, options)?;
    }
    Ok(ccs)
}
