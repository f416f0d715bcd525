//! Help text for selector arguments
//!
//! Operations that take a selector describe it with a [`SelectorDoc`] so that
//! user-facing surfaces can render consistent documentation.

use crate::kinds::EntityKind;
use crate::roi::{NORMALIZED_ROI_LABEL_KEY, ROI_LABEL_KEY};
use serde::{Deserialize, Serialize};

/// Documentation for one selector argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorDoc {
    pub name: String,
    pub description: String,
    pub default_value: String,
    pub examples: Vec<String>,
}

const POSITIONAL_EXAMPLES: [&str; 10] = [
    "last",
    "first",
    "all",
    "none",
    "#0",
    "#-0",
    "!last",
    "!#-3",
    "key@.*value.*",
    "key1@.*value1.*;key2@^value2$;first",
];

const INTRINSIC_EXAMPLES: [&str; 4] = ["numerous", "fewest", "more-than(5)", "!fewer-than(10)"];

/// Argument name used by operations for a selector of this kind
pub fn selector_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::ImageArray => "ImageSelection",
        EntityKind::PointCloud => "PointSelection",
        EntityKind::SurfaceMesh => "MeshSelection",
        EntityKind::ContourCollection => "ROISelection",
        EntityKind::TreatmentPlan => "RTPlanSelection",
        EntityKind::LineSample => "LSampSelection",
        EntityKind::Transform => "TransformSelection",
        EntityKind::SparseTable => "TableSelection",
    }
}

fn summary(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::ImageArray => {
            "Select one or more image arrays. \
             An image array usually holds one contiguous 3D volume (such as a CT scan) or a time series, \
             but logically unrelated images can be mixed together."
        }
        EntityKind::PointCloud => {
            "Select one or more point clouds. \
             Each point cloud is one logically cohesive set of points, \
             but logically unrelated points can be mixed together."
        }
        EntityKind::SurfaceMesh => {
            "Select one or more surface meshes. \
             A mesh may hold several disconnected components that together describe one object."
        }
        EntityKind::ContourCollection => {
            "Select one or more regions of interest (contour collections). \
             Each region of interest may be made of many individual contours."
        }
        EntityKind::TreatmentPlan => {
            "Select one or more treatment plans. \
             A plan may be made of several beams that together form one delivery."
        }
        EntityKind::LineSample => "Select one or more line samples.",
        EntityKind::Transform => "Select one or more transforms (warps).",
        EntityKind::SparseTable => "Select one or more tables.",
    }
}

/// Whether `numerous`, `fewest`, `more-than` and `fewer-than` work for a kind
pub fn supports_intrinsics(kind: EntityKind) -> bool {
    !matches!(kind, EntityKind::Transform | EntityKind::SparseTable)
}

/// The selector syntax explained for one kind
pub fn generic_selection_info(kind: EntityKind) -> String {
    let unit = kind.label();
    let parts = kind.sub_element_label();

    let mut info = format!(
        "Selection specifiers can be positional, metadata-based key@value regexes, or intrinsic.\n\n\
         Positional specifiers are the literals 'first', 'second', 'third', 'last', 'none', and 'all'. \
         '#N' selects the Nth {unit} counting from zero, and '#-N' selects the Nth-from-last {unit}. \
         An index past the end selects nothing, or everything when inverted. \
         Positional specifiers can be inverted by prefixing them with '!'.\n\n\
         Metadata-based key@value expressions match the key verbatim and the value with a regex. \
         Regexes are case insensitive and must match the whole value. \
         'keymissing@key' selects every {unit} lacking the key, \
         and a leading '!' keeps every {unit} the expression would not select.\n\n"
    );

    if supports_intrinsics(kind) {
        info.push_str(&format!(
            "Intrinsic specifiers are 'numerous', 'fewest', 'more-than(N)', and 'fewer-than(N)'. \
             'numerous' and 'fewest' select the single {unit} with the greatest or fewest {parts}; \
             which one wins a tie is not guaranteed. \
             'more-than(N)' and 'fewer-than(N)' select every {unit} with strictly more or fewer than N {parts}. \
             Intrinsic specifiers can be inverted with '!'; \
             note that '!numerous' keeps every {unit} except the most numerous one.\n\n"
        ));
    } else {
        info.push_str(&format!(
            "Intrinsic specifiers are not available because a {unit} has no countable {parts}.\n\n"
        ));
    }

    info.push_str(
        "All kinds of criteria can be mixed. \
         Separate criteria with ';' to apply them one after another.",
    );
    info
}

/// Documentation for the selector argument of a kind
pub fn selector_doc(kind: EntityKind) -> SelectorDoc {
    let mut examples: Vec<String> = POSITIONAL_EXAMPLES.iter().map(|s| s.to_string()).collect();
    if supports_intrinsics(kind) {
        examples.extend(INTRINSIC_EXAMPLES.iter().map(|s| s.to_string()));
    }

    SelectorDoc {
        name: selector_name(kind).to_string(),
        description: format!("{} {}", summary(kind), generic_selection_info(kind)),
        default_value: "all".to_string(),
        examples,
    }
}

fn roi_regex_doc(name: &str, which: &str, extra: &str, examples: &[&str]) -> SelectorDoc {
    SelectorDoc {
        name: name.to_string(),
        description: format!(
            "A regex matching {which} ROI labels to consider. \
             Whole regions of interest are selected; individual contours cannot be. \
             Every selected ROI must match the single regex, so use alternation ('|') when needed. \
             Matching is case insensitive and supports look-around: \
             '.*' matches every ROI and '^(?!xyz).*$' matches all except 'xyz'. {extra}"
        ),
        default_value: ".*".to_string(),
        examples: examples.iter().map(|s| s.to_string()).collect(),
    }
}

/// Documentation for the raw ROI label regex argument
pub fn roi_label_regex_doc() -> SelectorDoc {
    roi_regex_doc(
        "ROILabelRegex",
        "raw",
        &format!("The regex is applied to the '{}' metadata.", ROI_LABEL_KEY),
        &[
            ".*",
            ".*body.*",
            "body",
            "^body$",
            "Liver",
            ".*left.*parotid.*|.*right.*parotid.*|.*eyes.*",
            "left_parotid|right_parotid",
            "^(?!left_parotid).*$",
        ],
    )
}

/// Documentation for the normalized ROI label regex argument
pub fn normalized_roi_label_regex_doc() -> SelectorDoc {
    roi_regex_doc(
        "NormalizedROILabelRegex",
        "normalized",
        &format!(
            "The regex is applied to the '{}' metadata, i.e. labels mapped through a lexicon, \
             which helps with heterogeneous naming conventions.",
            NORMALIZED_ROI_LABEL_KEY
        ),
        &[
            ".*",
            ".*Body.*",
            "Body",
            "liver",
            ".*Left.*Parotid.*|.*Right.*Parotid.*|.*Eye.*",
            "Left Parotid|Right Parotid",
            "^(?!Left Parotid).*$",
        ],
    )
}
