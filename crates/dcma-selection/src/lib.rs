//! dcma-selection - Selector grammar for collection-typed pipeline data
//!
//! Operations in the pipeline act on a subset of the loaded data. The subset is
//! chosen with a short textual *specifier* applied to a candidate sequence of
//! one entity kind (image arrays, point clouds, surface meshes, contour
//! collections, treatment plans, line samples, transforms, or sparse tables).
//!
//! # Specifier Syntax
//!
//! - **Positional**: `all`, `none`, `first`, `second`, `third`, `last`
//!   (abbreviations such as `fir` or `la` are accepted)
//! - **Indexed**: `#0` (front), `#2`, `#-0` (last), `#-1` (second-from-last)
//! - **Metadata**: `Modality@CT`, `keymissing@SeriesNumber`, `!Modality@MR`
//! - **Intrinsic**: `numerous`, `fewest`, `more-than(5)`, `fewer-than(10)`
//! - **Chaining**: `Modality@CT;first` applies each part to the survivors
//!   of the previous one
//!
//! Positional and intrinsic specifiers can be inverted with a leading `!`.
//!
//! # Examples
//!
//! ```
//! use dcma_selection::{select, ImageArray, PlanarImage, SelectorOptions};
//!
//! let ct = ImageArray::new(vec![PlanarImage::with_metadata([("Modality", "CT")])]);
//! let mr = ImageArray::new(vec![PlanarImage::with_metadata([("Modality", "MR")])]);
//!
//! let chosen = select(vec![&ct, &mr], "Modality@CT", &SelectorOptions::default()).unwrap();
//! assert_eq!(chosen.len(), 1);
//! assert!(std::ptr::eq(chosen[0], &ct));
//! ```

pub mod ast;
pub mod config;
pub mod dataset;
pub mod docs;
pub mod engine;
pub mod error;
pub mod kinds;
pub mod parser;
pub mod roi;

pub use ast::*;
pub use config::*;
pub use dataset::*;
pub use docs::*;
pub use engine::*;
pub use error::*;
pub use kinds::*;
pub use parser::*;
pub use roi::*;
