//! # RustKit Layout
//!
//! Box model resolution and flow classification for the RustKit style
//! engine.
//!
//! ## Design Goals
//!
//! 1. **Box model**: Expand margin/padding/border shorthands and resolve
//!    sizes against the parent
//! 2. **Flow flags**: Classify block/inline/positioned/floated elements and
//!    the contexts they establish
//! 3. **Bounds**: Turn a resolved box into pixel bounds with margins
//!
//! Sizing is a single pass over one element. `auto` sizes use a fixed
//! placeholder (see [`SizingPolicy`]); there is no intrinsic sizing and no
//! flex or grid track algorithm.

pub mod bounds;
pub mod box_model;
pub mod flow;

pub use bounds::{compute_bounds, Bounds};
pub use box_model::{
    parse_aspect_ratio, resolve_box_model, resolve_box_model_with, resolve_dimension, BoxModel,
    Dimension, ParentContext, SizingPolicy,
};
pub use flow::{
    classify_containment, classify_flow, Containment, Display, Float, FlowFlags, Position,
};

use thiserror::Error;

/// Errors that can occur in layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Non-finite {field}: {value}")]
    NonFiniteGeometry { field: &'static str, value: f64 },
}
