//! # RustKit Compositor
//!
//! Composite descriptors for the RustKit style engine: z-index, transform
//! lists, the accumulated 2D matrix, opacity and stacking contexts.
//!
//! ## Design Goals
//!
//! 1. **z-index**: Keep `auto` distinct from an explicit 0
//! 2. **Transforms**: Parse the full function list, accumulate translate,
//!    scale and rotate into one affine matrix
//! 3. **Stacking**: One flag combining flow, opacity, transforms and z-index

pub mod composite;
pub mod matrix;

pub use composite::{build_composite, parse_z_index, CompositeDescriptor};
pub use matrix::{accumulate_matrix, parse_angle, AffineMatrix};

use thiserror::Error;

/// Errors that can occur while compositing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositeError {
    #[error("Non-finite transform matrix: {0:?}")]
    NonFiniteMatrix([f64; 6]),
}
