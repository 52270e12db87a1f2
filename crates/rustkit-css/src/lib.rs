//! # RustKit CSS
//!
//! CSS value parsing and color resolution for the RustKit style engine.
//!
//! ## Design Goals
//!
//! 1. **Typed values**: Turn computed-style strings into lengths, colors,
//!    shadow/filter/transform lists
//! 2. **Fail-open**: Malformed values degrade to a sentinel, never an error
//! 3. **Closed vocabularies**: Every keyword and function family is an enum
//!    with a single name table
//!
//! The only fallible entry point is [`ComputedStyle::from_json`].

pub mod color;
pub mod filter;
pub mod image;
pub mod keywords;
pub mod shadow;
pub mod shorthand;
pub mod style;
pub mod transform;
pub mod values;

pub use color::{hsl_to_rgb, parse_color, Color};
pub use filter::{parse_filter_list, FilterFunction, FilterKind, FilterList};
pub use image::{parse_gradient, parse_image_reference, ColorStop, Gradient, GradientKind};
pub use keywords::{BorderStyle, Visibility};
pub use shadow::{parse_box_shadow, parse_text_shadow, Shadow, ShadowList};
pub use shorthand::{
    parse_border_radius, parse_border_shorthand, parse_edge_shorthand, BorderShorthand, Corners,
    EdgeSet,
};
pub use style::{property_default, ComputedStyle, StyleValue};
pub use transform::{parse_transform, TransformFunction, TransformKind};
pub use values::{
    leading_number, parse_finite, parse_length, parse_line_height, parse_opacity,
    parse_signed_length, split_function, split_top_level_commas, split_top_level_whitespace,
    CssKeyword, LengthContext, LengthUnit, LineHeight, TypedValue,
};

use thiserror::Error;

/// Errors that can occur in CSS operations.
#[derive(Error, Debug)]
pub enum CssError {
    #[error("Parse error: {0}")]
    ParseError(String),
}
