//! Shared helpers for integration tests.

mod assertions;

pub use assertions::{assert_matrix_near, assert_paint_order};

use rustkit_css::ComputedStyle;
use rustkit_engine::ElementIdentity;

/// Build a computed style from `(property, value)` pairs.
pub fn style(pairs: &[(&str, &str)]) -> ComputedStyle {
    ComputedStyle::from_pairs(pairs.iter().copied())
}

/// A `div` with the given id.
pub fn div(id: &str) -> ElementIdentity {
    ElementIdentity::new("div").with_id(id)
}

/// Install a test subscriber; honours `RUST_LOG`.
pub fn init_logging() {
    rustkit_common::init_test_logging();
}
