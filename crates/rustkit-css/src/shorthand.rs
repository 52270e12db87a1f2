//! Four-sided shorthand expansion (`margin`, `padding`, `border-*`,
//! `border-radius`).
//!
//! Expansion is positional:
//!
//! | tokens | slot 0 | slot 1 | slot 2 | slot 3 |
//! |--------|--------|--------|--------|--------|
//! | 1      | a      | a      | a      | a      |
//! | 2      | a      | b      | a      | b      |
//! | 3      | a      | b      | c      | b      |
//! | 4      | a      | b      | c      | d      |
//!
//! Slots are top/right/bottom/left for edges and
//! top-left/top-right/bottom-right/bottom-left for corners. Tokens past the
//! fourth are ignored.

use serde::Serialize;

use crate::color::{parse_color, Color};
use crate::keywords::BorderStyle;
use crate::values::{parse_length, parse_signed_length, split_top_level_whitespace, TypedValue};

/// One value per box edge. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeSet<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> EdgeSet<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Expand 1–4 positional values. An empty slice yields `fallback` on
    /// every edge.
    pub fn expand(values: &[T], fallback: T) -> Self {
        let [top, right, bottom, left] = expand_positional(values, fallback);
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> EdgeSet<U> {
        EdgeSet {
            top: f(&self.top),
            right: f(&self.right),
            bottom: f(&self.bottom),
            left: f(&self.left),
        }
    }
}

/// One value per box corner. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T: Clone> Corners<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            top_left: value.clone(),
            top_right: value.clone(),
            bottom_right: value.clone(),
            bottom_left: value,
        }
    }

    pub fn expand(values: &[T], fallback: T) -> Self {
        let [top_left, top_right, bottom_right, bottom_left] = expand_positional(values, fallback);
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }
}

fn expand_positional<T: Clone>(values: &[T], fallback: T) -> [T; 4] {
    match values {
        [] => [fallback.clone(), fallback.clone(), fallback.clone(), fallback],
        [a] => [a.clone(), a.clone(), a.clone(), a.clone()],
        [a, b] => [a.clone(), b.clone(), a.clone(), b.clone()],
        [a, b, c] => [a.clone(), b.clone(), c.clone(), b.clone()],
        [a, b, c, d, ..] => [a.clone(), b.clone(), c.clone(), d.clone()],
    }
}

/// Expand a whitespace-separated edge shorthand into typed lengths.
pub fn parse_edge_shorthand(raw: &str) -> EdgeSet<TypedValue> {
    let values: Vec<TypedValue> = raw.split_whitespace().map(parse_length).collect();
    EdgeSet::expand(&values, TypedValue::Unknown)
}

/// Expand `border-radius` into its four corners.
pub fn parse_border_radius(raw: &str) -> Corners<TypedValue> {
    let values: Vec<TypedValue> = raw.split_whitespace().map(parse_length).collect();
    Corners::expand(&values, TypedValue::Unknown)
}

/// Components of a `border` (or `border-top`, ...) shorthand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderShorthand {
    pub width: Option<TypedValue>,
    pub style: Option<BorderStyle>,
    pub color: Option<Color>,
}

/// Split `border: <width> <style> <color>` into its parts, in any order.
///
/// Width keywords (`thin`, `medium`, `thick`) map to 1/3/5px. The first
/// token that is neither a width nor a style is taken as the color.
pub fn parse_border_shorthand(raw: &str) -> BorderShorthand {
    let mut result = BorderShorthand::default();

    for token in split_top_level_whitespace(raw) {
        if result.width.is_none() {
            if let Some(width) = border_width_token(token) {
                result.width = Some(width);
                continue;
            }
        }
        if result.style.is_none() {
            if let Some(style) = BorderStyle::parse(token) {
                result.style = Some(style);
                continue;
            }
        }
        if result.color.is_none() {
            result.color = Some(parse_color(token));
        }
    }

    result
}

fn border_width_token(token: &str) -> Option<TypedValue> {
    match token {
        "thin" => Some(TypedValue::px(1.0)),
        "medium" => Some(TypedValue::px(3.0)),
        "thick" => Some(TypedValue::px(5.0)),
        _ => parse_signed_length(token).filter(|v| !v.is_auto()),
    }
}
