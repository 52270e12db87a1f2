//! Box model resolution.
//!
//! Expands the four-sided shorthands and resolves `width`/`height` against
//! the parent. Two approximations are deliberate and documented:
//!
//! - `auto` sizes resolve to a fixed placeholder (100px by default), not to
//!   an intrinsic size.
//! - a missing parent dimension counts as 100px when resolving percentages.

use rustkit_css::{
    parse_border_shorthand, parse_edge_shorthand, parse_length, ComputedStyle, EdgeSet,
    LengthUnit, TypedValue,
};
use serde::Serialize;
use tracing::trace;

/// Knobs for the sizing approximations above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingPolicy {
    /// Size given to `auto` width/height.
    pub auto_size_placeholder: f64,
    /// Parent size assumed when the parent does not report one.
    pub default_parent_dimension: f64,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            auto_size_placeholder: 100.0,
            default_parent_dimension: 100.0,
        }
    }
}

/// Parent sizes used for percentage resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParentContext {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ParentContext {
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// Read the parent's `width`/`height`. Only absolute px values count;
    /// anything else leaves the dimension unknown.
    pub fn from_style(style: &ComputedStyle) -> Self {
        Self {
            width: px_value(parse_length(style.get("width"))),
            height: px_value(parse_length(style.get("height"))),
        }
    }

    /// Use an already resolved box as the parent.
    pub fn from_box_model(box_model: &BoxModel) -> Self {
        Self {
            width: px_value(box_model.width),
            height: px_value(box_model.height),
        }
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }
}

fn px_value(value: TypedValue) -> Option<f64> {
    match value {
        TypedValue::Calculated { value }
        | TypedValue::Length {
            value,
            unit: LengthUnit::Px,
        } => Some(value),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

/// Resolved box model of one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxModel {
    /// `box-sizing`, passed through as written.
    pub box_sizing: String,
    pub margin: EdgeSet<TypedValue>,
    pub padding: EdgeSet<TypedValue>,
    pub border: EdgeSet<TypedValue>,
    /// Content width; `Calculated` once `auto` or a percentage was resolved.
    pub width: TypedValue,
    pub height: TypedValue,
    pub min_width: TypedValue,
    pub min_height: TypedValue,
    /// `None` for `max-width: none`.
    pub max_width: Option<TypedValue>,
    pub max_height: Option<TypedValue>,
    pub aspect_ratio: Option<f64>,
}

pub fn resolve_box_model(style: &ComputedStyle, parent: &ParentContext) -> BoxModel {
    resolve_box_model_with(style, parent, &SizingPolicy::default())
}

pub fn resolve_box_model_with(
    style: &ComputedStyle,
    parent: &ParentContext,
    policy: &SizingPolicy,
) -> BoxModel {
    let width = resolve_dimension(
        parse_length(style.get("width")),
        parent.dimension(Dimension::Width),
        policy,
    );
    let height = resolve_dimension(
        parse_length(style.get("height")),
        parent.dimension(Dimension::Height),
        policy,
    );

    let limit = |name: &str, dimension: Dimension| {
        resolve_percentage(
            parse_length(style.get(name)),
            parent.dimension(dimension),
            policy,
        )
    };
    let max_limit = |name: &str, dimension: Dimension| {
        let raw = style.get(name).trim();
        (raw != "none").then(|| limit(name, dimension))
    };

    BoxModel {
        box_sizing: style.get("box-sizing").trim().to_string(),
        margin: with_longhands(
            style,
            parse_edge_shorthand(style.get("margin")),
            ["margin-top", "margin-right", "margin-bottom", "margin-left"],
        ),
        padding: with_longhands(
            style,
            parse_edge_shorthand(style.get("padding")),
            ["padding-top", "padding-right", "padding-bottom", "padding-left"],
        ),
        border: border_widths(style),
        width,
        height,
        min_width: limit("min-width", Dimension::Width),
        min_height: limit("min-height", Dimension::Height),
        max_width: max_limit("max-width", Dimension::Width),
        max_height: max_limit("max-height", Dimension::Height),
        aspect_ratio: parse_aspect_ratio(style.get("aspect-ratio")),
    }
}

/// Resolve `width`/`height`: `auto` becomes the placeholder, percentages
/// resolve against the parent.
pub fn resolve_dimension(
    value: TypedValue,
    parent_size: Option<f64>,
    policy: &SizingPolicy,
) -> TypedValue {
    if value.is_auto() {
        return TypedValue::calculated(policy.auto_size_placeholder);
    }
    resolve_percentage(value, parent_size, policy)
}

fn resolve_percentage(value: TypedValue, parent_size: Option<f64>, policy: &SizingPolicy) -> TypedValue {
    match value {
        TypedValue::Length {
            value: percent,
            unit: LengthUnit::Percent,
        } => {
            let base = parent_size.unwrap_or(policy.default_parent_dimension);
            TypedValue::calculated(percent / 100.0 * base)
        }
        other => other,
    }
}

/// Explicit longhands (`margin-top`, ...) override the expanded shorthand.
fn with_longhands(
    style: &ComputedStyle,
    base: EdgeSet<TypedValue>,
    [top, right, bottom, left]: [&str; 4],
) -> EdgeSet<TypedValue> {
    let pick = |name: &str, fallback: TypedValue| style.explicit(name).map(parse_length).unwrap_or(fallback);
    EdgeSet {
        top: pick(top, base.top),
        right: pick(right, base.right),
        bottom: pick(bottom, base.bottom),
        left: pick(left, base.left),
    }
}

/// `border-width` wins over the width inside a `border` shorthand.
fn border_widths(style: &ComputedStyle) -> EdgeSet<TypedValue> {
    let base = match (style.explicit("border-width"), style.explicit("border")) {
        (Some(widths), _) => parse_edge_shorthand(widths),
        (None, Some(border)) => EdgeSet::uniform(
            parse_border_shorthand(border)
                .width
                .unwrap_or(TypedValue::px(0.0)),
        ),
        (None, None) => parse_edge_shorthand(style.get("border-width")),
    };
    with_longhands(
        style,
        base,
        [
            "border-top-width",
            "border-right-width",
            "border-bottom-width",
            "border-left-width",
        ],
    )
}

/// Parse `<number> / <number>`. Anything else, including a zero
/// denominator, is `None`.
pub fn parse_aspect_ratio(raw: &str) -> Option<f64> {
    let (width, height) = raw.split_once('/')?;
    let width = ratio_term(width)?;
    let height = ratio_term(height)?;
    let ratio = width / height;
    if height == 0.0 || !ratio.is_finite() {
        trace!(raw, "invalid aspect ratio");
        return None;
    }
    Some(ratio)
}

fn ratio_term(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let (int, frac) = match raw.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (raw, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || frac.is_some_and(|f| !digits(f)) {
        return None;
    }
    raw.parse::<f64>().ok()
}
