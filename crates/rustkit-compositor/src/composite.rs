//! Composite descriptor: z-index, transforms, opacity and stacking.

use rustkit_css::{parse_finite, parse_opacity, parse_transform, ComputedStyle, TransformFunction};
use rustkit_layout::FlowFlags;
use serde::Serialize;
use tracing::trace;

use crate::matrix::{accumulate_matrix, AffineMatrix};
use crate::CompositeError;

/// Parse `z-index`.
///
/// `auto` is `None`. Integers parse as written; other finite numbers are
/// truncated. Anything else is `Some(0)`, which is not the same as `auto`.
pub fn parse_z_index(raw: &str) -> Option<i32> {
    let value = raw.trim();
    if value == "auto" {
        return None;
    }
    if let Ok(z) = value.parse::<i32>() {
        return Some(z);
    }
    match parse_finite(value) {
        Some(z) => Some(z.trunc() as i32),
        None => {
            trace!(raw = value, "unparsable z-index, using 0");
            Some(0)
        }
    }
}

/// Compositing data for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeDescriptor {
    /// `None` is `auto`.
    pub z_index: Option<i32>,
    pub transforms: Vec<TransformFunction>,
    pub matrix: AffineMatrix,
    pub opacity: f64,
    /// Superset of [`FlowFlags::creates_stacking_context`]: also set for
    /// opacity below 1, a non-empty transform list, or a positioned element
    /// with an explicit z-index.
    pub creates_stacking_context: bool,
    pub will_change: String,
    pub contain: String,
}

impl CompositeDescriptor {
    /// Key for z-ordering. `auto` sorts as 0.
    pub fn sort_key(&self) -> i32 {
        self.z_index.unwrap_or(0)
    }
}

/// Build the composite descriptor.
///
/// The element stacks if its flow does, if it is translucent, if it has any
/// transform, or if it is positioned with an explicit z-index.
pub fn build_composite(
    style: &ComputedStyle,
    flow: &FlowFlags,
) -> Result<CompositeDescriptor, CompositeError> {
    let z_index = parse_z_index(style.get("z-index"));
    let transforms = parse_transform(style.get("transform"));
    let matrix = accumulate_matrix(&transforms)?;
    let opacity = parse_opacity(style.get("opacity"));

    let creates_stacking_context = flow.creates_stacking_context
        || opacity < 1.0
        || !transforms.is_empty()
        || (flow.is_positioned && z_index.is_some());

    Ok(CompositeDescriptor {
        z_index,
        transforms,
        matrix,
        opacity,
        creates_stacking_context,
        will_change: style.get("will-change").to_string(),
        contain: style.get("contain").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(pairs: &[(&str, &str)]) -> CompositeDescriptor {
        let style = ComputedStyle::from_pairs(pairs.iter().copied());
        build_composite(&style, &FlowFlags::from_style(&style)).unwrap()
    }

    #[test]
    fn test_z_index() {
        assert_eq!(parse_z_index("auto"), None);
        assert_eq!(parse_z_index(" 5 "), Some(5));
        assert_eq!(parse_z_index("-3"), Some(-3));
        assert_eq!(parse_z_index("2.7"), Some(2));
        assert_eq!(parse_z_index("abc"), Some(0));
        assert_eq!(parse_z_index(""), Some(0));
    }

    #[test]
    fn test_defaults() {
        let c = composite(&[]);
        assert_eq!(c.z_index, None);
        assert_eq!(c.sort_key(), 0);
        assert!(c.transforms.is_empty());
        assert!(c.matrix.is_identity());
        assert_eq!(c.opacity, 1.0);
        assert!(!c.creates_stacking_context);
        assert_eq!(c.will_change, "auto");
        assert_eq!(c.contain, "none");
    }

    #[test]
    fn test_stacking_triggers() {
        assert!(composite(&[("opacity", "0.5")]).creates_stacking_context);
        assert!(composite(&[("transform", "scale(2)")]).creates_stacking_context);
        assert!(composite(&[("position", "relative"), ("z-index", "1")]).creates_stacking_context);
        assert!(!composite(&[("position", "relative")]).creates_stacking_context);
        assert!(!composite(&[("z-index", "1")]).creates_stacking_context);
        assert!(composite(&[("display", "grid")]).creates_stacking_context);
    }

    #[test]
    fn test_stacking_flag_covers_flow_flag() {
        let cases: &[&[(&str, &str)]] = &[
            &[],
            &[("display", "flex")],
            &[("position", "fixed")],
            &[("opacity", "0.2")],
            &[("transform", "rotate(45deg)")],
            &[("position", "absolute"), ("z-index", "3")],
        ];
        for pairs in cases {
            let style = ComputedStyle::from_pairs(pairs.iter().copied());
            let flow = FlowFlags::from_style(&style);
            let c = build_composite(&style, &flow).unwrap();
            assert!(!flow.creates_stacking_context || c.creates_stacking_context, "{pairs:?}");
        }

        let style = ComputedStyle::from_pairs([("opacity", "0.5")]);
        let flow = FlowFlags::from_style(&style);
        assert!(!flow.creates_stacking_context);
        assert!(build_composite(&style, &flow).unwrap().creates_stacking_context);
    }

    #[test]
    fn test_transform_list_and_matrix() {
        let c = composite(&[("transform", "translate(10px, 5px) skewX(10deg)")]);
        assert_eq!(c.transforms.len(), 2);
        assert_eq!(c.matrix.components(), [1.0, 0.0, 0.0, 1.0, 10.0, 5.0]);
    }

    #[test]
    fn test_pass_through_strings() {
        let c = composite(&[("will-change", "transform"), ("contain", "paint")]);
        assert_eq!(c.will_change, "transform");
        assert_eq!(c.contain, "paint");
    }
}
