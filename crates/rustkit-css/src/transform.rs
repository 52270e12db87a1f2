//! `transform` function lists.
//!
//! This module only parses; matrix accumulation lives in
//! `rustkit-compositor`.

use serde::Serialize;
use tracing::trace;

use crate::values::{parse_length, split_function, split_top_level_whitespace, TypedValue};

/// Transform functions, named as in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformKind {
    Translate,
    TranslateX,
    TranslateY,
    TranslateZ,
    Translate3d,
    Rotate,
    RotateX,
    RotateY,
    RotateZ,
    Rotate3d,
    Scale,
    ScaleX,
    ScaleY,
    ScaleZ,
    Scale3d,
    Skew,
    SkewX,
    SkewY,
    Matrix,
    Matrix3d,
    Perspective,
}

impl TransformKind {
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "translate" => TransformKind::Translate,
            "translateX" => TransformKind::TranslateX,
            "translateY" => TransformKind::TranslateY,
            "translateZ" => TransformKind::TranslateZ,
            "translate3d" => TransformKind::Translate3d,
            "rotate" => TransformKind::Rotate,
            "rotateX" => TransformKind::RotateX,
            "rotateY" => TransformKind::RotateY,
            "rotateZ" => TransformKind::RotateZ,
            "rotate3d" => TransformKind::Rotate3d,
            "scale" => TransformKind::Scale,
            "scaleX" => TransformKind::ScaleX,
            "scaleY" => TransformKind::ScaleY,
            "scaleZ" => TransformKind::ScaleZ,
            "scale3d" => TransformKind::Scale3d,
            "skew" => TransformKind::Skew,
            "skewX" => TransformKind::SkewX,
            "skewY" => TransformKind::SkewY,
            "matrix" => TransformKind::Matrix,
            "matrix3d" => TransformKind::Matrix3d,
            "perspective" => TransformKind::Perspective,
            _ => return None,
        };
        Some(kind)
    }
}

/// One parsed transform function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformFunction {
    pub kind: TransformKind,
    /// Each argument run through `parse_length`. Angles and unitless numbers
    /// show up as `Unknown` here; `raw_args` keeps the text.
    pub args: Vec<TypedValue>,
    pub raw_args: Vec<String>,
}

/// Parse a `transform` value into its functions, in order. `none` and
/// unrecognized tokens contribute nothing.
pub fn parse_transform(raw: &str) -> Vec<TransformFunction> {
    split_top_level_whitespace(raw)
        .into_iter()
        .filter_map(|token| {
            let parsed = split_function(token).and_then(|(name, args)| {
                let kind = TransformKind::from_name(name)?;
                let raw_args: Vec<String> = args
                    .split(',')
                    .map(str::trim)
                    .filter(|arg| !arg.is_empty())
                    .map(str::to_string)
                    .collect();
                Some(TransformFunction {
                    kind,
                    args: raw_args.iter().map(|arg| parse_length(arg)).collect(),
                    raw_args,
                })
            });
            if parsed.is_none() && token != "none" {
                trace!(token, "dropping unrecognized transform function");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transform_list() {
        let functions = parse_transform("translate(10px, 20%) rotate(45deg) scaleX(2)");
        assert_eq!(functions.len(), 3);
        assert_eq!(functions[0].kind, TransformKind::Translate);
        assert_eq!(functions[0].args[0], TypedValue::px(10.0));
        assert_eq!(functions[0].raw_args, vec!["10px", "20%"]);
        assert_eq!(functions[1].kind, TransformKind::Rotate);
        assert_eq!(functions[1].args, vec![TypedValue::Unknown]);
        assert_eq!(functions[1].raw_args, vec!["45deg"]);
        assert_eq!(functions[2].kind, TransformKind::ScaleX);
    }

    #[test]
    fn test_all_names_recognized() {
        let names = [
            "translate", "translateX", "translateY", "translateZ", "translate3d", "rotate",
            "rotateX", "rotateY", "rotateZ", "rotate3d", "scale", "scaleX", "scaleY", "scaleZ",
            "scale3d", "skew", "skewX", "skewY", "matrix", "matrix3d", "perspective",
        ];
        for name in names {
            assert!(TransformKind::from_name(name).is_some(), "{name}");
        }
        assert!(TransformKind::from_name("twist").is_none());
    }

    #[test]
    fn test_unrecognized_tokens_dropped() {
        assert!(parse_transform("none").is_empty());
        let functions = parse_transform("wobble(1) scale(2)");
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].kind, TransformKind::Scale);
    }
}
