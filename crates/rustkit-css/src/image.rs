//! `<image>` values: `url()` references and gradients.

use serde::Serialize;

use crate::color::{parse_color, Color};
use crate::values::{
    leading_number, parse_length, split_function, split_top_level_commas,
    split_top_level_whitespace, TypedValue,
};

/// Extract the reference from `url(...)`, with or without quotes.
///
/// `none`, gradients and anything else that is not a `url()` yield `None`.
pub fn parse_image_reference(raw: &str) -> Option<String> {
    let (name, args) = split_function(raw)?;
    if !name.eq_ignore_ascii_case("url") {
        return None;
    }
    let reference = args
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    (!reference.is_empty()).then(|| reference.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientKind {
    Linear,
    Radial,
    RepeatingLinear,
    RepeatingRadial,
}

impl GradientKind {
    pub fn from_function_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear-gradient" => Some(GradientKind::Linear),
            "radial-gradient" => Some(GradientKind::Radial),
            "repeating-linear-gradient" => Some(GradientKind::RepeatingLinear),
            "repeating-radial-gradient" => Some(GradientKind::RepeatingRadial),
            _ => None,
        }
    }

    pub fn is_radial(self) -> bool {
        matches!(self, GradientKind::Radial | GradientKind::RepeatingRadial)
    }
}

/// A color stop with its optional position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub color: Color,
    pub position: Option<TypedValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub kind: GradientKind,
    /// Direction, angle or radial shape clause as written (`to right`,
    /// `45deg`, `circle at center`).
    pub direction: Option<String>,
    pub stops: Vec<ColorStop>,
}

/// Parse a gradient function. Returns `None` for anything that is not one of
/// the four gradient functions or that has no color stops.
pub fn parse_gradient(raw: &str) -> Option<Gradient> {
    let (name, args) = split_function(raw)?;
    let kind = GradientKind::from_function_name(name)?;
    let mut args = split_top_level_commas(args).into_iter().peekable();

    let direction = match args.peek() {
        Some(first) if is_direction_clause(first, kind) => args.next().map(str::to_string),
        _ => None,
    };

    let stops: Vec<ColorStop> = args.map(parse_color_stop).collect();
    if stops.is_empty() {
        return None;
    }

    Some(Gradient {
        kind,
        direction,
        stops,
    })
}

fn is_direction_clause(arg: &str, kind: GradientKind) -> bool {
    let lower = arg.to_ascii_lowercase();
    if lower.starts_with("to ") {
        return true;
    }
    if leading_number(&lower).is_some()
        && ["deg", "rad", "grad", "turn"]
            .iter()
            .any(|unit| lower.ends_with(unit))
    {
        return true;
    }
    kind.is_radial()
        && ["circle", "ellipse", "at ", "closest-", "farthest-"]
            .iter()
            .any(|word| lower.contains(word))
}

fn parse_color_stop(arg: &str) -> ColorStop {
    let tokens = split_top_level_whitespace(arg);
    ColorStop {
        color: parse_color(tokens.first().copied().unwrap_or_default()),
        position: tokens.get(1).map(|raw| parse_length(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::LengthUnit;

    #[test]
    fn test_image_reference() {
        assert_eq!(parse_image_reference("url(a.png)"), Some("a.png".to_string()));
        assert_eq!(
            parse_image_reference("url(\"img/b c.jpg\")"),
            Some("img/b c.jpg".to_string())
        );
        assert_eq!(parse_image_reference("url('x.svg')"), Some("x.svg".to_string()));
        assert_eq!(parse_image_reference("url()"), None);
        assert_eq!(parse_image_reference("none"), None);
        assert_eq!(parse_image_reference("linear-gradient(red, blue)"), None);
    }

    #[test]
    fn test_linear_gradient() {
        let gradient = parse_gradient("linear-gradient(to right, red 0%, rgba(0, 0, 255, 0.5) 100%)")
            .expect("gradient");
        assert_eq!(gradient.kind, GradientKind::Linear);
        assert_eq!(gradient.direction.as_deref(), Some("to right"));
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[0].color.hex(), "#ff0000");
        assert_eq!(
            gradient.stops[1].position,
            Some(TypedValue::length(100.0, LengthUnit::Percent))
        );
    }

    #[test]
    fn test_gradient_without_direction() {
        let gradient = parse_gradient("repeating-radial-gradient(white, black)").expect("gradient");
        assert_eq!(gradient.kind, GradientKind::RepeatingRadial);
        assert_eq!(gradient.direction, None);
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[1].position, None);
    }

    #[test]
    fn test_gradient_angle_and_shape() {
        let gradient = parse_gradient("linear-gradient(45deg, red, blue)").expect("gradient");
        assert_eq!(gradient.direction.as_deref(), Some("45deg"));

        let gradient = parse_gradient("radial-gradient(circle at center, red, blue)").expect("gradient");
        assert_eq!(gradient.direction.as_deref(), Some("circle at center"));
    }

    #[test]
    fn test_not_a_gradient() {
        assert!(parse_gradient("url(a.png)").is_none());
        assert!(parse_gradient("linear-gradient()").is_none());
        assert!(parse_gradient("linear-gradient(to right)").is_none());
    }
}
