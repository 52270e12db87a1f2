//! `box-shadow` and `text-shadow` lists.
//!
//! Each comma-separated segment must follow a fixed positional grammar:
//!
//! ```text
//! box-shadow:  [inset] <offset-x> <offset-y> <blur> [<spread>] <color...> [inset]
//! text-shadow:         <offset-x> <offset-y> <blur>            <color...>
//! ```
//!
//! The color clause consumes the rest of the segment. Segments that do not
//! fit are dropped whole; a partial shadow is never produced.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

use crate::color::{parse_color, Color};
use crate::values::{parse_signed_length, split_top_level_commas, split_top_level_whitespace, TypedValue};

/// A single shadow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shadow {
    pub offset_x: TypedValue,
    pub offset_y: TypedValue,
    pub blur_radius: TypedValue,
    /// Only box shadows carry a spread.
    pub spread_radius: Option<TypedValue>,
    pub color: Color,
    pub inset: bool,
}

/// Ordered shadow list, painted front to back.
pub type ShadowList = SmallVec<[Shadow; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShadowKind {
    Box,
    Text,
}

pub fn parse_box_shadow(raw: &str) -> ShadowList {
    parse_shadow_list(raw, ShadowKind::Box)
}

pub fn parse_text_shadow(raw: &str) -> ShadowList {
    parse_shadow_list(raw, ShadowKind::Text)
}

fn parse_shadow_list(raw: &str, kind: ShadowKind) -> ShadowList {
    if raw.trim().eq_ignore_ascii_case("none") {
        return ShadowList::new();
    }

    split_top_level_commas(raw)
        .into_iter()
        .filter_map(|segment| {
            let shadow = parse_segment(segment, kind);
            if shadow.is_none() {
                trace!(segment, ?kind, "dropping malformed shadow segment");
            }
            shadow
        })
        .collect()
}

fn parse_segment(segment: &str, kind: ShadowKind) -> Option<Shadow> {
    let mut tokens = split_top_level_whitespace(segment);
    let mut inset = false;

    if kind == ShadowKind::Box {
        if tokens.first() == Some(&"inset") {
            inset = true;
            tokens.remove(0);
        } else if tokens.last() == Some(&"inset") {
            inset = true;
            tokens.pop();
        }
    }

    let offset_x = parse_signed_length(tokens.first()?)?;
    let offset_y = parse_signed_length(tokens.get(1)?)?;
    let blur_radius = parse_signed_length(tokens.get(2)?)?;
    let mut rest = 3;

    let spread_radius = match kind {
        ShadowKind::Box => match tokens.get(3).and_then(|t| parse_signed_length(t)) {
            Some(spread) => {
                rest = 4;
                Some(spread)
            }
            None => Some(TypedValue::px(0.0)),
        },
        ShadowKind::Text => None,
    };

    let color_clause = tokens.get(rest..)?.join(" ");
    if color_clause.is_empty() {
        return None;
    }

    Some(Shadow {
        offset_x,
        offset_y,
        blur_radius,
        spread_radius,
        color: parse_color(&color_clause),
        inset,
    })
}
