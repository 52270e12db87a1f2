//! `filter` function lists.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

use crate::values::{split_function, split_top_level_whitespace};

/// Filter functions this engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Blur,
    Brightness,
    Contrast,
    Grayscale,
    HueRotate,
    Invert,
    Opacity,
    Saturate,
    Sepia,
}

impl FilterKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blur" => Some(FilterKind::Blur),
            "brightness" => Some(FilterKind::Brightness),
            "contrast" => Some(FilterKind::Contrast),
            "grayscale" => Some(FilterKind::Grayscale),
            "hue-rotate" => Some(FilterKind::HueRotate),
            "invert" => Some(FilterKind::Invert),
            "opacity" => Some(FilterKind::Opacity),
            "saturate" => Some(FilterKind::Saturate),
            "sepia" => Some(FilterKind::Sepia),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Grayscale => "grayscale",
            FilterKind::HueRotate => "hue-rotate",
            FilterKind::Invert => "invert",
            FilterKind::Opacity => "opacity",
            FilterKind::Saturate => "saturate",
            FilterKind::Sepia => "sepia",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterFunction {
    #[serde(rename = "type")]
    pub kind: FilterKind,
    /// Argument text as written, e.g. `5px` or `50%`.
    pub value: String,
}

pub type FilterList = SmallVec<[FilterFunction; 4]>;

/// Parse a `filter` value. Tokens that are not `name(value)` with a known
/// name are dropped; order is preserved.
pub fn parse_filter_list(raw: &str) -> FilterList {
    split_top_level_whitespace(raw)
        .into_iter()
        .filter_map(|token| {
            let parsed = split_function(token).and_then(|(name, value)| {
                Some(FilterFunction {
                    kind: FilterKind::from_name(name)?,
                    value: value.trim().to_string(),
                })
            });
            if parsed.is_none() {
                trace!(token, "dropping unrecognized filter");
            }
            parsed
        })
        .collect()
}
