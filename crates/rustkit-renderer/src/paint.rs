//! Paint descriptor assembly.
//!
//! Every sub-value is delegated to the `rustkit-css` parsers; this module
//! only decides which property feeds which slot.

use rustkit_css::{
    parse_border_radius, parse_border_shorthand, parse_box_shadow, parse_color,
    parse_filter_list, parse_gradient, parse_image_reference, parse_length, parse_line_height,
    parse_opacity, parse_text_shadow, split_top_level_whitespace, BorderShorthand, BorderStyle,
    Color, ComputedStyle, Corners, EdgeSet, FilterList, Gradient, LineHeight, ShadowList,
    TypedValue, Visibility,
};
use rustkit_layout::BoxModel;
use serde::Serialize;
use tracing::trace;

/// An image tiled across the background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundPattern {
    pub image: String,
    /// `repeat`, `repeat-x`, `repeat-y`, `space` or `round`.
    pub repeat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundDescriptor {
    pub color: Color,
    /// `background-image` as written.
    pub image: String,
    /// The `url()` reference inside `image`, if any.
    pub image_url: Option<String>,
    pub repeat: String,
    pub position: String,
    pub size: String,
    pub attachment: String,
    pub gradient: Option<Gradient>,
    pub pattern: Option<BackgroundPattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderDescriptor {
    /// Resolved widths, shared with the box model.
    pub width: EdgeSet<TypedValue>,
    pub style: EdgeSet<BorderStyle>,
    pub color: EdgeSet<Color>,
    pub radius: Corners<TypedValue>,
    pub image: Option<String>,
}

impl BorderDescriptor {
    /// Whether any edge has a visible style.
    pub fn is_visible(&self) -> bool {
        [self.style.top, self.style.right, self.style.bottom, self.style.left]
            .iter()
            .any(|style| style.is_visible())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: Color,
    pub font_family: String,
    pub font_size: TypedValue,
    pub font_weight: String,
    pub font_style: String,
    pub line_height: LineHeight,
    pub text_align: String,
    pub text_decoration: String,
    pub text_transform: String,
    pub letter_spacing: String,
}

/// Everything needed to paint one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintDescriptor {
    pub background: BackgroundDescriptor,
    pub border: BorderDescriptor,
    pub text: TextStyle,
    pub box_shadows: ShadowList,
    pub text_shadows: ShadowList,
    pub filters: FilterList,
    /// Clamped to `[0, 1]`.
    pub opacity: f64,
    pub visibility: Visibility,
}

impl PaintDescriptor {
    /// Whether painting this element can produce any pixels.
    pub fn is_painted(&self) -> bool {
        self.visibility == Visibility::Visible && self.opacity > 0.0
    }
}

pub fn assemble_paint(style: &ComputedStyle, box_model: &BoxModel) -> PaintDescriptor {
    PaintDescriptor {
        background: assemble_background(style),
        border: assemble_border(style, box_model),
        text: assemble_text(style),
        box_shadows: parse_box_shadow(style.get("box-shadow")),
        text_shadows: parse_text_shadow(style.get("text-shadow")),
        filters: parse_filter_list(style.get("filter")),
        opacity: parse_opacity(style.get("opacity")),
        visibility: Visibility::parse(style.get("visibility")),
    }
}

fn assemble_background(style: &ComputedStyle) -> BackgroundDescriptor {
    let image = style.get("background-image").trim().to_string();
    let image_url = parse_image_reference(&image);
    let repeat = style.get("background-repeat").trim().to_string();

    let pattern = match &image_url {
        Some(url) if repeat != "no-repeat" => Some(BackgroundPattern {
            image: url.clone(),
            repeat: repeat.clone(),
        }),
        _ => None,
    };

    BackgroundDescriptor {
        color: parse_color(style.get("background-color")),
        gradient: parse_gradient(&image),
        image,
        image_url,
        repeat,
        position: style.get("background-position").trim().to_string(),
        size: style.get("background-size").trim().to_string(),
        attachment: style.get("background-attachment").trim().to_string(),
        pattern,
    }
}

fn assemble_border(style: &ComputedStyle, box_model: &BoxModel) -> BorderDescriptor {
    let shorthand = style
        .explicit("border")
        .map(parse_border_shorthand)
        .unwrap_or_default();

    BorderDescriptor {
        width: box_model.border,
        style: border_styles(style, &shorthand),
        color: border_colors(style, &shorthand),
        radius: parse_border_radius(style.get("border-radius")),
        image: parse_image_reference(style.get("border-image-source")),
    }
}

/// `border-style` beats the `border` shorthand; per-side longhands beat both.
fn border_styles(style: &ComputedStyle, shorthand: &BorderShorthand) -> EdgeSet<BorderStyle> {
    let parse = |raw: &str| {
        BorderStyle::parse(raw).unwrap_or_else(|| {
            trace!(raw, "unrecognized border style");
            BorderStyle::None
        })
    };
    let base = match (style.explicit("border-style"), shorthand.style) {
        (Some(raw), _) => {
            let values: Vec<BorderStyle> = raw.split_whitespace().map(parse).collect();
            EdgeSet::expand(&values, BorderStyle::None)
        }
        (None, Some(shorthand_style)) => EdgeSet::uniform(shorthand_style),
        (None, None) => EdgeSet::uniform(BorderStyle::None),
    };
    let side = |name: &str, fallback: BorderStyle| style.explicit(name).map(parse).unwrap_or(fallback);
    EdgeSet {
        top: side("border-top-style", base.top),
        right: side("border-right-style", base.right),
        bottom: side("border-bottom-style", base.bottom),
        left: side("border-left-style", base.left),
    }
}

fn border_colors(style: &ComputedStyle, shorthand: &BorderShorthand) -> EdgeSet<Color> {
    let base = match (style.explicit("border-color"), &shorthand.color) {
        (Some(raw), _) => {
            let values: Vec<Color> = split_top_level_whitespace(raw)
                .into_iter()
                .map(parse_color)
                .collect();
            EdgeSet::expand(&values, Color::black())
        }
        (None, Some(color)) => EdgeSet::uniform(color.clone()),
        (None, None) => EdgeSet::uniform(parse_color(style.get("border-color"))),
    };
    let side = |name: &str, fallback: Color| style.explicit(name).map(parse_color).unwrap_or(fallback);
    EdgeSet {
        top: side("border-top-color", base.top),
        right: side("border-right-color", base.right),
        bottom: side("border-bottom-color", base.bottom),
        left: side("border-left-color", base.left),
    }
}

fn assemble_text(style: &ComputedStyle) -> TextStyle {
    let text = |name: &str| style.get(name).trim().to_string();
    TextStyle {
        color: parse_color(style.get("color")),
        font_family: text("font-family"),
        font_size: parse_length(style.get("font-size")),
        font_weight: text("font-weight"),
        font_style: text("font-style"),
        line_height: parse_line_height(style.get("line-height")),
        text_align: text("text-align"),
        text_decoration: text("text-decoration"),
        text_transform: text("text-transform"),
        letter_spacing: text("letter-spacing"),
    }
}
