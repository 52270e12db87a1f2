//! Flow classification from `display`, `position`, `float` and `contain`.

use rustkit_css::ComputedStyle;
use serde::Serialize;

/// CSS display property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    ListItem,
    Table,
    InlineTable,
    TableCell,
    TableCaption,
    Flex,
    InlineFlex,
    Grid,
    InlineGrid,
    Contents,
    None,
    /// Anything else; classifies as neither block nor inline.
    Other,
}

impl Display {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "block" => Display::Block,
            "inline" => Display::Inline,
            "inline-block" => Display::InlineBlock,
            "list-item" => Display::ListItem,
            "table" => Display::Table,
            "inline-table" => Display::InlineTable,
            "table-cell" => Display::TableCell,
            "table-caption" => Display::TableCaption,
            "flex" => Display::Flex,
            "inline-flex" => Display::InlineFlex,
            "grid" => Display::Grid,
            "inline-grid" => Display::InlineGrid,
            "contents" => Display::Contents,
            "none" => Display::None,
            _ => Display::Other,
        }
    }

    pub fn is_block_level(self) -> bool {
        matches!(
            self,
            Display::Block | Display::ListItem | Display::Table | Display::Flex | Display::Grid
        )
    }

    pub fn is_inline_level(self) -> bool {
        matches!(
            self,
            Display::Inline
                | Display::InlineBlock
                | Display::InlineTable
                | Display::InlineFlex
                | Display::InlineGrid
        )
    }
}

/// CSS position property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    /// Unrecognized values count as `static`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "relative" => Position::Relative,
            "absolute" => Position::Absolute,
            "fixed" => Position::Fixed,
            "sticky" => Position::Sticky,
            _ => Position::Static,
        }
    }

    pub fn is_positioned(self) -> bool {
        self != Position::Static
    }
}

/// CSS float property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Float {
    #[default]
    None,
    Left,
    Right,
    InlineStart,
    InlineEnd,
    /// Any other value. Still "not none", so it floats.
    Unrecognized,
}

impl Float {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "none" => Float::None,
            "left" => Float::Left,
            "right" => Float::Right,
            "inline-start" => Float::InlineStart,
            "inline-end" => Float::InlineEnd,
            _ => Float::Unrecognized,
        }
    }

    pub fn is_floated(self) -> bool {
        self != Float::None
    }
}

/// `contain` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Containment {
    pub layout: bool,
    pub paint: bool,
    pub size: bool,
    pub style: bool,
    pub strict: bool,
    pub content: bool,
}

impl Containment {
    pub fn any(&self) -> bool {
        self.layout || self.paint || self.size || self.style || self.strict || self.content
    }
}

/// Substring tests for `layout`/`paint`/`size`/`style`, exact match for
/// `strict` and `content`. `strict` does not imply the others.
pub fn classify_containment(contain: &str) -> Containment {
    let contain = contain.trim();
    Containment {
        layout: contain.contains("layout"),
        paint: contain.contains("paint"),
        size: contain.contains("size"),
        style: contain.contains("style"),
        strict: contain == "strict",
        content: contain == "content",
    }
}

/// Flow flags for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FlowFlags {
    pub display: Display,
    pub position: Position,
    pub float: Float,
    pub is_block: bool,
    pub is_inline: bool,
    pub is_positioned: bool,
    pub is_floated: bool,
    pub creates_stacking_context: bool,
    pub creates_block_formatting_context: bool,
    pub containment: Containment,
}

impl FlowFlags {
    pub fn from_style(style: &ComputedStyle) -> Self {
        let mut flags = classify_flow(
            style.get("display"),
            style.get("position"),
            style.get("float"),
        );
        flags.containment = classify_containment(style.get("contain"));
        flags
    }
}

/// Classify the three flow keywords. Containment is left empty; see
/// [`FlowFlags::from_style`].
pub fn classify_flow(display: &str, position: &str, float: &str) -> FlowFlags {
    let display = Display::parse(display);
    let position = Position::parse(position);
    let float = Float::parse(float);

    let creates_stacking_context =
        matches!(position, Position::Absolute | Position::Fixed | Position::Sticky)
            || matches!(display, Display::Flex | Display::Grid | Display::Table);
    let creates_block_formatting_context = float.is_floated()
        || matches!(
            display,
            Display::Flex
                | Display::Grid
                | Display::TableCell
                | Display::TableCaption
                | Display::Block
        );

    FlowFlags {
        display,
        position,
        float,
        is_block: display.is_block_level(),
        is_inline: display.is_inline_level(),
        is_positioned: position.is_positioned(),
        is_floated: float.is_floated(),
        creates_stacking_context,
        creates_block_formatting_context,
        containment: Containment::default(),
    }
}
