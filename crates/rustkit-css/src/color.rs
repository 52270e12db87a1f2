//! Color resolution.
//!
//! [`parse_color`] tries, in order: a bare name, `#RGB`/`#RRGGBB`,
//! `rgb()`/`rgba()`, `hsl()`/`hsla()`. The first form that matches wins;
//! anything else is [`Color::Unknown`]. Every variant carries a canonical
//! `#rrggbb` string.

use serde::Serialize;
use tracing::trace;

const BLACK_HEX: &str = "#000000";

/// A resolved CSS color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Color {
    /// A bare name. Names outside the built-in table resolve to black but
    /// keep the token as written.
    Named { name: String, hex: String },
    /// A hex literal; `hex` is the literal as written.
    Hex { hex: String },
    Rgb {
        r: u8,
        g: u8,
        b: u8,
        a: f64,
        hex: String,
    },
    /// `s` and `l` are percentages as written (`100` for `100%`).
    Hsl {
        h: f64,
        s: f64,
        l: f64,
        a: f64,
        hex: String,
    },
    Unknown { raw: String, hex: String },
}

impl Color {
    pub fn black() -> Self {
        Color::Named {
            name: "black".to_string(),
            hex: BLACK_HEX.to_string(),
        }
    }

    pub fn transparent() -> Self {
        Color::Named {
            name: "transparent".to_string(),
            hex: BLACK_HEX.to_string(),
        }
    }

    /// Canonical hex representation.
    pub fn hex(&self) -> &str {
        match self {
            Color::Named { hex, .. }
            | Color::Hex { hex }
            | Color::Rgb { hex, .. }
            | Color::Hsl { hex, .. }
            | Color::Unknown { hex, .. } => hex,
        }
    }

    /// Alpha channel in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Named { name, .. } if name.eq_ignore_ascii_case("transparent") => 0.0,
            Color::Rgb { a, .. } | Color::Hsl { a, .. } => *a,
            _ => 1.0,
        }
    }

    /// Red, green and blue channels decoded from the canonical hex.
    pub fn rgb(&self) -> (u8, u8, u8) {
        decode_hex(self.hex()).unwrap_or((0, 0, 0))
    }

    /// `[r, g, b, a]` in `[0, 1]`, the layout rasterizers usually want.
    pub fn to_f64_array(&self) -> [f64; 4] {
        let (r, g, b) = self.rgb();
        [
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            self.alpha(),
        ]
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Color::Unknown { .. })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Resolve a color string. Never fails; see the module docs for the order.
pub fn parse_color(raw: &str) -> Color {
    let value = raw.trim();

    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
        let hex = named_color_hex(&value.to_ascii_lowercase()).unwrap_or(BLACK_HEX);
        return Color::Named {
            name: value.to_string(),
            hex: hex.to_string(),
        };
    }

    if is_hex_literal(value) {
        return Color::Hex {
            hex: value.to_string(),
        };
    }

    if let Some(color) = parse_rgb_function(value) {
        return color;
    }

    if let Some(color) = parse_hsl_function(value) {
        return color;
    }

    trace!(raw = value, "unrecognized color, using #000000");
    Color::Unknown {
        raw: value.to_string(),
        hex: BLACK_HEX.to_string(),
    }
}

fn named_color_hex(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some("#000000"),
        "white" => Some("#ffffff"),
        "red" => Some("#ff0000"),
        "green" => Some("#008000"),
        "blue" => Some("#0000ff"),
        "yellow" => Some("#ffff00"),
        "cyan" => Some("#00ffff"),
        "magenta" => Some("#ff00ff"),
        "transparent" => Some("#000000"),
        _ => None,
    }
}

fn is_hex_literal(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn decode_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1].repeat(2), 16).ok();
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Arguments of `<prefix>(...)` or `<prefix>a(...)`, split on commas.
fn function_args<'a>(value: &'a str, prefix: &str) -> Option<Vec<&'a str>> {
    let lower = value.to_ascii_lowercase();
    let open = if lower.starts_with(&format!("{prefix}a(")) {
        prefix.len() + 2
    } else if lower.starts_with(&format!("{prefix}(")) {
        prefix.len() + 1
    } else {
        return None;
    };
    let inner = value.get(open..)?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    matches!(parts.len(), 3 | 4).then_some(parts)
}

fn parse_alpha(parts: &[&str]) -> Option<f64> {
    match parts.get(3) {
        Some(raw) => {
            let a = raw.parse::<f64>().ok().filter(|a| a.is_finite())?;
            Some(a.clamp(0.0, 1.0))
        }
        None => Some(1.0),
    }
}

fn parse_rgb_function(value: &str) -> Option<Color> {
    let parts = function_args(value, "rgb")?;
    let channel = |raw: &str| raw.parse::<u32>().ok().map(|v| v.min(255) as u8);
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = parse_alpha(&parts)?;
    Some(Color::Rgb {
        r,
        g,
        b,
        a,
        hex: format_hex(r, g, b),
    })
}

fn parse_hsl_function(value: &str) -> Option<Color> {
    let parts = function_args(value, "hsl")?;
    let h = parts[0]
        .trim_end_matches("deg")
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite())?;
    let percent = |raw: &str| {
        raw.strip_suffix('%')?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    };
    let s = percent(parts[1])?;
    let l = percent(parts[2])?;
    let a = parse_alpha(&parts)?;
    let (r, g, b) = hsl_to_rgb(h, s / 100.0, l / 100.0);
    Some(Color::Hsl {
        h,
        s,
        l,
        a,
        hex: format_hex(r, g, b),
    })
}

/// Standard HSL → RGB: chroma, second-largest component, lightness offset,
/// six 60° hue sectors.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (to_byte(r + m), to_byte(g + m), to_byte(b + m))
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
