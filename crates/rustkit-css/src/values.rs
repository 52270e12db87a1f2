//! Typed CSS values.
//!
//! Every parser in this module is fail-open: malformed input degrades to a
//! sentinel ([`TypedValue::Unknown`], opacity `1.0`, ...) instead of
//! returning an error. Callers treat `Unknown` like zero.

use serde::Serialize;
use tracing::trace;

/// Units a [`TypedValue::Length`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Percent,
    Vh,
    Vw,
    Vmin,
    Vmax,
}

impl LengthUnit {
    /// Look up a unit by its CSS suffix (`px`, `%`, `vmin`, ...).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(LengthUnit::Px),
            "em" => Some(LengthUnit::Em),
            "rem" => Some(LengthUnit::Rem),
            "%" => Some(LengthUnit::Percent),
            "vh" => Some(LengthUnit::Vh),
            "vw" => Some(LengthUnit::Vw),
            "vmin" => Some(LengthUnit::Vmin),
            "vmax" => Some(LengthUnit::Vmax),
            _ => None,
        }
    }

    /// The CSS suffix for this unit.
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Percent => "%",
            LengthUnit::Vh => "vh",
            LengthUnit::Vw => "vw",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
        }
    }
}

/// Keywords that `parse_length` recognizes. All of them carry the `auto`
/// unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CssKeyword {
    Auto,
    Inherit,
    Initial,
}

impl CssKeyword {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(CssKeyword::Auto),
            "inherit" => Some(CssKeyword::Inherit),
            "initial" => Some(CssKeyword::Initial),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CssKeyword::Auto => "auto",
            CssKeyword::Inherit => "inherit",
            CssKeyword::Initial => "initial",
        }
    }
}

/// A parsed length-like value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypedValue {
    /// `auto`, `inherit` or `initial`.
    Keyword { keyword: CssKeyword },
    /// A number with a unit, exactly as written.
    Length { value: f64, unit: LengthUnit },
    /// A value resolved by the engine; always in px.
    Calculated { value: f64 },
    /// Anything that did not parse. Magnitude 0, unit px.
    #[default]
    Unknown,
}

impl TypedValue {
    pub fn px(value: f64) -> Self {
        TypedValue::Length {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub fn length(value: f64, unit: LengthUnit) -> Self {
        TypedValue::Length { value, unit }
    }

    pub fn calculated(value: f64) -> Self {
        TypedValue::Calculated { value }
    }

    pub fn keyword(keyword: CssKeyword) -> Self {
        TypedValue::Keyword { keyword }
    }

    /// The numeric part. Keywords and unknown values report 0.
    pub fn magnitude(&self) -> f64 {
        match self {
            TypedValue::Length { value, .. } | TypedValue::Calculated { value } => *value,
            TypedValue::Keyword { .. } | TypedValue::Unknown => 0.0,
        }
    }

    /// The unit tag. `None` stands for the `auto` tag carried by keywords.
    pub fn unit(&self) -> Option<LengthUnit> {
        match self {
            TypedValue::Length { unit, .. } => Some(*unit),
            TypedValue::Calculated { .. } | TypedValue::Unknown => Some(LengthUnit::Px),
            TypedValue::Keyword { .. } => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(
            self,
            TypedValue::Keyword {
                keyword: CssKeyword::Auto
            }
        )
    }

    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            TypedValue::Length {
                unit: LengthUnit::Percent,
                ..
            }
        )
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TypedValue::Unknown)
    }

    /// Convert to pixels.
    ///
    /// Percentages resolve against `container`; keywords and unknown values
    /// are 0.
    pub fn to_px(&self, ctx: &LengthContext, container: f64) -> f64 {
        match *self {
            TypedValue::Length { value, unit } => match unit {
                LengthUnit::Px => value,
                LengthUnit::Em => value * ctx.font_size,
                LengthUnit::Rem => value * ctx.root_font_size,
                LengthUnit::Percent => value / 100.0 * container,
                LengthUnit::Vw => value / 100.0 * ctx.viewport_width,
                LengthUnit::Vh => value / 100.0 * ctx.viewport_height,
                LengthUnit::Vmin => value / 100.0 * ctx.viewport_width.min(ctx.viewport_height),
                LengthUnit::Vmax => value / 100.0 * ctx.viewport_width.max(ctx.viewport_height),
            },
            TypedValue::Calculated { value } => value,
            TypedValue::Keyword { .. } | TypedValue::Unknown => 0.0,
        }
    }
}

/// Inputs needed to turn relative units into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthContext {
    pub font_size: f64,
    pub root_font_size: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for LengthContext {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            root_font_size: 16.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
        }
    }
}

/// Parse a length: a CSS-wide keyword, or `<digits>[.<digits>]<unit>`.
///
/// Surrounding whitespace is ignored, so `" 10px "` parses like `"10px"`.
/// Signs, exponents and unitless numbers are not lengths here and come back
/// as [`TypedValue::Unknown`], as does whitespace inside the value.
pub fn parse_length(raw: &str) -> TypedValue {
    let value = raw.trim();

    if let Some(keyword) = CssKeyword::parse(value) {
        return TypedValue::Keyword { keyword };
    }

    if let Some((number, suffix)) = split_unsigned_number(value) {
        if let Some(unit) = LengthUnit::from_suffix(suffix) {
            return TypedValue::Length {
                value: number,
                unit,
            };
        }
    }

    trace!(raw = value, "unrecognized length");
    TypedValue::Unknown
}

/// Parse a length that may carry a sign. A bare `0` is accepted as `0px`.
///
/// Used inside shadow clauses where negative offsets are common.
pub fn parse_signed_length(raw: &str) -> Option<TypedValue> {
    let value = raw.trim();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if rest == "0" {
        return Some(TypedValue::px(0.0));
    }

    match parse_length(rest) {
        TypedValue::Length { value, unit } => Some(TypedValue::Length {
            value: if negative { -value } else { value },
            unit,
        }),
        _ => None,
    }
}

/// The leading floating point number of a string, the way `parseFloat`
/// reads it: `"10px"` is 10, `"-1.5e2deg"` is -150, `"px"` is `None`.
pub fn leading_number(raw: &str) -> Option<f64> {
    let value = raw.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    value[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// `line-height` value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineHeight {
    /// `normal`, carried as its conventional 1.2 factor.
    Normal { value: f64 },
    /// A unitless multiplier.
    Number { value: f64 },
    /// Anything else, parsed as a length.
    Length { value: TypedValue },
}

impl Default for LineHeight {
    fn default() -> Self {
        LineHeight::Normal { value: 1.2 }
    }
}

pub fn parse_line_height(raw: &str) -> LineHeight {
    let value = raw.trim();
    if value == "normal" {
        return LineHeight::default();
    }
    if let Some(number) = parse_finite(value) {
        return LineHeight::Number { value: number };
    }
    LineHeight::Length {
        value: parse_length(value),
    }
}

/// Parse `opacity`, clamped to `[0, 1]`.
///
/// Non-numeric input yields `1.0` (fully opaque).
pub fn parse_opacity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value.clamp(0.0, 1.0),
        _ => {
            trace!(raw, "non-numeric opacity, using 1.0");
            1.0
        }
    }
}

/// A plain finite number (`"1.5"`, `"-2"`), nothing trailing.
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split `<digits>[.<digits>]` off the front of `value`.
fn split_unsigned_number(value: &str) -> Option<(f64, &str)> {
    let bytes = value.as_bytes();
    let mut end = count_digits(bytes);
    if end == 0 {
        return None;
    }
    if bytes.get(end) == Some(&b'.') {
        let frac = count_digits(&bytes[end + 1..]);
        if frac == 0 {
            return None;
        }
        end += 1 + frac;
    }
    let number = value[..end].parse::<f64>().ok()?;
    Some((number, &value[end..]))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Split on `separator` outside of parentheses, trimming each piece and
/// skipping empty ones.
pub(crate) fn split_top_level(value: &str, separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            c if depth == 0 && separator(c) => {
                let piece = value[start..i].trim();
                if !piece.is_empty() {
                    result.push(piece);
                }
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    let last = value[start..].trim();
    if !last.is_empty() {
        result.push(last);
    }

    result
}

/// Split on commas outside of parentheses.
pub fn split_top_level_commas(value: &str) -> Vec<&str> {
    split_top_level(value, |c| c == ',')
}

/// Split on whitespace outside of parentheses, so `rgba(0, 0, 0, 0.5)`
/// stays one token.
pub fn split_top_level_whitespace(value: &str) -> Vec<&str> {
    split_top_level(value, char::is_whitespace)
}

/// Split a functional notation `name(args)` into its name and argument text.
pub fn split_function(token: &str) -> Option<(&str, &str)> {
    let token = token.trim();
    let open = token.find('(')?;
    if !token.ends_with(')') || open == 0 {
        return None;
    }
    Some((&token[..open], &token[open + 1..token.len() - 1]))
}
