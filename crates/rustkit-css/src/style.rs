//! Computed-style input.
//!
//! The cascade runs elsewhere; this engine receives its result as a map
//! from property name to `{ "value": "<string>" }`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::CssError;

/// One computed property value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleValue {
    pub value: String,
}

impl StyleValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Computed style for one element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComputedStyle {
    properties: HashMap<String, StyleValue>,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let properties = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), StyleValue::new(value)))
            .collect();
        Self { properties }
    }

    /// Decode the JSON shape produced by the style resolver.
    pub fn from_json(json: &str) -> Result<Self, CssError> {
        serde_json::from_str(json).map_err(|e| CssError::ParseError(e.to_string()))
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), StyleValue::new(value));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// The value only if the property was actually provided.
    pub fn explicit(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|v| v.value.as_str())
    }

    /// The provided value, else the property's documented default, else `""`.
    pub fn get(&self, name: &str) -> &str {
        self.explicit(name)
            .or_else(|| property_default(name))
            .unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Value used when a property is missing from the computed style.
pub fn property_default(name: &str) -> Option<&'static str> {
    let value = match name {
        "display" => "block",
        "position" => "static",
        "float" => "none",
        "contain" => "none",
        "opacity" => "1",
        "z-index" => "auto",
        "visibility" => "visible",
        "box-sizing" => "content-box",
        "width" | "height" => "auto",
        "min-width" | "min-height" => "0px",
        "max-width" | "max-height" => "none",
        "aspect-ratio" => "auto",
        "margin" | "padding" => "0px",
        "border-width" => "0px",
        "border-style" => "none",
        "border-color" => "black",
        "border-radius" => "0px",
        "border-image-source" => "none",
        "color" => "black",
        "background-color" => "transparent",
        "background-image" => "none",
        "background-repeat" => "repeat",
        "background-position" => "0% 0%",
        "background-size" => "auto",
        "background-attachment" => "scroll",
        "font-family" => "serif",
        "font-size" => "16px",
        "font-weight" => "normal",
        "font-style" => "normal",
        "line-height" => "normal",
        "text-align" => "start",
        "text-decoration" => "none",
        "text-transform" => "none",
        "letter-spacing" => "normal",
        "box-shadow" | "text-shadow" => "none",
        "filter" => "none",
        "transform" => "none",
        "will-change" => "auto",
        _ => return None,
    };
    Some(value)
}
