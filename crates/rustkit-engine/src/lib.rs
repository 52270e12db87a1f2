//! # RustKit Engine
//!
//! Orchestration layer that turns computed styles into rendered element
//! descriptors, one element at a time or a whole page at once.
//!
//! ## Design Goals
//!
//! 1. **Pure**: No I/O and no shared state; every render call is independent
//! 2. **Per-element failures**: A bad element is reported, never fatal to a page
//! 3. **Stable z-order**: Equal z-indices keep document order
//! 4. **Fan-out**: Elements can render in parallel; sorting and the viewport
//!    reduction stay single-threaded
//!
//! ```text
//! ComputedStyle ──► resolve_box_model ──► BoxModel ─┬─► assemble_paint ──► PaintDescriptor
//!               ──► FlowFlags::from_style ──────────┼─► build_composite ─► CompositeDescriptor
//!                                                   └─► compute_bounds ──► Bounds
//! ```

pub mod element;
pub mod error;
pub mod page;

pub use element::{render_element, ElementIdentity, ElementRenderer, RenderedElement};
pub use error::{ElementFailure, RenderError};
pub use page::{
    render_page, PageRenderResult, PageRenderer, PageStyles, StyleProvider, ViewportBounds,
};

use rustkit_css::LengthContext;
use rustkit_layout::SizingPolicy;
use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Size given to `auto` width/height.
    pub auto_size_placeholder: f64,
    /// Parent size assumed when none is known.
    pub default_parent_dimension: f64,
    /// Pixels per `em`.
    pub font_size: f64,
    /// Pixels per `rem`.
    pub root_font_size: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Render page elements on the rayon pool.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let sizing = SizingPolicy::default();
        let lengths = LengthContext::default();
        Self {
            auto_size_placeholder: sizing.auto_size_placeholder,
            default_parent_dimension: sizing.default_parent_dimension,
            font_size: lengths.font_size,
            root_font_size: lengths.root_font_size,
            viewport_width: lengths.viewport_width,
            viewport_height: lengths.viewport_height,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| RenderError::InvalidConfig(e.to_string()))?;
        if !value.is_object() {
            return Err(RenderError::InvalidConfig(format!(
                "expected a JSON object, got {json}"
            )));
        }
        serde_json::from_value(value).map_err(|e| RenderError::InvalidConfig(e.to_string()))
    }

    pub fn sizing_policy(&self) -> SizingPolicy {
        SizingPolicy {
            auto_size_placeholder: self.auto_size_placeholder,
            default_parent_dimension: self.default_parent_dimension,
        }
    }

    pub fn length_context(&self) -> LengthContext {
        LengthContext {
            font_size: self.font_size,
            root_font_size: self.root_font_size,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
        }
    }
}

/// Builder for [`PageRenderer`].
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the `auto` size placeholder.
    pub fn auto_size_placeholder(mut self, size: f64) -> Self {
        self.config.auto_size_placeholder = size;
        self
    }

    /// Set the parent size used when none is known.
    pub fn default_parent_dimension(mut self, size: f64) -> Self {
        self.config.default_parent_dimension = size;
        self
    }

    /// Set the font sizes used for `em` and `rem`.
    pub fn font_size(mut self, font_size: f64, root_font_size: f64) -> Self {
        self.config.font_size = font_size;
        self.config.root_font_size = root_font_size;
        self
    }

    /// Set the viewport used for `vw`/`vh`/`vmin`/`vmax`.
    pub fn viewport(mut self, width: f64, height: f64) -> Self {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self
    }

    /// Enable or disable parallel element rendering.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.config.parallel = enabled;
        self
    }

    /// Build the page renderer.
    pub fn build(self) -> PageRenderer {
        PageRenderer::new(self.config)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
