//! Single-element rendering.

use std::fmt;

use rustkit_compositor::{build_composite, CompositeDescriptor};
use rustkit_css::ComputedStyle;
use rustkit_layout::{
    compute_bounds, resolve_box_model_with, BoxModel, Bounds, FlowFlags, ParentContext,
};
use rustkit_renderer::{assemble_paint, PaintDescriptor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EngineConfig, RenderError};

/// Identity of an element, owned by the caller and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIdentity {
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub class_names: Vec<String>,
}

impl ElementIdentity {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_names.push(class_name.into());
        self
    }
}

/// Selector-like form: `div#main.card.wide`.
impl fmt::Display for ElementIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag_name)?;
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class_name in &self.class_names {
            write!(f, ".{class_name}")?;
        }
        Ok(())
    }
}

/// Everything the engine derives for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedElement {
    pub element: ElementIdentity,
    /// Position in the page's input list; 0 for a standalone render.
    pub document_index: usize,
    pub box_model: BoxModel,
    pub flow: FlowFlags,
    pub paint: PaintDescriptor,
    pub composite: CompositeDescriptor,
    pub bounds: Bounds,
}

/// Renders single elements with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ElementRenderer {
    config: EngineConfig,
}

impl ElementRenderer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve box model, flow, paint and composite descriptors, then bounds.
    ///
    /// Percentages resolve against `parent_style` when given.
    pub fn render(
        &self,
        element: &ElementIdentity,
        style: &ComputedStyle,
        parent_style: Option<&ComputedStyle>,
    ) -> Result<RenderedElement, RenderError> {
        let policy = self.config.sizing_policy();
        let parent = parent_style
            .map(ParentContext::from_style)
            .unwrap_or_default();

        let box_model = resolve_box_model_with(style, &parent, &policy);
        let flow = FlowFlags::from_style(style);
        let paint = assemble_paint(style, &box_model);
        let composite = build_composite(style, &flow)
            .map_err(|e| RenderError::rendering_failed(element, e))?;
        let bounds = compute_bounds(&box_model, &parent, &self.config.length_context(), &policy)
            .map_err(|e| RenderError::rendering_failed(element, e))?;

        debug!(
            element = %element,
            z_index = ?composite.z_index,
            stacking = composite.creates_stacking_context,
            width = bounds.width,
            height = bounds.height,
            "Rendered element"
        );

        Ok(RenderedElement {
            element: element.clone(),
            document_index: 0,
            box_model,
            flow,
            paint,
            composite,
            bounds,
        })
    }
}

/// Render one element with the default configuration.
pub fn render_element(
    element: &ElementIdentity,
    style: &ComputedStyle,
    parent_style: Option<&ComputedStyle>,
) -> Result<RenderedElement, RenderError> {
    ElementRenderer::default().render(element, style, parent_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustkit_css::TypedValue;

    fn style(pairs: &[(&str, &str)]) -> ComputedStyle {
        ComputedStyle::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_identity_display() {
        let element = ElementIdentity::new("div").with_id("main").with_class("card").with_class("wide");
        assert_eq!(element.to_string(), "div#main.card.wide");
        assert_eq!(ElementIdentity::new("span").to_string(), "span");
    }

    #[test]
    fn test_identity_json_is_camel_case() {
        let element: ElementIdentity =
            serde_json::from_str(r#"{ "tagName": "p", "classNames": ["lead"] }"#).unwrap();
        assert_eq!(element, ElementIdentity::new("p").with_class("lead"));
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"tagName\":\"p\""));
    }

    #[test]
    fn test_render_defaults() {
        let rendered = render_element(&ElementIdentity::new("div"), &ComputedStyle::new(), None).unwrap();
        assert_eq!(rendered.box_model.width, TypedValue::calculated(100.0));
        assert!(rendered.flow.is_block);
        assert_eq!(rendered.composite.z_index, None);
        assert_eq!(rendered.bounds.x, 0.0);
        assert_eq!(rendered.bounds.y, 0.0);
        assert_eq!(rendered.bounds.total_width, 100.0);
    }

    #[test]
    fn test_render_with_parent() {
        let parent = style(&[("width", "600px")]);
        let rendered = render_element(
            &ElementIdentity::new("div"),
            &style(&[("width", "50%"), ("height", "20px"), ("margin", "0px 10px")]),
            Some(&parent),
        )
        .unwrap();
        assert_eq!(rendered.bounds.width, 300.0);
        assert_eq!(rendered.bounds.total_width, 320.0);
        assert_eq!(rendered.bounds.height, 20.0);
    }

    #[test]
    fn test_flex_absolute_end_to_end() {
        let rendered = render_element(
            &ElementIdentity::new("nav"),
            &style(&[("display", "flex"), ("position", "absolute")]),
            None,
        )
        .unwrap();
        assert!(rendered.flow.creates_stacking_context);
        assert!(rendered.flow.creates_block_formatting_context);
        assert!(rendered.composite.creates_stacking_context);
    }

    #[test]
    fn test_failure_names_element() {
        let huge = format!("{}px", "9".repeat(400));
        let err = render_element(
            &ElementIdentity::new("div").with_id("big"),
            &style(&[("width", huge.as_str())]),
            None,
        )
        .unwrap_err();
        match err {
            RenderError::RenderingFailed { element, reason } => {
                assert_eq!(element, "div#big");
                assert!(reason.contains("width"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_drives_sizing() {
        let renderer = ElementRenderer::new(EngineConfig {
            auto_size_placeholder: 40.0,
            font_size: 10.0,
            ..EngineConfig::default()
        });
        let rendered = renderer
            .render(&ElementIdentity::new("div"), &style(&[("height", "3em")]), None)
            .unwrap();
        assert_eq!(rendered.bounds.width, 40.0);
        assert_eq!(rendered.bounds.height, 30.0);
    }
}
