//! Page rendering: many elements, z-ordered, with one viewport.

use rustkit_css::ComputedStyle;
use rustkit_layout::Bounds;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::element::{ElementIdentity, ElementRenderer, RenderedElement};
use crate::error::{ElementFailure, RenderError};
use crate::EngineConfig;

/// Source of computed styles, usually the style resolver.
pub trait StyleProvider {
    /// Computed style of the element at `index`.
    fn computed_style(&self, index: usize, element: &ElementIdentity) -> Option<&ComputedStyle>;

    /// Style of the element's parent, used for percentage resolution.
    fn parent_style(&self, _index: usize, _element: &ElementIdentity) -> Option<&ComputedStyle> {
        None
    }
}

impl StyleProvider for [ComputedStyle] {
    fn computed_style(&self, index: usize, _element: &ElementIdentity) -> Option<&ComputedStyle> {
        self.get(index)
    }
}

impl StyleProvider for Vec<ComputedStyle> {
    fn computed_style(&self, index: usize, element: &ElementIdentity) -> Option<&ComputedStyle> {
        self.as_slice().computed_style(index, element)
    }
}

/// Styles for a page, indexed like the element list, with optional parent
/// links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageStyles {
    styles: Vec<ComputedStyle>,
    #[serde(default)]
    parents: Vec<Option<usize>>,
}

impl PageStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level style; returns its index.
    pub fn push(&mut self, style: ComputedStyle) -> usize {
        self.push_with_parent(style, None)
    }

    /// Add a style whose parent is the style at `parent`.
    pub fn push_child(&mut self, style: ComputedStyle, parent: usize) -> usize {
        self.push_with_parent(style, Some(parent))
    }

    fn push_with_parent(&mut self, style: ComputedStyle, parent: Option<usize>) -> usize {
        self.parents.resize(self.styles.len(), None);
        self.styles.push(style);
        self.parents.push(parent);
        self.styles.len() - 1
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<ComputedStyle> for PageStyles {
    fn from_iter<I: IntoIterator<Item = ComputedStyle>>(iter: I) -> Self {
        let styles: Vec<ComputedStyle> = iter.into_iter().collect();
        Self {
            parents: vec![None; styles.len()],
            styles,
        }
    }
}

impl StyleProvider for PageStyles {
    fn computed_style(&self, index: usize, _element: &ElementIdentity) -> Option<&ComputedStyle> {
        self.styles.get(index)
    }

    fn parent_style(&self, index: usize, _element: &ElementIdentity) -> Option<&ComputedStyle> {
        let parent = self.parents.get(index).copied().flatten()?;
        self.styles.get(parent)
    }
}

/// Smallest box covering every rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ViewportBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportBounds {
    /// Zero-sized at the origin when there is nothing to cover.
    pub fn covering<'a>(bounds: impl IntoIterator<Item = &'a Bounds>) -> Self {
        bounds
            .into_iter()
            .copied()
            .reduce(|acc, b| acc.union(&b))
            .map(|covered| ViewportBounds {
                x: covered.x,
                y: covered.y,
                width: covered.right() - covered.x,
                height: covered.bottom() - covered.y,
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRenderResult {
    /// Rendered elements in paint order: ascending z-index, `auto` as 0,
    /// ties in document order.
    pub elements: Vec<RenderedElement>,
    /// The elements above that create a stacking context, same order.
    pub stacking_contexts: Vec<RenderedElement>,
    pub viewport: ViewportBounds,
    /// Elements that failed; they are absent from `elements`.
    pub failures: Vec<ElementFailure>,
}

impl PageRenderResult {
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Renders whole pages.
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    renderer: ElementRenderer,
}

impl PageRenderer {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            renderer: ElementRenderer::new(config),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.renderer.config()
    }

    /// Render every element, then z-sort and compute the viewport.
    ///
    /// A failing element is recorded in `failures` and skipped; the page as
    /// a whole never fails.
    pub fn render<S>(&self, elements: &[ElementIdentity], styles: &S) -> PageRenderResult
    where
        S: StyleProvider + Sync + ?Sized,
    {
        let outcomes = self.render_all(elements, styles);

        let mut rendered = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(element) => rendered.push(element),
                Err(failure) => {
                    warn!(
                        index = failure.index,
                        element = %failure.element,
                        reason = %failure.reason,
                        "Element failed to render"
                    );
                    failures.push(failure);
                }
            }
        }

        // Stable: equal keys keep document order.
        rendered.sort_by_key(|element| element.composite.sort_key());

        let stacking_contexts: Vec<RenderedElement> = rendered
            .iter()
            .filter(|element| element.composite.creates_stacking_context)
            .cloned()
            .collect();
        let viewport = ViewportBounds::covering(rendered.iter().map(|element| &element.bounds));

        info!(
            elements = rendered.len(),
            failures = failures.len(),
            stacking_contexts = stacking_contexts.len(),
            width = viewport.width,
            height = viewport.height,
            "Rendered page"
        );

        PageRenderResult {
            elements: rendered,
            stacking_contexts,
            viewport,
            failures,
        }
    }

    fn render_all<S>(
        &self,
        elements: &[ElementIdentity],
        styles: &S,
    ) -> Vec<Result<RenderedElement, ElementFailure>>
    where
        S: StyleProvider + Sync + ?Sized,
    {
        #[cfg(feature = "parallel")]
        if self.config().parallel {
            use rayon::prelude::*;
            debug!(count = elements.len(), "Rendering page in parallel");
            return elements
                .par_iter()
                .enumerate()
                .map(|(index, element)| self.render_one(index, element, styles))
                .collect();
        }

        #[cfg(not(feature = "parallel"))]
        if self.config().parallel {
            debug!("Parallel rendering not compiled in, rendering sequentially");
        }

        elements
            .iter()
            .enumerate()
            .map(|(index, element)| self.render_one(index, element, styles))
            .collect()
    }

    fn render_one<S>(
        &self,
        index: usize,
        element: &ElementIdentity,
        styles: &S,
    ) -> Result<RenderedElement, ElementFailure>
    where
        S: StyleProvider + ?Sized,
    {
        let result = match styles.computed_style(index, element) {
            Some(style) => {
                self.renderer
                    .render(element, style, styles.parent_style(index, element))
            }
            None => Err(RenderError::rendering_failed(element, "no computed style")),
        };

        match result {
            Ok(mut rendered) => {
                rendered.document_index = index;
                Ok(rendered)
            }
            Err(err) => Err(ElementFailure {
                index,
                element: element.clone(),
                reason: err.to_string(),
            }),
        }
    }
}

/// Render a page with the default configuration.
pub fn render_page<S>(elements: &[ElementIdentity], styles: &S) -> PageRenderResult
where
    S: StyleProvider + Sync + ?Sized,
{
    PageRenderer::default().render(elements, styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(pairs: &[(&str, &str)]) -> ComputedStyle {
        ComputedStyle::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_empty_page() {
        let result = render_page(&[], &Vec::<ComputedStyle>::new());
        assert!(result.elements.is_empty());
        assert!(result.failures.is_empty());
        assert_eq!(result.viewport, ViewportBounds::default());
    }

    #[test]
    fn test_slice_provider() {
        let styles = [style(&[("width", "10px")])];
        let result = render_page(&[ElementIdentity::new("div")], &styles[..]);
        assert_eq!(result.elements.len(), 1);
        assert_eq!(result.viewport.width, 10.0);
    }

    #[test]
    fn test_page_styles_parent_links() {
        let mut styles = PageStyles::new();
        let root = styles.push(style(&[("width", "800px")]));
        styles.push_child(style(&[("width", "25%")]), root);

        let elements = [ElementIdentity::new("main"), ElementIdentity::new("aside")];
        let result = render_page(&elements, &styles);
        let aside = result
            .elements
            .iter()
            .find(|e| e.element.tag_name == "aside")
            .unwrap();
        assert_eq!(aside.bounds.width, 200.0);
        assert_eq!(aside.document_index, 1);
    }

    #[test]
    fn test_page_styles_from_iter() {
        let styles: PageStyles = vec![ComputedStyle::new(), ComputedStyle::new()].into_iter().collect();
        assert_eq!(styles.len(), 2);
        assert!(styles.parent_style(1, &ElementIdentity::new("div")).is_none());
    }

    #[test]
    fn test_viewport_covers_margins() {
        let styles = vec![
            style(&[("width", "100px"), ("height", "50px"), ("margin", "10px")]),
            style(&[("width", "300px"), ("height", "20px")]),
        ];
        let elements = [ElementIdentity::new("a"), ElementIdentity::new("b")];
        let result = render_page(&elements, &styles);
        assert_eq!(result.viewport.width, 300.0);
        assert_eq!(result.viewport.height, 70.0);
    }

    #[test]
    fn test_to_json() {
        let result = render_page(&[ElementIdentity::new("div")], &vec![ComputedStyle::new()]);
        let json = result.to_json().unwrap();
        assert!(json.contains("\"viewport\""));
        assert!(json.contains("\"tagName\": \"div\""));
    }
}
