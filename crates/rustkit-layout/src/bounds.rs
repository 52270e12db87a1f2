//! Element bounds.

use rustkit_css::{LengthContext, TypedValue};
use serde::Serialize;

use crate::box_model::{BoxModel, ParentContext, SizingPolicy};
use crate::LayoutError;

/// Bounds of one element. Elements are placed at the origin; callers that
/// know an offset apply it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `width` plus left and right margins.
    pub total_width: f64,
    /// `height` plus top and bottom margins.
    pub total_height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.total_width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.total_height
    }

    /// Smallest box covering both margin rectangles.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let width = self.right().max(other.right()) - x;
        let height = self.bottom().max(other.bottom()) - y;
        Bounds {
            x,
            y,
            width,
            height,
            total_width: width,
            total_height: height,
        }
    }
}

/// Convert the resolved box to pixel bounds. Percentage margins resolve
/// against the parent width, as CSS does for both axes.
pub fn compute_bounds(
    box_model: &BoxModel,
    parent: &ParentContext,
    ctx: &LengthContext,
    policy: &SizingPolicy,
) -> Result<Bounds, LayoutError> {
    let parent_width = parent.width.unwrap_or(policy.default_parent_dimension);
    let parent_height = parent.height.unwrap_or(policy.default_parent_dimension);
    let px = |value: &TypedValue, container: f64| value.to_px(ctx, container);

    let width = finite("width", px(&box_model.width, parent_width))?;
    let height = finite("height", px(&box_model.height, parent_height))?;
    let margin = &box_model.margin;
    let total_width = finite(
        "total width",
        width + px(&margin.left, parent_width) + px(&margin.right, parent_width),
    )?;
    let total_height = finite(
        "total height",
        height + px(&margin.top, parent_width) + px(&margin.bottom, parent_width),
    )?;

    Ok(Bounds {
        x: 0.0,
        y: 0.0,
        width,
        height,
        total_width,
        total_height,
    })
}

fn finite(field: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::NonFiniteGeometry { field, value })
    }
}
