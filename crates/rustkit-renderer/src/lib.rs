//! # RustKit Renderer
//!
//! Paint descriptors for the RustKit style engine.
//!
//! This crate takes a computed style and its resolved box model and
//! describes how the element paints: background, border, text, shadows,
//! filters, opacity and visibility. Rasterization happens elsewhere; the
//! output here is plain data.
//!
//! ```text
//! ComputedStyle + BoxModel
//!     │
//!     ▼
//! assemble_paint
//!     │
//!     ├── background  (color, url(), gradient, tiling pattern)
//!     ├── border      (widths, styles, colors, radii, image)
//!     ├── text        (color, font, line height, decoration)
//!     └── effects     (box/text shadows, filters, opacity, visibility)
//! ```

pub mod paint;

pub use paint::{
    assemble_paint, BackgroundDescriptor, BackgroundPattern, BorderDescriptor, PaintDescriptor,
    TextStyle,
};
