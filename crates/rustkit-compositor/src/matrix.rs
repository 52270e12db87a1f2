//! 2D affine matrix accumulation.
//!
//! Components are `[a, b, c, d, e, f]` for
//!
//! ```text
//! | a  c  e |
//! | b  d  f |
//! | 0  0  1 |
//! ```
//!
//! Functions are applied in list order by updating the components in place,
//! not by matrix multiplication:
//!
//! - `translate(x, y)` adds to `e`/`f`
//! - `scale(sx, sy)` multiplies `a`/`d`
//! - `rotate(angle)` rotates `a`/`b`/`c`/`d` and leaves `e`/`f` alone
//!
//! Downstream consumers rely on these numbers, so this is kept even where it
//! differs from CSS matrix composition. Every other function is ignored here.

use rustkit_css::{leading_number, parse_finite, TransformFunction, TransformKind};
use serde::Serialize;
use tracing::trace;

use crate::CompositeError;

/// A 2×3 affine matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AffineMatrix(pub [f64; 6]);

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn components(&self) -> [f64; 6] {
        self.0
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.0[4] += x;
        self.0[5] += y;
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.0[0] *= sx;
        self.0[3] *= sy;
    }

    /// Rotate by `degrees`.
    pub fn rotate(&mut self, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let [a, b, c, d, _, _] = self.0;
        self.0[0] = a * cos + c * sin;
        self.0[1] = b * cos + d * sin;
        self.0[2] = -a * sin + c * cos;
        self.0[3] = -b * sin + d * cos;
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Apply one function. Returns `false` if it does not affect the matrix.
    pub fn apply(&mut self, function: &TransformFunction) -> bool {
        let arg = |i: usize| function.raw_args.get(i).and_then(|raw| leading_number(raw));
        match function.kind {
            TransformKind::Translate => {
                self.translate(arg(0).unwrap_or(0.0), arg(1).unwrap_or(0.0));
            }
            TransformKind::Scale => {
                let sx = arg(0).unwrap_or(1.0);
                self.scale(sx, arg(1).unwrap_or(sx));
            }
            TransformKind::Rotate => {
                let angle = function.raw_args.first().and_then(|raw| parse_angle(raw));
                self.rotate(angle.unwrap_or(0.0));
            }
            _ => return false,
        }
        true
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Parse an angle into degrees. Unitless numbers are degrees.
pub fn parse_angle(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    // `grad` before `rad`: both end in "rad".
    let units = [
        ("grad", 0.9),
        ("deg", 1.0),
        ("rad", 180.0 / std::f64::consts::PI),
        ("turn", 360.0),
    ];
    for (suffix, to_degrees) in units {
        if let Some(number) = raw.strip_suffix(suffix) {
            return parse_finite(number).map(|n| n * to_degrees);
        }
    }
    parse_finite(raw)
}

/// Fold a transform list into one matrix, starting from identity.
pub fn accumulate_matrix(functions: &[TransformFunction]) -> Result<AffineMatrix, CompositeError> {
    let mut matrix = AffineMatrix::IDENTITY;
    for function in functions {
        if !matrix.apply(function) {
            trace!(kind = ?function.kind, "transform kept in list but not accumulated");
        }
    }
    if matrix.is_finite() {
        Ok(matrix)
    } else {
        Err(CompositeError::NonFiniteMatrix(matrix.0))
    }
}
