//! Custom assertions for integration tests.

use rustkit_compositor::AffineMatrix;
use rustkit_engine::PageRenderResult;

/// Assert that a matrix matches expected components within tolerance.
#[track_caller]
pub fn assert_matrix_near(actual: AffineMatrix, expected: [f64; 6], tolerance: f64) {
    let components = actual.components();
    assert!(
        components
            .iter()
            .zip(expected)
            .all(|(a, e)| (a - e).abs() <= tolerance),
        "Matrix mismatch: expected {:?}, got {:?} (tolerance: {})",
        expected,
        components,
        tolerance
    );
}

/// Assert the ids of the rendered elements, in paint order.
#[track_caller]
pub fn assert_paint_order(result: &PageRenderResult, expected: &[&str]) {
    let actual: Vec<&str> = result
        .elements
        .iter()
        .map(|e| e.element.id.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(actual, expected, "Paint order mismatch");
}
