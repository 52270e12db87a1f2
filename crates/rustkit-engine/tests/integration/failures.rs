//! Failure collection integration tests.

use rustkit_engine::{render_element, render_page, ElementIdentity, RenderError};

use crate::support::{div, init_logging, style};

#[test]
fn test_missing_style_is_recorded() {
    init_logging();

    let elements = [div("styled"), div("orphan")];
    let styles = vec![style(&[("width", "10px")])];

    let result = render_page(&elements, &styles);

    assert_eq!(result.elements.len(), 1);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].index, 1);
    assert_eq!(result.failures[0].element, div("orphan"));
    assert!(result.failures[0].reason.contains("div#orphan"));
}

#[test]
fn test_bad_element_does_not_sink_page() {
    init_logging();

    let huge = format!("{}px", "9".repeat(400));
    let elements = [div("ok"), div("huge"), div("also-ok")];
    let styles = vec![
        style(&[("width", "50px")]),
        style(&[("height", huge.as_str())]),
        style(&[("width", "70px")]),
    ];

    let result = render_page(&elements, &styles);

    assert_eq!(result.elements.len(), 2);
    assert_eq!(result.failures[0].index, 1);
    assert_eq!(result.viewport.width, 70.0);
}

#[test]
fn test_non_finite_matrix_fails_element() {
    init_logging();

    let scale = format!("scale({0}) scale({0})", "9".repeat(200));
    let err = render_element(
        &ElementIdentity::new("span").with_class("zoom"),
        &style(&[("transform", scale.as_str())]),
        None,
    )
    .unwrap_err();

    match err {
        RenderError::RenderingFailed { element, reason } => {
            assert_eq!(element, "span.zoom");
            assert!(reason.contains("matrix"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_values_never_fail() {
    init_logging();

    let garbage = style(&[
        ("margin", "lots"),
        ("color", "not-a-color("),
        ("box-shadow", "???"),
        ("filter", "blur("),
        ("opacity", "cloudy"),
        ("z-index", "high"),
        ("transform", "spin(3)"),
        ("aspect-ratio", "wide"),
    ]);

    let rendered = render_element(&div("garbage"), &garbage, None).unwrap();

    assert_eq!(rendered.paint.opacity, 1.0);
    assert!(rendered.paint.box_shadows.is_empty());
    assert!(rendered.paint.filters.is_empty());
    assert!(rendered.paint.text.color.is_unknown());
    assert_eq!(rendered.composite.z_index, Some(0));
    assert!(rendered.composite.transforms.is_empty());
    assert_eq!(rendered.box_model.aspect_ratio, None);
}
