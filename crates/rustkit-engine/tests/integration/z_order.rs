//! Z-order integration tests.

use rustkit_engine::{render_page, EngineBuilder};

use crate::support::{assert_paint_order, div, init_logging, style};

#[test]
fn test_equal_z_index_keeps_document_order() {
    init_logging();

    let elements = [div("a"), div("b"), div("c")];
    let styles = vec![
        style(&[("position", "relative"), ("z-index", "1")]),
        style(&[("position", "relative"), ("z-index", "1")]),
        style(&[("z-index", "0")]),
    ];

    let result = render_page(&elements, &styles);

    assert_paint_order(&result, &["c", "a", "b"]);
}

#[test]
fn test_auto_sorts_as_zero_but_stays_auto() {
    init_logging();

    let elements = [div("raised"), div("auto"), div("sunk"), div("zero")];
    let styles = vec![
        style(&[("z-index", "2")]),
        style(&[]),
        style(&[("z-index", "-1")]),
        style(&[("z-index", "0")]),
    ];

    let result = render_page(&elements, &styles);

    assert_paint_order(&result, &["sunk", "auto", "zero", "raised"]);
    assert_eq!(result.elements[1].composite.z_index, None);
    assert_eq!(result.elements[2].composite.z_index, Some(0));
}

#[test]
fn test_large_page_order_is_stable() {
    init_logging();

    let ids: Vec<String> = (0..200).map(|i| format!("e{i}")).collect();
    let elements: Vec<_> = ids.iter().map(|id| div(id)).collect();
    let styles: Vec<_> = (0..200)
        .map(|i| style(&[("z-index", if i % 2 == 0 { "1" } else { "0" })]))
        .collect();

    let sequential = render_page(&elements, &styles);
    let parallel = EngineBuilder::new().parallel(true).build().render(&elements, &styles);

    let expected: Vec<&str> = ids
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .chain(ids.iter().enumerate().filter(|(i, _)| i % 2 == 0))
        .map(|(_, id)| id.as_str())
        .collect();
    assert_paint_order(&sequential, &expected);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_stacking_contexts_subsequence() {
    init_logging();

    let elements = [div("plain"), div("faded"), div("flex"), div("moved")];
    let styles = vec![
        style(&[("z-index", "5")]),
        style(&[("opacity", "0.5")]),
        style(&[("display", "flex"), ("z-index", "-1")]),
        style(&[("transform", "translate(1px, 1px)")]),
    ];

    let result = render_page(&elements, &styles);

    let ids: Vec<_> = result
        .stacking_contexts
        .iter()
        .map(|e| e.element.id.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(ids, ["flex", "faded", "moved"]);
}
