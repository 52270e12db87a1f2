//! Page rendering integration tests.

use rustkit_css::{BorderStyle, ComputedStyle, TypedValue};
use rustkit_engine::{render_page, EngineBuilder, EngineConfig, PageRenderer, PageStyles};

use crate::support::{assert_matrix_near, div, init_logging, style};

#[test]
fn test_card_end_to_end() {
    init_logging();

    let card = ComputedStyle::from_json(
        r##"{
            "display":          { "value": "flex" },
            "position":         { "value": "absolute" },
            "width":            { "value": "320px" },
            "height":           { "value": "200px" },
            "margin":           { "value": "10px 20px" },
            "padding":          { "value": "8px" },
            "border":           { "value": "1px solid #333" },
            "border-radius":    { "value": "6px" },
            "background-color": { "value": "hsl(210, 50%, 40%)" },
            "box-shadow":       { "value": "0 2px 4px rgba(0, 0, 0, 0.25)" },
            "filter":           { "value": "blur(2px) brightness(1.1)" },
            "transform":        { "value": "translate(5px, 10px) rotate(90deg)" },
            "z-index":          { "value": "3" }
        }"##,
    )
    .unwrap();

    let result = render_page(&[div("card")], &vec![card]);
    assert!(result.failures.is_empty());
    let rendered = &result.elements[0];

    assert!(rendered.flow.creates_stacking_context);
    assert!(rendered.flow.creates_block_formatting_context);
    assert!(rendered.flow.is_positioned);

    assert_eq!(rendered.box_model.padding.left, TypedValue::px(8.0));
    assert_eq!(rendered.paint.border.width.top, TypedValue::px(1.0));
    assert_eq!(rendered.paint.border.style.top, BorderStyle::Solid);
    assert_eq!(rendered.paint.border.color.top.hex(), "#333");
    assert_eq!(rendered.paint.background.color.hex(), "#336699");
    assert_eq!(rendered.paint.box_shadows.len(), 1);
    assert_eq!(rendered.paint.box_shadows[0].color.alpha(), 0.25);
    assert_eq!(rendered.paint.filters.len(), 2);

    assert_eq!(rendered.composite.z_index, Some(3));
    assert_matrix_near(rendered.composite.matrix, [0.0, 1.0, -1.0, 0.0, 5.0, 10.0], 1e-9);

    assert_eq!(rendered.bounds.total_width, 360.0);
    assert_eq!(rendered.bounds.total_height, 220.0);
    assert_eq!(result.viewport.width, 360.0);
    assert_eq!(result.viewport.height, 220.0);
    assert_eq!(result.stacking_contexts.len(), 1);
}

#[test]
fn test_nested_percentages() {
    init_logging();

    let mut styles = PageStyles::new();
    let shell = styles.push(style(&[("width", "1000px"), ("height", "400px")]));
    styles.push_child(style(&[("width", "30%"), ("height", "50%")]), shell);
    styles.push(style(&[("width", "30%")]));

    let elements = [div("shell"), div("sidebar"), div("stray")];
    let result = render_page(&elements, &styles);

    let sidebar = &result.elements[1];
    assert_eq!(sidebar.bounds.width, 300.0);
    assert_eq!(sidebar.bounds.height, 200.0);

    let stray = &result.elements[2];
    assert_eq!(stray.bounds.width, 30.0);
}

#[test]
fn test_viewport_units_follow_config() {
    init_logging();

    let renderer: PageRenderer = EngineBuilder::new().viewport(400.0, 300.0).build();
    let result = renderer.render(&[div("hero")], &vec![style(&[("width", "50vw"), ("height", "10vmin")])]);

    assert_eq!(result.elements[0].bounds.width, 200.0);
    assert_eq!(result.elements[0].bounds.height, 30.0);
}

#[test]
fn test_config_from_json_drives_render() {
    init_logging();

    let config = EngineConfig::from_json(r#"{ "auto_size_placeholder": 64 }"#).unwrap();
    let result = PageRenderer::new(config).render(&[div("auto")], &vec![ComputedStyle::new()]);

    assert_eq!(result.viewport.width, 64.0);
    assert_eq!(result.viewport.height, 64.0);
}

#[test]
fn test_json_output() {
    init_logging();

    let styles = vec![style(&[("z-index", "auto"), ("background-color", "red")])];
    let result = render_page(&[div("x")], &styles);

    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert_eq!(json["elements"][0]["element"]["tagName"], "div");
    assert_eq!(json["elements"][0]["element"]["id"], "x");
    assert!(json["elements"][0]["composite"]["z_index"].is_null());
    assert_eq!(json["elements"][0]["paint"]["background"]["color"]["hex"], "#ff0000");
    assert_eq!(json["viewport"]["width"], 100.0);
    assert_eq!(json["failures"].as_array().map(Vec::len), Some(0));
}
