use exgen::renderer::{MiniJinjaRenderer, TemplateRenderer};

#[test]
fn test_renders_bindings() {
    let renderer = MiniJinjaRenderer::new();
    let context = serde_json::json!({
        "name": "demo",
        "value": 42
    });

    let result = renderer.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello demo!");

    let result = renderer.render("Value: {{ value }}", &context).unwrap();
    assert_eq!(result, "Value: 42");
}

#[test]
fn test_quotes_survive_rendering() {
    // Generated sources are code, not markup; nothing may be escaped.
    let renderer = MiniJinjaRenderer::new();
    let context = serde_json::json!({ "statement": "logger('dev')" });

    let result = renderer.render("app.use({{ statement }});", &context).unwrap();
    assert_eq!(result, "app.use(logger('dev'));");
}

#[test]
fn test_syntax_error_propagates() {
    let renderer = MiniJinjaRenderer::new();
    let context = serde_json::json!({});

    assert!(renderer.render("{% if %}", &context).is_err());
}
