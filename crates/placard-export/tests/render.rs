use placard_core::models::document::DocumentData;
use placard_export::error::ExportError;
use placard_export::render::{render_document, render_template};

#[test]
fn document_contains_title_and_content() {
    let data = DocumentData::new("Random Title 2", "Some body text.");
    let html = render_document(&data).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Random Title 2</title>"));
    assert!(html.contains("<h1>Random Title 2</h1>"));
    assert!(html.contains("<p>Some body text.</p>"));
}

#[test]
fn substitutions_are_html_escaped() {
    let data = DocumentData::new("A & B", "<x>");
    let html = render_document(&data).unwrap();

    assert!(html.contains("A &amp; B"));
    assert!(html.contains("&lt;x&gt;"));
    assert!(!html.contains("A & B"));
    assert!(!html.contains("<x>"));
}

#[test]
fn rendering_is_deterministic() {
    let data = DocumentData::new("Random Title 1", "Yet another random content example.");
    let first = render_document(&data).unwrap();
    let second = render_document(&data).unwrap();
    assert_eq!(first, second);
}

#[test]
fn broken_template_is_a_parse_error() {
    let data = DocumentData::new("t", "c");
    let err = render_template("broken.html", "<h1>{{ title </h1>", &data).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)), "got {err:?}");
    assert!(err.is_render());
}

#[test]
fn missing_variable_is_a_render_error() {
    let data = DocumentData::new("t", "c");
    let err = render_template("missing.html", "<p>{{ author }}</p>", &data).unwrap_err();
    assert!(matches!(err, ExportError::TemplateRender(_)), "got {err:?}");
}

#[test]
fn non_html_templates_are_not_escaped() {
    let data = DocumentData::new("A & B", "<x>");
    let text = render_template("plain.txt", "{{ title }} {{ content }}", &data).unwrap();
    assert_eq!(text, "A & B <x>");
}
