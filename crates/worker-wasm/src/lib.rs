//! WASM-compatible wrapper for slide rendering.
//!
//! This crate exposes the slide templates to JavaScript for use in
//! Cloudflare Workers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use slide_templates::TemplateKind;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A rendered slide.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResult {
    /// Canonical template name.
    pub template: String,
    /// The complete HTML document.
    pub html: String,
}

/// Render a slide by template name.
///
/// # Arguments
/// * `name` - Template name (`title_slide` or `generate_title_slide`)
/// * `params` - A plain object of params; `undefined` or `null` for all defaults
///
/// # Returns
/// A JavaScript object `{ template, html }`, or throws on error.
#[wasm_bindgen]
pub fn render_slide(name: &str, params: JsValue) -> Result<JsValue, JsValue> {
    let params: Value = if params.is_undefined() || params.is_null() {
        Value::Null
    } else {
        serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsValue::from_str(&format!("Invalid params: {}", e)))?
    };

    let result = render_slide_impl(name, params).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn render_slide_impl(name: &str, params: Value) -> Result<RenderResult, String> {
    let kind: TemplateKind = name.parse().map_err(|e| format!("{}", e))?;
    let html = kind.render_value(params).map_err(|e| format!("{}", e))?;

    Ok(RenderResult {
        template: kind.name().to_string(),
        html,
    })
}

/// Names of all available templates.
#[wasm_bindgen]
pub fn list_templates() -> js_sys::Array {
    TemplateKind::all()
        .iter()
        .map(|kind| JsValue::from_str(kind.name()))
        .collect()
}

/// Default params of a template, as a plain JavaScript object.
#[wasm_bindgen]
pub fn template_defaults(name: &str) -> Result<JsValue, JsValue> {
    let kind: TemplateKind = name
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

    kind.defaults()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_slide_by_generator_name() {
        let result = render_slide_impl(
            "generate_title_slide",
            json!({"main_title": "BUSINESS PLAN"}),
        )
        .unwrap();

        assert_eq!(result.template, "title_slide");
        assert!(result.html.contains("<title>BUSINESS PLAN</title>"));
    }

    #[test]
    fn test_render_slide_unknown_template() {
        let err = render_slide_impl("generate_pie_chart", Value::Null).unwrap_err();
        assert!(err.contains("generate_pie_chart"));
    }

    #[test]
    fn test_render_slide_defaults() {
        let result = render_slide_impl("agenda", Value::Null).unwrap();
        assert_eq!(result.html, TemplateKind::Agenda.render_default());
    }
}
