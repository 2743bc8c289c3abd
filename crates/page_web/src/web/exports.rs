//! Utilities shared with other scripts on the page.
//!
//! Exported twice: as wasm-bindgen module functions, and as properties of one
//! namespace object on `window` for scripts that never import the module.

use page_interactions::element::ElementSpec;
use page_interactions::validate::validate_fields;
use page_interactions::COLLABORATION_DEMO_MESSAGE;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom::{self, RequiredInput};
use crate::WebError;

const REQUIRED_FIELDS: &str = "input[required], textarea[required]";

/// Marks blank required fields inside `form` and returns whether all are filled.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: &Element) -> bool {
    let cfg = super::config();
    let fields = match form.query_selector_all(REQUIRED_FIELDS) {
        Ok(list) => dom::elements(&list),
        Err(e) => {
            log::warn!("validateForm: {}", WebError::from(e));
            Vec::new()
        }
    };
    validate_fields(
        fields.into_iter().filter_map(RequiredInput::from_element),
        &cfg.validation,
    )
}

/// Builds an unattached element.
///
/// `inner_content` is set as raw `innerHTML`; never pass untrusted input.
#[wasm_bindgen(js_name = createInteractiveElement)]
pub fn create_interactive_element(
    tag_name: &str,
    inner_content: &str,
    class_name: Option<String>,
) -> Result<Element, JsValue> {
    let spec = ElementSpec::new(tag_name, inner_content, class_name.as_deref());
    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let el = document.create_element(&spec.tag)?;
    el.set_inner_html(&spec.inner_html);
    if let Some(class) = &spec.class_name {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Placeholder for the collaboration demo.
#[wasm_bindgen(js_name = showCollaborationDemo)]
pub fn show_collaboration_demo() {
    // Traced regardless of the configured log level.
    web_sys::console::log_1(&JsValue::from_str(COLLABORATION_DEMO_MESSAGE));
}

/// Publishes the three utilities as `window[namespace]`.
pub(super) fn install_namespace(namespace: &str) -> Result<(), WebError> {
    let window = dom::window()?;
    let ns = js_sys::Object::new();

    let validate = Closure::wrap(
        Box::new(|form: Element| validate_form(&form)) as Box<dyn Fn(Element) -> bool>
    );
    js_sys::Reflect::set(&ns, &JsValue::from_str("validateForm"), validate.as_ref())?;
    validate.forget();

    let create = Closure::wrap(Box::new(
        |tag: String, inner: String, class: Option<String>| {
            create_interactive_element(&tag, &inner, class)
        },
    )
        as Box<dyn Fn(String, String, Option<String>) -> Result<Element, JsValue>>);
    js_sys::Reflect::set(
        &ns,
        &JsValue::from_str("createInteractiveElement"),
        create.as_ref(),
    )?;
    create.forget();

    let demo = Closure::wrap(Box::new(show_collaboration_demo) as Box<dyn Fn()>);
    js_sys::Reflect::set(&ns, &JsValue::from_str("showCollaborationDemo"), demo.as_ref())?;
    demo.forget();

    js_sys::Reflect::set(&window, &JsValue::from_str(namespace), &ns)?;
    log::debug!("exports: window.{namespace} installed");
    Ok(())
}
