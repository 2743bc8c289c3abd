use std::cell::RefCell;
use std::rc::Rc;

use page_interactions::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::WebError;

mod anchors;
mod dom;
mod exports;
mod logger;
mod menu;
mod navbar;
mod reveal;

pub use exports::{create_interactive_element, show_collaboration_demo, validate_form};

const CONFIG_ELEMENT_ID: &str = "page-interactions-config";

thread_local! {
    static CONFIG: RefCell<Rc<PageConfig>> = RefCell::new(Rc::new(PageConfig::default()));
}

/// Config in effect for this page; defaults until `start` has loaded one.
pub(crate) fn config() -> Rc<PageConfig> {
    CONFIG.with(|c| c.borrow().clone())
}

impl From<JsValue> for WebError {
    fn from(v: JsValue) -> Self {
        if let Some(s) = v.as_string() {
            return WebError::Js(s);
        }
        if let Some(e) = v.dyn_ref::<js_sys::Error>() {
            return WebError::Js(String::from(e.message()));
        }
        WebError::Js(format!("{v:?}"))
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    logger::init(log::LevelFilter::Warn);

    let cfg = Rc::new(load_config());
    logger::init(cfg.log_level_filter());
    CONFIG.with(|c| *c.borrow_mut() = cfg.clone());

    if let Err(e) = exports::install_namespace(&cfg.namespace) {
        log::error!("failed to install window.{}: {e}", cfg.namespace);
    }

    let result = when_ready(move || attach_all(&cfg));
    if let Err(e) = result {
        log::error!("page interactions not attached: {e}");
    }
}

/// Reads `<script type="application/json" id="page-interactions-config">`.
/// Missing means defaults; invalid is logged and also means defaults.
fn load_config() -> PageConfig {
    let raw = dom::document()
        .ok()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {}", WebError::from(e));
            PageConfig::default()
        }
    }
}

/// Runs `f` once the DOM is parsed: immediately if it already is, otherwise
/// on `DOMContentLoaded`.
fn when_ready(f: impl FnOnce() + 'static) -> Result<(), WebError> {
    let document = dom::document()?;
    let state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?;
    if state.as_string().as_deref() != Some("loading") {
        f();
        return Ok(());
    }

    let mut f = Some(f);
    let cb = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn attach_all(cfg: &Rc<PageConfig>) {
    let steps: [(&str, fn(&Rc<PageConfig>) -> Result<(), WebError>); 4] = [
        ("menu", menu::attach),
        ("anchors", anchors::attach),
        ("navbar", navbar::attach),
        ("reveal", reveal::attach),
    ];
    // Each behavior is independent; one failing does not stop the others.
    for (name, attach) in steps {
        if let Err(e) = attach(cfg) {
            log::error!("{name}: {e}");
        }
    }
}
