use std::rc::Rc;

use page_interactions::fragment::navigate_to_fragment;
use page_interactions::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::{self, PageFragments};
use crate::WebError;

pub(super) fn attach(cfg: &Rc<PageConfig>) -> Result<(), WebError> {
    let document = dom::document()?;
    let host = Rc::new(PageFragments {
        document: document.clone(),
    });

    let anchors = dom::query_all(&document, &cfg.selectors.anchor_links)?;
    for anchor in &anchors {
        let host = host.clone();
        let target = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            if let Some(href) = target.get_attribute("href") {
                navigate_to_fragment(host.as_ref(), &href);
            }
        }) as Box<dyn FnMut(_)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    log::debug!("anchors: smooth scroll on {} links", anchors.len());
    Ok(())
}
