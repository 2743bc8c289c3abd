use std::cell::RefCell;
use std::rc::Rc;

use page_interactions::reveal::{hidden_declarations, revealed_declarations, RevealTargets};
use page_interactions::style::apply_declarations;
use page_interactions::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{self, InlineCss};
use crate::WebError;

type Targets = Rc<RefCell<RevealTargets<Element>>>;

/// Hides the reveal targets and hands them to one shared observer.
///
/// Targets are collected once; elements added to the page later are not
/// observed. Revealed elements stay observed but are never hidden again.
pub(super) fn attach(cfg: &Rc<PageConfig>) -> Result<(), WebError> {
    let document = dom::document()?;
    let elements = dom::query_all(&document, &cfg.selectors.reveal_selector())?;
    if elements.is_empty() {
        log::debug!("reveal: no targets");
        return Ok(());
    }

    let targets: Targets = Rc::new(RefCell::new(RevealTargets::new()));
    let observer = build_observer(cfg, targets.clone())?;

    let hidden = hidden_declarations(&cfg.reveal);
    for el in elements {
        let style = dom::style_of(&el).map(InlineCss);
        if targets.borrow_mut().hide_and_track(el.clone(), style, &hidden) {
            observer.observe(&el);
        } else {
            log::debug!("reveal: skipping unstyleable <{}>", el.tag_name());
        }
    }

    log::debug!("reveal: observing {} targets", targets.borrow().len());
    Ok(())
}

fn build_observer(cfg: &PageConfig, targets: Targets) -> Result<IntersectionObserver, WebError> {
    let revealed = revealed_declarations();
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut targets = targets.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if targets.report(&target, entry.is_intersecting()) {
                    if let Some(style) = dom::style_of(&target) {
                        apply_declarations(&InlineCss(style), &revealed);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.reveal.threshold));
    init.set_root_margin(&cfg.reveal.root_margin);

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    on_intersect.forget();
    Ok(observer)
}
