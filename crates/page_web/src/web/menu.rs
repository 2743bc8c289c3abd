use std::rc::Rc;

use page_interactions::menu::MenuController;
use page_interactions::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::{self, ClassMarker};
use crate::WebError;

pub(super) fn attach(cfg: &Rc<PageConfig>) -> Result<(), WebError> {
    let document = dom::document()?;
    let class: Rc<str> = Rc::from(cfg.active_class.as_str());
    let marker = |el: web_sys::Element| ClassMarker::new(el, class.clone());

    let button = document.query_selector(&cfg.selectors.hamburger)?.map(marker);
    let panel = document.query_selector(&cfg.selectors.nav_menu)?.map(marker);
    let Some(menu) = MenuController::new(button, panel) else {
        log::debug!("menu: button or panel missing, toggle not attached");
        return Ok(());
    };
    let menu = Rc::new(menu);

    let on_toggle = {
        let menu = menu.clone();
        Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let state = menu.toggle();
            log::debug!("menu: {state:?}");
        }) as Box<dyn FnMut(_)>)
    };
    menu.button()
        .element
        .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    let links = dom::elements(&menu.panel().element.query_selector_all(&cfg.selectors.nav_link)?);
    for link in &links {
        let menu = menu.clone();
        let on_link = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            menu.close();
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())?;
        on_link.forget();
    }

    log::debug!("menu: toggle attached, {} closing links", links.len());
    Ok(())
}
