use std::rc::Rc;

use page_interactions::navbar::NavbarStyle;
use page_interactions::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;
use crate::WebError;

pub(super) fn attach(cfg: &Rc<PageConfig>) -> Result<(), WebError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(navbar) = document
        .query_selector(&cfg.selectors.navbar)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("navbar: not found, scroll style not attached");
        return Ok(());
    };

    apply(&window, &navbar, cfg);

    let on_scroll = {
        let cfg = cfg.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            apply(&window, &navbar, &cfg);
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn apply(window: &web_sys::Window, navbar: &HtmlElement, cfg: &PageConfig) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let theme = &cfg.navbar;
    let style = NavbarStyle::for_offset(scroll_y, theme);
    let css = navbar.style();
    dom::set_style(&css, "background", style.background(theme));
    dom::set_style(&css, "backdrop-filter", style.backdrop_filter(theme));
}
