use std::rc::Rc;

use page_interactions::fragment::FragmentHost;
use page_interactions::menu::ActiveMarker;
use page_interactions::style::{set_property_logged, InlineStyle};
use page_interactions::validate::RequiredField;
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, SvgElement, Window,
};

use crate::WebError;

pub(super) fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub(super) fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Elements of a `querySelectorAll` result; non-element nodes are skipped.
pub(super) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Inline style of an HTML or SVG element; `None` for anything else.
pub(super) fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(SvgElement::style)
}

/// `el.style` seen through the core style trait.
pub(super) struct InlineCss(pub(super) CssStyleDeclaration);

impl InlineStyle for InlineCss {
    type Error = WebError;

    fn set_property(&self, property: &str, value: &str) -> Result<(), WebError> {
        Ok(self.0.set_property(property, value)?)
    }
}

pub(super) fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) {
    set_property_logged(&InlineCss(style.clone()), property, value);
}

/// An element whose menu state is the presence of one class.
pub(super) struct ClassMarker {
    pub(super) element: Element,
    class: Rc<str>,
}

impl ClassMarker {
    pub(super) fn new(element: Element, class: Rc<str>) -> Self {
        Self { element, class }
    }
}

impl ActiveMarker for ClassMarker {
    fn is_active(&self) -> bool {
        self.element.class_list().contains(&self.class)
    }

    fn set_active(&self, active: bool) {
        if let Err(e) = self.element.class_list().toggle_with_force(&self.class, active) {
            log::warn!("menu: class toggle failed: {}", WebError::from(e));
        }
    }
}

pub(super) enum RequiredInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl RequiredInput {
    pub(super) fn from_element(el: Element) -> Option<Self> {
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(RequiredInput::Input(input)),
            Err(el) => el
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(RequiredInput::TextArea),
        }
    }
}

impl RequiredField for RequiredInput {
    fn value(&self) -> String {
        match self {
            RequiredInput::Input(i) => i.value(),
            RequiredInput::TextArea(t) => t.value(),
        }
    }

    fn set_border_color(&self, color: &str) {
        let style = match self {
            RequiredInput::Input(i) => i.style(),
            RequiredInput::TextArea(t) => t.style(),
        };
        set_style(&style, "border-color", color);
    }
}

/// Fragment lookups against the live document.
pub(super) struct PageFragments {
    pub(super) document: Document,
}

impl FragmentHost for PageFragments {
    type Target = Element;

    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_to(&self, target: &Element) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
