//! Id-addressed DOM helpers. Every accessor degrades to a no-op when the
//! document or the element is missing, so page wiring stays linear.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

pub fn web_document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn element(id: &str) -> Option<Element> {
    web_document().and_then(|doc| doc.get_element_by_id(id))
}

pub fn set_text(id: &str, value: impl AsRef<str>) {
    let Some(node) = element(id) else {
        return;
    };
    node.set_text_content(Some(value.as_ref()));
}

/// Replaces an element's content with rendered markup. Callers pass either
/// the output of the escaping renderers or a `RawHtml` body string; this is
/// the sink below the trust boundary, not part of it.
pub fn set_markup(id: &str, markup: &str) {
    let Some(node) = element(id) else {
        return;
    };
    node.set_inner_html(markup);
}

pub fn set_hidden(id: &str, hidden: bool) {
    let Some(node) = element(id).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    node.set_hidden(hidden);
}

pub fn set_attr(id: &str, name: &str, value: &str) {
    let Some(node) = element(id) else {
        return;
    };
    let _ = node.set_attribute(name, value);
}

pub fn input_value(id: &str) -> String {
    element(id)
        .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn select_value(id: &str) -> String {
    element(id)
        .and_then(|node| node.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

pub fn append_option(select_id: &str, value: &str) {
    let Some(doc) = web_document() else {
        return;
    };
    let Some(select) = doc.get_element_by_id(select_id) else {
        return;
    };
    let Ok(option) = doc.create_element("option") else {
        return;
    };
    let _ = option.set_attribute("value", value);
    option.set_text_content(Some(value));
    let _ = select.append_child(&option);
}

/// Installs a leaked event listener, the lifetime model for handlers that
/// live as long as the page.
pub fn listen(id: &str, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(target) = element(id) else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    callback.forget();
}
