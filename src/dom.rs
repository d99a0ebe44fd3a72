use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// The element page controllers bind against: `<html>` in production, a
/// detached fixture in tests.
pub(crate) fn page_root() -> Option<Element> {
    document().and_then(|document| document.document_element())
}

pub(crate) fn find_by_id(root: &Element, id: &str) -> Option<Element> {
    if root.id() == id {
        return Some(root.clone());
    }
    root.query_selector(&format!("#{id}")).ok().flatten()
}

pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{name}"))
}

pub(crate) fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}
