use vitrine_core::{ClassTarget, TrackSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// DOM element handle used for the header, the track and the dots.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement {
    element: Element,
}

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ClassTarget for DomElement {
    fn set_class(&self, class: &str, enabled: bool) {
        if let Err(err) = self.element.class_list().toggle_with_force(class, enabled) {
            log::warn!("failed to toggle class '{class}': {err:?}");
        }
    }
}

impl TrackSurface for DomElement {
    fn set_transform(&self, transform: &str) {
        let Some(html_element) = self.element.dyn_ref::<HtmlElement>() else {
            log::warn!("slider track is not an HTML element; transform not applied");
            return;
        };
        if let Err(err) = html_element.style().set_property("transform", transform) {
            log::warn!("failed to set track transform: {err:?}");
        }
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(elements)
}
