use crate::core::{parse_label_list, ContainerRect, LayoutError, LABEL_CLASS, SKILLS_DATA_ATTRIBUTE};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_container(container_id: &str) -> Result<web::HtmlElement, LayoutError> {
    let document = web::window()
        .ok_or(LayoutError::NoWindow)?
        .document()
        .ok_or(LayoutError::NoDocument)?;
    document
        .get_element_by_id(container_id)
        .ok_or_else(|| LayoutError::ContainerMissing(container_id.to_string()))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| LayoutError::Dom(format!("{:?}", e)))
}

/// Size used for the sphere radius (layout size, not transformed bounds).
#[inline]
pub fn container_size(container: &web::HtmlElement) -> (f32, f32) {
    (container.client_width() as f32, container.client_height() as f32)
}

#[inline]
pub fn container_rect(container: &web::Element) -> ContainerRect {
    let rect = container.get_bounding_client_rect();
    ContainerRect {
        left: rect.x() as f32,
        top: rect.y() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Labels configured on the container itself, if any.
pub fn container_labels(container: &web::Element) -> Option<Vec<String>> {
    container
        .get_attribute(SKILLS_DATA_ATTRIBUTE)
        .and_then(|raw| parse_label_list(&raw))
}

/// Create one hidden label element per entry and attach them to `container`.
pub fn create_label_elements(
    document: &web::Document,
    container: &web::Element,
    labels: &[String],
) -> Result<Vec<web::HtmlElement>, LayoutError> {
    labels
        .iter()
        .map(|label| {
            let el = document
                .create_element("div")
                .map_err(|e| LayoutError::Dom(format!("{:?}", e)))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| LayoutError::Dom(format!("{:?}", e)))?;
            _ = el.class_list().add_1(LABEL_CLASS);
            el.set_text_content(Some(label));
            _ = el.style().set_property("opacity", "0");
            container
                .append_child(&el)
                .map_err(|e| LayoutError::Dom(format!("{:?}", e)))?;
            Ok(el)
        })
        .collect()
}

pub fn remove_elements(elements: &[web::HtmlElement]) {
    for el in elements {
        el.remove();
    }
}

/// Retitle the page when it is showing the sphere on its own route.
pub fn apply_route_title(route: &str, title: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let on_route = window
        .location()
        .pathname()
        .map(|p| p == route)
        .unwrap_or(false);
    if on_route {
        if let Some(document) = window.document() {
            document.set_title(title);
        }
    }
}
