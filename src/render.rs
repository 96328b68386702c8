use crate::core::{LabelPlacement, LABEL_TRANSITION_SEC};
use web_sys as web;

#[inline]
fn transform_css(p: &LabelPlacement) -> String {
    format!("translate3d({:.2}px, {:.2}px, {:.2}px)", p.x, p.y, p.z)
}

/// Position and fade one label element.
pub fn style_label(el: &web::HtmlElement, p: &LabelPlacement) {
    let style = el.style();
    _ = style.set_property("transform", &transform_css(p));
    _ = style.set_property("opacity", &format!("{:.3}", p.opacity));
    _ = style.set_property(
        "transition",
        &format!(
            "transform {t}s linear, opacity {t}s linear",
            t = LABEL_TRANSITION_SEC
        ),
    );
}

/// Apply placements to label elements pairwise; labels stay hidden while
/// the layout has nothing to show.
pub fn apply_placements(elements: &[web::HtmlElement], placements: &[LabelPlacement]) {
    if placements.is_empty() {
        for el in elements {
            _ = el.style().set_property("opacity", "0");
        }
        return;
    }
    for (el, p) in elements.iter().zip(placements) {
        style_label(el, p);
    }
}
