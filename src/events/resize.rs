use super::EventListener;
use crate::frame::SphereContext;
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn wire_resize(
    target: &web::EventTarget,
    ctx: &SphereContext,
) -> Result<EventListener, JsValue> {
    let ctx = ctx.clone();
    EventListener::new(target, "resize", move |_ev: web::Event| {
        ctx.handle_resize();
    })
}
