use super::EventListener;
use crate::frame::SphereContext;
use crate::input;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn wire_pointermove(
    target: &web::EventTarget,
    ctx: &SphereContext,
) -> Result<EventListener, JsValue> {
    let ctx = ctx.clone();
    EventListener::new(target, "pointermove", move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            let (x, y) = input::pointer_client_pos(mouse);
            ctx.handle_pointer(x, y);
        }
    })
}

pub fn wire_touchmove(
    target: &web::EventTarget,
    ctx: &SphereContext,
) -> Result<EventListener, JsValue> {
    let ctx = ctx.clone();
    EventListener::new(target, "touchmove", move |ev: web::Event| {
        let Some(touch_ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some((x, y)) = input::first_touch_page_pos(touch_ev) {
            ctx.handle_pointer(x, y);
        }
    })
}
