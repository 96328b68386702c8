pub mod pointer;
pub mod resize;

use crate::frame::SphereContext;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Subscribe the sphere to pointer, touch and resize events on the window.
pub fn wire_sphere_listeners(ctx: &SphereContext) -> anyhow::Result<Vec<EventListener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let target: &web::EventTarget = window.as_ref();
    let listeners = vec![
        pointer::wire_pointermove(target, ctx),
        pointer::wire_touchmove(target, ctx),
        resize::wire_resize(target, ctx),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .map_err(|e| anyhow::anyhow!("listener registration failed: {:?}", e))?;
    Ok(listeners)
}
