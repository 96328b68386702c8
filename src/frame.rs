use crate::core::{LayoutError, SphereLayout};
use crate::dom;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state handed to every listener and to the timer.
#[derive(Clone)]
pub struct SphereContext {
    pub layout: Rc<RefCell<SphereLayout>>,
    pub elements: Rc<RefCell<Vec<web::HtmlElement>>>,
}

impl SphereContext {
    pub fn new(layout: SphereLayout) -> Self {
        Self {
            layout: Rc::new(RefCell::new(layout)),
            elements: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn container_id(&self) -> String {
        self.layout.borrow().config.container_id.clone()
    }

    /// Re-measure the container and regenerate points if its radius changed.
    ///
    /// A missing container is logged and otherwise ignored; the next resize
    /// event tries again. Label elements are (re)built whenever the layout is
    /// ready but they are not, so a failed build is retried too.
    pub fn handle_resize(&self) {
        let id = self.container_id();
        let container = dom::find_container(&id);
        let size = container
            .as_ref()
            .map(dom::container_size)
            .map_err(Clone::clone);
        let changed = self.layout.borrow_mut().resize_from(size);
        let Ok(container) = container else {
            return;
        };
        let built = match self.ensure_elements(&container) {
            Ok(built) => built,
            Err(e) => {
                log::warn!("[resize] label elements: {}", e);
                return;
            }
        };
        if changed || built {
            self.render();
        }
    }

    pub fn handle_pointer(&self, x: f32, y: f32) {
        if !self.layout.borrow().is_ready() {
            return;
        }
        let id = self.container_id();
        match dom::find_container(&id) {
            Ok(container) => {
                let rect = dom::container_rect(&container);
                self.layout.borrow_mut().pointer_moved(x, y, &rect);
            }
            Err(e) => log::debug!("[pointer] {}", e),
        }
    }

    /// One timer tick: rotate, then redraw.
    pub fn frame(&self) {
        self.layout.borrow_mut().tick();
        self.render();
    }

    pub fn render(&self) {
        let placements = self.layout.borrow().placements();
        render::apply_placements(&self.elements.borrow(), &placements);
    }

    pub fn remove_elements(&self) {
        let mut elements = self.elements.borrow_mut();
        dom::remove_elements(&elements);
        elements.clear();
    }

    /// Build label elements if the layout needs them; `Ok(true)` when built.
    fn ensure_elements(&self, container: &web::HtmlElement) -> Result<bool, LayoutError> {
        let existing = self.elements.borrow().len();
        if !self.layout.borrow().needs_label_elements(existing) {
            return Ok(false);
        }
        self.remove_elements();
        if let Some(labels) = dom::container_labels(container) {
            let mut layout = self.layout.borrow_mut();
            if labels != layout.config.labels {
                layout.set_labels(labels);
            }
        }
        let document = dom::window_document().ok_or(LayoutError::NoDocument)?;
        let created = {
            let layout = self.layout.borrow();
            dom::create_label_elements(&document, container, layout.labels())?
        };
        log::info!("[sphere] mounted {} labels in #{}", created.len(), container.id());
        *self.elements.borrow_mut() = created;
        Ok(true)
    }
}

/// Fixed-period timer driving `SphereContext::frame`; cleared on drop.
pub struct IntervalTimer {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

pub fn start_interval(ctx: &SphereContext, period_ms: i32) -> Result<IntervalTimer, LayoutError> {
    let window = web::window().ok_or(LayoutError::NoWindow)?;
    let ctx_tick = ctx.clone();
    let closure = Closure::wrap(Box::new(move || {
        ctx_tick.frame();
    }) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .map_err(|e| LayoutError::Dom(format!("{:?}", e)))?;
    Ok(IntervalTimer {
        handle,
        _closure: closure,
    })
}
