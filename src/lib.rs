#![cfg(target_arch = "wasm32")]
use crate::core::{SphereConfig, SphereLayout, SKILLS_PAGE_TITLE, SKILLS_ROUTE};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

thread_local! {
    // Sphere mounted by `start`, kept alive until `teardown`.
    static MOUNTED: RefCell<Option<SkillSphere>> = const { RefCell::new(None) };
}

/// A mounted label sphere. Owns its timer, listeners and label elements;
/// releasing it (via `unmount` or drop) removes all of them.
#[wasm_bindgen]
pub struct SkillSphere {
    ctx: frame::SphereContext,
    timer: Option<frame::IntervalTimer>,
    listeners: Vec<events::EventListener>,
}

#[wasm_bindgen]
impl SkillSphere {
    /// Mount a sphere with default tuning into the element with `container_id`.
    ///
    /// The container does not have to exist yet; the sphere appears on the
    /// first resize after it does.
    pub fn mount(container_id: &str) -> Result<SkillSphere, JsValue> {
        let config = SphereConfig::default().with_container_id(container_id);
        Self::mount_with(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn unmount(&mut self) {
        if self.timer.is_none() && self.listeners.is_empty() {
            return;
        }
        self.timer = None;
        self.listeners.clear();
        self.ctx.remove_elements();
        log::info!("[sphere] unmounted #{}", self.ctx.container_id());
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.ctx.layout.borrow().is_ready()
    }

    /// Current placements flattened as `[x, y, z, opacity, ...]` per label.
    pub fn placements(&self) -> js_sys::Float32Array {
        let flat: Vec<f32> = self
            .ctx
            .layout
            .borrow()
            .placements()
            .iter()
            .flat_map(|p| [p.x, p.y, p.z, p.opacity])
            .collect();
        js_sys::Float32Array::from(flat.as_slice())
    }
}

impl SkillSphere {
    pub fn mount_with(config: SphereConfig) -> anyhow::Result<Self> {
        dom::apply_route_title(SKILLS_ROUTE, SKILLS_PAGE_TITLE);

        let tick_ms = config.tick_interval_ms;
        let seed = js_sys::Date::now() as u64;
        let ctx = frame::SphereContext::new(SphereLayout::new(config, seed));

        ctx.handle_resize();
        let listeners = events::wire_sphere_listeners(&ctx)?;
        let timer = frame::start_interval(&ctx, tick_ms)?;
        log::info!(
            "[sphere] tick={}ms labels={} container=#{}",
            tick_ms,
            ctx.layout.borrow().labels().len(),
            ctx.container_id()
        );

        Ok(Self {
            ctx,
            timer: Some(timer),
            listeners,
        })
    }
}

impl Drop for SkillSphere {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Release the sphere mounted at startup.
#[wasm_bindgen]
pub fn teardown() {
    MOUNTED.with(|m| m.borrow_mut().take());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skill-sphere starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let sphere = SkillSphere::mount_with(SphereConfig::default())?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(sphere));
    Ok(())
}
