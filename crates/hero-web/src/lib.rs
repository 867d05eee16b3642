#![cfg(target_arch = "wasm32")]
use hero_core::{ParallaxStage, SmoothingMode, StageParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod schedule;
mod transform;
mod widgets;

thread_local! {
    // Instance created by `start` when the page provides #hero-root.
    static AUTO_MOUNT: RefCell<Option<HeroMount>> = const { RefCell::new(None) };
}

/// Everything one mounted hero owns. Dropping it stops the frame loop,
/// removes the pointer listener, freezes the stage and detaches the DOM.
struct HeroMount {
    root_id: String,
    stage: Rc<RefCell<ParallaxStage>>,
    frames: Option<frame::FrameLoop>,
    pointer: Option<events::PointerListener>,
    section: web::HtmlElement,
}

impl HeroMount {
    fn new(root_id: &str, params: StageParams) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", root_id))?;

        dom::install_stylesheet(&document, constants::STYLESHEET_ID, constants::STYLESHEET)?;
        dom::install_module_script(
            &document,
            constants::SCENE_VIEWER_SCRIPT_ID,
            constants::SCENE_VIEWER_SCRIPT,
        )?;
        let stage = Rc::new(RefCell::new(ParallaxStage::hero(params)?));
        let widgets::HeroDom { section, items } = widgets::build_hero(&document)?;
        let pointer = events::PointerListener::attach(&section, stage.clone())?;
        root.append_child(&section).map_err(dom::js_err)?;

        let ctx = Rc::new(RefCell::new(frame::FrameContext::new(stage.clone(), items)));
        let frames = match frame::start_loop(ctx) {
            Ok(f) => f,
            Err(e) => {
                section.remove();
                return Err(e);
            }
        };

        log::info!("[hero] mounted into #{}", root_id);
        Ok(Self {
            root_id: root_id.to_string(),
            stage,
            frames: Some(frames),
            pointer: Some(pointer),
            section,
        })
    }

    fn set_smoothing(&self, mode: SmoothingMode) {
        if let Ok(mut s) = self.stage.try_borrow_mut() {
            s.set_smoothing(mode);
        }
    }
}

impl Drop for HeroMount {
    fn drop(&mut self) {
        self.frames.take();
        self.pointer.take();
        if let Ok(mut s) = self.stage.try_borrow_mut() {
            s.unmount();
        }
        self.section.remove();
        log::info!("[hero] unmounted from #{}", self.root_id);
    }
}

/// Handle returned to JavaScript for one mounted hero.
#[wasm_bindgen]
pub struct HeroHandle {
    mount: Option<HeroMount>,
}

#[wasm_bindgen]
impl HeroHandle {
    /// Tear the hero down. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.mount.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Make layers jump straight to the cursor instead of easing.
    pub fn set_snap(&self, snap: bool) {
        if let Some(m) = &self.mount {
            m.set_smoothing(if snap {
                SmoothingMode::Snap
            } else {
                SmoothingMode::Spring
            });
        }
    }
}

/// Build the hero inside the element with id `root_id` and start animating.
#[wasm_bindgen]
pub fn mount_hero(root_id: &str) -> Result<HeroHandle, JsValue> {
    HeroMount::new(root_id, StageParams::default())
        .map(|m| HeroHandle { mount: Some(m) })
        .map_err(|e| {
            log::error!("[hero] mount failed: {:?}", e);
            JsValue::from_str(&format!("{:#}", e))
        })
}

fn auto_mount() {
    let present = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::AUTO_MOUNT_ROOT_ID))
        .is_some();
    if !present {
        log::info!(
            "[hero] no #{}; waiting for mount_hero()",
            constants::AUTO_MOUNT_ROOT_ID
        );
        return;
    }
    AUTO_MOUNT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            log::warn!("[hero] already auto-mounted; ignoring");
            return;
        }
        match HeroMount::new(constants::AUTO_MOUNT_ROOT_ID, StageParams::default()) {
            Ok(m) => *slot = Some(m),
            Err(e) => log::error!("[hero] auto-mount failed: {:?}", e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(auto_mount);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())?;
    } else {
        auto_mount();
    }

    dom::add_window_listener("pagehide", || {
        AUTO_MOUNT.with(|slot| slot.borrow_mut().take());
    });
    Ok(())
}
