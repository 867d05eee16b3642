use crate::constants::POINTER_EVENT;
use crate::dom;
use glam::Vec2;
use hero_core::{ParallaxStage, SurfaceBounds};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer-move listener registered on the hero surface. Dropping it
/// unregisters the callback and frees the closure.
pub struct PointerListener {
    surface: web::HtmlElement,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListener {
    pub fn attach(
        surface: &web::HtmlElement,
        stage: Rc<RefCell<ParallaxStage>>,
    ) -> anyhow::Result<Self> {
        let surface_rect = surface.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = surface_rect.get_bounding_client_rect();
            let bounds = SurfaceBounds::new(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            );
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            match stage.try_borrow_mut() {
                Ok(mut s) => {
                    s.pointer_moved(pos, bounds);
                }
                Err(_) => log::debug!("[pointer] stage busy; dropping move"),
            }
        }) as Box<dyn FnMut(_)>);

        surface
            .add_event_listener_with_callback(POINTER_EVENT, closure.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;

        Ok(Self {
            surface: surface.clone(),
            closure,
        })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        _ = self.surface.remove_event_listener_with_callback(
            POINTER_EVENT,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
