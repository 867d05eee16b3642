use crate::dom;
use crate::schedule::FrameSchedule;
use crate::transform::css_transform;
use crate::widgets::AnimatedItem;
use hero_core::{ItemTransform, ParallaxStage};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub stage: Rc<RefCell<ParallaxStage>>,
    pub items: Vec<AnimatedItem>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(stage: Rc<RefCell<ParallaxStage>>, items: Vec<AnimatedItem>) -> Self {
        Self {
            stage,
            items,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut stage = match self.stage.try_borrow_mut() {
            Ok(s) => s,
            Err(_) => return,
        };
        if !stage.tick(dt) {
            return;
        }

        for item in self.items.iter_mut() {
            let Some(offset) = stage.offset(item.layer) else {
                continue;
            };
            let t = ItemTransform::compose(offset, &item.placement, item.tilt);
            // Settled layers repeat the same transform; skip the style write.
            if item.last == Some(t) {
                continue;
            }
            dom::set_transform(&item.el, &css_transform(&t));
            item.last = Some(t);
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and breaks the closure's self-reference.
pub struct FrameLoop {
    schedule: Rc<FrameSchedule>,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn stop(&mut self) {
        if let Some(id) = self.schedule.stop() {
            cancel_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn cancel_frame(id: i32) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(id);
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

fn schedule_next(schedule: &FrameSchedule, tick: &TickClosure) -> bool {
    match request_frame(tick) {
        Some(id) => {
            if let Some(stale) = schedule.scheduled(id) {
                cancel_frame(stale);
            }
            true
        }
        None => false,
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<FrameLoop> {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let schedule = Rc::new(FrameSchedule::new());

    let tick_clone = tick.clone();
    let schedule_tick = schedule.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !schedule_tick.begin_frame() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if schedule_tick.is_running() && !schedule_next(&schedule_tick, &tick_clone) {
            log::warn!("[frame] requestAnimationFrame failed; animation stopped");
        }
    }) as Box<dyn FnMut()>));

    if !schedule_next(&schedule, &tick) {
        tick.borrow_mut().take();
        anyhow::bail!("requestAnimationFrame failed");
    }
    Ok(FrameLoop { schedule, tick })
}
