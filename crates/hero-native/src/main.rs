use std::time::{Duration, Instant};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use glam::Vec2;
use hero_core::{LayerKind, ParallaxStage, SmoothingMode, StageParams, SurfaceBounds};

// How often the window title and debug log are refreshed
const REPORT_INTERVAL: Duration = Duration::from_millis(100);
// Tick cadence; the preview draws nothing itself, so roughly display rate is enough
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn surface_of(window: &winit::window::Window) -> SurfaceBounds {
    let size = window.inner_size();
    SurfaceBounds::from_size(size.width as f32, size.height as f32)
}

fn report(window: &winit::window::Window, stage: &ParallaxStage) {
    if let Some(o) = stage.offset(LayerKind::HeroPanel) {
        window.set_title(&format!(
            "Parallax hero preview | panel x={:+.1} y={:+.1} rx={:+.2} ry={:+.2}{}",
            o.x,
            o.y,
            o.rx,
            o.ry,
            if stage.is_at_rest() { " (rest)" } else { "" }
        ));
    }
    if log::log_enabled!(log::Level::Debug) {
        let p = stage.pointer();
        for layer in stage.layers() {
            let c = layer.current();
            log::debug!(
                "[stage] pointer=({:+.2},{:+.2}) {:<16} x={:+7.2} y={:+7.2} rx={:+5.2} ry={:+5.2}",
                p.x,
                p.y,
                layer.spec.kind.name(),
                c.x,
                c.y,
                c.rx,
                c.ry
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let snap = std::env::args().any(|a| a == "--snap");
    let params = StageParams {
        smoothing: if snap {
            SmoothingMode::Snap
        } else {
            SmoothingMode::Spring
        },
        ..StageParams::default()
    };
    let mut stage = ParallaxStage::hero(params)?;

    let event_loop = EventLoop::new().map_err(|e| anyhow::anyhow!("event loop: {e}"))?;
    let window = WindowBuilder::new()
        .with_title("Parallax hero preview")
        .with_inner_size(LogicalSize::new(1200.0, 720.0))
        .build(&event_loop)
        .map_err(|e| anyhow::anyhow!("window: {e}"))?;
    log::info!(
        "[native] preview window open ({} layers, smoothing={:?})",
        stage.layers().len(),
        stage.params().smoothing
    );

    let mut last_frame = Instant::now();
    let mut last_report = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                stage.pointer_moved(pos, surface_of(&window));
            }
            Event::WindowEvent {
                event: WindowEvent::CursorLeft { .. },
                ..
            } => stage.pointer_reset(),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                stage.unmount();
                log::info!("[native] closing preview");
                elwt.exit();
            }
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = now - last_frame;
                last_frame = now;
                if stage.tick(dt) && now - last_report >= REPORT_INTERVAL {
                    last_report = now;
                    report(&window, &stage);
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(now + FRAME_INTERVAL));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("event loop: {e}"))?;
    Ok(())
}
