// DOM hooks and embed settings for the web hero.

// Element the hero auto-mounts into on startup
pub const AUTO_MOUNT_ROOT_ID: &str = "hero-root";

// Injected once per document
pub const STYLESHEET_ID: &str = "hero-styles";

// The section owns the pointer listener; bounds are taken from it
pub const POINTER_EVENT: &str = "pointermove";

// External 3D background (rendered by the viewer web component, not by us)
pub const SCENE_VIEWER_TAG: &str = "spline-viewer";
pub const SCENE_URL: &str = "https://prod.spline.design/IKzHtP5ThSO83edK/scene.splinecode";
// Module script defining the viewer element; injected once per document
pub const SCENE_VIEWER_SCRIPT_ID: &str = "hero-scene-viewer";
pub const SCENE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const STYLESHEET: &str = r#"
.hero-section {
    position: relative;
    min-height: 100vh;
    width: 100%;
    overflow: hidden;
    color: #fff;
    background: linear-gradient(135deg, #0f172a, #020617 50%, #0f172a);
    font-family: system-ui, sans-serif;
}
.hero-scene { position: absolute; inset: 0; z-index: 0; pointer-events: none; }
.hero-scene > * { width: 100%; height: 100%; }
.hero-glow {
    position: absolute; inset: 0; z-index: 10; pointer-events: none;
    background: radial-gradient(70% 60% at 50% 20%, rgba(56,189,248,0.18), transparent 60%);
}
.hero-content { position: relative; z-index: 20; max-width: 72rem; margin: 0 auto; padding: 7rem 1.5rem 6rem; }
.hero-heading { max-width: 48rem; margin: 0 auto 3.5rem; text-align: center; animation: hero-fade-in 0.6s ease-out both; }
.hero-heading h1 { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 600; letter-spacing: -0.02em; margin: 0; color: #e2e8f0; }
.hero-heading p { margin-top: 1rem; font-size: 1.125rem; color: rgba(203,213,225,0.9); }
.hero-stage { position: relative; height: 520px; width: 100%; perspective: 1200px; }
.hero-layer { position: absolute; inset: 0; }
.hero-item { position: absolute; will-change: transform; animation: hero-fade-in 0.7s ease-out both; }
.hero-card {
    border-radius: 1rem; padding: 1rem;
    background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1);
    backdrop-filter: blur(8px); box-shadow: 0 10px 15px -3px rgba(12,74,110,0.2);
}
.hero-glow-shape {
    position: absolute; inset: -1.5rem; border-radius: 2rem; filter: blur(40px); opacity: 0.5;
    background: linear-gradient(45deg, rgba(3,105,161,0.2), rgba(59,130,246,0.1), rgba(103,232,249,0.1));
}
.hero-fill { inset: 0; }
.hero-invoice { width: 14rem; }
.hero-row { display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; }
.hero-muted { color: #cbd5e1; font-size: 0.875rem; }
.hero-faint { color: #94a3b8; font-size: 0.75rem; }
.hero-accent { color: #7dd3fc; font-size: 0.75rem; }
.hero-strong { color: #f8fafc; font-weight: 600; }
.hero-skeleton { height: 6px; border-radius: 4px; background: rgba(51,65,85,0.6); margin-bottom: 0.5rem; }
.hero-bars { display: flex; align-items: flex-end; gap: 4px; height: 4rem; }
.hero-bar { flex: 1; border-radius: 4px; background: linear-gradient(to top, rgba(14,165,233,0.3), rgba(125,211,252,0.6)); }
.hero-widget { width: 15rem; }
.hero-chart { width: 100%; height: 5rem; }
.hero-chart path { fill: none; stroke: rgba(56,189,248,0.6); stroke-width: 3; }
.hero-list { margin: 0; padding: 0; list-style: none; color: #cbd5e1; font-size: 0.75rem; }
.hero-list li { margin-bottom: 0.375rem; }
.hero-list li::before { content: "• "; }
.hero-ok { color: #6ee7b7; }
.hero-panel { width: 720px; max-width: 92%; border-radius: 1.5rem; padding: 2rem; background: rgba(255,255,255,0.08); transform-style: preserve-3d; }
.hero-panel-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 1rem; margin-top: 1.5rem; }
.hero-assistant { margin-top: 1.25rem; display: flex; align-items: center; gap: 0.75rem; border-radius: 1rem; padding: 0.75rem; background: linear-gradient(to right, rgba(14,165,233,0.1), rgba(34,211,238,0.1)); }
.hero-icon {
    border-radius: 9999px; padding: 0.5rem; line-height: 1;
    background: rgba(255,255,255,0.1); box-shadow: 0 0 0 1px rgba(255,255,255,0.2);
}
@keyframes hero-fade-in { from { opacity: 0; } to { opacity: 1; } }
"#;
