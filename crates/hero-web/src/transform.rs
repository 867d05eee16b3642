// Pure CSS formatting for item transforms; no web-sys here so host tests can
// include this file directly.
use hero_core::{ItemPlacement, ItemTransform};
use std::fmt::Write;

#[inline]
fn px(v: f32) -> f32 {
    // -0.0 would print as "-0.00"
    v + 0.0
}

/// CSS `transform` value for one item.
pub fn css_transform(t: &ItemTransform) -> String {
    let o = t.offset;
    let mut css = if t.centered {
        format!(
            "translate3d(calc(-50% + {:.2}px), calc(-50% + {:.2}px), 0)",
            px(o.x),
            px(o.y)
        )
    } else {
        format!("translate3d({:.2}px, {:.2}px, 0)", px(o.x), px(o.y))
    };
    if o.rx != 0.0 || o.ry != 0.0 {
        _ = write!(
            css,
            " rotateX({:.3}deg) rotateY({:.3}deg)",
            px(o.rx),
            px(o.ry)
        );
    }
    if t.rotate_deg != 0.0 {
        _ = write!(css, " rotate({}deg)", t.rotate_deg);
    }
    css
}

/// Inline `left`/`top` for anchored items; empty for fill items.
pub fn anchor_style(p: &ItemPlacement) -> String {
    match p.anchor_pct {
        Some(a) => format!("left: {}%; top: {}%;", a.x, a.y),
        None => String::new(),
    }
}
