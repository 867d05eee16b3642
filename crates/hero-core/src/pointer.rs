//! Pointer normalization for the interactive hero surface.
//!
//! The surface owns the listener and hands every pointer-move position to a
//! [`PointerTracker`], which maps it into the `[-1, 1] x [-1, 1]` space the
//! parallax mapper works in. Only the latest sample is kept.

use glam::Vec2;

/// Normalized cursor position; `{0, 0}` is the surface center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<PointerSample> for Vec2 {
    fn from(s: PointerSample) -> Self {
        Vec2::new(s.x, s.y)
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Bounding rectangle of the interactive surface, in the same coordinate
/// space as the pointer positions (CSS pixels on the web, physical pixels
/// natively).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds anchored at the origin, e.g. a native window's inner size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// True when the rectangle cannot be divided by (zero, negative or
    /// non-finite extent).
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
            || !self.left.is_finite()
            || !self.top.is_finite()
    }

    #[inline]
    fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Map an absolute pointer position into the normalized sample space.
///
/// Returns `None` for degenerate bounds. Components are clamped to
/// `[-1, 1]`, so positions reported a fraction of a pixel outside the
/// surface still produce a valid sample.
#[inline]
pub fn normalize(pointer: Vec2, bounds: SurfaceBounds) -> Option<PointerSample> {
    if bounds.is_degenerate() || !pointer.is_finite() {
        return None;
    }
    let rel = (pointer - bounds.origin()) / bounds.size();
    let n = (rel * 2.0 - Vec2::ONE).clamp(Vec2::NEG_ONE, Vec2::ONE);
    Some(n.into())
}

/// Holds the single current pointer sample for one surface.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    current: PointerSample,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current sample with the normalized `pointer` position.
    ///
    /// Degenerate bounds leave the previous sample in place and return it.
    pub fn on_pointer_move(&mut self, pointer: Vec2, bounds: SurfaceBounds) -> PointerSample {
        match normalize(pointer, bounds) {
            Some(sample) => self.current = sample,
            None => log::debug!(
                "[pointer] ignoring move over degenerate surface {}x{}",
                bounds.width,
                bounds.height
            ),
        }
        self.current
    }

    pub fn current(&self) -> PointerSample {
        self.current
    }

    /// Recenter, as if the cursor rested in the middle of the surface.
    pub fn reset(&mut self) {
        self.current = PointerSample::CENTER;
    }
}
