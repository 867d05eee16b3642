//! Depth-driven parallax mapping.
//!
//! A layer's depth selects an amplitude tier; the pointer sample is then
//! scaled by that tier and negated so the scene recedes opposite to the
//! cursor. The tier function is a step function, not a continuous one: tilt
//! jumps from `depth * 2` (below 0.4) to a flat 3 degrees (0.4..0.5) and back
//! down to `depth * 2` from 0.5 upwards.

use crate::constants::*;
use crate::error::HeroError;
use crate::pointer::PointerSample;
use std::ops::Add;

/// How close a layer sits to the viewer, in `[0, 1]`. Zero is static.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LayerDepth(f32);

impl LayerDepth {
    pub const STATIC: Self = Self(0.0);

    pub fn new(depth: f32) -> Result<Self, HeroError> {
        if depth.is_finite() && (0.0..=1.0).contains(&depth) {
            Ok(Self(depth))
        } else {
            Err(HeroError::InvalidDepth(depth))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for LayerDepth {
    type Error = HeroError;

    fn try_from(depth: f32) -> Result<Self, Self::Error> {
        Self::new(depth)
    }
}

/// Translation range (px) and tilt (degrees) for one depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Amplitude {
    pub max_x: f32,
    pub max_y: f32,
    pub tilt: f32,
}

impl Amplitude {
    pub fn for_depth(depth: LayerDepth) -> Self {
        let d = depth.get();
        if d >= NEAR_TIER_MIN_DEPTH {
            Self {
                max_x: NEAR_MAX_X_PX,
                max_y: NEAR_MAX_Y_PX,
                tilt: d * TILT_DEG_PER_DEPTH,
            }
        } else if d >= MID_TIER_MIN_DEPTH {
            Self {
                max_x: MID_MAX_X_PX,
                max_y: MID_MAX_Y_PX,
                tilt: MID_TILT_DEG,
            }
        } else {
            Self {
                max_x: d * FAR_X_PX_PER_DEPTH,
                max_y: d * FAR_Y_PX_PER_DEPTH,
                tilt: d * TILT_DEG_PER_DEPTH,
            }
        }
    }
}

/// Translation in pixels and rotation in degrees for one layer and frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerOffset {
    pub x: f32,
    pub y: f32,
    /// Rotation about the horizontal axis (CSS `rotateX`).
    pub rx: f32,
    /// Rotation about the vertical axis (CSS `rotateY`).
    pub ry: f32,
}

impl LayerOffset {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        rx: 0.0,
        ry: 0.0,
    };

    pub fn new(x: f32, y: f32, rx: f32, ry: f32) -> Self {
        Self { x, y, rx, ry }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.rx.is_finite() && self.ry.is_finite()
    }
}

impl Add for LayerOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            rx: self.rx + rhs.rx,
            ry: self.ry + rhs.ry,
        }
    }
}

/// Target offset for a layer at `depth` while the pointer is at `sample`.
#[inline]
pub fn compute_offset(sample: PointerSample, depth: LayerDepth) -> LayerOffset {
    let a = Amplitude::for_depth(depth);
    LayerOffset {
        x: -sample.x * a.max_x,
        y: -sample.y * a.max_y,
        rx: sample.y * a.tilt,
        ry: -sample.x * a.tilt,
    }
}
