//! Layer composition of the hero stage, back to front.

use crate::parallax::LayerOffset;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Backdrop,
    Documents,
    Dashboard,
    HeroPanel,
    AutomationIcons,
}

impl LayerKind {
    /// Stable name, used for DOM class names and log output.
    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Backdrop => "backdrop",
            LayerKind::Documents => "documents",
            LayerKind::Dashboard => "dashboard",
            LayerKind::HeroPanel => "hero-panel",
            LayerKind::AutomationIcons => "automation-icons",
        }
    }
}

/// Static description of one parallax layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSpec {
    pub kind: LayerKind,
    pub depth: f32,
    /// Whether the layer applies the rotateX/rotateY part of its offset.
    pub tilt: bool,
}

pub const HERO_LAYERS: [LayerSpec; 5] = [
    LayerSpec {
        kind: LayerKind::Backdrop,
        depth: 0.1,
        tilt: false,
    },
    LayerSpec {
        kind: LayerKind::Documents,
        depth: 0.2,
        tilt: false,
    },
    LayerSpec {
        kind: LayerKind::Dashboard,
        depth: 0.3,
        tilt: false,
    },
    LayerSpec {
        kind: LayerKind::HeroPanel,
        depth: 0.4,
        tilt: true,
    },
    LayerSpec {
        kind: LayerKind::AutomationIcons,
        depth: 0.5,
        tilt: false,
    },
];

/// Where an item sits inside its layer and how it deviates from the
/// layer's shared offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Position as a percentage of the stage; `None` leaves it to the
    /// item's stylesheet (full-bleed or centered items).
    pub anchor_pct: Option<Vec2>,
    /// Static pixel nudge added on top of the layer offset.
    pub nudge: Vec2,
    /// Static in-plane rotation (degrees).
    pub rotate_deg: f32,
    /// Centered on the anchor (`translate(-50%, -50%)` on the web).
    pub centered: bool,
}

impl ItemPlacement {
    pub const FILL: Self = Self {
        anchor_pct: None,
        nudge: Vec2::ZERO,
        rotate_deg: 0.0,
        centered: false,
    };

    pub const fn at(left_pct: f32, top_pct: f32) -> Self {
        Self {
            anchor_pct: Some(Vec2::new(left_pct, top_pct)),
            nudge: Vec2::ZERO,
            rotate_deg: 0.0,
            centered: false,
        }
    }

    pub const fn with_nudge(mut self, dx: f32, dy: f32) -> Self {
        self.nudge = Vec2::new(dx, dy);
        self
    }

    pub const fn with_rotation(mut self, deg: f32) -> Self {
        self.rotate_deg = deg;
        self
    }

    pub const fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

/// Nudge for invoice card `i`: cards fan out around the middle one.
#[inline]
pub fn document_nudge(i: usize) -> Vec2 {
    let i = i as f32;
    Vec2::new((i - 1.0) * 8.0, (1.0 - i) * 6.0)
}

/// Nudge for automation icon `i`: alternate sides, every third lifts.
#[inline]
pub fn icon_nudge(i: usize) -> Vec2 {
    let dx = if i % 2 == 0 { 12.0 } else { -12.0 };
    let dy = if i % 3 == 0 { -10.0 } else { 10.0 };
    Vec2::new(dx, dy)
}

/// Final per-item offset: layer offset plus the item's static nudge.
/// Tilt is dropped unless the layer applies it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub offset: LayerOffset,
    pub rotate_deg: f32,
    pub centered: bool,
}

impl ItemTransform {
    pub fn compose(layer: LayerOffset, placement: &ItemPlacement, tilt: bool) -> Self {
        let nudge = LayerOffset::new(placement.nudge.x, placement.nudge.y, 0.0, 0.0);
        let mut offset = layer + nudge;
        if !tilt {
            offset.rx = 0.0;
            offset.ry = 0.0;
        }
        Self {
            offset,
            rotate_deg: placement.rotate_deg,
            centered: placement.centered,
        }
    }
}
