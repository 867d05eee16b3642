//! Per-instance parallax state: one pointer tracker plus one spring set per
//! layer. Front-ends own a `ParallaxStage` per mounted hero, feed it pointer
//! moves and frame ticks, and call [`ParallaxStage::unmount`] on teardown.

use crate::error::HeroError;
use crate::parallax::{compute_offset, LayerDepth, LayerOffset};
use crate::pointer::{PointerSample, PointerTracker, SurfaceBounds};
use crate::scene::{LayerKind, LayerSpec, HERO_LAYERS};
use crate::spring::{LayerSpring, SmoothingMode, StepLimits};
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageParams {
    pub smoothing: SmoothingMode,
    pub limits: StepLimits,
}

#[derive(Clone, Debug)]
pub struct LayerAnimator {
    pub spec: LayerSpec,
    pub depth: LayerDepth,
    spring: LayerSpring,
}

impl LayerAnimator {
    fn new(spec: LayerSpec) -> Result<Self, HeroError> {
        let depth = LayerDepth::new(spec.depth)?;
        Ok(Self {
            spec,
            depth,
            spring: LayerSpring::for_depth(depth),
        })
    }

    /// Smoothed offset as of the last tick.
    pub fn current(&self) -> LayerOffset {
        self.spring.current()
    }
}

pub struct ParallaxStage {
    tracker: PointerTracker,
    layers: SmallVec<[LayerAnimator; 8]>,
    params: StageParams,
    mounted: bool,
}

impl ParallaxStage {
    pub fn new(specs: &[LayerSpec], params: StageParams) -> Result<Self, HeroError> {
        if specs.is_empty() {
            return Err(HeroError::EmptyScene);
        }
        params.limits.validate()?;
        let layers = specs
            .iter()
            .copied()
            .map(LayerAnimator::new)
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Self {
            tracker: PointerTracker::new(),
            layers,
            params,
            mounted: true,
        })
    }

    /// The landing page's five layers.
    pub fn hero(params: StageParams) -> Result<Self, HeroError> {
        Self::new(&HERO_LAYERS, params)
    }

    pub fn params(&self) -> StageParams {
        self.params
    }

    pub fn set_smoothing(&mut self, mode: SmoothingMode) {
        self.params.smoothing = mode;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Record a pointer move over the surface. `None` once unmounted.
    pub fn pointer_moved(&mut self, pointer: Vec2, bounds: SurfaceBounds) -> Option<PointerSample> {
        if !self.mounted {
            return None;
        }
        Some(self.tracker.on_pointer_move(pointer, bounds))
    }

    /// Recenter the pointer (e.g. the cursor left a native window).
    pub fn pointer_reset(&mut self) {
        if self.mounted {
            self.tracker.reset();
        }
    }

    pub fn pointer(&self) -> PointerSample {
        self.tracker.current()
    }

    /// Advance every layer's springs toward the current targets.
    ///
    /// Runs whether or not the pointer moved since the last frame, so
    /// layers keep converging after motion stops. Returns `false` without
    /// touching any state once unmounted.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        let sample = self.tracker.current();
        let dt_sec = dt.as_secs_f32();
        for layer in self.layers.iter_mut() {
            let target = compute_offset(sample, layer.depth);
            layer
                .spring
                .step(target, dt_sec, self.params.smoothing, self.params.limits);
        }
        true
    }

    pub fn layers(&self) -> &[LayerAnimator] {
        &self.layers
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&LayerAnimator> {
        self.layers.iter().find(|l| l.spec.kind == kind)
    }

    /// Smoothed offset of `kind` as of the last tick.
    pub fn offset(&self, kind: LayerKind) -> Option<LayerOffset> {
        self.layer(kind).map(LayerAnimator::current)
    }

    /// Raw (unsmoothed) target of `kind` for the current pointer sample.
    pub fn target(&self, kind: LayerKind) -> Option<LayerOffset> {
        let sample = self.tracker.current();
        self.layer(kind).map(|l| compute_offset(sample, l.depth))
    }

    /// True when every layer has settled on its target.
    pub fn is_at_rest(&self) -> bool {
        let sample = self.tracker.current();
        self.layers
            .iter()
            .all(|l| l.spring.is_at_rest(compute_offset(sample, l.depth)))
    }

    /// Terminal teardown: later pointer moves and ticks are ignored.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            log::debug!("[stage] unmounted ({} layers)", self.layers.len());
        }
    }
}
