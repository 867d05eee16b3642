//! Spring smoothing for layer offsets.
//!
//! Each channel is a damped harmonic oscillator pulled toward a moving
//! target: `a = (-k * (x - target) - c * v) / m`. Frames are integrated with
//! fixed sub-steps (semi-implicit Euler) so stiff near layers stay stable at
//! low frame rates.

use crate::constants::*;
use crate::error::HeroError;
use crate::parallax::{LayerDepth, LayerOffset};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Closer layers get a stiffer, faster-settling spring.
    pub fn for_depth(depth: LayerDepth) -> Self {
        let d = depth.get();
        Self {
            stiffness: SPRING_STIFFNESS_BASE + d * SPRING_STIFFNESS_SPAN,
            damping: SPRING_DAMPING_BASE + d * SPRING_DAMPING_SPAN,
            mass: SPRING_MASS,
        }
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`; 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// How offsets follow their targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmoothingMode {
    #[default]
    Spring,
    /// Jump straight to the target every frame (no animation).
    Snap,
}

/// Integrator limits for one stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepLimits {
    pub max_frame_dt: f32,
    pub substep: f32,
}

impl Default for StepLimits {
    fn default() -> Self {
        Self {
            max_frame_dt: MAX_FRAME_DT_SEC,
            substep: SPRING_SUBSTEP_SEC,
        }
    }
}

impl StepLimits {
    pub fn validate(self) -> Result<Self, HeroError> {
        let frame_ok = self.max_frame_dt.is_finite() && self.max_frame_dt >= 0.0;
        let substep_ok = self.substep.is_finite() && self.substep > 0.0;
        if frame_ok && substep_ok {
            Ok(self)
        } else {
            Err(HeroError::InvalidStepLimits {
                max_frame_dt: self.max_frame_dt,
                substep: self.substep,
            })
        }
    }

    /// Replace unusable fields with the defaults.
    fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            max_frame_dt: if self.max_frame_dt.is_finite() && self.max_frame_dt >= 0.0 {
                self.max_frame_dt
            } else {
                defaults.max_frame_dt
            },
            substep: if self.substep.is_finite() && self.substep > 0.0 {
                self.substep
            } else {
                defaults.substep
            },
        }
    }
}

/// One scalar spring: current value and velocity, starting at rest at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringChannel {
    pub value: f32,
    pub velocity: f32,
}

impl SpringChannel {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Advance by `dt` seconds toward `target`.
    pub fn step(&mut self, target: f32, config: &SpringConfig, dt: f32, limits: StepLimits) {
        if !target.is_finite() {
            return;
        }
        let limits = limits.sanitized();
        let frame = if dt.is_finite() {
            dt.max(0.0).min(limits.max_frame_dt)
        } else {
            0.0
        };
        if frame <= 0.0 {
            return;
        }
        // Equal sub-steps no longer than `limits.substep`, capped in count.
        let steps = ((frame / limits.substep).ceil() as u32).clamp(1, MAX_SUBSTEPS_PER_FRAME);
        let h = frame / steps as f32;
        for _ in 0..steps {
            let displacement = self.value - target;
            let accel =
                (-config.stiffness * displacement - config.damping * self.velocity) / config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if !(self.value.is_finite() && self.velocity.is_finite()) {
            log::warn!("[spring] integration diverged; snapping to target");
            self.snap(target);
        } else if self.is_at_rest(target) {
            self.snap(target);
        }
    }

    #[inline]
    pub fn snap(&mut self, target: f32) {
        self.value = target;
        self.velocity = 0.0;
    }

    #[inline]
    pub fn is_at_rest(&self, target: f32) -> bool {
        (self.value - target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

/// Four independent channels (x, y, rx, ry) sharing one configuration.
#[derive(Clone, Debug)]
pub struct LayerSpring {
    pub config: SpringConfig,
    pub x: SpringChannel,
    pub y: SpringChannel,
    pub rx: SpringChannel,
    pub ry: SpringChannel,
}

impl LayerSpring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            x: SpringChannel::default(),
            y: SpringChannel::default(),
            rx: SpringChannel::default(),
            ry: SpringChannel::default(),
        }
    }

    pub fn for_depth(depth: LayerDepth) -> Self {
        Self::new(SpringConfig::for_depth(depth))
    }

    pub fn step(
        &mut self,
        target: LayerOffset,
        dt: f32,
        mode: SmoothingMode,
        limits: StepLimits,
    ) -> LayerOffset {
        match mode {
            SmoothingMode::Spring => {
                let cfg = self.config;
                self.x.step(target.x, &cfg, dt, limits);
                self.y.step(target.y, &cfg, dt, limits);
                self.rx.step(target.rx, &cfg, dt, limits);
                self.ry.step(target.ry, &cfg, dt, limits);
            }
            SmoothingMode::Snap => self.snap(target),
        }
        self.current()
    }

    pub fn snap(&mut self, target: LayerOffset) {
        self.x.snap(target.x);
        self.y.snap(target.y);
        self.rx.snap(target.rx);
        self.ry.snap(target.ry);
    }

    pub fn current(&self) -> LayerOffset {
        LayerOffset::new(self.x.value, self.y.value, self.rx.value, self.ry.value)
    }

    pub fn is_at_rest(&self, target: LayerOffset) -> bool {
        self.x.is_at_rest(target.x)
            && self.y.is_at_rest(target.y)
            && self.rx.is_at_rest(target.rx)
            && self.ry.is_at_rest(target.ry)
    }
}
