use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeroError {
    #[error("layer depth must be a finite value in [0, 1], got {0}")]
    InvalidDepth(f32),

    #[error("a parallax stage needs at least one layer")]
    EmptyScene,

    #[error("invalid step limits: max_frame_dt={max_frame_dt}, substep={substep}")]
    InvalidStepLimits { max_frame_dt: f32, substep: f32 },
}
