/// Parallax and smoothing tuning constants.
///
/// These express the intended motion (amplitude tiers, spring coefficients,
/// integrator limits) and keep magic numbers out of the mapping code.

// Depth tier thresholds (inclusive lower bounds)
pub const NEAR_TIER_MIN_DEPTH: f32 = 0.5;
pub const MID_TIER_MIN_DEPTH: f32 = 0.4;

// Near tier: fixed translation range, tilt scales with depth
pub const NEAR_MAX_X_PX: f32 = 40.0;
pub const NEAR_MAX_Y_PX: f32 = 40.0;

// Mid tier: fixed translation range and fixed tilt
pub const MID_MAX_X_PX: f32 = 30.0;
pub const MID_MAX_Y_PX: f32 = 20.0;
pub const MID_TILT_DEG: f32 = 3.0;

// Far tier: everything scales linearly with depth
pub const FAR_X_PX_PER_DEPTH: f32 = 60.0;
pub const FAR_Y_PX_PER_DEPTH: f32 = 40.0;

// Tilt per unit depth, shared by near and far tiers (degrees)
pub const TILT_DEG_PER_DEPTH: f32 = 2.0;

// Spring coefficients derived from depth: base + depth * span
pub const SPRING_STIFFNESS_BASE: f32 = 100.0;
pub const SPRING_STIFFNESS_SPAN: f32 = 300.0;
pub const SPRING_DAMPING_BASE: f32 = 18.0;
pub const SPRING_DAMPING_SPAN: f32 = 10.0;
pub const SPRING_MASS: f32 = 1.0;

// Integrator limits (seconds)
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // a backgrounded tab resumes with one bounded step
// Upper bound on integration sub-steps per frame, whatever the limits say
pub const MAX_SUBSTEPS_PER_FRAME: u32 = 240;

// A channel closer than this to its target (and slower than REST_SPEED) snaps to rest
pub const REST_DELTA: f32 = 0.01;
pub const REST_SPEED: f32 = 0.01;
