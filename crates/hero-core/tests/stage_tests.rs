// Host-side tests for the per-instance parallax stage.

use glam::Vec2;
use hero_core::{
    compute_offset, HeroError, LayerDepth, LayerKind, LayerOffset, LayerSpec, ParallaxStage,
    PointerSample, SmoothingMode, StageParams, StepLimits, SurfaceBounds, HERO_LAYERS,
};
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn surface() -> SurfaceBounds {
    SurfaceBounds::new(0.0, 0.0, 1000.0, 500.0)
}

fn make_stage() -> ParallaxStage {
    ParallaxStage::hero(StageParams::default()).unwrap()
}

#[test]
fn hero_layers_have_valid_increasing_depths() {
    let mut prev = -1.0;
    for spec in HERO_LAYERS.iter() {
        assert!(LayerDepth::new(spec.depth).is_ok(), "{:?}", spec);
        assert!(spec.depth > prev, "layers must be ordered back to front");
        prev = spec.depth;
    }
    let tilted: Vec<_> = HERO_LAYERS.iter().filter(|l| l.tilt).collect();
    assert_eq!(tilted.len(), 1);
    assert_eq!(tilted[0].kind, LayerKind::HeroPanel);
}

#[test]
fn empty_scene_is_rejected() {
    assert_eq!(
        ParallaxStage::new(&[], StageParams::default()).err(),
        Some(HeroError::EmptyScene)
    );
}

#[test]
fn invalid_depth_is_rejected() {
    let specs = [LayerSpec {
        kind: LayerKind::Backdrop,
        depth: 1.5,
        tilt: false,
    }];
    assert_eq!(
        ParallaxStage::new(&specs, StageParams::default()).err(),
        Some(HeroError::InvalidDepth(1.5))
    );
}

#[test]
fn unusable_step_limits_are_rejected() {
    for limits in [
        StepLimits {
            max_frame_dt: -1.0,
            ..StepLimits::default()
        },
        StepLimits {
            max_frame_dt: f32::NAN,
            ..StepLimits::default()
        },
        StepLimits {
            substep: 0.0,
            ..StepLimits::default()
        },
    ] {
        let params = StageParams {
            limits,
            ..StageParams::default()
        };
        assert!(matches!(
            ParallaxStage::new(&HERO_LAYERS, params),
            Err(HeroError::InvalidStepLimits { .. })
        ));
    }
}

#[test]
fn offsets_stay_finite_under_extreme_frames() {
    let mut stage = make_stage();
    stage.pointer_moved(Vec2::new(1000.0, 0.0), surface());
    for dt in [Duration::ZERO, Duration::from_secs(3600), FRAME] {
        assert!(stage.tick(dt));
        for layer in stage.layers() {
            assert!(layer.current().is_finite(), "{:?}", layer.spec.kind);
        }
    }
    assert_eq!(stage.params(), StageParams::default());
}

#[test]
fn idle_stage_stays_at_rest() {
    let mut stage = make_stage();
    for _ in 0..30 {
        assert!(stage.tick(FRAME));
    }
    for layer in stage.layers() {
        assert_eq!(layer.current(), LayerOffset::ZERO);
    }
    assert!(stage.is_at_rest());
}

#[test]
fn layers_chase_the_pointer_and_settle() {
    let mut stage = make_stage();
    let sample = stage
        .pointer_moved(Vec2::new(1000.0, 0.0), surface())
        .unwrap();
    assert_eq!(sample, PointerSample::new(1.0, -1.0));

    stage.tick(FRAME);
    let panel = stage.offset(LayerKind::HeroPanel).unwrap();
    let target = stage.target(LayerKind::HeroPanel).unwrap();
    assert!(panel.x < 0.0 && panel.x > target.x, "first frame must lag the target");

    for _ in 0..600 {
        stage.tick(FRAME);
    }
    assert!(stage.is_at_rest());
    for layer in stage.layers() {
        let expected = compute_offset(sample, layer.depth);
        assert_eq!(layer.current(), expected, "{:?}", layer.spec.kind);
    }
}

#[test]
fn targets_follow_the_latest_sample_only() {
    let mut stage = make_stage();
    stage.pointer_moved(Vec2::new(0.0, 0.0), surface());
    stage.pointer_moved(Vec2::new(750.0, 375.0), surface());
    let target = stage.target(LayerKind::AutomationIcons).unwrap();
    assert_eq!(target, LayerOffset::new(-20.0, -20.0, 0.5, -0.5));
}

#[test]
fn closer_layers_move_further() {
    let mut stage = make_stage();
    stage.pointer_moved(Vec2::new(900.0, 450.0), surface());
    for _ in 0..600 {
        stage.tick(FRAME);
    }
    let xs: Vec<f32> = stage.layers().iter().map(|l| l.current().x.abs()).collect();
    for pair in xs.windows(2) {
        assert!(pair[1] >= pair[0], "{:?}", xs);
    }
}

#[test]
fn degenerate_surface_keeps_previous_sample() {
    let mut stage = make_stage();
    let first = stage
        .pointer_moved(Vec2::new(250.0, 125.0), surface())
        .unwrap();
    let second = stage
        .pointer_moved(Vec2::new(10.0, 10.0), SurfaceBounds::from_size(0.0, 500.0))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn snap_mode_reaches_targets_in_one_tick() {
    let mut stage = ParallaxStage::hero(StageParams {
        smoothing: SmoothingMode::Snap,
        ..StageParams::default()
    })
    .unwrap();
    stage.pointer_moved(Vec2::new(0.0, 500.0), surface());
    stage.tick(FRAME);
    assert!(stage.is_at_rest());
    assert_eq!(
        stage.offset(LayerKind::Documents),
        stage.target(LayerKind::Documents)
    );
}

#[test]
fn unmounted_stage_ignores_pointer_and_ticks() {
    let mut stage = make_stage();
    stage.pointer_moved(Vec2::new(1000.0, 500.0), surface());
    stage.tick(FRAME);
    let frozen: Vec<LayerOffset> = stage.layers().iter().map(|l| l.current()).collect();
    let pointer = stage.pointer();

    stage.unmount();
    assert!(!stage.is_mounted());
    assert!(stage.pointer_moved(Vec2::new(0.0, 0.0), surface()).is_none());
    stage.pointer_reset();
    for _ in 0..10 {
        assert!(!stage.tick(FRAME));
    }

    assert_eq!(stage.pointer(), pointer);
    let after: Vec<LayerOffset> = stage.layers().iter().map(|l| l.current()).collect();
    assert_eq!(after, frozen);

    // Unmount is idempotent.
    stage.unmount();
    assert!(!stage.is_mounted());
}

#[test]
fn instances_are_independent() {
    let mut a = make_stage();
    let mut b = make_stage();
    a.pointer_moved(Vec2::new(1000.0, 500.0), surface());
    a.tick(FRAME);
    b.tick(FRAME);
    assert_eq!(b.pointer(), PointerSample::CENTER);
    assert_eq!(b.offset(LayerKind::HeroPanel), Some(LayerOffset::ZERO));
    assert_ne!(a.offset(LayerKind::HeroPanel), Some(LayerOffset::ZERO));

    a.unmount();
    assert!(b.tick(FRAME));
}

#[test]
fn repeated_mount_cycles_start_fresh() {
    for _ in 0..5 {
        let mut stage = make_stage();
        assert_eq!(stage.pointer(), PointerSample::CENTER);
        stage.pointer_moved(Vec2::new(100.0, 100.0), surface());
        stage.tick(FRAME);
        stage.unmount();
        assert!(!stage.tick(FRAME));
    }
}
