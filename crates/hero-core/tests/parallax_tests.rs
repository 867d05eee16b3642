// Host-side tests for the depth -> offset mapping.

use hero_core::{compute_offset, Amplitude, LayerDepth, LayerOffset, PointerSample};

const EPS: f32 = 1e-5;

fn depth(d: f32) -> LayerDepth {
    LayerDepth::new(d).unwrap()
}

fn assert_offset_close(actual: LayerOffset, expected: LayerOffset) {
    assert!(
        (actual.x - expected.x).abs() < EPS
            && (actual.y - expected.y).abs() < EPS
            && (actual.rx - expected.rx).abs() < EPS
            && (actual.ry - expected.ry).abs() < EPS,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn far_tier_example() {
    // depth 0.2 -> maxX=12, maxY=8, tilt=0.4
    let out = compute_offset(PointerSample::new(0.5, -0.5), depth(0.2));
    assert_offset_close(out, LayerOffset::new(-6.0, 4.0, -0.2, -0.2));
}

#[test]
fn near_tier_example() {
    // depth 0.5 -> maxX=40, maxY=40, tilt=1
    let out = compute_offset(PointerSample::new(1.0, 1.0), depth(0.5));
    assert_offset_close(out, LayerOffset::new(-40.0, -40.0, 1.0, -1.0));
}

#[test]
fn mid_tier_uses_fixed_ranges() {
    let a = Amplitude::for_depth(depth(0.4));
    assert_eq!(a.max_x, 30.0);
    assert_eq!(a.max_y, 20.0);
    assert_eq!(a.tilt, 3.0);

    let a = Amplitude::for_depth(depth(0.45));
    assert_eq!((a.max_x, a.max_y, a.tilt), (30.0, 20.0, 3.0));
}

#[test]
fn tier_thresholds_are_inclusive() {
    let just_below_mid = Amplitude::for_depth(depth(0.399));
    assert!((just_below_mid.max_x - 0.399 * 60.0).abs() < EPS);

    let near = Amplitude::for_depth(depth(0.5));
    assert_eq!(near.max_x, 40.0);
    assert!((near.tilt - 1.0).abs() < EPS);
}

#[test]
fn tilt_is_discontinuous_between_mid_and_near_tiers() {
    // The mid tier's flat 3 degrees exceeds the near tier's depth * 2 just
    // above 0.5; this step is intentional and preserved.
    let mid = Amplitude::for_depth(depth(0.49));
    let near = Amplitude::for_depth(depth(0.5));
    assert!(mid.tilt > near.tilt);
    let far = Amplitude::for_depth(depth(0.39));
    assert!(mid.tilt > far.tilt);
}

#[test]
fn center_sample_yields_zero_offset_at_any_depth() {
    for i in 0..=20 {
        let d = depth(i as f32 / 20.0);
        let out = compute_offset(PointerSample::CENTER, d);
        assert_eq!(out, LayerOffset::ZERO, "depth {:?}", d);
    }
}

#[test]
fn horizontal_offset_flips_with_cursor_side() {
    for i in 0..=20 {
        let d = depth(i as f32 / 20.0);
        for &(sx, sy) in &[(0.3, 0.7), (1.0, -1.0), (-0.25, 0.1), (0.9, 0.0)] {
            let right = compute_offset(PointerSample::new(sx, sy), d);
            let left = compute_offset(PointerSample::new(-sx, sy), d);
            assert_eq!(left.x, -right.x);
            assert_eq!(left.ry, -right.ry);
            assert_eq!(left.y, right.y);
            assert_eq!(left.rx, right.rx);
        }
    }
}

#[test]
fn offsets_oppose_the_cursor() {
    let out = compute_offset(PointerSample::new(0.8, 0.6), depth(0.3));
    assert!(out.x < 0.0, "layer should move left when cursor is right");
    assert!(out.y < 0.0, "layer should move up when cursor is low");
}

#[test]
fn amplitude_is_non_decreasing_in_depth() {
    let sample = PointerSample::new(-0.7, 0.9);
    let mut prev = compute_offset(sample, depth(0.0));
    for i in 1..=100 {
        let out = compute_offset(sample, depth(i as f32 / 100.0));
        assert!(
            out.x.abs() >= prev.x.abs() && out.y.abs() >= prev.y.abs(),
            "amplitude decreased at depth {}: {:?} -> {:?}",
            i as f32 / 100.0,
            prev,
            out
        );
        prev = out;
    }
}

#[test]
fn mapping_is_deterministic() {
    let s = PointerSample::new(0.123, -0.987);
    let d = depth(0.37);
    let a = compute_offset(s, d);
    let b = compute_offset(s, d);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.rx.to_bits(), b.rx.to_bits());
    assert_eq!(a.ry.to_bits(), b.ry.to_bits());
}

#[test]
fn static_depth_does_not_move() {
    let out = compute_offset(PointerSample::new(1.0, -1.0), LayerDepth::STATIC);
    assert_eq!(out.x.abs(), 0.0);
    assert_eq!(out.y.abs(), 0.0);
    assert_eq!(out.rx.abs(), 0.0);
    assert_eq!(out.ry.abs(), 0.0);
}

#[test]
fn depth_outside_unit_range_is_rejected() {
    assert!(LayerDepth::new(-0.01).is_err());
    assert!(LayerDepth::new(1.01).is_err());
    assert!(LayerDepth::new(f32::NAN).is_err());
    assert!(LayerDepth::new(f32::INFINITY).is_err());
    assert!(LayerDepth::new(0.0).is_ok());
    assert!(LayerDepth::new(1.0).is_ok());
    assert!(LayerDepth::try_from(0.5).is_ok());
}
