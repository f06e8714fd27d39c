#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn seed_creates_requested_count_inside_bounds() {
    let mut field = StarField::new(11);
    field.seed(640.0, 480.0, 150);
    assert_eq!(field.stars().len(), 150);
    for s in field.stars() {
        assert!((0.0..640.0).contains(&s.x));
        assert!((0.0..480.0).contains(&s.y));
        assert!((0.5..2.5).contains(&s.size));
        assert!((0.2..1.0).contains(&s.opacity));
        assert!((0.01..0.03).contains(&s.twinkle_speed));
        assert!((0.1..0.6).contains(&s.move_speed));
        assert!((0.0..TAU).contains(&s.direction));
    }
}

#[test]
fn reseeding_replaces_stars() {
    let mut field = StarField::new(11);
    field.seed(100.0, 100.0, 10);
    field.seed(100.0, 100.0, 3);
    assert_eq!(field.stars().len(), 3);
}

#[test]
fn stars_stay_in_bounds_while_ticking() {
    let mut field = StarField::new(2);
    field.seed(200.0, 120.0, 60);
    for frame in 0..2_000 {
        field.tick(f64::from(frame) * 16.0);
        for s in field.stars() {
            assert!(s.x >= 0.0 && s.x <= 200.0, "x {}", s.x);
            assert!(s.y >= 0.0 && s.y <= 120.0, "y {}", s.y);
            assert!((STAR_OPACITY_MIN..=STAR_OPACITY_MAX).contains(&s.opacity));
        }
    }
}

#[test]
fn tick_drifts_along_heading() {
    let mut field = StarField::new(0);
    field.seed(1000.0, 1000.0, 1);
    let before = field.stars()[0];
    field.tick(0.0);
    let after = field.stars()[0];
    let wrapped = [after.x, after.y].iter().any(|v| *v == 0.0 || *v == 1000.0);
    let moved = (after.x - before.x).hypot(after.y - before.y);
    assert!(wrapped || (moved - before.move_speed).abs() < 1e-9);
}

#[test]
fn tick_at_time_zero_keeps_opacity() {
    let mut field = StarField::new(4);
    field.seed(300.0, 300.0, 20);
    let before = field.stars().iter().map(|s| s.opacity).collect::<Vec<_>>();
    field.tick(0.0);
    let after = field.stars().iter().map(|s| s.opacity).collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[test]
fn resize_keeps_stars_and_wraps_them_into_new_bounds() {
    let mut field = StarField::new(8);
    field.seed(800.0, 800.0, 40);
    field.resize(100.0, 100.0);
    assert_eq!(field.size(), (100.0, 100.0));
    assert_eq!(field.stars().len(), 40);
    // One tick wraps anything beyond the new right/bottom edge back to 0.
    field.tick(0.0);
    for s in field.stars() {
        assert!(s.x >= 0.0 && s.x <= 100.0);
        assert!(s.y >= 0.0 && s.y <= 100.0);
    }
}

#[test]
fn empty_field_ticks_without_effect() {
    let mut field = StarField::new(0);
    field.tick(123.0);
    assert!(field.stars().is_empty());
}
