#![allow(clippy::float_cmp)]

use super::*;

fn trail() -> CursorTrail {
    CursorTrail::new(&TrailConfig::default(), 17)
}

#[test]
fn push_records_fresh_point() {
    let mut trail = trail();
    trail.push(3.0, 4.0);
    let p = *trail.points().next().unwrap();
    assert_eq!((p.x, p.y), (3.0, 4.0));
    assert_eq!(p.life, 1.0);
    assert_eq!(p.opacity, 1.0);
    assert!((0.8..2.3).contains(&p.size));
}

#[test]
fn trail_never_exceeds_cap_and_drops_oldest() {
    let mut trail = trail();
    for i in 0..30 {
        trail.push(f64::from(i), 0.0);
        assert!(trail.len() <= 12);
    }
    let xs = trail.points().map(|p| p.x).collect::<Vec<_>>();
    assert_eq!(xs.first(), Some(&18.0));
    assert_eq!(xs.last(), Some(&29.0));
}

#[test]
fn tick_fades_and_shrinks() {
    let mut trail = trail();
    trail.push(0.0, 0.0);
    let size = trail.points().next().unwrap().size;
    trail.tick();
    let p = *trail.points().next().unwrap();
    assert!((p.life - 0.98).abs() < 1e-12);
    assert_eq!(p.opacity, p.life);
    assert!((p.size - size * 0.98).abs() < 1e-12);
}

#[test]
fn points_expire_after_life_runs_out() {
    let mut trail = trail();
    trail.push(0.0, 0.0);
    for _ in 0..49 {
        trail.tick();
    }
    assert_eq!(trail.len(), 1);
    // 50 * 0.02 reaches zero (within rounding) on the 50th or 51st tick.
    trail.tick();
    trail.tick();
    assert!(trail.is_empty());
}

#[test]
fn older_points_expire_first() {
    let mut trail = trail();
    trail.push(1.0, 0.0);
    for _ in 0..25 {
        trail.tick();
    }
    trail.push(2.0, 0.0);
    for _ in 0..26 {
        trail.tick();
    }
    let xs = trail.points().map(|p| p.x).collect::<Vec<_>>();
    assert_eq!(xs, vec![2.0]);
}

#[test]
fn zero_cap_keeps_nothing() {
    let config = TrailConfig { max_points: 0, ..TrailConfig::default() };
    let mut trail = CursorTrail::new(&config, 1);
    trail.push(1.0, 1.0);
    assert!(trail.is_empty());
}

#[test]
fn oversized_cap_does_not_overflow() {
    let config = TrailConfig { max_points: usize::MAX, ..TrailConfig::default() };
    let mut trail = CursorTrail::new(&config, 3);
    trail.push(1.0, 2.0);
    assert_eq!(trail.len(), 1);
}

#[test]
fn point_lives_ceil_of_inverse_decay_ticks() {
    let config = TrailConfig { decay: 0.25, ..TrailConfig::default() };
    let mut trail = CursorTrail::new(&config, 5);
    trail.push(0.0, 0.0);
    for _ in 0..3 {
        trail.tick();
    }
    assert_eq!(trail.len(), 1);
    trail.tick();
    assert!(trail.is_empty());
}
