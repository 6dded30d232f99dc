use super::*;
use approx::assert_abs_diff_eq;

fn splash() -> SplashAnimation {
    SplashAnimation::new(SplashConfig::default(), Vec2::new(600.0, 800.0))
}

#[test]
fn test_next_phase_chain() {
    assert_eq!(next_phase(SplashPhase::Rotate), Some(SplashPhase::Spread));
    assert_eq!(next_phase(SplashPhase::Spread), Some(SplashPhase::Expand));
    assert_eq!(next_phase(SplashPhase::Expand), None);
}

#[test]
fn test_initial_frame_has_six_circles_on_orbit() {
    let s = splash();
    let frame = s.frame();
    assert_eq!(frame.phase, SplashPhase::Rotate);
    assert_eq!(frame.background, Background::Solid([255, 255, 255, 255]));
    assert_eq!(frame.circles.len(), 6);
    let center = Vec2::new(300.0, 400.0);
    for c in &frame.circles {
        assert_abs_diff_eq!(c.center.distance(center), 90.0, epsilon = 1e-3);
        assert_eq!(c.radius, 18.0);
    }
    assert_abs_diff_eq!(frame.circles[0].center.x, 390.0, epsilon = 1e-3);
    assert_abs_diff_eq!(frame.circles[0].center.y, 400.0, epsilon = 1e-3);
}

#[test]
fn test_rotate_runs_three_turns() {
    let mut s = splash();
    s.advance(300.0);
    assert_eq!(s.phase(), SplashPhase::Rotate);
    assert_abs_diff_eq!(s.rotate_angle(), TAU / 2.0, epsilon = 1e-4);

    s.advance(1200.0);
    assert_eq!(s.phase(), SplashPhase::Rotate);

    s.advance(300.0);
    assert_eq!(s.phase(), SplashPhase::Spread);
    assert_abs_diff_eq!(s.orbit_radius(), 90.0, epsilon = 1e-4);
}

#[test]
fn test_spread_overshoots_then_contracts() {
    let mut s = splash();
    s.advance(1800.0);
    assert_eq!(s.phase(), SplashPhase::Spread);

    let mut max_radius = s.orbit_radius();
    for _ in 0..59 {
        s.advance(10.0);
        max_radius = max_radius.max(s.orbit_radius());
    }
    assert_eq!(s.phase(), SplashPhase::Spread);
    assert!(max_radius > 90.0, "Überschwingen erwartet, Maximum {max_radius}");

    s.advance(10.0);
    assert_eq!(s.phase(), SplashPhase::Expand);
    assert_abs_diff_eq!(s.orbit_radius(), 18.0, epsilon = 1e-3);
}

#[test]
fn test_expand_opens_hole_to_half_diagonal() {
    let mut s = splash();
    s.advance(2400.0);
    assert_eq!(s.phase(), SplashPhase::Expand);

    let frame = s.frame();
    assert!(frame.circles.is_empty());
    match frame.background {
        Background::Hole {
            hole_radius,
            radius,
            stroke_width,
            ..
        } => {
            assert_abs_diff_eq!(hole_radius, 18.0, epsilon = 1e-3);
            assert_abs_diff_eq!(stroke_width, 500.0 - 18.0, epsilon = 1e-3);
            assert_abs_diff_eq!(radius, stroke_width / 2.0 + 18.0, epsilon = 1e-3);
        }
        other => panic!("Loch erwartet, erhalten: {other:?}"),
    }

    s.advance(600.0);
    assert!(s.is_finished());
    assert_abs_diff_eq!(s.hole_radius(), 500.0, epsilon = 1e-3);

    // Nach dem Ende keine Änderung mehr
    s.advance(1000.0);
    assert_abs_diff_eq!(s.hole_radius(), 500.0, epsilon = 1e-3);
}

#[test]
fn test_large_step_skips_through_all_phases() {
    let mut s = splash();
    s.advance(100_000.0);
    assert!(s.is_finished());
    assert_eq!(s.phase(), SplashPhase::Expand);
}

#[test]
fn test_empty_colors_draw_no_circles() {
    let config = SplashConfig {
        colors: Vec::new(),
        ..SplashConfig::default()
    };
    let s = SplashAnimation::new(config, Vec2::new(100.0, 100.0));
    assert!(s.frame().circles.is_empty());
}
