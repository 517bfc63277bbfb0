//! Shot Sequencer Tests
//!
//! Tests for:
//! - Straight drive and boast waypoint construction
//! - Forehand / backhand mirroring
//! - Chain durations
//! - Cancel-and-restart of overlapping shots
//! - No-op without a handedness selection

use glam::Vec3;

use squash_court::animation::{AnimatedPositions, AnimationClock, Easing, TrajectoryChain};
use squash_court::court::CourtDimensions;
use squash_court::shot::{BALL_RADIUS, Handedness, ShotSequencer, ShotStyle, plan_shot};

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn drive_to(clock: &mut AnimationClock, positions: &mut AnimatedPositions, until_ms: f64) {
    let step = 1000.0 / 60.0;
    let mut t = clock.now_ms();
    while t < until_ms {
        t = (t + step).min(until_ms);
        clock.tick(t, positions);
    }
}

// ============================================================================
// Waypoint construction
// ============================================================================

#[test]
fn forehand_straight_matches_reference_points() {
    let court = CourtDimensions::regulation();
    let plan = plan_shot(Handedness::Forehand, ShotStyle::Straight, &court, BALL_RADIUS);
    assert_eq!(plan.len(), 3);

    assert!(vec3_approx(plan[0].target, Vec3::new(2.4, 1.2, 1.875)));
    assert!(plan[0].is_teleport());

    assert!(vec3_approx(plan[1].target, Vec3::new(2.4, 1.5, -4.875 + 0.03)));
    assert_eq!(plan[1].duration_ms, 1000.0);
    assert_eq!(plan[1].delay_ms, 500.0);
    assert_eq!(plan[1].easing, Easing::QuadraticInOut);

    assert!(vec3_approx(plan[2].target, Vec3::new(3.17, 0.03, 4.845)));
    assert_eq!(plan[2].duration_ms, 1000.0);
    assert_eq!(plan[2].delay_ms, 0.0);
}

#[test]
fn forehand_boast_waypoints() {
    let court = CourtDimensions::regulation();
    let plan = plan_shot(Handedness::Forehand, ShotStyle::Boast, &court, BALL_RADIUS);
    assert_eq!(plan.len(), 4);

    assert!(vec3_approx(plan[0].target, Vec3::new(2.4, 0.5, 3.875)));
    // Near side wall
    assert!(vec3_approx(plan[1].target, Vec3::new(3.17, 1.0, 0.875)));
    assert_eq!(plan[1].delay_ms, 500.0);
    // Far side of the front wall
    assert!(vec3_approx(plan[2].target, Vec3::new(-2.4, 0.8, -4.845)));
    assert_eq!(plan[2].delay_ms, 0.0);
    assert!(vec3_approx(plan[3].target, Vec3::new(-3.17, 0.03, -3.875)));
    assert_eq!(plan[3].duration_ms, 500.0);
}

#[test]
fn backhand_mirrors_forehand() {
    let court = CourtDimensions::regulation();
    for style in [ShotStyle::Straight, ShotStyle::Boast] {
        let fore = plan_shot(Handedness::Forehand, style, &court, BALL_RADIUS);
        let back = plan_shot(Handedness::Backhand, style, &court, BALL_RADIUS);
        assert_eq!(fore.len(), back.len());
        for (f, b) in fore.iter().zip(&back) {
            assert_eq!(f.target.x, -b.target.x);
            assert_eq!(f.target.y, b.target.y);
            assert_eq!(f.target.z, b.target.z);
            assert_eq!(f.duration_ms, b.duration_ms);
            assert_eq!(f.delay_ms, b.delay_ms);
        }
    }
}

#[test]
fn first_waypoint_is_always_a_teleport() {
    let court = CourtDimensions::regulation();
    for handedness in [Handedness::Forehand, Handedness::Backhand] {
        for style in [ShotStyle::Straight, ShotStyle::Boast] {
            let plan = plan_shot(handedness, style, &court, BALL_RADIUS);
            assert!(plan[0].is_teleport());
            assert!(plan[1..].iter().all(|w| !w.is_teleport()));
        }
    }
}

#[test]
fn shot_durations() {
    let court = CourtDimensions::regulation();
    let total = |style| {
        TrajectoryChain::new(
            squash_court::AnimationTarget::Ball,
            plan_shot(Handedness::Forehand, style, &court, BALL_RADIUS),
        )
        .total_duration_ms()
    };
    assert_eq!(total(ShotStyle::Straight), 2500.0);
    assert_eq!(total(ShotStyle::Boast), 3000.0);
}

#[test]
fn waypoints_follow_court_dimensions() {
    let court = CourtDimensions {
        width: 8.0,
        length: 12.0,
        ..CourtDimensions::regulation()
    };
    let plan = plan_shot(Handedness::Backhand, ShotStyle::Straight, &court, 0.05);
    assert!(vec3_approx(plan[0].target, Vec3::new(-3.2, 1.2, 3.0)));
    assert!(vec3_approx(plan[2].target, Vec3::new(-3.95, 0.05, 5.95)));
}

// ============================================================================
// ShotSequencer
// ============================================================================

#[test]
fn straight_drive_ends_in_back_corner() {
    let court = CourtDimensions::regulation();
    let mut clock = AnimationClock::new();
    let mut positions = AnimatedPositions::default();
    let mut shots = ShotSequencer::default();

    let handle = shots
        .start_shot(Some(Handedness::Forehand), ShotStyle::Straight, &court, &mut clock)
        .expect("shot started");
    clock.tick(0.0, &mut positions);

    drive_to(&mut clock, &mut positions, 1.0);
    assert!(vec3_approx(positions.ball, Vec3::new(2.4, 1.2, 1.875)));

    drive_to(&mut clock, &mut positions, 2499.0);
    assert!(clock.is_active(handle));

    drive_to(&mut clock, &mut positions, 2500.0);
    assert!(!clock.is_active(handle));
    assert!(shots.active(&clock).is_none());
    assert!(vec3_approx(positions.ball, Vec3::new(3.17, 0.03, 4.845)));
}

#[test]
fn boast_ends_near_opposite_front_corner() {
    let court = CourtDimensions::regulation();
    let mut clock = AnimationClock::new();
    let mut positions = AnimatedPositions::default();
    let mut shots = ShotSequencer::default();

    shots.start_shot(Some(Handedness::Backhand), ShotStyle::Boast, &court, &mut clock);
    clock.tick(0.0, &mut positions);
    drive_to(&mut clock, &mut positions, 3000.0);
    assert!(vec3_approx(positions.ball, Vec3::new(3.17, 0.03, -3.875)));
    assert_eq!(clock.active_count(), 0);
}

#[test]
fn missing_handedness_is_a_no_op() {
    let court = CourtDimensions::regulation();
    let mut clock = AnimationClock::new();
    let mut positions = AnimatedPositions::default();
    let mut shots = ShotSequencer::default();

    assert!(shots.start_shot(None, ShotStyle::Boast, &court, &mut clock).is_none());
    assert_eq!(clock.active_count(), 0);
    drive_to(&mut clock, &mut positions, 1000.0);
    assert_eq!(positions.ball, Vec3::ZERO);
}

#[test]
fn missing_handedness_leaves_running_shot_alone() {
    let court = CourtDimensions::regulation();
    let mut clock = AnimationClock::new();
    let mut shots = ShotSequencer::default();

    let running = shots
        .start_shot(Some(Handedness::Forehand), ShotStyle::Straight, &court, &mut clock)
        .expect("shot started");
    shots.start_shot(None, ShotStyle::Boast, &court, &mut clock);
    assert_eq!(shots.active(&clock), Some(running));
}

#[test]
fn new_shot_cancels_the_previous_chain() {
    let court = CourtDimensions::regulation();
    let mut clock = AnimationClock::new();
    let mut positions = AnimatedPositions::default();
    let mut shots = ShotSequencer::default();

    let boast = shots
        .start_shot(Some(Handedness::Backhand), ShotStyle::Boast, &court, &mut clock)
        .expect("boast started");
    drive_to(&mut clock, &mut positions, 800.0);

    let drive = shots
        .start_shot(Some(Handedness::Forehand), ShotStyle::Straight, &court, &mut clock)
        .expect("drive started");
    assert!(!clock.is_active(boast));
    assert_eq!(clock.active_count(), 1);

    // The drive starts on the next frame and alone moves the ball from then on
    drive_to(&mut clock, &mut positions, 801.0);
    assert!(vec3_approx(positions.ball, Vec3::new(2.4, 1.2, 1.875)));

    drive_to(&mut clock, &mut positions, 801.0 + 2499.0);
    assert!(clock.is_active(drive));
    drive_to(&mut clock, &mut positions, 801.0 + 2500.0);
    assert!(!clock.is_active(drive));
    assert!(vec3_approx(positions.ball, Vec3::new(3.17, 0.03, 4.845)));

    // Nothing left to move the ball afterwards
    drive_to(&mut clock, &mut positions, 10_000.0);
    assert!(vec3_approx(positions.ball, Vec3::new(3.17, 0.03, 4.845)));
}

#[test]
fn cancel_reports_whether_a_shot_was_running() {
    let court = CourtDimensions::regulation();
    let mut clock = AnimationClock::new();
    let mut positions = AnimatedPositions::default();
    let mut shots = ShotSequencer::default();

    assert!(!shots.cancel(&mut clock));
    shots.start_shot(Some(Handedness::Forehand), ShotStyle::Boast, &court, &mut clock);
    assert!(shots.cancel(&mut clock));

    shots.start_shot(Some(Handedness::Forehand), ShotStyle::Boast, &court, &mut clock);
    drive_to(&mut clock, &mut positions, 5000.0);
    assert!(!shots.cancel(&mut clock));
}
