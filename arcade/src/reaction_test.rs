use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn new_trial_is_idle_with_no_result() {
    let timer = ReactionTimer::new();
    assert_eq!(timer.phase(), Phase::Idle);
    assert_eq!(timer.result_ms(), None);
}

#[test]
fn start_enters_waiting_with_delay_in_range() {
    let mut timer = ReactionTimer::new();
    let mut rng = rng();
    for _ in 0..200 {
        let delay = timer.start(&mut rng);
        assert_eq!(timer.phase(), Phase::Waiting);
        assert!(delay >= MIN_ARM_DELAY_MS);
        assert!(delay < MAX_ARM_DELAY_MS);
    }
}

#[test]
fn arm_moves_waiting_to_armed() {
    let mut timer = ReactionTimer::new();
    timer.start(&mut rng());
    timer.arm(1000.0);
    assert_eq!(timer.phase(), Phase::Armed);
}

#[test]
fn arm_outside_waiting_is_ignored() {
    let mut timer = ReactionTimer::new();
    timer.arm(1000.0);
    assert_eq!(timer.phase(), Phase::Idle);

    timer.start(&mut rng());
    timer.register_input(500.0);
    assert_eq!(timer.phase(), Phase::FalseStart);
    // A stale scheduled callback firing after the false start.
    timer.arm(2000.0);
    assert_eq!(timer.phase(), Phase::FalseStart);
}

// =============================================================
// Input handling
// =============================================================

#[test]
fn input_during_waiting_is_a_false_start() {
    let mut timer = ReactionTimer::new();
    timer.start(&mut rng());
    assert_eq!(timer.register_input(100.0), InputOutcome::FalseStart);
    assert_eq!(timer.phase(), Phase::FalseStart);
    assert_eq!(timer.result_ms(), Some(FALSE_START_MS));
}

#[test]
fn input_during_armed_measures_elapsed_time() {
    let mut timer = ReactionTimer::new();
    timer.start(&mut rng());
    timer.arm(1000.0);
    assert_eq!(timer.register_input(1234.0), InputOutcome::Measured(234));
    assert_eq!(timer.phase(), Phase::Measured);
    assert_eq!(timer.result_ms(), Some(234));
}

#[test]
fn measured_result_is_never_negative() {
    let mut timer = ReactionTimer::new();
    timer.start(&mut rng());
    timer.arm(1000.0);
    // A clock skew handing us an input timestamp before the arm timestamp.
    let outcome = timer.register_input(990.0);
    assert_eq!(outcome, InputOutcome::Measured(0));
}

#[test]
fn input_in_terminal_phases_is_ignored() {
    let mut timer = ReactionTimer::new();
    assert_eq!(timer.register_input(0.0), InputOutcome::Ignored);

    timer.start(&mut rng());
    timer.arm(10.0);
    timer.register_input(20.0);
    assert_eq!(timer.register_input(30.0), InputOutcome::Ignored);
    assert_eq!(timer.result_ms(), Some(10));

    timer.start(&mut rng());
    timer.register_input(5.0);
    assert_eq!(timer.register_input(6.0), InputOutcome::Ignored);
}

// =============================================================
// Restart
// =============================================================

#[test]
fn start_restarts_from_every_phase() {
    let mut timer = ReactionTimer::new();
    let mut rng = rng();

    timer.start(&mut rng);
    timer.register_input(1.0);
    assert_eq!(timer.phase(), Phase::FalseStart);
    timer.start(&mut rng);
    assert_eq!(timer.phase(), Phase::Waiting);
    assert_eq!(timer.result_ms(), None);

    timer.arm(100.0);
    timer.register_input(250.0);
    assert_eq!(timer.phase(), Phase::Measured);
    timer.start(&mut rng);
    assert_eq!(timer.phase(), Phase::Waiting);
    assert_eq!(timer.result_ms(), None);
}
