mod common;

use tickspring::{step, AnimatedValue, SpringConfig, SpringError};

fn clamped() -> SpringConfig {
    SpringConfig::builder().with_clamp(true).build().unwrap()
}

fn bouncy() -> SpringConfig {
    SpringConfig::builder()
        .with_tension(170.0)
        .with_friction(5.0)
        .with_bounce(0.5)
        .build()
        .unwrap()
}

#[test]
fn clamped_spring_converges() {
    common::init_tracing();
    let config = clamped();
    let mut value = AnimatedValue::new(0.0, 100.0);
    let mut finished = false;
    for _ in 0..1000 {
        if step(0.016, &mut value, &config).unwrap() {
            finished = true;
            break;
        }
    }
    assert!(finished, "spring never settled: {:?}", value);
    assert!((value.cur_pos - 100.0).abs() <= 0.1);

    // Once settled, further calls stay settled and do not move the value.
    let settled = value;
    for _ in 0..10 {
        assert!(step(0.016, &mut value, &config).unwrap());
    }
    assert_eq!(value, settled);
}

#[test]
fn coincident_value_settles_immediately() {
    let mut value = AnimatedValue::at_rest(42.0);
    assert!(step(0.016, &mut value, &SpringConfig::default()).unwrap());
    assert_eq!(value.cur_pos, 42.0);
    assert_eq!(value.last_vel, Some(0.0));
}

#[test]
fn moving_value_is_not_settled_after_one_frame() {
    let mut value = AnimatedValue::new(0.0, 100.0);
    assert!(!step(0.016, &mut value, &SpringConfig::default()).unwrap());
    assert!(value.cur_pos > 0.0 && value.cur_pos < 100.0);
    assert!(value.velocity() > 0.0);
}

#[test]
fn one_long_step_equals_many_short_steps() {
    let config: SpringConfig = SpringConfig::wobbly();
    let mut whole = AnimatedValue::new(0.0, 250.0);
    let mut sliced = whole;

    for _ in 0..30 {
        step(0.010, &mut whole, &config).unwrap();
        for _ in 0..10 {
            step(0.001, &mut sliced, &config).unwrap();
        }
        assert_eq!(whole.cur_pos, sliced.cur_pos);
        assert_eq!(whole.last_vel, sliced.last_vel);
    }
}

#[test]
fn partial_milliseconds_round_up() {
    let config: SpringConfig = SpringConfig::stiff();
    let mut rounded = AnimatedValue::new(10.0, -10.0);
    let mut exact = rounded;
    step(0.0101, &mut rounded, &config).unwrap();
    for _ in 0..11 {
        step(0.001, &mut exact, &config).unwrap();
    }
    assert_eq!(rounded, exact);
}

#[test]
fn bounce_overshoots_then_settles() {
    let config = bouncy();
    let mut value = AnimatedValue::new(0.0, 100.0);
    let mut overshot = false;
    let mut settled = false;
    for _ in 0..20_000 {
        if step(0.001, &mut value, &config).unwrap() {
            settled = true;
            break;
        }
        overshot |= value.cur_pos > 100.0;
    }
    assert!(overshot, "bouncing spring never passed its target");
    assert!(settled, "bouncing spring never settled: {:?}", value);
}

#[test]
fn bounce_reflects_off_target() {
    let config = bouncy();
    let mut value = AnimatedValue::new(0.0, 100.0);
    while value.cur_pos <= 100.0 {
        step(0.001, &mut value, &config).unwrap();
    }
    let incoming = value.velocity();
    step(0.001, &mut value, &config).unwrap();
    assert!(value.velocity() < 0.0);
    assert!(value.velocity().abs() < incoming);
    assert!(value.cur_pos < 100.0);
}

#[test]
fn clamp_overrides_bounce() {
    let clamped: SpringConfig = SpringConfig::builder()
        .with_friction(5.0)
        .with_bounce(0.5)
        .with_clamp(true)
        .build()
        .unwrap();
    let plain: SpringConfig = SpringConfig::builder().with_friction(5.0).build().unwrap();

    let mut a = AnimatedValue::new(0.0, 100.0);
    let mut b = a;
    for _ in 0..100 {
        step(0.016, &mut a, &clamped).unwrap();
        step(0.016, &mut b, &plain).unwrap();
    }
    assert_eq!(a, b);
}

#[test]
fn redirect_reuses_momentum() {
    let config: SpringConfig = SpringConfig::gentle();
    let mut value = AnimatedValue::new(0.0, 100.0);
    for _ in 0..10 {
        step(0.016, &mut value, &config).unwrap();
    }
    assert!(value.velocity() > 0.0);

    value.set_target(-50.0);
    let carried = value.advanced(0.016, &config).unwrap();
    let mut fresh = value;
    fresh.last_vel = None;
    let restarted = fresh.advanced(0.016, &config).unwrap();
    assert!(carried.value.cur_pos > restarted.value.cur_pos);

    let mut settled = false;
    for _ in 0..2000 {
        if step(0.016, &mut value, &config).unwrap() {
            settled = true;
            break;
        }
    }
    assert!(settled);
    assert!((value.cur_pos + 50.0).abs() <= 0.05);
}

#[test]
fn redirect_recomputes_growth_direction() {
    let config = bouncy();
    let mut value = AnimatedValue::new(0.0, 100.0);
    for _ in 0..5 {
        step(0.016, &mut value, &config).unwrap();
    }
    // Heading down now: sitting above the new target is not an overshoot.
    value.set_target(-50.0);
    step(0.001, &mut value, &config).unwrap();
    assert!(value.cur_pos > -50.0);
    assert_ne!(value.cur_pos, -50.0);
}

#[test]
fn retarget_restarts_trip_from_current_position() {
    let config: SpringConfig = SpringConfig::default();
    let mut value = AnimatedValue::new(0.0, 10.0);
    step(0.05, &mut value, &config).unwrap();
    let here = value.cur_pos;
    let velocity = value.last_vel;
    value.retarget(20.0);
    assert_eq!(value.from_pos, here);
    assert_eq!(value.to_pos, 20.0);
    assert_eq!(value.last_vel, velocity);
}

#[test]
fn seed_velocity_applies_only_to_first_call() {
    let config: SpringConfig = SpringConfig::builder().with_velocity(2.0).build().unwrap();
    let mut value = AnimatedValue::new(0.0, 100.0);
    step(0.001, &mut value, &config).unwrap();
    let first = value.cur_pos;
    assert!(first > 1.9);

    let mut unseeded = AnimatedValue::new(0.0, 100.0);
    step(0.001, &mut unseeded, &SpringConfig::default()).unwrap();
    assert!(unseeded.cur_pos < first);
}

#[test]
fn max_velocity_limits_every_sub_step() {
    let config: SpringConfig = SpringConfig::builder()
        .with_preset(tickspring::Preset::Stiff)
        .with_max_velocity(0.05)
        .build()
        .unwrap();
    let mut value = AnimatedValue::new(0.0, 1000.0);
    for _ in 0..500 {
        let before = value.cur_pos;
        step(0.001, &mut value, &config).unwrap();
        assert!(value.velocity().abs() <= 0.05);
        assert!((value.cur_pos - before).abs() <= 0.05 + 1e-12);
    }
    assert!(value.cur_pos <= 25.0 + 1e-9);
}

#[test]
fn zero_dt_changes_nothing_but_velocity() {
    let mut value = AnimatedValue::new(3.0, 10.0);
    assert!(!step(0.0, &mut value, &SpringConfig::default()).unwrap());
    assert_eq!(value.cur_pos, 3.0);
    assert_eq!(value.last_vel, Some(0.0));
}

#[test]
fn invalid_timesteps_leave_value_untouched() {
    let config: SpringConfig = SpringConfig::default();
    let mut value = AnimatedValue::new(0.0, 100.0);
    step(0.016, &mut value, &config).unwrap();
    let before = value;

    for dt in [-0.016, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            step(dt, &mut value, &config),
            Err(SpringError::InvalidTimestep { .. })
        ));
        assert_eq!(value, before);
    }
    assert!(matches!(
        step(120.0, &mut value, &config),
        Err(SpringError::TimestepTooLarge { max_secs, .. }) if max_secs == 60.0
    ));
    assert_eq!(value, before);
}

#[test]
fn non_finite_state_is_rejected() {
    let config: SpringConfig = SpringConfig::default();
    let mut value = AnimatedValue::new(0.0, f64::NAN);
    assert_eq!(step(0.016, &mut value, &config), Err(SpringError::NonFiniteState));

    let mut value = AnimatedValue::new(0.0, 1.0);
    value.last_vel = Some(f64::INFINITY);
    assert_eq!(step(0.016, &mut value, &config), Err(SpringError::NonFiniteState));
}

#[test]
fn blow_up_is_reported_and_not_committed() {
    let config: SpringConfig = SpringConfig::builder().with_mass(1e-300).build().unwrap();
    let mut value = AnimatedValue::new(0.0, 100.0);
    let before = value;
    assert_eq!(step(0.016, &mut value, &config), Err(SpringError::NumericalBlowUp));
    assert_eq!(value, before);
}

#[test]
fn f32_values_converge() {
    let config: SpringConfig<f32> = SpringConfig::gentle();
    let mut value: AnimatedValue<f32> = AnimatedValue::new(200.0, 640.0);
    let mut settled = false;
    for _ in 0..500 {
        if value.step(0.016, &config).unwrap() {
            settled = true;
            break;
        }
    }
    assert!(settled);
    assert!((value.cur_pos - 640.0).abs() <= 0.44);
}
