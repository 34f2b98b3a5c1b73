//! 单电机跟随器集成测试
//!
//! 使用 Mock 执行器闭环仿真：每个周期先 `update()` 再推进电机。

mod common;

use common::helpers::{INTERVAL, LIMITS, assert_float_eq, follower_config, pd};
use common::mock_actuator::MockActuator;
use scurve_follower::prelude::*;

type TestFollower<'m> = AxisFollower<&'m MockActuator, PdCorrector>;

fn axis(motor: &MockActuator) -> TestFollower<'_> {
    Follower::axis(follower_config(), motor, pd()).unwrap()
}

fn tick(follower: &mut TestFollower<'_>, motor: &MockActuator) {
    follower.update();
    motor.step(INTERVAL);
}

#[test]
fn test_move_to_target_finishes_exactly_once() {
    let motor = MockActuator::new();
    let mut follower = axis(&motor);

    follower.set_target(90.0).unwrap();
    let duration = follower.curve().total_duration();
    assert!(duration > 0.0);

    let mut transitions = 0;
    let mut was_finished = follower.is_finished();
    let max_ticks = (duration / INTERVAL) as usize + 100;
    for _ in 0..max_ticks {
        tick(&mut follower, &motor);
        let finished = follower.is_finished();
        if finished && !was_finished {
            transitions += 1;
            assert!(follower.elapsed() >= duration);
            assert!(follower.elapsed() - INTERVAL < duration);
        }
        was_finished = finished;
    }

    assert_eq!(transitions, 1);
    assert!(follower.is_running());
    assert_float_eq(motor.position(), 90.0, 0.5);
    assert_float_eq(follower.current_target(), 90.0, 1e-6);
}

#[test]
fn test_commands_stay_within_limits() {
    let motor = MockActuator::new();
    let mut follower = axis(&motor);
    follower.set_target(-120.0).unwrap();

    let ceiling = LIMITS.v_max + pd().config().max_output;
    while !follower.is_finished() {
        tick(&mut follower, &motor);
        assert!(motor.command().to_dps().value().abs() <= ceiling + 1e-9);
    }
    assert_float_eq(motor.position(), -120.0, 0.5);
}

#[test]
fn test_retarget_mid_motion_is_smooth() {
    let motor = MockActuator::new();
    let mut follower = axis(&motor);
    follower.set_target(90.0).unwrap();

    for _ in 0..500 {
        tick(&mut follower, &motor);
    }
    let before = motor.command().to_dps().value();
    assert!(before > 10.0);

    follower.set_target(-30.0).unwrap();
    assert_eq!(follower.elapsed(), 0.0);
    tick(&mut follower, &motor);
    let after = motor.command().to_dps().value();

    // 起点沿用测量速度和当前加速度，指令不会跳变：
    // 差值只来自一个周期的加速度和校正器对一个周期位移的响应
    let bound = (LIMITS.a_max + pd().config().kp * LIMITS.v_max) * INTERVAL;
    assert!((after - before).abs() < bound, "{before} -> {after}");

    while !follower.is_finished() {
        tick(&mut follower, &motor);
    }
    assert_float_eq(motor.position(), -30.0, 0.5);
}

#[test]
fn test_plan_failure_stops_motion() {
    let motor = MockActuator::new();
    let mut follower = axis(&motor);
    follower.set_target(90.0).unwrap();
    for _ in 0..200 {
        tick(&mut follower, &motor);
    }
    assert!(motor.command() != Rpm::ZERO);

    let err = follower.set_target(f64::NAN).unwrap_err();
    assert!(matches!(err, PlanError::NonFiniteInput { .. }));
    assert!(!follower.is_running());
    assert!(!follower.is_finished());
    assert_eq!(motor.command(), Rpm::ZERO);

    let received = motor.commands_received();
    tick(&mut follower, &motor);
    assert_eq!(motor.commands_received(), received);
}

#[test]
fn test_estimate_matches_plan() {
    let motor = MockActuator::at(10.0);
    let mut follower = axis(&motor);

    let estimate = follower.estimate_duration(100.0).unwrap();
    assert!(!follower.is_running());
    assert_eq!(follower.curve(), &SCurveProfile::empty());

    follower.set_target(100.0).unwrap();
    assert_float_eq(follower.curve().total_duration(), estimate, 1e-12);
    assert_eq!(follower.estimate_duration_or_sentinel(f64::INFINITY), -1.0);
}

#[test]
fn test_reset_all_rehomes_motor() {
    let motor = MockActuator::new();
    let mut follower = axis(&motor);
    follower.set_target(45.0).unwrap();
    for _ in 0..300 {
        tick(&mut follower, &motor);
    }
    assert!(motor.position() > 0.0);

    follower.reset_all();

    assert_eq!(motor.resets(), 1);
    assert_eq!(motor.position(), 0.0);
    assert_eq!(motor.command(), Rpm::ZERO);
    assert!(follower.curve().is_empty());
    assert!(!follower.is_running());
}

#[test]
fn test_target_equal_to_position_finishes_immediately() {
    let motor = MockActuator::at(30.0);
    let mut follower = axis(&motor);

    follower.set_target(30.0).unwrap();
    assert_eq!(follower.curve().total_duration(), 0.0);
    assert!(follower.is_finished());

    tick(&mut follower, &motor);
    assert_float_eq(motor.position(), 30.0, 1e-9);
}

#[test]
fn test_retarget_from_slight_overspeed_keeps_running() {
    // 测量速度略高于 v_max（校正器或噪声），曲线先刹回 v_max
    let motor = MockActuator::moving(0.0, 180.09);
    let mut follower = axis(&motor);

    follower.set_target(500.0).unwrap();
    assert!(follower.is_running());

    let curve = follower.curve();
    assert_eq!(curve.velocity(0.0), 180.09);
    assert!((curve.velocity(curve.total_duration() / 2.0) - LIMITS.v_max).abs() < 1e-9);

    for _ in 0..200 {
        tick(&mut follower, &motor);
    }
    assert!(follower.is_running());
}

#[test]
fn test_retarget_from_excessive_speed_stops() {
    let motor = MockActuator::moving(0.0, 250.0);
    let mut follower = axis(&motor);

    let err = follower.set_target(500.0).unwrap_err();
    assert!(err.is_start_state_error());
    assert!(!follower.is_running());
    assert_eq!(motor.command(), Rpm::ZERO);
}
