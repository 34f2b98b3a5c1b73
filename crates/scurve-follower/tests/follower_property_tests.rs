//! 跟随器与单位类型的属性测试
//!
//! 使用 proptest 验证换算关系和跟随器状态不变式。

mod common;

use common::helpers::{follower_config, pd};
use common::mock_actuator::MockActuator;
use proptest::prelude::*;
use scurve_follower::prelude::*;

proptest! {
    /// 测试 deg/s 到 rpm 的往返转换
    #[test]
    fn dps_rpm_roundtrip(dps in -10000.0..10000.0f64) {
        let back = Dps(dps).to_rpm().to_dps();
        prop_assert!((back.0 - dps).abs() < 1e-9);
    }

    /// 测试换算系数：360 deg/s = 60 rpm
    #[test]
    fn dps_rpm_scale(dps in -10000.0..10000.0f64) {
        prop_assert!((Dps(dps).to_rpm().0 * 6.0 - dps).abs() < 1e-9);
    }

    /// 估算不改变状态，且与随后的真实规划一致
    #[test]
    fn estimate_is_pure(start in -500.0..500.0f64, target in -500.0..500.0f64) {
        let motor = MockActuator::at(start);
        let mut follower: AxisFollower<_, _> =
            Follower::axis(follower_config(), &motor, pd()).unwrap();

        let estimate = follower.estimate_duration(target).unwrap();
        prop_assert!(!follower.is_running());
        prop_assert_eq!(follower.elapsed(), 0.0);

        follower.set_target(target).unwrap();
        prop_assert_eq!(follower.curve().total_duration(), estimate);
    }

    /// 已运行时间是更新周期的整数倍，且每次规划清零
    #[test]
    fn elapsed_counts_ticks(ticks in 0usize..400, target in -90.0..90.0f64) {
        let motor = MockActuator::new();
        let mut follower: AxisFollower<_, _> =
            Follower::axis(follower_config(), &motor, pd()).unwrap();
        let interval = follower.config().update_interval;

        follower.set_target(target).unwrap();
        for _ in 0..ticks {
            follower.update();
            motor.step(interval);
        }
        prop_assert!((follower.elapsed() - ticks as f64 * interval).abs() < 1e-9);

        follower.set_target(0.0).unwrap();
        prop_assert_eq!(follower.elapsed(), 0.0);
    }
}
