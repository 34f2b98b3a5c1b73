//! 测试辅助函数

use scurve_follower::corrector::{PdConfig, PdCorrector};
use scurve_follower::hooks::{TickObserver, TickSample};
use scurve_follower::{FollowerConfig, KinematicLimits};
use std::cell::RefCell;
use std::rc::Rc;

/// 控制周期（秒）
pub const INTERVAL: f64 = 0.001;

/// 测试用运动学限制
pub const LIMITS: KinematicLimits = KinematicLimits::new(180.0, 360.0, 720.0);

pub fn follower_config() -> FollowerConfig {
    FollowerConfig::new(INTERVAL, LIMITS)
}

pub fn pd() -> PdCorrector {
    PdCorrector::new(PdConfig::new(20.0, 0.0, 90.0))
}

/// 浮点数近似相等断言
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Values not equal: {} != {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// 记录每个周期采样的观察者
#[derive(Debug, Clone, Default)]
pub struct SampleLog(pub Rc<RefCell<Vec<TickSample>>>);

impl SampleLog {
    pub fn samples(&self) -> Vec<TickSample> {
        self.0.borrow().clone()
    }
}

impl TickObserver for SampleLog {
    fn on_tick(&self, sample: &TickSample) {
        self.0.borrow_mut().push(*sample);
    }
}
