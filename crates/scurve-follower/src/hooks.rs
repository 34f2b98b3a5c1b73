//! 观察者钩子
//!
//! 用于调试和监控：每个控制周期把当前目标位置、前馈速度等交给回调，
//! 重新规划时报告规划结果。钩子在构造时挂载，运行期不做分配。
//!
//! # 性能要求
//!
//! 回调运行在控制周期内：
//!
//! - **非阻塞**: 禁止 I/O、锁等待
//! - **轻量**: 只做拷贝或计数，重活交给其他上下文
//!
//! # 示例
//!
//! ```rust
//! use scurve_follower::hooks::{TickObserver, TickSample};
//! use std::cell::Cell;
//!
//! #[derive(Default)]
//! struct TickCounter {
//!     ticks: Cell<u64>,
//! }
//!
//! impl TickObserver for TickCounter {
//!     fn on_tick(&self, _sample: &TickSample) {
//!         self.ticks.set(self.ticks.get() + 1);
//!     }
//! }
//! ```

use crate::units::Dps;
use scurve_profile::{PlanError, PlanRequest};

/// 一个控制周期的采样
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSample {
    /// 曲线已运行时间（秒）
    pub elapsed: f64,

    /// 曲线当前目标位置（deg）
    pub target_position: f64,

    /// 前馈速度（所有电机共享）
    pub feedforward: Dps,
}

/// 跟随器回调
pub trait TickObserver {
    /// 每次 `update()` 下发指令后调用
    fn on_tick(&self, sample: &TickSample);

    /// 每次 `set_target()` 后调用（可选）
    ///
    /// 成功时携带新曲线的总时长。默认为空操作。
    fn on_replan(&self, request: &PlanRequest, outcome: Result<f64, &PlanError>) {
        let _ = (request, outcome);
    }
}
