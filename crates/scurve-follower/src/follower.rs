//! S 曲线轨迹跟随器
//!
//! 一个泛型实现同时服务单电机（[`AxisFollower`]）和多电机协同
//! （[`GroupFollower`]），差异由 [`Actuation`] 实现承担。
//!
//! # 每周期流程
//!
//! ```text
//! elapsed += update_interval
//! ff      = curve.velocity(elapsed)         // 前馈（deg/s）
//! target  = curve.position(elapsed)         // 当前目标
//! 对每个电机: cmd = ff + pd(target, measured) -> rpm
//! ```
//!
//! # 重新规划
//!
//! `set_target()` 以当前测量位置、速度为起点；如果曲线正在运行，
//! 还会沿用旧曲线在当前时刻的加速度，保证加速度连续。规划失败时跟随器
//! 直接停止，不会继续使用旧曲线。
//!
//! # 生命周期
//!
//! ```text
//!            set_target (Ok)
//!   ┌────────┐ ─────────────> ┌─────────┐  elapsed >= T  ┌──────────┐
//!   │ Idle   │                │ Running │ ─────────────> │ Finished │
//!   └────────┘ <───────────── └─────────┘                └──────────┘
//!       ^      stop / reset_all /                              │
//!       │      set_target (Err)                                │
//!       └──────────────────────────────────────────────────────┘
//! ```
//!
//! `Finished` 只是 `running && elapsed >= T` 的派生判断，不会自动清除，
//! 需要调用方显式 `stop()` 或重新 `set_target()`。
//!
//! # 示例
//!
//! ```rust
//! use scurve_follower::prelude::*;
//! use std::cell::Cell;
//!
//! #[derive(Default)]
//! struct Motor {
//!     position: Cell<f64>,
//!     command: Cell<Rpm>,
//! }
//!
//! impl Actuator for Motor {
//!     fn measured_position(&self) -> f64 { self.position.get() }
//!     fn measured_velocity(&self) -> f64 { 0.0 }
//!     fn set_velocity_command(&self, command: Rpm) { self.command.set(command) }
//!     fn reset_position_reference(&self) { self.position.set(0.0) }
//! }
//!
//! let motor = Motor::default();
//! let config = FollowerConfig::new(0.001, KinematicLimits::new(180.0, 360.0, 720.0));
//! let pd = PdCorrector::new(PdConfig::new(5.0, 0.0, 30.0));
//!
//! let mut follower: AxisFollower<&Motor, PdCorrector> =
//!     Follower::axis(config, &motor, pd).unwrap();
//!
//! follower.set_target(90.0).unwrap();
//! follower.update();
//! assert!(motor.command.get().0 > 0.0);
//! ```

use crate::actuator::Actuator;
use crate::config::FollowerConfig;
use crate::corrector::Corrector;
use crate::error::FollowerError;
use crate::hooks::{TickObserver, TickSample};
use crate::source::{Actuation, Channel, ChannelGroup, KinematicSource};
use crate::units::Dps;
use scurve_profile::{Curve, PlanError, PlanRequest, SCurveProfile};
use tracing::{debug, trace, warn};

/// 轨迹跟随器
///
/// - `S`: 运动学来源与指令下发（单电机 / 电机组）
/// - `C`: 曲线实现
pub struct Follower<S, C = SCurveProfile> {
    /// 配置（不可变）
    config: FollowerConfig,

    /// 电机与校正器
    source: S,

    /// 当前曲线，只在规划成功时整体替换
    curve: C,

    /// 曲线已运行时间（秒）
    elapsed: f64,

    /// 是否在跟随曲线
    running: bool,

    /// 最近一次 `update()` 的目标位置
    current_target: f64,

    /// 可选观察者
    observer: Option<Box<dyn TickObserver>>,
}

/// 单电机跟随器
pub type AxisFollower<A, P, C = SCurveProfile> = Follower<Channel<A, P>, C>;

/// 多电机协同跟随器
pub type GroupFollower<'a, A, P, C = SCurveProfile> = Follower<ChannelGroup<'a, A, P>, C>;

impl<S: Actuation, C: Curve> Follower<S, C> {
    /// 创建跟随器
    ///
    /// 初始状态：`elapsed = 0`，未运行，曲线为空。
    ///
    /// # 错误
    ///
    /// 配置无效（更新周期不为正、运动学限制不为正）时返回
    /// [`FollowerError::InvalidConfig`]，不会产生部分初始化的跟随器。
    pub fn new(config: FollowerConfig, source: S) -> Result<Self, FollowerError> {
        config.validate()?;

        Ok(Self {
            config,
            source,
            curve: C::empty(),
            elapsed: 0.0,
            running: false,
            current_target: 0.0,
            observer: None,
        })
    }

    /// 挂载观察者
    pub fn with_observer(mut self, observer: Box<dyn TickObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// 更新一个控制周期
    ///
    /// 未运行时什么都不做。每个控制周期恰好调用一次，
    /// 且必须在电机自身的速度环更新之前调用。
    pub fn update(&mut self) {
        if !self.running {
            return;
        }

        let elapsed = self.elapsed + self.config.update_interval;
        self.elapsed = elapsed;

        // 整组共享同一个前馈和目标
        let feedforward = Dps(self.curve.velocity(elapsed));
        let target = self.curve.position(elapsed);
        self.current_target = target;

        self.source.drive(feedforward, target);

        trace!(elapsed, target_position = target, feedforward = feedforward.0, "follower tick");

        if let Some(observer) = &self.observer {
            observer.on_tick(&TickSample {
                elapsed,
                target_position: target,
                feedforward,
            });
        }
    }

    /// 停止跟随
    ///
    /// 速度指令置零，校正器瞬态清零。曲线和已运行时间保持不变。
    pub fn stop(&mut self) {
        self.running = false;
        self.source.halt();
        debug!(elapsed = self.elapsed, "follower stopped");
    }

    /// 停止并清零所有
    ///
    /// 在 [`stop`](Self::stop) 的基础上，曲线重置为空曲线，
    /// 电机位置参考归零（重新归零操作）。
    pub fn reset_all(&mut self) {
        self.stop();
        self.curve = C::empty();
        self.source.rehome();
        debug!("follower reset, position reference re-homed");
    }

    /// 设置目标位置（deg）
    ///
    /// 以当前测量状态为起点重新规划，运行中时沿用旧曲线的当前加速度。
    /// 已运行时间无条件清零。
    ///
    /// # 错误
    ///
    /// 规划失败时跟随器被强制停止（无论之前是否在运行），并返回规划错误。
    pub fn set_target(&mut self, target: f64) -> Result<(), PlanError> {
        let was_running = self.running;
        self.running = false;

        let request = self.plan_request(was_running, target);
        let outcome = C::synthesize(&request, &self.config.limits);
        self.elapsed = 0.0;

        match outcome {
            Ok(curve) => {
                let duration = curve.total_duration();
                self.curve = curve;
                self.running = true;
                debug!(
                    start = request.start_position,
                    target_position = target,
                    start_velocity = request.start_velocity,
                    start_acceleration = request.start_acceleration,
                    duration,
                    "trajectory replanned"
                );
                if let Some(observer) = &self.observer {
                    observer.on_replan(&request, Ok(duration));
                }
                Ok(())
            },
            Err(err) => {
                // 旧曲线不再恢复
                if err.is_start_state_error() {
                    warn!(
                        target_position = target,
                        start_velocity = request.start_velocity,
                        start_acceleration = request.start_acceleration,
                        error = %err,
                        "start state outside kinematic limits, stopping follower"
                    );
                } else {
                    warn!(
                        target_position = target,
                        error = %err,
                        "trajectory planning failed, stopping follower"
                    );
                }
                self.stop();
                if let Some(observer) = &self.observer {
                    observer.on_replan(&request, Err(&err));
                }
                Err(err)
            },
        }
    }

    /// 估算运动到目标所需时间（秒）
    ///
    /// 在临时曲线上做与 [`set_target`](Self::set_target) 完全相同的规划，
    /// 不修改跟随器的任何状态。
    pub fn estimate_duration(&self, target: f64) -> Result<f64, PlanError> {
        let request = self.plan_request(self.running, target);
        C::synthesize(&request, &self.config.limits).map(|curve| curve.total_duration())
    }

    /// 估算运动时间，规划失败时返回 `-1.0`
    pub fn estimate_duration_or_sentinel(&self, target: f64) -> f64 {
        self.estimate_duration(target).unwrap_or(-1.0)
    }

    /// 曲线是否执行完毕
    ///
    /// 纯判断：`running && elapsed >= total_duration`，不会自动清除。
    pub fn is_finished(&self) -> bool {
        self.running && self.elapsed >= self.curve.total_duration()
    }

    /// 是否在跟随曲线
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 曲线已运行时间（秒）
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// 最近一次 `update()` 的目标位置（deg）
    pub fn current_target(&self) -> f64 {
        self.current_target
    }

    /// 当前曲线
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// 配置
    pub fn config(&self) -> &FollowerConfig {
        &self.config
    }

    /// 电机与校正器
    pub fn source(&self) -> &S {
        &self.source
    }

    fn plan_request(&self, running: bool, target: f64) -> PlanRequest {
        PlanRequest {
            start_position: self.source.consensus_position(),
            target_position: target,
            start_velocity: self.source.consensus_velocity(),
            start_acceleration: if running {
                self.curve.acceleration(self.elapsed)
            } else {
                0.0
            },
        }
    }
}

impl<A: Actuator, P: Corrector, C: Curve> Follower<Channel<A, P>, C> {
    /// 创建单电机跟随器
    pub fn axis(config: FollowerConfig, actuator: A, corrector: P) -> Result<Self, FollowerError> {
        Self::new(config, Channel::new(actuator, corrector))
    }
}

impl<'a, A: Actuator, P: Corrector, C: Curve> Follower<ChannelGroup<'a, A, P>, C> {
    /// 创建多电机协同跟随器
    ///
    /// `channels` 在跟随器生命周期内被借用，长度固定。
    ///
    /// # 错误
    ///
    /// 空切片返回 [`FollowerError::EmptyGroup`]；配置无效返回
    /// [`FollowerError::InvalidConfig`]。
    pub fn group(
        config: FollowerConfig,
        channels: &'a mut [Channel<A, P>],
    ) -> Result<Self, FollowerError> {
        Self::new(config, ChannelGroup::new(channels)?)
    }
}
