//! Curve trait - 曲线能力接口
//!
//! 跟随器只通过这个接口使用曲线：合成、按时间求值、查询总时长、重置。
//!
//! # 设计理念
//!
//! - **整体替换**: `synthesize()` 返回一条全新的曲线，失败时不会留下半成品，
//!   调用方要么得到完整曲线，要么得到错误
//! - **时间钳位**: 求值时间超出 `[0, total_duration]` 时取最近端点
//! - **无分配**: 实现应当把分段数据内联存储，便于在实时循环中重新规划

use crate::error::PlanError;
use crate::limits::KinematicLimits;

/// 一次曲线合成的边界条件
///
/// 终点固定为静止（速度、加速度均为 0）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRequest {
    /// 起始位置（deg）
    pub start_position: f64,

    /// 目标位置（deg）
    pub target_position: f64,

    /// 起始速度（deg/s）
    pub start_velocity: f64,

    /// 起始加速度（deg/s²）
    pub start_acceleration: f64,
}

impl PlanRequest {
    /// 从静止状态出发的规划请求
    pub const fn from_rest(start_position: f64, target_position: f64) -> Self {
        Self {
            start_position,
            target_position,
            start_velocity: 0.0,
            start_acceleration: 0.0,
        }
    }

    /// 检查所有字段都是有限值
    pub fn check_finite(&self) -> Result<(), PlanError> {
        for (field, value) in [
            ("start_position", self.start_position),
            ("target_position", self.target_position),
            ("start_velocity", self.start_velocity),
            ("start_acceleration", self.start_acceleration),
        ] {
            if !value.is_finite() {
                return Err(PlanError::NonFiniteInput { field, value });
            }
        }
        Ok(())
    }
}

/// 某一时刻的运动学状态
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KinematicState {
    /// 位置（deg）
    pub position: f64,
    /// 速度（deg/s）
    pub velocity: f64,
    /// 加速度（deg/s²）
    pub acceleration: f64,
}

impl KinematicState {
    /// 以最大加加速度把加速度降到 0 时到达的速度
    ///
    /// 加加速度受限时速度无法越过这一点立即回头，
    /// 因此 `max(|v|, |settled_velocity|)` 是起始状态下必然经过的最大速度。
    pub fn settled_velocity(&self, j_max: f64) -> f64 {
        self.velocity + self.acceleration * self.acceleration.abs() / (2.0 * j_max)
    }
}

/// 曲线通用接口
///
/// # 契约
///
/// - `synthesize()` 成功后，`position(0)`/`velocity(0)`/`acceleration(0)`
///   等于请求中的起始状态
/// - `position(total_duration())` 等于目标位置（数值误差内）
/// - 起始状态必经的速度 `max(|v0|, |settled_velocity|)` 不超过 `v_max` 时，
///   全程 `|v| <= v_max`；否则全程不超过该速度，且曲线先刹回 `v_max` 以内
/// - `empty()` 是零曲线：总时长为 0，所有求值为 0
pub trait Curve: Sized {
    /// 根据边界条件和运动学限制合成曲线
    fn synthesize(request: &PlanRequest, limits: &KinematicLimits) -> Result<Self, PlanError>;

    /// 空曲线（重置）
    fn empty() -> Self;

    /// 曲线总时长（秒）
    fn total_duration(&self) -> f64;

    /// 在时刻 `t` 的位置
    fn position(&self, t: f64) -> f64;

    /// 在时刻 `t` 的速度
    fn velocity(&self, t: f64) -> f64;

    /// 在时刻 `t` 的加速度
    fn acceleration(&self, t: f64) -> f64;

    /// 在时刻 `t` 的完整状态
    ///
    /// 默认实现分别调用三个求值函数，实现可以覆盖以减少重复查找。
    fn state(&self, t: f64) -> KinematicState {
        KinematicState {
            position: self.position(t),
            velocity: self.velocity(t),
            acceleration: self.acceleration(t),
        }
    }
}
