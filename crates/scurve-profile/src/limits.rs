//! 运动学限制
//!
//! 除了速度、加速度、加加速度上限，还有一个起始超速容限 `start_overspeed`：
//! 重新规划的起点来自测量值，运行在 `v_max` 附近的电机读数常常略高于上限。
//! 起始状态可达速度不超过 `v_max * (1 + start_overspeed)` 时照常规划，
//! 曲线先刹回 `v_max` 以内；超出容限时规划失败。

use crate::error::PlanError;

/// 默认起始超速容限（相对 `v_max`）
pub const DEFAULT_START_OVERSPEED: f64 = 0.05;

#[cfg(feature = "serde")]
fn default_start_overspeed() -> f64 {
    DEFAULT_START_OVERSPEED
}

/// 运动学限制
///
/// 跟随器生命周期内保持不变；修改限制需要重新构造跟随器。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicLimits {
    /// 最大速度（deg/s）
    pub v_max: f64,

    /// 最大加速度（deg/s²）
    pub a_max: f64,

    /// 最大加加速度（deg/s³）
    pub j_max: f64,

    /// 起始超速容限（相对 `v_max` 的比例，>= 0）
    #[cfg_attr(feature = "serde", serde(default = "default_start_overspeed"))]
    pub start_overspeed: f64,
}

impl KinematicLimits {
    /// 创建运动学限制（不做校验，见 [`validate`](Self::validate)）
    pub const fn new(v_max: f64, a_max: f64, j_max: f64) -> Self {
        Self {
            v_max,
            a_max,
            j_max,
            start_overspeed: DEFAULT_START_OVERSPEED,
        }
    }

    /// 设置起始超速容限
    pub const fn with_start_overspeed(mut self, ratio: f64) -> Self {
        self.start_overspeed = ratio;
        self
    }

    /// 可接受的最大起始速度（含容限）
    pub fn max_start_speed(&self) -> f64 {
        self.v_max * (1.0 + self.start_overspeed)
    }

    /// 校验所有限制均为有限正数，容限为有限非负数
    pub fn validate(&self) -> Result<(), PlanError> {
        for (name, value) in [
            ("v_max", self.v_max),
            ("a_max", self.a_max),
            ("j_max", self.j_max),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::InvalidLimits {
                    reason: format!("{name} must be finite and > 0, got {value}"),
                });
            }
        }
        if !self.start_overspeed.is_finite() || self.start_overspeed < 0.0 {
            return Err(PlanError::InvalidLimits {
                reason: format!(
                    "start_overspeed must be finite and >= 0, got {}",
                    self.start_overspeed
                ),
            });
        }
        Ok(())
    }
}
