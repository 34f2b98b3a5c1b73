//! 规划错误
//!
//! 曲线合成是整个跟随器唯一的错误来源，所有失败都以显式返回值传递。

use thiserror::Error;

/// 曲线合成失败的原因
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// 运动学限制无效（非有限值或不为正）
    #[error("Invalid kinematic limits: {reason}")]
    InvalidLimits {
        /// 无效原因
        reason: String,
    },

    /// 规划请求中存在 NaN / Inf
    #[error("Non-finite plan input: {field} = {value}")]
    NonFiniteInput {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
    },

    /// 起始速度超出速度上限（含起始超速容限）
    #[error("Start velocity {velocity:.3} exceeds limit {limit:.3}")]
    StartVelocityExceedsLimit {
        /// 起始速度
        velocity: f64,
        /// 速度上限
        limit: f64,
    },

    /// 起始加速度超出加速度上限
    #[error("Start acceleration {acceleration:.3} exceeds limit {limit:.3}")]
    StartAccelerationExceedsLimit {
        /// 起始加速度
        acceleration: f64,
        /// 加速度上限
        limit: f64,
    },

    /// 起始加速度会把速度推过上限（含容限），加加速度受限下无法避免
    #[error("Start state settles at velocity {settled_velocity:.3}, beyond limit {limit:.3}")]
    StartStateInfeasible {
        /// 加速度降到 0 时的速度
        settled_velocity: f64,
        /// 速度上限（含容限）
        limit: f64,
    },

    /// 峰值速度搜索未能落在目标位置上
    #[error("Peak velocity search did not converge (residual {residual:.3e})")]
    NotConverged {
        /// 终点位置残差
        residual: f64,
    },
}

impl PlanError {
    /// 是否由起始状态引起（而非配置问题）
    ///
    /// 起始状态类错误通常在下一次规划时自然消失（例如测量速度噪声），
    /// 配置类错误则每次都会复现。
    pub fn is_start_state_error(&self) -> bool {
        matches!(
            self,
            PlanError::StartVelocityExceedsLimit { .. }
                | PlanError::StartAccelerationExceedsLimit { .. }
                | PlanError::StartStateInfeasible { .. }
        )
    }
}
