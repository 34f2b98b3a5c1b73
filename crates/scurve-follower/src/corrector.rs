//! 位置误差校正器
//!
//! 前馈速度来自曲线本身，校正器只负责消除残余的位置误差。
//!
//! # 算法（PD）
//!
//! ```text
//! e      = reference - feedback
//! output = Kp * e + Kd * (e - e_last)
//! ```
//!
//! 微分项按"每次调用"的误差差分计算，不除以 dt：跟随器的调用周期固定，
//! 增益直接按控制周期整定即可。输出单位为 deg/s，钳位到 `±max_output`。
//!
//! # 示例
//!
//! ```rust
//! use scurve_follower::corrector::{Corrector, PdConfig, PdCorrector};
//!
//! let mut pd = PdCorrector::new(PdConfig::new(10.0, 0.0, 50.0));
//! let output = pd.compute(1.0, 0.5);
//! assert!((output - 5.0).abs() < 1e-12);
//! ```

use crate::error::FollowerError;
use serde::{Deserialize, Serialize};

/// 误差校正器通用接口
///
/// # 状态
///
/// - **增益**: 构造后不变
/// - **瞬态**: 误差历史等，`clear()` 时整体清零（没有部分重置接口）
pub trait Corrector {
    /// 计算一步校正输出（deg/s）
    ///
    /// # 参数
    ///
    /// - `reference`: 期望位置（曲线当前目标）
    /// - `feedback`: 测量位置
    fn compute(&mut self, reference: f64, feedback: f64) -> f64;

    /// 清除全部瞬态
    fn clear(&mut self);
}

/// PD 校正器配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdConfig {
    /// 比例增益
    pub kp: f64,

    /// 微分增益
    #[serde(default)]
    pub kd: f64,

    /// 输出限幅（deg/s）
    pub max_output: f64,
}

impl PdConfig {
    /// 创建配置
    pub const fn new(kp: f64, kd: f64, max_output: f64) -> Self {
        Self { kp, kd, max_output }
    }

    /// 校验增益有限、限幅非负
    pub fn validate(&self) -> Result<(), FollowerError> {
        if !self.kp.is_finite() || !self.kd.is_finite() {
            return Err(FollowerError::InvalidConfig {
                reason: format!("PD gains must be finite (kp={}, kd={})", self.kp, self.kd),
            });
        }
        if !self.max_output.is_finite() || self.max_output < 0.0 {
            return Err(FollowerError::InvalidConfig {
                reason: format!(
                    "PD max_output must be finite and >= 0, got {}",
                    self.max_output
                ),
            });
        }
        Ok(())
    }
}

/// PD 校正器
#[derive(Debug, Clone)]
pub struct PdCorrector {
    /// 增益（不可变）
    config: PdConfig,

    /// 上一次的误差（用于计算微分）
    last_error: f64,

    /// 上一次的输出
    output: f64,
}

impl PdCorrector {
    /// 创建 PD 校正器
    pub fn new(config: PdConfig) -> Self {
        Self {
            config,
            last_error: 0.0,
            output: 0.0,
        }
    }

    /// 增益配置
    pub fn config(&self) -> &PdConfig {
        &self.config
    }

    /// 上一次的输出
    pub fn output(&self) -> f64 {
        self.output
    }

    /// 上一次的误差
    pub fn last_error(&self) -> f64 {
        self.last_error
    }
}

impl Corrector for PdCorrector {
    fn compute(&mut self, reference: f64, feedback: f64) -> f64 {
        let error = reference - feedback;

        let p_term = self.config.kp * error;
        let d_term = self.config.kd * (error - self.last_error);
        self.last_error = error;

        let limit = self.config.max_output;
        self.output = (p_term + d_term).clamp(-limit, limit);
        self.output
    }

    fn clear(&mut self) {
        self.last_error = 0.0;
        self.output = 0.0;
    }
}
