//! 跟随器配置
//!
//! 所有配置都是只读的 POD 结构，可以直接从 TOML 加载：
//!
//! ```toml
//! [follower]
//! update_interval = 0.001   # 秒
//!
//! [follower.limits]
//! v_max = 180.0             # deg/s
//! a_max = 360.0             # deg/s²
//! j_max = 720.0             # deg/s³
//! start_overspeed = 0.05    # 可选，起始超速容限（相对 v_max）
//!
//! [[items]]
//! kp = 8.0
//! kd = 0.5
//! max_output = 60.0         # deg/s
//! ```

use crate::corrector::{PdConfig, PdCorrector};
use crate::error::FollowerError;
use scurve_profile::KinematicLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 跟随器配置
///
/// 在跟随器生命周期内不可变。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowerConfig {
    /// 更新周期（秒），必须 > 0
    pub update_interval: f64,

    /// 运动学限制
    pub limits: KinematicLimits,
}

impl FollowerConfig {
    /// 创建配置（不做校验）
    pub const fn new(update_interval: f64, limits: KinematicLimits) -> Self {
        Self {
            update_interval,
            limits,
        }
    }

    /// 校验配置
    ///
    /// - `update_interval` 必须是有限正数
    /// - 所有运动学限制必须是有限正数
    pub fn validate(&self) -> Result<(), FollowerError> {
        if !self.update_interval.is_finite() || self.update_interval <= 0.0 {
            return Err(FollowerError::InvalidConfig {
                reason: format!(
                    "update_interval must be finite and > 0, got {}",
                    self.update_interval
                ),
            });
        }
        self.limits
            .validate()
            .map_err(|e| FollowerError::InvalidConfig {
                reason: e.to_string(),
            })
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, FollowerError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载并校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FollowerError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}

/// 单电机跟随器配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// 跟随器参数
    pub follower: FollowerConfig,

    /// 位置误差 PD 参数
    pub corrector: PdConfig,
}

impl AxisConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), FollowerError> {
        self.follower.validate()?;
        self.corrector.validate()
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, FollowerError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载并校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FollowerError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// 按配置创建校正器
    pub fn corrector(&self) -> PdCorrector {
        PdCorrector::new(self.corrector)
    }
}

/// 多电机协同跟随器配置
///
/// `items` 的顺序与调用方提供的电机顺序一一对应。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// 跟随器参数（整组共享）
    pub follower: FollowerConfig,

    /// 每个电机的位置误差 PD 参数
    pub items: Vec<PdConfig>,
}

impl GroupConfig {
    /// 校验配置（至少一个电机）
    pub fn validate(&self) -> Result<(), FollowerError> {
        self.follower.validate()?;
        if self.items.is_empty() {
            return Err(FollowerError::EmptyGroup);
        }
        self.items.iter().try_for_each(PdConfig::validate)
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, FollowerError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载并校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FollowerError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// 按配置顺序创建校正器
    pub fn correctors(&self) -> impl Iterator<Item = PdCorrector> + '_ {
        self.items.iter().copied().map(PdCorrector::new)
    }
}
