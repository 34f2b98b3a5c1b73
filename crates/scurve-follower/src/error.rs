//! 错误类型
//!
//! 运行期唯一的错误来源是曲线合成（[`PlanError`]），它由 `set_target()`
//! 直接返回；这里的 `FollowerError` 覆盖构造期和配置加载的失败。

use scurve_profile::PlanError;
use thiserror::Error;

/// 跟随器错误
#[derive(Debug, Error)]
pub enum FollowerError {
    /// 配置无效（更新周期为 0、限制非正等）
    #[error("Invalid follower config: {reason}")]
    InvalidConfig {
        /// 无效原因
        reason: String,
    },

    /// 电机组为空，无法求平均
    #[error("Actuator group must contain at least one channel")]
    EmptyGroup,

    /// 曲线规划错误
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// 配置文件解析错误
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// 配置文件读取错误
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FollowerError {
    /// 是否为配置类错误（重新构造前无法恢复）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FollowerError::InvalidConfig { .. }
                | FollowerError::EmptyGroup
                | FollowerError::Parse(_)
                | FollowerError::Io(_)
        )
    }
}
