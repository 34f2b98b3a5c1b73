//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use scurve_follower::prelude::*;
//! ```

// 跟随器
pub use crate::follower::{AxisFollower, Follower, GroupFollower};
pub use crate::source::{Actuation, Channel, ChannelGroup, KinematicSource};

// 电机与校正器（常用 Trait）
pub use crate::actuator::Actuator;
pub use crate::corrector::{Corrector, PdConfig, PdCorrector};

// 配置与单位
pub use crate::config::{AxisConfig, FollowerConfig, GroupConfig};
pub use crate::units::{Dps, Rpm};

// 曲线层
pub use scurve_profile::{Curve, KinematicLimits, PlanRequest, SCurveProfile};

// 错误类型
pub use crate::error::FollowerError;
pub use scurve_profile::PlanError;
