//! S 曲线轨迹跟随器
//!
//! 让旋转电机（或一组协同运动的电机）沿加加速度受限的 S 曲线运动到目标角度。
//! 每个控制周期，曲线速度作为前馈，PD 校正器消除残余位置误差，
//! 两者相加后以 rpm 写入电机的速度环。
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **曲线层** (`scurve_profile`): 运动学限制、规划请求、七段 S 曲线合成
//! - **单位** (`units`): deg/s 与 rpm 的 NewType
//! - **执行器** (`actuator`): 电机速度控制接口
//! - **校正器** (`corrector`): 位置误差 PD
//! - **运动学来源** (`source`): 单电机 / 电机组（平均共识）
//! - **跟随器** (`follower`): 生命周期、重新规划、每周期更新
//!
//! # 快速开始
//!
//! ```rust
//! use scurve_follower::prelude::*;
//! ```
//!
//! 单电机使用 [`AxisFollower`]，多电机使用 [`GroupFollower`]；
//! 二者是同一个泛型 [`Follower`] 的别名。

pub mod actuator;
pub mod config;
pub mod corrector;
pub mod error;
pub mod follower;
pub mod hooks;
pub mod logging;
pub mod source;
pub mod units;

// Prelude 模块
pub mod prelude;

pub use config::{AxisConfig, FollowerConfig, GroupConfig};
pub use error::FollowerError;
pub use follower::{AxisFollower, Follower, GroupFollower};
pub use hooks::{TickObserver, TickSample};
pub use source::{Actuation, Channel, ChannelGroup, KinematicSource};
pub use units::{Dps, Rpm};

// 曲线层常用类型
pub use scurve_profile::{Curve, KinematicLimits, PlanError, PlanRequest, SCurveProfile};
