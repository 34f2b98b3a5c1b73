//! # scurve-profile - 加加速度受限（S 曲线）轨迹
//!
//! 本 crate 是轨迹跟随器的最底层，只做纯计算，不涉及任何硬件或 I/O：
//!
//! - `limits` - 运动学限制（速度 / 加速度 / 加加速度）
//! - `curve` - 曲线能力接口（`Curve` trait）与规划请求
//! - `scurve` - 具体实现 `SCurveProfile`
//! - `error` - 规划错误
//!
//! # 单位约定
//!
//! 位置为度（deg），速度为 deg/s，加速度为 deg/s²，加加速度为 deg/s³，时间为秒。
//!
//! # 示例
//!
//! ```rust
//! use scurve_profile::{Curve, KinematicLimits, PlanRequest, SCurveProfile};
//!
//! let limits = KinematicLimits::new(180.0, 360.0, 720.0);
//! let request = PlanRequest::from_rest(0.0, 90.0);
//! let profile = SCurveProfile::synthesize(&request, &limits).unwrap();
//!
//! assert!(profile.total_duration() > 0.0);
//! assert!((profile.position(profile.total_duration()) - 90.0).abs() < 1e-6);
//! ```

pub mod curve;
pub mod error;
pub mod limits;
pub mod scurve;

// 重新导出常用类型
pub use curve::{Curve, KinematicState, PlanRequest};
pub use error::PlanError;
pub use limits::KinematicLimits;
pub use scurve::SCurveProfile;
