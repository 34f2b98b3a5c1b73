//! 速度单位
//!
//! 曲线与前馈使用 deg/s，电机速度指令使用 rpm。使用 NewType 区分两者，
//! 换算只在跟随器与执行器的边界处发生一次：
//!
//! ```text
//! rpm = dps / 360 * 60
//! ```
//!
//! # 示例
//!
//! ```rust
//! use scurve_follower::units::{Dps, Rpm};
//!
//! let speed = Dps(360.0);
//! assert_eq!(speed.to_rpm(), Rpm(60.0));
//!
//! // 类型安全：以下代码无法编译
//! // let _ = Dps(1.0) + Rpm(1.0);  // ❌ 类型不匹配
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 度每秒（NewType）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dps(pub f64);

/// 转每分钟（NewType）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rpm(pub f64);

impl Dps {
    /// 零速度
    pub const ZERO: Self = Dps(0.0);

    /// 转换为 rpm
    #[inline]
    pub fn to_rpm(self) -> Rpm {
        Rpm(self.0 / 360.0 * 60.0)
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Rpm {
    /// 零速度
    pub const ZERO: Self = Rpm(0.0);

    /// 转换为 deg/s
    #[inline]
    pub fn to_dps(self) -> Dps {
        Dps(self.0 / 60.0 * 360.0)
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} deg/s", self.0)
    }
}

impl fmt::Display for Rpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} rpm", self.0)
    }
}

// 运算符重载（两种单位相同，用宏生成）
macro_rules! impl_speed_ops {
    ($unit:ident) => {
        impl Add for $unit {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $unit(self.0 + rhs.0)
            }
        }

        impl Sub for $unit {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $unit(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $unit {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f64) -> Self {
                $unit(self.0 * rhs)
            }
        }

        impl Neg for $unit {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                $unit(-self.0)
            }
        }
    };
}

impl_speed_ops!(Dps);
impl_speed_ops!(Rpm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dps_to_rpm() {
        assert_eq!(Dps(360.0).to_rpm(), Rpm(60.0));
        assert_eq!(Dps(6.0).to_rpm(), Rpm(1.0));
        assert_eq!(Dps(-180.0).to_rpm(), Rpm(-30.0));
        assert_eq!(Dps::ZERO.to_rpm(), Rpm::ZERO);
    }

    #[test]
    fn test_rpm_to_dps() {
        assert_eq!(Rpm(60.0).to_dps(), Dps(360.0));
        assert!((Rpm(1.5).to_dps().0 - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Dps(10.0) + Dps(5.0), Dps(15.0));
        assert_eq!(Dps(10.0) - Dps(5.0), Dps(5.0));
        assert_eq!(Dps(10.0) * 2.0, Dps(20.0));
        assert_eq!(-Rpm(3.0), Rpm(-3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dps(1.0)), "1.000 deg/s");
        assert_eq!(format!("{}", Rpm(2.5)), "2.500 rpm");
    }
}
