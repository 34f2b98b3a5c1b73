//! 执行器接口
//!
//! 跟随器不拥有电机，只通过句柄查询测量值、下发速度指令。
//! 所有方法都取 `&self`：真实的电机句柄通常是轻量的共享引用，
//! 内部状态由电机驱动自己管理。
//!
//! # 调用顺序
//!
//! 每个控制周期内，跟随器的 `update()` 必须先于电机自身的速度环更新：
//!
//! ```text
//! follower.update();   // 写入速度指令
//! motor.control();     // 速度环消费指令
//! ```
//!
//! 顺序颠倒会让指令整体滞后一个周期。

use crate::units::Rpm;
use std::rc::Rc;

/// 电机速度控制接口
pub trait Actuator {
    /// 测量位置（deg）
    fn measured_position(&self) -> f64;

    /// 测量速度（deg/s）
    fn measured_velocity(&self) -> f64;

    /// 设置速度指令
    fn set_velocity_command(&self, command: Rpm);

    /// 将电机内部的位置累计清零（重新归零）
    fn reset_position_reference(&self);
}

impl<T: Actuator + ?Sized> Actuator for &T {
    fn measured_position(&self) -> f64 {
        (**self).measured_position()
    }

    fn measured_velocity(&self) -> f64 {
        (**self).measured_velocity()
    }

    fn set_velocity_command(&self, command: Rpm) {
        (**self).set_velocity_command(command)
    }

    fn reset_position_reference(&self) {
        (**self).reset_position_reference()
    }
}

impl<T: Actuator + ?Sized> Actuator for Rc<T> {
    fn measured_position(&self) -> f64 {
        (**self).measured_position()
    }

    fn measured_velocity(&self) -> f64 {
        (**self).measured_velocity()
    }

    fn set_velocity_command(&self, command: Rpm) {
        (**self).set_velocity_command(command)
    }

    fn reset_position_reference(&self) {
        (**self).reset_position_reference()
    }
}
