//! Mock 执行器
//!
//! 理想速度环：速度立即等于指令，位置按控制周期积分。

use scurve_follower::actuator::Actuator;
use scurve_follower::units::Rpm;
use std::cell::Cell;

/// 模拟电机
#[derive(Debug, Default)]
pub struct MockActuator {
    position: Cell<f64>,
    velocity: Cell<f64>,
    command: Cell<Rpm>,
    commands_received: Cell<u64>,
    resets: Cell<u32>,
}

impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定初始位置（deg）
    pub fn at(position: f64) -> Self {
        let motor = Self::default();
        motor.position.set(position);
        motor
    }

    /// 指定初始位置（deg）和速度（deg/s）
    pub fn moving(position: f64, velocity: f64) -> Self {
        let motor = Self::at(position);
        motor.velocity.set(velocity);
        motor
    }

    /// 推进一个控制周期（速度环消费指令）
    pub fn step(&self, dt: f64) {
        let velocity = self.command.get().to_dps().value();
        self.velocity.set(velocity);
        self.position.set(self.position.get() + velocity * dt);
    }

    pub fn position(&self) -> f64 {
        self.position.get()
    }

    pub fn command(&self) -> Rpm {
        self.command.get()
    }

    pub fn commands_received(&self) -> u64 {
        self.commands_received.get()
    }

    pub fn resets(&self) -> u32 {
        self.resets.get()
    }
}

impl Actuator for MockActuator {
    fn measured_position(&self) -> f64 {
        self.position.get()
    }

    fn measured_velocity(&self) -> f64 {
        self.velocity.get()
    }

    fn set_velocity_command(&self, command: Rpm) {
        self.command.set(command);
        self.commands_received.set(self.commands_received.get() + 1);
    }

    fn reset_position_reference(&self) {
        self.resets.set(self.resets.get() + 1);
        self.position.set(0.0);
    }
}
