//! 运动学来源
//!
//! 单电机和多电机协同的差别只有两处：规划起点从哪里来、指令发给谁。
//! 把这两处抽成 trait 后，同一个 [`Follower`](crate::follower::Follower)
//! 即可服务两种场景：
//!
//! | 实现 | 规划起点 | 指令下发 |
//! |---|---|---|
//! | [`Channel`] | 电机自身测量值 | 单个校正器 + 单个电机 |
//! | [`ChannelGroup`] | 所有电机测量值的平均 | 每个电机独立校正 |
//!
//! # 共识状态
//!
//! 组的规划起点是虚拟的平均点，不对应任何一个真实电机。电机之间不同步时，
//! 曲线起点是折中结果，残余偏差交给各自的校正器在跟随过程中消除，
//! 不会触发重新规划。

use crate::actuator::Actuator;
use crate::corrector::Corrector;
use crate::error::FollowerError;
use crate::units::{Dps, Rpm};

/// 规划起点
pub trait KinematicSource {
    /// 共识位置（deg）
    fn consensus_position(&self) -> f64;

    /// 共识速度（deg/s）
    fn consensus_velocity(&self) -> f64;
}

/// 指令下发
pub trait Actuation: KinematicSource {
    /// 下发一个周期的指令
    ///
    /// 每个电机：`command = feedforward + corrector(target, measured)`，
    /// 换算为 rpm 后写入电机。
    fn drive(&mut self, feedforward: Dps, target_position: f64);

    /// 速度指令置零并清除校正器瞬态
    fn halt(&mut self);

    /// 电机位置参考归零
    fn rehome(&mut self);

    /// 电机数量
    fn channel_count(&self) -> usize;
}

/// 单个电机及其校正器
#[derive(Debug, Clone)]
pub struct Channel<A, P> {
    actuator: A,
    corrector: P,
}

impl<A: Actuator, P: Corrector> Channel<A, P> {
    /// 创建通道
    pub fn new(actuator: A, corrector: P) -> Self {
        Self {
            actuator,
            corrector,
        }
    }

    /// 电机句柄
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// 校正器
    pub fn corrector(&self) -> &P {
        &self.corrector
    }

    /// 计算本通道的速度指令并写入电机
    fn command(&mut self, feedforward: Dps, target_position: f64) {
        let feedback = self.actuator.measured_position();
        let correction = Dps(self.corrector.compute(target_position, feedback));
        self.actuator.set_velocity_command((feedforward + correction).to_rpm());
    }

    fn halt(&mut self) {
        self.actuator.set_velocity_command(Rpm::ZERO);
        self.corrector.clear();
    }
}

impl<A: Actuator, P: Corrector> KinematicSource for Channel<A, P> {
    fn consensus_position(&self) -> f64 {
        self.actuator.measured_position()
    }

    fn consensus_velocity(&self) -> f64 {
        self.actuator.measured_velocity()
    }
}

impl<A: Actuator, P: Corrector> Actuation for Channel<A, P> {
    fn drive(&mut self, feedforward: Dps, target_position: f64) {
        self.command(feedforward, target_position);
    }

    fn halt(&mut self) {
        Channel::halt(self);
    }

    fn rehome(&mut self) {
        self.actuator.reset_position_reference();
    }

    fn channel_count(&self) -> usize {
        1
    }
}

/// 借用的电机组
///
/// 长度在构造时固定（至少 1 个），生命周期内不会增删。
#[derive(Debug)]
pub struct ChannelGroup<'a, A, P> {
    channels: &'a mut [Channel<A, P>],
}

impl<'a, A: Actuator, P: Corrector> ChannelGroup<'a, A, P> {
    /// 借用一组通道
    ///
    /// # 错误
    ///
    /// 空切片返回 [`FollowerError::EmptyGroup`]。
    pub fn new(channels: &'a mut [Channel<A, P>]) -> Result<Self, FollowerError> {
        if channels.is_empty() {
            return Err(FollowerError::EmptyGroup);
        }
        Ok(Self { channels })
    }

    /// 只读访问所有通道
    pub fn channels(&self) -> &[Channel<A, P>] {
        &*self.channels
    }

    fn mean(&self, measure: impl Fn(&A) -> f64) -> f64 {
        let sum: f64 = self.channels.iter().map(|c| measure(&c.actuator)).sum();
        sum / self.channels.len() as f64
    }
}

impl<A: Actuator, P: Corrector> KinematicSource for ChannelGroup<'_, A, P> {
    fn consensus_position(&self) -> f64 {
        self.mean(A::measured_position)
    }

    fn consensus_velocity(&self) -> f64 {
        self.mean(A::measured_velocity)
    }
}

impl<A: Actuator, P: Corrector> Actuation for ChannelGroup<'_, A, P> {
    fn drive(&mut self, feedforward: Dps, target_position: f64) {
        for channel in self.channels.iter_mut() {
            channel.command(feedforward, target_position);
        }
    }

    fn halt(&mut self) {
        self.channels.iter_mut().for_each(Channel::halt);
    }

    fn rehome(&mut self) {
        for channel in self.channels.iter() {
            channel.actuator.reset_position_reference();
        }
    }

    fn channel_count(&self) -> usize {
        self.channels.len()
    }
}
