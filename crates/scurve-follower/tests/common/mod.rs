//! 集成测试公共设施

#![allow(dead_code)]

pub mod helpers;
pub mod mock_actuator;
