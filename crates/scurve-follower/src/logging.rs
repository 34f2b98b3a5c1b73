//! 日志初始化
//!
//! 库内部只使用 `tracing` 宏：
//!
//! - `trace!`: 每个控制周期
//! - `debug!`: 重新规划成功、停止、归零
//! - `warn!`: 规划失败（跟随器被强制停止）
//!
//! 应用程序可以自行安装 subscriber，也可以调用 [`init_logging`]。
//! 日志级别由 `RUST_LOG` 控制，例如 `RUST_LOG=scurve_follower=debug`。

use tracing_subscriber::EnvFilter;

/// 安装默认的 fmt subscriber
///
/// 已有全局 subscriber 时静默返回，可以重复调用。
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
