//! S 曲线（加加速度受限）轨迹
//!
//! 从任意起始状态 `(p0, v0, a0)` 规划到目标位置并静止（`v = 0, a = 0`）。
//!
//! # 结构
//!
//! 曲线由最多 7 段恒定加加速度的多项式段组成，内联存储，不做堆分配：
//!
//! ```text
//! [速度变换: 起始状态 -> vp] [匀速: vp] [速度变换: vp -> 0]
//!        (≤ 3 段)              (≤ 1 段)       (≤ 3 段)
//! ```
//!
//! 每个"速度变换"块都是梯形（或三角形）加速度曲线，结束时加速度为 0：
//!
//! ```text
//! a(t)   ┌──────┐
//!       /        \        升 -> 保持 -> 降
//! ─────/          \─────
//! ```
//!
//! # 峰值速度
//!
//! - 距离足够时 `vp = ±v_max`，中间插入匀速段
//! - 否则对 `vp ∈ [-v_max, v_max]` 二分搜索，使终点恰好落在目标上
//!
//! 起始速度过大（刹不住）时 `vp` 会与行进方向相反，曲线先越过目标再折返。
//!
//! # 起始状态
//!
//! 第一个块从起始加速度开始变化，速度在加速度回零之前会先到达
//! `settled_velocity`。起始状态必经速度 `max(|v0|, |settled|)`：
//!
//! - 不超过 `v_max`：全程 `|v| <= v_max`
//! - 超过 `v_max` 但在 `max_start_speed()` 以内：第一个块把速度刹回 `v_max` 以内
//! - 超出容限：`StartVelocityExceedsLimit` / `StartStateInfeasible`

use crate::curve::{Curve, KinematicState, PlanRequest};
use crate::error::PlanError;
use crate::limits::KinematicLimits;

/// 最大分段数：3 + 1 + 3
const MAX_SEGMENTS: usize = 7;

/// 起始状态与限制比较时允许的相对浮点余量
const LIMIT_SLACK: f64 = 1e-9;

/// 峰值速度二分搜索深度
const BISECTION_DEPTH: usize = 200;

/// 终点残差容限（相对于运动距离）
const POSITION_TOLERANCE: f64 = 1e-6;

/// 恒定加加速度段
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Segment {
    /// 段起始时刻（相对曲线起点）
    start_time: f64,
    /// 段时长
    duration: f64,
    /// 段起始状态
    start: KinematicState,
    /// 加加速度
    jerk: f64,
}

impl Segment {
    /// 段内相对时刻 `dt` 的状态
    fn state_at(&self, dt: f64) -> KinematicState {
        let KinematicState {
            position: p,
            velocity: v,
            acceleration: a,
        } = self.start;
        let j = self.jerk;

        KinematicState {
            position: p + dt * (v + dt * (a / 2.0 + dt * j / 6.0)),
            velocity: v + dt * (a + dt * j / 2.0),
            acceleration: a + dt * j,
        }
    }

    fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}

/// 分段构造器
#[derive(Debug, Clone, Copy)]
struct SegmentChain {
    segments: [Segment; MAX_SEGMENTS],
    len: usize,
    time: f64,
    state: KinematicState,
}

impl SegmentChain {
    fn new(start: KinematicState) -> Self {
        Self {
            segments: [Segment::default(); MAX_SEGMENTS],
            len: 0,
            time: 0.0,
            state: start,
        }
    }

    /// 追加一段；时长为 0（或非正）的段直接跳过
    fn push(&mut self, duration: f64, jerk: f64) {
        if duration.is_nan() || duration <= 0.0 || self.len == MAX_SEGMENTS {
            return;
        }

        let segment = Segment {
            start_time: self.time,
            duration,
            start: self.state,
            jerk,
        };
        self.segments[self.len] = segment;
        self.len += 1;
        self.time += duration;
        self.state = segment.state_at(duration);
    }

    /// 追加一个速度变换块：当前 `(v, a)` -> `(v_target, 0)`
    ///
    /// 以变换方向 `s` 归一化后：加速度先以 `+j` 从 `a` 升到峰值 `P`，
    /// 保持一段时间，再以 `-j` 降到 0。速度增量为
    /// `(2P² - a²) / (2j) + P * t_hold`。
    fn push_velocity_change(&mut self, v_target: f64, limits: &KinematicLimits) {
        let KinematicLimits { a_max, j_max, .. } = *limits;
        let v = self.state.velocity;
        let a = self.state.acceleration;

        // 加速度直接回零后到达的速度，决定变换方向
        let v_settled = self.state.settled_velocity(j_max);
        let s = (v_target - v_settled).signum();

        let a_n = s * a;
        let dv = s * (v_target - v);

        let mut peak = ((2.0 * j_max * dv + a_n * a_n) / 2.0).max(0.0).sqrt();
        let mut hold = 0.0;
        if peak > a_max {
            peak = a_max;
            hold = (dv - (2.0 * a_max * a_max - a_n * a_n) / (2.0 * j_max)) / a_max;
        }

        self.push((peak - a_n) / j_max, s * j_max);
        self.push(hold, 0.0);
        self.push(peak / j_max, -s * j_max);

        // 消除累积的浮点误差，块边界处速度、加速度精确
        self.state.velocity = v_target;
        self.state.acceleration = 0.0;
    }
}

/// 加加速度受限的 S 曲线
///
/// 由 [`Curve::synthesize`] 生成，之后只读。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SCurveProfile {
    segments: [Segment; MAX_SEGMENTS],
    len: usize,
    total_duration: f64,
    end: KinematicState,
}

impl Default for SCurveProfile {
    fn default() -> Self {
        Self::empty()
    }
}

impl SCurveProfile {
    /// 有效分段数（不含时长为 0 的段）
    pub fn segment_count(&self) -> usize {
        self.len
    }

    /// 终点状态
    pub fn end_state(&self) -> KinematicState {
        self.end
    }

    /// 是否为空曲线
    pub fn is_empty(&self) -> bool {
        self.len == 0 && self.end == KinematicState::default()
    }

    fn from_chain(chain: SegmentChain) -> Self {
        Self {
            segments: chain.segments,
            len: chain.len,
            total_duration: chain.time,
            end: chain.state,
        }
    }

    fn locate(&self, t: f64) -> KinematicState {
        if self.len == 0 || t >= self.total_duration {
            return self.end;
        }
        if t <= 0.0 {
            return self.segments[0].start;
        }

        self.segments[..self.len]
            .iter()
            .find(|segment| t < segment.end_time())
            .map(|segment| segment.state_at(t - segment.start_time))
            .unwrap_or(self.end)
    }
}

/// 校验起始量不超过限制，微小的浮点越界钳位到限制上
fn check_start(value: f64, limit: f64) -> Option<f64> {
    if value.abs() > limit * (1.0 + LIMIT_SLACK) {
        None
    } else {
        Some(value.clamp(-limit, limit))
    }
}

/// 起始速度：浮点越界钳位，容限内原样保留（曲线负责刹回），超出容限报错
fn check_start_velocity(velocity: f64, limits: &KinematicLimits) -> Result<f64, PlanError> {
    if let Some(clamped) = check_start(velocity, limits.v_max) {
        return Ok(clamped);
    }
    let limit = limits.max_start_speed();
    if velocity.abs() > limit * (1.0 + LIMIT_SLACK) {
        return Err(PlanError::StartVelocityExceedsLimit { velocity, limit });
    }
    Ok(velocity)
}

fn plan(request: &PlanRequest, limits: &KinematicLimits) -> Result<SegmentChain, PlanError> {
    limits.validate()?;
    request.check_finite()?;

    let start_velocity = check_start_velocity(request.start_velocity, limits)?;
    let start_acceleration = check_start(request.start_acceleration, limits.a_max).ok_or(
        PlanError::StartAccelerationExceedsLimit {
            acceleration: request.start_acceleration,
            limit: limits.a_max,
        },
    )?;

    let start = KinematicState {
        position: request.start_position,
        velocity: start_velocity,
        acceleration: start_acceleration,
    };

    let settled_velocity = start.settled_velocity(limits.j_max);
    let limit = limits.max_start_speed();
    if settled_velocity.abs() > limit * (1.0 + LIMIT_SLACK) {
        return Err(PlanError::StartStateInfeasible {
            settled_velocity,
            limit,
        });
    }

    let target = request.target_position;
    let v_max = limits.v_max;

    // 以峰值速度 peak 走完两个速度变换块（不含匀速段）
    let reach = |peak: f64| {
        let mut chain = SegmentChain::new(start);
        chain.push_velocity_change(peak, limits);
        chain.push_velocity_change(0.0, limits);
        chain
    };
    let cruise = |peak: f64, duration: f64| {
        let mut chain = SegmentChain::new(start);
        chain.push_velocity_change(peak, limits);
        chain.push(duration, 0.0);
        chain.push_velocity_change(0.0, limits);
        chain
    };

    let upper = reach(v_max);
    if target >= upper.state.position {
        return Ok(cruise(v_max, (target - upper.state.position) / v_max));
    }

    let lower = reach(-v_max);
    if target <= lower.state.position {
        return Ok(cruise(-v_max, (lower.state.position - target) / v_max));
    }

    // 不变式：reach(lo) < target <= reach(hi)
    let (mut lo, mut hi) = (-v_max, v_max);
    let mut best = upper;
    for _ in 0..BISECTION_DEPTH {
        let mid = 0.5 * (lo + hi);
        let chain = reach(mid);
        best = chain;

        if chain.state.position == target || hi - lo <= f64::EPSILON * v_max {
            break;
        }
        if chain.state.position < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let residual = target - best.state.position;
    let distance = (target - request.start_position).abs();
    if residual.abs() > POSITION_TOLERANCE * (1.0 + distance) {
        return Err(PlanError::NotConverged { residual });
    }

    Ok(best)
}

impl Curve for SCurveProfile {
    fn synthesize(request: &PlanRequest, limits: &KinematicLimits) -> Result<Self, PlanError> {
        plan(request, limits).map(Self::from_chain)
    }

    fn empty() -> Self {
        Self {
            segments: [Segment::default(); MAX_SEGMENTS],
            len: 0,
            total_duration: 0.0,
            end: KinematicState::default(),
        }
    }

    fn total_duration(&self) -> f64 {
        self.total_duration
    }

    fn position(&self, t: f64) -> f64 {
        self.locate(t).position
    }

    fn velocity(&self, t: f64) -> f64 {
        self.locate(t).velocity
    }

    fn acceleration(&self, t: f64) -> f64 {
        self.locate(t).acceleration
    }

    fn state(&self, t: f64) -> KinematicState {
        self.locate(t)
    }
}
