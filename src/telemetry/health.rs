//! Three-tier link health from latency, jitter, MOS and loss.
//!
//! Each signal adds 0, 1 or 2 issue points independently:
//!
//! | Signal              | +1              | +2        |
//! |---------------------|-----------------|-----------|
//! | latency (ms)        | (50, 100]       | > 100     |
//! | jitter (ms)         | (10, 30]        | > 30      |
//! | MOS                 | [3.5, 4.0)      | < 3.5     |
//! | max loss (percent)  | (0, 1.0)        | >= 1.0    |
//!
//! 4+ points is `bad`, 2-3 is `warn`, otherwise `good`.
//!
//! Loss is compared in percent (`fraction * 100 >= 1.0`). Comparing the raw
//! fraction against 1.0 would leave any loss short of 100% at a single point.
//!
//! The numeric score costs [`POINT_PENALTY`] per point, so it spans 52..=100:
//! a link with measured MOS never scores 0, and a link whose only issues are
//! jitter and loss (at most 5 points once MOS rounds to 4.0) stays at 70 or above.

use serde::{Deserialize, Serialize};

/// Largest number of issue points the four signals can add up to.
pub const MAX_ISSUE_POINTS: u8 = 8;

/// Score lost per issue point.
pub const POINT_PENALTY: u8 = 6;

const WARN_POINTS: u8 = 2;
const BAD_POINTS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Warn,
    Bad,
}

impl HealthStatus {
    pub fn from_points(points: u8) -> Self {
        if points >= BAD_POINTS {
            HealthStatus::Bad
        } else if points >= WARN_POINTS {
            HealthStatus::Warn
        } else {
            HealthStatus::Good
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Warn => "warn",
            HealthStatus::Bad => "bad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthAssessment {
    pub points: u8,
    pub status: HealthStatus,
    pub score: u8,
}

/// Sum of issue points. Loss arguments are fractions in [0, 1].
pub fn issue_points(
    latency_ms: f64,
    jitter_ms: f64,
    mos: f64,
    loss_send: f64,
    loss_receive: f64,
) -> u8 {
    let latency = if latency_ms > 100.0 {
        2
    } else if latency_ms > 50.0 {
        1
    } else {
        0
    };

    let jitter = if jitter_ms > 30.0 {
        2
    } else if jitter_ms > 10.0 {
        1
    } else {
        0
    };

    let mos = if mos < 3.5 {
        2
    } else if mos < 4.0 {
        1
    } else {
        0
    };

    let loss_pct = loss_send.max(loss_receive) * 100.0;
    let loss = if loss_pct >= 1.0 {
        2
    } else if loss_pct > 0.0 {
        1
    } else {
        0
    };

    latency + jitter + mos + loss
}

/// 100 at zero points, 52 at [`MAX_ISSUE_POINTS`].
pub fn health_score(points: u8) -> u8 {
    100 - points.min(MAX_ISSUE_POINTS) * POINT_PENALTY
}

pub fn classify(
    latency_ms: f64,
    jitter_ms: f64,
    mos: f64,
    loss_send: f64,
    loss_receive: f64,
) -> HealthStatus {
    HealthStatus::from_points(issue_points(
        latency_ms,
        jitter_ms,
        mos,
        loss_send,
        loss_receive,
    ))
}

pub fn assess(
    latency_ms: f64,
    jitter_ms: f64,
    mos: f64,
    loss_send: f64,
    loss_receive: f64,
) -> HealthAssessment {
    let points = issue_points(latency_ms, jitter_ms, mos, loss_send, loss_receive);
    HealthAssessment {
        points,
        status: HealthStatus::from_points(points),
        score: health_score(points),
    }
}
