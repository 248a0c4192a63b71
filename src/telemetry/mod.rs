// Pure telemetry pipeline: health scoring, formatting, aggregation

pub mod aggregate;
pub mod format;
pub mod health;

pub use aggregate::aggregate;
pub use health::{HealthAssessment, HealthStatus, assess, classify, health_score, issue_points};
