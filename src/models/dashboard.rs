// Wire format of GET /api/status and GET /api/server

use serde::{Deserialize, Serialize};

use crate::telemetry::HealthStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub overall: OverallBlock,
    pub performance: PerformanceBlock,
    pub session: SessionBlock,
    pub adapters: Vec<AdapterView>,
    pub connections: Vec<ConnectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallBlock {
    pub state: String,
    pub status: HealthStatus,
    /// 0-100, derived from the same issue points as `status`.
    pub health_score: u8,
    pub bonding_mode: String,
    pub bad_indicators: BadIndicators,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadIndicators {
    pub bad_cpu: bool,
    pub bad_latency: bool,
    pub bad_loss: bool,
    pub bad_memory: bool,
}

/// Averages over connections with a positive latency. Loss is in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBlock {
    pub latency: f64,
    pub jitter: f64,
    pub mos: f64,
    pub loss_send: f64,
    pub loss_receive: f64,
    pub active_connections: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBlock {
    pub uptime: String,
    pub bytes_received: String,
    pub bytes_sent: String,
    pub failovers: u64,
    pub max_download_speed: f64,
    pub max_upload_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterView {
    #[serde(rename = "adapterID")]
    pub adapter_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub isp: String,
    pub state: String,
    pub working_priority: String,
    /// `good` when connected, `bad` otherwise.
    pub status: HealthStatus,
    pub data_usage: DataUsageView,
    pub connection_stats: Option<ConnectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataUsageView {
    pub daily: String,
    pub monthly: String,
}

/// Live detail for one connected path. Loss stays a fraction here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionView {
    #[serde(rename = "adapterID")]
    pub adapter_id: String,
    pub protocol: String,
    pub latency: f64,
    pub jitter: f64,
    pub mos: f64,
    pub loss_send: f64,
    pub loss_receive: f64,
    pub status: HealthStatus,
    #[serde(rename = "healthScore")]
    pub health_score: u8,
    #[serde(rename = "receiveBps")]
    pub receive_bps: f64,
    #[serde(rename = "sendBps")]
    pub send_bps: f64,
    #[serde(rename = "totalBps")]
    pub total_bps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub location: String,
    #[serde(rename = "publicIP")]
    pub public_ip: String,
}

impl ServerInfo {
    pub const CLI_ERROR: &'static str = "CLI Error";
    pub const PARSE_ERROR: &'static str = "Parse Error";
    pub const ERROR: &'static str = "Error";

    /// Placeholder payload used when the agent could not answer.
    pub fn degraded(sentinel: &str) -> Self {
        Self {
            location: sentinel.to_string(),
            public_ip: sentinel.to_string(),
        }
    }
}
