// Records decoded from the agent CLI. Every field has a default, and a null or
// mistyped field decodes to that default, so one bad value never costs the
// rest of a section.

use serde::{Deserialize, Deserializer};

use super::lenient;

/// `state` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentState {
    #[serde(default = "unknown_upper", deserialize_with = "text_unknown_upper")]
    pub state: String,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            state: unknown_upper(),
        }
    }
}

/// One entry of `connection_stats.connections`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConnection {
    #[serde(rename = "adapterID", default = "unknown", deserialize_with = "text_unknown")]
    pub adapter_id: String,
    #[serde(default = "unknown", deserialize_with = "text_unknown")]
    pub protocol: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub connected: bool,
    #[serde(default, deserialize_with = "lenient::number")]
    pub latency_ms: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub jitter_ms: f64,
    /// 0 means "not measured yet".
    #[serde(default, deserialize_with = "lenient::number")]
    pub mos: f64,
    /// Fraction in [0, 1].
    #[serde(default, deserialize_with = "lenient::number")]
    pub loss_send: f64,
    /// Fraction in [0, 1].
    #[serde(default, deserialize_with = "lenient::number")]
    pub loss_receive: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub receive_bps: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub send_bps: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_bps: f64,
}

/// `session_stats` section; only the cumulative `total` block is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionSection {
    #[serde(default, deserialize_with = "lenient::nested")]
    pub total: SessionTotals,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionTotals {
    #[serde(deserialize_with = "lenient::number")]
    pub total_connected_minutes: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub bytes_received: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub bytes_sent: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub num_failovers: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub max_download_speed: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub max_upload_speed: f64,
}

/// `streaming_stats` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamingStats {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub bonding_mode: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub bad_cpu: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub bad_latency: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub bad_loss: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub bad_memory: bool,
}

/// One entry of the `adapters` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdapter {
    #[serde(rename = "adapterID", default = "unknown", deserialize_with = "text_unknown")]
    pub adapter_id: String,
    #[serde(default = "unknown", deserialize_with = "text_unknown")]
    pub name: String,
    #[serde(rename = "type", default = "unknown", deserialize_with = "text_unknown")]
    pub type_: String,
    #[serde(default = "unknown_isp", deserialize_with = "text_unknown_isp")]
    pub isp: String,
    #[serde(default = "unknown_lower", deserialize_with = "text_unknown_lower")]
    pub state: String,
    #[serde(default = "unknown_lower", deserialize_with = "text_unknown_lower")]
    pub working_priority: String,
    #[serde(default, deserialize_with = "lenient::nested")]
    pub data_usage: DataUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataUsage {
    #[serde(deserialize_with = "lenient::number")]
    pub usage_daily: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub usage_monthly: f64,
}

/// Reply of `show settings`; only the live bonding mode matters here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentSettings {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub bonding_mode: Option<String>,
}

/// Reply of `show currentserver`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentServer {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub friendly_name: Option<String>,
    #[serde(rename = "publicIP", deserialize_with = "lenient::text_list")]
    pub public_ip: Vec<String>,
}

fn unknown() -> String {
    "Unknown".into()
}

fn unknown_upper() -> String {
    "UNKNOWN".into()
}

fn unknown_lower() -> String {
    "unknown".into()
}

fn unknown_isp() -> String {
    "Unknown ISP".into()
}

fn text_unknown<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient::text_or(d, unknown)
}

fn text_unknown_upper<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient::text_or(d, unknown_upper)
}

fn text_unknown_lower<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient::text_or(d, unknown_lower)
}

fn text_unknown_isp<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient::text_or(d, unknown_isp)
}
