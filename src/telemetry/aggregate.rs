// Metrics aggregation: decoded agent sections + live settings -> dashboard view.
// Pure; everything it needs is passed in.

use crate::agent::sections::AgentSections;
use crate::models::{
    AdapterView, AgentSettings, BadIndicators, ConnectionView, DashboardView, DataUsageView,
    OverallBlock, PerformanceBlock, RawAdapter, RawConnection, SessionBlock, SessionTotals,
    StreamingStats,
};
use crate::telemetry::format::{bytes_from_f64, format_bytes, format_elapsed_minutes, round_to};
use crate::telemetry::health::{HealthStatus, assess};

const CONNECTED: &str = "connected";
const UNKNOWN_MODE: &str = "unknown";

/// Running sums over qualifying connections. MOS has its own counter because
/// unmeasured (0) MOS readings are left out of its average only.
#[derive(Debug, Default)]
struct LinkTotals {
    latency: f64,
    jitter: f64,
    loss_send: f64,
    loss_receive: f64,
    count: usize,
    mos: f64,
    mos_count: usize,
}

impl LinkTotals {
    fn add(&mut self, link: &ConnectionView) {
        self.latency += link.latency;
        self.jitter += link.jitter;
        self.loss_send += link.loss_send;
        self.loss_receive += link.loss_receive;
        self.count += 1;
        if link.mos > 0.0 {
            self.mos += link.mos;
            self.mos_count += 1;
        }
    }

    fn averages(&self) -> Averages {
        Averages {
            latency: mean(self.latency, self.count),
            jitter: mean(self.jitter, self.count),
            mos: mean(self.mos, self.mos_count),
            loss_send: mean(self.loss_send, self.count),
            loss_receive: mean(self.loss_receive, self.count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Averages {
    latency: f64,
    jitter: f64,
    mos: f64,
    loss_send: f64,
    loss_receive: f64,
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Build the full dashboard view. `settings` is `None` when `show settings` failed.
pub fn aggregate(sections: &AgentSections, settings: Option<&AgentSettings>) -> DashboardView {
    let connections = connection_views(&sections.connections);

    let mut totals = LinkTotals::default();
    for link in &connections {
        totals.add(link);
    }
    let avg = totals.averages();
    let overall_health = assess(
        avg.latency,
        avg.jitter,
        avg.mos,
        avg.loss_send,
        avg.loss_receive,
    );

    let overall = OverallBlock {
        state: sections.state.state.clone(),
        status: overall_health.status,
        health_score: overall_health.score,
        bonding_mode: bonding_mode(settings, &sections.streaming),
        bad_indicators: bad_indicators(&sections.streaming),
    };

    let performance = PerformanceBlock {
        latency: round_to(avg.latency, 1),
        jitter: round_to(avg.jitter, 1),
        mos: round_to(avg.mos, 2),
        loss_send: round_to(avg.loss_send * 100.0, 2),
        loss_receive: round_to(avg.loss_receive * 100.0, 2),
        active_connections: totals.count,
    };

    let adapters = sections
        .adapters
        .iter()
        .map(|a| adapter_view(a, &connections))
        .collect();

    DashboardView {
        overall,
        performance,
        session: session_block(&sections.session.total),
        adapters,
        connections,
    }
}

/// Connected links with a positive latency; a zero reading means the link has not warmed up.
pub fn connection_views(connections: &[RawConnection]) -> Vec<ConnectionView> {
    connections
        .iter()
        .filter(|c| c.connected && c.latency_ms > 0.0)
        .map(connection_view)
        .collect()
}

fn connection_view(c: &RawConnection) -> ConnectionView {
    let jitter = c.jitter_ms.max(0.0);
    let health = assess(c.latency_ms, jitter, c.mos, c.loss_send, c.loss_receive);
    ConnectionView {
        adapter_id: c.adapter_id.clone(),
        protocol: c.protocol.clone(),
        latency: c.latency_ms,
        jitter,
        mos: c.mos,
        loss_send: c.loss_send,
        loss_receive: c.loss_receive,
        status: health.status,
        health_score: health.score,
        receive_bps: c.receive_bps,
        send_bps: c.send_bps,
        total_bps: c.total_bps,
    }
}

/// Live settings win over the value embedded in `streaming_stats`.
pub fn bonding_mode(settings: Option<&AgentSettings>, streaming: &StreamingStats) -> String {
    settings
        .and_then(|s| s.bonding_mode.clone())
        .or_else(|| streaming.bonding_mode.clone())
        .unwrap_or_else(|| UNKNOWN_MODE.into())
}

fn bad_indicators(streaming: &StreamingStats) -> BadIndicators {
    BadIndicators {
        bad_cpu: streaming.bad_cpu,
        bad_latency: streaming.bad_latency,
        bad_loss: streaming.bad_loss,
        bad_memory: streaming.bad_memory,
    }
}

fn session_block(total: &SessionTotals) -> SessionBlock {
    SessionBlock {
        uptime: format_elapsed_minutes(total.total_connected_minutes),
        bytes_received: format_bytes(bytes_from_f64(total.bytes_received)),
        bytes_sent: format_bytes(bytes_from_f64(total.bytes_sent)),
        failovers: total.num_failovers,
        max_download_speed: round_to(total.max_download_speed, 2),
        max_upload_speed: round_to(total.max_upload_speed, 2),
    }
}

fn adapter_view(adapter: &RawAdapter, connections: &[ConnectionView]) -> AdapterView {
    let status = if adapter.state == CONNECTED {
        HealthStatus::Good
    } else {
        HealthStatus::Bad
    };
    AdapterView {
        adapter_id: adapter.adapter_id.clone(),
        name: adapter.name.clone(),
        type_: adapter.type_.clone(),
        isp: adapter.isp.clone(),
        state: adapter.state.clone(),
        working_priority: adapter.working_priority.clone(),
        status,
        data_usage: DataUsageView {
            daily: format_bytes(bytes_from_f64(adapter.data_usage.usage_daily)),
            monthly: format_bytes(bytes_from_f64(adapter.data_usage.usage_monthly)),
        },
        connection_stats: connections
            .iter()
            .find(|c| c.adapter_id == adapter.adapter_id)
            .cloned(),
    }
}
