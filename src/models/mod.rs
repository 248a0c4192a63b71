// Domain models: raw agent sections in, dashboard view out

mod agent;
mod dashboard;
mod lenient;
mod mode;

pub use agent::{
    AgentSettings, AgentState, CurrentServer, DataUsage, RawAdapter, RawConnection,
    SessionSection, SessionTotals, StreamingStats,
};
pub use dashboard::{
    AdapterView, BadIndicators, ConnectionView, DashboardView, DataUsageView, OverallBlock,
    PerformanceBlock, ServerInfo, SessionBlock,
};
pub use mode::BondingMode;
