// Shared test helpers: scripted fake agent CLI and canned agent output

#![allow(dead_code)]

use bondwatch::agent::AgentCli;
use bondwatch::config::AppConfig;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::time::Duration;

/// One connected adapter at 20ms / 2ms / MOS 4.5 / no loss.
pub const HEALTHY_STATS: &str = r#"["state", {"state": "CONNECTED"}]

["connection_stats", {"connections": [
  {"adapterID": "eth0", "protocol": "udp", "connected": true,
   "latencyMs": 20, "jitterMs": 2, "mos": 4.5, "lossSend": 0, "lossReceive": 0,
   "receiveBps": 1000, "sendBps": 500, "totalBps": 1500}
]}]

["session_stats", {"total": {"totalConnectedMinutes": 90, "bytesReceived": 1048576,
  "bytesSent": 1024, "numFailovers": 2, "maxDownloadSpeed": 12.3456, "maxUploadSpeed": 3.3}}]

["streaming_stats", {"bondingMode": "streaming", "badCpu": false, "badLatency": true,
  "badLoss": false, "badMemory": false}]

["adapters", [{"adapterID": "eth0", "name": "Ethernet", "type": "Ethernet", "isp": "Acme",
  "state": "connected", "workingPriority": "always",
  "dataUsage": {"usageDaily": 2048, "usageMonthly": 1073741824}}]]
"#;

pub const SPEED_SETTINGS: &str = r#"{"bondingMode": "speed", "encrypted": true}"#;

pub const CURRENT_SERVER: &str =
    r#"{"friendlyName": "Frankfurt, Germany #3", "publicIP": ["203.0.113.7", "203.0.113.8"]}"#;

/// A `sh` script standing in for the agent CLI. Replies, exit codes and delays
/// are read from files next to it; every invocation is appended to `calls.log`.
///
/// Commands map to reply names: `stats 1` -> `stats`, `show <x>` -> `<x>`, `mode <m>` -> `mode`.
pub struct FakeAgent {
    dir: TempDir,
    script: PathBuf,
}

const SCRIPT: &str = r#"
DIR='__DIR__'
echo "$*" >> "$DIR/calls.log"
case "$1" in
  stats) name=stats ;;
  show) name="$2" ;;
  mode) name=mode ;;
  *) echo "unknown command: $1" >&2; exit 2 ;;
esac
if [ -f "$DIR/$name.sleep" ]; then sleep "$(cat "$DIR/$name.sleep")"; fi
if [ -f "$DIR/$name.out" ]; then cat "$DIR/$name.out"; fi
if [ -f "$DIR/$name.err" ]; then cat "$DIR/$name.err" >&2; fi
if [ -f "$DIR/$name.code" ]; then exit "$(cat "$DIR/$name.code")"; fi
exit 0
"#;

impl FakeAgent {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("agent.sh");
        let body = SCRIPT.replace("__DIR__", dir.path().to_str().unwrap());
        std::fs::write(&script, body).unwrap();
        Self { dir, script }
    }

    /// Agent that reports [`HEALTHY_STATS`], [`SPEED_SETTINGS`] and [`CURRENT_SERVER`].
    pub fn healthy() -> Self {
        let agent = Self::new();
        agent
            .respond("stats", HEALTHY_STATS)
            .respond("settings", SPEED_SETTINGS)
            .respond("currentserver", CURRENT_SERVER);
        agent
    }

    pub fn respond(&self, name: &str, stdout: &str) -> &Self {
        self.write(name, "out", stdout);
        self
    }

    pub fn fail(&self, name: &str, code: i32, stderr: &str) -> &Self {
        self.write(name, "err", stderr);
        self.write(name, "code", &code.to_string());
        self
    }

    pub fn delay(&self, name: &str, secs: u64) -> &Self {
        self.write(name, "sleep", &secs.to_string());
        self
    }

    pub fn cli(&self, timeout_secs: u64) -> AgentCli {
        AgentCli::new(
            "sh",
            vec![self.script.to_str().unwrap().to_string()],
            Duration::from_secs(timeout_secs),
        )
    }

    /// Config pointing `[agent]` at this script.
    pub fn app_config(&self, status_ttl_ms: u64) -> AppConfig {
        let toml = format!(
            r#"
[server]
port = 5000
host = "127.0.0.1"

[agent]
cli_path = "sh"
cli_args = ["{}"]
timeout_secs = 5

[cache]
status_ttl_ms = {}
server_ttl_ms = {}
"#,
            self.script.display(),
            status_ttl_ms,
            status_ttl_ms
        );
        AppConfig::load_from_str(&toml).unwrap()
    }

    /// Invocations so far, one argument string per call.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn call_count(&self, args: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == args).count()
    }

    fn write(&self, name: &str, ext: &str, contents: &str) {
        std::fs::write(self.dir.path().join(format!("{name}.{ext}")), contents).unwrap();
    }
}
