// Gateway to the bonding agent CLI. Every call is a bounded subprocess; failures
// are returned as AgentError and degraded by the callers, never propagated as panics.

pub mod sections;

use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{Duration, timeout};
use tracing::{instrument, warn};

use crate::config::AgentConfig;
use crate::error::{AgentError, ModeError};
use crate::models::{AgentSettings, BondingMode, CurrentServer, DashboardView, ServerInfo};
use crate::telemetry;
use sections::{AgentSections, SectionMap, parse_sections};

const STATS_ARGS: [&str; 2] = ["stats", "1"];
const SETTINGS_ARGS: [&str; 2] = ["show", "settings"];
const CURRENT_SERVER_ARGS: [&str; 2] = ["show", "currentserver"];

pub struct AgentCli {
    program: String,
    base_args: Vec<String>,
    timeout: Duration,
}

impl AgentCli {
    pub fn new(program: impl Into<String>, base_args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            base_args,
            timeout,
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            config.cli_path.clone(),
            config.cli_args.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Run the CLI with `args` and return its stdout. The child is killed if it outlives the timeout.
    #[instrument(skip(self), fields(program = %self.program))]
    pub async fn run(&self, args: &[&str]) -> Result<String, AgentError> {
        let child = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(AgentError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            return Err(AgentError::NonZeroExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// `stats 1`, split into named sections.
    pub async fn stats(&self) -> Result<SectionMap, AgentError> {
        let stdout = self.run(&STATS_ARGS).await?;
        Ok(parse_sections(stdout.trim()))
    }

    /// `show settings`.
    pub async fn settings(&self) -> Result<AgentSettings, AgentError> {
        let stdout = self.run(&SETTINGS_ARGS).await?;
        Ok(serde_json::from_str(stdout.trim())?)
    }

    /// `show currentserver`.
    pub async fn current_server(&self) -> Result<CurrentServer, AgentError> {
        let stdout = self.run(&CURRENT_SERVER_ARGS).await?;
        Ok(serde_json::from_str(stdout.trim())?)
    }

    /// `mode <mode>`.
    pub async fn set_mode(&self, mode: BondingMode) -> Result<(), AgentError> {
        self.run(&["mode", mode.as_str()]).await.map(|_| ())
    }

    /// Stats and settings are fetched concurrently; either failing only degrades the view.
    pub async fn fetch_status(&self) -> DashboardView {
        let (stats, settings) = tokio::join!(self.stats(), self.settings());

        let sections = match stats {
            Ok(map) => AgentSections::from_map(&map),
            Err(e) => {
                warn!(error = %e, operation = "stats", "agent stats unavailable");
                AgentSections::default()
            }
        };
        let settings = match settings {
            Ok(s) => Some(s),
            Err(e) => {
                warn!(error = %e, operation = "show_settings", "agent settings unavailable");
                None
            }
        };

        telemetry::aggregate(&sections, settings.as_ref())
    }

    /// Location and public IP of the current server, or sentinel strings on failure.
    pub async fn fetch_server_info(&self) -> ServerInfo {
        match self.current_server().await {
            Ok(server) => ServerInfo {
                location: server.friendly_name.unwrap_or_else(|| "Unknown".into()),
                public_ip: server
                    .public_ip
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| "Unknown".into()),
            },
            Err(e) => {
                warn!(error = %e, operation = "show_currentserver", "server info unavailable");
                ServerInfo::degraded(match e {
                    AgentError::NonZeroExit { .. } => ServerInfo::CLI_ERROR,
                    AgentError::MalformedOutput(_) => ServerInfo::PARSE_ERROR,
                    _ => ServerInfo::ERROR,
                })
            }
        }
    }

    /// Validate `requested` and forward it to the agent. Invalid input never reaches the CLI.
    pub async fn change_mode(&self, requested: &str) -> Result<BondingMode, ModeError> {
        let mode: BondingMode = requested.parse()?;
        self.set_mode(mode).await.map_err(|e| {
            warn!(error = %e, mode = %mode, operation = "mode", "mode change failed");
            ModeError::Command(e)
        })?;
        tracing::info!(mode = %mode, "bonding mode changed");
        Ok(mode)
    }
}
