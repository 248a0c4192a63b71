use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_cli_path")]
    pub cli_path: String,
    /// Fixed leading arguments placed before every command (e.g. when the CLI is wrapped by sudo).
    #[serde(default)]
    pub cli_args: Vec<String>,
    /// Upper bound for a single CLI invocation; the child is killed when exceeded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            cli_path: default_cli_path(),
            cli_args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_cli_path() -> String {
    "/usr/share/speedify/speedify_cli".into()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_ms")]
    pub status_ttl_ms: u64,
    #[serde(default = "default_ttl_ms")]
    pub server_ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            status_ttl_ms: default_ttl_ms(),
            server_ttl_ms: default_ttl_ms(),
        }
    }
}

fn default_ttl_ms() -> u64 {
    1500
}

/// Longest TTL accepted; anything above stops being "near real-time".
const MAX_TTL_MS: u64 = 60_000;

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.agent.cli_path.trim().is_empty(),
            "agent.cli_path must be non-empty"
        );
        anyhow::ensure!(
            self.agent.timeout_secs > 0,
            "agent.timeout_secs must be > 0, got {}",
            self.agent.timeout_secs
        );
        anyhow::ensure!(
            (1..=MAX_TTL_MS).contains(&self.cache.status_ttl_ms),
            "cache.status_ttl_ms must be between 1 and {}, got {}",
            MAX_TTL_MS,
            self.cache.status_ttl_ms
        );
        anyhow::ensure!(
            (1..=MAX_TTL_MS).contains(&self.cache.server_ttl_ms),
            "cache.server_ttl_ms must be between 1 and {}, got {}",
            MAX_TTL_MS,
            self.cache.server_ttl_ms
        );
        Ok(())
    }
}
