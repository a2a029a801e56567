/// Application configuration module
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Launches per dashboard page
pub const PAGE_SIZE: usize = 12;

const DEFAULT_LAUNCHES_URL: &str = "https://api.spacexdata.com/v3/launches";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub launches_api_url: String,
    pub bind_addr: SocketAddr,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let launches_api_url =
            env::var("LAUNCHES_API_URL").unwrap_or_else(|_| DEFAULT_LAUNCHES_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid BIND_ADDR: {}", e))?;

        let http_timeout = Duration::from_secs(env_u64("HTTP_TIMEOUT_SECONDS", 30));

        Ok(Self {
            launches_api_url,
            bind_addr,
            http_timeout,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
