use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Checked per request, so a missing key still yields a JSON error envelope.
    pub firecrawl_api_key: Option<String>,
    pub firecrawl_api_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let firecrawl_api_key = env::var("FIRECRAWL_API_KEY").ok();
        let firecrawl_api_url = env::var("FIRECRAWL_API_URL")
            .unwrap_or_else(|_| DEFAULT_FIRECRAWL_API_URL.to_string());

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            firecrawl_api_key,
            firecrawl_api_url,
        })
    }

    pub fn api_key(&self) -> Result<&str> {
        self.firecrawl_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::ConfigError("FIRECRAWL_API_KEY not set".to_string()))
    }
}
