//! Configuration management for campwatch
//!
//! This module handles loading and validating configuration from environment variables
//! and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::retry::RetryPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Browser launch configuration
    pub browser: BrowserConfig,

    /// Page interaction configuration
    pub scrape: ScrapeConfig,

    /// Retry budget for a slot check
    pub retry: RetryConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Browser launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run Chrome without a visible window
    pub headless: bool,

    /// Keep Chrome's sandbox enabled (disable inside containers)
    pub sandbox: bool,

    /// Chrome/Chromium executable, auto-detected when unset
    pub chrome_path: Option<PathBuf>,

    /// Window width in pixels
    pub window_width: u32,

    /// Window height in pixels
    pub window_height: u32,

    /// Kill the browser after this many idle seconds
    pub idle_timeout_secs: u64,
}

/// Page interaction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Navigation and selector wait timeout in seconds
    pub page_timeout_secs: u64,

    /// Number of scroll-and-pause rounds used to trigger lazy loading
    pub scroll_iterations: u32,

    /// Pixels scrolled per round
    pub scroll_step_px: u32,

    /// Pause after each scroll in milliseconds
    pub scroll_pause_ms: u64,

    /// Maximum number of available entries echoed in a summary
    pub sample_limit: usize,
}

/// Retry budget for a slot check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, at least 1
    pub retries: u32,

    /// Seconds to wait between attempts
    pub delay_secs: u64,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Enable CORS for the API
    pub enable_cors: bool,

    /// Enable request logging
    pub enable_request_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            chrome_path: None,
            window_width: 1366,
            window_height: 900,
            idle_timeout_secs: 300,
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: 90,
            scroll_iterations: 6,
            scroll_step_px: 2000,
            scroll_pause_ms: 2000,
            sample_limit: crate::models::DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            delay_secs: 5,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            enable_cors: true,
            enable_request_logging: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let browser = BrowserConfig {
            headless: env_parse("CAMPWATCH_HEADLESS").unwrap_or(defaults.browser.headless),
            sandbox: env_parse("CAMPWATCH_SANDBOX").unwrap_or(defaults.browser.sandbox),
            chrome_path: std::env::var("CAMPWATCH_CHROME_PATH").ok().map(PathBuf::from),
            window_width: env_parse("CAMPWATCH_WINDOW_WIDTH")
                .unwrap_or(defaults.browser.window_width),
            window_height: env_parse("CAMPWATCH_WINDOW_HEIGHT")
                .unwrap_or(defaults.browser.window_height),
            idle_timeout_secs: env_parse("CAMPWATCH_IDLE_TIMEOUT")
                .unwrap_or(defaults.browser.idle_timeout_secs),
        };

        let scrape = ScrapeConfig {
            page_timeout_secs: env_parse("CAMPWATCH_PAGE_TIMEOUT")
                .unwrap_or(defaults.scrape.page_timeout_secs),
            scroll_iterations: env_parse("CAMPWATCH_SCROLL_ITERATIONS")
                .unwrap_or(defaults.scrape.scroll_iterations),
            scroll_step_px: env_parse("CAMPWATCH_SCROLL_STEP")
                .unwrap_or(defaults.scrape.scroll_step_px),
            scroll_pause_ms: env_parse("CAMPWATCH_SCROLL_PAUSE_MS")
                .unwrap_or(defaults.scrape.scroll_pause_ms),
            sample_limit: env_parse("CAMPWATCH_SAMPLE_LIMIT")
                .unwrap_or(defaults.scrape.sample_limit),
        };

        let retry = RetryConfig {
            retries: env_parse("CAMPWATCH_RETRIES").unwrap_or(defaults.retry.retries),
            delay_secs: env_parse("CAMPWATCH_RETRY_DELAY").unwrap_or(defaults.retry.delay_secs),
        };

        let server = ServerConfig {
            host: std::env::var("CAMPWATCH_HOST").unwrap_or(defaults.server.host),
            port: env_parse("CAMPWATCH_PORT").unwrap_or(defaults.server.port),
            enable_cors: env_parse("CAMPWATCH_ENABLE_CORS").unwrap_or(defaults.server.enable_cors),
            enable_request_logging: env_parse("CAMPWATCH_REQUEST_LOGGING")
                .unwrap_or(defaults.server.enable_request_logging),
        };

        let logging = LoggingConfig {
            level: std::env::var("CAMPWATCH_LOG_LEVEL").unwrap_or(defaults.logging.level),
            format: std::env::var("CAMPWATCH_LOG_FORMAT").unwrap_or(defaults.logging.format),
        };

        Ok(Self {
            browser,
            scrape,
            retry,
            server,
            logging,
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.retry.retries == 0 {
            anyhow::bail!("retries must be at least 1");
        }

        if self.scrape.page_timeout_secs == 0 {
            anyhow::bail!("page_timeout_secs must be greater than 0");
        }

        if self.browser.window_width == 0 || self.browser.window_height == 0 {
            anyhow::bail!("window size must be non-zero");
        }

        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => anyhow::bail!("unknown log format: {other}"),
        }

        self.server.bind_address()?;

        Ok(())
    }
}

impl ScrapeConfig {
    /// Navigation and selector wait timeout
    #[must_use]
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    /// Pause after each scroll
    #[must_use]
    pub fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.scroll_pause_ms)
    }
}

impl RetryConfig {
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retries, Duration::from_secs(self.delay_secs))
    }
}

impl ServerConfig {
    /// Parse host and port into a socket address
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address: {}:{}", self.host, self.port))
    }
}
