//! Application configuration from command-line flags and environment variables.
//!
//! Configuration is parsed once at startup and validated before the server
//! starts. Flags win over environment variables, which win over defaults.
//! A `.env` file in the working directory is loaded first (see `main.rs`).
//!
//! ## Environment Variables
//!
//! - `LISTEN` - Bind address (default: `:<NOMAD_PORT_http>`)
//! - `NOMAD_PORT_http` - Port used when `LISTEN` is not set (default: `3000`)
//! - `GOGO_SITE` - Site label for metrics and logs (default: `notset`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Redirects themselves are declared as `GOGO_TEMP_<slug>=<url>` and
//! `GOGO_PERM_<slug>=<url>` (see [`crate::domain::resolver`]).

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::domain::Prefixes;
use crate::domain::resolver::{PERM_PREFIX, TEMP_PREFIX};
use crate::observability::logging::LogFormat;

/// HTTP redirect server driven by environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "gogo")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address on which to listen for HTTP requests
    #[arg(long, env = "LISTEN")]
    pub listen_addr: Option<String>,

    /// Port used when no listen address is given
    #[arg(long, env = "NOMAD_PORT_http", default_value_t = 3000)]
    pub port: u16,

    /// Site label attached to metrics and request logs
    #[arg(long, env = "GOGO_SITE", default_value = "notset")]
    pub site: String,

    /// Disable Prometheus metrics
    #[arg(long)]
    pub no_metrics: bool,

    /// Healthcheck URL
    #[arg(long, default_value = "/health")]
    pub health_url: String,

    /// Prometheus metrics URL
    #[arg(long, default_value = "/metrics")]
    pub metrics_url: String,

    /// Page not found content filename, uses a default page if not provided
    #[arg(long)]
    pub not_found_filename: Option<PathBuf>,

    /// Redirect found content filename, uses a default page if not provided;
    /// "DEST_URL" will be replaced with the destination URL
    #[arg(long)]
    pub found_filename: Option<PathBuf>,

    /// Disable request logging to stdout
    #[arg(long)]
    pub no_request_logging: bool,

    /// Variable name prefix declaring temporary redirects
    #[arg(long, default_value = TEMP_PREFIX)]
    pub temp_prefix: String,

    /// Variable name prefix declaring permanent redirects
    #[arg(long, default_value = PERM_PREFIX)]
    pub perm_prefix: String,

    /// Log filter directives
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format: text or json
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

impl Config {
    /// Whether Prometheus metrics are collected and exposed.
    pub fn metrics_enabled(&self) -> bool {
        !self.no_metrics
    }

    /// Whether a log line is emitted per request.
    pub fn request_log_enabled(&self) -> bool {
        !self.no_request_logging
    }

    /// Socket address to bind.
    ///
    /// A listen address starting with `:` binds all interfaces, so `:8080`
    /// becomes `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> String {
        match self.listen_addr.as_deref() {
            Some(addr) if addr.starts_with(':') => format!("0.0.0.0{addr}"),
            Some(addr) => addr.to_string(),
            None => format!("0.0.0.0:{}", self.port),
        }
    }

    pub fn prefixes(&self) -> Prefixes {
        Prefixes {
            temporary: self.temp_prefix.clone(),
            permanent: self.perm_prefix.clone(),
        }
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        self.log_format.parse()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `health_url` or `metrics_url` does not start with `/`
    /// - `health_url` equals `metrics_url` while metrics are enabled
    /// - either prefix is empty, or both are identical
    /// - `log_format` is not `text` or `json`
    /// - the bind address has no port
    pub fn validate(&self) -> Result<()> {
        if !self.health_url.starts_with('/') {
            bail!("--health-url must start with '/', got '{}'", self.health_url);
        }

        if self.metrics_enabled() {
            if !self.metrics_url.starts_with('/') {
                bail!(
                    "--metrics-url must start with '/', got '{}'",
                    self.metrics_url
                );
            }
            if self.metrics_url == self.health_url {
                bail!(
                    "--metrics-url and --health-url must differ, both are '{}'",
                    self.health_url
                );
            }
        }

        if self.temp_prefix.is_empty() || self.perm_prefix.is_empty() {
            bail!("Redirect prefixes must not be empty");
        }
        if self.temp_prefix == self.perm_prefix {
            bail!(
                "Temporary and permanent prefixes must differ, both are '{}'",
                self.temp_prefix
            );
        }

        self.log_format()?;

        if !self.bind_addr().contains(':') {
            bail!(
                "LISTEN must be in format 'host:port' or ':port', got '{}'",
                self.bind_addr()
            );
        }

        Ok(())
    }

    /// Prints the startup banner.
    pub fn print_summary(&self) {
        tracing::info!("Gogo v{}", env!("CARGO_PKG_VERSION"));
        tracing::info!("  Site: {}", self.site);
        tracing::info!("  Listen addr: {}", self.bind_addr());
        tracing::info!("  Healthcheck: {}", self.health_url);
        if self.metrics_enabled() {
            tracing::info!("  Prometheus metrics: {}", self.metrics_url);
        }
        if !self.request_log_enabled() {
            tracing::info!("  Request logging: disabled");
        }
    }
}

/// Parses and validates configuration from flags and the environment.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load() -> Result<Config> {
    let config = Config::parse();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const ENV_KEYS: &[&str] = &["LISTEN", "NOMAD_PORT_http", "GOGO_SITE", "RUST_LOG", "LOG_FORMAT"];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially.
        unsafe {
            for key in ENV_KEYS {
                env::remove_var(key);
            }
        }
    }

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("gogo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = parse(&[]);

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.site, "notset");
        assert_eq!(config.health_url, "/health");
        assert_eq!(config.metrics_url, "/metrics");
        assert!(config.metrics_enabled());
        assert!(config.request_log_enabled());
        assert_eq!(config.prefixes(), Prefixes::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_port_from_nomad_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("NOMAD_PORT_http", "8081");
            env::set_var("GOGO_SITE", "docs");
        }

        let config = parse(&[]);
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");
        assert_eq!(config.site, "docs");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_listen_addr_priority() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("NOMAD_PORT_http", "8081");
            env::set_var("LISTEN", "127.0.0.1:9000");
        }

        assert_eq!(parse(&[]).bind_addr(), "127.0.0.1:9000");
        assert_eq!(parse(&["--listen-addr", ":7000"]).bind_addr(), "0.0.0.0:7000");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_flags() {
        clear_env();
        let config = parse(&[
            "--no-metrics",
            "--no-request-logging",
            "--health-url",
            "/healthz",
            "--not-found-filename",
            "/srv/404.html",
            "--temp-prefix",
            "T_",
            "--perm-prefix",
            "P_",
        ]);

        assert!(!config.metrics_enabled());
        assert!(!config.request_log_enabled());
        assert_eq!(config.health_url, "/healthz");
        assert_eq!(config.not_found_filename, Some(PathBuf::from("/srv/404.html")));
        assert!(config.found_filename.is_none());
        assert_eq!(config.prefixes().temporary, "T_");
        assert_eq!(config.prefixes().permanent, "P_");
    }

    #[test]
    #[serial]
    fn test_config_validation() {
        clear_env();
        let mut config = parse(&[]);
        assert!(config.validate().is_ok());

        config.health_url = "health".to_string();
        assert!(config.validate().is_err());
        config.health_url = "/health".to_string();

        config.metrics_url = "/health".to_string();
        assert!(config.validate().is_err());

        // Collision is irrelevant once metrics are off
        config.no_metrics = true;
        assert!(config.validate().is_ok());
        config.no_metrics = false;
        config.metrics_url = "/metrics".to_string();

        config.perm_prefix = config.temp_prefix.clone();
        assert!(config.validate().is_err());
        config.perm_prefix = String::new();
        assert!(config.validate().is_err());
        config.perm_prefix = PERM_PREFIX.to_string();

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = Some("localhost".to_string());
        assert!(config.validate().is_err());
    }
}
