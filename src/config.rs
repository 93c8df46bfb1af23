//! Server configuration

use clap::{ArgAction, Parser};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::entities::dataset::PageQuery;
use crate::infra::memory::dataset::{DEFAULT_DATASET_SIZE, DEFAULT_VALUE_PREFIX};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Listing server configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "listview")]
#[command(about = "Paginated, searchable and reorderable listing server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "LISTVIEW_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Number of rows generated at startup
    #[arg(long, env = "LISTVIEW_DATASET_SIZE", default_value_t = DEFAULT_DATASET_SIZE)]
    pub dataset_size: usize,

    /// Prefix of every generated row value ("<prefix> <id>")
    #[arg(long, env = "LISTVIEW_VALUE_PREFIX", default_value = DEFAULT_VALUE_PREFIX)]
    pub value_prefix: String,

    /// Page size used when a request does not give one
    #[arg(long, env = "LISTVIEW_DEFAULT_PAGE_SIZE", default_value_t = PageQuery::DEFAULT_PAGE_SIZE)]
    pub default_page_size: i64,

    /// Enable CORS (Cross-Origin Resource Sharing)
    #[arg(long, env = "LISTVIEW_CORS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub cors_enabled: bool,

    /// Request body size limit in bytes (default 10MB)
    #[arg(long, env = "LISTVIEW_BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LISTVIEW_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Path to a TOML config file
    #[arg(long = "config", env = "LISTVIEW_CONFIG")]
    pub config_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_page_size <= 0 {
            return Err(format!(
                "default_page_size must be greater than zero (got {})",
                self.default_page_size
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
            dataset_size: DEFAULT_DATASET_SIZE,
            value_prefix: DEFAULT_VALUE_PREFIX.to_string(),
            default_page_size: PageQuery::DEFAULT_PAGE_SIZE,
            cors_enabled: true,
            body_limit: DEFAULT_BODY_LIMIT,
            log_level: "info".to_string(),
            config_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        ServerConfig::command().debug_assert();
    }

    #[test]
    fn parsed_defaults_match_default_impl() {
        let parsed = ServerConfig::try_parse_from(["listview"]).expect("defaults should parse");
        let defaults = ServerConfig::default();

        assert_eq!(parsed.listen_addr, defaults.listen_addr);
        assert_eq!(parsed.dataset_size, defaults.dataset_size);
        assert_eq!(parsed.value_prefix, defaults.value_prefix);
        assert_eq!(parsed.default_page_size, defaults.default_page_size);
        assert_eq!(parsed.cors_enabled, defaults.cors_enabled);
        assert_eq!(parsed.body_limit, defaults.body_limit);
    }

    #[test]
    fn cors_can_be_switched_off() {
        let parsed = ServerConfig::try_parse_from(["listview", "--cors-enabled", "false"])
            .expect("flag should parse");
        assert!(!parsed.cors_enabled);
    }

    #[test]
    fn validate_rejects_non_positive_default_page_size() {
        let config = ServerConfig {
            default_page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(ServerConfig::default().validate().is_ok());
    }
}
