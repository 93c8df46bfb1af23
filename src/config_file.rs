//! Configuration file support.
//!
//! Loads `config.toml` and merges its `[server]` section into a parsed
//! [`ServerConfig`].
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file (`[server]`)
//! 4. Hardcoded defaults

use clap::ArgMatches;
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level config file structure. Unknown sections are tolerated.
#[derive(Debug, Default, Deserialize)]
pub struct ListviewFileConfig {
    #[serde(default)]
    pub server: Option<ServerFileConfig>,
}

/// The `[server]` section. Absent keys leave the CLI/default value alone.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub listen_addr: Option<String>,
    pub dataset_size: Option<usize>,
    pub value_prefix: Option<String>,
    pub default_page_size: Option<i64>,
    pub cors_enabled: Option<bool>,
    pub body_limit: Option<usize>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {detail}")]
    Parse { path: PathBuf, detail: String },
}

pub fn load_config(path: &Path) -> Result<ListviewFileConfig, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Ok(ListviewFileConfig::default());
    }

    toml::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Per-user config location, e.g. `~/.config/listview/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "listview").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Explicit `--config` path if given, else the per-user file when it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        warn!(path = %path.display(), "Config file not found at specified path");
        return None;
    }

    default_config_path().filter(|path| path.is_file())
}

/// Apply file values to fields the user did not set on the CLI or in the
/// environment.
pub fn apply_to_server_config(
    file: &ServerFileConfig,
    config: &mut ServerConfig,
    matches: &ArgMatches,
) {
    use clap::parser::ValueSource;

    let is_default = |arg_name: &str| -> bool {
        matches!(
            matches.value_source(arg_name),
            None | Some(ValueSource::DefaultValue)
        )
    };

    if is_default("listen_addr") {
        if let Some(ref addr_str) = file.listen_addr {
            match addr_str.parse::<SocketAddr>() {
                Ok(addr) => config.listen_addr = addr,
                Err(_) => warn!(
                    value = %addr_str,
                    "Invalid listen_addr in config file, ignoring"
                ),
            }
        }
    }
    if is_default("dataset_size") {
        if let Some(v) = file.dataset_size {
            config.dataset_size = v;
        }
    }
    if is_default("value_prefix") {
        if let Some(ref v) = file.value_prefix {
            config.value_prefix = v.clone();
        }
    }
    if is_default("default_page_size") {
        if let Some(v) = file.default_page_size {
            config.default_page_size = v;
        }
    }
    if is_default("cors_enabled") {
        if let Some(v) = file.cors_enabled {
            config.cors_enabled = v;
        }
    }
    if is_default("body_limit") {
        if let Some(v) = file.body_limit {
            config.body_limit = v;
        }
    }
    if is_default("log_level") {
        if let Some(ref v) = file.log_level {
            config.log_level = v.clone();
        }
    }
}

/// Resolve, load and merge the config file into `config`.
///
/// A missing file is not an error.
pub fn load_and_merge_config(
    config: &mut ServerConfig,
    matches: &ArgMatches,
) -> Result<(), ConfigFileError> {
    let Some(path) = resolve_config_path(config.config_file.as_deref()) else {
        debug!("No config file found, using CLI args and defaults only");
        return Ok(());
    };

    info!(path = %path.display(), "Loading configuration file");
    let file_config = load_config(&path)?;
    if let Some(server) = file_config.server {
        apply_to_server_config(&server, config, matches);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    fn parse(args: &[&str]) -> (ServerConfig, ArgMatches) {
        let matches = ServerConfig::command()
            .try_get_matches_from(args.iter().copied())
            .expect("args should parse");
        let config = ServerConfig::from_arg_matches(&matches).expect("config should build");
        (config, matches)
    }

    #[test]
    fn load_toml_with_server_section() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
[server]
listen_addr = "127.0.0.1:9090"
dataset_size = 500
value_prefix = "Item"
cors_enabled = false

[client]
theme = "dark"
"#,
        )
        .expect("write config");

        let loaded = load_config(&path).expect("config should load");
        let server = loaded.server.expect("server section");
        assert_eq!(server.listen_addr.as_deref(), Some("127.0.0.1:9090"));
        assert_eq!(server.dataset_size, Some(500));
        assert_eq!(server.value_prefix.as_deref(), Some("Item"));
        assert_eq!(server.cors_enabled, Some(false));
        assert_eq!(server.body_limit, None);
    }

    #[test]
    fn empty_file_loads_as_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write config");

        let loaded = load_config(&path).expect("config should load");
        assert!(loaded.server.is_none());
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server\nlisten_addr = ").expect("write config");

        let err = load_config(&path).expect_err("parse should fail");
        assert!(matches!(err, ConfigFileError::Parse { .. }));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_config(&dir.path().join("absent.toml")).expect_err("read should fail");
        assert!(matches!(err, ConfigFileError::Io { .. }));
    }

    #[test]
    fn file_values_fill_unset_fields_only() {
        let (mut config, matches) = parse(&["listview", "--dataset-size", "42"]);
        let file = ServerFileConfig {
            listen_addr: Some("127.0.0.1:9999".to_string()),
            dataset_size: Some(7),
            default_page_size: Some(50),
            ..Default::default()
        };

        apply_to_server_config(&file, &mut config, &matches);

        assert_eq!(config.dataset_size, 42, "CLI value should win");
        assert_eq!(config.listen_addr, "127.0.0.1:9999".parse().unwrap());
        assert_eq!(config.default_page_size, 50);
    }

    #[test]
    fn invalid_listen_addr_in_file_is_ignored() {
        let (mut config, matches) = parse(&["listview"]);
        let before = config.listen_addr;
        let file = ServerFileConfig {
            listen_addr: Some("not-an-address".to_string()),
            ..Default::default()
        };

        apply_to_server_config(&file, &mut config, &matches);

        assert_eq!(config.listen_addr, before);
    }

    #[test]
    fn explicit_config_path_is_merged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server]\nvalue_prefix = \"Entry\"\n").expect("write config");

        let path_arg = path.to_string_lossy().to_string();
        let (mut config, matches) = parse(&["listview", "--config", path_arg.as_str()]);
        load_and_merge_config(&mut config, &matches).expect("merge should succeed");

        assert_eq!(config.value_prefix, "Entry");
    }

    #[test]
    fn file_arg_ids_exist_in_cli_definition() {
        let command = ServerConfig::command();
        for id in [
            "listen_addr",
            "dataset_size",
            "value_prefix",
            "default_page_size",
            "cors_enabled",
            "body_limit",
            "log_level",
        ] {
            assert!(
                command.get_arguments().any(|arg| arg.get_id() == id),
                "missing arg id {id}"
            );
        }
    }
}
