//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treeviz/treeviz.toml`
//! 3. Environment variables: `TREEVIZ_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Order;

const ENV_PREFIX: &str = "TREEVIZ";

/// How `build` prints a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree drawing
    #[default]
    Tree,
    /// Mapping notation `{A:[B,C], ...}`
    Map,
    /// Graph JSON (nodes with levels, edges)
    Json,
}

/// Unified configuration for treeviz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default output format of `build`
    pub format: OutputFormat,
    /// Traversals to print, in display order
    pub orders: Vec<Order>,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tree,
            orders: vec![Order::Inorder, Order::Preorder, Order::Postorder],
            color: true,
        }
    }
}

/// Get the XDG config directory for treeviz.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treeviz").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treeviz.toml"))
}

impl Settings {
    /// Load settings from defaults, the global config file and `TREEVIZ_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `path` in place of the global config file.
    ///
    /// A missing file is not an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(path, ENV_PREFIX)
    }

    fn load_layers(path: Option<&Path>, env_prefix: &str) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("format", defaults.format.to_string())
            .map_err(config_err)?
            .set_default(
                "orders",
                defaults
                    .orders
                    .iter()
                    .map(|o| o.to_string())
                    .collect::<Vec<_>>(),
            )
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?;

        if let Some(path) = path {
            debug!("config file: {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("orders"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treeviz configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treeviz/treeviz.toml
#   Env:    TREEVIZ_* environment variables (e.g. TREEVIZ_ORDERS=pre,post)

# Output of `treeviz build`: "tree", "map" or "json"
# format = "tree"

# Traversals printed by `treeviz traverse` and `treeviz show`, in this order
# orders = ["inorder", "preorder", "postorder"]

# Colored output (NO_COLOR is honored as well)
# color = true
"#
        .to_string()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Map => write!(f, "map"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp config");
        file.write_all(content.as_bytes()).expect("write temp config");
        file
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_layers(None, "TREEVIZ_TEST_NONE").expect("load defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.orders[0], Order::Inorder);
    }

    #[test]
    fn given_missing_file_when_loading_then_uses_defaults() {
        let settings = Settings::load_layers(
            Some(Path::new("/nonexistent/treeviz.toml")),
            "TREEVIZ_TEST_MISSING",
        )
        .expect("load defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_config_file_when_loading_then_file_overrides_defaults() {
        let file = toml_file("format = \"json\"\norders = [\"postorder\"]\n");
        let settings =
            Settings::load_layers(Some(file.path()), "TREEVIZ_TEST_FILE").expect("load file");
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.orders, vec![Order::Postorder]);
        assert!(settings.color);
    }

    #[test]
    fn given_env_vars_when_loading_then_env_overrides_file() {
        let file = toml_file("format = \"json\"\n");
        std::env::set_var("TREEVIZ_TEST_ENV_FORMAT", "map");
        std::env::set_var("TREEVIZ_TEST_ENV_COLOR", "false");
        std::env::set_var("TREEVIZ_TEST_ENV_ORDERS", "preorder,inorder");

        let settings =
            Settings::load_layers(Some(file.path()), "TREEVIZ_TEST_ENV").expect("load env");

        std::env::remove_var("TREEVIZ_TEST_ENV_FORMAT");
        std::env::remove_var("TREEVIZ_TEST_ENV_COLOR");
        std::env::remove_var("TREEVIZ_TEST_ENV_ORDERS");

        assert_eq!(settings.format, OutputFormat::Map);
        assert!(!settings.color);
        assert_eq!(settings.orders, vec![Order::Preorder, Order::Inorder]);
    }

    #[test]
    fn given_short_order_names_in_env_when_loading_then_parsed() {
        std::env::set_var("TREEVIZ_TEST_SHORT_ORDERS", "pre,post");

        let settings = Settings::load_layers(None, "TREEVIZ_TEST_SHORT").expect("load env");

        std::env::remove_var("TREEVIZ_TEST_SHORT_ORDERS");

        assert_eq!(settings.orders, vec![Order::Preorder, Order::Postorder]);
    }

    #[test]
    fn given_short_order_name_in_file_when_loading_then_parsed() {
        let file = toml_file("orders = [\"pre\"]\n");
        let settings =
            Settings::load_layers(Some(file.path()), "TREEVIZ_TEST_SHORT_FILE").expect("load file");
        assert_eq!(settings.orders, vec![Order::Preorder]);
    }

    #[test]
    fn given_unknown_order_in_file_when_loading_then_config_error() {
        let file = toml_file("orders = [\"level\"]\n");
        let err = Settings::load_layers(Some(file.path()), "TREEVIZ_TEST_BAD_ORDER").unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
        assert!(err.to_string().contains("unknown traversal order"));
    }

    #[test]
    fn given_invalid_value_when_loading_then_config_error() {
        let file = toml_file("format = \"svg\"\n");
        let err = Settings::load_layers(Some(file.path()), "TREEVIZ_TEST_INVALID").unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn given_settings_when_serialized_then_roundtrips_through_toml() {
        let text = Settings::default().to_toml().unwrap();
        assert!(text.contains("format = \"tree\""));
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_template_is_valid_toml() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
