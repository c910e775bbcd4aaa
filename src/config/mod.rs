// ABOUTME: Configuration types and parsing for sitepush.yml.
// ABOUTME: Every field defaults to the zola/htmlmin/netlify/Cloudflare pipeline.

mod deserialize;
mod env_value;

pub use env_value::{EnvValue, MissingEnvVar};

use crate::error::{Error, Result};
use crate::types::ToolCommand;
use deserialize::{
    deserialize_command, deserialize_flag, deserialize_message, deserialize_template,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "sitepush.yml";
pub const CONFIG_FILENAME_ALT: &str = "sitepush.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".sitepush/config.yml";

pub const DEFAULT_CLOUDFLARE_API: &str = "https://api.cloudflare.com/client/v4";
pub const TOKEN_ENV_VAR: &str = "CLOUDFLARE_API_TOKEN";
pub const ZONE_ENV_VAR: &str = "CLOUDFLARE_ZONE_ID";

/// Placeholder in the deploy message replaced by the revision label.
pub const REVISION_PLACEHOLDER: &str = "{revision}";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory the build step writes into, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub cdn: CdnConfig,
}

/// External tools run by the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_check", deserialize_with = "deserialize_command")]
    pub check: ToolCommand,

    #[serde(default = "default_build", deserialize_with = "deserialize_command")]
    pub build: ToolCommand,

    /// Run once per HTML file with `{}` replaced by the file path.
    #[serde(default = "default_minify", deserialize_with = "deserialize_template")]
    pub minify: ToolCommand,

    #[serde(default = "default_describe", deserialize_with = "deserialize_command")]
    pub describe: ToolCommand,
}

/// Hosting provider upload.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_deploy_command", deserialize_with = "deserialize_command")]
    pub command: ToolCommand,

    /// Deploy message; `{revision}` is replaced with the revision label.
    #[serde(default = "default_message", deserialize_with = "deserialize_message")]
    pub message: String,

    #[serde(default = "default_prod_flag", deserialize_with = "deserialize_flag")]
    pub prod_flag: String,

    #[serde(default = "default_open_flag", deserialize_with = "deserialize_flag")]
    pub open_flag: String,
}

/// CDN cache purge settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CdnConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_token")]
    pub token: EnvValue,

    #[serde(default = "default_zone")]
    pub zone: EnvValue,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_check() -> ToolCommand {
    ToolCommand::new("zola", ["check"])
}

fn default_build() -> ToolCommand {
    ToolCommand::new("zola", ["build"])
}

fn default_minify() -> ToolCommand {
    ToolCommand::new("htmlmin", ["-c", "{}", "{}"])
}

fn default_describe() -> ToolCommand {
    ToolCommand::new("git", ["describe", "--always", "--dirty"])
}

fn default_deploy_command() -> ToolCommand {
    ToolCommand::new("netlify", ["deploy"])
}

fn default_message() -> String {
    "revision {revision}".to_string()
}

fn default_prod_flag() -> String {
    "--prod".to_string()
}

fn default_open_flag() -> String {
    "--open".to_string()
}

fn default_api_base() -> String {
    DEFAULT_CLOUDFLARE_API.to_string()
}

fn default_token() -> EnvValue {
    EnvValue::from_env(TOKEN_ENV_VAR)
}

fn default_zone() -> EnvValue {
    EnvValue::from_env(ZONE_ENV_VAR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            commands: CommandsConfig::default(),
            deploy: DeployConfig::default(),
            cdn: CdnConfig::default(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            check: default_check(),
            build: default_build(),
            minify: default_minify(),
            describe: default_describe(),
        }
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            command: default_deploy_command(),
            message: default_message(),
            prod_flag: default_prod_flag(),
            open_flag: default_open_flag(),
        }
    }
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: default_token(),
            zone: default_zone(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is null to serde_yaml, not an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load the first config file found in `dir`, or the defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("Loading config from {}", path.display());
                return Self::load(path);
            }
        }

        tracing::debug!("No config file in {}, using defaults", dir.display());
        Ok(Self::default())
    }
}
