//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the values the practice entry points use)
//! 2. Global config: `$XDG_CONFIG_HOME/solid/solid.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `SOLID_*` prefix, `__` as section separator

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Channel;

/// Notification practice settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delivery channel: "email", "sms" or "push"
    pub channel: String,
    /// Message sent by the entry point
    pub message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            channel: Channel::Email.to_string(),
            message: "Hello, this is a notification!".into(),
        }
    }
}

impl NotificationConfig {
    /// Parsed delivery channel.
    pub fn channel(&self) -> ApplicationResult<Channel> {
        Ok(self.channel.parse::<Channel>()?)
    }
}

/// Payment practice settings: one amount per processor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaymentConfig {
    pub credit_card: f64,
    pub paypal: f64,
    pub cash: f64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            credit_card: 100.0,
            paypal: 200.0,
            cash: 50.0,
        }
    }
}

/// Unified configuration for solid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub notification: NotificationConfig,
    pub payment: PaymentConfig,
}

/// Get the XDG config directory for solid.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "solid").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("solid.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), config_file, true)
    }

    /// Load settings from explicit layers.
    ///
    /// `global` is optional (skipped when missing), `local` is required when given.
    /// With `with_env`, `SOLID_*` variables override both files.
    pub fn load_from(
        global: Option<&Path>,
        local: Option<&Path>,
        with_env: bool,
    ) -> ApplicationResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("notification.channel", defaults.notification.channel.clone())
            .map_err(config_err)?
            .set_default("notification.message", defaults.notification.message.clone())
            .map_err(config_err)?
            .set_default("payment.credit_card", defaults.payment.credit_card)
            .map_err(config_err)?
            .set_default("payment.paypal", defaults.payment.paypal)
            .map_err(config_err)?
            .set_default("payment.cash", defaults.payment.cash)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            builder = builder.add_source(File::from(global_path).required(false));
        }
        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            builder = builder.add_source(File::from(local_path).required(true));
        }
        if with_env {
            builder = builder.add_source(
                Environment::with_prefix("SOLID")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;

        // unknown channels are rejected at load time
        settings.notification.channel()?;

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# solid configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/solid/solid.toml
#   Local:  any file passed with --config
#   Env:    SOLID_* environment variables, e.g. SOLID_NOTIFICATION__CHANNEL=sms

[notification]
# Delivery channel: "email", "sms" or "push"
# channel = "email"

# Message sent by `solid run dip`
# message = "Hello, this is a notification!"

[payment]
# Amounts used by `solid run lsp`
# credit_card = 100
# paypal = 200
# cash = 50
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
