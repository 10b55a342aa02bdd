//! setting config file
//! - 读取 config_{ENV}.toml
//! - 环境变量 RCSWITCH_<SECTION>__<KEY> 覆盖文件中的值，例如 RCSWITCH_SERVER__SECRET

use std::env;
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde_derive::Deserialize;

use super::error::{AppError, ErrorCode};

const ENV_PREFIX: &str = "RCSWITCH";

#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub application_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Env {
    pub env: String,
    pub log_level: String,
}

/// control server the menu talks to
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub base_address: String,
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Http {
    pub connect_timeout_millis: u64,
    pub request_timeout_millis: u64,
}

impl Http {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_millis)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_millis)
    }
}

impl Default for Http {
    fn default() -> Self {
        Http {
            connect_timeout_millis: 1000,
            request_timeout_millis: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub meta: Meta,
    pub env: Env,
    pub server: Server,
    pub http: Http,
}

impl Settings {
    /// load settings for the environment named by `ENV`, default 'dev'
    pub fn load() -> Result<Self, AppError> {
        let env_name = match env::var("ENV") {
            Ok(e) => e,
            Err(_) => {
                log::warn!("no ENV set, use default: 'dev'");
                String::from("dev")
            }
        };
        let file_path = format!("config_{}.toml", env_name);
        let builder = Config::builder()
            .add_source(File::with_name(file_path.as_str()).format(FileFormat::Toml));
        Self::build(builder, env_name.as_str())
    }

    /// load settings from toml text instead of a file, environment overrides still apply
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let builder = Config::builder().add_source(File::from_str(content, FileFormat::Toml));
        Self::build(builder, "dev")
    }

    fn build(
        builder: config::builder::ConfigBuilder<config::builder::DefaultState>,
        env_name: &str,
    ) -> Result<Self, AppError> {
        let defaults = Http::default();
        let config = builder
            .set_default("meta.application_name", "rc-switch-engine")
            .and_then(|b| b.set_default("env.env", env_name))
            .and_then(|b| b.set_default("env.log_level", "info"))
            .and_then(|b| b.set_default("http.connect_timeout_millis", defaults.connect_timeout_millis as i64))
            .and_then(|b| b.set_default("http.request_timeout_millis", defaults.request_timeout_millis as i64))
            .map_err(|e| AppError { code: ErrorCode::SettingError, msg: format!("cannot set default value: {e}") })?
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
            .build()
            .map_err(|e| AppError { code: ErrorCode::SettingError, msg: format!("cannot read config: {e}") })?;

        config
            .try_deserialize::<Settings>()
            .map_err(|e| AppError { code: ErrorCode::SettingError, msg: format!("config file format invalid: {e}") })
    }
}
