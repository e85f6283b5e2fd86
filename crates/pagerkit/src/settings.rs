use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use pagerkit_core::config::PaginationConfig;
use pagerkit_log::LogConfig;
use serde::{Deserialize, Serialize};
use snafu::{Location, ResultExt, Snafu};

/// 环境变量前缀，例如 `PAGERKIT__PAGINATION__MAX_PAGE_SIZE=100`
pub const ENV_PREFIX: &str = "PAGERKIT";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SettingsError {
    #[snafu(display("failed to load settings: {source}"))]
    ConfigError {
        source: config::ConfigError,
        #[snafu(implicit)]
        location: Location,
    },
}

pub type Result<T, E = SettingsError> = std::result::Result<T, E>;

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// 日志配置
    pub log: LogConfig,
    /// 分页配置
    pub pagination: PaginationConfig,
}

impl Settings {
    /// 加载配置：可选的配置文件 + 环境变量覆盖
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true));

        let settings: Settings = builder.build().context(ConfigSnafu)?.try_deserialize().context(ConfigSnafu)?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// 从 TOML 文本加载，不读取环境变量
    pub fn from_toml(text: &str) -> Result<Self> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()
            .context(ConfigSnafu)?
            .try_deserialize()
            .context(ConfigSnafu)
    }
}
