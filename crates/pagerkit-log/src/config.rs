use serde::{Deserialize, Serialize};
use serde_with::DisplayFromStr;
use snafu::ResultExt;
pub use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::format::{LogFormat, LogWriter};
use crate::{InvalidDirectiveSnafu, Result};

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// 日志格式
    pub format: LogFormat,
    /// 写入标准输出或标准错误
    pub writer: LogWriter,
    /// 默认日志等级
    #[serde(with = "::serde_with::As::<DisplayFromStr>")]
    pub level: Level,
    /// 按 target 覆盖等级，例如 `pagerkit_seaorm=debug`
    pub directives: Vec<String>,
    /// 是否显示 ANSI 颜色
    pub ansi: bool,
    /// 是否显示文件名
    pub with_filename: bool,
    /// 是否显示行号
    pub with_line_number: bool,
    /// 是否显示 target
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::Compact,
            writer: LogWriter::Stdout,
            level: Level::INFO,
            directives: Vec::new(),
            ansi: true,
            with_filename: true,
            with_line_number: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// 由默认等级和 target 覆盖构造过滤器
    ///
    /// 不读取 `RUST_LOG`，日志等级只来自配置。
    pub fn filter(&self) -> Result<EnvFilter> {
        let directives =
            self.directives.iter().map(|d| d.trim()).filter(|d| !d.is_empty()).collect::<Vec<_>>().join(",");
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.level).into())
            .parse(&directives)
            .context(InvalidDirectiveSnafu { directives })
    }
}
