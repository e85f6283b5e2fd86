use std::sync::OnceLock;

use snafu::{ensure, Location, Snafu};
pub use tracing;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;

pub use self::config::*;
pub use self::format::*;
use crate::timer::LocalTimer;

mod config;
mod format;
mod timer;

static TRACING_APPENDER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LogError {
    #[snafu(display("global tracing subscriber already initialized"))]
    AlreadyInitialized {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("invalid log directives `{directives}`: {source}"))]
    InvalidDirective {
        directives: String,
        source: ParseError,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("SubscriberError: {message}"))]
    SubscriberError {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

pub type Result<T, E = LogError> = std::result::Result<T, E>;

/// 初始化全局日志，重复初始化时 panic
pub fn init(conf: &LogConfig) {
    if let Err(err) = try_init(conf) {
        panic!("failed to init tracing subscriber: {err}");
    }
}

/// 初始化全局日志（写入标准输出或标准错误，非阻塞）
pub fn try_init(conf: &LogConfig) -> Result<()> {
    ensure!(TRACING_APPENDER_GUARD.get().is_none(), AlreadyInitializedSnafu);

    let filter = conf.filter()?;
    let (non_blocking, guard) = match conf.writer {
        LogWriter::Stdout => tracing_appender::non_blocking(std::io::stdout()),
        LogWriter::Stderr => tracing_appender::non_blocking(std::io::stderr()),
    };

    let sub_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(conf.with_filename)
        .with_line_number(conf.with_line_number)
        .with_target(conf.with_target)
        .with_ansi(conf.ansi)
        .with_timer(LocalTimer)
        .with_writer(non_blocking);

    let installed = match conf.format {
        LogFormat::Compact => sub_builder.compact().try_init(),
        LogFormat::Full => sub_builder.try_init(),
        LogFormat::Pretty => sub_builder.pretty().try_init(),
        LogFormat::Json => sub_builder.json().try_init(),
    };
    installed.map_err(|err| SubscriberSnafu { message: err.to_string() }.build())?;

    ensure!(TRACING_APPENDER_GUARD.set(guard).is_ok(), AlreadyInitializedSnafu);
    Ok(())
}
