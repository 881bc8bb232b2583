use crate::config::log::{LogConfig, DEFAULT_TIME_FORMAT};
use std::path::Path;
use time::format_description::OwnedFormatItem;
use tracing::{warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "number_guesser.log";
pub const ERROR_LOG_FILE_NAME: &str = "number_guesser.err";

/// Installs the global subscriber.
///
/// The game owns stdout, so every layer writes to a rolling file. Keep the
/// returned guards alive until exit or buffered lines are lost.
pub fn init_logger(config: &LogConfig) -> [WorkerGuard; 2] {
    let local_offset = time::UtcOffset::current_local_offset();
    let (time_format, format_err) = parse_time_format(&config.time_format);

    let dir = Path::new(&config.directory);

    let file_writer = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    let (f, f_guard) = tracing_appender::non_blocking(file_writer);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(f.with_max_level(config.max_level.as_tracing_level()));

    let file_error_writer = tracing_appender::rolling::daily(dir.join("error"), ERROR_LOG_FILE_NAME);
    let (f_err, f_err_guard) = tracing_appender::non_blocking(file_error_writer);

    let file_error_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(f_err.with_max_level(Level::ERROR));

    let (offset, offset_err) = match local_offset {
        Ok(ofs) => (ofs, None),
        Err(e) => (time::UtcOffset::UTC, Some(e)),
    };

    let timer = OffsetTime::new(offset, time_format);
    let (file_layer, file_error_layer) = (
        file_layer.with_timer(timer.clone()),
        file_error_layer.with_timer(timer),
    );

    tracing_subscriber::registry()
        .with(file_layer)
        .with(file_error_layer)
        .init();

    if let Some(e) = offset_err {
        warn!("初始化日志时间错误: {}, 使用默认时区UTC", e);
    }

    if let Some(e) = format_err {
        warn!("日志时间格式({})无效: {}, 使用默认格式", config.time_format, e);
    }

    [f_guard, f_err_guard]
}

fn parse_time_format(
    format: &str,
) -> (
    OwnedFormatItem,
    Option<time::error::InvalidFormatDescription>,
) {
    match time::format_description::parse_owned::<2>(format) {
        Ok(item) => (item, None),
        Err(e) => {
            let default = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
                .expect("Default time format must be valid");
            (default, Some(e))
        }
    }
}
