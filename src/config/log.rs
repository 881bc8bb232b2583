use serde::{Deserialize, Serialize};

pub static DEFAULT_CONFIG: &[u8] = include_bytes!("../../default_config/log.toml");

pub const DEFAULT_TIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// 日志配置
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// 写入日志文件的最低等级, 错误日志另外写入 `error` 子目录
    pub max_level: Level,
    /// 时间格式, 无效时回退到默认格式
    pub time_format: String,
    /// 日志文件所在目录
    pub directory: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_level: Level::Info,
            time_format: DEFAULT_TIME_FORMAT.into(),
            directory: "log".into(),
        }
    }
}

/// Serializable mirror of `tracing::Level`, which has no serde support.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => Self::TRACE,
            Level::Debug => Self::DEBUG,
            Level::Info => Self::INFO,
            Level::Warn => Self::WARN,
            Level::Error => Self::ERROR,
        }
    }
}

impl Level {
    pub fn as_tracing_level(&self) -> tracing::Level {
        (*self).into()
    }
}
