use std::fmt::{Display, Formatter};
use std::io;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug)]
pub enum GameError {
    Config(ConfigError),
    Io(io::Error),
    Toml(toml::de::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTries(u32),
    InvalidRange {
        name: &'static str,
        min: i32,
        max: i32,
    },
    DrawBoundExceedsRange {
        name: &'static str,
        bound: i32,
        max: i32,
    },
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "配置错误: {}", e),
            Self::Io(e) => write!(f, "IO错误: {}", e),
            Self::Toml(e) => write!(f, "配置解析失败: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTries(n) => write!(f, "tries must be at least 1, got {n}"),
            Self::InvalidRange { name, min, max } => {
                write!(f, "range '{name}' is empty: {min}-{max}")
            }
            Self::DrawBoundExceedsRange { name, bound, max } => write!(
                f,
                "{name} draws up to {bound} but only accepts guesses up to {max}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for GameError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
