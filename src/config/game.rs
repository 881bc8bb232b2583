use crate::config::service::ServiceConfig;
use crate::error::{ConfigError, GameResult};
use crate::game::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::error;

pub const DEFAULT_CONFIG: &[u8] = include_bytes!("../../default_config/game.toml");

/// 游戏配置
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// 每轮可猜测的次数
    pub tries: u32,
    /// 是否使用彩色输出
    pub color: bool,
    /// 各难度的数字范围
    pub ranges: Ranges,
    /// 随机数抽取方式
    pub draw: DrawConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Ranges {
    pub min: i32,
    pub easy: i32,
    pub medium: i32,
    pub hard: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DrawConfig {
    /// 随机数不包含上界
    pub exclusive_upper: bool,
    /// 中等难度使用简单难度的上界
    pub medium_uses_easy_bound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tries: 3,
            color: true,
            ranges: Ranges::default(),
            draw: DrawConfig::default(),
        }
    }
}

impl Default for Ranges {
    fn default() -> Self {
        Self {
            min: 1,
            easy: 10,
            medium: 20,
            hard: 30,
        }
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            exclusive_upper: true,
            medium_uses_easy_bound: true,
        }
    }
}

impl GameConfig {
    /// Reads `config/game.toml`, falling back to the default when it fails validation.
    pub fn load() -> Self {
        let config = ServiceConfig::<GameConfig>::new("game", DEFAULT_CONFIG).read();
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                error!("{}, 使用默认配置", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.tries == 0 {
            return Err(ConfigError::InvalidTries(self.tries).into());
        }

        let Ranges {
            min,
            easy,
            medium,
            hard,
        } = self.ranges;
        for (name, max) in [("easy", easy), ("medium", medium), ("hard", hard)] {
            if min >= max {
                return Err(ConfigError::InvalidRange { name, min, max }.into());
            }
        }

        // A target above the display max could never be guessed.
        for difficulty in Difficulty::ALL {
            let bound = difficulty.draw_bound(self);
            let max = difficulty.display_max(&self.ranges);
            if bound > max {
                return Err(ConfigError::DrawBoundExceedsRange {
                    name: difficulty.name(),
                    bound,
                    max,
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GameConfig, DEFAULT_CONFIG};
    use crate::error::{ConfigError, GameError};

    #[test]
    fn default_file_matches_default() {
        let config: GameConfig = toml::from_slice(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_tries_rejected() {
        let config = GameConfig {
            tries: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::Config(ConfigError::InvalidTries(0)))
        ));
    }

    #[test]
    fn empty_range_rejected() {
        let mut config = GameConfig::default();
        config.ranges.medium = 1;
        match config.validate() {
            Err(GameError::Config(e)) => assert_eq!(
                e,
                ConfigError::InvalidRange {
                    name: "medium",
                    min: 1,
                    max: 1
                }
            ),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn medium_drawing_above_its_range_rejected() {
        let mut config = GameConfig::default();
        config.ranges.easy = 30;
        config.ranges.medium = 20;
        match config.validate() {
            Err(GameError::Config(e)) => assert_eq!(
                e,
                ConfigError::DrawBoundExceedsRange {
                    name: "Medium",
                    bound: 30,
                    max: 20
                }
            ),
            other => panic!("unexpected result: {other:?}"),
        }

        config.draw.medium_uses_easy_bound = false;
        assert!(config.validate().is_ok());
    }
}
