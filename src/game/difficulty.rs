use crate::config::game::{GameConfig, Ranges};
use rand::Rng;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Maps a menu choice (1, 2 or 3).
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn choice(&self) -> i32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Upper bound shown to the player and used to validate guesses.
    pub fn display_max(&self, ranges: &Ranges) -> i32 {
        match self {
            Self::Easy => ranges.easy,
            Self::Medium => ranges.medium,
            Self::Hard => ranges.hard,
        }
    }

    /// Upper bound handed to the random draw.
    ///
    /// Medium draws with the easy bound unless `draw.medium_uses_easy_bound`
    /// is turned off, so its targets never exceed the easy range by default.
    pub fn draw_bound(&self, config: &GameConfig) -> i32 {
        match self {
            Self::Medium if config.draw.medium_uses_easy_bound => config.ranges.easy,
            or => or.display_max(&config.ranges),
        }
    }

    pub fn draw_target<G: Rng>(&self, config: &GameConfig, rng: &mut G) -> i32 {
        let min = config.ranges.min;
        let bound = self.draw_bound(config);

        if config.draw.exclusive_upper {
            rng.gen_range(min..bound)
        } else {
            rng.gen_range(min..=bound)
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;
    use crate::config::game::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draws(difficulty: Difficulty, config: &GameConfig) -> (i32, i32) {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut low = i32::MAX;
        let mut high = i32::MIN;
        for _ in 0..2000 {
            let n = difficulty.draw_target(config, &mut rng);
            low = low.min(n);
            high = high.max(n);
        }
        (low, high)
    }

    #[test]
    fn choices() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_choice(difficulty.choice()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_choice(0), None);
        assert_eq!(Difficulty::from_choice(4), None);
    }

    #[test]
    fn default_draws_exclude_upper_bound() {
        let config = GameConfig::default();
        assert_eq!(draws(Difficulty::Easy, &config), (1, 9));
        assert_eq!(draws(Difficulty::Hard, &config), (1, 29));
    }

    #[test]
    fn medium_draws_from_easy_bound_by_default() {
        let config = GameConfig::default();
        assert_eq!(Difficulty::Medium.display_max(&config.ranges), 20);
        assert_eq!(Difficulty::Medium.draw_bound(&config), 10);
        assert_eq!(draws(Difficulty::Medium, &config), (1, 9));
    }

    #[test]
    fn corrected_draws_cover_display_range() {
        let mut config = GameConfig::default();
        config.draw.exclusive_upper = false;
        config.draw.medium_uses_easy_bound = false;

        for difficulty in Difficulty::ALL {
            let max = difficulty.display_max(&config.ranges);
            assert_eq!(draws(difficulty, &config), (1, max));
        }
    }
}
