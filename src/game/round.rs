use crate::config::game::GameConfig;
use crate::game::Difficulty;
use rand::Rng;

/// State of one round, from the draw until it is won or lost.
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    target: i32,
    tries_left: u32,
    min: i32,
    max: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    /// The target is greater than the guess.
    Greater { tries_left: u32 },
    /// The target is less than the guess.
    Less { tries_left: u32 },
    OutOfTries,
}

impl Round {
    pub fn new(difficulty: Difficulty, target: i32, tries: u32, min: i32, max: i32) -> Self {
        Self {
            difficulty,
            target,
            tries_left: tries,
            min,
            max,
        }
    }

    pub fn start<G: Rng>(difficulty: Difficulty, config: &GameConfig, rng: &mut G) -> Self {
        let target = difficulty.draw_target(config, rng);
        Self::new(
            difficulty,
            target,
            config.tries,
            config.ranges.min,
            difficulty.display_max(&config.ranges),
        )
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn tries_left(&self) -> u32 {
        self.tries_left
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Inclusive on both ends.
    pub fn accepts(&self, guess: i32) -> bool {
        (self.min..=self.max).contains(&guess)
    }

    /// Parses a guess. Non-numeric and out of range input both yield `None`.
    pub fn parse_guess(&self, input: &str) -> Option<i32> {
        input
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|&guess| self.accepts(guess))
    }

    /// Evaluates an accepted guess, consuming a try when it is wrong.
    pub fn guess(&mut self, guess: i32) -> GuessOutcome {
        if guess == self.target {
            return GuessOutcome::Correct;
        }

        self.tries_left = self.tries_left.saturating_sub(1);
        if self.tries_left == 0 {
            return GuessOutcome::OutOfTries;
        }

        let tries_left = self.tries_left;
        if self.target > guess {
            GuessOutcome::Greater { tries_left }
        } else {
            GuessOutcome::Less { tries_left }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GuessOutcome, Round};
    use crate::config::game::GameConfig;
    use crate::game::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn easy(target: i32) -> Round {
        Round::new(Difficulty::Easy, target, 3, 1, 10)
    }

    #[test]
    fn greater_less_then_win() {
        let mut round = easy(7);
        assert_eq!(round.guess(3), GuessOutcome::Greater { tries_left: 2 });
        assert_eq!(round.guess(9), GuessOutcome::Less { tries_left: 1 });
        assert_eq!(round.guess(7), GuessOutcome::Correct);
        assert_eq!(round.tries_left(), 1);
    }

    #[test]
    fn first_guess_wins() {
        let mut round = easy(4);
        assert_eq!(round.guess(4), GuessOutcome::Correct);
        assert_eq!(round.tries_left(), 3);
    }

    #[test]
    fn three_wrong_guesses_lose() {
        let mut round = easy(5);
        assert_eq!(round.guess(1), GuessOutcome::Greater { tries_left: 2 });
        assert_eq!(round.guess(2), GuessOutcome::Greater { tries_left: 1 });
        assert_eq!(round.guess(10), GuessOutcome::OutOfTries);
        assert_eq!(round.tries_left(), 0);
    }

    #[test]
    fn parse_rejects_without_consuming() {
        let round = easy(5);
        assert_eq!(round.parse_guess("abc"), None);
        assert_eq!(round.parse_guess("0"), None);
        assert_eq!(round.parse_guess("11"), None);
        assert_eq!(round.parse_guess("-3"), None);
        assert_eq!(round.parse_guess(""), None);
        assert_eq!(round.tries_left(), 3);

        assert_eq!(round.parse_guess(" 1 "), Some(1));
        assert_eq!(round.parse_guess("10"), Some(10));
    }

    #[test]
    fn start_uses_config() {
        let config = GameConfig {
            tries: 5,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let round = Round::start(Difficulty::Hard, &config, &mut rng);

        assert_eq!(round.tries_left(), 5);
        assert_eq!((round.min(), round.max()), (1, 30));
        assert!(round.accepts(round.target()));
        assert_eq!(round.difficulty(), Difficulty::Hard);
    }
}
