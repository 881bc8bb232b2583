use crate::config::game::GameConfig;
use crate::error::GameResult;
use crate::game::{Difficulty, GuessOutcome, Round};
use crate::terminal::{Color, Console};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const FAREWELL: &str = "Thanks for playing!";
pub const QUIT_COMMAND: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Greeting,
    SelectingDifficulty,
    AwaitingGuess(Difficulty),
    RoundWon,
    RoundLost,
    AwaitingReplay,
    Terminated,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
}

/// One interactive game session over a console.
pub struct Session<R, W, G> {
    console: Console<R, W>,
    config: GameConfig,
    rng: G,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(console: Console<R, W>, config: GameConfig, rng: G) -> Self {
        Self {
            console,
            config,
            rng,
            summary: SessionSummary::default(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Drives the session from the greeting until it terminates.
    pub fn run(&mut self) -> GameResult<SessionSummary> {
        let mut state = SessionState::Greeting;
        while state != SessionState::Terminated {
            state = self.step(state)?;
        }

        Ok(self.summary)
    }

    pub fn step(&mut self, state: SessionState) -> GameResult<SessionState> {
        let next = match state {
            SessionState::Greeting => {
                self.greet()?;
                SessionState::SelectingDifficulty
            }
            SessionState::SelectingDifficulty => self.select_difficulty()?,
            SessionState::AwaitingGuess(difficulty) => self.play_round(difficulty)?,
            SessionState::RoundWon | SessionState::RoundLost => SessionState::AwaitingReplay,
            SessionState::AwaitingReplay => self.ask_replay()?,
            SessionState::Terminated => SessionState::Terminated,
        };

        Ok(next)
    }

    pub fn greet(&mut self) -> GameResult<()> {
        let tries = self.config.tries;
        let c = &mut self.console;

        c.line("Welcome to the number guesser game!")?;
        c.blank()?;
        c.line(&format!(
            "You have {tries} {} to guess a number between a range.",
            tries_word(tries)
        ))?;
        c.line("After a wrong guess, a tip is given telling if the correct number is greater or less than what was entered.")?;
        c.line(&format!(
            "Quit the game at any time by typing '{QUIT_COMMAND}'."
        ))?;
        c.blank()?;

        Ok(())
    }

    /// Shows the menu and prompts until a difficulty is chosen or the player quits.
    pub fn select_difficulty(&mut self) -> GameResult<SessionState> {
        let ranges = self.config.ranges;

        self.console
            .line("Please choose the difficulty level (1, 2 or 3):")?;
        for difficulty in Difficulty::ALL {
            self.console.line(&format!(
                "{}. {} (Numbers between {}-{})",
                difficulty.choice(),
                difficulty,
                ranges.min,
                difficulty.display_max(&ranges)
            ))?;
        }
        self.console.blank()?;

        loop {
            let input = match self.read_command("Enter the number corresponding to your choice: ")? {
                Some(input) => input,
                None => return Ok(SessionState::Terminated),
            };

            match input.trim().parse::<i32>() {
                Ok(choice) => match Difficulty::from_choice(choice) {
                    Some(difficulty) => {
                        info!("选择难度: {}", difficulty);
                        return Ok(SessionState::AwaitingGuess(difficulty));
                    }
                    None => {
                        debug!("无效的难度选项: {}", choice);
                        self.console.colored(
                            Color::Red,
                            "Invalid choice. Please enter a number between 1 and 3.",
                        )?;
                    }
                },
                Err(_) => {
                    debug!("无效的输入: {:?}", input);
                    self.console
                        .colored(Color::Red, "Invalid input. Please enter a number.")?;
                }
            }
            self.console.blank()?;
        }
    }

    /// Plays one round. Returns `RoundWon`, `RoundLost` or `Terminated`.
    pub fn play_round(&mut self, difficulty: Difficulty) -> GameResult<SessionState> {
        let mut round = Round::start(difficulty, &self.config, &mut self.rng);
        self.summary.rounds += 1;
        debug!("第{}轮目标数字: {}", self.summary.rounds, round.target());

        self.console.blank()?;
        self.console.line(&format!(
            "{} difficulty chosen. Guessing numbers between {}-{}.",
            difficulty,
            round.min(),
            round.max()
        ))?;

        loop {
            self.console.blank()?;
            let input = match self.read_command("Enter your guess: ")? {
                Some(input) => input,
                None => return Ok(SessionState::Terminated),
            };

            let guess = match round.parse_guess(&input) {
                Some(guess) => guess,
                None => {
                    debug!("无效的猜测: {:?}", input);
                    self.console.colored(
                        Color::Red,
                        &format!(
                            "Please enter a number between {} and {}.",
                            round.min(),
                            round.max()
                        ),
                    )?;
                    continue;
                }
            };

            match round.guess(guess) {
                GuessOutcome::Correct => {
                    self.summary.wins += 1;
                    info!("第{}轮胜利", self.summary.rounds);
                    self.console
                        .colored(Color::Green, "CORRECT!! You guessed right and WON!")?;
                    return Ok(SessionState::RoundWon);
                }
                GuessOutcome::Greater { tries_left } => {
                    self.wrong_guess(tries_left)?;
                    self.console.colored(
                        Color::Yellow,
                        "The correct number is greater than what was entered.",
                    )?;
                }
                GuessOutcome::Less { tries_left } => {
                    self.wrong_guess(tries_left)?;
                    self.console.colored(
                        Color::Yellow,
                        "The correct number is less than what was entered.",
                    )?;
                }
                GuessOutcome::OutOfTries => {
                    self.summary.losses += 1;
                    info!("第{}轮失败, 目标数字: {}", self.summary.rounds, round.target());
                    self.console
                        .colored(Color::Red, "WRONG!! You are out of tries and LOST!")?;
                    return Ok(SessionState::RoundLost);
                }
            }
        }
    }

    /// Asks whether to play again. Only an exact `Y` or `y` restarts.
    pub fn ask_replay(&mut self) -> GameResult<SessionState> {
        self.console.blank()?;
        self.console.line("Do you want to play again? (Y or N)")?;
        self.console.blank()?;

        let answer = match self.read_command("Play again?: ")? {
            Some(answer) => answer,
            None => return Ok(SessionState::Terminated),
        };

        self.console.blank()?;

        if answer.eq_ignore_ascii_case("y") {
            Ok(SessionState::SelectingDifficulty)
        } else {
            self.console.line(FAREWELL)?;
            Ok(SessionState::Terminated)
        }
    }

    /// Says farewell and returns `true` when `input` is the quit command.
    pub fn check_quit(&mut self, input: &str) -> GameResult<bool> {
        if !input.trim().eq_ignore_ascii_case(QUIT_COMMAND) {
            return Ok(false);
        }

        self.farewell()?;
        Ok(true)
    }

    /// `None` means the session must terminate, the farewell is already written.
    fn read_command(&mut self, prompt: &str) -> GameResult<Option<String>> {
        self.console.prompt(prompt)?;

        let input = match self.console.read_line()? {
            Some(input) => input,
            None => {
                debug!("输入已关闭");
                self.farewell()?;
                return Ok(None);
            }
        };

        if self.check_quit(&input)? {
            return Ok(None);
        }

        Ok(Some(input))
    }

    fn wrong_guess(&mut self, tries_left: u32) -> GameResult<()> {
        self.console.colored(
            Color::Red,
            &format!(
                "Wrong number, try again. {tries_left} {} left.",
                tries_word(tries_left)
            ),
        )?;
        Ok(())
    }

    fn farewell(&mut self) -> GameResult<()> {
        self.console.blank()?;
        self.console.line(FAREWELL)?;
        Ok(())
    }
}

fn tries_word(n: u32) -> &'static str {
    if n == 1 {
        "try"
    } else {
        "tries"
    }
}
