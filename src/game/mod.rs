pub mod difficulty;
pub mod round;
pub mod session;

pub use difficulty::Difficulty;
pub use round::{GuessOutcome, Round};
pub use session::{Session, SessionState, SessionSummary};
