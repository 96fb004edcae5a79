mod board;
mod identity;
mod session;

pub use board::{LeaderboardEntry, ScoreBoard};
pub use identity::{Identity, ParseIdentityError};
pub use session::Session;
