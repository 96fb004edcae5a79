use score_core::model::{Identity, ScoreBoard};

use crate::vm::points_fmt::format_points;

/// One rendered leaderboard line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: usize,
    pub name: &'static str,
    pub points_str: String,
    pub is_current: bool,
}

/// Maps the board into display rows: descending by score, ranks starting at
/// one, the current user's row flagged for highlighting.
#[must_use]
pub fn map_leaderboard_rows(board: &ScoreBoard, current: Identity) -> Vec<LeaderboardRowVm> {
    board
        .leaderboard()
        .into_iter()
        .enumerate()
        .map(|(index, entry)| LeaderboardRowVm {
            rank: index + 1,
            name: entry.identity.as_str(),
            points_str: format_points(entry.points),
            is_current: entry.identity == current,
        })
        .collect()
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
