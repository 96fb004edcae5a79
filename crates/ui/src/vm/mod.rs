mod leaderboard_vm;
mod points_fmt;

pub use leaderboard_vm::{LeaderboardRowVm, map_leaderboard_rows};
pub use points_fmt::format_points;
