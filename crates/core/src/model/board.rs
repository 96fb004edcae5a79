use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// A single ranked line of the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub identity: Identity,
    pub points: i64,
}

/// In-memory score table: exactly one entry per [`Identity`], always.
///
/// Backed by a fixed array indexed by identity, so the one-entry-per-identity
/// invariant holds by construction and the table is never partially populated.
/// Scores may be negative and are unbounded within `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    points: [i64; Identity::ALL.len()],
}

impl ScoreBoard {
    /// Creates a board with every score at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current score for an identity.
    #[must_use]
    pub fn score(&self, identity: Identity) -> i64 {
        self.points[identity.index()]
    }

    /// Overwrites the score for an identity.
    pub fn set_score(&mut self, identity: Identity, points: i64) {
        self.points[identity.index()] = points;
    }

    /// Applies a signed delta to one identity and returns the new value.
    ///
    /// This is the optimistic-update step: the in-memory value changes before
    /// any remote write is confirmed.
    pub fn apply_delta(&mut self, identity: Identity, amount: i64) -> i64 {
        let slot = &mut self.points[identity.index()];
        *slot += amount;
        *slot
    }

    /// Absorbs one fetched row. Rows whose name is not a known identity are
    /// ignored; returns whether the row matched.
    pub fn absorb_row(&mut self, name: &str, points: i64) -> bool {
        match name.parse::<Identity>() {
            Ok(identity) => {
                self.set_score(identity, points);
                true
            }
            Err(_) => false,
        }
    }

    /// All entries in identity order.
    pub fn entries(&self) -> impl Iterator<Item = LeaderboardEntry> + '_ {
        Identity::ALL.iter().map(|&identity| LeaderboardEntry {
            identity,
            points: self.score(identity),
        })
    }

    /// Entries sorted for display: descending by score, ties broken
    /// alphabetically by identity name. The leader is always first.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self.entries().collect();
        entries.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.identity.as_str().cmp(b.identity.as_str()))
        });
        entries
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
