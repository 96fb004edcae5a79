use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the recognized users. The set is closed and known at build time;
/// rows from the store that do not match any variant are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Identity {
    Alok,
    Deep,
    Vikas,
}

impl Identity {
    /// All identities, in alphabetical order of their names.
    ///
    /// This order doubles as the leaderboard tie-break.
    pub const ALL: [Identity; 3] = [Identity::Alok, Identity::Deep, Identity::Vikas];

    /// Returns the name used as the row key in the remote table.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Identity::Alok => "Alok",
            Identity::Deep => "Deep",
            Identity::Vikas => "Vikas",
        }
    }

    /// Position of this identity in [`Identity::ALL`].
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Identity::Alok => 0,
            Identity::Deep => 1,
            Identity::Vikas => 2,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for parsing an identity from a row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdentityError {
    raw: String,
}

impl ParseIdentityError {
    /// The rejected input.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseIdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown identity: {}", self.raw)
    }
}

impl std::error::Error for ParseIdentityError {}

impl FromStr for Identity {
    type Err = ParseIdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alok" => Ok(Identity::Alok),
            "Deep" => Ok(Identity::Deep),
            "Vikas" => Ok(Identity::Vikas),
            other => Err(ParseIdentityError {
                raw: other.to_string(),
            }),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
