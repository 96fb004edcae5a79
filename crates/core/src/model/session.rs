use super::identity::Identity;

/// Who is using the app right now.
///
/// Starts as `Unselected`, becomes `Selected` once per launch via an explicit
/// pick, and never transitions back; there is no logout path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unselected,
    Selected(Identity),
}

impl Session {
    /// The selected identity, if any.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        match self {
            Session::Unselected => None,
            Session::Selected(identity) => Some(*identity),
        }
    }

    /// Selects an identity. Has no effect once a selection was made.
    pub fn select(&mut self, identity: Identity) {
        if matches!(self, Session::Unselected) {
            *self = Session::Selected(identity);
        }
    }
}
