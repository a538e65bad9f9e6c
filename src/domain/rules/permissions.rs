//! Permission guard for privileged help-desk actions

use crate::application::errors::CommandError;
use crate::domain::traits::Roster;

/// Actions that require a roster check before they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Enqueue,
    Dequeue,
    Purge,
    Shutdown,
}

impl Action {
    /// Whether `nick` may perform this action according to `roster`.
    pub fn permits(&self, roster: &dyn Roster, nick: &str) -> bool {
        match self {
            Action::Enqueue => roster.is_member(nick),
            Action::Dequeue => roster.is_operator(nick) || roster.is_voiced(nick),
            Action::Purge | Action::Shutdown => {
                roster.is_member(nick) && roster.is_operator(nick)
            }
        }
    }
}

/// Check `nick` against the guard for `action`.
pub fn authorize(action: Action, roster: &dyn Roster, nick: &str) -> Result<(), CommandError> {
    if action.permits(roster, nick) {
        Ok(())
    } else {
        tracing::warn!("Denied {:?} for {}", action, nick);
        Err(CommandError::PermissionDenied)
    }
}
