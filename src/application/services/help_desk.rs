//! Help-desk service - Queue operations with permission checks and replies

use crate::application::errors::CommandError;
use crate::application::messaging::outbox::Outbox;
use crate::domain::entities::HelpQueue;
use crate::domain::rules::{authorize, Action};
use crate::domain::traits::Roster;

/// Owns the help queue and turns queue operations into replies.
#[derive(Debug, Default)]
pub struct HelpDesk {
    queue: HelpQueue,
}

impl HelpDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &HelpQueue {
        &self.queue
    }

    /// Add `nick`'s question and alert every volunteer.
    pub fn request_help(
        &mut self,
        roster: &dyn Roster,
        nick: &str,
        question: &str,
        out: &mut Outbox,
    ) -> Result<(), CommandError> {
        authorize(Action::Enqueue, roster, nick)?;
        if question.trim().is_empty() {
            return Err(CommandError::InvalidArgument(
                "Usage: help <question>".to_string(),
            ));
        }

        let waiting = self.queue.enqueue(nick, question)?;
        tracing::info!("{} joined the help queue ({} waiting)", nick, waiting);

        out.tell(nick, "Your question has been added to the help queue.");
        out.tell(nick, "A volunteer will contact you as soon as they can.");
        out.tell(
            nick,
            &format!("There are currently {} person(s) in the queue.", waiting),
        );

        for volunteer in roster.voiced_members() {
            out.tell(&volunteer, "A person has been added to the help queue.");
        }
        Ok(())
    }

    /// Hand the next waiting member to a volunteer.
    pub fn next(
        &mut self,
        roster: &dyn Roster,
        nick: &str,
        out: &mut Outbox,
    ) -> Result<(), CommandError> {
        authorize(Action::Dequeue, roster, nick)?;

        match self.queue.dequeue(roster) {
            Some(entry) => {
                tracing::info!("{} is helping {}", nick, entry.requester());
                out.tell(nick, &format!("Next User: {}", entry.requester()));
                out.tell(nick, &format!(" Question: {}", entry.question()));
                out.tell(
                    nick,
                    "Please contact the user via private message to start helping them.",
                );
            }
            None => out.tell(nick, "There is no one in the help queue at this time."),
        }
        Ok(())
    }

    /// Drop every pending request.
    pub fn purge(
        &mut self,
        roster: &dyn Roster,
        nick: &str,
        out: &mut Outbox,
    ) -> Result<(), CommandError> {
        authorize(Action::Purge, roster, nick)?;

        let cleared = self.queue.purge();
        tracing::info!("{} purged the help queue ({} removed)", nick, cleared);
        out.tell(nick, "The help queue has been purged");
        Ok(())
    }
}
