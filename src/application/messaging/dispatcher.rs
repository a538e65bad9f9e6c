//! Message dispatcher - Routes transport events to command handlers

use crate::application::errors::CommandError;
use crate::application::services::HelpDesk;
use crate::domain::entities::{
    ChatLine, Event, HistoryLog, Outbound, PrivateCommand, PublicCommand, ReplyScope,
};
use crate::domain::rules::dice::{DiceRoll, DEFAULT_ROLL};
use crate::domain::rules::{authorize, Action, DieSource, RandomDice};
use crate::domain::traits::Roster;
use super::outbox::Outbox;
use super::parser::{Invocation, MessageParser};

/// Static settings the dispatcher needs from configuration.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub channel: String,
    pub nickname: String,
    pub command_char: char,
    pub quit_message: String,
}

/// Routes each event to its handler and returns the resulting actions.
///
/// Owns all mutable help-desk state. Events are handled one at a time, so
/// nothing here is shared or locked.
pub struct MessageDispatcher {
    parser: MessageParser,
    channel: String,
    nickname: String,
    quit_message: String,
    desk: HelpDesk,
    history: HistoryLog,
    dice: Box<dyn DieSource>,
}

impl MessageDispatcher {
    pub fn new(settings: RouterSettings) -> Self {
        Self {
            parser: MessageParser::new(settings.command_char),
            channel: settings.channel,
            nickname: settings.nickname,
            quit_message: settings.quit_message,
            desk: HelpDesk::new(),
            history: HistoryLog::new(),
            dice: Box::new(RandomDice::new()),
        }
    }

    /// Replace the die source
    pub fn with_dice<D: DieSource + 'static>(mut self, dice: D) -> Self {
        self.dice = Box::new(dice);
        self
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Track a nickname change made outside the dispatcher.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    pub fn desk(&self) -> &HelpDesk {
        &self.desk
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: Event, roster: &dyn Roster) -> Vec<Outbound> {
        let mut out = Outbox::new(self.channel.clone());

        match event {
            Event::Welcome => {
                tracing::info!("Registered as {}, joining {}", self.nickname, self.channel);
                out.push(Outbound::Join(self.channel.clone()));
            }
            Event::NickCollision => {
                self.nickname.push('_');
                tracing::info!("Nickname in use, retrying as {}", self.nickname);
                out.push(Outbound::Nick(self.nickname.clone()));
            }
            Event::PublicMessage { sender, text } => {
                self.history.record(ChatLine::new(sender.as_str(), text.as_str()));
                if let Some(inv) = self.parser.parse_public(&text) {
                    self.dispatch_public(&sender, inv, roster, &mut out);
                }
            }
            Event::PrivateMessage { sender, text } => {
                if let Some(inv) = self.parser.parse_private(&text) {
                    self.dispatch_private(&sender, inv, roster, &mut out);
                }
            }
        }

        self.record_channel_lines(&out);
        out.into_actions()
    }

    fn dispatch_public(&mut self, nick: &str, inv: Invocation, roster: &dyn Roster, out: &mut Outbox) {
        let command = match PublicCommand::lookup(&inv.name) {
            Ok(command) => command,
            // Unknown commands are answered privately even from the channel.
            Err(err) => return Self::reject(nick, ReplyScope::Direct, err, out),
        };
        tracing::debug!("{} ran public {} {:?}", nick, command.name(), inv.args);

        let result = match command {
            PublicCommand::Info => Self::info(&inv, roster, out),
            PublicCommand::Help => {
                out.tell(nick, &self.help_text());
                Ok(())
            }
            PublicCommand::Stats => {
                out.say(&format!(
                    "Number of people in the help queue: {}",
                    self.desk.queue().len()
                ));
                Ok(())
            }
            PublicCommand::Roll => self.roll(nick, &inv, out),
        };

        if let Err(err) = result {
            Self::reject(nick, command.error_scope(), err, out);
        }
    }

    fn dispatch_private(&mut self, nick: &str, inv: Invocation, roster: &dyn Roster, out: &mut Outbox) {
        let command = match PrivateCommand::lookup(&inv.name) {
            Ok(command) => command,
            Err(err) => return Self::reject(nick, ReplyScope::Direct, err, out),
        };
        tracing::debug!("{} ran private {}", nick, command.name());

        let result = match command {
            PrivateCommand::History => {
                for line in self.history.iter() {
                    out.tell(nick, &line.to_string());
                }
                Ok(())
            }
            PrivateCommand::Help => self.desk.request_help(roster, nick, &inv.rest(), out),
            PrivateCommand::Next => self.desk.next(roster, nick, out),
            PrivateCommand::Purge => self.desk.purge(roster, nick, out),
            PrivateCommand::Die => authorize(Action::Shutdown, roster, nick).map(|()| {
                tracing::info!("Shutdown requested by {}", nick);
                out.push(Outbound::Quit(self.quit_message.clone()));
            }),
        };

        if let Err(err) = result {
            Self::reject(nick, ReplyScope::Direct, err, out);
        }
    }

    fn info(inv: &Invocation, roster: &dyn Roster, out: &mut Outbox) -> Result<(), CommandError> {
        let [target] = inv.args.as_slice() else {
            return Err(CommandError::InvalidArgument("Usage: info <nick>".to_string()));
        };

        if roster.is_member(target) {
            out.say(&format!("{} is in the channel.", target));
            if roster.is_operator(target) {
                out.say(&format!("{} is an OP", target));
            }
            if roster.is_voiced(target) {
                out.say(&format!("{} is Voiced", target));
            }
        } else {
            out.say(&format!("Unknown user: {}", target));
        }
        Ok(())
    }

    fn roll(&mut self, nick: &str, inv: &Invocation, out: &mut Outbox) -> Result<(), CommandError> {
        let expr = inv.args.first().map(String::as_str).unwrap_or(DEFAULT_ROLL);
        let roll = DiceRoll::parse(expr)?;
        let result = roll.roll(self.dice.as_mut());
        out.say(&format!("{}: ({}) = {}", nick, expr, result));
        Ok(())
    }

    fn reject(nick: &str, scope: ReplyScope, err: CommandError, out: &mut Outbox) {
        match (scope, err) {
            (ReplyScope::Channel, CommandError::InvalidArgument(reason)) => {
                out.say(&format!("{}: {}", nick, reason));
            }
            (_, err) => out.tell(nick, &err.to_string()),
        }
    }

    fn record_channel_lines(&mut self, out: &Outbox) {
        for action in out.actions() {
            if let Outbound::Message { target, text } = action {
                if out.is_channel(target) {
                    self.history.record(ChatLine::new(self.nickname.as_str(), text.as_str()));
                }
            }
        }
    }

    fn help_text(&self) -> String {
        let prefix = self.parser.command_char();
        let mut help = String::from("Help Desk Bot\n==================\n");
        help.push_str(&format!(
            "Public commands are said directly in the {} channel.\n\nValid Public Commands:\n",
            self.channel
        ));
        for cmd in PublicCommand::ALL {
            help.push_str(&format!("    {}{} - {}\n", prefix, cmd.usage(), cmd.description()));
        }
        help.push_str("==================\nPrivate Commands are sent as private messages to the help bot.\n\nValid Private Commands:\n");
        for cmd in PrivateCommand::ALL {
            help.push_str(&format!("    {} - {}\n", cmd.usage(), cmd.description()));
        }
        help
    }
}
