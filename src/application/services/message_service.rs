use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::traits::Bot;

/// Service driving the event loop between a transport and the dispatcher
pub struct MessageService<B: Bot> {
    bot: B,
    dispatcher: MessageDispatcher,
}

impl<B: Bot> MessageService<B> {
    pub fn new(bot: B, dispatcher: MessageDispatcher) -> Self {
        Self { bot, dispatcher }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn dispatcher(&self) -> &MessageDispatcher {
        &self.dispatcher
    }

    /// Start the transport and process events until it closes or a
    /// shutdown is authorized.
    pub async fn run(&mut self) -> Result<(), BotError> {
        self.bot.start().await?;
        let info = self.bot.bot_info();
        tracing::info!("Bot started on {} as {} for {}", info.platform, info.nickname, info.channel);

        while self.step().await? {}

        tracing::info!("Bot stopped");
        Ok(())
    }

    /// Handle a single event; returns `false` once the loop should end.
    pub async fn step(&mut self) -> Result<bool, BotError> {
        let Some(event) = self.bot.next_event().await? else {
            tracing::info!("Connection closed");
            return Ok(false);
        };

        self.dispatcher.set_nickname(self.bot.bot_info().nickname);
        let actions = self.dispatcher.handle(event, self.bot.roster());

        for action in &actions {
            self.bot.execute(action).await?;
            if action.is_quit() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::messaging::RouterSettings;
    use crate::domain::entities::Outbound;
    use crate::infrastructure::adapters::console::ConsoleAdapter;

    fn service(script: &str) -> MessageService<ConsoleAdapter<&[u8]>> {
        let settings = RouterSettings {
            channel: "#help".to_string(),
            nickname: "deskbot".to_string(),
            command_char: '!',
            quit_message: "bye".to_string(),
        };
        let bot = ConsoleAdapter::from_reader("deskbot", "#help", script.as_bytes());
        MessageService::new(bot, MessageDispatcher::new(settings))
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let mut service = service("/join alice\nalice> help my mouse is gone\n");
        service.run().await.unwrap();

        assert_eq!(service.dispatcher().desk().queue().len(), 1);
        assert!(service
            .bot()
            .sent()
            .contains(&Outbound::Join("#help".to_string())));
    }

    #[tokio::test]
    async fn test_run_stops_on_authorized_die() {
        let mut service = service("/join op\n/op op\nop> die\nop: still here\n");
        service.run().await.unwrap();

        assert_eq!(service.bot().sent().last(), Some(&Outbound::Quit("bye".to_string())));
        // The line after the shutdown is never processed
        assert!(service.dispatcher().history().is_empty());
    }

    #[tokio::test]
    async fn test_step_handles_one_event() {
        let mut service = service("alice: !stats\n");
        service.bot.start().await.unwrap();

        // Welcome first, then the channel line
        assert!(service.step().await.unwrap());
        assert!(service.step().await.unwrap());
        assert_eq!(
            service.bot().sent().last(),
            Some(&Outbound::message("#help", "Number of people in the help queue: 0"))
        );
        assert!(!service.step().await.unwrap());
    }
}
