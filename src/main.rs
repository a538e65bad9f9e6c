use clap::{Parser, Subcommand};

use helpdesk_bot::application::errors::BotError;
use helpdesk_bot::application::messaging::MessageDispatcher;
use helpdesk_bot::application::services::MessageService;
use helpdesk_bot::domain::traits::Bot;
use helpdesk_bot::infrastructure::adapters::{ConsoleAdapter, IrcAdapter};
use helpdesk_bot::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "helpdesk-bot")]
#[command(about = "Help-desk queue bot for a chat channel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Server host (overrides config)
    #[arg(short, long)]
    server: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bot nickname (overrides config)
    #[arg(short, long)]
    nick: Option<String>,

    /// Channel to serve (overrides config)
    #[arg(long)]
    channel: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run {
        /// Read events from stdin instead of connecting to a server
        #[arg(long)]
        console: bool,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { console } => {
            let config = load_config(&cli.config, cli.server, cli.port, cli.nick, cli.channel);
            if let Err(e) = run_bot(config, console) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("helpdesk-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn load_config(
    path: &str,
    server: Option<String>,
    port: Option<u16>,
    nick: Option<String>,
    channel: Option<String>,
) -> Config {
    let mut config = if std::path::Path::new(path).exists() {
        Config::load(path)
            .map(Config::with_env)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            })
    } else {
        Config::load_env()
    };

    if let Some(server) = server {
        config.server.host = server;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(nick) = nick {
        config.bot.nickname = nick;
    }
    if let Some(channel) = channel {
        config.bot.channel = channel;
    }
    config
}

fn run_bot(config: Config, console: bool) -> Result<(), BotError> {
    config.validate()?;
    let dispatcher = MessageDispatcher::new(config.router_settings()?);

    tracing::info!("Starting helpdesk-bot as {} in {}", config.bot.nickname, config.bot.channel);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        if console {
            let bot = ConsoleAdapter::stdin(&config.bot.nickname, &config.bot.channel);
            serve(bot, dispatcher).await
        } else {
            let bot = IrcAdapter::new(
                &config.server.host,
                config.server.port,
                &config.bot.nickname,
                &config.bot.channel,
            );
            serve(bot, dispatcher).await
        }
    })
}

async fn serve<B: Bot>(bot: B, dispatcher: MessageDispatcher) -> Result<(), BotError> {
    let mut service = MessageService::new(bot, dispatcher);
    service.run().await
}

fn init_config() {
    match serde_yaml::to_string(&Config::default()) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => tracing::error!("Failed to render default config: {}", e),
    }
}
