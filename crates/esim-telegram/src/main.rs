//! eSIM assistant Telegram bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx cargo run -p esim-telegram
//! ```

use std::time::Duration;

use clap::Parser;
use esim_core::config;
use esim_telegram::bot::DEFAULT_POLL_TIMEOUT_SECS;
use esim_telegram::{EsimBot, PollingOptions, TelegramError};
use tracing_subscriber::EnvFilter;

/// TravelConnect eSIM assistant - menu-driven Telegram bot
#[derive(Parser, Debug)]
#[command(name = "esim-telegram")]
#[command(about = "Telegram bot answering eSIM product, coverage and pricing questions")]
struct Args {
    /// Long-polling timeout in seconds
    #[arg(long, default_value_t = DEFAULT_POLL_TIMEOUT_SECS)]
    poll_timeout: u64,

    /// Process updates that queued up while the bot was offline
    #[arg(long)]
    keep_pending: bool,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "esim_telegram=info,esim_core=info,teloxide=warn",
        1 => "esim_telegram=debug,esim_core=debug,teloxide=info",
        2 => "esim_telegram=trace,esim_core=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Secrets file in the config directory first, then local .env.local or .env
    for path in config::load_env() {
        tracing::debug!(path = %path.display(), "Environment file loaded");
    }

    let bot = match EsimBot::new() {
        Ok(bot) => bot,
        Err(e @ TelegramError::NoToken) => {
            tracing::error!("{} environment variable is not set!", config::TOKEN_ENV);
            eprintln!("Ошибка: Переменная окружения {} не установлена!", config::TOKEN_ENV);
            eprintln!("Пожалуйста, установите токен:");
            eprintln!("export {}='ваш_токен'", config::TOKEN_ENV);
            eprintln!("или добавьте его в {}", config::env_file().display());
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Bot initialized successfully");
            println!("\n[robot] eSIM assistant bot");
            println!("   Bot: @{}", username);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get bot info");
            eprintln!("Ошибка запуска бота: {}", e);
            return Err(e.into());
        }
    }

    println!("\n[phone] Open Telegram and send /start to begin");
    println!("   Press Ctrl+C to stop\n");

    let options = PollingOptions {
        timeout: Duration::from_secs(args.poll_timeout),
        drop_pending_updates: !args.keep_pending,
    };
    bot.start_polling(options).await?;

    println!("Бот остановлен.");
    Ok(())
}
