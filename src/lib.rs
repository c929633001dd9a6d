pub mod config;
pub mod game;
pub mod messages;
pub mod presenter;
pub mod session;
pub mod speech;
pub mod telegram;
pub mod terminal;

use anyhow::Result;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

pub use config::{Config, Frontend, SharedConfig};
pub use game::{
    GameError, GameState, InvalidGuess, MAX_SECRET, MIN_SECRET, Outcome, Phase, SecretRange,
};
pub use messages::{Lang, Messages, default_messages, format_with, load_all_messages, parse_lang};
pub use presenter::{Effect, Presenter};
pub use session::Session;
pub use speech::Speaker;
pub use terminal::{TerminalPresenter, run_terminal};

/// Run the configured front-end. Kept out of `main` so the binary stays thin
/// and tests can import the library.
pub async fn run() -> Result<()> {
    // stdout belongs to the terminal front-end
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(frontend = ?config.frontend, lang = ?config.lang, "starting");
    let config: SharedConfig = Arc::new(config);

    match config.frontend {
        Frontend::Telegram => telegram::run_telegram(config).await,
        Frontend::Terminal => {
            let messages = config.messages_for(config.lang);
            let speaker = config
                .speech_command
                .as_deref()
                .and_then(Speaker::from_command_line);
            let mut presenter =
                TerminalPresenter::new(std::io::stdout(), messages.reset_hint.clone(), speaker);
            let mut session = Session::new(GameState::new(), messages);
            let input = BufReader::new(tokio::io::stdin());
            run_terminal(input, &mut presenter, &mut session).await
        }
    }
}
