use crate::config::SharedConfig;
use crate::game::GameState;
use crate::messages::{Lang, parse_locale};
use crate::presenter::Presenter;
use crate::session::Session;
use anyhow::Result;
use std::{collections::HashMap, sync::Arc};
use teloxide::prelude::*;
use tokio::sync::RwLock;

/// Sessions keyed by chat id. Entries live as long as the process, like the
/// rest of the in-memory game state.
pub type SharedSessions = Arc<RwLock<HashMap<i64, Session>>>;

/// Collects effects into the text of a single chat reply.
#[derive(Debug, Default)]
pub struct ReplyPresenter {
    lines: Vec<String>,
    reset_hint: String,
}

impl ReplyPresenter {
    pub fn new(reset_hint: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            reset_hint: reset_hint.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}

impl Presenter for ReplyPresenter {
    fn show_title(&mut self, text: &str) {
        self.lines.push(format!("🎯 {}", text));
    }

    fn show_message(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    // a chat has no input field to clear
    fn clear_input(&mut self) {}

    fn set_reset_enabled(&mut self, enabled: bool) {
        if enabled {
            self.lines.push(format!("/reset: {}", self.reset_hint));
        }
    }
}

/// Pick the chat language from the sender's Telegram locale.
pub fn effective_lang(user_language_code: Option<&str>, default: Lang) -> Lang {
    user_language_code.and_then(parse_locale).unwrap_or(default)
}

/// The command token of `text` with any `@BotName` suffix removed, as sent in
/// group chats; `None` when the text is not a command.
pub fn command_name(text: &str) -> Option<&str> {
    let token = text.split_whitespace().next()?;
    if !token.starts_with('/') {
        return None;
    }
    Some(token.split_once('@').map_or(token, |(name, _)| name))
}

/// Apply one incoming text to the chat's session and return the reply text.
/// A chat without a session gets one, and its first reply is the start screen.
pub async fn reply_for(
    sessions: &SharedSessions,
    config: &SharedConfig,
    chat_id: i64,
    user_language_code: Option<&str>,
    text: &str,
) -> String {
    let mut lock = sessions.write().await;
    let (effects, hint) = match lock.get_mut(&chat_id) {
        Some(session) => {
            let effects = match command_name(text) {
                Some("/start") => session.restart(),
                Some("/reset") => session.reset(),
                _ => session.submit(text),
            };
            (effects, session.messages().reset_hint.clone())
        }
        None => {
            let lang = effective_lang(user_language_code, config.lang);
            let session = Session::new(GameState::new(), config.messages_for(lang));
            let effects = session.start();
            let hint = session.messages().reset_hint.clone();
            tracing::info!(chat_id, ?lang, "new chat session");
            lock.insert(chat_id, session);
            (effects, hint)
        }
    };
    drop(lock);

    let mut reply = ReplyPresenter::new(hint);
    reply.apply(&effects);
    reply.into_text()
}

async fn handle_message(
    bot: &Bot,
    msg: &Message,
    sessions: SharedSessions,
    config: SharedConfig,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let language_code = msg.from.as_ref().and_then(|u| u.language_code.as_deref());
    let reply = reply_for(&sessions, &config, msg.chat.id.0, language_code, text).await;
    if !reply.is_empty() {
        bot.send_message(msg.chat.id, reply).await?;
    }
    Ok(())
}

/// Serve the game over Telegram; the token comes from `TELOXIDE_TOKEN`.
pub async fn run_telegram(config: SharedConfig) -> Result<()> {
    let bot = Bot::from_env();
    let sessions: SharedSessions = Arc::new(RwLock::new(HashMap::new()));
    tracing::info!("telegram front-end started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let sessions = sessions.clone();
        let config = config.clone();
        async move {
            if let Err(err) = handle_message(&bot, &msg, sessions, config).await {
                tracing::error!("handler error: {:?}", err);
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
