use crate::messages::{Lang, Messages, default_messages, lang_tag, load_all_messages, parse_locale};
use anyhow::{Result, bail};
use dotenvy::dotenv;
use std::{collections::HashMap, env, path::Path, sync::Arc};

/// Which front-end drives the game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frontend {
    Terminal,
    Telegram,
}

/// Runtime configuration (from environment with sensible defaults).
/// The secret range is a compile-time constant and is not configurable here.
#[derive(Clone, Debug)]
pub struct Config {
    pub frontend: Frontend,
    pub lang: Lang,
    pub messages: HashMap<String, Messages>,
    // FRONTEND=terminal only; e.g. "espeak-ng -v pt-br -s 210"
    pub speech_command: Option<String>,
}

pub type SharedConfig = Arc<Config>;

impl Config {
    /// Build the configuration from `lookup`, which maps a variable name to
    /// its value.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let frontend = match lookup("FRONTEND").as_deref().map(str::trim) {
            None | Some("") => Frontend::Terminal,
            Some(v) if v.eq_ignore_ascii_case("terminal") => Frontend::Terminal,
            Some(v) if v.eq_ignore_ascii_case("telegram") => Frontend::Telegram,
            Some(other) => bail!(
                "Invalid configuration: FRONTEND ({}) must be `terminal` or `telegram`.",
                other
            ),
        };

        let lang = match lookup("DEFAULT_LANG") {
            Some(v) => parse_locale(v.trim()).unwrap_or_else(|| {
                tracing::warn!(value = %v, "unknown DEFAULT_LANG, using en");
                Lang::En
            }),
            None => Lang::En,
        };

        let dir = lookup("MESSAGES_DIR").unwrap_or_else(|| "messages".to_string());
        let mut messages = load_all_messages(Path::new(&dir));
        // English is always available as the last fallback
        messages
            .entry(lang_tag(&Lang::En).to_string())
            .or_insert_with(|| default_messages(Lang::En));

        let speech_command = lookup("SPEECH_COMMAND").filter(|v| !v.trim().is_empty());

        Ok(Self {
            frontend,
            lang,
            messages,
            speech_command,
        })
    }

    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Messages for `lang`, falling back to the default language, then English.
    pub fn messages_for(&self, lang: Lang) -> Messages {
        self.messages
            .get(lang_tag(&lang))
            .or_else(|| self.messages.get(lang_tag(&self.lang)))
            .or_else(|| self.messages.get(lang_tag(&Lang::En)))
            .cloned()
            .unwrap_or_else(|| default_messages(Lang::En))
    }
}
