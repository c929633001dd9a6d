use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// Supported languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Pt,
}

/// Parse a short language tag into `Lang`.
pub fn parse_lang(s: &str) -> Option<Lang> {
    match s.to_lowercase().as_str() {
        "en" => Some(Lang::En),
        "pt" => Some(Lang::Pt),
        _ => None,
    }
}

/// Parse a tag or a full locale such as "pt-BR" by falling back to its
/// two-letter prefix.
pub fn parse_locale(s: &str) -> Option<Lang> {
    parse_lang(s).or_else(|| s.get(..2).and_then(parse_lang))
}

/// Return the short tag for a Lang variant (e.g. Lang::En -> "en").
pub fn lang_tag(l: &Lang) -> &'static str {
    match l {
        Lang::En => "en",
        Lang::Pt => "pt",
    }
}

/// Messages container loaded from JSON files per language
#[derive(Clone, Debug, Deserialize)]
pub struct Messages {
    pub language_name: String,
    pub title: String,
    pub prompt: String,
    pub too_low: String,
    pub too_high: String,
    pub win_title: String,
    pub success_correct: String,
    pub attempt_singular: String,
    pub attempt_plural: String,
    pub not_a_number: String,
    pub out_of_range: String,
    pub round_over: String,
    pub reset_unavailable: String,
    pub reset_hint: String,
}

impl Messages {
    /// "attempt" or "attempts" depending on the count.
    pub fn attempt_word(&self, attempts: u32) -> &str {
        if attempts == 1 {
            &self.attempt_singular
        } else {
            &self.attempt_plural
        }
    }
}

/// Return default Messages for a given language; only English is built in.
pub fn default_messages(lang: Lang) -> Messages {
    match lang {
        Lang::En => Messages {
            language_name: "English".to_string(),
            title: "Secret number game".to_string(),
            prompt: "choose a number between {min} and {max}".to_string(),
            too_low: "secret is greater than {guess}".to_string(),
            too_high: "secret is less than {guess}".to_string(),
            win_title: "Congratulations! You got it!".to_string(),
            success_correct: "correct, {attempts} {attempt_word}".to_string(),
            attempt_singular: "attempt".to_string(),
            attempt_plural: "attempts".to_string(),
            not_a_number: "please enter a valid number".to_string(),
            out_of_range: "enter a number between {min} and {max}".to_string(),
            round_over: "you already found the secret, reset to play again".to_string(),
            reset_unavailable: "reset is available once you guess the secret".to_string(),
            reset_hint: "type reset to play again".to_string(),
        },
        _ => default_messages(Lang::En),
    }
}

/// Load a Messages struct from a given JSON file path, falling back to defaults
pub fn load_messages_file(path: &Path, lang: Lang) -> Messages {
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to parse messages, using defaults"
            );
            default_messages(lang)
        }),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read messages, using defaults"
            );
            default_messages(lang)
        }
    }
}

/// Load every `*.json` file from `dir` and return a map from language tag to
/// parsed `Messages`. Files named after an unknown language are skipped.
pub fn load_all_messages(dir: &Path) -> HashMap<String, Messages> {
    let mut map = HashMap::new();
    let Ok(entries) = dir.read_dir() else {
        tracing::warn!(dir = %dir.display(), "messages directory not readable");
        return map;
    };
    for entry in entries.flatten() {
        let Ok(fname) = entry.file_name().into_string() else {
            continue;
        };
        if !fname.to_lowercase().ends_with(".json") {
            continue;
        }
        let stem = &fname[..fname.len() - ".json".len()];
        match parse_lang(stem) {
            Some(lang) => {
                let msgs = load_messages_file(&entry.path(), lang);
                map.insert(lang_tag(&lang).to_string(), msgs);
            }
            None => tracing::warn!(file = %fname, "skipping unknown language file"),
        }
    }
    map
}

/// Simple template formatter: replace `{key}` with `value` for each pair in `pairs`.
pub fn format_with(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut s = template.to_string();
    for (k, v) in pairs {
        s = s.replace(&format!("{{{}}}", k), v);
    }
    s
}
