use secret_number_rust::{
    Config,
    telegram::{SharedSessions, reply_for},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

fn shared_config() -> Arc<Config> {
    Arc::new(Config::from_vars(|_| None).unwrap())
}

#[tokio::test]
async fn chats_get_independent_sessions() {
    let sessions: SharedSessions = Arc::new(RwLock::new(HashMap::new()));
    let cfg = shared_config();

    let first = reply_for(&sessions, &cfg, 1, Some("pt-BR"), "hello").await;
    assert_eq!(first, "🎯 Jogo do número secreto\nEscolha um número entre 1 e 10");
    let second = reply_for(&sessions, &cfg, 2, Some("en"), "hello").await;
    assert_eq!(second, "🎯 Secret number game\nchoose a number between 1 and 10");
    assert_eq!(sessions.read().await.len(), 2);

    let invalid = reply_for(&sessions, &cfg, 2, None, "abc").await;
    assert_eq!(invalid, "please enter a valid number");
}

#[tokio::test]
async fn reset_command_waits_for_a_win() {
    let sessions: SharedSessions = Arc::new(RwLock::new(HashMap::new()));
    let cfg = shared_config();
    reply_for(&sessions, &cfg, 5, None, "/start").await;

    let refused = reply_for(&sessions, &cfg, 5, None, "/reset").await;
    assert_eq!(refused, "reset is available once you guess the secret");

    let secret = sessions.read().await[&5].game().secret();
    let win = reply_for(&sessions, &cfg, 5, None, &secret.to_string()).await;
    assert!(win.ends_with("correct, 1 attempt\n/reset: type reset to play again"), "{}", win);

    let again = reply_for(&sessions, &cfg, 5, None, "/reset").await;
    assert!(again.starts_with("🎯 Secret number game"));
    assert!(!sessions.read().await[&5].game().is_won());
}

#[tokio::test]
async fn group_chat_commands_with_bot_name_are_recognised() {
    let sessions: SharedSessions = Arc::new(RwLock::new(HashMap::new()));
    let cfg = shared_config();
    reply_for(&sessions, &cfg, -100, None, "/start@SecretNumberBot").await;

    let refused = reply_for(&sessions, &cfg, -100, None, "/reset@SecretNumberBot").await;
    assert_eq!(refused, "reset is available once you guess the secret");

    let secret = sessions.read().await[&-100].game().secret();
    reply_for(&sessions, &cfg, -100, None, &secret.to_string()).await;
    let again = reply_for(&sessions, &cfg, -100, None, "/reset@SecretNumberBot").await;
    assert!(again.starts_with("🎯 Secret number game"), "{}", again);
}
