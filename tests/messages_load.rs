use secret_number_rust::{Lang, default_messages, load_all_messages};
use std::path::Path;

#[test]
fn messages_dir_loads_all_known_languages() {
    let map = load_all_messages(Path::new("messages"));
    for tag in ["en", "pt"] {
        assert!(map.contains_key(tag), "messages map missing language: {}", tag);
    }
    for (k, v) in map.iter() {
        assert!(!v.language_name.trim().is_empty(), "{} missing language_name", k);
        assert!(v.prompt.contains("{min}") && v.prompt.contains("{max}"), "{} prompt", k);
        assert!(v.too_low.contains("{guess}"), "{} too_low", k);
        assert!(v.too_high.contains("{guess}"), "{} too_high", k);
        assert!(v.success_correct.contains("{attempts}"), "{} success_correct", k);
        assert!(!v.reset_hint.trim().is_empty(), "{} missing reset_hint", k);
    }
}

#[test]
fn english_file_matches_built_in_defaults() {
    let map = load_all_messages(Path::new("messages"));
    let file = &map["en"];
    let built_in = default_messages(Lang::En);
    assert_eq!(file.too_low, built_in.too_low);
    assert_eq!(file.success_correct, built_in.success_correct);
    assert_eq!(file.not_a_number, built_in.not_a_number);
    assert_eq!(file.out_of_range, built_in.out_of_range);
}

#[test]
fn portuguese_uses_its_own_plural() {
    let map = load_all_messages(Path::new("messages"));
    let pt = &map["pt"];
    assert_eq!(pt.attempt_word(1), "tentativa");
    assert_eq!(pt.attempt_word(3), "tentativas");
}

#[test]
fn missing_dir_yields_empty_map() {
    assert!(load_all_messages(Path::new("no-such-messages-dir")).is_empty());
}
