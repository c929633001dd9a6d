use crate::game::{GameError, GameState, InvalidGuess, Outcome};
use crate::messages::{Messages, format_with};
use crate::presenter::Effect;

/// One game session: the game state plus the catalog used to talk about it.
///
/// Every user action returns the effects a presenter should render; the
/// session itself never touches presentation state.
#[derive(Clone, Debug)]
pub struct Session {
    game: GameState,
    messages: Messages,
}

impl Session {
    pub fn new(game: GameState, messages: Messages) -> Self {
        Self { game, messages }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Render the initial screen of the current game (page load).
    pub fn start(&self) -> Vec<Effect> {
        self.log_draw();
        self.initial_screen()
    }

    /// Abandon the current round, whatever its phase, and start a new one.
    pub fn restart(&mut self) -> Vec<Effect> {
        self.game.initialize();
        self.start()
    }

    /// Handle one raw guess from the input field.
    pub fn submit(&mut self, raw: &str) -> Vec<Effect> {
        let value = match self.game.validate(raw) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(input = raw, error = %err, "rejected guess");
                return vec![Effect::Message(self.invalid_message(&err))];
            }
        };

        match self.game.submit_guess(value) {
            Ok(Outcome::Correct) => {
                let attempts = self.game.attempts();
                tracing::info!(secret = value, attempts, "secret found");
                let success = format_with(
                    &self.messages.success_correct,
                    &[
                        ("attempts", &attempts.to_string()),
                        ("attempt_word", self.messages.attempt_word(attempts)),
                    ],
                );
                vec![
                    Effect::Title(self.messages.win_title.clone()),
                    Effect::Message(success),
                    Effect::ResetControl(true),
                ]
            }
            Ok(outcome) => {
                let template = if outcome == Outcome::TooLow {
                    &self.messages.too_low
                } else {
                    &self.messages.too_high
                };
                let hint = format_with(template, &[("guess", &value.to_string())]);
                vec![Effect::Message(hint), Effect::ClearInput]
            }
            Err(GameError::RoundOver) => vec![Effect::Message(self.messages.round_over.clone())],
            Err(GameError::Invalid(err)) => vec![Effect::Message(self.invalid_message(&err))],
        }
    }

    /// Start over after a win. The reset control is disabled while a round
    /// is still being played, so a request then only gets a notice.
    pub fn reset(&mut self) -> Vec<Effect> {
        if !self.game.is_won() {
            return vec![Effect::Message(self.messages.reset_unavailable.clone())];
        }
        self.game.reset();
        self.start()
    }

    fn initial_screen(&self) -> Vec<Effect> {
        let range = self.game.range();
        let prompt = format_with(
            &self.messages.prompt,
            &[
                ("min", &range.min().to_string()),
                ("max", &range.max().to_string()),
            ],
        );
        vec![
            Effect::Title(self.messages.title.clone()),
            Effect::Message(prompt),
            Effect::ResetControl(false),
            Effect::ClearInput,
        ]
    }

    fn invalid_message(&self, err: &InvalidGuess) -> String {
        match err {
            InvalidGuess::NotANumber(_) => self.messages.not_a_number.clone(),
            InvalidGuess::OutOfRange { min, max, .. } => format_with(
                &self.messages.out_of_range,
                &[("min", &min.to_string()), ("max", &max.to_string())],
            ),
        }
    }

    fn log_draw(&self) {
        let mut used: Vec<i32> = self.game.used_secrets().iter().copied().collect();
        used.sort_unstable();
        tracing::debug!(?used, "drew a new secret");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SecretRange;
    use crate::messages::{Lang, default_messages};

    fn session() -> Session {
        Session::new(
            GameState::with_seed(SecretRange::DEFAULT, 3),
            default_messages(Lang::En),
        )
    }

    #[test]
    fn first_try_win_uses_singular() {
        let mut s = session();
        s.start();
        let secret = s.game().secret();
        let effects = s.submit(&secret.to_string());
        assert!(effects.contains(&Effect::Message("correct, 1 attempt".to_string())));
        assert!(effects.contains(&Effect::ResetControl(true)));
    }

    #[test]
    fn reset_while_playing_is_refused() {
        let mut s = session();
        s.start();
        let secret = s.game().secret();
        let effects = s.reset();
        assert_eq!(
            effects,
            vec![Effect::Message(
                "reset is available once you guess the secret".to_string()
            )]
        );
        assert_eq!(s.game().secret(), secret);
    }

    #[test]
    fn start_renders_prompt_and_disables_reset() {
        let s = session();
        let effects = s.start();
        assert_eq!(
            effects,
            vec![
                Effect::Title("Secret number game".to_string()),
                Effect::Message("choose a number between 1 and 10".to_string()),
                Effect::ResetControl(false),
                Effect::ClearInput,
            ]
        );
    }
}
