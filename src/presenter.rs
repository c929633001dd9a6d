/// A presentation request emitted by a [`crate::Session`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Title(String),
    Message(String),
    /// Clear the guess input and put the focus back on it.
    ClearInput,
    /// Enable or disable the reset control.
    ResetControl(bool),
}

/// Front-end adapter. Implementations must not fail the game: a rendering
/// problem is logged and skipped.
pub trait Presenter {
    fn show_title(&mut self, text: &str);
    fn show_message(&mut self, text: &str);
    fn clear_input(&mut self);
    fn set_reset_enabled(&mut self, enabled: bool);

    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Title(text) => self.show_title(text),
                Effect::Message(text) => self.show_message(text),
                Effect::ClearInput => self.clear_input(),
                Effect::ResetControl(enabled) => self.set_reset_enabled(*enabled),
            }
        }
    }
}
