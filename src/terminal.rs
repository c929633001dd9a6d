use crate::presenter::Presenter;
use crate::session::Session;
use crate::speech::Speaker;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Line-oriented console front-end
pub struct TerminalPresenter<W: Write> {
    out: W,
    speaker: Option<Speaker>,
    reset_hint: String,
    reset_enabled: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, reset_hint: impl Into<String>, speaker: Option<Speaker>) -> Self {
        Self {
            out,
            speaker,
            reset_hint: reset_hint.into(),
            reset_enabled: false,
        }
    }

    pub fn reset_enabled(&self) -> bool {
        self.reset_enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    fn speak(&mut self, text: &str) {
        if let Some(speaker) = self.speaker.as_mut() {
            speaker.speak(text);
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_title(&mut self, text: &str) {
        self.write_line(&format!("== {} ==", text));
        self.speak(text);
    }

    fn show_message(&mut self, text: &str) {
        self.write_line(text);
        self.speak(text);
    }

    fn clear_input(&mut self) {
        if let Err(e) = write!(self.out, "> ").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write prompt");
        }
    }

    fn set_reset_enabled(&mut self, enabled: bool) {
        self.reset_enabled = enabled;
        if enabled {
            let hint = format!("({})", self.reset_hint);
            self.write_line(&hint);
        }
    }
}

/// What a line typed at the prompt asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Guess(&'a str),
    Reset,
    Quit,
}

pub fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("reset") || trimmed.eq_ignore_ascii_case("/reset") {
        Command::Reset
    } else if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        Command::Quit
    } else {
        Command::Guess(trimmed)
    }
}

/// Drive a session from `input` until EOF or a quit command.
pub async fn run_terminal<R, P>(input: R, presenter: &mut P, session: &mut Session) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    P: Presenter,
{
    presenter.apply(&session.start());
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let effects = match parse_command(&line) {
            Command::Quit => break,
            Command::Reset => session.reset(),
            Command::Guess(raw) => session.submit(raw),
        };
        presenter.apply(&effects);
    }
    tracing::info!(attempts = session.game().attempts(), "terminal session ended");
    Ok(())
}
