use std::process::{Child, Command, Stdio};

/// Mirrors displayed text to an external text-to-speech program, e.g.
/// `espeak-ng -v pt-br -s 210`. The text is passed as the last argument.
#[derive(Debug)]
pub struct Speaker {
    program: String,
    args: Vec<String>,
    current: Option<Child>,
}

impl Speaker {
    /// Split a command line on whitespace; `None` when it is blank.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            current: None,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Speak `text`, cutting off whatever is still being spoken.
    pub fn speak(&mut self, text: &str) {
        self.stop();
        match Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => self.current = Some(child),
            Err(e) => tracing::warn!(program = %self.program, error = %e, "speech unavailable"),
        }
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for Speaker {
    fn drop(&mut self) {
        self.stop();
    }
}
