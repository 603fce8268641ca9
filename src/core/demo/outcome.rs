//! Result of running one demo command.

use crate::models::OutputLine;

use super::DemoState;

/// What a command printed and how it exited.
///
/// Mutating commands (and `board get`/`reset`) carry a deep copy of the
/// post-command state so callers can render without touching the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Canonical form of the command that ran, e.g. `kanban card delete 2`
    pub command: String,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: i32,
    pub state: Option<DemoState>,
}

impl CommandOutcome {
    /// Exit code 0 with stdout.
    pub fn success(command: impl Into<String>, stdout: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            stdout: Some(stdout.into()),
            stderr: None,
            exit_code: 0,
            state: None,
        }
    }

    /// Exit code 1 with stderr.
    pub fn failure(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            stdout: None,
            stderr: Some(stderr.into()),
            exit_code: 1,
            state: None,
        }
    }

    /// Attach a state snapshot.
    pub fn with_state(mut self, state: DemoState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Terminal lines: stdout as plain text, stderr in red.
    ///
    /// A single-line stdout from a mutating command is shown as a success
    /// line.
    pub fn to_lines(&self) -> Vec<OutputLine> {
        let mut lines = Vec::new();
        if let Some(stdout) = &self.stdout {
            let mut text: Vec<&str> = stdout.lines().collect();
            if text.len() == 1 && self.state.is_some() {
                lines.push(OutputLine::success(text.remove(0)));
            } else {
                lines.extend(text.into_iter().map(OutputLine::text));
            }
        }
        if let Some(stderr) = &self.stderr {
            lines.extend(stderr.lines().map(OutputLine::error));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::demo::fixture::fixture;
    use crate::models::OutputLineData;

    #[test]
    fn test_failure_lines_are_errors() {
        let outcome = CommandOutcome::failure("x", "Error: one\nRun 'kanban help' for usage.");
        let lines = outcome.to_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| matches!(l.data, OutputLineData::Error(_))));
    }

    #[test]
    fn test_mutation_message_is_success_line() {
        let outcome = CommandOutcome::success("x", "Card deleted").with_state(fixture());
        let lines = outcome.to_lines();
        assert_eq!(
            lines[0].data,
            OutputLineData::Success("Card deleted".to_string())
        );
    }

    #[test]
    fn test_plain_stdout_is_text() {
        let outcome = CommandOutcome::success("x", "   1  Sprint 1");
        assert_eq!(
            outcome.to_lines()[0].data,
            OutputLineData::Text("   1  Sprint 1".to_string())
        );
    }
}
