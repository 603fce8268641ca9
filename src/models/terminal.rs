//! Terminal output types for the demo console.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A single rendered line of terminal output with a unique ID.
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keying in `<For>` loops
    pub id: usize,
    pub data: OutputLineData,
}

/// The content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echo of a submitted command with its prompt
    Command { prompt: String, input: String },
    /// Plain stdout text
    Text(String),
    /// stderr text (red)
    Error(String),
    /// Confirmation of a mutation (green)
    Success(String),
    /// Informational note (yellow)
    Info(String),
    Empty,
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are render keys, not content
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("boom").data,
            OutputLineData::Error("boom".to_string())
        );
        assert_eq!(
            OutputLine::success("ok").data,
            OutputLineData::Success("ok".to_string())
        );
        assert_eq!(
            OutputLine::info("note").data,
            OutputLineData::Info("note".to_string())
        );
    }

    #[test]
    fn test_command_line() {
        let cmd = OutputLine::command("demo@kanban", "kanban board list");
        match cmd.data {
            OutputLineData::Command { prompt, input } => {
                assert_eq!(prompt, "demo@kanban");
                assert_eq!(input, "kanban board list");
            }
            _ => panic!("Expected Command variant"),
        }
    }

    #[test]
    fn test_unique_ids() {
        let a = OutputLine::text("same");
        let b = OutputLine::text("same");
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }
}
