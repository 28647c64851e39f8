// Snapshot history for stepping through a lesson

use crate::errors::DemoError;
use crate::value::CValue;

/// Mock terminal for capturing printf output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockTerminal {
    pub chunks: Vec<TerminalChunk>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { chunks: Vec::new() }
    }

    /// Print without adding a newline
    pub fn print(&mut self, text: String, line: usize) {
        if text.is_empty() {
            return;
        }
        self.chunks.push(TerminalChunk { text, line });
    }

    /// Everything printed so far, exactly as stdout would receive it
    pub fn contents(&self) -> String {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let contents = self.contents();
        let mut lines: Vec<String> = contents.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if lines.last().is_some_and(|s| s.is_empty()) {
            lines.pop();
        }
        lines
    }
}

/// Text from one printf call, tagged with the source line that printed it
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalChunk {
    pub text: String,
    pub line: usize,
}

/// A named local visible at a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: CValue,
}

/// State after one statement of a lesson
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// 1-based line in the lesson source
    pub line: usize,
    pub locals: Vec<Binding>,
    pub terminal: MockTerminal,
    /// Name of the local the statement wrote, if any
    pub changed: Option<String>,
}

impl Snapshot {
    pub fn local(&self, name: &str) -> Option<&CValue> {
        self.locals
            .iter()
            .find(|b| b.name == name)
            .map(|b| &b.value)
    }
}

/// Recorded snapshots with a cursor for forward/backward navigation
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    position: usize,
}

impl History {
    pub fn new() -> Self {
        History {
            snapshots: Vec::new(),
            position: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.position)
    }

    /// The final snapshot, holding the complete output
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.snapshots.len()
    }

    pub fn step_forward(&mut self) -> Result<(), DemoError> {
        if self.is_at_end() {
            return Err(DemoError::HistoryBoundary {
                message: "Already at the last step".to_string(),
                position: self.position,
            });
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), DemoError> {
        if self.position == 0 {
            return Err(DemoError::HistoryBoundary {
                message: "Already at the first step".to_string(),
                position: self.position,
            });
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.snapshots.len().saturating_sub(1);
    }

    /// Full output of the run
    pub fn output(&self) -> String {
        self.last()
            .map(|s| s.terminal.contents())
            .unwrap_or_default()
    }
}
