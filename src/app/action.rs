/// Side effects the event loop carries out after a handler returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A task was committed to the list.
    Changed(Change),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Added { index: usize, text: String },
    Updated { index: usize, text: String },
    Removed { index: usize, text: String },
}

impl Change {
    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        match self {
            Change::Added { text, .. } => format!("Added \"{}\"", text),
            Change::Updated { text, .. } => format!("Saved \"{}\"", text),
            Change::Removed { text, .. } => format!("Deleted \"{}\"", text),
        }
    }
}
