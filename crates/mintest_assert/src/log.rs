//! Ordered, append-only record of failed check messages.

/// Diagnostic messages of every failed check observed by one [`Assert`](crate::Assert) context.
///
/// Entries are only ever appended; the log lives exactly as long as its owning context.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FailureLog {
    entries: Vec<String>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, message: String) {
        self.entries.push(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
