//! # Draft
//!
//! The in-progress message text. Whatever the input surface last committed
//! is stored verbatim: no trimming, no truncation.

/// Lifecycle position of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    Composing,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text with the raw value from the input surface.
    pub fn set(&mut self, raw: impl Into<String>) {
        self.text = raw.into();
    }

    /// Trimmed text, or `None` when nothing but whitespace is left.
    pub fn sendable(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn state(&self) -> DraftState {
        if self.text.is_empty() {
            DraftState::Empty
        } else {
            DraftState::Composing
        }
    }
}
