//! # Quick Actions
//!
//! Shortcut buttons supplied by the caller. The composer renders them and
//! forwards clicks; it never edits the records.

use std::collections::HashSet;
use std::fmt;

use super::composer::{ComposerError, SinkError};

pub type ClickHandler = Box<dyn FnMut() -> Result<(), SinkError>>;

pub struct QuickAction {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    on_click: ClickHandler,
}

impl QuickAction {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        on_click: impl FnMut() -> Result<(), SinkError> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            on_click: Box::new(on_click),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub(super) fn click(&mut self) -> Result<(), SinkError> {
        (self.on_click)()
    }
}

impl fmt::Debug for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuickAction")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// An ordered set of quick actions with unique ids.
#[derive(Debug, Default)]
pub struct QuickActionSet {
    actions: Vec<QuickAction>,
}

impl QuickActionSet {
    pub fn new(actions: Vec<QuickAction>) -> Result<Self, ComposerError> {
        let mut seen = HashSet::new();
        for action in &actions {
            if !seen.insert(action.id.as_str()) {
                return Err(ComposerError::DuplicateQuickAction(action.id.clone()));
            }
        }
        Ok(Self { actions })
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuickAction> {
        self.actions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&QuickAction> {
        self.actions.get(index)
    }

    pub(super) fn find_mut(&mut self, id: &str) -> Option<&mut QuickAction> {
        self.actions.iter_mut().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(id: &str) -> QuickAction {
        QuickAction::new(id, id.to_uppercase(), || Ok(()))
    }

    #[test]
    fn accepts_unique_ids() {
        let set = QuickActionSet::new(vec![noop("a"), noop("b")]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).map(|a| a.label.as_str()), Some("B"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = QuickActionSet::new(vec![noop("a"), noop("b"), noop("a")]).unwrap_err();
        assert!(matches!(err, ComposerError::DuplicateQuickAction(id) if id == "a"));
    }

    #[test]
    fn find_by_id() {
        let mut set = QuickActionSet::new(vec![noop("a").with_icon("*")]).unwrap();
        let action = set.find_mut("a").unwrap();
        assert_eq!(action.icon.as_deref(), Some("*"));
        assert!(set.find_mut("missing").is_none());
    }
}
