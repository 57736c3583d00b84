//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::composer::{ComposerOptions, ComposerSinks, MessageComposer};
use crate::core::height::Constraints;
use crate::core::quick_action::QuickAction;

/// Records every sink invocation so tests can assert on them.
#[derive(Clone, Default)]
pub struct Recorder {
    sent: Rc<RefCell<Vec<String>>>,
    attached: Rc<RefCell<Vec<Vec<String>>>>,
    clicks: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn record_send(&self, message: &str) {
        self.sent.borrow_mut().push(message.to_string());
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }

    pub fn attached(&self) -> Vec<Vec<String>> {
        self.attached.borrow().clone()
    }

    pub fn clicks(&self) -> Vec<String> {
        self.clicks.borrow().clone()
    }

    pub fn is_silent(&self) -> bool {
        self.sent.borrow().is_empty()
            && self.attached.borrow().is_empty()
            && self.clicks.borrow().is_empty()
    }
}

/// One row per `'\n'`-separated line plus two rows of border.
pub fn line_probe(text: &str, _constraints: &Constraints) -> u16 {
    text.split('\n').count() as u16 + 2
}

/// A composer wired to a `Recorder`, with attachments and a "ping" quick action.
pub fn recording_composer(options: ComposerOptions) -> (MessageComposer, Recorder) {
    let rec = Recorder::default();

    let send_rec = rec.clone();
    let attach_rec = rec.clone();
    let sinks = ComposerSinks::new(move |message| {
        send_rec.record_send(message);
        Ok(())
    })
    .with_attach(move |batch| {
        let names = batch.files().iter().map(|f| f.name()).collect();
        attach_rec.attached.borrow_mut().push(names);
        Ok(())
    });

    let click_rec = rec.clone();
    let ping = QuickAction::new("ping", "Ping", move || {
        click_rec.clicks.borrow_mut().push("ping".to_string());
        Ok(())
    });

    let composer = MessageComposer::new(options, sinks, vec![ping], line_probe)
        .expect("valid test composer");
    (composer, rec)
}
