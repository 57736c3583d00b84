//! # Message Composer
//!
//! Turns discrete input events into local draft/height updates or exactly one
//! outbound effect per gesture: a send, an attach, or a quick action.
//!
//! ```text
//!                 on_text_change ──► Draft + MeasuredHeight (no sink)
//!                                         │
//!   on_key_submit(Enter, !shift) ──► submit ──► on_send(trim(text)) ──► reset
//!                                         │
//!                 select_files ──► on_attach(batch) ──► picker.clear_selection()
//!                                         │
//!         invoke_quick_action ──► action.on_click()
//! ```
//!
//! `disabled` freezes every transition at the boundary. Sink errors are
//! returned to the caller untouched.

use std::fmt;

use log::{debug, info, warn};
use uuid::Uuid;

use super::attachment::{AttachmentBatch, FileSelection};
use super::draft::{Draft, DraftState};
use super::height::{Constraints, HeightProbe, MeasuredHeight};
use super::quick_action::{QuickAction, QuickActionSet};

/// Error raised by a caller-supplied sink. Propagated as-is.
pub type SinkError = Box<dyn std::error::Error>;

pub type SendSink = Box<dyn FnMut(&str) -> Result<(), SinkError>>;
pub type AttachSink = Box<dyn FnMut(AttachmentBatch) -> Result<(), SinkError>>;

pub const DEFAULT_MAX_HEIGHT: u16 = 120;

// ============================================================================
// Configuration
// ============================================================================

/// Static presentation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerOptions {
    pub placeholder: String,
    pub disabled: bool,
    pub max_height: u16,
    pub show_emoji: bool,
    pub show_attachment: bool,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            placeholder: String::from("Type a message..."),
            disabled: false,
            max_height: DEFAULT_MAX_HEIGHT,
            show_emoji: true,
            show_attachment: true,
        }
    }
}

/// Outbound callbacks. `on_send` is mandatory, `on_attach` is not.
pub struct ComposerSinks {
    pub on_send: SendSink,
    pub on_attach: Option<AttachSink>,
}

impl ComposerSinks {
    pub fn new(on_send: impl FnMut(&str) -> Result<(), SinkError> + 'static) -> Self {
        Self {
            on_send: Box::new(on_send),
            on_attach: None,
        }
    }

    pub fn with_attach(
        mut self,
        on_attach: impl FnMut(AttachmentBatch) -> Result<(), SinkError> + 'static,
    ) -> Self {
        self.on_attach = Some(Box::new(on_attach));
        self
    }
}

/// Which affordances this composer renders, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub attachments: bool,
    pub emoji: bool,
    pub quick_actions: bool,
}

// ============================================================================
// Identity, errors, outcomes
// ============================================================================

/// Per-instance identifier for scoping styles and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComposerId(Uuid);

impl ComposerId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell instances apart on screen.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for ComposerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "composer-{}", self.0.simple())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ComposerError {
    DuplicateQuickAction(String),
    ZeroMaxHeight,
}

impl fmt::Display for ComposerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposerError::DuplicateQuickAction(id) => {
                write!(f, "quick action id {id:?} is used more than once")
            }
            ComposerError::ZeroMaxHeight => write!(f, "max_height must be greater than zero"),
        }
    }
}

impl std::error::Error for ComposerError {}

/// What an operation did, for hosts that want to react.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Sent,
    Attached(usize),
    QuickAction(String),
}

/// Key identity as far as submission is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Whether the host should still run its default handling for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The composer handled the key; suppress the default (no newline).
    Consumed(Effect),
    /// Not ours; let the input surface do what it normally does.
    Default,
}

// ============================================================================
// Composer
// ============================================================================

pub struct MessageComposer {
    id: ComposerId,
    options: ComposerOptions,
    sinks: ComposerSinks,
    quick_actions: QuickActionSet,
    probe: Box<dyn HeightProbe>,
    constraints: Constraints,
    draft: Draft,
    height: MeasuredHeight,
}

impl MessageComposer {
    pub fn new(
        options: ComposerOptions,
        sinks: ComposerSinks,
        quick_actions: Vec<QuickAction>,
        probe: impl HeightProbe + 'static,
    ) -> Result<Self, ComposerError> {
        if options.max_height == 0 {
            return Err(ComposerError::ZeroMaxHeight);
        }
        let quick_actions = QuickActionSet::new(quick_actions)?;
        let probe: Box<dyn HeightProbe> = Box::new(probe);
        let constraints = Constraints::default();
        let mut height = MeasuredHeight::new(options.max_height);
        height.reset(probe.as_ref(), &constraints);

        let id = ComposerId::generate();
        debug!("{id}: created with {} quick action(s)", quick_actions.len());

        Ok(Self {
            id,
            options,
            sinks,
            quick_actions,
            probe,
            constraints,
            draft: Draft::new(),
            height,
        })
    }

    pub fn id(&self) -> ComposerId {
        self.id
    }

    pub fn options(&self) -> &ComposerOptions {
        &self.options
    }

    pub fn text(&self) -> &str {
        self.draft.text()
    }

    pub fn state(&self) -> DraftState {
        self.draft.state()
    }

    pub fn height(&self) -> u16 {
        self.height.get()
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn quick_actions(&self) -> &QuickActionSet {
        &self.quick_actions
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            attachments: self.options.show_attachment && self.sinks.on_attach.is_some(),
            emoji: self.options.show_emoji,
            quick_actions: !self.quick_actions.is_empty(),
        }
    }

    /// Placeholder to show, if the draft is empty.
    pub fn placeholder(&self) -> Option<&str> {
        (self.draft.state() == DraftState::Empty).then_some(self.options.placeholder.as_str())
    }

    /// Flip the disabled flag. The draft is kept either way.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.options.disabled != disabled {
            debug!("{}: disabled = {disabled}", self.id);
        }
        self.options.disabled = disabled;
    }

    /// Host reports a new layout; height is re-measured against it.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        if self.constraints == constraints {
            return;
        }
        self.constraints = constraints;
        self.height
            .remeasure(self.probe.as_ref(), self.draft.text(), &self.constraints);
    }

    pub fn set_quick_actions(&mut self, actions: Vec<QuickAction>) -> Result<(), ComposerError> {
        self.quick_actions = QuickActionSet::new(actions)?;
        Ok(())
    }

    /// Store the raw input value and re-measure.
    pub fn on_text_change(&mut self, raw: impl Into<String>) {
        if self.options.disabled {
            debug!("{}: text change ignored while disabled", self.id);
            return;
        }
        self.draft.set(raw);
        let height = self
            .height
            .remeasure(self.probe.as_ref(), self.draft.text(), &self.constraints);
        debug!(
            "{}: draft {:?}, {} bytes, height {height}",
            self.id,
            self.draft.state(),
            self.draft.text().len()
        );
    }

    /// Send the trimmed draft, then reset draft and height.
    ///
    /// Whitespace-only drafts and a disabled composer are silent no-ops. If
    /// the send sink fails, its error is returned and the draft is kept.
    pub fn submit(&mut self) -> Result<Effect, SinkError> {
        if self.options.disabled {
            return Ok(Effect::None);
        }
        let Some(message) = self.draft.sendable() else {
            return Ok(Effect::None);
        };

        (self.sinks.on_send)(message)?;
        info!("{}: sent {} bytes", self.id, message.len());

        self.draft.clear();
        self.height.reset(self.probe.as_ref(), &self.constraints);
        Ok(Effect::Sent)
    }

    /// Enter without Shift submits; everything else is left to the host.
    pub fn on_key_submit(&mut self, key: Key, shift: bool) -> Result<KeyOutcome, SinkError> {
        if key != Key::Enter || shift {
            return Ok(KeyOutcome::Default);
        }
        let effect = self.submit()?;
        Ok(KeyOutcome::Consumed(effect))
    }

    /// Forward the picker's selection to the attach sink, then clear the picker.
    /// No-op while disabled or when attachments are hidden.
    pub fn select_files(&mut self, selection: &mut dyn FileSelection) -> Result<Effect, SinkError> {
        if self.options.disabled || !self.options.show_attachment {
            return Ok(Effect::None);
        }
        let Some(on_attach) = self.sinks.on_attach.as_mut() else {
            return Ok(Effect::None);
        };
        let Some(batch) = AttachmentBatch::new(selection.selected()) else {
            return Ok(Effect::None);
        };

        let count = batch.len();
        on_attach(batch)?;
        selection.clear_selection();
        info!("{}: attached {count} file(s)", self.id);
        Ok(Effect::Attached(count))
    }

    /// Run a quick action's handler. The draft is not touched.
    pub fn invoke_quick_action(&mut self, id: &str) -> Result<Effect, SinkError> {
        if self.options.disabled {
            return Ok(Effect::None);
        }
        let Some(action) = self.quick_actions.find_mut(id) else {
            warn!("{}: unknown quick action {id:?}", self.id);
            return Ok(Effect::None);
        };
        action.click()?;
        info!("{}: quick action {id:?}", self.id);
        Ok(Effect::QuickAction(id.to_string()))
    }
}
