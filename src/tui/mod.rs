//! # TUI Adapter
//!
//! The ratatui-specific host for one `MessageComposer`. Handles terminal I/O,
//! renders the UI, measures content through `WrapProbe`, and wires the
//! composer's sinks to the on-screen outbox.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws on
//! events or terminal resize. All pending events are drained before the
//! next draw.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::config::{QuickActionEntry, ResolvedConfig};
use crate::core::quick_action::QuickAction;
use crate::core::{ComposerError, ComposerSinks, Effect, MessageComposer};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ComposerBox, ComposerEvent, FilePickerEvent, FilePickerState, Outbox, OutboxKind, OutboxState,
    WrapProbe,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state
pub struct TuiState {
    pub composer_box: ComposerBox,
    pub outbox: Outbox,
    pub outbox_state: OutboxState,
    /// File picker overlay (None = hidden)
    pub file_picker: Option<FilePickerState>,
    pub status_message: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Result<Self, ComposerError> {
        let outbox = Outbox::default();
        let composer = build_composer(config, &outbox)?;
        Ok(Self::with_composer(composer, outbox))
    }

    /// Host an already-built composer. `outbox` is only displayed; the
    /// composer's sinks decide what lands in it.
    pub fn with_composer(composer: MessageComposer, outbox: Outbox) -> Self {
        Self {
            composer_box: ComposerBox::new(composer),
            outbox,
            outbox_state: OutboxState::new(),
            file_picker: None,
            status_message: String::from("Ready"),
        }
    }

    /// Route one event. Returns `true` when the app should quit.
    pub fn dispatch(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::ForceQuit => return true,
            TuiEvent::Resize => return false,
            _ => {}
        }

        // When the picker is open, it gets every event
        if let Some(picker) = self.file_picker.as_mut() {
            match picker.handle_event(&event) {
                Some(FilePickerEvent::Confirm) => {
                    match self.composer_box.composer.select_files(picker) {
                        Ok(effect) => {
                            self.file_picker = None;
                            self.report(effect);
                        }
                        // Picker stays open with its input so the user can retry
                        Err(e) => {
                            warn!("Attach failed: {e}");
                            self.status_message = format!("Attach failed: {e}");
                        }
                    }
                }
                Some(FilePickerEvent::Dismiss) => self.file_picker = None,
                None => {}
            }
            return false;
        }

        match event {
            TuiEvent::Escape => return true,
            TuiEvent::OpenFilePicker => {
                if self.composer_box.composer.capabilities().attachments
                    && !self.composer_box.composer.is_disabled()
                {
                    self.file_picker = Some(FilePickerState::new());
                }
            }
            TuiEvent::ToggleDisabled => {
                let composer = &mut self.composer_box.composer;
                composer.set_disabled(!composer.is_disabled());
            }
            TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
                self.outbox_state.handle_event(&event);
            }
            _ => match self.composer_box.handle_event(&event) {
                Some(ComposerEvent::Effect(effect)) => self.report(effect),
                Some(ComposerEvent::SinkFailed(message)) => {
                    self.status_message = format!("Failed: {message}");
                }
                Some(ComposerEvent::ContentChanged) | None => {}
            },
        }
        false
    }

    fn report(&mut self, effect: Effect) {
        self.status_message = match effect {
            Effect::None => return,
            Effect::Sent => String::from("Sent"),
            Effect::Attached(n) => format!("Attached {n} file(s)"),
            Effect::QuickAction(id) => format!("Quick action: {id}"),
        };
    }
}

/// Build a composer whose sinks write into `outbox`.
pub fn build_composer(
    config: &ResolvedConfig,
    outbox: &Outbox,
) -> Result<MessageComposer, ComposerError> {
    let send_log = outbox.clone();
    let attach_log = outbox.clone();
    let sinks = ComposerSinks::new(move |message| {
        send_log.push(OutboxKind::Sent(message.to_string()));
        Ok(())
    })
    .with_attach(move |batch| {
        let names = batch.files().iter().map(|f| f.path().display().to_string()).collect();
        attach_log.push(OutboxKind::Attached(names));
        Ok(())
    });

    let quick_actions = config
        .quick_actions
        .iter()
        .map(|entry| quick_action(entry, outbox.clone()))
        .collect();

    MessageComposer::new(config.options.clone(), sinks, quick_actions, WrapProbe)
}

fn quick_action(entry: &QuickActionEntry, outbox: Outbox) -> QuickAction {
    let label = entry.label.clone();
    let action = QuickAction::new(entry.id.clone(), entry.label.clone(), move || {
        outbox.push(OutboxKind::QuickAction(label.clone()));
        Ok(())
    });
    match &entry.icon {
        Some(icon) => action.with_icon(icon.clone()),
        None => action,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is what lets Shift+Enter be told apart from
        // Enter; terminals without it ignore the request.
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    info!("Hosting {}", tui.composer_box.composer.id());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut tui);
    ratatui::restore();

    info!("Exiting after {} outbox entries", tui.outbox.len());
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, tui: &mut TuiState) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500))?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if tui.dispatch(event) {
                return Ok(());
            }
        }
    }
}
