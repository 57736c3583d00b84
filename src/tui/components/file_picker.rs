//! # File Picker Component
//!
//! Overlay for choosing attachments, opened with Ctrl+O. Paths are typed (or
//! pasted) on one line, separated by whitespace, and confirmed with Enter.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilePickerState` lives in `TuiState` and is the picker's selection
//! - `FilePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph};

use crate::core::attachment::{FileHandle, FileSelection};
use crate::tui::event::TuiEvent;

/// Persistent state for the file picker overlay.
#[derive(Debug, Default)]
pub struct FilePickerState {
    pub input: String,
}

/// Events emitted by the file picker.
#[derive(Debug, PartialEq, Eq)]
pub enum FilePickerEvent {
    Confirm,
    Dismiss,
}

impl FilePickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event, returning a FilePickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<FilePickerEvent> {
        match event {
            TuiEvent::Escape => Some(FilePickerEvent::Dismiss),
            TuiEvent::Enter { .. } => Some(FilePickerEvent::Confirm),
            TuiEvent::InputChar(c) => {
                self.input.push(*c);
                None
            }
            // Dropped files usually arrive as a newline-separated paste
            TuiEvent::Paste(text) => {
                self.input.push_str(text);
                None
            }
            TuiEvent::Backspace => {
                self.input.pop();
                None
            }
            _ => None,
        }
    }
}

impl FileSelection for FilePickerState {
    fn selected(&self) -> Vec<FileHandle> {
        self.input.split_whitespace().map(FileHandle::new).collect()
    }

    fn clear_selection(&mut self) {
        self.input.clear();
    }
}

/// Transient render wrapper for the file picker overlay.
pub struct FilePicker<'a> {
    state: &'a FilePickerState,
}

impl<'a> FilePicker<'a> {
    pub fn new(state: &'a FilePickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Attach files ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Attach  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [input_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let prompt = format!("> {}", self.state.input);
        frame.render_widget(
            Paragraph::new(prompt).style(Style::default().fg(Color::Yellow)),
            input_area,
        );

        let items: Vec<ListItem> = self
            .state
            .selected()
            .iter()
            .enumerate()
            .map(|(i, file)| ListItem::new(format!("{}. {}", i + 1, file.path().display())))
            .collect();
        frame.render_widget(
            List::new(items).style(Style::default().fg(Color::Gray)),
            list_area,
        );
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
