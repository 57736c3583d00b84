//! # Outbox Component
//!
//! Scrollable record of everything the composer's sinks received: sent
//! messages, attachment batches and quick-action clicks.
//!
//! ## Architecture
//!
//! `Outbox` is the shared log the sinks write into (`Rc<RefCell<..>>`, since
//! sinks are plain closures on the single event thread). `OutboxView` is a
//! transient component created each frame with the entries (props) and the
//! persistent `OutboxState` (scroll position).

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum OutboxKind {
    Sent(String),
    Attached(Vec<String>),
    QuickAction(String),
}

#[derive(Debug, Clone)]
pub struct OutboxEntry {
    pub at: DateTime<Local>,
    pub kind: OutboxKind,
}

/// Shared, append-only log written by the sinks.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    entries: Rc<RefCell<Vec<OutboxEntry>>>,
}

impl Outbox {
    pub fn push(&self, kind: OutboxKind) {
        self.entries.borrow_mut().push(OutboxEntry {
            at: Local::now(),
            kind,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn snapshot(&self) -> Vec<OutboxEntry> {
        self.entries.borrow().clone()
    }
}

/// Scroll state for the outbox. Must be persisted in the parent TuiState.
pub struct OutboxState {
    /// Line offset from the top
    pub scroll: u16,
    /// When true, follow new entries
    pub stick_to_bottom: bool,
}

impl Default for OutboxState {
    fn default() -> Self {
        Self::new()
    }
}

impl OutboxState {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            stick_to_bottom: true,
        }
    }
}

impl EventHandler for OutboxState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                self.stick_to_bottom = false;
                Some(())
            }
            TuiEvent::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
                Some(())
            }
            _ => None,
        }
    }
}

fn entry_lines(entry: &OutboxEntry) -> Vec<Line<'static>> {
    let stamp = Span::styled(
        entry.at.format("%H:%M:%S ").to_string(),
        Style::default().fg(Color::DarkGray),
    );
    match &entry.kind {
        OutboxKind::Sent(text) => {
            let mut lines = Vec::new();
            for (i, line) in text.lines().enumerate() {
                let prefix = if i == 0 {
                    stamp.clone()
                } else {
                    Span::raw(" ".repeat(9))
                };
                lines.push(Line::from(vec![prefix, Span::raw(line.to_string())]));
            }
            lines
        }
        OutboxKind::Attached(names) => vec![Line::from(vec![
            stamp,
            Span::styled(
                format!("attached {}", names.join(", ")),
                Style::default().fg(Color::Yellow),
            ),
        ])],
        OutboxKind::QuickAction(label) => vec![Line::from(vec![
            stamp,
            Span::styled(
                format!("quick action: {label}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])],
    }
}

/// Transient render wrapper around the outbox log.
pub struct OutboxView<'a> {
    entries: &'a [OutboxEntry],
    state: &'a mut OutboxState,
}

impl<'a> OutboxView<'a> {
    pub fn new(entries: &'a [OutboxEntry], state: &'a mut OutboxState) -> Self {
        Self { entries, state }
    }
}

impl Component for OutboxView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Outbox");

        if self.entries.is_empty() {
            let hint = Paragraph::new("Nothing sent yet. Enter sends, Shift+Enter adds a line.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let lines: Vec<Line> = self.entries.iter().flat_map(entry_lines).collect();
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

        let inner_width = area.width.saturating_sub(2);
        let viewport = area.height.saturating_sub(2);
        let total = paragraph.line_count(inner_width) as u16;
        let max_scroll = total.saturating_sub(viewport);

        if self.state.stick_to_bottom || self.state.scroll >= max_scroll {
            self.state.scroll = max_scroll;
            self.state.stick_to_bottom = true;
        }

        frame.render_widget(
            paragraph.block(block).scroll((self.state.scroll, 0)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(outbox: &Outbox, state: &mut OutboxState, height: u16) -> String {
        let backend = TestBackend::new(50, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let entries = outbox.snapshot();
        terminal
            .draw(|f| OutboxView::new(&entries, state).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn clones_share_entries() {
        let outbox = Outbox::default();
        let sink_side = outbox.clone();
        sink_side.push(OutboxKind::Sent("hello".to_string()));
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox.snapshot()[0].kind, OutboxKind::Sent("hello".to_string()));
    }

    #[test]
    fn empty_outbox_shows_hint() {
        let text = render(&Outbox::default(), &mut OutboxState::new(), 5);
        assert!(text.contains("Nothing sent yet"));
    }

    #[test]
    fn renders_each_kind() {
        let outbox = Outbox::default();
        outbox.push(OutboxKind::Sent("line one\nline two".to_string()));
        outbox.push(OutboxKind::Attached(vec!["a.txt".to_string(), "b.txt".to_string()]));
        outbox.push(OutboxKind::QuickAction("Schedule".to_string()));

        let text = render(&outbox, &mut OutboxState::new(), 10);
        assert!(text.contains("line one"));
        assert!(text.contains("line two"));
        assert!(text.contains("attached a.txt, b.txt"));
        assert!(text.contains("quick action: Schedule"));
    }

    #[test]
    fn sticks_to_bottom_until_scrolled_up() {
        let outbox = Outbox::default();
        for i in 0..10 {
            outbox.push(OutboxKind::Sent(format!("message {i}")));
        }
        let mut state = OutboxState::new();
        let text = render(&outbox, &mut state, 5);
        assert!(text.contains("message 9"));
        assert_eq!(state.scroll, 7);

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
        let text = render(&outbox, &mut state, 5);
        assert!(text.contains("message 6"));
        assert!(!text.contains("message 9"));
    }
}
