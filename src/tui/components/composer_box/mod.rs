//! # ComposerBox Component
//!
//! The terminal face of a [`MessageComposer`]: an auto-growing, bordered
//! text area with a cursor.
//!
//! ## Responsibilities
//!
//! - Turn editing keys into full-text updates (`on_text_change`)
//! - Route Enter through `on_key_submit`; insert the newline itself when the
//!   composer leaves the key to the default behavior (Shift+Enter)
//! - Forward F-key quick actions
//! - Render the placeholder, affordance hints, and a dimmed disabled state
//!
//! ## State Management
//!
//! Draft text and height belong to the composer. Cursor position and the
//! internal scroll offset live in `CursorState`.

mod cursor;
mod text_wrap;

use log::warn;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::height::Constraints;
use crate::core::{Effect, Key, KeyOutcome, MessageComposer, SinkError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{VERTICAL_OVERHEAD, inner_width, wrap_options};
pub use text_wrap::WrapProbe;

/// High-level events emitted by the ComposerBox
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerEvent {
    /// A sink ran (send or quick action)
    Effect(Effect),
    /// A sink returned an error; the draft is untouched
    SinkFailed(String),
    /// Draft text or cursor changed
    ContentChanged,
}

/// Text area wrapping one composer.
pub struct ComposerBox {
    pub composer: MessageComposer,
    cursor: CursorState,
}

impl ComposerBox {
    pub fn new(composer: MessageComposer) -> Self {
        Self {
            composer,
            cursor: CursorState::new(),
        }
    }

    /// Height the box wants for the given frame width, already clamped.
    pub fn calculate_height(&mut self, content_width: u16) -> u16 {
        self.composer.set_constraints(Constraints {
            width: content_width,
        });
        self.composer.height()
    }

    /// Replace the draft with `text` and put the cursor at `pos`.
    fn commit(&mut self, text: String, pos: usize) -> Option<ComposerEvent> {
        self.composer.on_text_change(text);
        self.cursor.pos = pos;
        self.cursor.clamp(self.composer.text());
        Some(ComposerEvent::ContentChanged)
    }

    fn insert(&mut self, s: &str) -> Option<ComposerEvent> {
        if self.composer.is_disabled() {
            return None;
        }
        let mut text = self.composer.text().to_string();
        text.insert_str(self.cursor.pos, s);
        let pos = self.cursor.pos + s.len();
        self.commit(text, pos)
    }

    fn sink_result(&mut self, result: Result<Effect, SinkError>) -> Option<ComposerEvent> {
        match result {
            Ok(Effect::None) => None,
            Ok(effect) => {
                if self.composer.text().is_empty() {
                    self.cursor.reset();
                }
                Some(ComposerEvent::Effect(effect))
            }
            Err(e) => {
                warn!("{}: sink failed: {e}", self.composer.id());
                Some(ComposerEvent::SinkFailed(e.to_string()))
            }
        }
    }

    /// The text to draw, pre-wrapped the same way `WrapProbe` measures it,
    /// keeping only the `visible_lines` rows below the scroll offset.
    fn get_visible_text(&self, content_width: u16, visible_lines: u16) -> String {
        let buffer = self.composer.text();
        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + visible_lines.max(1) as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    fn title(&self) -> String {
        let caps = self.composer.capabilities();
        let mut title = String::from("Message");
        if caps.attachments {
            title.push_str(" | Ctrl+O attach");
        }
        if caps.emoji {
            title.push_str(" | :)");
        }
        if self.composer.is_disabled() {
            title.push_str(" (disabled)");
        }
        title
    }
}

impl Component for ComposerBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible_lines = area.height.saturating_sub(VERTICAL_OVERHEAD);
        self.cursor
            .update_scroll_offset(self.composer.text(), area.width, visible_lines);

        let disabled = self.composer.is_disabled();
        let border_style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title());

        let paragraph = match self.composer.placeholder() {
            Some(hint) => Paragraph::new(hint.to_string())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)),
            None => {
                let style = if disabled {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                Paragraph::new(self.get_visible_text(area.width, visible_lines)).style(style)
            }
        };

        frame.render_widget(paragraph.block(block), area);

        if !disabled {
            let (cursor_x, cursor_y) = self.cursor.screen_pos(self.composer.text(), area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for ComposerBox {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Enter { shift } => match self.composer.on_key_submit(Key::Enter, *shift) {
                Ok(KeyOutcome::Consumed(effect)) => self.sink_result(Ok(effect)),
                // Default textarea behavior: the key becomes a line break
                Ok(KeyOutcome::Default) => self.insert("\n"),
                Err(e) => self.sink_result(Err(e)),
            },
            TuiEvent::Backspace => {
                if self.composer.is_disabled() || self.cursor.pos == 0 {
                    return None;
                }
                let mut text = self.composer.text().to_string();
                let end = self.cursor.pos;
                self.cursor.left(&text);
                text.drain(self.cursor.pos..end);
                let pos = self.cursor.pos;
                self.commit(text, pos)
            }
            TuiEvent::Delete => {
                if self.composer.is_disabled() || self.cursor.pos >= self.composer.text().len() {
                    return None;
                }
                let mut text = self.composer.text().to_string();
                let start = self.cursor.pos;
                let mut next = CursorState::new();
                next.pos = start;
                next.right(&text);
                text.drain(start..next.pos);
                self.commit(text, start)
            }
            TuiEvent::CursorLeft => self
                .cursor
                .left(self.composer.text())
                .then_some(ComposerEvent::ContentChanged),
            TuiEvent::CursorRight => self
                .cursor
                .right(self.composer.text())
                .then_some(ComposerEvent::ContentChanged),
            TuiEvent::CursorHome => self
                .cursor
                .home(self.composer.text())
                .then_some(ComposerEvent::ContentChanged),
            TuiEvent::CursorEnd => self
                .cursor
                .end(self.composer.text())
                .then_some(ComposerEvent::ContentChanged),
            TuiEvent::QuickAction(index) => {
                let id = self.composer.quick_actions().get(*index)?.id.clone();
                let result = self.composer.invoke_quick_action(&id);
                self.sink_result(result)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComposerOptions, ComposerSinks};
    use crate::test_support::{Recorder, recording_composer};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn composer_box(options: ComposerOptions) -> (ComposerBox, Recorder) {
        let (composer, rec) = recording_composer(options);
        (ComposerBox::new(composer), rec)
    }

    fn type_str(cb: &mut ComposerBox, s: &str) {
        for c in s.chars() {
            cb.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_handle_input() {
        let (mut cb, _rec) = composer_box(ComposerOptions::default());

        let res = cb.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(ComposerEvent::ContentChanged));
        type_str(&mut cb, "bc");
        assert_eq!(cb.composer.text(), "abc");

        cb.handle_event(&TuiEvent::CursorLeft);
        cb.handle_event(&TuiEvent::Backspace);
        assert_eq!(cb.composer.text(), "ac");

        cb.handle_event(&TuiEvent::CursorHome);
        cb.handle_event(&TuiEvent::Delete);
        assert_eq!(cb.composer.text(), "c");
    }

    #[test]
    fn test_enter_sends_and_resets_cursor() {
        let (mut cb, rec) = composer_box(ComposerOptions::default());
        type_str(&mut cb, "  hi  ");

        let res = cb.handle_event(&TuiEvent::Enter { shift: false });
        assert_eq!(res, Some(ComposerEvent::Effect(Effect::Sent)));
        assert_eq!(rec.sent(), vec!["hi".to_string()]);
        assert_eq!(cb.composer.text(), "");
        assert_eq!(cb.cursor.pos, 0);
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let (mut cb, rec) = composer_box(ComposerOptions::default());
        type_str(&mut cb, "a");
        let res = cb.handle_event(&TuiEvent::Enter { shift: true });
        assert_eq!(res, Some(ComposerEvent::ContentChanged));
        assert_eq!(cb.composer.text(), "a\n");
        assert!(rec.sent().is_empty());
    }

    #[test]
    fn test_enter_on_blank_draft_does_not_insert_newline() {
        let (mut cb, rec) = composer_box(ComposerOptions::default());
        type_str(&mut cb, "   ");
        assert_eq!(cb.handle_event(&TuiEvent::Enter { shift: false }), None);
        assert_eq!(cb.composer.text(), "   ");
        assert!(rec.sent().is_empty());
    }

    #[test]
    fn test_paste_multibyte() {
        let (mut cb, _rec) = composer_box(ComposerOptions::default());
        cb.handle_event(&TuiEvent::Paste("héllo\nwörld".to_string()));
        cb.handle_event(&TuiEvent::Backspace);
        assert_eq!(cb.composer.text(), "héllo\nwörl");
    }

    #[test]
    fn test_quick_action_by_index() {
        let (mut cb, rec) = composer_box(ComposerOptions::default());
        let res = cb.handle_event(&TuiEvent::QuickAction(0));
        assert_eq!(res, Some(ComposerEvent::Effect(Effect::QuickAction("ping".to_string()))));
        assert_eq!(cb.handle_event(&TuiEvent::QuickAction(5)), None);
        assert_eq!(rec.clicks().len(), 1);
    }

    #[test]
    fn test_disabled_ignores_typing() {
        let options = ComposerOptions {
            disabled: true,
            ..Default::default()
        };
        let (mut cb, _rec) = composer_box(options);
        assert_eq!(cb.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(cb.composer.text(), "");
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let sinks = ComposerSinks::new(|_| Err("nope".into()));
        let composer = MessageComposer::new(ComposerOptions::default(), sinks, Vec::new(), WrapProbe)
            .unwrap();
        let mut cb = ComposerBox::new(composer);
        type_str(&mut cb, "x");
        let res = cb.handle_event(&TuiEvent::Enter { shift: false });
        assert_eq!(res, Some(ComposerEvent::SinkFailed("nope".to_string())));
        assert_eq!(cb.composer.text(), "x");
    }

    #[test]
    fn test_height_grows_with_wrap_probe() {
        let options = ComposerOptions {
            max_height: 5,
            ..Default::default()
        };
        let sinks = ComposerSinks::new(|_| Ok(()));
        let composer = MessageComposer::new(options, sinks, Vec::new(), WrapProbe).unwrap();
        let mut cb = ComposerBox::new(composer);
        assert_eq!(cb.calculate_height(40), 3);
        cb.handle_event(&TuiEvent::Paste("1\n2".to_string()));
        assert_eq!(cb.calculate_height(40), 4);
        cb.handle_event(&TuiEvent::Paste("\n3\n4\n5".to_string()));
        assert_eq!(cb.calculate_height(40), 5);
    }

    #[test]
    fn test_render_shows_placeholder_and_affordances() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let (mut cb, _rec) = composer_box(ComposerOptions::default());

        terminal.draw(|f| cb.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Type a message..."));
        assert!(text.contains("Ctrl+O attach"));
    }

    #[test]
    fn test_render_wraps_long_line() {
        // 14 columns leaves a wrap width of 10
        let backend = TestBackend::new(14, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let (mut cb, _rec) = composer_box(ComposerOptions::default());
        type_str(&mut cb, "aaaaaaaaaabbbbbbbbbb");

        terminal.draw(|f| cb.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("aaaaaaaaaa"));
        assert!(text.contains("bbbbbbbbbb"));
    }

    #[test]
    fn test_render_disabled_title() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let options = ComposerOptions {
            disabled: true,
            show_emoji: false,
            ..Default::default()
        };
        let (mut cb, _rec) = composer_box(options);

        terminal.draw(|f| cb.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("(disabled)"));
        assert!(!text.contains(":)"));
    }
}
