//! # QuickActionBar Component
//!
//! One row of quick-action buttons above the composer, each labeled with the
//! function key that triggers it. Only shown when the set is non-empty.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::quick_action::QuickActionSet;
use crate::tui::component::Component;

/// Function keys only go up to F9 in the event mapping.
const MAX_BOUND_ACTIONS: usize = 9;

pub struct QuickActionBar<'a> {
    actions: &'a QuickActionSet,
    disabled: bool,
}

impl<'a> QuickActionBar<'a> {
    pub fn new(actions: &'a QuickActionSet, disabled: bool) -> Self {
        Self { actions, disabled }
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let (key_style, label_style) = if self.disabled {
            let dim = Style::default().fg(Color::DarkGray);
            (dim, dim)
        } else {
            (
                Style::default().fg(Color::Black).bg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };

        let mut spans = Vec::new();
        for (i, action) in self.actions.iter().take(MAX_BOUND_ACTIONS).enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("F{}", i + 1), key_style));
            let label = match &action.icon {
                Some(icon) => format!(" {icon} {}", action.label),
                None => format!(" {}", action.label),
            };
            spans.push(Span::styled(label, label_style));
        }
        spans
    }
}

impl Component for QuickActionBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.actions.is_empty() {
            return;
        }
        frame.render_widget(Paragraph::new(Line::from(self.spans())), area);
    }
}
