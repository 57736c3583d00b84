//! # TitleBar Component
//!
//! Top status bar: app name, the composer instance it hosts, and the latest
//! status line (last effect, sink failure, config problem).
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(composer.id().short(), status.clone(), false);
//! title_bar.render(frame, area);
//! ```
//!
//! The text changes based on state:
//!
//! 1. **Disabled**: `"draftbox [1a2b3c4d] | Sent | disabled"`
//! 2. **Status message**: `"draftbox [1a2b3c4d] | Sent"`
//! 3. **Default**: `"draftbox [1a2b3c4d]"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Short composer id
    pub instance: String,
    /// Status message (e.g., "Sent", "Attached 2 file(s)")
    pub status_message: String,
    /// Whether the composer is currently disabled
    pub disabled: bool,
}

impl TitleBar {
    pub fn new(instance: String, status_message: String, disabled: bool) -> Self {
        Self {
            instance,
            status_message,
            disabled,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("draftbox [{}]", self.instance);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.disabled {
            text.push_str(" | disabled");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = rendered(TitleBar::new("1a2b3c4d".to_string(), "Sent".to_string(), false));
        assert!(text.contains("draftbox [1a2b3c4d] | Sent"));
        assert!(!text.contains("disabled"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = rendered(TitleBar::new("1a2b3c4d".to_string(), String::new(), false));
        assert!(text.contains("draftbox [1a2b3c4d]"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_disabled() {
        let text = rendered(TitleBar::new("1a2b3c4d".to_string(), String::new(), true));
        assert!(text.contains("| disabled"));
    }
}
