use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive data via props (struct fields or constructor
/// arguments), may hold internal state, and render into a `Rect`.
///
/// `render` takes `&mut self` so components can update presentation state
/// (scroll offsets, cached widths) during the render pass, mirroring
/// Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
