use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{FilePicker, OutboxView, QuickActionBar, TitleBar};

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let input_height = tui.composer_box.calculate_height(area.width);
    let quick_height = u16::from(!tui.composer_box.composer.quick_actions().is_empty());

    let layout = Layout::vertical([Length(1), Min(0), Length(quick_height), Length(input_height)]);
    let [title_area, outbox_area, quick_area, input_area] = layout.areas(area);

    let composer = &tui.composer_box.composer;
    TitleBar::new(
        composer.id().short(),
        tui.status_message.clone(),
        composer.is_disabled(),
    )
    .render(frame, title_area);

    let entries = tui.outbox.snapshot();
    OutboxView::new(&entries, &mut tui.outbox_state).render(frame, outbox_area);

    let composer = &tui.composer_box.composer;
    QuickActionBar::new(composer.quick_actions(), composer.is_disabled())
        .render(frame, quick_area);

    tui.composer_box.render(frame, input_area);

    if let Some(picker) = &tui.file_picker {
        FilePicker::new(picker).render(frame, area);
    }
}
