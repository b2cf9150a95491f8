use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

/// Render the visible transient messages.
///
pub fn messages(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let spans: Vec<Span> = state
        .active_messages(Instant::now())
        .iter()
        .map(|kind| Span::styled(format!(" {} ", kind.text()), styling::message_style(theme)))
        .collect();
    if spans.is_empty() {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        size,
    );
}
