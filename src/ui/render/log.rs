use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Log";

/// Render the most recent log entries that fit into the widget.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(BLOCK_TITLE)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible_rows = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .get_log_entries(visible_rows)
        .into_iter()
        .map(|entry| ListItem::new(Span::styled(entry, styling::muted_text_style(theme))))
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
