use super::Frame;
use crate::state::{State, TaskFilter};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Tabs},
};

/// Render the filter tabs according to state.
///
pub fn filters(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let titles: Vec<String> = TaskFilter::ALL
        .iter()
        .enumerate()
        .map(|(i, filter)| format!("{} {}", i + 1, filter.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.get_task_filter().index())
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::active_block_title_style(theme))
        .block(
            Block::default()
                .title("Filter")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(tabs, size);
}
