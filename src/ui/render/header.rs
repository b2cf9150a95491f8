use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const TITLE: &str = " To-Do List";

/// Render header with the title and the theme toggle label.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, styling::banner_style(theme))),
        size,
    );

    let toggle = Line::from(vec![
        Span::styled("[t] ", styling::muted_text_style(theme)),
        Span::styled(
            state.theme_mode().toggle_label(),
            styling::active_block_title_style(theme),
        ),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), size);
}
