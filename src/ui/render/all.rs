use super::*;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Render every widget according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    // Global display-mode switch
    frame.render_widget(
        Block::default().style(styling::base_style(state.get_theme())),
        size,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(size);

    header(frame, rows[0], state);
    input(frame, rows[1], state);
    filters(frame, rows[2], state);
    tasks(frame, rows[3], state);
    messages(frame, rows[4], state);
    log(frame, rows[5], state);
    footer(frame, rows[6], state);
}
