use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "New task";
const PLACEHOLDER: &str = "Enter task...";

/// Render the new task input according to state.
///
pub fn input(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let focused = state.current_focus() == Focus::Input;

    let mut block = Block::default()
        .title(BLOCK_TITLE)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                BLOCK_TITLE,
                styling::active_block_title_style(theme),
            ));
    }

    let text = state.get_new_task_input();
    let content = if text.is_empty() && !focused {
        Span::styled(PLACEHOLDER, styling::muted_text_style(theme))
    } else {
        Span::styled(text.to_owned(), styling::normal_text_style(theme))
    };
    frame.render_widget(Paragraph::new(content).block(block), size);

    if focused {
        frame.set_cursor(cursor_x(size, text), size.y.saturating_add(1));
    }
}

/// Column of the cursor after the typed text, kept inside the borders.
///
fn cursor_x(size: Rect, text: &str) -> u16 {
    let offset = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    size.x
        .saturating_add(1)
        .saturating_add(offset)
        .min(size.right().saturating_sub(2))
}
