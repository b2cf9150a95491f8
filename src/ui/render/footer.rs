use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

const EDIT_HINTS: &str = " Type to edit, Enter/Esc: save, Tab: back to list";
const INPUT_HINTS: &str = " Enter: add task, Tab/Esc: task list, Ctrl-C: quit";
const LIST_HINTS: &str =
    " j/k: move, space: complete, e: edit, d: delete, 1/2/3/f: filter, t: theme, i: new task, q: quit";

/// Return the key hints for the current context.
///
fn hints(state: &State) -> &'static str {
    match state.current_focus() {
        Focus::Edit => EDIT_HINTS,
        Focus::Input => INPUT_HINTS,
        Focus::List => LIST_HINTS,
    }
}

/// Render footer with key hints according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let paragraph = Paragraph::new(Span::styled(hints(state), styling::footer_style(theme)))
        .style(styling::footer_style(theme));
    frame.render_widget(paragraph, size);
}
