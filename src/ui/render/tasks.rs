use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BLOCK_TITLE: &str = "Tasks";
const NO_ACTIVE_TASKS: &str = "No active tasks";

/// Render the visible tasks according to state.
///
pub fn tasks(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = state.current_focus() != Focus::Input;
    let visible = state.get_filtered_tasks();
    let title = format!("{} ({}/{})", BLOCK_TITLE, visible.len(), state.get_tasks().len());

    let mut block = Block::default()
        .title(title.to_owned())
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(title, styling::active_block_title_style(&theme)));
    }

    if state.shows_no_active_tasks() {
        let paragraph = Paragraph::new(Span::styled(
            NO_ACTIVE_TASKS,
            styling::muted_text_style(&theme),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let editing_id = state.editing_task().map(|task| task.id.to_owned());
    let cursor = if state.is_edit_focused() { "▏" } else { "" };
    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            if task.is_editing {
                // Only the last started edit receives keystrokes
                let text = if editing_id.as_ref() == Some(&task.id) {
                    format!("{}{}", state.get_edit_buffer(), cursor)
                } else {
                    task.title.to_owned()
                };
                return ListItem::new(Line::from(vec![
                    Span::styled("[~] ", styling::muted_text_style(&theme)),
                    Span::styled(text, styling::edit_style(&theme)),
                ]));
            }
            let (marker, style) = if task.completed {
                ("[x] ", styling::completed_task_style(&theme))
            } else {
                ("[ ] ", styling::normal_text_style(&theme))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, styling::muted_text_style(&theme)),
                Span::styled(task.title.to_owned(), style),
            ]))
        })
        .collect();

    let mut list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .block(block);
    if focused {
        list = list.highlight_style(styling::active_list_item_style(&theme));
    }

    frame.render_stateful_widget(list, size, state.get_tasks_list_state());
}
