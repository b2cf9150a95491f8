use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the base style painted over the whole frame.
///
pub fn base_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .bg(theme.background.to_color())
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for tasks that are done.
///
pub fn completed_task_style(theme: &Theme) -> Style {
    muted_text_style(theme).add_modifier(Modifier::CROSSED_OUT)
}

/// Return the style for the selected list item.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for an open inline edit box.
///
pub fn edit_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.accent.to_color())
        .bg(theme.surface.to_color())
}

/// Return the style for transient messages.
///
pub fn message_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.success.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the footer hints.
///
pub fn footer_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.surface.to_color())
        .bg(theme.primary.to_color())
}
