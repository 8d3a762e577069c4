//! Helpers shared by several panes

use crate::memory::tape::Cell;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows that fit inside a bordered pane of `height`, at least 1
pub(crate) fn visible_rows(height: u16) -> usize {
    height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}

/// Shift `offset` the least amount that keeps `row` on screen
pub(crate) fn follow_row(offset: usize, row: usize, visible: usize) -> usize {
    if row < offset {
        row
    } else if row >= offset + visible {
        row + 1 - visible
    } else {
        offset
    }
}

/// Character view of a cell, as `.` would print it
pub(crate) fn format_cell_char(value: Cell) -> Span<'static> {
    let style = Style::default().fg(DEFAULT_THEME.secondary);
    match u32::try_from(value).ok().and_then(char::from_u32) {
        Some(c) if !c.is_control() => Span::styled(format!("'{}'", c), style),
        Some(c) => Span::styled(format!("'\\u{{{:x}}}'", c as u32), style),
        None => Span::styled("—", Style::default().fg(DEFAULT_THEME.comment)),
    }
}
