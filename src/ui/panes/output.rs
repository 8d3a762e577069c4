//! Program output pane rendering

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the output transcript
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Output ", is_focused);

    if transcript.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let lines: Vec<&str> = transcript.lines().collect();

    let visible_height = visible_rows(area.height);
    *scroll_offset = clamp_scroll(*scroll_offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            // Control characters would corrupt the terminal; show them escaped
            let shown: String = if line.chars().any(char::is_control) {
                line.chars().flat_map(char::escape_default).collect()
            } else {
                line.to_string()
            };
            ListItem::new(shown).style(Style::default().fg(DEFAULT_THEME.fg))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
