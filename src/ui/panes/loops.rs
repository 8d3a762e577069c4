//! Loop stack pane rendering

use super::utils::{clamp_scroll, format_cell_char, pane_block, visible_rows};
use crate::interpreter::state::ExecState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render open loop frames, innermost first
pub fn render_loops_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ExecState,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Loop Stack ", is_focused);
    let frames = state.loop_frames();

    if frames.is_empty() {
        let paragraph = Paragraph::new("(no open loops)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_rows(area.height);
    *scroll_offset = clamp_scroll(*scroll_offset, frames.len(), visible_height);

    let items: Vec<ListItem> = frames
        .iter()
        .enumerate()
        .rev()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(depth, loop_frame)| {
            let value = state.tape().value_at(loop_frame.cell);
            let exits = value == 0;
            let label_style = if depth + 1 == frames.len() {
                Style::default()
                    .fg(DEFAULT_THEME.loop_marker)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.loop_marker)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<3}", depth), label_style),
                Span::styled("[ at ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{:<5}", loop_frame.open_pc),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(" tests cell ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{:<5}", loop_frame.cell),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{} ", value),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                format_cell_char(value),
                Span::styled(
                    if exits { "  exit" } else { "  repeat" },
                    Style::default().fg(if exits {
                        DEFAULT_THEME.success
                    } else {
                        DEFAULT_THEME.secondary
                    }),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
