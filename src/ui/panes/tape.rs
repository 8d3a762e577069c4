//! Tape pane rendering
//!
//! One row per cell: index, value and character view. The cell under the
//! pointer is highlighted and cells referenced by open loop frames are marked,
//! since those are the cells `]` will test.

use super::utils::{clamp_scroll, follow_row, format_cell_char, pane_block, visible_rows};
use crate::interpreter::state::ExecState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};
use rustc_hash::FxHashSet;

/// Render the tape pane
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ExecState,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let tape = state.tape();
    let block = pane_block(" Tape ", is_focused).title_bottom(Line::from(Span::styled(
        format!(" {} cell{} ", tape.len(), if tape.len() == 1 { "" } else { "s" }),
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    let loop_cells: FxHashSet<usize> = state
        .loop_frames()
        .iter()
        .map(|loop_frame| loop_frame.cell)
        .collect();

    let visible_height = visible_rows(area.height);
    *scroll_offset = follow_row(*scroll_offset, tape.pointer(), visible_height);
    *scroll_offset = clamp_scroll(*scroll_offset, tape.len(), visible_height);

    let items: Vec<ListItem> = tape
        .cells()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, &value)| {
            let is_pointer = index == tape.pointer();
            let marker = if is_pointer { "▶" } else { " " };
            let loop_mark = if loop_cells.contains(&index) { "⟲" } else { " " };

            let mut spans = vec![
                Span::styled(
                    format!("{} {:>5} ", marker, index),
                    if is_pointer {
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(DEFAULT_THEME.comment)
                    },
                ),
                Span::styled(
                    format!("{} ", loop_mark),
                    Style::default().fg(DEFAULT_THEME.loop_marker),
                ),
                Span::styled(
                    format!("{:>8} ", value),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ];
            spans.push(format_cell_char(value));

            let item = ListItem::new(Line::from(spans));
            if is_pointer {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
