//! Program pane rendering
//!
//! The program is a single line of symbols, so it is wrapped to the pane
//! width. The instruction under the program counter is highlighted, and every
//! `[` that owns an open loop frame is marked so the nesting at the current
//! step is visible.

use super::utils::{clamp_scroll, follow_row, pane_block, visible_rows};
use crate::interpreter::state::ExecState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashSet;

fn symbol_style(symbol: char) -> Style {
    match symbol {
        '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
        '+' | '-' => Style::default().fg(DEFAULT_THEME.number),
        '<' | '>' => Style::default().fg(DEFAULT_THEME.fg),
        '.' => Style::default().fg(DEFAULT_THEME.success),
        // Anything else faults as an unknown instruction
        _ => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Render the program pane
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ExecState,
    is_error: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Program ", is_focused);

    let program = state.program();
    if program.is_empty() {
        let paragraph = Paragraph::new("(empty program)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let counter = state.counter();
    let open_loops: FxHashSet<usize> = state
        .loop_frames()
        .iter()
        .map(|loop_frame| loop_frame.open_pc)
        .collect();

    let width = area.width.saturating_sub(2).max(1) as usize;
    let visible_height = visible_rows(area.height);
    let total_rows = program.len().div_ceil(width);

    // Keep the current instruction on screen; at end of program follow the last row
    let counter_row = counter.min(program.len() - 1) / width;
    *scroll_offset = follow_row(*scroll_offset, counter_row, visible_height);
    *scroll_offset = clamp_scroll(*scroll_offset, total_rows, visible_height);

    let lines: Vec<Line> = program
        .chunks(width)
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, &symbol)| {
                    let position = row * width + col;
                    let style = if position == counter && is_error {
                        Style::default()
                            .bg(DEFAULT_THEME.error)
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else if position == counter {
                        Style::default()
                            .bg(DEFAULT_THEME.secondary)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD)
                    } else if open_loops.contains(&position) {
                        Style::default()
                            .bg(DEFAULT_THEME.current_line_bg)
                            .fg(DEFAULT_THEME.loop_marker)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        symbol_style(symbol)
                    };
                    Span::styled(symbol.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
