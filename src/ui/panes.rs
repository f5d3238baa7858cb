//! Stateless render functions for the explorer panes

use crate::trace::{Trace, TraceStep};
use crate::translator::machine::{ParseError, State};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the declaration pane: the original declarator, the buffer as it
/// looks at the current step (cursor cell highlighted), and the action that
/// produced it.
pub fn render_declaration_pane(frame: &mut Frame, area: Rect, declarator: &str, step: &TraceStep) {
    let mut buffer_spans: Vec<Span> = Vec::new();
    let chars: Vec<char> = step.buffer.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        let style = if i == step.cursor {
            Style::default()
                .bg(DEFAULT_THEME.cursor_bg)
                .fg(Color::Black)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        buffer_spans.push(Span::styled(c.to_string(), style));
    }
    // Cursor at the right boundary: show it on a trailing cell.
    if step.cursor >= chars.len() {
        buffer_spans.push(Span::styled(
            " ",
            Style::default().bg(DEFAULT_THEME.cursor_bg),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            declarator.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(buffer_spans),
        Line::from(vec![
            Span::styled(
                format!("{}", step.state),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", step.action),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border))
            .title(" declaration "),
    );
    frame.render_widget(paragraph, area);
}

/// Render the translation pane: one line per fragment emitted so far, and
/// the final sentence (or the error) once the last step is reached.
pub fn render_translation_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &Trace,
    position: usize,
    outcome: &Result<String, ParseError>,
) {
    let mut lines: Vec<Line> = Vec::new();

    for step in trace.steps().iter().take(position + 1) {
        if let Some(fragment) = &step.fragment {
            let color = if matches!(step.state, State::BaseType) {
                DEFAULT_THEME.base_type
            } else {
                DEFAULT_THEME.fragment
            };
            lines.push(Line::from(vec![
                Span::styled(fragment.clone(), Style::default().fg(color)),
                Span::styled(
                    format!("  ({})", step.action),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]));
        }
    }

    let at_end = position + 1 >= trace.len();
    if at_end {
        lines.push(Line::default());
        match outcome {
            Ok(sentence) => lines.push(Line::from(Span::styled(
                sentence.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ))),
            Err(e) => lines.push(Line::from(Span::styled(
                e.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ))),
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border))
            .title(" translation "),
    );
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
    failed: bool,
) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(50),
            ratatui::layout::Constraint::Percentage(50),
        ])
        .split(area);

    // Left side: step info and status message
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step + 1, total_steps),
            Style::default()
                .bg(if failed {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(DEFAULT_THEME.status_bg).fg(if failed {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = current_step == 0;
    let is_at_end = current_step + 1 >= total_steps;

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(if failed {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.success
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
