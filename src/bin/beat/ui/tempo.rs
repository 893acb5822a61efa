//! Tempo bar widget - the BPM entry plus its frequency and period readouts

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

use super::{input_span, result_span};

/// Render the tempo bar.
pub fn render_tempo(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title(" beat ").borders(Borders::ALL);

    let mut spans = vec![
        Span::styled(" BPM: ", Style::default().fg(Color::Cyan)),
        input_span(&app.bpm, app.focus == Focus::Bpm),
        Span::raw("    "),
        Span::styled("Beat: ", Style::default().fg(Color::DarkGray)),
        result_span(app.frequency, "Hz"),
        Span::raw("  "),
        Span::styled("Period: ", Style::default().fg(Color::DarkGray)),
        result_span(app.period, "s"),
    ];

    // Flag the blank-default so a cleared box is not mistaken for zero
    if app.bpm.buffer.trim().is_empty() {
        spans.push(Span::styled(
            "  (blank = 120)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
