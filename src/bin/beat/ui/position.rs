//! Beat position widget - time signature, bar and beat entries with the
//! millisecond offset of that beat from the start of bar 1

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

use super::input_span;

/// Render the beat position panel.
pub fn render_position(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Beat Position ")
        .borders(Borders::ALL);

    let entries = Line::from(vec![
        Span::styled(" Time Sig: ", Style::default().fg(Color::Cyan)),
        input_span(&app.numerator, app.focus == Focus::Numerator),
        Span::raw("/"),
        input_span(&app.denominator, app.focus == Focus::Denominator),
        Span::raw("    "),
        Span::styled("Bar: ", Style::default().fg(Color::Cyan)),
        input_span(&app.bar, app.focus == Focus::Bar),
        Span::raw("    "),
        Span::styled("Beat: ", Style::default().fg(Color::Cyan)),
        input_span(&app.beat, app.focus == Focus::Beat),
    ]);

    let result = match &app.position {
        Some(position) => Line::from(Span::styled(
            format!(" {position}"),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            " -- (invalid input)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(vec![entries, result]).block(block);
    frame.render_widget(paragraph, area);
}
