//! Note value widget - the six-way note selector and the duration readout

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use beatclock::timing::NoteValue;

use crate::app::{App, Focus};

use super::result_span;

/// Short selector name; full labels only for the selected note.
fn short_name(note: NoteValue) -> &'static str {
    match note {
        NoteValue::Whole => "Whole",
        NoteValue::Half => "Half",
        NoteValue::Quarter => "Quarter",
        NoteValue::Eighth => "Eighth",
        NoteValue::Sixteenth => "16th",
        NoteValue::ThirtySecond => "32nd",
    }
}

/// Render the note value panel.
pub fn render_duration(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Note Value ")
        .borders(Borders::ALL);

    // Selector row: glyph and short name for each value, selection inverted
    let mut selector = vec![Span::raw(" ")];
    for note in NoteValue::ALL {
        let text = format!(" {} {} ", app.symbols.glyph(note), short_name(note));
        let style = if note == app.note && app.focus == Focus::NoteRow {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if note == app.note {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        selector.push(Span::styled(text, style));
        selector.push(Span::raw(" "));
    }

    let name = Line::from(vec![
        Span::styled(
            format!(" {}", app.note.label()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {}", app.note.british_name()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let result = Line::from(vec![
        Span::styled(" Duration: ", Style::default().fg(Color::Cyan)),
        result_span(app.duration, "ms"),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(selector), name, result]).block(block);
    frame.render_widget(paragraph, area);
}
