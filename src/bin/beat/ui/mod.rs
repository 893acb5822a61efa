//! TUI module for beat
//!
//! Lays out the two calculators and routes rendering to per-panel widgets.

mod duration;
mod fonts;
mod position;
mod tempo;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::fields::InputField;

use duration::render_duration;
use fonts::render_fonts;
use position::render_position;
use tempo::render_tempo;

/// Placeholder shown wherever a result is currently absent
pub const PLACEHOLDER: &str = "--";

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: tempo, position, note value, status, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tempo bar
            Constraint::Length(4), // Beat position panel
            Constraint::Length(5), // Note value panel
            Constraint::Length(1), // Status line
            Constraint::Min(1),    // Help bar
        ])
        .split(area);

    render_tempo(frame, chunks[0], app);
    render_position(frame, chunks[1], app);
    render_duration(frame, chunks[2], app);
    render_status(frame, chunks[3], app);

    let help = Paragraph::new(
        " [Tab] Next field  [Left/Right] Note value  [Enter] Check input  [F] Fonts  [Q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);

    // Font advice pops over everything else
    if app.show_fonts {
        render_fonts(frame, area, app);
    }
}

/// Status line: the noisy-path message, or a quiet symbol-mode note.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = match &app.message {
        Some(message) => Paragraph::new(format!(" Error: {message}")).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new(format!(" Symbols: {}", app.symbols.describe()))
            .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(status, area);
}

/// One input box, highlighted when it has keyboard focus.
pub fn input_span(field: &InputField, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(format!("[{}]", field.buffer), style)
}

/// A `{:.2} ms`-formatted result, or the placeholder while input is bad.
pub fn result_span(value: Option<f64>, unit: &str) -> Span<'static> {
    match value {
        Some(value) => Span::styled(
            format!("{value:.2} {unit}"),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray)),
    }
}
