//! Font advice overlay - which fonts render the note glyphs properly

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::glyphs::MUSICAL_FONTS;

/// Centered popup rectangle, clamped to the available area.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the font advice popup over the given area.
pub fn render_fonts(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            " If note symbols show as boxes, install one of these fonts:",
            Style::default().fg(Color::White),
        )),
        Line::default(),
    ];

    for font in MUSICAL_FONTS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", font.name),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(font.note),
        ]));
        if let Some(url) = font.url {
            lines.push(Line::from(Span::styled(
                format!("  {:14}{url}", ""),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" Detected: {}   [F] Close", app.symbols.describe()),
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16 + 2;
    let popup = popup_area(area, 76, height);

    let block = Block::default()
        .title(" Musical Fonts ")
        .borders(Borders::ALL);
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
