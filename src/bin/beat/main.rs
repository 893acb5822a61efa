//! beat - terminal tempo calculator
//!
//! Run with: cargo run

mod app;
mod fields;
mod glyphs;
mod ui;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut terminal = ratatui::init();
    let result = App::new().run(&mut terminal);
    ratatui::restore();
    result
}
