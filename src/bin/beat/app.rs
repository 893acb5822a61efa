//! App - input state and the recompute-on-every-change event loop.
//!
//! Every key press that mutates an input re-runs both calculators (the
//! silent path); Enter re-validates explicitly and surfaces the first
//! problem in the status line (the noisy path).

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use beatclock::timing::{
    beat_frequency_hz, beat_period_s, note_duration_ms, position_ms, BeatPosition, NoteValue,
    PositionMs, TimeSignature,
};

use crate::fields::InputField;
use crate::glyphs::SymbolMode;
use crate::ui;

/// Which input the keyboard currently edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Bpm,
    Numerator,
    Denominator,
    Bar,
    Beat,
    NoteRow,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Bpm,
        Focus::Numerator,
        Focus::Denominator,
        Focus::Bar,
        Focus::Beat,
        Focus::NoteRow,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// Full UI state: field buffers, selected note value, latest results.
pub struct App {
    pub bpm: InputField,
    pub numerator: InputField,
    pub denominator: InputField,
    pub bar: InputField,
    pub beat: InputField,
    /// Currently selected note value
    pub note: NoteValue,
    pub focus: Focus,
    /// Latest silent-path results; `None` renders the placeholder
    pub duration: Option<f64>,
    pub frequency: Option<f64>,
    pub period: Option<f64>,
    pub position: Option<PositionMs>,
    /// Noisy-path message from the last explicit validation
    pub message: Option<String>,
    pub symbols: SymbolMode,
    pub show_fonts: bool,
    should_quit: bool,
}

impl App {
    /// Create the app with every field seeded to its default.
    pub fn new() -> Self {
        let mut app = Self {
            bpm: InputField::new("BPM", "120"),
            numerator: InputField::new("Numerator", "4"),
            denominator: InputField::new("Denominator", "4"),
            bar: InputField::new("Bar", "1"),
            beat: InputField::new("Beat", "1"),
            note: NoteValue::Quarter,
            focus: Focus::Bpm,
            duration: None,
            frequency: None,
            period: None,
            position: None,
            message: None,
            symbols: SymbolMode::detect(),
            show_fonts: false,
            should_quit: false,
        };
        // Initial calculation from the default values
        app.refresh();
        app
    }

    /// Run the UI event loop.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one key press.
    fn handle_key(&mut self, key: KeyCode) {
        // The font overlay swallows keys until dismissed
        if self.show_fonts {
            if matches!(
                key,
                KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char('q') | KeyCode::Esc
            ) {
                self.show_fonts = false;
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.show_fonts = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
            }
            KeyCode::Left if self.focus == Focus::NoteRow => self.select_note(-1),
            KeyCode::Right if self.focus == Focus::NoteRow => self.select_note(1),
            KeyCode::Enter => self.calculate(),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    if field.backspace() {
                        self.touch();
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focused_field_mut() {
                    if field.insert(c) {
                        self.touch();
                    }
                }
            }
            _ => {}
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        match self.focus {
            Focus::Bpm => Some(&mut self.bpm),
            Focus::Numerator => Some(&mut self.numerator),
            Focus::Denominator => Some(&mut self.denominator),
            Focus::Bar => Some(&mut self.bar),
            Focus::Beat => Some(&mut self.beat),
            Focus::NoteRow => None,
        }
    }

    /// Change the selected note value by `step` places, wrapping.
    fn select_note(&mut self, step: i32) {
        let len = NoteValue::ALL.len() as i32;
        let index = NoteValue::ALL
            .iter()
            .position(|&n| n == self.note)
            .unwrap_or(0) as i32;
        self.note = NoteValue::ALL[(index + step).rem_euclid(len) as usize];
        self.touch();
    }

    /// An input mutated: drop any stale message and re-evaluate.
    fn touch(&mut self) {
        self.message = None;
        self.refresh();
    }

    /// Silent path: recompute everything, treating failures as absent.
    fn refresh(&mut self) {
        let bpm = self.bpm.parse_f64().ok();
        self.duration = bpm.and_then(|b| note_duration_ms(b, self.note).ok());
        self.frequency = bpm.and_then(|b| beat_frequency_hz(b).ok());
        self.period = bpm.and_then(|b| beat_period_s(b).ok());
        self.position = self.eval_position();
    }

    fn eval_position(&self) -> Option<PositionMs> {
        let bpm = self.bpm.parse_f64().ok()?;
        let signature = TimeSignature::new(
            self.numerator.parse_u32().ok()?,
            self.denominator.parse_u32().ok()?,
        );
        let target = BeatPosition::new(self.bar.parse_u32().ok()?, self.beat.parse_f64().ok()?);
        position_ms(bpm, signature, target).ok()
    }

    /// Noisy path: explicit validation that surfaces the first problem.
    ///
    /// The message stands in for a modal error dialog; it sits in the
    /// status line until the next edit clears it.
    fn calculate(&mut self) {
        self.refresh();
        self.message = self.validate().err().map(|err| err.to_string());
    }

    /// First failure across both calculators, parse errors included.
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        let bpm = self.bpm.parse_f64()?;
        note_duration_ms(bpm, self.note)?;

        let signature = TimeSignature::new(self.numerator.parse_u32()?, self.denominator.parse_u32()?);
        let target = BeatPosition::new(self.bar.parse_u32()?, self.beat.parse_f64()?);
        position_ms(bpm, signature, target)?;

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
