//! Terminal symbol capability and musical-font advice.
//!
//! A desktop build could probe installed fonts for musical-symbol coverage
//! and pick the best one. A terminal cannot choose its own font, so the
//! probe reduces to one capability query: can this terminal be expected to
//! render Unicode musical symbols at all.

use beatclock::timing::NoteValue;

/// Which glyph set the note selector uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolMode {
    /// The locale advertises UTF-8; use the real musical symbols.
    Unicode,
    /// Plain-ASCII stand-ins (W H Q E S T).
    Ascii,
}

impl SymbolMode {
    /// Probe the environment, checking LC_ALL, then LC_CTYPE, then LANG.
    pub fn detect() -> Self {
        let locale = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LC_CTYPE"))
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_default();
        Self::from_locale(&locale)
    }

    /// Capability query against a locale string: UTF-8 means the terminal
    /// can be expected to render the musical symbols.
    pub fn from_locale(locale: &str) -> Self {
        let upper = locale.to_ascii_uppercase();
        if upper.contains("UTF-8") || upper.contains("UTF8") {
            SymbolMode::Unicode
        } else {
            SymbolMode::Ascii
        }
    }

    /// Glyph for a note value under this mode.
    pub fn glyph(self, note: NoteValue) -> &'static str {
        match self {
            SymbolMode::Unicode => note.glyph(),
            SymbolMode::Ascii => note.ascii_glyph(),
        }
    }

    /// Footer text describing the active symbol set.
    pub fn describe(self) -> &'static str {
        match self {
            SymbolMode::Unicode => "Unicode musical glyphs",
            SymbolMode::Ascii => "ASCII fallback (no UTF-8 locale detected)",
        }
    }
}

/// A font worth installing for proper musical notation.
pub struct FontAdvice {
    pub name: &'static str,
    pub note: &'static str,
    pub url: Option<&'static str>,
}

/// Musical fonts in preference order.
pub const MUSICAL_FONTS: &[FontAdvice] = &[
    FontAdvice {
        name: "Noto Music",
        note: "Google's dedicated musical notation font (recommended)",
        url: Some("https://fonts.google.com/noto/specimen/Noto+Music"),
    },
    FontAdvice {
        name: "Bravura",
        note: "Professional music engraving font by Steinberg",
        url: Some("https://www.smufl.org/fonts/"),
    },
    FontAdvice {
        name: "MuseScore fonts",
        note: "High-quality music notation fonts",
        url: Some("https://github.com/musescore/MuseScore/tree/master/fonts"),
    },
    FontAdvice {
        name: "Symbola",
        note: "Comprehensive Unicode coverage",
        url: Some("https://fontlibrary.org/en/font/symbola"),
    },
    FontAdvice {
        name: "DejaVu Sans",
        note: "Cross-platform Unicode font, often preinstalled",
        url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_locales_get_unicode_glyphs() {
        assert_eq!(SymbolMode::from_locale("en_US.UTF-8"), SymbolMode::Unicode);
        assert_eq!(SymbolMode::from_locale("de_DE.utf8"), SymbolMode::Unicode);
    }

    #[test]
    fn bare_locales_fall_back_to_ascii() {
        assert_eq!(SymbolMode::from_locale("C"), SymbolMode::Ascii);
        assert_eq!(SymbolMode::from_locale("POSIX"), SymbolMode::Ascii);
        assert_eq!(SymbolMode::from_locale(""), SymbolMode::Ascii);
    }

    #[test]
    fn ascii_mode_serves_ascii_for_every_value() {
        for note in NoteValue::ALL {
            assert!(SymbolMode::Ascii.glyph(note).is_ascii());
        }
    }
}
