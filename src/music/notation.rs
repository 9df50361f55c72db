// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notation systems and the pitch converter.
//!
//! A [`NotationTable`] maps semitone classes to their textual spellings for one
//! notation system and parses spellings back to canonical pitches. Octaves are
//! written as suffix markers: each `'` raises by an octave, each `.` lowers.
//!
//! Octaves are counted from a per-system breakpoint. Western notation counts
//! from the C that starts the reference octave (canonical 0), so Western
//! spellings never depend on the tonic. The movable-tonic system counts from
//! the tonic itself, which is always spelled `S`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::error::{Result, TheoryError};

/// Western enharmonic spellings per semitone class, default spelling first
const WESTERN_SPELLINGS: [&[&str]; 12] = [
    &["C", "B#", "Dbb"],
    &["C#", "Db"],
    &["D", "C##", "Ebb"],
    &["D#", "Eb"],
    &["E", "Fb", "D##"],
    &["F", "E#"],
    &["F#", "Gb"],
    &["G", "F##", "Abb"],
    &["G#", "Ab"],
    &["A", "G##", "Bbb"],
    &["A#", "Bb"],
    &["B", "Cb", "A##"],
];

/// Movable-tonic degree symbols, indexed by semitones above the tonic
const MOVABLE_SYMBOLS: [&str; 12] = [
    "S", "Rb", "R", "Gb", "G", "M", "M#", "P", "Db", "D", "Nb", "N",
];

/// The musical alphabet in ascending order
pub const LETTERS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// Raises the pitch by one octave
pub const OCTAVE_UP: char = '\'';

/// Lowers the pitch by one octave
pub const OCTAVE_DOWN: char = '.';

/// Next letter of the musical alphabet (G wraps to A)
pub fn next_letter(letter: char) -> char {
    let upper = letter.to_ascii_uppercase();
    match LETTERS.iter().position(|&l| l == upper) {
        Some(i) => LETTERS[(i + 1) % LETTERS.len()],
        None => upper,
    }
}

/// Semitone classes played on black keys
pub const BLACK_KEY_CLASSES: [u8; 5] = [1, 3, 6, 8, 10];

/// Semitone class (0-11) of a canonical pitch
pub fn semitone_class(value: i32) -> u8 {
    value.rem_euclid(12) as u8
}

/// Check if a canonical pitch sits on a black key
pub fn is_black_key(value: i32) -> bool {
    BLACK_KEY_CLASSES.contains(&semitone_class(value))
}

/// Notation systems a pitch can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotationSystem {
    /// Letter names with enharmonic spellings (C, C#, Db, ...)
    Western,
    /// Degree symbols relative to the tonic (S, Rb, R, ...)
    #[serde(alias = "indian", alias = "sargam")]
    MovableTonic,
    /// Recognized but not implemented
    #[serde(alias = "western_solfege")]
    Solfege,
}

impl NotationSystem {
    /// Parse a notation system from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "western" | "letter" | "letters" => Some(NotationSystem::Western),
            "movabletonic" | "movable" | "indian" | "sargam" => Some(NotationSystem::MovableTonic),
            "solfege" | "westernsolfege" => Some(NotationSystem::Solfege),
            _ => None,
        }
    }

    /// Get a human-readable name for this system
    pub fn name(self) -> &'static str {
        match self {
            NotationSystem::Western => "western",
            NotationSystem::MovableTonic => "movable-tonic",
            NotationSystem::Solfege => "solfege",
        }
    }

    /// Whether pitches can be parsed and formatted in this system
    pub fn is_implemented(self) -> bool {
        !matches!(self, NotationSystem::Solfege)
    }
}

impl Default for NotationSystem {
    fn default() -> Self {
        NotationSystem::Western
    }
}

impl fmt::Display for NotationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Target representation when reading a pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// The canonical integer itself
    Numeric,
    /// Text in a notation system
    Notation(NotationSystem),
}

impl Format {
    /// Parse a format from string ("numeric" or any notation system name)
    pub fn from_str(s: &str) -> Option<Self> {
        let trimmed = s.trim().to_lowercase();
        if trimmed == "numeric" || trimmed == "number" {
            return Some(Format::Numeric);
        }
        NotationSystem::from_str(&trimmed).map(Format::Notation)
    }
}

impl From<NotationSystem> for Format {
    fn from(system: NotationSystem) -> Self {
        Format::Notation(system)
    }
}

/// Per-pitch lookup table between semitone classes and spellings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationTable {
    system: NotationSystem,
    breakpoint: i32,
    /// Spellings per semitone class; empty for unimplemented systems
    spellings: Vec<Vec<&'static str>>,
    lookup: HashMap<&'static str, u8>,
}

impl NotationTable {
    /// Build the table for a system anchored at the given tonic
    pub fn new(system: NotationSystem, tonic: i32) -> Self {
        let (breakpoint, spellings): (i32, Vec<Vec<&'static str>>) = match system {
            NotationSystem::Western => (
                0,
                WESTERN_SPELLINGS.iter().map(|names| names.to_vec()).collect(),
            ),
            NotationSystem::MovableTonic => (
                tonic,
                (0..12)
                    .map(|class: i32| {
                        let degree = (class - tonic.rem_euclid(12)).rem_euclid(12);
                        vec![MOVABLE_SYMBOLS[degree as usize]]
                    })
                    .collect(),
            ),
            NotationSystem::Solfege => (0, Vec::new()),
        };

        let mut lookup = HashMap::new();
        for (class, names) in spellings.iter().enumerate() {
            for &name in names {
                lookup.insert(name, class as u8);
            }
        }

        Self {
            system,
            breakpoint,
            spellings,
            lookup,
        }
    }

    /// Get the notation system
    pub fn system(&self) -> NotationSystem {
        self.system
    }

    /// Canonical pitch where octave zero starts
    pub fn breakpoint(&self) -> i32 {
        self.breakpoint
    }

    /// Check if this table can parse and format anything
    pub fn is_inert(&self) -> bool {
        self.spellings.is_empty()
    }

    /// Spellings for a semitone class, default first
    pub fn spellings(&self, class: u8) -> &[&'static str] {
        self.spellings
            .get(class as usize % 12)
            .map(|names| names.as_slice())
            .unwrap_or(&[])
    }

    /// Semitone class of a spelling without octave markers
    pub fn class_of(&self, spelling: &str) -> Option<u8> {
        self.lookup.get(spelling).copied()
    }

    /// Check if a spelling (without octave markers) belongs to this system
    pub fn contains(&self, spelling: &str) -> bool {
        self.lookup.contains_key(spelling)
    }

    /// Octave number of a canonical pitch relative to the breakpoint
    pub fn octave_of(&self, value: i32) -> i32 {
        let octave = (i64::from(value) - i64::from(self.breakpoint)).div_euclid(12);
        // any i32 difference divided by 12 fits
        octave as i32
    }

    /// Parse a spelling with optional octave markers into a canonical pitch
    pub fn parse(&self, text: &str) -> Result<i32> {
        if self.is_inert() {
            return Err(TheoryError::UnsupportedSystem {
                system: self.system,
            });
        }

        let text = text.trim();
        let token = text.trim_end_matches([OCTAVE_UP, OCTAVE_DOWN]);
        let octave: i64 = text[token.len()..]
            .chars()
            .map(|c| if c == OCTAVE_UP { 1 } else { -1 })
            .sum();

        let token = self.normalize(token);
        let class = self
            .class_of(&token)
            .ok_or_else(|| TheoryError::UnknownSpelling {
                spelling: text.to_string(),
                system: self.system,
            })?;

        let breakpoint = i64::from(self.breakpoint);
        let value = breakpoint + (i64::from(class) - breakpoint).rem_euclid(12) + octave * 12;
        i32::try_from(value).map_err(|_| TheoryError::OutOfRange { value })
    }

    /// Format a canonical pitch, honouring a preferred letter when possible
    ///
    /// A preferred letter that none of the enharmonic spellings start with is
    /// reported to `diagnostics` and the default spelling is used instead.
    pub fn format(
        &self,
        value: i32,
        letter: Option<char>,
        diagnostics: &dyn Diagnostics,
    ) -> Result<String> {
        let candidates = self.spellings(semitone_class(value));
        let default = *candidates.first().ok_or(TheoryError::UnsupportedSystem {
            system: self.system,
        })?;

        let name = match (self.system, letter) {
            (NotationSystem::Western, Some(letter)) => candidates
                .iter()
                .copied()
                .find(|name| name.starts_with(letter.to_ascii_uppercase()))
                .unwrap_or_else(|| {
                    diagnostics.error(&format!(
                        "Letter base '{}' not in note {}. Returning default form {}",
                        letter,
                        candidates.join(","),
                        default
                    ));
                    default
                }),
            _ => default,
        };

        Ok(with_octave_markers(name, self.octave_of(value)))
    }

    /// Western letters are accepted in either case
    fn normalize(&self, token: &str) -> String {
        match self.system {
            NotationSystem::Western => {
                let mut chars = token.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            }
            _ => token.to_string(),
        }
    }
}

fn with_octave_markers(name: &str, octave: i32) -> String {
    let marker = if octave < 0 { OCTAVE_DOWN } else { OCTAVE_UP };
    let mut text = String::with_capacity(name.len() + octave.unsigned_abs() as usize);
    text.push_str(name);
    text.extend(std::iter::repeat(marker).take(octave.unsigned_abs() as usize));
    text
}
