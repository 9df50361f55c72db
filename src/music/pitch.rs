// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch value object.
//!
//! Each pitch is stored as a canonical integer (middle C = 0) together with
//! the tonic and notation system it is read and written in. Every pitch owns
//! its own [`NotationTable`], since the movable-tonic table depends on the
//! tonic.

use std::fmt;

use crate::diagnostics::{default_diagnostics, DiagnosticsRef};
use crate::error::{Result, TheoryError};
use crate::music::notation::{self, Format, NotationSystem, NotationTable};

/// Anything a pitch can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum PitchInput {
    /// Canonical value; fractional parts are truncated
    Number(f64),
    /// A spelling such as "C#'" or "Bb.."
    Text(String),
    /// Reuse the canonical value of another pitch
    Pitch(Box<Pitch>),
}

impl From<i32> for PitchInput {
    fn from(value: i32) -> Self {
        PitchInput::Number(f64::from(value))
    }
}

impl From<f64> for PitchInput {
    fn from(value: f64) -> Self {
        PitchInput::Number(value)
    }
}

impl From<&str> for PitchInput {
    fn from(text: &str) -> Self {
        PitchInput::Text(text.to_string())
    }
}

impl From<String> for PitchInput {
    fn from(text: String) -> Self {
        PitchInput::Text(text)
    }
}

impl From<Pitch> for PitchInput {
    fn from(pitch: Pitch) -> Self {
        PitchInput::Pitch(Box::new(pitch))
    }
}

impl From<&Pitch> for PitchInput {
    fn from(pitch: &Pitch) -> Self {
        PitchInput::Pitch(Box::new(pitch.clone()))
    }
}

/// Result of reading a pitch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Number(i32),
    Text(String),
}

impl Rendered {
    /// Get the text, if this is a notation reading
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(text) => Some(text),
            Rendered::Number(_) => None,
        }
    }

    /// Get the number, if this is a numeric reading
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Rendered::Number(value) => Some(*value),
            Rendered::Text(_) => None,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Number(value) => write!(f, "{}", value),
            Rendered::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A pitch with its tonic and notation system
#[derive(Clone)]
pub struct Pitch {
    value: i32,
    tonic: i32,
    system: NotationSystem,
    /// Letter the pitch was spelled with, when parsed from Western text
    letter_hint: Option<char>,
    table: NotationTable,
    diagnostics: DiagnosticsRef,
}

impl Pitch {
    /// Create a pitch with an explicit tonic, reporting to tracing
    pub fn new(
        note: impl Into<PitchInput>,
        tonic: impl Into<PitchInput>,
        system: NotationSystem,
    ) -> Result<Self> {
        Self::with_diagnostics(note, Some(tonic.into()), system, default_diagnostics())
    }

    /// Create a pitch without a tonic; C is assumed and a warning is emitted
    pub fn without_tonic(note: impl Into<PitchInput>, system: NotationSystem) -> Result<Self> {
        Self::with_diagnostics(note, None, system, default_diagnostics())
    }

    /// Create a pitch reporting to the given diagnostics sink
    ///
    /// The tonic is always read as a Western spelling (or a number, or
    /// another pitch). For the unimplemented solfege system an error is
    /// reported and the pitch is inert: numeric notes keep their value but
    /// textual notes cannot be parsed.
    pub fn with_diagnostics(
        note: impl Into<PitchInput>,
        tonic: Option<PitchInput>,
        system: NotationSystem,
        diagnostics: DiagnosticsRef,
    ) -> Result<Self> {
        let tonic = match tonic {
            Some(input) => {
                let western = NotationTable::new(NotationSystem::Western, 0);
                resolve(&input, &western)?
            }
            None => {
                diagnostics.warn("Tonic required. Assuming C");
                0
            }
        };

        if !system.is_implemented() {
            diagnostics.error(&format!("{} notation has not yet been implemented", system));
        }

        let mut pitch = Self::from_parts(0, tonic, system, diagnostics);
        pitch.write(&note.into(), system)?;
        Ok(pitch)
    }

    /// Build a pitch directly from a canonical value without parsing
    pub fn from_parts(
        value: i32,
        tonic: i32,
        system: NotationSystem,
        diagnostics: DiagnosticsRef,
    ) -> Self {
        Self {
            value,
            tonic,
            system,
            letter_hint: None,
            table: NotationTable::new(system, tonic),
            diagnostics,
        }
    }

    /// Canonical semitone offset from middle C
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Canonical value of the tonic
    pub fn tonic(&self) -> i32 {
        self.tonic
    }

    /// Notation system this pitch reads and writes in
    pub fn system(&self) -> NotationSystem {
        self.system
    }

    /// Letter this pitch was spelled with, if it came from Western text
    pub fn letter_hint(&self) -> Option<char> {
        self.letter_hint
    }

    /// Diagnostics sink shared with pitches derived from this one
    pub fn diagnostics(&self) -> &DiagnosticsRef {
        &self.diagnostics
    }

    /// Semitone class (0-11)
    pub fn semitone_class(&self) -> u8 {
        notation::semitone_class(self.value)
    }

    /// Octave relative to this pitch's own notation breakpoint
    pub fn octave(&self) -> i32 {
        self.table.octave_of(self.value)
    }

    /// Check if this pitch sits on a black key
    pub fn is_black_key(&self) -> bool {
        notation::is_black_key(self.value)
    }

    /// Read the pitch as a number or as text in any notation system
    pub fn read(&self, format: Format, letter: Option<char>) -> Result<Rendered> {
        match format {
            Format::Numeric => Ok(Rendered::Number(self.value)),
            Format::Notation(system) => self.format_in(system, letter).map(Rendered::Text),
        }
    }

    /// Spell the pitch in a notation system, preferring a letter if given
    ///
    /// A different system is served by a transient pitch sharing this
    /// pitch's value and tonic.
    pub fn format_in(&self, system: NotationSystem, letter: Option<char>) -> Result<String> {
        if !system.is_implemented() {
            self.diagnostics
                .error(&format!("{} notation has not yet been implemented", system));
            return Err(TheoryError::UnsupportedSystem { system });
        }

        if system == self.system {
            self.table.format(self.value, letter, self.diagnostics.as_ref())
        } else {
            Self::from_parts(self.value, self.tonic, system, self.diagnostics.clone())
                .format_in(system, letter)
        }
    }

    /// Spell the pitch in its own system with its default spelling
    pub fn to_text(&self) -> Result<String> {
        self.format_in(self.system, None)
    }

    /// Re-parse `note` in `system` and overwrite the canonical value
    pub fn write(&mut self, note: &PitchInput, system: NotationSystem) -> Result<()> {
        let value = if system == self.system {
            resolve(note, &self.table)?
        } else {
            resolve(note, &NotationTable::new(system, self.tonic))?
        };

        self.letter_hint = match note {
            PitchInput::Text(text) if system == NotationSystem::Western => text
                .trim()
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase()),
            PitchInput::Pitch(other) => other.letter_hint,
            _ => None,
        };
        self.value = value;
        Ok(())
    }

    /// New pitch `semitones` higher, same tonic and system
    pub fn transpose(&self, semitones: i32) -> Result<Pitch> {
        let value = self
            .value
            .checked_add(semitones)
            .ok_or(TheoryError::OutOfRange {
                value: i64::from(self.value) + i64::from(semitones),
            })?;
        Ok(self.with_value(value))
    }

    /// New pitch `semitones` lower, same tonic and system
    pub fn transpose_down(&self, semitones: i32) -> Result<Pitch> {
        let value = self
            .value
            .checked_sub(semitones)
            .ok_or(TheoryError::OutOfRange {
                value: i64::from(self.value) - i64::from(semitones),
            })?;
        Ok(self.with_value(value))
    }

    /// Signed interval in semitones to another pitch
    pub fn interval_to(&self, other: &Pitch) -> i64 {
        i64::from(other.value) - i64::from(self.value)
    }

    fn with_value(&self, value: i32) -> Pitch {
        Self::from_parts(value, self.tonic, self.system, self.diagnostics.clone())
    }
}

/// Resolve any pitch input to a canonical value using `table` for text
fn resolve(input: &PitchInput, table: &NotationTable) -> Result<i32> {
    match input {
        PitchInput::Number(n) => {
            let truncated = n.trunc();
            if !truncated.is_finite()
                || truncated > f64::from(i32::MAX)
                || truncated < f64::from(i32::MIN)
            {
                return Err(TheoryError::InvalidNumber {
                    value: n.to_string(),
                });
            }
            Ok(truncated as i32)
        }
        PitchInput::Text(text) => table.parse(text),
        PitchInput::Pitch(pitch) => Ok(pitch.value),
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.tonic == other.tonic && self.system == other.system
    }
}

impl Eq for Pitch {}

impl fmt::Debug for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pitch")
            .field("value", &self.value)
            .field("tonic", &self.tonic)
            .field("system", &self.system)
            .finish()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table.format(self.value, None, self.diagnostics.as_ref()) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "{}", self.value),
        }
    }
}
