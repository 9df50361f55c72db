// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale construction and letter sequencing.
//!
//! A scale is a tonic pitch plus an interval pattern. Reading a scale in
//! Western notation with sequential letters gives every degree the next letter
//! of the musical alphabet, so C minor reads C D Eb F G Ab Bb rather than
//! C D D# F G G# A#.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::music::notation::{next_letter, semitone_class, Format, NotationSystem};
use crate::music::pitch::{Pitch, Rendered};

/// Scale types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major scale and modes
    Major,        // Ionian
    Dorian,       // Minor with raised 6th
    Phrygian,     // Minor with lowered 2nd
    Lydian,       // Major with raised 4th
    Mixolydian,   // Major with lowered 7th
    NaturalMinor, // Aeolian
    Locrian,      // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    // Blues
    Blues,

    // Other common scales
    WholeTone,
    Diminished, // Half-whole
    Chromatic,

    // Custom scale from intervals
    Custom,
}

impl ScaleType {
    /// Every built-in scale type, in listing order
    pub const ALL: [ScaleType; 15] = [
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::NaturalMinor,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::WholeTone,
        ScaleType::Diminished,
        ScaleType::Chromatic,
    ];

    /// Get the intervals (semitones from the tonic) for this scale type
    pub fn intervals(self) -> Vec<u8> {
        match self {
            ScaleType::Major => vec![0, 2, 4, 5, 7, 9, 11],
            ScaleType::Dorian => vec![0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => vec![0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => vec![0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => vec![0, 2, 4, 5, 7, 9, 10],
            ScaleType::NaturalMinor => vec![0, 2, 3, 5, 7, 8, 10],
            ScaleType::Locrian => vec![0, 1, 3, 5, 6, 8, 10],

            ScaleType::HarmonicMinor => vec![0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => vec![0, 2, 3, 5, 7, 9, 11],

            ScaleType::MajorPentatonic => vec![0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => vec![0, 3, 5, 7, 10],

            ScaleType::Blues => vec![0, 3, 5, 6, 7, 10],

            ScaleType::WholeTone => vec![0, 2, 4, 6, 8, 10],
            ScaleType::Diminished => vec![0, 1, 3, 4, 6, 7, 9, 10],
            ScaleType::Chromatic => (0..12).collect(),

            ScaleType::Custom => vec![], // Custom scales define their own
        }
    }

    /// Parse scale type from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "ionian" => Some(ScaleType::Major),
            "dorian" => Some(ScaleType::Dorian),
            "phrygian" => Some(ScaleType::Phrygian),
            "lydian" => Some(ScaleType::Lydian),
            "mixolydian" => Some(ScaleType::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleType::NaturalMinor),
            "locrian" => Some(ScaleType::Locrian),
            "harmonicminor" => Some(ScaleType::HarmonicMinor),
            "melodicminor" => Some(ScaleType::MelodicMinor),
            "majorpentatonic" | "pentatonicmajor" => Some(ScaleType::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => Some(ScaleType::MinorPentatonic),
            "blues" | "minorblues" => Some(ScaleType::Blues),
            "wholetone" => Some(ScaleType::WholeTone),
            "diminished" | "octatonic" | "halfwhole" => Some(ScaleType::Diminished),
            "chromatic" => Some(ScaleType::Chromatic),
            _ => None,
        }
    }

    /// Pattern name accepted by `from_str` and used in config files
    pub fn key(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::NaturalMinor => "minor",
            ScaleType::Locrian => "locrian",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::MajorPentatonic => "major_pentatonic",
            ScaleType::MinorPentatonic => "minor_pentatonic",
            ScaleType::Blues => "blues",
            ScaleType::WholeTone => "whole_tone",
            ScaleType::Diminished => "diminished",
            ScaleType::Chromatic => "chromatic",
            ScaleType::Custom => "custom",
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::Diminished => "Diminished",
            ScaleType::Chromatic => "Chromatic",
            ScaleType::Custom => "Custom",
        }
    }

    /// Get the parallel minor/major scale type
    pub fn parallel(self) -> Option<Self> {
        match self {
            ScaleType::Major => Some(ScaleType::NaturalMinor),
            ScaleType::NaturalMinor => Some(ScaleType::Major),
            ScaleType::MajorPentatonic => Some(ScaleType::MinorPentatonic),
            ScaleType::MinorPentatonic => Some(ScaleType::MajorPentatonic),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check that an interval pattern starts at the tonic, strictly increases
/// and stays within one octave
pub fn validate_intervals(name: &str, intervals: &[u8]) -> Result<()> {
    let invalid = |message: &str| TheoryError::InvalidIntervals {
        name: name.to_string(),
        message: message.to_string(),
    };

    match intervals.first() {
        None => return Err(invalid("pattern is empty")),
        Some(&first) if first != 0 => return Err(invalid("pattern must start at 0")),
        _ => {}
    }
    if intervals.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(invalid("intervals must be strictly increasing"));
    }
    if intervals.iter().any(|&i| i > 11) {
        return Err(invalid("intervals must lie within 0..=11"));
    }
    Ok(())
}

/// A scale built from a tonic pitch and an interval pattern
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    tonic: Pitch,
    scale_type: ScaleType,
    intervals: Vec<u8>,
    pitches: Vec<Pitch>,
}

impl Scale {
    /// Create a scale from a tonic and a pattern name ("major", "minor", ...)
    pub fn new(tonic: &Pitch, pattern: &str) -> Result<Self> {
        let scale_type =
            ScaleType::from_str(pattern).ok_or_else(|| TheoryError::UnknownScalePattern {
                name: pattern.to_string(),
            })?;
        Self::from_type(tonic, scale_type)
    }

    /// Create a scale from a tonic and a built-in scale type
    pub fn from_type(tonic: &Pitch, scale_type: ScaleType) -> Result<Self> {
        let intervals = scale_type.intervals();
        Self::build(tonic, scale_type, intervals)
    }

    /// Create a custom scale from a tonic and intervals
    pub fn custom(tonic: &Pitch, intervals: Vec<u8>) -> Result<Self> {
        validate_intervals("custom", &intervals)?;
        Self::build(tonic, ScaleType::Custom, intervals)
    }

    /// Fails when a degree would lie outside the pitch range
    fn build(tonic: &Pitch, scale_type: ScaleType, intervals: Vec<u8>) -> Result<Self> {
        let pitches = intervals
            .iter()
            .map(|&i| tonic.transpose(i32::from(i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tonic: tonic.clone(),
            scale_type,
            intervals,
            pitches,
        })
    }

    /// Get the tonic
    pub fn tonic(&self) -> &Pitch {
        &self.tonic
    }

    /// Get the scale type
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Get the intervals (semitones from the tonic)
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    /// Get the pitches in this scale
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Canonical values of the pitches in this scale
    pub fn values(&self) -> Vec<i32> {
        self.pitches.iter().map(Pitch::value).collect()
    }

    /// Get the number of pitches in this scale
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// Check if this scale is empty (shouldn't happen normally)
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Read every pitch as a number or as text
    pub fn read(&self, format: Format, sequential_letters: bool) -> Result<Vec<Rendered>> {
        match format {
            Format::Numeric => Ok(self
                .pitches
                .iter()
                .map(|p| Rendered::Number(p.value()))
                .collect()),
            Format::Notation(system) => Ok(self
                .names(system, sequential_letters)?
                .into_iter()
                .map(Rendered::Text)
                .collect()),
        }
    }

    /// Spell every pitch in a notation system
    ///
    /// With `sequential_letters` in Western notation the first pitch keeps the
    /// tonic's own letter and each following pitch asks for the letter after
    /// the one actually assigned to its predecessor.
    pub fn names(&self, system: NotationSystem, sequential_letters: bool) -> Result<Vec<String>> {
        if system != NotationSystem::Western || !sequential_letters {
            return self
                .pitches
                .iter()
                .map(|p| p.format_in(system, None))
                .collect();
        }

        let mut letter = match self.tonic.letter_hint() {
            Some(letter) => letter,
            None => first_letter(&self.tonic.format_in(NotationSystem::Western, None)?),
        };

        let mut names = Vec::with_capacity(self.pitches.len());
        for (i, pitch) in self.pitches.iter().enumerate() {
            if i > 0 {
                letter = next_letter(letter);
            }
            let name = pitch.format_in(NotationSystem::Western, Some(letter))?;
            letter = first_letter(&name);
            names.push(name);
        }
        Ok(names)
    }

    /// Check if a pitch (in any octave) is in this scale
    pub fn contains(&self, pitch: &Pitch) -> bool {
        self.degree_of(pitch).is_some()
    }

    /// Get the scale degree (1-based) for a pitch, in any octave
    pub fn degree_of(&self, pitch: &Pitch) -> Option<usize> {
        let class = pitch.semitone_class();
        self.pitches
            .iter()
            .position(|p| p.semitone_class() == class)
            .map(|i| i + 1)
    }

    /// Get the pitch at a given scale degree (1-based)
    pub fn pitch_at_degree(&self, degree: usize) -> Option<&Pitch> {
        if degree == 0 || degree > self.len() {
            return None;
        }
        Some(&self.pitches[degree - 1])
    }

    /// Snap a canonical value to the nearest pitch class in this scale,
    /// keeping it in the same octave
    pub fn quantize(&self, value: i32) -> i32 {
        let wide = i64::from(value);
        let base = wide - i64::from(semitone_class(value));
        let mut best = value;
        let mut min_dist = i64::MAX;

        for pitch in &self.pitches {
            let Ok(candidate) = i32::try_from(base + i64::from(pitch.semitone_class())) else {
                continue;
            };
            let offset = (i64::from(candidate) - wide).abs();
            let dist = offset.min(12 - offset);
            if dist < min_dist {
                min_dist = dist;
                best = candidate;
            }
        }

        best
    }

    /// Get the parallel scale (major <-> minor)
    pub fn parallel(&self) -> Result<Option<Scale>> {
        match self.scale_type.parallel() {
            Some(scale_type) => Scale::from_type(&self.tonic, scale_type).map(Some),
            None => Ok(None),
        }
    }

    /// Get the relative scale (e.g., C major -> A minor)
    pub fn relative(&self) -> Result<Option<Scale>> {
        match self.scale_type {
            ScaleType::Major => Scale::from_type(
                &self.tonic.transpose_down(3)?, // Down a minor 3rd
                ScaleType::NaturalMinor,
            )
            .map(Some),
            ScaleType::NaturalMinor => Scale::from_type(
                &self.tonic.transpose(3)?, // Up a minor 3rd
                ScaleType::Major,
            )
            .map(Some),
            _ => Ok(None),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.scale_type)
    }
}

fn first_letter(name: &str) -> char {
    name.chars().next().unwrap_or('C')
}

/// Custom scale definitions that can be loaded from config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomScaleDefinition {
    /// Name of the scale
    pub name: String,
    /// Intervals from the tonic (semitones)
    pub intervals: Vec<u8>,
}

impl CustomScaleDefinition {
    /// Create a scale from this definition
    pub fn to_scale(&self, tonic: &Pitch) -> Result<Scale> {
        validate_intervals(&self.name, &self.intervals)?;
        Scale::build(tonic, ScaleType::Custom, self.intervals.clone())
    }
}

/// Registry for custom scale definitions
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    custom_scales: HashMap<String, CustomScaleDefinition>,
}

impl ScaleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom scale, rejecting malformed interval patterns
    pub fn register(&mut self, def: CustomScaleDefinition) -> Result<()> {
        validate_intervals(&def.name, &def.intervals)?;
        self.custom_scales.insert(def.name.clone(), def);
        Ok(())
    }

    /// Get a scale by name (checks custom first, then built-in)
    pub fn get_scale(&self, tonic: &Pitch, name: &str) -> Result<Scale> {
        if let Some(def) = self.custom_scales.get(name) {
            return def.to_scale(tonic);
        }

        Scale::new(tonic, name)
    }

    /// List all available scale names
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.keys().cloned().collect();

        names.extend(ScaleType::ALL.iter().map(|t| t.key().to_string()));
        names.sort();
        names.dedup();
        names
    }
}
