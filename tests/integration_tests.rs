// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for pitchboard
//!
//! These tests verify that pitches, scales and the keyboard work together
//! through the public API.

use pitchboard::music::notation::{semitone_class, NotationTable, LETTERS, OCTAVE_DOWN, OCTAVE_UP};
use pitchboard::ui::keyboard::{LOWER_ROWS, PLAYED_FILL, UPPER_ROWS};
use pitchboard::{
    DiagnosticLog, Format, KeyboardRenderer, Level, NotationSystem, Pitch, Rendered, Scale,
};

const SYSTEMS: [NotationSystem; 2] = [NotationSystem::Western, NotationSystem::MovableTonic];

fn strip_octave(name: &str) -> &str {
    name.trim_end_matches([OCTAVE_UP, OCTAVE_DOWN])
}

/// Every value in three octaves either side survives format then parse
#[test]
fn test_round_trip_both_systems() {
    let log = DiagnosticLog::new();

    for tonic in [0, 2, 7, -5] {
        for system in SYSTEMS {
            for value in -36..=36 {
                let pitch = Pitch::from_parts(value, tonic, system, log.handle());
                let text = pitch.to_text().unwrap();
                let parsed =
                    Pitch::with_diagnostics(text.as_str(), Some(tonic.into()), system, log.handle())
                        .unwrap();
                assert_eq!(parsed.value(), value, "{} via {:?} (tonic {})", text, system, tonic);
            }
        }
    }

    assert!(log.is_empty());
}

/// Every enharmonic spelling parses back to its own semitone class
#[test]
fn test_enharmonic_closure() {
    let table = NotationTable::new(NotationSystem::Western, 0);
    for class in 0..12u8 {
        let spellings = table.spellings(class);
        assert!(!spellings.is_empty());
        for spelling in spellings {
            assert_eq!(table.parse(spelling).unwrap(), i32::from(class), "{}", spelling);
        }
    }
}

/// Moving up an octave keeps the name and adds one `'` (or drops one `.`)
#[test]
fn test_octave_marker_monotonicity() {
    let log = DiagnosticLog::new();

    for system in SYSTEMS {
        for value in -30..=30 {
            let low = Pitch::from_parts(value, 3, system, log.handle()).to_text().unwrap();
            let high = Pitch::from_parts(value + 12, 3, system, log.handle())
                .to_text()
                .unwrap();

            assert_eq!(strip_octave(&low), strip_octave(&high));

            let count = |s: &str| {
                s.chars().filter(|&c| c == OCTAVE_UP).count() as i32
                    - s.chars().filter(|&c| c == OCTAVE_DOWN).count() as i32
            };
            assert_eq!(count(&high), count(&low) + 1, "{} -> {}", low, high);
        }
    }
}

/// Octave boundaries: values exactly on multiples of 12 from the breakpoint
#[test]
fn test_octave_boundaries() {
    let western = |v: i32| Pitch::new(v, 0, NotationSystem::Western).unwrap().to_text().unwrap();
    assert_eq!(western(-12), "C.");
    assert_eq!(western(-1), "B.");
    assert_eq!(western(0), "C");
    assert_eq!(western(11), "B");
    assert_eq!(western(12), "C'");
    assert_eq!(western(24), "C''");

    let movable = |v: i32| {
        Pitch::new(v, "E", NotationSystem::MovableTonic)
            .unwrap()
            .to_text()
            .unwrap()
    };
    assert_eq!(movable(3), "N.");
    assert_eq!(movable(4), "S");
    assert_eq!(movable(15), "N");
    assert_eq!(movable(16), "S'");
}

/// An unreachable letter preference falls back to the default with a diagnostic
#[test]
fn test_letter_preference_fallback() {
    let log = DiagnosticLog::new();
    let pitch = Pitch::with_diagnostics(
        6,
        Some(0.into()),
        NotationSystem::Western,
        log.handle(),
    )
    .unwrap();

    let read = pitch.read(Format::Notation(NotationSystem::Western), Some('A'));
    assert_eq!(read.unwrap(), Rendered::Text("F#".to_string()));
    assert_eq!(log.count(Level::Error), 1);
}

#[test]
fn test_major_scale_invariants() {
    for tonic_name in ["C", "G", "Bb.", "F#'"] {
        let tonic = Pitch::new(tonic_name, 0, NotationSystem::Western).unwrap();
        let scale = Scale::new(&tonic, "major").unwrap();

        assert_eq!(scale.pitches().len(), 7);
        assert_eq!(scale.pitches()[0].value(), tonic.value());
        assert!(scale.values().windows(2).all(|w| w[0] < w[1]));
    }
}

/// Sequential letters are seven distinct letters ascending from the tonic's
#[test]
fn test_sequential_letter_uniqueness() {
    for tonic_name in ["C", "D", "Eb", "F#", "Ab", "B"] {
        let tonic = Pitch::new(tonic_name, 0, NotationSystem::Western).unwrap();
        let names = Scale::new(&tonic, "major")
            .unwrap()
            .names(NotationSystem::Western, true)
            .unwrap();

        let letters: Vec<char> = names.iter().filter_map(|n| n.chars().next()).collect();
        let start = LETTERS
            .iter()
            .position(|&l| Some(l) == tonic_name.chars().next())
            .unwrap();
        let expected: Vec<char> = (0..7).map(|i| LETTERS[(start + i) % 7]).collect();

        assert_eq!(letters, expected, "{} major: {:?}", tonic_name, names);
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(
        Pitch::new(0, 0, NotationSystem::Western).unwrap().to_text().unwrap(),
        "C"
    );
    assert_eq!(
        Pitch::new(13, 0, NotationSystem::Western).unwrap().to_text().unwrap(),
        "C#'"
    );
    assert_eq!(
        Pitch::new("Bb.", 0, NotationSystem::Western)
            .unwrap()
            .read(Format::Numeric, None)
            .unwrap(),
        Rendered::Number(-2)
    );

    let tonic = Pitch::new("C", "C", NotationSystem::Western).unwrap();
    let minor = Scale::new(&tonic, "minor").unwrap();
    let read: Vec<String> = minor
        .read(Format::Notation(NotationSystem::Western), true)
        .unwrap()
        .iter()
        .map(Rendered::to_string)
        .collect();
    assert_eq!(read, vec!["C", "D", "Eb", "F", "G", "Ab", "Bb"]);
}

/// Only E's cells carry the played fill on a one-octave keyboard
#[test]
fn test_keyboard_highlights_only_played_key() {
    let log = DiagnosticLog::new();
    let renderer = KeyboardRenderer::with_diagnostics("C", "B", log.handle()).unwrap();
    let frame = renderer.draw(["E"]).unwrap();
    assert!(log.is_empty());

    let text = frame.to_text();
    let played = text.chars().filter(|&c| c == PLAYED_FILL).count();
    assert_eq!(played, 2 * UPPER_ROWS + 3 * LOWER_ROWS);

    let keys_played: Vec<u8> = frame
        .keys()
        .iter()
        .filter(|k| k.played)
        .map(|k| semitone_class(k.value))
        .collect();
    assert_eq!(keys_played, vec![4]);
}

/// Scale pitches flow straight into the keyboard as played keys
#[test]
fn test_scale_on_keyboard() {
    let tonic = Pitch::new("D", 0, NotationSystem::Western).unwrap();
    let scale = Scale::new(&tonic, "major").unwrap();
    let renderer = KeyboardRenderer::new("C", "B'").unwrap();

    let keys = renderer.layout(scale.pitches().iter()).unwrap();
    let played: Vec<i32> = keys.iter().filter(|k| k.played).map(|k| k.value).collect();
    assert_eq!(played, scale.values());
}

/// A movable-tonic pitch reads in Western through a transient pitch
#[test]
fn test_cross_system_conversion() {
    let pitch = Pitch::new("M#", "A", NotationSystem::MovableTonic).unwrap();
    assert_eq!(pitch.value(), 15);
    assert_eq!(pitch.format_in(NotationSystem::Western, None).unwrap(), "D#'");
    assert_eq!(
        pitch.format_in(NotationSystem::Western, Some('E')).unwrap(),
        "Eb'"
    );
    assert_eq!(pitch.to_text().unwrap(), "M#");
}
