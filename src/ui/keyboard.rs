// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Piano keyboard rendering.
//!
//! The keyboard is laid out as a grid of [`KeyCell`]s that can be turned into
//! plain text or drawn into a ratatui buffer with colours. Every white key is
//! four columns wide in the lower rows (three fill columns and a separator);
//! black keys are three columns wide and straddle the separator between
//! their white neighbours in the upper rows. A black key at either end of the
//! span gets a stub of padding under its overhang so all rows stay aligned.
//!
//! Keys are drawn with pitch-class names only; the full name with octave
//! markers is kept in [`KeyLayout::label`].
//!
//! ```text
//!    C#  D#      F#  G#  A#
//! │  ███ ███  │  ███ ███ ███  │
//! │   │   │   │   │   │   │   │
//! └───┴───┴───┴───┴───┴───┴───┘
//!   C   D   E   F   G   A   B
//! ```

use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Widget},
};

use crate::diagnostics::{default_diagnostics, DiagnosticsRef};
use crate::error::Result;
use crate::music::notation::{is_black_key, NotationSystem, OCTAVE_DOWN, OCTAVE_UP};
use crate::music::pitch::{Pitch, PitchInput};

/// Fill glyph for an unplayed white key
pub const WHITE_FILL: char = ' ';

/// Fill glyph for an unplayed black key
pub const BLACK_FILL: char = '█';

/// Fill glyph for any played key
pub const PLAYED_FILL: char = '▒';

const SEPARATOR: char = '│';
const BORDER: char = '─';
const BORDER_JOINT: char = '┴';
const BORDER_LEFT: char = '└';
const BORDER_RIGHT: char = '┘';

/// Rows in the region that holds black keys
pub const UPPER_ROWS: usize = 5;

/// Rows in the white-only region
pub const LOWER_ROWS: usize = 3;

const WHITE_FILL_WIDTH: usize = 3;
const BLACK_WIDTH: usize = 3;

/// Columns a black key reaches past the separator into a neighbouring white key
const BLACK_OVERHANG: usize = 1;

/// Glyph shape of a key's top segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyShape {
    /// Solid block of fixed width
    Black,
    /// White key between two black keys (D, G, A)
    Narrow,
    /// White key after a black key only (E, B)
    WideFollowingBlack,
    /// White key before a black key only (C, F)
    WideLeadingToBlack,
    /// White key with no black neighbour; only on spans that do not run C to B
    Full,
}

impl KeyShape {
    /// Pick the shape from a key's colour and its neighbours' colours
    ///
    /// Neighbours outside the drawn span count as white.
    pub fn classify(black: bool, prev_black: bool, next_black: bool) -> Self {
        match (black, prev_black, next_black) {
            (true, _, _) => KeyShape::Black,
            (false, true, true) => KeyShape::Narrow,
            (false, true, false) => KeyShape::WideFollowingBlack,
            (false, false, true) => KeyShape::WideLeadingToBlack,
            (false, false, false) => KeyShape::Full,
        }
    }

    /// Check if this is a black key
    pub fn is_black(self) -> bool {
        self == KeyShape::Black
    }

    /// Fill columns in the upper rows
    pub fn upper_fill(self) -> usize {
        match self {
            KeyShape::Black => BLACK_WIDTH,
            KeyShape::Narrow => WHITE_FILL_WIDTH - 2,
            KeyShape::WideFollowingBlack | KeyShape::WideLeadingToBlack => WHITE_FILL_WIDTH - 1,
            KeyShape::Full => WHITE_FILL_WIDTH,
        }
    }

    /// Whether a separator closes the key in the upper rows
    pub fn upper_separator(self) -> bool {
        matches!(self, KeyShape::WideFollowingBlack | KeyShape::Full)
    }

    /// Total columns in the upper rows
    pub fn upper_width(self) -> usize {
        self.upper_fill() + usize::from(self.upper_separator())
    }

    /// Fill columns in the lower rows (black keys do not reach them)
    pub fn lower_fill(self) -> usize {
        if self.is_black() {
            0
        } else {
            WHITE_FILL_WIDTH
        }
    }
}

/// Colour role of a rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    WhiteKey,
    BlackKey,
    Played,
    Frame,
    Label,
}

impl Tint {
    /// Terminal style for this role
    pub fn style(self) -> Style {
        match self {
            Tint::WhiteKey => Style::default().fg(Color::White).bg(Color::White),
            Tint::BlackKey => Style::default().fg(Color::Black),
            Tint::Played => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Tint::Frame => Style::default().fg(Color::DarkGray),
            Tint::Label => Style::default().fg(Color::Cyan),
        }
    }
}

/// One character of the rendered keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCell {
    pub symbol: char,
    pub tint: Tint,
}

impl KeyCell {
    fn new(symbol: char, tint: Tint) -> Self {
        Self { symbol, tint }
    }
}

/// Layout information for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    /// Canonical pitch of the key
    pub value: i32,
    pub shape: KeyShape,
    pub played: bool,
    /// Formatted name of the key
    pub label: String,
}

impl KeyLayout {
    /// Label without octave markers, as drawn on the keyboard
    pub fn key_name(&self) -> &str {
        strip_octave(&self.label)
    }

    fn fill(&self) -> KeyCell {
        if self.played {
            KeyCell::new(PLAYED_FILL, Tint::Played)
        } else if self.shape.is_black() {
            KeyCell::new(BLACK_FILL, Tint::BlackKey)
        } else {
            KeyCell::new(WHITE_FILL, Tint::WhiteKey)
        }
    }
}

/// A fully laid-out keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardFrame {
    keys: Vec<KeyLayout>,
    rows: Vec<Vec<KeyCell>>,
}

impl KeyboardFrame {
    /// Keys from low to high
    pub fn keys(&self) -> &[KeyLayout] {
        &self.keys
    }

    /// Rows of cells from top to bottom
    pub fn rows(&self) -> &[Vec<KeyCell>] {
        &self.rows
    }

    /// Width of the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Plain text rendering, one line per row
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders a span of keys with a set of played pitches highlighted
pub struct KeyboardRenderer {
    start_key: i32,
    end_key: i32,
    label_system: NotationSystem,
    standard_span: bool,
    diagnostics: DiagnosticsRef,
}

impl KeyboardRenderer {
    /// Create a renderer for the keys from `start` to `end` inclusive
    pub fn new(start: impl Into<PitchInput>, end: impl Into<PitchInput>) -> Result<Self> {
        Self::with_diagnostics(start, end, default_diagnostics())
    }

    /// Create a renderer reporting to the given diagnostics sink
    ///
    /// The span should start on a C and end on a B; anything else is reported
    /// but still rendered.
    pub fn with_diagnostics(
        start: impl Into<PitchInput>,
        end: impl Into<PitchInput>,
        diagnostics: DiagnosticsRef,
    ) -> Result<Self> {
        let start = reference_pitch(start.into(), &diagnostics)?;
        let end = reference_pitch(end.into(), &diagnostics)?;

        let mut renderer = Self {
            start_key: start.value(),
            end_key: end.value(),
            label_system: NotationSystem::Western,
            standard_span: true,
            diagnostics,
        };
        renderer.standard_span = renderer.validate()?;
        Ok(renderer)
    }

    /// Set the notation system used for key labels (tonic C)
    pub fn label_system(mut self, system: NotationSystem) -> Self {
        self.label_system = system;
        self
    }

    /// Get the lowest key
    pub fn start_key(&self) -> i32 {
        self.start_key
    }

    /// Get the highest key
    pub fn end_key(&self) -> i32 {
        self.end_key
    }

    /// Whether the span ran from a C to a B when the renderer was built
    pub fn is_standard_span(&self) -> bool {
        self.standard_span
    }

    /// Check the span runs from a C to a B, reporting any violation
    pub fn validate(&self) -> Result<bool> {
        let start = self.reference(self.start_key).to_text()?;
        let end = self.reference(self.end_key).to_text()?;
        let mut valid = true;

        if strip_octave(&start) != "C" {
            self.diagnostics
                .error(&format!("Keyboard should start on C, not {}", start));
            valid = false;
        }
        if strip_octave(&end) != "B" {
            self.diagnostics
                .error(&format!("Keyboard should end on B, not {}", end));
            valid = false;
        }
        if self.end_key < self.start_key {
            self.diagnostics.error(&format!(
                "Keyboard end {} is below start {}",
                end, start
            ));
            valid = false;
        }
        Ok(valid)
    }

    /// Lay out every key in the span
    pub fn layout<I>(&self, played: I) -> Result<Vec<KeyLayout>>
    where
        I: IntoIterator,
        I::Item: Into<PitchInput>,
    {
        let played = self.normalize(played)?;

        (self.start_key..=self.end_key)
            .map(|value| -> Result<KeyLayout> {
                let prev_black = value > self.start_key && is_black_key(value - 1);
                let next_black = value < self.end_key && is_black_key(value + 1);
                let shape = KeyShape::classify(is_black_key(value), prev_black, next_black);
                let label = Pitch::from_parts(value, 0, self.label_system, self.diagnostics.clone())
                    .to_text()?;

                Ok(KeyLayout {
                    value,
                    shape,
                    played: played.contains(&value),
                    label,
                })
            })
            .collect()
    }

    /// Lay out the keyboard and build its rows of cells
    pub fn draw<I>(&self, played: I) -> Result<KeyboardFrame>
    where
        I: IntoIterator,
        I::Item: Into<PitchInput>,
    {
        let keys = self.layout(played)?;
        let mut rows = Vec::with_capacity(UPPER_ROWS + LOWER_ROWS + 3);

        rows.push(black_label_row(&keys));
        let upper = upper_row(&keys);
        rows.extend(std::iter::repeat(upper).take(UPPER_ROWS));

        let slots = lower_slots(&keys);
        let lower = lower_row(&slots);
        rows.extend(std::iter::repeat(lower).take(LOWER_ROWS));
        rows.push(border_row(&slots));
        rows.push(white_label_row(&slots));

        Ok(KeyboardFrame { keys, rows })
    }

    /// Render the keyboard as multi-line text
    pub fn render<I>(&self, played: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<PitchInput>,
    {
        Ok(self.draw(played)?.to_text())
    }

    fn reference(&self, value: i32) -> Pitch {
        Pitch::from_parts(value, 0, NotationSystem::Western, self.diagnostics.clone())
    }

    fn normalize<I>(&self, played: I) -> Result<HashSet<i32>>
    where
        I: IntoIterator,
        I::Item: Into<PitchInput>,
    {
        played
            .into_iter()
            .map(|p| reference_pitch(p.into(), &self.diagnostics).map(|p| p.value()))
            .collect()
    }
}

/// Read any input as a Western pitch with tonic C
fn reference_pitch(input: PitchInput, diagnostics: &DiagnosticsRef) -> Result<Pitch> {
    Pitch::with_diagnostics(
        input,
        Some(0.into()),
        NotationSystem::Western,
        diagnostics.clone(),
    )
}

fn strip_octave(name: &str) -> &str {
    name.trim_end_matches([OCTAVE_UP, OCTAVE_DOWN])
}

/// Fit a label into `width` columns, centred
fn label_cells(label: &str, width: usize) -> Vec<KeyCell> {
    let chars: Vec<char> = label.chars().take(width).collect();
    let left = (width - chars.len()) / 2;
    let mut cells = vec![KeyCell::new(' ', Tint::Label); width];
    for (i, c) in chars.into_iter().enumerate() {
        cells[left + i] = KeyCell::new(c, Tint::Label);
    }
    cells
}

fn black_label_row(keys: &[KeyLayout]) -> Vec<KeyCell> {
    let mut row = vec![KeyCell::new(' ', Tint::Label)];
    for key in keys {
        let width = key.shape.upper_width();
        if key.shape.is_black() {
            row.extend(label_cells(key.key_name(), width));
        } else {
            row.extend(std::iter::repeat(KeyCell::new(' ', Tint::Label)).take(width));
        }
    }
    row
}

fn upper_row(keys: &[KeyLayout]) -> Vec<KeyCell> {
    let mut row = vec![KeyCell::new(SEPARATOR, Tint::Frame)];
    for key in keys {
        row.extend(std::iter::repeat(key.fill()).take(key.shape.upper_fill()));
        if key.shape.upper_separator() {
            row.push(KeyCell::new(SEPARATOR, Tint::Frame));
        }
    }
    row
}

/// One segment of the lower rows
struct LowerSlot<'a> {
    /// White key drawn here; `None` for padding under an edge black key
    key: Option<&'a KeyLayout>,
    width: usize,
    /// Whether a separator follows the segment
    closed: bool,
}

fn lower_slots(keys: &[KeyLayout]) -> Vec<LowerSlot<'_>> {
    let last = keys.len().saturating_sub(1);
    let mut slots = Vec::with_capacity(keys.len());

    for (i, key) in keys.iter().enumerate() {
        if !key.shape.is_black() {
            slots.push(LowerSlot {
                key: Some(key),
                width: WHITE_FILL_WIDTH,
                closed: true,
            });
            continue;
        }
        if i == 0 {
            slots.push(LowerSlot {
                key: None,
                width: BLACK_OVERHANG,
                closed: true,
            });
        }
        if i == last {
            slots.push(LowerSlot {
                key: None,
                width: BLACK_OVERHANG,
                closed: false,
            });
        }
    }
    slots
}

fn lower_row(slots: &[LowerSlot<'_>]) -> Vec<KeyCell> {
    let mut row = vec![KeyCell::new(SEPARATOR, Tint::Frame)];
    for slot in slots {
        let fill = slot
            .key
            .map_or(KeyCell::new(WHITE_FILL, Tint::Frame), KeyLayout::fill);
        row.extend(std::iter::repeat(fill).take(slot.width));
        if slot.closed {
            row.push(KeyCell::new(SEPARATOR, Tint::Frame));
        }
    }
    row
}

fn border_row(slots: &[LowerSlot<'_>]) -> Vec<KeyCell> {
    let mut row = vec![KeyCell::new(BORDER_LEFT, Tint::Frame)];
    for (i, slot) in slots.iter().enumerate() {
        row.extend(std::iter::repeat(KeyCell::new(BORDER, Tint::Frame)).take(slot.width));
        if slot.closed {
            let joint = if i + 1 == slots.len() { BORDER_RIGHT } else { BORDER_JOINT };
            row.push(KeyCell::new(joint, Tint::Frame));
        }
    }
    row
}

fn white_label_row(slots: &[LowerSlot<'_>]) -> Vec<KeyCell> {
    let mut row = vec![KeyCell::new(' ', Tint::Label)];
    for slot in slots {
        match slot.key {
            Some(key) => row.extend(label_cells(key.key_name(), slot.width)),
            None => row.extend(std::iter::repeat(KeyCell::new(' ', Tint::Label)).take(slot.width)),
        }
        if slot.closed {
            row.push(KeyCell::new(' ', Tint::Label));
        }
    }
    row
}

/// Widget for drawing a laid-out keyboard
pub struct KeyboardWidget<'a> {
    frame: &'a KeyboardFrame,
    block: Option<Block<'a>>,
}

impl<'a> KeyboardWidget<'a> {
    /// Create a new keyboard widget
    pub fn new(frame: &'a KeyboardFrame) -> Self {
        Self { frame, block: None }
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for KeyboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        for (y, row) in self.frame.rows().iter().enumerate().take(area.height as usize) {
            for (x, cell) in row.iter().enumerate().take(area.width as usize) {
                buf.set_string(
                    area.x + x as u16,
                    area.y + y as u16,
                    cell.symbol.to_string(),
                    cell.tint.style(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticLog, Level};

    const NO_KEYS: [i32; 0] = [];

    fn octave() -> KeyboardRenderer {
        KeyboardRenderer::new("C", "B").unwrap()
    }

    fn played_columns(row: &[KeyCell]) -> Vec<usize> {
        row.iter()
            .enumerate()
            .filter(|(_, c)| c.symbol == PLAYED_FILL)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_shapes_for_one_octave() {
        let keys = octave().layout(NO_KEYS).unwrap();
        let shapes: Vec<KeyShape> = keys.iter().map(|k| k.shape).collect();
        assert_eq!(
            shapes,
            vec![
                KeyShape::WideLeadingToBlack,
                KeyShape::Black,
                KeyShape::Narrow,
                KeyShape::Black,
                KeyShape::WideFollowingBlack,
                KeyShape::WideLeadingToBlack,
                KeyShape::Black,
                KeyShape::Narrow,
                KeyShape::Black,
                KeyShape::Narrow,
                KeyShape::Black,
                KeyShape::WideFollowingBlack,
            ]
        );
    }

    #[test]
    fn test_upper_and_lower_rows_align() {
        let frame = octave().draw(NO_KEYS).unwrap();
        let widths: Vec<usize> = frame.rows().iter().map(Vec::len).collect();
        assert_eq!(frame.height(), 11);
        assert!(widths.iter().all(|&w| w == 29));
    }

    #[test]
    fn test_unplayed_keyboard_text() {
        let text = octave().render(NO_KEYS).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   C#  D#      F#  G#  A#    ");
        assert_eq!(lines[1], "│  ███ ███  │  ███ ███ ███  │");
        assert_eq!(lines[6], "│   │   │   │   │   │   │   │");
        assert_eq!(lines[9], "└───┴───┴───┴───┴───┴───┴───┘");
        assert_eq!(lines[10], "  C   D   E   F   G   A   B  ");
        assert!(!text.contains(PLAYED_FILL));
    }

    #[test]
    fn test_played_white_key_highlight() {
        let frame = octave().draw(["E"]).unwrap();
        let rows = frame.rows();

        for row in &rows[1..=UPPER_ROWS] {
            assert_eq!(played_columns(row), vec![10, 11]);
        }
        for row in &rows[UPPER_ROWS + 1..=UPPER_ROWS + LOWER_ROWS] {
            assert_eq!(played_columns(row), vec![9, 10, 11]);
        }
        assert!(played_columns(&rows[0]).is_empty());
        assert!(played_columns(&rows[9]).is_empty());
        let played: Vec<i32> = frame.keys().iter().filter(|k| k.played).map(|k| k.value).collect();
        assert_eq!(played, vec![4]);
    }

    #[test]
    fn test_played_black_key_highlight() {
        let frame = octave().draw([6]).unwrap();
        for row in &frame.rows()[1..=UPPER_ROWS] {
            assert_eq!(played_columns(row), vec![15, 16, 17]);
        }
        let lower = &frame.rows()[UPPER_ROWS + 1];
        assert!(played_columns(lower).is_empty());
    }

    #[test]
    fn test_played_accepts_any_spelling_and_octave() {
        let renderer = KeyboardRenderer::new(0, "B'").unwrap();
        let keys = renderer.layout(["Gb", "E#'"]).unwrap();
        let played: Vec<i32> = keys.iter().filter(|k| k.played).map(|k| k.value).collect();
        assert_eq!(played, vec![6, 17]);
    }

    #[test]
    fn test_two_octave_labels() {
        let renderer = KeyboardRenderer::new("C", "B'").unwrap();
        let frame = renderer.draw(NO_KEYS).unwrap();
        assert_eq!(frame.keys().len(), 24);
        assert_eq!(frame.width(), 57);
        let labels = frame.to_text().lines().last().unwrap().to_string();
        assert_eq!(
            labels,
            "  C   D   E   F   G   A   B   C   D   E   F   G   A   B  "
        );
        assert_eq!(frame.keys()[12].label, "C'");
        assert_eq!(frame.keys()[12].key_name(), "C");
    }

    #[test]
    fn test_off_octave_span_is_reported_but_rendered() {
        let log = DiagnosticLog::new();
        let renderer = KeyboardRenderer::with_diagnostics("D", "E", log.handle()).unwrap();
        assert_eq!(log.count(Level::Error), 2);

        let keys = renderer.layout(NO_KEYS).unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0].shape, KeyShape::WideLeadingToBlack);
        assert_eq!(keys[2].shape, KeyShape::WideFollowingBlack);

        let frame = renderer.draw(NO_KEYS).unwrap();
        assert_eq!(frame.rows()[1].len(), frame.rows()[6].len());
    }

    #[test]
    fn test_high_octave_labels_drop_markers() {
        let renderer = KeyboardRenderer::new("C''", "B''").unwrap();
        let frame = renderer.draw(NO_KEYS).unwrap();
        assert_eq!(frame.keys()[1].label, "C#''");
        assert_eq!(frame.keys()[1].key_name(), "C#");

        let text = frame.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   C#  D#      F#  G#  A#    ");
        assert_eq!(lines[10], "  C   D   E   F   G   A   B  ");
        assert!(!text.contains(OCTAVE_UP));
    }

    #[test]
    fn test_low_octave_labels_drop_markers() {
        let renderer = KeyboardRenderer::new("C..", "B..").unwrap();
        let text = renderer.render(NO_KEYS).unwrap();
        assert_eq!(text.lines().next(), Some("   C#  D#      F#  G#  A#    "));
        assert!(!text.contains(OCTAVE_DOWN));
    }

    #[test]
    fn test_span_starting_on_black_key_aligns() {
        let log = DiagnosticLog::new();
        let renderer = KeyboardRenderer::with_diagnostics("C#", "B", log.handle()).unwrap();
        assert!(!renderer.is_standard_span());
        assert_eq!(log.count(Level::Error), 1);

        let frame = renderer.draw(NO_KEYS).unwrap();
        assert!(frame.rows().iter().all(|row| row.len() == 27));

        let text = frame.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "│███ ███  │  ███ ███ ███  │");
        assert_eq!(lines[6], "│ │   │   │   │   │   │   │");
        assert_eq!(lines[9], "└─┴───┴───┴───┴───┴───┴───┘");
        assert_eq!(lines[10], "    D   E   F   G   A   B  ");
    }

    #[test]
    fn test_span_ending_on_black_key_aligns() {
        let log = DiagnosticLog::new();
        let renderer = KeyboardRenderer::with_diagnostics("C", "C#", log.handle()).unwrap();
        assert!(!renderer.is_standard_span());
        assert_eq!(log.count(Level::Error), 1);

        let text = renderer.render([1]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.iter().all(|line| line.chars().count() == 6));
        assert_eq!(lines[1], "│  ▒▒▒");
        assert_eq!(lines[6], "│   │ ");
        assert_eq!(lines[9], "└───┴─");
    }

    #[test]
    fn test_single_black_key_span() {
        let renderer = KeyboardRenderer::new("F#", "F#").unwrap();
        let frame = renderer.draw(NO_KEYS).unwrap();
        assert!(frame.rows().iter().all(|row| row.len() == 4));
        assert_eq!(frame.to_text().lines().nth(6), Some("│ │ "));
    }

    #[test]
    fn test_standard_span_flag() {
        assert!(octave().is_standard_span());
        assert!(KeyboardRenderer::new("C", "B''").unwrap().is_standard_span());
        assert!(!KeyboardRenderer::new("D", "E").unwrap().is_standard_span());
    }

    #[test]
    fn test_isolated_white_key_is_full() {
        let renderer = KeyboardRenderer::new("E", "F").unwrap();
        let keys = renderer.layout(NO_KEYS).unwrap();
        assert!(keys.iter().all(|k| k.shape == KeyShape::Full));
        let frame = renderer.draw(NO_KEYS).unwrap();
        assert_eq!(frame.rows()[1].len(), frame.rows()[6].len());
    }

    #[test]
    fn test_movable_labels() {
        let renderer = octave().label_system(NotationSystem::MovableTonic);
        let keys = renderer.layout(NO_KEYS).unwrap();
        assert_eq!(keys[0].label, "S");
        assert_eq!(keys[7].label, "P");
    }

    #[test]
    fn test_widget_draws_cells() {
        let frame = octave().draw(["C"]).unwrap();
        let area = Rect::new(0, 0, frame.width() as u16, frame.height() as u16);
        let mut buf = Buffer::empty(area);
        KeyboardWidget::new(&frame).render(area, &mut buf);

        let played = &buf.content[buf.index_of(1, 1)];
        assert_eq!(played.symbol(), PLAYED_FILL.to_string());
        let border = &buf.content[buf.index_of(0, 9)];
        assert_eq!(border.symbol(), BORDER_LEFT.to_string());
    }
}
