// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch notation, scales and keyboard rendering.
//!
//! Pitches are stored as canonical integers (middle C = 0) and converted to
//! and from Western letter names or movable-tonic degree symbols. Scales are
//! built from interval patterns and can be spelled with sequential letters;
//! a keyboard renderer draws a span of keys with played pitches highlighted.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod music;
pub mod ui;

pub use diagnostics::{DiagnosticLog, Diagnostics, DiagnosticsRef, Level, TracingDiagnostics};
pub use error::{Result, TheoryError};
pub use music::{Format, NotationSystem, Pitch, PitchInput, Rendered, Scale, ScaleType};
pub use ui::KeyboardRenderer;
