// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Text and terminal rendering.
//!
//! Provides the piano keyboard layout, its plain-text rendering and a
//! ratatui widget that draws the same cells with colours.

pub mod keyboard;

pub use keyboard::{
    KeyCell, KeyLayout, KeyShape, KeyboardFrame, KeyboardRenderer, KeyboardWidget, Tint,
    BLACK_FILL, PLAYED_FILL, WHITE_FILL,
};
