// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory types.
//!
//! This module provides the canonical pitch model, the notation systems it
//! converts to and from, and scale construction.

pub mod notation;
pub mod pitch;
pub mod scale;

pub use notation::{Format, NotationSystem, NotationTable};
pub use pitch::{Pitch, PitchInput, Rendered};
pub use scale::{CustomScaleDefinition, Scale, ScaleRegistry, ScaleType};
