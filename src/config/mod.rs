// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for notation, scales and the keyboard.
//!
//! A single YAML file selects the tonic and notation system, the scale to
//! spell, the keyboard span with its played keys, and any custom scale
//! patterns.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticsRef;
use crate::music::notation::NotationSystem;
use crate::music::pitch::Pitch;
use crate::music::scale::{CustomScaleDefinition, Scale, ScaleRegistry};
use crate::ui::keyboard::KeyboardRenderer;

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TheoryConfig {
    /// Tonic and notation system for reading pitches
    #[serde(default)]
    pub notation: NotationConfig,
    /// Scale to build and spell
    #[serde(default)]
    pub scale: ScaleConfig,
    /// Keyboard span and highlighted keys
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    /// Extra scale patterns by name
    #[serde(default)]
    pub custom_scales: Vec<CustomScaleDefinition>,
}

impl TheoryConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Registry holding the built-in scales plus the custom ones
    pub fn registry(&self) -> Result<ScaleRegistry> {
        let mut registry = ScaleRegistry::new();
        for def in &self.custom_scales {
            registry
                .register(def.clone())
                .with_context(|| format!("Invalid custom scale '{}'", def.name))?;
        }
        Ok(registry)
    }

    /// The configured tonic as a pitch in the configured system
    pub fn tonic(&self, diagnostics: DiagnosticsRef) -> Result<Pitch> {
        let text = self.notation.tonic.as_str();
        let western = Pitch::with_diagnostics(
            text,
            Some(0.into()),
            NotationSystem::Western,
            diagnostics.clone(),
        )
        .with_context(|| format!("Invalid tonic '{}'", text))?;

        Pitch::with_diagnostics(western, Some(text.into()), self.notation.system, diagnostics)
            .with_context(|| format!("Invalid tonic '{}'", text))
    }

    /// The configured scale
    pub fn scale(&self, diagnostics: DiagnosticsRef) -> Result<Scale> {
        let tonic = self.tonic(diagnostics)?;
        self.registry()?
            .get_scale(&tonic, &self.scale.pattern)
            .with_context(|| format!("Invalid scale '{}'", self.scale.pattern))
    }

    /// The configured keyboard renderer
    pub fn keyboard(&self, diagnostics: DiagnosticsRef) -> Result<KeyboardRenderer> {
        KeyboardRenderer::with_diagnostics(
            self.keyboard.start.as_str(),
            self.keyboard.end.as_str(),
            diagnostics,
        )
        .with_context(|| {
            format!(
                "Invalid keyboard span {}..{}",
                self.keyboard.start, self.keyboard.end
            )
        })
    }

    /// Check that every pitch and pattern in the file can be resolved
    pub fn validate(&self, diagnostics: DiagnosticsRef) -> Result<()> {
        self.scale(diagnostics.clone())?;
        let keyboard = self.keyboard(diagnostics)?;
        keyboard
            .layout(self.keyboard.played.iter().map(String::as_str))
            .context("Invalid played keys")?;
        Ok(())
    }
}

/// Tonic and notation system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotationConfig {
    /// Tonic as a Western spelling (e.g., "C", "F#", "Bb.")
    #[serde(default = "default_tonic")]
    pub tonic: String,
    /// Notation system for reading pitches
    #[serde(default)]
    pub system: NotationSystem,
}

fn default_tonic() -> String {
    "C".to_string()
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            tonic: default_tonic(),
            system: NotationSystem::default(),
        }
    }
}

/// Scale selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleConfig {
    /// Scale pattern name (e.g., "major", "minor", "chromatic")
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Spell Western scales with one letter per degree
    #[serde(default = "default_sequential_letters")]
    pub sequential_letters: bool,
}

fn default_pattern() -> String {
    "major".to_string()
}
fn default_sequential_letters() -> bool {
    true
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            sequential_letters: default_sequential_letters(),
        }
    }
}

/// Keyboard span and played keys
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    /// Lowest key, normally a C
    #[serde(default = "default_start")]
    pub start: String,
    /// Highest key, normally a B
    #[serde(default = "default_end")]
    pub end: String,
    /// Keys to highlight, in any Western spelling
    #[serde(default)]
    pub played: Vec<String>,
}

fn default_start() -> String {
    "C".to_string()
}
fn default_end() -> String {
    "B".to_string()
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            played: Vec::new(),
        }
    }
}
