// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use pitchboard::config::TheoryConfig;
use pitchboard::diagnostics::default_diagnostics;
use pitchboard::{Format, KeyboardRenderer, NotationSystem, Pitch, PitchInput, Scale};
use std::env;

fn print_usage() {
    println!("pitchboard - pitch notation, scales and keyboards");
    println!();
    println!("Usage: pitchboard [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --convert <NOTE> [SYSTEM] [TONIC]   Show a note in every notation");
    println!("  --scale <TONIC> <PATTERN> [SYSTEM]  Spell a scale (major, minor, chromatic, ...)");
    println!("  --keyboard <START> <END> [NOTE...]  Draw a keyboard with played notes");
    println!("  --config <FILE>                     Spell the scale and draw the keyboard from a YAML file");
    println!("  --help                              Show this help message");
    println!();
    println!("Notes are numbers (middle C = 0) or spellings such as C#' or Bb..");
}

/// Numbers are canonical values, anything else is a spelling
fn note_arg(arg: &str) -> PitchInput {
    match arg.parse::<f64>() {
        Ok(value) => PitchInput::Number(value),
        Err(_) => PitchInput::from(arg),
    }
}

fn system_arg(arg: Option<&String>) -> Result<NotationSystem> {
    match arg {
        Some(name) => NotationSystem::from_str(name)
            .ok_or_else(|| anyhow!("Unknown notation system: {}", name)),
        None => Ok(NotationSystem::Western),
    }
}

fn convert(note: &str, system: NotationSystem, tonic: &str) -> Result<()> {
    let pitch = Pitch::new(note_arg(note), note_arg(tonic), system)?;

    println!("numeric:       {}", pitch.read(Format::Numeric, None)?);
    println!("western:       {}", pitch.format_in(NotationSystem::Western, None)?);
    println!("movable-tonic: {}", pitch.format_in(NotationSystem::MovableTonic, None)?);
    Ok(())
}

fn print_scale(scale: &Scale, system: NotationSystem, sequential_letters: bool) -> Result<()> {
    println!("{}", scale);
    println!("{}", scale.names(system, sequential_letters)?.join(" "));
    Ok(())
}

fn show_config(path: &str) -> Result<()> {
    let config = TheoryConfig::load(path)?;
    let diagnostics = default_diagnostics();

    let scale = config.scale(diagnostics.clone())?;
    print_scale(&scale, config.notation.system, config.scale.sequential_letters)?;
    println!();

    let keyboard = config.keyboard(diagnostics)?;
    println!(
        "{}",
        keyboard.render(config.keyboard.played.iter().map(String::as_str))?
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("pitchboard - pitch notation, scales and keyboards");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--convert" => {
            if args.len() < 3 {
                eprintln!("Error: --convert requires a note");
                std::process::exit(1);
            }
            let system = system_arg(args.get(3))?;
            let tonic = args.get(4).map(String::as_str).unwrap_or("C");
            convert(&args[2], system, tonic)?;
        }
        "--scale" => {
            if args.len() < 4 {
                eprintln!("Error: --scale requires a tonic and a pattern");
                std::process::exit(1);
            }
            let system = system_arg(args.get(4))?;
            let input = note_arg(&args[2]);
            let tonic = Pitch::new(input.clone(), input, NotationSystem::Western)?;
            let scale = Scale::new(&tonic, &args[3])?;
            print_scale(&scale, system, true)?;
        }
        "--keyboard" => {
            if args.len() < 4 {
                eprintln!("Error: --keyboard requires a start and an end key");
                std::process::exit(1);
            }
            let keyboard = KeyboardRenderer::new(note_arg(&args[2]), note_arg(&args[3]))?;
            println!("{}", keyboard.render(args[4..].iter().map(|a| note_arg(a)))?);
        }
        "--config" => {
            if args.len() < 3 {
                eprintln!("Error: --config requires a file path");
                std::process::exit(1);
            }
            show_config(&args[2])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
