//! Command-line argument definitions for the Radiant CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, canvas size, scripted drag gestures and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Radiant diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram description (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Canvas width, overrides `[canvas] width` from the input file
    #[arg(long)]
    pub width: Option<f32>,

    /// Canvas height, overrides `[canvas] height` from the input file
    #[arg(long)]
    pub height: Option<f32>,

    /// Drag the diagram by DX,DY before rendering; repeatable
    #[arg(long = "drag", value_name = "DX,DY", value_parser = parse_drag, allow_hyphen_values = true)]
    pub drags: Vec<(f32, f32)>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_drag(value: &str) -> Result<(f32, f32), String> {
    let (dx, dy) = value
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|err| format!("invalid offset `{part}`: {err}"))
    };
    Ok((parse(dx)?, parse(dy)?))
}
