//! CLI argument parsing and one-shot conversions.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexsync::color::{Rgb, best_foreground_for, hex_to_rgb, rgb_to_hex_fields};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "hexsync",
    version,
    about = "hexsync - A terminal color picker keeping RGB and hex in sync"
)]
pub struct Cli {
    /// Color shown at start-up and on reset, as 3 or 6 hex digits
    #[arg(short = 'c', long = "color", env = "HEXSYNC_COLOR", default_value = "3F51B5")]
    pub color: String,

    /// Log file for the interactive mode
    #[arg(long = "log-file", env = "HEXSYNC_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the hex form of an RGB color
    Hex {
        #[arg(allow_hyphen_values = true)]
        r: String,
        #[arg(allow_hyphen_values = true)]
        g: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Print the RGB channels of a hex color
    Rgb { hex: String },
    /// Print the text color (black or white) that reads best on a hex color
    Contrast { hex: String },
}

/// Execute a CLI command and print its result.
pub fn run(command: Command) -> Result<()> {
    println!("{}", execute(command)?);
    Ok(())
}

fn execute(command: Command) -> Result<String> {
    debug!(?command, "running command");
    match command {
        Command::Hex { r, g, b } => handle_hex(&r, &g, &b),
        Command::Rgb { hex } => handle_rgb(&hex),
        Command::Contrast { hex } => handle_contrast(&hex),
    }
}

fn handle_hex(r: &str, g: &str, b: &str) -> Result<String> {
    let hex = rgb_to_hex_fields(r, g, b)
        .with_context(|| format!("cannot encode ({r}, {g}, {b}) as hex"))?;
    Ok(hex)
}

fn handle_rgb(hex: &str) -> Result<String> {
    let rgb = parse_hex_arg(hex)?;
    Ok(format!("{} {} {}", rgb.r, rgb.g, rgb.b))
}

fn handle_contrast(hex: &str) -> Result<String> {
    let foreground = best_foreground_for(parse_hex_arg(hex)?);
    let name = if foreground == Rgb::BLACK { "black" } else { "white" };
    Ok(format!("{name} {foreground}"))
}

/// Parse a hex color given on the command line, where a leading `#` is tolerated.
pub fn parse_hex_arg(value: &str) -> Result<Rgb> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    hex_to_rgb(hex).with_context(|| format!("`{value}` is not a hex color"))
}
