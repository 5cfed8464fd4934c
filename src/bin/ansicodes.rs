//! CLI tool for ANSI escape codes and override lists.

use ansicodes::codes::{paint, NAMED};
use ansicodes::{pad_trailing, strip, strip_output, Channel, OverrideStore, Rgb, StoreCommand};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Column width for names in the palette listing
const PALETTE_NAME_WIDTH: usize = 18;

#[derive(Parser)]
#[command(name = "ansicodes")]
#[command(author, version, about = "Build, inspect and strip ANSI escape codes", long_about = None)]
struct Args {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Remove escape sequences from --text, or from stdin
    Strip {
        /// Text to strip instead of reading stdin
        #[arg(long)]
        text: Option<String>,
    },

    /// Print the escape for an RGB color
    Rgb {
        /// Red channel (0-255, default 255)
        #[arg(default_value = "255")]
        red: Channel,

        /// Green channel (0-255, default 255)
        #[arg(default_value = "255")]
        green: Channel,

        /// Blue channel (0-255, default 255)
        #[arg(default_value = "255")]
        blue: Channel,

        /// Set the background color instead of the text color
        #[arg(short, long)]
        background: bool,

        /// Write the raw escape instead of its escaped form
        #[arg(long)]
        raw: bool,
    },

    /// Show every named code rendered in its own style
    Palette,

    /// Load an override list, apply a command, save and print it
    Overrides {
        /// JSON file holding the list
        file: PathBuf,

        /// Number of entries the list must hold
        #[arg(short, long, default_value_t = 0)]
        len: usize,

        /// Position to toggle, or clear/reset/wipe/all
        command: Option<StoreCommand>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Strip { text: Some(text) } => writeln!(out, "{}", strip(&text))?,
        Command::Strip { text: None } => {
            let mut input = Vec::new();
            io::stdin()
                .read_to_end(&mut input)
                .context("Failed to read stdin")?;
            out.write_all(&strip_output(input))?;
        }
        Command::Rgb {
            red,
            green,
            blue,
            background,
            raw,
        } => {
            let rgb = Rgb {
                red,
                green,
                blue,
            };
            let code = if background {
                rgb.background()
            } else {
                rgb.foreground()
            };
            if raw {
                out.write_all(code.as_bytes())?;
            } else {
                writeln!(out, "{}  {}", code.escape_default(), paint(&code, "sample"))?;
            }
        }
        Command::Palette => {
            for (name, code) in NAMED {
                let label = pad_trailing(&paint(code, name), PALETTE_NAME_WIDTH);
                writeln!(out, "{label}{}", code.escape_default())?;
            }
        }
        Command::Overrides { file, len, command } => {
            let mut store = OverrideStore::builder()
                .path(&file)
                .len(len)
                .load()
                .with_context(|| format!("Failed to load {}", file.display()))?;
            if let Some(command) = command {
                store.apply(command)?;
                store.save()?;
            }
            out.write_all(store.status_lines().as_bytes())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
