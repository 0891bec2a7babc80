//! Pipewav - emit a RIFF/WAVE header for a piped audio stream.
//!
//! Writes the header to stdout so a pipeline can append raw interleaved
//! samples directly after it. Logs go to stderr.

mod config;

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pipewav_core::{HeaderBuilder, HeaderLayout, SampleFormat};

use crate::config::HeaderConfig;

/// Pipewav - RIFF/WAVE header generator for piped audio.
#[derive(Parser, Debug)]
#[command(name = "pipewav")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (YAML).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(short, long, default_value = "warn", env = "PIPEWAV_LOG_LEVEL")]
    log_level: log::LevelFilter,

    /// Sample format: pcm, float, or a numeric format tag.
    #[arg(short, long)]
    format: Option<SampleFormat>,

    /// Interleaved channel count.
    #[arg(long)]
    channels: Option<u16>,

    /// Samples per second per channel.
    #[arg(short = 'r', long)]
    sample_rate: Option<u32>,

    /// Bytes per sample.
    #[arg(short = 'b', long)]
    byte_depth: Option<u16>,

    /// Total samples per channel.
    #[arg(short = 'n', long)]
    samples: Option<u64>,

    /// Header form: auto, canonical or extensible.
    #[arg(long)]
    layout: Option<HeaderLayout>,

    /// Print a hex dump instead of raw header bytes.
    #[arg(long)]
    hex: bool,
}

impl Args {
    /// Applies CLI overrides on top of file/env configuration.
    fn apply_to(&self, config: &mut HeaderConfig) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(channels) = self.channels {
            config.channels = channels;
        }
        if let Some(sample_rate) = self.sample_rate {
            config.sample_rate = sample_rate;
        }
        if let Some(byte_depth) = self.byte_depth {
            config.byte_depth = byte_depth;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
    }
}

/// Formats `bytes` as offset-prefixed rows of 16.
fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "{:08x}:", row * 16);
        for byte in chunk {
            let _ = write!(out, " {byte:02x}");
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp_millis()
        .init();

    log::info!("pipewav v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config =
        HeaderConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_to(&mut config);

    let params = config.to_stream_parameters();
    log::debug!("Configuration: {:?}, layout={}", params, config.layout);

    let header = HeaderBuilder::default().build(&params, config.layout);
    log::info!(
        "Built {} header: {} bytes, riff_size={}, data_size={}",
        if header.is_extensible() {
            "extensible"
        } else {
            "canonical"
        },
        header.len(),
        header.riff_size(),
        header.data_size()
    );

    let mut stdout = std::io::stdout().lock();
    if args.hex {
        stdout
            .write_all(hex_dump(&header.to_bytes()).as_bytes())
            .context("Failed to write hex dump")?;
    } else {
        stdout
            .write_all(&header.to_bytes())
            .context("Failed to write header")?;
    }
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_dump_rows() {
        let dump = hex_dump(&(0u8..20).collect::<Vec<_>>());
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00000000: 00 01 02"));
        assert_eq!(lines[1], "00000010: 10 11 12 13");
    }

    #[test]
    fn cli_flags_override_config() {
        let args = Args::parse_from([
            "pipewav",
            "--format",
            "float",
            "--channels",
            "6",
            "--samples",
            "1000",
            "--layout",
            "extensible",
        ]);
        let mut config = HeaderConfig::default();
        args.apply_to(&mut config);

        assert_eq!(config.format, SampleFormat::IeeeFloat);
        assert_eq!(config.channels, 6);
        assert_eq!(config.samples, 1000);
        assert_eq!(config.layout, HeaderLayout::Extensible);
        // Untouched flags keep the configured values.
        assert_eq!(config.sample_rate, 48000);
        assert!(!args.hex);
    }

    #[test]
    fn cli_rejects_unknown_layout() {
        assert!(Args::try_parse_from(["pipewav", "--layout", "rf64"]).is_err());
    }
}
