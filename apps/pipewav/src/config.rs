//! Stream configuration.
//!
//! Supports loading from YAML files with environment variable overrides.

use std::path::Path;

use anyhow::{Context, Result};
use pipewav_core::{HeaderLayout, SampleFormat, StreamParameters};
use serde::Deserialize;

/// Stream configuration loaded from YAML with environment overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Sample encoding (`pcm`, `float`, or a numeric tag such as `"0x0055"`).
    /// Override: `PIPEWAV_FORMAT`
    pub format: SampleFormat,

    /// Interleaved channel count.
    /// Override: `PIPEWAV_CHANNELS`
    pub channels: u16,

    /// Samples per second per channel.
    /// Override: `PIPEWAV_SAMPLE_RATE`
    pub sample_rate: u32,

    /// Bytes per sample.
    /// Override: `PIPEWAV_BYTE_DEPTH`
    pub byte_depth: u16,

    /// Total samples per channel. 0 for an empty or unknown-length stream.
    /// Override: `PIPEWAV_SAMPLES`
    pub samples: u64,

    /// Header form: `auto`, `canonical` or `extensible`.
    /// Override: `PIPEWAV_LAYOUT`
    pub layout: HeaderLayout,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            format: SampleFormat::Pcm,
            channels: 2,
            sample_rate: 48000,
            byte_depth: 2,
            samples: 0,
            layout: HeaderLayout::Auto,
        }
    }
}

impl HeaderConfig {
    /// Loads configuration from a YAML file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`. Values that fail to parse are logged
    /// and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        fn set<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
            slot: &mut T,
        ) {
            if let Some(val) = lookup(key) {
                match val.parse() {
                    Ok(parsed) => *slot = parsed,
                    Err(_) => log::warn!("Ignoring invalid {}={:?}", key, val),
                }
            }
        }

        set(&lookup, "PIPEWAV_FORMAT", &mut self.format);
        set(&lookup, "PIPEWAV_CHANNELS", &mut self.channels);
        set(&lookup, "PIPEWAV_SAMPLE_RATE", &mut self.sample_rate);
        set(&lookup, "PIPEWAV_BYTE_DEPTH", &mut self.byte_depth);
        set(&lookup, "PIPEWAV_SAMPLES", &mut self.samples);
        set(&lookup, "PIPEWAV_LAYOUT", &mut self.layout);
    }

    /// Converts to pipewav-core's StreamParameters type.
    pub fn to_stream_parameters(&self) -> StreamParameters {
        StreamParameters::new(
            self.format,
            self.channels,
            self.sample_rate,
            self.byte_depth,
            self.samples,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format: float\nchannels: 6\nsamples: 1000").unwrap();

        let config = HeaderConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.format, SampleFormat::IeeeFloat);
        assert_eq!(config.channels, 6);
        assert_eq!(config.samples, 1000);
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.byte_depth, 2);
        assert_eq!(config.layout, HeaderLayout::Auto);
    }

    #[test]
    fn yaml_accepts_layout_and_hex_tag() {
        let config: HeaderConfig =
            serde_yaml::from_str("format: \"0x0055\"\nlayout: extensible\n").unwrap();
        assert_eq!(config.format, SampleFormat::Other(0x55));
        assert_eq!(config.layout, HeaderLayout::Extensible);
    }

    #[test]
    fn yaml_rejects_unknown_format() {
        assert!(serde_yaml::from_str::<HeaderConfig>("format: mp3\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        let err = HeaderConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn overrides_replace_config_values() {
        let vars: HashMap<&str, &str> = [
            ("PIPEWAV_CHANNELS", "8"),
            ("PIPEWAV_SAMPLES", "8589934592"),
            ("PIPEWAV_LAYOUT", "canonical"),
            ("PIPEWAV_SAMPLE_RATE", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = HeaderConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.channels, 8);
        assert_eq!(config.samples, 1 << 33);
        assert_eq!(config.layout, HeaderLayout::Canonical);
        // Invalid values leave the previous setting in place.
        assert_eq!(config.sample_rate, 48000);
    }

    #[test]
    fn converts_to_stream_parameters() {
        let config = HeaderConfig {
            channels: 1,
            samples: 42,
            ..HeaderConfig::default()
        };
        assert_eq!(
            config.to_stream_parameters(),
            StreamParameters::new(SampleFormat::Pcm, 1, 48000, 2, 42)
        );
    }
}
