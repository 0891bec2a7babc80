//! Stream parameters and the choices that drive header construction.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ParseError, ParseResult};
use crate::protocol_constants::{WAVE_FORMAT_IEEE_FLOAT, WAVE_FORMAT_PCM};

/// Sample encoding tag stored in the format chunk (canonical form) or the
/// first field of the sub-format GUID (extensible form).
///
/// Tags other than PCM and IEEE float are carried through untouched; the
/// builders never reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum SampleFormat {
    /// Integer samples (`WAVE_FORMAT_PCM`).
    Pcm,
    /// Floating point samples (`WAVE_FORMAT_IEEE_FLOAT`).
    IeeeFloat,
    /// Any other registered or unregistered tag.
    Other(u16),
}

impl SampleFormat {
    /// Returns the 16-bit `wFormatTag` value.
    #[inline]
    pub const fn tag(self) -> u16 {
        match self {
            Self::Pcm => WAVE_FORMAT_PCM,
            Self::IeeeFloat => WAVE_FORMAT_IEEE_FLOAT,
            Self::Other(tag) => tag,
        }
    }

    /// True for the two encodings the canonical header can describe without
    /// an extension.
    #[inline]
    pub const fn is_uncompressed(self) -> bool {
        matches!(self, Self::Pcm | Self::IeeeFloat)
    }
}

impl From<u16> for SampleFormat {
    fn from(tag: u16) -> Self {
        match tag {
            WAVE_FORMAT_PCM => Self::Pcm,
            WAVE_FORMAT_IEEE_FLOAT => Self::IeeeFloat,
            other => Self::Other(other),
        }
    }
}

impl FromStr for SampleFormat {
    type Err = ParseError;

    /// Accepts `pcm`, `float` / `ieee_float`, or a decimal or `0x`-prefixed tag.
    fn from_str(s: &str) -> ParseResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "pcm" | "int" => return Ok(Self::Pcm),
            "float" | "ieee_float" | "ieee-float" => return Ok(Self::IeeeFloat),
            _ => {}
        }

        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u16::from_str_radix(hex, 16),
            None => trimmed.parse::<u16>(),
        };

        parsed
            .map(Self::from)
            .map_err(|_| ParseError::UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for SampleFormat {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        value.parse()
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pcm => f.write_str("pcm"),
            Self::IeeeFloat => f.write_str("float"),
            Self::Other(tag) => write!(f, "0x{tag:04x}"),
        }
    }
}

/// Parameters of one output audio stream.
///
/// Immutable input to the header builders. Layout fields (`byte_rate`,
/// `block_align`) are always derived from these, never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StreamParameters {
    pub format: SampleFormat,
    /// Interleaved channel count.
    pub channels: u16,
    /// Samples per second per channel.
    pub sample_rate: u32,
    /// Bytes per sample (2 for 16-bit, 4 for 32-bit float).
    pub byte_depth: u16,
    /// Total samples per channel. May exceed what 32-bit WAVE can describe.
    pub samples: u64,
}

impl StreamParameters {
    pub fn new(
        format: SampleFormat,
        channels: u16,
        sample_rate: u32,
        byte_depth: u16,
        samples: u64,
    ) -> Self {
        Self {
            format,
            channels,
            sample_rate,
            byte_depth,
            samples,
        }
    }

    // The helpers below wrap at the width of the header field they feed,
    // matching what a 16/32-bit field can hold.

    /// `wBitsPerSample` / `wValidBitsPerSample`.
    #[inline]
    pub const fn bits_per_sample(&self) -> u16 {
        self.byte_depth.wrapping_mul(8)
    }

    /// `nBlockAlign`: bytes per interleaved frame.
    #[inline]
    pub const fn block_align(&self) -> u16 {
        self.channels.wrapping_mul(self.byte_depth)
    }

    /// `nAvgBytesPerSec`.
    #[inline]
    pub const fn byte_rate(&self) -> u32 {
        (self.channels as u32)
            .wrapping_mul(self.sample_rate)
            .wrapping_mul(self.byte_depth as u32)
    }

    /// Exact sample payload length in bytes, without any 32-bit truncation.
    #[inline]
    pub const fn payload_len(&self) -> u128 {
        self.samples as u128 * self.channels as u128 * self.byte_depth as u128
    }
}

/// Which header form to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// Canonical for mono/stereo PCM or float, extensible otherwise.
    #[default]
    Auto,
    /// 44-byte `RIFF(WAVE) -> fmt -> data`.
    Canonical,
    /// 80-byte `RIFF(WAVE) -> fmt(ext) -> fact -> data`.
    Extensible,
}

impl HeaderLayout {
    /// Resolves `Auto` against the stream; concrete layouts pass through.
    pub fn resolve(self, params: &StreamParameters) -> Self {
        match self {
            Self::Auto if params.channels <= 2 && params.format.is_uncompressed() => {
                Self::Canonical
            }
            Self::Auto => Self::Extensible,
            concrete => concrete,
        }
    }
}

impl FromStr for HeaderLayout {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "canonical" | "riff" => Ok(Self::Canonical),
            "extensible" | "ext" => Ok(Self::Extensible),
            _ => Err(ParseError::UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Canonical => "canonical",
            Self::Extensible => "extensible",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tags_round_trip_through_u16() {
        assert_eq!(SampleFormat::from(1), SampleFormat::Pcm);
        assert_eq!(SampleFormat::from(3), SampleFormat::IeeeFloat);
        assert_eq!(SampleFormat::from(0x55), SampleFormat::Other(0x55));
        assert_eq!(SampleFormat::Other(0x55).tag(), 0x55);
    }

    #[test]
    fn format_parses_names_and_numbers() {
        assert_eq!("PCM".parse::<SampleFormat>(), Ok(SampleFormat::Pcm));
        assert_eq!("float".parse::<SampleFormat>(), Ok(SampleFormat::IeeeFloat));
        assert_eq!("3".parse::<SampleFormat>(), Ok(SampleFormat::IeeeFloat));
        assert_eq!("0x0055".parse::<SampleFormat>(), Ok(SampleFormat::Other(0x55)));
        assert_eq!(
            "mp3".parse::<SampleFormat>(),
            Err(ParseError::UnknownFormat("mp3".into()))
        );
        assert!("70000".parse::<SampleFormat>().is_err());
    }

    #[test]
    fn derived_layout_fields() {
        let params = StreamParameters::new(SampleFormat::Pcm, 2, 44100, 2, 1000);
        assert_eq!(params.bits_per_sample(), 16);
        assert_eq!(params.block_align(), 4);
        assert_eq!(params.byte_rate(), 176_400);
        assert_eq!(params.payload_len(), 4000);
    }

    #[test]
    fn payload_len_does_not_truncate() {
        let params = StreamParameters::new(SampleFormat::Pcm, 8, 48000, 4, u64::MAX);
        assert_eq!(params.payload_len(), u64::MAX as u128 * 32);
    }

    #[test]
    fn auto_layout_resolution() {
        let stereo = StreamParameters::new(SampleFormat::IeeeFloat, 2, 48000, 4, 0);
        let surround = StreamParameters::new(SampleFormat::Pcm, 6, 48000, 2, 0);
        let odd_tag = StreamParameters::new(SampleFormat::Other(0x11), 1, 8000, 1, 0);

        assert_eq!(HeaderLayout::Auto.resolve(&stereo), HeaderLayout::Canonical);
        assert_eq!(HeaderLayout::Auto.resolve(&surround), HeaderLayout::Extensible);
        assert_eq!(HeaderLayout::Auto.resolve(&odd_tag), HeaderLayout::Extensible);
        assert_eq!(
            HeaderLayout::Extensible.resolve(&stereo),
            HeaderLayout::Extensible
        );
    }

    #[test]
    fn layout_parses() {
        assert_eq!("Extensible".parse::<HeaderLayout>(), Ok(HeaderLayout::Extensible));
        assert_eq!("auto".parse::<HeaderLayout>(), Ok(HeaderLayout::Auto));
        assert!("rf64".parse::<HeaderLayout>().is_err());
    }
}
