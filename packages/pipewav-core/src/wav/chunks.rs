//! Typed views of the RIFF/WAVE chunks that make up a header.
//!
//! Field order mirrors the on-wire order; `encode.rs` writes them in exactly
//! this sequence. Chunk `size` fields count the payload only, never the
//! 8-byte tag + length prefix.

use super::guid::Guid;
use crate::protocol_constants::{CANONICAL_HEADER_LEN, EXTENSIBLE_HEADER_LEN};

/// Tag + payload length prefix shared by every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

/// Outermost chunk: `RIFF`, total size, form type `WAVE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffChunk {
    pub header: ChunkHeader,
    pub form_type: [u8; 4],
}

/// Canonical `fmt ` chunk (`WAVEFORMATEX` with `cbSize == 0`).
///
/// Written in its 16-byte `PCMWAVEFORMAT` shape: a zero `ext_size` declares
/// no extension, so it is implied rather than stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    pub header: ChunkHeader,
    pub tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bit_depth: u16,
    pub ext_size: u16,
}

/// Extensible `fmt ` chunk (`WAVEFORMATEXTENSIBLE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatExtChunk {
    pub header: ChunkHeader,
    /// Always `WAVE_FORMAT_EXTENSIBLE`; the codec lives in `sub_format`.
    pub tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bit_depth: u16,
    /// Bytes following this field: valid bits + channel mask + GUID.
    pub ext_size: u16,
    pub valid_bits: u16,
    pub channel_mask: u32,
    pub sub_format: Guid,
}

/// `fact` chunk: per-channel sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactChunk {
    pub header: ChunkHeader,
    pub samples: u32,
}

/// Header of the `data` chunk. The payload itself is streamed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunk {
    pub header: ChunkHeader,
}

/// `RIFF(WAVE) -> fmt -> data`, 44 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalHeader {
    pub riff: RiffChunk,
    pub format: FormatChunk,
    pub data: DataChunk,
}

impl CanonicalHeader {
    pub const LEN: usize = CANONICAL_HEADER_LEN;
}

/// `RIFF(WAVE) -> fmt(ext) -> fact -> data`, 80 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensibleHeader {
    pub riff: RiffChunk,
    pub format: FormatExtChunk,
    pub fact: FactChunk,
    pub data: DataChunk,
}

impl ExtensibleHeader {
    pub const LEN: usize = EXTENSIBLE_HEADER_LEN;
}

/// Either header form, as produced by [`HeaderBuilder::build`](super::HeaderBuilder::build).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveHeader {
    Canonical(CanonicalHeader),
    Extensible(ExtensibleHeader),
}

impl WaveHeader {
    /// Encoded length in bytes.
    pub const fn len(&self) -> usize {
        match self {
            Self::Canonical(_) => CanonicalHeader::LEN,
            Self::Extensible(_) => ExtensibleHeader::LEN,
        }
    }

    /// Headers are never empty; present for the `len` convention.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn is_extensible(&self) -> bool {
        matches!(self, Self::Extensible(_))
    }

    /// Value of the RIFF chunk size field.
    pub const fn riff_size(&self) -> u32 {
        match self {
            Self::Canonical(h) => h.riff.header.size,
            Self::Extensible(h) => h.riff.header.size,
        }
    }

    /// Value of the data chunk size field.
    pub const fn data_size(&self) -> u32 {
        match self {
            Self::Canonical(h) => h.data.header.size,
            Self::Extensible(h) => h.data.header.size,
        }
    }

    /// Fact chunk sample count; the canonical form has no fact chunk.
    pub const fn fact_samples(&self) -> Option<u32> {
        match self {
            Self::Canonical(_) => None,
            Self::Extensible(h) => Some(h.fact.samples),
        }
    }

    /// Speaker mask; the canonical form carries none.
    pub const fn channel_mask(&self) -> Option<u32> {
        match self {
            Self::Canonical(_) => None,
            Self::Extensible(h) => Some(h.format.channel_mask),
        }
    }
}

impl From<CanonicalHeader> for WaveHeader {
    fn from(header: CanonicalHeader) -> Self {
        Self::Canonical(header)
    }
}

impl From<ExtensibleHeader> for WaveHeader {
    fn from(header: ExtensibleHeader) -> Self {
        Self::Extensible(header)
    }
}
