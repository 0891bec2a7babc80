//! Fixed RIFF/WAVE constants that should NOT be changed.
//!
//! These values are defined by the RIFF and WAVE format documents
//! (Microsoft `WAVEFORMATEX` / `WAVEFORMATEXTENSIBLE`) and changing them
//! would produce files other readers reject.

// ─────────────────────────────────────────────────────────────────────────────
// Chunk Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Outer container chunk.
pub const FOURCC_RIFF: [u8; 4] = *b"RIFF";

/// RIFF form type for WAVE files.
pub const FOURCC_WAVE: [u8; 4] = *b"WAVE";

/// Format chunk. Note the trailing space.
pub const FOURCC_FMT: [u8; 4] = *b"fmt ";

/// Fact chunk (sample count for extensible / non-PCM files).
pub const FOURCC_FACT: [u8; 4] = *b"fact";

/// Data chunk holding the interleaved sample payload.
pub const FOURCC_DATA: [u8; 4] = *b"data";

// ─────────────────────────────────────────────────────────────────────────────
// Format Tags
// ─────────────────────────────────────────────────────────────────────────────

/// `WAVE_FORMAT_PCM`: integer samples.
pub const WAVE_FORMAT_PCM: u16 = 0x0001;

/// `WAVE_FORMAT_IEEE_FLOAT`: floating point samples.
pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 0x0003;

/// `WAVE_FORMAT_EXTENSIBLE`: not a real encoding, the codec lives in the sub-format GUID.
pub const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

// ─────────────────────────────────────────────────────────────────────────────
// Chunk Sizes (bytes)
// ─────────────────────────────────────────────────────────────────────────────

/// Tag + length prefix carried by every chunk.
pub const CHUNK_HEADER_LEN: usize = 8;

/// RIFF chunk header plus the `WAVE` form type.
pub const RIFF_CHUNK_LEN: usize = CHUNK_HEADER_LEN + 4;

/// Payload of the canonical (`PCMWAVEFORMAT`) format chunk.
pub const FMT_PAYLOAD_LEN: usize = 16;

/// `cbSize` of an extensible format chunk: valid bits + channel mask + GUID.
pub const FMT_EXT_SIZE: u16 = 2 + 4 + GUID_LEN as u16;

/// Payload of the extensible format chunk, `cbSize` field included.
pub const FMT_EXT_PAYLOAD_LEN: usize = FMT_PAYLOAD_LEN + 2 + FMT_EXT_SIZE as usize;

/// Payload of the fact chunk (one u32 sample count).
pub const FACT_PAYLOAD_LEN: usize = 4;

/// Encoded GUID length.
pub const GUID_LEN: usize = 16;

/// Total canonical header: `RIFF(WAVE) -> fmt -> data`.
pub const CANONICAL_HEADER_LEN: usize =
    RIFF_CHUNK_LEN + CHUNK_HEADER_LEN + FMT_PAYLOAD_LEN + CHUNK_HEADER_LEN;

/// Total extensible header: `RIFF(WAVE) -> fmt(ext) -> fact -> data`.
pub const EXTENSIBLE_HEADER_LEN: usize = RIFF_CHUNK_LEN
    + CHUNK_HEADER_LEN
    + FMT_EXT_PAYLOAD_LEN
    + CHUNK_HEADER_LEN
    + FACT_PAYLOAD_LEN
    + CHUNK_HEADER_LEN;

// ─────────────────────────────────────────────────────────────────────────────
// Size Limits
// ─────────────────────────────────────────────────────────────────────────────

/// Saturated size written to RIFF and data chunk sizes once the payload no
/// longer fits in 32 bits. Readers treat it as "read until EOF".
pub const WAV_SIZE_MAX: u32 = u32::MAX;

// ─────────────────────────────────────────────────────────────────────────────
// Sub-format GUID
// ─────────────────────────────────────────────────────────────────────────────

/// Fields 2-4 of `KSDATAFORMAT_SUBTYPE_PCM` (`00000001-0000-0010-8000-00aa00389b71`).
/// Every `KSDATAFORMAT_SUBTYPE_*` derived from a format tag shares them.
pub const SUBTYPE_DATA2: u16 = 0x0000;
pub const SUBTYPE_DATA3: u16 = 0x0010;
pub const SUBTYPE_DATA4: [u8; 8] = [0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71];
