//! Header construction from stream parameters.
//!
//! Both forms share the same size accounting:
//! - the fact sample count is clamped to 32 bits;
//! - the data size is `frames × block_align`, and the RIFF size adds every
//!   header byte after the RIFF chunk prefix;
//! - once the true RIFF size no longer fits in 32 bits, both sizes saturate
//!   to `u32::MAX` instead of wrapping.
//!
//! Each clamp is reported once to the [`DiagnosticSink`].

use std::sync::Arc;

use super::channel::channel_mask;
use super::chunks::{
    CanonicalHeader, ChunkHeader, DataChunk, ExtensibleHeader, FactChunk, FormatChunk,
    FormatExtChunk, RiffChunk, WaveHeader,
};
use super::guid::Guid;
use super::types::{HeaderLayout, StreamParameters};
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::HeaderWarning;
use crate::protocol_constants::{
    CHUNK_HEADER_LEN, FACT_PAYLOAD_LEN, FMT_EXT_PAYLOAD_LEN, FMT_EXT_SIZE, FMT_PAYLOAD_LEN,
    FOURCC_DATA, FOURCC_FACT, FOURCC_FMT, FOURCC_RIFF, FOURCC_WAVE, WAVE_FORMAT_EXTENSIBLE,
    WAV_SIZE_MAX,
};

/// Size fields shared by both header forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SizeFields {
    fact_samples: u32,
    data_size: u32,
    riff_size: u32,
}

fn size_fields(
    params: &StreamParameters,
    header_len: usize,
    sink: &dyn DiagnosticSink,
) -> SizeFields {
    let fact_samples = u32::try_from(params.samples).unwrap_or_else(|_| {
        sink.warn(HeaderWarning::SampleCountOverflow {
            samples: params.samples,
        });
        WAV_SIZE_MAX
    });

    // Everything the RIFF size counts besides the payload.
    let riff_body = (header_len - CHUNK_HEADER_LEN) as u32;

    let frame_bytes = u32::from(params.channels).wrapping_mul(u32::from(params.byte_depth));
    let mut data_size = fact_samples.wrapping_mul(frame_bytes);
    let mut riff_size = data_size.wrapping_add(riff_body);

    let payload = params.payload_len();
    if payload + u128::from(riff_body) > u128::from(WAV_SIZE_MAX) {
        sink.warn(HeaderWarning::PayloadSizeOverflow { bytes: payload });
        data_size = WAV_SIZE_MAX;
        riff_size = WAV_SIZE_MAX;
    }

    SizeFields {
        fact_samples,
        data_size,
        riff_size,
    }
}

fn riff_chunk(riff_size: u32) -> RiffChunk {
    RiffChunk {
        header: ChunkHeader {
            id: FOURCC_RIFF,
            size: riff_size,
        },
        form_type: FOURCC_WAVE,
    }
}

fn data_chunk(data_size: u32) -> DataChunk {
    DataChunk {
        header: ChunkHeader {
            id: FOURCC_DATA,
            size: data_size,
        },
    }
}

/// Builds the 44-byte canonical header.
///
/// The format chunk carries `params.format` directly as its tag. Suitable
/// for mono/stereo PCM and float streams; anything needing a speaker mask
/// or a fact chunk should use [`build_extensible_header`].
pub fn build_canonical_header(
    params: &StreamParameters,
    sink: &dyn DiagnosticSink,
) -> CanonicalHeader {
    let sizes = size_fields(params, CanonicalHeader::LEN, sink);

    CanonicalHeader {
        riff: riff_chunk(sizes.riff_size),
        format: FormatChunk {
            header: ChunkHeader {
                id: FOURCC_FMT,
                size: FMT_PAYLOAD_LEN as u32,
            },
            tag: params.format.tag(),
            channels: params.channels,
            sample_rate: params.sample_rate,
            byte_rate: params.byte_rate(),
            block_align: params.block_align(),
            bit_depth: params.bits_per_sample(),
            ext_size: 0,
        },
        data: data_chunk(sizes.data_size),
    }
}

/// Builds the 80-byte extensible header.
///
/// The format tag is always `WAVE_FORMAT_EXTENSIBLE`; `params.format` only
/// reaches the first field of the sub-format GUID. A fact chunk always
/// follows the format chunk.
pub fn build_extensible_header(
    params: &StreamParameters,
    sink: &dyn DiagnosticSink,
) -> ExtensibleHeader {
    let sizes = size_fields(params, ExtensibleHeader::LEN, sink);

    ExtensibleHeader {
        riff: riff_chunk(sizes.riff_size),
        format: FormatExtChunk {
            header: ChunkHeader {
                id: FOURCC_FMT,
                size: FMT_EXT_PAYLOAD_LEN as u32,
            },
            tag: WAVE_FORMAT_EXTENSIBLE,
            channels: params.channels,
            sample_rate: params.sample_rate,
            byte_rate: params.byte_rate(),
            block_align: params.block_align(),
            bit_depth: params.bits_per_sample(),
            ext_size: FMT_EXT_SIZE,
            valid_bits: params.bits_per_sample(),
            channel_mask: channel_mask(params.channels),
            sub_format: Guid::subtype(params.format.tag()),
        },
        fact: FactChunk {
            header: ChunkHeader {
                id: FOURCC_FACT,
                size: FACT_PAYLOAD_LEN as u32,
            },
            samples: sizes.fact_samples,
        },
        data: data_chunk(sizes.data_size),
    }
}

/// Header factory bound to a diagnostic sink.
///
/// Cheap to clone; the sink is shared.
#[derive(Clone)]
pub struct HeaderBuilder {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for HeaderBuilder {
    /// Reports through the `log` facade.
    fn default() -> Self {
        Self::new(Arc::new(LogSink))
    }
}

impl HeaderBuilder {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn canonical(&self, params: &StreamParameters) -> CanonicalHeader {
        build_canonical_header(params, self.sink.as_ref())
    }

    pub fn extensible(&self, params: &StreamParameters) -> ExtensibleHeader {
        build_extensible_header(params, self.sink.as_ref())
    }

    /// Builds the header form `layout` resolves to for this stream.
    pub fn build(&self, params: &StreamParameters, layout: HeaderLayout) -> WaveHeader {
        match layout.resolve(params) {
            HeaderLayout::Canonical => self.canonical(params).into(),
            // `resolve` never returns `Auto`.
            HeaderLayout::Extensible | HeaderLayout::Auto => self.extensible(params).into(),
        }
    }
}
