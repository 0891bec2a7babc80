//! Little-endian, field-by-field header serialization.
//!
//! Every field is written explicitly in wire order; nothing depends on the
//! in-memory layout of the chunk structs.

use bytes::{BufMut, Bytes, BytesMut};

use super::chunks::{
    CanonicalHeader, ChunkHeader, DataChunk, ExtensibleHeader, FactChunk, FormatChunk,
    FormatExtChunk, RiffChunk, WaveHeader,
};

fn put_chunk_header<B: BufMut>(buf: &mut B, header: &ChunkHeader) {
    buf.put_slice(&header.id);
    buf.put_u32_le(header.size);
}

impl RiffChunk {
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        put_chunk_header(buf, &self.header);
        buf.put_slice(&self.form_type);
    }
}

impl FormatChunk {
    /// Writes the 16-byte `PCMWAVEFORMAT` body; `ext_size` is implied zero.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        put_chunk_header(buf, &self.header);
        buf.put_u16_le(self.tag);
        buf.put_u16_le(self.channels);
        buf.put_u32_le(self.sample_rate);
        buf.put_u32_le(self.byte_rate);
        buf.put_u16_le(self.block_align);
        buf.put_u16_le(self.bit_depth);
    }
}

impl FormatExtChunk {
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        put_chunk_header(buf, &self.header);
        buf.put_u16_le(self.tag);
        buf.put_u16_le(self.channels);
        buf.put_u32_le(self.sample_rate);
        buf.put_u32_le(self.byte_rate);
        buf.put_u16_le(self.block_align);
        buf.put_u16_le(self.bit_depth);
        buf.put_u16_le(self.ext_size);
        buf.put_u16_le(self.valid_bits);
        buf.put_u32_le(self.channel_mask);
        buf.put_slice(&self.sub_format.to_bytes());
    }
}

impl FactChunk {
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        put_chunk_header(buf, &self.header);
        buf.put_u32_le(self.samples);
    }
}

impl DataChunk {
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        put_chunk_header(buf, &self.header);
    }
}

impl CanonicalHeader {
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        self.riff.write_to(buf);
        self.format.write_to(buf);
        self.data.write_to(buf);
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut header = BytesMut::with_capacity(Self::LEN);
        self.write_to(&mut header);
        debug_assert_eq!(header.len(), Self::LEN, "canonical header length");
        header.freeze()
    }
}

impl ExtensibleHeader {
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        self.riff.write_to(buf);
        self.format.write_to(buf);
        self.fact.write_to(buf);
        self.data.write_to(buf);
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut header = BytesMut::with_capacity(Self::LEN);
        self.write_to(&mut header);
        debug_assert_eq!(header.len(), Self::LEN, "extensible header length");
        header.freeze()
    }
}

impl WaveHeader {
    /// Appends the encoded header to `buf`. The sample payload is expected
    /// to follow immediately.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        match self {
            Self::Canonical(h) => h.write_to(buf),
            Self::Extensible(h) => h.write_to(buf),
        }
    }

    pub fn to_bytes(&self) -> Bytes {
        match self {
            Self::Canonical(h) => h.to_bytes(),
            Self::Extensible(h) => h.to_bytes(),
        }
    }
}
