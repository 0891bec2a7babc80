pub mod builder;
pub mod channel;
pub mod chunks;
pub mod encode;
pub mod guid;
pub mod types;

pub use builder::{build_canonical_header, build_extensible_header, HeaderBuilder};
pub use channel::{channel_mask, speaker};
pub use chunks::{
    CanonicalHeader, ChunkHeader, DataChunk, ExtensibleHeader, FactChunk, FormatChunk,
    FormatExtChunk, RiffChunk, WaveHeader,
};
pub use guid::{Guid, KSDATAFORMAT_SUBTYPE_PCM};
pub use types::{HeaderLayout, SampleFormat, StreamParameters};
