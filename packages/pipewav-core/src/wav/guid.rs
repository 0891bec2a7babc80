use std::fmt;

use crate::protocol_constants::{SUBTYPE_DATA2, SUBTYPE_DATA3, SUBTYPE_DATA4, WAVE_FORMAT_PCM};

/// 128-bit identifier in Microsoft `GUID` field order.
///
/// On the wire the first three fields are little-endian and `data4` is raw
/// bytes, which is why the hyphenated text form does not match the byte dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// `KSDATAFORMAT_SUBTYPE_PCM`.
pub const KSDATAFORMAT_SUBTYPE_PCM: Guid = Guid {
    data1: WAVE_FORMAT_PCM as u32,
    data2: SUBTYPE_DATA2,
    data3: SUBTYPE_DATA3,
    data4: SUBTYPE_DATA4,
};

impl Guid {
    /// Builds a sub-format GUID by writing `tag` over the first field of the
    /// PCM template.
    ///
    /// For PCM and IEEE float this yields the registered subtypes. Any other
    /// tag yields an identifier nobody registered; that is passed on as is.
    pub const fn subtype(tag: u16) -> Self {
        Self {
            data1: tag as u32,
            ..KSDATAFORMAT_SUBTYPE_PCM
        }
    }

    /// Wire bytes.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.data1.to_le_bytes());
        out[4..6].copy_from_slice(&self.data2.to_le_bytes());
        out[6..8].copy_from_slice(&self.data3.to_le_bytes());
        out[8..16].copy_from_slice(&self.data4);
        out
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}
