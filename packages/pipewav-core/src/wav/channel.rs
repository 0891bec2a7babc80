//! Speaker positions and default channel masks.

/// `dwChannelMask` speaker position bits (`SPEAKER_*` in `ksmedia.h`).
pub mod speaker {
    pub const FL: u32 = 0x0001; // front left
    pub const FR: u32 = 0x0002; // front right
    pub const FC: u32 = 0x0004; // front center
    pub const LF: u32 = 0x0008; // low frequency
    pub const BL: u32 = 0x0010; // back left
    pub const BR: u32 = 0x0020; // back right
    pub const FLC: u32 = 0x0040; // front left of center
    pub const FRC: u32 = 0x0080; // front right of center
    pub const BC: u32 = 0x0100; // back center
    pub const SL: u32 = 0x0200; // side left
    pub const SR: u32 = 0x0400; // side right
}

use speaker::*;

/// Returns the speaker mask assigned to a stream with `channels` channels.
///
/// Only 1 through 8 channels have a named layout. Anything else gets `0`,
/// meaning "no speaker assignment", which readers accept.
pub const fn channel_mask(channels: u16) -> u32 {
    match channels {
        1 => FC,
        2 => FL | FR,
        3 => FL | FR | BC,
        4 => FL | FR | BL | BR,
        5 => FL | FR | FC | BL | BR,
        6 => FL | FR | FC | LF | BL | BR,
        7 => FL | FR | FC | LF | BL | BR | BC,
        8 => FL | FR | FC | LF | BL | BR | FLC | FRC,
        _ => 0,
    }
}
