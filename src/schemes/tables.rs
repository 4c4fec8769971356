//! Builtin color tables.
//!
//! Gradient tables hold one distinct `0xRRGGBB` color per byte value.

use super::Color;
use image::Rgb;

/// Zero bytes
pub(super) const ZERO: u32 = 0x000000;
/// Control bytes other than tab, LF and CR
pub(super) const CONTROL: u32 = 0x4daf4a;
/// Printable ASCII plus tab, LF and CR
pub(super) const PRINTABLE: u32 = 0x1072b8;
/// 0x7f and above, except 0xff
pub(super) const HIGH: u32 = 0xe41a1c;
/// 0xff
pub(super) const ONES: u32 = 0xffffff;

pub(super) fn rgb(value: u32) -> Color {
    Rgb([(value >> 16) as u8, (value >> 8) as u8, value as u8])
}

/// Class of a byte under the categorical scheme, as `(name, color)`.
pub(super) fn categorical_class(byte: u8) -> (&'static str, u32) {
    match byte {
        0x00 => ("zero", ZERO),
        0xff => ("ones", ONES),
        b'\t' | b'\n' | b'\r' | 0x20..=0x7e => ("printable", PRINTABLE),
        0x01..=0x1f => ("control", CONTROL),
        _ => ("high", HIGH),
    }
}

/// Dark-to-bright ramp ordered by byte value.
pub(super) const MAGNITUDE: [u32; 256] = [
    0x000000, 0x020101, 0x050103, 0x070204, 0x0a0306, 0x0c0407, 0x0e0409, 0x10050a,
    0x12060c, 0x13070d, 0x15070e, 0x16080f, 0x170910, 0x180a11, 0x1a0b12, 0x1b0b13,
    0x1c0c14, 0x1d0d15, 0x1e0d16, 0x1e0e17, 0x1f0f18, 0x200f18, 0x211019, 0x22101a,
    0x23111b, 0x24111c, 0x25121c, 0x26121d, 0x27121e, 0x29131f, 0x2a1320, 0x2b1420,
    0x2c1421, 0x2d1422, 0x2e1523, 0x2f1524, 0x301624, 0x311625, 0x321726, 0x321727,
    0x331728, 0x341829, 0x351829, 0x36192a, 0x37192b, 0x381a2c, 0x391a2d, 0x3a1b2e,
    0x3b1b2f, 0x3c1c2f, 0x3d1c30, 0x3e1d31, 0x3f1d32, 0x401e33, 0x411e34, 0x411f34,
    0x421f35, 0x432036, 0x442137, 0x452138, 0x462239, 0x47223a, 0x48233b, 0x48233c,
    0x49243c, 0x4a253d, 0x4b253e, 0x4c263f, 0x4d2740, 0x4d2741, 0x4e2842, 0x4f2843,
    0x502943, 0x512a44, 0x512a45, 0x522b46, 0x532c47, 0x542c48, 0x552d49, 0x552e4a,
    0x562e4b, 0x572f4c, 0x58304d, 0x58314d, 0x59314e, 0x5a324f, 0x5a3350, 0x5b3351,
    0x5c3452, 0x5d3553, 0x5d3654, 0x5e3655, 0x5f3756, 0x5f3857, 0x603958, 0x613959,
    0x613a5a, 0x623b5a, 0x633c5b, 0x633c5c, 0x643d5d, 0x643e5e, 0x653f5f, 0x664060,
    0x664061, 0x674162, 0x674263, 0x684364, 0x694465, 0x694466, 0x6a4567, 0x6a4668,
    0x6b4769, 0x6b486a, 0x6c496b, 0x6c496c, 0x6d4a6d, 0x6d4b6d, 0x6e4c6e, 0x6e4d6f,
    0x6f4e70, 0x6f4f71, 0x704f72, 0x705073, 0x715174, 0x715275, 0x725376, 0x725477,
    0x725578, 0x735679, 0x73577a, 0x74577b, 0x74587c, 0x74597d, 0x755a7e, 0x755b7f,
    0x765c80, 0x765d81, 0x765e82, 0x775f83, 0x776084, 0x776185, 0x786186, 0x786287,
    0x786388, 0x786489, 0x79658a, 0x79668b, 0x79678c, 0x79688d, 0x7a698e, 0x7a6a8f,
    0x7a6b90, 0x7a6c91, 0x7b6d92, 0x7b6e93, 0x7b6f94, 0x7b7095, 0x7b7196, 0x7b7297,
    0x7c7398, 0x7c7499, 0x7c759a, 0x7c769b, 0x7c779c, 0x7c789d, 0x7c799e, 0x7c7a9f,
    0x7c7ba0, 0x7c7ca2, 0x7c7da2, 0x7c7ea4, 0x7c7fa5, 0x7c80a6, 0x7c81a7, 0x7c82a8,
    0x7c83a9, 0x7c84aa, 0x7c85ab, 0x7c86ac, 0x7c87ad, 0x7c88ae, 0x7c89af, 0x7c8ab0,
    0x7c8bb1, 0x7c8cb2, 0x7b8db3, 0x7b8eb4, 0x7b8fb5, 0x7b90b6, 0x7b91b7, 0x7a92b8,
    0x7a93b9, 0x7a94bb, 0x7a95bc, 0x7996bd, 0x7997be, 0x7998bf, 0x789ac0, 0x789bc1,
    0x789cc2, 0x779dc3, 0x779ec4, 0x769fc5, 0x76a0c6, 0x75a1c7, 0x75a2c8, 0x74a3c9,
    0x74a4ca, 0x73a5cc, 0x73a6cd, 0x72a7ce, 0x71a9cf, 0x71aad0, 0x70abd1, 0x6facd2,
    0x6fadd3, 0x6eaed4, 0x6dafd5, 0x6cb0d6, 0x6cb1d7, 0x6bb2d8, 0x6ab4da, 0x69b5db,
    0x68b6dc, 0x67b7dd, 0x66b8de, 0x65b9df, 0x64bae0, 0x63bbe1, 0x61bce2, 0x60bee3,
    0x5fbfe4, 0x5ec0e6, 0x5cc1e7, 0x5bc2e8, 0x59c3e9, 0x58c4ea, 0x56c5eb, 0x55c7ec,
    0x53c8ed, 0x51c9ee, 0x4fcaef, 0x4dcbf1, 0x4bccf2, 0x49cdf3, 0x46cff4, 0x44d0f5,
    0x41d1f6, 0x3ed2f7, 0x3bd3f8, 0x38d4f9, 0x34d5fb, 0x30d7fc, 0x2cd8fd, 0x27d9fe,
];

/// High-contrast table where neighbouring byte values differ visibly.
pub(super) const DETAIL: [u32; 256] = [
    0x000000, 0x002020, 0x203f1f, 0x3f1f20, 0x400000, 0x602000, 0x7f1f20, 0x5f203f,
    0x400040, 0x602040, 0x7f1f60, 0x5f207f, 0x3f007f, 0x1f005f, 0x202040, 0x1f3f60,
    0x3f407f, 0x1f405f, 0x206040, 0x1f7f60, 0x407f7f, 0x605f7f, 0x7f605f, 0x5f5f40,
    0x407f3f, 0x605f3f, 0x7f601f, 0x5f5f00, 0x3f7f00, 0x3f5f20, 0x1f401f, 0x006020,
    0x008000, 0x20a000, 0x3f9f20, 0x1fa03f, 0x008040, 0x208060, 0x1fa07f, 0x20bf5f,
    0x00c040, 0x20c060, 0x1fe07f, 0x20ff5f, 0x00ff3f, 0x00df1f, 0x20c020, 0x3fe01f,
    0x40ff3f, 0x40df1f, 0x60c020, 0x7fe01f, 0x7fff40, 0x5fff60, 0x60df7f, 0x5fc05f,
    0x7fbf40, 0x5fbf60, 0x609f7f, 0x5f805f, 0x7f803f, 0x5fa03f, 0x409f1f, 0x60a000,
    0x808000, 0xa0a000, 0xbf9f20, 0x9fa03f, 0x808040, 0xa08060, 0x9fa07f, 0xa0bf5f,
    0x80c040, 0xa0c060, 0x9fe07f, 0xa0ff5f, 0x80ff3f, 0x80df1f, 0xa0c020, 0xbfe01f,
    0xc0ff3f, 0xc0df1f, 0xe0c020, 0xffe01f, 0xffff40, 0xdfff60, 0xe0df7f, 0xdfc05f,
    0xffbf40, 0xdfbf60, 0xe09f7f, 0xdf805f, 0xff803f, 0xdfa03f, 0xc09f1f, 0xe0a000,
    0xff7f00, 0xdf7f20, 0xe05f3f, 0xdf401f, 0xff3f00, 0xff1f20, 0xdf001f, 0xc02020,
    0xbf3f00, 0xbf1f20, 0x9f001f, 0x802020, 0x804000, 0xa06000, 0xbf5f20, 0x9f603f,
    0x804040, 0xa06040, 0xbf5f60, 0x9f607f, 0x803f7f, 0x801f5f, 0xa00060, 0xbf205f,
    0xc03f7f, 0xc01f5f, 0xe00060, 0xff205f, 0xff407f, 0xdf405f, 0xe06040, 0xdf7f60,
    0xff7f80, 0xdf7fa0, 0xe05fbf, 0xdf409f, 0xff3f80, 0xff1fa0, 0xdf009f, 0xc020a0,
    0xbf3f80, 0xbf1fa0, 0x9f009f, 0x8020a0, 0x804080, 0xa06080, 0xbf5fa0, 0x9f60bf,
    0x8040c0, 0xa060c0, 0xbf5fe0, 0x9f60ff, 0x803fff, 0x801fdf, 0xa000e0, 0xbf20df,
    0xc03fff, 0xc01fdf, 0xe000e0, 0xff20df, 0xff40ff, 0xdf40df, 0xe060c0, 0xdf7fe0,
    0xff80ff, 0xdfa0ff, 0xc09fdf, 0xe0a0c0, 0xff80bf, 0xdf809f, 0xe0a080, 0xdfbfa0,
    0xffc0bf, 0xdfc09f, 0xe0e080, 0xdfffa0, 0xffffc0, 0xffdfe0, 0xdfc0df, 0xc0e0e0,
    0xbfffc0, 0xbfdfe0, 0x9fc0df, 0x80e0e0, 0x80ffbf, 0xa0ff9f, 0x9fdf80, 0xa0c0a0,
    0x80bfbf, 0xa0bf9f, 0x9f9f80, 0xa080a0, 0x8080c0, 0xa0a0c0, 0xbf9fe0, 0x9fa0ff,
    0x7f80ff, 0x5fa0ff, 0x409fdf, 0x60a0c0, 0x7f80bf, 0x5f809f, 0x60a080, 0x5fbfa0,
    0x7fc0bf, 0x5fc09f, 0x60e080, 0x5fffa0, 0x7fffc0, 0x7fdfe0, 0x5fc0df, 0x40e0e0,
    0x3fffc0, 0x3fdfe0, 0x1fc0df, 0x00e0e0, 0x00ffbf, 0x20ff9f, 0x1fdf80, 0x20c0a0,
    0x00bfbf, 0x20bf9f, 0x1f9f80, 0x2080a0, 0x0080c0, 0x20a0c0, 0x3f9fe0, 0x1fa0ff,
    0x007fff, 0x005fdf, 0x2040e0, 0x3f60df, 0x407fff, 0x605fff, 0x7f60df, 0x5f5fc0,
    0x407fbf, 0x605fbf, 0x7f609f, 0x5f5f80, 0x3f7f80, 0x1f7fa0, 0x205fbf, 0x1f409f,
    0x3f3f80, 0x1f3fa0, 0x201fbf, 0x1f009f, 0x400080, 0x602080, 0x7f1fa0, 0x5f20bf,
    0x4000c0, 0x6020c0, 0x7f1fe0, 0x5f20ff, 0x3f00ff, 0x3f20df, 0x1f3fe0, 0xffffff,
];
