//! Compressed single-byte code page data.
//!
//! Each table lists the Unicode code point for byte values 0x00..=0xFF in
//! order. A `RUN, n, start` triple stands for `n` consecutive code points
//! beginning at `start`, which keeps the alphabet and digit ranges short.
//! Code points in U+F7xx mark byte values the code page leaves unassigned.

/// Marker introducing a run triple. Never a valid table entry.
pub(super) const RUN: u16 = 0xFFFF;

/// Expand a compressed table into a full byte-to-char map.
pub(super) fn expand(compressed: &[u16]) -> [char; 256] {
    let mut table = ['\u{0}'; 256];
    let mut pos = 0usize;
    let mut i = 0usize;
    while i < compressed.len() && pos < 256 {
        if compressed[i] == RUN && i + 2 < compressed.len() {
            let count = compressed[i + 1] as usize;
            let start = compressed[i + 2] as u32;
            for n in 0..count {
                if pos >= 256 {
                    break;
                }
                table[pos] = char::from_u32(start + n as u32).unwrap_or('\u{FFFD}');
                pos += 1;
            }
            i += 3;
        } else {
            table[pos] = char::from_u32(compressed[i] as u32).unwrap_or('\u{FFFD}');
            pos += 1;
            i += 1;
        }
    }
    table
}

/// Compressed table for a single-byte CCSID, if one is shipped.
pub(super) fn compressed_table(ccsid: u32) -> Option<&'static [u16]> {
    match ccsid {
        37 => Some(CCSID_37),
        500 => Some(CCSID_500),
        1047 => Some(CCSID_1047),
        1140 => Some(CCSID_1140),
        1148 => Some(CCSID_1148),
        819 => Some(CCSID_819),
        1252 => Some(CCSID_1252),
        916 => Some(CCSID_916),
        1089 => Some(CCSID_1089),
        _ => None,
    }
}

static CCSID_37: &[u16] = &[
    RUN, 4, 0x0000, 0x009C, 0x0009, 0x0086, 0x007F, 0x0097, 0x008D, 0x008E, RUN, 9, 0x000B,
    0x009D, 0x0085, 0x0008, 0x0087, 0x0018, 0x0019, 0x0092, 0x008F, RUN, 4, 0x001C,
    RUN, 5, 0x0080, 0x000A, 0x0017, 0x001B, RUN, 5, 0x0088, 0x0005, 0x0006, 0x0007, 0x0090,
    0x0091, 0x0016, RUN, 4, 0x0093, 0x0004, RUN, 4, 0x0098, 0x0014, 0x0015, 0x009E, 0x001A,
    0x0020, 0x00A0, 0x00E2, 0x00E4, 0x00E0, 0x00E1, 0x00E3, 0x00E5, 0x00E7, 0x00F1, 0x00A2,
    0x002E, 0x003C, 0x0028, 0x002B, 0x007C, 0x0026, 0x00E9, 0x00EA, 0x00EB, 0x00E8, 0x00ED,
    0x00EE, 0x00EF, 0x00EC, 0x00DF, 0x0021, 0x0024, 0x002A, 0x0029, 0x003B, 0x00AC, 0x002D,
    0x002F, 0x00C2, 0x00C4, 0x00C0, 0x00C1, 0x00C3, 0x00C5, 0x00C7, 0x00D1, 0x00A6, 0x002C,
    0x0025, 0x005F, 0x003E, 0x003F, 0x00F8, 0x00C9, 0x00CA, 0x00CB, 0x00C8, 0x00CD, 0x00CE,
    0x00CF, 0x00CC, 0x0060, 0x003A, 0x0023, 0x0040, 0x0027, 0x003D, 0x0022, 0x00D8,
    RUN, 9, 0x0061, 0x00AB, 0x00BB, 0x00F0, 0x00FD, 0x00FE, 0x00B1, 0x00B0, RUN, 9, 0x006A,
    0x00AA, 0x00BA, 0x00E6, 0x00B8, 0x00C6, 0x00A4, 0x00B5, 0x007E, RUN, 8, 0x0073, 0x00A1,
    0x00BF, 0x00D0, 0x00DD, 0x00DE, 0x00AE, 0x005E, 0x00A3, 0x00A5, 0x00B7, 0x00A9, 0x00A7,
    0x00B6, 0x00BC, 0x00BD, 0x00BE, 0x005B, 0x005D, 0x00AF, 0x00A8, 0x00B4, 0x00D7, 0x007B,
    RUN, 9, 0x0041, 0x00AD, 0x00F4, 0x00F6, 0x00F2, 0x00F3, 0x00F5, 0x007D, RUN, 9, 0x004A,
    0x00B9, 0x00FB, 0x00FC, 0x00F9, 0x00FA, 0x00FF, 0x005C, 0x00F7, RUN, 8, 0x0053, 0x00B2,
    0x00D4, 0x00D6, 0x00D2, 0x00D3, 0x00D5, RUN, 10, 0x0030, 0x00B3, 0x00DB, 0x00DC, 0x00D9,
    0x00DA, 0x009F,
];

static CCSID_500: &[u16] = &[
    RUN, 4, 0x0000, 0x009C, 0x0009, 0x0086, 0x007F, 0x0097, 0x008D, 0x008E, RUN, 9, 0x000B,
    0x009D, 0x0085, 0x0008, 0x0087, 0x0018, 0x0019, 0x0092, 0x008F, RUN, 4, 0x001C,
    RUN, 5, 0x0080, 0x000A, 0x0017, 0x001B, RUN, 5, 0x0088, 0x0005, 0x0006, 0x0007, 0x0090,
    0x0091, 0x0016, RUN, 4, 0x0093, 0x0004, RUN, 4, 0x0098, 0x0014, 0x0015, 0x009E, 0x001A,
    0x0020, 0x00A0, 0x00E2, 0x00E4, 0x00E0, 0x00E1, 0x00E3, 0x00E5, 0x00E7, 0x00F1, 0x005B,
    0x002E, 0x003C, 0x0028, 0x002B, 0x0021, 0x0026, 0x00E9, 0x00EA, 0x00EB, 0x00E8, 0x00ED,
    0x00EE, 0x00EF, 0x00EC, 0x00DF, 0x005D, 0x0024, 0x002A, 0x0029, 0x003B, 0x005E, 0x002D,
    0x002F, 0x00C2, 0x00C4, 0x00C0, 0x00C1, 0x00C3, 0x00C5, 0x00C7, 0x00D1, 0x00A6, 0x002C,
    0x0025, 0x005F, 0x003E, 0x003F, 0x00F8, 0x00C9, 0x00CA, 0x00CB, 0x00C8, 0x00CD, 0x00CE,
    0x00CF, 0x00CC, 0x0060, 0x003A, 0x0023, 0x0040, 0x0027, 0x003D, 0x0022, 0x00D8,
    RUN, 9, 0x0061, 0x00AB, 0x00BB, 0x00F0, 0x00FD, 0x00FE, 0x00B1, 0x00B0, RUN, 9, 0x006A,
    0x00AA, 0x00BA, 0x00E6, 0x00B8, 0x00C6, 0x00A4, 0x00B5, 0x007E, RUN, 8, 0x0073, 0x00A1,
    0x00BF, 0x00D0, 0x00DD, 0x00DE, 0x00AE, 0x00A2, 0x00A3, 0x00A5, 0x00B7, 0x00A9, 0x00A7,
    0x00B6, 0x00BC, 0x00BD, 0x00BE, 0x00AC, 0x007C, 0x00AF, 0x00A8, 0x00B4, 0x00D7, 0x007B,
    RUN, 9, 0x0041, 0x00AD, 0x00F4, 0x00F6, 0x00F2, 0x00F3, 0x00F5, 0x007D, RUN, 9, 0x004A,
    0x00B9, 0x00FB, 0x00FC, 0x00F9, 0x00FA, 0x00FF, 0x005C, 0x00F7, RUN, 8, 0x0053, 0x00B2,
    0x00D4, 0x00D6, 0x00D2, 0x00D3, 0x00D5, RUN, 10, 0x0030, 0x00B3, 0x00DB, 0x00DC, 0x00D9,
    0x00DA, 0x009F,
];

static CCSID_1047: &[u16] = &[
    RUN, 4, 0x0000, 0x009C, 0x0009, 0x0086, 0x007F, 0x0097, 0x008D, 0x008E, RUN, 9, 0x000B,
    0x009D, 0x000A, 0x0008, 0x0087, 0x0018, 0x0019, 0x0092, 0x008F, RUN, 4, 0x001C,
    RUN, 6, 0x0080, 0x0017, 0x001B, RUN, 5, 0x0088, 0x0005, 0x0006, 0x0007, 0x0090, 0x0091,
    0x0016, RUN, 4, 0x0093, 0x0004, RUN, 4, 0x0098, 0x0014, 0x0015, 0x009E, 0x001A, 0x0020,
    0x00A0, 0x00E2, 0x00E4, 0x00E0, 0x00E1, 0x00E3, 0x00E5, 0x00E7, 0x00F1, 0x00A2, 0x002E,
    0x003C, 0x0028, 0x002B, 0x007C, 0x0026, 0x00E9, 0x00EA, 0x00EB, 0x00E8, 0x00ED, 0x00EE,
    0x00EF, 0x00EC, 0x00DF, 0x0021, 0x0024, 0x002A, 0x0029, 0x003B, 0x005E, 0x002D, 0x002F,
    0x00C2, 0x00C4, 0x00C0, 0x00C1, 0x00C3, 0x00C5, 0x00C7, 0x00D1, 0x00A6, 0x002C, 0x0025,
    0x005F, 0x003E, 0x003F, 0x00F8, 0x00C9, 0x00CA, 0x00CB, 0x00C8, 0x00CD, 0x00CE, 0x00CF,
    0x00CC, 0x0060, 0x003A, 0x0023, 0x0040, 0x0027, 0x003D, 0x0022, 0x00D8, RUN, 9, 0x0061,
    0x00AB, 0x00BB, 0x00F0, 0x00FD, 0x00FE, 0x00B1, 0x00B0, RUN, 9, 0x006A, 0x00AA, 0x00BA,
    0x00E6, 0x00B8, 0x00C6, 0x00A4, 0x00B5, 0x007E, RUN, 8, 0x0073, 0x00A1, 0x00BF, 0x00D0,
    0x005B, 0x00DE, 0x00AE, 0x00AC, 0x00A3, 0x00A5, 0x00B7, 0x00A9, 0x00A7, 0x00B6, 0x00BC,
    0x00BD, 0x00BE, 0x00DD, 0x00A8, 0x00AF, 0x005D, 0x00B4, 0x00D7, 0x007B, RUN, 9, 0x0041,
    0x00AD, 0x00F4, 0x00F6, 0x00F2, 0x00F3, 0x00F5, 0x007D, RUN, 9, 0x004A, 0x00B9, 0x00FB,
    0x00FC, 0x00F9, 0x00FA, 0x00FF, 0x005C, 0x00F7, RUN, 8, 0x0053, 0x00B2, 0x00D4, 0x00D6,
    0x00D2, 0x00D3, 0x00D5, RUN, 10, 0x0030, 0x00B3, 0x00DB, 0x00DC, 0x00D9, 0x00DA, 0x009F,
];

static CCSID_1140: &[u16] = &[
    RUN, 4, 0x0000, 0x009C, 0x0009, 0x0086, 0x007F, 0x0097, 0x008D, 0x008E, RUN, 9, 0x000B,
    0x009D, 0x0085, 0x0008, 0x0087, 0x0018, 0x0019, 0x0092, 0x008F, RUN, 4, 0x001C,
    RUN, 5, 0x0080, 0x000A, 0x0017, 0x001B, RUN, 5, 0x0088, 0x0005, 0x0006, 0x0007, 0x0090,
    0x0091, 0x0016, RUN, 4, 0x0093, 0x0004, RUN, 4, 0x0098, 0x0014, 0x0015, 0x009E, 0x001A,
    0x0020, 0x00A0, 0x00E2, 0x00E4, 0x00E0, 0x00E1, 0x00E3, 0x00E5, 0x00E7, 0x00F1, 0x00A2,
    0x002E, 0x003C, 0x0028, 0x002B, 0x007C, 0x0026, 0x00E9, 0x00EA, 0x00EB, 0x00E8, 0x00ED,
    0x00EE, 0x00EF, 0x00EC, 0x00DF, 0x0021, 0x0024, 0x002A, 0x0029, 0x003B, 0x00AC, 0x002D,
    0x002F, 0x00C2, 0x00C4, 0x00C0, 0x00C1, 0x00C3, 0x00C5, 0x00C7, 0x00D1, 0x00A6, 0x002C,
    0x0025, 0x005F, 0x003E, 0x003F, 0x00F8, 0x00C9, 0x00CA, 0x00CB, 0x00C8, 0x00CD, 0x00CE,
    0x00CF, 0x00CC, 0x0060, 0x003A, 0x0023, 0x0040, 0x0027, 0x003D, 0x0022, 0x00D8,
    RUN, 9, 0x0061, 0x00AB, 0x00BB, 0x00F0, 0x00FD, 0x00FE, 0x00B1, 0x00B0, RUN, 9, 0x006A,
    0x00AA, 0x00BA, 0x00E6, 0x00B8, 0x00C6, 0x20AC, 0x00B5, 0x007E, RUN, 8, 0x0073, 0x00A1,
    0x00BF, 0x00D0, 0x00DD, 0x00DE, 0x00AE, 0x005E, 0x00A3, 0x00A5, 0x00B7, 0x00A9, 0x00A7,
    0x00B6, 0x00BC, 0x00BD, 0x00BE, 0x005B, 0x005D, 0x00AF, 0x00A8, 0x00B4, 0x00D7, 0x007B,
    RUN, 9, 0x0041, 0x00AD, 0x00F4, 0x00F6, 0x00F2, 0x00F3, 0x00F5, 0x007D, RUN, 9, 0x004A,
    0x00B9, 0x00FB, 0x00FC, 0x00F9, 0x00FA, 0x00FF, 0x005C, 0x00F7, RUN, 8, 0x0053, 0x00B2,
    0x00D4, 0x00D6, 0x00D2, 0x00D3, 0x00D5, RUN, 10, 0x0030, 0x00B3, 0x00DB, 0x00DC, 0x00D9,
    0x00DA, 0x009F,
];

static CCSID_1148: &[u16] = &[
    RUN, 4, 0x0000, 0x009C, 0x0009, 0x0086, 0x007F, 0x0097, 0x008D, 0x008E, RUN, 9, 0x000B,
    0x009D, 0x0085, 0x0008, 0x0087, 0x0018, 0x0019, 0x0092, 0x008F, RUN, 4, 0x001C,
    RUN, 5, 0x0080, 0x000A, 0x0017, 0x001B, RUN, 5, 0x0088, 0x0005, 0x0006, 0x0007, 0x0090,
    0x0091, 0x0016, RUN, 4, 0x0093, 0x0004, RUN, 4, 0x0098, 0x0014, 0x0015, 0x009E, 0x001A,
    0x0020, 0x00A0, 0x00E2, 0x00E4, 0x00E0, 0x00E1, 0x00E3, 0x00E5, 0x00E7, 0x00F1, 0x005B,
    0x002E, 0x003C, 0x0028, 0x002B, 0x0021, 0x0026, 0x00E9, 0x00EA, 0x00EB, 0x00E8, 0x00ED,
    0x00EE, 0x00EF, 0x00EC, 0x00DF, 0x005D, 0x0024, 0x002A, 0x0029, 0x003B, 0x005E, 0x002D,
    0x002F, 0x00C2, 0x00C4, 0x00C0, 0x00C1, 0x00C3, 0x00C5, 0x00C7, 0x00D1, 0x00A6, 0x002C,
    0x0025, 0x005F, 0x003E, 0x003F, 0x00F8, 0x00C9, 0x00CA, 0x00CB, 0x00C8, 0x00CD, 0x00CE,
    0x00CF, 0x00CC, 0x0060, 0x003A, 0x0023, 0x0040, 0x0027, 0x003D, 0x0022, 0x00D8,
    RUN, 9, 0x0061, 0x00AB, 0x00BB, 0x00F0, 0x00FD, 0x00FE, 0x00B1, 0x00B0, RUN, 9, 0x006A,
    0x00AA, 0x00BA, 0x00E6, 0x00B8, 0x00C6, 0x20AC, 0x00B5, 0x007E, RUN, 8, 0x0073, 0x00A1,
    0x00BF, 0x00D0, 0x00DD, 0x00DE, 0x00AE, 0x00A2, 0x00A3, 0x00A5, 0x00B7, 0x00A9, 0x00A7,
    0x00B6, 0x00BC, 0x00BD, 0x00BE, 0x00AC, 0x007C, 0x00AF, 0x00A8, 0x00B4, 0x00D7, 0x007B,
    RUN, 9, 0x0041, 0x00AD, 0x00F4, 0x00F6, 0x00F2, 0x00F3, 0x00F5, 0x007D, RUN, 9, 0x004A,
    0x00B9, 0x00FB, 0x00FC, 0x00F9, 0x00FA, 0x00FF, 0x005C, 0x00F7, RUN, 8, 0x0053, 0x00B2,
    0x00D4, 0x00D6, 0x00D2, 0x00D3, 0x00D5, RUN, 10, 0x0030, 0x00B3, 0x00DB, 0x00DC, 0x00D9,
    0x00DA, 0x009F,
];

static CCSID_819: &[u16] = &[
    RUN, 256, 0x0000,
];

static CCSID_1252: &[u16] = &[
    RUN, 128, 0x0000, 0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6,
    0x2030, 0x0160, 0x2039, 0x0152, 0x008D, 0x017D, 0x008F, 0x0090, 0x2018, 0x2019, 0x201C,
    0x201D, 0x2022, 0x2013, 0x2014, 0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E,
    0x0178, RUN, 96, 0x00A0,
];

static CCSID_916: &[u16] = &[
    RUN, 161, 0x0000, 0xF7A1, RUN, 8, 0x00A2, 0x00D7, RUN, 15, 0x00AB, 0x00F7, RUN, 4, 0x00BB,
    RUN, 32, 0xF7BF, 0x2017, RUN, 27, 0x05D0, 0xF7FB, 0xF7FC, 0x200E, 0x200F, 0xF7FF,
];

static CCSID_1089: &[u16] = &[
    RUN, 161, 0x0000, 0xF7A1, 0xF7A2, 0xF7A3, 0x00A4, RUN, 7, 0xF7A5, 0x060C, 0x00AD,
    RUN, 13, 0xF7AE, 0x061B, 0xF7BC, 0xF7BD, 0xF7BE, 0x061F, 0xF7C0, RUN, 26, 0x0621,
    RUN, 5, 0xF7DB, RUN, 19, 0x0640, RUN, 13, 0xF7F3,
];

