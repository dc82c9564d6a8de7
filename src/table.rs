//! Block table: the frozen code-point alphabet of Base65536.
//!
//! # Alphabet rules
//! Every byte value 0..=255 owns one block of 256 consecutive code points;
//! the block start is the identity that appears in encoded text.  These
//! values are:
//!   - Embedded constants, identical on every run (never derived from
//!     locale data or the source text encoding).
//!   - The authoritative alphabet for decoding.  A decoder MUST reject any
//!     code point whose block is not listed here and is not the padding
//!     block.
//!
//! One extra block starting at U+1500 is reserved for the padding code
//! point that carries a final unpaired byte.  It never appears mid-stream.
//!
//! # Normalization
//! Every block lies in ranges that are stable under NFC, NFD, NFKC and
//! NFKD, so encoded text survives all four normalization forms unchanged.

// ── Frozen block starts ──────────────────────────────────────────────────────
//
// These values are permanent.  Index = high byte of the pair.  The table is
// strictly increasing and every entry is 0x100-aligned; `block_index` relies
// on both.

/// Start of the block reserved for a final unpaired byte.
pub const PADDING_BLOCK_START: u32 = 0x1500;

/// Block start per high-byte value.  `BLOCK_STARTS[h] + l` encodes the byte
/// pair `(h, l)`.
pub const BLOCK_STARTS: [u32; 256] = [
    0x3400,  0x3500,  0x3600,  0x3700,  0x3800,  0x3900,  0x3A00,  0x3B00, // 0x00
    0x3C00,  0x3D00,  0x3E00,  0x3F00,  0x4000,  0x4100,  0x4200,  0x4300, // 0x08
    0x4400,  0x4500,  0x4600,  0x4700,  0x4800,  0x4900,  0x4A00,  0x4B00, // 0x10
    0x4C00,  0x4E00,  0x4F00,  0x5000,  0x5100,  0x5200,  0x5300,  0x5400, // 0x18
    0x5500,  0x5600,  0x5700,  0x5800,  0x5900,  0x5A00,  0x5B00,  0x5C00, // 0x20
    0x5D00,  0x5E00,  0x5F00,  0x6000,  0x6100,  0x6200,  0x6300,  0x6400, // 0x28
    0x6500,  0x6600,  0x6700,  0x6800,  0x6900,  0x6A00,  0x6B00,  0x6C00, // 0x30
    0x6D00,  0x6E00,  0x6F00,  0x7000,  0x7100,  0x7200,  0x7300,  0x7400, // 0x38
    0x7500,  0x7600,  0x7700,  0x7800,  0x7900,  0x7A00,  0x7B00,  0x7C00, // 0x40
    0x7D00,  0x7E00,  0x7F00,  0x8000,  0x8100,  0x8200,  0x8300,  0x8400, // 0x48
    0x8500,  0x8600,  0x8700,  0x8800,  0x8900,  0x8A00,  0x8B00,  0x8C00, // 0x50
    0x8D00,  0x8E00,  0x8F00,  0x9000,  0x9100,  0x9200,  0x9300,  0x9400, // 0x58
    0x9500,  0x9600,  0x9700,  0x9800,  0x9900,  0x9A00,  0x9B00,  0x9C00, // 0x60
    0x9D00,  0x9E00,  0xA100,  0xA200,  0xA300,  0xA500,  0x10600, 0x12000, // 0x68
    0x12100, 0x12200, 0x13000, 0x13100, 0x13200, 0x13300, 0x14400, 0x14500, // 0x70
    0x16800, 0x16900, 0x20000, 0x20100, 0x20200, 0x20300, 0x20400, 0x20500, // 0x78
    0x20600, 0x20700, 0x20800, 0x20900, 0x20A00, 0x20B00, 0x20C00, 0x20D00, // 0x80
    0x20E00, 0x20F00, 0x21000, 0x21100, 0x21200, 0x21300, 0x21400, 0x21500, // 0x88
    0x21600, 0x21700, 0x21800, 0x21900, 0x21A00, 0x21B00, 0x21C00, 0x21D00, // 0x90
    0x21E00, 0x21F00, 0x22000, 0x22100, 0x22200, 0x22300, 0x22400, 0x22500, // 0x98
    0x22600, 0x22700, 0x22800, 0x22900, 0x22A00, 0x22B00, 0x22C00, 0x22D00, // 0xA0
    0x22E00, 0x22F00, 0x23000, 0x23100, 0x23200, 0x23300, 0x23400, 0x23500, // 0xA8
    0x23600, 0x23700, 0x23800, 0x23900, 0x23A00, 0x23B00, 0x23C00, 0x23D00, // 0xB0
    0x23E00, 0x23F00, 0x24000, 0x24100, 0x24200, 0x24300, 0x24400, 0x24500, // 0xB8
    0x24600, 0x24700, 0x24800, 0x24900, 0x24A00, 0x24B00, 0x24C00, 0x24D00, // 0xC0
    0x24E00, 0x24F00, 0x25000, 0x25100, 0x25200, 0x25300, 0x25400, 0x25500, // 0xC8
    0x25600, 0x25700, 0x25800, 0x25900, 0x25A00, 0x25B00, 0x25C00, 0x25D00, // 0xD0
    0x25E00, 0x25F00, 0x26000, 0x26100, 0x26200, 0x26300, 0x26400, 0x26500, // 0xD8
    0x26600, 0x26700, 0x26800, 0x26900, 0x26A00, 0x26B00, 0x26C00, 0x26D00, // 0xE0
    0x26E00, 0x26F00, 0x27000, 0x27100, 0x27200, 0x27300, 0x27400, 0x27500, // 0xE8
    0x27600, 0x27700, 0x27800, 0x27900, 0x27A00, 0x27B00, 0x27C00, 0x27D00, // 0xF0
    0x27E00, 0x27F00, 0x28000, 0x28100, 0x28200, 0x28300, 0x28400, 0x28500, // 0xF8
];

/// Offset of a code point within its block.
const OFFSET_MASK: u32 = 0xFF;

// ── Lookups ──────────────────────────────────────────────────────────────────

/// Block start owned by a high-byte value.
#[inline]
pub fn block_start(high: u8) -> u32 {
    BLOCK_STARTS[high as usize]
}

/// Resolve a block start back to its high-byte value.
///
/// Returns `None` if `base` is not one of the 256 known block starts (the
/// padding block is deliberately not in the table; check it separately).
#[inline]
pub fn block_index(base: u32) -> Option<u8> {
    BLOCK_STARTS.binary_search(&base).ok().map(|i| i as u8)
}

/// Whether a character belongs to the Base65536 alphabet (any of the 256
/// data blocks or the padding block).
pub fn is_alphabet_char(c: char) -> bool {
    let (base, _) = split(c);
    base == PADDING_BLOCK_START || block_index(base).is_some()
}

// ── Code point composition ───────────────────────────────────────────────────

/// Compose a block start and an offset into the encoded character.
#[inline]
pub(crate) fn compose(base: u32, offset: u8) -> char {
    match char::from_u32(base + u32::from(offset)) {
        Some(c) => c,
        // The table never touches the surrogate range or the scalar ceiling.
        None => unreachable!("block table produced a non-scalar code point"),
    }
}

/// Split a character into its block start and in-block offset.
#[inline]
pub(crate) fn split(c: char) -> (u32, u8) {
    let cp = c as u32;
    (cp & !OFFSET_MASK, (cp & OFFSET_MASK) as u8)
}
