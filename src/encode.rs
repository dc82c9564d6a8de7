//! Encoder: byte pairs in, code points out.
//!
//! The encoder carries at most one pending byte between `feed` calls, so
//! chunk boundaries may fall anywhere in the input without changing the
//! output.  `finish` must be called exactly once to flush a trailing
//! unpaired byte through the padding block.

use crate::table::{block_start, compose, PADDING_BLOCK_START};

// ── Encoder ──────────────────────────────────────────────────────────────────

/// Incremental Base65536 encoder.
///
/// Feed arbitrary byte chunks, then call [`finish`](Encoder::finish) exactly
/// once.  The concatenated output over any split of the input equals the
/// one-shot encoding of the whole input.
#[derive(Debug, Default)]
pub struct Encoder {
    /// High byte awaiting its pairing low byte.
    pending:  Option<u8>,
    finished: bool,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a chunk of bytes, emitting one character per completed pair.
    ///
    /// The first byte of a pair selects the block, the second byte the
    /// offset within it.  An unpaired trailing byte stays buffered until the
    /// next `feed` or `finish`.
    ///
    /// # Panics
    /// Panics if called after [`finish`](Encoder::finish).
    pub fn feed(&mut self, bytes: &[u8]) -> String {
        assert!(!self.finished, "Base65536 encoder used after finish");
        // A pair never exceeds four UTF-8 bytes.
        let mut out = String::with_capacity(bytes.len() * 2);
        for &b in bytes {
            match self.pending.take() {
                None       => self.pending = Some(b),
                Some(high) => out.push(compose(block_start(high), b)),
            }
        }
        out
    }

    /// Flush a pending unpaired byte through the padding block.
    ///
    /// Returns one character when the total byte count was odd, nothing
    /// otherwise.  Must be called exactly once, after all input.
    ///
    /// # Panics
    /// Panics if called a second time.
    pub fn finish(&mut self) -> String {
        assert!(!self.finished, "Base65536 encoder used after finish");
        self.finished = true;
        match self.pending.take() {
            Some(high) => compose(PADDING_BLOCK_START, high).to_string(),
            None       => String::new(),
        }
    }
}

// ── One-shot API ─────────────────────────────────────────────────────────────

/// Encode a whole buffer in one call.
///
/// Output length in code points is `ceil(bytes.len() / 2)`; the padding
/// block appears only for odd-length input, and only as the last character.
///
/// # Examples
/// ```
/// let text = base65536::encode(b"hello world");
/// assert_eq!(text, "\u{9D65}\u{A36C}\u{12020}\u{1456F}\u{1306C}\u{1564}");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut enc = Encoder::new();
    let mut out = enc.feed(bytes);
    out.push_str(&enc.finish());
    out
}

/// Encode a whole buffer, inserting a line feed between groups of `width`
/// code points.
///
/// `width` is clamped to at least 1.  The line feed is not part of the
/// alphabet, so wrapped output only decodes in garbage-tolerant mode
/// ([`decode_lenient`](crate::decode_lenient)).
pub fn encode_wrapped(bytes: &[u8], width: usize) -> String {
    let width = width.max(1);
    let mut out = String::with_capacity(bytes.len() * 2 + bytes.len() / width);
    for (i, c) in encode(bytes).chars().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}
