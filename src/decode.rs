//! Decoder: code points in, byte pairs out, with strict sequence validation.
//!
//! The decoder is a three-state machine: active, terminated (a padding code
//! point carried the final byte), failed.  Any character after the padding
//! marker is a hard error, as is any character outside the alphabet.
//! Processing stops at the first error; a failed decoder only ever repeats
//! its error and must be replaced for a retry.

use crate::table::{block_index, is_alphabet_char, split, PADDING_BLOCK_START};
use thiserror::Error;

// ── Error type ───────────────────────────────────────────────────────────────

/// Decode failure.  Malformed input is never transient; a failed decoder
/// must be discarded, not re-fed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The character's block is not in the alphabet and is not the padding
    /// block.
    #[error("not a valid Base65536 character: {0:?}")]
    InvalidCharacter(char),
    /// A character arrived after the padding marker already closed the
    /// stream.
    #[error("Base65536 sequence continued after final byte")]
    SequenceContinuedAfterFinalByte,
}

// ── Decoder ──────────────────────────────────────────────────────────────────

/// Nothing leaves `Terminated` except failure, and nothing leaves `Failed`.
#[derive(Debug, Clone)]
enum State {
    Active,
    Terminated,
    Failed(DecodeError),
}

/// Incremental Base65536 decoder.
///
/// Feed arbitrary chunks of text; termination state carries across chunks,
/// so splitting valid input anywhere yields the same bytes as one call.
#[derive(Debug)]
pub struct Decoder {
    state: State,
}

impl Decoder {
    pub fn new() -> Self {
        Self { state: State::Active }
    }

    /// Decode a chunk of text.
    ///
    /// Returns every byte decoded from this chunk, or the first error.  A
    /// failing chunk contributes no bytes at all, including characters that
    /// decoded cleanly before the bad one.
    pub fn feed(&mut self, text: &str) -> Result<Vec<u8>, DecodeError> {
        self.feed_chars(text.chars())
    }

    /// Decode a chunk of characters.  See [`feed`](Decoder::feed).
    pub fn feed_chars<I>(&mut self, chars: I) -> Result<Vec<u8>, DecodeError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut out = Vec::new();
        for c in chars {
            if let Err(e) = self.step(c, &mut out) {
                self.state = State::Failed(e.clone());
                return Err(e);
            }
        }
        Ok(out)
    }

    fn step(&mut self, c: char, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        match &self.state {
            State::Failed(e)  => return Err(e.clone()),
            State::Terminated => return Err(DecodeError::SequenceContinuedAfterFinalByte),
            State::Active     => {}
        }
        let (base, low) = split(c);
        if base == PADDING_BLOCK_START {
            out.push(low);
            self.state = State::Terminated;
        } else if let Some(high) = block_index(base) {
            out.push(high);
            out.push(low);
        } else {
            return Err(DecodeError::InvalidCharacter(c));
        }
        Ok(())
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

// ── One-shot API ─────────────────────────────────────────────────────────────

/// Decode a whole string in one strict call.
///
/// # Examples
/// ```
/// let bytes = base65536::decode("\u{9D65}\u{A36C}\u{12020}\u{1456F}\u{1306C}\u{1564}").unwrap();
/// assert_eq!(bytes, b"hello world");
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut dec = Decoder::new();
    dec.feed(text)
}

/// Decode a whole string, skipping characters outside the alphabet.
///
/// Alphabet characters stay subject to the strict rules, so a valid
/// character after the padding marker still fails.  The filter runs in
/// front of the state machine and never relaxes it.
pub fn decode_lenient(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut dec = Decoder::new();
    dec.feed_chars(text.chars().filter(|&c| is_alphabet_char(c)))
}
