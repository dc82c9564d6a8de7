//! Streaming codec adapters — writer and reader.
//!
//! # Writer
//! [`EncodeWriter`] wraps any byte sink.  Bytes written to it come out the
//! other side as Base65536 text (UTF-8).  At most one pending byte is
//! buffered between writes; [`finish`](EncodeWriter::finish) flushes it
//! through the padding block and hands the inner writer back.  Must be
//! called exactly once — dropping the adapter without it loses a trailing
//! odd byte.
//!
//! # Reader
//! [`DecodeReader`] wraps any UTF-8 text source and serves the decoded
//! bytes.  Reads may split a UTF-8 sequence anywhere; up to three bytes of
//! an incomplete scalar are carried to the next pull.  Malformed UTF-8 and
//! alphabet violations surface as [`io::ErrorKind::InvalidData`].
//!
//! A stream need not end with a padding code point (even-length data has
//! none), so end of input between characters is a clean end of stream.

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::table::is_alphabet_char;
use std::io::{self, Read, Write};

/// Read granularity of [`DecodeReader`]: encoded text pulled per fill.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

// ── Writer ───────────────────────────────────────────────────────────────────

pub struct EncodeWriter<W: Write> {
    writer:  W,
    encoder: Encoder,
    /// Line feed between groups of this many code points.
    wrap:    Option<u64>,
    /// Code points written so far; drives wrapping.
    emitted: u64,
}

impl<W: Write> EncodeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, encoder: Encoder::new(), wrap: None, emitted: 0 }
    }

    /// Insert a line feed between groups of `width` code points.
    /// Width is clamped to at least 1.  Wrapped output only decodes in
    /// lenient mode, since the line feed is not an alphabet character.
    pub fn with_wrap(writer: W, width: usize) -> Self {
        let mut w = Self::new(writer);
        w.wrap = Some(width.max(1) as u64);
        w
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        let width = match self.wrap {
            None        => return self.writer.write_all(text.as_bytes()),
            Some(width) => width,
        };
        let mut out = String::with_capacity(text.len() + text.len() / width as usize);
        for c in text.chars() {
            if self.emitted > 0 && self.emitted % width == 0 {
                out.push('\n');
            }
            out.push(c);
            self.emitted += 1;
        }
        self.writer.write_all(out.as_bytes())
    }

    /// Flush a trailing odd byte through the padding block, flush the inner
    /// writer, and return it.  Must be called exactly once; dropping the
    /// adapter without it loses a buffered trailing byte.
    pub fn finish(mut self) -> io::Result<W> {
        let tail = self.encoder.finish();
        self.emit(&tail)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Write for EncodeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = self.encoder.feed(buf);
        self.emit(&text)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

// ── Reader ───────────────────────────────────────────────────────────────────

pub struct DecodeReader<R: Read> {
    reader:    R,
    decoder:   Decoder,
    /// Skip non-alphabet characters instead of failing.
    lenient:   bool,
    /// Decoded bytes not yet handed to the caller.
    pending:   Vec<u8>,
    pos:       usize,
    /// Tail of a UTF-8 scalar split by the previous pull (at most 3 bytes).
    carry:     [u8; 4],
    carry_len: usize,
    eof:       bool,
}

impl<R: Read> DecodeReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, false)
    }

    /// `lenient` skips characters outside the alphabet instead of failing;
    /// alphabet characters stay subject to the strict sequence rules.
    pub fn with_options(reader: R, lenient: bool) -> Self {
        Self {
            reader,
            decoder:   Decoder::new(),
            lenient,
            pending:   Vec::new(),
            pos:       0,
            carry:     [0u8; 4],
            carry_len: 0,
            eof:       false,
        }
    }

    /// Return the inner reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Pull one chunk of encoded text and run it through the decoder.
    fn fill(&mut self) -> io::Result<()> {
        let mut chunk = [0u8; DEFAULT_CHUNK_SIZE];
        let n = self.reader.read(&mut chunk)?;
        if n == 0 {
            if self.carry_len > 0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "incomplete UTF-8 sequence at end of stream",
                ));
            }
            self.eof = true;
            return Ok(());
        }

        let mut data = Vec::with_capacity(self.carry_len + n);
        data.extend_from_slice(&self.carry[..self.carry_len]);
        data.extend_from_slice(&chunk[..n]);
        self.carry_len = 0;

        // Split off an incomplete trailing scalar; anything else malformed
        // is a hard error.
        let valid = match std::str::from_utf8(&data) {
            Ok(_) => data.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream is not valid UTF-8",
                ))
            }
        };
        let tail = data.len() - valid;
        self.carry[..tail].copy_from_slice(&data[valid..]);
        self.carry_len = tail;

        let text = std::str::from_utf8(&data[..valid]).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "stream is not valid UTF-8")
        })?;
        let decoded = if self.lenient {
            self.decoder
                .feed_chars(text.chars().filter(|&c| is_alphabet_char(c)))
        } else {
            self.decoder.feed(text)
        };
        self.pending = decoded.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pos = 0;
        Ok(())
    }
}

impl<R: Read> Read for DecodeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.pos == self.pending.len() && !self.eof {
            self.fill()?;
        }
        let n = (self.pending.len() - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.pending[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
