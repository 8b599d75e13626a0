//! 3.3. Preprocessing the input stream
//!
//! https://www.w3.org/TR/css-syntax-3/#input-preprocessing

use std::io::{ErrorKind, Read};

use crate::FatalError;

/// Number of bytes requested from the underlying source per read.
pub const READ_CHUNK_SIZE: usize = 8 * 1024;

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

macro_rules! surrogate_code_point {
    () => {
        0xD800..=0xDFFF
    };
}

/// Filters code points according to the preprocessing rules.
///
/// Replaces CR, FF and CR LF pairs by a single LF, and NULL, surrogates and
/// out of range values by U+FFFD REPLACEMENT CHARACTER. A CR at the end of
/// one chunk and an LF at the start of the next still collapse into one LF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePointFilter {
    pending_cr: bool,
}

impl CodePointFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets a pending CR so the filter can be reused for another stream.
    pub fn reset(&mut self) {
        self.pending_cr = false;
    }

    /// Returns `None` when the code point is swallowed (the LF of a CR LF pair).
    pub fn filter_code_point(&mut self, code_point: u32) -> Option<char> {
        let after_cr = std::mem::replace(&mut self.pending_cr, false);

        match code_point {
            0x000D => {
                self.pending_cr = true;
                Some('\n')
            }
            0x000A if after_cr => None,
            0x000C => Some('\n'),
            0x0000 | surrogate_code_point!() => Some(REPLACEMENT_CHARACTER),
            _ => Some(char::from_u32(code_point).unwrap_or(REPLACEMENT_CHARACTER)),
        }
    }

    pub fn filter_char(&mut self, code_point: char) -> Option<char> {
        self.filter_code_point(code_point as u32)
    }

    /// Filters one chunk of text, appending the result to `output`.
    pub fn filter_str(&mut self, chunk: &str, output: &mut String) {
        output.extend(chunk.chars().filter_map(|c| self.filter_char(c)));
    }
}

/// Incrementally decodes UTF-8 from a byte source.
///
/// Multi-byte sequences split between two reads are carried over to the
/// next one.
#[derive(Debug)]
pub struct Utf8Decoder<R> {
    source: R,
    buffer: Box<[u8]>,
    start: usize,
    end: usize,
    /// Number of bytes decoded before `buffer[start]`.
    position: usize,
    source_exhausted: bool,
}

impl<R: Read> Utf8Decoder<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: vec![0; READ_CHUNK_SIZE].into_boxed_slice(),
            start: 0,
            end: 0,
            position: 0,
            source_exhausted: false,
        }
    }

    /// Decodes the next code point together with its encoded length in bytes.
    pub fn next_code_point(&mut self) -> Result<Option<(char, usize)>, FatalError> {
        loop {
            let available = &self.buffer[self.start..self.end];

            if let Some(&first_byte) = available.first() {
                let width = utf8_sequence_width(first_byte);
                if width == 0 {
                    return Err(FatalError::Decode {
                        offset: self.position,
                    });
                }

                if available.len() >= width {
                    let code_point = std::str::from_utf8(&available[..width])
                        .ok()
                        .and_then(|sequence| sequence.chars().next())
                        .ok_or(FatalError::Decode {
                            offset: self.position,
                        })?;

                    self.start += width;
                    self.position += width;
                    return Ok(Some((code_point, width)));
                }

                if self.source_exhausted {
                    // Truncated sequence at the end of the input.
                    return Err(FatalError::Decode {
                        offset: self.position,
                    });
                }
            } else if self.source_exhausted {
                return Ok(None);
            }

            self.fill_buffer()?;
        }
    }

    fn fill_buffer(&mut self) -> Result<(), FatalError> {
        self.buffer.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;

        loop {
            match self.source.read(&mut self.buffer[self.end..]) {
                Ok(0) => {
                    self.source_exhausted = true;
                    return Ok(());
                }
                Ok(read) => {
                    self.end += read;
                    return Ok(());
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(FatalError::Io(error)),
            }
        }
    }
}

fn utf8_sequence_width(first_byte: u8) -> usize {
    match first_byte {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
