use std::collections::VecDeque;
use std::io::Read;

use crate::preprocess::{CodePointFilter, Utf8Decoder};
use crate::{FatalError, Offset};

/// The maximum number of code points that can be peeked at once.
pub const MAX_LOOKAHEAD: usize = 3;

/// Room for [`MAX_LOOKAHEAD`] code points plus a few reconsumed ones.
pub const LOOKAHEAD_CAPACITY: usize = 8;

/// Reads filtered code points with bounded lookahead and pushback.
///
/// `None` is the EOF code point. Once the input is exhausted, or a fatal
/// error occurred, the reader keeps returning `None`.
#[derive(Debug)]
pub struct CodePointReader<R> {
    decoder: Utf8Decoder<R>,
    filter: CodePointFilter,
    /// Buffered code points, each with the position just past it.
    lookahead: VecDeque<(char, Offset)>,
    offset: Offset,
    position: Offset,
    previous_position: Offset,
    exhausted: bool,
    fatal_error: Option<FatalError>,
}

impl<R: Read> CodePointReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            decoder: Utf8Decoder::new(source),
            filter: CodePointFilter::new(),
            lookahead: VecDeque::with_capacity(LOOKAHEAD_CAPACITY),
            offset: Offset::default(),
            position: Offset::default(),
            previous_position: Offset::default(),
            exhausted: false,
            fatal_error: None,
        }
    }

    /// Consumes the next code point.
    pub fn next(&mut self) -> Option<char> {
        let (code_point, end) = match self.lookahead.pop_front() {
            Some(entry) => entry,
            None => (self.draw()?, self.offset),
        };
        self.previous_position = self.position;
        self.position = end;
        Some(code_point)
    }

    /// Returns the next code point without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let [next] = self.peek_n::<1>();
        next
    }

    /// Returns the next `N` code points without consuming them. Slots past
    /// the end of the input are `None`.
    pub fn peek_n<const N: usize>(&mut self) -> [Option<char>; N] {
        debug_assert!(N <= MAX_LOOKAHEAD);

        while self.lookahead.len() < N {
            match self.draw() {
                Some(code_point) => {
                    if !self.buffer(code_point, self.offset) {
                        break;
                    }
                }
                None => break,
            }
        }

        std::array::from_fn(|index| self.lookahead.get(index).map(|&(code_point, _)| code_point))
    }

    /// Pushes a code point back so that the next call to [`Self::next`]
    /// returns it.
    pub fn push(&mut self, code_point: char) {
        if self.lookahead.len() >= LOOKAHEAD_CAPACITY {
            self.fail(FatalError::LookaheadOverflow {
                capacity: LOOKAHEAD_CAPACITY,
            });
            return;
        }
        self.lookahead.push_front((code_point, self.position));
        self.position = self.previous_position;
    }

    /// Consumes and discards `n` code points.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// The position just past the last code point drawn from the source.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The position just past the last code point returned by [`Self::next`].
    ///
    /// Unlike [`Self::offset`] this does not move when peeking.
    pub fn position(&self) -> Offset {
        self.position
    }

    /// Returns the fatal error that ended the input, at most once.
    pub fn take_fatal_error(&mut self) -> Option<FatalError> {
        self.fatal_error.take()
    }

    fn buffer(&mut self, code_point: char, end: Offset) -> bool {
        if self.lookahead.len() >= LOOKAHEAD_CAPACITY {
            self.fail(FatalError::LookaheadOverflow {
                capacity: LOOKAHEAD_CAPACITY,
            });
            return false;
        }
        self.lookahead.push_back((code_point, end));
        true
    }

    /// Draws the next filtered code point from the source.
    fn draw(&mut self) -> Option<char> {
        while !self.exhausted {
            match self.decoder.next_code_point() {
                Ok(Some((code_point, byte_length))) => {
                    let filtered = self.filter.filter_char(code_point);
                    match filtered {
                        Some(filtered) => {
                            self.offset.advance(filtered, byte_length);
                            return Some(filtered);
                        }
                        // The LF of a CR LF pair still occupies a byte.
                        None => self.offset.byte += byte_length,
                    }
                }
                Ok(None) => self.exhausted = true,
                Err(error) => self.fail(error),
            }
        }
        None
    }

    fn fail(&mut self, error: FatalError) {
        tracing::debug!(target: "css_tokenizer", offset = %self.offset, "fatal error: {}", error);
        self.lookahead.clear();
        self.exhausted = true;
        if self.fatal_error.is_none() {
            self.fatal_error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> CodePointReader<&[u8]> {
        CodePointReader::new(input.as_bytes())
    }

    #[test]
    fn next_and_peek() {
        let mut reader = reader("abc");
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!(reader.next(), Some('a'));
        assert_eq!(reader.peek_n::<3>(), [Some('b'), Some('c'), None]);
        assert_eq!(reader.next(), Some('b'));
        assert_eq!(reader.next(), Some('c'));
        assert_eq!(reader.next(), None);
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn push_is_served_first() {
        let mut reader = reader("bc");
        assert_eq!(reader.next(), Some('b'));
        reader.push('b');
        assert_eq!(reader.peek_n::<2>(), [Some('b'), Some('c')]);
        assert_eq!(reader.next(), Some('b'));
        assert_eq!(reader.next(), Some('c'));
    }

    #[test]
    fn skip_consumes() {
        let mut reader = reader("abcd");
        reader.skip(3);
        assert_eq!(reader.next(), Some('d'));
        reader.skip(5);
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn input_is_filtered() {
        let mut reader = reader("a\r\nb\u{0000}");
        assert_eq!(reader.next(), Some('a'));
        assert_eq!(reader.next(), Some('\n'));
        assert_eq!(reader.next(), Some('b'));
        assert_eq!(reader.next(), Some('\u{FFFD}'));
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn offset_counts_only_newly_drawn_code_points() {
        let mut reader = reader("ab\ncd");
        reader.next();
        assert_eq!(reader.offset(), Offset::new(1, 1, 0));
        reader.push('a');
        reader.next();
        assert_eq!(reader.offset(), Offset::new(1, 1, 0));
        reader.skip(3);
        assert_eq!(reader.offset(), Offset::new(4, 1, 1));
    }

    #[test]
    fn position_ignores_peeked_code_points() {
        let mut reader = reader("a\nbc");
        assert_eq!(reader.next(), Some('a'));
        assert_eq!(reader.peek_n::<3>(), [Some('\n'), Some('b'), Some('c')]);
        assert_eq!(reader.offset(), Offset::new(4, 2, 1));
        assert_eq!(reader.position(), Offset::new(1, 1, 0));

        assert_eq!(reader.next(), Some('\n'));
        assert_eq!(reader.position(), Offset::new(2, 0, 1));
        reader.push('\n');
        assert_eq!(reader.position(), Offset::new(1, 1, 0));
        assert_eq!(reader.next(), Some('\n'));
        assert_eq!(reader.position(), Offset::new(2, 0, 1));
    }

    #[test]
    fn offset_counts_raw_bytes_of_cr_lf() {
        let mut reader = reader("a\r\nb");
        reader.skip(3);
        assert_eq!(reader.offset(), Offset::new(4, 1, 1));
    }

    #[test]
    fn overflow_is_fatal() {
        let mut reader = reader("a");
        for _ in 0..=LOOKAHEAD_CAPACITY {
            reader.push('x');
        }
        assert_eq!(reader.next(), None);
        assert!(matches!(
            reader.take_fatal_error(),
            Some(FatalError::LookaheadOverflow { .. })
        ));
        assert!(reader.take_fatal_error().is_none());
    }

    #[test]
    fn decode_error_latches_end_of_input() {
        let mut reader = CodePointReader::new(&b"a\xC0b"[..]);
        assert_eq!(reader.next(), Some('a'));
        assert_eq!(reader.next(), None);
        assert!(matches!(
            reader.take_fatal_error(),
            Some(FatalError::Decode { offset: 1 })
        ));
        assert_eq!(reader.next(), None);
    }
}
