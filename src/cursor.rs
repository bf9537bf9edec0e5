// Bounds-tracked, forward-only view over template bytes.
// All template scanning goes through here; nothing reads past `text.len()`.

use core::ffi::CStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a [u8],
    head: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub const fn new(text: &'a [u8]) -> Self {
        Self { text, head: 0 }
    }

    // bound at the first NUL, or the whole slice if there is none
    pub fn until_nul(text: &'a [u8]) -> Self {
        let mut len = 0;
        while len < text.len() && text[len] != 0 {
            len += 1;
        }
        Self::new(&text[..len])
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.head
    }

    #[inline]
    pub const fn remaining(&self) -> usize {
        self.text.len() - self.head
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    // whole text the cursor was built over
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    // unconsumed tail
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.text[self.head..]
    }

    // bytes between an earlier position and head
    #[inline]
    pub fn since(&self, start: usize) -> &'a [u8] {
        &self.text[start.min(self.head)..self.head]
    }

    // byte at head, then step forward; step is clamped to the bound
    pub fn advance_by(&mut self, step: usize) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let b = self.text[self.head];
        self.head += step.min(self.remaining());
        Some(b)
    }

    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        self.advance_by(1)
    }

    // out-of-bounds reads yield NUL, which no spec token matches
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.head
            .checked_add(offset)
            .and_then(|i| self.text.get(i))
            .copied()
            .unwrap_or(0)
    }

    // consume up to and including `delim`; returns the new head
    pub fn scan_to(&mut self, delim: u8) -> usize {
        while let Some(b) = self.advance() {
            if b == delim {
                break;
            }
        }
        self.head
    }

    // like scan_to, but reports whether `delim` was actually consumed
    pub fn skip_past(&mut self, delim: u8) -> bool {
        while let Some(b) = self.advance() {
            if b == delim {
                return true;
            }
        }
        false
    }
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(text: &'a [u8]) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a> From<&'a CStr> for Cursor<'a> {
    fn from(text: &'a CStr) -> Self {
        Self::new(text.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_bound() {
        let mut c = Cursor::new(b"ab");
        assert_eq!(c.advance(), Some(b'a'));
        assert_eq!(c.advance(), Some(b'b'));
        assert_eq!(c.advance(), None);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn advance_by_clamps_step() {
        let mut c = Cursor::new(b"abc");
        assert_eq!(c.advance_by(2), Some(b'a'));
        assert_eq!(c.position(), 2);
        assert_eq!(c.advance_by(5), Some(b'c'));
        assert!(c.is_empty());
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn peek_past_end_is_nul() {
        let c = Cursor::new(b"x");
        assert_eq!(c.peek(0), b'x');
        assert_eq!(c.peek(1), 0);
        assert_eq!(c.peek(usize::MAX), 0);
    }

    #[test]
    fn scan_to_consumes_delimiter() {
        let mut c = Cursor::new(b"ab{cd}");
        let start = c.position();
        assert_eq!(c.scan_to(b'{'), 3);
        assert_eq!(c.since(start), b"ab{");
        assert_eq!(c.rest(), b"cd}");
    }

    #[test]
    fn scan_to_missing_exhausts() {
        let mut c = Cursor::new(b"abc");
        assert_eq!(c.scan_to(b'}'), 3);
        assert!(c.is_empty());
        assert_eq!(c.rest(), b"");
    }

    #[test]
    fn skip_past_reports_match() {
        let mut c = Cursor::new(b"a}b");
        assert!(c.skip_past(b'}'));
        assert_eq!(c.rest(), b"b");
        assert!(!c.skip_past(b'}'));
        assert!(c.is_empty());
    }

    #[test]
    fn until_nul_bounds_text() {
        let c = Cursor::until_nul(b"hi\0junk");
        assert_eq!(c.as_bytes(), b"hi");
        let c = Cursor::until_nul(b"no terminator");
        assert_eq!(c.remaining(), 13);
    }

    #[test]
    fn from_cstr() {
        let c = Cursor::from(c"hello");
        assert_eq!(c.as_bytes(), b"hello");
    }
}
