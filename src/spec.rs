// Placeholder spec parser: the `:...` part of `{:...}`.
//
// Grammar is `[#][[fill]align | fill<digit>][width][type]`, parsed in one
// forward pass with no backtracking. Anything unrecognised ends the current
// field and is left for the engine to skip when it scans to `}`.

use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary = 2,
    Octal = 8,
    Decimal = 10,
    Hex = 16,
}

impl Radix {
    #[inline]
    pub const fn base(self) -> u8 {
        self as u8
    }

    // literal emitted in alternate mode; decimal has none
    #[inline]
    pub const fn prefix(self) -> Option<Prefix> {
        match self {
            Radix::Binary => Some(Prefix::Binary),
            Radix::Octal => Some(Prefix::Octal),
            Radix::Hex => Some(Prefix::Hex),
            Radix::Decimal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    #[inline]
    const fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'<' => Some(Align::Left),
            b'>' => Some(Align::Right),
            b'^' => Some(Align::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Binary,
    Octal,
    Hex,
}

impl Prefix {
    #[inline]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Prefix::Binary => b"0b",
            Prefix::Octal => b"0",
            Prefix::Hex => b"0x",
        }
    }
}

// `alternate` only records that `#` was seen; the literal is picked from
// the radix once parsing is done (see `prefix`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    pub radix: Radix,
    pub align: Align,
    pub width: u32,
    pub fill: u8,
    pub alternate: bool,
    pub upper_case: bool,
}

impl Default for Spec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Spec {
    pub const DEFAULT: Self = Self {
        radix: Radix::Decimal,
        align: Align::Right,
        width: 0,
        fill: b' ',
        alternate: false,
        upper_case: false,
    };

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    #[inline]
    pub fn prefix(&self) -> Option<Prefix> {
        if self.alternate {
            self.radix.prefix()
        } else {
            None
        }
    }

    // reset, then parse from the byte right after `{`
    pub fn parse(&mut self, it: &mut Cursor<'_>) {
        self.reset();
        if it.peek(0) != b':' {
            return;
        }
        it.advance();
        self.parse_alternate(it);
        self.parse_fill_and_align(it);
        self.parse_width(it);
        self.parse_type(it);
    }

    fn parse_alternate(&mut self, it: &mut Cursor<'_>) {
        if it.peek(0) == b'#' {
            self.alternate = true;
            it.advance();
        }
    }

    fn parse_fill_and_align(&mut self, it: &mut Cursor<'_>) {
        if let Some(align) = Align::from_byte(it.peek(0)) {
            self.align = align;
            self.fill = b' ';
            it.advance();
        } else if let Some(align) = Align::from_byte(it.peek(1)) {
            self.fill = it.peek(0);
            self.align = align;
            it.advance_by(2);
        } else if it.peek(1).is_ascii_digit() {
            // fill with implicit right alignment, e.g. `{:08x}`
            self.fill = it.peek(0);
            it.advance();
        }
    }

    fn parse_width(&mut self, it: &mut Cursor<'_>) {
        while it.peek(0).is_ascii_digit() {
            let d = (it.peek(0) - b'0') as u32;
            self.width = self.width.saturating_mul(10).saturating_add(d);
            it.advance();
        }
    }

    fn parse_type(&mut self, it: &mut Cursor<'_>) {
        match it.peek(0) {
            b'x' => self.radix = Radix::Hex,
            b'X' => {
                self.radix = Radix::Hex;
                self.upper_case = true;
            }
            b'b' => self.radix = Radix::Binary,
            b'o' => self.radix = Radix::Octal,
            b'd' => {
                self.radix = Radix::Decimal;
                self.alternate = false;
            }
            _ => return,
        }
        it.advance();
    }
}
