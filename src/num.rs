// Integer -> text, into a fixed scratch buffer.
// Decimal: repeated divide-by-10 from the tail, then moved to the front.
// Binary/octal/hex: shift-and-mask from the top digit, leading zeros skipped.
// Sign is always textual ('-' + magnitude), never a two's-complement pattern.

use crate::spec::Radix;

// widest supported integer (u128) in binary, plus a sign
pub const SCRATCH_LEN: usize = u128::BITS as usize + 1;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

// unsigned magnitude of an integer, the part that actually gets digits
pub trait Magnitude: Copy {
    const BITS: u32;

    fn is_zero(self) -> bool;

    // (quotient, remainder) of division by a small radix
    fn div_rem(self, radix: u8) -> (Self, u8);

    // `mask` applied to the value shifted right by `shift`; shift < BITS
    fn bits_at(self, shift: u32, mask: u8) -> u8;
}

pub trait Integer: Copy {
    type Magnitude: Magnitude;

    // longest rendering in any radix: one digit per bit plus a sign
    const MAX_TEXT_LEN: usize = <Self::Magnitude as Magnitude>::BITS as usize + 1;

    // (is_negative, magnitude)
    fn split(self) -> (bool, Self::Magnitude);
}

macro_rules! impl_magnitude {
    ($($t:ty),*) => {$(
        impl Magnitude for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn div_rem(self, radix: u8) -> (Self, u8) {
                let r = radix as $t;
                (self / r, (self % r) as u8)
            }

            #[inline]
            fn bits_at(self, shift: u32, mask: u8) -> u8 {
                ((self >> shift) as u8) & mask
            }
        }

        impl Integer for $t {
            type Magnitude = $t;

            #[inline]
            fn split(self) -> (bool, $t) {
                (false, self)
            }
        }
    )*};
}

// unsigned_abs keeps MIN well-defined: i8::MIN -> (true, 128)
macro_rules! impl_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl Integer for $t {
            type Magnitude = $u;

            #[inline]
            fn split(self) -> (bool, $u) {
                (self < 0, self.unsigned_abs())
            }
        }
    )*};
}

impl_magnitude!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

// Render `value` into the front of `buf`, returning the text length.
// Fails to compile when N cannot hold T in binary with a sign.
pub fn render_int<T: Integer, const N: usize>(
    buf: &mut [u8; N],
    value: T,
    radix: Radix,
    upper_case: bool,
) -> usize {
    const {
        assert!(
            N >= T::MAX_TEXT_LEN,
            "scratch buffer too small for this integer type"
        )
    };

    let (negative, magnitude) = value.split();
    let mut head = 0;
    if negative {
        buf[0] = b'-';
        head = 1;
    }

    let digits = if upper_case { DIGITS_UPPER } else { DIGITS_LOWER };
    head + match radix {
        Radix::Decimal => render_decimal(buf, head, magnitude),
        Radix::Hex => render_pow2(&mut buf[head..], magnitude, 4, digits),
        Radix::Octal => render_pow2(&mut buf[head..], magnitude, 3, digits),
        Radix::Binary => render_pow2(&mut buf[head..], magnitude, 1, digits),
    }
}

fn render_decimal<M: Magnitude>(buf: &mut [u8], head: usize, mut m: M) -> usize {
    // least significant digit first, from the tail
    let mut tail = buf.len();
    loop {
        let (q, d) = m.div_rem(10);
        tail -= 1;
        buf[tail] = b'0' + d;
        m = q;
        if m.is_zero() {
            break;
        }
    }
    let len = buf.len() - tail;
    buf.copy_within(tail.., head);
    len
}

fn render_pow2<M: Magnitude>(out: &mut [u8], m: M, bits: u32, digits: &[u8; 16]) -> usize {
    let mask = (1u8 << bits) - 1;
    let mut i = M::BITS.div_ceil(bits);

    // skip leading zero digits, but keep the last one
    while i > 1 && m.bits_at((i - 1) * bits, mask) == 0 {
        i -= 1;
    }

    let mut len = 0;
    while i > 0 {
        out[len] = digits[m.bits_at((i - 1) * bits, mask) as usize];
        len += 1;
        i -= 1;
    }
    len
}
