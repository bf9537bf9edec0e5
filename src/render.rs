// Per-type rendering, resolved at compile time.
//
// Integers go through the numeric renderer and the alignment writer, text
// goes straight to the alignment writer, sequences print a fixed
// `[ 0x1, 0x2,]` hex listing. Own types either implement `Render` directly
// (and may call back into `Fmt::print`), or are rendered by a separate
// `Formatter<T>` routine through `Via`.

use core::fmt::Display;
use core::marker::PhantomData;

use crate::cursor::Cursor;
use crate::fmt::Fmt;
use crate::sink::Sink;

pub trait Render {
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>);
}

macro_rules! impl_render_int {
    ($($t:ty),*) => {$(
        impl Render for $t {
            #[inline]
            fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
                f.write_int(*self);
            }
        }
    )*};
}

impl_render_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Render for str {
    #[inline]
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        f.write_text(self.as_bytes());
    }
}

impl Render for char {
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        let mut utf8 = [0u8; 4];
        f.write_text(self.encode_utf8(&mut utf8).as_bytes());
    }
}

impl Render for bool {
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        f.write_text(if *self { &b"true"[..] } else { b"false" });
    }
}

// unconsumed part of the span
impl Render for Cursor<'_> {
    #[inline]
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        f.write_text(self.rest());
    }
}

impl<T: Render> Render for [T] {
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        f.write_raw(b"[");
        for item in self {
            f.print(" {:#x},", (item,));
        }
        f.println("]", ());
    }
}

impl<T: Render, const M: usize> Render for [T; M] {
    #[inline]
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        self.as_slice().render(f);
    }
}

impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        (**self).render(f);
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    #[inline]
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        (**self).render(f);
    }
}

#[cfg(feature = "alloc")]
mod owned {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Render;
    use crate::fmt::Fmt;
    use crate::sink::Sink;

    impl Render for String {
        #[inline]
        fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
            f.write_text(self.as_bytes());
        }
    }

    impl<T: Render> Render for Vec<T> {
        #[inline]
        fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
            self.as_slice().render(f);
        }
    }
}

// A rendering routine registered for `T` apart from `T` itself, for types
// that cannot (or should not) implement `Render`.
pub trait Formatter<T: ?Sized> {
    fn format<S: Sink, const N: usize>(f: &mut Fmt<S, N>, value: &T);
}

pub struct Via<'a, F, T: ?Sized> {
    value: &'a T,
    _formatter: PhantomData<F>,
}

impl<'a, F: Formatter<T>, T: ?Sized> Via<'a, F, T> {
    #[inline]
    pub const fn new(value: &'a T) -> Self {
        Self {
            value,
            _formatter: PhantomData,
        }
    }
}

impl<F: Formatter<T>, T: ?Sized> Render for Via<'_, F, T> {
    #[inline]
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        F::format(f, self.value);
    }
}

// core::fmt::Display bridge; output is cut at the scratch buffer size,
// backed off to the last whole UTF-8 char
pub struct Disp<T>(pub T);

impl<T: Display> Render for Disp<T> {
    #[inline]
    fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
        f.write_display(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::StackBuf;

    fn run(template: &str, arg: &dyn Fn(&mut Fmt<&mut StackBuf<128>>, &str)) -> StackBuf<128> {
        let mut out = StackBuf::<128>::new();
        let mut f = Fmt::new(&mut out);
        arg(&mut f, template);
        out
    }

    #[test]
    fn char_and_bool_are_text() {
        let out = run("{:>3}|{:<6}|", &|f, t| f.print(t, ('é', true)));
        // width counts bytes, and 'é' is two
        assert_eq!(out.as_str(), " é|true  |");
    }

    #[test]
    fn text_ignores_radix_and_prefix() {
        let out = run("{:#x}", &|f, t| f.print(t, ("abc",)));
        assert_eq!(out.as_str(), "abc");
    }

    #[test]
    fn sequence_is_hex_listing() {
        let out = run("data: {:>40}", &|f, t| f.print(t, ([1u8, 0x1f, 255],)));
        assert_eq!(out.as_str(), "data: [ 0x1, 0x1f, 0xff,]\n");
    }

    #[test]
    fn empty_sequence() {
        let empty: [u16; 0] = [];
        let out = run("{}", &|f, t| f.print(t, (&empty[..],)));
        assert_eq!(out.as_str(), "[]\n");
    }

    #[test]
    fn cursor_renders_rest() {
        let mut c = Cursor::from("key=value");
        c.scan_to(b'=');
        let out = run("[{:<7}]", &|f, t| f.print(t, (c,)));
        assert_eq!(out.as_str(), "[value  ]");
    }

    struct Point {
        x: i32,
        y: i32,
    }

    impl Render for Point {
        fn render<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>) {
            f.print("({}, {})", (self.x, self.y));
        }
    }

    #[test]
    fn user_render_reenters_engine() {
        let p = Point { x: -3, y: 4 };
        let out = run("p={} q={:x}", &|f, t| f.print(t, (&p, 255u8)));
        assert_eq!(out.as_str(), "p=(-3, 4) q=ff");
    }

    struct Celsius;

    impl Formatter<i16> for Celsius {
        fn format<S: Sink, const N: usize>(f: &mut Fmt<S, N>, value: &i16) {
            f.write_int(*value);
            f.write_raw("°C".as_bytes());
        }
    }

    #[test]
    fn registered_formatter_via_adapter() {
        let t = -12i16;
        let out = run("{:4}", &|f, tmpl| f.print(tmpl, (Via::<Celsius, _>::new(&t),)));
        assert_eq!(out.as_str(), " -12°C");
    }

    #[test]
    fn display_bridge_is_aligned() {
        let out = run("{:_^9}", &|f, t| f.print(t, (Disp(core::net::Ipv4Addr::LOCALHOST),)));
        assert_eq!(out.as_str(), "127.0.0.1");
        let out = run("{:_^7}", &|f, t| f.print(t, (Disp("ok"),)));
        assert_eq!(out.as_str(), "__ok___");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned_string_and_vec() {
        let text = alloc::string::String::from("hi");
        let out = run("{:*>5}", &|f, t| f.print(t, (&text,)));
        assert_eq!(out.as_str(), "***hi");
        let bytes = alloc::vec![1u8, 2];
        let out = run("{}", &|f, t| f.print(t, (&bytes,)));
        assert_eq!(out.as_str(), "[ 0x1, 0x2,]\n");
    }
}
