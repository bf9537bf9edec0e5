// Substitution engine.
//
// print() walks the template once per argument: copy literal bytes up to
// `{`, parse the spec, render the argument, skip to `}`. When arguments run
// out the rest of the template is copied verbatim, so surplus `{}` come out
// literally. A missing `{` drops the remaining arguments; a missing `}`
// ends the output right after the argument that was being rendered.
//
// One Fmt owns one sink, one Spec and the scratch buffer, all reused across
// placeholders. Render impls get `&mut Fmt` and may print re-entrantly;
// print() restores the caller's spec on the way out.

use core::ffi::CStr;
use core::fmt::{self, Write as _};

use crate::align::write_aligned;
use crate::cursor::Cursor;
use crate::num::{Integer, SCRATCH_LEN, render_int};
use crate::render::Render;
use crate::sink::{Sink, SliceBuf};
use crate::spec::Spec;

pub const LINE_END: &[u8] = b"\n";

pub struct Fmt<S, const N: usize = SCRATCH_LEN> {
    sink: S,
    spec: Spec,
    scratch: [u8; N],
}

// Progress of one print() call over its template.
pub struct Substitution<'t> {
    it: Cursor<'t>,
    live: bool,
    rendered: usize,
}

impl<S: Sink> Fmt<S> {
    // scratch sized for every built-in integer type
    pub const fn new(sink: S) -> Self {
        Self::with_scratch(sink)
    }
}

impl<S: Sink, const N: usize> Fmt<S, N> {
    // N below an integer type's MAX_TEXT_LEN fails to compile at the
    // first print of that type
    pub const fn with_scratch(sink: S) -> Self {
        Self {
            sink,
            spec: Spec::DEFAULT,
            scratch: [0u8; N],
        }
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.sink
    }

    // spec of the placeholder currently being rendered
    #[inline]
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    pub fn print<A: Args>(&mut self, template: &str, args: A) {
        self.print_cursor(Cursor::from(template), args);
    }

    pub fn println<A: Args>(&mut self, template: &str, args: A) {
        self.print(template, args);
        self.sink.write(LINE_END);
    }

    pub fn print_bytes<A: Args>(&mut self, template: &[u8], args: A) {
        self.print_cursor(Cursor::new(template), args);
    }

    pub fn print_cstr<A: Args>(&mut self, template: &CStr, args: A) {
        self.print_cursor(Cursor::from(template), args);
    }

    pub fn print_cursor<A: Args>(&mut self, it: Cursor<'_>, args: A) {
        let outer = self.spec;
        let mut pass = Substitution {
            it,
            live: true,
            rendered: 0,
        };

        args.substitute(self, &mut pass);

        if pass.live {
            // out of arguments: the rest is literal, placeholders included
            let rest = pass.it.rest();
            if rest.contains(&b'{') {
                log::trace!("fmt: placeholders without arguments at byte {}", pass.it.position());
            }
            self.sink.write(rest);
        } else if pass.rendered < A::LEN {
            log::debug!("fmt: {} surplus argument(s) dropped", A::LEN - pass.rendered);
        }

        self.spec = outer;
    }

    // One argument against the next placeholder. No-op once the pass ended.
    pub fn substitute<R: Render + ?Sized>(&mut self, pass: &mut Substitution<'_>, arg: &R) {
        if !pass.live {
            return;
        }

        let it = &mut pass.it;
        let start = it.position();
        let found = it.skip_past(b'{');
        if !found || it.is_empty() {
            self.sink.write(it.since(start));
            pass.live = false;
            return;
        }
        let literal = it.since(start);
        self.sink.write(&literal[..literal.len() - 1]);

        self.spec.parse(it);
        arg.render(self);
        pass.rendered += 1;

        if !pass.it.skip_past(b'}') {
            log::warn!(
                "fmt: unterminated placeholder at byte {}, output truncated",
                pass.it.position()
            );
            pass.live = false;
        }
    }

    // Integer through the numeric renderer and the alignment writer,
    // using the active spec.
    pub fn write_int<T: Integer>(&mut self, value: T) {
        let len = render_int(&mut self.scratch, value, self.spec.radix, self.spec.upper_case);
        write_aligned(&mut self.sink, &self.spec, &self.scratch[..len]);
    }

    // Text is padded and aligned; radix and `#` do not apply.
    pub fn write_text(&mut self, text: &[u8]) {
        let spec = self.text_spec();
        write_aligned(&mut self.sink, &spec, text);
    }

    // Display output rendered into the scratch buffer, then aligned as text.
    // A failing Display impl emits nothing; a cut lands on a char boundary.
    pub fn write_display<T: fmt::Display + ?Sized>(&mut self, value: &T) {
        let mut out = SliceBuf::new(&mut self.scratch);
        if write!(out, "{}", value).is_err() {
            log::debug!("fmt: display impl failed after {} bytes, dropped", out.len());
            return;
        }
        let truncated = out.is_truncated();
        let mut len = out.len();
        if truncated {
            log::debug!("fmt: display output cut at {} bytes", N);
            if let Err(e) = core::str::from_utf8(&self.scratch[..len]) {
                len = e.valid_up_to();
            }
        }
        let spec = self.text_spec();
        write_aligned(&mut self.sink, &spec, &self.scratch[..len]);
    }

    #[inline]
    fn text_spec(&self) -> Spec {
        Spec {
            alternate: false,
            ..self.spec
        }
    }

    // straight to the sink, no spec applied
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.sink.write(bytes);
    }
}

impl<S: Sink, const N: usize> Sink for Fmt<S, N> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.sink.write(bytes);
    }
}

impl<S: Sink, const N: usize> fmt::Write for Fmt<S, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write(s.as_bytes());
        Ok(())
    }
}

// Argument lists are tuples of Render values; `()` means no arguments.
pub trait Args {
    const LEN: usize;

    fn substitute<S: Sink, const N: usize>(&self, f: &mut Fmt<S, N>, pass: &mut Substitution<'_>);
}

impl Args for () {
    const LEN: usize = 0;

    #[inline]
    fn substitute<S: Sink, const N: usize>(&self, _: &mut Fmt<S, N>, _: &mut Substitution<'_>) {}
}

macro_rules! impl_args {
    ($len:expr; $($t:ident $v:ident),+) => {
        impl<$($t: Render),+> Args for ($($t,)+) {
            const LEN: usize = $len;

            fn substitute<S: Sink, const N: usize>(
                &self,
                f: &mut Fmt<S, N>,
                pass: &mut Substitution<'_>,
            ) {
                let ($($v,)+) = self;
                $(f.substitute(pass, $v);)+
            }
        }
    };
}

impl_args!(1; A a);
impl_args!(2; A a, B b);
impl_args!(3; A a, B b, C c);
impl_args!(4; A a, B b, C c, D d);
impl_args!(5; A a, B b, C c, D d, E e);
impl_args!(6; A a, B b, C c, D d, E e, F0 f0);
impl_args!(7; A a, B b, C c, D d, E e, F0 f0, G g);
impl_args!(8; A a, B b, C c, D d, E e, F0 f0, G g, H h);
impl_args!(9; A a, B b, C c, D d, E e, F0 f0, G g, H h, I i);
impl_args!(10; A a, B b, C c, D d, E e, F0 f0, G g, H h, I i, J j);
impl_args!(11; A a, B b, C c, D d, E e, F0 f0, G g, H h, I i, J j, K k);
impl_args!(12; A a, B b, C c, D d, E e, F0 f0, G g, H h, I i, J j, K k, L l);

// print into a borrowed slice via closure; returns bytes written
pub fn sprint(buf: &mut [u8], f: impl FnOnce(&mut Fmt<&mut SliceBuf<'_>>)) -> usize {
    let mut out = SliceBuf::new(buf);
    f(&mut Fmt::new(&mut out));
    out.len()
}

#[macro_export]
macro_rules! fprint {
    ($fmt:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $fmt.print($template, ($(&$arg,)*))
    };
}

#[macro_export]
macro_rules! fprintln {
    ($fmt:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $fmt.println($template, ($(&$arg,)*))
    };
}
