// Output sinks.
// Sink is the one capability the engine needs: take a whole byte span.
// StackBuf<N> owns a [u8; N]; SliceBuf wraps &mut [u8]. Both silently
// truncate on overflow and count what they dropped.
// FmtWrite / IoWrite adapt core::fmt::Write and embedded_io::Write,
// latching the first error instead of failing the print.

use core::fmt;

pub trait Sink {
    // consumes the whole span; never partial
    fn write(&mut self, bytes: &[u8]);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    // buffer filled up; `dropped` bytes were discarded
    Truncated { dropped: usize },
    // the wrapped writer reported an error
    Write,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Truncated { dropped } => write!(f, "output truncated, {} bytes dropped", dropped),
            SinkError::Write => write!(f, "underlying writer failed"),
        }
    }
}

// longest valid UTF-8 prefix; a truncated tail may split a char
fn valid_str(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
    }
}

// copy as much of `src` as fits at `dst[*pos..]`; returns bytes dropped
#[inline]
fn copy_truncating(dst: &mut [u8], pos: &mut usize, src: &[u8]) -> usize {
    let n = src.len().min(dst.len() - *pos);
    dst[*pos..*pos + n].copy_from_slice(&src[..n]);
    *pos += n;
    src.len() - n
}

pub struct StackBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
    dropped: usize,
}

impl<const N: usize> Default for StackBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StackBuf<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
            dropped: 0,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        valid_str(self.as_bytes())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.dropped = 0;
    }

    pub fn finish(&self) -> Result<&[u8], SinkError> {
        if self.dropped > 0 {
            return Err(SinkError::Truncated {
                dropped: self.dropped,
            });
        }
        Ok(self.as_bytes())
    }
}

impl<const N: usize> Sink for StackBuf<N> {
    fn write(&mut self, bytes: &[u8]) {
        self.dropped += copy_truncating(&mut self.buf, &mut self.len, bytes);
    }
}

impl<const N: usize> fmt::Write for StackBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Sink::write(self, s.as_bytes());
        Ok(())
    }
}

pub struct SliceBuf<'a> {
    buf: &'a mut [u8],
    pos: usize,
    dropped: usize,
}

impl<'a> SliceBuf<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            dropped: 0,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        valid_str(self.as_bytes())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    pub fn finish(&self) -> Result<usize, SinkError> {
        if self.dropped > 0 {
            return Err(SinkError::Truncated {
                dropped: self.dropped,
            });
        }
        Ok(self.pos)
    }
}

impl Sink for SliceBuf<'_> {
    fn write(&mut self, bytes: &[u8]) {
        self.dropped += copy_truncating(self.buf, &mut self.pos, bytes);
    }
}

impl fmt::Write for SliceBuf<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Sink::write(self, s.as_bytes());
        Ok(())
    }
}

// Bytes that are not valid UTF-8 (e.g. a non-ASCII fill byte) are
// written as U+FFFD.
pub struct FmtWrite<W> {
    inner: W,
    failed: bool,
}

impl<W: fmt::Write> FmtWrite<W> {
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn finish(self) -> Result<W, SinkError> {
        if self.failed {
            return Err(SinkError::Write);
        }
        Ok(self.inner)
    }

    fn write_utf8_lossy(&mut self, bytes: &[u8]) -> fmt::Result {
        for chunk in bytes.utf8_chunks() {
            self.inner.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                self.inner.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl<W: fmt::Write> Sink for FmtWrite<W> {
    fn write(&mut self, bytes: &[u8]) {
        if self.failed {
            return;
        }
        if self.write_utf8_lossy(bytes).is_err() {
            log::debug!("fmt: fmt::Write sink failed, dropping further output");
            self.failed = true;
        }
    }
}

#[cfg(feature = "embedded-io")]
pub use io::IoWrite;

#[cfg(feature = "embedded-io")]
mod io {
    use super::Sink;

    // blocking embedded-io writer; first error is kept, later writes skipped
    pub struct IoWrite<W: embedded_io::Write> {
        inner: W,
        error: Option<W::Error>,
    }

    impl<W: embedded_io::Write> IoWrite<W> {
        pub const fn new(inner: W) -> Self {
            Self { inner, error: None }
        }

        #[inline]
        pub fn get_mut(&mut self) -> &mut W {
            &mut self.inner
        }

        #[inline]
        pub fn take_error(&mut self) -> Option<W::Error> {
            self.error.take()
        }

        pub fn flush(&mut self) -> Result<(), W::Error> {
            if let Some(e) = self.error.take() {
                return Err(e);
            }
            self.inner.flush()
        }

        pub fn finish(mut self) -> Result<W, W::Error> {
            self.flush()?;
            Ok(self.inner)
        }
    }

    impl<W: embedded_io::Write> Sink for IoWrite<W> {
        fn write(&mut self, bytes: &[u8]) {
            if self.error.is_some() {
                return;
            }
            if let Err(e) = self.inner.write_all(bytes) {
                log::debug!("fmt: io sink failed, dropping further output");
                self.error = Some(e);
            }
        }
    }
}
