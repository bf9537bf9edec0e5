// Prefix, padding and fill around an already-rendered span.

use crate::sink::Sink;
use crate::spec::{Align, Spec};

// fill bytes go out in batches of this size
pub const FILL_CHUNK: usize = 16;

// pad = width - len, split per alignment into (before, after)
#[inline]
pub fn padding(align: Align, width: usize, len: usize) -> (usize, usize) {
    let pad = width.saturating_sub(len);
    match align {
        Align::Right => (pad, 0),
        Align::Left => (0, pad),
        Align::Center => (pad / 2, pad - pad / 2),
    }
}

// Prefix counts against the width; a width narrower than the prefix
// clamps to zero rather than wrapping.
pub fn write_aligned<S: Sink + ?Sized>(sink: &mut S, spec: &Spec, text: &[u8]) {
    let mut width = spec.width as usize;
    if let Some(prefix) = spec.prefix() {
        let p = prefix.as_bytes();
        sink.write(p);
        width = width.saturating_sub(p.len());
    }

    let (before, after) = padding(spec.align, width, text.len());
    write_fill(sink, spec.fill, before);
    sink.write(text);
    write_fill(sink, spec.fill, after);
}

pub fn write_fill<S: Sink + ?Sized>(sink: &mut S, fill: u8, mut count: usize) {
    let chunk = [fill; FILL_CHUNK];
    while count > 0 {
        let n = count.min(FILL_CHUNK);
        sink.write(&chunk[..n]);
        count -= n;
    }
}
