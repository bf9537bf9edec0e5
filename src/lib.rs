// smol-fmt: allocation-free `{}` formatting for no_std targets.
// cursor: bounds-tracked scanner over template bytes
// spec:   `{:#>8x}`-style placeholder spec parser
// num:    integer -> text in binary/octal/decimal/hex
// align:  prefix, fill and alignment around a rendered span
// render: per-type dispatch (Render), registered formatters, Display bridge
// fmt:    substitution engine (Fmt), argument tuples, fprint!/fprintln!
// sink:   output capability plus stack/slice/fmt::Write/embedded-io sinks

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod align;
pub mod cursor;
pub mod fmt;
pub mod num;
pub mod render;
pub mod sink;
pub mod spec;

pub use cursor::Cursor;
pub use fmt::{Args, Fmt, LINE_END, sprint};
pub use num::{Integer, SCRATCH_LEN};
pub use render::{Disp, Formatter, Render, Via};
pub use sink::{FmtWrite, Sink, SinkError, SliceBuf, StackBuf};
pub use spec::{Align, Prefix, Radix, Spec};

#[cfg(feature = "embedded-io")]
pub use sink::IoWrite;
