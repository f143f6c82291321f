//! Request framing over raw byte buffers.
//!
//! A request starts at the first non-whitespace byte and ends at the next
//! whitespace byte that is *not* a space. Spaces inside a request separate
//! tokens; any other whitespace (`\r`, `\n`, `\t`, `\v`, `\f`) terminates it.
//!
//! The predicate is independent of any transport so it can be driven by a
//! codec, a test, or a fuzzer alike.

use std::ops::Range;

/// Outcome of scanning a buffer for one request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framing {
    /// A full request occupies `range`; the terminator sits at `range.end`.
    Complete(Range<usize>),
    /// No terminated request yet. The first `skip` bytes are whitespace
    /// that can never belong to a request and may be discarded.
    Incomplete {
        /// Leading whitespace bytes.
        skip: usize,
    },
}

/// Whitespace as understood by the protocol (the C `isspace` set).
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[inline]
fn is_terminator(b: u8) -> bool {
    b != b' ' && is_space(b)
}

/// Scan `buf` for a complete request.
pub fn frame(buf: &[u8]) -> Framing {
    frame_from(buf, 0)
}

/// Scan `buf` for a complete request, assuming no terminator exists before
/// `resume`.
///
/// Codecs use `resume` to avoid rescanning bytes already known to hold no
/// terminator. Passing `0` is always correct.
pub fn frame_from(buf: &[u8], resume: usize) -> Framing {
    let Some(start) = buf.iter().position(|&b| !is_space(b)) else {
        return Framing::Incomplete { skip: buf.len() };
    };

    let from = resume.max(start + 1);
    if from >= buf.len() {
        return Framing::Incomplete { skip: start };
    }

    match buf[from..].iter().position(|&b| is_terminator(b)) {
        Some(offset) => Framing::Complete(start..from + offset),
        None => Framing::Incomplete { skip: start },
    }
}
