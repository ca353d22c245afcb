//! Failure message rendering.

use std::fmt::{self, Display, Write};

/// `expected:<{expected}> but was:<{actual}>`
pub(crate) fn expected_was(expected: &dyn Display, actual: &dyn Display) -> String {
    format!("expected:<{expected}> but was:<{actual}>")
}

/// Render `items` as `[a, b, c]`, eliding everything past `limit`.
pub(crate) fn sequence<D: Display>(items: &[D], limit: usize) -> String {
    let mut out = String::from("[");
    let shown = items.len().min(limit);
    for (i, item) in items[..shown].iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{item}");
    }
    let hidden = items.len() - shown;
    if hidden > 0 {
        if shown > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "... ({hidden} more)");
    }
    out.push(']');
    out
}

/// Display adapter over a rendered sequence, so it can be passed where a
/// single value is expected.
pub(crate) struct Seq<'a, D> {
    pub(crate) items: &'a [D],
    pub(crate) limit: usize,
}

impl<D: Display> Display for Seq<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&sequence(self.items, self.limit))
    }
}
