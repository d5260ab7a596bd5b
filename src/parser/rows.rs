use crate::pdf::Word;

/// Two words share a row while their tops stay within this band.
pub const Y_TOLERANCE: f64 = 3.0;

/// Group a page's words into visual rows by vertical proximity.
///
/// Input must be sorted by `(top, x0)`. A word joins the current row while
/// its `top` is within `Y_TOLERANCE` of the row's *first* word; the first
/// word outside the band starts a new row and becomes the new anchor, so
/// drift across a long row is bounded relative to the anchor, not a running
/// average. Rows come out in encounter order and are never empty.
pub fn group_into_rows(words: &[Word]) -> Vec<&[Word]> {
    let mut rows = Vec::new();
    if words.is_empty() {
        return rows;
    }

    let mut start = 0;
    let mut anchor = words[0].top;
    for (i, w) in words.iter().enumerate().skip(1) {
        if (w.top - anchor).abs() > Y_TOLERANCE {
            rows.push(&words[start..i]);
            start = i;
            anchor = w.top;
        }
    }
    rows.push(&words[start..]);

    rows
}

// ── Tests ──
