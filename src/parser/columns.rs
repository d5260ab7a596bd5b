use crate::pdf::Word;

// Column boundaries (x0 coordinates). In the source layout the three
// registers start at x0 ≈ 63 (zuka), ≈ 183 (toka) and ≈ 351 (noka).
pub const COL2_THRESHOLD: f64 = 130.0;
pub const COL3_THRESHOLD: f64 = 270.0;

/// Split a row's words into the three register columns and render each as
/// text. The thresholds form a strict partition: `x0 < 130` is column 1,
/// `130 <= x0 < 270` column 2, `x0 >= 270` column 3. Words inside a column
/// are joined by single spaces in ascending `x0` order.
pub fn split_columns(row: &[Word]) -> (String, String, String) {
    let mut col1 = Vec::new();
    let mut col2 = Vec::new();
    let mut col3 = Vec::new();

    for w in row {
        if w.x0 < COL2_THRESHOLD {
            col1.push(w);
        } else if w.x0 < COL3_THRESHOLD {
            col2.push(w);
        } else {
            col3.push(w);
        }
    }

    (column_text(col1), column_text(col2), column_text(col3))
}

fn column_text(mut words: Vec<&Word>) -> String {
    words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
    words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ──
