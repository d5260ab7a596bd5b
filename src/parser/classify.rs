use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::columns;
use crate::pdf::Word;

// Page markers like "–12–" (en-dash delimited). Matched against the row
// text BEFORE footnote stripping: stripping first would eat the closing
// digits and misroute real footers.
static FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"–\d+–").unwrap());
// Grammatical-case section headers: "NOR", "NOR-NORI", "(NOR-NORK", "*NOR…".
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\(\*]?NOR").unwrap());
// Trailing footnote-marker digits.
static FOOTNOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+$").unwrap());
// A conjugated form: lowercase letters, commas, parentheses and hyphens
// only. No digits, periods or uppercase.
static VERB_FORM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z(),\-]+$").unwrap());
// Row tokenizer for the vocabulary fallback.
static ROW_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,()]+").unwrap());
static COMMA_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

// Tense/mood headers ("ALEGIAZKO" is the shorter dialectal spelling).
const TENSE_KEYWORDS: &[&str] = &["ORAINALDIA", "IRAGANALDIA", "ALEGIAZKOA", "ALEGIAZKO"];

// Document-section titles; carry no context and emit nothing.
const TITLE_PREFIXES: &[&str] = &["Adizkera trinko", "Adizki alokutiboak"];

// The closed set of verb names appearing in the document, including the
// asterisk-prefixed auxiliary labels and parenthesized variant forms.
const KNOWN_VERBS: &[&str] = &[
    "izan",
    "*edin aditz laguntzailea",
    "*edun",
    "*-i- aditz laguntzailea",
    "*ezan aditz laguntzailea",
    "*iro-",
    "Egon",
    "Etorri",
    "Ibili",
    "Joan",
    "Atxeki",
    "Jarraiki (Jarraitu)",
    "Ekin",
    "Jari(n), Jario, Jariatu",
    "Etzan",
    "Eduki",
    "Ekarri",
    "Eraman",
    "Erabili",
    "Ezagutu",
    "Egin",
    "Ikusi",
    "Jakin",
    "Entzun",
    "Erakutsi",
    "Eroan",
    "Ihardun",
    "Iharduki",
    "Erauntsi",
    "Eutsi",
    "Iraun",
    "Irudi",
    "Iritzi",
    "*Io",
    "Erran",
];

static KNOWN_VERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KNOWN_VERBS.iter().copied().collect());

/// Individual words of the verb names, as notes can repeat them in isolation.
static VERB_NAME_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let split = Regex::new(r"[\s,]+").unwrap();
    let mut words = HashSet::new();
    for name in KNOWN_VERBS {
        for part in split.split(name) {
            let cleaned = part.trim_matches(['(', ')']);
            if !cleaned.is_empty() {
                words.insert(cleaned.to_string());
            }
        }
    }
    words
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Verb,
    Section,
    Tense,
    Footer,
    Data,
    Other,
}

/// Classify one visual row and return its normalized text.
///
/// The rules run in fixed precedence order, first match wins: footer,
/// known verb name, section header, tense header, document title, data row,
/// and finally `Other` for anything else. Unrecognized content is tolerated
/// by exclusion; nothing here fails.
pub fn classify_row(row: &[Word]) -> (RowKind, String) {
    let text = row_text(row);
    let clean = strip_footnotes(&text);

    if FOOTER_RE.is_match(&text) {
        return (RowKind::Footer, clean);
    }

    if KNOWN_VERB_SET.contains(clean.as_str()) {
        return (RowKind::Verb, clean);
    }

    // A handful of tokens that are all pieces of known verb names: accept
    // only when the reassembled line is itself a known name, which guards
    // against partial overlaps with header vocabulary.
    let tokens: Vec<&str> = ROW_TOKEN_RE
        .split(&clean)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() <= 4
        && tokens
            .iter()
            .all(|t| VERB_NAME_WORDS.contains(*t) || t.starts_with('*'))
        && KNOWN_VERB_SET.contains(clean.as_str())
    {
        return (RowKind::Verb, clean);
    }

    if SECTION_RE.is_match(&clean) {
        return (RowKind::Section, clean);
    }

    if TENSE_KEYWORDS.iter().any(|kw| clean.starts_with(kw)) {
        return (RowKind::Tense, clean);
    }

    if TITLE_PREFIXES.iter().any(|p| clean.starts_with(p)) {
        return (RowKind::Other, clean);
    }

    if is_data_row(row) {
        return (RowKind::Data, clean);
    }

    (RowKind::Other, clean)
}

/// Join a row's words in reading order (ascending x0).
fn row_text(row: &[Word]) -> String {
    let mut sorted: Vec<&Word> = row.iter().collect();
    sorted.sort_by(|a, b| a.x0.total_cmp(&b.x0));
    sorted
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_footnotes(text: &str) -> String {
    FOOTNOTE_RE.replace(text, "").trim().to_string()
}

/// A conjugation row populates all three register columns, every word
/// matches the verb-form character class, and each column reads as
/// comma-separated single forms rather than prose.
fn is_data_row(row: &[Word]) -> bool {
    let (zuka, toka, noka) = columns::split_columns(row);
    if zuka.is_empty() || toka.is_empty() || noka.is_empty() {
        return false;
    }
    if !row.iter().all(|w| VERB_FORM_RE.is_match(&w.text)) {
        return false;
    }
    let cols = [&zuka, &toka, &noka];
    let result = cols.into_iter().all(|c| is_verb_column(c));
    result
}

/// Comma-separated elements of a register column must each be a single
/// token. The document interleaves prose notes at the data indentation
/// ("bezalako adizkerei dagokien"), and those must not become records.
fn is_verb_column(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    for part in COMMA_SPLIT_RE.split(text) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if part.contains(' ') {
            return false;
        }
        if !VERB_FORM_RE.is_match(part) {
            return false;
        }
    }
    true
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x0: f64) -> Word {
        Word {
            text: text.to_string(),
            x0,
            top: 100.0,
        }
    }

    fn data_row() -> Vec<Word> {
        vec![
            word("nindagon", 63.0),
            word("nindagok,", 183.0),
            word("nindagon", 230.0),
            word("nindagon", 351.0),
        ]
    }

    #[test]
    fn footer_row() {
        let (kind, _) = classify_row(&[word("–12–", 250.0)]);
        assert_eq!(kind, RowKind::Footer);
    }

    #[test]
    fn footer_survives_trailing_footnote_digits() {
        // Footnote stripping must not run before the footer check, or the
        // trailing digits of the marker itself would vanish.
        let row = [word("–7–", 250.0), word("3", 400.0)];
        let (kind, text) = classify_row(&row);
        assert_eq!(kind, RowKind::Footer);
        assert_eq!(text, "–7–");
    }

    #[test]
    fn known_verb_name() {
        let (kind, text) = classify_row(&[word("Egon", 63.0)]);
        assert_eq!(kind, RowKind::Verb);
        assert_eq!(text, "Egon");
    }

    #[test]
    fn verb_name_with_footnote_marker() {
        let (kind, text) = classify_row(&[word("Iraun1", 63.0)]);
        assert_eq!(kind, RowKind::Verb);
        assert_eq!(text, "Iraun");
    }

    #[test]
    fn auxiliary_verb_labels() {
        let (kind, _) = classify_row(&[word("*edun", 63.0)]);
        assert_eq!(kind, RowKind::Verb);

        let row = [
            word("*ezan", 63.0),
            word("aditz", 110.0),
            word("laguntzailea", 150.0),
        ];
        let (kind, text) = classify_row(&row);
        assert_eq!(kind, RowKind::Verb);
        assert_eq!(text, "*ezan aditz laguntzailea");
    }

    #[test]
    fn multi_word_verb_name() {
        let row = [
            word("Jari(n),", 63.0),
            word("Jario,", 120.0),
            word("Jariatu", 170.0),
        ];
        let (kind, text) = classify_row(&row);
        assert_eq!(kind, RowKind::Verb);
        assert_eq!(text, "Jari(n), Jario, Jariatu");
    }

    #[test]
    fn verb_name_words_alone_are_not_a_verb() {
        // "Jario" is in the token vocabulary but is not a known verb name on
        // its own; the fallback must stay conservative.
        let (kind, _) = classify_row(&[word("Jario", 63.0)]);
        assert_eq!(kind, RowKind::Other);
    }

    #[test]
    fn section_headers() {
        for text in ["NOR", "NOR-NORI", "(NOR-NORK", "*NOR-NORI-NORK"] {
            let (kind, _) = classify_row(&[word(text, 63.0)]);
            assert_eq!(kind, RowKind::Section, "expected Section for {text:?}");
        }
    }

    #[test]
    fn tense_headers() {
        for text in ["ORAINALDIA", "IRAGANALDIA", "ALEGIAZKOA", "ALEGIAZKO"] {
            let (kind, _) = classify_row(&[word(text, 63.0)]);
            assert_eq!(kind, RowKind::Tense, "expected Tense for {text:?}");
        }
    }

    #[test]
    fn tense_header_with_continuation() {
        let row = [word("IRAGANALDIA", 63.0), word("(hurbila)", 160.0)];
        let (kind, text) = classify_row(&row);
        assert_eq!(kind, RowKind::Tense);
        assert_eq!(text, "IRAGANALDIA (hurbila)");
    }

    #[test]
    fn document_titles_are_other() {
        let row = [word("Adizkera", 63.0), word("trinkoak", 130.0)];
        let (kind, _) = classify_row(&row);
        assert_eq!(kind, RowKind::Other);

        let row = [word("Adizki", 63.0), word("alokutiboak", 120.0)];
        let (kind, _) = classify_row(&row);
        assert_eq!(kind, RowKind::Other);
    }

    #[test]
    fn three_column_conjugation_row_is_data() {
        let (kind, _) = classify_row(&data_row());
        assert_eq!(kind, RowKind::Data);
    }

    #[test]
    fn row_text_orders_by_x0() {
        let row = [
            word("nindagon", 351.0),
            word("nindagok,", 183.0),
            word("nindagon", 63.0),
            word("nindagon", 230.0),
        ];
        let (kind, text) = classify_row(&row);
        assert_eq!(kind, RowKind::Data);
        assert_eq!(text, "nindagon nindagok, nindagon nindagon");
    }

    #[test]
    fn prose_note_in_a_column_is_other() {
        // All words pass the character class, but column 2 holds a
        // space-separated phrase rather than comma-separated forms.
        let row = [
            word("zen", 63.0),
            word("bezalako", 183.0),
            word("adizkerei", 215.0),
            word("dagokien", 248.0),
            word("zun", 351.0),
        ];
        let (kind, _) = classify_row(&row);
        assert_eq!(kind, RowKind::Other);
    }

    #[test]
    fn digits_disqualify_a_data_row() {
        let mut row = data_row();
        row[1].text = "12".to_string();
        let (kind, _) = classify_row(&row);
        assert_eq!(kind, RowKind::Other);
    }

    #[test]
    fn uppercase_disqualifies_a_data_row() {
        let mut row = data_row();
        row[0].text = "Nindagon".to_string();
        let (kind, _) = classify_row(&row);
        assert_eq!(kind, RowKind::Other);
    }

    #[test]
    fn incomplete_column_row_is_other() {
        // Only columns 1 and 2 populated.
        let row = [word("nindagon", 63.0), word("nindagok", 183.0)];
        let (kind, _) = classify_row(&row);
        assert_eq!(kind, RowKind::Other);
    }

    #[test]
    fn footer_wins_over_any_other_shape() {
        let row = [
            word("nindagon", 63.0),
            word("–3–", 183.0),
            word("nindagon", 351.0),
        ];
        let (kind, _) = classify_row(&row);
        assert_eq!(kind, RowKind::Footer);
    }

    #[test]
    fn comma_separated_forms_pass_the_column_check() {
        assert!(is_verb_column("zaridak, zeridak"));
        assert!(!is_verb_column("bezalako adizkerei dagokien"));
        assert!(!is_verb_column(""));
    }
}
