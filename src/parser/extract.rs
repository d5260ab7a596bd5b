use tracing::debug;

use crate::output::VerbEntry;
use crate::parser::classify::{self, RowKind};
use crate::parser::{columns, rows};
use crate::pdf::Page;

/// Rolling classification state. The most recent verb/section/tense header
/// governs every following data row until superseded, across page breaks;
/// slots are never cleared mid-document.
#[derive(Debug, Default)]
struct Context {
    verb: Option<String>,
    section: Option<String>,
    tense: Option<String>,
}

/// Walks classified rows in document order and accumulates verb-form
/// entries. Pages must be fed in ascending order; rows within a page are
/// processed top to bottom.
pub struct Extractor {
    ctx: Context,
    entries: Vec<VerbEntry>,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            ctx: Context::default(),
            entries: Vec::new(),
        }
    }

    pub fn process_page(&mut self, mut page: Page) {
        page.words
            .sort_by(|a, b| a.top.total_cmp(&b.top).then(a.x0.total_cmp(&b.x0)));

        for row in rows::group_into_rows(&page.words) {
            let (kind, text) = classify::classify_row(row);
            debug!("page {} {:?}: {}", page.number, kind, text);

            match kind {
                RowKind::Verb => self.ctx.verb = Some(text),
                RowKind::Section => self.ctx.section = Some(text),
                RowKind::Tense => self.ctx.tense = Some(text),
                RowKind::Data => {
                    let (zuka, toka, noka) = columns::split_columns(row);
                    // Keep only rows that filled all three registers.
                    if !zuka.is_empty() && !toka.is_empty() && !noka.is_empty() {
                        self.entries.push(VerbEntry {
                            aditza: self.ctx.verb.clone(),
                            saila: self.ctx.section.clone(),
                            aldia: self.ctx.tense.clone(),
                            zuka,
                            hika_toka: toka,
                            hika_noka: noka,
                            orrialdea: page.number,
                        });
                    }
                }
                RowKind::Footer | RowKind::Other => {}
            }
        }
    }

    pub fn into_entries(self) -> Vec<VerbEntry> {
        self.entries
    }
}

// ── Tests ──
