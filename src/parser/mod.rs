pub mod classify;
pub mod columns;
pub mod extract;
pub mod rows;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::output::VerbEntry;
use crate::pdf::Page;

/// Three-stage pipeline: positioned words → visual rows → classified rows →
/// labeled conjugation entries. Pages are processed strictly in order; the
/// classification context carries across them.
pub fn process_pages(pages: Vec<Page>) -> Result<Vec<VerbEntry>> {
    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut extractor = extract::Extractor::new();
    for page in pages {
        extractor.process_page(page);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(extractor.into_entries())
}

// ── Tests ──
