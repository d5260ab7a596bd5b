use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One labeled conjugation entry, keyed the way the interchange files are:
/// the governing verb/section/tense headers (absent until first seen), the
/// three register forms, and the 1-based source page.
#[derive(Debug, Clone, Serialize)]
pub struct VerbEntry {
    pub aditza: Option<String>,
    pub saila: Option<String>,
    pub aldia: Option<String>,
    pub zuka: String,
    pub hika_toka: String,
    pub hika_noka: String,
    pub orrialdea: u32,
}

/// Write all entries as a pretty-printed JSON array (4-space indent,
/// non-ASCII verbatim). No partial-output guarantee on failure.
pub fn write_entries(path: &Path, entries: &[VerbEntry]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, fmt);
    entries
        .serialize(&mut ser)
        .with_context(|| format!("Failed to serialize entries to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

// ── Tests ──
