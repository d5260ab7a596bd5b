use std::path::Path;

use anyhow::{anyhow, Context, Result};
use pdf_extract::{Document, MediaBox, OutputDev, OutputError, Transform};

/// One positioned word. `x0`/`top` are page-relative coordinates of the
/// word's first glyph, with y measured downward from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub x0: f64,
    pub top: f64,
}

/// All words of one page, in extraction order. `number` is the 1-based
/// PDF page number.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: u32,
    pub words: Vec<Word>,
}

/// Load a PDF and return each page's words with their coordinates.
pub fn extract_pages(path: &Path) -> Result<Vec<Page>> {
    let doc = Document::load(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut collector = WordCollector::default();
    pdf_extract::output_doc(&doc, &mut collector)
        .map_err(|e| anyhow!("Failed to extract text from {}: {}", path.display(), e))?;
    Ok(collector.pages)
}

/// Assembles the interpreter's positioned-character stream into words.
///
/// Word breaks follow the plain-text renderer's spacing heuristics: a
/// whitespace glyph, a horizontal gap wider than a tenth of the transformed
/// font size, or a vertical jump larger than half of it. The interpreter's
/// begin_word/end_word callbacks fire per show-text operator, not per visual
/// word, so they are ignored.
#[derive(Default)]
struct WordCollector {
    pages: Vec<Page>,
    page_height: f64,
    current: String,
    word_x0: f64,
    word_top: f64,
    last_end: f64,
    last_top: f64,
}

impl WordCollector {
    fn flush_word(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let word = Word {
            text: std::mem::take(&mut self.current),
            x0: self.word_x0,
            top: self.word_top,
        };
        if let Some(page) = self.pages.last_mut() {
            page.words.push(word);
        }
    }
}

impl OutputDev for WordCollector {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        self.pages.push(Page {
            number: page_num,
            words: Vec::new(),
        });
        self.page_height = media_box.ury - media_box.lly;
        self.last_end = 0.0;
        self.last_top = 0.0;
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        self.flush_word();
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        width: f64,
        _spacing: f64,
        font_size: f64,
        text: &str,
    ) -> Result<(), OutputError> {
        // Glyph origins arrive in PDF user space (y grows upward). The flip
        // ctm (1, 0, 0, -1, 0, height) only negates y, so apply it directly
        // instead of composing matrices.
        let x = trm.m31;
        let top = self.page_height - trm.m32;
        let vx = (trm.m11 + trm.m21) * font_size;
        let vy = (trm.m12 + trm.m22) * font_size;
        let tfs = (vx * vy).abs().sqrt();

        if text.chars().all(char::is_whitespace) {
            self.flush_word();
        } else {
            let gap = x > self.last_end + tfs * 0.1;
            let jump = (top - self.last_top).abs() > tfs * 0.5;
            if !self.current.is_empty() && (gap || jump) {
                self.flush_word();
            }
            if self.current.is_empty() {
                self.word_x0 = x;
                self.word_top = top;
            }
            self.current.push_str(text);
        }

        self.last_end = x + width * tfs;
        self.last_top = top;
        Ok(())
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}
