use crate::error::{DocumentError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::io::{BufWriter, Cursor};
use tracing::debug;

const TITLE: &str = "Summary of the Document";

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;
const TITLE_SIZE_PT: f64 = 18.0;
const BODY_SIZE_PT: f64 = 14.0;
const LINE_HEIGHT_MM: f64 = 7.0;

const PT_TO_MM: f64 = 0.352_778;

// Average advance of the Times face relative to the point size. Generous
// on purpose: wrapped lines must stay inside the printable width.
const AVG_GLYPH_EM: f64 = 0.55;

/// Composes the PDF export artifact: fixed title line, then the summary
/// word-wrapped to the printable width of an A4 page.
pub struct PdfComposer;

impl PdfComposer {
    pub fn compose(summary: &str) -> Result<Vec<u8>> {
        if summary.trim().is_empty() {
            return Err(DocumentError::InvalidState {
                message: "summary is empty".to_string(),
            });
        }

        let printable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let budget = Self::line_budget(printable_mm, BODY_SIZE_PT);
        let lines = Self::wrap(summary, budget);

        let (doc, page, layer) = PdfDocument::new(
            TITLE,
            Mm(PAGE_WIDTH_MM as f32),
            Mm(PAGE_HEIGHT_MM as f32),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::TimesRoman)
            .map_err(|e| DocumentError::Compose {
                message: e.to_string(),
            })?;

        let mut layer_ref = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

        layer_ref.use_text(TITLE, TITLE_SIZE_PT as f32, Mm(MARGIN_MM as f32), Mm(y as f32), &font);
        y -= 2.0 * LINE_HEIGHT_MM;

        for line in lines {
            if y < MARGIN_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Layer 1");
                layer_ref = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            layer_ref.use_text(line, BODY_SIZE_PT as f32, Mm(MARGIN_MM as f32), Mm(y as f32), &font);
            y -= LINE_HEIGHT_MM;
        }

        let mut writer = BufWriter::new(Cursor::new(Vec::new()));
        doc.save(&mut writer).map_err(|e| DocumentError::Compose {
            message: e.to_string(),
        })?;
        let bytes = writer
            .into_inner()
            .map_err(|e| DocumentError::Compose {
                message: e.to_string(),
            })?
            .into_inner();

        debug!("Composed PDF artifact: {} bytes", bytes.len());
        Ok(bytes)
    }

    /// Characters that fit on one line at the given point size.
    fn line_budget(printable_mm: f64, font_size_pt: f64) -> usize {
        let glyph_mm = font_size_pt * PT_TO_MM * AVG_GLYPH_EM;
        ((printable_mm / glyph_mm).floor() as usize).max(1)
    }

    /// Greedy word-wrap. Paragraph breaks are preserved; a word wider than
    /// a whole line is hard-split, the only way to keep it on the page.
    fn wrap(text: &str, max_chars: usize) -> Vec<String> {
        let mut lines = Vec::new();

        for paragraph in text.lines() {
            if paragraph.trim().is_empty() {
                lines.push(String::new());
                continue;
            }

            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                let word_len = word.chars().count();
                let current_len = current.chars().count();

                if current.is_empty() {
                    if word_len <= max_chars {
                        current.push_str(word);
                    } else {
                        Self::hard_split(word, max_chars, &mut lines, &mut current);
                    }
                } else if current_len + 1 + word_len <= max_chars {
                    current.push(' ');
                    current.push_str(word);
                } else {
                    lines.push(std::mem::take(&mut current));
                    if word_len <= max_chars {
                        current.push_str(word);
                    } else {
                        Self::hard_split(word, max_chars, &mut lines, &mut current);
                    }
                }
            }
            if !current.is_empty() {
                lines.push(current);
            }
        }

        lines
    }

    /// Split an oversized word into full-width chunks, leaving the last
    /// chunk in `current` so following words can share its line.
    fn hard_split(word: &str, max_chars: usize, lines: &mut Vec<String>, current: &mut String) {
        let chars: Vec<char> = word.chars().collect();
        let mut start = 0;
        while start + max_chars < chars.len() {
            lines.push(chars[start..start + max_chars].iter().collect());
            start += max_chars;
        }
        *current = chars[start..].iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_is_rejected() {
        assert!(matches!(
            PdfComposer::compose(""),
            Err(DocumentError::InvalidState { .. })
        ));
        assert!(matches!(
            PdfComposer::compose("   "),
            Err(DocumentError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_non_empty_summary_produces_artifact() {
        let bytes = PdfComposer::compose("A short summary of the document.").unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..4], b"%PDF");
    }

    #[test]
    fn test_long_summary_spans_pages() {
        let long = "A sentence that repeats itself to fill many lines. ".repeat(200);
        let bytes = PdfComposer::compose(&long).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_wrap_respects_line_budget() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        for line in PdfComposer::wrap(text, 15) {
            assert!(line.chars().count() <= 15, "overlong line: {:?}", line);
        }
    }

    #[test]
    fn test_wrap_breaks_on_words_not_characters() {
        let lines = PdfComposer::wrap("alpha beta gamma", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_wrap_hard_splits_oversized_words() {
        let lines = PdfComposer::wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
        for line in &lines {
            assert!(line.chars().count() <= 4);
        }
    }

    #[test]
    fn test_wrap_preserves_paragraph_breaks() {
        let lines = PdfComposer::wrap("first\n\nsecond", 20);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_line_budget_is_positive() {
        assert!(PdfComposer::line_budget(170.0, 14.0) > 0);
        assert_eq!(PdfComposer::line_budget(0.5, 200.0), 1);
    }
}
