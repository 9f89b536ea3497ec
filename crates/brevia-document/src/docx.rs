use crate::error::{DocumentError, Result};
use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;
use tracing::debug;

const TITLE: &str = "Summary of the Document";

// Run sizes are half-points: 28 is a 14pt title, 24 a 12pt body.
const TITLE_SIZE: usize = 28;
const BODY_SIZE: usize = 24;

/// Composes the word-processor export artifact: a bold title paragraph
/// followed by one paragraph per newline-delimited line of the summary.
pub struct DocxComposer;

impl DocxComposer {
    pub fn compose(summary: &str) -> Result<Vec<u8>> {
        if summary.trim().is_empty() {
            return Err(DocumentError::InvalidState {
                message: "summary is empty".to_string(),
            });
        }

        let mut docx = Docx::new().add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(TITLE).bold().size(TITLE_SIZE)),
        );

        for line in summary.split('\n') {
            docx = docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(line).size(BODY_SIZE)));
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| DocumentError::Compose {
                message: e.to_string(),
            })?;

        let bytes = cursor.into_inner();
        debug!("Composed DOCX artifact: {} bytes", bytes.len());
        Ok(bytes)
    }
}
