use crate::error::{DocumentError, Result};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::path::Path;
use tracing::debug;

/// The one upload type the extractor accepts.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Turns an uploaded word-processor document into plain text.
pub struct DocxExtractor;

impl DocxExtractor {
    /// Declared media type for a path, judged from its extension — the
    /// terminal analogue of the browser's `file.type`.
    pub fn declared_media_type(path: &Path) -> Option<&'static str> {
        let extension = path.extension().and_then(|e| e.to_str())?;
        match extension.to_ascii_lowercase().as_str() {
            "docx" => Some(DOCX_MEDIA_TYPE),
            "doc" => Some("application/msword"),
            "pdf" => Some("application/pdf"),
            "txt" => Some("text/plain"),
            "md" => Some("text/markdown"),
            _ => None,
        }
    }

    /// Reject anything whose declared type is not the accepted
    /// word-processor format. Runs before any bytes are read, so a
    /// rejected upload has no side effects.
    pub fn ensure_supported(path: &Path) -> Result<()> {
        match Self::declared_media_type(path) {
            Some(DOCX_MEDIA_TYPE) => Ok(()),
            Some(other) => Err(DocumentError::UnsupportedFileType {
                media_type: other.to_string(),
            }),
            None => Err(DocumentError::UnsupportedFileType {
                media_type: "unknown".to_string(),
            }),
        }
    }

    /// Strip markup and structure from DOCX bytes, preserving paragraph
    /// breaks as newlines.
    pub fn extract_text(bytes: &[u8]) -> Result<String> {
        let docx = read_docx(bytes).map_err(|e| DocumentError::Parse {
            message: e.to_string(),
        })?;

        let mut paragraphs = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                let mut line = String::new();
                for paragraph_child in &paragraph.children {
                    if let ParagraphChild::Run(run) = paragraph_child {
                        for run_child in &run.children {
                            if let RunChild::Text(text) = run_child {
                                line.push_str(&text.text);
                            }
                        }
                    }
                }
                paragraphs.push(line);
            }
        }

        debug!("Extracted {} paragraphs", paragraphs.len());
        Ok(paragraphs.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::DocxComposer;

    #[test]
    fn test_docx_extension_is_supported() {
        assert!(DocxExtractor::ensure_supported(Path::new("report.docx")).is_ok());
        assert!(DocxExtractor::ensure_supported(Path::new("REPORT.DOCX")).is_ok());
    }

    #[test]
    fn test_other_extensions_are_rejected() {
        for name in ["notes.txt", "paper.pdf", "legacy.doc", "readme.md"] {
            let result = DocxExtractor::ensure_supported(Path::new(name));
            assert!(
                matches!(result, Err(DocumentError::UnsupportedFileType { .. })),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_extensionless_path_is_rejected() {
        let result = DocxExtractor::ensure_supported(Path::new("mystery"));
        assert!(matches!(
            result,
            Err(DocumentError::UnsupportedFileType { media_type }) if media_type == "unknown"
        ));
    }

    #[test]
    fn test_malformed_bytes_fail_with_parse_error() {
        let result = DocxExtractor::extract_text(b"this is not a zip archive");
        assert!(matches!(result, Err(DocumentError::Parse { .. })));
    }

    #[test]
    fn test_extracts_paragraphs_from_composed_document() {
        // The composer is the closest thing to a known-good document: a
        // title paragraph followed by one paragraph per line.
        let bytes = DocxComposer::compose("First paragraph.\nSecond paragraph.").unwrap();

        let text = DocxExtractor::extract_text(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Summary of the Document",
                "First paragraph.",
                "Second paragraph."
            ]
        );
    }
}
