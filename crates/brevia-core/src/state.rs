use uuid::Uuid;

/// Target format for an export artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Docx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Docx, ExportFormat::Pdf];

    /// Artifacts are always written under these fixed names.
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "summary.docx",
            ExportFormat::Pdf => "summary.pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "DOCX",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// The single tagged state of the UI shell.
///
/// The original surface tracked a loading flag and a dialog flag as
/// independent booleans; folding them into one variant makes combinations
/// like "loading while the export dialog is open" unrepresentable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// No input yet.
    #[default]
    Idle,

    /// Input text present, no summary yet.
    Editing,

    /// One exchange outstanding. `exchange` identifies it so results from
    /// anything else are discarded.
    Summarizing { exchange: Uuid },

    /// A summary is available.
    Ready,

    /// Export format dialog is open. `selected` indexes the
    /// DOCX / PDF / Cancel row.
    ExportChoice { selected: usize },

    /// Upload path dialog is open.
    UploadPrompt,
}

impl Phase {
    /// An exchange is outstanding.
    pub fn is_summarizing(&self) -> bool {
        matches!(self, Self::Summarizing { .. })
    }

    /// A modal dialog owns the keyboard.
    pub fn dialog_open(&self) -> bool {
        matches!(self, Self::ExportChoice { .. } | Self::UploadPrompt)
    }

    /// Whether a submit may start an exchange right now. Guarded on the
    /// phase itself, not just the input: while one exchange is outstanding
    /// or a dialog is open, submit is ignored.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.is_summarizing() && !self.dialog_open() && !input.trim().is_empty()
    }

    /// Whether the export dialog may open.
    pub fn can_export(&self) -> bool {
        !self.is_summarizing() && !self.dialog_open()
    }

    /// Whether the upload dialog may open.
    pub fn can_upload(&self) -> bool {
        !self.is_summarizing() && !self.dialog_open()
    }

    /// The resting phase for the current buffers, used when an exchange or
    /// dialog finishes.
    pub fn settled(input: &str, summary: &str) -> Phase {
        if !summary.trim().is_empty() {
            Phase::Ready
        } else if !input.trim().is_empty() {
            Phase::Editing
        } else {
            Phase::Idle
        }
    }

    /// Result of accepting an exchange outcome: only the outstanding
    /// exchange may leave the Summarizing phase.
    pub fn accepts_exchange(&self, exchange: Uuid) -> bool {
        matches!(self, Self::Summarizing { exchange: current } if *current == exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_default() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn test_filenames_are_fixed() {
        assert_eq!(ExportFormat::Pdf.filename(), "summary.pdf");
        assert_eq!(ExportFormat::Docx.filename(), "summary.docx");
    }

    #[test]
    fn test_submit_requires_non_blank_input() {
        assert!(!Phase::Idle.can_submit(""));
        assert!(!Phase::Idle.can_submit("   \n"));
        assert!(Phase::Idle.can_submit("some text"));
        assert!(Phase::Editing.can_submit("some text"));
        assert!(Phase::Ready.can_submit("some text"));
    }

    #[test]
    fn test_submit_blocked_while_summarizing() {
        let phase = Phase::Summarizing {
            exchange: Uuid::new_v4(),
        };
        assert!(!phase.can_submit("plenty of text"));
    }

    #[test]
    fn test_submit_blocked_while_dialog_open() {
        assert!(!Phase::ExportChoice { selected: 0 }.can_submit("text"));
        assert!(!Phase::UploadPrompt.can_submit("text"));
    }

    #[test]
    fn test_dialog_open_only_for_dialog_phases() {
        assert!(!Phase::Idle.dialog_open());
        assert!(!Phase::Ready.dialog_open());
        assert!(Phase::ExportChoice { selected: 1 }.dialog_open());
        assert!(Phase::UploadPrompt.dialog_open());
    }

    #[test]
    fn test_settled_prefers_summary_over_input() {
        assert_eq!(Phase::settled("", ""), Phase::Idle);
        assert_eq!(Phase::settled("draft", ""), Phase::Editing);
        assert_eq!(Phase::settled("draft", "a summary"), Phase::Ready);
        assert_eq!(Phase::settled("", "a summary"), Phase::Ready);
    }

    #[test]
    fn test_accepts_only_the_outstanding_exchange() {
        let ours = Uuid::new_v4();
        let theirs = Uuid::new_v4();
        let phase = Phase::Summarizing { exchange: ours };

        assert!(phase.accepts_exchange(ours));
        assert!(!phase.accepts_exchange(theirs));
        assert!(!Phase::Ready.accepts_exchange(ours));
        assert!(!Phase::Idle.accepts_exchange(ours));
    }
}
