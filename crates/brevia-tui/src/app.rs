use crate::buffer::TextBuffer;
use crate::dialogs;
use crate::events::{spawn_event_listener, AppEvent, EventHandler, InputMode, KeyAction};
use crate::layout::{LayoutManager, Pane};
use crate::panels;
use crate::theme::{ComponentType, ThemeManager};
use brevia_core::config::Config;
use brevia_core::state::{ExportFormat, Phase};
use brevia_core::summarizer::{SummarizeRequest, Summarizer};
use brevia_core::{BreviaError, Result};
use brevia_document::{DocxComposer, DocxExtractor, PdfComposer};
use crossterm::event::{Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

const TICK_RATE: Duration = Duration::from_millis(250);
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Severity of a status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn component(self) -> ComponentType {
        match self {
            Severity::Info => ComponentType::Info,
            Severity::Success => ComponentType::Success,
            Severity::Warning => ComponentType::Warning,
            Severity::Error => ComponentType::Error,
        }
    }
}

/// A transient status-bar notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    expires_at: Instant,
}

/// The UI shell. Sole owner of the input text, the summary text, and the
/// phase; every user action and exchange result flows through here.
pub struct App {
    config: Config,
    summarizer: Arc<dyn Summarizer>,
    input: TextBuffer,
    summary: TextBuffer,
    upload_path: TextBuffer,
    phase: Phase,
    focus: Pane,
    notice: Option<Notice>,
    events: EventHandler,
    layout: LayoutManager,
    themes: ThemeManager,
    spinner_tick: u8,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, summarizer: Arc<dyn Summarizer>) -> Result<Self> {
        let mut themes = ThemeManager::new();
        if let Err(err) = themes.set_theme(&config.tui.theme) {
            warn!("{}; keeping the default theme", err);
        }

        Ok(Self {
            config,
            summarizer,
            input: TextBuffer::new(),
            summary: TextBuffer::new(),
            upload_path: TextBuffer::new(),
            phase: Phase::Idle,
            focus: Pane::Input,
            notice: None,
            events: EventHandler::new(TICK_RATE),
            layout: LayoutManager::default(),
            themes,
            spinner_tick: 0,
            should_quit: false,
        })
    }

    /// Run the application until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        spawn_event_listener(self.events.sender());
        info!("Entering main event loop");

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(event) = self.events.next_event().await {
                self.on_event(event).await;
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let layout = self.layout.layout(frame.size()).clone();
        let editing = self.events.input_mode() == InputMode::Insert;

        panels::render_text_panel(
            frame,
            layout.input_area,
            &self.themes,
            "Input",
            "Type or upload a document, then press 's' to summarize.",
            &self.input,
            self.focus == Pane::Input,
            editing && self.focus == Pane::Input,
        );

        panels::render_summary_panel(
            frame,
            layout.summary_area,
            &self.themes,
            &self.summary,
            self.focus == Pane::Summary,
            editing && self.focus == Pane::Summary,
        );

        let (left, left_style) = match &self.notice {
            Some(notice) => (notice.message.clone(), notice.severity.component()),
            None => (
                self.phase_label().to_string(),
                ComponentType::StatusInactive,
            ),
        };
        panels::render_status_bar(
            frame,
            layout.status_area,
            &self.themes,
            &left,
            left_style,
            "i edit · s summarize · u upload · e export · Tab focus · q quit",
        );

        match &self.phase {
            Phase::Summarizing { .. } => {
                dialogs::render_summarizing_dialog(frame, &self.themes, self.spinner_tick);
            }
            Phase::ExportChoice { selected } => {
                dialogs::render_export_dialog(frame, &self.themes, *selected);
            }
            Phase::UploadPrompt => {
                dialogs::render_upload_dialog(frame, &self.themes, &self.upload_path);
            }
            _ => {}
        }
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Idle",
            Phase::Editing => "Editing",
            Phase::Summarizing { .. } => "Summarizing...",
            Phase::Ready => "Ready",
            Phase::ExportChoice { .. } => "Choose export format",
            Phase::UploadPrompt => "Upload a document",
        }
    }

    async fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.on_key(key).await,
            AppEvent::Input(_) => {}
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
            }
            AppEvent::Quit => self.should_quit = true,
            AppEvent::ExchangeSucceeded { exchange, summary } => {
                self.on_exchange_succeeded(exchange, summary);
            }
            AppEvent::ExchangeFailed { exchange, message } => {
                self.on_exchange_failed(exchange, message);
            }
            AppEvent::Error(message) => self.notify(Severity::Error, message),
        }
    }

    async fn on_key(&mut self, key: KeyEvent) {
        let action = self.events.handle_key_event(key);
        self.apply_action(action).await;
    }

    async fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::EnterInsert => {
                if !self.phase.dialog_open() {
                    self.events.set_input_mode(InputMode::Insert);
                }
            }
            KeyAction::EnterNormal => self.events.set_input_mode(InputMode::Normal),
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::ToggleTheme => self.themes.next_theme(),
            KeyAction::Submit => self.submit(),
            KeyAction::OpenUpload => self.open_upload(),
            KeyAction::OpenExport => self.open_export(),
            KeyAction::ClearFocused => self.clear_focused(),
            KeyAction::MoveUp => self.move_up(),
            KeyAction::MoveDown => self.move_down(),
            KeyAction::MoveLeft => self.move_left(),
            KeyAction::MoveRight => self.move_right(),
            KeyAction::Backspace => self.edit(|buffer| buffer.backspace()),
            KeyAction::Delete => self.edit(|buffer| buffer.delete()),
            KeyAction::InsertChar(c) => self.edit(|buffer| buffer.insert_char(c)),
            KeyAction::NewLine => self.edit(|buffer| buffer.newline()),
            KeyAction::Confirm => self.confirm_dialog().await,
            KeyAction::Cancel => self.close_dialog(),
        }
    }

    /// Start a summarization exchange. The guard is structural: while one
    /// exchange is outstanding or a dialog is open this does nothing.
    fn submit(&mut self) {
        if !self.phase.can_submit(self.input.content()) {
            if !self.phase.is_summarizing() && !self.phase.dialog_open() {
                self.notify(Severity::Warning, "Please enter some text to summarize.");
            }
            return;
        }

        let request = SummarizeRequest::new(self.input.content());
        let exchange = request.id;
        self.phase = Phase::Summarizing { exchange };
        info!("Starting summarization exchange {}", exchange);

        let summarizer = Arc::clone(&self.summarizer);
        let sender = self.events.sender();
        tokio::spawn(async move {
            let event = match summarizer.summarize(request).await {
                Ok(response) => AppEvent::ExchangeSucceeded {
                    exchange,
                    summary: response.summary,
                },
                Err(err) => AppEvent::ExchangeFailed {
                    exchange,
                    message: err.to_string(),
                },
            };
            let _ = sender.send(event);
        });
    }

    fn on_exchange_succeeded(&mut self, exchange: Uuid, summary: String) {
        if !self.phase.accepts_exchange(exchange) {
            warn!("Discarding stale exchange result {}", exchange);
            return;
        }

        info!("Exchange {} succeeded", exchange);
        self.summary.set_content(summary);
        self.phase = Phase::Ready;
        self.notify(Severity::Success, "Summary ready.");
    }

    fn on_exchange_failed(&mut self, exchange: Uuid, message: String) {
        if !self.phase.accepts_exchange(exchange) {
            warn!("Discarding stale exchange failure {}", exchange);
            return;
        }

        warn!("Exchange {} failed: {}", exchange, message);
        // Buffers are untouched; the phase always leaves Summarizing.
        self.phase = Phase::settled(self.input.content(), self.summary.content());
        self.notify(Severity::Error, message);
    }

    fn open_upload(&mut self) {
        if !self.phase.can_upload() {
            return;
        }
        self.upload_path.clear();
        self.phase = Phase::UploadPrompt;
        self.events.set_input_mode(InputMode::Dialog);
    }

    fn open_export(&mut self) {
        if !self.phase.can_export() {
            return;
        }
        if self.summary.is_blank() {
            self.notify(Severity::Warning, "No summary available to export.");
            return;
        }
        self.phase = Phase::ExportChoice { selected: 0 };
        self.events.set_input_mode(InputMode::Dialog);
    }

    async fn confirm_dialog(&mut self) {
        match self.phase.clone() {
            Phase::UploadPrompt => self.confirm_upload().await,
            Phase::ExportChoice { selected } => {
                if selected == dialogs::EXPORT_CANCEL_INDEX {
                    self.close_dialog();
                } else {
                    let format = ExportFormat::ALL[selected];
                    self.export(format).await;
                }
            }
            _ => {}
        }
    }

    async fn confirm_upload(&mut self) {
        let path_text = self.upload_path.content().trim().to_string();
        self.close_dialog();

        if path_text.is_empty() {
            self.notify(Severity::Warning, "No file selected.");
            return;
        }

        let path = PathBuf::from(&path_text);
        if let Err(err) = DocxExtractor::ensure_supported(&path) {
            // Declared type is wrong; the input text is untouched.
            self.notify_error(&err.into());
            return;
        }

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                self.notify_error(&BreviaError::FileRead {
                    path: path.display().to_string(),
                    source: err,
                });
                return;
            }
        };

        match DocxExtractor::extract_text(&bytes) {
            Ok(text) => {
                info!("Loaded {} characters from {}", text.len(), path.display());
                self.input.set_content(text);
                self.focus = Pane::Input;
                self.settle();
                self.notify(Severity::Success, "Document loaded.");
            }
            Err(err) => self.notify_error(&err.into()),
        }
    }

    async fn export(&mut self, format: ExportFormat) {
        self.close_dialog();
        let summary = self.summary.content().to_string();

        let composed = match format {
            ExportFormat::Pdf => PdfComposer::compose(&summary),
            ExportFormat::Docx => DocxComposer::compose(&summary),
        };

        let bytes = match composed {
            Ok(bytes) => bytes,
            Err(err) => {
                self.notify_error(&err.into());
                return;
            }
        };

        let path = self.config.export.output_dir.join(format.filename());
        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => {
                info!("Wrote {} artifact to {}", format.label(), path.display());
                self.notify(Severity::Success, format!("Saved {}", path.display()));
            }
            Err(err) => {
                self.notify_error(&BreviaError::Document {
                    message: format!("could not write {}: {}", path.display(), err),
                });
            }
        }
    }

    fn close_dialog(&mut self) {
        self.settle();
        self.events.set_input_mode(InputMode::Normal);
    }

    fn clear_focused(&mut self) {
        if self.phase.dialog_open() {
            self.upload_path.clear();
            return;
        }
        match self.focus {
            Pane::Input => self.input.clear(),
            Pane::Summary => self.summary.clear(),
        }
        self.settle();
    }

    fn edit(&mut self, operation: impl FnOnce(&mut TextBuffer)) {
        if self.phase == Phase::UploadPrompt {
            operation(&mut self.upload_path);
            return;
        }
        if self.phase.dialog_open() {
            return;
        }
        if self.events.input_mode() != InputMode::Insert {
            return;
        }
        match self.focus {
            Pane::Input => operation(&mut self.input),
            Pane::Summary => operation(&mut self.summary),
        }
        self.settle();
    }

    fn move_up(&mut self) {
        match self.phase.clone() {
            Phase::ExportChoice { selected } => self.select_export_entry(selected, -1),
            Phase::UploadPrompt => {}
            _ => self.focused_buffer_mut().move_up(),
        }
    }

    fn move_down(&mut self) {
        match self.phase.clone() {
            Phase::ExportChoice { selected } => self.select_export_entry(selected, 1),
            Phase::UploadPrompt => {}
            _ => self.focused_buffer_mut().move_down(),
        }
    }

    fn move_left(&mut self) {
        match self.phase.clone() {
            Phase::ExportChoice { selected } => self.select_export_entry(selected, -1),
            Phase::UploadPrompt => self.upload_path.move_left(),
            _ => self.focused_buffer_mut().move_left(),
        }
    }

    fn move_right(&mut self) {
        match self.phase.clone() {
            Phase::ExportChoice { selected } => self.select_export_entry(selected, 1),
            Phase::UploadPrompt => self.upload_path.move_right(),
            _ => self.focused_buffer_mut().move_right(),
        }
    }

    /// Move the export dialog selection, wrapping around the entry row.
    fn select_export_entry(&mut self, selected: usize, delta: isize) {
        let count = (dialogs::EXPORT_CANCEL_INDEX + 1) as isize;
        let next = (selected as isize + delta).rem_euclid(count) as usize;
        self.phase = Phase::ExportChoice { selected: next };
    }

    fn focused_buffer_mut(&mut self) -> &mut TextBuffer {
        match self.focus {
            Pane::Input => &mut self.input,
            Pane::Summary => &mut self.summary,
        }
    }

    /// Recompute the resting phase from the buffers. Never interrupts an
    /// outstanding exchange or an open dialog.
    fn settle(&mut self) {
        if self.phase.is_summarizing() {
            return;
        }
        self.phase = Phase::settled(self.input.content(), self.summary.content());
    }

    fn on_tick(&mut self) {
        if let Some(notice) = &self.notice {
            if Instant::now() >= notice.expires_at {
                self.notice = None;
            }
        }
        if self.phase.is_summarizing() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        self.notice = Some(Notice {
            severity,
            message: message.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    fn notify_error(&mut self, err: &BreviaError) {
        let severity = match err {
            BreviaError::InvalidInput { .. }
            | BreviaError::UnsupportedFileType { .. }
            | BreviaError::InvalidState { .. } => Severity::Warning,
            _ => Severity::Error,
        };
        self.notify(severity, err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brevia_core::summarizer::SummarizeResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counting stub sharing the Summarizer contract with the real clients.
    struct StubSummarizer {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Summarizer for StubSummarizer {
        async fn summarize(
            &self,
            request: SummarizeRequest,
        ) -> brevia_core::Result<SummarizeResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(BreviaError::Network {
                    message: "Endpoint returned HTTP 500: internal error".to_string(),
                })
            } else {
                Ok(SummarizeResponse {
                    id: request.id,
                    summary: "stub summary".to_string(),
                })
            }
        }
    }

    fn test_app(fail: bool, export_dir: Option<PathBuf>) -> (App, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut config = Config::default();
        if let Some(dir) = export_dir {
            config.export.output_dir = dir;
        }
        let summarizer = Arc::new(StubSummarizer {
            calls: Arc::clone(&calls),
            fail,
        });
        let app = App::new(config, summarizer).expect("app");
        (app, calls)
    }

    /// Drain ticks until an exchange event arrives.
    async fn wait_exchange_event(app: &mut App) -> AppEvent {
        for _ in 0..100 {
            if let Some(event) = app.events.next_event().await {
                if !matches!(event, AppEvent::Tick) {
                    return event;
                }
            }
        }
        panic!("no exchange event arrived");
    }

    #[tokio::test]
    async fn test_blank_input_never_starts_an_exchange() {
        let (mut app, calls) = test_app(false, None);

        app.apply_action(KeyAction::Submit).await;
        app.input.set_content("   \n\t");
        app.apply_action(KeyAction::Submit).await;

        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!app.phase.is_summarizing());
        let notice = app.notice.expect("notice");
        assert_eq!(notice.severity, Severity::Warning);
    }

    #[tokio::test]
    async fn test_submit_runs_exactly_one_exchange() {
        let (mut app, calls) = test_app(false, None);
        app.input.set_content("Hello. World.");

        app.apply_action(KeyAction::Submit).await;
        assert!(app.phase.is_summarizing());

        // A second submit while one exchange is outstanding is ignored
        app.apply_action(KeyAction::Submit).await;

        let event = wait_exchange_event(&mut app).await;
        app.on_event(event).await;

        assert_eq!(app.phase, Phase::Ready);
        assert_eq!(app.summary.content(), "stub summary");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_exchange_clears_loading_and_keeps_buffers() {
        let (mut app, _calls) = test_app(true, None);
        app.input.set_content("Some text to summarize.");

        app.apply_action(KeyAction::Submit).await;
        let event = wait_exchange_event(&mut app).await;
        app.on_event(event).await;

        assert_eq!(app.phase, Phase::Editing);
        assert_eq!(app.input.content(), "Some text to summarize.");
        assert_eq!(app.summary.content(), "");
        let notice = app.notice.expect("notice");
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.message.contains("500"));
    }

    #[tokio::test]
    async fn test_stale_exchange_result_is_discarded() {
        let (mut app, _calls) = test_app(false, None);
        app.input.set_content("draft");
        app.settle();

        app.on_event(AppEvent::ExchangeSucceeded {
            exchange: Uuid::new_v4(),
            summary: "ghost".to_string(),
        })
        .await;

        assert_eq!(app.summary.content(), "");
        assert_eq!(app.phase, Phase::Editing);
    }

    #[tokio::test]
    async fn test_wrong_upload_type_leaves_input_untouched() {
        let (mut app, _calls) = test_app(false, None);
        app.input.set_content("original input");
        app.settle();

        app.apply_action(KeyAction::OpenUpload).await;
        assert_eq!(app.phase, Phase::UploadPrompt);

        app.upload_path.set_content("notes.txt");
        app.apply_action(KeyAction::Confirm).await;

        assert_eq!(app.input.content(), "original input");
        let notice = app.notice.expect("notice");
        assert_eq!(notice.severity, Severity::Warning);
        assert!(notice.message.contains("Unsupported file type"));
    }

    #[tokio::test]
    async fn test_upload_populates_input_from_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let doc_path = temp_dir.path().join("report.docx");
        let bytes = DocxComposer::compose("First line.\nSecond line.").unwrap();
        tokio::fs::write(&doc_path, bytes).await.unwrap();

        let (mut app, _calls) = test_app(false, None);
        app.apply_action(KeyAction::OpenUpload).await;
        app.upload_path.set_content(doc_path.display().to_string());
        app.apply_action(KeyAction::Confirm).await;

        assert!(app.input.content().contains("First line."));
        assert!(app.input.content().contains("Second line."));
        assert_eq!(app.phase, Phase::Editing);
    }

    #[tokio::test]
    async fn test_export_with_blank_summary_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut app, _calls) = test_app(false, Some(temp_dir.path().to_path_buf()));

        app.apply_action(KeyAction::OpenExport).await;

        assert!(!app.phase.dialog_open());
        let notice = app.notice.clone().expect("notice");
        assert_eq!(notice.severity, Severity::Warning);
        assert!(!temp_dir.path().join("summary.docx").exists());
        assert!(!temp_dir.path().join("summary.pdf").exists());
    }

    #[tokio::test]
    async fn test_export_writes_docx_artifact() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut app, _calls) = test_app(false, Some(temp_dir.path().to_path_buf()));
        app.summary.set_content("A finished summary.");
        app.settle();

        app.apply_action(KeyAction::OpenExport).await;
        assert_eq!(app.phase, Phase::ExportChoice { selected: 0 });

        app.apply_action(KeyAction::Confirm).await;

        let artifact = temp_dir.path().join("summary.docx");
        assert!(artifact.exists());
        assert!(std::fs::metadata(&artifact).unwrap().len() > 0);
        assert_eq!(app.phase, Phase::Ready);
    }

    #[tokio::test]
    async fn test_export_writes_pdf_artifact() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut app, _calls) = test_app(false, Some(temp_dir.path().to_path_buf()));
        app.summary.set_content("A finished summary.");
        app.settle();

        app.apply_action(KeyAction::OpenExport).await;
        app.apply_action(KeyAction::MoveRight).await;
        assert_eq!(app.phase, Phase::ExportChoice { selected: 1 });

        app.apply_action(KeyAction::Confirm).await;

        let artifact = temp_dir.path().join("summary.pdf");
        assert!(artifact.exists());
        assert!(std::fs::metadata(&artifact).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_export_dialog_cancel_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut app, _calls) = test_app(false, Some(temp_dir.path().to_path_buf()));
        app.summary.set_content("A finished summary.");
        app.settle();

        app.apply_action(KeyAction::OpenExport).await;
        app.apply_action(KeyAction::MoveLeft).await;
        assert_eq!(
            app.phase,
            Phase::ExportChoice {
                selected: dialogs::EXPORT_CANCEL_INDEX
            }
        );

        app.apply_action(KeyAction::Confirm).await;

        assert_eq!(app.phase, Phase::Ready);
        assert!(!temp_dir.path().join("summary.docx").exists());
        assert!(!temp_dir.path().join("summary.pdf").exists());
    }

    #[tokio::test]
    async fn test_upload_blocked_while_summarizing() {
        let (mut app, _calls) = test_app(false, None);
        app.input.set_content("text");

        app.apply_action(KeyAction::Submit).await;
        assert!(app.phase.is_summarizing());

        app.apply_action(KeyAction::OpenUpload).await;
        assert!(app.phase.is_summarizing());

        app.apply_action(KeyAction::OpenExport).await;
        assert!(app.phase.is_summarizing());
    }

    #[tokio::test]
    async fn test_editing_summary_keeps_ready_phase() {
        let (mut app, _calls) = test_app(false, None);
        app.summary.set_content("summary text");
        app.settle();
        assert_eq!(app.phase, Phase::Ready);

        app.focus = Pane::Summary;
        app.events.set_input_mode(InputMode::Insert);
        app.apply_action(KeyAction::InsertChar('!')).await;

        assert_eq!(app.summary.content(), "summary text!");
        assert_eq!(app.phase, Phase::Ready);
    }
}
