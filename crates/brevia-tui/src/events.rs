use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::timeout;
use uuid::Uuid;

/// Custom application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Terminal input event
    Input(Event),
    /// Tick event for periodic updates
    Tick,
    /// Resize event
    Resize(u16, u16),
    /// Request to quit the application
    Quit,
    /// The outstanding exchange produced a summary
    ExchangeSucceeded { exchange: Uuid, summary: String },
    /// The outstanding exchange failed
    ExchangeFailed { exchange: Uuid, message: String },
    /// Error event
    Error(String),
}

/// Represents different input modes for the application
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Text input/editing mode
    Insert,
    /// A modal dialog owns the keyboard
    Dialog,
}

/// Key binding actions
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// No action
    None,
    /// Quit the application
    Quit,
    /// Switch to insert mode
    EnterInsert,
    /// Switch to normal mode
    EnterNormal,
    /// Focus the other pane
    FocusNext,
    /// Toggle theme
    ToggleTheme,
    /// Start a summarization exchange
    Submit,
    /// Open the upload path dialog
    OpenUpload,
    /// Open the export format dialog
    OpenExport,
    /// Clear the focused buffer
    ClearFocused,
    /// Move cursor/selection up
    MoveUp,
    /// Move cursor/selection down
    MoveDown,
    /// Move cursor/selection left
    MoveLeft,
    /// Move cursor/selection right
    MoveRight,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Insert character
    InsertChar(char),
    /// Insert a line break
    NewLine,
    /// Confirm the open dialog
    Confirm,
    /// Cancel the open dialog
    Cancel,
}

/// Event handler for managing input and application events
#[derive(Debug)]
pub struct EventHandler {
    /// Event receiver
    receiver: mpsc::UnboundedReceiver<AppEvent>,
    /// Event sender
    sender: mpsc::UnboundedSender<AppEvent>,
    /// Current input mode
    input_mode: InputMode,
    /// Last tick time
    last_tick: Instant,
    /// Tick rate for periodic updates
    tick_rate: Duration,
    /// Last key event for duplicate detection
    last_key_event: Option<(KeyEvent, Instant)>,
    /// Duplicate threshold for key events
    duplicate_threshold: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            receiver,
            sender,
            input_mode: InputMode::Normal,
            last_tick: Instant::now(),
            tick_rate,
            last_key_event: None,
            duplicate_threshold: Duration::from_millis(50),
        }
    }

    /// Get the event sender for external use
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.sender.clone()
    }

    /// Get the current input mode
    pub fn input_mode(&self) -> InputMode {
        self.input_mode.clone()
    }

    /// Set the input mode
    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    /// Wait for the next event with timeout
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        let timeout_duration = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or(Duration::from_millis(0));

        if let Ok(event) = timeout(timeout_duration, self.receiver.recv()).await {
            event
        } else {
            // Tick timeout occurred
            self.last_tick = Instant::now();
            Some(AppEvent::Tick)
        }
    }

    /// Send an event
    pub fn send_event(&self, event: AppEvent) -> Result<(), String> {
        self.sender
            .send(event)
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Handle keyboard input and return the corresponding action
    pub fn handle_key_event(&mut self, key: KeyEvent) -> KeyAction {
        // Only process Press events, ignore Release events
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        let now = Instant::now();

        // Check for duplicate events within threshold
        if let Some((last_key, last_time)) = self.last_key_event {
            let time_diff = now.duration_since(last_time);
            if last_key == key && time_diff < self.duplicate_threshold {
                return KeyAction::None;
            }
        }

        self.last_key_event = Some((key, now));

        // Global keys first, then mode-specific keys
        if let Some(global_action) = self.handle_global_key(key) {
            return global_action;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode_key(key),
            InputMode::Insert => self.handle_insert_mode_key(key),
            InputMode::Dialog => self.handle_dialog_mode_key(key),
        }
    }

    /// Handle global keys that work in any mode
    fn handle_global_key(&self, key: KeyEvent) -> Option<KeyAction> {
        match (key.modifiers, key.code) {
            // Global quit - works in any mode
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(KeyAction::Quit),

            // Global theme toggle
            (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(KeyAction::ToggleTheme),

            _ => None,
        }
    }

    /// Handle key events in normal mode
    fn handle_normal_mode_key(&self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => KeyAction::Quit,

            // Mode switch
            (KeyModifiers::NONE, KeyCode::Char('i')) => KeyAction::EnterInsert,

            // Pane focus
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::FocusNext,
            (KeyModifiers::SHIFT, KeyCode::BackTab) => KeyAction::FocusNext,

            // The three verbs of the application
            (KeyModifiers::NONE, KeyCode::Char('s')) => KeyAction::Submit,
            (KeyModifiers::NONE, KeyCode::Char('u')) => KeyAction::OpenUpload,
            (KeyModifiers::NONE, KeyCode::Char('e')) => KeyAction::OpenExport,

            // Buffer utilities
            (KeyModifiers::NONE, KeyCode::Char('c')) => KeyAction::ClearFocused,

            // Navigation
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                KeyAction::MoveUp
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                KeyAction::MoveDown
            }
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                KeyAction::MoveLeft
            }
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                KeyAction::MoveRight
            }

            _ => KeyAction::None,
        }
    }

    /// Handle key events in insert mode
    fn handle_insert_mode_key(&self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            // Exit insert mode (Esc only, Ctrl+C is handled globally)
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::EnterNormal,

            // Line break in the focused buffer
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::NewLine,

            // Text editing
            (KeyModifiers::NONE, KeyCode::Backspace) => KeyAction::Backspace,
            (KeyModifiers::NONE, KeyCode::Delete) => KeyAction::Delete,
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => KeyAction::ClearFocused,

            // Navigation
            (KeyModifiers::NONE, KeyCode::Up) => KeyAction::MoveUp,
            (KeyModifiers::NONE, KeyCode::Down) => KeyAction::MoveDown,
            (KeyModifiers::NONE, KeyCode::Left) => KeyAction::MoveLeft,
            (KeyModifiers::NONE, KeyCode::Right) => KeyAction::MoveRight,

            // Insert character
            (KeyModifiers::NONE, KeyCode::Char(c)) => KeyAction::InsertChar(c),
            (KeyModifiers::SHIFT, KeyCode::Char(c)) => KeyAction::InsertChar(c),

            _ => KeyAction::None,
        }
    }

    /// Handle key events while a dialog is open
    fn handle_dialog_mode_key(&self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Cancel,
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Confirm,

            (KeyModifiers::NONE, KeyCode::Up) => KeyAction::MoveUp,
            (KeyModifiers::NONE, KeyCode::Down) => KeyAction::MoveDown,
            (KeyModifiers::NONE, KeyCode::Left) => KeyAction::MoveLeft,
            (KeyModifiers::NONE, KeyCode::Right) => KeyAction::MoveRight,
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::MoveRight,

            // Path entry
            (KeyModifiers::NONE, KeyCode::Backspace) => KeyAction::Backspace,
            (KeyModifiers::NONE, KeyCode::Delete) => KeyAction::Delete,
            (KeyModifiers::NONE, KeyCode::Char(c)) => KeyAction::InsertChar(c),
            (KeyModifiers::SHIFT, KeyCode::Char(c)) => KeyAction::InsertChar(c),

            _ => KeyAction::None,
        }
    }
}

/// Global flag to prevent multiple event listeners from being spawned
static EVENT_LISTENER_SPAWNED: AtomicBool = AtomicBool::new(false);
static EVENT_LISTENER_LOCK: Mutex<()> = Mutex::new(());

/// Spawns a background task to capture terminal events
/// This function ensures that only one event listener is running at a time
pub fn spawn_event_listener(sender: mpsc::UnboundedSender<AppEvent>) {
    // Use mutex to prevent race conditions in event listener spawning
    let _lock = EVENT_LISTENER_LOCK.lock().unwrap();

    if EVENT_LISTENER_SPAWNED.load(Ordering::SeqCst) {
        tracing::warn!("Event listener already spawned, skipping duplicate spawn");
        return;
    }

    EVENT_LISTENER_SPAWNED.store(true, Ordering::SeqCst);

    tokio::task::spawn_blocking(move || {
        tracing::debug!("Starting terminal event listener");
        loop {
            match crossterm::event::read() {
                Ok(Event::Resize(w, h)) => {
                    if sender.send(AppEvent::Resize(w, h)).is_err() {
                        break;
                    }
                }
                Ok(other) => {
                    if sender.send(AppEvent::Input(other)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let msg = format!("Input error: {}", err);
                    // If we cannot notify the main loop, exit.
                    if sender.send(AppEvent::Error(msg)).is_err() {
                        break;
                    }
                }
            }
        }

        // Reset the flag when the event listener exits
        EVENT_LISTENER_SPAWNED.store(false, Ordering::SeqCst);
        tracing::debug!("Terminal event listener stopped");
    });
}
