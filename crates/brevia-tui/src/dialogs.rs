//! Dialog overlays: export format choice, upload path entry, and the
//! in-flight exchange spinner.

use crate::buffer::TextBuffer;
use crate::theme::{ComponentType, ThemeManager};
use brevia_core::state::ExportFormat;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Index of the cancel entry in the export dialog row.
pub const EXPORT_CANCEL_INDEX: usize = ExportFormat::ALL.len();

const DIALOG_WIDTH: u16 = 56;

/// Render the export format dialog.
pub fn render_export_dialog(frame: &mut Frame<'_>, theme: &ThemeManager, selected: usize) {
    let area = centered_rect(DIALOG_WIDTH, 7, frame.size());
    frame.render_widget(Clear, area);

    let block = dialog_block(" Export Summary ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut buttons: Vec<Span> = Vec::new();
    buttons.push(Span::raw("   "));
    for (index, format) in ExportFormat::ALL.iter().enumerate() {
        buttons.push(button(format.label(), index == selected, theme));
        buttons.push(Span::raw("   "));
    }
    buttons.push(button("Cancel", selected == EXPORT_CANCEL_INDEX, theme));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Would you like to export as DOCX or PDF?",
            theme.get_style(ComponentType::Text),
        )),
        Line::from(""),
        Line::from(buttons),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the upload path dialog; the terminal cursor tracks the field.
pub fn render_upload_dialog(frame: &mut Frame<'_>, theme: &ThemeManager, path: &TextBuffer) {
    let area = centered_rect(DIALOG_WIDTH, 7, frame.size());
    frame.render_widget(Clear, area);

    let block = dialog_block(" Upload Document ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "  Path to a .docx file:",
            theme.get_style(ComponentType::Text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(path.content(), theme.get_style(ComponentType::Highlight)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: load   Esc: cancel",
            theme.get_style(ComponentType::Muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);

    let (_, col) = path.cursor_position();
    let cursor_x = inner.x + 4 + col as u16;
    let cursor_y = inner.y + 2;
    if cursor_x < inner.x + inner.width {
        frame.set_cursor(cursor_x, cursor_y);
    }
}

/// Render the spinner overlay shown while an exchange is in flight.
pub fn render_summarizing_dialog(frame: &mut Frame<'_>, theme: &ThemeManager, tick: u8) {
    let area = centered_rect(DIALOG_WIDTH, 5, frame.size());
    frame.render_widget(Clear, area);

    let block = dialog_block(" Summarizing ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", spinner),
                theme.get_style(ComponentType::Success),
            ),
            Span::styled(
                "Waiting for the summarization service...",
                theme.get_style(ComponentType::Text),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn dialog_block(title: &str, theme: &ThemeManager) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .title_style(theme.get_style(ComponentType::Title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.get_style(ComponentType::DialogBorder))
}

fn button<'a>(label: &'a str, selected: bool, theme: &ThemeManager) -> Span<'a> {
    let style = if selected {
        theme.get_style(ComponentType::ButtonSelected)
    } else {
        theme.get_style(ComponentType::Text)
    };
    Span::styled(format!(" {} ", label), style)
}

/// Create a centered rect of given size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
