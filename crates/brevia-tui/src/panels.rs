use crate::buffer::TextBuffer;
use crate::theme::{ComponentType, ThemeManager};
use brevia_core::text::TextStats;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render a bordered, editable text pane.
///
/// `editing` shows the terminal cursor at the buffer's cursor position;
/// content longer than the pane scrolls to keep the cursor visible.
pub fn render_text_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    theme: &ThemeManager,
    title: &str,
    placeholder: &str,
    buffer: &TextBuffer,
    focused: bool,
    editing: bool,
) {
    let border_style = if focused {
        theme.get_style(ComponentType::Highlight)
    } else {
        theme.get_style(ComponentType::Border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title.to_string())
        .title_style(theme.get_style(ComponentType::Title))
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if buffer.content().is_empty() && !editing {
        let empty_text = Paragraph::new(placeholder)
            .style(theme.get_style(ComponentType::Placeholder))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty_text, inner);
        return;
    }

    let (row, col) = buffer.cursor_position();
    let scroll_y = row.saturating_sub(inner.height as usize - 1) as u16;
    let scroll_x = col.saturating_sub(inner.width as usize - 1) as u16;

    let paragraph = Paragraph::new(buffer.content())
        .style(theme.get_style(ComponentType::Text))
        .scroll((scroll_y, scroll_x));
    frame.render_widget(paragraph, inner);

    if editing && focused {
        let cursor_x = inner.x + (col as u16).saturating_sub(scroll_x);
        let cursor_y = inner.y + (row as u16).saturating_sub(scroll_y);
        if cursor_x < inner.x + inner.width && cursor_y < inner.y + inner.height {
            frame.set_cursor(cursor_x, cursor_y);
        }
    }
}

/// Render the summary pane: editable text plus a sentence/word counter.
pub fn render_summary_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    theme: &ThemeManager,
    buffer: &TextBuffer,
    focused: bool,
    editing: bool,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_text_panel(
        frame,
        sections[0],
        theme,
        "Summary",
        "The summary appears here. Press 's' to summarize the input.",
        buffer,
        focused,
        editing,
    );

    let stats = TextStats::of(buffer.content());
    let counter = format!("{} sentences • {} words", stats.sentences, stats.words);
    let footer = Paragraph::new(counter)
        .style(theme.get_style(ComponentType::Muted))
        .alignment(Alignment::Right);
    frame.render_widget(footer, sections[1]);
}

/// Render the status bar: a notice (or the phase) on the left, key hints
/// on the right.
pub fn render_status_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    theme: &ThemeManager,
    left: &str,
    left_style: ComponentType,
    hints: &str,
) {
    let hint_width = hints.chars().count() as u16;
    let sections = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hint_width)])
        .split(area);

    let left_paragraph = Paragraph::new(left.to_string()).style(theme.get_style(left_style));
    frame.render_widget(left_paragraph, sections[0]);

    let right_paragraph = Paragraph::new(hints.to_string())
        .style(theme.get_style(ComponentType::Muted))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, sections[1]);
}
