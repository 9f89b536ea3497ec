use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::BorderType;

/// Represents the panes of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Input,
    Summary,
}

impl Pane {
    pub fn next(self) -> Pane {
        match self {
            Pane::Input => Pane::Summary,
            Pane::Summary => Pane::Input,
        }
    }
}

/// Layout configuration for different screen sizes
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Minimum terminal width required
    pub min_width: u16,
    /// Minimum terminal height required
    pub min_height: u16,
    /// Input pane width percentage
    pub input_width_percent: u16,
    /// Summary pane width percentage
    pub summary_width_percent: u16,
    /// Status bar height
    pub status_bar_height: u16,
    /// Border style
    pub border_style: BorderStyle,
}

/// Border styling configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyle {
    pub border_type: BorderType,
    pub show_borders: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 80,
            min_height: 24,
            input_width_percent: 50,
            summary_width_percent: 50,
            status_bar_height: 1,
            border_style: BorderStyle {
                border_type: BorderType::Rounded,
                show_borders: true,
            },
        }
    }
}

/// Represents the computed layout areas for the application
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Full terminal area
    pub full_area: Rect,
    /// Input text area
    pub input_area: Rect,
    /// Summary area
    pub summary_area: Rect,
    /// Status bar area
    pub status_area: Rect,
    /// Whether the layout is in compact mode (small screen)
    pub is_compact: bool,
}

/// Layout manager for handling responsive design
#[derive(Debug, Clone)]
pub struct LayoutManager {
    config: LayoutConfig,
    current_layout: Option<AppLayout>,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutManager {
    /// Create a new layout manager with the given configuration
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            current_layout: None,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Get the current layout, recalculating if necessary
    pub fn layout(&mut self, area: Rect) -> &AppLayout {
        if self.current_layout.is_none() || self.current_layout.as_ref().unwrap().full_area != area
        {
            self.current_layout = Some(self.calculate_layout(area));
        }
        self.current_layout.as_ref().unwrap()
    }

    /// Calculate the layout for the given terminal area
    fn calculate_layout(&self, area: Rect) -> AppLayout {
        let is_compact = area.width < self.config.min_width || area.height < self.config.min_height;

        // Vertical split: [content][status bar]
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(self.config.status_bar_height),
            ])
            .split(area);

        let content_area = vertical[0];
        let status_area = vertical[1];

        // Side-by-side panes on a normal screen, stacked when compact
        let (input_area, summary_area) = if is_compact {
            let stacked = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(content_area);
            (stacked[0], stacked[1])
        } else {
            let side_by_side = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(self.config.input_width_percent),
                    Constraint::Percentage(self.config.summary_width_percent),
                ])
                .split(content_area);
            (side_by_side[0], side_by_side[1])
        };

        AppLayout {
            full_area: area,
            input_area,
            summary_area,
            status_area,
            is_compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout_is_side_by_side() {
        let mut manager = LayoutManager::default();
        let area = Rect::new(0, 0, 120, 40);
        let layout = manager.layout(area).clone();

        assert!(!layout.is_compact);
        assert_eq!(layout.input_area.y, layout.summary_area.y);
        assert!(layout.input_area.x < layout.summary_area.x);
        assert_eq!(layout.status_area.height, 1);
    }

    #[test]
    fn test_compact_layout_stacks_panes() {
        let mut manager = LayoutManager::default();
        let area = Rect::new(0, 0, 60, 20);
        let layout = manager.layout(area).clone();

        assert!(layout.is_compact);
        assert_eq!(layout.input_area.x, layout.summary_area.x);
        assert!(layout.input_area.y < layout.summary_area.y);
    }

    #[test]
    fn test_layout_is_recalculated_on_resize() {
        let mut manager = LayoutManager::default();
        let first = manager.layout(Rect::new(0, 0, 120, 40)).clone();
        let second = manager.layout(Rect::new(0, 0, 100, 30)).clone();

        assert_ne!(first.full_area, second.full_area);
        assert_ne!(first.input_area.width, second.input_area.width);
    }

    #[test]
    fn test_pane_cycling() {
        assert_eq!(Pane::Input.next(), Pane::Summary);
        assert_eq!(Pane::Summary.next(), Pane::Input);
    }
}
