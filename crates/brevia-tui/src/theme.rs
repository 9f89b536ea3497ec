use ratatui::style::{Color, Modifier, Style};

/// Represents different UI component types for theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Background,
    Border,
    Title,
    Text,
    Highlight,
    Placeholder,
    Error,
    Warning,
    Info,
    Success,
    Muted,
    StatusActive,
    StatusInactive,
    DialogBorder,
    ButtonSelected,
}

/// Color theme configuration
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub name: String,
    pub background: Color,
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub highlight: Color,
    pub placeholder: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub success: Color,
    pub muted: Color,
    pub status_active: Color,
    pub status_inactive: Color,
    pub dialog_border: Color,
    pub button_selected: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

impl ColorTheme {
    /// Default dark theme
    pub fn default_dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::Rgb(26, 27, 38),
            border: Color::Rgb(68, 71, 90),
            title: Color::Rgb(199, 146, 234),
            text: Color::Rgb(192, 202, 245),
            highlight: Color::Rgb(137, 180, 250),
            placeholder: Color::Rgb(108, 112, 134),
            error: Color::Rgb(243, 139, 168),
            warning: Color::Rgb(249, 226, 175),
            info: Color::Rgb(116, 199, 236),
            success: Color::Rgb(166, 227, 161),
            muted: Color::Rgb(108, 112, 134),
            status_active: Color::Rgb(166, 227, 161),
            status_inactive: Color::Rgb(108, 112, 134),
            dialog_border: Color::Rgb(137, 180, 250),
            button_selected: Color::Rgb(49, 50, 68),
        }
    }

    /// Default light theme
    pub fn default_light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::Rgb(239, 241, 245),
            border: Color::Rgb(140, 143, 161),
            title: Color::Rgb(136, 57, 239),
            text: Color::Rgb(76, 79, 105),
            highlight: Color::Rgb(30, 102, 245),
            placeholder: Color::Rgb(156, 160, 176),
            error: Color::Rgb(210, 15, 57),
            warning: Color::Rgb(254, 100, 11),
            info: Color::Rgb(4, 165, 229),
            success: Color::Rgb(64, 160, 43),
            muted: Color::Rgb(156, 160, 176),
            status_active: Color::Rgb(64, 160, 43),
            status_inactive: Color::Rgb(156, 160, 176),
            dialog_border: Color::Rgb(30, 102, 245),
            button_selected: Color::Rgb(220, 224, 232),
        }
    }

    /// Get color for a specific component type
    pub fn get_color(&self, component: ComponentType) -> Color {
        match component {
            ComponentType::Background => self.background,
            ComponentType::Border => self.border,
            ComponentType::Title => self.title,
            ComponentType::Text => self.text,
            ComponentType::Highlight => self.highlight,
            ComponentType::Placeholder => self.placeholder,
            ComponentType::Error => self.error,
            ComponentType::Warning => self.warning,
            ComponentType::Info => self.info,
            ComponentType::Success => self.success,
            ComponentType::Muted => self.muted,
            ComponentType::StatusActive => self.status_active,
            ComponentType::StatusInactive => self.status_inactive,
            ComponentType::DialogBorder => self.dialog_border,
            ComponentType::ButtonSelected => self.button_selected,
        }
    }

    /// Get style for a specific component type
    pub fn get_style(&self, component: ComponentType) -> Style {
        let color = self.get_color(component);
        match component {
            ComponentType::Title => Style::default().fg(color).add_modifier(Modifier::BOLD),
            ComponentType::Highlight => Style::default().fg(color).add_modifier(Modifier::BOLD),
            ComponentType::Error => Style::default().fg(color).add_modifier(Modifier::BOLD),
            ComponentType::Warning => Style::default().fg(color),
            ComponentType::Placeholder => Style::default().fg(color).add_modifier(Modifier::ITALIC),
            ComponentType::ButtonSelected => Style::default().bg(color).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(color),
        }
    }
}

/// Theme manager for handling multiple themes and theme switching
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current_theme: ColorTheme,
    available_themes: Vec<ColorTheme>,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeManager {
    /// Create a new theme manager with default themes
    pub fn new() -> Self {
        let available_themes = vec![ColorTheme::default_dark(), ColorTheme::default_light()];

        Self {
            current_theme: available_themes[0].clone(),
            available_themes,
        }
    }

    /// Get the current active theme
    pub fn current_theme(&self) -> &ColorTheme {
        &self.current_theme
    }

    /// Switch to theme by name
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        if let Some(theme) = self
            .available_themes
            .iter()
            .find(|t| t.name == theme_name)
            .cloned()
        {
            self.current_theme = theme;
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", theme_name))
        }
    }

    /// Switch to next theme in the list
    pub fn next_theme(&mut self) {
        if let Some(current_index) = self
            .available_themes
            .iter()
            .position(|t| t.name == self.current_theme.name)
        {
            let next_index = (current_index + 1) % self.available_themes.len();
            self.current_theme = self.available_themes[next_index].clone();
        }
    }

    /// Get color for component type from current theme
    pub fn get_color(&self, component: ComponentType) -> Color {
        self.current_theme.get_color(component)
    }

    /// Get style for component type from current theme
    pub fn get_style(&self, component: ComponentType) -> Style {
        self.current_theme.get_style(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_manager_creation() {
        let manager = ThemeManager::new();
        assert_eq!(manager.current_theme().name, "dark");
    }

    #[test]
    fn test_theme_switching() {
        let mut manager = ThemeManager::new();

        assert!(manager.set_theme("light").is_ok());
        assert_eq!(manager.current_theme().name, "light");

        assert!(manager.set_theme("nonexistent").is_err());
    }

    #[test]
    fn test_theme_cycling() {
        let mut manager = ThemeManager::new();
        let initial_theme = manager.current_theme().name.clone();

        manager.next_theme();
        assert_ne!(manager.current_theme().name, initial_theme);

        manager.next_theme();
        assert_eq!(manager.current_theme().name, initial_theme);
    }

    #[test]
    fn test_component_styling() {
        let theme = ColorTheme::default_dark();

        assert_ne!(
            theme.get_color(ComponentType::Error),
            theme.get_color(ComponentType::Success)
        );

        let title_style = theme.get_style(ComponentType::Title);
        assert!(title_style.add_modifier.contains(Modifier::BOLD));
    }
}
