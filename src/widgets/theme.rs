use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_highlight: Color,
    pub heading: Color,
    pub tooltip_bg: Color,
    pub tooltip_fg: Color,
    pub log_error: Color,
    pub log_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_focused: Color::Rgb(118, 227, 73),
            border_unfocused: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_highlight: Color::Yellow,
            heading: Color::Cyan,
            tooltip_bg: Color::Rgb(60, 56, 20),
            tooltip_fg: Color::Rgb(255, 250, 205),
            log_error: Color::Red,
            log_info: Color::Gray,
        }
    }
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

pub fn get_theme() -> &'static Theme {
    &THEME
}
