use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::widgets::theme::get_theme;

const WRAP_WIDTH: usize = 40;

/// A small hover box describing a category. Shown while the pointer rests on
/// the info marker, or toggled from the keyboard.
#[derive(Debug)]
pub struct Tooltip {
    text: String,
    visible: bool,
}

impl Tooltip {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            visible: false,
        }
    }

    pub fn set_hover(&mut self, inside: bool) {
        self.visible = inside;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Places the box below-right of the anchor, pulled back inside the
    /// screen when it would overflow.
    pub fn placement(&self, anchor: Rect, screen: Rect) -> Rect {
        let lines = textwrap::wrap(&self.text, WRAP_WIDTH);
        let width = (lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(WRAP_WIDTH) as u16)
            .saturating_add(2)
            .min(screen.width);
        let height = (lines.len() as u16).saturating_add(2).min(screen.height);

        let x = (anchor.x + 2).min(screen.right().saturating_sub(width));
        let y = (anchor.y + 1).min(screen.bottom().saturating_sub(height));
        Rect::new(x.max(screen.x), y.max(screen.y), width, height)
    }

    pub fn render(&self, anchor: Rect, screen: Rect, buf: &mut Buffer) {
        if !self.visible || self.text.is_empty() {
            return;
        }
        let theme = get_theme();
        let area = self.placement(anchor, screen);

        Clear.render(area, buf);

        let lines: Vec<Line> = textwrap::wrap(&self.text, WRAP_WIDTH)
            .into_iter()
            .map(|l| Line::from(l.into_owned()))
            .collect();

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(theme.tooltip_fg).bg(theme.tooltip_bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(theme.tooltip_fg)),
            );
        paragraph.render(area, buf);
    }
}
