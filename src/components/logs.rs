use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Component;
use crate::event::AppMsg;
use crate::widgets::common::focused_block;
use crate::widgets::theme::get_theme;

/// Diagnostics strip at the bottom of the main screen. Collects messages
/// from the app channel (asset load failures, mostly) and shows the tail.
#[derive(Debug, Default)]
pub struct LogsState {
    logs: Vec<String>,
}

impl LogsState {
    pub fn add_log(&mut self, message: String) {
        self.logs.push(message);
    }

    pub fn entries(&self) -> &[String] {
        &self.logs
    }
}

impl Component for LogsState {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg> {
        match msg {
            AppMsg::LogMessage(message) => self.add_log(message.clone()),
            AppMsg::ErrorOccurred(err) => self.add_log(format!("ERROR: {}", err)),
            _ => {}
        }
        None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, is_focused: bool) {
        let theme = get_theme();
        let block = focused_block("Diagnostics", is_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        if width == 0 {
            return;
        }

        let mut wrapped: Vec<Line> = Vec::new();
        for log in &self.logs {
            let style = if log.contains("ERROR") || log.contains("unavailable") {
                Style::default().fg(theme.log_error)
            } else {
                Style::default().fg(theme.log_info)
            };
            for line in textwrap::wrap(log, width) {
                wrapped.push(Line::from(Span::styled(line.into_owned(), style)));
            }
        }

        // tail: newest messages stay visible
        let viewport = inner.height as usize;
        let skip = wrapped.len().saturating_sub(viewport);
        let visible: Vec<Line> = wrapped.into_iter().skip(skip).collect();

        Paragraph::new(visible).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_messages_accumulate() {
        let mut logs = LogsState::default();
        logs.update(&AppMsg::LogMessage("image unavailable: a.png".to_string()));
        logs.update(&AppMsg::ErrorOccurred("boom".to_string()));

        assert_eq!(logs.entries().len(), 2);
        assert_eq!(logs.entries()[1], "ERROR: boom");
    }
}
