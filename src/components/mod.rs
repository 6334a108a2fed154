use ratatui::{buffer::Buffer, layout::Rect};

use crate::event::AppMsg;

pub mod logs;
pub mod popup;
pub mod scroll_panel;
pub mod selector;
pub mod tooltip;

#[cfg(test)]
mod lifecycle_test;

pub trait Component {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg>;

    fn render(&mut self, area: Rect, buf: &mut Buffer, is_focused: bool);
}
