// Popup content window: one scrollable panel of sections over the main
// screen, with per-section images and animation lifecycle tied to teardown.

use std::time::Instant;

use crossbeam_channel::Sender;
use crossterm::event::KeyCode;
use image::DynamicImage;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, StatefulWidget, Widget},
};
use ratatui_image::{StatefulImage, picker::Picker, protocol::StatefulProtocol};

use super::Component;
use super::scroll_panel::{ScrollBinding, ScrollRouter, ScrollablePanel};
use crate::assets::{FrameAnimator, LoadOutcome, loader};
use crate::config::Config;
use crate::event::AppMsg;
use crate::model::section::{Category, SectionRecord, Topic};
use crate::widgets::common::focused_block;
use crate::widgets::theme::get_theme;

/// `Open -> Closing -> Closed`; `Closed` is terminal. Every dismissal path
/// converges on the same teardown, which runs exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    Open,
    Closing,
    Closed,
}

struct SectionImage {
    cols: u16,
    rows: u16,
    frames: Vec<StatefulProtocol>,
    animator: Option<FrameAnimator>,
}

impl SectionImage {
    fn displayed_frame(&self) -> usize {
        self.animator.as_ref().map_or(0, |a| a.current_frame())
    }
}

/// A single-use popup. Owns its decoded assets, animators, and the wheel
/// binding; nothing is shared with other windows.
pub struct PopupWindow {
    title: String,
    sections: Vec<SectionRecord>,
    images: Vec<Option<SectionImage>>,
    panel: ScrollablePanel,
    binding: Option<ScrollBinding>,
    phase: PopupPhase,
}

impl PopupWindow {
    /// Loads every section asset, acquires the wheel route, and starts an
    /// animator per animated asset. Unavailable assets are logged through
    /// `tx` and rendered as an omitted image, never as an error.
    pub fn open(
        picker: &mut Picker,
        topic: Topic,
        config: &Config,
        router: &mut ScrollRouter,
        tx: &Sender<AppMsg>,
    ) -> Self {
        let base_dir = match topic.category {
            Category::Lithography => &config.litho_image_dir,
            Category::Characterization => &config.char_image_dir,
        };
        let (cell_w, cell_h) = picker.font_size();
        let now = Instant::now();

        let mut images = Vec::with_capacity(topic.sections.len());
        for section in &topic.sections {
            let Some(file) = &section.image else {
                images.push(None);
                continue;
            };
            match loader::load(&base_dir.join(file), config.image_width) {
                LoadOutcome::Ready(asset) => {
                    let first = &asset.frames()[0];
                    let cols = first.width().div_ceil(u32::from(cell_w.max(1))) as u16;
                    let rows = first.height().div_ceil(u32::from(cell_h.max(1))) as u16;
                    let animator = asset.is_animated().then(|| {
                        let mut animator =
                            FrameAnimator::new(asset.frame_count(), config.frame_interval);
                        animator.start(now);
                        animator
                    });
                    let frames = asset
                        .frames()
                        .iter()
                        .map(|frame| {
                            picker.new_resize_protocol(DynamicImage::ImageRgba8(frame.clone()))
                        })
                        .collect();
                    images.push(Some(SectionImage {
                        cols,
                        rows,
                        frames,
                        animator,
                    }));
                }
                LoadOutcome::Unavailable { reason } => {
                    let _ = tx.send(AppMsg::LogMessage(format!("image unavailable: {}", reason)));
                    images.push(None);
                }
            }
        }

        Self {
            title: topic.title,
            sections: topic.sections,
            images,
            panel: ScrollablePanel::default(),
            binding: Some(router.acquire()),
            phase: PopupPhase::Open,
        }
    }

    /// The teardown routine. Stops every animator, hands the wheel binding
    /// back to the router, and marks the window terminal. Calling it again
    /// is a no-op.
    pub fn close(&mut self, router: &mut ScrollRouter) {
        if self.phase != PopupPhase::Open {
            return;
        }
        self.phase = PopupPhase::Closing;
        for image in self.images.iter_mut().flatten() {
            if let Some(animator) = &mut image.animator {
                animator.stop();
            }
        }
        if let Some(binding) = self.binding.take() {
            router.release(binding);
        }
        self.phase = PopupPhase::Closed;
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn scroll_binding(&self) -> Option<&ScrollBinding> {
        self.binding.as_ref()
    }

    /// Number of sections that actually got an image.
    pub fn loaded_image_count(&self) -> usize {
        self.images.iter().flatten().count()
    }

    /// Animators with an armed tick.
    pub fn pending_animations(&self) -> usize {
        self.images
            .iter()
            .flatten()
            .filter_map(|image| image.animator.as_ref())
            .filter(|animator| animator.is_running())
            .count()
    }

    pub fn displayed_frame(&self, section_ix: usize) -> Option<usize> {
        self.images
            .get(section_ix)
            .and_then(|slot| slot.as_ref())
            .map(SectionImage::displayed_frame)
    }

    /// Advances every due animator. Returns whether any frame changed.
    pub fn advance_animations(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for image in self.images.iter_mut().flatten() {
            if let Some(animator) = &mut image.animator {
                changed |= animator.tick(now);
            }
        }
        changed
    }

    pub fn scroll_offset(&self) -> usize {
        self.panel.offset()
    }

    pub fn handle_wheel(&mut self, direction: crate::event::WheelDirection) {
        self.panel.handle_wheel(direction);
    }

    fn popup_area(screen: Rect) -> Rect {
        Rect::new(
            screen.x + screen.width / 20,
            screen.y + screen.height / 20,
            screen.width - screen.width / 10,
            screen.height - screen.height / 10,
        )
    }
}

impl Component for PopupWindow {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg> {
        match msg {
            AppMsg::Tick => {
                self.advance_animations(Instant::now());
            }
            AppMsg::Wheel(direction) => self.panel.handle_wheel(*direction),
            AppMsg::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Some(AppMsg::PopupDismissed),
                KeyCode::Down | KeyCode::Char('j') => self.panel.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.panel.scroll_by(-1),
                KeyCode::PageDown => self.panel.scroll_by(10),
                KeyCode::PageUp => self.panel.scroll_by(-10),
                _ => {}
            },
            _ => {}
        }
        None
    }

    fn render(&mut self, screen: Rect, buf: &mut Buffer, _is_focused: bool) {
        let theme = get_theme();
        let area = Self::popup_area(screen);
        Clear.render(area, buf);

        let block = focused_block(&self.title, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        let body = chunks[0];

        Paragraph::new("Esc/q: close   j/k, PgUp/PgDn or wheel: scroll")
            .style(Style::default().fg(theme.text_secondary))
            .render(chunks[1], buf);

        // image column sized to the widest loaded image, capped at half the
        // body so text always keeps room
        let image_cols = self
            .images
            .iter()
            .flatten()
            .map(|image| image.cols)
            .max()
            .unwrap_or(0)
            .min(body.width / 2);
        let reserved = if image_cols > 0 { image_cols + 2 } else { 1 };
        let text_width = body.width.saturating_sub(reserved);
        if text_width == 0 || body.height == 0 {
            return;
        }

        // layout pass: flow headings and wrapped bodies into one column,
        // remembering where each image anchors in content coordinates
        let mut lines: Vec<Line> = Vec::new();
        let mut anchors: Vec<(usize, usize)> = Vec::new();
        for (ix, section) in self.sections.iter().enumerate() {
            let section_top = lines.len();
            lines.push(Line::from(Span::styled(
                section.heading.clone(),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
            for raw in section.body.lines() {
                if raw.is_empty() {
                    lines.push(Line::default());
                    continue;
                }
                for wrapped in textwrap::wrap(raw, text_width as usize) {
                    lines.push(Line::from(Span::styled(
                        wrapped.into_owned(),
                        Style::default().fg(theme.text_primary),
                    )));
                }
            }
            if let Some(image) = &self.images[ix] {
                anchors.push((ix, section_top));
                while lines.len() < section_top + image.rows as usize {
                    lines.push(Line::default());
                }
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "─".repeat(text_width as usize),
                Style::default().fg(theme.text_secondary),
            )));
            lines.push(Line::default());
        }

        let viewport = body.height as usize;
        self.panel.update_extent(viewport, lines.len());
        let offset = self.panel.offset();

        let text_area = Rect::new(body.x, body.y, text_width, body.height);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(text_area, buf);

        for (ix, top) in anchors {
            if let Some(image) = self.images[ix].as_mut() {
                let fully_visible = top >= offset && top + image.rows as usize <= offset + viewport;
                if !fully_visible {
                    continue;
                }
                let rect = Rect::new(
                    body.x + text_width + 2,
                    body.y + (top - offset) as u16,
                    image.cols.min(image_cols),
                    image.rows,
                );
                let frame_ix = image.displayed_frame().min(image.frames.len() - 1);
                StatefulWidget::render(
                    StatefulImage::default(),
                    rect,
                    buf,
                    &mut image.frames[frame_ix],
                );
            }
        }

        self.panel.render_scrollbar(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content;
    use crate::model::section::TopicId;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn test_config() -> Config {
        Config {
            litho_image_dir: "does_not_exist".into(),
            char_image_dir: "does_not_exist".into(),
            ..Config::default()
        }
    }

    fn open_litho_process(router: &mut ScrollRouter) -> PopupWindow {
        let mut picker = Picker::from_fontsize((8, 16));
        let (tx, _rx) = crossbeam_channel::unbounded();
        PopupWindow::open(
            &mut picker,
            content::topic(TopicId::LithoProcess),
            &test_config(),
            router,
            &tx,
        )
    }

    #[test]
    fn missing_assets_are_omitted_not_fatal() {
        let mut router = ScrollRouter::default();
        let popup = open_litho_process(&mut router);

        assert_eq!(popup.phase(), PopupPhase::Open);
        assert_eq!(popup.loaded_image_count(), 0);
        assert_eq!(popup.pending_animations(), 0);
        assert!(router.is_bound());
    }

    #[test]
    fn esc_requests_dismissal() {
        let mut router = ScrollRouter::default();
        let mut popup = open_litho_process(&mut router);

        let msg = popup.update(&AppMsg::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(matches!(msg, Some(AppMsg::PopupDismissed)));
        // dismissal is a request; teardown happens in close()
        assert_eq!(popup.phase(), PopupPhase::Open);
    }

    #[test]
    fn render_establishes_scroll_extent() {
        let mut router = ScrollRouter::default();
        let mut popup = open_litho_process(&mut router);

        let screen = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(screen);
        popup.render(screen, &mut buf, true);

        assert_eq!(popup.scroll_offset(), 0);
        popup.handle_wheel(crate::event::WheelDirection::Down);
        assert_eq!(popup.scroll_offset(), 3);
        popup.handle_wheel(crate::event::WheelDirection::Up);
        popup.handle_wheel(crate::event::WheelDirection::Up);
        assert_eq!(popup.scroll_offset(), 0);
    }

    #[test]
    fn close_is_single_shot() {
        let mut router = ScrollRouter::default();
        let mut popup = open_litho_process(&mut router);

        popup.close(&mut router);
        assert_eq!(popup.phase(), PopupPhase::Closed);
        assert!(!router.is_bound());
        assert!(popup.scroll_binding().is_none());

        // a second close (window-manager path after the button path) must
        // not disturb a newer window's binding
        let replacement = router.acquire();
        popup.close(&mut router);
        assert!(router.routes_to(&replacement));
    }
}
