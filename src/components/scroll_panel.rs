// Viewport/scroll math shared by popups, plus the wheel-event route.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

use crate::event::WheelDirection;

/// A fixed viewport over taller content. The offset is always clamped to
/// `[0, content - viewport]`, including after content shrinks.
#[derive(Debug, Default)]
pub struct ScrollRegion {
    viewport: usize,
    content: usize,
    offset: usize,
}

impl ScrollRegion {
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
        self.clamp();
    }

    pub fn set_content(&mut self, rows: usize) {
        self.content = rows;
        self.clamp();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn content(&self) -> usize {
        self.content
    }

    pub fn max_offset(&self) -> usize {
        self.content.saturating_sub(self.viewport)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Routes wheel events to the popup that currently owns the binding.
///
/// Replaces the ambient process-wide hook of a classic toolkit: a popup
/// acquires a `ScrollBinding` when it opens and must hand it back during
/// teardown. Release consumes the handle, so a binding cannot outlive its
/// release.
#[derive(Debug, Default)]
pub struct ScrollRouter {
    active: Option<u64>,
    next_id: u64,
}

/// The wheel-route handle held by an open popup.
#[derive(Debug, PartialEq, Eq)]
pub struct ScrollBinding(u64);

impl ScrollRouter {
    pub fn acquire(&mut self) -> ScrollBinding {
        self.next_id += 1;
        self.active = Some(self.next_id);
        ScrollBinding(self.next_id)
    }

    pub fn release(&mut self, binding: ScrollBinding) {
        // a stale handle from an already-replaced binding must not clear the
        // active one
        if self.active == Some(binding.0) {
            self.active = None;
        }
    }

    pub fn routes_to(&self, binding: &ScrollBinding) -> bool {
        self.active == Some(binding.0)
    }

    pub fn is_bound(&self) -> bool {
        self.active.is_some()
    }
}

/// Scroll state plus the scrollbar rendered alongside popup content.
#[derive(Debug, Default)]
pub struct ScrollablePanel {
    region: ScrollRegion,
    scroll_state: ScrollbarState,
}

impl ScrollablePanel {
    const WHEEL_STEP: isize = 3;

    /// Recomputes the scrollable extent from the measured layout. Called
    /// every frame so resizes and content changes stay consistent with the
    /// scrollbar thumb.
    pub fn update_extent(&mut self, viewport_rows: usize, content_rows: usize) {
        self.region.set_viewport(viewport_rows);
        self.region.set_content(content_rows);
        self.scroll_state = self
            .scroll_state
            .content_length(self.region.content())
            .position(self.region.offset());
    }

    pub fn offset(&self) -> usize {
        self.region.offset()
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.region.scroll_by(delta);
        self.scroll_state = self.scroll_state.position(self.region.offset());
    }

    pub fn handle_wheel(&mut self, direction: WheelDirection) {
        match direction {
            WheelDirection::Up => self.scroll_by(-Self::WHEEL_STEP),
            WheelDirection::Down => self.scroll_by(Self::WHEEL_STEP),
        }
    }

    pub fn render_scrollbar(&mut self, area: Rect, buf: &mut Buffer) {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"));
        StatefulWidget::render(scrollbar, area, buf, &mut self.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clamps_to_scrollable_range() {
        let mut region = ScrollRegion::default();
        region.set_viewport(10);
        region.set_content(25);

        region.scroll_by(-5);
        assert_eq!(region.offset(), 0);

        region.scroll_by(100);
        assert_eq!(region.offset(), 15);
    }

    #[test]
    fn content_shrink_reclamps_offset() {
        let mut region = ScrollRegion::default();
        region.set_viewport(10);
        region.set_content(50);
        region.scroll_by(40);
        assert_eq!(region.offset(), 40);

        region.set_content(12);
        assert_eq!(region.offset(), 2);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut region = ScrollRegion::default();
        region.set_viewport(20);
        region.set_content(5);

        region.scroll_by(3);
        assert_eq!(region.offset(), 0);
        assert_eq!(region.max_offset(), 0);
    }

    #[test]
    fn router_release_unbinds() {
        let mut router = ScrollRouter::default();
        assert!(!router.is_bound());

        let binding = router.acquire();
        assert!(router.is_bound());
        assert!(router.routes_to(&binding));

        router.release(binding);
        assert!(!router.is_bound());
    }

    #[test]
    fn stale_binding_does_not_clear_replacement() {
        let mut router = ScrollRouter::default();
        let old = router.acquire();
        let new = router.acquire();

        assert!(!router.routes_to(&old));
        assert!(router.routes_to(&new));

        router.release(old);
        assert!(router.is_bound());
        assert!(router.routes_to(&new));
    }

    #[test]
    fn wheel_events_move_panel_by_step() {
        let mut panel = ScrollablePanel::default();
        panel.update_extent(10, 40);

        panel.handle_wheel(WheelDirection::Down);
        panel.handle_wheel(WheelDirection::Down);
        assert_eq!(panel.offset(), 6);

        panel.handle_wheel(WheelDirection::Up);
        assert_eq!(panel.offset(), 3);

        panel.handle_wheel(WheelDirection::Up);
        panel.handle_wheel(WheelDirection::Up);
        assert_eq!(panel.offset(), 0);
    }
}
