// Popup lifecycle scenarios with on-disk image fixtures.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use image::codecs::gif::GifEncoder;
use image::{Frame, Rgba, RgbaImage};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_image::picker::Picker;
use tempfile::TempDir;

use super::Component;
use super::popup::{PopupPhase, PopupWindow};
use super::scroll_panel::ScrollRouter;
use crate::config::Config;
use crate::event::AppMsg;
use crate::model::section::{Category, SectionRecord, Topic};

const INTERVAL: Duration = Duration::from_millis(100);

fn flat(width: u32, height: u32, shade: u8) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([shade, shade, 255 - shade, 255]))
}

fn write_fixtures(dir: &Path) {
    flat(64, 32, 40).save(dir.join("still.png")).unwrap();

    let file = File::create(dir.join("anim.gif")).unwrap();
    let mut encoder = GifEncoder::new(file);
    encoder
        .encode_frames((0..4u8).map(|i| Frame::new(flat(32, 32, i * 50))))
        .unwrap();
}

fn fixture_topic() -> Topic {
    Topic {
        title: "Fixture Topic".to_string(),
        category: Category::Lithography,
        sections: vec![
            SectionRecord::new("First", "A section with a still image.", Some("still.png")),
            SectionRecord::new("Second", "A section with an animation.", Some("anim.gif")),
            SectionRecord::new("Third", "A section whose image is gone.", Some("absent.png")),
        ],
    }
}

fn open_fixture(dir: &TempDir, router: &mut ScrollRouter) -> (PopupWindow, Receiver<AppMsg>) {
    write_fixtures(dir.path());
    let config = Config {
        litho_image_dir: dir.path().to_path_buf(),
        frame_interval: INTERVAL,
        ..Config::default()
    };
    let mut picker = Picker::from_fontsize((8, 16));
    let (tx, rx) = crossbeam_channel::unbounded();
    let popup = PopupWindow::open(&mut picker, fixture_topic(), &config, router, &tx);
    (popup, rx)
}

fn run_ticks(popup: &mut PopupWindow, n: u32) {
    let mut t = Instant::now() + INTERVAL;
    for _ in 0..n {
        popup.advance_animations(t);
        t += INTERVAL;
    }
}

#[test]
fn three_sections_yield_exactly_two_images() {
    let dir = TempDir::new().unwrap();
    let mut router = ScrollRouter::default();
    let (mut popup, rx) = open_fixture(&dir, &mut router);

    assert_eq!(popup.loaded_image_count(), 2);

    // the missing asset is logged, not surfaced
    let logged: Vec<AppMsg> = rx.try_iter().collect();
    assert_eq!(logged.len(), 1);
    match &logged[0] {
        AppMsg::LogMessage(msg) => assert!(msg.contains("absent.png"), "log: {}", msg),
        other => panic!("unexpected message: {:?}", other),
    }

    // the popup still renders all three sections
    let screen = Rect::new(0, 0, 120, 40);
    let mut buf = Buffer::empty(screen);
    popup.render(screen, &mut buf, true);
    assert_eq!(popup.phase(), PopupPhase::Open);
}

#[test]
fn only_the_animated_section_gets_an_animator() {
    let dir = TempDir::new().unwrap();
    let mut router = ScrollRouter::default();
    let (popup, _rx) = open_fixture(&dir, &mut router);

    assert_eq!(popup.pending_animations(), 1);
    assert_eq!(popup.displayed_frame(0), Some(0));
    assert_eq!(popup.displayed_frame(1), Some(0));
    assert_eq!(popup.displayed_frame(2), None);
}

#[test]
fn six_ticks_on_four_frames_show_frame_two() {
    let dir = TempDir::new().unwrap();
    let mut router = ScrollRouter::default();
    let (mut popup, _rx) = open_fixture(&dir, &mut router);

    run_ticks(&mut popup, 6);
    assert_eq!(popup.displayed_frame(1), Some(2));
    // the still image never advances
    assert_eq!(popup.displayed_frame(0), Some(0));
}

#[test]
fn close_mid_animation_cancels_pending_ticks() {
    let dir = TempDir::new().unwrap();
    let mut router = ScrollRouter::default();
    let (mut popup, _rx) = open_fixture(&dir, &mut router);

    run_ticks(&mut popup, 2);
    assert_eq!(popup.displayed_frame(1), Some(2));

    popup.close(&mut router);
    assert_eq!(popup.phase(), PopupPhase::Closed);
    assert_eq!(popup.pending_animations(), 0);
    assert!(!router.is_bound());

    // no further frame updates after teardown
    run_ticks(&mut popup, 5);
    assert_eq!(popup.displayed_frame(1), Some(2));
}

#[test]
fn wheel_routes_only_while_binding_is_held() {
    let dir = TempDir::new().unwrap();
    let mut router = ScrollRouter::default();
    let (mut popup, _rx) = open_fixture(&dir, &mut router);

    let binding = popup.scroll_binding().expect("open popup holds a binding");
    assert!(router.routes_to(binding));

    popup.close(&mut router);
    assert!(popup.scroll_binding().is_none());
    assert!(!router.is_bound());
}
