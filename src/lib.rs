// Library exports for fabviewtui

pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod event;
pub mod model;
pub mod widgets;

// Re-export the popup framework types
pub use assets::{DecodedAsset, FrameAnimator, LoadOutcome};
pub use components::popup::{PopupPhase, PopupWindow};
pub use components::scroll_panel::{ScrollBinding, ScrollRegion, ScrollRouter, ScrollablePanel};
