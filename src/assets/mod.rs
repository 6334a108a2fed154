pub mod animator;
pub mod loader;

pub use animator::FrameAnimator;
pub use loader::{DecodedAsset, LoadOutcome};
