// Best-effort image loading for popup sections

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use image::codecs::gif::GifDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, RgbaImage};

/// An in-memory, already-resized image ready for display.
#[derive(Clone, Debug)]
pub enum DecodedAsset {
    Still(RgbaImage),
    Animated(Vec<RgbaImage>),
}

impl DecodedAsset {
    pub fn is_animated(&self) -> bool {
        matches!(self, DecodedAsset::Animated(_))
    }

    pub fn frame_count(&self) -> usize {
        match self {
            DecodedAsset::Still(_) => 1,
            DecodedAsset::Animated(frames) => frames.len(),
        }
    }

    pub fn frames(&self) -> &[RgbaImage] {
        match self {
            DecodedAsset::Still(img) => std::slice::from_ref(img),
            DecodedAsset::Animated(frames) => frames,
        }
    }
}

/// Result of a load attempt. A failed load never escapes as an error; the
/// caller omits the image and forwards the reason to the log pane.
#[derive(Clone, Debug)]
pub enum LoadOutcome {
    Ready(DecodedAsset),
    Unavailable { reason: String },
}

impl LoadOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadOutcome::Ready(_))
    }
}

/// Loads an image from disk, scaled to `target_width` with aspect ratio
/// preserved. GIFs yield all frames; anything else a single bitmap.
pub fn load(path: &Path, target_width: u32) -> LoadOutcome {
    if !path.is_file() {
        return LoadOutcome::Unavailable {
            reason: format!("{}: file not found", path.display()),
        };
    }

    let is_gif = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));

    let result = if is_gif {
        load_animated(path, target_width)
    } else {
        load_still(path, target_width)
    };

    match result {
        Ok(asset) => LoadOutcome::Ready(asset),
        Err(e) => LoadOutcome::Unavailable {
            reason: format!("{}: {:#}", path.display(), e),
        },
    }
}

fn scaled_size(width: u32, height: u32, target_width: u32) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        bail!("image has zero dimension");
    }
    let target_height = (u64::from(target_width) * u64::from(height) / u64::from(width)) as u32;
    Ok((target_width, target_height.max(1)))
}

fn load_still(path: &Path, target_width: u32) -> Result<DecodedAsset> {
    let img = image::ImageReader::open(path)
        .context("failed to open image")?
        .decode()
        .context("failed to decode image")?;
    let (w, h) = scaled_size(img.width(), img.height(), target_width)?;
    let resized = img.resize_exact(w, h, FilterType::Lanczos3).to_rgba8();
    Ok(DecodedAsset::Still(resized))
}

fn load_animated(path: &Path, target_width: u32) -> Result<DecodedAsset> {
    let reader = BufReader::new(File::open(path).context("failed to open GIF")?);
    let decoder = GifDecoder::new(reader).context("failed to read GIF header")?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .context("failed to decode GIF frames")?;

    let first = match frames.first() {
        Some(f) => f.buffer(),
        None => bail!("GIF has no frames"),
    };
    let (w, h) = scaled_size(first.width(), first.height(), target_width)?;

    let mut resized: Vec<RgbaImage> = Vec::with_capacity(frames.len());
    for frame in frames {
        resized.push(image::imageops::resize(
            frame.buffer(),
            w,
            h,
            FilterType::Lanczos3,
        ));
    }

    if resized.len() == 1 {
        Ok(DecodedAsset::Still(resized.remove(0)))
    } else {
        Ok(DecodedAsset::Animated(resized))
    }
}
