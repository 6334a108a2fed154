use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub litho_image_dir: PathBuf,
    pub char_image_dir: PathBuf,
    pub image_width: u32,
    pub frame_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            litho_image_dir: PathBuf::from("litho_images"),
            char_image_dir: PathBuf::from("char_images"),
            image_width: 350,
            frame_interval: Duration::from_millis(100),
        }
    }
}
