// Compile-time defaults for the sketches. There are no config files; the only
// runtime override is where assets live.

use std::path::PathBuf;
use std::time::Duration;

pub const SCREEN_WIDTH: usize = 640;
pub const SCREEN_HEIGHT: usize = 480;

/// Environment variable naming the asset directory.
pub const ASSETS_ENV: &str = "SKETCH_ASSETS";

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
    /// Extra sleep after each presented frame.
    pub frame_delay: Option<Duration>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pixel Sketches".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            target_fps: 60,
            frame_delay: None,
        }
    }
}

impl WindowConfig {
    pub fn titled(title: &str) -> Self {
        Self { title: title.to_string(), ..Self::default() }
    }

    pub fn with_frame_delay(mut self, millis: u64) -> Self {
        self.frame_delay = Some(Duration::from_millis(millis));
        self
    }

    /// Sleep for the configured delay, if any.
    pub fn pace(&self) {
        if let Some(delay) = self.frame_delay {
            std::thread::sleep(delay);
        }
    }
}

/// Directory that relative asset names resolve against.
pub fn asset_dir() -> PathBuf {
    resolve_asset_dir(std::env::var_os(ASSETS_ENV).map(PathBuf::from))
}

fn resolve_asset_dir(overridden: Option<PathBuf>) -> PathBuf {
    overridden.filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| PathBuf::from("assets"))
}

pub fn asset(name: &str) -> PathBuf {
    asset_dir().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_tutorial_window() {
        let cfg = WindowConfig::default();
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert!(cfg.frame_delay.is_none());
    }

    #[test]
    fn frame_delay_builder() {
        let cfg = WindowConfig::titled("shapes").with_frame_delay(60);
        assert_eq!(cfg.title, "shapes");
        assert_eq!(cfg.frame_delay, Some(Duration::from_millis(60)));
    }

    #[test]
    fn asset_dir_falls_back_to_assets() {
        assert_eq!(resolve_asset_dir(None), PathBuf::from("assets"));
        assert_eq!(resolve_asset_dir(Some(PathBuf::new())), PathBuf::from("assets"));
        assert_eq!(resolve_asset_dir(Some(PathBuf::from("/tmp/a"))), PathBuf::from("/tmp/a"));
    }
}
