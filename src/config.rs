//! Application configuration constants.

use std::time::Duration;

/// Supported image file extensions for the file dialog and drag and drop.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Reveal position bounds, in percent of the stage width.
pub const POSITION_MIN: f32 = 0.0;
pub const POSITION_MAX: f32 = 100.0;
pub const DEFAULT_POSITION: f32 = 50.0;

/// Per-tick increment bounds for auto-play.
pub const SPEED_MIN: f32 = 0.1;
pub const SPEED_MAX: f32 = 5.0;
pub const DEFAULT_SPEED: f32 = 1.0;

/// Granularity of both sliders.
pub const SLIDER_STEP: f32 = 0.1;

/// Auto-play tick period (~60fps).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
