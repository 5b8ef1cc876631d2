use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// E-book offered after every lead form. Change the filename here when the
// guide is updated.
pub const EBOOK_FILENAME: &str = "ebook-m2-ultimate.pdf";
pub const EBOOK_DIR: &str = "assets/ebook";
pub const BLOG_SEGMENT: &str = "/blog/";

pub const THEME_STORAGE_KEY: &str = "theme";

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const STICKY_BAR_TRIGGER_RATIO: f64 = 0.6;

pub const RIPPLE_LIFETIME_MS: u32 = 600;

pub const TYPED_TEXT: &str = "Crescimento não é sorte... é sistema.";
pub const TYPED_CHAR_DELAY_MS: u32 = 80;

pub const COUNTER_FRAMES: u32 = 100;

pub const PARALLAX_SPEED: f64 = 0.2;
pub const TILT_STRENGTH_DEG: f64 = 10.0;
