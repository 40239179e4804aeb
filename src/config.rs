use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Local storage keys
pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const THEME_STORAGE_KEY: &str = "theme";

// Scroll-triggered animation defaults
pub const DEFAULT_ANIMATION_DURATION_SECS: f64 = 0.8;
pub const DEFAULT_ANIMATION_DELAY_SECS: f64 = 0.0;
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

// Pointer parallax defaults
pub const DEFAULT_POINTER_SENSITIVITY: f64 = 0.05;
pub const DEFAULT_POINTER_EASE: f64 = 0.1;

// Scroll parallax
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.3;
pub const PARALLAX_ROOT_MARGIN: &str = "50px 0px 50px 0px";

// Smooth scrolling
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 1000.0;
pub const SMOOTH_SCROLL_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
pub const HEADER_SCROLL_OFFSET: f64 = 80.0;

// Header turns solid after this many pixels
pub const HEADER_SCROLLED_AFTER_PX: f64 = 10.0;

// Timings in milliseconds
pub const TESTIMONIAL_AUTOPLAY_MS: u32 = 5000;
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1500;
pub const CONTACT_SUCCESS_RESET_MS: u32 = 5000;
