// Front-end constants: DOM hooks and text rendering. Simulation tuning lives
// in `tunnel_core::constants`.

// DOM element ids / classes expected in index.html
pub const CANVAS_ID: &str = "c";
pub const START_OVERLAY_ID: &str = "start";
pub const START_BUTTON_ID: &str = "btnStart";
pub const HIDE_CLASS: &str = "hide";
pub const CINEMATIC_CLASS: &str = "cinematic";

// Text
pub const FONT_STACK: &str = "system-ui, -apple-system, Segoe UI, Roboto, Arial";
pub const MEASURE_BUCKETS_PER_PX: f32 = 4.0; // font sizes within 0.25px share cached widths
pub const MEASURE_CACHE_MAX: usize = 256; // entries before the width cache is flushed

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
