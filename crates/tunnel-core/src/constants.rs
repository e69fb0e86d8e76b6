// Tunnel tuning constants shared by the simulation and the render passes.

// World / projection
pub const FOV: f32 = 560.0; // inverse-depth scale, not an angle
pub const TUNNEL_RADIUS: f32 = 1.15;
pub const Z_NEAR: f32 = 8.0;
pub const Z_FAR: f32 = 2400.0;
pub const PROJECTION_SCALE: f32 = 0.55; // fraction of min(W, H) mapped to one world unit at invz = 1
pub const LOOK_PROJECTION_GAIN: f32 = 0.75;
pub const WARP_DISTORT_BASE: f32 = 0.06;
pub const WARP_DISTORT_SPAN: f32 = 0.10;
pub const CULL_MARGIN_PX: f32 = 240.0; // device pixels, not scaled by DPR

// Motion
pub const BASE_SPEED: f32 = 520.0; // world units per second at speed 1
pub const SPEED_MIN: f32 = 0.25;
pub const SPEED_MAX: f32 = 8.0;
pub const IDLE_TARGET_SPEED: f32 = 0.55;
pub const IDLE_ADVANCE_FACTOR: f32 = 0.15; // drift before start
pub const DT_MAX: f32 = 0.04;
pub const ACCEL_RATE: f32 = 1.4;
pub const WHEEL_SLOWER: f32 = 0.92;
pub const WHEEL_FASTER: f32 = 1.08;
pub const WARP_SPEED_GAIN: f32 = 2.2;
pub const BOOST_SPEED_GAIN: f32 = 0.65;

// First-order easing rates (per frame)
pub const POINTER_EASE: f32 = 0.06;
pub const LOOK_EASE: f32 = 0.08;
pub const SPEED_EASE: f32 = 0.045;
pub const WARP_EASE: f32 = 0.045;
pub const BOOST_EASE: f32 = 0.06;
pub const IDLE_SPEED_EASE: f32 = 0.03;

// Look / sway
pub const LOOK_GAIN_X: f32 = 0.55;
pub const LOOK_GAIN_Y: f32 = 0.42;
pub const LOOK_WARP_DAMPING: f32 = 0.25;
pub const SWAY_RATE_BASE: f32 = 0.55;
pub const SWAY_RATE_SPEED: f32 = 0.12;

// Pool sizing
pub const POOL_DENSITY: f32 = 9000.0; // CSS pixels per base unit
pub const POOL_BASE_MIN: f32 = 70.0;
pub const POOL_BASE_MAX: f32 = 220.0;
pub const STAR_MULTIPLIER: f32 = 12.0;
pub const DUST_MULTIPLIER: f32 = 6.0;
pub const STAR_LAYER_SHARE_NEAR: f32 = 0.68;
pub const STAR_LAYER_SHARE_MID: f32 = 0.25;
pub const STAR_RECYCLE_DEPTH: f32 = 0.65; // fraction of z_far
pub const DUST_RECYCLE_DEPTH: f32 = 0.6;

// Dust
pub const DUST_SPREAD: f32 = 1.35;
pub const DUST_PARALLAX: f32 = 0.68;
pub const DUST_WARP_PARALLAX: f32 = 0.10;
pub const DUST_SPARK_CHANCE: f64 = 0.06;

// Quality controller
pub const QUALITY_MIN: f32 = 0.65;
pub const QUALITY_MAX: f32 = 1.15;
pub const QUALITY_RAISE_LIMIT: f32 = 1.05; // no raise once quality reaches this
pub const QUALITY_DOWN_FACTOR: f32 = 0.92;
pub const QUALITY_UP_FACTOR: f32 = 1.03;
pub const FPS_LOW: f32 = 52.0;
pub const FPS_HIGH: f32 = 58.0;
pub const FPS_BLEND: f32 = 0.08;
pub const FPS_NOMINAL: f32 = 60.0;
pub const QUALITY_WINDOW_SEC: f32 = 0.6;

// Quotes
pub const QUOTE_CAP: usize = 4;
pub const QUOTE_FIRST_DELAY_SEC: f32 = 1.0;
pub const QUOTE_CADENCE_SLOW: f32 = 3.9;
pub const QUOTE_CADENCE_FAST: f32 = 2.7;
pub const QUOTE_CADENCE_WARP: f32 = 0.15;
pub const QUOTE_JITTER_MIN: f32 = 0.4;
pub const QUOTE_JITTER_MAX: f32 = 1.1;
pub const QUOTE_FADE_IN_SEC: f32 = 1.2;
pub const QUOTE_FADE_OUT_SEC: f32 = 1.4;
pub const QUOTE_ALPHA_MAX: f32 = 0.78;
pub const QUOTE_ALPHA_CUTOFF: f32 = 0.02;
pub const QUOTE_SCALE_MIN: f32 = 0.62;
pub const QUOTE_SCALE_MAX: f32 = 1.02;
pub const QUOTE_WARP_RECEDE: f32 = 18.0; // world units per second at full warp
pub const QUOTE_FONT_WEIGHT: u16 = 650;

// Comet
pub const COMET_LIFETIME_SEC: f32 = 1.2;
pub const COMET_SPAWN_CHANCE: f64 = 0.55;

// Render thresholds
pub const STAR_NORMAL_PASS_MAX_WARP: f32 = 0.2;
pub const STAR_STREAK_MIN_WARP: f32 = 0.12;
pub const DUST_SPARK_RING_MIN_WARP: f32 = 0.2;
pub const SPEED_LINES_MIN_WARP: f32 = 0.05;
pub const SPEED_LINES_BASE_COUNT: f32 = 18.0;
pub const STREAK_MAX_PX: f32 = 520.0; // multiplied by DPR
pub const VIGNETTE_ALPHA: f32 = 0.18;

// Viewport
pub const DPR_MAX: f32 = 2.0;
