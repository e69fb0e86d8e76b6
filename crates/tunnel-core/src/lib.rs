pub mod camera;
pub mod comet;
pub mod config;
pub mod constants;
pub mod dust;
pub mod math;
pub mod motion;
pub mod nebula;
pub mod pools;
pub mod quality;
pub mod quotes;
pub mod render;
pub mod simulation;
pub mod stars;
pub mod surface;

pub use camera::{Camera, ScreenPoint, Viewport};
pub use comet::{Comet, CometFlight, CometState};
pub use config::{ConfigError, TunnelBounds, TunnelConfig};
pub use motion::{ControlEvent, ControlInput, FrameMotion, MotionModel};
pub use pools::{PoolSizes, Pools};
pub use quality::QualityController;
pub use quotes::{Quote3D, QuoteScheduler, DEFAULT_PHRASES};
pub use simulation::{FrameClock, Simulation};
pub use stars::{Star, StarLayer};
pub use surface::{BlendMode, ColorStop, Paint, Rgba, Surface};
