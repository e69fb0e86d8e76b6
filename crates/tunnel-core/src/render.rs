//! Draw passes. Each pass is a free function over a [`Surface`], runs inside
//! its own save/restore pair and sets its own compositing mode, so pass order
//! alone decides what ends up on top (painter's algorithm, no depth buffer).
//!
//! Pass order per frame, driven by [`crate::Simulation::frame`]:
//! background/nebula/vignette, dust, stars (normal), stars (glow/streak),
//! quote panels, speed lines, comet.

use crate::camera::Camera;
use crate::motion::FrameMotion;
use glam::Vec2;

mod background;
mod panels;
mod particles;
mod streaks;

pub use background::draw_background;
pub use panels::draw_quotes;
pub use particles::{draw_dust, draw_stars_glow, draw_stars_normal};
pub use streaks::{draw_comet, draw_speed_lines};

/// Read-only per-frame inputs shared by every pass.
#[derive(Clone, Copy, Debug)]
pub struct FrameView {
    pub camera: Camera,
    pub motion: FrameMotion,
    /// Seconds since the simulation was created; drives twinkle and nebula drift.
    pub elapsed: f32,
    pub quality: f32,
}

impl FrameView {
    #[inline]
    pub fn dpr(&self) -> f32 {
        self.camera.viewport.dpr
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.camera.viewport.width, self.camera.viewport.height)
    }

    /// 0 at the far plane, 1 at the viewer.
    #[inline]
    pub fn fog(&self, z: f32) -> f32 {
        1.0 - (z / self.camera.z_far).clamp(0.0, 1.0)
    }
}
