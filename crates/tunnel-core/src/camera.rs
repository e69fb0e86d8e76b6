//! Perspective projection from tunnel-local coordinates to device pixels.
//!
//! The tunnel axis is +Z (away from the viewer); X/Y are lateral offsets in
//! tunnel radii. Projection is a plain `fov / z` divide plus a warp-dependent
//! radial stretch that grows as points approach the viewer.

use crate::constants::{
    CULL_MARGIN_PX, DPR_MAX, LOOK_PROJECTION_GAIN, PROJECTION_SCALE, WARP_DISTORT_BASE,
    WARP_DISTORT_SPAN,
};
use glam::{Vec2, Vec3};

/// Raster surface dimensions in device pixels, plus the CSS size they came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub dpr: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Build from CSS size and device pixel ratio. DPR is capped at 2 and a
    /// missing/invalid ratio falls back to 1.
    pub fn from_css(css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Self {
        let dpr = if device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(DPR_MAX)
        } else {
            1.0
        };
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);
        Self {
            css_width,
            css_height,
            dpr,
            width: (css_width * dpr).floor(),
            height: (css_height * dpr).floor(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn max_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Area in CSS pixels, used for pool sizing.
    #[inline]
    pub fn css_area(&self) -> f32 {
        self.css_width * self.css_height
    }
}

/// A projected point. `dir` is the offset from screen centre and drives the
/// rotation of every streak and tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub pos: Vec2,
    pub invz: f32,
    pub dir: Vec2,
    pub culled: bool,
}

impl ScreenPoint {
    /// Unit vector pointing away from the screen centre; +X when at the centre.
    #[inline]
    pub fn outward(&self) -> Vec2 {
        let len = self.dir.length();
        if len > f32::EPSILON {
            self.dir / len
        } else {
            Vec2::X
        }
    }
}

/// Camera state for one frame. Cheap to copy; rebuilt every frame from the
/// motion model so draw passes never see stale look/warp values.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub look: Vec2,
    pub warp: f32,
    pub fov: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub viewport: Viewport,
}

impl Camera {
    /// Project a tunnel-space point. Returns `None` at or behind the near plane.
    pub fn project(&self, p: Vec3) -> Option<ScreenPoint> {
        if p.z <= self.z_near {
            return None;
        }
        let offset = self.look * LOOK_PROJECTION_GAIN;
        let k = WARP_DISTORT_BASE + self.warp * WARP_DISTORT_SPAN;
        let distort = k * (1.0 - p.z / self.z_far);
        let world = Vec2::new(p.x, p.y);
        let r = world + offset + world * distort;

        let invz = self.fov / p.z;
        let center = self.viewport.center();
        let pos = r * (invz * self.viewport.min_side() * PROJECTION_SCALE) + center;

        let w = self.viewport.width;
        let h = self.viewport.height;
        let culled = pos.x < -CULL_MARGIN_PX
            || pos.x > w + CULL_MARGIN_PX
            || pos.y < -CULL_MARGIN_PX
            || pos.y > h + CULL_MARGIN_PX;

        Some(ScreenPoint {
            pos,
            invz,
            dir: pos - center,
            culled,
        })
    }

    /// Projection that also drops culled points; what every draw pass wants.
    #[inline]
    pub fn project_visible(&self, p: Vec3) -> Option<ScreenPoint> {
        self.project(p).filter(|sp| !sp.culled)
    }
}
