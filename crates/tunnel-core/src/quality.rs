use crate::constants::*;
use crate::math::lerp;

/// Frame-budget controller. Smooths the instantaneous frame rate and, at most
/// once per window, nudges `quality` down when slow or up when there is
/// headroom. The caller rebuilds the pools whenever [`observe`] reports a
/// change.
///
/// [`observe`]: QualityController::observe
#[derive(Clone, Debug)]
pub struct QualityController {
    pub quality: f32,
    pub fps_smoothed: f32,
    window: f32,
    min: f32,
    max: f32,
}

impl QualityController {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            quality: 1.0f32.clamp(min, max),
            fps_smoothed: FPS_NOMINAL,
            window: 0.0,
            min,
            max,
        }
    }

    /// Feed one frame's (clamped) delta. Returns the new quality if it changed.
    pub fn observe(&mut self, dt: f32) -> Option<f32> {
        let inst_fps = if dt > 0.0 { 1.0 / dt } else { FPS_NOMINAL };
        self.fps_smoothed = lerp(self.fps_smoothed, inst_fps, FPS_BLEND);

        self.window += dt;
        if self.window <= QUALITY_WINDOW_SEC {
            return None;
        }
        self.window = 0.0;

        let before = self.quality;
        if self.fps_smoothed < FPS_LOW && self.quality > self.min {
            self.quality = (self.quality * QUALITY_DOWN_FACTOR).clamp(self.min, self.max);
        } else if self.fps_smoothed > FPS_HIGH && self.quality < QUALITY_RAISE_LIMIT.min(self.max) {
            self.quality = (self.quality * QUALITY_UP_FACTOR).clamp(self.min, self.max);
        }
        if self.quality == before {
            return None;
        }
        log::info!(
            "[quality] fps~{:.1} quality {:.3} -> {:.3}",
            self.fps_smoothed,
            before,
            self.quality
        );
        Some(self.quality)
    }
}
