//! Layered star pool.
//!
//! Layers differ only by parameters, so a star carries a [`StarLayer`] tag and
//! looks its constants up in [`LAYER_PRESETS`]; one update routine serves all.

use crate::config::TunnelBounds;
use crate::constants::{STAR_LAYER_SHARE_MID, STAR_LAYER_SHARE_NEAR, STAR_RECYCLE_DEPTH};
use crate::math::{range, sample_disk};
use crate::motion::FrameMotion;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StarLayer {
    /// Small and dim, spread wider than the tunnel.
    Near,
    Mid,
    /// Bright, large, may carry a halo.
    Far,
}

impl StarLayer {
    pub const ALL: [StarLayer; 3] = [StarLayer::Near, StarLayer::Mid, StarLayer::Far];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            StarLayer::Near => 0,
            StarLayer::Mid => 1,
            StarLayer::Far => 2,
        }
    }

    #[inline]
    pub fn preset(self) -> &'static LayerPreset {
        &LAYER_PRESETS[self.index()]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LayerPreset {
    /// Disk radius as a multiple of the tunnel radius.
    pub spread: f32,
    pub brightness: (f32, f32),
    pub size: (f32, f32),
    pub halo_chance: f64,
    /// Multiplier on the per-frame advance.
    pub parallax: f32,
    /// Twinkle phase rate, radians per second.
    pub twinkle_rate: f32,
}

pub const LAYER_PRESETS: [LayerPreset; 3] = [
    LayerPreset {
        spread: 1.2,
        brightness: (0.30, 0.70),
        size: (0.6, 1.1),
        halo_chance: 0.0,
        parallax: 0.92,
        twinkle_rate: 0.8,
    },
    LayerPreset {
        spread: 1.0,
        brightness: (0.55, 0.95),
        size: (0.9, 1.6),
        halo_chance: 0.0,
        parallax: 0.98,
        twinkle_rate: 1.15,
    },
    LayerPreset {
        spread: 0.85,
        brightness: (0.85, 1.25),
        size: (1.2, 2.4),
        halo_chance: 0.65,
        parallax: 1.02,
        twinkle_rate: 1.5,
    },
];

#[derive(Clone, Debug)]
pub struct Star {
    pub layer: StarLayer,
    pub pos: Vec3,
    pub base: f32,
    pub twinkle: f32,
    pub size: f32,
    pub halo: bool,
    /// 0..1, shifts the colour between violet and cyan.
    pub tint: f32,
}

impl Star {
    pub fn new<R: Rng>(layer: StarLayer, rng: &mut R, bounds: &TunnelBounds) -> Self {
        let mut star = Star {
            layer,
            pos: Vec3::ZERO,
            base: 0.0,
            twinkle: 0.0,
            size: 0.0,
            halo: false,
            tint: 0.0,
        };
        star.reset(rng, bounds, true);
        star
    }

    /// Redraw this star in place. `initial` spreads it over the full depth
    /// range; otherwise it reappears in the far band.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, bounds: &TunnelBounds, initial: bool) {
        let preset = self.layer.preset();
        let (x, y) = sample_disk(rng, bounds.radius * preset.spread);
        let z = if initial {
            bounds.initial_depth(rng)
        } else {
            bounds.recycle_depth(rng, STAR_RECYCLE_DEPTH)
        };
        self.pos = Vec3::new(x, y, z);
        self.base = range(rng, preset.brightness.0, preset.brightness.1);
        self.twinkle = rng.gen::<f32>() * std::f32::consts::TAU;
        self.size = range(rng, preset.size.0, preset.size.1);
        self.halo = preset.halo_chance > 0.0 && rng.gen_bool(preset.halo_chance);
        self.tint = rng.gen();
    }
}

/// Per-layer population for `total` stars: 68% near, 25% mid, rest far.
pub fn layer_split(total: usize) -> [usize; 3] {
    let near = (total as f32 * STAR_LAYER_SHARE_NEAR).floor() as usize;
    let mid = (total as f32 * STAR_LAYER_SHARE_MID).floor() as usize;
    [near, mid, total.saturating_sub(near + mid)]
}

#[derive(Clone, Debug, Default)]
pub struct StarField {
    pub stars: Vec<Star>,
}

impl StarField {
    pub fn build<R: Rng>(total: usize, rng: &mut R, bounds: &TunnelBounds) -> Self {
        let mut stars = Vec::with_capacity(total);
        for (layer, count) in StarLayer::ALL.into_iter().zip(layer_split(total)) {
            stars.extend((0..count).map(|_| Star::new(layer, rng, bounds)));
        }
        Self { stars }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Move every star toward the viewer; anything at or past the near plane
    /// is recycled in the same step. Returns how many were recycled.
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        bounds: &TunnelBounds,
        motion: &FrameMotion,
    ) -> usize {
        let mut recycled = 0;
        for star in &mut self.stars {
            let preset = star.layer.preset();
            star.pos.z -= motion.advance * preset.parallax;
            if star.pos.z <= bounds.z_near {
                star.reset(rng, bounds, false);
                recycled += 1;
            }
            star.twinkle += motion.dt * preset.twinkle_rate;
        }
        recycled
    }
}
