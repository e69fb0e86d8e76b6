use crate::config::TunnelBounds;
use crate::constants::{
    DUST_PARALLAX, DUST_RECYCLE_DEPTH, DUST_SPARK_CHANCE, DUST_SPREAD, DUST_WARP_PARALLAX,
};
use crate::math::{range, sample_disk};
use crate::motion::FrameMotion;
use glam::Vec3;
use rand::Rng;

/// Fine, dim particle. A few are sparks that grow a glow ring under warp.
#[derive(Clone, Debug)]
pub struct Dust {
    pub pos: Vec3,
    pub size: f32,
    pub alpha: f32,
    pub spark: bool,
}

impl Dust {
    pub fn new<R: Rng>(rng: &mut R, bounds: &TunnelBounds) -> Self {
        let mut dust = Dust {
            pos: Vec3::ZERO,
            size: 0.0,
            alpha: 0.0,
            spark: false,
        };
        dust.reset(rng, bounds, true);
        dust
    }

    pub fn reset<R: Rng>(&mut self, rng: &mut R, bounds: &TunnelBounds, initial: bool) {
        let (x, y) = sample_disk(rng, bounds.radius * DUST_SPREAD);
        let z = if initial {
            bounds.initial_depth(rng)
        } else {
            bounds.recycle_depth(rng, DUST_RECYCLE_DEPTH)
        };
        self.pos = Vec3::new(x, y, z);
        self.size = range(rng, 0.8, 2.6);
        self.alpha = range(rng, 0.05, 0.18);
        self.spark = rng.gen_bool(DUST_SPARK_CHANCE);
    }
}

#[derive(Clone, Debug, Default)]
pub struct DustField {
    pub motes: Vec<Dust>,
}

impl DustField {
    pub fn build<R: Rng>(count: usize, rng: &mut R, bounds: &TunnelBounds) -> Self {
        Self {
            motes: (0..count).map(|_| Dust::new(rng, bounds)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.motes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }

    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        bounds: &TunnelBounds,
        motion: &FrameMotion,
    ) -> usize {
        let step = motion.advance * (DUST_PARALLAX + motion.warp_ease * DUST_WARP_PARALLAX);
        let mut recycled = 0;
        for mote in &mut self.motes {
            mote.pos.z -= step;
            if mote.pos.z <= bounds.z_near {
                mote.reset(rng, bounds, false);
                recycled += 1;
            }
        }
        recycled
    }
}
