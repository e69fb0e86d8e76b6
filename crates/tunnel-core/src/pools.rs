use crate::camera::Viewport;
use crate::config::TunnelConfig;
use crate::dust::DustField;
use crate::stars::StarField;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSizes {
    pub stars: usize,
    pub dust: usize,
}

impl PoolSizes {
    /// Population for a viewport at the given quality. The base unit is the
    /// CSS-pixel area over the density constant, clamped to the configured
    /// range before the per-type multipliers apply.
    pub fn for_viewport(config: &TunnelConfig, viewport: &Viewport, quality: f32) -> Self {
        let base = (viewport.css_area() / config.pool_density)
            .clamp(config.pool_base_min, config.pool_base_max);
        Self {
            stars: (base * config.star_multiplier * quality).floor() as usize,
            dust: (base * config.dust_multiplier * quality).floor() as usize,
        }
    }
}

/// Star and dust pools. Rebuilt wholesale on quality changes; in between,
/// entities are only ever recycled in place.
#[derive(Clone, Debug, Default)]
pub struct Pools {
    pub stars: StarField,
    pub dust: DustField,
}

impl Pools {
    pub fn build<R: Rng>(sizes: PoolSizes, rng: &mut R, config: &TunnelConfig) -> Self {
        let bounds = config.bounds();
        let pools = Self {
            stars: StarField::build(sizes.stars, rng, &bounds),
            dust: DustField::build(sizes.dust, rng, &bounds),
        };
        log::info!(
            "[pools] built stars={} dust={}",
            pools.stars.len(),
            pools.dust.len()
        );
        pools
    }

    pub fn sizes(&self) -> PoolSizes {
        PoolSizes {
            stars: self.stars.len(),
            dust: self.dust.len(),
        }
    }
}
