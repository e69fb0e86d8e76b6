//! Initialisation-time tunables.
//!
//! Everything here is fixed for the lifetime of a [`crate::Simulation`]; there
//! is no runtime reconfiguration and no config file.

use crate::constants::*;
use crate::math::range;
use crate::quotes::DEFAULT_PHRASES;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("phrase list must not be empty")]
    EmptyPhrases,
    #[error("near plane ({near}) must be in front of far plane ({far})")]
    InvertedDepthRange { near: f32, far: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("quality bounds [{min}, {max}] are invalid")]
    QualityBounds { min: f32, max: f32 },
    #[error("pool base range [{min}, {max}] is invalid")]
    PoolBounds { min: f32, max: f32 },
    #[error("quote cap must be at least 1")]
    ZeroQuoteCap,
}

#[derive(Clone, Debug)]
pub struct TunnelConfig {
    pub fov: f32,
    pub tunnel_radius: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub base_speed: f32,
    pub quality_min: f32,
    pub quality_max: f32,
    pub pool_density: f32,
    pub pool_base_min: f32,
    pub pool_base_max: f32,
    pub star_multiplier: f32,
    pub dust_multiplier: f32,
    pub quote_cap: usize,
    pub phrases: &'static [&'static str],
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            fov: FOV,
            tunnel_radius: TUNNEL_RADIUS,
            z_near: Z_NEAR,
            z_far: Z_FAR,
            base_speed: BASE_SPEED,
            quality_min: QUALITY_MIN,
            quality_max: QUALITY_MAX,
            pool_density: POOL_DENSITY,
            pool_base_min: POOL_BASE_MIN,
            pool_base_max: POOL_BASE_MAX,
            star_multiplier: STAR_MULTIPLIER,
            dust_multiplier: DUST_MULTIPLIER,
            quote_cap: QUOTE_CAP,
            phrases: DEFAULT_PHRASES,
        }
    }
}

/// Depth/radius limits every pooled entity samples from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunnelBounds {
    pub radius: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl TunnelBounds {
    /// Depth in `(z_near, z_far]`, for a freshly built population.
    pub fn initial_depth<R: Rng>(&self, rng: &mut R) -> f32 {
        let z = self.z_far - rng.gen::<f32>() * (self.z_far - self.z_near);
        if z > self.z_near {
            z
        } else {
            self.z_far
        }
    }

    /// Depth in `[frac * z_far, z_far)`, for an entity recycled past the near
    /// plane. Never exactly `z_far`, so recycled particles do not pop in on
    /// the far edge.
    pub fn recycle_depth<R: Rng>(&self, rng: &mut R, frac: f32) -> f32 {
        let lo = self.z_far * frac;
        if lo <= self.z_near {
            return self.initial_depth(rng);
        }
        range(rng, lo, self.z_far)
    }
}

impl TunnelConfig {
    pub fn bounds(&self) -> TunnelBounds {
        TunnelBounds {
            radius: self.tunnel_radius,
            z_near: self.z_near,
            z_far: self.z_far,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        for (name, value) in [
            ("fov", self.fov),
            ("tunnel_radius", self.tunnel_radius),
            ("z_near", self.z_near),
            ("base_speed", self.base_speed),
            ("pool_density", self.pool_density),
            ("star_multiplier", self.star_multiplier),
            ("dust_multiplier", self.dust_multiplier),
        ] {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.z_near >= self.z_far {
            return Err(ConfigError::InvertedDepthRange {
                near: self.z_near,
                far: self.z_far,
            });
        }
        if !(self.quality_min > 0.0) || self.quality_min > self.quality_max {
            return Err(ConfigError::QualityBounds {
                min: self.quality_min,
                max: self.quality_max,
            });
        }
        if !(self.pool_base_min > 0.0) || self.pool_base_min > self.pool_base_max {
            return Err(ConfigError::PoolBounds {
                min: self.pool_base_min,
                max: self.pool_base_max,
            });
        }
        if self.quote_cap == 0 {
            return Err(ConfigError::ZeroQuoteCap);
        }
        Ok(())
    }
}
