//! Singleton comet: inactive until a cooldown-gated spawn roll succeeds, then
//! flies across the tunnel for at most [`COMET_LIFETIME_SEC`].

use crate::config::TunnelBounds;
use crate::constants::{COMET_LIFETIME_SEC, COMET_SPAWN_CHANCE};
use crate::math::range;
use crate::motion::FrameMotion;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CometFlight {
    pub pos: Vec3,
    pub vel: Vec3,
    pub age: f32,
    /// Tail length in CSS pixels before warp stretch.
    pub tail: f32,
    pub brightness: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CometState {
    Inactive,
    Active(CometFlight),
}

#[derive(Clone, Debug)]
pub struct Comet {
    pub state: CometState,
    pub cooldown: f32,
}

impl Comet {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            state: CometState::Inactive,
            cooldown: range(rng, 1.8, 4.2),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, CometState::Active(_))
    }

    pub fn flight(&self) -> Option<&CometFlight> {
        match &self.state {
            CometState::Active(f) => Some(f),
            CometState::Inactive => None,
        }
    }

    /// Launch from a random side. No effect (returns false) while a comet is
    /// already in flight.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, bounds: &TunnelBounds) -> bool {
        if self.is_active() {
            return false;
        }
        let side = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
        let flight = CometFlight {
            pos: Vec3::new(
                side * range(rng, 0.8, 1.3) * bounds.radius,
                range(rng, -0.8, 0.8) * bounds.radius,
                range(rng, bounds.z_far * 0.55, bounds.z_far * 0.85),
            ),
            vel: Vec3::new(
                -side * range(rng, 0.55, 1.1),
                range(rng, -0.25, 0.25),
                -range(rng, 2.6, 4.2),
            ),
            age: 0.0,
            tail: range(rng, 180.0, 340.0),
            brightness: range(rng, 0.65, 1.0),
        };
        log::debug!(
            "[comet] spawn side={} z={:.0}",
            side,
            flight.pos.z
        );
        self.state = CometState::Active(flight);
        true
    }

    /// Drain the cooldown (faster at higher speed) and roll for a spawn when
    /// it expires. Only runs while inactive.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R, bounds: &TunnelBounds, motion: &FrameMotion) {
        if self.is_active() {
            return;
        }
        self.cooldown -= motion.dt * (0.75 + motion.spd_final * 0.08);
        if self.cooldown <= 0.0 {
            self.cooldown = range(rng, 2.2, 5.0);
            if rng.gen_bool(COMET_SPAWN_CHANCE) {
                self.spawn(rng, bounds);
            }
        }
    }

    pub fn update(&mut self, bounds: &TunnelBounds, motion: &FrameMotion) {
        let CometState::Active(flight) = &mut self.state else {
            return;
        };
        flight.age += motion.dt;
        flight.pos.x += flight.vel.x * motion.dt * 0.8;
        flight.pos.y += flight.vel.y * motion.dt * 0.8;
        flight.pos.z -= motion.advance * 0.75;
        flight.pos.z += flight.vel.z * motion.dt * 180.0;
        if flight.pos.z <= bounds.z_near || flight.age >= COMET_LIFETIME_SEC {
            self.state = CometState::Inactive;
        }
    }
}
