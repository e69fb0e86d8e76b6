//! Floating text panels that drift through the middle of the tunnel.
//!
//! Panels are spawned on a speed-biased cadence, fade in and out on a fixed
//! envelope and never come close to the camera: they sit in a mid-depth band
//! and recede slightly under warp so they do not fight the streaks.

use crate::config::TunnelBounds;
use crate::constants::*;
use crate::math::{lerp, range, sample_disk, smoothstep};
use crate::motion::FrameMotion;
use glam::{Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;

pub const DEFAULT_PHRASES: &[&str] = &[
    "If the world feels heavy, rest here a while.",
    "You are a lovely place where life likes to stay.",
    "Not every question has an answer, but you are not alone in asking.",
    "Your heart does not have to be strong all the time.",
    "Easy now. Life knows how to wait for you too.",
    "You don't have to light up everything. Just keep your own light on.",
    "Some things only bloom in their own time, like you.",
    "Even on cloudy days, you are still the sky.",
    "Being gentle with yourself is a kind of courage.",
    "May life hold you the way you deserve.",
    "Your smile will still save many of your days.",
    "Go easy on yourself. Even stars take time to be born.",
    "Getting lost sometimes is part of finding yourself.",
    "You are not alone, not even when the silence gets loud.",
    "What is yours always learns the way back.",
    "Stay. The world is better with you in it.",
    "Your heart deserves the patience you give to others.",
    "No need to rush. Beautiful things don't like hurry.",
    "May today be light, and if it isn't, may you be.",
    "Somewhere ahead, a future you is smiling back.",
];

/// Anchor band as fractions of `z_far`.
const DEPTH_BAND: (f32, f32) = (0.52, 0.72);
const ANCHOR_RADIUS: f32 = 0.26; // tunnel radii
const ANCHOR_SQUASH_Y: f32 = 0.55;
const SHIMMER_RATE: f32 = 0.7;
const SCALE_GAIN: f32 = 1.22;

#[derive(Clone, Debug)]
pub struct Quote3D {
    pub text: &'static str,
    pub pos: Vec3,
    /// Lateral drift, tunnel radii per second.
    pub vel: Vec2,
    pub age: f32,
    pub life: f32,
    /// Font size in CSS pixels before depth scaling.
    pub base_size: f32,
    pub seed: f32,
    pub shimmer_phase: f32,
}

/// Fade envelope: 1.2 s in, 1.4 s out ending exactly at `life`, peak 0.78.
pub fn quote_alpha(age: f32, life: f32) -> f32 {
    let fade_in = smoothstep(0.0, QUOTE_FADE_IN_SEC, age);
    let fade_out = 1.0 - smoothstep(life - QUOTE_FADE_OUT_SEC, life, age);
    (fade_in * fade_out).clamp(0.0, 1.0) * QUOTE_ALPHA_MAX
}

/// Depth scale for a panel, kept within a legible band regardless of depth.
#[inline]
pub fn quote_scale(invz: f32) -> f32 {
    (invz * SCALE_GAIN).clamp(QUOTE_SCALE_MIN, QUOTE_SCALE_MAX)
}

impl Quote3D {
    pub fn new<R: Rng>(text: &'static str, rng: &mut R, bounds: &TunnelBounds) -> Self {
        let (x, y) = sample_disk(rng, bounds.radius * ANCHOR_RADIUS);
        Self {
            text,
            pos: Vec3::new(
                x,
                y * ANCHOR_SQUASH_Y,
                range(rng, bounds.z_far * DEPTH_BAND.0, bounds.z_far * DEPTH_BAND.1),
            ),
            vel: Vec2::new(range(rng, -0.018, 0.018), range(rng, -0.012, 0.012)),
            age: 0.0,
            life: range(rng, 6.2, 9.0),
            base_size: range(rng, 18.0, 26.0),
            seed: rng.gen::<f32>() * 999.0,
            shimmer_phase: rng.gen::<f32>() * std::f32::consts::TAU,
        }
    }

    /// Advance one frame; returns false once the panel has expired.
    pub fn update(&mut self, dt: f32, warp_ease: f32) -> bool {
        self.age += dt;
        self.pos.x += self.vel.x * dt;
        self.pos.y += self.vel.y * dt;
        self.shimmer_phase += dt * SHIMMER_RATE;
        self.pos.z += warp_ease * QUOTE_WARP_RECEDE * dt;
        self.age < self.life
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        quote_alpha(self.age, self.life)
    }

    #[inline]
    pub fn shimmer(&self) -> f32 {
        0.95 + (self.shimmer_phase + self.seed).sin() * 0.05
    }
}

#[derive(Clone, Debug)]
pub struct QuoteScheduler {
    pub quotes: SmallVec<[Quote3D; QUOTE_CAP]>,
    pub timer: f32,
    /// Monotonic; the phrase shown is `index % phrases.len()`.
    pub index: usize,
    phrases: &'static [&'static str],
    cap: usize,
}

impl QuoteScheduler {
    /// `phrases` must be non-empty; [`crate::TunnelConfig::validate`] checks it.
    pub fn new(phrases: &'static [&'static str], cap: usize) -> Self {
        Self {
            quotes: SmallVec::new(),
            timer: QUOTE_FIRST_DELAY_SEC,
            index: 0,
            phrases,
            cap: cap.max(1),
        }
    }

    /// Spawn interval before jitter: 3.9 s at cruise, 2.7 s at high speed,
    /// stretched a little under warp.
    pub fn cadence(spd_final: f32, warp_ease: f32) -> f32 {
        let speed_bias = ((spd_final - 1.0) / 6.0).clamp(0.0, 1.0);
        lerp(QUOTE_CADENCE_SLOW, QUOTE_CADENCE_FAST, speed_bias)
            * (1.0 + warp_ease * QUOTE_CADENCE_WARP)
    }

    /// Push the next phrase, evicting the oldest panel when at the cap.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, bounds: &TunnelBounds) {
        let text = self.phrases[self.index % self.phrases.len()];
        self.index += 1;
        if self.quotes.len() >= self.cap {
            self.quotes.remove(0);
        }
        self.quotes.push(Quote3D::new(text, rng, bounds));
        log::debug!("[quotes] spawn #{} live={}", self.index, self.quotes.len());
    }

    /// Count down, spawn when due, then age and drop expired panels.
    /// Returns true when a panel was spawned this frame.
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        bounds: &TunnelBounds,
        motion: &FrameMotion,
    ) -> bool {
        self.timer -= motion.dt;
        let due = self.timer <= 0.0;
        if due {
            self.timer = Self::cadence(motion.spd_final, motion.warp_ease)
                + range(rng, QUOTE_JITTER_MIN, QUOTE_JITTER_MAX);
            self.spawn(rng, bounds);
        }
        self.quotes
            .retain(|q| q.update(motion.dt, motion.warp_ease));
        due
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
