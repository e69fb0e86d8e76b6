//! Speed, warp, boost and look integration.
//!
//! Every scalar here is a first-order filter toward a target driven by the
//! input boundary. Rates are per frame, matching how the scene was tuned.

use crate::constants::*;
use crate::math::{lerp, smoothstep};
use glam::Vec2;

/// Normalised control signals coming from the host. All events are idempotent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    /// Pointer position in \[-1, 1\] on both axes.
    Pointer(Vec2),
    /// Forward hold pressed/released.
    Forward(bool),
    /// Backward hold pressed/released.
    Backward(bool),
    Boost(bool),
    ToggleWarp,
    /// Raw wheel delta; only the sign matters.
    Wheel(f32),
    ToggleCinematic,
    Start,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ControlInput {
    pub pointer_target: Vec2,
    pub pointer: Vec2,
    /// -1, 0 or +1.
    pub accel: i8,
    pub boost_held: bool,
    pub cinematic: bool,
}

/// Per-frame values derived from the motion model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMotion {
    pub dt: f32,
    pub running: bool,
    pub warp_ease: f32,
    pub spd_final: f32,
    /// Distance particles move toward the viewer this frame.
    pub advance: f32,
}

#[derive(Clone, Debug)]
pub struct MotionModel {
    pub speed: f32,
    pub target_speed: f32,
    pub warp: f32,
    pub warp_target: f32,
    pub boost: f32,
    pub look: Vec2,
    pub sway_t: f32,
    pub input: ControlInput,
}

impl Default for MotionModel {
    fn default() -> Self {
        Self {
            speed: 1.0,
            target_speed: 1.0,
            warp: 0.0,
            warp_target: 0.0,
            boost: 0.0,
            look: Vec2::ZERO,
            sway_t: 0.0,
            input: ControlInput::default(),
        }
    }
}

/// Procedural idle sway: two summed sines per axis.
#[inline]
pub fn sway(t: f32) -> Vec2 {
    Vec2::new(
        (t * 0.9).sin() * 0.06 + (t * 0.23).sin() * 0.04,
        (t * 0.8).cos() * 0.05 + (t * 0.31).sin() * 0.03,
    )
}

#[inline]
pub fn warp_ease(warp: f32) -> f32 {
    smoothstep(0.0, 1.0, warp)
}

/// Combined speed multiplier from speed, eased warp and boost.
#[inline]
pub fn final_speed(speed: f32, warp_ease: f32, boost: f32) -> f32 {
    speed * (1.0 + warp_ease * WARP_SPEED_GAIN) * (1.0 + boost * BOOST_SPEED_GAIN)
}

impl MotionModel {
    /// Apply a control event. Presses are ignored until the experience has
    /// started; releases always go through so a key held across start does
    /// not stick.
    pub fn handle(&mut self, event: ControlEvent, running: bool) {
        match event {
            ControlEvent::Pointer(p) => {
                self.input.pointer_target = p.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
            }
            ControlEvent::Forward(true) if running => self.input.accel = 1,
            ControlEvent::Backward(true) if running => self.input.accel = -1,
            ControlEvent::Forward(false) => {
                if self.input.accel == 1 {
                    self.input.accel = 0;
                }
            }
            ControlEvent::Backward(false) => {
                if self.input.accel == -1 {
                    self.input.accel = 0;
                }
            }
            ControlEvent::Boost(true) if running => self.input.boost_held = true,
            ControlEvent::Boost(false) => self.input.boost_held = false,
            ControlEvent::ToggleWarp if running => self.toggle_warp(),
            ControlEvent::Wheel(delta) if running => self.nudge_speed(delta),
            ControlEvent::ToggleCinematic => self.input.cinematic = !self.input.cinematic,
            _ => {}
        }
    }

    pub fn toggle_warp(&mut self) {
        self.warp_target = if self.warp_target > 0.0 { 0.0 } else { 1.0 };
    }

    /// Positive delta (scroll down) slows down, negative speeds up.
    pub fn nudge_speed(&mut self, delta: f32) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let factor = if delta > 0.0 { WHEEL_SLOWER } else { WHEEL_FASTER };
        self.target_speed = (self.target_speed * factor).clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn update(&mut self, dt: f32, running: bool, base_speed: f32) -> FrameMotion {
        let input = &mut self.input;
        input.pointer = input.pointer.lerp(input.pointer_target, POINTER_EASE);

        self.sway_t += dt * (SWAY_RATE_BASE + self.speed * SWAY_RATE_SPEED);
        let damp = 1.0 - self.warp * LOOK_WARP_DAMPING;
        let look_target =
            (input.pointer * Vec2::new(LOOK_GAIN_X, LOOK_GAIN_Y) + sway(self.sway_t)) * damp;
        self.look = self.look.lerp(look_target, LOOK_EASE);

        if running {
            if input.accel != 0 {
                self.target_speed += f32::from(input.accel) * dt * ACCEL_RATE;
            }
            let held = if input.boost_held { 1.0 } else { 0.0 };
            self.boost = lerp(self.boost, held, BOOST_EASE);
        } else {
            self.target_speed = lerp(self.target_speed, IDLE_TARGET_SPEED, IDLE_SPEED_EASE);
            self.boost = lerp(self.boost, 0.0, BOOST_EASE);
        }
        self.target_speed = self.target_speed.clamp(SPEED_MIN, SPEED_MAX);

        let warp_goal = if running { self.warp_target } else { 0.0 };
        self.warp = lerp(self.warp, warp_goal, WARP_EASE).clamp(0.0, 1.0);
        self.speed = lerp(self.speed, self.target_speed, SPEED_EASE).clamp(SPEED_MIN, SPEED_MAX);
        self.boost = self.boost.clamp(0.0, 1.0);

        let ease = warp_ease(self.warp);
        let spd_final = final_speed(self.speed, ease, self.boost);
        let run_factor = if running { 1.0 } else { IDLE_ADVANCE_FACTOR };
        FrameMotion {
            dt,
            running,
            warp_ease: ease,
            spd_final,
            advance: base_speed * spd_final * dt * run_factor,
        }
    }
}
