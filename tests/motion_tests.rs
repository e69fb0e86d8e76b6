mod common;

use common::{viewport, NullSurface};
use glam::Vec2;
use tunnel_core::constants::*;
use tunnel_core::motion::{final_speed, warp_ease};
use tunnel_core::simulation::clamp_dt;
use tunnel_core::{ControlEvent, MotionModel, Simulation, TunnelConfig};

fn started_sim(seed: u64) -> Simulation {
    let mut sim = Simulation::new(TunnelConfig::default(), viewport(), seed).unwrap();
    assert!(sim.start());
    sim
}

#[test]
fn cruise_without_input_holds_speed_and_no_warp() {
    let mut sim = started_sim(7);
    let mut surface = NullSurface;
    let mut last = None;
    for _ in 0..120 {
        last = Some(sim.frame(1.0 / 60.0, &mut surface));
    }
    let m = last.unwrap();
    assert!(sim.motion().warp < 1e-3);
    assert!(m.spd_final > 0.9 && m.spd_final < 1.1, "{}", m.spd_final);
    assert!(m.running);
}

#[test]
fn warp_toggle_ramps_monotonically_and_tracks_final_speed() {
    let mut sim = started_sim(11);
    let mut surface = NullSurface;
    sim.handle(ControlEvent::ToggleWarp);

    let mut prev_warp = 0.0;
    let mut prev_spd = 0.0;
    for _ in 0..180 {
        let m = sim.frame(1.0 / 60.0, &mut surface);
        let model = sim.motion();
        assert!(model.warp >= prev_warp);
        assert!(model.warp <= 1.0);
        let expected = final_speed(model.speed, warp_ease(model.warp), model.boost);
        assert!((m.spd_final - expected).abs() < 1e-5);
        assert!(m.spd_final >= prev_spd - 1e-6);
        prev_warp = model.warp;
        prev_spd = m.spd_final;
    }
    assert!(prev_warp > 0.99);
    // close to the full warp multiplier
    assert!(prev_spd > 1.0 + WARP_SPEED_GAIN * 0.99);
}

#[test]
fn warp_toggles_back_off() {
    let mut m = MotionModel::default();
    m.toggle_warp();
    assert_eq!(m.warp_target, 1.0);
    m.toggle_warp();
    assert_eq!(m.warp_target, 0.0);
}

#[test]
fn wheel_is_clamped_to_speed_range() {
    let mut m = MotionModel::default();
    for _ in 0..200 {
        m.handle(ControlEvent::Wheel(-120.0), true);
    }
    assert_eq!(m.target_speed, SPEED_MAX);
    for _ in 0..200 {
        m.handle(ControlEvent::Wheel(120.0), true);
    }
    assert_eq!(m.target_speed, SPEED_MIN);
}

#[test]
fn wheel_steps_multiplicatively() {
    let mut m = MotionModel::default();
    m.handle(ControlEvent::Wheel(3.0), true);
    assert!((m.target_speed - WHEEL_SLOWER).abs() < 1e-6);
    m.handle(ControlEvent::Wheel(0.0), true);
    assert!((m.target_speed - WHEEL_SLOWER).abs() < 1e-6);
    m.handle(ControlEvent::Wheel(f32::NAN), true);
    assert!((m.target_speed - WHEEL_SLOWER).abs() < 1e-6);
}

#[test]
fn presses_are_ignored_before_start() {
    let mut m = MotionModel::default();
    m.handle(ControlEvent::Wheel(-100.0), false);
    m.handle(ControlEvent::Forward(true), false);
    m.handle(ControlEvent::Boost(true), false);
    m.handle(ControlEvent::ToggleWarp, false);
    assert_eq!(m.target_speed, 1.0);
    assert_eq!(m.input.accel, 0);
    assert!(!m.input.boost_held);
    assert_eq!(m.warp_target, 0.0);
}

#[test]
fn pointer_and_cinematic_work_before_start() {
    let mut m = MotionModel::default();
    m.handle(ControlEvent::Pointer(Vec2::new(3.0, -0.5)), false);
    assert_eq!(m.input.pointer_target, Vec2::new(1.0, -0.5));
    m.handle(ControlEvent::ToggleCinematic, false);
    assert!(m.input.cinematic);
}

#[test]
fn release_clears_only_matching_direction() {
    let mut m = MotionModel::default();
    m.handle(ControlEvent::Forward(true), true);
    m.handle(ControlEvent::Backward(false), true);
    assert_eq!(m.input.accel, 1);
    m.handle(ControlEvent::Backward(true), true);
    assert_eq!(m.input.accel, -1);
    // forward released after backward took over: no effect
    m.handle(ControlEvent::Forward(false), true);
    assert_eq!(m.input.accel, -1);
    m.handle(ControlEvent::Backward(false), false);
    assert_eq!(m.input.accel, 0);
}

#[test]
fn holding_forward_raises_target_speed() {
    let mut m = MotionModel::default();
    m.handle(ControlEvent::Forward(true), true);
    for _ in 0..60 {
        m.update(1.0 / 60.0, true, BASE_SPEED);
    }
    assert!((m.target_speed - (1.0 + ACCEL_RATE)).abs() < 1e-3);
    assert!(m.speed > 1.0);
}

#[test]
fn boost_eases_in_and_out() {
    let mut m = MotionModel::default();
    m.handle(ControlEvent::Boost(true), true);
    for _ in 0..200 {
        m.update(1.0 / 60.0, true, BASE_SPEED);
    }
    assert!(m.boost > 0.99 && m.boost <= 1.0);
    m.handle(ControlEvent::Boost(false), true);
    for _ in 0..200 {
        m.update(1.0 / 60.0, true, BASE_SPEED);
    }
    assert!(m.boost < 0.01);
}

#[test]
fn idle_relaxes_toward_idle_speed_and_drifts_slowly() {
    let mut m = MotionModel::default();
    let mut last = None;
    for _ in 0..600 {
        last = Some(m.update(1.0 / 60.0, false, BASE_SPEED));
    }
    let f = last.unwrap();
    assert!((m.target_speed - IDLE_TARGET_SPEED).abs() < 1e-3);
    let expected = BASE_SPEED * f.spd_final * f.dt * IDLE_ADVANCE_FACTOR;
    assert!((f.advance - expected).abs() < 1e-4);
    assert!(!f.running);
}

#[test]
fn warp_relaxes_when_not_running() {
    let mut m = MotionModel::default();
    m.warp = 0.8;
    m.warp_target = 1.0;
    for _ in 0..300 {
        m.update(1.0 / 60.0, false, BASE_SPEED);
    }
    assert!(m.warp < 0.01);
}

#[test]
fn warp_damps_look() {
    let pointer = Vec2::new(1.0, 1.0);
    let mut calm = MotionModel::default();
    let mut warped = MotionModel::default();
    warped.warp = 1.0;
    warped.warp_target = 1.0;
    for m in [&mut calm, &mut warped] {
        m.handle(ControlEvent::Pointer(pointer), true);
        for _ in 0..400 {
            m.update(1.0 / 60.0, true, BASE_SPEED);
        }
    }
    assert!(warped.look.length() < calm.look.length());
}

#[test]
fn dt_is_clamped() {
    assert_eq!(clamp_dt(1.0), DT_MAX);
    assert_eq!(clamp_dt(-0.5), 0.0);
    assert_eq!(clamp_dt(f32::NAN), 0.0);
    assert_eq!(clamp_dt(f32::INFINITY), 0.0);
    assert_eq!(clamp_dt(0.01), 0.01);
}

#[test]
fn stalled_frame_advances_at_most_max_dt() {
    let mut sim = started_sim(3);
    let mut surface = NullSurface;
    let m = sim.frame(5.0, &mut surface);
    assert_eq!(m.dt, DT_MAX);
    assert_eq!(sim.clock().frames, 1);
    assert!((sim.clock().elapsed - DT_MAX).abs() < 1e-6);
}

#[test]
fn start_is_one_shot() {
    let mut sim = Simulation::new(TunnelConfig::default(), viewport(), 1).unwrap();
    assert!(!sim.is_running());
    sim.handle(ControlEvent::Start);
    assert!(sim.is_running());
    assert!(!sim.start());
}

#[test]
fn before_start_the_tunnel_drifts() {
    let mut sim = Simulation::new(TunnelConfig::default(), viewport(), 5).unwrap();
    let mut surface = NullSurface;
    let m = sim.frame(1.0 / 60.0, &mut surface);
    assert!(!m.running);
    assert!(m.advance > 0.0);
    assert!(m.advance < BASE_SPEED * m.spd_final * m.dt);
}
