mod common;

use common::{motion, viewport, NullSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tunnel_core::constants::*;
use tunnel_core::quotes::{quote_alpha, quote_scale, Quote3D};
use tunnel_core::{QuoteScheduler, Simulation, TunnelConfig, DEFAULT_PHRASES};

#[test]
fn alpha_envelope_starts_and_ends_at_zero() {
    for life in [6.2, 7.5, 9.0] {
        assert!(quote_alpha(0.0, life).abs() < 1e-6);
        assert!(quote_alpha(life, life).abs() < 1e-6);
        for i in 0..=20 {
            let age = life * i as f32 / 20.0;
            let a = quote_alpha(age, life);
            assert!((0.0..=QUOTE_ALPHA_MAX + 1e-6).contains(&a));
        }
    }
}

#[test]
fn alpha_peaks_through_the_middle_third() {
    for life in [6.2, 7.5, 9.0] {
        for i in 0..=10 {
            let age = life / 3.0 + (life / 3.0) * i as f32 / 10.0;
            let a = quote_alpha(age, life);
            assert!(a >= 0.7 && a <= QUOTE_ALPHA_MAX + 1e-6, "life={life} age={age} a={a}");
        }
    }
}

#[test]
fn scale_is_kept_legible() {
    assert_eq!(quote_scale(0.0), QUOTE_SCALE_MIN);
    assert_eq!(quote_scale(100.0), QUOTE_SCALE_MAX);
    let mid = quote_scale(0.7);
    assert!(mid > QUOTE_SCALE_MIN && mid < QUOTE_SCALE_MAX);
}

#[test]
fn panels_spawn_in_mid_depth_band() {
    let mut rng = StdRng::seed_from_u64(4);
    let bounds = TunnelConfig::default().bounds();
    for _ in 0..100 {
        let q = Quote3D::new("x", &mut rng, &bounds);
        assert!(q.pos.z >= Z_FAR * 0.52 && q.pos.z < Z_FAR * 0.72);
        assert!(q.life >= 6.2 && q.life < 9.0);
        assert!(q.pos.x.abs() <= bounds.radius);
    }
}

#[test]
fn panels_recede_under_warp() {
    let mut rng = StdRng::seed_from_u64(4);
    let bounds = TunnelConfig::default().bounds();
    let mut q = Quote3D::new("x", &mut rng, &bounds);
    let z = q.pos.z;
    assert!(q.update(0.5, 1.0));
    assert!((q.pos.z - (z + QUOTE_WARP_RECEDE * 0.5)).abs() < 1e-3);
    let mut calm = Quote3D::new("y", &mut rng, &bounds);
    let z = calm.pos.z;
    calm.update(0.5, 0.0);
    assert_eq!(calm.pos.z, z);
}

#[test]
fn panels_expire_at_end_of_life() {
    let mut rng = StdRng::seed_from_u64(4);
    let bounds = TunnelConfig::default().bounds();
    let mut q = Quote3D::new("x", &mut rng, &bounds);
    let life = q.life;
    assert!(q.update(life - 0.1, 0.0));
    assert!(!q.update(0.2, 0.0));
}

#[test]
fn cadence_is_speed_biased() {
    assert!((QuoteScheduler::cadence(1.0, 0.0) - QUOTE_CADENCE_SLOW).abs() < 1e-6);
    // slower than cruise is not slower than the base cadence
    assert!((QuoteScheduler::cadence(0.3, 0.0) - QUOTE_CADENCE_SLOW).abs() < 1e-6);
    assert!((QuoteScheduler::cadence(7.0, 0.0) - QUOTE_CADENCE_FAST).abs() < 1e-5);
    assert!((QuoteScheduler::cadence(20.0, 0.0) - QUOTE_CADENCE_FAST).abs() < 1e-5);
    let warped = QuoteScheduler::cadence(1.0, 1.0);
    assert!((warped - QUOTE_CADENCE_SLOW * (1.0 + QUOTE_CADENCE_WARP)).abs() < 1e-5);
}

#[test]
fn live_panels_never_exceed_cap_and_oldest_goes_first() {
    let mut rng = StdRng::seed_from_u64(12);
    let bounds = TunnelConfig::default().bounds();
    let mut sched = QuoteScheduler::new(DEFAULT_PHRASES, QUOTE_CAP);
    for _ in 0..10 {
        sched.spawn(&mut rng, &bounds);
        assert!(sched.len() <= QUOTE_CAP);
    }
    let texts: Vec<&str> = sched.quotes.iter().map(|q| q.text).collect();
    assert_eq!(texts, DEFAULT_PHRASES[6..10].to_vec());
}

#[test]
fn phrases_cycle_round_robin() {
    static PHRASES: &[&str] = &["a", "b", "c"];
    let mut rng = StdRng::seed_from_u64(12);
    let bounds = TunnelConfig::default().bounds();
    let mut sched = QuoteScheduler::new(PHRASES, 2);
    let mut seen = Vec::new();
    for _ in 0..7 {
        sched.spawn(&mut rng, &bounds);
        seen.push(sched.quotes.last().unwrap().text);
    }
    assert_eq!(seen, ["a", "b", "c", "a", "b", "c", "a"]);
    assert_eq!(sched.len(), 2);
    assert_eq!(sched.index, 7);
}

#[test]
fn first_panel_appears_after_initial_delay() {
    let mut rng = StdRng::seed_from_u64(3);
    let bounds = TunnelConfig::default().bounds();
    let mut sched = QuoteScheduler::new(DEFAULT_PHRASES, QUOTE_CAP);
    let step = motion(0.1, 0.0, 0.0, 1.0);
    let mut spawned_at = None;
    for i in 1..=20 {
        if sched.update(&mut rng, &bounds, &step) {
            spawned_at = Some(i);
            break;
        }
    }
    let frame = spawned_at.expect("spawned");
    // timer starts at 1.0 s; 0.1 s steps reach zero on the 10th or 11th frame
    assert!((10..=11).contains(&frame), "{frame}");
    assert!(sched.timer >= QUOTE_CADENCE_SLOW + QUOTE_JITTER_MIN - 1e-4);
}

#[test]
fn ten_seconds_of_cruise_shows_a_few_panels() {
    let mut sim = Simulation::new(TunnelConfig::default(), viewport(), 21).unwrap();
    sim.start();
    let mut surface = NullSurface;
    for _ in 0..600 {
        sim.frame(0.016, &mut surface);
        assert!(sim.quotes().len() <= QUOTE_CAP);
    }
    let spawned = sim.quotes().index;
    assert!((2..=4).contains(&spawned), "{spawned}");
}

#[test]
fn no_panels_before_start() {
    let mut sim = Simulation::new(TunnelConfig::default(), viewport(), 21).unwrap();
    let mut surface = NullSurface;
    for _ in 0..300 {
        sim.frame(0.016, &mut surface);
    }
    assert!(sim.quotes().is_empty());
    assert_eq!(sim.quotes().index, 0);
}
