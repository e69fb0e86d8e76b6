use super::FrameView;
use crate::comet::Comet;
use crate::constants::{SPEED_LINES_BASE_COUNT, SPEED_LINES_MIN_WARP};
use crate::surface::{layer, BlendMode, Paint, Rgba, Surface};
use glam::Vec2;
use rand::Rng;

const LINE_HEAD: Rgba = Rgba::rgb(220, 240, 255);
const LINE_TAIL: Rgba = Rgba::new(80, 120, 255, 0.0);

/// Radial speed-line overlay, only while running with some warp. Radii are
/// re-rolled every frame, which gives the flicker.
pub fn draw_speed_lines<S: Surface + ?Sized, R: Rng>(s: &mut S, view: &FrameView, rng: &mut R) {
    let warp_ease = view.motion.warp_ease;
    if !view.motion.running || warp_ease <= SPEED_LINES_MIN_WARP {
        return;
    }
    let count = (SPEED_LINES_BASE_COUNT * view.quality).floor() as usize;
    if count == 0 {
        return;
    }
    let viewport = view.camera.viewport;
    let center = viewport.center();
    let dpr = view.dpr();
    let look = view.camera.look * Vec2::new(40.0, 30.0) * dpr;
    let len = (40.0 + view.motion.spd_final * 20.0) * (0.2 + warp_ease) * dpr;

    layer(s, |s| {
        s.set_blend(BlendMode::Lighter);
        s.set_alpha(0.08 + warp_ease * 0.10);
        for i in 0..count {
            let a = (i as f32 / count as f32) * std::f32::consts::TAU + view.elapsed * 0.2;
            let r = (0.10 + rng.gen::<f32>() * 0.48) * viewport.min_side();
            let pos = center + Vec2::new(a.cos(), a.sin()) * r + look;
            let outward = (pos - center).try_normalize().unwrap_or(Vec2::X);
            let tail = pos - outward * len;
            let paint = Paint::linear(
                pos,
                tail,
                &[(0.0, LINE_HEAD.alpha(0.22 + warp_ease * 0.25)), (1.0, LINE_TAIL)],
            );
            s.stroke_line(pos, tail, dpr, &paint);
        }
    });
}

/// Comet tail (gradient stroke toward the centre) and head.
pub fn draw_comet<S: Surface + ?Sized>(s: &mut S, view: &FrameView, comet: &Comet) {
    let Some(flight) = comet.flight() else {
        return;
    };
    let Some(p) = view.camera.project_visible(flight.pos) else {
        return;
    };
    let b = flight.brightness;
    let dpr = view.dpr();
    let tail_len = flight.tail * (1.0 + view.camera.warp * 0.8);
    let tail = p.pos - p.outward() * tail_len;

    layer(s, |s| {
        s.set_blend(BlendMode::Lighter);
        s.set_alpha(0.35 + b * 0.35);
        let streak = Paint::linear(
            p.pos,
            tail,
            &[
                (0.0, Rgba::new(210, 235, 255, 0.55 * b)),
                (0.45, Rgba::new(140, 190, 255, 0.22 * b)),
                (1.0, Rgba::new(90, 120, 255, 0.0)),
            ],
        );
        s.stroke_line(p.pos, tail, 2.2 * dpr, &streak);
        s.fill_circle(
            p.pos,
            2.6 * dpr,
            &Paint::Solid(Rgba::new(220, 245, 255, 0.9 * b)),
        );
    });
}
