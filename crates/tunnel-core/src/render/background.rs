use super::FrameView;
use crate::constants::VIGNETTE_ALPHA;
use crate::nebula::NebulaBlob;
use crate::surface::{layer, BlendMode, Paint, Rgba, Surface};
use glam::Vec2;

const SKY_TOP: Rgba = Rgba::rgb(6, 7, 16);
const SKY_MID: Rgba = Rgba::rgb(4, 7, 18);
const SKY_BOTTOM: Rgba = Rgba::rgb(2, 2, 8);
const CLEAR: Rgba = Rgba::new(0, 0, 0, 0.0);

// Nebula drift, radians per second of elapsed time.
const NEBULA_TIME_SCALE: f32 = 0.05;

/// Sky gradient, additive nebula glows, then a multiply vignette.
pub fn draw_background<S: Surface + ?Sized>(s: &mut S, view: &FrameView, nebula: &[NebulaBlob]) {
    let size = view.size();
    let sky = Paint::linear(
        Vec2::ZERO,
        size,
        &[(0.0, SKY_TOP), (0.45, SKY_MID), (1.0, SKY_BOTTOM)],
    );
    layer(s, |s| {
        s.set_blend(BlendMode::SourceOver);
        s.fill_rect(Vec2::ZERO, size, &sky);
    });

    let look = view.camera.look;
    let time = view.elapsed * NEBULA_TIME_SCALE;
    let max_side = view.camera.viewport.max_side();
    layer(s, |s| {
        s.set_blend(BlendMode::Lighter);
        for (i, blob) in nebula.iter().enumerate() {
            let phase =
                blob.phase + time * (0.8 + i as f32 * 0.3) + view.motion.spd_final * 0.002;
            let offset = Vec2::new(
                phase.sin() * blob.sway + look.x * 0.02,
                (phase * 0.9).cos() * blob.sway + look.y * 0.02,
            );
            let center = (Vec2::new(blob.x, blob.y) + offset) * size;
            let radius = blob.radius * max_side;
            let a = blob.alpha;
            let glow = Paint::radial(
                center,
                radius * 0.05,
                radius,
                &[
                    (0.0, Rgba::new(140, 120, 255, a * 0.8)),
                    (0.35, Rgba::new(90, 160, 255, a * 0.55)),
                    (0.7, Rgba::new(60, 90, 220, a * 0.25)),
                    (1.0, CLEAR),
                ],
            );
            s.fill_circle(center, radius, &glow);
        }
    });

    let viewport = view.camera.viewport;
    let vignette = Paint::radial(
        viewport.center(),
        viewport.min_side() * 0.2,
        viewport.max_side() * 0.75,
        &[(0.0, CLEAR), (1.0, Rgba::new(0, 0, 0, 1.0))],
    );
    layer(s, |s| {
        s.set_blend(BlendMode::Multiply);
        s.set_alpha(VIGNETTE_ALPHA);
        s.fill_rect(Vec2::ZERO, size, &vignette);
    });
}
