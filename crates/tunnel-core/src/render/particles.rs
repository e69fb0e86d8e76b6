use super::FrameView;
use crate::constants::{DUST_SPARK_RING_MIN_WARP, STAR_NORMAL_PASS_MAX_WARP, STAR_STREAK_MIN_WARP, STREAK_MAX_PX};
use crate::dust::DustField;
use crate::math::lerp;
use crate::stars::{StarField, StarLayer};
use crate::surface::{layer, BlendMode, Paint, Rgba, Surface};

const SPARK: Rgba = Rgba::rgb(210, 240, 255);
const STREAK_HEAD: Rgba = Rgba::rgb(230, 245, 255);
const STREAK_MID: Rgba = Rgba::rgb(120, 190, 255);
const STREAK_TAIL: Rgba = Rgba::new(80, 120, 255, 0.0);
const STAR_CORE: Rgba = Rgba::rgb(230, 250, 255);

/// Additive dust pass. Spark motes get a second, wider ring once warp is up.
pub fn draw_dust<S: Surface + ?Sized>(s: &mut S, view: &FrameView, dust: &DustField) {
    let warp_ease = view.motion.warp_ease;
    layer(s, |s| {
        s.set_blend(BlendMode::Lighter);
        for (i, mote) in dust.motes.iter().enumerate() {
            let Some(p) = view.camera.project_visible(mote.pos) else {
                continue;
            };
            let alpha = mote.alpha * (0.35 + view.fog(mote.pos.z) * 0.9);
            let radius = mote.size * (p.invz * 1.8) * (1.0 + warp_ease * 0.2);

            let color = if mote.spark {
                SPARK.alpha(alpha * 1.6)
            } else {
                let cool = 200.0 + (35.0 * (i as f32 * 0.17 + view.elapsed * 2.0).sin()).floor();
                Rgba::new(120, cool as u8, 255, alpha)
            };
            let paint = Paint::Solid(color);
            s.set_alpha(alpha);
            s.fill_circle(p.pos, radius, &paint);

            if mote.spark && warp_ease > DUST_SPARK_RING_MIN_WARP {
                s.set_alpha(alpha * 0.5);
                s.fill_circle(p.pos, radius * 2.2, &paint);
            }
        }
    });
}

/// Opaque star dots. Skipped entirely once warp takes over with streaks.
pub fn draw_stars_normal<S: Surface + ?Sized>(s: &mut S, view: &FrameView, stars: &StarField) {
    let warp_ease = view.motion.warp_ease;
    if warp_ease >= STAR_NORMAL_PASS_MAX_WARP {
        return;
    }
    let min_radius = 0.7 * view.dpr();
    layer(s, |s| {
        s.set_blend(BlendMode::SourceOver);
        for star in &stars.stars {
            let Some(p) = view.camera.project_visible(star.pos) else {
                continue;
            };
            let twinkle = 0.85 + (star.twinkle + view.elapsed * 0.9).sin() * 0.15;
            let depth_dim = lerp(0.55, 1.0, view.fog(star.pos.z));
            let radius = star.size * (p.invz * 3.2) * (1.0 + warp_ease * 0.12);
            let b = star.base * twinkle * depth_dim;

            let blue = 210 + (25.0 * star.tint).floor() as u8;
            let violet = 235 - (35.0 * star.tint).floor() as u8;
            let color = Rgba::new(violet, blue, 255, (0.10 + b * 0.65).clamp(0.0, 0.95));
            s.fill_circle(p.pos, radius.max(min_radius), &Paint::Solid(color));
        }
    });
}

/// Additive glow pass. Under warp every star becomes a streak pointing back
/// toward the centre, longer for faster travel and nearer stars; otherwise
/// only haloed far-layer stars draw a soft glow.
pub fn draw_stars_glow<S: Surface + ?Sized>(s: &mut S, view: &FrameView, stars: &StarField) {
    let warp_ease = view.motion.warp_ease;
    let dpr = view.dpr();
    let streak_base = view.motion.spd_final * 18.0 * (0.25 + warp_ease);
    let streak_max = STREAK_MAX_PX * dpr;

    layer(s, |s| {
        s.set_blend(BlendMode::Lighter);
        for star in &stars.stars {
            let Some(p) = view.camera.project_visible(star.pos) else {
                continue;
            };
            let z_norm = (star.pos.z / view.camera.z_far).clamp(0.0, 1.0);
            let twinkle = 0.9 + (star.twinkle + view.elapsed).sin() * 0.10;
            let size = star.size * (p.invz * 3.2);
            let b = star.base * twinkle * lerp(0.55, 1.0, 1.0 - z_norm);
            let haloed = star.layer == StarLayer::Far && star.halo;

            if warp_ease > STAR_STREAK_MIN_WARP {
                let len = (streak_base * (1.0 + (1.0 - z_norm) * 2.2) * (0.55 + b))
                    .clamp(10.0, streak_max.max(10.0));
                let tail = p.pos - p.outward() * len;
                let streak = Paint::linear(
                    p.pos,
                    tail,
                    &[
                        (0.0, STREAK_HEAD.alpha(0.20 + b * 0.35)),
                        (0.4, STREAK_MID.alpha(0.10 + b * 0.18)),
                        (1.0, STREAK_TAIL),
                    ],
                );
                s.set_alpha(0.85);
                s.stroke_line(p.pos, tail, (1.0 * dpr).max((0.9 + size) * 0.65), &streak);

                s.set_alpha((0.12 + b * 0.7).clamp(0.0, 0.95));
                s.fill_circle(
                    p.pos,
                    (0.8 * dpr).max(size * 0.85),
                    &Paint::Solid(STAR_CORE.alpha(0.35 + b * 0.35)),
                );

                if haloed {
                    s.set_alpha((0.10 + b * 0.20) * (0.6 + warp_ease * 0.7));
                    let radius = (10.0 + size * 6.0) * (0.7 + warp_ease);
                    let halo = Paint::radial(
                        p.pos,
                        radius * 0.1,
                        radius,
                        &[
                            (0.0, Rgba::new(200, 220, 255, 0.35 + b * 0.25)),
                            (1.0, STREAK_TAIL),
                        ],
                    );
                    s.fill_circle(p.pos, radius, &halo);
                }
            } else if haloed {
                s.set_alpha(0.06 + b * 0.12);
                let radius = 8.0 + size * 6.0;
                let halo = Paint::radial(
                    p.pos,
                    radius * 0.15,
                    radius,
                    &[
                        (0.0, Rgba::new(210, 235, 255, 0.26 + b * 0.15)),
                        (1.0, STREAK_TAIL),
                    ],
                );
                s.fill_circle(p.pos, radius, &halo);
            }
        }
    });
}
