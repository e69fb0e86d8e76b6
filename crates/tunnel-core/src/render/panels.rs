use super::FrameView;
use crate::constants::{QUOTE_ALPHA_CUTOFF, QUOTE_FONT_WEIGHT};
use crate::quotes::{quote_scale, QuoteScheduler};
use crate::surface::{layer, BlendMode, Paint, Rgba, Surface};
use glam::Vec2;

const GLASS: Rgba = Rgba::rgb(10, 14, 28);
const GLOW: Rgba = Rgba::rgb(120, 190, 255);
const TEXT: Rgba = Rgba::rgb(240, 248, 255);

// CSS pixels, scaled by DPR and depth scale
const PAD_X: f32 = 18.0;
const PAD_Y: f32 = 10.0;
const CORNER: f32 = 14.0;

/// Quote panels: faint glass plate, glowing outline, glow text, solid text.
pub fn draw_quotes<S: Surface + ?Sized>(s: &mut S, view: &FrameView, quotes: &QuoteScheduler) {
    let dpr = view.dpr();
    for quote in &quotes.quotes {
        let Some(p) = view.camera.project_visible(quote.pos) else {
            continue;
        };
        let alpha = quote.alpha();
        if alpha < QUOTE_ALPHA_CUTOFF {
            continue;
        }
        let scale = quote_scale(p.invz);
        let font_px = quote.base_size * dpr * scale;
        let shimmer = quote.shimmer();

        layer(s, |s| {
            s.set_font(font_px, QUOTE_FONT_WEIGHT);
            let size = Vec2::new(
                s.measure_text(quote.text) + PAD_X * dpr * scale * 2.0,
                font_px + PAD_Y * dpr * scale * 2.0,
            );
            let origin = p.pos - size * 0.5;
            let radius = (CORNER * dpr * scale).min(size.x * 0.5).min(size.y * 0.5);

            s.set_blend(BlendMode::SourceOver);
            s.set_alpha(alpha * 0.28);
            s.fill_round_rect(origin, size, radius, &Paint::Solid(GLASS));

            s.set_blend(BlendMode::Lighter);
            s.set_alpha(alpha * 0.18 * shimmer);
            s.stroke_round_rect(origin, size, radius, 2.0 * dpr * scale, &Paint::Solid(GLOW));

            s.set_alpha(alpha * 0.20 * shimmer);
            s.fill_text(quote.text, p.pos + Vec2::new(0.0, 0.5 * dpr), &Paint::Solid(GLOW));

            s.set_blend(BlendMode::SourceOver);
            s.set_alpha(alpha * 0.92 * shimmer);
            s.fill_text(quote.text, p.pos, &Paint::Solid(TEXT));
        });
    }
}
