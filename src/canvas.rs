use crate::constants::{FONT_STACK, MEASURE_BUCKETS_PER_PX, MEASURE_CACHE_MAX};
use fnv::FnvHashMap;
use glam::Vec2;
use tunnel_core::surface::{BlendMode, ColorStop, Paint, Surface};
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`Surface`] over a canvas 2D context. Draw-call errors are dropped: a
/// failed primitive must not stop the frame loop.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    font_key: u32,
    // font key -> text -> advance width
    widths: FnvHashMap<u32, FnvHashMap<String, f32>>,
    cached: usize,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            font_key: 0,
            widths: FnvHashMap::default(),
            cached: 0,
        }
    }

    fn paint_value(&self, paint: &Paint) -> JsValue {
        match paint {
            Paint::Solid(color) => JsValue::from_str(&color.to_string()),
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                add_stops(&g, stops);
                g.into()
            }
            Paint::Radial {
                center,
                inner,
                outer,
                stops,
            } => match self.ctx.create_radial_gradient(
                center.x as f64,
                center.y as f64,
                inner.max(0.0) as f64,
                center.x as f64,
                center.y as f64,
                outer.max(0.0) as f64,
            ) {
                Ok(g) => {
                    add_stops(&g, stops);
                    g.into()
                }
                Err(e) => {
                    log::debug!("radial gradient error: {:?}", e);
                    JsValue::from_str("rgba(0,0,0,0)")
                }
            },
        }
    }

    fn round_rect_path(&self, origin: Vec2, size: Vec2, radius: f32) {
        let (x, y) = (origin.x as f64, origin.y as f64);
        let (w, h) = (size.x as f64, size.y as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0).max(0.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        _ = ctx.arc_to(x, y + h, x, y, r);
        _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_blend(&mut self, mode: BlendMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_str());
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.ctx.set_fill_style(&self.paint_value(paint));
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if !(radius > 0.0) {
            return;
        }
        self.ctx.set_fill_style(&self.paint_value(paint));
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        self.ctx.set_stroke_style(&self.paint_value(paint));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_round_rect(&mut self, origin: Vec2, size: Vec2, radius: f32, paint: &Paint) {
        self.round_rect_path(origin, size, radius);
        self.ctx.set_fill_style(&self.paint_value(paint));
        self.ctx.fill();
    }

    fn stroke_round_rect(&mut self, origin: Vec2, size: Vec2, radius: f32, width: f32, paint: &Paint) {
        self.round_rect_path(origin, size, radius);
        self.ctx.set_stroke_style(&self.paint_value(paint));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn set_font(&mut self, px: f32, weight: u16) {
        self.font_key = (px * MEASURE_BUCKETS_PER_PX).round() as u32 ^ (u32::from(weight) << 20);
        self.ctx.set_font(&format!("{weight} {px:.2}px {FONT_STACK}"));
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        if let Some(w) = self.widths.get(&self.font_key).and_then(|m| m.get(text)) {
            return *w;
        }
        let width = match self.ctx.measure_text(text) {
            Ok(m) => m.width() as f32,
            Err(e) => {
                log::debug!("measure_text error: {:?}", e);
                return 0.0;
            }
        };
        if self.cached >= MEASURE_CACHE_MAX {
            self.widths.clear();
            self.cached = 0;
        }
        self.widths
            .entry(self.font_key)
            .or_default()
            .insert(text.to_owned(), width);
        self.cached += 1;
        width
    }

    fn fill_text(&mut self, text: &str, center: Vec2, paint: &Paint) {
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style(&self.paint_value(paint));
        _ = self.ctx.fill_text(text, center.x as f64, center.y as f64);
    }
}
