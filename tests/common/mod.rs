// Shared test helpers: a recording surface and a few canned fixtures.

#![allow(dead_code)]

use glam::Vec2;
use tunnel_core::camera::{Camera, Viewport};
use tunnel_core::motion::FrameMotion;
use tunnel_core::render::FrameView;
use tunnel_core::surface::{BlendMode, Paint, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Blend(BlendMode),
    Alpha(f32),
    FillRect,
    FillCircle { center: Vec2, radius: f32 },
    StrokeLine { from: Vec2, to: Vec2, width: f32 },
    FillRoundRect { origin: Vec2, size: Vec2, radius: f32 },
    StrokeRoundRect,
    Font(f32, u16),
    FillText(String),
}

impl Op {
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            Op::FillRect
                | Op::FillCircle { .. }
                | Op::StrokeLine { .. }
                | Op::FillRoundRect { .. }
                | Op::StrokeRoundRect
                | Op::FillText(_)
        )
    }
}

/// Records every call. Also tracks save/restore depth and the blend mode
/// stack the way a canvas context would.
#[derive(Debug)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    pub depth: i32,
    pub min_draw_depth: i32,
    pub blend: BlendMode,
    blend_stack: Vec<BlendMode>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            depth: 0,
            min_draw_depth: i32::MAX,
            blend: BlendMode::SourceOver,
            blend_stack: Vec::new(),
        }
    }
}

impl RecordingSurface {
    fn draw(&mut self, op: Op) {
        self.min_draw_depth = self.min_draw_depth.min(self.depth);
        self.ops.push(op);
    }

    /// Blend mode set first inside each top-level save, in order.
    pub fn layer_blends(&self) -> Vec<BlendMode> {
        let mut out = Vec::new();
        let mut depth = 0;
        let mut pending = false;
        for op in &self.ops {
            match op {
                Op::Save => {
                    depth += 1;
                    if depth == 1 {
                        pending = true;
                    }
                }
                Op::Restore => depth -= 1,
                Op::Blend(b) if pending => {
                    out.push(*b);
                    pending = false;
                }
                _ => {}
            }
        }
        out
    }

    /// Ops grouped by top-level save/restore pair, brackets excluded.
    pub fn layers(&self) -> Vec<Vec<Op>> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        let mut depth = 0;
        for op in &self.ops {
            match op {
                Op::Save => {
                    depth += 1;
                    if depth > 1 {
                        current.push(op.clone());
                    }
                }
                Op::Restore => {
                    depth -= 1;
                    if depth == 0 {
                        out.push(std::mem::take(&mut current));
                    } else {
                        current.push(op.clone());
                    }
                }
                _ => current.push(op.clone()),
            }
        }
        out
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillText(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.blend_stack.push(self.blend);
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        if let Some(b) = self.blend_stack.pop() {
            self.blend = b;
        }
        self.ops.push(Op::Restore);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.blend = mode;
        self.ops.push(Op::Blend(mode));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::Alpha(alpha));
    }

    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _paint: &Paint) {
        self.draw(Op::FillRect);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _paint: &Paint) {
        self.draw(Op::FillCircle { center, radius });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, _paint: &Paint) {
        self.draw(Op::StrokeLine { from, to, width });
    }

    fn fill_round_rect(&mut self, origin: Vec2, size: Vec2, radius: f32, _paint: &Paint) {
        self.draw(Op::FillRoundRect {
            origin,
            size,
            radius,
        });
    }

    fn stroke_round_rect(
        &mut self,
        _origin: Vec2,
        _size: Vec2,
        _radius: f32,
        _width: f32,
        _paint: &Paint,
    ) {
        self.draw(Op::StrokeRoundRect);
    }

    fn set_font(&mut self, px: f32, weight: u16) {
        self.ops.push(Op::Font(px, weight));
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * 8.0
    }

    fn fill_text(&mut self, text: &str, _center: Vec2, _paint: &Paint) {
        self.draw(Op::FillText(text.to_owned()));
    }
}

/// Accepts everything, keeps nothing. For long simulated runs.
#[derive(Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_blend(&mut self, _mode: BlendMode) {}
    fn set_alpha(&mut self, _alpha: f32) {}
    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _paint: &Paint) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _paint: &Paint) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _paint: &Paint) {}
    fn fill_round_rect(&mut self, _origin: Vec2, _size: Vec2, _radius: f32, _paint: &Paint) {}
    fn stroke_round_rect(
        &mut self,
        _origin: Vec2,
        _size: Vec2,
        _radius: f32,
        _width: f32,
        _paint: &Paint,
    ) {
    }
    fn set_font(&mut self, _px: f32, _weight: u16) {}
    fn measure_text(&mut self, text: &str) -> f32 {
        text.len() as f32 * 8.0
    }
    fn fill_text(&mut self, _text: &str, _center: Vec2, _paint: &Paint) {}
}

pub fn viewport() -> Viewport {
    Viewport::from_css(1280.0, 720.0, 1.0)
}

pub fn camera(look: Vec2, warp: f32) -> Camera {
    Camera {
        look,
        warp,
        fov: tunnel_core::constants::FOV,
        z_near: tunnel_core::constants::Z_NEAR,
        z_far: tunnel_core::constants::Z_FAR,
        viewport: viewport(),
    }
}

pub fn motion(dt: f32, advance: f32, warp_ease: f32, spd_final: f32) -> FrameMotion {
    FrameMotion {
        dt,
        running: true,
        warp_ease,
        spd_final,
        advance,
    }
}

pub fn view(warp: f32, running: bool) -> FrameView {
    let warp_ease = tunnel_core::motion::warp_ease(warp);
    FrameView {
        camera: camera(Vec2::ZERO, warp),
        motion: FrameMotion {
            dt: 1.0 / 60.0,
            running,
            warp_ease,
            spd_final: 1.0,
            advance: 0.0,
        },
        elapsed: 1.0,
        quality: 1.0,
    }
}
