//! Output boundary: the 2D raster surface the render passes draw onto.
//!
//! Passes never touch a browser API directly; the web front-end implements
//! [`Surface`] over a canvas 2D context and tests implement it with a recorder.

use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha replaced (clamped to \[0, 1\]).
    #[inline]
    pub fn alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

pub type Stops = SmallVec<[ColorStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear { from: Vec2, to: Vec2, stops: Stops },
    Radial {
        center: Vec2,
        inner: f32,
        outer: f32,
        stops: Stops,
    },
}

impl Paint {
    pub fn linear(from: Vec2, to: Vec2, stops: &[(f32, Rgba)]) -> Self {
        Paint::Linear {
            from,
            to,
            stops: collect_stops(stops),
        }
    }

    pub fn radial(center: Vec2, inner: f32, outer: f32, stops: &[(f32, Rgba)]) -> Self {
        Paint::Radial {
            center,
            inner,
            outer,
            stops: collect_stops(stops),
        }
    }
}

fn collect_stops(stops: &[(f32, Rgba)]) -> Stops {
    stops
        .iter()
        .map(|&(offset, color)| ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SourceOver,
    Lighter,
    Multiply,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` name.
    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighter => "lighter",
            BlendMode::Multiply => "multiply",
        }
    }
}

pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_blend(&mut self, mode: BlendMode);
    fn set_alpha(&mut self, alpha: f32);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint);
    fn fill_round_rect(&mut self, origin: Vec2, size: Vec2, radius: f32, paint: &Paint);
    fn stroke_round_rect(&mut self, origin: Vec2, size: Vec2, radius: f32, width: f32, paint: &Paint);

    fn set_font(&mut self, px: f32, weight: u16);
    /// Advance width of `text` in the current font, in device pixels.
    fn measure_text(&mut self, text: &str) -> f32;
    /// Text centred horizontally and vertically on `center`.
    fn fill_text(&mut self, text: &str, center: Vec2, paint: &Paint);
}

/// Run `f` between a save/restore pair so state set inside never leaks out.
#[inline]
pub fn layer<S: Surface + ?Sized, R>(surface: &mut S, f: impl FnOnce(&mut S) -> R) -> R {
    surface.save();
    let out = f(surface);
    surface.restore();
    out
}
