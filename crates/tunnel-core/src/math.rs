use rand::Rng;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite step between `edge0` and `edge1`, clamped to \[0, 1\].
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Uniform point in a disk of radius `radius` (area-uniform, not radius-uniform).
#[inline]
pub fn sample_disk<R: Rng>(rng: &mut R, radius: f32) -> (f32, f32) {
    let a = rng.gen::<f32>() * std::f32::consts::TAU;
    let r = rng.gen::<f32>().sqrt() * radius;
    (a.cos() * r, a.sin() * r)
}

/// Uniform sample in `[lo, hi)`; returns `lo` for an empty range.
#[inline]
pub fn range<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
