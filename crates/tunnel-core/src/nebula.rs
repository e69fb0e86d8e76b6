use rand::Rng;

/// Static background glow blob. Position and radius are viewport fractions.
#[derive(Clone, Copy, Debug)]
pub struct NebulaBlob {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
    /// Oscillation amplitude, viewport fraction.
    pub sway: f32,
    pub phase: f32,
}

// (x, y, radius, alpha, sway)
const BLOBS: [(f32, f32, f32, f32, f32); 3] = [
    (0.15, 0.35, 0.65, 0.18, 0.018),
    (0.75, 0.50, 0.78, 0.14, 0.012),
    (0.45, 0.15, 0.55, 0.10, 0.016),
];

pub fn build<R: Rng>(rng: &mut R) -> [NebulaBlob; 3] {
    BLOBS.map(|(x, y, radius, alpha, sway)| NebulaBlob {
        x,
        y,
        radius,
        alpha,
        sway,
        phase: rng.gen::<f32>() * std::f32::consts::TAU,
    })
}
