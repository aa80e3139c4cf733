use track_qubo::segments::{DetectorGeometry, LayerGeometry};
use track_qubo::Hit;

/// Layers at z = 0, 1, .. with `bins` uniform segments over x in [0, width].
pub fn planar_geometry(layers: usize, width: f64, bins: usize) -> DetectorGeometry {
    DetectorGeometry {
        layers: (0..layers)
            .map(|l| LayerGeometry::uniform(l as f64, 0.0, width, bins))
            .collect(),
    }
}

/// One straight track at x = 2, y = 1 on four layers, a kinked rival on the
/// last layer, a noise hit and an off-geometry hit.
///
/// Hit indices: 0..4 true track, 4 noise on layer 2, 5 off-geometry on
/// layer 1, 6 rival on layer 3.
pub fn single_track_event() -> Vec<Hit> {
    let mut hits: Vec<Hit> = (0..4)
        .map(|l| Hit::new(l as u64, [2.0, 1.0, l as f64], l, 1).with_energy(1.2))
        .collect();
    hits.push(Hit::new(4, [7.5, 1.0, 2.0], 2, 0));
    hits.push(Hit::new(5, [12.0, 1.0, 1.0], 1, 0));
    hits.push(Hit::new(6, [2.1, 1.0, 3.0], 3, 2));
    hits
}

/// Three hits per layer on four layers: one straight track at x = 2, y = 1
/// (indices 0, 3, 6, 9) and two scattered hits per layer that fail the
/// angular cut in every other combination. Hit `3 * layer + k` is the k-th
/// hit of a layer.
pub fn three_per_layer_event() -> Vec<Hit> {
    let layers = [
        [(2.0, 1.0), (5.0, 0.5), (8.0, 1.5)],
        [(2.0, 1.0), (6.0, 0.2), (7.0, 1.8)],
        [(2.0, 1.0), (5.2, 0.9), (9.0, 0.4)],
        [(2.0, 1.0), (7.5, 1.6), (6.3, 0.1)],
    ];
    let mut hits = Vec::new();
    for (l, layer) in layers.iter().enumerate() {
        for (k, &(x, y)) in layer.iter().enumerate() {
            let id = (3 * l + k) as u64;
            let particle = if k == 0 { 1 } else { 100 + id };
            hits.push(Hit::new(id, [x, y, l as f64], l, particle));
        }
    }
    hits
}

/// Small deterministic generator for reproducible events.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform sample in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

/// `tracks` straight tracks with small slopes and jitter over `layers`
/// layers of width 20, plus `noise` random hits. Track particle ids start
/// at 1; every noise hit gets its own particle id from 1000 upwards.
pub fn multi_track_event(seed: u64, layers: usize, tracks: usize, noise: usize) -> Vec<Hit> {
    let mut rng = Lcg::new(seed);
    let mut hits = Vec::new();
    let mut next_id = 0u64;
    for p in 0..tracks {
        let x0 = rng.range(3.0, 17.0);
        let y0 = rng.range(-1.0, 1.0);
        let sx = rng.range(-0.05, 0.05);
        let sy = rng.range(-0.05, 0.05);
        for l in 0..layers {
            let z = l as f64;
            let x = x0 + sx * z + rng.range(-1e-3, 1e-3);
            let y = y0 + sy * z + rng.range(-1e-3, 1e-3);
            hits.push(Hit::new(next_id, [x, y, z], l, p as u64 + 1).with_energy(1.0));
            next_id += 1;
        }
    }
    for k in 0..noise {
        let l = (rng.next_f64() * layers as f64) as usize % layers;
        let x = rng.range(0.5, 19.5);
        let y = rng.range(-1.0, 1.0);
        hits.push(Hit::new(next_id, [x, y, l as f64], l, 1000 + k as u64));
        next_id += 1;
    }
    hits
}
