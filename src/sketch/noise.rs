//! Seeded 2D simplex noise and the small PRNG that shuffles it.

/// Skew factor: (sqrt(3) - 1) / 2
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor: (3 - sqrt(3)) / 6
const G2: f64 = 0.211_324_865_405_187_1;

#[rustfmt::skip]
const GRAD: [(f64, f64); 12] = [
    ( 1.0,  1.0), (-1.0,  1.0), ( 1.0, -1.0), (-1.0, -1.0),
    ( 1.0,  0.0), (-1.0,  0.0), ( 1.0,  0.0), (-1.0,  0.0),
    ( 0.0,  1.0), ( 0.0, -1.0), ( 0.0,  1.0), ( 0.0, -1.0),
];

/// SplitMix64. Every seed, including 0, yields a full-period stream.
#[derive(Debug, Clone)]
pub(crate) struct Rng {
    state: u64,
}

impl Rng {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1)
    pub(crate) fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// 2D simplex noise over a seeded permutation table.
///
/// Output lies in roughly [-1, 1] and is continuous, so nearby sample
/// points give nearby values.
#[derive(Clone)]
pub struct Simplex2 {
    perm: [u8; 512],
}

impl std::fmt::Debug for Simplex2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simplex2").finish_non_exhaustive()
    }
}

impl Simplex2 {
    pub fn new(seed: u64) -> Self {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = Rng::new(seed);
        // Fisher-Yates
        for i in (1..256).rev() {
            let j = (rng.next_u64() % (i as u64 + 1)) as usize;
            p.swap(i, j);
        }
        Self {
            perm: std::array::from_fn(|i| p[i & 255]),
        }
    }

    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Which of the two triangles of the skewed cell we are in
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let perm = &self.perm;
        let g0 = perm[ii + perm[jj] as usize] as usize % 12;
        let g1 = perm[ii + i1 + perm[jj + j1] as usize] as usize % 12;
        let g2 = perm[ii + 1 + perm[jj + 1] as usize] as usize % 12;

        let corner = |g: usize, dx: f64, dy: f64| {
            let t = 0.5 - dx * dx - dy * dy;
            if t < 0.0 {
                0.0
            } else {
                let t2 = t * t;
                t2 * t2 * (GRAD[g].0 * dx + GRAD[g].1 * dy)
            }
        };

        70.0 * (corner(g0, x0, y0) + corner(g1, x1, y1) + corner(g2, x2, y2))
    }
}
