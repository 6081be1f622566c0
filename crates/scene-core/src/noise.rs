//! Seeded 3D simplex noise.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

/// Simplex noise over three dimensions; output lies in roughly `[-1, 1]`.
#[derive(Clone)]
pub struct Simplex3 {
    perm: [u8; 512],
}

impl std::fmt::Debug for Simplex3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simplex3").finish_non_exhaustive()
    }
}

impl Simplex3 {
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        table.shuffle(&mut rng);
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn hash(&self, i: i32, j: i32, k: i32) -> usize {
        let i = (i & 255) as usize;
        let j = (j & 255) as usize;
        let k = (k & 255) as usize;
        self.perm[i + self.perm[j + self.perm[k] as usize] as usize] as usize % 12
    }

    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let s = (x + y + z) * F3;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;
        let k = (z + s).floor() as i32;
        let t = (i + j + k) as f32 * G3;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);
        let z0 = z - (k as f32 - t);

        // Which of the six tetrahedra of the skewed cube holds the point.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let corners = [
            (x0, y0, z0, self.hash(i, j, k)),
            (
                x0 - i1 as f32 + G3,
                y0 - j1 as f32 + G3,
                z0 - k1 as f32 + G3,
                self.hash(i + i1, j + j1, k + k1),
            ),
            (
                x0 - i2 as f32 + 2.0 * G3,
                y0 - j2 as f32 + 2.0 * G3,
                z0 - k2 as f32 + 2.0 * G3,
                self.hash(i + i2, j + j2, k + k2),
            ),
            (
                x0 - 1.0 + 3.0 * G3,
                y0 - 1.0 + 3.0 * G3,
                z0 - 1.0 + 3.0 * G3,
                self.hash(i + 1, j + 1, k + 1),
            ),
        ];

        let mut n = 0.0;
        for (dx, dy, dz, gi) in corners {
            let t = 0.6 - dx * dx - dy * dy - dz * dz;
            if t > 0.0 {
                let g = GRAD3[gi];
                let t2 = t * t;
                n += t2 * t2 * (g[0] * dx + g[1] * dy + g[2] * dz);
            }
        }
        32.0 * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = Simplex3::new(7);
        let b = Simplex3::new(7);
        for i in 0..50 {
            let p = i as f32 * 0.37;
            assert_eq!(a.sample(p, p * 0.5, 1.0), b.sample(p, p * 0.5, 1.0));
        }
    }

    #[test]
    fn output_is_bounded() {
        let n = Simplex3::new(3);
        for i in 0..2000 {
            let f = i as f32;
            let v = n.sample(f * 0.13, f * 0.071, f * 0.029);
            assert!((-1.1..=1.1).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn integer_lattice_is_zero() {
        let n = Simplex3::new(11);
        assert!(n.sample(0.0, 0.0, 0.0).abs() < 1e-6);
    }
}
