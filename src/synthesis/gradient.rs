//! Lattice gradient noise (Perlin style)

use noise::NoiseFn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PERMUTATION_SIZE: usize = 256;

/// Seeded 2D gradient noise returning values in [-1, 1].
///
/// The permutation table is a Fisher-Yates shuffle of `0..256` driven by a
/// `ChaCha8Rng`, duplicated to 512 entries so corner lookups never wrap.
#[derive(Clone)]
pub struct GradientNoise {
    seed: u64,
    permutation: [u8; PERMUTATION_SIZE * 2],
}

impl GradientNoise {
    pub fn new(seed: u64) -> Self {
        let mut table = [0u8; PERMUTATION_SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for i in (1..PERMUTATION_SIZE).rev() {
            let j = rng.gen_range(0..=i);
            table.swap(i, j);
        }

        let mut permutation = [0u8; PERMUTATION_SIZE * 2];
        permutation[..PERMUTATION_SIZE].copy_from_slice(&table);
        permutation[PERMUTATION_SIZE..].copy_from_slice(&table);

        Self { seed, permutation }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample the noise at a continuous coordinate.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;

        let x = x - xf;
        let y = y - yf;

        let u = fade(x);
        let v = fade(y);

        let p = &self.permutation;
        let a = p[xi] as usize + yi;
        let b = p[xi + 1] as usize + yi;

        lerp(
            v,
            lerp(u, grad(p[a], x, y), grad(p[b], x - 1.0, y)),
            lerp(u, grad(p[a + 1], x, y - 1.0), grad(p[b + 1], x - 1.0, y - 1.0)),
        )
    }

    #[cfg(test)]
    fn table(&self) -> &[u8] {
        &self.permutation
    }
}

impl NoiseFn<f64, 2> for GradientNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the offset with one of four diagonal directions.
#[inline]
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    // 1 and 2 both give -x + y; every seeded map depends on this table.
    let h = hash & 3;
    let (u, v) = if h < 2 { (x, y) } else { (y, x) };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_directions() {
        assert_eq!(grad(0, 2.0, 3.0), 5.0);
        assert_eq!(grad(1, 2.0, 3.0), 1.0);
        assert_eq!(grad(2, 2.0, 3.0), 1.0);
        assert_eq!(grad(3, 2.0, 3.0), -5.0);
        // only the low two bits select a direction
        assert_eq!(grad(6, 2.0, 3.0), grad(2, 2.0, 3.0));
        assert_eq!(grad(255, 2.0, 3.0), -5.0);
    }

    #[test]
    fn test_permutation_is_a_shuffle() {
        let noise = GradientNoise::new(7);
        let table = noise.table();
        let mut seen = [false; 256];
        for &v in &table[..256] {
            assert!(!seen[v as usize], "value {} repeated", v);
            seen[v as usize] = true;
        }
        assert_eq!(&table[..256], &table[256..]);
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = GradientNoise::new(2024);
        let b = GradientNoise::new(2024);
        assert_eq!(a.table(), b.table());

        let c = GradientNoise::new(2025);
        assert_ne!(a.table(), c.table());
    }

    #[test]
    fn test_lattice_points_are_zero() {
        let noise = GradientNoise::new(99);
        for x in -3..20 {
            for y in -3..20 {
                assert_eq!(noise.sample(x as f64, y as f64), 0.0);
            }
        }
    }

    #[test]
    fn test_output_range() {
        let noise = GradientNoise::new(5);
        for i in 0..2000 {
            let x = i as f64 * 0.173 - 50.0;
            let y = i as f64 * 0.091 + 3.3;
            let v = noise.sample(x, y);
            assert!((-1.0..=1.0).contains(&v), "noise({}, {}) = {}", x, y, v);
        }
    }

    #[test]
    fn test_continuity() {
        let noise = GradientNoise::new(11);
        let a = noise.sample(3.4, 7.8);
        let b = noise.sample(3.4 + 1e-6, 7.8 + 1e-6);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn test_noise_fn_matches_sample() {
        let noise = GradientNoise::new(3);
        assert_eq!(noise.get([1.25, 2.75]), noise.sample(1.25, 2.75));
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-12);
    }
}
