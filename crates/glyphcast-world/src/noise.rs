//! Value noise over a hashed integer lattice.
//!
//! Lattice values come from a PCG-style integer mix of (x, y, z, seed),
//! mapped to [-1, 1] and blended with smoothstep weights. Pure functions:
//! the same inputs always give the same output.

use glyphcast_core::math::lerp;

fn hash3(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    let mut state = (x as u32)
        .wrapping_mul(0x9E3779B9)
        .wrapping_add((y as u32).wrapping_mul(0x517CC1B7))
        .wrapping_add((z as u32).wrapping_mul(0x6C62272E))
        .wrapping_add(seed.wrapping_mul(0x2545F491));

    state ^= state >> 16;
    state = state.wrapping_mul(0x45D9F3B);
    state ^= state >> 16;
    state = state.wrapping_mul(0x45D9F3B);
    state ^= state >> 16;
    state
}

/// Lattice value in [-1, 1].
fn lattice(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    let unit = (hash3(x, y, z, seed) >> 8) as f32 / 16_777_215.0; // 2^24 - 1
    unit * 2.0 - 1.0
}

fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Single-octave 2D value noise in [-1, 1].
pub fn noise2d(x: f32, y: f32, seed: u32) -> f32 {
    noise3d(x, y, 0.0, seed)
}

/// Single-octave 3D value noise in [-1, 1].
pub fn noise3d(x: f32, y: f32, z: f32, seed: u32) -> f32 {
    let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
    let (x0, y0, z0) = (xf as i32, yf as i32, zf as i32);
    let (tx, ty, tz) = (fade(x - xf), fade(y - yf), fade(z - zf));

    let corner = |dx: i32, dy: i32, dz: i32| lattice(x0 + dx, y0 + dy, z0 + dz, seed);

    let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), tx);
    let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), tx);
    let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), tx);
    let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), tx);

    let y0v = lerp(x00, x10, ty);
    let y1v = lerp(x01, x11, ty);
    lerp(y0v, y1v, tz)
}

/// Fractal sum of `octaves` layers of 2D noise. Each octave doubles the
/// frequency and scales amplitude by `persistence`. Result stays in [-1, 1].
pub fn fractal_noise2d(x: f32, y: f32, octaves: u32, persistence: f32, seed: u32) -> f32 {
    fractal(octaves, persistence, |freq, octave| {
        noise2d(x * freq, y * freq, seed.wrapping_add(octave))
    })
}

/// 3D counterpart of [`fractal_noise2d`].
pub fn fractal_noise3d(x: f32, y: f32, z: f32, octaves: u32, persistence: f32, seed: u32) -> f32 {
    fractal(octaves, persistence, |freq, octave| {
        noise3d(x * freq, y * freq, z * freq, seed.wrapping_add(octave))
    })
}

fn fractal(octaves: u32, persistence: f32, sample: impl Fn(f32, u32) -> f32) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_amplitude = 0.0;

    for octave in 0..octaves.max(1) {
        total += sample(frequency, octave) * amplitude;
        max_amplitude += amplitude;
        amplitude *= persistence;
        frequency *= 2.0;
    }

    if max_amplitude > 0.0 {
        (total / max_amplitude).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_deterministic() {
        for i in 0..50 {
            let x = i as f32 * 0.37;
            let y = i as f32 * 0.91;
            assert_eq!(noise2d(x, y, 5), noise2d(x, y, 5));
            assert_eq!(
                fractal_noise2d(x, y, 4, 0.5, 5),
                fractal_noise2d(x, y, 4, 0.5, 5)
            );
        }
    }

    #[test]
    fn test_noise_range() {
        for i in 0..40 {
            for j in 0..40 {
                let (x, y) = (i as f32 * 0.13 - 2.0, j as f32 * 0.29 - 3.0);
                let n = noise2d(x, y, 11);
                assert!((-1.0..=1.0).contains(&n), "noise2d out of range: {n}");
                let f = fractal_noise2d(x, y, 4, 0.5, 11);
                assert!((-1.0..=1.0).contains(&f), "fractal out of range: {f}");
                let t = fractal_noise3d(x, y, 0.7, 3, 0.5, 11);
                assert!((-1.0..=1.0).contains(&t), "fractal3d out of range: {t}");
            }
        }
    }

    #[test]
    fn test_noise_matches_lattice_at_integers() {
        // At integer points the fade weights are zero: value is the lattice value.
        assert_eq!(noise3d(3.0, -2.0, 1.0, 9), lattice(3, -2, 1, 9));
    }

    #[test]
    fn test_seed_changes_field() {
        let differs = (0..20).any(|i| {
            let x = i as f32 * 0.5 + 0.25;
            noise2d(x, x, 1) != noise2d(x, x, 2)
        });
        assert!(differs);
    }

    #[test]
    fn test_noise_continuous() {
        let a = noise2d(1.999, 4.5, 3);
        let b = noise2d(2.001, 4.5, 3);
        assert!((a - b).abs() < 0.01);
    }
}
