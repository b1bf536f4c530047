//! Initial spectral field generation (h0 amplitude pairs).
//!
//! One Box-Muller gaussian draw per wavevector, scaled by the Phillips
//! spectrum. Generated exactly once per construction or reseed and
//! immutable afterward; the whole simulation reads from this table.

use rand::Rng;
use rustfft::num_complex::Complex32;
use std::f32::consts::{FRAC_1_SQRT_2, TAU};

use crate::params::OceanParams;
use crate::spectrum;

/// Complex amplitude pair stored per wavevector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralAmplitude {
    /// h0(k)
    pub h0: Complex32,
    /// Conjugate of the field value at -k (the mirror entry's h0)
    pub h0_conj: Complex32,
}

/// Immutable N x N table of spectral amplitude pairs
pub struct SpectralField {
    samples: usize,
    amplitudes: Vec<SpectralAmplitude>,
}

impl SpectralField {
    /// Generate the field from the injected random source
    ///
    /// Every entry gets an independent gaussian draw for its h0. The
    /// conjugate partner at (n, m) is taken from the h0 drawn for the
    /// mirror entry ((N-n) mod N, (N-m) mod N) — the field value at -k,
    /// conjugated — never re-derived from the same entry's h0. That keeps
    /// the pair table conjugate-consistent, which is what makes the
    /// reconstructed height field real-valued.
    pub fn generate<R: Rng>(params: &OceanParams, rng: &mut R) -> Self {
        let samples = params.samples;
        let mut h0 = Vec::with_capacity(samples * samples);

        for m in 0..samples {
            for n in 0..samples {
                let k = spectrum::wave_vector(n, m, samples, params.dimensions);
                let energy = spectrum::phillips(k, &params.phillips);
                let (g_re, g_im) = gaussian_pair(rng);
                h0.push(Complex32::new(g_re, g_im) * (FRAC_1_SQRT_2 * energy.sqrt()));
            }
        }

        let amplitudes = (0..samples * samples)
            .map(|idx| {
                let n = idx % samples;
                let m = idx / samples;
                let mirror = ((samples - m) % samples) * samples + (samples - n) % samples;
                SpectralAmplitude {
                    h0: h0[idx],
                    h0_conj: h0[mirror].conj(),
                }
            })
            .collect();

        Self {
            samples,
            amplitudes,
        }
    }

    /// Build a field directly from precomputed amplitude pairs
    ///
    /// Useful for degenerate hand-built spectra (e.g. a single bin);
    /// `amplitudes` must hold `samples * samples` entries.
    pub fn from_amplitudes(samples: usize, amplitudes: Vec<SpectralAmplitude>) -> Self {
        assert_eq!(amplitudes.len(), samples * samples);
        Self {
            samples,
            amplitudes,
        }
    }

    /// Spectral resolution per side
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Amplitude pair for grid indices (n, m)
    pub fn amplitude(&self, n: usize, m: usize) -> &SpectralAmplitude {
        &self.amplitudes[m * self.samples + n]
    }
}

/// Box-Muller transform: two uniforms into two independent standard normals
fn gaussian_pair<R: Rng>(rng: &mut R) -> (f32, f32) {
    // Clamp away from zero so the log stays finite
    let r1: f32 = rng.gen::<f32>().max(1e-9);
    let r2: f32 = rng.gen();
    let v = (-2.0 * r1.ln()).sqrt();
    let f = TAU * r2;
    (v * f.cos(), v * f.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_field(samples: usize, seed: u64) -> SpectralField {
        let mut params = OceanParams::default();
        params.samples = samples;
        let mut rng = StdRng::seed_from_u64(seed);
        SpectralField::generate(&params, &mut rng)
    }

    #[test]
    fn test_conjugate_pairs_are_consistent() {
        let samples = 16;
        let field = test_field(samples, 7);

        for m in 0..samples {
            for n in 0..samples {
                let mirror_n = (samples - n) % samples;
                let mirror_m = (samples - m) % samples;
                let entry = field.amplitude(n, m);
                let mirror = field.amplitude(mirror_n, mirror_m);
                // Stored conjugate partner equals the mirror entry's h0, conjugated
                assert_eq!(entry.h0_conj, mirror.h0.conj());
            }
        }
    }

    #[test]
    fn test_suppressed_wavevectors_have_zero_amplitude() {
        let mut params = OceanParams::default();
        params.samples = 8;
        params.phillips.wave_suppression = 1e6; // suppress everything
        let mut rng = StdRng::seed_from_u64(1);
        let field = SpectralField::generate(&params, &mut rng);

        for m in 0..8 {
            for n in 0..8 {
                let amp = field.amplitude(n, m);
                assert_eq!(amp.h0, Complex32::new(0.0, 0.0));
                assert_eq!(amp.h0_conj, Complex32::new(0.0, 0.0));
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_field() {
        let samples = 8;
        let a = test_field(samples, 42);
        let b = test_field(samples, 42);
        for m in 0..samples {
            for n in 0..samples {
                assert_eq!(a.amplitude(n, m), b.amplitude(n, m));
            }
        }
    }

    #[test]
    fn test_gaussian_pair_is_finite() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let (a, b) = gaussian_pair(&mut rng);
            assert!(a.is_finite());
            assert!(b.is_finite());
        }
    }
}
