//! Phillips wave spectrum and wavevector derivation.

use glam::Vec2;
use std::f32::consts::PI;

use crate::params::PhillipsParams;

/// Gravitational acceleration (m/s^2)
pub const GRAVITY: f32 = 9.81;

/// Wavevectors below this magnitude are treated as the DC term
pub const MIN_WAVE_NUMBER: f32 = 1e-6;

/// Wavevector for grid indices (n, m) in [0, samples)
///
/// kx = pi * (2n - N) / Lx, ky = pi * (2m - N) / Ly. The spectrum is
/// centered, so index 0 carries the most negative frequency.
pub fn wave_vector(n: usize, m: usize, samples: usize, dimensions: Vec2) -> Vec2 {
    let count = samples as f32;
    Vec2::new(
        PI * (2.0 * n as f32 - count) / dimensions.x,
        PI * (2.0 * m as f32 - count) / dimensions.y,
    )
}

/// Phillips spectrum energy density for wavevector `k`
///
/// P(k) = A * exp(-1/(|k|L)^2) / |k|^4 * (k_hat . w_hat)^2
///          * exp(-|k|^2 * suppression^2),  L = wind_speed^2 / g
///
/// Returns exactly 0 for the DC term and for wavevectors below the
/// suppression threshold; never returns NaN or infinity.
pub fn phillips(k: Vec2, params: &PhillipsParams) -> f32 {
    let k_len = k.length();
    if k_len < MIN_WAVE_NUMBER || k_len < params.wave_suppression {
        return 0.0;
    }

    // Degenerate wind direction recovers to +X instead of failing
    let wind = params
        .wind_direction
        .try_normalize()
        .unwrap_or(Vec2::new(1.0, 0.0));

    let largest_wave = params.wind_speed * params.wind_speed / GRAVITY;
    if largest_wave <= 0.0 {
        return 0.0;
    }

    let kl = k_len * largest_wave;
    let k4 = k_len * k_len * k_len * k_len;
    let alignment = k.normalize().dot(wind);
    let damping = params.wave_suppression * params.wave_suppression;

    params.a_constant * (-1.0 / (kl * kl)).exp() / k4
        * alignment
        * alignment
        * (-(k_len * k_len) * damping).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_vector_is_centered() {
        let dims = Vec2::splat(64.0);
        let low = wave_vector(0, 0, 8, dims);
        let high = wave_vector(7, 7, 8, dims);
        // Index 0 is the most negative frequency, N/2 is DC
        assert!(low.x < 0.0 && low.y < 0.0);
        assert!(high.x > 0.0 && high.y > 0.0);
        assert_eq!(wave_vector(4, 4, 8, dims), Vec2::ZERO);
    }

    #[test]
    fn test_phillips_zero_at_dc() {
        let params = PhillipsParams::default();
        assert_eq!(phillips(Vec2::ZERO, &params), 0.0);
    }

    #[test]
    fn test_phillips_zero_below_suppression() {
        let mut params = PhillipsParams::default();
        params.wave_suppression = 0.5;
        assert_eq!(phillips(Vec2::new(0.4, 0.0), &params), 0.0);
        assert_eq!(phillips(Vec2::new(0.0, 0.49), &params), 0.0);
        assert!(phillips(Vec2::new(0.6, 0.0), &params) > 0.0);
    }

    #[test]
    fn test_phillips_finite_and_non_negative() {
        let params = PhillipsParams::default();
        let dims = Vec2::splat(128.0);
        for m in 0..32 {
            for n in 0..32 {
                let energy = phillips(wave_vector(n, m, 32, dims), &params);
                assert!(energy.is_finite());
                assert!(energy >= 0.0);
            }
        }
    }

    #[test]
    fn test_phillips_recovers_zero_wind_direction() {
        let mut params = PhillipsParams::default();
        params.wind_direction = Vec2::ZERO;
        let k = Vec2::new(1.0, 0.0);

        let mut reference = PhillipsParams::default();
        reference.wind_direction = Vec2::new(1.0, 0.0);

        assert_eq!(phillips(k, &params), phillips(k, &reference));
    }

    #[test]
    fn test_phillips_zero_wind_speed() {
        let mut params = PhillipsParams::default();
        params.wind_speed = 0.0;
        let energy = phillips(Vec2::new(1.0, 1.0), &params);
        assert_eq!(energy, 0.0);
        assert!(energy.is_finite());
    }
}
