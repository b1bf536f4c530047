//! Deep-water dispersion relation and per-tick amplitude evolution.

use glam::Vec2;
use rustfft::num_complex::Complex32;
use std::f32::consts::TAU;

use crate::field::SpectralAmplitude;
use crate::spectrum::GRAVITY;

/// Deep-water gravity-wave dispersion: omega = sqrt(g * |k|)
pub fn dispersion(k: Vec2) -> f32 {
    (GRAVITY * k.length()).sqrt()
}

/// Dispersion quantized to multiples of 2*pi/period
///
/// Forces every frequency onto the same base frequency lattice so the
/// whole field repeats visually after `repeat_period_s` seconds.
pub fn quantized_dispersion(k: Vec2, repeat_period_s: f32) -> f32 {
    let base = TAU / repeat_period_s;
    (dispersion(k) / base).floor() * base
}

/// Time-evolved complex amplitude:
/// h(k, t) = h0 * e^{i omega t} + h0_conj * e^{-i omega t}
pub fn evolve(amplitude: &SpectralAmplitude, omega: f32, time_s: f32) -> Complex32 {
    let rotor = Complex32::from_polar(1.0, omega * time_s);
    amplitude.h0 * rotor + amplitude.h0_conj * rotor.conj()
}
