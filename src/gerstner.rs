//! Hand-authored discrete trochoidal (Gerstner) waves.
//!
//! Independent of the statistical spectrum: a handful of large,
//! art-directed waves authored at runtime through the dev-console
//! bindings. Magnitude derives from wavelength and frequency derives from
//! magnitude via the deep-water dispersion relation.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::spectrum::GRAVITY;

/// Smallest allowed wave number; keeps the choppiness division sane
const MIN_MAGNITUDE: f32 = 1e-4;

/// One authored trochoidal wave
#[derive(Debug, Clone)]
pub struct DiscreteWave {
    /// Unit travel direction in the tile plane
    pub direction: Vec2,
    /// Wave number, 2*pi / wavelength
    pub magnitude: f32,
    /// Angular frequency from the dispersion relation
    pub frequency: f32,
    /// Crest amplitude in meters
    pub amplitude: f32,
    /// Phase offset in radians
    pub phase: f32,
}

impl DiscreteWave {
    /// Author a wave from direction, wavelength (meters), amplitude and phase
    pub fn new(direction: Vec2, wavelength: f32, amplitude: f32, phase: f32) -> Self {
        let direction = direction.try_normalize().unwrap_or(Vec2::new(1.0, 0.0));
        let magnitude = (TAU / wavelength.max(MIN_MAGNITUDE)).max(MIN_MAGNITUDE);
        Self {
            direction,
            magnitude,
            frequency: (GRAVITY * magnitude).sqrt(),
            amplitude,
            phase,
        }
    }

    /// Rotate the travel direction by `degrees` counter-clockwise
    pub fn rotate_direction_degrees(&mut self, degrees: f32) {
        self.direction = Vec2::from_angle(degrees.to_radians()).rotate(self.direction);
    }

    /// Add to the crest amplitude
    pub fn add_amplitude(&mut self, delta: f32) {
        self.amplitude += delta;
    }

    /// Add to the wave number, re-deriving the frequency
    pub fn add_magnitude(&mut self, delta: f32) {
        self.magnitude = (self.magnitude + delta).max(MIN_MAGNITUDE);
        self.frequency = (GRAVITY * self.magnitude).sqrt();
    }

    /// Add to the phase offset
    pub fn add_phase(&mut self, delta: f32) {
        self.phase += delta;
    }

    /// Wave phase angle at a rest position and time
    pub fn phase_at(&self, rest_xy: Vec2, time_s: f32) -> f32 {
        self.magnitude * self.direction.dot(rest_xy) - self.frequency * time_s + self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_from_wavelength() {
        let wave = DiscreteWave::new(Vec2::new(1.0, 0.0), 2.0, 0.5, 0.0);
        assert!((wave.magnitude - std::f32::consts::PI).abs() < 1e-6);
        assert!((wave.frequency - (GRAVITY * wave.magnitude).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_direction_normalized_with_fallback() {
        let wave = DiscreteWave::new(Vec2::new(3.0, 4.0), 10.0, 1.0, 0.0);
        assert!((wave.direction.length() - 1.0).abs() < 1e-6);

        let degenerate = DiscreteWave::new(Vec2::ZERO, 10.0, 1.0, 0.0);
        assert_eq!(degenerate.direction, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_rotate_direction() {
        let mut wave = DiscreteWave::new(Vec2::new(1.0, 0.0), 10.0, 1.0, 0.0);
        wave.rotate_direction_degrees(90.0);
        assert!(wave.direction.x.abs() < 1e-6);
        assert!((wave.direction.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_add_magnitude_rederives_frequency() {
        let mut wave = DiscreteWave::new(Vec2::new(1.0, 0.0), 10.0, 1.0, 0.0);
        let before = wave.frequency;
        wave.add_magnitude(0.5);
        assert!(wave.frequency > before);
        assert!((wave.frequency - (GRAVITY * wave.magnitude).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_phase_at_reference_points() {
        // wavelength 2 => magnitude pi; phase at x=1, t=0 is pi
        let wave = DiscreteWave::new(Vec2::new(1.0, 0.0), 2.0, 0.5, 0.0);
        assert!(wave.phase_at(Vec2::ZERO, 0.0).abs() < 1e-6);
        assert!((wave.phase_at(Vec2::new(1.0, 0.0), 0.0) - std::f32::consts::PI).abs() < 1e-5);
    }
}
