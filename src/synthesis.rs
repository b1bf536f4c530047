//! Surface synthesis strategies (direct summation, FFT, Gerstner).
//!
//! One trait, three interchangeable strategies sharing the same contract:
//! given a rest position and the current tick's context, produce a height
//! and a horizontal choppiness displacement. The simulator owns exactly
//! one strategy at a time; swapping strategies never touches the grid or
//! the spectral field.

use glam::Vec2;
use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use crate::dispersion;
use crate::field::SpectralField;
use crate::gerstner::DiscreteWave;
use crate::params::{OceanParams, SynthesisMode};
use crate::spectrum::{self, MIN_WAVE_NUMBER};

/// Height and horizontal displacement for one vertex
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceSample {
    pub height: f32,
    pub displacement: Vec2,
}

/// Per-tick evaluation context, borrowed from the simulator
pub struct SampleContext<'a> {
    pub time_s: f32,
    pub field: &'a SpectralField,
    pub waves: &'a [DiscreteWave],
    pub params: &'a OceanParams,
}

/// Strategy contract for evaluating the animated surface
pub trait SurfaceSynthesizer {
    /// Once-per-tick hook, run before any vertex is evaluated
    fn prepare(&mut self, _ctx: &SampleContext) {}

    /// Height + displacement at a rest position
    fn evaluate(&self, ctx: &SampleContext, rest_xy: Vec2) -> SurfaceSample;
}

/// Build the strategy for a configured mode
pub fn make_synthesizer(mode: SynthesisMode, samples: usize) -> Box<dyn SurfaceSynthesizer> {
    match mode {
        SynthesisMode::DirectSummation => Box::new(DirectSummation),
        SynthesisMode::SpectralFft => Box::new(SpectralFft::new(samples)),
        SynthesisMode::Gerstner => Box::new(GerstnerStrategy),
    }
}

/// Direct summation over all N^2 wavevectors per vertex ("DFT")
///
/// O(N^4) for a full grid refresh; the reference statistical model and
/// the hot path that bounds usable N.
pub struct DirectSummation;

impl SurfaceSynthesizer for DirectSummation {
    fn evaluate(&self, ctx: &SampleContext, rest_xy: Vec2) -> SurfaceSample {
        let samples = ctx.field.samples();
        let mut height = 0.0f32;
        let mut displacement = Vec2::ZERO;

        for m in 0..samples {
            for n in 0..samples {
                let k = spectrum::wave_vector(n, m, samples, ctx.params.dimensions);
                let omega = dispersion::quantized_dispersion(k, ctx.params.repeat_period_s);
                let amplitude =
                    dispersion::evolve(ctx.field.amplitude(n, m), omega, ctx.time_s);
                let term = amplitude * Complex32::from_polar(1.0, k.dot(rest_xy));

                height += term.re;

                let k_len = k.length();
                if k_len > MIN_WAVE_NUMBER {
                    // Choppiness term, k_hat / |k|
                    displacement += k / (k_len * k_len) * term.im;
                }
            }
        }

        SurfaceSample {
            height,
            displacement,
        }
    }
}

/// Layered sum of the authored trochoidal waves
pub struct GerstnerStrategy;

impl SurfaceSynthesizer for GerstnerStrategy {
    fn evaluate(&self, ctx: &SampleContext, rest_xy: Vec2) -> SurfaceSample {
        let mut height = 0.0f32;
        let mut displacement = Vec2::ZERO;

        for wave in ctx.waves {
            let phase = wave.phase_at(rest_xy, ctx.time_s);
            height += wave.amplitude * phase.cos();
            displacement -= wave.direction / wave.magnitude * (wave.amplitude * phase.sin());
        }

        SurfaceSample {
            height,
            displacement,
        }
    }
}

/// Spectral synthesis via a genuine 2D inverse FFT
///
/// Mathematically identical to [`DirectSummation`], but the whole lattice
/// is reconstructed once per tick in O(N^2 log N): the evolved spectrum
/// (and the two derived displacement spectra) are transformed row-wise
/// then column-wise, and per-vertex evaluation becomes a lattice lookup.
///
/// The centered wavevector convention (index 0 = most negative frequency,
/// lattice origin at -dim/2) folds into the transform as a (-1)^(n+m)
/// pre-twiddle and a (-1)^(i+j) post-twiddle.
pub struct SpectralFft {
    samples: usize,
    fft: Arc<dyn Fft<f32>>,
    spectrum_h: Vec<Complex32>,
    spectrum_dx: Vec<Complex32>,
    spectrum_dy: Vec<Complex32>,
    column: Vec<Complex32>,
    lattice: Vec<SurfaceSample>,
}

impl SpectralFft {
    pub fn new(samples: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_inverse(samples);
        let zero = Complex32::new(0.0, 0.0);
        Self {
            samples,
            fft,
            spectrum_h: vec![zero; samples * samples],
            spectrum_dx: vec![zero; samples * samples],
            spectrum_dy: vec![zero; samples * samples],
            column: vec![zero; samples],
            lattice: vec![SurfaceSample::default(); samples * samples],
        }
    }

    /// Unnormalized 2D inverse transform, rows then columns in place
    fn inverse_2d(
        fft: &Arc<dyn Fft<f32>>,
        samples: usize,
        buffer: &mut [Complex32],
        column: &mut [Complex32],
    ) {
        // Rows are contiguous; process() transforms each chunk of len()
        fft.process(buffer);

        for col in 0..samples {
            for row in 0..samples {
                column[row] = buffer[row * samples + col];
            }
            fft.process(column);
            for row in 0..samples {
                buffer[row * samples + col] = column[row];
            }
        }
    }
}

impl SurfaceSynthesizer for SpectralFft {
    fn prepare(&mut self, ctx: &SampleContext) {
        let samples = self.samples;
        debug_assert_eq!(samples, ctx.field.samples());

        for m in 0..samples {
            for n in 0..samples {
                let k = spectrum::wave_vector(n, m, samples, ctx.params.dimensions);
                let omega = dispersion::quantized_dispersion(k, ctx.params.repeat_period_s);
                let amplitude =
                    dispersion::evolve(ctx.field.amplitude(n, m), omega, ctx.time_s);
                let sign = if (n + m) % 2 == 0 { 1.0 } else { -1.0 };

                let idx = m * samples + n;
                self.spectrum_h[idx] = amplitude * sign;

                let k_len = k.length();
                if k_len > MIN_WAVE_NUMBER {
                    // Im[h e^{ikx}] = Re[-i h e^{ikx}]; fold the -i and the
                    // k_hat / |k| factor into the displacement spectra
                    let scale = sign / (k_len * k_len);
                    self.spectrum_dx[idx] = amplitude * Complex32::new(0.0, -k.x * scale);
                    self.spectrum_dy[idx] = amplitude * Complex32::new(0.0, -k.y * scale);
                } else {
                    self.spectrum_dx[idx] = Complex32::new(0.0, 0.0);
                    self.spectrum_dy[idx] = Complex32::new(0.0, 0.0);
                }
            }
        }

        Self::inverse_2d(&self.fft, samples, &mut self.spectrum_h, &mut self.column);
        Self::inverse_2d(&self.fft, samples, &mut self.spectrum_dx, &mut self.column);
        Self::inverse_2d(&self.fft, samples, &mut self.spectrum_dy, &mut self.column);

        for i in 0..samples {
            for j in 0..samples {
                let idx = i * samples + j;
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                self.lattice[idx] = SurfaceSample {
                    height: sign * self.spectrum_h[idx].re,
                    displacement: Vec2::new(
                        sign * self.spectrum_dx[idx].re,
                        sign * self.spectrum_dy[idx].re,
                    ),
                };
            }
        }
    }

    fn evaluate(&self, ctx: &SampleContext, rest_xy: Vec2) -> SurfaceSample {
        let samples = self.samples as isize;
        let cell = ctx.params.dimensions / self.samples as f32;
        let half = ctx.params.dimensions * 0.5;

        // Rest positions sit exactly on lattice points; the +dim/2 edge
        // wraps back to the first sample (the tile is periodic)
        let j = (((rest_xy.x + half.x) / cell.x).round() as isize).rem_euclid(samples) as usize;
        let i = (((rest_xy.y + half.y) / cell.y).round() as isize).rem_euclid(samples) as usize;

        self.lattice[i * self.samples + j]
    }
}
