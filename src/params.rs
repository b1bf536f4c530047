//! Parameter definitions with physical units and documented semantics.
//!
//! These are the parsed values of the external water configuration;
//! parsing itself lives outside this crate. Everything is validated once
//! at simulation construction.

use glam::Vec2;

/// Surface synthesis strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisMode {
    /// Direct summation over all wavevectors ("DFT"), O(N^4) per full grid
    DirectSummation,
    /// 2D inverse FFT over the evolved spectrum, O(N^2 log N)
    SpectralFft,
    /// Hand-authored trochoidal waves, O(waves) per vertex
    Gerstner,
}

impl SynthesisMode {
    /// Parse a configuration mode name
    ///
    /// Unrecognized names fall back to direct summation (the most complete
    /// statistical model) with a warning rather than failing startup.
    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "DFT" => Self::DirectSummation,
            "FFT" => Self::SpectralFft,
            "GERSTNER" => Self::Gerstner,
            other => {
                eprintln!("Warning: Unknown synthesis mode '{}', using DFT", other);
                Self::DirectSummation
            }
        }
    }
}

/// Phillips spectrum inputs
#[derive(Debug, Clone)]
pub struct PhillipsParams {
    /// Global spectrum amplitude constant (dimensionless)
    pub a_constant: f32,

    /// Wind speed in meters per second
    pub wind_speed: f32,

    /// Wind direction in the tile plane (normalized on use; a zero vector
    /// is substituted with +X rather than failing)
    pub wind_direction: Vec2,

    /// Small-wave suppression length in meters; wavevectors shorter than
    /// this magnitude contribute zero energy
    pub wave_suppression: f32,
}

impl Default for PhillipsParams {
    fn default() -> Self {
        Self {
            a_constant: 0.0005,
            wind_speed: 20.0,
            wind_direction: Vec2::new(1.0, 0.0),
            wave_suppression: 0.1,
        }
    }
}

/// Runtime-tunable defaults from the configuration
#[derive(Debug, Clone)]
pub struct RuntimeDefaults {
    /// Horizontal displacement scale (0 = pure height field)
    pub choppiness: f32,

    /// Interactive ripple sources; recognized but not implemented
    pub i_wave_enabled: bool,

    /// Start in wireframe draw mode
    pub wireframe_enabled: bool,

    /// Visual tiling dimensions (T, replicated T x T)
    pub tiling_size: usize,
}

impl Default for RuntimeDefaults {
    fn default() -> Self {
        Self {
            choppiness: 1.0,
            i_wave_enabled: false,
            wireframe_enabled: false,
            tiling_size: 3,
        }
    }
}

/// Full parsed ocean configuration
#[derive(Debug, Clone)]
pub struct OceanParams {
    /// Active synthesis strategy
    pub synthesis: SynthesisMode,

    /// Spectral resolution per side (power of two, 2..=2048)
    pub samples: usize,

    /// World-space extent of one simulated tile (meters)
    pub dimensions: Vec2,

    /// Phillips spectrum block
    pub phillips: PhillipsParams,

    /// Runtime defaults block
    pub defaults: RuntimeDefaults,

    /// Visual repeat period in seconds; dispersion frequencies are
    /// quantized to multiples of 2*pi/period so the field loops
    pub repeat_period_s: f32,
}

impl Default for OceanParams {
    fn default() -> Self {
        Self {
            synthesis: SynthesisMode::DirectSummation,
            samples: 64,
            dimensions: Vec2::splat(128.0),
            phillips: PhillipsParams::default(),
            defaults: RuntimeDefaults::default(),
            repeat_period_s: 200.0,
        }
    }
}

impl OceanParams {
    /// Validate configuration (sample count must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.samples.is_power_of_two() {
            return Err(format!(
                "samples must be a power of 2, got {}",
                self.samples
            ));
        }
        if !(2..=2048).contains(&self.samples) {
            return Err(format!(
                "samples must be in [2, 2048], got {}",
                self.samples
            ));
        }
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 {
            return Err(format!(
                "tile dimensions must be positive, got {:?}",
                self.dimensions
            ));
        }
        if self.defaults.tiling_size == 0 {
            return Err("tiling size must be at least 1".to_string());
        }
        if self.repeat_period_s <= 0.0 {
            return Err(format!(
                "repeat period must be positive, got {}",
                self.repeat_period_s
            ));
        }
        Ok(())
    }
}
