//! Command-line argument parsing.

use clap::Parser;
use glam::Vec2;

use crate::params::{OceanParams, SynthesisMode};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Swellfield")]
#[command(about = "Procedural ocean surface synthesizer", long_about = None)]
pub struct Args {
    /// Synthesis mode: dft (default), fft, gerstner
    #[arg(long, value_name = "MODE", default_value = "dft")]
    pub mode: String,

    /// Spectral resolution per side (power of two, 2-2048)
    #[arg(long, value_name = "N", default_value_t = 64)]
    pub samples: usize,

    /// Tile extent in meters (square tile)
    #[arg(long, value_name = "METERS", default_value_t = 128.0)]
    pub dimensions: f32,

    /// Number of frames to simulate
    #[arg(long, value_name = "COUNT", default_value_t = 120)]
    pub frames: u32,

    /// Fixed timestep per frame (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Seed for the spectral field's random draw
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Visual tiling dimensions (T, drawn T x T)
    #[arg(long, value_name = "T", default_value_t = 3)]
    pub tiling: usize,

    /// Horizontal choppiness displacement scale
    #[arg(long, default_value_t = 1.0)]
    pub choppiness: f32,

    /// Wind speed in meters per second
    #[arg(long, value_name = "M_PER_S", default_value_t = 20.0)]
    pub wind_speed: f32,
}

impl Args {
    /// Assemble the ocean configuration from command-line arguments
    pub fn ocean_params(&self) -> OceanParams {
        let mut params = OceanParams::default();
        params.synthesis = SynthesisMode::from_name(&self.mode);
        params.samples = self.samples;
        params.dimensions = Vec2::splat(self.dimensions);
        params.phillips.wind_speed = self.wind_speed;
        params.defaults.tiling_size = self.tiling;
        params.defaults.choppiness = self.choppiness;
        params
    }
}
