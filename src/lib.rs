//! Swellfield library - procedural ocean surface synthesis

pub mod cli;
pub mod clock;
pub mod dispersion;
pub mod field;
pub mod floating;
pub mod gerstner;
pub mod grid;
pub mod params;
pub mod simulation;
pub mod spectrum;
pub mod synthesis;
pub mod tiles;
