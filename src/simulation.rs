//! Root wave simulation: one simulator, one swappable strategy.
//!
//! Owns the spectral field, the tile mesh, the authored Gerstner waves,
//! the tiling layout and the simulation clock. `simulate` runs fully on
//! the calling thread; the renderer reads the result afterwards through
//! [`DrawBatch`], a read-only snapshot of the frame's vertex data.

use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

use crate::clock::SimulationClock;
use crate::field::SpectralField;
use crate::floating::{self, Footprint};
use crate::gerstner::DiscreteWave;
use crate::grid::{SurfaceGrid, SurfaceVertex};
use crate::params::OceanParams;
use crate::synthesis::{self, SampleContext, SurfaceSynthesizer};
use crate::tiles::TileManager;

/// Read-only per-frame snapshot handed to the renderer collaborator
pub struct DrawBatch<'a> {
    pub vertices: &'a [SurfaceVertex],
    pub indices: &'a [u32],
    /// One placement per replicated tile instance
    pub tile_offsets: &'a [Vec3],
    pub wireframe: bool,
}

/// Procedural ocean-surface simulation for one tessellated tile
pub struct WaveSimulation {
    params: OceanParams,
    field: SpectralField,
    grid: SurfaceGrid,
    tiles: TileManager,
    waves: Vec<DiscreteWave>,
    clock: SimulationClock,
    synthesizer: Box<dyn SurfaceSynthesizer>,
    choppiness: f32,
    wireframe: bool,
}

impl WaveSimulation {
    /// Build the simulation from validated parameters and an injected
    /// random source
    pub fn new<R: Rng>(params: OceanParams, rng: &mut R) -> Result<Self, String> {
        params.validate()?;

        if params.defaults.i_wave_enabled {
            eprintln!("Warning: iWave interaction is not implemented, ignoring flag");
        }

        let field = SpectralField::generate(&params, rng);
        let grid = SurfaceGrid::new(params.samples, params.dimensions);
        let tiles = TileManager::new(params.defaults.tiling_size, params.dimensions, Vec3::ZERO);
        let synthesizer = synthesis::make_synthesizer(params.synthesis, params.samples);

        Ok(Self {
            choppiness: params.defaults.choppiness,
            wireframe: params.defaults.wireframe_enabled,
            field,
            grid,
            tiles,
            waves: Vec::new(),
            clock: SimulationClock::default(),
            synthesizer,
            params,
        })
    }

    /// Advance one tick using the externally supplied frame delta
    pub fn simulate(&mut self, frame_dt_s: f32) {
        self.clock.advance(frame_dt_s);
        let ctx = SampleContext {
            time_s: self.clock.elapsed_s(),
            field: &self.field,
            waves: &self.waves,
            params: &self.params,
        };
        self.synthesizer.prepare(&ctx);
        self.grid.synthesize(self.synthesizer.as_ref(), &ctx, self.choppiness);
    }

    /// Frame snapshot for the renderer: one shared mesh, T^2 placements
    pub fn draw_batch(&self) -> DrawBatch<'_> {
        DrawBatch {
            vertices: &self.grid.vertices,
            indices: &self.grid.indices,
            tile_offsets: self.tiles.offsets(),
            wireframe: self.wireframe,
        }
    }

    /// Regenerate the spectral field from a fresh random draw
    pub fn reseed<R: Rng>(&mut self, rng: &mut R) {
        self.field = SpectralField::generate(&self.params, rng);
    }

    // --- Gerstner authoring surface (dev-console bindings) ---

    /// Author a new wave, returning its index
    pub fn add_wave(
        &mut self,
        direction: Vec2,
        wavelength: f32,
        amplitude: f32,
        phase: f32,
    ) -> usize {
        self.waves
            .push(DiscreteWave::new(direction, wavelength, amplitude, phase));
        self.waves.len() - 1
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    pub fn wave_at_index(&self, index: usize) -> Option<&DiscreteWave> {
        self.waves.get(index)
    }

    pub fn wave_at_index_mut(&mut self, index: usize) -> Option<&mut DiscreteWave> {
        self.waves.get_mut(index)
    }

    pub fn remove_wave(&mut self, index: usize) -> Option<DiscreteWave> {
        (index < self.waves.len()).then(|| self.waves.remove(index))
    }

    // --- Runtime toggles ---

    /// Move the whole layout (and its tile bounds) in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.tiles.set_position(position);
    }

    pub fn set_tiling_dimensions(&mut self, tiling: usize) {
        self.tiles.set_tiling_dimensions(tiling);
    }

    pub fn toggle_wireframe(&mut self) -> bool {
        self.wireframe = !self.wireframe;
        self.wireframe
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.clock.toggle_pause()
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.clock.set_time_scale(scale);
    }

    pub fn set_choppiness(&mut self, choppiness: f32) {
        self.choppiness = choppiness;
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Averaged surface-orientation transform under a floating object
    pub fn transform_by_average_water(&self, footprint: Footprint) -> Mat4 {
        floating::transform_by_average_water(&self.grid, &self.tiles, footprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SynthesisMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_params(mode: SynthesisMode) -> OceanParams {
        let mut params = OceanParams::default();
        params.synthesis = mode;
        params.samples = 8;
        params.dimensions = Vec2::splat(32.0);
        params
    }

    fn build(mode: SynthesisMode, seed: u64) -> WaveSimulation {
        let mut rng = StdRng::seed_from_u64(seed);
        WaveSimulation::new(small_params(mode), &mut rng).unwrap()
    }

    #[test]
    fn test_invalid_samples_rejected_at_construction() {
        let mut params = OceanParams::default();
        params.samples = 48;
        let mut rng = StdRng::seed_from_u64(0);
        assert!(WaveSimulation::new(params, &mut rng).is_err());
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let mut a = build(SynthesisMode::DirectSummation, 9);
        let mut b = build(SynthesisMode::DirectSummation, 9);
        a.simulate(0.2);
        b.simulate(0.2);

        let batch_a = a.draw_batch();
        let batch_b = b.draw_batch();
        for (va, vb) in batch_a.vertices.iter().zip(batch_b.vertices) {
            assert_eq!(va.position, vb.position);
            assert_eq!(va.normal, vb.normal);
        }
    }

    #[test]
    fn test_paused_clock_freezes_surface() {
        let mut sim = build(SynthesisMode::DirectSummation, 3);
        sim.simulate(0.3);
        let before: Vec<[f32; 3]> = sim.draw_batch().vertices.iter().map(|v| v.position).collect();

        assert!(sim.toggle_pause());
        sim.simulate(0.7);
        let after: Vec<[f32; 3]> = sim.draw_batch().vertices.iter().map(|v| v.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_gerstner_reference_heights() {
        let mut params = small_params(SynthesisMode::Gerstner);
        params.samples = 4;
        params.dimensions = Vec2::splat(4.0);
        let mut rng = StdRng::seed_from_u64(0);
        let mut sim = WaveSimulation::new(params, &mut rng).unwrap();
        sim.add_wave(Vec2::new(1.0, 0.0), 2.0, 0.5, 0.0);
        // dt = 0 keeps the clock at t = 0
        sim.simulate(0.0);

        // Rest (0,0) is lattice (2,2); rest (1,0) is (2,3); cell size 1
        let batch = sim.draw_batch();
        let at_origin = batch.vertices[2 * 5 + 2];
        let at_one = batch.vertices[2 * 5 + 3];
        assert!((at_origin.position[2] - 0.5).abs() < 1e-5);
        assert!((at_one.position[2] + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_wave_authoring_surface() {
        let mut sim = build(SynthesisMode::Gerstner, 1);
        let index = sim.add_wave(Vec2::new(0.0, 1.0), 12.0, 0.8, 0.4);
        assert_eq!(sim.wave_count(), 1);

        let wave = sim.wave_at_index_mut(index).unwrap();
        wave.add_amplitude(0.2);
        assert!((sim.wave_at_index(index).unwrap().amplitude - 1.0).abs() < 1e-6);

        assert!(sim.wave_at_index(5).is_none());
        assert!(sim.remove_wave(index).is_some());
        assert_eq!(sim.wave_count(), 0);
    }

    #[test]
    fn test_reseed_changes_surface() {
        let mut sim = build(SynthesisMode::DirectSummation, 2);
        sim.simulate(0.5);
        let before: Vec<[f32; 3]> = sim.draw_batch().vertices.iter().map(|v| v.position).collect();

        let mut rng = StdRng::seed_from_u64(999);
        sim.reseed(&mut rng);
        // Re-evaluate at the same simulation time
        sim.simulate(0.0);
        let after: Vec<[f32; 3]> = sim.draw_batch().vertices.iter().map(|v| v.position).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_draw_batch_shape() {
        let sim = build(SynthesisMode::SpectralFft, 4);
        let batch = sim.draw_batch();
        assert_eq!(batch.vertices.len(), 9 * 9);
        assert_eq!(batch.indices.len(), 6 * 64);
        assert_eq!(batch.tile_offsets.len(), 9); // default tiling is 3x3
        assert!(!batch.wireframe);
    }

    #[test]
    fn test_outside_footprint_yields_identity() {
        let sim = build(SynthesisMode::DirectSummation, 6);
        let footprint = Footprint {
            min: Vec2::splat(1000.0),
            max: Vec2::splat(1001.0),
        };
        assert_eq!(sim.transform_by_average_water(footprint), Mat4::IDENTITY);
    }
}
