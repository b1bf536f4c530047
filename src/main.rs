//! Swellfield - headless driver for the ocean-surface synthesis engine.
//!
//! Runs the simulation for a fixed number of frames and prints surface
//! statistics; the renderer collaborator would consume the same
//! `DrawBatch` snapshot this loop samples.

use clap::Parser;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use swellfield::cli::Args;
use swellfield::floating::Footprint;
use swellfield::params::SynthesisMode;
use swellfield::simulation::WaveSimulation;

fn main() {
    let args = Args::parse();
    let params = args.ocean_params();
    let mode = params.synthesis;

    println!("Swellfield - procedural ocean surface synthesizer");
    println!(
        "mode={:?} samples={} tile={}m tiling={}x{}\n",
        mode, params.samples, args.dimensions, args.tiling, args.tiling
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut sim = match WaveSimulation::new(params, &mut rng) {
        Ok(sim) => sim,
        Err(message) => {
            eprintln!("Configuration error: {}", message);
            std::process::exit(1);
        }
    };

    // The statistical modes synthesize from the spectrum; Gerstner needs
    // authored waves to show anything
    if mode == SynthesisMode::Gerstner {
        sim.add_wave(Vec2::new(1.0, 0.3), 24.0, 0.8, 0.0);
        sim.add_wave(Vec2::new(0.6, -1.0), 9.0, 0.25, 1.3);
    }

    for frame in 0..args.frames {
        sim.simulate(args.dt);

        if frame % 30 == 0 || frame + 1 == args.frames {
            let batch = sim.draw_batch();
            let mut min_height = f32::INFINITY;
            let mut max_height = f32::NEG_INFINITY;
            for vertex in batch.vertices {
                min_height = min_height.min(vertex.position[2]);
                max_height = max_height.max(vertex.position[2]);
            }
            println!(
                "frame {:4}  t={:6.2}s  height [{:+.3}, {:+.3}] m",
                frame,
                sim.clock().elapsed_s(),
                min_height,
                max_height
            );
        }
    }

    // Orientation sample a floating object at the origin would receive
    let lift = sim.transform_by_average_water(Footprint {
        min: Vec2::splat(-1.0),
        max: Vec2::splat(1.0),
    });
    println!(
        "\nsurface at origin: z={:+.3}m normal=({:+.2}, {:+.2}, {:+.2})",
        lift.w_axis.z, lift.z_axis.x, lift.z_axis.y, lift.z_axis.z
    );
}
