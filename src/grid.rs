//! Surface tile mesh: fixed topology, per-tick vertex mutation.
//!
//! The lattice is built once; every `synthesize` call rewrites the
//! current positions in place and re-derives the tangent frames from the
//! displaced surface. Rest positions and UVs never change.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::synthesis::{SampleContext, SurfaceSynthesizer};

/// Vertex data for the water mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SurfaceVertex {
    /// Undisplaced lattice position (x, y, 0)
    pub rest_position: [f32; 3],
    /// Displaced position (x + dx, y + dy, height)
    pub position: [f32; 3],
    pub tangent: [f32; 3],
    pub bitangent: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// One simulated tile: (N+1)^2 vertices over [-dim/2, dim/2]^2
pub struct SurfaceGrid {
    pub vertices: Vec<SurfaceVertex>,
    pub indices: Vec<u32>,
    samples: usize,
    dimensions: Vec2,
}

impl SurfaceGrid {
    /// Build the lattice and index topology for one tile
    pub fn new(samples: usize, dimensions: Vec2) -> Self {
        let side = samples + 1;
        let cell = dimensions / samples as f32;
        let half = dimensions * 0.5;

        let mut vertices = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                let x = col as f32 * cell.x - half.x;
                let y = row as f32 * cell.y - half.y;
                vertices.push(SurfaceVertex {
                    rest_position: [x, y, 0.0],
                    position: [x, y, 0.0],
                    tangent: [1.0, 0.0, 0.0],
                    bitangent: [0.0, 1.0, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    uv: [
                        col as f32 / samples as f32,
                        row as f32 / samples as f32,
                    ],
                });
            }
        }

        // Two triangles per quad: (bl, br, tr) and (bl, tr, tl)
        let mut indices = Vec::with_capacity(samples * samples * 6);
        for row in 0..samples {
            for col in 0..samples {
                let bottom_left = (row * side + col) as u32;
                let bottom_right = bottom_left + 1;
                let top_left = ((row + 1) * side + col) as u32;
                let top_right = top_left + 1;

                indices.extend_from_slice(&[
                    bottom_left,
                    bottom_right,
                    top_right,
                    bottom_left,
                    top_right,
                    top_left,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            samples,
            dimensions,
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn dimensions(&self) -> Vec2 {
        self.dimensions
    }

    /// World-space size of one grid cell
    pub fn cell_size(&self) -> Vec2 {
        self.dimensions / self.samples as f32
    }

    /// Vertex lookup with indices wrapped modulo N+1 (seam continuity)
    pub fn vertex_at(&self, row: usize, col: usize) -> &SurfaceVertex {
        let side = self.samples + 1;
        &self.vertices[(row % side) * side + (col % side)]
    }

    /// Rewrite every vertex through the active strategy, then refresh the
    /// tangent frames from the displaced lattice
    pub fn synthesize(
        &mut self,
        synthesizer: &dyn SurfaceSynthesizer,
        ctx: &SampleContext,
        choppiness: f32,
    ) {
        for vertex in &mut self.vertices {
            let rest = Vec2::new(vertex.rest_position[0], vertex.rest_position[1]);
            let sample = synthesizer.evaluate(ctx, rest);
            vertex.position = [
                rest.x + choppiness * sample.displacement.x,
                rest.y + choppiness * sample.displacement.y,
                sample.height,
            ];
        }
        self.refresh_tangent_frames();
    }

    /// Central-difference tangent/bitangent/normal over the periodic lattice
    fn refresh_tangent_frames(&mut self) {
        let n = self.samples;
        let side = n + 1;
        let cell = self.cell_size();

        // Displacements are periodic over the tile; snapshot the unique
        // N x N samples so wrapped neighbors read consistent values
        let mut disp = vec![Vec3::ZERO; n * n];
        for row in 0..n {
            for col in 0..n {
                let v = &self.vertices[row * side + col];
                disp[row * n + col] = Vec3::new(
                    v.position[0] - v.rest_position[0],
                    v.position[1] - v.rest_position[1],
                    v.position[2],
                );
            }
        }

        for row in 0..side {
            for col in 0..side {
                let left = (col + n - 1) % n;
                let right = (col + 1) % n;
                let down = (row + n - 1) % n;
                let up = (row + 1) % n;
                let r = row % n;
                let c = col % n;

                let dx = disp[r * n + right] - disp[r * n + left];
                let dy = disp[up * n + c] - disp[down * n + c];

                let tangent = Vec3::new(2.0 * cell.x + dx.x, dx.y, dx.z)
                    .try_normalize()
                    .unwrap_or(Vec3::X);
                let bitangent = Vec3::new(dy.x, 2.0 * cell.y + dy.y, dy.z)
                    .try_normalize()
                    .unwrap_or(Vec3::Y);
                let normal = tangent
                    .cross(bitangent)
                    .try_normalize()
                    .unwrap_or(Vec3::Z);

                let vertex = &mut self.vertices[row * side + col];
                vertex.tangent = tangent.to_array();
                vertex.bitangent = bitangent.to_array();
                vertex.normal = normal.to_array();
            }
        }
    }
}
