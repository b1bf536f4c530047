//! Visual tile replication and world-space bounds.
//!
//! One simulated tile is drawn T x T times for coverage; all instances
//! share the same vertex buffer and differ only by placement offset. The
//! per-tile AABBs back the floating-object containment queries.

use glam::{Vec2, Vec3};

/// World-space XY bounds of one replicated tile instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl TileBounds {
    /// Inclusive point containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Replicates the simulated tile across a T x T layout centered on the
/// simulation origin
pub struct TileManager {
    tiling: usize,
    tile_dimensions: Vec2,
    origin: Vec3,
    bounds: Vec<TileBounds>,
    offsets: Vec<Vec3>,
}

impl TileManager {
    pub fn new(tiling: usize, tile_dimensions: Vec2, origin: Vec3) -> Self {
        let mut manager = Self {
            tiling: tiling.max(1),
            tile_dimensions,
            origin,
            bounds: Vec::new(),
            offsets: Vec::new(),
        };
        manager.rebuild();
        manager
    }

    /// Change the T x T layout and rebuild bounds
    pub fn set_tiling_dimensions(&mut self, tiling: usize) {
        self.tiling = tiling.max(1);
        self.rebuild();
    }

    /// Move the whole layout to a new world origin
    pub fn set_position(&mut self, origin: Vec3) {
        self.origin = origin;
        self.rebuild();
    }

    pub fn tiling(&self) -> usize {
        self.tiling
    }

    /// Per-tile world AABBs, row-major
    pub fn bounds(&self) -> &[TileBounds] {
        &self.bounds
    }

    /// Per-tile world placement offsets for the renderer
    pub fn offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    fn rebuild(&mut self) {
        let t = self.tiling;
        let dims = self.tile_dimensions;
        let half = dims * 0.5;
        let centering = (t as f32 - 1.0) * 0.5;

        self.bounds.clear();
        self.offsets.clear();
        for row in 0..t {
            for col in 0..t {
                let offset = Vec2::new(
                    (col as f32 - centering) * dims.x,
                    (row as f32 - centering) * dims.y,
                );
                let center = Vec2::new(self.origin.x, self.origin.y) + offset;
                self.bounds.push(TileBounds {
                    min: center - half,
                    max: center + half,
                });
                self.offsets
                    .push(Vec3::new(center.x, center.y, self.origin.z));
            }
        }
    }
}
