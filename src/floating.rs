//! Averaged surface-orientation sampling for floating objects.
//!
//! Visual alignment only, not a buoyancy solve: the covered patch of the
//! water surface is averaged into one orientation/translation matrix that
//! gameplay code applies to a floating object each tick.

use glam::{Mat4, Vec2, Vec3};

use crate::grid::SurfaceGrid;
use crate::tiles::TileManager;

/// Axis-aligned XY footprint of a floating object, world space
#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    pub min: Vec2,
    pub max: Vec2,
}

/// Average the water surface under a footprint into a single transform
///
/// The containing tile is found by testing the footprint's min corner
/// against the tile bounds (first match wins). No containing tile yields
/// the identity transform — never a null sentinel. Covered vertex cells
/// are averaged with indices wrapped modulo N+1 for seam continuity.
pub fn transform_by_average_water(
    grid: &SurfaceGrid,
    tiles: &TileManager,
    footprint: Footprint,
) -> Mat4 {
    let Some(tile) = tiles.bounds().iter().find(|b| b.contains(footprint.min)) else {
        return Mat4::IDENTITY;
    };

    let cell = grid.cell_size();
    let local = footprint.min - tile.min;
    let start_col = (local.x / cell.x).round().max(0.0) as usize;
    let start_row = (local.y / cell.y).round().max(0.0) as usize;
    let cols = ((footprint.max.x - footprint.min.x) / cell.x).round().max(0.0) as usize;
    let rows = ((footprint.max.y - footprint.min.y) / cell.y).round().max(0.0) as usize;

    let mut height = 0.0f32;
    let mut tangent = Vec3::ZERO;
    let mut bitangent = Vec3::ZERO;
    let mut normal = Vec3::ZERO;
    let mut count = 0.0f32;

    for row in start_row..=start_row + rows {
        for col in start_col..=start_col + cols {
            let vertex = grid.vertex_at(row, col);
            height += vertex.position[2];
            tangent += Vec3::from_array(vertex.tangent);
            bitangent += Vec3::from_array(vertex.bitangent);
            normal += Vec3::from_array(vertex.normal);
            count += 1.0;
        }
    }

    height /= count;
    let tangent = tangent.try_normalize().unwrap_or(Vec3::X);
    let bitangent = bitangent.try_normalize().unwrap_or(Vec3::Y);
    let normal = normal.try_normalize().unwrap_or(Vec3::Z);

    let center = (footprint.min + footprint.max) * 0.5;
    Mat4::from_cols(
        tangent.extend(0.0),
        bitangent.extend(0.0),
        normal.extend(0.0),
        Vec3::new(center.x, center.y, height).extend(1.0),
    )
}
