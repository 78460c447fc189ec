/// Sparse chunk store with lazy on-demand generation
/// Chunks exist iff a world-coordinate access has floored into them; they
/// are never removed for the lifetime of a session (the resident set only
/// grows). Reads outside the vertical range degrade to air without ever
/// materializing a chunk.
use crate::terrain::TerrainGenerator;
use crate::voxel::{Chunk, Voxel, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z};
use glam::{IVec2, IVec3};
use std::collections::HashMap;

pub struct World {
    /// All touched chunks, keyed by chunk coordinate (horizontal only -
    /// the world is a single vertical column of height 64)
    chunks: HashMap<IVec2, Chunk>,
    generator: TerrainGenerator,
}

/// Chunk coordinate for a world position (floor division, so negative
/// coordinates map to negative chunk indices)
#[inline]
pub fn chunk_coord(pos: IVec3) -> IVec2 {
    IVec2::new(pos.x.div_euclid(CHUNK_SIZE_X), pos.z.div_euclid(CHUNK_SIZE_Z))
}

/// Local coordinates inside a chunk (floored modulo, always non-negative)
#[inline]
pub fn local_coords(pos: IVec3) -> (usize, usize, usize) {
    (
        pos.x.rem_euclid(CHUNK_SIZE_X) as usize,
        pos.y as usize,
        pos.z.rem_euclid(CHUNK_SIZE_Z) as usize,
    )
}

impl World {
    pub fn new(seed: u64) -> Self {
        Self {
            chunks: HashMap::new(),
            generator: TerrainGenerator::new(seed),
        }
    }

    /// Total over all integer coordinates: out-of-range y reads as air
    /// without touching the chunk map
    #[inline]
    pub fn get_voxel(&mut self, pos: IVec3) -> Voxel {
        if pos.y < 0 || pos.y >= CHUNK_SIZE_Y {
            return Voxel::Air;
        }
        let coord = chunk_coord(pos);
        let (lx, ly, lz) = local_coords(pos);
        self.chunk_at(coord).get(lx, ly, lz)
    }

    /// Total over all integer coordinates: out-of-range y writes are dropped
    #[inline]
    pub fn set_voxel(&mut self, pos: IVec3, voxel: Voxel) {
        if pos.y < 0 || pos.y >= CHUNK_SIZE_Y {
            return;
        }
        let coord = chunk_coord(pos);
        let (lx, ly, lz) = local_coords(pos);
        self.ensure_chunk(coord);
        self.chunks
            .get_mut(&coord)
            .expect("chunk just ensured")
            .set(lx, ly, lz, voxel);
    }

    /// Surface probe used for spawning: topmost solid cell of a column,
    /// or 0 when the column is somehow empty
    pub fn surface_y(&mut self, x: i32, z: i32) -> i32 {
        for y in (0..CHUNK_SIZE_Y).rev() {
            if self.get_voxel(IVec3::new(x, y, z)).is_solid() {
                return y;
            }
        }
        0
    }

    pub fn contains_chunk(&self, coord: IVec2) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Drop all resident chunks (session reset); the generator and its seed
    /// survive, so regenerated terrain is identical
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    #[inline]
    fn chunk_at(&mut self, coord: IVec2) -> &Chunk {
        self.ensure_chunk(coord);
        self.chunks.get(&coord).expect("chunk just ensured")
    }

    fn ensure_chunk(&mut self, coord: IVec2) {
        if !self.chunks.contains_key(&coord) {
            log::debug!("generating chunk at ({}, {})", coord.x, coord.y);
            let chunk = self.generator.generate(coord.x, coord.y);
            self.chunks.insert(coord, chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_coord_floors_negative_positions() {
        assert_eq!(chunk_coord(IVec3::new(-1, 0, -1)), IVec2::new(-1, -1));
        assert_eq!(chunk_coord(IVec3::new(-16, 0, 15)), IVec2::new(-1, 0));
        assert_eq!(chunk_coord(IVec3::new(0, 0, 0)), IVec2::new(0, 0));
    }

    #[test]
    fn local_coords_are_always_in_range() {
        for x in -40..40 {
            let (lx, _, lz) = local_coords(IVec3::new(x, 0, x));
            assert!(lx < CHUNK_SIZE_X as usize && lz < CHUNK_SIZE_Z as usize);
        }
        let (lx, _, _) = local_coords(IVec3::new(-1, 0, 0));
        assert_eq!(lx, 15, "x = -1 must map to local index 15");
    }
}
