/// Chunk data structure optimized for cache locality
/// A chunk is a dense 16x64x16 column segment of the world, stored as a
/// flat array with computed stride addressing
use super::Voxel;

pub const CHUNK_SIZE_X: i32 = 16;
pub const CHUNK_SIZE_Y: i32 = 64;
pub const CHUNK_SIZE_Z: i32 = 16;
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE_X * CHUNK_SIZE_Y * CHUNK_SIZE_Z) as usize;

/// Stride layout: x varies fastest, then z, then y.
/// Keeps a full horizontal plane contiguous for column-fill generation.
#[inline]
pub const fn coords_to_index(x: usize, y: usize, z: usize) -> usize {
    x + z * CHUNK_SIZE_X as usize + y * (CHUNK_SIZE_X * CHUNK_SIZE_Z) as usize
}

/// Inverse of `coords_to_index`
#[inline]
pub const fn index_to_coords(index: usize) -> (usize, usize, usize) {
    let plane = (CHUNK_SIZE_X * CHUNK_SIZE_Z) as usize;
    let y = index / plane;
    let remainder = index % plane;
    let z = remainder / CHUNK_SIZE_X as usize;
    let x = remainder % CHUNK_SIZE_X as usize;
    (x, y, z)
}

pub struct Chunk {
    /// Boxed to keep Chunk small on the stack and cheap to move into the map
    voxels: Box<[Voxel; CHUNK_VOLUME]>,
}

impl Chunk {
    /// Create a chunk with every cell set to air
    pub fn empty() -> Self {
        Self {
            voxels: Box::new([Voxel::Air; CHUNK_VOLUME]),
        }
    }

    /// Get voxel at local coordinates (0..16, 0..64, 0..16)
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        debug_assert!(
            x < CHUNK_SIZE_X as usize && y < CHUNK_SIZE_Y as usize && z < CHUNK_SIZE_Z as usize
        );
        self.voxels[coords_to_index(x, y, z)]
    }

    /// Set voxel at local coordinates (0..16, 0..64, 0..16)
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, voxel: Voxel) {
        debug_assert!(
            x < CHUNK_SIZE_X as usize && y < CHUNK_SIZE_Y as usize && z < CHUNK_SIZE_Z as usize
        );
        self.voxels[coords_to_index(x, y, z)] = voxel;
    }

    /// Number of non-air cells (test/debug helper, not a hot path)
    pub fn occupied_count(&self) -> usize {
        self.voxels.iter().filter(|v| !v.is_air()).count()
    }
}
