/// Procedural terrain generation
/// Heights and biomes are closed-form functions of world coordinates, so the
/// stone/dirt/top-layer assignment is fully deterministic. Tree placement and
/// biome-edge water pools draw from an explicit per-chunk seeded RNG, keeping
/// generation reproducible for a fixed world seed.
use crate::voxel::{Chunk, Voxel, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Base terrain height around which the sinusoidal field oscillates
pub const BASE_HEIGHT: f32 = 32.0;
/// Biome scalar above which a column gets a sand cap instead of grass
pub const SAND_THRESHOLD: f32 = 0.9;
/// Height band (inclusive) where sand columns carry a two-deep water pool
pub const WATER_BAND: (i32, i32) = (28, 30);
/// Trunk height of generated trees
pub const TREE_TRUNK_HEIGHT: i32 = 4;
/// One tree attempt succeeds per this many eligible columns on average
pub const TREE_CHANCE_DENOM: u32 = 48;

pub struct TerrainGenerator {
    seed: u64,
}

impl TerrainGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Surface height for a world column, clamped inside the buildable range
    #[inline]
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        let xf = x as f32;
        let zf = z as f32;
        let h = BASE_HEIGHT
            + 6.0 * (xf * 0.17).sin()
            + 6.0 * (zf * 0.13).cos()
            + 3.0 * ((xf + zf) * 0.07).sin();
        (h.floor() as i32).clamp(1, CHUNK_SIZE_Y - 4)
    }

    /// Biome scalar for a world column; a different sinusoidal combination
    /// than the height field so coastlines do not track terrain ridges
    #[inline]
    pub fn biome(&self, x: i32, z: i32) -> f32 {
        (x as f32 * 0.023 + 57.0).sin() + (z as f32 * 0.019 - 13.0).cos()
    }

    #[inline]
    pub fn is_sand_biome(&self, x: i32, z: i32) -> bool {
        self.biome(x, z) > SAND_THRESHOLD
    }

    /// Generate a fully populated chunk at the given chunk coordinates
    pub fn generate(&self, chunk_x: i32, chunk_z: i32) -> Chunk {
        let mut chunk = Chunk::empty();
        let world_x0 = chunk_x * CHUNK_SIZE_X;
        let world_z0 = chunk_z * CHUNK_SIZE_Z;

        // Decoration RNG is re-seeded per chunk so a chunk generates the same
        // no matter when its neighbours were first touched
        let mut rng = ChaCha8Rng::seed_from_u64(self.chunk_seed(chunk_x, chunk_z));

        for local_z in 0..CHUNK_SIZE_Z {
            for local_x in 0..CHUNK_SIZE_X {
                let world_x = world_x0 + local_x;
                let world_z = world_z0 + local_z;
                let height = self.surface_height(world_x, world_z);
                let sand = self.is_sand_biome(world_x, world_z);

                self.fill_column(&mut chunk, local_x, local_z, height, sand);

                if sand {
                    if height >= WATER_BAND.0 && height <= WATER_BAND.1 {
                        self.place_water_pool(&mut chunk, local_x, local_z, height);
                    }
                } else if rng.gen_ratio(1, TREE_CHANCE_DENOM) {
                    self.place_tree(&mut chunk, local_x, local_z, height);
                }
            }
        }

        chunk
    }

    /// Column fill: stone base, four dirt layers, single surface cap
    fn fill_column(&self, chunk: &mut Chunk, local_x: i32, local_z: i32, height: i32, sand: bool) {
        let lx = local_x as usize;
        let lz = local_z as usize;
        for y in 0..=height {
            let voxel = if y == height {
                if sand {
                    Voxel::Sand
                } else {
                    Voxel::Grass
                }
            } else if y >= height - 4 {
                Voxel::Dirt
            } else {
                Voxel::Stone
            };
            chunk.set(lx, y as usize, lz, voxel);
        }
    }

    /// Two-voxel-tall pool at the surface of low-lying sand columns
    fn place_water_pool(&self, chunk: &mut Chunk, local_x: i32, local_z: i32, height: i32) {
        let lx = local_x as usize;
        let lz = local_z as usize;
        chunk.set(lx, height as usize, lz, Voxel::Water);
        if height + 1 < CHUNK_SIZE_Y {
            chunk.set(lx, (height + 1) as usize, lz, Voxel::Water);
        }
    }

    /// Trunk plus a diamond-footprint canopy around its top three layers.
    /// Canopy writes are clipped to this chunk's own extent; trees never
    /// reach into neighbouring chunks (known seam artifact).
    fn place_tree(&self, chunk: &mut Chunk, local_x: i32, local_z: i32, height: i32) {
        let trunk_top = height + TREE_TRUNK_HEIGHT;
        if trunk_top + 1 >= CHUNK_SIZE_Y {
            return;
        }

        for y in (height + 1)..=trunk_top {
            chunk.set(local_x as usize, y as usize, local_z as usize, Voxel::Wood);
        }

        for y in (trunk_top - 2)..=trunk_top {
            for dx in -2..=2i32 {
                for dz in -2..=2i32 {
                    if dx == 0 && dz == 0 {
                        continue;
                    }
                    if dx.abs() + dz.abs() > 2 {
                        continue;
                    }
                    let cx = local_x + dx;
                    let cz = local_z + dz;
                    if cx < 0 || cx >= CHUNK_SIZE_X || cz < 0 || cz >= CHUNK_SIZE_Z {
                        continue;
                    }
                    let (ux, uy, uz) = (cx as usize, y as usize, cz as usize);
                    if chunk.get(ux, uy, uz).is_air() {
                        chunk.set(ux, uy, uz, Voxel::Leaves);
                    }
                }
            }
        }
    }

    /// Per-chunk decoration seed: world seed mixed with both coordinates
    #[inline]
    fn chunk_seed(&self, chunk_x: i32, chunk_z: i32) -> u64 {
        self.seed
            .wrapping_add((chunk_x as i64 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .wrapping_add((chunk_z as i64 as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F))
    }
}
