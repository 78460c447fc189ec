/// Core voxel data structures optimized for cache locality and performance
pub mod chunk;

pub use chunk::{Chunk, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, CHUNK_VOLUME};

/// Block kind enumeration
/// Using u8 representation for memory efficiency
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Voxel {
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Wood = 4,
    Planks = 5,
    Leaves = 6,
    Water = 7,
    Sand = 8,
    Cobblestone = 9,
    Glass = 10,
    Brick = 11,
    Tnt = 12,
}

pub const VOXEL_KIND_COUNT: usize = 13;

// Lookup tables for voxel properties - eliminates branches in hot paths.
// Air and Water are the only non-solid kinds: they neither block movement
// nor stop a marching ray.
const VOXEL_IS_SOLID_LUT: [bool; VOXEL_KIND_COUNT] = [
    false, // Air
    true,  // Grass
    true,  // Dirt
    true,  // Stone
    true,  // Wood
    true,  // Planks
    true,  // Leaves
    false, // Water
    true,  // Sand
    true,  // Cobblestone
    true,  // Glass
    true,  // Brick
    true,  // Tnt
];

const VOXEL_COLORS_LUT: [[u8; 3]; VOXEL_KIND_COUNT] = [
    [0, 0, 0],       // Air
    [106, 170, 64],  // Grass
    [134, 96, 67],   // Dirt
    [128, 128, 128], // Stone
    [103, 82, 49],   // Wood
    [157, 128, 79],  // Planks
    [60, 120, 35],   // Leaves
    [52, 108, 202],  // Water
    [218, 210, 158], // Sand
    [110, 110, 110], // Cobblestone
    [200, 220, 230], // Glass
    [150, 80, 70],   // Brick
    [200, 60, 40],   // Tnt
];

impl Voxel {
    pub const ALL: [Voxel; VOXEL_KIND_COUNT] = [
        Voxel::Air,
        Voxel::Grass,
        Voxel::Dirt,
        Voxel::Stone,
        Voxel::Wood,
        Voxel::Planks,
        Voxel::Leaves,
        Voxel::Water,
        Voxel::Sand,
        Voxel::Cobblestone,
        Voxel::Glass,
        Voxel::Brick,
        Voxel::Tnt,
    ];

    /// Fast lookup-table based solid check - no branches
    #[inline]
    pub const fn is_solid(self) -> bool {
        VOXEL_IS_SOLID_LUT[self as usize]
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, Voxel::Air)
    }

    /// Fast lookup-table based color retrieval - no branches
    #[inline]
    pub const fn base_color(self) -> [u8; 3] {
        VOXEL_COLORS_LUT[self as usize]
    }

    /// Convert from u8 to Voxel
    /// Returns Air for out-of-bounds values
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        if (value as usize) < VOXEL_KIND_COUNT {
            Self::ALL[value as usize]
        } else {
            Voxel::Air
        }
    }
}

impl Default for Voxel {
    fn default() -> Self {
        Voxel::Air
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_and_water_are_the_only_non_solid_kinds() {
        for kind in Voxel::ALL {
            let expected = !matches!(kind, Voxel::Air | Voxel::Water);
            assert_eq!(kind.is_solid(), expected, "solidity mismatch for {:?}", kind);
        }
    }

    #[test]
    fn from_u8_round_trips_and_saturates_to_air() {
        for kind in Voxel::ALL {
            assert_eq!(Voxel::from_u8(kind as u8), kind);
        }
        assert_eq!(Voxel::from_u8(200), Voxel::Air);
    }
}
