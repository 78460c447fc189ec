/// Tests for the sparse chunk store: lazy generation, coordinate wrapping
/// and the total get/set contract.
use glam::{IVec2, IVec3};
use raycraft::{Voxel, World, CHUNK_SIZE_Y};

#[test]
fn set_then_get_round_trips_in_range() {
    let mut world = World::new(42);
    for &pos in &[
        IVec3::new(0, 0, 0),
        IVec3::new(15, 63, 15),
        IVec3::new(-1, 10, -1),
        IVec3::new(123, 40, -456),
    ] {
        world.set_voxel(pos, Voxel::Brick);
        assert_eq!(world.get_voxel(pos), Voxel::Brick, "round trip failed at {:?}", pos);
    }
}

#[test]
fn chunks_materialize_lazily_and_only_once() {
    let mut world = World::new(42);
    assert_eq!(world.chunk_count(), 0, "fresh world holds no chunks");

    world.get_voxel(IVec3::new(3, 30, 3));
    assert_eq!(world.chunk_count(), 1);
    assert!(world.contains_chunk(IVec2::new(0, 0)));

    // Repeated access in the same chunk does not grow the store
    world.get_voxel(IVec3::new(12, 50, 9));
    world.set_voxel(IVec3::new(1, 1, 1), Voxel::Glass);
    assert_eq!(world.chunk_count(), 1);
}

#[test]
fn negative_coordinates_map_into_negative_chunks() {
    let mut world = World::new(42);
    world.set_voxel(IVec3::new(-1, 30, -1), Voxel::Cobblestone);
    assert!(world.contains_chunk(IVec2::new(-1, -1)));
    assert!(!world.contains_chunk(IVec2::new(0, 0)), "x = -1 belongs to chunk -1, not 0");
    assert_eq!(world.get_voxel(IVec3::new(-1, 30, -1)), Voxel::Cobblestone);
}

#[test]
fn vertical_out_of_range_reads_air_without_materializing() {
    let mut world = World::new(42);
    assert_eq!(world.get_voxel(IVec3::new(5, -1, 5)), Voxel::Air);
    assert_eq!(world.get_voxel(IVec3::new(5, CHUNK_SIZE_Y, 5)), Voxel::Air);
    assert_eq!(world.get_voxel(IVec3::new(5, 1000, 5)), Voxel::Air);
    assert_eq!(world.chunk_count(), 0, "out-of-range reads must not touch the chunk map");

    // Out-of-range writes are dropped the same way
    world.set_voxel(IVec3::new(5, -1, 5), Voxel::Stone);
    world.set_voxel(IVec3::new(5, CHUNK_SIZE_Y, 5), Voxel::Stone);
    assert_eq!(world.chunk_count(), 0);
}

#[test]
fn same_seed_generates_identical_terrain() {
    let mut a = World::new(7);
    let mut b = World::new(7);
    for x in -20..20 {
        for y in (0..CHUNK_SIZE_Y).step_by(4) {
            let pos = IVec3::new(x, y, -x * 3);
            assert_eq!(a.get_voxel(pos), b.get_voxel(pos), "worlds diverge at {:?}", pos);
        }
    }
}

#[test]
fn clear_drops_chunks_but_regenerates_identically() {
    let mut world = World::new(9);
    let probe = IVec3::new(4, 33, 4);
    let original = world.get_voxel(probe);
    world.set_voxel(probe, Voxel::Tnt);

    world.clear();
    assert_eq!(world.chunk_count(), 0);
    assert_eq!(world.get_voxel(probe), original, "edits must not survive a clear");
}
