/// TNT entity simulation
/// An entity is armed at ignition and detonates when its fuse expires - a
/// terminal transition, the entity is removed in the same tick. Chain
/// ignition during a detonation goes through an explicit queue instead of
/// re-entrant recursion, so dense tnt clusters cannot exhaust the stack.
use crate::physics::{GRAVITY, TERMINAL_VELOCITY};
use crate::voxel::Voxel;
use crate::world::World;
use glam::{IVec3, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Ticks from ignition to detonation
pub const TNT_FUSE_TICKS: u32 = 80;
/// Euclidean destruction radius around the detonation centre
pub const BLAST_RADIUS: f32 = 4.0;
/// Horizontal velocity retained per tick while resting on a surface
pub const REST_FRICTION: f32 = 0.8;

#[derive(Copy, Clone, Debug)]
pub struct TntEntity {
    /// Centre of the one-voxel cube
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining ticks until detonation; always > 0 while armed
    pub fuse: u32,
}

impl TntEntity {
    pub fn armed(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            fuse: TNT_FUSE_TICKS,
        }
    }

    /// Remaining fuse in whole seconds at the display tick rate, for the
    /// billboard digit overlay
    #[inline]
    pub fn fuse_seconds(&self) -> u32 {
        self.fuse.div_ceil(crate::session::TICKS_PER_SECOND)
    }
}

/// Ignite the tnt voxel at `cell`, if there is one: the voxel becomes air
/// and an armed entity takes its place. Igniting anything else is a no-op,
/// which makes chain ignition idempotent.
pub fn ignite(world: &mut World, cell: IVec3, entities: &mut Vec<TntEntity>) {
    if world.get_voxel(cell) != Voxel::Tnt {
        return;
    }
    world.set_voxel(cell, Voxel::Air);
    entities.push(TntEntity::armed(cell.as_vec3() + Vec3::splat(0.5)));
    log::debug!("tnt ignited at {:?}", cell);
}

/// Advance every entity by one tick. Returns the number of detonations.
pub fn step_entities(world: &mut World, entities: &mut Vec<TntEntity>, rng: &mut ChaCha8Rng) -> u32 {
    let mut detonation_points = Vec::new();

    entities.retain_mut(|entity| {
        entity.fuse -= 1;
        if entity.fuse == 0 {
            detonation_points.push(entity.position);
            return false;
        }
        integrate(world, entity);
        true
    });

    for point in &detonation_points {
        detonate(world, *point, entities, rng);
    }
    detonation_points.len() as u32
}

/// Ballistic integration with a rest snap onto the voxel below. Fall speed
/// is capped at the same terminal velocity as the player; an uncapped long
/// fall could cross more than a full voxel in one tick and carry the entity
/// past the one-below rest check.
fn integrate(world: &mut World, entity: &mut TntEntity) {
    entity.velocity.y = (entity.velocity.y - GRAVITY).max(-TERMINAL_VELOCITY);
    entity.position += entity.velocity;

    let below = IVec3::new(
        entity.position.x.floor() as i32,
        (entity.position.y - 1.0).floor() as i32,
        entity.position.z.floor() as i32,
    );
    if entity.velocity.y <= 0.0 && world.get_voxel(below).is_solid() {
        entity.position.y = below.y as f32 + 1.5;
        entity.velocity.y = 0.0;
        entity.velocity.x *= REST_FRICTION;
        entity.velocity.z *= REST_FRICTION;
    }
}

/// Radius sweep: tnt voxels chain-ignite through a breadth-first queue,
/// everything else is destroyed with probability falling off linearly with
/// distance (certain at the core, 50% at the rim)
fn detonate(world: &mut World, centre: Vec3, entities: &mut Vec<TntEntity>, rng: &mut ChaCha8Rng) {
    log::debug!("tnt detonated at {:?}", centre);

    let mut pending_ignitions: VecDeque<IVec3> = VecDeque::new();
    let min = (centre - Vec3::splat(BLAST_RADIUS)).floor().as_ivec3();
    let max = (centre + Vec3::splat(BLAST_RADIUS)).ceil().as_ivec3();

    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                let cell = IVec3::new(x, y, z);
                let cell_centre = cell.as_vec3() + Vec3::splat(0.5);
                let distance = cell_centre.distance(centre);
                if distance > BLAST_RADIUS {
                    continue;
                }
                match world.get_voxel(cell) {
                    Voxel::Air => {}
                    Voxel::Tnt => pending_ignitions.push_back(cell),
                    _ => {
                        let normalized = distance / BLAST_RADIUS;
                        if rng.gen::<f32>() < 1.0 - 0.5 * normalized {
                            world.set_voxel(cell, Voxel::Air);
                        }
                    }
                }
            }
        }
    }

    while let Some(cell) = pending_ignitions.pop_front() {
        ignite(world, cell, entities);
    }
}
