/// Axis-swept collision against the voxel grid and per-tick player motion
///
/// The collision probe is 12 points: all combinations of the four box
/// corners (±HALF_WIDTH on x and z) at three vertical bands (head, waist,
/// feet). Each axis is tested independently at its proposed position, which
/// produces sliding along walls instead of sticking to them.
///
/// Resolution order is x, then z, then vertical - the vertical check runs
/// against the already-moved horizontal position. The order is pinned by a
/// test; a simultaneous swept-AABB resolve would behave differently at
/// convex corners.
use crate::input::InputIntents;
use crate::player::{GameMode, Player, EYE_HEIGHT, HALF_WIDTH, HEAD_CLEARANCE};
use crate::world::World;
use glam::Vec3;

/// Gravity per tick, shared with entity ballistics
pub const GRAVITY: f32 = 0.02;
/// Upward velocity applied when jumping off the ground
pub const JUMP_IMPULSE: f32 = 0.35;
/// Horizontal movement per tick at full intent
pub const MOVE_SPEED: f32 = 0.12;
/// Vertical movement per tick in creative mode
pub const FLY_SPEED: f32 = 0.12;
/// Cap on fall speed, shared with entity ballistics; anything below 1.0
/// guarantees a falling box cannot cross a full voxel in one tick and skip
/// its ground check
pub const TERMINAL_VELOCITY: f32 = 0.9;

/// Vertical band offsets relative to the eye: head, waist, feet
const PROBE_BANDS: [f32; 3] = [HEAD_CLEARANCE, HEAD_CLEARANCE - 1.1, -EYE_HEIGHT];
/// Horizontal corner offsets
const PROBE_CORNERS: [(f32, f32); 4] = [
    (-HALF_WIDTH, -HALF_WIDTH),
    (-HALF_WIDTH, HALF_WIDTH),
    (HALF_WIDTH, -HALF_WIDTH),
    (HALF_WIDTH, HALF_WIDTH),
];

/// True if any of the 12 probe points lands in a solid voxel
pub fn collides(world: &mut World, eye: Vec3) -> bool {
    for &dy in &PROBE_BANDS {
        for &(dx, dz) in &PROBE_CORNERS {
            let probe = Vec3::new(eye.x + dx, eye.y + dy, eye.z + dz);
            if world.get_voxel(probe.floor().as_ivec3()).is_solid() {
                return true;
            }
        }
    }
    false
}

/// Integrate one tick of player motion against the world
pub fn step_player(world: &mut World, player: &mut Player, intents: &InputIntents) {
    let wish = player.forward() * intents.move_forward + player.right() * intents.move_strafe;
    let step = wish * MOVE_SPEED;

    // Horizontal axes resolve independently: a rejected x move does not
    // block the z move (sliding collision)
    let proposed_x = Vec3::new(player.position.x + step.x, player.position.y, player.position.z);
    if !collides(world, proposed_x) {
        player.position.x = proposed_x.x;
    }
    let proposed_z = Vec3::new(player.position.x, player.position.y, player.position.z + step.z);
    if !collides(world, proposed_z) {
        player.position.z = proposed_z.z;
    }

    match player.mode {
        GameMode::Survival => step_vertical_survival(world, player, intents),
        GameMode::Creative => step_vertical_creative(player, intents),
    }
}

fn step_vertical_survival(world: &mut World, player: &mut Player, intents: &InputIntents) {
    player.vel_y = (player.vel_y - GRAVITY).max(-TERMINAL_VELOCITY);
    let proposed_y = player.position.y + player.vel_y;
    let proposed = Vec3::new(player.position.x, proposed_y, player.position.z);

    if !collides(world, proposed) {
        player.position.y = proposed_y;
        player.grounded = false;
        return;
    }

    if player.vel_y < 0.0 {
        // Falling: snap the feet onto the top of the blocking voxel
        let feet = proposed_y - EYE_HEIGHT;
        player.position.y = feet.floor() + 1.0 + EYE_HEIGHT;
        player.vel_y = 0.0;
        player.grounded = true;
        if intents.jump_held {
            player.vel_y = JUMP_IMPULSE;
            player.grounded = false;
        }
    } else {
        // Rising: stop at the ceiling, keep the pre-move height
        player.vel_y = 0.0;
    }
}

/// Creative flight: direct velocity-free translation with no vertical
/// collision, so holding "up" carries the player through ceilings
fn step_vertical_creative(player: &mut Player, intents: &InputIntents) {
    let mut dy = 0.0;
    if intents.jump_held {
        dy += FLY_SPEED;
    }
    if intents.down_held {
        dy -= FLY_SPEED;
    }
    player.position.y += dy;
    player.vel_y = 0.0;
    player.grounded = false;
}
