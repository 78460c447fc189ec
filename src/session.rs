/// Game session controller
/// Owns the world, player, inventory, entity list and the session RNG for a
/// single play session; everything is dropped or rebuilt on reset, there is
/// no process-wide state. One fixed-step tick runs input resolution, player
/// physics and entity simulation in strict sequence; the host presents the
/// raster afterwards and must stop ticking when the session leaves Playing.
use crate::entity::{self, TntEntity};
use crate::input::InputIntents;
use crate::inventory::Inventory;
use crate::perf::TickStats;
use crate::physics;
use crate::player::{GameMode, Player, EYE_HEIGHT};
use crate::raycast::{cast_ray, Face, RayHit, PICK_DISTANCE};
use crate::voxel::{Voxel, CHUNK_SIZE_Y};
use crate::world::World;
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Display refresh ticks per second; fuses are shown in these units
pub const TICKS_PER_SECOND: u32 = 60;

/// Spawn column, centred in chunk (0, 0)
const SPAWN_X: i32 = 8;
const SPAWN_Z: i32 = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Paused,
    InventoryOpen,
}

pub struct GameSession {
    pub world: World,
    pub player: Player,
    pub inventory: Inventory,
    pub entities: Vec<TntEntity>,
    state: SessionState,
    seed: u64,
    rng: ChaCha8Rng,
    tick: u64,
    pub last_stats: TickStats,
}

impl GameSession {
    pub fn new(seed: u64, mode: GameMode) -> Self {
        let mut world = World::new(seed);
        let player = Player::new(spawn_position(&mut world), mode);
        log::info!("session started (seed {}, {:?})", seed, mode);
        Self {
            world,
            player,
            inventory: Inventory::default(),
            entities: Vec::new(),
            state: SessionState::Playing,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed ^ 0xDEAD_BEEF),
            tick: 0,
            last_stats: TickStats::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Discard all world and entity state and respawn; terrain regenerates
    /// identically because the seed survives
    pub fn reset(&mut self) {
        log::info!("session reset");
        self.world.clear();
        self.entities.clear();
        self.inventory = Inventory::default();
        let mode = self.player.mode;
        self.player = Player::new(spawn_position(&mut self.world), mode);
        self.rng = ChaCha8Rng::seed_from_u64(self.seed ^ 0xDEAD_BEEF);
        self.state = SessionState::Playing;
        self.tick = 0;
    }

    /// Advance one fixed step. State toggles are honoured in any state; a
    /// tick that carries a transition never simulates, in either direction,
    /// and simulation otherwise only runs while Playing.
    pub fn tick(&mut self, intents: &InputIntents) {
        let transitioned = self.apply_state_toggles(intents);
        if transitioned || self.state != SessionState::Playing {
            return;
        }
        self.tick += 1;

        let input_start = Instant::now();
        self.player.rotate(intents.look_yaw, intents.look_pitch);
        if let Some(slot) = intents.slot_select {
            self.inventory.select(slot);
        }
        self.last_stats.input_us = input_start.elapsed().as_secs_f64() * 1e6;

        let physics_start = Instant::now();
        physics::step_player(&mut self.world, &mut self.player, intents);
        self.last_stats.physics_us = physics_start.elapsed().as_secs_f64() * 1e6;

        if intents.primary {
            self.primary_action();
        }
        if intents.secondary {
            self.secondary_action();
        }

        let entities_start = Instant::now();
        entity::step_entities(&mut self.world, &mut self.entities, &mut self.rng);
        self.last_stats.entities_us = entities_start.elapsed().as_secs_f64() * 1e6;

        debug_assert!(self.inventory.invariant_holds());
    }

    /// Break/ignite: tnt targets ignite instead of being mined, everything
    /// else is removed and credited to the inventory
    pub fn primary_action(&mut self) {
        let Some(hit) = self.pick_target() else {
            return;
        };
        if hit.voxel == Voxel::Tnt {
            entity::ignite(&mut self.world, hit.position, &mut self.entities);
            return;
        }
        self.world.set_voxel(hit.position, Voxel::Air);
        if !self.inventory.add(hit.voxel) {
            log::debug!("inventory full, {:?} lost", hit.voxel);
        }
    }

    /// Place the selected voxel kind against the targeted face
    pub fn secondary_action(&mut self) {
        let Some(hit) = self.pick_target() else {
            return;
        };
        if hit.face == Face::Inside {
            return;
        }
        let target = hit.position + hit.face.offset();
        if target.y < 0 || target.y >= CHUNK_SIZE_Y {
            return;
        }
        if self.world.get_voxel(target).is_solid() {
            return;
        }
        if self.inventory.selected_slot().is_empty() {
            return;
        }
        if let Some(kind) = self.inventory.consume_selected() {
            self.world.set_voxel(target, kind);
        }
    }

    /// Pick ray for break/place and for the UI's block-info overlay
    pub fn pick_target(&mut self) -> Option<RayHit> {
        let dir = self.player.look_dir();
        cast_ray(&mut self.world, self.player.position, dir, PICK_DISTANCE)
    }

    /// Returns true when the session changed state this tick
    fn apply_state_toggles(&mut self, intents: &InputIntents) -> bool {
        let before = self.state;
        if intents.toggle_pause {
            self.state = match self.state {
                SessionState::Paused => SessionState::Playing,
                _ => SessionState::Paused,
            };
            log::info!("session state: {:?}", self.state);
        }
        if intents.toggle_inventory {
            self.state = match self.state {
                SessionState::InventoryOpen => SessionState::Playing,
                SessionState::Playing => SessionState::InventoryOpen,
                SessionState::Paused => SessionState::Paused,
            };
        }
        self.state != before
    }
}

/// Eye position standing on the spawn column's surface
fn spawn_position(world: &mut World) -> Vec3 {
    let surface = world.surface_y(SPAWN_X, SPAWN_Z);
    Vec3::new(
        SPAWN_X as f32 + 0.5,
        (surface + 1) as f32 + EYE_HEIGHT,
        SPAWN_Z as f32 + 0.5,
    )
}
