/// Raycraft - chunked voxel sandbox with a software raycasting renderer
/// World, physics and rendering all resolve against the same sparse chunk
/// store; the renderer is per-ray DDA-style marching, not polygons
pub mod entity;
pub mod input;
pub mod inventory;
pub mod perf;
pub mod physics;
pub mod player;
pub mod raycast;
pub mod rendering;
pub mod session;
pub mod terrain;
pub mod voxel;
pub mod world;

pub use entity::{TntEntity, BLAST_RADIUS, TNT_FUSE_TICKS};
pub use input::InputIntents;
pub use inventory::{Inventory, Slot, HOTBAR_SLOTS, INVENTORY_SLOTS, MAX_STACK};
pub use player::{GameMode, Player};
pub use raycast::{cast_ray, look_vector, Face, RayHit, PICK_DISTANCE};
pub use rendering::{Framebuffer, RenderConfig, Renderer, ShadingConfig};
pub use session::{GameSession, SessionState, TICKS_PER_SECOND};
pub use terrain::TerrainGenerator;
pub use voxel::{Chunk, Voxel, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, CHUNK_VOLUME};
pub use world::World;
