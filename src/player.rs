/// Player state - position is the eye point, orientation is yaw/pitch
use glam::Vec3;

/// Eye sits this far below the top of the collision box
pub const HEAD_CLEARANCE: f32 = 0.3;
/// Eye sits this far above the feet
pub const EYE_HEIGHT: f32 = 1.8;
/// Horizontal half-extent of the collision box
pub const HALF_WIDTH: f32 = 0.3;

const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    Survival,
    Creative,
}

pub struct Player {
    /// Eye position in world space
    pub position: Vec3,
    /// Vertical velocity, survival mode only
    pub vel_y: f32,
    /// Rotation around Y axis (radians, measured from +X towards +Z)
    pub yaw: f32,
    /// Rotation above/below the horizon (radians)
    pub pitch: f32,
    pub grounded: bool,
    pub mode: GameMode,
}

impl Player {
    pub fn new(position: Vec3, mode: GameMode) -> Self {
        Self {
            position,
            vel_y: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            grounded: false,
            mode,
        }
    }

    /// Apply a look delta, clamping pitch short of straight up/down
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Unit view direction from yaw/pitch (spherical to Cartesian)
    #[inline]
    pub fn look_dir(&self) -> Vec3 {
        crate::raycast::look_vector(self.yaw, self.pitch)
    }

    /// Horizontal forward direction, ignoring pitch
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Horizontal right direction
    #[inline]
    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos())
    }
}
