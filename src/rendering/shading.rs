/// Shading for ray hits - distance attenuation, per-face brightness and the
/// tnt stripe special case. Kept separate from the raster so the lighting
/// heuristic can evolve independently of ray dispatch.
use crate::raycast::Face;
use crate::voxel::Voxel;
use glam::Vec3;

/// Floor for distance attenuation; far geometry darkens to this, not black
pub const MIN_BRIGHTNESS: f32 = 0.25;

// Static per-face brightness heuristic: top lit, bottom in shadow, the two
// horizontal axes distinguishable from each other
const FACE_BRIGHTNESS_LUT: [f32; 7] = [
    0.8, // PosX
    0.8, // NegX
    1.0, // PosY
    0.5, // NegY
    0.7, // PosZ
    0.7, // NegZ
    1.0, // Inside
];

#[derive(Copy, Clone, Debug)]
pub struct ShadingConfig {
    /// When false the per-face multiplier is disabled and every face renders
    /// at full brightness ("shadows off" setting)
    pub face_shading: bool,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self { face_shading: true }
    }
}

impl ShadingConfig {
    /// Linear distance falloff with a minimum floor
    #[inline]
    pub fn distance_brightness(&self, distance: f32, max_distance: f32) -> f32 {
        (1.0 - distance / max_distance).max(MIN_BRIGHTNESS)
    }

    #[inline]
    pub fn face_brightness(&self, face: Face) -> f32 {
        if self.face_shading {
            FACE_BRIGHTNESS_LUT[face as usize]
        } else {
            1.0
        }
    }

    /// Surface color for a hit: flat base color for everything except tnt,
    /// which gets a procedural two-tone stripe from the hit point
    #[inline]
    pub fn surface_color(&self, voxel: Voxel, point: Vec3) -> [u8; 3] {
        if voxel == Voxel::Tnt {
            tnt_stripe_color(point)
        } else {
            voxel.base_color()
        }
    }

    /// Apply a brightness factor to an RGB color and pack into ARGB32.
    /// Integer arithmetic keeps the per-ray cost low.
    #[inline]
    pub fn shade_color(&self, base: [u8; 3], brightness: f32) -> u32 {
        let light = (brightness.clamp(0.0, 1.0) * 255.0) as u32;
        let r = ((base[0] as u32 * light) >> 8).min(255);
        let g = ((base[1] as u32 * light) >> 8).min(255);
        let b = ((base[2] as u32 * light) >> 8).min(255);
        0xFF00_0000 | (r << 16) | (g << 8) | b
    }
}

const TNT_RED: [u8; 3] = [200, 60, 40];
const TNT_WHITE: [u8; 3] = [235, 225, 205];

/// Half-voxel stripes alternating red/white across all three axes
#[inline]
pub fn tnt_stripe_color(point: Vec3) -> [u8; 3] {
    let bands = (point.x * 2.0).floor() + (point.y * 2.0).floor() + (point.z * 2.0).floor();
    if (bands as i64).rem_euclid(2) == 0 {
        TNT_RED
    } else {
        TNT_WHITE
    }
}
