/// Coarse per-ray rectangle raster
/// The screen is a cols x rows grid of rays; every ray resolves one screen
/// rectangle. Resolution is ray density - a deliberate performance trade-off,
/// not a continuous framebuffer. Per-cell hit distances are kept for
/// occluding entity billboards against the world.
use super::framebuffer::Framebuffer;
use super::shading::ShadingConfig;
use crate::entity::TntEntity;
use crate::player::Player;
use crate::raycast::{cast_ray, look_vector};
use crate::world::World;
use std::f32::consts::{PI, TAU};

#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// Ray density across the screen
    pub cols: usize,
    pub rows: usize,
    /// Horizontal field of view in radians; vertical follows the grid aspect
    pub fov: f32,
    /// Max march distance for render rays (the pick ray is much shorter)
    pub render_distance: f32,
    pub shading: ShadingConfig,
    pub sky_color: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cols: 160,
            rows: 90,
            fov: 70.0f32.to_radians(),
            render_distance: 24.0,
            shading: ShadingConfig::default(),
            sky_color: 0xFF87_B5E0,
        }
    }
}

pub struct Renderer {
    pub config: RenderConfig,
    /// Hit distance per ray cell, rebuilt every frame
    depth: Vec<f32>,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            depth: vec![f32::INFINITY; config.cols * config.rows],
            config,
        }
    }

    /// Render one frame: world raster first, then entity billboards
    pub fn render(
        &mut self,
        frame: &mut Framebuffer,
        world: &mut World,
        player: &Player,
        entities: &[TntEntity],
        tick: u64,
    ) {
        crate::perf_scope!("frame_raster");

        let cfg = self.config;
        self.depth.clear();
        self.depth.resize(cfg.cols * cfg.rows, f32::INFINITY);

        let fov_v = cfg.fov * cfg.rows as f32 / cfg.cols as f32;
        let cell_w = frame.width as f32 / cfg.cols as f32;
        let cell_h = frame.height as f32 / cfg.rows as f32;

        for row in 0..cfg.rows {
            let dpitch = (0.5 - (row as f32 + 0.5) / cfg.rows as f32) * fov_v;
            for col in 0..cfg.cols {
                let dyaw = ((col as f32 + 0.5) / cfg.cols as f32 - 0.5) * cfg.fov;
                let dir = look_vector(player.yaw + dyaw, player.pitch + dpitch);

                let color = match cast_ray(world, player.position, dir, cfg.render_distance) {
                    Some(hit) => {
                        self.depth[row * cfg.cols + col] = hit.distance;
                        let base = cfg.shading.surface_color(hit.voxel, hit.point);
                        let brightness = cfg
                            .shading
                            .distance_brightness(hit.distance, cfg.render_distance)
                            * cfg.shading.face_brightness(hit.face);
                        cfg.shading.shade_color(base, brightness)
                    }
                    None => cfg.sky_color,
                };

                let x0 = (col as f32 * cell_w) as i32;
                let y0 = (row as f32 * cell_h) as i32;
                let x1 = ((col + 1) as f32 * cell_w).ceil() as i32;
                let y1 = ((row + 1) as f32 * cell_h).ceil() as i32;
                frame.fill_rect(x0, y0, x1 - x0, y1 - y0, color);
            }
        }

        self.draw_billboards(frame, player, entities, tick, fov_v);
    }

    /// Flat billboards for armed tnt: projected by relative angle, scaled
    /// inversely by distance, blinking on a fixed tick modulus, with the
    /// remaining fuse seconds overlaid as a digit
    fn draw_billboards(
        &self,
        frame: &mut Framebuffer,
        player: &Player,
        entities: &[TntEntity],
        tick: u64,
        fov_v: f32,
    ) {
        let cfg = self.config;

        // Far entities first so near ones paint over them
        let mut order: Vec<usize> = (0..entities.len()).collect();
        order.sort_by(|&a, &b| {
            let da = entities[a].position.distance_squared(player.position);
            let db = entities[b].position.distance_squared(player.position);
            db.total_cmp(&da)
        });

        for index in order {
            let entity = &entities[index];
            let rel = entity.position - player.position;
            let distance = rel.length();
            if distance < 0.5 || distance > cfg.render_distance {
                continue;
            }

            let dyaw = wrap_angle(rel.z.atan2(rel.x) - player.yaw);
            if dyaw.abs() > cfg.fov * 0.75 {
                continue;
            }
            let horizontal = (rel.x * rel.x + rel.z * rel.z).sqrt();
            let dpitch = rel.y.atan2(horizontal) - player.pitch;

            let screen_x = (0.5 + dyaw / cfg.fov) * frame.width as f32;
            let screen_y = (0.5 - dpitch / fov_v) * frame.height as f32;

            // World raster occludes the billboard when the covering ray cell
            // hit something nearer
            let col = ((0.5 + dyaw / cfg.fov) * cfg.cols as f32) as i32;
            let row = ((0.5 - dpitch / fov_v) * cfg.rows as f32) as i32;
            if col >= 0 && (col as usize) < cfg.cols && row >= 0 && (row as usize) < cfg.rows {
                if self.depth[row as usize * cfg.cols + col as usize] < distance {
                    continue;
                }
            }

            let size = (frame.height as f32 * 0.8 / distance).max(2.0);
            let half = (size * 0.5) as i32;
            let blink_white = (tick / 8) % 2 == 0;
            let body = if blink_white { 0xFFEB_E1CD } else { 0xFFC8_3C28 };
            frame.fill_rect(
                screen_x as i32 - half,
                screen_y as i32 - half,
                half * 2,
                half * 2,
                body,
            );

            let digit = entity.fuse_seconds().min(9) as usize;
            let scale = ((size / 8.0) as i32).max(1);
            let digit_color = if blink_white { 0xFF20_2020 } else { 0xFFFF_FFFF };
            draw_digit(
                frame,
                digit,
                screen_x as i32 - scale * 3 / 2,
                screen_y as i32 - scale * 5 / 2,
                scale,
                digit_color,
            );
        }
    }
}

/// Wrap an angle into (-PI, PI]
#[inline]
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

// 3x5 bitmap glyphs for 0-9, one row per byte, low three bits used
const DIGIT_GLYPHS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

fn draw_digit(frame: &mut Framebuffer, digit: usize, x: i32, y: i32, scale: i32, color: u32) {
    debug_assert!(digit < 10);
    let glyph = DIGIT_GLYPHS[digit];
    for (gy, row_bits) in glyph.iter().enumerate() {
        for gx in 0..3 {
            if row_bits & (0b100 >> gx) != 0 {
                frame.fill_rect(x + gx * scale, y + gy as i32 * scale, scale, scale, color);
            }
        }
    }
}
