/// Main application entry point
/// Handles window creation, translation of device events into the session's
/// input intents, and the fixed-step tick/render loop
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use raycraft::*;
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const MOUSE_SENSITIVITY: f32 = 0.002;

/// Held-key state the shell folds into per-tick intents
#[derive(Default)]
struct HeldKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    jump: bool,
    down: bool,
}

/// Window-bound presentation state, created once the event loop resumes
struct Gfx {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    framebuffer: Framebuffer,
}

struct App {
    gfx: Option<Gfx>,
    session: GameSession,
    renderer: Renderer,
    held: HeldKeys,
    intents: InputIntents,
    mouse_captured: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl App {
    fn new() -> Self {
        Self {
            gfx: None,
            session: GameSession::new(1337, GameMode::Survival),
            renderer: Renderer::new(RenderConfig::default()),
            held: HeldKeys::default(),
            intents: InputIntents::default(),
            mouse_captured: false,
            last_mouse_pos: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Raycraft")
                        .with_inner_size(LogicalSize::new(1280, 720)),
                )
                .unwrap(),
        );
        let context = softbuffer::Context::new(window.clone()).unwrap();
        let surface = softbuffer::Surface::new(&context, window.clone()).unwrap();
        let size = window.inner_size();
        self.gfx = Some(Gfx {
            framebuffer: Framebuffer::new(size.width as usize, size.height as usize),
            window,
            surface,
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gfx.framebuffer
                    .resize(new_size.width as usize, new_size.height as usize);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;

                if let PhysicalKey::Code(keycode) = event.physical_key {
                    match keycode {
                        KeyCode::KeyW => self.held.forward = pressed,
                        KeyCode::KeyS => self.held.backward = pressed,
                        KeyCode::KeyA => self.held.left = pressed,
                        KeyCode::KeyD => self.held.right = pressed,
                        KeyCode::Space => self.held.jump = pressed,
                        KeyCode::ShiftLeft => self.held.down = pressed,
                        KeyCode::KeyF if pressed => {
                            let shading = &mut self.renderer.config.shading;
                            shading.face_shading = !shading.face_shading;
                            println!(
                                "Face shading: {}",
                                if shading.face_shading { "ON" } else { "OFF" }
                            );
                        }
                        KeyCode::KeyP if pressed => {
                            self.session.last_stats.print_summary();
                        }
                        KeyCode::KeyR if pressed => {
                            self.session.reset();
                        }
                        KeyCode::KeyE if pressed => {
                            self.intents.toggle_inventory = true;
                        }
                        KeyCode::Escape if pressed => {
                            if self.mouse_captured {
                                self.mouse_captured = false;
                                gfx.window.set_cursor_visible(true);
                            }
                            self.intents.toggle_pause = true;
                        }
                        _ => {
                            if pressed {
                                if let Some(slot) = digit_slot(keycode) {
                                    self.intents.slot_select = Some(slot);
                                }
                            }
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if state == ElementState::Pressed {
                    if !self.mouse_captured {
                        self.mouse_captured = true;
                        gfx.window.set_cursor_visible(false);
                    } else {
                        match button {
                            MouseButton::Left => self.intents.primary = true,
                            MouseButton::Right => self.intents.secondary = true,
                            _ => {}
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_captured {
                    if let Some(last_pos) = self.last_mouse_pos {
                        let delta_x = (position.x - last_pos.0) as f32;
                        let delta_y = (position.y - last_pos.1) as f32;
                        self.intents.look_yaw += delta_x * MOUSE_SENSITIVITY;
                        self.intents.look_pitch -= delta_y * MOUSE_SENSITIVITY;
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::RedrawRequested => {
                self.intents.move_forward = axis(self.held.forward, self.held.backward);
                self.intents.move_strafe = axis(self.held.right, self.held.left);
                self.intents.jump_held = self.held.jump;
                self.intents.down_held = self.held.down;

                self.session.tick(&self.intents);
                self.intents.clear_triggers();

                // A minimized window reports a 0x0 inner size; keep ticking
                // but skip the present until it has area again
                if gfx.framebuffer.width == 0 || gfx.framebuffer.height == 0 {
                    gfx.window.request_redraw();
                    return;
                }

                // The raster still runs while paused so the last world state
                // stays on screen
                let raster_start = std::time::Instant::now();
                let tick_count = self.session.tick_count();
                self.renderer.render(
                    &mut gfx.framebuffer,
                    &mut self.session.world,
                    &self.session.player,
                    &self.session.entities,
                    tick_count,
                );
                self.session.last_stats.raster_us = raster_start.elapsed().as_secs_f64() * 1e6;

                gfx.surface
                    .resize(
                        NonZeroU32::new(gfx.framebuffer.width as u32).unwrap(),
                        NonZeroU32::new(gfx.framebuffer.height as u32).unwrap(),
                    )
                    .unwrap();
                let mut buffer = gfx.surface.buffer_mut().unwrap();
                buffer.copy_from_slice(gfx.framebuffer.buffer());
                buffer.present().unwrap();

                gfx.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();

    println!("=== Raycraft - Software Raycaster Sandbox ===");
    println!("Controls:");
    println!("  WASD - Move");
    println!("  Space/Shift - Jump / Descend (creative)");
    println!("  Mouse - Look, Left click break/ignite, Right click place");
    println!("  1-9 - Select hotbar slot");
    println!("  F - Toggle face shading, P - Print tick breakdown");
    println!("  R - Reset session, ESC - Pause / release mouse");
    println!();

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).unwrap();
}

#[inline]
fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

fn digit_slot(keycode: KeyCode) -> Option<usize> {
    Some(match keycode {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        KeyCode::Digit7 => 6,
        KeyCode::Digit8 => 7,
        KeyCode::Digit9 => 8,
        _ => return None,
    })
}
