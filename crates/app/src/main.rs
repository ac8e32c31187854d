//! Groove Engine - Main Entry Point
//!
//! Interactive scene driver: WASD/QE to fly, hold the right mouse button
//! to look around, left-click to pick the closest object under the
//! pointer.

use anyhow::Result;
use glam::Vec3;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::{MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use groove_core::{EngineConfig, Timer};
use groove_platform::{InputState, KeyCode, MouseButton, Window};
use groove_renderer::{UniformSink, draw_scene};
use groove_scene::camera::Perspective;
use groove_scene::{Camera, Scene, Transform, pick_closest, ray_from_screen};

/// Largest pointer delta fed into the camera in one frame; caps the spike
/// a pointer warp would otherwise inject.
const MAX_LOOK_DELTA: f32 = 100.0;

/// Scale factor applied to the selected object.
const SELECTION_PULSE: f32 = 1.1;

/// Bounds for the scroll-tuned fly speed, units per second.
const SPEED_RANGE: (f32, f32) = (0.1, 25.0);

struct App {
    config: EngineConfig,
    window: Option<Window>,
    camera: Option<Camera>,
    scene: Scene,
    sink: UniformSink,
    input: InputState,
    timer: Timer,
    selected: Option<usize>,
}

impl App {
    fn new(config: EngineConfig) -> Self {
        Self {
            config,
            window: None,
            camera: None,
            scene: demo_scene(),
            sink: UniformSink::new(),
            input: InputState::new(),
            timer: Timer::new(),
            selected: None,
        }
    }

    /// Integrate this frame's input into the camera.
    fn update_camera(&mut self, delta_time: f32) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let input = &self.input;

        let (dx, dy) = input.pointer_delta();
        let looking = input.is_button_pressed(MouseButton::Right);
        let just_engaged = input.is_button_just_pressed(MouseButton::Right);

        // Skip the engage frame: the delta accumulated while the button
        // was up must not kick the view.
        if looking && !just_engaged && (dx != 0.0 || dy != 0.0) {
            let dx = dx.clamp(-MAX_LOOK_DELTA, MAX_LOOK_DELTA);
            let dy = dy.clamp(-MAX_LOOK_DELTA, MAX_LOOK_DELTA);
            // Screen Y grows downward; pitch grows upward.
            camera.process_mouse_movement(dx, -dy, true);
        }

        let mut direction = Vec3::ZERO;
        if input.is_key_pressed(KeyCode::KeyW) {
            direction.z += 1.0;
        }
        if input.is_key_pressed(KeyCode::KeyS) {
            direction.z -= 1.0;
        }
        if input.is_key_pressed(KeyCode::KeyD) {
            direction.x += 1.0;
        }
        if input.is_key_pressed(KeyCode::KeyA) {
            direction.x -= 1.0;
        }
        if input.is_key_pressed(KeyCode::KeyE) {
            direction.y += 1.0;
        }
        if input.is_key_pressed(KeyCode::KeyQ) {
            direction.y -= 1.0;
        }
        if direction != Vec3::ZERO {
            camera.process_keyboard(direction, delta_time);
        }

        // Scroll tunes fly speed rather than dollying.
        let (_, scroll) = input.scroll_delta();
        if scroll != 0.0 {
            let speed = camera.movement_speed * 1.1_f32.powf(scroll);
            camera.movement_speed = speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
            debug!("Movement speed: {:.2}", camera.movement_speed);
        }
    }

    /// Run one frame: input integration, scripted animation, draw pass,
    /// and the optional pick pass.
    fn step_frame(&mut self) {
        let delta_time = self.timer.delta_secs();
        self.update_camera(delta_time);

        // Scripted spin on the first demo object.
        let spin = self.config.spin_degrees_per_sec * delta_time;
        if let Some(object) = self.scene.get_mut(0) {
            object.rotation.y = (object.rotation.y + spin) % 360.0;
        }

        if let Some(camera) = &self.camera {
            draw_scene(camera, self.scene.objects(), &mut self.sink);
        }

        if self.input.is_button_just_pressed(MouseButton::Left) {
            self.pick_under_pointer();
        }

        self.input.end_frame();
    }

    /// Resolve a pick at the current pointer position.
    fn pick_under_pointer(&mut self) {
        let (Some(camera), Some(window)) = (&self.camera, &self.window) else {
            return;
        };

        let pointer = self.input.pointer_position();
        let ray = ray_from_screen(
            camera,
            pointer,
            window.width() as f32,
            window.height() as f32,
        );

        match pick_closest(&ray, self.scene.objects()) {
            Some(hit) => {
                info!(
                    "Picked object {} at distance {:.3}",
                    hit.index, hit.distance
                );
                self.select(Some(hit.index));
            }
            None => {
                debug!("Pick hit empty space");
                self.select(None);
            }
        }
    }

    /// Move the selection pulse from the previous object to `index`.
    fn select(&mut self, index: Option<usize>) {
        if self.selected == index {
            return;
        }
        if let Some(previous) = self.selected.take()
            && let Some(object) = self.scene.get_mut(previous)
        {
            object.scale /= SELECTION_PULSE;
        }
        if let Some(next) = index
            && let Some(object) = self.scene.get_mut(next)
        {
            object.scale *= SELECTION_PULSE;
        }
        self.selected = index;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match Window::new(
            event_loop,
            self.config.window.width,
            self.config.window.height,
            &self.config.window.title,
        ) {
            Ok(window) => window,
            Err(e) => {
                error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let camera_config = self.config.camera;
        let projection = match Perspective::new(
            camera_config.fov_y_degrees,
            window.aspect_ratio(),
            camera_config.near,
            camera_config.far,
        ) {
            Ok(projection) => projection,
            Err(e) => {
                error!("Failed to build camera projection: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut camera = Camera::first_person(
            Vec3::from_array(camera_config.position),
            -90.0,
            0.0,
            projection,
        );
        camera.movement_speed = camera_config.movement_speed;
        camera.mouse_sensitivity = camera_config.mouse_sensitivity;

        info!(
            "Initialization complete with {} objects, entering main loop",
            self.scene.len()
        );
        self.camera = Some(camera);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(window) = self.window.as_mut() {
                    window.resize(size.width, size.height);
                }
                // A minimized window reports a zero size; keep the last
                // usable projection until it comes back.
                if size.width > 0
                    && size.height > 0
                    && let (Some(camera), Some(window)) = (self.camera.as_mut(), self.window.as_ref())
                    && let Err(e) = camera.set_aspect(window.aspect_ratio())
                {
                    error!("Resize produced an invalid aspect ratio: {e}");
                }
            }
            WindowEvent::RedrawRequested => {
                self.step_frame();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                use winit::keyboard::PhysicalKey;
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state.is_pressed() {
                        self.input.on_key_pressed(key);
                    } else {
                        self.input.on_key_released(key);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .on_pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if state.is_pressed() {
                    self.input.on_button_pressed(button.into());
                } else {
                    self.input.on_button_released(button.into());
                }
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(x, y) => self.input.on_scroll(x, y),
                MouseScrollDelta::PixelDelta(position) => self
                    .input
                    .on_scroll(position.x as f32 / 20.0, position.y as f32 / 20.0),
            },
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// A few unit cubes to fly around and pick.
fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    let _ = scene.push(Transform::new());
    let _ = scene.push(
        Transform::new()
            .with_position(Vec3::new(2.5, 0.0, -1.0))
            .with_scale(Vec3::splat(0.75)),
    );
    let _ = scene.push(
        Transform::new()
            .with_position(Vec3::new(-2.0, 0.5, -2.0))
            .with_rotation_degrees(Vec3::new(0.0, 30.0, 0.0)),
    );
    scene
}

fn main() -> Result<()> {
    groove_core::init_logging();
    info!("Starting Groove Engine");

    let config = EngineConfig::default();
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    info!("Shutdown complete");
    Ok(())
}
