use blockyard_core::{
    ClickEvent, InputEvent, InputHub, PickHit, PickTarget, Sandbox, SandboxConfig,
};
use log::{debug, info, warn};
#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
use macroquad::prelude::*;

use crate::camera::FirstPersonCamera;
use crate::keys::{dom_code, removal_modifier_held};

mod camera;
mod draw;
mod keys;
mod logging;

const CONFIG_PATH: &str = "blockyard.json";

pub struct GameState {
    hub: InputHub,
    sandbox: Sandbox,
    camera: FirstPersonCamera,
    reach: f32,
    fixed_step_seconds: f32,
    pointer_locked: bool,
    last_hover: Option<PickTarget>,
    fps: f32,
    fps_frame_count: u32,
    fps_last_update_time: f64,
}

impl GameState {
    pub fn new(config: &SandboxConfig) -> Self {
        let hub = InputHub::new();
        let sandbox = Sandbox::start(config, &hub);
        Self {
            hub,
            sandbox,
            camera: FirstPersonCamera::from_config(&config.camera),
            reach: config.camera.reach,
            fixed_step_seconds: config.physics.fixed_step_seconds(),
            pointer_locked: false,
            last_hover: None,
            fps: 0.0,
            fps_frame_count: 0,
            fps_last_update_time: get_time(),
        }
    }

    fn fixed_update(&mut self) {
        self.sandbox.step(self.fixed_step_seconds);
    }

    fn set_pointer_locked(&mut self, locked: bool) {
        if self.pointer_locked == locked {
            return;
        }
        self.pointer_locked = locked;
        set_cursor_grab(locked);
        show_mouse(!locked);
        debug!("pointer lock {}", if locked { "engaged" } else { "released" });
    }

    /// Presses go out before releases, so a key tapped within one frame ends stopped.
    fn handle_keys(&mut self) {
        for key in get_keys_pressed() {
            if key == KeyCode::Escape {
                self.set_pointer_locked(false);
            }
            self.hub.publish(InputEvent::KeyDown(dom_code(key).to_owned()));
        }
        for key in get_keys_released() {
            self.hub.publish(InputEvent::KeyUp(dom_code(key).to_owned()));
        }
    }

    fn handle_pointer(&mut self) {
        if !self.pointer_locked {
            if is_mouse_button_pressed(MouseButton::Left) {
                self.set_pointer_locked(true);
            }
            self.publish_hover(None);
            return;
        }

        self.camera.look(-mouse_delta_position());

        let hit = self.sandbox.pick(&self.camera.center_ray(), self.reach);
        self.publish_hover(hit.as_ref());

        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(hit) = hit {
                let modifier_held = removal_modifier_held(is_key_down);
                self.hub
                    .publish(InputEvent::Click(ClickEvent::from_hit(&hit, modifier_held)));
            }
        }
    }

    fn publish_hover(&mut self, hit: Option<&PickHit>) {
        let target = hit.map(|hit| hit.target);
        if target == self.last_hover {
            return;
        }
        self.last_hover = target;
        self.hub.publish(InputEvent::Hover(target));
    }

    fn update_fps_if_due(&mut self) {
        let now = get_time();
        self.fps_frame_count += 1;
        let elapsed = now - self.fps_last_update_time;
        if elapsed >= 1.0 {
            self.fps = self.fps_frame_count as f32 / elapsed as f32;
            self.fps_frame_count = 0;
            self.fps_last_update_time = now;
        }
    }

    fn render(&self) {
        clear_background(draw::SKY_COLOR);
        let frame = self.sandbox.frame();

        set_camera(&self.camera.to_camera3d());
        draw::draw_ground(self.sandbox.ground());
        draw::draw_voxels(&frame);
        draw::draw_player(&frame);

        set_default_camera();
        if self.pointer_locked {
            draw::draw_crosshair();
        }
        draw::draw_hud(&frame, self.pointer_locked, self.fps);
    }
}

async fn load_config() -> SandboxConfig {
    let text = match macroquad::file::load_string(CONFIG_PATH).await {
        Ok(text) => text,
        Err(err) => {
            info!("no {CONFIG_PATH} ({err}), using default settings");
            return SandboxConfig::default();
        }
    };

    match SandboxConfig::from_json_str(&text) {
        Ok(config) => {
            info!("loaded settings from {CONFIG_PATH}");
            config
        }
        Err(err) => {
            warn!("{CONFIG_PATH}: {err}; using default settings");
            SandboxConfig::default()
        }
    }
}

pub async fn run() {
    install_panic_hook();
    logging::init();

    let config = load_config().await;
    let mut game = GameState::new(&config);
    let mut accumulator = 0.0_f32;

    loop {
        game.handle_keys();
        game.handle_pointer();
        game.sandbox.pump_input();

        // Consume real elapsed time in fixed-size simulation steps.
        accumulator += get_frame_time();
        while accumulator >= game.fixed_step_seconds {
            game.fixed_update();
            accumulator -= game.fixed_step_seconds;
        }

        game.update_fps_if_due();
        game.render();

        next_frame().await;
    }
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}
