//! Browser bindings
//!
//! The page keeps ownership of the canvas, WebGL context, menus and audio.
//! It forwards input events here, calls `frame` from its loop, and uploads
//! the returned byte buffers straight into GPU buffers.

use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, TouchEvent};

use crate::controls::keycode;
use crate::render::RenderLists;
use crate::session::Session;
use crate::settings::{Material, Settings};
use crate::sim::GameEvent;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed (e.g. hot reload)
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("Keeping existing logger: {}", e);
    }
}

/// Map a `keydown` event onto the key codes `controls` understands
fn key_code(event: &KeyboardEvent) -> Option<u32> {
    let key = event.key();
    let code = match key.as_str() {
        "ArrowLeft" => keycode::ARROW_LEFT,
        "ArrowUp" => keycode::ARROW_UP,
        "ArrowRight" => keycode::ARROW_RIGHT,
        "ArrowDown" => keycode::ARROW_DOWN,
        " " => keycode::SPACE,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase() as u32,
                _ => return None,
            }
        }
    };
    Some(code)
}

fn first_touch(event: &TouchEvent) -> Option<(f32, f32)> {
    let touch = event.touches().get(0)?;
    Some((touch.client_x() as f32, touch.client_y() as f32))
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    material: Material,
    lists: Option<RenderLists>,
    eaten: u32,
    died: bool,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game from optional settings JSON
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WebGame, JsValue> {
        let settings = match settings_json {
            Some(json) => Settings::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Settings::default(),
        };
        let material = settings
            .color()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .material();
        let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        Ok(WebGame {
            session: Session::new(settings, seed, js_sys::Date::now()),
            material,
            lists: None,
            eaten: 0,
            died: false,
        })
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) {
        if let Some(code) = key_code(event) {
            self.session.handle_key(code, js_sys::Date::now());
        }
    }

    pub fn touch_start(&mut self, event: &TouchEvent) {
        if let Some((x, y)) = first_touch(event) {
            self.session.touch_start(x, y);
        }
    }

    pub fn touch_move(&mut self, event: &TouchEvent) {
        if let Some((x, y)) = first_touch(event) {
            self.session.touch_move(x, y);
        }
    }

    pub fn set_invert_y(&mut self, invert_y: bool) {
        self.session.set_invert_y(invert_y);
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.session.set_music_enabled(enabled);
    }

    /// Change the body color; returns false if `hex` is not a valid color
    pub fn set_snake_color(&mut self, hex: &str) -> bool {
        match self.session.set_snake_color(hex) {
            Ok(color) => {
                self.material = color.material();
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// Restore the options-menu defaults (controls, music, color)
    pub fn reset_options(&mut self) -> Result<(), JsValue> {
        self.session.reset_options();
        self.material = self
            .session
            .settings()
            .color()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .material();
        Ok(())
    }

    /// Current settings as JSON, for the page to persist
    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.session
            .settings()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn restart(&mut self) {
        self.session.restart(js_sys::Date::now());
    }

    /// Advance to the current time and rebuild render data
    pub fn frame(&mut self, aspect: f32) {
        let snapshot = self.session.frame(js_sys::Date::now());
        self.eaten = 0;
        self.died = false;
        for event in &snapshot.events {
            match event {
                GameEvent::ConsumableEaten { .. } => self.eaten += 1,
                GameEvent::Died { .. } => self.died = true,
            }
        }
        self.lists = Some(RenderLists::build(&snapshot, aspect, &self.material));
    }

    pub fn score(&self) -> u32 {
        self.session.state().score() as u32
    }

    pub fn is_dead(&self) -> bool {
        self.session.state().is_dead()
    }

    pub fn music_enabled(&self) -> bool {
        self.session.settings().music_enabled
    }

    /// Consumables eaten during the last frame (for the pickup sound)
    pub fn eaten_this_frame(&self) -> u32 {
        self.eaten
    }

    /// Whether the last frame ended the run (for the death screen)
    pub fn died_this_frame(&self) -> bool {
        self.died
    }

    pub fn main_uniform(&self) -> Vec<u8> {
        self.lists
            .as_ref()
            .map(|l| bytemuck::bytes_of(&l.main.uniform).to_vec())
            .unwrap_or_default()
    }

    pub fn main_instances(&self) -> Vec<u8> {
        self.lists
            .as_ref()
            .map(|l| l.main.instance_bytes().to_vec())
            .unwrap_or_default()
    }

    pub fn overview_uniform(&self) -> Vec<u8> {
        self.lists
            .as_ref()
            .map(|l| bytemuck::bytes_of(&l.overview.uniform).to_vec())
            .unwrap_or_default()
    }

    pub fn overview_instances(&self) -> Vec<u8> {
        self.lists
            .as_ref()
            .map(|l| l.overview.instance_bytes().to_vec())
            .unwrap_or_default()
    }

    pub fn material(&self) -> Vec<u8> {
        self.lists
            .as_ref()
            .map(|l| bytemuck::bytes_of(&l.material).to_vec())
            .unwrap_or_default()
    }
}
