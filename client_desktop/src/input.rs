//! Keyboard input handling

use game_core::{InputState, Key};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Map a physical key to the logical key it drives
pub fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyS => Some(Key::P1Left),
        KeyCode::KeyD => Some(Key::P1Right),
        KeyCode::ArrowLeft => Some(Key::P2Left),
        KeyCode::ArrowRight => Some(Key::P2Right),
        _ => None,
    }
}

/// Record a press or release; returns false for unbound keys
pub fn handle_key(input: &mut InputState, code: KeyCode, state: ElementState) -> bool {
    match key_for(code) {
        Some(key) => {
            input.set(key, state.is_pressed());
            true
        }
        None => false,
    }
}
