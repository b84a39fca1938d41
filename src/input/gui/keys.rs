use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::input::translator::{InputEvent, Key};

/// Maps a physical key to the logical key it stands for, if any.
#[must_use]
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyC => Key::C,
        KeyCode::Space => Key::Space,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };

    Some(key)
}

#[must_use]
pub fn input_event(code: KeyCode, state: ElementState) -> Option<InputEvent> {
    let key = key_from_code(code)?;

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}
