use macroquad::prelude::KeyCode;

/// `KeyboardEvent.code`-style name for a macroquad key, so the simulation sees the same key
/// strings on native and wasm builds.
pub fn dom_code(key: KeyCode) -> &'static str {
    match key {
        KeyCode::A => "KeyA",
        KeyCode::B => "KeyB",
        KeyCode::C => "KeyC",
        KeyCode::D => "KeyD",
        KeyCode::E => "KeyE",
        KeyCode::F => "KeyF",
        KeyCode::G => "KeyG",
        KeyCode::H => "KeyH",
        KeyCode::I => "KeyI",
        KeyCode::J => "KeyJ",
        KeyCode::K => "KeyK",
        KeyCode::L => "KeyL",
        KeyCode::M => "KeyM",
        KeyCode::N => "KeyN",
        KeyCode::O => "KeyO",
        KeyCode::P => "KeyP",
        KeyCode::Q => "KeyQ",
        KeyCode::R => "KeyR",
        KeyCode::S => "KeyS",
        KeyCode::T => "KeyT",
        KeyCode::U => "KeyU",
        KeyCode::V => "KeyV",
        KeyCode::W => "KeyW",
        KeyCode::X => "KeyX",
        KeyCode::Y => "KeyY",
        KeyCode::Z => "KeyZ",
        KeyCode::Key0 => "Digit0",
        KeyCode::Key1 => "Digit1",
        KeyCode::Key2 => "Digit2",
        KeyCode::Key3 => "Digit3",
        KeyCode::Key4 => "Digit4",
        KeyCode::Key5 => "Digit5",
        KeyCode::Key6 => "Digit6",
        KeyCode::Key7 => "Digit7",
        KeyCode::Key8 => "Digit8",
        KeyCode::Key9 => "Digit9",
        KeyCode::Space => "Space",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::Escape => "Escape",
        KeyCode::Backspace => "Backspace",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::LeftShift => "ShiftLeft",
        KeyCode::RightShift => "ShiftRight",
        KeyCode::LeftControl => "ControlLeft",
        KeyCode::RightControl => "ControlRight",
        KeyCode::LeftAlt => "AltLeft",
        KeyCode::RightAlt => "AltRight",
        _ => "Unidentified",
    }
}

pub fn removal_modifier_held(is_down: impl Fn(KeyCode) -> bool) -> bool {
    is_down(KeyCode::LeftAlt) || is_down(KeyCode::RightAlt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockyard_core::MoveKey;

    #[test]
    fn movement_keys_use_dom_names() {
        assert_eq!(MoveKey::from_code(dom_code(KeyCode::W)), Some(MoveKey::Forward));
        assert_eq!(MoveKey::from_code(dom_code(KeyCode::S)), Some(MoveKey::Backward));
        assert_eq!(MoveKey::from_code(dom_code(KeyCode::A)), Some(MoveKey::Left));
        assert_eq!(MoveKey::from_code(dom_code(KeyCode::D)), Some(MoveKey::Right));
        assert_eq!(MoveKey::from_code(dom_code(KeyCode::Space)), Some(MoveKey::Jump));
    }

    #[test]
    fn unmapped_keys_are_unidentified() {
        assert_eq!(dom_code(KeyCode::F12), "Unidentified");
        assert_eq!(MoveKey::from_code(dom_code(KeyCode::F12)), None);
    }

    #[test]
    fn either_alt_counts_as_modifier() {
        assert!(removal_modifier_held(|key| key == KeyCode::RightAlt));
        assert!(!removal_modifier_held(|key| key == KeyCode::LeftShift));
    }
}
