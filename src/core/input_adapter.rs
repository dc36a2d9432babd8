use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::controller::{Button, Controller};

/// Adapter that bridges Winit keyboard events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update key state.
    /// Returns true when the event was a tracked key.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event.physical_key, event.state)
            }
            // Keys released while unfocused never report a release
            WindowEvent::Focused(false) => {
                self.release_all();
                false
            }
            _ => false,
        }
    }

    /// Apply one physical key transition. Returns true when the key is tracked.
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) -> bool {
        let PhysicalKey::Code(keycode) = key else {
            return false;
        };
        match Self::keycode_to_button(keycode) {
            Some(button) => {
                self.set_button(button, state == ElementState::Pressed);
                true
            }
            None => false,
        }
    }

    /// Record a press or release
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(button);
        } else {
            self.pressed_keys.remove(&button);
        }
    }

    /// Forget every held key
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::KeyO => Some(Button::KeyO),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
