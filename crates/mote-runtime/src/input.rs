//! Input state management
//!
//! Window events are folded into per-frame state here; demos consume the
//! resulting intents once per tick and never see raw events.

use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Tracks keyboard and mouse input state per frame
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<KeyCode>,
    /// Keys released this frame
    keys_just_released: HashSet<KeyCode>,

    /// Mouse button state (button index -> pressed)
    mouse_buttons_down: HashSet<u32>,
    /// Mouse buttons pressed this frame
    mouse_buttons_just_pressed: HashSet<u32>,

    /// Current pointer position in window pixels (touch folds into this)
    pub pointer_position: (f64, f64),

    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<KeyCode>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            keys_just_released: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_buttons_just_pressed: HashSet::new(),
            pointer_position: (0.0, 0.0),
            action_map: Self::default_action_map(),
        }
    }

    fn default_action_map() -> HashMap<String, Vec<KeyCode>> {
        let mut map = HashMap::new();
        // Space both starts a session and jumps — the runner decides which
        map.insert("jump".into(), vec![KeyCode::Space]);
        map.insert("start".into(), vec![KeyCode::Space]);
        map.insert("restart".into(), vec![KeyCode::KeyR, KeyCode::Enter]);
        map.insert("close".into(), vec![KeyCode::Escape]);
        map
    }

    /// Bind an action to one or more keys
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_just_released.insert(key);
    }

    /// Process mouse button press
    pub fn process_mouse_button_down(&mut self, button: u32) {
        if !self.mouse_buttons_down.contains(&button) {
            self.mouse_buttons_just_pressed.insert(button);
        }
        self.mouse_buttons_down.insert(button);
    }

    /// Process mouse button release
    pub fn process_mouse_button_up(&mut self, button: u32) {
        self.mouse_buttons_down.remove(&button);
    }

    /// Process pointer movement (mouse cursor or touch)
    pub fn process_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer_position = (x, y);
    }

    /// Call at end of frame to clear per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
        self.mouse_buttons_just_pressed.clear();
    }

    // --- Query methods ---

    /// Is a key currently held down?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Was a key pressed this frame?
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Was a key released this frame?
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keys_just_released.contains(&key)
    }

    /// Is an action currently held?
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false)
    }

    /// Was an action just pressed this frame?
    pub fn is_action_just_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_pressed.contains(k)))
            .unwrap_or(false)
    }

    /// Was an action just released this frame?
    pub fn is_action_just_released(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_released.contains(k)))
            .unwrap_or(false)
    }

    /// Was a mouse button just pressed this frame?
    pub fn is_mouse_button_just_pressed(&self, button: u32) -> bool {
        self.mouse_buttons_just_pressed.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_edges_clear_at_end_of_frame() {
        let mut input = InputState::new();
        input.process_key_down(KeyCode::Space);
        assert!(input.is_key_just_pressed(KeyCode::Space));
        assert!(input.is_key_down(KeyCode::Space));

        input.end_frame();
        assert!(!input.is_key_just_pressed(KeyCode::Space));
        assert!(input.is_key_down(KeyCode::Space));
    }

    #[test]
    fn held_key_does_not_repeat_just_pressed() {
        let mut input = InputState::new();
        input.process_key_down(KeyCode::Space);
        input.end_frame();
        // OS key repeat delivers another down event for the held key
        input.process_key_down(KeyCode::Space);
        assert!(!input.is_key_just_pressed(KeyCode::Space));
    }

    #[test]
    fn action_bindings() {
        let mut input = InputState::new();
        input.process_key_down(KeyCode::Space);
        assert!(input.is_action_just_pressed("jump"));
        assert!(input.is_action_just_pressed("start"));
        assert!(!input.is_action_just_pressed("restart"));

        input.end_frame();
        input.process_key_down(KeyCode::Enter);
        assert!(input.is_action_just_pressed("restart"));
    }

    #[test]
    fn rebinding_replaces_keys() {
        let mut input = InputState::new();
        input.bind_action("jump", vec![KeyCode::KeyW]);
        input.process_key_down(KeyCode::Space);
        assert!(!input.is_action_just_pressed("jump"));
        input.process_key_down(KeyCode::KeyW);
        assert!(input.is_action_just_pressed("jump"));
    }

    #[test]
    fn mouse_click_edge() {
        let mut input = InputState::new();
        input.process_mouse_button_down(0);
        assert!(input.is_mouse_button_just_pressed(0));
        input.end_frame();
        assert!(!input.is_mouse_button_just_pressed(0));
    }
}
