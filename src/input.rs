//! Keyboard state and operator key bindings.
//!
//! winit delivers individual key events; the clock wants per-frame
//! "just released" and "currently held" queries, so events are folded into a
//! `KeyboardState` that is cleared at the end of every frame.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::clock::ClockInput;

/// Per-frame keyboard state
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Auto-repeat events must be filtered by the caller.
    pub fn key_event(&mut self, code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.held.insert(code);
            }
            ElementState::Released => {
                self.held.remove(&code);
                self.released.insert(code);
            }
        }
    }

    /// Key went up since the last `end_frame`
    pub fn just_released(&self, code: KeyCode) -> bool {
        self.released.contains(&code)
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Forget edge events; held keys persist
    pub fn end_frame(&mut self) {
        self.released.clear();
    }

    /// Drop all state (window lost focus, keys may be released unseen)
    pub fn clear(&mut self) {
        self.held.clear();
        self.released.clear();
    }
}

/// Operator action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    ShowTournament,
    HideTournament,
    Cancel,
    TestSound,
    Reset,
    Exit,
}

impl Action {
    /// Level-triggered actions fire every frame their key is held
    pub fn is_level_triggered(self) -> bool {
        matches!(self, Action::HideTournament)
    }
}

/// Commands resolved for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCommands {
    pub clock: ClockInput,
    pub exit: bool,
}

/// Key → action table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Enter, Action::Start),
                (KeyCode::NumpadEnter, Action::Start),
                (KeyCode::KeyS, Action::ShowTournament),
                (KeyCode::Escape, Action::HideTournament),
                (KeyCode::KeyH, Action::Cancel),
                (KeyCode::KeyT, Action::TestSound),
                (KeyCode::KeyR, Action::Reset),
                (KeyCode::KeyX, Action::Exit),
            ],
        }
    }
}

impl KeyBindings {
    /// Keys bound to an action, in table order
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| *bound == action)
            .map(|(code, _)| *code)
    }

    /// Resolve this frame's commands from the keyboard state
    pub fn resolve(&self, keyboard: &KeyboardState) -> FrameCommands {
        let mut commands = FrameCommands::default();

        for &(code, action) in &self.bindings {
            let active = if action.is_level_triggered() {
                keyboard.is_held(code)
            } else {
                keyboard.just_released(code)
            };
            if !active {
                continue;
            }

            match action {
                Action::Start => commands.clock.start = true,
                Action::ShowTournament => commands.clock.show_tournament = true,
                Action::HideTournament => commands.clock.hide_tournament = true,
                Action::Cancel => commands.clock.cancel = true,
                Action::TestSound => commands.clock.test_sound = true,
                Action::Reset => commands.clock.reset = true,
                Action::Exit => commands.exit = true,
            }
        }

        commands
    }

    /// Key legend lines for the menu screen
    pub fn legend(&self) -> Vec<String> {
        let entries = [
            (Action::Start, "START"),
            (Action::ShowTournament, "SHOW TIMER"),
            (Action::Cancel, "HALT"),
            (Action::TestSound, "TEST"),
            (Action::Reset, "RESET"),
            (Action::HideTournament, "MENU"),
            (Action::Exit, "EXIT"),
        ];

        entries
            .iter()
            .filter_map(|&(action, label)| {
                let key = self.keys_for(action).next()?;
                Some(format!("[{}] {}", key_name(key), label))
            })
            .collect()
    }
}

/// Short printable key name
fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Enter | KeyCode::NumpadEnter => "ENTER".to_string(),
        KeyCode::Escape => "ESC".to_string(),
        KeyCode::Space => "SPACE".to_string(),
        other => {
            let debug = format!("{:?}", other);
            debug
                .strip_prefix("Key")
                .or_else(|| debug.strip_prefix("Digit"))
                .unwrap_or(debug.as_str())
                .to_uppercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(keyboard: &mut KeyboardState, code: KeyCode) {
        keyboard.key_event(code, ElementState::Pressed);
        keyboard.key_event(code, ElementState::Released);
    }

    #[test]
    fn test_release_is_edge_triggered() {
        let mut keyboard = KeyboardState::new();
        let bindings = KeyBindings::default();

        keyboard.key_event(KeyCode::Enter, ElementState::Pressed);
        assert!(!bindings.resolve(&keyboard).clock.start);

        keyboard.key_event(KeyCode::Enter, ElementState::Released);
        assert!(bindings.resolve(&keyboard).clock.start);

        keyboard.end_frame();
        assert!(!bindings.resolve(&keyboard).clock.start);
    }

    #[test]
    fn test_hide_is_level_triggered() {
        let mut keyboard = KeyboardState::new();
        let bindings = KeyBindings::default();

        keyboard.key_event(KeyCode::Escape, ElementState::Pressed);
        for _ in 0..3 {
            assert!(bindings.resolve(&keyboard).clock.hide_tournament);
            keyboard.end_frame();
        }

        keyboard.key_event(KeyCode::Escape, ElementState::Released);
        assert!(!bindings.resolve(&keyboard).clock.hide_tournament);
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        let cases = [
            (KeyCode::KeyS, ClockInput { show_tournament: true, ..ClockInput::default() }),
            (KeyCode::KeyH, ClockInput { cancel: true, ..ClockInput::default() }),
            (KeyCode::KeyT, ClockInput { test_sound: true, ..ClockInput::default() }),
            (KeyCode::KeyR, ClockInput { reset: true, ..ClockInput::default() }),
            (KeyCode::NumpadEnter, ClockInput { start: true, ..ClockInput::default() }),
        ];

        for (code, expected) in cases {
            let mut keyboard = KeyboardState::new();
            tap(&mut keyboard, code);
            let commands = bindings.resolve(&keyboard);
            assert_eq!(commands.clock, expected, "key {:?}", code);
            assert!(!commands.exit);
        }
    }

    #[test]
    fn test_exit_binding() {
        let mut keyboard = KeyboardState::new();
        tap(&mut keyboard, KeyCode::KeyX);
        let commands = KeyBindings::default().resolve(&keyboard);
        assert!(commands.exit);
        assert!(commands.clock.is_empty());
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut keyboard = KeyboardState::new();
        tap(&mut keyboard, KeyCode::KeyP);
        assert_eq!(
            KeyBindings::default().resolve(&keyboard),
            FrameCommands::default()
        );
    }

    #[test]
    fn test_legend_names_keys() {
        let legend = KeyBindings::default().legend();
        assert_eq!(legend[0], "[ENTER] START");
        assert!(legend.contains(&"[H] HALT".to_string()));
        assert!(legend.contains(&"[ESC] MENU".to_string()));
        assert_eq!(legend.len(), 7);
    }
}
