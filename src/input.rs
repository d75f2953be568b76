//! Input gateway
//!
//! Turns the set of keys held this frame into a debounced `FrameInput`.
//! Each control fires once per physical press and must see a release before
//! it can fire again. All controls are sampled every frame, whatever the
//! phase, so a key held across a phase change never fires twice.

use crate::sim::FrameInput;

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    W,
    S,
    Space,
    Enter,
    Q,
    M,
    Escape,
    /// Any other key, by platform key code
    Other(u16),
}

/// Press/release edge detector for one control
#[derive(Debug, Clone, Copy, Default)]
struct Debounce {
    held: bool,
}

impl Debounce {
    /// True on the first frame `down` is seen after a release
    fn edge(&mut self, down: bool) -> bool {
        let fired = down && !self.held;
        self.held = down;
        fired
    }
}

/// Debounce state for one input session
#[derive(Debug, Clone, Default)]
pub struct InputGateway {
    any_key: Debounce,
    left: Debounce,
    right: Debounce,
    confirm: Debounce,
    jump: Debounce,
    ability: Debounce,
    mute: Debounce,
    quit: Debounce,
}

impl InputGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample this frame's held keys
    pub fn sample(&mut self, held: &[Key]) -> FrameInput {
        let down = |keys: &[Key]| keys.iter().any(|k| held.contains(k));

        FrameInput {
            any_key: self.any_key.edge(!held.is_empty()),
            navigate_left: self.left.edge(down(&[Key::Left])),
            navigate_right: self.right.edge(down(&[Key::Right])),
            confirm: self.confirm.edge(down(&[Key::Space, Key::Enter])),
            jump: self.jump.edge(down(&[Key::Up, Key::W, Key::Space])),
            ability: self.ability.edge(down(&[Key::Q])),
            duck: down(&[Key::Down, Key::S]),
            toggle_mute: self.mute.edge(down(&[Key::M])),
            quit: self.quit.edge(down(&[Key::Escape])),
        }
    }

    /// Forget held state (e.g. after the window loses focus)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once_while_held() {
        let mut gateway = InputGateway::new();
        let first = gateway.sample(&[Key::Q]);
        assert!(first.ability);
        assert!(first.any_key);

        for _ in 0..10 {
            let held = gateway.sample(&[Key::Q]);
            assert!(!held.ability);
            assert!(!held.any_key);
        }

        gateway.sample(&[]);
        assert!(gateway.sample(&[Key::Q]).ability);
    }

    #[test]
    fn test_any_key_needs_full_release() {
        let mut gateway = InputGateway::new();
        assert!(gateway.sample(&[Key::Other(70)]).any_key);
        // Switching keys without releasing everything does not retrigger
        assert!(!gateway.sample(&[Key::Left]).any_key);
        gateway.sample(&[]);
        assert!(gateway.sample(&[Key::Left]).any_key);
    }

    #[test]
    fn test_bindings() {
        let mut gateway = InputGateway::new();
        let input = gateway.sample(&[Key::Space]);
        assert!(input.confirm);
        assert!(input.jump);

        let mut gateway = InputGateway::new();
        let input = gateway.sample(&[Key::W, Key::M, Key::Escape]);
        assert!(input.jump);
        assert!(!input.confirm);
        assert!(input.toggle_mute);
        assert!(input.quit);

        let mut gateway = InputGateway::new();
        assert!(gateway.sample(&[Key::Enter]).confirm);
    }

    #[test]
    fn test_duck_is_level_triggered() {
        let mut gateway = InputGateway::new();
        assert!(gateway.sample(&[Key::Down]).duck);
        assert!(gateway.sample(&[Key::S]).duck);
        assert!(!gateway.sample(&[]).duck);
    }

    #[test]
    fn test_reset_forgets_held_keys() {
        let mut gateway = InputGateway::new();
        gateway.sample(&[Key::Right]);
        gateway.reset();
        assert!(gateway.sample(&[Key::Right]).navigate_right);
    }
}
