use super::input::{Key, KeyStates};
use super::rendering::Canvas;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Abort(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    held: KeyStates,
    pressed: KeyStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(held: KeyStates, pressed: KeyStates) -> Self {
        Self { held, pressed }
    }

    /// Level-triggered: true for every tick the key is held.
    pub fn is_down(&self, key: Key) -> bool {
        self.held.is_down(key)
    }

    /// Edge-triggered: true only on the first tick after the key went down.
    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed.is_down(key)
    }

    /// Held keys in [`Key::ALL`] order.
    pub fn held_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|key| self.is_down(*key))
    }

    pub fn with_key_down(mut self, key: Key, is_down: bool) -> Self {
        self.held.set(key, is_down);
        self
    }

    /// Marks a fresh press, which also holds the key.
    pub fn with_key_pressed(mut self, key: Key) -> Self {
        self.held.set(key, true);
        self.pressed.set(key, true);
        self
    }
}

pub trait Scene {
    /// Advances one fixed tick.
    fn update(&mut self, input: &InputSnapshot) -> SceneCommand;
    fn render(&self, canvas: &mut Canvas<'_>);
    /// Logical frame buffer size for a given window size.
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}
