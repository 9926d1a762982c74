#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Backspace,
    Enter,
    Escape,
}

const KEY_COUNT: usize = 17;

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Digit0,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
        Key::Backspace,
        Key::Enter,
        Key::Escape,
    ];

    pub const DIGITS: [Key; 10] = [
        Key::Digit0,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
    ];

    /// The character a digit key types, `None` for every other key.
    pub const fn digit_char(self) -> Option<char> {
        match self {
            Key::Digit0 => Some('0'),
            Key::Digit1 => Some('1'),
            Key::Digit2 => Some('2'),
            Key::Digit3 => Some('3'),
            Key::Digit4 => Some('4'),
            Key::Digit5 => Some('5'),
            Key::Digit6 => Some('6'),
            Key::Digit7 => Some('7'),
            Key::Digit8 => Some('8'),
            Key::Digit9 => Some('9'),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::Digit0 => 4,
            Key::Digit1 => 5,
            Key::Digit2 => 6,
            Key::Digit3 => 7,
            Key::Digit4 => 8,
            Key::Digit5 => 9,
            Key::Digit6 => 10,
            Key::Digit7 => 11,
            Key::Digit8 => 12,
            Key::Digit9 => 13,
            Key::Backspace => 14,
            Key::Enter => 15,
            Key::Escape => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct KeyStates {
    down: [bool; KEY_COUNT],
}

impl KeyStates {
    pub(crate) fn set(&mut self, key: Key, is_down: bool) {
        self.down[key.index()] = is_down;
    }

    pub(crate) fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    pub(crate) fn clear(&mut self) {
        self.down = [false; KEY_COUNT];
    }
}
