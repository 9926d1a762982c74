use std::collections::VecDeque;

use walk_engine::{InputSnapshot, Key};

const ENTRY_KEYS: [Key; 12] = [
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
];
const MAX_PENDING_PRESSES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IdEntryEvent {
    /// A keystroke changed the buffer.
    Edited,
    /// Enter was pressed with a non-empty buffer.
    Confirmed(u32),
    /// The buffer could not be read as an identifier.
    Invalid(String),
}

/// Digit buffer for typing a character identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdEntry {
    buffer: String,
    max_digits: usize,
}

impl IdEntry {
    pub(crate) fn new(max_digits: usize) -> Self {
        Self {
            buffer: String::with_capacity(max_digits),
            max_digits,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Appends `digit` unless the buffer is full. Returns whether it was accepted.
    pub(crate) fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.buffer.len() >= self.max_digits {
            return false;
        }
        self.buffer.push(digit);
        true
    }

    pub(crate) fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub(crate) fn parse(&self) -> Result<u32, String> {
        self.buffer
            .parse::<u32>()
            .map_err(|error| format!("invalid identifier {:?}: {error}", self.buffer))
    }

    /// Handles at most one freshly pressed key: Enter, then Backspace, then the lowest digit.
    pub(crate) fn handle_input(&mut self, input: &InputSnapshot) -> Option<IdEntryEvent> {
        if input.just_pressed(Key::Enter) && !self.buffer.is_empty() {
            return Some(match self.parse() {
                Ok(id) => IdEntryEvent::Confirmed(id),
                Err(reason) => IdEntryEvent::Invalid(reason),
            });
        }
        if input.just_pressed(Key::Backspace) && self.backspace() {
            return Some(IdEntryEvent::Edited);
        }
        let digit = Key::DIGITS
            .into_iter()
            .find(|key| input.just_pressed(*key))
            .and_then(Key::digit_char)?;
        self.push_digit(digit).then_some(IdEntryEvent::Edited)
    }
}

/// Entry keystrokes in the order they were pressed, held until the scene is ready for them.
///
/// Presses that land while the debounce gate is closed are replayed one per update once it
/// opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PendingPresses {
    keys: VecDeque<Key>,
}

impl PendingPresses {
    pub(crate) fn record(&mut self, input: &InputSnapshot) {
        for key in ENTRY_KEYS {
            if input.just_pressed(key) && self.keys.len() < MAX_PENDING_PRESSES {
                self.keys.push_back(key);
            }
        }
    }

    /// The oldest pending press as a one-key snapshot.
    pub(crate) fn next(&mut self) -> Option<InputSnapshot> {
        self.keys
            .pop_front()
            .map(|key| InputSnapshot::empty().with_key_pressed(key))
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }
}
