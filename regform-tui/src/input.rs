//! Text editing state for the form inputs.

use std::collections::HashMap;

use crate::event::{Event, Key, Modifiers};

/// Text and cursor for a single input. The cursor is a character index,
/// 0 ..= char count.
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }
}

/// Tracks text input state for multiple controls.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value of an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|data| data.text.as_str()).unwrap_or("")
    }

    /// Get the full input data (text and cursor).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Set the text of an input, placing the cursor at the end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    /// Process targeted key events for the editable controls in `inputs`.
    ///
    /// Editing keys become `Change` events carrying the new text; Enter
    /// becomes `Submit`. Events for other controls, and keys the editor
    /// does not handle, pass through unchanged.
    pub fn process_events(&mut self, events: &[Event], inputs: &[&str]) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } if inputs.contains(&target.as_str()) => {
                    match self.handle_key(target, *key, *modifiers) {
                        TextEditResult::Changed => output.push(Event::Change {
                            target: target.clone(),
                            text: self.get(target).to_string(),
                        }),
                        TextEditResult::Submitted => output.push(Event::Submit {
                            target: target.clone(),
                        }),
                        TextEditResult::Handled => {}
                        TextEditResult::Ignored => output.push(event.clone()),
                    }
                }
                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Handle a key press for text editing.
    fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(id, c);
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.move_cursor(id, -1);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.move_cursor(id, 1);
                TextEditResult::Handled
            }

            Key::Home => {
                self.get_data_mut(id).cursor = 0;
                TextEditResult::Handled
            }

            Key::End => {
                let data = self.get_data_mut(id);
                data.cursor = data.text.chars().count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at the cursor.
    fn insert_char(&mut self, id: &str, c: char) {
        let data = self.get_data_mut(id);
        let byte_pos = char_to_byte_index(&data.text, data.cursor);
        data.text.insert(byte_pos, c);
        data.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        if data.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&data.text, data.cursor - 1);
        let end = char_to_byte_index(&data.text, data.cursor);
        data.text.replace_range(start..end, "");
        data.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        if data.cursor >= data.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&data.text, data.cursor);
        let end = char_to_byte_index(&data.text, data.cursor + 1);
        data.text.replace_range(start..end, "");
        true
    }

    /// Move the cursor by `delta` characters, clamped to the text.
    fn move_cursor(&mut self, id: &str, delta: isize) {
        let data = self.get_data_mut(id);
        let count = data.text.chars().count() as isize;
        data.cursor = (data.cursor as isize + delta).clamp(0, count) as usize;
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g. cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert a character index to a byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
