//! Focus traversal over the form's fixed control list.

use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use log::debug;

use crate::event::{Event, Key, Modifiers};

/// Tracks which control is focused and translates raw terminal input
/// into targeted events. The first control in the order starts focused.
#[derive(Debug, Default)]
pub struct FocusState {
    /// Controls in tab order.
    order: Vec<String>,
    /// Currently focused control id.
    current: Option<String>,
}

impl FocusState {
    pub fn new(order: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let order: Vec<String> = order.into_iter().map(Into::into).collect();
        let current = order.first().cloned();
        Self { order, current }
    }

    /// Get the currently focused control id.
    pub fn focused(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Check if a control is focused.
    pub fn is_focused(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    /// Focus the next control, wrapping at the end.
    /// Returns the `Blur`/`Focus` events the move produced.
    pub fn focus_next(&mut self) -> Vec<Event> {
        self.shift(1)
    }

    /// Focus the previous control, wrapping at the start.
    /// Returns the `Blur`/`Focus` events the move produced.
    pub fn focus_prev(&mut self) -> Vec<Event> {
        self.shift(-1)
    }

    fn shift(&mut self, delta: isize) -> Vec<Event> {
        if self.order.is_empty() {
            return Vec::new();
        }

        let len = self.order.len() as isize;
        let next = match self
            .current
            .as_ref()
            .and_then(|id| self.order.iter().position(|other| other == id))
        {
            Some(idx) => (idx as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };

        self.move_to(self.order[next].clone())
    }

    /// Emits `Blur` for the old control before `Focus` for the new one.
    fn move_to(&mut self, id: String) -> Vec<Event> {
        let mut events = Vec::new();
        if self.current.as_ref() == Some(&id) {
            return events;
        }

        if let Some(old) = self.current.take() {
            events.push(Event::Blur { target: old });
        }
        debug!("focus -> {id}");
        self.current = Some(id.clone());
        events.push(Event::Focus { target: id });
        events
    }

    /// Translate raw crossterm events into targeted events.
    ///
    /// Tab/Down advance focus, Shift+Tab/Up go back; everything else
    /// becomes a `Key` event aimed at the focused control.
    pub fn process_events(&mut self, raw: &[CrosstermEvent]) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    let Some(key) = Key::from_code(key_event.code) else {
                        continue;
                    };
                    let modifiers = Modifiers::from(key_event.modifiers);

                    match key {
                        Key::Tab => {
                            events.extend(self.focus_next());
                        }
                        // Shift+Tab arrives as BackTab with the shift modifier set
                        Key::BackTab => {
                            events.extend(self.focus_prev());
                        }
                        Key::Down if modifiers.none() => {
                            events.extend(self.focus_next());
                        }
                        Key::Up if modifiers.none() => {
                            events.extend(self.focus_prev());
                        }
                        _ => {
                            events.push(Event::Key {
                                target: self.current.clone(),
                                key,
                                modifiers,
                            });
                        }
                    }
                }
                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }
                _ => {}
            }
        }

        events
    }
}
