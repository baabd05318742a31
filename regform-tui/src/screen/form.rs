//! The registration form screen.
//!
//! Owns the raw field text, the per-field displayed errors and the focus
//! and editing state. Validation happens on focus loss; submit gating is
//! recomputed on every change to any field.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use log::{debug, info};

use regform_lib::{Field, RegistrationInput};

use crate::event::{Event, Key};
use crate::focus::FocusState;
use crate::input::TextInputState;

/// Id of the submit control.
pub const SUBMIT_ID: &str = "submit";

const MARGIN: u16 = 2;
const LABEL_WIDTH: usize = 27;
const INPUT_WIDTH: usize = 30;
const FIRST_ROW: u16 = 3;

/// What the form asks the app loop to do after handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Keep running the form.
    Continue,
    /// All fields valid and the submit control was activated.
    Submitted,
    /// User asked to quit.
    Exit,
}

pub struct FormScreen {
    input: RegistrationInput,
    errors: HashMap<Field, &'static str>,
    focus: FocusState,
    text: TextInputState,
    can_submit: bool,
}

impl FormScreen {
    pub fn new() -> Self {
        let order: Vec<&'static str> = Field::ALL
            .iter()
            .map(|field| field.id())
            .chain([SUBMIT_ID])
            .collect();

        let mut text = TextInputState::new();
        for field in Field::ALL {
            text.set(field.id(), "");
        }

        Self {
            input: RegistrationInput::new(),
            errors: HashMap::new(),
            focus: FocusState::new(order),
            text,
            can_submit: false,
        }
    }

    /// Current text of a field.
    pub fn value(&self, field: Field) -> &str {
        self.input.value(field)
    }

    /// Displayed error for a field, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Whether the submit control is currently enabled.
    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    /// Id of the focused control.
    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    fn field_ids() -> [&'static str; 5] {
        Field::ALL.map(|field| field.id())
    }

    /// Translate raw terminal events and run them through the form.
    pub fn dispatch(&mut self, raw: &[crossterm::event::Event]) -> FormOutcome {
        let events = self.focus.process_events(raw);
        let events = self.text.process_events(&events, &Self::field_ids());

        for event in &events {
            let outcome = self.handle_event(event);
            if outcome != FormOutcome::Continue {
                return outcome;
            }
        }
        FormOutcome::Continue
    }

    /// Apply one event to the form state.
    pub fn handle_event(&mut self, event: &Event) -> FormOutcome {
        match event {
            // Focus loss triggers the field's validation display
            Event::Blur { target } => {
                if let Some(field) = Field::from_id(target) {
                    self.validate_field(field);
                }
            }

            Event::Change { target, text } => {
                if let Some(field) = Field::from_id(target) {
                    self.input.set(field, text.clone());
                    // Typing clears the displayed error until the next blur
                    self.errors.remove(&field);
                    self.can_submit = self.input.can_submit();
                    debug!("{field} changed, can_submit={}", self.can_submit);
                }
            }

            // Enter inside a field advances focus, validating on the way out
            Event::Submit { target } => {
                if Field::from_id(target).is_some() {
                    for moved in self.focus.focus_next() {
                        self.handle_event(&moved);
                    }
                }
            }

            Event::Key {
                key: Key::Escape, ..
            } => return FormOutcome::Exit,

            Event::Key {
                key: Key::Char('c'),
                modifiers,
                ..
            } if modifiers.ctrl => return FormOutcome::Exit,

            Event::Key {
                target: Some(target),
                key: Key::Enter,
                ..
            } if target == SUBMIT_ID => return self.try_submit(),

            _ => {}
        }
        FormOutcome::Continue
    }

    fn validate_field(&mut self, field: Field) {
        let result = regform_lib::validate(field, self.input.value(field));
        match result.first_error() {
            Some(error) => {
                debug!("{field} failed validation");
                self.errors.insert(field, error.message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn try_submit(&mut self) -> FormOutcome {
        if !self.can_submit {
            debug!("submit ignored, form incomplete");
            return FormOutcome::Continue;
        }
        info!("registration submitted");
        FormOutcome::Submitted
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&self, w: &mut impl Write) -> io::Result<()> {
        queue!(w, Clear(ClearType::All), cursor::Hide)?;

        queue!(
            w,
            cursor::MoveTo(MARGIN, 1),
            SetAttribute(Attribute::Bold),
            Print("Registration Form"),
            SetAttribute(Attribute::Reset),
        )?;

        for (i, field) in Field::ALL.into_iter().enumerate() {
            self.render_field(w, field, FIRST_ROW + i as u16)?;
        }

        let submit_row = FIRST_ROW + Field::ALL.len() as u16 + 1;
        self.render_submit(w, submit_row)?;

        queue!(
            w,
            cursor::MoveTo(MARGIN, submit_row + 2),
            SetForegroundColor(Color::DarkGrey),
            Print("Tab/Down next  Shift+Tab/Up previous  Enter advance/submit  Esc quit"),
            ResetColor,
        )?;

        self.place_cursor(w)?;
        w.flush()
    }

    fn render_field(&self, w: &mut impl Write, field: Field, row: u16) -> io::Result<()> {
        let focused = self.focus.is_focused(field.id());
        let error = self.error(field);

        queue!(
            w,
            cursor::MoveTo(MARGIN, row),
            SetAttribute(Attribute::Bold),
            Print(format!("{:<width$}", field.label(), width = LABEL_WIDTH)),
            SetAttribute(Attribute::Reset),
        )?;

        let data = self.text.get_data(field.id());
        let text = data.map(|d| d.text.as_str()).unwrap_or("");
        let cursor = data.map(|d| d.cursor).unwrap_or(0);
        let (shown, _) = visible_window(text, cursor);

        let background = if error.is_some() {
            Color::DarkRed
        } else if focused {
            Color::DarkBlue
        } else {
            Color::DarkGrey
        };

        queue!(
            w,
            cursor::MoveTo(input_column(), row),
            SetBackgroundColor(background),
            SetForegroundColor(Color::White),
            Print(format!("{:<width$}", shown, width = INPUT_WIDTH)),
            ResetColor,
        )?;

        if let Some(message) = error {
            queue!(
                w,
                cursor::MoveTo(error_column(), row),
                SetForegroundColor(Color::Red),
                Print(message),
                ResetColor,
            )?;
        }

        Ok(())
    }

    fn render_submit(&self, w: &mut impl Write, row: u16) -> io::Result<()> {
        let focused = self.focus.is_focused(SUBMIT_ID);

        queue!(w, cursor::MoveTo(input_column(), row))?;
        if self.can_submit {
            queue!(
                w,
                SetBackgroundColor(Color::DarkGreen),
                SetForegroundColor(Color::White),
                SetAttribute(Attribute::Bold),
            )?;
        } else {
            queue!(w, SetForegroundColor(Color::DarkGrey))?;
        }
        if focused {
            queue!(w, SetAttribute(Attribute::Reverse))?;
        }
        queue!(w, Print("[ Submit ]"), SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }

    /// Show the terminal cursor inside the focused field.
    fn place_cursor(&self, w: &mut impl Write) -> io::Result<()> {
        let Some(field) = self.focus.focused().and_then(Field::from_id) else {
            return Ok(());
        };
        let Some(row) = Field::ALL.iter().position(|&other| other == field) else {
            return Ok(());
        };

        let data = self.text.get_data(field.id());
        let text = data.map(|d| d.text.as_str()).unwrap_or("");
        let cursor = data.map(|d| d.cursor).unwrap_or(0);
        let (_, offset) = visible_window(text, cursor);

        queue!(
            w,
            cursor::MoveTo(input_column() + offset as u16, FIRST_ROW + row as u16),
            cursor::Show,
        )?;
        Ok(())
    }
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn input_column() -> u16 {
    MARGIN + LABEL_WIDTH as u16 + 1
}

fn error_column() -> u16 {
    input_column() + INPUT_WIDTH as u16 + 2
}

/// Slice of the text that fits the input, keeping the cursor visible.
/// Returns the visible text and the cursor's offset within it.
fn visible_window(text: &str, cursor: usize) -> (String, usize) {
    let start = cursor.saturating_sub(INPUT_WIDTH - 1);
    let shown: String = text.chars().skip(start).take(INPUT_WIDTH).collect();
    (shown, cursor - start)
}
