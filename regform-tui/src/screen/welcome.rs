//! The placeholder screen shown after a successful registration.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{Event as CrosstermEvent, KeyEventKind},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::event::{Key, Modifiers};

pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn render(&self, w: &mut impl Write) -> io::Result<()> {
        queue!(w, Clear(ClearType::All), cursor::Hide)?;
        queue!(
            w,
            cursor::MoveTo(2, 1),
            SetForegroundColor(Color::Green),
            SetAttribute(Attribute::Bold),
            Print("Registration Successful!"),
            SetAttribute(Attribute::Reset),
            ResetColor,
        )?;
        queue!(
            w,
            cursor::MoveTo(2, 3),
            SetForegroundColor(Color::Blue),
            Print("Welcome to the next UI!"),
            ResetColor,
        )?;
        queue!(
            w,
            cursor::MoveTo(2, 5),
            SetForegroundColor(Color::DarkGrey),
            Print("Press Enter or Esc to exit."),
            ResetColor,
        )?;
        w.flush()
    }

    /// Returns true when the user dismissed the screen.
    pub fn dispatch(&self, raw: &[CrosstermEvent]) -> bool {
        raw.iter().any(|event| match event {
            CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                let modifiers = Modifiers::from(key_event.modifiers);
                match Key::from_code(key_event.code) {
                    Some(Key::Enter | Key::Escape) => true,
                    Some(Key::Char('c')) => modifiers.ctrl,
                    _ => false,
                }
            }
            _ => false,
        })
    }
}
