//! The synchronous application loop.

use log::info;

use crate::error::AppError;
use crate::screen::{FormOutcome, FormScreen, WelcomeScreen};
use crate::terminal::Terminal;

/// Which screen is active.
enum Screen {
    Form(FormScreen),
    Welcome(WelcomeScreen),
}

pub struct App {
    terminal: Terminal,
    screen: Screen,
}

impl App {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            terminal: Terminal::new()?,
            screen: Screen::Form(FormScreen::new()),
        })
    }

    /// Render, poll and dispatch until the user exits.
    ///
    /// The loop blocks on terminal input; nothing here is asynchronous.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("registration form started");

        loop {
            let transition = match &mut self.screen {
                Screen::Form(form) => {
                    form.render(self.terminal.stdout())?;
                    let raw = self.terminal.poll(None)?;
                    match form.dispatch(&raw) {
                        FormOutcome::Continue => None,
                        FormOutcome::Submitted => {
                            info!("switching to the welcome screen");
                            Some(Screen::Welcome(WelcomeScreen))
                        }
                        FormOutcome::Exit => break,
                    }
                }
                Screen::Welcome(welcome) => {
                    welcome.render(self.terminal.stdout())?;
                    let raw = self.terminal.poll(None)?;
                    if welcome.dispatch(&raw) {
                        break;
                    }
                    None
                }
            };

            if let Some(next) = transition {
                self.screen = next;
            }
        }

        info!("exiting");
        Ok(())
    }
}
