use std::io::{BufRead, ErrorKind, Write};

use crate::core::{Enrollment, Result, RosterError, RosterStore};
use crate::shell::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
}

/// One run of the registration program: the shell, the store and the roster
/// owned between them
pub struct Session<R, W> {
    shell: Shell<R, W>,
    store: RosterStore,
    roster: Vec<Enrollment>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(shell: Shell<R, W>, store: RosterStore) -> Self {
        Session {
            shell,
            store,
            roster: Vec::new(),
            state: SessionState::Running,
        }
    }

    /// Create a session with the roster loaded from the store
    pub fn start(shell: Shell<R, W>, store: RosterStore) -> Result<Self> {
        let mut session = Self::new(shell, store);
        session.load_roster()?;
        Ok(session)
    }

    pub fn roster(&self) -> &[Enrollment] {
        &self.roster
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_shell(self) -> Shell<R, W> {
        self.shell
    }

    /// Replace the roster with the file contents.
    ///
    /// A missing file leaves an empty roster; any other failure keeps the
    /// current roster. Both are reported, neither is returned.
    pub fn load_roster(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(roster) => self.roster = roster,
            Err(e @ RosterError::NotFound(_)) => {
                log::info!("{}, starting with an empty roster", e);
                self.shell.show_error(&e.to_string(), Some(&e))?;
                self.roster = Vec::new();
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", self.store.path().display(), e);
                self.shell.show_error("There was a general error!", Some(&e))?;
            }
        }
        Ok(())
    }

    pub fn save_roster(&mut self) -> Result<()> {
        match self.store.save(&self.roster) {
            Ok(()) => {
                self.shell.print_line("The following roster was saved to file:")?;
                self.shell.show_roster(&self.roster)?;
            }
            Err(e @ RosterError::Serialization(_)) => {
                log::warn!("Failed to serialize roster: {}", e);
                self.shell
                    .show_error("Please check that data is valid JSON format", Some(&e))?;
            }
            Err(e) => {
                log::warn!("Failed to save {}: {}", self.store.path().display(), e);
                self.shell.show_error("A general error has occurred!", Some(&e))?;
            }
        }
        Ok(())
    }

    /// Show the menu and act on one choice
    pub fn step(&mut self) -> Result<SessionState> {
        self.shell.show_menu()?;

        let choice = match self.shell.read_menu_choice() {
            Ok(choice) => choice,
            Err(RosterError::EndOfInput) => {
                log::debug!("Input closed at the menu prompt");
                return self.exit();
            }
            Err(RosterError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                // the bad line is already consumed, carry on with the next one
                let e = RosterError::Io(e);
                self.shell
                    .show_error("There was a general error with your input data!", Some(&e))?;
                return Ok(self.state);
            }
            Err(e) => return Err(e),
        };

        match choice.as_str() {
            "1" => {
                let roster = std::mem::take(&mut self.roster);
                self.roster = self.shell.read_enrollment(roster)?;
                self.shell.show_roster(&self.roster)?;
            }
            "2" => self.shell.show_roster(&self.roster)?,
            "3" => self.save_roster()?,
            "4" => return self.exit(),
            _ => self.shell.print_line("Please select a valid menu choice!")?,
        }

        Ok(self.state)
    }

    fn exit(&mut self) -> Result<SessionState> {
        self.state = SessionState::Exited;
        self.shell.print_line("Program Ended")?;
        Ok(self.state)
    }

    /// Loop until the user exits. Nothing is saved on the way out.
    pub fn run(&mut self) -> Result<()> {
        while self.state == SessionState::Running {
            self.step()?;
        }
        Ok(())
    }
}
