//! Interactive wizard state machine
//!
//! One session walks forward through a fixed state sequence, capturing a bump
//! kind and two descriptions, then branches on user confirmation for tagging
//! and committing. There is no backward transition; the only escape hatch is
//! the global interrupt, which reaches Terminal without side effects.
//!
//! Every `(state, command)` pair is total: commands a state does not
//! recognize leave the session unchanged.

use crate::changelog::Changelog;
use crate::error::{Result, VerbumpError};
use crate::git::Vcs;
use crate::resolver::VersionResolver;
use crate::version::{BumpKind, Version};

/// Wizard states in forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    SelectingBumpKind,
    EnteringShortDescription,
    EnteringLongDescription,
    ConfirmingTag,
    ConfirmingCommit,
    Terminal,
}

/// Input events the wizard understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    Confirm,
    Affirm,
    Decline,
    Input(char),
    Backspace,
    Interrupt,
}

/// Mutable state for one interactive run
pub struct WizardSession<'a> {
    resolver: &'a mut VersionResolver,
    changelog: &'a dyn Changelog,
    vcs: &'a dyn Vcs,
    state: WizardState,
    cursor: usize,
    kind: Option<BumpKind>,
    short_desc: String,
    long_desc: String,
    bumped: Option<Version>,
    error: Option<VerbumpError>,
}

impl<'a> WizardSession<'a> {
    pub fn new(
        resolver: &'a mut VersionResolver,
        changelog: &'a dyn Changelog,
        vcs: &'a dyn Vcs,
    ) -> Self {
        WizardSession {
            resolver,
            changelog,
            vcs,
            state: WizardState::SelectingBumpKind,
            cursor: 0,
            kind: None,
            short_desc: String::new(),
            long_desc: String::new(),
            bumped: None,
            error: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state == WizardState::Terminal
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_kind(&self) -> Option<BumpKind> {
        self.kind
    }

    pub fn short_description(&self) -> &str {
        &self.short_desc
    }

    pub fn long_description(&self) -> &str {
        &self.long_desc
    }

    /// The version written by this session's bump, once it has happened
    pub fn bumped_version(&self) -> Option<Version> {
        self.bumped
    }

    pub fn last_error(&self) -> Option<&VerbumpError> {
        self.error.as_ref()
    }

    /// Advance the session by one command
    pub fn handle(&mut self, command: Command) {
        // Interrupt short-circuits every non-terminal state with no side
        // effects pending.
        if command == Command::Interrupt {
            if self.state != WizardState::Terminal {
                self.state = WizardState::Terminal;
            }
            return;
        }

        match self.state {
            WizardState::SelectingBumpKind => self.handle_selecting(command),
            WizardState::EnteringShortDescription => self.handle_short_desc(command),
            WizardState::EnteringLongDescription => self.handle_long_desc(command),
            WizardState::ConfirmingTag => self.handle_confirm_tag(command),
            WizardState::ConfirmingCommit => self.handle_confirm_commit(command),
            WizardState::Terminal => {}
        }
    }

    fn handle_selecting(&mut self, command: Command) {
        let len = BumpKind::ALL.len();
        match command {
            Command::MoveUp => self.cursor = (self.cursor + len - 1) % len,
            Command::MoveDown => self.cursor = (self.cursor + 1) % len,
            Command::Confirm => {
                self.kind = Some(BumpKind::ALL[self.cursor]);
                self.state = WizardState::EnteringShortDescription;
            }
            _ => {}
        }
    }

    fn handle_short_desc(&mut self, command: Command) {
        match command {
            Command::Input(c) => self.short_desc.push(c),
            Command::Backspace => {
                self.short_desc.pop();
            }
            // Validation gate, not an error: an empty short description
            // simply does not advance.
            Command::Confirm if !self.short_desc.is_empty() => {
                self.state = WizardState::EnteringLongDescription;
            }
            _ => {}
        }
    }

    fn handle_long_desc(&mut self, command: Command) {
        match command {
            Command::Input(c) => self.long_desc.push(c),
            Command::Backspace => {
                self.long_desc.pop();
            }
            Command::Confirm => {
                let Some(kind) = self.kind else { return };
                match self.resolver.bump(kind) {
                    Ok(version) => {
                        self.bumped = Some(version);
                        self.state = WizardState::ConfirmingTag;
                    }
                    // A failed bump must never be followed by tag/commit
                    // prompts.
                    Err(e) => {
                        self.error = Some(e);
                        self.state = WizardState::Terminal;
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_tag(&mut self, command: Command) {
        match command {
            Command::Affirm => {
                if let Some(version) = self.bumped {
                    // A tag failure is recorded but the commit prompt still
                    // follows.
                    if let Err(e) = self.vcs.tag(&version) {
                        self.error = Some(e);
                    }
                }
                self.state = WizardState::ConfirmingCommit;
            }
            Command::Decline => self.state = WizardState::ConfirmingCommit,
            _ => {}
        }
    }

    fn handle_confirm_commit(&mut self, command: Command) {
        match command {
            Command::Affirm => {
                if let Err(e) = self.run_commit_sequence() {
                    self.error = Some(e);
                }
                self.state = WizardState::Terminal;
            }
            Command::Decline => self.state = WizardState::Terminal,
            _ => {}
        }
    }

    fn run_commit_sequence(&mut self) -> Result<()> {
        // Both are set before ConfirmingCommit is reachable.
        let (version, kind) = match (self.bumped, self.kind) {
            (Some(version), Some(kind)) => (version, kind),
            _ => return Ok(()),
        };

        self.changelog
            .update(&version, kind, &self.short_desc, &self.long_desc)?;
        self.vcs.commit(&self.short_desc)?;
        Ok(())
    }
}
