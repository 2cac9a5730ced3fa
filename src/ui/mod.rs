//! User interface module - key handling and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure per-state rendering
//! - This module - Theme and terminal-key-to-command mapping

use console::{Key, Style};

use crate::wizard::{Command, WizardState};

pub mod formatter;

pub use formatter::{display_error, render};

/// Injected styling for wizard output
///
/// Collecting the styles here keeps presentation out of the state machine
/// and lets tests render without ANSI noise.
pub struct Theme {
    pub highlight: Style,
    pub prompt: Style,
    pub error: Style,
    pub success: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            highlight: Style::new().cyan().bold(),
            prompt: Style::new().bold(),
            error: Style::new().red(),
            success: Style::new().green(),
        }
    }
}

impl Theme {
    /// Style-free theme for tests and dumb terminals
    pub fn plain() -> Self {
        Theme {
            highlight: Style::new(),
            prompt: Style::new(),
            error: Style::new(),
            success: Style::new(),
        }
    }
}

/// Map a terminal key to a wizard command, given the current state
///
/// The mapping is state-dependent: `y`/`n` are answers in the confirmation
/// states but ordinary text while a description is being typed. Keys with no
/// meaning in the current state map to `None` and the wizard re-renders
/// unchanged.
pub fn command_for_key(state: WizardState, key: &Key) -> Option<Command> {
    // Interrupt is accepted everywhere.
    if matches!(key, Key::Escape | Key::CtrlC) {
        return Some(Command::Interrupt);
    }

    match state {
        WizardState::SelectingBumpKind => match key {
            Key::ArrowUp | Key::Char('k') => Some(Command::MoveUp),
            Key::ArrowDown | Key::Char('j') => Some(Command::MoveDown),
            Key::Enter => Some(Command::Confirm),
            Key::Char('q') => Some(Command::Interrupt),
            _ => None,
        },
        WizardState::EnteringShortDescription | WizardState::EnteringLongDescription => match key {
            Key::Enter => Some(Command::Confirm),
            Key::Backspace => Some(Command::Backspace),
            Key::Char(c) => Some(Command::Input(*c)),
            _ => None,
        },
        WizardState::ConfirmingTag | WizardState::ConfirmingCommit => match key {
            Key::Char('y') | Key::Char('Y') => Some(Command::Affirm),
            Key::Char('n') | Key::Char('N') => Some(Command::Decline),
            Key::Char('q') => Some(Command::Interrupt),
            _ => None,
        },
        WizardState::Terminal => None,
    }
}
