//! Pure rendering of wizard screens.
//!
//! Each state renders to a complete string; the caller decides where it goes.
//! Nothing here mutates the session.

use crate::git::tag_name;
use crate::ui::Theme;
use crate::version::BumpKind;
use crate::wizard::{WizardSession, WizardState};

/// Render the screen for the session's current state
pub fn render(session: &WizardSession, theme: &Theme) -> String {
    match session.state() {
        WizardState::SelectingBumpKind => render_selection(session, theme),
        WizardState::EnteringShortDescription => format!(
            "{}\n> {}\n",
            theme.prompt.apply_to("Short description:"),
            session.short_description()
        ),
        WizardState::EnteringLongDescription => format!(
            "{}\n> {}\n",
            theme.prompt.apply_to("Long description (optional):"),
            session.long_description()
        ),
        WizardState::ConfirmingTag => render_confirm_tag(session, theme),
        WizardState::ConfirmingCommit => render_confirm_commit(session, theme),
        WizardState::Terminal => render_terminal(session, theme),
    }
}

fn render_selection(session: &WizardSession, theme: &Theme) -> String {
    let mut screen = format!(
        "{}\n\n",
        theme
            .prompt
            .apply_to("Select bump kind (↑/↓ to move, enter to select):")
    );

    for (i, kind) in BumpKind::ALL.iter().enumerate() {
        if i == session.cursor() {
            screen.push_str(&format!("{}\n", theme.highlight.apply_to(format!("> {}", kind))));
        } else {
            screen.push_str(&format!("  {}\n", kind));
        }
    }

    screen
}

fn render_confirm_tag(session: &WizardSession, theme: &Theme) -> String {
    match session.bumped_version() {
        Some(version) => format!(
            "{}\n\nCreate tag {}? (y/n)\n",
            theme
                .success
                .apply_to(format!("Version bumped to {}", version)),
            tag_name(&version)
        ),
        None => "Create tag? (y/n)\n".to_string(),
    }
}

fn render_confirm_commit(session: &WizardSession, theme: &Theme) -> String {
    let kind = session
        .selected_kind()
        .map(|k| k.to_string())
        .unwrap_or_default();

    format!(
        "{}\n  Bump kind:         {}\n  Short description: {}\n  Long description:  {}\n\nWrite changelog and commit? (y/n)\n",
        theme.prompt.apply_to("About to record:"),
        kind,
        session.short_description(),
        session.long_description()
    )
}

fn render_terminal(session: &WizardSession, theme: &Theme) -> String {
    match session.last_error() {
        Some(err) => format!("{}\n", theme.error.apply_to(format!("Error: {}", err))),
        None => format!("{}\n", theme.success.apply_to("Changes saved successfully!")),
    }
}

/// Format and print an error message outside the wizard loop
pub fn display_error(message: &str) {
    eprintln!("{} {}", console::style("ERROR:").red().bold(), message);
}
