use anyhow::Result;
use clap::Parser;
use console::Term;

use verbump::changelog::FileChangelog;
use verbump::config;
use verbump::git::Git2Vcs;
use verbump::resolver::VersionResolver;
use verbump::ui::{self, Theme};
use verbump::wizard::WizardSession;

#[derive(clap::Parser)]
#[command(
    name = "verbump",
    about = "Interactive wizard to bump a semantic version, update the changelog and commit"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("verbump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Loading config: {}", e));
            std::process::exit(1);
        }
    };

    let mut resolver = VersionResolver::new(config.version_path()?, config.changelog_path()?);
    let changelog = FileChangelog::new(config.changelog_path()?);

    let vcs = match Git2Vcs::open(".") {
        Ok(vcs) => vcs,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let theme = Theme::default();
    let term = Term::stdout();
    let mut session = WizardSession::new(&mut resolver, &changelog, &vcs);

    loop {
        term.clear_screen()?;
        term.write_str(&ui::render(&session, &theme))?;

        if session.is_terminal() {
            break;
        }

        let key = term.read_key()?;
        if let Some(command) = ui::command_for_key(session.state(), &key) {
            session.handle(command);
        }
    }

    if session.last_error().is_some() {
        std::process::exit(1);
    }

    Ok(())
}
