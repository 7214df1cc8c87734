use crate::config::{AppConfig, InterfaceKind};
use crate::error::Result;
use crate::frontend::{ConsoleMenu, Dashboard, Terminal};
use crate::sample::seed_sample_data;
use gradebook::Roster;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Starts the configured front-end over a fresh roster on stdin/stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let kind = match config.interface {
        InterfaceKind::Ask => {
            let mut term = Terminal::new(io::stdin().lock(), io::stdout());
            choose_interface(&mut term)?
        }
        other => other,
    };
    info!("Launching '{}' interface.", kind);

    let mut roster = Roster::new();
    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    match kind {
        InterfaceKind::Console => {
            ConsoleMenu::new(&mut roster, stdin, stdout).run()?;
        }
        _ => {
            launch_dashboard(&mut roster, config.sample_data, stdin, stdout)?;
        }
    }
    Ok(())
}

/// Asks which front-end to start. Anything other than a valid choice falls
/// back to the dashboard.
pub fn choose_interface<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
) -> Result<InterfaceKind> {
    term.say("Choose interface:")?;
    term.say("1. Console Interface")?;
    term.say("2. Dashboard Interface")?;
    let answer = term.prompt("Enter choice (1 or 2): ")?;

    // A number outside 1..=2 is a bad choice; anything that is not a number is bad input.
    let kind = match answer.as_deref().map(|a| a.trim().parse::<i64>()) {
        Some(Ok(1)) => InterfaceKind::Console,
        Some(Ok(2)) => InterfaceKind::Dashboard,
        Some(Ok(_)) => {
            term.say("Invalid choice. Starting dashboard interface...")?;
            InterfaceKind::Dashboard
        }
        Some(Err(_)) | None => {
            term.say("Invalid input. Starting dashboard interface...")?;
            InterfaceKind::Dashboard
        }
    };
    Ok(kind)
}

fn launch_dashboard<R: BufRead, W: Write>(
    roster: &mut Roster,
    sample_data: bool,
    input: R,
    output: W,
) -> Result<W> {
    let seed_error = if sample_data {
        seed_sample_data(roster).err()
    } else {
        None
    };

    let dashboard = Dashboard::new(roster, input, output);
    let dashboard = match seed_error {
        Some(e) => {
            warn!("Failed to seed sample data: {}", e);
            dashboard.with_status(format!("Error adding sample data: {}", e))
        }
        None => dashboard,
    };
    dashboard.run()
}
