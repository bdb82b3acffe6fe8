use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::app::{SessionState, Settings};
use crate::runner::console::Console;
use crate::runner::handlers::{handle_choice, Flow};
use crate::runner::menu::{parse_selection, render_menu, Selection};

/// Run the explorer on the process's stdin/stdout until Exit is chosen or
/// input ends.
pub fn run_app(settings: &Settings) -> anyhow::Result<()> {
    let mut session = SessionState::from_process();
    if let Some(dir) = &settings.start_dir {
        session
            .enter(dir)
            .with_context(|| format!("cannot start in {}", dir.display()))?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_session(&mut console, &mut session, settings)
}

/// The menu loop. Each iteration shows the menu, reads a selection and runs
/// exactly one operation to completion before the next prompt.
///
/// Operation failures are printed by the handlers; only console I/O errors
/// end the loop early.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut SessionState,
    settings: &Settings,
) -> anyhow::Result<()> {
    tracing::debug!("session started in {}", session.cwd().display());
    loop {
        console
            .write_str(&render_menu(session.cwd()))
            .context("failed to write menu")?;

        let Some(line) = console.read_line().context("failed to read selection")? else {
            tracing::debug!("end of input, leaving");
            return Ok(());
        };

        match parse_selection(&line) {
            Selection::Blank => {}
            Selection::NotANumber => console.say("Invalid input. Try again.")?,
            Selection::Unknown(n) => {
                tracing::trace!("unknown menu number {}", n);
                console.say("Invalid choice")?;
            }
            Selection::Choice(choice) => {
                if handle_choice(console, session, settings, choice)? == Flow::Exit {
                    return Ok(());
                }
            }
        }
    }
}
