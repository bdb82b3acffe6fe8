//! One handler per menu entry: prompt for operands, run the operation,
//! print the outcome. Operation failures are printed and never returned;
//! only console I/O errors propagate.

use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::app::{SessionState, Settings};
use crate::fs_op::{self, FsOpError};
use crate::runner::console::Console;
use crate::runner::menu::MenuChoice;
use crate::runner::render;

/// Whether the loop should keep going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Exit was chosen, or input ended while a prompt was waiting.
    Exit,
}

pub const CONTENT_HINT: &str = "Enter content (single line). To add multi-line, use shell tools.";

/// Dispatch a menu choice to its handler.
pub fn handle_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut SessionState,
    settings: &Settings,
    choice: MenuChoice,
) -> io::Result<Flow> {
    tracing::trace!("menu choice {:?}", choice);
    match choice {
        MenuChoice::List => handle_list(console, session),
        MenuChoice::ChangeDir => handle_change_dir(console, session),
        MenuChoice::Copy => handle_copy(console, session),
        MenuChoice::Rename => handle_rename(console, session),
        MenuChoice::Write => handle_write(console, session),
        MenuChoice::Delete => handle_delete(console, session),
        MenuChoice::Search => handle_search(console, session, settings),
        MenuChoice::ShowPermissions => handle_show_permissions(console, session),
        MenuChoice::ChangePermissions => handle_change_permissions(console, session),
        MenuChoice::Exit => {
            console.say("Bye!")?;
            Ok(Flow::Exit)
        }
    }
}

fn report_failure<R: BufRead, W: Write>(console: &mut Console<R, W>, e: &FsOpError) -> io::Result<()> {
    tracing::debug!("operation failed ({:?}): {}", e.kind(), e);
    console.say(&e.to_string())
}

fn resolve_pair(session: &SessionState, a: &OsStr, b: &OsStr) -> Result<(PathBuf, PathBuf), FsOpError> {
    Ok((session.resolve(a)?, session.resolve(b)?))
}

fn handle_list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
) -> io::Result<Flow> {
    let Some(raw) = console.prompt_path("Path to list: ")? else {
        return Ok(Flow::Exit);
    };
    let shown = render::display_operand(&raw);
    let result = session
        .resolve_or_current(&raw)
        .map_err(FsOpError::from)
        .and_then(|p| fs_op::list_dir(&p));
    match result {
        Ok(entries) => {
            for line in render::listing_lines(&shown, &entries) {
                console.say(&line)?;
            }
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_change_dir<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut SessionState,
) -> io::Result<Flow> {
    let Some(raw) = console.prompt_path("Directory to change to: ")? else {
        return Ok(Flow::Exit);
    };
    match session.change_dir(&raw) {
        Ok(dir) => console.say(&format!("Changed directory to: {}", dir.display()))?,
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_copy<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
) -> io::Result<Flow> {
    let Some(src) = console.prompt_path("Source file: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(dst) = console.prompt_path("Destination path: ")? else {
        return Ok(Flow::Exit);
    };
    let result = resolve_pair(session, &src, &dst)
        .and_then(|(s, d)| fs_op::copy_file(&s, &d).map(|n| (s, d, n)));
    match result {
        Ok((s, d, n)) => {
            tracing::info!("copied {} bytes from {} to {}", n, s.display(), d.display());
            console.say("File copied successfully.")?;
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_rename<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
) -> io::Result<Flow> {
    let Some(old) = console.prompt_path("Old path: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(new) = console.prompt_path("New path: ")? else {
        return Ok(Flow::Exit);
    };
    let result = resolve_pair(session, &old, &new)
        .and_then(|(o, n)| fs_op::rename_path(&o, &n).map(|()| (o, n)));
    match result {
        Ok((o, n)) => {
            tracing::info!("renamed {} to {}", o.display(), n.display());
            console.say("Renamed/moved successfully.")?;
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_write<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
) -> io::Result<Flow> {
    let Some(raw) = console.prompt_path("File to create/write: ")? else {
        return Ok(Flow::Exit);
    };
    console.say(CONTENT_HINT)?;
    let Some(content) = console.read_bytes()? else {
        return Ok(Flow::Exit);
    };
    let result = session
        .resolve(&raw)
        .map_err(FsOpError::from)
        .and_then(|p| fs_op::write_file(&p, &content).map(|n| (p, n)));
    match result {
        Ok((p, n)) => {
            tracing::info!("wrote {} bytes to {}", n, p.display());
            console.say(&format!("File written: {}", render::display_operand(&raw)))?;
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
) -> io::Result<Flow> {
    let Some(raw) = console.prompt_path("File to remove: ")? else {
        return Ok(Flow::Exit);
    };
    let result = session
        .resolve(&raw)
        .map_err(FsOpError::from)
        .and_then(|p| fs_op::remove_entry(&p).map(|()| p));
    match result {
        Ok(p) => {
            tracing::info!("removed {}", p.display());
            console.say(&format!("Removed: {}", render::display_operand(&raw)))?;
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
    settings: &Settings,
) -> io::Result<Flow> {
    let Some(start) = console.prompt_path("Start directory: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(name) = console.prompt_path("Filename to search for (exact match): ")? else {
        return Ok(Flow::Exit);
    };
    let shown = render::display_operand(&start);
    let root = match session.resolve_or_current(&start) {
        Ok(p) => p,
        Err(e) => {
            report_failure(console, &FsOpError::from(e))?;
            return Ok(Flow::Continue);
        }
    };

    // Hits are printed as the walk finds them; a console failure stops
    // further printing and is returned once the walk ends.
    let mut write_err: Option<io::Error> = None;
    let result = fs_op::find_by_name(&root, &name, settings.search.follow_links, |hit| {
        if write_err.is_none() {
            if let Err(e) = console.say(&render::found_line(&shown, &root, hit)) {
                write_err = Some(e);
            }
        }
    });
    if let Some(e) = write_err {
        return Err(e);
    }

    match result {
        Ok(summary) => {
            if summary.skipped > 0 {
                tracing::debug!("search under {} skipped {} entries", root.display(), summary.skipped);
            }
            if !summary.found_any() {
                console.say(&render::no_matches_line(&shown))?;
            }
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_show_permissions<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
) -> io::Result<Flow> {
    let Some(raw) = console.prompt_path("Path: ")? else {
        return Ok(Flow::Exit);
    };
    let result = session
        .resolve(&raw)
        .map_err(FsOpError::from)
        .and_then(|p| fs_op::inspect_permissions(&p));
    match result {
        Ok(info) => {
            for line in info.lines() {
                console.say(&line)?;
            }
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn handle_change_permissions<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &SessionState,
) -> io::Result<Flow> {
    let Some(raw) = console.prompt_path("Path: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(mode_text) = console.prompt("Enter mode in octal (e.g. 0755): ")? else {
        return Ok(Flow::Exit);
    };
    // The mode is validated before the path is touched.
    let result = fs_op::parse_octal_mode(&mode_text).and_then(|mode| {
        let p = session.resolve(&raw)?;
        fs_op::change_permissions(&p, mode).map(|()| (p, mode))
    });
    match result {
        Ok((p, mode)) => {
            tracing::info!("changed mode of {} to {:o}", p.display(), mode);
            console.say("Permissions changed.")?;
        }
        Err(e) => report_failure(console, &e)?,
    }
    Ok(Flow::Continue)
}
