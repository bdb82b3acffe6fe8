use std::path::Path;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    ChangeDir,
    Copy,
    Rename,
    Write,
    Delete,
    Search,
    ShowPermissions,
    ChangePermissions,
    Exit,
}

impl MenuChoice {
    /// Display order: 1 through 9, then 0.
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::List,
        MenuChoice::ChangeDir,
        MenuChoice::Copy,
        MenuChoice::Rename,
        MenuChoice::Write,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::ShowPermissions,
        MenuChoice::ChangePermissions,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::List => 1,
            MenuChoice::ChangeDir => 2,
            MenuChoice::Copy => 3,
            MenuChoice::Rename => 4,
            MenuChoice::Write => 5,
            MenuChoice::Delete => 6,
            MenuChoice::Search => 7,
            MenuChoice::ShowPermissions => 8,
            MenuChoice::ChangePermissions => 9,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::List => "List directory",
            MenuChoice::ChangeDir => "Change directory",
            MenuChoice::Copy => "Copy file",
            MenuChoice::Rename => "Rename/move file",
            MenuChoice::Write => "Create/write file",
            MenuChoice::Delete => "Delete file",
            MenuChoice::Search => "Search file recursively",
            MenuChoice::ShowPermissions => "Show permissions",
            MenuChoice::ChangePermissions => "Change permissions (octal)",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_number(n: i64) -> Option<Self> {
        MenuChoice::ALL.into_iter().find(|c| i64::from(c.number()) == n)
    }
}

/// What the user typed at the `Choose: ` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Choice(MenuChoice),
    /// A number with no menu entry.
    Unknown(i64),
    NotANumber,
    Blank,
}

/// Interpret a menu line. Only the first word counts; the rest of the line
/// is discarded.
pub fn parse_selection(line: &str) -> Selection {
    let Some(word) = line.split_whitespace().next() else {
        return Selection::Blank;
    };
    match word.parse::<i64>() {
        Ok(n) => MenuChoice::from_number(n).map_or(Selection::Unknown(n), Selection::Choice),
        Err(_) => Selection::NotANumber,
    }
}

/// Header and option lines, without the trailing prompt.
pub fn menu_lines(cwd: &Path) -> Vec<String> {
    let mut lines = Vec::with_capacity(MenuChoice::ALL.len() + 1);
    lines.push(format!("Simple File Explorer - current: {}", cwd.display()));
    for c in MenuChoice::ALL {
        lines.push(format!("{}) {}", c.number(), c.label()));
    }
    lines
}

/// The full menu block as written before each selection: a blank separator
/// line, the menu, then the `Choose: ` prompt.
pub fn render_menu(cwd: &Path) -> String {
    let mut out = String::from("\n");
    for line in menu_lines(cwd) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("Choose: ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_snapshot() {
        insta::assert_snapshot!(menu_lines(Path::new("/srv/files")).join("\n"), @r"
        Simple File Explorer - current: /srv/files
        1) List directory
        2) Change directory
        3) Copy file
        4) Rename/move file
        5) Create/write file
        6) Delete file
        7) Search file recursively
        8) Show permissions
        9) Change permissions (octal)
        0) Exit
        ");
    }

    #[test]
    fn render_menu_frames_lines_with_prompt() {
        let out = render_menu(Path::new("/x"));
        assert!(out.starts_with("\nSimple File Explorer - current: /x\n1) List directory\n"));
        assert!(out.ends_with("0) Exit\nChoose: "));
    }

    #[test]
    fn numbers_round_trip() {
        for c in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_number(i64::from(c.number())), Some(c));
        }
        assert_eq!(MenuChoice::from_number(10), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn selection_parsing() {
        assert_eq!(parse_selection("1"), Selection::Choice(MenuChoice::List));
        assert_eq!(parse_selection("  0  "), Selection::Choice(MenuChoice::Exit));
        assert_eq!(parse_selection("7 extra words"), Selection::Choice(MenuChoice::Search));
        assert_eq!(parse_selection("42"), Selection::Unknown(42));
        assert_eq!(parse_selection("abc"), Selection::NotANumber);
        assert_eq!(parse_selection("3x"), Selection::NotANumber);
        assert_eq!(parse_selection("   "), Selection::Blank);
    }
}
