//! The single-letter command alphabet

use std::fmt;

/// Every command `archie` understands, keyed by one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Update,
    Install,
    Remove,
    Purge,
    CleanCache,
    CleanOrphans,
    Search,
    Help,
    Quit,
}

/// What a command asks for before it can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandPrompt {
    /// Prompt text shown to the user
    pub text: &'static str,
    /// Whether package-name tab-completion is offered (interactive mode only)
    pub completes: bool,
}

impl Command {
    /// All commands in help-listing order
    pub const ALL: [Self; 9] = [
        Self::Update,
        Self::Install,
        Self::Remove,
        Self::Purge,
        Self::CleanCache,
        Self::CleanOrphans,
        Self::Search,
        Self::Help,
        Self::Quit,
    ];

    /// Look up a command by its key
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.key() == c)
    }

    /// Exact match for `--exec`; `q` is not an exec command
    pub fn from_argument(arg: &str) -> Option<Self> {
        let mut chars = arg.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).filter(|cmd| *cmd != Self::Quit),
            _ => None,
        }
    }

    pub const fn key(self) -> char {
        match self {
            Self::Update => 'u',
            Self::Install => 'i',
            Self::Remove => 'r',
            Self::Purge => 'p',
            Self::CleanCache => 'c',
            Self::CleanOrphans => 'o',
            Self::Search => 's',
            Self::Help => 'h',
            Self::Quit => 'q',
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Update => "Update the system",
            Self::Install => "Install a package",
            Self::Remove => "Remove a package",
            Self::Purge => "Purge a package",
            Self::CleanCache => "Clean cache",
            Self::CleanOrphans => "Clean orphaned packages",
            Self::Search => "Search for a package",
            Self::Help => "Help",
            Self::Quit => "Quit",
        }
    }

    /// Operand prompt, for commands that need a package name or query
    pub const fn operand(self) -> Option<OperandPrompt> {
        let (text, completes) = match self {
            Self::Install => ("Enter package name to install: ", true),
            Self::Remove => ("Enter package name to remove: ", true),
            Self::Purge => ("Enter package name to purge: ", true),
            Self::Search => ("Enter package name to search: ", false),
            _ => return None,
        };
        Some(OperandPrompt { text, completes })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The interactive help listing
pub fn help_text() -> String {
    let mut text = String::from("Available options are:\n");
    for cmd in Command::ALL {
        text.push_str(&format!("{} - {}\n", cmd.key(), cmd.description()));
    }
    text
}

/// The `--help` usage text
pub fn usage_text() -> String {
    let mut text = String::from(
        "Usage:\n\
         \x20         archie\n\
         \x20         archie <flag> [...]\n\n\
         flags:\n\
         \x20         archie {-H --help}\n\
         \x20         archie {-V --version}\n\
         \x20         archie {-E --exec} <command>\n\n\
         commands:\n",
    );
    for cmd in Command::ALL
        .into_iter()
        .filter(|cmd| !matches!(cmd, Command::Help | Command::Quit))
    {
        text.push_str(&format!(
            "          archie {{-E --exec}} {} ({})\n",
            cmd.key(),
            cmd.description().to_lowercase()
        ));
    }
    text
}
