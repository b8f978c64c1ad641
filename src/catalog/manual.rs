//! Manual pages for `man <command>`.

use std::collections::HashMap;

const HELP: &[&str] = &[
    "NAME",
    "       help - display available commands",
    "",
    "SYNOPSIS",
    "       help",
    "",
    "DESCRIPTION",
    "       Shows a list of all available commands with brief descriptions.",
];

const CLEAR: &[&str] = &[
    "NAME",
    "       clear - clear the terminal screen",
    "",
    "SYNOPSIS",
    "       clear",
    "",
    "DESCRIPTION",
    "       Clears all content from the terminal screen.",
    "",
    "SHORTCUTS",
    "       Ctrl+L      Also clears the screen",
];

const ABOUT: &[&str] = &[
    "NAME",
    "       about - display information about XO_Works",
    "",
    "SYNOPSIS",
    "       about",
    "",
    "DESCRIPTION",
    "       Shows company information about XO_Works.",
];

const SERVICES: &[&str] = &[
    "NAME",
    "       services - list available services",
    "",
    "SYNOPSIS",
    "       services",
    "",
    "DESCRIPTION",
    "       Displays a list of services offered by XO_Works.",
];

const CONTACT: &[&str] = &[
    "NAME",
    "       contact - show contact information",
    "",
    "SYNOPSIS",
    "       contact",
    "",
    "DESCRIPTION",
    "       Displays contact information for XO_Works.",
];

const MAN: &[&str] = &[
    "NAME",
    "       man - display manual pages",
    "",
    "SYNOPSIS",
    "       man [command]",
    "",
    "DESCRIPTION",
    "       Shows detailed documentation for the specified command.",
    "       If no command is specified, shows usage information.",
    "",
    "EXAMPLES",
    "       man theme     Show detailed help for the theme command",
    "       man help      Show detailed help for the help command",
];

const EXIT: &[&str] = &[
    "NAME",
    "       exit - disconnect from terminal session",
    "",
    "SYNOPSIS",
    "       exit",
    "",
    "DESCRIPTION",
    "       Terminates the current terminal session and returns to the login screen.",
    "       This is equivalent to logging out of the system.",
];

const POWEROFF: &[&str] = &[
    "NAME",
    "       poweroff - power off the system",
    "",
    "SYNOPSIS",
    "       poweroff",
    "",
    "DESCRIPTION",
    "       Simulates powering off the system.",
    "       This command is an alias for 'exit'.",
];

const REBOOT: &[&str] = &[
    "NAME",
    "       reboot - restart the system",
    "",
    "SYNOPSIS",
    "       reboot",
    "",
    "DESCRIPTION",
    "       Restarts the system by reloading the terminal.",
    "       This will reset all terminal state and start a new session.",
];

/// Rows printed by `man` without an argument.
pub const MAN_USAGE: &[&str] = &[
    "Usage: man [command]",
    "Show detailed manual page for a command.",
    "",
    "Example: man theme",
];

/// Manual page table, keyed by command name.
///
/// Built once per interpreter because the `theme` page lists the theme ids.
#[derive(Debug, Clone)]
pub struct ManualPages {
    pages: HashMap<&'static str, Vec<String>>,
}

impl ManualPages {
    pub fn new<S: AsRef<str>>(theme_ids: &[S]) -> Self {
        let fixed: [(&'static str, &[&str]); 9] = [
            ("help", HELP),
            ("clear", CLEAR),
            ("about", ABOUT),
            ("services", SERVICES),
            ("contact", CONTACT),
            ("man", MAN),
            ("exit", EXIT),
            ("poweroff", POWEROFF),
            ("reboot", REBOOT),
        ];

        let mut pages: HashMap<&'static str, Vec<String>> = fixed
            .iter()
            .map(|(name, rows)| (*name, to_rows(rows)))
            .collect();
        pages.insert("theme", theme_page(theme_ids));

        Self { pages }
    }

    /// Page for `command`, matched exactly on the lower-cased name.
    pub fn lookup(&self, command: &str) -> Option<&[String]> {
        self.pages.get(command).map(Vec::as_slice)
    }

    pub fn contains(&self, command: &str) -> bool {
        self.pages.contains_key(command)
    }
}

fn to_rows(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|r| r.to_string()).collect()
}

fn theme_page<S: AsRef<str>>(theme_ids: &[S]) -> Vec<String> {
    let ids = theme_ids
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");

    let mut rows = to_rows(&[
        "NAME",
        "       theme - change the terminal appearance",
        "",
        "SYNOPSIS",
        "       theme [theme-name]",
        "",
        "DESCRIPTION",
        "       Changes the terminal's visual theme to the specified theme.",
        "       If no theme is specified, shows available themes.",
        "",
        "OPTIONS",
        "       theme-name    The name of the theme to apply.",
        "",
        "AVAILABLE THEMES",
    ]);
    rows.push(format!("       {}", ids));
    rows.extend(to_rows(&[
        "",
        "EXAMPLES",
        "       theme green      Switch to the Retro Green theme",
        "       theme dark       Switch to the Dark theme",
    ]));
    rows
}
