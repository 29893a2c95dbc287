//! Shell completion scripts for the `sublev` command line.
use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as ClapShell;

use crate::SublevOptions;

const BIN_NAME: &str = "sublev";

/// Shells a completion script can be generated for
#[derive(Clone, Copy, clap::ValueEnum, PartialEq, Eq, Debug)]
pub enum Shell {
    /// bash
    Bash,
    /// elvish
    Elvish,
    /// fish
    Fish,
    /// nushell, through `clap_complete_nushell`
    Nushell,
    /// PowerShell
    PowerShell,
    /// zsh
    Zsh,
}

impl Shell {
    /// The matching `clap_complete` shell, `None` for shells it does not cover
    fn builtin(self) -> Option<ClapShell> {
        Some(match self {
            Shell::Bash => ClapShell::Bash,
            Shell::Elvish => ClapShell::Elvish,
            Shell::Fish => ClapShell::Fish,
            Shell::PowerShell => ClapShell::PowerShell,
            Shell::Zsh => ClapShell::Zsh,
            Shell::Nushell => return None,
        })
    }
}

/// Writes the completion script for `shell` to `out`
pub fn generate<W: Write>(shell: &Shell, out: &mut W) {
    let mut cmd = SublevOptions::command();
    match shell.builtin() {
        Some(builtin) => clap_complete::generate(builtin, &mut cmd, BIN_NAME, out),
        None => clap_complete::generate(clap_complete_nushell::Nushell, &mut cmd, BIN_NAME, out),
    }
}
