//! Configuration options for sublev.
//!
//! `SublevOptions` drives both the command line (through clap, with the `cli`
//! feature) and library callers (through the generated `SublevOptionsBuilder`).

use std::path::PathBuf;

use derive_builder::Builder;

use crate::engine::{Algorithm, Engine};
use crate::matcher::Distance;
use crate::CaseMatching;

/// sublev - approximate substring search
///
/// sublev prints the input lines that contain a substring within a given edit
/// distance of the query. Insertions, deletions and substitutions of single bytes
/// all cost 1, and ASCII case is ignored by default.
///
/// Only the first 1024 bytes of the query and of each line are considered.
#[derive(Builder, Debug, Clone)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "sublev", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct SublevOptions {
    //  --- Search ---
    /// Text to look for
    #[cfg_attr(feature = "cli", arg(required_unless_present_any = ["shell", "man"]))]
    #[builder(setter(into, strip_option))]
    pub query: Option<String>,

    /// Files to search, stdin when none is given
    #[cfg_attr(feature = "cli", arg(value_name = "FILES"))]
    pub files: Vec<PathBuf>,

    /// Largest accepted edit distance
    #[cfg_attr(
        feature = "cli",
        arg(short = 'k', long, default_value_t = 1, help_heading = "Search")
    )]
    pub max_distance: Distance,

    /// Case sensitivity
    ///
    /// * **ignore**: fold ASCII case on both sides
    /// * **respect**: compare bytes verbatim
    /// * **smart**: ignore case unless the query contains an uppercase letter
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "ignore", value_enum, help_heading = "Search", verbatim_doc_comment)
    )]
    pub case: CaseMatching,

    /// Matching algorithm
    ///
    /// * **banded**: prunes the text windows that cannot match (default)
    /// * **full**: fills the whole edit-distance matrix
    #[cfg_attr(
        feature = "cli",
        arg(long = "algo", default_value = "banded", value_enum, help_heading = "Search", verbatim_doc_comment)
    )]
    pub algorithm: Algorithm,

    /// Match the whole input as a single text and print the distance only
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub whole: bool,

    /// Keep the input order instead of sorting by distance
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub no_sort: bool,

    //  --- Scripting ---
    /// Print the distance and a tab before each item
    #[cfg_attr(feature = "cli", arg(short = 'd', long, help_heading = "Scripting"))]
    pub print_distance: bool,

    /// Read input delimited by ASCII NUL(\\0) characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub read0: bool,

    /// Print output delimited by ASCII NUL(\\0) characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print0: bool,

    /// Generate shell completion script
    ///
    /// Generate completion script for the specified shell: bash, zsh, fish, etc.
    /// Examples: `source <(sublev --shell bash)` (immediate use)
    ///          `sublev --shell bash >> ~/.bash_completion` (persistent use)
    #[cfg(feature = "cli")]
    #[cfg_attr(
        feature = "cli",
        arg(long, value_name = "SHELL", help_heading = "Scripting", value_enum, verbatim_doc_comment)
    )]
    pub shell: Option<crate::completions::Shell>,

    /// Generate man page and output it to stdout
    #[cfg(feature = "cli")]
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub man: bool,
}

impl Default for SublevOptions {
    fn default() -> Self {
        Self {
            query: None,
            files: Vec::new(),
            max_distance: 1,
            case: CaseMatching::Ignore,
            algorithm: Algorithm::Banded,
            whole: false,
            no_sort: false,
            print_distance: false,
            read0: false,
            print0: false,
            #[cfg(feature = "cli")]
            shell: None,
            #[cfg(feature = "cli")]
            man: false,
        }
    }
}

impl SublevOptions {
    /// Builds the matching engine described by these options
    pub fn engine(&self) -> Engine {
        Engine::builder()
            .query(self.query.as_deref().unwrap_or_default())
            .max_distance(self.max_distance)
            .case(self.case)
            .algorithm(self.algorithm)
            .build()
    }

    /// Byte separating input items
    pub fn input_ending(&self) -> u8 {
        if self.read0 { b'\0' } else { b'\n' }
    }

    /// Bytes ending each output record
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}
