//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! sublev types and traits with a single `use sublev::prelude::*;` statement.

pub use crate::engine::{Algorithm, Engine, EngineBuilder, MatchResult};
pub use crate::matcher::{Distance, SubstringMatcher, banded::BandedMatcher, full::FullMatrixMatcher};
pub use crate::options::{SublevOptions, SublevOptionsBuilder};
pub use crate::reader::{Item, ItemReader};
pub use crate::{CaseMatching, MAX_LENGTH, NOT_FOUND, levenshtein_substring_match, substring_distance};
