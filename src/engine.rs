//! Binds a query, a threshold and a case policy to a matching algorithm.

use std::fmt::{Display, Error, Formatter};

use crate::CaseMatching;
use crate::matcher::banded::BandedMatcher;
use crate::matcher::full::FullMatrixMatcher;
use crate::matcher::{Distance, SubstringMatcher};

//------------------------------------------------------------------------------
/// Substring edit-distance algorithm to use
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Pruned divide-and-conquer scan (default)
    #[default]
    Banded,
    /// Unpruned full-matrix dynamic programming
    Full,
}

/// A successful match of the engine's query inside one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Position of the item in the input
    pub index: usize,
    /// Best edit distance between the query and a substring of the item
    pub distance: Distance,
}

//------------------------------------------------------------------------------
/// Builder for [`Engine`]
#[derive(Default)]
pub struct EngineBuilder {
    query: Vec<u8>,
    max_distance: Distance,
    case: CaseMatching,
    algorithm: Algorithm,
}

impl EngineBuilder {
    /// Sets the query to look for
    pub fn query(mut self, query: impl AsRef<[u8]>) -> Self {
        self.query = query.as_ref().to_vec();
        self
    }

    /// Sets the largest accepted distance
    pub fn max_distance(mut self, max_distance: Distance) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Sets the case policy
    pub fn case(mut self, case: CaseMatching) -> Self {
        self.case = case;
        self
    }

    /// Sets the algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Builds the engine
    pub fn build(self) -> Engine {
        let matcher: Box<dyn SubstringMatcher> = match self.algorithm {
            Algorithm::Banded => Box::new(BandedMatcher::new(self.case)),
            Algorithm::Full => Box::new(FullMatrixMatcher::new(self.case)),
        };
        debug!(
            "Initialized {:?} engine (max distance {}, case {:?})",
            self.algorithm, self.max_distance, self.case
        );

        Engine {
            query: self.query,
            max_distance: self.max_distance,
            algorithm: self.algorithm,
            matcher,
        }
    }
}

/// Matches one query against many items
pub struct Engine {
    query: Vec<u8>,
    max_distance: Distance,
    algorithm: Algorithm,
    matcher: Box<dyn SubstringMatcher>,
}

impl Engine {
    /// Returns a default builder for chaining
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Best distance of the query inside `text`, if within the threshold
    pub fn distance(&self, text: &[u8]) -> Option<Distance> {
        self.matcher.distance(text, &self.query, self.max_distance)
    }

    /// Matches the item found at position `index` of the input
    pub fn match_item(&self, index: usize, text: &[u8]) -> Option<MatchResult> {
        let distance = self.distance(text)?;
        trace!("item {index} matched at distance {distance}");
        Some(MatchResult { index, distance })
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "({:?}~{}: {})",
            self.algorithm,
            self.max_distance,
            String::from_utf8_lossy(&self.query)
        )
    }
}
