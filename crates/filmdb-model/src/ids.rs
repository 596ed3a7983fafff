//! Identifier newtypes.
//!
//! The pipeline works in three internal ID spaces (director, actor,
//! unified contributor) plus the external catalog ID. Each space is its
//! own type: the merger crosses spaces only through the explicit
//! constructors on [`ContributorId`], so offset arithmetic applied in the
//! wrong space is a type error instead of a silently wrong integer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External catalog (TMDB) identifier. Stable across re-scrapes. Movies and
/// people both carry one, but movie and person IDs never share a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TmdbId(pub u64);

impl fmt::Display for TmdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmdb:{}", self.0)
    }
}

/// Internal surrogate movie key, assigned by the movie scraper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// Surrogate key in the deduplicated-actor space (1-based, first-seen
/// order). Valid only within one deduplication generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

/// Surrogate key in the director space (1..=D, assigned by the scraper).
/// Directors are the authoritative identity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectorId(pub u32);

impl fmt::Display for DirectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

/// Surrogate key in the unified contributor space: directors occupy 1..=D
/// unchanged, non-director actors sit past the director block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContributorId(pub u32);

impl fmt::Display for ContributorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

impl ContributorId {
    /// Directors keep their IDs in the unified space.
    pub fn from_director(id: DirectorId) -> Self {
        Self(id.0)
    }

    /// Shift an actor ID past the director block. Actor IDs start at 1, so
    /// the result never collides with a director's 1..=`director_count`.
    pub fn from_actor(id: ActorId, director_count: usize) -> Self {
        Self(id.0 + director_count as u32)
    }
}
