//! Data model for the FilmDB reconciliation pipeline.
//!
//! Record types for each pipeline generation (scraped appearances,
//! deduplicated actors, unified contributors), identifier newtypes keeping
//! the director/actor/contributor ID spaces apart at the type level, and
//! the JSON artifact I/O helpers that implement the output-format contract.

pub mod ids;
pub mod json;
pub mod records;

pub use ids::{ActorId, ContributorId, DirectorId, MovieId, TmdbId};
pub use json::{read_json_array, to_json_sorted, write_json_sorted};
pub use records::{Acted, Contributor, DedupedActor, Director, Movie, RawAppearance};
