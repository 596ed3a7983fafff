//! Identity reconciliation for the FilmDB pipeline.
//!
//! Two cooperating batch transforms:
//!
//! 1. [`dedup_appearances`]: collapse raw (movie, actor) appearance rows
//!    into one record per distinct actor and resolve the pairings to
//!    internal movie and actor IDs.
//! 2. [`merge_identities`]: unify the director and actor identity spaces
//!    into a single contributor space, collapsing people who did both.
//!
//! Both are pure functions of their inputs; identity maps live and die
//! inside each call. A stage either completes or fails whole, so a failed
//! run never leaves a partial generation behind.

mod dedup;
mod merge;

pub use dedup::{dedup_appearances, DedupOutput};
pub use merge::{merge_identities, MergeOutput};

use filmdb_model::ActorId;
use thiserror::Error;

/// Inconsistencies the pipeline does not tolerate. Anything here aborts the
/// whole batch; the tolerated cases (movie-lookup misses, actor/director
/// external-ID collisions) never reach this enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// A relationship references an actor ID that never appeared in the
    /// deduplicated set.
    #[error("relationship references unknown actor {actor_id}")]
    UnknownActor { actor_id: ActorId },
}
