//! Appearance deduplication.
//!
//! The actor scraper emits one row per (movie, actor) pairing, repeating
//! the full actor attributes each time. This stage assigns each distinct
//! actor a surrogate ID in first-seen order (1-based, gap-free) and
//! rewrites the pairings against internal movie and actor IDs.
//!
//! IDs are stable for a fixed input ordering only. Reordering the input or
//! re-scraping reassigns them; nothing here keys identity off the external
//! ID across runs.

use filmdb_model::{Acted, ActorId, DedupedActor, Movie, MovieId, RawAppearance, TmdbId};
use std::collections::HashMap;

/// Progress checkpoint interval. Observability only, no semantic effect.
const CHECKPOINT_EVERY: usize = 1000;

/// One deduplication generation.
#[derive(Debug, Clone, Default)]
pub struct DedupOutput {
    /// One record per distinct actor, first-seen order.
    pub actors: Vec<DedupedActor>,
    /// Resolved relationships, input order minus drops.
    pub acted: Vec<Acted<ActorId>>,
    /// Rows dropped because their movie was absent from the movie list.
    pub dropped: usize,
}

/// A relationship whose movie reference did not resolve. The tolerated
/// failure: the row is dropped and counted, the batch continues.
struct LookupMiss;

/// Deduplicate appearance rows against the movie lookup table.
///
/// Invariants on the output: every actor's `tmdb_id` is unique;
/// `acted.len() + dropped == appearances.len()`; actor IDs are assigned
/// 1, 2, 3, ... with no gaps.
pub fn dedup_appearances(appearances: &[RawAppearance], movies: &[Movie]) -> DedupOutput {
    // External-to-internal movie map. Duplicate tmdb_ids are
    // last-write-wins; upstream data is assumed already de-duplicated on
    // movies.
    let movie_ids: HashMap<TmdbId, MovieId> =
        movies.iter().map(|m| (m.tmdb_id, m.id)).collect();

    let mut assigned: HashMap<TmdbId, ActorId> = HashMap::new();
    let mut out = DedupOutput::default();

    for (row, appearance) in appearances.iter().enumerate() {
        if row % CHECKPOINT_EVERY == 0 {
            tracing::info!(row, total = appearances.len(), "dedup checkpoint");
        }

        let actor_id = match assigned.get(&appearance.tmdb_id) {
            Some(&id) => id,
            None => {
                let id = ActorId(out.actors.len() as u32 + 1);
                assigned.insert(appearance.tmdb_id, id);
                out.actors.push(DedupedActor {
                    id,
                    tmdb_id: appearance.tmdb_id,
                    name: appearance.name.clone(),
                    gender: appearance.gender,
                });
                id
            }
        };

        match resolve(&movie_ids, appearance.movie_id, actor_id) {
            Ok(acted) => out.acted.push(acted),
            Err(LookupMiss) => {
                out.dropped += 1;
                tracing::warn!(
                    movie = %appearance.movie_id,
                    actor = %actor_id,
                    "dropping relationship: movie not in movie list"
                );
            }
        }
    }

    out
}

fn resolve(
    movie_ids: &HashMap<TmdbId, MovieId>,
    movie: TmdbId,
    actor_id: ActorId,
) -> Result<Acted<ActorId>, LookupMiss> {
    let movie_id = *movie_ids.get(&movie).ok_or(LookupMiss)?;
    Ok(Acted { movie_id, actor_id })
}
