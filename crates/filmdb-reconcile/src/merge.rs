//! Director/actor identity unification.
//!
//! Directors are the authoritative identity space and keep IDs 1..=D in the
//! unified space. Actors who never directed are shifted past the director
//! block (`actor id + D`). An actor whose external ID matches a director is
//! the same person: no contributor is emitted for the actor record, and the
//! actor's relationships are rewritten onto the director's ID.
//!
//! Input relationships are `Acted<ActorId>`, i.e. still in the
//! deduplicated-actor space; the output is `Acted<ContributorId>`. The
//! types make the space of each generation explicit, so no offset
//! subtraction is ever applied to an already-unified ID.

use crate::ReconcileError;
use filmdb_model::{
    Acted, ActorId, Contributor, ContributorId, DedupedActor, Director, DirectorId, TmdbId,
};
use std::collections::HashMap;

/// One merge generation.
#[derive(Debug, Clone, Default)]
pub struct MergeOutput {
    /// Directors first (original order, IDs unchanged), then non-collapsed
    /// actors in deduplication order.
    pub contributors: Vec<Contributor>,
    /// Relationships rewritten into the unified ID space.
    pub acted: Vec<Acted<ContributorId>>,
    /// Actors folded into an existing director identity.
    pub collapsed: usize,
}

/// Merge the director and deduplicated-actor identity spaces.
///
/// Invariants on the output: contributor IDs are unique;
/// `contributors.len() == directors.len() + actors.len() - collapsed`.
pub fn merge_identities(
    directors: &[Director],
    actors: &[DedupedActor],
    acted: &[Acted<ActorId>],
) -> Result<MergeOutput, ReconcileError> {
    let offset = directors.len();

    let director_ids: HashMap<TmdbId, DirectorId> =
        directors.iter().map(|d| (d.tmdb_id, d.id)).collect();

    // Unified-space ID for every deduplicated actor: the collapsed director
    // identity, or the actor's own ID shifted past the director block.
    let mut unified: HashMap<ActorId, ContributorId> = HashMap::new();

    let mut out = MergeOutput::default();
    out.contributors
        .extend(directors.iter().map(Contributor::from_director));

    for actor in actors {
        match director_ids.get(&actor.tmdb_id) {
            Some(&director_id) => {
                // Same person acted and directed. The director record
                // already covers this identity.
                tracing::debug!(actor = %actor.id, director = %director_id, "collapsing identity");
                unified.insert(actor.id, ContributorId::from_director(director_id));
                out.collapsed += 1;
            }
            None => {
                let id = ContributorId::from_actor(actor.id, offset);
                unified.insert(actor.id, id);
                out.contributors.push(Contributor::from_actor(actor, id));
            }
        }
    }

    for rel in acted {
        let actor_id = *unified
            .get(&rel.actor_id)
            .ok_or(ReconcileError::UnknownActor { actor_id: rel.actor_id })?;
        out.acted.push(Acted { movie_id: rel.movie_id, actor_id });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmdb_model::MovieId;

    fn director(id: u32, tmdb: u64, name: &str) -> Director {
        Director {
            id: DirectorId(id),
            tmdb_id: TmdbId(tmdb),
            name: name.to_string(),
            birthday: "1970-01-01".to_string(),
            gender: 2,
            biography: String::new(),
        }
    }

    fn actor(id: u32, tmdb: u64, name: &str) -> DedupedActor {
        DedupedActor {
            id: ActorId(id),
            tmdb_id: TmdbId(tmdb),
            name: name.to_string(),
            gender: 2,
        }
    }

    #[test]
    fn actor_who_also_directed_collapses_into_the_director() {
        // Actor 1 shares an external ID with the sole director; actor 2 is
        // director-disjoint and lands at 2 + offset(1) = 3.
        let directors = vec![director(1, 100, "Clint Eastwood")];
        let actors = vec![actor(1, 100, "Clint Eastwood"), actor(2, 200, "Gene Hackman")];
        let out = merge_identities(&directors, &actors, &[]).unwrap();

        let ids: Vec<u32> = out.contributors.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(out.collapsed, 1);
        assert_eq!(out.contributors.len(), 2);
    }

    #[test]
    fn relationships_of_a_collapsed_actor_point_at_the_director() {
        let directors = vec![director(1, 100, "Clint Eastwood")];
        let actors = vec![actor(1, 100, "Clint Eastwood"), actor(2, 200, "Gene Hackman")];
        let acted = vec![
            Acted { movie_id: MovieId(7), actor_id: ActorId(1) },
            Acted { movie_id: MovieId(7), actor_id: ActorId(2) },
        ];
        let out = merge_identities(&directors, &actors, &acted).unwrap();

        assert_eq!(
            out.acted,
            vec![
                Acted { movie_id: MovieId(7), actor_id: ContributorId(1) },
                Acted { movie_id: MovieId(7), actor_id: ContributorId(3) },
            ]
        );
    }

    #[test]
    fn directors_keep_their_order_and_fields() {
        let directors = vec![director(1, 100, "A"), director(2, 101, "B")];
        let out = merge_identities(&directors, &[], &[]).unwrap();
        assert_eq!(out.contributors[0].name, "A");
        assert_eq!(out.contributors[1].name, "B");
        assert_eq!(out.contributors[0].birthday.as_deref(), Some("1970-01-01"));
    }

    #[test]
    fn unknown_actor_in_relationship_aborts_the_batch() {
        let directors = vec![director(1, 100, "A")];
        let actors = vec![actor(1, 200, "B")];
        let acted = vec![Acted { movie_id: MovieId(1), actor_id: ActorId(9) }];
        let err = merge_identities(&directors, &actors, &acted).unwrap_err();
        assert_eq!(err, ReconcileError::UnknownActor { actor_id: ActorId(9) });
    }

    #[test]
    fn empty_inputs_merge_to_empty_outputs() {
        let out = merge_identities(&[], &[], &[]).unwrap();
        assert!(out.contributors.is_empty());
        assert!(out.acted.is_empty());
        assert_eq!(out.collapsed, 0);
    }
}
