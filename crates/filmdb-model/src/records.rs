//! Record types for each pipeline generation.
//!
//! All of these are write-once artifacts materialized as JSON arrays
//! between stages; no record is ever updated in place.

use crate::ids::{ActorId, ContributorId, DirectorId, MovieId, TmdbId};
use serde::{Deserialize, Serialize};

/// Movie row as produced by the scraper. The pipeline uses movies purely as
/// an external-to-internal lookup table, so the remaining scraper fields
/// (release_date, runtime, overview, ...) are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub tmdb_id: TmdbId,
    pub name: String,
}

/// Finalized director identity. Director IDs survive the merge unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub id: DirectorId,
    pub tmdb_id: TmdbId,
    pub name: String,
    /// The scraper emits `""` when TMDB has no birthday on file.
    #[serde(default)]
    pub birthday: String,
    pub gender: u8,
    #[serde(default)]
    pub biography: String,
}

/// One (movie, actor) pairing as scraped. Not unique per actor: the same
/// person appears once per movie they acted in, attributes repeated.
///
/// The scraper and the splitter stage historically disagreed on field
/// names (`tmdb_actor_id` vs `tmdb_id`, `tmdb_movie_id` vs `movie_id`);
/// both spellings deserialize into the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAppearance {
    /// External ID of the movie this appearance belongs to.
    #[serde(alias = "tmdb_movie_id")]
    pub movie_id: TmdbId,
    /// External ID of the actor.
    #[serde(alias = "tmdb_actor_id")]
    pub tmdb_id: TmdbId,
    pub name: String,
    pub gender: u8,
}

/// One record per distinct actor, with its assigned surrogate ID.
/// `tmdb_id` is unique across a deduplication generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupedActor {
    pub id: ActorId,
    pub tmdb_id: TmdbId,
    pub name: String,
    pub gender: u8,
}

/// A (movie, actor) relationship. Generic over the actor-ID space so a
/// pre-merge record (`Acted<ActorId>`) cannot be mistaken for a post-merge
/// one (`Acted<ContributorId>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acted<I> {
    pub movie_id: MovieId,
    pub actor_id: I,
}

/// Unified identity: a person who directed and/or acted in at least one
/// movie. Director-derived records carry `birthday`/`biography`;
/// actor-derived ones omit them, keeping each output object the same shape
/// it had before the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: ContributorId,
    pub tmdb_id: TmdbId,
    pub name: String,
    pub gender: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

impl Contributor {
    pub fn from_director(director: &Director) -> Self {
        Self {
            id: ContributorId::from_director(director.id),
            tmdb_id: director.tmdb_id,
            name: director.name.clone(),
            gender: director.gender,
            birthday: Some(director.birthday.clone()),
            biography: Some(director.biography.clone()),
        }
    }

    /// `id` must already be in the unified space; see
    /// [`ContributorId::from_actor`].
    pub fn from_actor(actor: &DedupedActor, id: ContributorId) -> Self {
        Self {
            id,
            tmdb_id: actor.tmdb_id,
            name: actor.name.clone(),
            gender: actor.gender,
            birthday: None,
            biography: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_accepts_scraper_field_names() {
        let scraped = r#"{
            "tmdb_movie_id": 550,
            "tmdb_actor_id": 819,
            "name": "Edward Norton",
            "gender": 2
        }"#;
        let a: RawAppearance = serde_json::from_str(scraped).unwrap();
        assert_eq!(a.movie_id, TmdbId(550));
        assert_eq!(a.tmdb_id, TmdbId(819));
    }

    #[test]
    fn appearance_accepts_normalized_field_names() {
        let normalized = r#"{
            "movie_id": 550,
            "tmdb_id": 819,
            "name": "Edward Norton",
            "gender": 2
        }"#;
        let a: RawAppearance = serde_json::from_str(normalized).unwrap();
        assert_eq!(a.movie_id, TmdbId(550));
        assert_eq!(a.tmdb_id, TmdbId(819));
    }

    #[test]
    fn appearance_missing_key_is_fatal() {
        let missing_gender = r#"{"movie_id": 550, "tmdb_id": 819, "name": "X"}"#;
        assert!(serde_json::from_str::<RawAppearance>(missing_gender).is_err());
    }

    #[test]
    fn director_birthday_defaults_to_empty() {
        let d: Director = serde_json::from_str(
            r#"{"id": 1, "tmdb_id": 7, "name": "X", "gender": 2, "biography": ""}"#,
        )
        .unwrap();
        assert_eq!(d.birthday, "");
    }

    #[test]
    fn actor_shaped_contributor_omits_director_fields() {
        let actor = DedupedActor {
            id: ActorId(2),
            tmdb_id: TmdbId(819),
            name: "Edward Norton".to_string(),
            gender: 2,
        };
        let c = Contributor::from_actor(&actor, ContributorId(9));
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("birthday"));
        assert!(!json.contains("biography"));
    }
}
