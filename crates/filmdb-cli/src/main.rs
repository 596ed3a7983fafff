//! FilmDB reconciliation CLI
//!
//! Batch front-end for the identity-reconciliation pipeline:
//! - `dedup`: raw (movie, actor) appearance rows → deduplicated actors +
//!   relationships in internal IDs
//! - `merge`: directors + deduplicated actors → unified contributors, with
//!   relationships rewritten into the unified ID space
//! - `pipeline`: both stages in one process
//!
//! All artifacts are JSON arrays, pretty-printed with sorted keys and a
//! 4-space indent. Each stage writes its outputs only after its compute
//! completes, so a failed run leaves no partial generation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use filmdb_model::{
    read_json_array, write_json_sorted, Acted, ActorId, DedupedActor, Director, Movie,
    RawAppearance,
};
use filmdb_reconcile::{dedup_appearances, merge_identities, DedupOutput, MergeOutput};

#[derive(Parser)]
#[command(name = "filmdb")]
#[command(
    author,
    version,
    about = "FilmDB: actor/director identity reconciliation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduplicate raw appearance rows into actors + relationships.
    Dedup {
        /// Raw (movie, actor) appearance JSON from the actor scraper
        #[arg(long)]
        appearances: PathBuf,
        /// Movie list JSON (external→internal lookup table)
        #[arg(long)]
        movies: PathBuf,
        /// Output: deduplicated actors JSON
        #[arg(long)]
        actors_out: PathBuf,
        /// Output: acted-relationship JSON (internal actor IDs)
        #[arg(long)]
        acted_out: PathBuf,
    },

    /// Merge director and actor identities into one contributor space.
    Merge {
        /// Director list JSON (authoritative identities)
        #[arg(long)]
        directors: PathBuf,
        /// Deduplicated actors JSON (output of `dedup`)
        #[arg(long)]
        actors: PathBuf,
        /// Acted-relationship JSON (output of `dedup`)
        #[arg(long)]
        acted: PathBuf,
        /// Output: unified contributors JSON
        #[arg(long)]
        contributors_out: PathBuf,
        /// Output: acted-relationship JSON in the unified ID space
        #[arg(long)]
        acted_out: PathBuf,
    },

    /// Run both stages: appearances + movies + directors → contributors.
    Pipeline {
        #[arg(long)]
        appearances: PathBuf,
        #[arg(long)]
        movies: PathBuf,
        #[arg(long)]
        directors: PathBuf,
        #[arg(long)]
        contributors_out: PathBuf,
        #[arg(long)]
        acted_out: PathBuf,
        /// Also write the intermediate deduplicated-actor file
        #[arg(long)]
        actors_out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Dedup {
            appearances,
            movies,
            actors_out,
            acted_out,
        } => {
            let out = run_dedup(&appearances, &movies)?;
            write_json_sorted(&actors_out, &out.actors)?;
            write_json_sorted(&acted_out, &out.acted)?;
            print_dedup_summary(&out);
        }
        Commands::Merge {
            directors,
            actors,
            acted,
            contributors_out,
            acted_out,
        } => {
            let out = run_merge(&directors, &actors, &acted)?;
            write_json_sorted(&contributors_out, &out.contributors)?;
            write_json_sorted(&acted_out, &out.acted)?;
            print_merge_summary(&out);
        }
        Commands::Pipeline {
            appearances,
            movies,
            directors,
            contributors_out,
            acted_out,
            actors_out,
        } => {
            let deduped = run_dedup(&appearances, &movies)?;
            print_dedup_summary(&deduped);

            let directors: Vec<Director> = read_json_array(&directors)?;
            let merged = merge_identities(&directors, &deduped.actors, &deduped.acted)?;

            if let Some(actors_out) = actors_out {
                write_json_sorted(&actors_out, &deduped.actors)?;
            }
            write_json_sorted(&contributors_out, &merged.contributors)?;
            write_json_sorted(&acted_out, &merged.acted)?;
            print_merge_summary(&merged);
        }
    }

    Ok(())
}

fn run_dedup(appearances: &Path, movies: &Path) -> Result<DedupOutput> {
    let appearances: Vec<RawAppearance> = read_json_array(appearances)?;
    let movies: Vec<Movie> = read_json_array(movies)?;
    Ok(dedup_appearances(&appearances, &movies))
}

fn run_merge(directors: &Path, actors: &Path, acted: &Path) -> Result<MergeOutput> {
    let directors: Vec<Director> = read_json_array(directors)?;
    let actors: Vec<DedupedActor> = read_json_array(actors)?;
    let acted: Vec<Acted<ActorId>> = read_json_array(acted)?;
    Ok(merge_identities(&directors, &actors, &acted)?)
}

fn print_dedup_summary(out: &DedupOutput) {
    println!(
        "{} {} actors, {} relationships kept, {} dropped",
        "dedup:".green().bold(),
        out.actors.len(),
        out.acted.len(),
        out.dropped
    );
    if out.dropped > 0 {
        println!(
            "{} {} relationship(s) referenced movies missing from the movie list",
            "warning:".yellow().bold(),
            out.dropped
        );
    }
}

fn print_merge_summary(out: &MergeOutput) {
    println!(
        "{} {} contributors ({} actor identities collapsed into directors), {} relationships",
        "merge:".green().bold(),
        out.contributors.len(),
        out.collapsed,
        out.acted.len()
    );
}
