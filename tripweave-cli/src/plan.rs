//! `plan` command implementation for the Tripweave CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tripweave_core::{
    Itinerary, LikedSet, MemoryStore, Place, PlanRequest, Planner, PlannerConfig,
};

use crate::{
    ARG_PLAN_LIKED, ARG_PLAN_OUTPUT, ARG_PLAN_PLACES, ARG_PLAN_PLANNER_CONFIG, ARG_PLAN_REQUEST,
    ARG_PLAN_SEED, CliError, ENV_PLAN_PLACES, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a trip from a JSON plan request and a JSON array of \
                 places. Favourite place ids and planner tuning can be \
                 supplied as further JSON files. Without a seed every run \
                 may produce a different itinerary.",
    about = "Plan a day-by-day itinerary"
)]
#[ortho_config(prefix = "TRIPWEAVE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON array of places to plan from.
    #[arg(long = ARG_PLAN_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Path to a JSON array of favourite place ids.
    #[arg(long = ARG_PLAN_LIKED, value_name = "path")]
    #[serde(default)]
    pub(crate) liked: Option<Utf8PathBuf>,
    /// Path to a JSON planner configuration overriding the defaults.
    #[arg(long = ARG_PLAN_PLANNER_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) planner_config: Option<Utf8PathBuf>,
    /// Seed for reproducible itineraries.
    #[arg(long = ARG_PLAN_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Write the itinerary here instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }

    /// Resolve a configuration from explicit layers instead of the process
    /// environment.
    #[cfg(test)]
    pub(crate) fn resolve_layers(
        layers: Vec<ortho_config::MergeLayer<'static>>,
    ) -> Result<PlanConfig, CliError> {
        let merged = Self::merge_from_layers(layers).map_err(CliError::from)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON places snapshot.
    pub(crate) places: Utf8PathBuf,
    /// Path to the favourite ids, if any.
    pub(crate) liked: Option<Utf8PathBuf>,
    /// Path to planner tuning, if any.
    pub(crate) planner_config: Option<Utf8PathBuf>,
    /// Seed for the random source.
    pub(crate) seed: Option<u64>,
    /// Output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    /// Every input file the command will read, tagged with its flag.
    fn inputs(&self) -> impl Iterator<Item = (&'static str, &Utf8Path)> {
        [
            (ARG_PLAN_REQUEST, Some(&self.request_path)),
            (ARG_PLAN_PLACES, Some(&self.places)),
            (ARG_PLAN_LIKED, self.liked.as_ref()),
            (ARG_PLAN_PLANNER_CONFIG, self.planner_config.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, path)| path.map(|present| (field, present.as_path())))
    }

    /// Fail fast when an input is missing, so no partial work is done.
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.inputs().try_for_each(|(field, path)| {
            let owned = || path.to_path_buf();
            match tripweave_fs::file_is_file(path) {
                Ok(true) => Ok(()),
                Ok(false) => Err(CliError::SourcePathNotFile { field, path: owned() }),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    Err(CliError::MissingSourceFile { field, path: owned() })
                }
                Err(source) => Err(CliError::InspectSourcePath {
                    field,
                    path: owned(),
                    source,
                }),
            }
        })
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_PLACES,
            env: ENV_PLAN_PLACES,
        })?;
        Ok(Self {
            request_path,
            places,
            liked: args.liked,
            planner_config: args.planner_config,
            seed: args.seed,
            output: args.output,
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

/// Plan and emit the itinerary, writing to `writer` unless an output file
/// is configured.
pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let itinerary = execute_plan(&config)?;
    let payload =
        serde_json::to_string_pretty(&itinerary).map_err(CliError::SerialiseItinerary)?;
    match &config.output {
        Some(path) => {
            tripweave_fs::write_utf8(path, &payload).map_err(CliError::WriteOutput)?;
            info!("wrote itinerary to {path}");
            Ok(())
        }
        None => writeln!(writer, "{payload}").map_err(CliError::WriteOutput),
    }
}

pub(crate) fn execute_plan(config: &PlanConfig) -> Result<Itinerary, CliError> {
    let request: PlanRequest = load_json(&config.request_path, ARG_PLAN_REQUEST)?;
    let places: Vec<Place> = load_json(&config.places, ARG_PLAN_PLACES)?;
    info!("loaded {} place(s) from {}", places.len(), config.places);
    let liked: LikedSet = match &config.liked {
        Some(path) => load_json::<Vec<u64>>(path, ARG_PLAN_LIKED)?.into_iter().collect(),
        None => LikedSet::new(),
    };

    let store = MemoryStore::with_places(places);
    let planner = match &config.planner_config {
        Some(path) => {
            let tuning: PlannerConfig = load_json(path, ARG_PLAN_PLANNER_CONFIG)?;
            Planner::with_config(store, tuning).map_err(|source| {
                CliError::InvalidPlannerConfig {
                    path: path.clone(),
                    source,
                }
            })?
        }
        None => Planner::new(store),
    };

    let mut rng = match config.seed {
        Some(seed) => {
            debug!("seeding planner with {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };
    Ok(planner.plan(&request, &liked, &mut rng)?)
}

/// Read and decode a JSON input file.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let contents = tripweave_fs::read_utf8(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}
