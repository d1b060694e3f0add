//! Run configuration: upstream endpoint, pacing, and file locations.
//! API settings are fixed defaults; only file paths come from the command line.
use std::path::PathBuf;
use std::time::Duration;

use crate::data::{DEFAULT_PLAYERS_PATH, DEFAULT_UNITS_PATH};

pub const DEFAULT_API_URL: &str =
    "https://api.blablalink.com/api/game/proxy/Game/GetUserCharacterDetails";
pub const DEFAULT_AREA_ID: u32 = 82;
pub const DEFAULT_OUTPUT_PATH: &str = "unit_stats.csv";

#[derive(Clone, Debug, Default)]
pub struct ScrapeConfig {
    pub api: ApiConfig,
    pub paths: PathConfig,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub url: String,
    /// Region sent as `nikke_area_id` with every request.
    pub area_id: u32,
    pub timeout: Duration,
    /// Minimum spacing between the starts of two consecutive requests.
    pub request_spacing: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            area_id: DEFAULT_AREA_ID,
            timeout: Duration::from_secs(12),
            request_spacing: Duration::from_millis(120),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PathConfig {
    pub units: PathBuf,
    pub players: PathBuf,
    pub output: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            units: PathBuf::from(DEFAULT_UNITS_PATH),
            players: PathBuf::from(DEFAULT_PLAYERS_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ScrapeConfig {
    /// Positional file arguments: units, players, output. Missing ones keep their default.
    pub fn with_path_args(mut self, args: &[String]) -> Self {
        if let Some(units) = args.first() {
            self.paths.units = PathBuf::from(units);
        }
        if let Some(players) = args.get(1) {
            self.paths.players = PathBuf::from(players);
        }
        if let Some(output) = args.get(2) {
            self.paths.output = PathBuf::from(output);
        }
        self
    }
}
