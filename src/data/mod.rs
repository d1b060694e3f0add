//! Input tables: the unit catalog and the player registry.

use std::fmt;

pub mod players;
pub mod units;

pub use players::{account_id_from_uid, load_players_csv, read_players, Player, DEFAULT_PLAYERS_PATH};
pub use units::{load_units_csv, read_units, UnitCatalog, DEFAULT_UNITS_PATH};

/// Row counts for one loaded input file. Skipped rows are dropped silently
/// apart from this count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug)]
pub enum LoadError {
    Open(std::io::Error),
    Header(csv::Error),
    MissingColumn(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(err) => write!(f, "failed to open input file: {err}"),
            Self::Header(err) => write!(f, "failed to read CSV header: {err}"),
            Self::MissingColumn(name) => write!(f, "missing required column '{name}'"),
        }
    }
}

impl std::error::Error for LoadError {}

fn csv_reader<R: std::io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(input)
}

/// Read the header and fail early when a required column is absent, so a
/// wrong file is reported instead of yielding zero rows.
fn require_columns<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    columns: &[&'static str],
) -> Result<(), LoadError> {
    let headers = reader.headers().map_err(LoadError::Header)?;
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn(column));
        }
    }
    Ok(())
}
