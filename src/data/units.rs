//! Unit catalog: numeric unit code -> display name.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data::{csv_reader, require_columns, LoadError, LoadReport};

pub const DEFAULT_UNITS_PATH: &str = "units.csv";

const CODE_COLUMN: &str = "units/Name code";
const NAME_COLUMN: &str = "units/Name";

/// Ordered by unit code, which is the order units are queried in.
pub type UnitCatalog = BTreeMap<u32, String>;

#[derive(Debug, Deserialize)]
struct UnitRow {
    #[serde(rename = "units/Name code")]
    code: String,
    #[serde(rename = "units/Name")]
    name: String,
}

pub fn load_units_csv(path: impl AsRef<Path>) -> Result<(UnitCatalog, LoadReport), LoadError> {
    let file = File::open(path.as_ref()).map_err(LoadError::Open)?;
    read_units(file)
}

/// Rows with an unparseable code are skipped; a repeated code keeps the last name.
pub fn read_units<R: Read>(input: R) -> Result<(UnitCatalog, LoadReport), LoadError> {
    let mut reader = csv_reader(input);
    require_columns(&mut reader, &[CODE_COLUMN, NAME_COLUMN])?;

    let mut catalog = UnitCatalog::new();
    let mut report = LoadReport::default();
    for (index, result) in reader.deserialize::<UnitRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                debug!(row = index + 1, %err, "skipping undecodable unit row");
                report.skipped += 1;
                continue;
            }
        };
        let Ok(code) = row.code.trim().parse::<u32>() else {
            debug!(row = index + 1, code = %row.code, "skipping unit row with invalid code");
            report.skipped += 1;
            continue;
        };
        catalog.insert(code, row.name.trim().to_string());
        report.loaded += 1;
    }

    Ok((catalog, report))
}
