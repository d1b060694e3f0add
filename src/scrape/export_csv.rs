//! Output table: one row per (player, unit) pair.
//!
//! Stat cells are `None` when the fetch failed; they serialize as empty cells,
//! which keeps "no data" distinct from a real `0.00`.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::stats::StatTotals;

pub const UNIT_STATS_HEADER: [&str; 5] = ["Player", "Unit", "Attack", "ElementalDamage", "MaxAmmo"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitStatsRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Attack")]
    pub attack: Option<String>,
    #[serde(rename = "ElementalDamage")]
    pub elemental_damage: Option<String>,
    #[serde(rename = "MaxAmmo")]
    pub max_ammo: Option<String>,
}

impl UnitStatsRow {
    pub fn with_totals(player: &str, unit: &str, totals: &StatTotals) -> Self {
        let formatted = totals.formatted();
        Self {
            player: player.to_string(),
            unit: unit.to_string(),
            attack: Some(formatted.attack),
            elemental_damage: Some(formatted.elemental_damage),
            max_ammo: Some(formatted.max_ammo),
        }
    }

    pub fn no_data(player: &str, unit: &str) -> Self {
        Self {
            player: player.to_string(),
            unit: unit.to_string(),
            attack: None,
            elemental_damage: None,
            max_ammo: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.attack.is_some()
    }
}

#[derive(Debug)]
pub enum ExportError {
    Create(std::io::Error),
    Csv(csv::Error),
    Flush(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create(err) => write!(f, "failed to create output file: {err}"),
            Self::Csv(err) => write!(f, "failed to write CSV row: {err}"),
            Self::Flush(err) => write!(f, "failed to flush output: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

pub fn write_unit_stats_csv(path: impl AsRef<Path>, rows: &[UnitStatsRow]) -> Result<(), ExportError> {
    let file = File::create(path.as_ref()).map_err(ExportError::Create)?;
    write_unit_stats(file, rows)
}

/// The header is written even when there are no rows.
pub fn write_unit_stats<W: Write>(output: W, rows: &[UnitStatsRow]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer.write_record(UNIT_STATS_HEADER).map_err(ExportError::Csv)?;
    for row in rows {
        writer.serialize(row).map_err(ExportError::Csv)?;
    }
    writer.flush().map_err(ExportError::Flush)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[UnitStatsRow]) -> String {
        let mut buffer = Vec::new();
        write_unit_stats(&mut buffer, rows).expect("rows should serialize");
        String::from_utf8(buffer).expect("csv output is utf-8")
    }

    #[test]
    fn empty_table_still_has_header() {
        assert_eq!(render(&[]), "Player,Unit,Attack,ElementalDamage,MaxAmmo\n");
    }

    #[test]
    fn failed_rows_have_empty_cells_and_zero_rows_do_not() {
        let rows = vec![
            UnitStatsRow::with_totals("Amy", "Rapi", &StatTotals::default()),
            UnitStatsRow::no_data("Amy", "Anis"),
        ];
        assert_eq!(
            render(&rows),
            "Player,Unit,Attack,ElementalDamage,MaxAmmo\n\
             Amy,Rapi,0.00,0.00,0.00\n\
             Amy,Anis,,,\n"
        );
    }
}
