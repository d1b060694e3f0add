//! Player registry: display name plus the account id derived from the UID column.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data::{csv_reader, require_columns, LoadError, LoadReport};

pub const DEFAULT_PLAYERS_PATH: &str = "players.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub account_id: String,
}

#[derive(Debug, Deserialize)]
struct PlayerRow {
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "UID")]
    uid: String,
}

/// UIDs look like `29080-12057416839635147011`; the account id is the part
/// after the last `-`, or the whole UID when there is no separator.
pub fn account_id_from_uid(uid: &str) -> &str {
    let uid = uid.trim();
    uid.rsplit('-').next().unwrap_or(uid)
}

pub fn load_players_csv(path: impl AsRef<Path>) -> Result<(Vec<Player>, LoadReport), LoadError> {
    let file = File::open(path.as_ref()).map_err(LoadError::Open)?;
    read_players(file)
}

/// Players are returned in file order. Rows without a usable account id are skipped.
pub fn read_players<R: Read>(input: R) -> Result<(Vec<Player>, LoadReport), LoadError> {
    let mut reader = csv_reader(input);
    require_columns(&mut reader, &["Player", "UID"])?;

    let mut players = Vec::new();
    let mut report = LoadReport::default();
    for (index, result) in reader.deserialize::<PlayerRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                debug!(row = index + 1, %err, "skipping undecodable player row");
                report.skipped += 1;
                continue;
            }
        };
        let account_id = account_id_from_uid(&row.uid);
        if account_id.is_empty() {
            debug!(row = index + 1, "skipping player row without account id");
            report.skipped += 1;
            continue;
        }
        players.push(Player {
            name: row.player.trim().to_string(),
            account_id: account_id.to_string(),
        });
        report.loaded += 1;
    }

    Ok((players, report))
}
