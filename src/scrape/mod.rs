//! Sequential player x unit traversal: fetch, extract, append a row, pause.

use tracing::{info, warn};

use crate::api::StatsFetcher;
use crate::data::{Player, UnitCatalog};
use crate::stats::extract_stat_totals;

pub mod export_csv;
pub mod pacing;

pub use export_csv::{write_unit_stats, write_unit_stats_csv, ExportError, UnitStatsRow};
pub use pacing::RequestPacer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeOutcome {
    /// In iteration order: players in file order, units by ascending code.
    pub rows: Vec<UnitStatsRow>,
    pub succeeded: usize,
    pub failed: usize,
}

/// Query every (player, unit) pair once. A failed fetch is logged and recorded
/// as a no-data row; nothing here aborts the run.
pub async fn run_scrape<F: StatsFetcher>(
    fetcher: &F,
    catalog: &UnitCatalog,
    players: &[Player],
    pacer: &RequestPacer,
) -> ScrapeOutcome {
    let total = players.len() * catalog.len();
    let mut outcome = ScrapeOutcome {
        rows: Vec::with_capacity(total),
        ..ScrapeOutcome::default()
    };
    let mut step = 0usize;

    for player in players {
        for (&unit_code, unit_name) in catalog {
            step += 1;
            match fetcher
                .fetch_character_details(&player.account_id, unit_code)
                .await
            {
                Ok(response) => {
                    let totals = extract_stat_totals(Some(&response));
                    let row = UnitStatsRow::with_totals(&player.name, unit_name, &totals);
                    info!(
                        "[{step}/{total}] {} - {}: ok (atk={}, elem={}, ammo={})",
                        player.name,
                        unit_name,
                        row.attack.as_deref().unwrap_or_default(),
                        row.elemental_damage.as_deref().unwrap_or_default(),
                        row.max_ammo.as_deref().unwrap_or_default(),
                    );
                    outcome.rows.push(row);
                    outcome.succeeded += 1;
                }
                Err(err) => {
                    warn!(
                        "[{step}/{total}] {} - {} (code {unit_code}): no data: {err}",
                        player.name, unit_name
                    );
                    outcome.rows.push(UnitStatsRow::no_data(&player.name, unit_name));
                    outcome.failed += 1;
                }
            }
            pacer.pause().await;
        }
    }

    outcome
}
