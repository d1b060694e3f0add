//! Fixed pause after every upstream call.

use std::time::Duration;

use tokio::time::sleep;

/// Sleeps for `spacing` after each request, whatever its outcome. Requests are
/// issued one at a time, so two request starts are never closer than `spacing`.
#[derive(Debug, Clone, Copy)]
pub struct RequestPacer {
    spacing: Duration,
}

impl RequestPacer {
    pub fn new(spacing: Duration) -> Self {
        Self { spacing }
    }

    pub fn spacing(&self) -> Duration {
        self.spacing
    }

    pub async fn pause(&self) {
        if !self.spacing.is_zero() {
            sleep(self.spacing).await;
        }
    }
}
