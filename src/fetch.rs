//! Network fetch of the published sheet and the process-wide rounds cache.
//!
//! The sheet is fetched at most once per process; concurrent first callers
//! block on the same in-flight load, so exactly one network call happens.
//! A failed load leaves the cache unset and the next call retries.

use lazy_static::lazy_static;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{LeagueError, Result};
use crate::sheet::{parse_csv, strip_empty_columns, RawGrid};

/// Published CSV export of the league's rounds sheet.
pub const ROUNDS_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT5ptE4nm4MeUEjrBtVLg-l19mlLfk_Ng89kPC0OM1JMskfk0CuFhnJeDpS1l7RxbKQPE8L053QT2lt/pub?gid=620210277&single=true&output=csv";

/// Fetch CSV text from a published-sheet URL.
///
/// Sends `Cache-Control: no-store` so intermediaries don't serve a stale
/// export. Non-success status surfaces as [`LeagueError::CsvLoad`].
pub fn fetch_csv(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client
        .get(url)
        .header("Cache-Control", "no-store")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("sheet fetch returned {status}");
        return Err(LeagueError::CsvLoad(status.to_string()));
    }

    Ok(response.text()?)
}

/// Process-wide cache for the fetched-and-normalized rounds grid.
///
/// Lifecycle: empty, then load-in-flight (the lock is held for the whole
/// load, so later callers wait on the same result), then populated until
/// [`invalidate`](Self::invalidate) or process exit.
pub struct RoundsCache {
    slot: Mutex<Option<Arc<RawGrid>>>,
}

impl RoundsCache {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached grid, running `loader` only when the slot is
    /// empty. An `Err` from the loader propagates and leaves the slot
    /// empty, so a later call retries.
    pub fn load_with<F>(&self, loader: F) -> Result<Arc<RawGrid>>
    where
        F: FnOnce() -> Result<RawGrid>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(grid) = slot.as_ref() {
            log::debug!("rounds cache hit");
            return Ok(Arc::clone(grid));
        }

        let grid = Arc::new(loader()?);
        *slot = Some(Arc::clone(&grid));
        Ok(grid)
    }

    /// Clear the cached grid so the next load fetches again.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());
        *slot = None;
    }
}

impl Default for RoundsCache {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref ROUNDS_CACHE: RoundsCache = RoundsCache::new();
}

/// Load the rounds grid from `url` through the process-wide cache,
/// parsing and pruning empty columns on the way in.
pub fn load_rounds(url: &str) -> Result<Arc<RawGrid>> {
    ROUNDS_CACHE.load_with(|| {
        log::info!("fetching rounds sheet from {url}");
        let text = fetch_csv(url)?;
        Ok(strip_empty_columns(parse_csv(&text)))
    })
}

/// Drop the process-wide cached grid.
pub fn invalidate_rounds() {
    ROUNDS_CACHE.invalidate();
}
