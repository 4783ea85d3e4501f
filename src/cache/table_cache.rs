use log::{debug, info};
use std::sync::{Arc, OnceLock};

use crate::config::DataSettings;
use crate::dataset::{self, RatingTable};
use crate::errors::LoadError;

/// Memoized flat rating table.
///
/// The first successful load is kept for the lifetime of the cache and handed
/// out as a shared `Arc`. A failed load leaves the cache empty so the next
/// call tries again.
pub struct TableCache {
    table: OnceLock<Arc<RatingTable>>,
}

impl TableCache {
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    pub fn get_or_load(&self, settings: &DataSettings) -> Result<Arc<RatingTable>, LoadError> {
        self.get_or_load_with(|| dataset::load_table(settings))
    }

    pub fn get_or_load_with<F>(&self, load: F) -> Result<Arc<RatingTable>, LoadError>
    where
        F: FnOnce() -> Result<RatingTable, LoadError>,
    {
        if let Some(table) = self.table.get() {
            debug!("Reusing cached rating table ({} rows)", table.len());
            return Ok(Arc::clone(table));
        }

        let loaded = Arc::new(load()?);
        info!("Cached rating table with {} rows", loaded.len());

        // Another thread may have won the race; keep whichever landed first.
        let table = self.table.get_or_init(|| loaded);
        Ok(Arc::clone(table))
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: TableCache = TableCache::new();

/// Process-wide cache; its table is loaded on first access and kept until restart.
pub fn shared_cache() -> &'static TableCache {
    &SHARED
}
