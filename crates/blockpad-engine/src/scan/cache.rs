use crate::document::DocumentText;

use super::{BlockRegions, scan_regions};

/// Memoised pre-scan results keyed by the host's document revision.
///
/// The host bumps its revision counter on every edit; a rebuild triggered
/// only by scrolling or selection reuses the regions from the last scan.
#[derive(Debug, Default)]
pub struct RegionCache {
    limit: Option<usize>,
    entry: Option<(u64, BlockRegions)>,
}

impl RegionCache {
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit, entry: None }
    }

    /// Returns regions for `revision`, scanning `doc` only on a miss.
    pub fn regions<D: DocumentText + ?Sized>(&mut self, revision: u64, doc: &D) -> &BlockRegions {
        if let Some((rev, _)) = &self.entry
            && *rev != revision
        {
            self.entry = None;
        }
        let limit = self.limit;
        let (_, regions) = self.entry.get_or_insert_with(|| {
            log::trace!("region cache miss at revision {revision}");
            (revision, scan_regions(&doc.text(), limit))
        });
        regions
    }

    /// Drops the cached scan so the next lookup rescans.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
