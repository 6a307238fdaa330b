use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use blockpad_engine::BlockLabels;

/// Resolves block labels from the config map, then from block files.
///
/// A block `id` stored on disk lives at `<blocks_path>/<id>.md`; its label is
/// the first non-empty line with any heading marker removed.
#[derive(Debug, Default)]
pub struct BlockStoreLabels {
    configured: BTreeMap<String, String>,
    blocks_path: Option<PathBuf>,
}

impl BlockStoreLabels {
    pub fn new(configured: BTreeMap<String, String>, blocks_path: Option<PathBuf>) -> Self {
        Self {
            configured,
            blocks_path,
        }
    }

    /// Path of the file backing block `id`, if a blocks folder is configured.
    pub fn block_file(&self, id: &str) -> Option<PathBuf> {
        self.blocks_path
            .as_deref()
            .map(|folder| folder.join(format!("{id}.md")))
    }

    fn label_from_file(path: &Path) -> Option<String> {
        let content = std::fs::read_to_string(path).ok()?;
        let first = content.lines().map(str::trim).find(|l| !l.is_empty())?;
        let label = first.trim_start_matches('#').trim();
        (!label.is_empty()).then(|| label.to_string())
    }
}

impl BlockLabels for BlockStoreLabels {
    fn resolve_block_label(&self, id: &str) -> Option<String> {
        if let Some(label) = self.configured.get(id) {
            return Some(label.clone());
        }
        let path = self.block_file(id)?;
        let label = Self::label_from_file(&path);
        if label.is_none() {
            log::debug!("no label for block {id} at {}", path.display());
        }
        label
    }
}
