/// Host-tunable engine knobs, usually populated from the editor config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Byte bound for the block pre-scan. Regions starting at or past this
    /// offset are not detected; `None` scans the whole document.
    pub prescan_limit: Option<usize>,
    /// Icon shown before a block reference's label.
    pub block_icon: String,
}

impl EngineOptions {
    pub const DEFAULT_BLOCK_ICON: &'static str = "⧉";
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            prescan_limit: None,
            block_icon: Self::DEFAULT_BLOCK_ICON.to_string(),
        }
    }
}
