use std::collections::{BTreeMap, HashMap};

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Resolves a block id to a human-readable label.
pub trait BlockLabels {
    /// Returns `None` when the id is unknown.
    fn resolve_block_label(&self, id: &str) -> Option<String>;
}

/// A label provider that knows no blocks; every widget shows its raw id.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLabels;

impl BlockLabels for NoLabels {
    fn resolve_block_label(&self, _id: &str) -> Option<String> {
        None
    }
}

impl BlockLabels for HashMap<String, String> {
    fn resolve_block_label(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl BlockLabels for BTreeMap<String, String> {
    fn resolve_block_label(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl<F> BlockLabels for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_block_label(&self, id: &str) -> Option<String> {
        self(id)
    }
}

/// Receives navigation requests from block-reference widgets.
pub trait BlockOpener {
    fn open_block(&mut self, id: &str);
}

impl<F> BlockOpener for F
where
    F: FnMut(&str),
{
    fn open_block(&mut self, id: &str) {
        self(id)
    }
}

/// Inline substitute for a `[[block:id]]` token.
#[derive(Debug, Clone)]
pub struct BlockRefWidget {
    id: String,
    label: String,
    icon: String,
}

impl BlockRefWidget {
    /// Resolves the label through `labels`, falling back to the raw id.
    pub fn resolve(id: &str, labels: &dyn BlockLabels, icon: &str) -> Self {
        let label = labels
            .resolve_block_label(id)
            .unwrap_or_else(|| id.to_string());
        Self {
            id: id.to_string(),
            label,
            icon: icon.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Requests navigation to the referenced block.
    pub fn open(&self, opener: &mut dyn BlockOpener) {
        log::debug!("opening block {}", self.id);
        opener.open_block(&self.id);
    }

    /// Icon and label as the host displays them in plain text.
    pub fn plain_text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }

    pub fn to_html(&self) -> String {
        format!(
            "<span class=\"md-block-ref\" data-block-id=\"{id}\"><span class=\"md-block-ref-icon\">{icon}</span><span class=\"md-block-ref-label\">{label}</span></span>",
            id = encode_double_quoted_attribute(&self.id),
            icon = encode_text(&self.icon),
            label = encode_text(&self.label),
        )
    }
}

/// Widgets with the same id and label are interchangeable across rebuilds.
impl PartialEq for BlockRefWidget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.label == other.label
    }
}

impl Eq for BlockRefWidget {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_label() {
        let labels = HashMap::from([("intro".to_string(), "Introduction".to_string())]);
        let w = BlockRefWidget::resolve("intro", &labels, "⧉");
        assert_eq!(w.label(), "Introduction");
        assert_eq!(w.plain_text(), "⧉ Introduction");
    }

    #[test]
    fn unknown_id_falls_back_to_id() {
        let w = BlockRefWidget::resolve("missing", &NoLabels, "⧉");
        assert_eq!(w.label(), "missing");
    }

    #[test]
    fn closure_provider() {
        let labels = |id: &str| (id == "a").then(|| "Alpha".to_string());
        assert_eq!(BlockRefWidget::resolve("a", &labels, "").label(), "Alpha");
        assert_eq!(BlockRefWidget::resolve("b", &labels, "").label(), "b");
    }

    #[test]
    fn equality_ignores_icon() {
        let a = BlockRefWidget::resolve("x", &NoLabels, "⧉");
        let b = BlockRefWidget::resolve("x", &NoLabels, "#");
        assert_eq!(a, b);
        assert_ne!(a, BlockRefWidget::resolve("y", &NoLabels, "⧉"));
    }

    #[test]
    fn open_invokes_callback_with_id() {
        let mut opened = vec![];
        let mut opener = |id: &str| opened.push(id.to_string());
        BlockRefWidget::resolve("intro", &NoLabels, "⧉").open(&mut opener);
        assert_eq!(opened, vec!["intro".to_string()]);
    }

    #[test]
    fn html_escapes_label() {
        let labels = BTreeMap::from([("x".to_string(), "<b>&".to_string())]);
        let html = BlockRefWidget::resolve("x", &labels, "⧉").to_html();
        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(html.contains("data-block-id=\"x\""));
    }
}
