//! Per-view driver that rebuilds decorations when the host reports a change.
//!
//! The host owns the document, the viewport and the selection. It calls
//! [`LivePreview::update`] after each serialized input event with the flags
//! describing what changed; the preview keeps only the last decoration set
//! and the pre-scan of the last document revision.

use crate::assemble::{DecorationSet, build_decorations};
use crate::document::DocumentText;
use crate::options::EngineOptions;
use crate::scan::RegionCache;
use crate::selection::Selection;
use crate::span::Span;
use crate::widgets::BlockLabels;

/// What changed since the last rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    pub doc_changed: bool,
    pub viewport_changed: bool,
    pub selection_changed: bool,
}

impl ViewUpdate {
    pub const ALL: ViewUpdate = ViewUpdate {
        doc_changed: true,
        viewport_changed: true,
        selection_changed: true,
    };

    pub fn document() -> Self {
        Self {
            doc_changed: true,
            ..Self::default()
        }
    }

    pub fn viewport() -> Self {
        Self {
            viewport_changed: true,
            ..Self::default()
        }
    }

    pub fn selection() -> Self {
        Self {
            selection_changed: true,
            ..Self::default()
        }
    }

    pub fn needs_rebuild(&self) -> bool {
        self.doc_changed || self.viewport_changed || self.selection_changed
    }
}

/// Snapshot of the host view handed to one rebuild.
#[derive(Debug)]
pub struct ViewState<'a, D: ?Sized> {
    pub doc: &'a D,
    /// Host revision counter; bumped on every edit.
    pub revision: u64,
    pub visible: &'a [Span],
    pub selection: &'a Selection,
}

impl<D: ?Sized> Clone for ViewState<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for ViewState<'_, D> {}

#[derive(Debug)]
pub struct LivePreview {
    options: EngineOptions,
    regions: RegionCache,
    decorations: DecorationSet,
}

impl LivePreview {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            regions: RegionCache::new(options.prescan_limit),
            options,
            decorations: DecorationSet::default(),
        }
    }

    /// The set produced by the most recent rebuild.
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Rebuilds if `update` reports any change. Returns whether it did.
    pub fn update<D: DocumentText + ?Sized>(
        &mut self,
        update: ViewUpdate,
        view: ViewState<'_, D>,
        labels: &dyn BlockLabels,
    ) -> bool {
        if !update.needs_rebuild() {
            return false;
        }
        if update.doc_changed {
            self.regions.invalidate();
        }
        log::debug!(
            "rebuild at revision {} (doc: {}, viewport: {}, selection: {})",
            view.revision,
            update.doc_changed,
            update.viewport_changed,
            update.selection_changed
        );
        self.rebuild(view, labels);
        true
    }

    /// Unconditionally rebuilds from `view`.
    pub fn rebuild<D: DocumentText + ?Sized>(
        &mut self,
        view: ViewState<'_, D>,
        labels: &dyn BlockLabels,
    ) -> &DecorationSet {
        let regions = self.regions.regions(view.revision, view.doc);
        self.decorations = build_decorations(
            view.doc,
            regions,
            view.visible,
            view.selection,
            labels,
            &self.options,
        );
        &self.decorations
    }
}

impl Default for LivePreview {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
