//! # blockpad-engine
//!
//! Live markdown annotation: given a document snapshot, the visible ranges
//! and the selection, produce the ordered decorations (hide, style, widget)
//! a host view draws over the unmodified text.
//!
//! ## Modules
//!
//! - **`scan`**: whole-document pre-scan for fenced code and pipe tables
//! - **`inline`**: per-line construct detection in fixed precedence
//! - **`selection`**: selection model and the reveal predicate
//! - **`widgets`**: block reference and table substitutes
//! - **`assemble`**: visible-line driven assembly of the decoration set
//! - **`live`**: per-view rebuild driver with region caching
//! - **`overlay`**: applies a decoration set to plain text

pub mod assemble;
pub mod decoration;
pub mod document;
pub mod inline;
pub mod live;
pub mod options;
pub mod overlay;
pub mod scan;
pub mod selection;
pub mod span;
pub mod widgets;

// Re-export key types for easier usage
pub use assemble::{DecorationSet, annotate, build_decorations};
pub use decoration::{Decoration, StyleScope};
pub use document::{DocumentText, Line};
pub use live::{LivePreview, ViewState, ViewUpdate};
pub use options::EngineOptions;
pub use overlay::{Segment, render_segments, render_visible_text};
pub use scan::{BlockRegions, RegionCache, scan_regions};
pub use selection::{Selection, SelectionRange, should_reveal};
pub use span::Span;
pub use widgets::{BlockLabels, BlockOpener, BlockRefWidget, NoLabels, TableWidget, Widget, WidgetEvent};
