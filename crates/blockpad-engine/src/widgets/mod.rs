//! # Widgets
//!
//! Renderable substitutes for spans of source text.
//!
//! - **`block_ref`**: inline token for `[[block:id]]` with a resolved label;
//!   intercepts input so a double activation can open the block
//! - **`table`**: block element for a pipe table region; passes input through
//!
//! Widgets compare by content, so a rebuild that produces an unchanged widget
//! yields an equal value and the host can keep the element it already drew.

pub mod block_ref;
pub mod table;

pub use block_ref::{BlockLabels, BlockOpener, BlockRefWidget, NoLabels};
pub use table::TableWidget;

/// Input gestures a host forwards to an intercepting widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    Activate,
    DoubleActivate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    BlockRef(BlockRefWidget),
    Table(TableWidget),
}

impl Widget {
    pub fn intercepts_events(&self) -> bool {
        match self {
            Widget::BlockRef(_) => true,
            Widget::Table(_) => false,
        }
    }

    /// Dispatches a gesture; returns true when the widget consumed it.
    pub fn handle_event(&self, event: WidgetEvent, opener: &mut dyn BlockOpener) -> bool {
        match (self, event) {
            (Widget::BlockRef(w), WidgetEvent::DoubleActivate) => {
                w.open(opener);
                true
            }
            (Widget::BlockRef(_), WidgetEvent::Activate) => true,
            (Widget::Table(_), _) => false,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Widget::BlockRef(w) => w.to_html(),
            Widget::Table(w) => w.to_html(),
        }
    }

    /// Plain-text rendering, one string per display line.
    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            Widget::BlockRef(w) => vec![w.plain_text()],
            Widget::Table(w) => w.plain_lines(),
        }
    }
}

impl From<BlockRefWidget> for Widget {
    fn from(w: BlockRefWidget) -> Self {
        Widget::BlockRef(w)
    }
}

impl From<TableWidget> for Widget {
    fn from(w: TableWidget) -> Self {
        Widget::Table(w)
    }
}
