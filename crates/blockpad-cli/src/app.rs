use std::path::PathBuf;

use blockpad_engine::{
    Decoration, DecorationSet, DocumentText, EngineOptions, LivePreview, Selection, Span,
    ViewState, ViewUpdate, WidgetEvent,
};
use xi_rope::Rope;

use crate::labels::BlockStoreLabels;

/// Read-only live preview of one markdown file.
///
/// The caret is a (line, column) position; columns are byte columns within
/// the line. Every movement reports the `ViewUpdate` it caused so the preview
/// is rebuilt only when something relevant changed.
pub struct App {
    pub path: PathBuf,
    doc: Rope,
    revision: u64,
    caret_line: usize,
    caret_column: usize,
    scroll: usize,
    height: usize,
    live: LivePreview,
    live_preview: bool,
    labels: BlockStoreLabels,
    pub status: String,
}

impl App {
    pub fn new(
        path: PathBuf,
        text: &str,
        options: EngineOptions,
        live_preview: bool,
        labels: BlockStoreLabels,
    ) -> Self {
        let mut app = Self {
            path,
            doc: Rope::from(text),
            revision: 1,
            caret_line: 0,
            caret_column: 0,
            scroll: 0,
            height: 1,
            live: LivePreview::new(options),
            live_preview,
            labels,
            status: String::new(),
        };
        app.refresh(ViewUpdate::ALL);
        app
    }

    pub fn doc(&self) -> &Rope {
        &self.doc
    }

    pub fn caret_line(&self) -> usize {
        self.caret_line
    }

    pub fn caret_column(&self) -> usize {
        self.caret_column
    }

    #[cfg(test)]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn line_count(&self) -> usize {
        self.doc.line_count()
    }

    pub fn decorations(&self) -> &DecorationSet {
        self.live.decorations()
    }

    pub fn live_preview(&self) -> bool {
        self.live_preview
    }

    /// Byte offset of the caret.
    pub fn caret_offset(&self) -> usize {
        self.doc
            .line(self.caret_line)
            .map_or(0, |line| line.span.start + self.caret_column.min(line.span.len()))
    }

    /// Document range covered by the viewport lines.
    pub fn visible_range(&self) -> Span {
        let last = (self.scroll + self.height.max(1) - 1).min(self.line_count() - 1);
        let start = self.doc.line(self.scroll).map_or(0, |l| l.span.start);
        let end = self.doc.line(last).map_or(start, |l| l.span.end);
        Span::new(start, end)
    }

    pub fn refresh(&mut self, update: ViewUpdate) {
        if !self.live_preview {
            return;
        }
        let visible = [self.visible_range()];
        let selection = Selection::caret(self.caret_offset());
        self.live.update(
            update,
            ViewState {
                doc: &self.doc,
                revision: self.revision,
                visible: &visible,
                selection: &selection,
            },
            &self.labels,
        );
    }

    pub fn resize(&mut self, height: usize) {
        let height = height.max(1);
        if height != self.height {
            self.height = height;
            self.keep_caret_visible();
            self.refresh(ViewUpdate::viewport());
        }
    }

    pub fn move_down(&mut self) {
        self.move_to_line(self.caret_line + 1);
    }

    pub fn move_up(&mut self) {
        self.move_to_line(self.caret_line.saturating_sub(1));
    }

    pub fn move_left(&mut self) {
        let column = self.clamped_column().saturating_sub(1);
        self.move_to_column(column);
    }

    pub fn move_right(&mut self) {
        let column = self.clamped_column() + 1;
        self.move_to_column(column);
    }

    pub fn page_down(&mut self) {
        self.move_to_line(self.caret_line + self.height);
    }

    pub fn page_up(&mut self) {
        self.move_to_line(self.caret_line.saturating_sub(self.height));
    }

    /// Sends a double activation to the first block widget on the caret line.
    pub fn open_block_on_caret_line(&mut self) {
        let Some(line) = self.doc.line(self.caret_line) else {
            return;
        };
        let widget = self.live.decorations().iter().find_map(|d| match d {
            Decoration::Widget { span, widget }
                if widget.intercepts_events()
                    && line.span.start <= span.start
                    && span.start <= line.span.end =>
            {
                Some(widget)
            }
            _ => None,
        });

        let Some(widget) = widget else {
            self.status = "No block reference on this line".to_string();
            return;
        };

        let mut opened: Option<String> = None;
        let mut opener = |id: &str| opened = Some(id.to_string());
        widget.handle_event(WidgetEvent::DoubleActivate, &mut opener);

        if let Some(id) = opened {
            self.status = match self.labels.block_file(&id) {
                Some(path) => format!("Open block {id} ({})", path.display()),
                None => format!("Open block {id}"),
            };
        }
    }

    fn clamped_column(&self) -> usize {
        self.doc
            .line(self.caret_line)
            .map_or(0, |l| self.caret_column.min(l.span.len()))
    }

    fn move_to_column(&mut self, column: usize) {
        let Some(line) = self.doc.line(self.caret_line) else {
            return;
        };
        let mut column = column.min(line.span.len());
        while !line.text.is_char_boundary(column) {
            column -= 1;
        }
        if column != self.caret_column {
            self.caret_column = column;
            self.refresh(ViewUpdate::selection());
        }
    }

    fn move_to_line(&mut self, line: usize) {
        let line = line.min(self.line_count() - 1);
        if line == self.caret_line {
            return;
        }
        self.caret_line = line;
        let scrolled = self.keep_caret_visible();
        self.refresh(ViewUpdate {
            selection_changed: true,
            viewport_changed: scrolled,
            ..ViewUpdate::default()
        });
    }

    /// Scrolls so the caret line is on screen; returns whether it scrolled.
    fn keep_caret_visible(&mut self) -> bool {
        let before = self.scroll;
        if self.caret_line < self.scroll {
            self.scroll = self.caret_line;
        } else if self.caret_line >= self.scroll + self.height {
            self.scroll = self.caret_line + 1 - self.height;
        }
        self.scroll != before
    }
}
