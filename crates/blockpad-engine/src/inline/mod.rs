//! # Inline Pattern Matching
//!
//! Per-line detection of inline markup over the raw line text.
//!
//! ## Passes
//!
//! Detectors run in a fixed precedence order: inline code, links, block
//! references, heading marker, bold, italic, strikethrough, alignment
//! directives. Every pass re-reads the unmodified line; passes do not
//! suppress one another, except that an italic match overlapping a bold
//! match on the same line is discarded.
//!
//! Overlaps between categories are deliberately left in the output. The
//! rendering layer layers overlapping styles and coalesces duplicate hides.
//!
//! ## Modules
//!
//! - **`types`**: `ConstructMatch` enum with full and sub-spans
//! - **`kinds`**: delimiter constants owned per construct
//! - **`cursor`**: `Cursor` for byte-by-byte matching with position tracking
//! - **`matcher`**: `match_line()` entry point with `try_match_*` helpers

pub mod cursor;
pub mod kinds;
pub mod matcher;
pub mod types;

pub use matcher::match_line;
pub use types::ConstructMatch;
