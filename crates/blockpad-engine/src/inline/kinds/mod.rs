//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`Link`**: `[text](url)` bracket and paren delimiters
//! - **`BlockRef`**: `OPEN = b"[[block:"`, `CLOSE = b"]]"`, id alphabet
//! - **`Heading`**: `#` run of one to six at line start
//! - **`Bold`** / **`Italic`**: `**` and `*`
//! - **`Strikethrough`**: `~~`
//! - **`AlignDirective`**: `[align-left]`, `[align-center]`, `[align-right]`
//!
//! All delimiter constants live here, not scattered in matcher code.

pub mod align;
pub mod block_ref;
pub mod code_span;
pub mod emphasis;
pub mod heading;
pub mod link;
pub mod strikethrough;

pub use align::{AlignDirective, TextAlign};
pub use block_ref::BlockRef;
pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use heading::Heading;
pub use link::Link;
pub use strikethrough::Strikethrough;
