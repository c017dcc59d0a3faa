//! Text emission utilities
//!
//! Purely syntactic line assembly shared by every generator. Content logic
//! decides *what* lines to emit; this module only joins and indents them, so
//! generated artifacts stay uniform and diff-stable.

mod writer;

pub use writer::LineWriter;
