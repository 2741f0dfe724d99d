//! Structure-preserving limiters for mixed HTML/plain text.
//!
//! Three budgets are supported:
//! - paragraphs (`<p>` elements or blank-line separated blocks)
//! - lines within a paragraph (`<br>` tags or newlines)
//! - visible characters, where tags count for nothing and each character
//!   reference counts as one
//!
//! The character limiter reuses the tokenizer's text/markup split so it can
//! trim text while passing every tag through.

mod chars;
mod line;
mod paragraph;
pub mod visible;

pub use chars::{char_limit, char_limit_with};
pub use line::line_limit;
pub use paragraph::paragraph_limit;
pub use visible::{truncate_visible, visible_length, VisibleUnits};
